mod app;
mod domain;
mod input;
mod ops;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{CommandFactory, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{JsonStore, TaskStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "tarea")]
#[command(about = "A minimal terminal to-do list with JSON storage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task; the remaining words become its title
    Add {
        /// Task title, joined with spaces
        text: Vec<String>,
    },
    /// Print the numbered task list
    List,
    /// Mark task N (1-based, as shown by `list`) as completed
    Done {
        /// Task number
        #[arg(allow_hyphen_values = true)]
        index: Option<String>,
    },
    /// Delete task N (1-based, as shown by `list`)
    Delete {
        /// Task number
        #[arg(allow_hyphen_values = true)]
        index: Option<String>,
    },
    /// Any other word prints usage
    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { text }) => {
            let mut store = JsonStore::in_current_dir()?;
            run_add(&mut store, &text.join(" "));
            Ok(())
        }
        Some(Commands::List) => {
            let store = JsonStore::in_current_dir()?;
            run_list(&store);
            Ok(())
        }
        Some(Commands::Done { index }) => {
            let mut store = JsonStore::in_current_dir()?;
            run_done(&mut store, index.as_deref());
            Ok(())
        }
        Some(Commands::Delete { index }) => {
            let mut store = JsonStore::in_current_dir()?;
            run_delete(&mut store, index.as_deref());
            Ok(())
        }
        Some(Commands::Other(_)) => {
            Cli::command().print_help()?;
            Ok(())
        }
        None => {
            // Run the interactive TUI
            run_tui()
        }
    }
}

/// Parse a 1-based index argument into a 0-based position
fn parse_index(arg: Option<&str>) -> Option<usize> {
    arg?.parse::<usize>().ok()?.checked_sub(1)
}

fn run_add(store: &mut dyn TaskStore, text: &str) {
    match ops::add(store, text, "") {
        Ok(task) => println!("Added: {}", task.title),
        Err(e) => eprintln!("{}", e),
    }
}

fn run_list(store: &dyn TaskStore) {
    let tasks = ops::list(store);
    if tasks.is_empty() {
        println!("no pending tasks");
        return;
    }

    let width = tasks.len().to_string().len();
    for (idx, task) in tasks.iter().enumerate() {
        let mut line = format!("{:>width$}. {} {}", idx + 1, task.checkbox(), task.title);
        if !task.state.is_empty() {
            line.push_str(&format!(" ({})", task.state));
        }
        println!("{}", line);

        // Description goes on its own line, aligned under the title
        if !task.description.is_empty() {
            println!("{:indent$}{}", "", task.description, indent = width + 6);
        }
    }
}

fn run_done(store: &mut dyn TaskStore, arg: Option<&str>) {
    let index = match parse_index(arg) {
        Some(index) => index,
        None => {
            eprintln!("invalid index");
            return;
        }
    };

    // A finished task stays finished; done never reopens
    if let Some(task) = ops::list(store).get(index) {
        if task.completed {
            println!("Already completed: {}", task.title);
            return;
        }
    }

    match ops::toggle(store, index) {
        Ok(task) => println!("Completed: {}", task.title),
        Err(e) => eprintln!("{}", e),
    }
}

fn run_delete(store: &mut dyn TaskStore, arg: Option<&str>) {
    let index = match parse_index(arg) {
        Some(index) => index,
        None => {
            eprintln!("invalid index");
            return;
        }
    };

    match ops::delete(store, index) {
        Ok(task) => println!("Deleted: {}", task.title),
        Err(e) => eprintln!("{}", e),
    }
}

fn run_tui() -> Result<()> {
    let store = JsonStore::in_home()?;
    let mut app = AppState::new(Box::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next key; every mutation saves before the redraw
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                let should_quit = input::handle_key(app, key)?;
                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
