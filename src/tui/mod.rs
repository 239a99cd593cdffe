//! TUI (Text User Interface) for browsing a classification page in the terminal.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;

use crate::core::config::Config;
use crate::core::database::Database;
use crate::core::page::Page;

use app::App;
use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the browser loop on `page` until the user quits.
/// `data_file` is the command-line override the database was loaded from, if any.
pub fn run(
    page: Page,
    database: Database,
    data_file: Option<PathBuf>,
    config: Config,
) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(page, database, data_file, config);

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        let result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handlers::handle_key(key, &mut app)
            }
            Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
            _ => HandleResult::Continue,
        };
        if result == HandleResult::Break {
            break;
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
