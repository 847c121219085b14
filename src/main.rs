//! Platform catalogue TUI - terminal browser for the Digital Transformation
//! Management Platform catalogue.
//!
//! Main entry point and event loop for the application.

mod app;
mod catalog;
mod config;
mod filter;
mod logging;
mod ui;

use anyhow::Context;
use app::{App, UiMode};
use catalog::Catalog;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use filter::FilterEngine;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info, warn};

/// Event poll timeout; also bounds how late a debounced query is applied.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts file logging, loads the catalogue, and runs
/// the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_config_path()?;
    let config = Config::load(Some(&config_path))?;
    let _log_guard = logging::init(&config)?;
    info!(debounce_ms = config.debounce_ms, "starting");

    if !config_path.exists() {
        match config.save(Some(&config_path)) {
            Ok(()) => info!(path = %config_path.display(), "wrote default config"),
            Err(e) => warn!(error = %e, "could not write default config"),
        }
    }

    let catalog = match config.catalog_file_path()? {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => Catalog::builtin(),
    };
    info!(categories = ?catalog.names(), "catalog ready");

    let mut engine = FilterEngine::new(catalog, config.debounce())?;
    if let Some(name) = &config.default_category
        && let Err(e) = engine.set_active_category(name)
    {
        warn!(error = %e, "default category not found, using first category");
    }

    let mut app = App::new(engine);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    info!("shutting down");
    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Returns
/// * `Rect` - Area of the record list, for mouse hit-testing
fn render_ui(f: &mut ratatui::Frame, app: &App) -> Rect {
    let areas = ui::layout(f.area(), app);

    ui::render_tabs(app, areas.tabs, f.buffer_mut());
    ui::render_search(app, areas.search, f.buffer_mut());
    ui::render_filters(app, areas.filters, f.buffer_mut());
    ui::render_list(app, areas.list, f.buffer_mut());
    if app.show_detail {
        ui::render_detail(app, areas.detail, f.buffer_mut());
    }

    ui::render_status(app, areas.status, f.buffer_mut());

    areas.list
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Details
/// Applies debounced search input, renders, and dispatches keyboard and
/// mouse events until the user quits.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    loop {
        app.tick();

        terminal.draw(|f| {
            list_area = render_ui(f, app);
        })?;

        // Non-blocking poll keeps debounced input flowing while idle
        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, list_area),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `bool` - True if the application should quit
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Tab => app.next_category(),
            KeyCode::BackTab => app.previous_category(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    app.select_category(digit as usize - 1);
                }
            }
            KeyCode::Enter => app.toggle_detail(),
            KeyCode::Char('/') => {
                app.clear_status();
                app.mode = UiMode::Search;
            }
            KeyCode::Char('f') => {
                app.clear_status();
                app.mode = UiMode::Filters;
            }
            KeyCode::Char('c') => app.clear_all(),
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.mode = UiMode::List,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        },
        UiMode::Filters => match key.code {
            KeyCode::Esc | KeyCode::Char('f') => app.mode = UiMode::List,
            KeyCode::Left | KeyCode::Char('h') => app.cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => app.cursor_right(),
            KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
            KeyCode::Char(' ') => app.toggle_at_cursor(),
            KeyCode::Char('c') => app.clear_all(),
            _ => {}
        },
    }

    false
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `list_area` - Area of the record list widget
///
/// # Details
/// Scrolling moves the selection; a left click selects the record under
/// the pointer.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, list_area: Rect) {
    if app.mode != UiMode::List {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            // Skip the top border
            if mouse.column >= list_area.x
                && mouse.column < list_area.x + list_area.width
                && mouse.row > list_area.y
                && mouse.row < list_area.y + list_area.height
            {
                let click_y = mouse.row - list_area.y - 1;
                let offset = ui::list::scroll_offset(
                    app.selected_index,
                    app.engine.visible_len(),
                    list_area,
                );
                let index = offset + (click_y / ui::list::LINES_PER_RECORD) as usize;
                app.select(index);
            }
        }
        _ => {}
    }
}
