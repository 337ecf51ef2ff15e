use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use marquee_core::{AppConfig, Deck};
use marquee_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action, MouseOutcome},
    keymap::Keymap,
    theme::Theme,
    widgets::{ControlsWidget, DotsWidget, StatusBarWidget, TrackWidget},
};

pub fn run(
    mut config: AppConfig,
    deck_path: Option<PathBuf>,
    interval_ms: Option<u64>,
) -> Result<()> {
    if let Some(ms) = interval_ms {
        config.carousel.interval_ms = ms;
    }

    let deck_path = deck_path.unwrap_or_else(|| config.deck_path());
    let deck = Deck::load(&deck_path)?;
    info!("loaded {} slides from {}", deck.len(), deck_path.display());

    let config = Arc::new(config);

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Marquee")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = Theme::from_config(&config.ui.theme);

    // Create app state
    let mut app = App::new(deck, config.clone(), theme, Instant::now());

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.motion.animation_fps);

    // Track if we need high frame rate for smooth slide translation
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        let now = Instant::now();
        let position = app.update_motion(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: track + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // The track region doubles as the hover hit area
            app.layout.region = main_layout[0];

            TrackWidget::render(frame, main_layout[0], &app, position);
            ControlsWidget::render(frame, main_layout[0], &mut app);
            DotsWidget::render(frame, main_layout[0], &mut app);
            StatusBarWidget::render(frame, main_layout[1], &app, now);
        })?;

        // Handle events (use faster tick rate while a slide translation runs)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &keymap);
                    handle_action(&mut app, action, Instant::now());
                }
                AppEvent::Mouse(mouse) => match handle_mouse_event(mouse, &app.layout) {
                    MouseOutcome::Hover(inside) => app.set_hover(inside),
                    MouseOutcome::Click(action) => handle_action(&mut app, action, Instant::now()),
                    MouseOutcome::None => {}
                },
                AppEvent::Resize(_, _) => {
                    // Hit rects are recalculated on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        // Poll the schedule every iteration, not just on idle ticks, so
        // a sustained stream of input events cannot delay auto-advance
        app.on_tick(Instant::now());

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_motion_update();

        if app.should_quit {
            break;
        }
    }

    // Stop the schedule before tearing down the terminal
    app.auto.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::NextSlide => {
            app.next_slide(now);
        }
        Action::PrevSlide => {
            app.prev_slide(now);
        }
        Action::JumpTo(index) => {
            app.jump_to(index, now);
        }
        Action::TogglePause => {
            app.toggle_pause();
        }
        Action::OpenLink => {
            let link = app.current_link().map(str::to_string);
            match link {
                Some(url) => {
                    if let Err(e) = open::that(&url) {
                        app.set_status(format!("Failed to open link: {}", e));
                    } else {
                        app.set_status(format!("Opening: {}", url));
                    }
                }
                None => {
                    app.set_status("No link on this slide");
                }
            }
        }
        Action::None => {}
    }
}
