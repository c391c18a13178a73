use crate::config::Config;
use crate::events::analytics::{Event as AnalyticsEvent, Handler as AnalyticsEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::CustomLogger;
use crate::state::State;
use crate::ui::Theme;
use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

pub type AnalyticsEventSender = std::sync::mpsc::Sender<AnalyticsEvent>;
type AnalyticsEventReceiver = std::sync::mpsc::Receiver<AnalyticsEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration.
    /// Returns the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let setup_start = Instant::now();

        // Install the state-capturing logger before anything logs.
        // Entries travel over a channel and are drained into state on
        // tick events, so logging never contends for the state lock.
        let logger = CustomLogger::new();
        let (log_tx, log_rx) = std::sync::mpsc::channel::<String>();
        logger.set_log_callback(Box::new(move |entry| {
            let _ = log_tx.send(entry);
        }));
        log::set_boxed_logger(Box::new(logger))
            .map_err(|e| anyhow!("Failed to install logger: {}", e))?;
        log::set_max_level(LevelFilter::Debug);

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<AnalyticsEvent>();
        let analytics_sender = if config.analytics_enabled {
            Some(tx.clone())
        } else {
            None
        };
        let theme = Theme::from_name(&config.theme_name);
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                analytics_sender,
                config.reduced_motion,
                theme,
            ))),
            config,
        };
        drop(tx);

        if app.config.analytics_enabled {
            app.start_analytics(rx);
        }

        {
            let mut state = app.state.lock().await;
            state.set_log_receiver(log_rx);
            let setup = Instant::now();
            state.initialize();
            state.dispatch_analytics(AnalyticsEvent::CustomMetric {
                name: "app_setup_time",
                value: setup.elapsed().as_millis() as f64,
            });
            state.dispatch_analytics(AnalyticsEvent::CustomMetric {
                name: "total_load_time",
                value: setup_start.elapsed().as_millis() as f64,
            });
        }

        app.start_ui().await?;

        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to drain analytics events into the sink.
    ///
    fn start_analytics(&self, receiver: AnalyticsEventReceiver) {
        debug!("Creating new thread for analytics events...");
        std::thread::spawn(move || {
            let handler = AnalyticsEventHandler::new();
            while let Ok(event) = receiver.recv() {
                handler.handle(event);
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before
    /// starting the render loop on the main thread. Return the result
    /// following an exit request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
