//! # TUI Adapter & Runtime Loop
//!
//! The only module that knows about ratatui and crossterm. It owns the
//! `App`, pumps messages off a single channel, and drives the engine:
//!
//! ```text
//! input thread ─┐
//!               ├─→ mpsc ─→ recv → update() → launch commands → draw
//! launched ops ─┘
//! ```
//!
//! The loop suspends only in `recv`; `update` and `draw` run synchronously
//! and sequentially, so no two dispatches ever overlap. Launched operations
//! run on tokio tasks and report back exclusively through the channel,
//! exactly one completion message each.

pub mod event;
mod ui;

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::backend::{Backend, BackendError};
use crate::core::config::ResolvedConfig;
use crate::core::message::{Command, Message, update};
use crate::core::state::App;

/// User-facing text for a fetch against a store that has no tables yet.
pub const UNINITIALIZED_HELP: &str = "Database not initialized. Please run the backend server \
     with migrations first to set up the database.";

pub fn run(backend: Arc<dyn Backend>, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.backup_destination.clone());
    let mut terminal = ratatui::init();
    let (tx, rx) = event::spawn_input_thread(Duration::from_millis(config.tick_millis));
    info!("runtime loop started (backend: {})", backend.name());

    let result = pump(&mut app, &mut terminal, backend, tx, rx);

    ratatui::restore();
    result
}

fn pump(
    app: &mut App,
    terminal: &mut ratatui::DefaultTerminal,
    backend: Arc<dyn Backend>,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // The input thread only stops when its sender side is gone, so a
        // closed channel means the terminal went away.
        let Ok(message) = rx.recv() else {
            warn!("message channel closed, shutting down");
            return Ok(());
        };

        let commands = update(app, message);
        let mut quit = false;
        for command in commands {
            if matches!(command, Command::Quit) {
                quit = true;
            } else {
                launch_command(command, backend.clone(), tx.clone());
            }
        }
        if quit {
            info!("quit requested, leaving runtime loop");
            return Ok(());
        }
    }
}

/// Launches one asynchronous operation. Each spawned task holds only the
/// backend handle, its captured inputs, and the channel sender; it resolves
/// to exactly one completion message.
pub fn launch_command(command: Command, backend: Arc<dyn Backend>, tx: mpsc::Sender<Message>) {
    debug!("launching {command:?}");
    match command {
        Command::FetchCollections { generation } => {
            tokio::spawn(async move {
                let message = match backend.list_collections().await {
                    Ok(collections) => Message::CollectionsLoaded {
                        generation,
                        collections,
                    },
                    Err(BackendError::Uninitialized) => {
                        Message::OperationFailed(UNINITIALIZED_HELP.to_string())
                    }
                    Err(e) => Message::OperationFailed(e.to_string()),
                };
                deliver(&tx, message);
            });
        }
        Command::FetchRecords {
            generation,
            collection,
        } => {
            tokio::spawn(async move {
                let message = match backend.list_records(&collection).await {
                    Ok(records) => Message::RecordsLoaded { generation, records },
                    Err(e) => Message::OperationFailed(e.to_string()),
                };
                deliver(&tx, message);
            });
        }
        Command::FetchLogs { generation } => {
            tokio::spawn(async move {
                let message = match backend.list_logs().await {
                    Ok(logs) => Message::LogsLoaded { generation, logs },
                    Err(e) => Message::OperationFailed(e.to_string()),
                };
                deliver(&tx, message);
            });
        }
        Command::FetchSettings { generation } => {
            tokio::spawn(async move {
                // Settings have no modeled failure path; a backend error
                // degrades to the default snapshot.
                let settings = match backend.current_settings().await {
                    Ok(settings) => settings,
                    Err(e) => {
                        warn!("settings fetch degraded to defaults: {e}");
                        Default::default()
                    }
                };
                deliver(
                    &tx,
                    Message::SettingsLoaded {
                        generation,
                        settings,
                    },
                );
            });
        }
        Command::CreateBackup { destination } => {
            tokio::spawn(async move {
                let message = match backend.create_backup(&destination).await {
                    Ok(()) => Message::BackupCompleted,
                    Err(e) => Message::OperationFailed(e.to_string()),
                };
                deliver(&tx, message);
            });
        }
        // Quit never reaches the executor; the loop consumes it.
        Command::Quit => {}
    }
}

fn deliver(tx: &mpsc::Sender<Message>, message: Message) {
    if tx.send(message).is_err() {
        warn!("completion dropped: engine receiver closed");
    }
}
