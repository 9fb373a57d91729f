//! # Messages
//!
//! Everything that can happen in baseview becomes a `Message`.
//! User presses Enter? That's `Message::KeyPressed(Key::Enter)`.
//! A fetch finishes? That's `Message::CollectionsLoaded { .. }`.
//!
//! The `update()` function takes the current state and a message, mutates
//! the state, and returns the follow-up commands to launch. No side
//! effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Message  →  update()  →  New State + Commands
//! ```
//!
//! Every launched operation resolves to exactly one completion message
//! (`*Loaded`, `BackupCompleted`, or `OperationFailed`): never zero,
//! never more than one. The executor in the `tui` module upholds that
//! contract; this module depends on it.

use log::debug;

use crate::backend::{CollectionSummary, LogEntry, RecordSummary, SettingsSnapshot};
use crate::core::menu::{MenuAction, MENU_ENTRIES};
use crate::core::state::{App, ViewState};

/// Keys the engine reacts to, already normalized by the input thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Up,
    Down,
    Backspace,
    Char(char),
    CtrlC,
}

/// The closed set of events the engine consumes, in strict arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    KeyPressed(Key),
    Resized(u16, u16),
    TimerTick,
    CollectionsLoaded {
        generation: u64,
        collections: Vec<CollectionSummary>,
    },
    RecordsLoaded {
        generation: u64,
        records: Vec<RecordSummary>,
    },
    LogsLoaded {
        generation: u64,
        logs: Vec<LogEntry>,
    },
    SettingsLoaded {
        generation: u64,
        settings: SettingsSnapshot,
    },
    BackupCompleted,
    OperationFailed(String),
}

/// Deferred work the runtime loop schedules off the synchronous path.
/// Fetches carry the generation they were launched with so stale
/// completions can be told apart from current ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchCollections { generation: u64 },
    FetchRecords { generation: u64, collection: String },
    FetchLogs { generation: u64 },
    FetchSettings { generation: u64 },
    CreateBackup { destination: String },
    Quit,
}

/// The state transition function. Pure over `App`: mutates the snapshot,
/// returns zero or more commands, performs no I/O.
pub fn update(app: &mut App, message: Message) -> Vec<Command> {
    match message {
        Message::KeyPressed(key) => handle_key(app, key),
        Message::Resized(w, h) => {
            app.size = (w, h);
            Vec::new()
        }
        Message::TimerTick => {
            // The input thread re-arms the timer by emitting the next tick;
            // the engine only advances the busy-indicator frame.
            app.spinner_tick = app.spinner_tick.wrapping_add(1);
            Vec::new()
        }
        Message::CollectionsLoaded {
            generation,
            collections,
        } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            if generation < app.seq.collections {
                debug!("dropping stale collections fetch (gen {generation})");
                return Vec::new();
            }
            app.collections_cursor = if collections.is_empty() { None } else { Some(0) };
            app.collections = collections;
            app.view = ViewState::CollectionsList;
            app.error = None;
            Vec::new()
        }
        Message::RecordsLoaded { generation, records } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            if generation < app.seq.records {
                debug!("dropping stale records fetch (gen {generation})");
                return Vec::new();
            }
            app.records_cursor = if records.is_empty() { None } else { Some(0) };
            app.records = records;
            app.view = ViewState::RecordsList;
            app.input.clear();
            app.error = None;
            Vec::new()
        }
        Message::LogsLoaded { generation, logs } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            if generation < app.seq.logs {
                debug!("dropping stale logs fetch (gen {generation})");
                return Vec::new();
            }
            app.logs = logs;
            app.view = ViewState::Logs;
            app.error = None;
            Vec::new()
        }
        Message::SettingsLoaded {
            generation,
            settings,
        } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            if generation < app.seq.settings {
                debug!("dropping stale settings fetch (gen {generation})");
                return Vec::new();
            }
            app.settings = Some(settings);
            app.view = ViewState::Settings;
            app.error = None;
            Vec::new()
        }
        Message::BackupCompleted => {
            app.in_flight = app.in_flight.saturating_sub(1);
            app.view = ViewState::BackupDone;
            app.error = None;
            Vec::new()
        }
        Message::OperationFailed(message) => {
            // The active view keeps its content; the error rides along as
            // an overlay until the user escapes to the menu or a later
            // operation succeeds.
            app.in_flight = app.in_flight.saturating_sub(1);
            app.error = Some(message);
            Vec::new()
        }
    }
}

fn handle_key(app: &mut App, key: Key) -> Vec<Command> {
    match key {
        Key::CtrlC => vec![Command::Quit],
        Key::Char('q') if app.view != ViewState::SelectCollectionPrompt => {
            vec![Command::Quit]
        }
        Key::Enter => handle_enter(app),
        Key::Escape => {
            if app.view != ViewState::Menu {
                app.view = ViewState::Menu;
                app.input.clear();
                app.error = None;
            }
            Vec::new()
        }
        Key::Up => {
            move_cursor(app, -1);
            Vec::new()
        }
        Key::Down => {
            move_cursor(app, 1);
            Vec::new()
        }
        Key::Backspace => {
            if app.view == ViewState::SelectCollectionPrompt {
                app.input.pop();
            }
            Vec::new()
        }
        Key::Char('/') if app.view == ViewState::CollectionsList => {
            app.view = ViewState::SelectCollectionPrompt;
            Vec::new()
        }
        Key::Char(c) => {
            if app.view == ViewState::SelectCollectionPrompt {
                app.input.push(c);
            }
            Vec::new()
        }
    }
}

fn handle_enter(app: &mut App) -> Vec<Command> {
    match app.view {
        ViewState::Menu => match app.selected_menu_action() {
            // "Records" drills in via the collection list, same as the
            // Collections entry; record fetches come from a selected row.
            MenuAction::Collections | MenuAction::Records => {
                app.seq.collections += 1;
                app.in_flight += 1;
                vec![Command::FetchCollections {
                    generation: app.seq.collections,
                }]
            }
            MenuAction::Settings => {
                app.seq.settings += 1;
                app.in_flight += 1;
                vec![Command::FetchSettings {
                    generation: app.seq.settings,
                }]
            }
            MenuAction::Backups => {
                app.in_flight += 1;
                vec![Command::CreateBackup {
                    destination: app.backup_destination.clone(),
                }]
            }
            MenuAction::Logs => {
                app.seq.logs += 1;
                app.in_flight += 1;
                vec![Command::FetchLogs {
                    generation: app.seq.logs,
                }]
            }
            MenuAction::Exit => vec![Command::Quit],
        },
        ViewState::CollectionsList => match app.selected_collection() {
            Some(collection) => {
                let name = collection.name.clone();
                app.seq.records += 1;
                app.in_flight += 1;
                vec![Command::FetchRecords {
                    generation: app.seq.records,
                    collection: name,
                }]
            }
            // Nothing highlighted (empty list): no command, no transition.
            None => Vec::new(),
        },
        ViewState::SelectCollectionPrompt => {
            if app.input.is_empty() {
                Vec::new()
            } else {
                app.seq.records += 1;
                app.in_flight += 1;
                vec![Command::FetchRecords {
                    generation: app.seq.records,
                    collection: app.input.clone(),
                }]
            }
        }
        _ => Vec::new(),
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    match app.view {
        ViewState::Menu => {
            app.menu_cursor = step(app.menu_cursor, delta, MENU_ENTRIES.len());
        }
        ViewState::CollectionsList => {
            app.collections_cursor =
                step_opt(app.collections_cursor, delta, app.collections.len());
        }
        ViewState::RecordsList => {
            app.records_cursor = step_opt(app.records_cursor, delta, app.records.len());
        }
        _ => {}
    }
}

fn step(cursor: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as i64 + delta;
    next.clamp(0, len as i64 - 1) as usize
}

fn step_opt(cursor: Option<usize>, delta: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(step(cursor.unwrap_or(0), delta, len))
}
