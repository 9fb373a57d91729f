//! # Application State
//!
//! All engine state for baseview. This module contains domain state only -
//! no TUI-specific types. Terminal handling lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: ViewState               // the single active view
//! ├── collections / records / logs  // cached entity snapshots
//! ├── settings: Option<Snapshot>    // absent until first load
//! ├── error: Option<String>         // pending error overlay
//! ├── input: String                 // prompt buffer
//! ├── *_cursor                      // per-list selection
//! ├── in_flight / spinner_tick      // busy indicator
//! └── seq: FetchSeq                 // per-slot fetch generations
//! ```
//!
//! State changes only happen through `update(state, message)` in
//! message.rs. This keeps things predictable, so no surprise mutations.

use crate::backend::{CollectionSummary, LogEntry, RecordSummary, SettingsSnapshot};
use crate::core::menu::{MenuAction, MENU_ENTRIES};

/// The named screens of the console. Exactly one is active at any time;
/// only the reducer transitions between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Menu,
    CollectionsList,
    RecordsList,
    Settings,
    Logs,
    BackupDone,
    SelectCollectionPrompt,
}

/// Monotonic generation per entity slot. A fetch launched with generation
/// `n` is stale once the slot has moved past `n`, and its completion is
/// dropped so the most recently requested data wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSeq {
    pub collections: u64,
    pub records: u64,
    pub logs: u64,
    pub settings: u64,
}

pub struct App {
    pub view: ViewState,
    pub collections: Vec<CollectionSummary>,
    pub records: Vec<RecordSummary>,
    pub logs: Vec<LogEntry>,
    pub settings: Option<SettingsSnapshot>,
    pub error: Option<String>,
    /// Free-text buffer, used only while the collection prompt is active.
    pub input: String,
    pub menu_cursor: usize,
    pub collections_cursor: Option<usize>,
    pub records_cursor: Option<usize>,
    /// Last reported terminal size (cols, rows).
    pub size: (u16, u16),
    /// Number of launched operations without a completion yet.
    pub in_flight: u32,
    /// Advances on every timer tick; drives the busy indicator frame.
    pub spinner_tick: usize,
    pub seq: FetchSeq,
    /// Backup file name handed to the backend, from config.
    pub backup_destination: String,
}

impl App {
    pub fn new(backup_destination: String) -> Self {
        Self {
            view: ViewState::Menu,
            collections: Vec::new(),
            records: Vec::new(),
            logs: Vec::new(),
            settings: None,
            error: None,
            input: String::new(),
            menu_cursor: 0,
            collections_cursor: None,
            records_cursor: None,
            size: (0, 0),
            in_flight: 0,
            spinner_tick: 0,
            seq: FetchSeq::default(),
            backup_destination,
        }
    }

    /// The action of the highlighted menu row.
    pub fn selected_menu_action(&self) -> MenuAction {
        MENU_ENTRIES[self.menu_cursor.min(MENU_ENTRIES.len() - 1)].action
    }

    /// The highlighted collection row, if any.
    pub fn selected_collection(&self) -> Option<&CollectionSummary> {
        self.collections_cursor.and_then(|i| self.collections.get(i))
    }
}
