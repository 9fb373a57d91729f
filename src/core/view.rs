//! Pure projection of [`App`] into the text frame the terminal shows.
//!
//! `render` never mutates state and never performs I/O; the `tui` module
//! puts the returned string on screen. Formats for the settings and logs
//! views are load-bearing: tests and operators both read them.

use crate::core::menu::MENU_ENTRIES;
use crate::core::state::{App, ViewState};

/// Busy-indicator frames, advanced by the timer tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const BACK_HINT: &str = "Press Esc to go back.";

pub fn render(app: &App) -> String {
    let mut frame = match app.view {
        ViewState::Menu => render_menu(app),
        ViewState::CollectionsList => render_collections(app),
        ViewState::RecordsList => render_records(app),
        ViewState::Settings => render_settings(app),
        ViewState::Logs => render_logs(app),
        ViewState::BackupDone => render_backup_done(),
        ViewState::SelectCollectionPrompt => render_prompt(app),
    };

    if app.in_flight > 0 {
        let spinner = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
        frame.push_str(&format!("\n{spinner} Working...\n"));
    }
    if let Some(err) = &app.error {
        frame.push_str(&format!("\nError: {err}\n"));
    }
    frame
}

fn render_menu(app: &App) -> String {
    let mut s = String::from("What would you like to do?\n\n");
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        let marker = if i == app.menu_cursor { '>' } else { ' ' };
        s.push_str(&format!(
            "{marker} {:<12} {}\n",
            entry.title, entry.description
        ));
    }
    s.push_str("\nPress q to quit.\n");
    s
}

fn render_collections(app: &App) -> String {
    if app.collections.is_empty() {
        return format!("No collections found. {BACK_HINT}\n");
    }
    let mut s = String::from("Collections:\n\n");
    for (i, col) in app.collections.iter().enumerate() {
        let marker = if app.collections_cursor == Some(i) { '>' } else { ' ' };
        s.push_str(&format!("{marker} {} ({})\n", col.name, col.kind));
    }
    s.push_str("\nPress Enter to view records, / to type a name, Esc to go back.\n");
    s
}

fn render_records(app: &App) -> String {
    if app.records.is_empty() {
        return format!("No records found. {BACK_HINT}\n");
    }
    let mut s = String::from("Records:\n\n");
    for (i, rec) in app.records.iter().enumerate() {
        let marker = if app.records_cursor == Some(i) { '>' } else { ' ' };
        s.push_str(&format!("{marker} {}\n", rec.id));
    }
    s.push_str(&format!("\n{BACK_HINT}\n"));
    s
}

fn render_settings(app: &App) -> String {
    let Some(settings) = &app.settings else {
        return String::from("Loading settings...\n");
    };
    let mut s = String::from("Settings:\n\n");
    s.push_str(&format!("App Name: {}\n", settings.app_name));
    s.push_str(&format!("App URL: {}\n", settings.app_url));
    s.push_str(&format!("Hide Controls: {}\n", settings.hide_controls));
    s.push_str(&format!("\n{BACK_HINT}\n"));
    s
}

fn render_logs(app: &App) -> String {
    if app.logs.is_empty() {
        return format!("No logs found. {BACK_HINT}\n");
    }
    let mut s = String::from("Logs:\n\n");
    for (i, log) in app.logs.iter().enumerate() {
        s.push_str(&format!("{}. Level {}: {}\n", i + 1, log.level, log.message));
    }
    s.push_str(&format!("\n{BACK_HINT}\n"));
    s
}

fn render_backup_done() -> String {
    format!("Backup created successfully!\n\n{BACK_HINT}\n")
}

fn render_prompt(app: &App) -> String {
    format!(
        "Enter a collection name:\n\n> {}_\n\nPress Enter to load records, Esc to go back.\n",
        app.input
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SettingsSnapshot;
    use crate::core::state::ViewState;
    use crate::test_support::{collection, log_entry, record, test_app};

    #[test]
    fn test_menu_highlights_cursor_row() {
        let mut app = test_app();
        app.menu_cursor = 1;
        let frame = render(&app);
        assert!(frame.contains("> Records"));
        assert!(frame.contains("  Collections"));
        assert!(frame.contains("Press q to quit."));
    }

    #[test]
    fn test_settings_placeholder_before_load() {
        let mut app = test_app();
        app.view = ViewState::Settings;
        assert!(render(&app).contains("Loading settings..."));
    }

    #[test]
    fn test_settings_fixed_order_lines() {
        let mut app = test_app();
        app.view = ViewState::Settings;
        app.settings = Some(SettingsSnapshot {
            app_name: "TestApp".to_string(),
            app_url: "http://test.com".to_string(),
            hide_controls: true,
        });
        let frame = render(&app);
        assert!(frame.contains("App Name: TestApp"));
        assert!(frame.contains("App URL: http://test.com"));
        assert!(frame.contains("Hide Controls: true"));
        let name = frame.find("App Name").unwrap();
        let url = frame.find("App URL").unwrap();
        let hide = frame.find("Hide Controls").unwrap();
        assert!(name < url && url < hide);
    }

    #[test]
    fn test_logs_numbered_listing() {
        let mut app = test_app();
        app.view = ViewState::Logs;
        app.logs = vec![log_entry(1, "Test log"), log_entry(3, "Another")];
        let frame = render(&app);
        assert!(frame.contains("1. Level 1: Test log"));
        assert!(frame.contains("2. Level 3: Another"));
    }

    #[test]
    fn test_logs_empty_placeholder() {
        let mut app = test_app();
        app.view = ViewState::Logs;
        assert!(render(&app).contains("No logs found. Press Esc to go back."));
    }

    #[test]
    fn test_collections_rows_and_highlight() {
        let mut app = test_app();
        app.view = ViewState::CollectionsList;
        app.collections = vec![collection("posts", "base"), collection("users", "auth")];
        app.collections_cursor = Some(1);
        let frame = render(&app);
        assert!(frame.contains("  posts (base)"));
        assert!(frame.contains("> users (auth)"));
    }

    #[test]
    fn test_empty_collections_is_placeholder_not_error() {
        let mut app = test_app();
        app.view = ViewState::CollectionsList;
        let frame = render(&app);
        assert!(frame.contains("No collections found."));
        assert!(!frame.contains("Error:"));
    }

    #[test]
    fn test_records_listing() {
        let mut app = test_app();
        app.view = ViewState::RecordsList;
        app.records = vec![record("abc123")];
        app.records_cursor = Some(0);
        assert!(render(&app).contains("> abc123"));
    }

    #[test]
    fn test_error_overlay_trails_every_view() {
        let mut app = test_app();
        app.error = Some("disk full".to_string());
        assert!(render(&app).contains("Error: disk full"));
        app.view = ViewState::Logs;
        assert!(render(&app).contains("Error: disk full"));
    }

    #[test]
    fn test_busy_indicator_while_in_flight() {
        let mut app = test_app();
        app.in_flight = 1;
        assert!(render(&app).contains("Working..."));
        app.in_flight = 0;
        assert!(!render(&app).contains("Working..."));
    }

    #[test]
    fn test_prompt_shows_buffer() {
        let mut app = test_app();
        app.view = ViewState::SelectCollectionPrompt;
        app.input = "posts".to_string();
        let frame = render(&app);
        assert!(frame.contains("Enter a collection name:"));
        assert!(frame.contains("> posts_"));
    }

    #[test]
    fn test_backup_done_confirmation() {
        let mut app = test_app();
        app.view = ViewState::BackupDone;
        assert!(render(&app).contains("Backup created successfully!"));
    }
}
