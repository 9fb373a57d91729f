//! The fixed set of main-menu entries.
//!
//! Each entry carries a [`MenuAction`] so the reducer can match
//! exhaustively instead of comparing title strings.

/// What selecting a menu entry means to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Collections,
    Records,
    Settings,
    Backups,
    Logs,
    Exit,
}

/// One row of the main menu. Static, defined once at startup.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub action: MenuAction,
}

pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        title: "Collections",
        description: "Manage database collections",
        action: MenuAction::Collections,
    },
    MenuEntry {
        title: "Records",
        description: "View and edit records",
        action: MenuAction::Records,
    },
    MenuEntry {
        title: "Settings",
        description: "Application settings",
        action: MenuAction::Settings,
    },
    MenuEntry {
        title: "Backups",
        description: "Backup and restore",
        action: MenuAction::Backups,
    },
    MenuEntry {
        title: "Logs",
        description: "View application logs",
        action: MenuAction::Logs,
    },
    MenuEntry {
        title: "Exit",
        description: "Exit the application",
        action: MenuAction::Exit,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_six_entries() {
        assert_eq!(MENU_ENTRIES.len(), 6);
        assert_eq!(MENU_ENTRIES[0].title, "Collections");
        assert_eq!(MENU_ENTRIES[5].action, MenuAction::Exit);
    }
}
