//! The ratatui draw layer: puts the engine's rendered frame on screen.
//!
//! All layout decisions live here; the text itself comes from the pure
//! `core::view::render` projection.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, ViewState};
use crate::core::view::render;

pub fn draw(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, body_area] = layout.areas(frame.area());

    let title = format!("baseview | {}", view_label(app.view));
    frame.render_widget(Span::raw(title), title_area);

    let body = Paragraph::new(render(app)).block(Block::bordered());
    frame.render_widget(body, body_area);
}

fn view_label(view: ViewState) -> &'static str {
    match view {
        ViewState::Menu => "menu",
        ViewState::CollectionsList => "collections",
        ViewState::RecordsList => "records",
        ViewState::Settings => "settings",
        ViewState::Logs => "logs",
        ViewState::BackupDone => "backup",
        ViewState::SelectCollectionPrompt => "select collection",
    }
}
