//! Value entry box, drawn on top of the scene while entering

use crate::ui::input::PendingInput;
use crate::ui::layout::SceneLayout;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the entry box over the scene
pub fn render_entry_box(frame: &mut Frame, layout: &SceneLayout, input: &PendingInput) {
    let rect = layout.entry;
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" Value ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled(
            input.text().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().fg(DEFAULT_THEME.secondary)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(
            Style::default()
                .bg(DEFAULT_THEME.button)
                .fg(DEFAULT_THEME.button_text),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
