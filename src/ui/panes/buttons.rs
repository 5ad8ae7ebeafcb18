//! Command button row

use crate::ui::layout::{contains, Command, SceneLayout};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the button row
pub struct ButtonBarData {
    pub len: usize,
    pub highlight_max: bool,
    pub highlight_min: bool,
}

/// Render the four command buttons
pub fn render_button_bar(
    frame: &mut Frame,
    layout: &SceneLayout,
    data: &ButtonBarData,
    hovered: Option<(u16, u16)>,
) {
    for command in Command::ALL {
        let rect = layout.button_rect(command);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let is_hovered = hovered.is_some_and(|(col, row)| contains(rect, col, row));
        let border_style = if is_hovered {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let body_style = match command {
            Command::Remove if data.len == 0 => Style::default()
                .bg(DEFAULT_THEME.button_disabled)
                .fg(DEFAULT_THEME.comment),
            Command::HighlightMax if data.highlight_max => Style::default()
                .bg(DEFAULT_THEME.max)
                .fg(DEFAULT_THEME.button_text),
            Command::HighlightMin if data.highlight_min => Style::default()
                .bg(DEFAULT_THEME.min)
                .fg(DEFAULT_THEME.button_text),
            _ => Style::default()
                .bg(DEFAULT_THEME.button)
                .fg(DEFAULT_THEME.button_text),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(button_label(command, data))
            .block(block)
            .style(body_style)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, rect);
    }
}

/// Caption of a button for the current pile state
pub fn button_label(command: Command, data: &ButtonBarData) -> &'static str {
    match command {
        Command::Add if data.len == 0 => "Create the pile",
        Command::Add => "Add Element",
        Command::Remove if data.len == 1 => "Delete the pile",
        Command::Remove => "Remove Element",
        Command::HighlightMax if data.highlight_max => "Unhighlight Max",
        Command::HighlightMax => "Highlight Max",
        Command::HighlightMin if data.highlight_min => "Unhighlight Min",
        Command::HighlightMin => "Highlight Min",
    }
}
