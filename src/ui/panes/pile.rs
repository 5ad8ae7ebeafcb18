//! Pile rendering
//!
//! Draws each stack element as a filled bar, bottom element lowest, with its
//! value centered. When a highlight flag is on, every element equal to the
//! current max (or min) takes the max (or min) color.
//!
//! A single element can be both the max and the min. In that case the max
//! color is used.

use crate::memory::BoundedStack;
use crate::ui::layout::{contains, SceneLayout};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the pile
pub struct PileRenderData<'a> {
    pub stack: &'a BoundedStack,
    pub highlight_max: bool,
    pub highlight_min: bool,
}

/// How an element is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Max,
    Min,
}

impl Highlight {
    fn color(self) -> Color {
        match self {
            Highlight::None => DEFAULT_THEME.element,
            Highlight::Max => DEFAULT_THEME.max,
            Highlight::Min => DEFAULT_THEME.min,
        }
    }
}

/// Render the pile elements
pub fn render_pile_pane(
    frame: &mut Frame,
    layout: &SceneLayout,
    data: &PileRenderData,
    hovered: Option<(u16, u16)>,
) {
    if data.stack.is_empty() {
        render_empty_hint(frame, layout.pile);
        return;
    }

    for (index, rect) in layout.elements.iter().enumerate() {
        let Some(value) = data.stack.get(index) else {
            break;
        };

        let is_hovered = hovered.is_some_and(|(col, row)| contains(*rect, col, row));
        let width = rect.width as usize;
        let text = if is_hovered && width > 2 {
            format!("▸{:^w$}◂", value, w = width - 2)
        } else {
            format!("{:^w$}", value, w = width)
        };

        let mut style = Style::default()
            .bg(element_highlight(value, data).color())
            .fg(DEFAULT_THEME.element_text);
        if is_hovered {
            style = style.add_modifier(Modifier::BOLD);
        }

        frame.render_widget(Paragraph::new(text).style(style), *rect);
    }
}

/// Pick the highlight for a value, given the pile's current extrema
pub fn element_highlight(value: i32, data: &PileRenderData) -> Highlight {
    if data.highlight_max && data.stack.max() == Some(value) {
        Highlight::Max
    } else if data.highlight_min && data.stack.min() == Some(value) {
        Highlight::Min
    } else {
        Highlight::None
    }
}

fn render_empty_hint(frame: &mut Frame, pile: Rect) {
    if pile.height == 0 {
        return;
    }
    let row = Rect::new(pile.x, pile.y + pile.height / 2, pile.width, 1);
    let hint = Paragraph::new("(empty pile)")
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .alignment(Alignment::Center);
    frame.render_widget(hint, row);
}
