//! Screen geometry for the pile scene
//!
//! Every frame the scene is laid out from scratch with [`SceneLayout::compute`]:
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │ Add Element  │  │Remove Element│  │Highlight Max │  │Highlight Min │   button row
//! └──────────────┘  └──────────────┘  └──────────────┘  └──────────────┘
//!                           [   9   ]                                       element 2
//!
//!                           [   3   ]                                       element 1
//!
//!                           [   5   ]                                       element 0
//!
//!  status bar
//! ```
//!
//! The same layout drives both drawing and mouse hit-testing, so a click
//! always lands on what is visible.

use ratatui::layout::Rect;

pub const BUTTON_WIDTH: u16 = 18;
pub const BUTTON_HEIGHT: u16 = 3;
pub const BUTTON_GAP: u16 = 2;

pub const ELEMENT_WIDTH: u16 = 14;
pub const ELEMENT_HEIGHT: u16 = 1;
pub const ELEMENT_GAP: u16 = 1;

pub const INPUT_BOX_WIDTH: u16 = 20;
pub const INPUT_BOX_HEIGHT: u16 = 3;

const STATUS_HEIGHT: u16 = 1;

/// A command issued from the button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    HighlightMax,
    HighlightMin,
}

impl Command {
    /// Buttons from left to right
    pub const ALL: [Command; 4] = [
        Command::Add,
        Command::Remove,
        Command::HighlightMax,
        Command::HighlightMin,
    ];
}

/// Rectangles of one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    pub buttons: [(Command, Rect); 4],
    pub pile: Rect,
    pub status: Rect,
    /// Element rectangles indexed like the stack (0 = bottom). Elements that
    /// do not fit above the status bar are left out.
    pub elements: Vec<Rect>,
    /// Where the entry box is drawn while a value is being typed
    pub entry: Rect,
}

impl SceneLayout {
    /// Lay out the scene for a stack of `len` elements inside `area`
    pub fn compute(area: Rect, len: usize) -> Self {
        let button_height = BUTTON_HEIGHT.min(area.height);
        let row_width = BUTTON_WIDTH * 4 + BUTTON_GAP * 3;
        let row_x = area.x + area.width.saturating_sub(row_width) / 2;

        let buttons = Command::ALL.map(|command| {
            let slot = command as u16;
            let rect = Rect::new(
                row_x + slot * (BUTTON_WIDTH + BUTTON_GAP),
                area.y,
                BUTTON_WIDTH,
                button_height,
            );
            (command, rect.intersection(area))
        });

        let status_height = STATUS_HEIGHT.min(area.height.saturating_sub(button_height));
        let status = Rect::new(
            area.x,
            area.bottom() - status_height,
            area.width,
            status_height,
        );

        let pile_y = area.y + button_height;
        let pile = Rect::new(area.x, pile_y, area.width, status.y.saturating_sub(pile_y));

        let element_width = ELEMENT_WIDTH.min(pile.width);
        let element_x = pile.x + (pile.width - element_width) / 2;
        let stride = u32::from(ELEMENT_HEIGHT + ELEMENT_GAP);

        let elements = (0..len)
            .map_while(|index| {
                let offset = (index as u32 + 1) * stride;
                if offset > u32::from(pile.height) {
                    return None;
                }
                Some(Rect::new(
                    element_x,
                    pile.bottom() - offset as u16,
                    element_width,
                    ELEMENT_HEIGHT,
                ))
            })
            .collect();

        SceneLayout {
            buttons,
            pile,
            status,
            elements,
            entry: input_box(area),
        }
    }

    /// The button under a cell, if any. The leftmost hit wins.
    pub fn button_at(&self, column: u16, row: u16) -> Option<Command> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(command, _)| *command)
    }

    /// Index of the element under a cell, if any
    pub fn element_at(&self, column: u16, row: u16) -> Option<usize> {
        self.elements
            .iter()
            .position(|rect| contains(*rect, column, row))
    }

    pub fn button_rect(&self, command: Command) -> Rect {
        self.buttons[command as usize].1
    }
}

/// The entry box, centered over the whole area
pub fn input_box(area: Rect) -> Rect {
    let width = INPUT_BOX_WIDTH.min(area.width);
    let height = INPUT_BOX_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Check whether a cell lies inside a rectangle
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_button_row_is_centered() {
        let layout = SceneLayout::compute(SCREEN, 0);

        let xs: Vec<u16> = layout.buttons.iter().map(|(_, r)| r.x).collect();
        assert_eq!(xs, vec![1, 21, 41, 61]);
        assert!(layout.buttons.iter().all(|(_, r)| r.y == 0 && r.height == 3));
    }

    #[test]
    fn test_regions() {
        let layout = SceneLayout::compute(SCREEN, 0);

        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.pile, Rect::new(0, 3, 80, 20));
        assert!(layout.elements.is_empty());
        assert_eq!(layout.entry, Rect::new(30, 10, 20, 3));
    }

    #[test]
    fn test_elements_stack_bottom_up() {
        let layout = SceneLayout::compute(SCREEN, 10);

        assert_eq!(layout.elements.len(), 10);
        assert_eq!(layout.elements[0], Rect::new(33, 21, 14, 1));
        assert_eq!(layout.elements[1].y, 19);
        assert_eq!(layout.elements[9].y, 3);
    }

    #[test]
    fn test_elements_clipped_in_short_area() {
        let layout = SceneLayout::compute(Rect::new(0, 0, 80, 10), 10);

        // pile spans rows 3..9, room for three elements
        assert_eq!(layout.elements.len(), 3);
        assert_eq!(layout.elements[2].y, 3);
    }

    #[test]
    fn test_button_at() {
        let layout = SceneLayout::compute(SCREEN, 0);

        assert_eq!(layout.button_at(1, 0), Some(Command::Add));
        assert_eq!(layout.button_at(18, 2), Some(Command::Add));
        assert_eq!(layout.button_at(19, 1), None); // gap
        assert_eq!(layout.button_at(21, 1), Some(Command::Remove));
        assert_eq!(layout.button_at(50, 1), Some(Command::HighlightMax));
        assert_eq!(layout.button_at(78, 1), Some(Command::HighlightMin));
        assert_eq!(layout.button_at(79, 1), None);
        assert_eq!(layout.button_at(5, 3), None);
    }

    #[test]
    fn test_element_at() {
        let layout = SceneLayout::compute(SCREEN, 3);

        assert_eq!(layout.element_at(33, 21), Some(0));
        assert_eq!(layout.element_at(46, 19), Some(1));
        assert_eq!(layout.element_at(40, 17), Some(2));
        assert_eq!(layout.element_at(40, 20), None); // gap row
        assert_eq!(layout.element_at(47, 21), None);
        assert_eq!(layout.element_at(40, 15), None);
    }

    #[test]
    fn test_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        let layout = SceneLayout::compute(area, 1);

        assert_eq!(layout.button_rect(Command::Add), Rect::new(11, 5, 18, 3));
        assert_eq!(layout.elements[0], Rect::new(43, 26, 14, 1));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let layout = SceneLayout::compute(Rect::new(0, 0, 5, 2), 10);

        assert!(layout.elements.is_empty());
        assert_eq!(layout.pile.height, 0);
        assert_eq!(input_box(Rect::new(0, 0, 5, 2)), Rect::new(0, 0, 5, 2));
    }

    #[test]
    fn test_input_box_centered() {
        assert_eq!(input_box(SCREEN), Rect::new(30, 10, 20, 3));
    }
}
