//! Main TUI application state and event loop

use super::controller::InteractionController;
use super::layout::SceneLayout;
use super::panes::{
    render_button_bar, render_entry_box, render_pile_pane, render_status_bar, ButtonBarData,
    PileRenderData, StatusRenderData,
};
use super::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// Owner of the pile and everything the user can change
    pub controller: InteractionController,

    /// Last known mouse position (column, row)
    pub hovered: Option<(u16, u16)>,

    /// Area of the last drawn frame, used for hit-testing presses
    pub last_area: Rect,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            controller: InteractionController::new(),
            hovered: None,
            last_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                self.handle_event(event::read()?);
            }
        }

        Ok(())
    }

    /// Render the whole scene
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let controller = &self.controller;
        let stack = controller.stack();
        let layout = SceneLayout::compute(area, stack.len());

        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            area,
        );

        render_button_bar(
            frame,
            &layout,
            &ButtonBarData {
                len: stack.len(),
                highlight_max: controller.highlight_max(),
                highlight_min: controller.highlight_min(),
            },
            self.hovered,
        );

        render_pile_pane(
            frame,
            &layout,
            &PileRenderData {
                stack,
                highlight_max: controller.highlight_max(),
                highlight_min: controller.highlight_min(),
            },
            self.hovered,
        );

        render_status_bar(
            frame,
            layout.status,
            &StatusRenderData {
                message: controller.status_message(),
                stack,
                is_entering: controller.is_entering(),
            },
        );

        if controller.is_entering() {
            render_entry_box(frame, &layout, controller.input());
        }
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if !self.controller.is_entering() {
            if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key.code {
                self.should_quit = true;
                return;
            }
        }

        self.controller.key(key);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.hovered = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.hovered = Some((mouse.column, mouse.row));
                let layout = SceneLayout::compute(self.last_area, self.controller.stack().len());
                self.controller.press(mouse.column, mouse.row, &layout);
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
