// Rendering tests against ratatui's in-memory backend

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use pilety::ui::theme::DEFAULT_THEME;
use pilety::ui::App;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

fn render(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|f| app.draw(f)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(app: &mut App) -> Vec<String> {
    let buffer = render(app);
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn cell_bg(buffer: &Buffer, x: u16, y: u16) -> Color {
    buffer.content[y as usize * buffer.area.width as usize + x as usize].bg
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
}

fn push(app: &mut App, value: &str) {
    type_keys(app, "a");
    type_keys(app, value);
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
}

#[test]
fn test_empty_scene() {
    let mut app = App::new();
    let rows = screen_text(&mut app);

    assert!(rows[1].contains("Create the pile"));
    assert!(rows[1].contains("Remove Element"));
    assert!(rows[1].contains("Highlight Max"));
    assert!(rows[1].contains("Highlight Min"));
    assert!(rows.iter().any(|r| r.contains("(empty pile)")));
    assert!(rows[23].contains("0/10"));
    assert!(rows[23].contains("Ready!"));
}

#[test]
fn test_draw_records_area() {
    let mut app = App::new();
    screen_text(&mut app);

    assert_eq!(app.last_area.width, 80);
    assert_eq!(app.last_area.height, 24);
}

#[test]
fn test_elements_drawn_bottom_up() {
    let mut app = App::new();
    push(&mut app, "5");
    push(&mut app, "-3");
    let rows = screen_text(&mut app);

    assert!(rows[21].contains('5'));
    assert!(rows[19].contains("-3"));
    assert!(rows[1].contains("Add Element"));
    assert!(rows[1].contains("Remove Element"));
    assert!(rows[23].contains("2/10"));
    assert!(rows[23].contains("max 5"));
    assert!(rows[23].contains("min -3"));
}

#[test]
fn test_single_element_labels() {
    let mut app = App::new();
    push(&mut app, "7");
    type_keys(&mut app, "xn");
    let rows = screen_text(&mut app);

    assert!(rows[1].contains("Delete the pile"));
    assert!(rows[1].contains("Unhighlight Max"));
    assert!(rows[1].contains("Unhighlight Min"));
}

#[test]
fn test_entry_box_shows_text() {
    let mut app = App::new();
    type_keys(&mut app, "a-12");
    let rows = screen_text(&mut app);

    assert!(rows[10].contains("Value"));
    assert!(rows[11].contains("-12_"));
    assert!(rows[23].contains("cancel"));
}

#[test]
fn test_highlight_colors_reach_buffer() {
    let mut app = App::new();
    for v in ["5", "3", "9"] {
        push(&mut app, v);
    }

    let plain = render(&mut app);
    assert_eq!(cell_bg(&plain, 40, 17), DEFAULT_THEME.element);
    assert_eq!(cell_bg(&plain, 40, 19), DEFAULT_THEME.element);

    type_keys(&mut app, "xn");
    let highlighted = render(&mut app);
    assert_eq!(cell_bg(&highlighted, 40, 17), DEFAULT_THEME.max); // 9
    assert_eq!(cell_bg(&highlighted, 40, 19), DEFAULT_THEME.min); // 3
    assert_eq!(cell_bg(&highlighted, 40, 21), DEFAULT_THEME.element); // 5
}

#[test]
fn test_hovered_element_has_markers() {
    let mut app = App::new();
    push(&mut app, "5");
    push(&mut app, "8");
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 40,
        row: 21,
        modifiers: KeyModifiers::NONE,
    }));
    let rows = screen_text(&mut app);

    assert!(rows[21].contains('▸'));
    assert!(rows[21].contains('◂'));
    assert!(!rows[19].contains('▸'));
}
