//! Pure rendering: map App state to text and ratatui widgets.
//!
//! `view()` decides the content of a screen (title, menu, instructions)
//! and is a plain function of the Screen. `render()` frames that content
//! on the terminal; the only effect is Frame::render_widget(), which
//! writes to the terminal buffer.

use std::fmt;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;

use crate::catalog::{menu_labels, ALERTS, AUTOMATIONS, TICKETS};

use super::state::{App, Screen};
use super::theme;

const NAVIGATION_HINT: &str = "Use k/j to navigate and enter to select";

// ============================================================================
// CONTENT
// ============================================================================

/// Textual content of one screen, before any framing or color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub menu: Vec<MenuLine>,
    pub instructions: &'static str,
}

/// One row of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub label: &'static str,
    /// True for the row under the cursor.
    pub focused: bool,
}

impl MenuLine {
    pub fn marker(&self) -> &'static str {
        if self.focused { ">" } else { " " }
    }
}

impl fmt::Display for MenuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.label)
    }
}

/// Plain-text form: title, blank line, one row per item, instructions.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.title)?;
        for line in &self.menu {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", self.instructions)
    }
}

/// Content for the given screen.
pub fn view(screen: &Screen) -> View {
    match *screen {
        Screen::Splash { cursor } => View {
            title: "Welcome to the ticketing system",
            menu: menu(&menu_labels(), cursor),
            instructions: "Select one...",
        },
        Screen::Tickets { cursor } => View {
            title: "Tickets screen:",
            menu: menu(&TICKETS, cursor),
            instructions: NAVIGATION_HINT,
        },
        Screen::Alerts { cursor } => View {
            title: "Alerts screen:",
            menu: menu(&ALERTS, cursor),
            instructions: NAVIGATION_HINT,
        },
        Screen::Automations { cursor } => View {
            title: "Automations screen:",
            menu: menu(&AUTOMATIONS, cursor),
            instructions: NAVIGATION_HINT,
        },
        Screen::WorkTicket { .. } => View {
            title: "Working on a ticket...",
            menu: Vec::new(),
            instructions: "Press q to quit to the main menu",
        },
    }
}

fn menu(items: &[&'static str], cursor: usize) -> Vec<MenuLine> {
    items
        .iter()
        .enumerate()
        .map(|(i, &label)| MenuLine {
            label,
            focused: i == cursor,
        })
        .collect()
}

// ============================================================================
// FRAMING
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let content = view(&app.screen);
    let lines = styled_lines(&content);

    let area = frame_area(&lines, frame.area());

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::STYLE_BORDER)
        .padding(theme::FRAME_PADDING);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn styled_lines(content: &View) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(content.title, theme::STYLE_TITLE)),
        Line::from(""),
    ];

    for item in &content.menu {
        let line = Line::from(item.to_string());
        lines.push(if item.focused {
            line.style(theme::STYLE_CURSOR)
        } else {
            line
        });
    }

    lines.push(Line::from(Span::styled(content.instructions, theme::STYLE_HELP)));
    lines
}

/// Box just large enough for the content, inset by the outer margin
/// and clipped to the terminal.
fn frame_area(lines: &[Line], screen: Rect) -> Rect {
    let outer = screen.inner(theme::FRAME_MARGIN);
    let padding = theme::FRAME_PADDING;

    let text_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = text_width + padding.left + padding.right + 2;
    let height = lines.len() as u16 + padding.top + padding.bottom + 2;

    Rect::new(
        outer.x,
        outer.y,
        width.min(outer.width),
        height.min(outer.height),
    )
}

// ============================================================================
// TESTS
// ============================================================================
