//! TUI color and style constants.
//!
//! Pure data, consumed by the rendering layer. Colors are 256-color
//! palette indices so the look is the same across terminal themes.

use ratatui::layout::Margin;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Padding;

// ============================================================================
// STYLES
// ============================================================================

/// Screen title — bold pink.
pub const STYLE_TITLE: Style = Style::new()
    .fg(Color::Indexed(205))
    .add_modifier(Modifier::BOLD);

/// Frame border — purple.
pub const STYLE_BORDER: Style = Style::new().fg(Color::Indexed(63));

/// Cursor row in a list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::BOLD);

/// Instruction line.
pub const STYLE_HELP: Style = Style::new().fg(Color::Rgb(0x62, 0x62, 0x62));

// ============================================================================
// SPACING
// ============================================================================

/// Space between the border and the text inside it.
pub const FRAME_PADDING: Padding = Padding::symmetric(2, 1);

/// Space between the terminal edge and the border.
pub const FRAME_MARGIN: Margin = Margin {
    horizontal: 2,
    vertical: 1,
};
