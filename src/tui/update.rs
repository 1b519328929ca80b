//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the navigator. Fully testable without a
//! terminal. Quit and Reset mean the same thing on every screen and are
//! handled once; everything else is decided per screen. Unhandled
//! actions return the current screen unchanged (no-op).

use crate::catalog::MenuChoice;

use super::state::{Action, Screen, Transition};

/// Pure state transition function.
pub fn update(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::Reset => return Transition::Screen(Screen::splash()),
        _ => {}
    }

    match screen {
        Screen::Splash { cursor } => update_splash(cursor, action),
        Screen::Tickets { cursor } => update_tickets(cursor, action),
        Screen::WorkTicket { ticket } => update_work_ticket(ticket, action),
        Screen::Alerts { .. } | Screen::Automations { .. } => update_browse_list(screen, action),
    }
}

// ============================================================================
// CURSOR MOVEMENT
// ============================================================================

/// Move the cursor within the screen's own list, clamped at both ends.
fn move_cursor(screen: Screen, action: &Action) -> Screen {
    let Some(cursor) = screen.cursor() else {
        return screen;
    };
    let len = screen.catalog_len();

    let new_cursor = match action {
        Action::MoveUp => cursor.saturating_sub(1),
        Action::MoveDown if len == 0 => 0,
        Action::MoveDown => (cursor + 1).min(len - 1),
        _ => cursor,
    };
    screen.with_cursor(new_cursor)
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Splash: Select dispatches on the menu entry under the cursor.
fn update_splash(cursor: usize, action: &Action) -> Transition {
    let screen = Screen::Splash { cursor };
    match action {
        Action::MoveUp | Action::MoveDown => Transition::Screen(move_cursor(screen, action)),
        Action::Select => match MenuChoice::at(cursor) {
            Some(MenuChoice::Tickets) => Transition::Screen(Screen::tickets()),
            Some(MenuChoice::Alerts) => Transition::Screen(Screen::alerts()),
            Some(MenuChoice::Automations) => Transition::Screen(Screen::automations()),
            Some(MenuChoice::Exit) => Transition::Quit,
            None => Transition::Screen(screen),
        },
        _ => Transition::Screen(screen),
    }
}

/// Tickets: Select opens the ticket under the cursor.
fn update_tickets(cursor: usize, action: &Action) -> Transition {
    let screen = Screen::Tickets { cursor };
    match action {
        Action::MoveUp | Action::MoveDown => Transition::Screen(move_cursor(screen, action)),
        Action::Select => Transition::Screen(Screen::WorkTicket { ticket: cursor }),
        Action::Back => Transition::Screen(Screen::splash()),
        _ => Transition::Screen(screen),
    }
}

/// WorkTicket: only Back, which lands on the ticket that was open.
fn update_work_ticket(ticket: usize, action: &Action) -> Transition {
    match action {
        Action::Back => Transition::Screen(Screen::Tickets { cursor: ticket }),
        _ => Transition::Screen(Screen::WorkTicket { ticket }),
    }
}

/// Browse-only lists (alerts, automations): cursor movement + back.
fn update_browse_list(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::MoveUp | Action::MoveDown => Transition::Screen(move_cursor(screen, action)),
        Action::Back => Transition::Screen(Screen::splash()),
        _ => Transition::Screen(screen),
    }
}

// ============================================================================
// TESTS
// ============================================================================
