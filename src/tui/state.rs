//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire navigator state space. Each Screen
//! variant carries its own cursor, so a cursor can never be paired with
//! the wrong list. The transition function (`update`) and the rendering
//! layer (`view`) both program against these types.

use crate::catalog::{ALERTS, AUTOMATIONS, MenuChoice, TICKETS};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the current screen. The effects layer reads this to know what
/// to render and when to stop.
#[derive(Debug, PartialEq)]
pub struct App {
    /// Current screen — carries the per-screen cursor.
    pub screen: Screen,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
///
/// Each variant is a state in the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Main menu. Cursor indexes [`MenuChoice::ALL`].
    Splash { cursor: usize },

    /// Ticket list.
    Tickets { cursor: usize },

    /// Working on a single ticket. No cursor.
    WorkTicket {
        /// Index into the ticket catalog.
        ticket: usize,
    },

    /// Alert list (browse only).
    Alerts { cursor: usize },

    /// Automation categories (browse only).
    Automations { cursor: usize },
}

/// Startup screen is the splash menu with the cursor on the first entry.
impl Default for Screen {
    fn default() -> Self {
        Screen::splash()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in a list.
    MoveUp,
    /// Move cursor down in a list.
    MoveDown,
    /// Activate the item under the cursor.
    Select,
    /// Navigate back to the previous screen.
    Back,
    /// Jump straight to the splash menu.
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the splash screen.
    pub fn new() -> Self {
        App {
            screen: Screen::default(),
            should_quit: false,
        }
    }

    /// Fold a transition into the app.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Screen(screen) => self.screen = screen,
            Transition::Quit => self.should_quit = true,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

impl Screen {
    pub fn splash() -> Self {
        Screen::Splash { cursor: 0 }
    }

    pub fn tickets() -> Self {
        Screen::Tickets { cursor: 0 }
    }

    pub fn alerts() -> Self {
        Screen::Alerts { cursor: 0 }
    }

    pub fn automations() -> Self {
        Screen::Automations { cursor: 0 }
    }

    /// Cursor position, or None on screens without a list.
    pub fn cursor(&self) -> Option<usize> {
        match *self {
            Screen::Splash { cursor }
            | Screen::Tickets { cursor }
            | Screen::Alerts { cursor }
            | Screen::Automations { cursor } => Some(cursor),
            Screen::WorkTicket { .. } => None,
        }
    }

    /// Length of the list the cursor ranges over (0 when there is none).
    pub fn catalog_len(&self) -> usize {
        match self {
            Screen::Splash { .. } => MenuChoice::ALL.len(),
            Screen::Tickets { .. } => TICKETS.len(),
            Screen::Alerts { .. } => ALERTS.len(),
            Screen::Automations { .. } => AUTOMATIONS.len(),
            Screen::WorkTicket { .. } => 0,
        }
    }

    /// Same screen with a different cursor. Screens without a cursor
    /// are returned unchanged.
    pub fn with_cursor(self, cursor: usize) -> Self {
        match self {
            Screen::Splash { .. } => Screen::Splash { cursor },
            Screen::Tickets { .. } => Screen::Tickets { cursor },
            Screen::Alerts { .. } => Screen::Alerts { cursor },
            Screen::Automations { .. } => Screen::Automations { cursor },
            Screen::WorkTicket { .. } => self,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash { .. } => "splash",
            Screen::Tickets { .. } => "tickets",
            Screen::WorkTicket { .. } => "work-ticket",
            Screen::Alerts { .. } => "alerts",
            Screen::Automations { .. } => "automations",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
