//! Static catalogs: the fixed item lists each screen browses.
//!
//! Placeholder data only. Nothing here is loaded or mutated at runtime.

// ============================================================================
// ITEM LISTS
// ============================================================================

/// Tickets shown on the Tickets screen.
pub const TICKETS: [&str; 4] = ["Ticket 1", "Ticket 2", "Ticket 3", "Ticket 4"];

/// Alerts shown on the Alerts screen.
pub const ALERTS: [&str; 4] = ["Alert 1", "Alert 2", "Alert 3", "Alert 4"];

/// Automation categories shown on the Automations screen.
pub const AUTOMATIONS: [&str; 3] = ["Playbooks", "Actions", "Enrichments"];

// ============================================================================
// SPLASH MENU
// ============================================================================

/// An entry of the splash menu.
///
/// Order matters: the cursor index on the splash screen is an index
/// into [`MenuChoice::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Tickets,
    Alerts,
    Automations,
    Exit,
}

impl MenuChoice {
    /// All choices, in display order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Tickets,
        MenuChoice::Alerts,
        MenuChoice::Automations,
        MenuChoice::Exit,
    ];

    /// Choice at a cursor position, if any.
    pub fn at(index: usize) -> Option<MenuChoice> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Tickets => "Tickets",
            MenuChoice::Alerts => "Alerts",
            MenuChoice::Automations => "Automations",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Splash menu labels, in display order.
pub fn menu_labels() -> Vec<&'static str> {
    MenuChoice::ALL.iter().map(|c| c.label()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
