//! End-to-end navigation scenarios through the public state machine.

use raven::tui::state::{Action, App, Screen, Transition};
use raven::tui::update::update;
use raven::tui::view::view;

/// Feed actions into a fresh App, stopping early on quit.
fn drive(actions: &[Action]) -> App {
    let mut app = App::new();
    for action in actions {
        if app.should_quit {
            break;
        }
        let transition = update(app.screen, action);
        app.apply(transition);
    }
    app
}

#[test]
fn down_twice_then_select_opens_automations() {
    let app = drive(&[Action::MoveDown, Action::MoveDown]);
    assert_eq!(app.screen, Screen::Splash { cursor: 2 });

    let app = drive(&[Action::MoveDown, Action::MoveDown, Action::Select]);
    assert_eq!(app.screen, Screen::Automations { cursor: 0 });
    assert!(!app.should_quit);
}

#[test]
fn selecting_exit_quits() {
    assert_eq!(update(Screen::Splash { cursor: 3 }, &Action::Select), Transition::Quit);

    let app = drive(&[
        Action::MoveDown,
        Action::MoveDown,
        Action::MoveDown,
        Action::Select,
    ]);
    assert!(app.should_quit);
}

#[test]
fn ticket_round_trip_through_work_screen() {
    for cursor in 0..4 {
        let worked = update(Screen::Tickets { cursor }, &Action::Select);
        let Transition::Screen(screen) = worked else {
            panic!("select on tickets should not quit");
        };
        assert!(matches!(screen, Screen::WorkTicket { .. }));

        let back = update(screen, &Action::Back);
        assert!(matches!(back, Transition::Screen(Screen::Tickets { .. })));
    }
}

#[test]
fn reset_from_work_ticket_returns_to_menu() {
    let app = drive(&[Action::Select, Action::MoveDown, Action::Select, Action::Reset]);
    assert_eq!(app.screen, Screen::Splash { cursor: 0 });
}

#[test]
fn reset_after_deep_cursor_keeps_cursor_in_menu() {
    // Alerts at the last row, then straight back to the menu
    let app = drive(&[
        Action::MoveDown,
        Action::Select,
        Action::MoveDown,
        Action::MoveDown,
        Action::MoveDown,
        Action::Reset,
    ]);
    let cursor = app.screen.cursor().unwrap();
    assert!(cursor < app.screen.catalog_len());
}

#[test]
fn ctrl_c_quits_from_anywhere_mid_session() {
    let app = drive(&[Action::Select, Action::Select, Action::Quit, Action::Back]);
    assert!(app.should_quit);
    assert_eq!(app.screen, Screen::WorkTicket { ticket: 0 });
}

#[test]
fn up_at_top_is_idempotent() {
    let app = drive(&[Action::MoveUp, Action::MoveUp, Action::MoveUp]);
    assert_eq!(app.screen, Screen::Splash { cursor: 0 });
}

#[test]
fn view_follows_navigation() {
    let app = drive(&[Action::Select, Action::MoveDown]);
    let text = view(&app.screen).to_string();
    assert!(text.starts_with("Tickets screen:"));
    assert!(text.contains("> Ticket 2"));
}
