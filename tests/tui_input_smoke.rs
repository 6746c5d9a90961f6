use poker_table::canvas::{button_rect, Viewport};
use poker_table::config::TableConfig;
use poker_table::assets::CardAtlas;
use poker_table::round::{Button, Stage};
use poker_table::tui::app::{AppState, InputAction, Scene};
use ratatui::layout::Rect;

fn table_app() -> AppState {
    let mut app = AppState::default();
    app.set_viewport(Viewport::new(Rect::new(0, 0, 160, 46)));
    app
}

/// Terminal cell at the middle of `button` for the app's current viewport.
fn cell_of(app: &AppState, button: Button) -> (u16, u16) {
    let cells = app.viewport().to_cells(button_rect(button));
    (cells.x + cells.width / 2, cells.y + cells.height / 2)
}

fn click(app: &mut AppState, button: Button) -> bool {
    let (col, row) = cell_of(app, button);
    let fired = app.handle_input(InputAction::PointerDown(col, row));
    app.tick();
    fired
}

#[test]
fn starts_at_the_table() {
    let app = AppState::default();
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.round.stage(), Stage::WaitingToDeal);
}

#[test]
fn clicking_buttons_plays_a_hand() {
    let mut app = table_app();
    assert!(click(&mut app, Button::Deal));
    assert_eq!(app.round.community_cards().len(), 3);

    assert!(click(&mut app, Button::Check));
    assert_eq!(app.round.community_cards().len(), 4);

    assert!(click(&mut app, Button::Bet));
    assert_eq!(app.round.community_cards().len(), 5);
    assert_eq!(app.round.players()[0].chips(), 950);

    // Deal is disabled while a hand is out
    assert!(!click(&mut app, Button::Deal));

    assert!(click(&mut app, Button::Fold));
    assert_eq!(app.round.community_cards().len(), 3);
}

#[test]
fn hover_tracks_pointer() {
    let mut app = table_app();
    let (col, row) = cell_of(&app, Button::Bet);
    let _ = app.handle_input(InputAction::PointerMove(col, row));
    assert_eq!(app.hover(), Some(Button::Bet));
    let _ = app.handle_input(InputAction::PointerMove(0, 0));
    assert_eq!(app.hover(), None);
}

#[test]
fn clicks_off_the_buttons_do_nothing() {
    let mut app = table_app();
    assert!(!app.handle_input(InputAction::PointerDown(80, 5)));
    app.tick();
    assert_eq!(app.round.stage(), Stage::WaitingToDeal);
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);

    // starting chips +100
    let _ = app.handle_input(InputAction::MenuInc);
    // passive seats +1
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuApply);

    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.config.starting_chips, 1100);
    assert_eq!(app.round.players().len(), 2);
    assert!(app.round.players().iter().all(|p| p.chips() == 1100));
}

#[test]
fn menu_cancel_keeps_table() {
    let mut app = table_app();
    assert!(click(&mut app, Button::Deal));
    let _ = app.handle_input(InputAction::ToggleMenu);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.config.starting_chips, 1000);
    assert_eq!(app.round.community_cards().len(), 3);
}

#[test]
fn buttons_inactive_in_menu() {
    let mut app = table_app();
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(!app.handle_input(InputAction::Press(Button::Deal)));
    app.tick();
    assert_eq!(app.round.stage(), Stage::WaitingToDeal);
}

#[test]
fn help_toggle() {
    let mut app = table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
}

#[test]
fn custom_config_seeds_the_table() {
    let mut cfg = TableConfig::default();
    cfg.player_name = "Alice".to_string();
    cfg.starting_chips = 300;
    cfg.bet_amount = 120;
    let mut app = AppState::new(cfg, CardAtlas::default());
    let _ = app.handle_input(InputAction::Press(Button::Deal));
    app.tick();
    let _ = app.handle_input(InputAction::Press(Button::Bet));
    app.tick();
    let alice = &app.round.players()[0];
    assert_eq!(alice.name(), "Alice");
    assert_eq!(alice.chips(), 180);
}
