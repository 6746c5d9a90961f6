use poker_table::player::Player;
use poker_table::round::{Button, RoundController, Stage};

fn solo() -> RoundController {
    RoundController::with_seed(vec![Player::human("Player 1", 1000)], 42)
}

#[test]
fn deal_waits_for_the_next_frame() {
    let mut t = solo();
    assert!(t.button_enabled(Button::Deal));
    t.dispatch(Button::Deal).unwrap();
    assert!(t.deal_pending());
    assert_eq!(t.stage(), Stage::WaitingToDeal);
    assert!(t.community_cards().is_empty());

    t.tick().unwrap();
    assert!(!t.deal_pending());
    assert_eq!(t.stage(), Stage::Flop);
    assert!(!t.button_enabled(Button::Deal));
}

#[test]
fn deal_is_ignored_during_a_hand() {
    let mut t = solo();
    t.start_new_round().unwrap();
    let community = t.community_cards().clone();
    let hand = t.players()[0].hand().clone();

    t.dispatch(Button::Deal).unwrap();
    t.tick().unwrap();
    assert!(!t.deal_pending());
    assert_eq!(t.community_cards(), &community);
    assert_eq!(t.players()[0].hand(), &hand);
}

#[test]
fn fold_mid_hand_restarts_immediately() {
    let mut t = solo();
    t.start_new_round().unwrap();
    t.advance_stage().unwrap();
    assert_eq!(t.community_cards().len(), 4);

    t.dispatch(Button::Fold).unwrap();
    assert_eq!(t.stage(), Stage::Flop);
    assert_eq!(t.community_cards().len(), 3);
    assert_eq!(t.players()[0].hand().len(), 2);
    assert_eq!(t.deck_len(), 47);
    assert_eq!(t.players()[0].chips(), 1000);
    assert_eq!(t.players()[0].last_action(), Some("Fold"));
}

#[test]
fn fold_without_cards_queues_a_deal() {
    let mut t = solo();
    t.dispatch(Button::Fold).unwrap();
    assert!(t.deal_pending());
    assert_eq!(t.players()[0].last_action(), Some("Fold"));
    t.tick().unwrap();
    assert_eq!(t.stage(), Stage::Flop);
}

#[test]
fn check_before_any_deal_turns_nothing() {
    let mut t = solo();
    t.dispatch(Button::Check).unwrap();
    assert!(t.advance_pending());
    t.tick().unwrap();
    assert!(!t.advance_pending());
    assert!(t.community_cards().is_empty());
    assert_eq!(t.stage(), Stage::WaitingToDeal);
}

#[test]
fn actions_go_to_the_human_seat() {
    let players = vec![Player::policy("Seat 1", 500), Player::human("Alice", 1000)];
    let mut t = RoundController::with_seed(players, 8);
    assert_eq!(t.human_seat(), Some(1));
    t.start_new_round().unwrap();
    t.dispatch(Button::Bet).unwrap();
    assert_eq!(t.players()[1].chips(), 950);
    assert_eq!(t.players()[0].chips(), 500);
}
