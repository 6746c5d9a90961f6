//! Round state for a single table: deck, seats, community cards, and the
//! button-driven stage machine.
//!
//! Buttons never mutate the table directly except for Fold. Deal, Check and
//! Bet raise a pending flag that [`RoundController::tick`] applies on the
//! next frame, so any number of clicks inside one frame advance the table at
//! most once.

use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::hand::{Board, BoardError};
use crate::player::Player;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("the table has no players")]
    NoPlayers,
}

/// Where the table is between deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Stage {
    WaitingToDeal,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    /// The stage reached from `self` and the community cards drawn on the way,
    /// or `None` when nothing follows without a new deal.
    pub const fn advance(self) -> Option<(Stage, usize)> {
        match self {
            Stage::PreFlop => Some((Stage::Flop, 3)),
            Stage::Flop => Some((Stage::Turn, 1)),
            Stage::Turn => Some((Stage::River, 1)),
            Stage::River => Some((Stage::Showdown, 0)),
            Stage::WaitingToDeal | Stage::Showdown => None,
        }
    }

    /// Community cards on the table once this stage is reached.
    pub const fn board_len(self) -> usize {
        match self {
            Stage::WaitingToDeal | Stage::PreFlop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            Stage::River | Stage::Showdown => 5,
        }
    }

    /// The dealt stage matching a board of `len` cards. A partial flop still
    /// counts as pre-flop.
    pub const fn for_board(len: usize) -> Stage {
        match len {
            0..=2 => Stage::PreFlop,
            3 => Stage::Flop,
            4 => Stage::Turn,
            _ => Stage::River,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::WaitingToDeal => "Waiting to deal",
            Stage::PreFlop => "Pre-flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

/// The four table buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Fold,
    Check,
    Bet,
    Deal,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Fold, Button::Check, Button::Bet, Button::Deal];

    pub fn label(self) -> &'static str {
        match self {
            Button::Fold => "Fold",
            Button::Check => "Check",
            Button::Bet => "Bet",
            Button::Deal => "Deal",
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct RoundController {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) community: Board,
    pub(crate) stage: Stage,
    pub(crate) deal_pending: bool,
    pub(crate) advance_pending: bool,
    pub(crate) bet_amount: u64,
    rng: ChaCha8Rng,
}

impl RoundController {
    pub const DEFAULT_BET: u64 = 50;
    pub const HAND_SIZE: usize = 2;

    pub fn new(players: Vec<Player>) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(players, seed)
    }

    /// Same as [`RoundController::new`] but every shuffle derives from `seed`.
    pub fn with_seed(players: Vec<Player>, seed: u64) -> Self {
        Self {
            players,
            deck: Deck::standard(),
            community: Board::new(),
            stage: Stage::WaitingToDeal,
            deal_pending: false,
            advance_pending: false,
            bet_amount: Self::DEFAULT_BET,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a reference to the community cards
    pub fn community_cards(&self) -> &Board {
        &self.community
    }

    /// Returns the current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Cards left in the current deck
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn deal_pending(&self) -> bool {
        self.deal_pending
    }

    pub fn advance_pending(&self) -> bool {
        self.advance_pending
    }

    pub fn bet_amount(&self) -> u64 {
        self.bet_amount
    }

    pub fn set_bet_amount(&mut self, amount: u64) {
        self.bet_amount = amount;
    }

    /// Seat index of the player the buttons act for: the first human seat,
    /// falling back to seat 0.
    pub fn human_seat(&self) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }
        Some(self.players.iter().position(Player::is_human).unwrap_or(0))
    }

    pub fn human(&self) -> Option<&Player> {
        self.human_seat().and_then(|i| self.players.get(i))
    }

    fn human_mut(&mut self) -> Result<&mut Player, RoundError> {
        let seat = self.human_seat().ok_or(RoundError::NoPlayers)?;
        Ok(&mut self.players[seat])
    }

    pub fn any_player_has_cards(&self) -> bool {
        self.players.iter().any(|p| !p.hand().is_empty())
    }

    /// Fresh shuffled deck, cleared board, two cards per seat, then the flop.
    pub fn start_new_round(&mut self) -> Result<(), RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }
        self.reset_round();
        if let Err(err) = self.deal_hands().and_then(|()| self.advance_stage()) {
            log::warn!("round aborted: {err}");
            self.reset_round();
            return Err(err);
        }
        log::info!("New round:");
        log::info!("Community cards: {}", format_cards(self.community.as_slice()));
        Ok(())
    }

    fn reset_round(&mut self) {
        self.deck = Deck::standard();
        let seed: u64 = self.rng.random();
        self.deck.shuffle_seeded(seed);
        self.community.clear();
        self.deal_pending = false;
        self.advance_pending = false;
        self.stage = Stage::WaitingToDeal;
        for p in &mut self.players {
            p.reset_for_round();
        }
    }

    /// Clear every hand and deal two cards to each seat.
    pub fn deal_hands(&mut self) -> Result<(), RoundError> {
        for p in &mut self.players {
            p.hand.clear();
            let cards = self.deck.draw_n(Self::HAND_SIZE)?;
            for c in cards {
                p.hand.add_card(c);
            }
            log::debug!("{} dealt {}", p.name(), format_cards(p.hand().as_slice()));
        }
        self.stage = Stage::for_board(self.community.len());
        Ok(())
    }

    /// Draw `n` cards from the deck onto the board. The stage follows the
    /// new board size.
    pub fn deal_community_cards(&mut self, n: usize) -> Result<(), RoundError> {
        if n > self.community.remaining() {
            return Err(BoardError::Full.into());
        }
        let drawn = self.deck.draw_n(n)?;
        self.community.extend(drawn)?;
        self.stage = Stage::for_board(self.community.len());
        Ok(())
    }

    /// Step the stage machine once, drawing whatever the board still lacks
    /// for the next stage. Returns whether the stage changed.
    pub fn advance_stage(&mut self) -> Result<bool, RoundError> {
        let Some((next, _)) = self.stage.advance() else {
            return Ok(false);
        };
        let cards = next.board_len().saturating_sub(self.community.len());
        if cards > 0 {
            self.deal_community_cards(cards)?;
        }
        log::debug!("{} -> {}", self.stage.label(), next.label());
        self.stage = next;
        Ok(true)
    }

    /// Whether clicking `button` can have any effect right now.
    pub fn button_enabled(&self, button: Button) -> bool {
        match button {
            Button::Deal => !self.any_player_has_cards(),
            Button::Fold | Button::Check | Button::Bet => !self.players.is_empty(),
        }
    }

    /// React to a button press. Fold takes effect immediately, the rest on
    /// the next [`RoundController::tick`].
    pub fn dispatch(&mut self, button: Button) -> Result<(), RoundError> {
        match button {
            Button::Deal => {
                if self.any_player_has_cards() {
                    log::debug!("deal ignored: a hand is in progress");
                } else {
                    self.deal_pending = true;
                }
            }
            Button::Fold => {
                self.human_mut()?.fold();
                if self.any_player_has_cards() {
                    self.start_new_round()?;
                    self.human_mut()?.last_action = Some("Fold".into());
                } else {
                    self.deal_pending = true;
                }
            }
            Button::Check => {
                self.human_mut()?.check();
                self.advance_pending = true;
            }
            Button::Bet => {
                let amount = self.bet_amount;
                self.human_mut()?.raise_bet(amount);
                self.advance_pending = true;
            }
        }
        Ok(())
    }

    /// Apply effects queued by [`RoundController::dispatch`]. Call once per frame.
    pub fn tick(&mut self) -> Result<(), RoundError> {
        if self.deal_pending {
            self.deal_pending = false;
            if !self.any_player_has_cards() {
                self.start_new_round()?;
            }
        }
        if self.advance_pending {
            self.advance_pending = false;
            if self.advance_stage()? && !self.community.is_empty() {
                log::info!("Community cards: {}", format_cards(self.community.as_slice()));
            }
        }
        Ok(())
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.asset_name()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::all_distinct;

    fn table(n_policy: usize) -> RoundController {
        let mut players = vec![Player::human("Player 1", 1000)];
        for i in 0..n_policy {
            players.push(Player::policy(format!("Seat {}", i + 2), 1000));
        }
        RoundController::with_seed(players, 11)
    }

    #[test]
    fn transition_table_draws_expected_cards() {
        assert_eq!(Stage::PreFlop.advance(), Some((Stage::Flop, 3)));
        assert_eq!(Stage::Flop.advance(), Some((Stage::Turn, 1)));
        assert_eq!(Stage::Turn.advance(), Some((Stage::River, 1)));
        assert_eq!(Stage::River.advance(), Some((Stage::Showdown, 0)));
        assert_eq!(Stage::Showdown.advance(), None);
        assert_eq!(Stage::WaitingToDeal.advance(), None);
    }

    #[test]
    fn start_new_round_deals_two_and_three() {
        let mut t = table(0);
        t.start_new_round().unwrap();
        assert_eq!(t.players[0].hand().len(), 2);
        assert_eq!(t.community.len(), 3);
        assert_eq!(t.stage, Stage::Flop);
        assert_eq!(t.deck.len(), 52 - 5);
        assert!(all_distinct(t.players.iter().map(|p| p.hand()), &t.community));
    }

    #[test]
    fn start_new_round_replaces_previous_cards() {
        let mut t = table(2);
        t.start_new_round().unwrap();
        t.advance_stage().unwrap();
        t.start_new_round().unwrap();
        assert_eq!(t.community.len(), 3);
        assert!(t.players.iter().all(|p| p.hand().len() == 2));
        assert_eq!(t.deck.len(), 52 - 3 * 2 - 3);
    }

    #[test]
    fn empty_table_cannot_start() {
        let mut t = RoundController::with_seed(Vec::new(), 1);
        assert_eq!(t.start_new_round(), Err(RoundError::NoPlayers));
        assert_eq!(t.dispatch(Button::Check), Err(RoundError::NoPlayers));
    }

    #[test]
    fn deal_community_cards_respects_board_capacity() {
        let mut t = table(0);
        t.start_new_round().unwrap();
        let err = t.deal_community_cards(3).unwrap_err();
        assert_eq!(err, RoundError::Board(BoardError::Full));
        assert_eq!(t.community.len(), 3);
        t.deal_community_cards(2).unwrap();
        assert!(t.community.is_full());
    }

    #[test]
    fn exhausted_deck_is_reported() {
        // 25 seats take 50 cards, leaving two for a three-card flop
        let mut t = table(24);
        let err = t.start_new_round().unwrap_err();
        assert!(matches!(err, RoundError::Deck(_)));
        assert_eq!(t.stage, Stage::WaitingToDeal);
        assert!(!t.any_player_has_cards());
        assert!(t.community.is_empty());
        assert!(t.button_enabled(Button::Deal));
    }

    #[test]
    fn board_size_picks_the_stage() {
        assert_eq!(Stage::for_board(0), Stage::PreFlop);
        assert_eq!(Stage::for_board(2), Stage::PreFlop);
        assert_eq!(Stage::for_board(3), Stage::Flop);
        assert_eq!(Stage::for_board(4), Stage::Turn);
        assert_eq!(Stage::for_board(5), Stage::River);
        for stage in [Stage::PreFlop, Stage::Flop, Stage::Turn, Stage::River] {
            assert_eq!(Stage::for_board(stage.board_len()), stage);
        }
    }

    #[test]
    fn deal_hands_alone_opens_preflop() {
        let mut t = table(0);
        t.deal_hands().unwrap();
        assert_eq!(t.stage, Stage::PreFlop);
        t.dispatch(Button::Check).unwrap();
        t.tick().unwrap();
        assert_eq!(t.stage, Stage::Flop);
        assert_eq!(t.community.len(), 3);
    }

    #[test]
    fn seeded_tables_deal_identically() {
        let mut a = table(1);
        let mut b = table(1);
        a.start_new_round().unwrap();
        b.start_new_round().unwrap();
        assert_eq!(a.community, b.community);
        assert_eq!(a.players[1].hand(), b.players[1].hand());
    }
}
