//! poker-table: a single-player poker table in the terminal
//!
//! One human seat (plus optional passive seats) is dealt two cards, the
//! flop goes out, and each Check or Bet turns one more community card.
//! There is no hand evaluation, no pot, and nobody plays back.
//!
//! ## Quick start: drive a round without a terminal
//! ```
//! use poker_table::player::Player;
//! use poker_table::round::{Button, RoundController, Stage};
//!
//! let mut table = RoundController::with_seed(vec![Player::human("Alice", 1000)], 7);
//! table.dispatch(Button::Deal).unwrap();
//! table.tick().unwrap();
//! assert_eq!(table.stage(), Stage::Flop);
//! assert_eq!(table.community_cards().len(), 3);
//!
//! table.dispatch(Button::Bet).unwrap();
//! table.tick().unwrap();
//! assert_eq!(table.community_cards().len(), 4);
//! assert_eq!(table.players()[0].chips(), 950);
//! ```
//!
//! ## TUI
//! Run the table with:
//! ```sh
//! POKER_TABLE_ASSETS=path/to/card cargo run --bin poker-table
//! ```

pub mod assets;
pub mod canvas;
pub mod cards;
pub mod config;
pub mod deck;
pub mod hand;
pub mod logging;
pub mod player;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
