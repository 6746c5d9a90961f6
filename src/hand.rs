use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("the board already holds {max} cards", max = Board::CAPACITY)]
    Full,
    #[error("card {0} is already on the board")]
    Duplicate(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The private cards held by one player, in the order they were dealt.
///
/// ```
/// use poker_table::cards::{Card, Rank, Suit};
/// use poker_table::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(hand.len(), 1);
/// hand.clear();
/// assert!(hand.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { cards: parse_cards(s)? })
    }
}

/// Community cards on the table, at most five.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub const CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(Self::CAPACITY) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.extend(cards)?;
        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    /// Free slots left before the board is full.
    pub fn remaining(&self) -> usize {
        Self::CAPACITY.saturating_sub(self.cards.len())
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn push(&mut self, card: Card) -> Result<(), BoardError> {
        if self.is_full() {
            return Err(BoardError::Full);
        }
        if self.cards.contains(&card) {
            return Err(BoardError::Duplicate(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn extend<I>(&mut self, cards: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Card>,
    {
        for c in cards {
            self.push(c)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| BoardError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// True when no card appears twice across the given hands and the board.
pub fn all_distinct<'a, I>(hands: I, board: &Board) -> bool
where
    I: IntoIterator<Item = &'a Hand>,
{
    let mut seen: HashSet<Card> = HashSet::new();
    hands
        .into_iter()
        .flat_map(|h| h.as_slice().iter())
        .chain(board.as_slice().iter())
        .all(|c| seen.insert(*c))
}
