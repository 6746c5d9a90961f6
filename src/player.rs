use crate::hand::Hand;

/// Who decides for a seat. Both kinds behave identically at the table today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Controller {
    Human,
    Policy,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChipError {
    #[error("not enough chips: requested {requested}, available {available}")]
    Insufficient { requested: u64, available: u64 },
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) hand: Hand,
    pub(crate) controller: Controller,
    pub(crate) last_action: Option<String>,
}

impl Player {
    pub const DEFAULT_CHIPS: u64 = 1000;

    pub fn new(name: impl Into<String>, chips: u64, controller: Controller) -> Self {
        Self { name: name.into(), chips, hand: Hand::new(), controller, last_action: None }
    }

    /// A seat driven by the person at the keyboard.
    pub fn human(name: impl Into<String>, chips: u64) -> Self {
        Self::new(name, chips, Controller::Human)
    }

    /// A seat that is dealt in but never acts on its own.
    pub fn policy(name: impl Into<String>, chips: u64) -> Self {
        Self::new(name, chips, Controller::Policy)
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's chip count
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the player's hand
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    /// Returns the player's last action as a string
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// Commit `amount` chips, or fail without touching the stack.
    pub fn try_bet(&mut self, amount: u64) -> Result<u64, ChipError> {
        if amount > self.chips {
            return Err(ChipError::Insufficient { requested: amount, available: self.chips });
        }
        self.chips -= amount;
        Ok(amount)
    }

    /// Commit `amount` chips. Returns the amount committed, or 0 when the
    /// stack is too short (the stack is then left unchanged).
    ///
    /// ```
    /// use poker_table::player::Player;
    ///
    /// let mut alice = Player::human("Alice", 1000);
    /// assert_eq!(alice.bet(50), 50);
    /// assert_eq!(alice.chips(), 950);
    /// assert_eq!(alice.bet(2000), 0);
    /// assert_eq!(alice.chips(), 950);
    /// ```
    pub fn bet(&mut self, amount: u64) -> u64 {
        match self.try_bet(amount) {
            Ok(v) => {
                self.last_action = Some(format!("Bet {v}"));
                v
            }
            Err(err) => {
                log::debug!("{} bet refused: {err}", self.name);
                0
            }
        }
    }

    /// Same contract as [`Player::bet`], with a notification either way.
    pub fn raise_bet(&mut self, amount: u64) -> u64 {
        match self.try_bet(amount) {
            Ok(v) => {
                log::info!("{} raises the bet by {v}.", self.name);
                self.last_action = Some(format!("Raise {v}"));
                v
            }
            Err(err) => {
                log::info!("Not enough chips to raise.");
                log::debug!("{} raise refused: {err}", self.name);
                self.last_action = Some("Raise refused".into());
                0
            }
        }
    }

    /// Notification only; the player stays in the round.
    pub fn fold(&mut self) {
        log::info!("{} folds.", self.name);
        self.last_action = Some("Fold".into());
    }

    /// Notification only.
    pub fn check(&mut self) {
        log::info!("{} checks.", self.name);
        self.last_action = Some("Check".into());
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.last_action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_within_stack_deducts() {
        let mut p = Player::human("Alice", 1000);
        assert_eq!(p.bet(50), 50);
        assert_eq!(p.chips(), 950);
        assert_eq!(p.last_action(), Some("Bet 50"));
    }

    #[test]
    fn bet_over_stack_is_refused() {
        let mut p = Player::human("Alice", 950);
        assert_eq!(p.bet(2000), 0);
        assert_eq!(p.chips(), 950);
    }

    #[test]
    fn bet_entire_stack_is_allowed() {
        let mut p = Player::human("Bob", 75);
        assert_eq!(p.bet(75), 75);
        assert_eq!(p.chips(), 0);
        assert_eq!(p.bet(1), 0);
    }

    #[test]
    fn try_bet_distinguishes_refusal_from_zero() {
        let mut p = Player::human("Alice", 10);
        assert_eq!(p.try_bet(0), Ok(0));
        assert_eq!(p.try_bet(11), Err(ChipError::Insufficient { requested: 11, available: 10 }));
        assert_eq!(p.chips(), 10);
    }

    #[test]
    fn raise_bet_shares_bet_contract() {
        let mut p = Player::policy("Seat 2", 100);
        assert_eq!(p.raise_bet(60), 60);
        assert_eq!(p.raise_bet(60), 0);
        assert_eq!(p.chips(), 40);
        assert_eq!(p.last_action(), Some("Raise refused"));
    }

    #[test]
    fn fold_and_check_leave_state_alone() {
        let mut p = Player::human("Alice", 1000);
        p.hand_mut().add_card(crate::cards::Card::new(
            crate::cards::Rank::Ace,
            crate::cards::Suit::Hearts,
        ));
        p.fold();
        p.check();
        assert_eq!(p.chips(), 1000);
        assert_eq!(p.hand().len(), 1);
        assert_eq!(p.last_action(), Some("Check"));
    }
}
