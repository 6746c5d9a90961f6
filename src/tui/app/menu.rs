use crate::config::TableConfig;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    StartingChips,
    BetAmount,
    PassiveSeats,
    FrameRate,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::StartingChips, MenuItem::BetAmount, MenuItem::PassiveSeats, MenuItem::FrameRate];

const CHIP_STEP: u64 = 100;
const BET_STEP: u64 = 10;
const FPS_STEP: u32 = 10;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::StartingChips => format!("Starting Chips: ${}", app.cfg_starting_chips),
            MenuItem::BetAmount => format!("Bet Amount: {}", app.cfg_bet_amount),
            MenuItem::PassiveSeats => format!("Passive Seats: {}", app.cfg_passive_seats),
            MenuItem::FrameRate => format!("Frame Rate (fps): {}", app.cfg_fps),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::StartingChips => {
                app.cfg_starting_chips = app.cfg_starting_chips.saturating_add(CHIP_STEP);
            }
            MenuItem::BetAmount => {
                app.cfg_bet_amount = app.cfg_bet_amount.saturating_add(BET_STEP);
            }
            MenuItem::PassiveSeats => {
                if app.cfg_passive_seats < TableConfig::MAX_PASSIVE_SEATS {
                    app.cfg_passive_seats += 1;
                }
            }
            MenuItem::FrameRate => {
                app.cfg_fps = (app.cfg_fps + FPS_STEP).min(TableConfig::MAX_FPS);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::StartingChips => {
                app.cfg_starting_chips = app.cfg_starting_chips.saturating_sub(CHIP_STEP).max(CHIP_STEP);
            }
            MenuItem::BetAmount => {
                app.cfg_bet_amount = app.cfg_bet_amount.saturating_sub(BET_STEP).max(BET_STEP);
            }
            MenuItem::PassiveSeats => {
                app.cfg_passive_seats = app.cfg_passive_seats.saturating_sub(1);
            }
            MenuItem::FrameRate => {
                app.cfg_fps = app.cfg_fps.saturating_sub(FPS_STEP).max(TableConfig::MIN_FPS);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_starting_chips = self.config.starting_chips;
        self.cfg_bet_amount = self.config.bet_amount;
        self.cfg_passive_seats = self.config.passive_seats;
        self.cfg_fps = self.config.fps;
        self.scene = super::Scene::Menu;
    }

    /// Commit the edited settings and seat a fresh table.
    pub fn apply_menu(&mut self) {
        self.config.starting_chips = self.cfg_starting_chips.max(CHIP_STEP);
        self.config.bet_amount = self.cfg_bet_amount.max(BET_STEP);
        self.config.passive_seats = self.cfg_passive_seats.min(TableConfig::MAX_PASSIVE_SEATS);
        self.config.fps = self.cfg_fps.clamp(TableConfig::MIN_FPS, TableConfig::MAX_FPS);
        self.round = Self::build_round(&self.config);
        log::info!(
            "table reset: chips {}, bet {}, passive seats {}, {} fps",
            self.config.starting_chips,
            self.config.bet_amount,
            self.config.passive_seats,
            self.config.fps
        );
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
