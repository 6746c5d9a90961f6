use crate::assets::CardAtlas;
use crate::canvas::{self, Viewport};
use crate::config::TableConfig;
use crate::player::Player;
use crate::round::{Button, RoundController, RoundError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Press(Button),
    /// Pointer moved to terminal cell (column, row).
    PointerMove(u16, u16),
    /// Left button pressed at terminal cell (column, row).
    PointerDown(u16, u16),
}

/// Everything the frame loop reads and mutates, owned in one place and
/// passed explicitly to drawing and dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    pub round: RoundController,
    pub atlas: CardAtlas,
    pub config: TableConfig,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_starting_chips: u64,
    pub cfg_bet_amount: u64,
    pub cfg_passive_seats: usize,
    pub cfg_fps: u32,
    viewport: Viewport,
    hover: Option<Button>,
    help_open: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableConfig::default(), CardAtlas::default())
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: TableConfig, atlas: CardAtlas) -> Self {
        let round = Self::build_round(&config);
        Self {
            scene: Scene::Table,
            started: Instant::now(),
            round,
            atlas,
            menu_index: 0,
            cfg_starting_chips: config.starting_chips,
            cfg_bet_amount: config.bet_amount,
            cfg_passive_seats: config.passive_seats,
            cfg_fps: config.fps,
            config,
            viewport: Viewport::default(),
            hover: None,
            help_open: false,
            action_error: None,
            action_error_at: None,
        }
    }

    pub(crate) fn build_round(config: &TableConfig) -> RoundController {
        let mut players = Vec::with_capacity(1 + config.passive_seats);
        players.push(Player::human(config.player_name.clone(), config.starting_chips));
        for i in 0..config.passive_seats {
            players.push(Player::policy(format!("Seat {}", i + 2), config.starting_chips));
        }
        let mut round = RoundController::new(players);
        round.set_bet_amount(config.bet_amount);
        round
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record where the canvas was last drawn so pointer events map onto it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn hover(&self) -> Option<Button> {
        self.hover
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, err: &RoundError) {
        log::warn!("table action failed: {err}");
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn button_under(&self, column: u16, row: u16) -> Option<Button> {
        self.viewport.to_canvas(column, row).and_then(canvas::button_at)
    }

    fn press(&mut self, button: Button) -> bool {
        if self.scene != Scene::Table || self.help_open {
            return false;
        }
        if !self.round.button_enabled(button) {
            return false;
        }
        match self.round.dispatch(button) {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Press(button) => self.press(button),
            InputAction::PointerMove(column, row) => {
                self.hover = self.button_under(column, row);
                false
            }
            InputAction::PointerDown(column, row) => {
                self.hover = self.button_under(column, row);
                match self.hover {
                    Some(button) => self.press(button),
                    None => false,
                }
            }
        }
    }

    /// Per-frame update: apply pending round effects and expire stale errors.
    pub fn tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table {
            return;
        }
        if let Err(err) = self.round.tick() {
            self.set_action_error(&err);
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.config.frame_time()
    }
}
