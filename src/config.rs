use std::path::PathBuf;
use std::time::Duration;

pub const ASSETS_ENV: &str = "POKER_TABLE_ASSETS";
pub const LOG_ENV: &str = "POKER_TABLE_LOG";

/// Startup and table settings. Everything except the paths can also be
/// edited from the in-app menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub assets_dir: PathBuf,
    pub log_file: PathBuf,
    pub player_name: String,
    pub starting_chips: u64,
    pub bet_amount: u64,
    /// Extra seats dealt in alongside the human; they never act.
    pub passive_seats: usize,
    pub fps: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("card"),
            log_file: PathBuf::from("poker-table.log"),
            player_name: "Player 1".to_string(),
            starting_chips: 1000,
            bet_amount: 50,
            passive_seats: 0,
            fps: 60,
        }
    }
}

impl TableConfig {
    pub const MAX_PASSIVE_SEATS: usize = 3;
    pub const MIN_FPS: u32 = 10;
    pub const MAX_FPS: u32 = 120;

    /// Defaults, with paths overridden by `POKER_TABLE_ASSETS` and
    /// `POKER_TABLE_LOG` when set.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var_os(key))
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(dir) = lookup(ASSETS_ENV).filter(|v| !v.is_empty()) {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(LOG_ENV).filter(|v| !v.is_empty()) {
            self.log_file = PathBuf::from(file);
        }
        self
    }

    pub fn frame_time(&self) -> Duration {
        let fps = self.fps.clamp(Self::MIN_FPS, Self::MAX_FPS);
        Duration::from_micros(1_000_000 / u64::from(fps))
    }
}
