//! Card and table images read once at startup.
//!
//! The asset directory holds `<suit>/<rank>.png` for every card plus
//! `table.png` for the background. Loading is all-or-nothing: a single
//! missing or unreadable file fails the whole atlas.

use crate::cards::{Card, Rank, Suit};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const BACKGROUND_FILE: &str = "table.png";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AssetError {
    #[error("asset directory not found: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("missing image: {}", path.display())]
    Missing { path: PathBuf },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Pixel size of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub path: PathBuf,
    pub size: ImageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub path: PathBuf,
    pub size: ImageSize,
    /// Mean colour of the image, used as the felt colour.
    pub mean_rgb: [u8; 3],
}

/// Read-only lookup from card to its image.
#[derive(Debug, Clone)]
pub struct CardAtlas {
    root: Option<PathBuf>,
    cards: HashMap<Card, CardImage>,
    background: Option<Background>,
    fallback: ImageSize,
}

impl CardAtlas {
    /// Size used when no image is known for a card.
    pub const DEFAULT_CARD_SIZE: ImageSize = ImageSize::new(70, 95);
    pub const DEFAULT_FELT: [u8; 3] = [21, 94, 55];

    /// Load every card image and the background from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AssetError::NotADirectory { path: dir.to_path_buf() });
        }
        let mut cards = HashMap::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                let path = dir.join(card.image_name());
                let size = read_size(&path)?;
                cards.insert(card, CardImage { path, size });
            }
        }
        let background = load_background(&dir.join(BACKGROUND_FILE))?;
        log::info!("loaded {} card images from {}", cards.len(), dir.display());
        let fallback = cards
            .get(&Card::new(Rank::Two, Suit::Diamonds))
            .map(|img| img.size)
            .unwrap_or(Self::DEFAULT_CARD_SIZE);
        Ok(Self { root: Some(dir.to_path_buf()), cards, background: Some(background), fallback })
    }

    /// An atlas with no files behind it; every card reports `size`.
    pub fn placeholder(size: ImageSize) -> Self {
        Self { root: None, cards: HashMap::new(), background: None, fallback: size }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn image(&self, card: Card) -> Option<&CardImage> {
        self.cards.get(&card)
    }

    pub fn card_size(&self, card: Card) -> ImageSize {
        self.cards.get(&card).map(|img| img.size).unwrap_or(self.fallback)
    }

    /// Size assumed for a card before any is on the table.
    pub fn nominal_size(&self) -> ImageSize {
        self.fallback
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn felt_rgb(&self) -> [u8; 3] {
        self.background.as_ref().map(|b| b.mean_rgb).unwrap_or(Self::DEFAULT_FELT)
    }
}

impl Default for CardAtlas {
    fn default() -> Self {
        Self::placeholder(Self::DEFAULT_CARD_SIZE)
    }
}

fn ensure_file(path: &Path) -> Result<(), AssetError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::Missing { path: path.to_path_buf() })
    }
}

fn read_size(path: &Path) -> Result<ImageSize, AssetError> {
    ensure_file(path)?;
    let (width, height) = image::image_dimensions(path)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?;
    Ok(ImageSize::new(width, height))
}

fn load_background(path: &Path) -> Result<Background, AssetError> {
    ensure_file(path)?;
    let img = image::open(path)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?
        .to_rgb8();
    let size = ImageSize::new(img.width(), img.height());
    let mut sum = [0u64; 3];
    for px in img.pixels() {
        for (acc, v) in sum.iter_mut().zip(px.0) {
            *acc += u64::from(v);
        }
    }
    let n = u64::from(size.width) * u64::from(size.height);
    let mean_rgb = if n == 0 {
        CardAtlas::DEFAULT_FELT
    } else {
        sum.map(|s| (s / n) as u8)
    };
    Ok(Background { path: path.to_path_buf(), size, mean_rgb })
}
