//! Fixed 800x600 table geometry and its mapping onto terminal cells.
//!
//! Everything on the table is placed in canvas units. Each frame the canvas
//! is stretched over whatever area the terminal offers, and pointer events
//! come back through the same [`Viewport`] before hit testing, so button
//! rectangles never depend on the terminal size.

use crate::assets::CardAtlas;
use crate::cards::Card;
use crate::hand::Board;
use crate::player::Player;
use crate::round::Button;

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const CARD_SPACING: f32 = 10.0;
/// Top edge of the first seat's hand.
pub const HAND_TOP: f32 = 300.0;

const BUTTON_WIDTH: f32 = 90.0;
const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_TOP: f32 = CANVAS_HEIGHT - 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas units. The right and bottom edges are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CanvasRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

pub fn button_rect(button: Button) -> CanvasRect {
    let x = match button {
        Button::Fold => 50.0,
        Button::Check => 160.0,
        Button::Bet => 270.0,
        Button::Deal => 380.0,
    };
    CanvasRect::new(x, BUTTON_TOP, BUTTON_WIDTH, BUTTON_HEIGHT)
}

/// The button under `p`, if any.
pub fn button_at(p: Point) -> Option<Button> {
    Button::ALL.into_iter().find(|b| button_rect(*b).contains(p))
}

/// Lay `cards` out left to right, centered horizontally, with their top edge at `top`
/// (or vertically centered when `top` is `None`).
fn centered_row(cards: &[Card], atlas: &CardAtlas, top: Option<f32>) -> Vec<(Card, CanvasRect)> {
    if cards.is_empty() {
        return Vec::new();
    }
    let widths: f32 = cards.iter().map(|c| atlas.card_size(*c).width as f32).sum();
    let total = widths + CARD_SPACING * (cards.len() - 1) as f32;
    let mut x = (CANVAS_WIDTH - total) / 2.0;
    let mut out = Vec::with_capacity(cards.len());
    for &card in cards {
        let size = atlas.card_size(card);
        let (w, h) = (size.width as f32, size.height as f32);
        let y = top.unwrap_or((CANVAS_HEIGHT - h) / 2.0);
        out.push((card, CanvasRect::new(x, y, w, h)));
        x += w + CARD_SPACING;
    }
    out
}

/// Card rectangles for every seat's hand; seat `i` sits one card-height
/// (plus spacing) below seat `i - 1`.
pub fn hand_layout(players: &[Player], atlas: &CardAtlas) -> Vec<Vec<(Card, CanvasRect)>> {
    let mut top = HAND_TOP;
    players
        .iter()
        .map(|p| {
            let row = centered_row(p.hand().as_slice(), atlas, Some(top));
            let row_height = row.iter().map(|(_, r)| r.h).fold(0.0, f32::max);
            let height =
                if row_height > 0.0 { row_height } else { atlas.nominal_size().height as f32 };
            top += height + CARD_SPACING;
            row
        })
        .collect()
}

pub fn community_layout(board: &Board, atlas: &CardAtlas) -> Vec<(Card, CanvasRect)> {
    centered_row(board.as_slice(), atlas, None)
}

/// Terminal area the canvas is currently stretched over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub area: ratatui::layout::Rect,
}

impl Viewport {
    pub fn new(area: ratatui::layout::Rect) -> Self {
        Self { area }
    }

    fn scale(&self) -> (f32, f32) {
        (
            f32::from(self.area.width) / CANVAS_WIDTH,
            f32::from(self.area.height) / CANVAS_HEIGHT,
        )
    }

    /// Canvas point at the centre of terminal cell (`column`, `row`), or
    /// `None` outside the viewport.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<Point> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || row < a.y || column >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        let (sx, sy) = self.scale();
        let x = (f32::from(column - a.x) + 0.5) / sx;
        let y = (f32::from(row - a.y) + 0.5) / sy;
        Some(Point::new(x, y))
    }

    /// Cells covering `r`, clipped to the viewport. Never narrower or shorter
    /// than one cell while the viewport itself is non-empty.
    pub fn to_cells(&self, r: CanvasRect) -> ratatui::layout::Rect {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return ratatui::layout::Rect::new(a.x, a.y, 0, 0);
        }
        let (sx, sy) = self.scale();
        let clamp_x = |v: f32| (v.max(0.0) as u16).min(a.width);
        let clamp_y = |v: f32| (v.max(0.0) as u16).min(a.height);
        let x0 = clamp_x((r.x * sx).round()).min(a.width - 1);
        let y0 = clamp_y((r.y * sy).round()).min(a.height - 1);
        let x1 = clamp_x((r.right() * sx).round()).max(x0 + 1);
        let y1 = clamp_y((r.bottom() * sy).round()).max(y0 + 1);
        ratatui::layout::Rect::new(a.x + x0, a.y + y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageSize;
    use crate::cards::{Rank, Suit};

    #[test]
    fn buttons_sit_on_bottom_row() {
        assert_eq!(button_rect(Button::Fold), CanvasRect::new(50.0, 550.0, 90.0, 40.0));
        assert_eq!(button_rect(Button::Deal), CanvasRect::new(380.0, 550.0, 90.0, 40.0));
    }

    #[test]
    fn hit_testing_finds_buttons() {
        assert_eq!(button_at(Point::new(51.0, 551.0)), Some(Button::Fold));
        assert_eq!(button_at(Point::new(200.0, 570.0)), Some(Button::Check));
        assert_eq!(button_at(Point::new(359.9, 589.9)), Some(Button::Bet));
        assert_eq!(button_at(Point::new(469.0, 560.0)), Some(Button::Deal));
        // gap between Fold and Check
        assert_eq!(button_at(Point::new(150.0, 560.0)), None);
        assert_eq!(button_at(Point::new(100.0, 590.0)), None);
        assert_eq!(button_at(Point::new(400.0, 300.0)), None);
    }

    #[test]
    fn community_cards_are_centered() {
        let atlas = CardAtlas::placeholder(ImageSize::new(70, 100));
        let board: Board = "2c 3c 4c".parse().unwrap();
        let rects = community_layout(&board, &atlas);
        assert_eq!(rects.len(), 3);
        // 3 * 70 + 2 * 10 = 230 wide
        assert_eq!(rects[0].1.x, 285.0);
        assert_eq!(rects[2].1.right(), 515.0);
        assert!(rects.iter().all(|(_, r)| r.y == 250.0));
    }

    #[test]
    fn seats_stack_downwards() {
        let atlas = CardAtlas::placeholder(ImageSize::new(70, 100));
        let mut a = Player::human("A", 10);
        let mut b = Player::policy("B", 10);
        for p in [&mut a, &mut b] {
            p.hand_mut().add_card(Card::new(Rank::Ace, Suit::Spades));
            p.hand_mut().add_card(Card::new(Rank::King, Suit::Spades));
        }
        let rows = hand_layout(&[a, b], &atlas);
        assert_eq!(rows[0][0].1.y, HAND_TOP);
        assert_eq!(rows[1][0].1.y, HAND_TOP + 110.0);
        assert_eq!(rows[0][0].1.x, (800.0 - 150.0) / 2.0);
    }

    #[test]
    fn viewport_round_trips_button_centres() {
        let vp = Viewport::new(ratatui::layout::Rect::new(0, 0, 160, 60));
        for b in Button::ALL {
            let cells = vp.to_cells(button_rect(b));
            let col = cells.x + cells.width / 2;
            let row = cells.y + cells.height / 2;
            let p = vp.to_canvas(col, row).unwrap();
            assert_eq!(button_at(p), Some(b), "{b:?} via {cells:?}");
        }
    }

    #[test]
    fn viewport_rejects_outside_cells() {
        let vp = Viewport::new(ratatui::layout::Rect::new(2, 1, 80, 30));
        assert!(vp.to_canvas(1, 5).is_none());
        assert!(vp.to_canvas(82, 5).is_none());
        assert!(vp.to_canvas(2, 1).is_some());
    }
}
