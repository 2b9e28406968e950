//! Remaining ball counts and the draw operation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, DrawRng};
use crate::error::BagExhausted;

/// Remaining balls per color, drawn without replacement.
///
/// The draw is uniform over colors that still have balls, not over the
/// original distribution: as a color depletes, the effective weight of the
/// remaining colors rises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    pub red: u32,
    pub blue: u32,
    pub green: u32,
}

impl Bag {
    /// The standard bag: ten balls, one per round of a full game.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            red: 7,
            blue: 2,
            green: 1,
        }
    }

    /// A bag with explicit counts.
    #[must_use]
    pub const fn with_counts(red: u32, blue: u32, green: u32) -> Self {
        Self { red, blue, green }
    }

    /// Remaining balls of one color.
    #[must_use]
    pub const fn count(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Blue => self.blue,
            Color::Green => self.green,
        }
    }

    fn count_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
            Color::Green => &mut self.green,
        }
    }

    /// Total balls remaining.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.red + self.blue + self.green
    }

    /// Whether no balls remain.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Colors that still have at least one ball.
    #[must_use]
    pub fn available(&self) -> SmallVec<[Color; 3]> {
        Color::ALL
            .iter()
            .copied()
            .filter(|&color| self.count(color) > 0)
            .collect()
    }

    /// Draw one ball: uniform among the available colors, then decrement.
    pub fn draw(&mut self, rng: &mut DrawRng) -> Result<Color, BagExhausted> {
        let available = self.available();
        let &drawn = rng.choose(&available).ok_or(BagExhausted)?;
        *self.count_mut(drawn) -= 1;
        Ok(drawn)
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_counts() {
        let bag = Bag::standard();
        assert_eq!(bag.count(Color::Red), 7);
        assert_eq!(bag.count(Color::Blue), 2);
        assert_eq!(bag.count(Color::Green), 1);
        assert_eq!(bag.total(), 10);
        assert!(!bag.is_empty());
    }

    #[test]
    fn test_draw_decrements_drawn_color() {
        let mut bag = Bag::standard();
        let mut rng = DrawRng::new(42);

        let drawn = bag.draw(&mut rng).unwrap();
        assert_eq!(bag.count(drawn), Bag::standard().count(drawn) - 1);
        assert_eq!(bag.total(), 9);
    }

    #[test]
    fn test_draw_only_available_colors() {
        let mut bag = Bag::with_counts(0, 3, 0);
        let mut rng = DrawRng::new(7);

        for _ in 0..3 {
            assert_eq!(bag.draw(&mut rng), Ok(Color::Blue));
        }
        assert!(bag.is_empty());
    }

    #[test]
    fn test_available_skips_empty_colors() {
        let bag = Bag::with_counts(1, 0, 2);
        let available = bag.available();
        assert_eq!(available.as_slice(), &[Color::Red, Color::Green]);
    }

    #[test]
    fn test_exhausted_bag_fails() {
        let mut bag = Bag::with_counts(0, 0, 0);
        let mut rng = DrawRng::new(42);

        assert_eq!(bag.draw(&mut rng), Err(BagExhausted));
    }

    #[test]
    fn test_drain_never_overdraws() {
        let mut bag = Bag::standard();
        let mut rng = DrawRng::new(123);

        for k in 1..=10 {
            bag.draw(&mut rng).unwrap();
            assert_eq!(bag.total(), 10 - k);
        }
        assert_eq!(bag.draw(&mut rng), Err(BagExhausted));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Bag::standard()).unwrap();
        assert_eq!(json, r#"{"red":7,"blue":2,"green":1}"#);
    }
}
