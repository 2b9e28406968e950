//! The four-tier value table.
//!
//! Rarer colors are worth more early and the values converge to 1 as the
//! bag empties: a risk/reward curve tied to the depleting supply.
//!
//! | Rounds | red | blue | green |
//! |--------|-----|------|-------|
//! | 1–2    | 1   | 3    | 5     |
//! | 3–5    | 1   | 2    | 3     |
//! | 6–7    | 1   | 1    | 2     |
//! | 8–10   | 1   | 1    | 1     |

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Last round of a game; rounds are numbered from 1.
pub const FINAL_ROUND: u32 = 10;

/// Point value of each color for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallValues {
    pub red: i64,
    pub blue: i64,
    pub green: i64,
}

impl BallValues {
    /// Value of one color.
    #[must_use]
    pub const fn get(&self, color: Color) -> i64 {
        match color {
            Color::Red => self.red,
            Color::Blue => self.blue,
            Color::Green => self.green,
        }
    }
}

/// Ball values for a round (1-based). Pure lookup, no side effects.
#[must_use]
pub const fn ball_values(round: u32) -> BallValues {
    match round {
        0..=2 => BallValues {
            red: 1,
            blue: 3,
            green: 5,
        },
        3..=5 => BallValues {
            red: 1,
            blue: 2,
            green: 3,
        },
        6..=7 => BallValues {
            red: 1,
            blue: 1,
            green: 2,
        },
        _ => BallValues {
            red: 1,
            blue: 1,
            green: 1,
        },
    }
}

/// Value of a single color in a round.
#[must_use]
pub const fn value_for(round: u32, color: Color) -> i64 {
    ball_values(round).get(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ball_values(1), BallValues { red: 1, blue: 3, green: 5 });
        assert_eq!(ball_values(2), BallValues { red: 1, blue: 3, green: 5 });
        assert_eq!(ball_values(3), BallValues { red: 1, blue: 2, green: 3 });
        assert_eq!(ball_values(5), BallValues { red: 1, blue: 2, green: 3 });
        assert_eq!(ball_values(6), BallValues { red: 1, blue: 1, green: 2 });
        assert_eq!(ball_values(7), BallValues { red: 1, blue: 1, green: 2 });
        assert_eq!(ball_values(8), BallValues { red: 1, blue: 1, green: 1 });
        assert_eq!(ball_values(10), BallValues { red: 1, blue: 1, green: 1 });
    }

    #[test]
    fn test_value_for() {
        assert_eq!(value_for(1, Color::Green), 5);
        assert_eq!(value_for(4, Color::Blue), 2);
        assert_eq!(value_for(9, Color::Green), 1);
        for round in 1..=FINAL_ROUND {
            assert_eq!(value_for(round, Color::Red), 1);
        }
    }

    #[test]
    fn test_values_never_increase_over_rounds() {
        for color in Color::ALL {
            for round in 1..FINAL_ROUND {
                assert!(value_for(round + 1, color) <= value_for(round, color));
            }
        }
    }
}
