//! A pair of six-sided dice.
use std::collections::VecDeque;

use crate::rng::RandomSource;

/// Outcome of rolling both dice once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub die1: u8,
    pub die2: u8,
}

impl Roll {
    pub const fn new(die1: u8, die2: u8) -> Self {
        Self { die1, die2 }
    }

    /// Sum of both faces.
    pub const fn amount(&self) -> u32 {
        self.die1 as u32 + self.die2 as u32
    }

    pub const fn is_doubles(&self) -> bool {
        self.die1 == self.die2
    }
}

impl core::fmt::Display for Roll {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}+{})", self.amount(), self.die1, self.die2)?;
        if self.is_doubles() {
            f.write_str(" doubles")?;
        }
        Ok(())
    }
}

/// Two d6 that remember the most recent roll.
///
/// Rent for utilities depends on the roll that moved the player, so the last
/// roll stays readable through [`Dice::previous`]. Loaded rolls are consumed
/// first, in order, before the dice fall back to the random stream.
#[derive(Clone, Debug, Default)]
pub struct Dice {
    loaded: VecDeque<Roll>,
    previous: Option<Roll>,
}

impl Dice {
    pub const SIDES: u32 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Dice that replay `rolls` before rolling randomly.
    pub fn loaded(rolls: impl IntoIterator<Item = Roll>) -> Self {
        Self {
            loaded: rolls.into_iter().collect(),
            previous: None,
        }
    }

    pub fn roll(&mut self, rng: &mut dyn RandomSource) -> Roll {
        let roll = self.loaded.pop_front().unwrap_or_else(|| {
            Roll::new(
                rng.roll_die(Self::SIDES) as u8,
                rng.roll_die(Self::SIDES) as u8,
            )
        });
        self.previous = Some(roll);
        roll
    }

    pub fn previous(&self) -> Option<Roll> {
        self.previous
    }

    pub fn pending_loaded(&self) -> usize {
        self.loaded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRandom;

    #[test]
    fn loaded_rolls_replay_in_order() {
        let mut rng = PcgRandom::new(0);
        let mut dice = Dice::loaded([Roll::new(1, 1), Roll::new(3, 4)]);

        assert_eq!(dice.roll(&mut rng), Roll::new(1, 1));
        assert_eq!(dice.roll(&mut rng), Roll::new(3, 4));
        assert_eq!(dice.previous(), Some(Roll::new(3, 4)));
        assert_eq!(dice.pending_loaded(), 0);
    }

    #[test]
    fn random_rolls_use_both_faces_in_range() {
        let mut rng = PcgRandom::new(11);
        let mut dice = Dice::new();
        for _ in 0..200 {
            let roll = dice.roll(&mut rng);
            assert!((1..=6).contains(&roll.die1));
            assert!((1..=6).contains(&roll.die2));
            assert!((2..=12).contains(&roll.amount()));
        }
    }

    #[test]
    fn roll_reports_doubles_and_amount() {
        let roll = Roll::new(5, 5);
        assert!(roll.is_doubles());
        assert_eq!(roll.amount(), 10);
        assert_eq!(Roll::new(2, 6).amount(), 8);
        assert!(!Roll::new(2, 6).is_doubles());
    }
}
