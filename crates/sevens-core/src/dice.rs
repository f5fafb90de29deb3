//! Sources of six-sided die faces.
//!
//! The engine never touches an RNG directly; it asks a [`DiceSource`] for
//! faces. [`RandomDice`] draws uniformly from a seedable `StdRng`, while
//! [`ScriptedDice`] replays a fixed sequence so accept/reject decisions can
//! be tested deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{SevensError, SevensResult};

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// Something that can produce six-sided die faces.
pub trait DiceSource {
    /// Produce one face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Produce two independent faces.
    fn roll_pair(&mut self) -> (u8, u8) {
        let first = self.roll_die();
        let second = self.roll_die();
        (first, second)
    }
}

/// Uniform dice backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Create dice with a fixed seed for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create dice seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DiceSource for RandomDice {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=FACES)
    }
}

/// Dice that replay a fixed, cycling sequence of faces.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice. Every face must be in `1..=6`.
    pub fn new(faces: Vec<u8>) -> SevensResult<Self> {
        if faces.is_empty() {
            return Err(SevensError::EmptyScript);
        }
        if let Some(&bad) = faces.iter().find(|f| !(1..=FACES).contains(*f)) {
            return Err(SevensError::InvalidDie(bad));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Create scripted dice from pairs of faces, rolled in order.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> SevensResult<Self> {
        Self::new(pairs.iter().flat_map(|&(a, b)| [a, b]).collect())
    }

    /// How many faces have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_faces_in_range() {
        let mut dice = RandomDice::seeded(42);
        for _ in 0..1000 {
            assert!((1..=6).contains(&dice.roll_die()));
        }
    }

    #[test]
    fn random_dice_deterministic_with_seed() {
        let mut a = RandomDice::seeded(99);
        let mut b = RandomDice::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.roll_pair(), b.roll_pair());
        }
    }

    #[test]
    fn random_dice_hit_every_face() {
        let mut dice = RandomDice::seeded(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[usize::from(dice.roll_die() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_replays_and_cycles() {
        let mut dice = ScriptedDice::new(vec![1, 2, 3]).unwrap();
        let drawn: Vec<u8> = (0..5).map(|_| dice.roll_die()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2]);
        assert_eq!(dice.drawn(), 5);
    }

    #[test]
    fn scripted_from_pairs() {
        let mut dice = ScriptedDice::from_pairs(&[(3, 4), (6, 6)]).unwrap();
        assert_eq!(dice.roll_pair(), (3, 4));
        assert_eq!(dice.roll_pair(), (6, 6));
    }

    #[test]
    fn scripted_rejects_empty() {
        assert!(matches!(
            ScriptedDice::new(Vec::new()),
            Err(SevensError::EmptyScript)
        ));
    }

    #[test]
    fn scripted_rejects_bad_face() {
        assert!(matches!(
            ScriptedDice::new(vec![1, 7]),
            Err(SevensError::InvalidDie(7))
        ));
        assert!(matches!(
            ScriptedDice::new(vec![0]),
            Err(SevensError::InvalidDie(0))
        ));
    }
}
