//! Dice spin animation.

use crate::core::GameRng;

/// A finite run of random die faces to flash before the real roll.
///
/// ```
/// use snake_ladder::core::GameRng;
/// use snake_ladder::render::DiceSpin;
///
/// let faces: Vec<u8> = DiceSpin::new(GameRng::new(1), 10).collect();
/// assert_eq!(faces.len(), 10);
/// assert!(faces.iter().all(|f| (1..=6).contains(f)));
/// ```
#[derive(Clone, Debug)]
pub struct DiceSpin {
    rng: GameRng,
    remaining: u32,
}

impl DiceSpin {
    /// Spin for `frames` faces using `rng`.
    #[must_use]
    pub fn new(rng: GameRng, frames: u32) -> Self {
        Self { rng, remaining: frames }
    }
}

impl Iterator for DiceSpin {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.roll_die())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DiceSpin {}
