pub mod episode;
pub mod error;
pub mod game;
pub mod intel;
pub mod managers;
pub mod params;

#[cfg(test)]
mod fake;

use image::RgbImage;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::episode::TrainingData;
use crate::game::Game;

pub use crate::error::{Error, Result};

// Every component runs once per tick, in the order the bot registers them.
pub trait AIComponent {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState);
}

/// Per-episode decision state shared by the components.
pub struct BotState {
    pub iteration: usize,
    /// The attack component stays idle until the iteration passes this value.
    pub attack_after: usize,
    /// Most recent frame drawn by the intel component.
    pub snapshot: Option<RgbImage>,
    pub train_data: TrainingData,
    pub rng: StdRng,
}

impl BotState {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            iteration: 0,
            attack_after: 0,
            snapshot: None,
            train_data: TrainingData::default(),
            rng,
        }
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new(None)
    }
}
