use log::debug;
use rand::Rng;
use rust_sc2::prelude::*;

use crate::game::Game;
use crate::params::*;
use crate::{AIComponent, BotState};

/// Keeps a single observer wandering around the enemy start location.
#[derive(Default)]
pub struct ScoutManager {}

impl ScoutManager {
    fn scout(&self, game: &mut dyn Game, bot_state: &mut BotState) {
        let scouts = game.own(SCOUT);
        if let Some(scout) = scouts.first() {
            if !scout.is_idle {
                return;
            }
            if let Some(enemy_start) = game.enemy_start_locations().first() {
                let destination =
                    random_location_variance(*enemy_start, game.map_size(), &mut bot_state.rng);
                debug!("Move idle scout to location: {:?}", destination);
                game.move_to(scout.tag, destination);
            }
        } else {
            for facility in game
                .own(ROBOTICS_FACILITY)
                .iter()
                .filter(|f| f.is_ready && f.is_idle)
            {
                if game.can_afford(SCOUT) && game.supply_left() > 0 {
                    game.train(facility.tag, SCOUT);
                }
            }
        }
    }
}

/// Shifts each axis of `location` by up to 20% of its own value and keeps the
/// result inside the map.
pub fn random_location_variance<R: Rng + ?Sized>(
    location: Point2,
    (width, height): (usize, usize),
    rng: &mut R,
) -> Point2 {
    let spread = -SCOUT_VARIANCE_PERCENT..SCOUT_VARIANCE_PERCENT;
    let x = location.x + rng.gen_range(spread.clone()) as f32 / 100f32 * location.x;
    let y = location.y + rng.gen_range(spread) as f32 / 100f32 * location.y;
    Point2::new(x.clamp(0f32, width as f32), y.clamp(0f32, height as f32))
}

impl AIComponent for ScoutManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        self.scout(game, bot_state);
    }
}
