use log::debug;
use rand::seq::SliceRandom;
use rust_sc2::prelude::*;

use crate::game::{Game, Sighting};
use crate::params::*;
use crate::{AIComponent, BotState};

/// Tech buildings and army production. Nothing is remembered between ticks,
/// every threshold is evaluated again from the current game state.
#[derive(Default)]
pub struct ProductionManager {}

impl ProductionManager {
    fn has_ready(game: &dyn Game, unit_type: UnitTypeId) -> bool {
        game.own(unit_type).iter().any(|u| u.is_ready)
    }

    fn build_if_under(
        &self,
        game: &mut dyn Game,
        unit_type: UnitTypeId,
        limit: f32,
        near: Point2,
    ) {
        if (game.own(unit_type).len() as f32) < limit
            && game.can_afford(unit_type)
            && !game.is_pending(unit_type)
        {
            debug!("Trying to build {:?} (limit {:?})", unit_type, limit);
            game.build_near(unit_type, near);
        }
    }

    fn offensive_force_buildings(&self, game: &mut dyn Game, bot_state: &mut BotState) {
        let pylons = game
            .own(SUPPLY)
            .into_iter()
            .filter(|p| p.is_ready)
            .collect::<Vec<Sighting>>();
        let pylon = match pylons.choose(&mut bot_state.rng) {
            Some(pylon) => pylon.position,
            None => return,
        };

        if Self::has_ready(game, GATEWAY) {
            self.build_if_under(game, CYBERNETICS_CORE, MAX_CYBERNETICS_CORES as f32, pylon);
        }
        // Not scaled with time yet, a single gateway is enough to unlock tech.
        self.build_if_under(game, GATEWAY, MAX_GATEWAYS as f32, pylon);

        if Self::has_ready(game, CYBERNETICS_CORE) {
            self.build_if_under(
                game,
                ROBOTICS_FACILITY,
                MAX_ROBOTICS_FACILITIES as f32,
                pylon,
            );
            self.build_if_under(game, STARGATE, elapsed_minutes(bot_state.iteration), pylon);
        }
    }

    fn build_offensive_force(&self, game: &mut dyn Game) {
        let max_ground_army = game.own(AIR_ARMY).len();
        let tech_ready = Self::has_ready(game, CYBERNETICS_CORE);
        for gateway in game
            .own(GATEWAY)
            .iter()
            .filter(|g| g.is_ready && g.is_idle)
        {
            if game.own(GROUND_ARMY).len() <= max_ground_army
                && game.can_afford(GROUND_ARMY)
                && game.supply_left() > 0
                && tech_ready
            {
                game.train(gateway.tag, GROUND_ARMY);
            }
        }

        for stargate in game
            .own(STARGATE)
            .iter()
            .filter(|s| s.is_ready && s.is_idle)
        {
            if game.can_afford(AIR_ARMY) && game.supply_left() > 0 {
                game.train(stargate.tag, AIR_ARMY);
            }
        }
    }
}

impl AIComponent for ProductionManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        self.offensive_force_buildings(game, bot_state);
        self.build_offensive_force(game);
    }
}
