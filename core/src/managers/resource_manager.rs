use log::debug;
use rust_sc2::prelude::*;

use crate::game::Game;
use crate::params::*;
use crate::{AIComponent, BotState};

#[derive(Default)]
pub struct ResourceManager {}

impl ResourceManager {
    fn order_supply(&self, game: &mut dyn Game) {
        if game.supply_left() >= SUPPLY_HEADROOM || game.is_pending(SUPPLY) {
            return;
        }
        // Placement is only "somewhere near a base" for now.
        let base = game.own(BASE).into_iter().find(|b| b.is_ready);
        if let Some(base) = base {
            if game.can_afford(SUPPLY) {
                debug!("Supply left {:?}, building a pylon", game.supply_left());
                game.build_near(SUPPLY, base.position);
            }
        }
    }

    fn order_geysers(&self, game: &mut dyn Game) {
        let geysers = game.vespene_geysers();
        for base in game.own(BASE).iter().filter(|b| b.is_ready) {
            for geyser in geysers
                .iter()
                .filter(|g| g.position.is_closer(GEYSER_DISTANCE, base.position))
            {
                if !game.can_afford(GAS) {
                    return;
                }
                let worker = match game.select_build_worker(geyser.position) {
                    Some(worker) => worker,
                    None => return,
                };
                let taken = game
                    .own(GAS)
                    .iter()
                    .any(|e| e.position.is_closer(EXTRACTOR_DISTANCE, geyser.position));
                if !taken {
                    debug!("Building an assimilator on {:?}", geyser.tag);
                    game.build_gas(worker, geyser.tag);
                }
            }
        }
    }

    /// Allows one base per elapsed minute.
    fn order_expansion(&self, game: &mut dyn Game, iteration: usize) {
        let bases = game.own(BASE).len();
        if (bases as f32) < elapsed_minutes(iteration) && game.can_afford(BASE) {
            game.expand_now();
        }
    }
}

impl AIComponent for ResourceManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        self.order_supply(game);
        self.order_geysers(game);
        self.order_expansion(game, bot_state.iteration);
    }
}
