use std::collections::HashSet;

use itertools::Itertools;
use log::debug;
use rust_sc2::prelude::*;

use crate::game::{Game, Sighting};
use crate::params::*;
use crate::{AIComponent, BotState};

#[derive(Default)]
pub struct WorkerManager {}

impl WorkerManager {
    fn distribute_workers(&self, game: &mut dyn Game) {
        let bases = game
            .own(BASE)
            .into_iter()
            .filter(|b| b.is_ready)
            .collect::<Vec<Sighting>>();
        let minerals = game
            .mineral_fields()
            .into_iter()
            .filter(|m| bases.iter().any(|b| m.position.is_closer(MINERAL_DISTANCE, b.position)))
            .collect::<Vec<Sighting>>();

        let mut assigned = HashSet::new();
        for extractor in game.own(GAS).iter().filter(|g| g.is_ready) {
            if extractor.assigned_harvesters >= extractor.ideal_harvesters {
                continue;
            }
            if let Some(worker) = game.select_gas_worker(extractor.tag, extractor.position) {
                debug!("Sending worker {:?} to gas {:?}", worker, extractor.tag);
                game.gather(worker, extractor.tag);
                assigned.insert(worker);
            }
        }

        for worker in game
            .own(WORKER)
            .iter()
            .filter(|w| w.is_ready && w.is_idle && !assigned.contains(&w.tag))
        {
            if let Some(mineral) = minerals.iter().closest(worker.position) {
                game.gather(worker.tag, mineral.tag);
            }
        }
    }

    /// Trains one worker per idle base while under both the global and the
    /// per-base worker caps.
    fn build_workers(&self, game: &mut dyn Game) {
        let workers = game.own(WORKER).len();
        let bases = game.own(BASE);
        if workers >= MAX_WORKERS || workers >= bases.len() * WORKERS_PER_BASE {
            return;
        }
        for base in bases
            .iter()
            .filter(|b| b.is_ready && b.is_idle)
            .sorted_by_key(|b| b.tag)
        {
            if game.can_afford(WORKER) {
                game.train(base.tag, WORKER);
            }
        }
    }
}

impl AIComponent for WorkerManager {
    fn process(&mut self, game: &mut dyn Game, _: &mut BotState) {
        self.distribute_workers(game);
        self.build_workers(game);
    }
}
