use log::debug;
use rand::prelude::*;
use rust_sc2::prelude::*;

use crate::episode::{TrainingSample, ACTIONS};
use crate::game::{AttackTarget, Game, Sighting};
use crate::params::*;
use crate::{AIComponent, BotState};

/// The decisions the air army picks from at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackAction {
    /// Do nothing for a random number of iterations.
    Wait,
    /// Known enemy closest to one of our bases.
    AttackNearBase,
    /// Any known enemy structure.
    AttackStructure,
    AttackEnemyStart,
}

impl AttackAction {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            0 => AttackAction::Wait,
            1 => AttackAction::AttackNearBase,
            2 => AttackAction::AttackStructure,
            _ => AttackAction::AttackEnemyStart,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttackAction::Wait => 0,
            AttackAction::AttackNearBase => 1,
            AttackAction::AttackStructure => 2,
            AttackAction::AttackEnemyStart => 3,
        }
    }

    fn target<R: Rng + ?Sized>(&self, game: &dyn Game, rng: &mut R) -> Option<AttackTarget> {
        match self {
            AttackAction::Wait => None,
            AttackAction::AttackNearBase => {
                let mut enemies = game.enemy_units();
                enemies.extend(game.enemy_structures());
                let base = game.own(BASE).choose(rng)?.position;
                enemies
                    .iter()
                    .closest(base)
                    .map(|e| AttackTarget::Unit(e.tag))
            }
            AttackAction::AttackStructure => game
                .enemy_structures()
                .choose(rng)
                .map(|s| AttackTarget::Unit(s.tag)),
            AttackAction::AttackEnemyStart => game
                .enemy_start_locations()
                .first()
                .map(|p| AttackTarget::Position(*p)),
        }
    }
}

/// Sends idle void rays somewhere every time it gets to decide, and records
/// each decision together with the latest intel snapshot.
#[derive(Default)]
pub struct ArmyManager {}

impl ArmyManager {
    fn idle_army(game: &dyn Game) -> Vec<Sighting> {
        game.own(AIR_ARMY)
            .into_iter()
            .filter(|u| u.is_ready && u.is_idle)
            .collect()
    }

    pub fn execute(&self, action: AttackAction, game: &mut dyn Game, bot_state: &mut BotState) {
        if action == AttackAction::Wait {
            let wait = bot_state.rng.gen_range(ATTACK_WAIT_MIN..ATTACK_WAIT_MAX);
            bot_state.attack_after = bot_state.iteration + wait;
            debug!("Waiting until iteration {:?}", bot_state.attack_after);
            return;
        }
        let target = match action.target(game, &mut bot_state.rng) {
            Some(target) => target,
            None => return,
        };
        for unit in Self::idle_army(game) {
            game.attack(unit.tag, target);
        }
        if let Some(frame) = &bot_state.snapshot {
            bot_state
                .train_data
                .push(TrainingSample::new(action.index(), frame.clone()));
        }
    }
}

impl AIComponent for ArmyManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        if Self::idle_army(game).is_empty() {
            return;
        }
        let action = AttackAction::from_choice(bot_state.rng.gen_range(0..ACTIONS));
        if bot_state.iteration <= bot_state.attack_after {
            return;
        }
        self.execute(action, game, bot_state);
    }
}
