use rand::prelude::*;
use rust_sc2::prelude::*;

use crate::game::{AttackTarget, Game};
use crate::params::*;
use crate::{AIComponent, BotState};

/// Army size gates for one unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackUnitSpec {
    /// Above this count the whole idle group goes for the best known target.
    pub attack: usize,
    /// Above this count the group only engages known enemy units.
    pub defend: usize,
}

impl AttackUnitSpec {
    pub const fn new(attack: usize, defend: usize) -> Self {
        Self { attack, defend }
    }
}

/// Count-threshold attack policy. Kept as an alternative to the random
/// [`ArmyManager`](crate::managers::army_manager::ArmyManager); it never
/// records training samples.
#[derive(Default)]
pub struct WaveManager {}

impl WaveManager {
    fn specs() -> [(UnitTypeId, AttackUnitSpec); 2] {
        [
            (GROUND_ARMY, AttackUnitSpec::new(15, 5)),
            (AIR_ARMY, AttackUnitSpec::new(8, 3)),
        ]
    }

    /// A random known enemy unit, else a random known structure, else the
    /// enemy start location.
    pub fn find_target<R: Rng + ?Sized>(game: &dyn Game, rng: &mut R) -> Option<AttackTarget> {
        if let Some(unit) = game.enemy_units().choose(rng) {
            return Some(AttackTarget::Unit(unit.tag));
        }
        if let Some(structure) = game.enemy_structures().choose(rng) {
            return Some(AttackTarget::Unit(structure.tag));
        }
        game.enemy_start_locations()
            .first()
            .map(|p| AttackTarget::Position(*p))
    }

    fn attack(&self, game: &mut dyn Game, bot_state: &mut BotState) {
        for (unit_type, spec) in Self::specs() {
            let units = game.own(unit_type);
            let count = units.len();
            let idle = units.iter().filter(|u| u.is_idle);

            if count > spec.attack && count > spec.defend {
                for unit in idle {
                    if let Some(target) = Self::find_target(game, &mut bot_state.rng) {
                        game.attack(unit.tag, target);
                    }
                }
            } else if count > spec.defend && !game.enemy_units().is_empty() {
                for unit in idle {
                    if let Some(enemy) = game.enemy_units().choose(&mut bot_state.rng) {
                        game.attack(unit.tag, AttackTarget::Unit(enemy.tag));
                    }
                }
            }
        }
    }
}

impl AIComponent for WaveManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        self.attack(game, bot_state);
    }
}
