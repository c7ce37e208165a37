use std::cell::Cell;
use std::path::PathBuf;

use rust_sc2::bot::Bot;
use rust_sc2::prelude::*;

use voidwatch_core::episode::{Episode, EpisodeResult};
use voidwatch_core::intel::IntelManager;
use voidwatch_core::managers::army_manager::ArmyManager;
use voidwatch_core::managers::production_manager::ProductionManager;
use voidwatch_core::managers::resource_manager::ResourceManager;
use voidwatch_core::managers::scout_manager::ScoutManager;
use voidwatch_core::managers::wave_manager::WaveManager;
use voidwatch_core::managers::worker_manager::WorkerManager;
use voidwatch_core::{AIComponent, BotState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttackPolicy {
    /// Random decisions, recorded as training data.
    Random,
    /// Army size thresholds.
    Threshold,
}

#[bot]
pub struct Voidwatch {
    components: Vec<Box<dyn AIComponent>>,
    bot_state: BotState,
    train_data_dir: PathBuf,
    episode: Option<Episode>,
    result: Cell<Option<EpisodeResult>>,
}

impl Voidwatch {
    pub fn new(policy: AttackPolicy, train_data_dir: PathBuf, seed: Option<u64>) -> Self {
        let attack: Box<dyn AIComponent> = match policy {
            AttackPolicy::Random => Box::new(ArmyManager::default()),
            AttackPolicy::Threshold => Box::new(WaveManager::default()),
        };
        Self {
            _bot: Bot::default(),
            components: vec![
                Box::new(ScoutManager::default()),
                Box::new(WorkerManager::default()),
                Box::new(ResourceManager::default()),
                Box::new(ProductionManager::default()),
                // Intel goes right before the attack so samples pair with this tick's frame.
                Box::new(IntelManager::default()),
                attack,
            ],
            bot_state: BotState::new(seed),
            train_data_dir,
            episode: None,
            result: Cell::new(None),
        }
    }

    /// Outcome reported by the game, if it got that far.
    pub fn result(&self) -> Option<EpisodeResult> {
        self.result.get()
    }
}

impl Player for Voidwatch {
    fn get_player_settings(&self) -> PlayerSettings {
        PlayerSettings::new(Race::Protoss).with_name("Voidwatch")
    }

    fn on_start(&mut self) -> SC2Result<()> {
        self.episode = Some(Episode::start(&self.train_data_dir)?);
        self._bot
            .chat_ally(format!("Tag:{}v{}", crate_name!(), crate_version!()).as_str());
        Ok(())
    }

    fn on_step(&mut self, iteration: usize) -> SC2Result<()> {
        self.bot_state.iteration = iteration;
        for component in self.components.iter_mut() {
            component.process(&mut self._bot, &mut self.bot_state);
        }
        Ok(())
    }

    /// Called once on last step with a result for your bot.
    fn on_end(&self, result: GameResult) -> SC2Result<()> {
        let result = EpisodeResult::from(result);
        self.result.set(Some(result));
        if let Some(episode) = &self.episode {
            episode.finish(result, &self.bot_state.train_data)?;
        }
        Ok(())
    }
}
