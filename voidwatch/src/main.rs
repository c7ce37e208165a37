// Disable warning for the crate name, not a really good way to do this but..
// (https://github.com/rust-lang/rust/issues/45127)
#![allow(non_snake_case)]

#[macro_use]
extern crate clap;

mod bot;

use std::path::PathBuf;

use crate::bot::{AttackPolicy, Voidwatch};
use clap::ArgEnum;
use log::error;
use rust_sc2::prelude::*;

use crate::clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Map to play on
    #[clap(long, default_value = "AbyssalReefLE")]
    map: String,

    /// Computer opponent race (default: Terran)
    #[clap(long)]
    race: Option<Race>,

    /// Computer opponent difficulty (default: Hard)
    #[clap(long)]
    difficulty: Option<Difficulty>,

    /// Computer opponent build
    #[clap(long)]
    build: Option<AIBuild>,

    /// Play in real time instead of as fast as possible
    #[clap(long)]
    realtime: bool,

    /// Directory receiving the training archives of won games
    #[clap(long = "train-data", default_value = "train_data")]
    train_data: PathBuf,

    /// Seed for every random decision of the bot
    #[clap(long)]
    seed: Option<u64>,

    /// Attack policy: random (records training data) or threshold
    #[clap(long, arg_enum, default_value = "random")]
    policy: Policy,

    /// Replay file
    #[clap(long)]
    save_replay: Option<String>,

    /// Sets sc2 version
    #[clap(long)]
    sc2_version: Option<String>,

    /// Set game step for bot
    #[clap(short = 's', long = "step", default_value_t = 1)]
    game_step: u32,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub enum Policy {
    Random,
    Threshold,
}

impl From<Policy> for AttackPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Random => AttackPolicy::Random,
            Policy::Threshold => AttackPolicy::Threshold,
        }
    }
}

fn main() -> SC2Result<()> {
    env_logger::init();
    let app = Cli::parse();

    let mut bot = Voidwatch::new(app.policy.into(), app.train_data, app.seed);
    bot.set_game_step(app.game_step);

    // A game that never reports a result is treated as having none.
    if let Err(e) = run_vs_computer(
        &mut bot,
        Computer::new(
            app.race.unwrap_or(Race::Terran),
            app.difficulty.unwrap_or(Difficulty::Hard),
            app.build,
        ),
        app.map.as_str(),
        LaunchOptions {
            sc2_version: app.sc2_version.as_deref(),
            realtime: app.realtime,
            save_replay_as: app.save_replay.as_deref(),
        },
    ) {
        error!("Game did not finish: {}", e);
    }
    println!("Result {:?}", bot.result());
    Ok(())
}
