use rust_sc2::prelude::UnitTypeId;

pub const MAX_WORKERS: usize = 60;
pub const WORKERS_PER_BASE: usize = 16;
pub const ITERATIONS_PER_MINUTE: usize = 165;

pub const SUPPLY_HEADROOM: u32 = 5;
pub const GEYSER_DISTANCE: f32 = 15f32;
pub const EXTRACTOR_DISTANCE: f32 = 1f32;
pub const MINERAL_DISTANCE: f32 = 9f32;

pub const MAX_GATEWAYS: usize = 1;
pub const MAX_CYBERNETICS_CORES: usize = 1;
pub const MAX_ROBOTICS_FACILITIES: usize = 1;

pub const SCOUT_VARIANCE_PERCENT: i32 = 20;

pub const ATTACK_WAIT_MIN: usize = 20;
pub const ATTACK_WAIT_MAX: usize = 165;

pub const GAUGE_LENGTH: u32 = 50;
pub const RESOURCE_NORMALIZER: f32 = 1500f32;
pub const SUPPLY_NORMALIZER: f32 = 200f32;

pub const BASE: UnitTypeId = UnitTypeId::Nexus;
pub const WORKER: UnitTypeId = UnitTypeId::Probe;
pub const SUPPLY: UnitTypeId = UnitTypeId::Pylon;
pub const GAS: UnitTypeId = UnitTypeId::Assimilator;
pub const GATEWAY: UnitTypeId = UnitTypeId::Gateway;
pub const CYBERNETICS_CORE: UnitTypeId = UnitTypeId::CyberneticsCore;
pub const STARGATE: UnitTypeId = UnitTypeId::Stargate;
pub const ROBOTICS_FACILITY: UnitTypeId = UnitTypeId::RoboticsFacility;
pub const GROUND_ARMY: UnitTypeId = UnitTypeId::Stalker;
pub const AIR_ARMY: UnitTypeId = UnitTypeId::VoidRay;
pub const SCOUT: UnitTypeId = UnitTypeId::Observer;

/// Elapsed game minutes, measured in iterations.
pub fn elapsed_minutes(iteration: usize) -> f32 {
    iteration as f32 / ITERATIONS_PER_MINUTE as f32
}
