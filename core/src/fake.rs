use rust_sc2::prelude::*;

use crate::game::{AttackTarget, Game, Sighting};

#[derive(Debug, Clone, PartialEq)]
pub enum Order {
    Train { producer: u64, unit_type: UnitTypeId },
    Build { unit_type: UnitTypeId, near: Point2 },
    BuildGas { worker: u64, geyser: u64 },
    Move { unit: u64, position: Point2 },
    Attack { unit: u64, target: AttackTarget },
    Gather { worker: u64, resource: u64 },
    Expand,
}

/// Scripted game state that records every order it receives.
pub struct FakeGame {
    pub map_size: (usize, usize),
    pub minerals: u32,
    pub vespene: u32,
    pub supply_cap: u32,
    pub supply_left: u32,
    pub own: Vec<Sighting>,
    pub enemy_units: Vec<Sighting>,
    pub enemy_structures: Vec<Sighting>,
    pub enemy_start: Point2,
    pub geysers: Vec<Sighting>,
    pub minerals_fields: Vec<Sighting>,
    pub pending: Vec<UnitTypeId>,
    pub orders: Vec<Order>,
}

impl Default for FakeGame {
    fn default() -> Self {
        Self {
            map_size: (200, 176),
            minerals: 0,
            vespene: 0,
            supply_cap: 15,
            supply_left: 15,
            own: vec![],
            enemy_units: vec![],
            enemy_structures: vec![],
            enemy_start: Point2::new(150f32, 140f32),
            geysers: vec![],
            minerals_fields: vec![],
            pending: vec![],
            orders: vec![],
        }
    }
}

impl FakeGame {
    pub fn rich() -> Self {
        Self {
            minerals: 10_000,
            vespene: 10_000,
            supply_cap: 200,
            supply_left: 100,
            ..Default::default()
        }
    }

    pub fn with(mut self, sighting: Sighting) -> Self {
        self.own.push(sighting);
        self
    }

    pub fn add(&mut self, tag: u64, unit_type: UnitTypeId, x: f32, y: f32) {
        self.own.push(Sighting::new(tag, unit_type, Point2::new(x, y)));
    }

    pub fn trained(&self, unit_type: UnitTypeId) -> usize {
        self.orders
            .iter()
            .filter(|o| matches!(o, Order::Train { unit_type: t, .. } if *t == unit_type))
            .count()
    }

    pub fn built(&self, unit_type: UnitTypeId) -> usize {
        self.orders
            .iter()
            .filter(|o| matches!(o, Order::Build { unit_type: t, .. } if *t == unit_type))
            .count()
    }

    pub fn attacks(&self) -> Vec<(u64, AttackTarget)> {
        self.orders
            .iter()
            .filter_map(|o| match o {
                Order::Attack { unit, target } => Some((*unit, *target)),
                _ => None,
            })
            .collect()
    }

    fn cost(unit_type: UnitTypeId) -> (u32, u32, u32) {
        match unit_type {
            UnitTypeId::Probe => (50, 0, 1),
            UnitTypeId::Nexus => (400, 0, 0),
            UnitTypeId::Pylon => (100, 0, 0),
            UnitTypeId::Assimilator => (75, 0, 0),
            UnitTypeId::Gateway => (150, 0, 0),
            UnitTypeId::CyberneticsCore => (150, 0, 0),
            UnitTypeId::Stargate => (150, 150, 0),
            UnitTypeId::RoboticsFacility => (150, 100, 0),
            UnitTypeId::Stalker => (125, 50, 2),
            UnitTypeId::VoidRay => (250, 150, 4),
            UnitTypeId::Observer => (25, 75, 1),
            _ => (0, 0, 0),
        }
    }

    fn spend(&mut self, unit_type: UnitTypeId, use_supply: bool) {
        let (minerals, vespene, supply) = Self::cost(unit_type);
        self.minerals = self.minerals.saturating_sub(minerals);
        self.vespene = self.vespene.saturating_sub(vespene);
        if use_supply {
            self.supply_left = self.supply_left.saturating_sub(supply);
        }
    }
}

impl Game for FakeGame {
    fn map_size(&self) -> (usize, usize) {
        self.map_size
    }

    fn minerals(&self) -> u32 {
        self.minerals
    }

    fn vespene(&self) -> u32 {
        self.vespene
    }

    fn supply_cap(&self) -> u32 {
        self.supply_cap
    }

    fn supply_left(&self) -> u32 {
        self.supply_left
    }

    fn own(&self, unit_type: UnitTypeId) -> Vec<Sighting> {
        self.own
            .iter()
            .filter(|s| s.type_id == unit_type)
            .cloned()
            .collect()
    }

    fn enemy_units(&self) -> Vec<Sighting> {
        self.enemy_units.clone()
    }

    fn enemy_structures(&self) -> Vec<Sighting> {
        self.enemy_structures.clone()
    }

    fn enemy_start_locations(&self) -> Vec<Point2> {
        vec![self.enemy_start]
    }

    fn vespene_geysers(&self) -> Vec<Sighting> {
        self.geysers.clone()
    }

    fn mineral_fields(&self) -> Vec<Sighting> {
        self.minerals_fields.clone()
    }

    fn can_afford(&self, unit_type: UnitTypeId) -> bool {
        let (minerals, vespene, supply) = Self::cost(unit_type);
        self.minerals >= minerals && self.vespene >= vespene && self.supply_left >= supply
    }

    fn is_pending(&self, unit_type: UnitTypeId) -> bool {
        self.pending.contains(&unit_type)
            || self.built(unit_type) > 0
            || self.trained(unit_type) > 0
    }

    fn select_build_worker(&self, near: Point2) -> Option<u64> {
        self.own
            .iter()
            .filter(|s| s.type_id == UnitTypeId::Probe)
            .closest(near)
            .map(|s| s.tag)
    }

    fn select_gas_worker(&self, extractor: u64, near: Point2) -> Option<u64> {
        self.own
            .iter()
            .filter(|s| s.type_id == UnitTypeId::Probe && s.target_tag != Some(extractor))
            .closest(near)
            .map(|s| s.tag)
    }

    fn train(&mut self, producer: u64, unit_type: UnitTypeId) {
        self.orders.push(Order::Train {
            producer,
            unit_type,
        });
        self.spend(unit_type, true);
    }

    fn build_near(&mut self, unit_type: UnitTypeId, near: Point2) -> bool {
        self.orders.push(Order::Build { unit_type, near });
        self.spend(unit_type, false);
        true
    }

    fn build_gas(&mut self, worker: u64, geyser: u64) {
        self.orders.push(Order::BuildGas { worker, geyser });
        self.spend(UnitTypeId::Assimilator, false);
    }

    fn move_to(&mut self, unit: u64, position: Point2) {
        self.orders.push(Order::Move { unit, position });
    }

    fn attack(&mut self, unit: u64, target: AttackTarget) {
        self.orders.push(Order::Attack { unit, target });
    }

    fn gather(&mut self, worker: u64, resource: u64) {
        self.orders.push(Order::Gather { worker, resource });
    }

    fn expand_now(&mut self) {
        self.orders.push(Order::Expand);
        self.spend(UnitTypeId::Nexus, false);
    }
}
