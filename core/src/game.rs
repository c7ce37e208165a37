use log::debug;
use rust_sc2::bot::Bot;
use rust_sc2::prelude::*;

/// What the bot knows about a single unit or structure on a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    pub tag: u64,
    pub type_id: UnitTypeId,
    pub position: Point2,
    pub is_ready: bool,
    pub is_idle: bool,
    pub assigned_harvesters: u32,
    pub ideal_harvesters: u32,
    /// Unit or resource the current order points at.
    pub target_tag: Option<u64>,
}

impl Sighting {
    pub fn new(tag: u64, type_id: UnitTypeId, position: Point2) -> Self {
        Self {
            tag,
            type_id,
            position,
            is_ready: true,
            is_idle: true,
            assigned_harvesters: 0,
            ideal_harvesters: 0,
            target_tag: None,
        }
    }

    pub fn under_construction(mut self) -> Self {
        self.is_ready = false;
        self
    }

    pub fn busy(mut self) -> Self {
        self.is_idle = false;
        self
    }

    pub fn with_harvesters(mut self, assigned: u32, ideal: u32) -> Self {
        self.assigned_harvesters = assigned;
        self.ideal_harvesters = ideal;
        self
    }

    pub fn targeting(mut self, tag: u64) -> Self {
        self.target_tag = Some(tag);
        self.is_idle = false;
        self
    }
}

impl From<&Sighting> for Point2 {
    fn from(sighting: &Sighting) -> Self {
        sighting.position
    }
}

impl From<&Unit> for Sighting {
    fn from(unit: &Unit) -> Self {
        Self {
            tag: unit.tag(),
            type_id: unit.type_id(),
            position: unit.position(),
            is_ready: unit.is_ready(),
            is_idle: unit.is_idle(),
            assigned_harvesters: unit.assigned_harvesters().unwrap_or_default(),
            ideal_harvesters: unit.ideal_harvesters().unwrap_or_default(),
            target_tag: unit.target_tag(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackTarget {
    Unit(u64),
    Position(Point2),
}

impl From<AttackTarget> for Target {
    fn from(target: AttackTarget) -> Self {
        match target {
            AttackTarget::Unit(tag) => Target::Tag(tag),
            AttackTarget::Position(position) => Target::Pos(position),
        }
    }
}

/// Everything the decision pipeline needs from the running game.
///
/// Commands are submitted without waiting for the game to act on them.
/// Implementations subtract the cost of what they order right away so later
/// decisions on the same tick see the remaining resources.
pub trait Game {
    /// Map dimensions as (width, height).
    fn map_size(&self) -> (usize, usize);
    fn minerals(&self) -> u32;
    fn vespene(&self) -> u32;
    fn supply_cap(&self) -> u32;
    fn supply_left(&self) -> u32;

    /// All owned units or structures of the given type, ready or not.
    fn own(&self, unit_type: UnitTypeId) -> Vec<Sighting>;
    fn enemy_units(&self) -> Vec<Sighting>;
    fn enemy_structures(&self) -> Vec<Sighting>;
    fn enemy_start_locations(&self) -> Vec<Point2>;
    fn vespene_geysers(&self) -> Vec<Sighting>;
    fn mineral_fields(&self) -> Vec<Sighting>;

    /// Checks both the resource and the supply cost.
    fn can_afford(&self, unit_type: UnitTypeId) -> bool;
    /// Ordered, in production or under construction.
    fn is_pending(&self, unit_type: UnitTypeId) -> bool;
    fn select_build_worker(&self, near: Point2) -> Option<u64>;
    /// Like [`Game::select_build_worker`], skipping workers already headed to
    /// the extractor.
    fn select_gas_worker(&self, extractor: u64, near: Point2) -> Option<u64>;

    fn train(&mut self, producer: u64, unit_type: UnitTypeId);
    fn build_near(&mut self, unit_type: UnitTypeId, near: Point2) -> bool;
    fn build_gas(&mut self, worker: u64, geyser: u64);
    fn move_to(&mut self, unit: u64, position: Point2);
    fn attack(&mut self, unit: u64, target: AttackTarget);
    fn gather(&mut self, worker: u64, resource: u64);
    fn expand_now(&mut self);
}

fn sightings(units: &Units) -> Vec<Sighting> {
    units.iter().map(Sighting::from).collect()
}

/// Workers not building, not returning and not carrying anything.
fn free_workers(bot: &Bot) -> impl Iterator<Item = &Unit> {
    bot.units
        .my
        .workers
        .iter()
        .filter(|u| !(u.is_constructing() || u.is_returning() || u.is_carrying_resource()))
}

impl Game for Bot {
    fn map_size(&self) -> (usize, usize) {
        (self.game_info.map_size.x, self.game_info.map_size.y)
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
        sightings(&self.units.my.all.of_type(unit_type))
    }

    fn enemy_units(&self) -> Vec<Sighting> {
        sightings(&self.units.enemy.units)
    }

    fn enemy_structures(&self) -> Vec<Sighting> {
        sightings(&self.units.enemy.structures)
    }

    fn enemy_start_locations(&self) -> Vec<Point2> {
        vec![self.enemy_start]
    }

    fn vespene_geysers(&self) -> Vec<Sighting> {
        sightings(&self.units.vespene_geysers)
    }

    fn mineral_fields(&self) -> Vec<Sighting> {
        sightings(&self.units.mineral_fields)
    }

    fn can_afford(&self, unit_type: UnitTypeId) -> bool {
        Bot::can_afford(self, unit_type, true)
    }

    fn is_pending(&self, unit_type: UnitTypeId) -> bool {
        self.counter().ordered().count(unit_type) > 0
            || !self
                .units
                .my
                .structures
                .of_type(unit_type)
                .filter(|u| !u.is_ready())
                .is_empty()
    }

    fn select_build_worker(&self, near: Point2) -> Option<u64> {
        free_workers(self).closest(near).map(|u| u.tag())
    }

    fn select_gas_worker(&self, extractor: u64, near: Point2) -> Option<u64> {
        free_workers(self)
            .filter(|u| u.target_tag() != Some(extractor))
            .closest(near)
            .map(|u| u.tag())
    }

    fn train(&mut self, producer: u64, unit_type: UnitTypeId) {
        if let Some(unit) = self.units.my.all.get(producer).cloned() {
            debug!("training a {:?} at {:?}", unit_type, unit.type_id());
            unit.train(unit_type, false);
            self.subtract_resources(unit_type, true);
        }
    }

    fn build_near(&mut self, unit_type: UnitTypeId, near: Point2) -> bool {
        let location = match self.find_placement(unit_type, near, PlacementOptions::default()) {
            Some(location) => location,
            None => {
                debug!("No placement for {:?} near {:?}", unit_type, near);
                return false;
            }
        };
        let builder = Game::select_build_worker(self, location)
            .and_then(|tag| self.units.my.workers.get(tag).cloned());
        if let Some(builder) = builder {
            debug!("Placing a {:?} at {:?}", unit_type, location);
            builder.build(unit_type, location, false);
            self.subtract_resources(unit_type, false);
            true
        } else {
            debug!("Can't find a builder");
            false
        }
    }

    fn build_gas(&mut self, worker: u64, geyser: u64) {
        if let Some(builder) = self.units.my.workers.get(worker).cloned() {
            builder.build_gas(geyser, false);
            let gas = self.race_values.gas;
            self.subtract_resources(gas, false);
        }
    }

    fn move_to(&mut self, unit: u64, position: Point2) {
        if let Some(unit) = self.units.my.all.get(unit) {
            unit.move_to(Target::Pos(position), false);
        }
    }

    fn attack(&mut self, unit: u64, target: AttackTarget) {
        if let Some(unit) = self.units.my.all.get(unit) {
            unit.attack(target.into(), false);
        }
    }

    fn gather(&mut self, worker: u64, resource: u64) {
        if let Some(worker) = self.units.my.workers.get(worker) {
            worker.gather(resource, false);
        }
    }

    fn expand_now(&mut self) {
        let townhall = self.race_values.start_townhall;
        if self.counter().ordered().count(townhall) != 0 {
            return;
        }
        let start = self.start_location;
        let expansion = self.free_expansions().map(|e| e.loc).closest(start);
        if let Some(location) = expansion {
            let builder = Game::select_build_worker(self, location)
                .and_then(|tag| self.units.my.workers.get(tag).cloned());
            if let Some(builder) = builder {
                debug!("Expanding to {:?}", location);
                builder.build(townhall, location, false);
                self.subtract_resources(townhall, false);
            } else {
                debug!("No builder");
            }
        } else {
            debug!("No expansion location?");
        }
    }
}
