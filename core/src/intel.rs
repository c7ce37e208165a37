use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use rust_sc2::prelude::*;

use crate::game::{Game, Sighting};
use crate::params::*;
use crate::{AIComponent, BotState};

/// Colors are written blue, green, red.
const fn bgr(b: u8, g: u8, r: u8) -> Rgb<u8> {
    Rgb([r, g, b])
}

// (unit type, radius, color)
const OWN_UNITS: [(UnitTypeId, i32, Rgb<u8>); 10] = [
    (UnitTypeId::Nexus, 15, bgr(0, 255, 0)),
    (UnitTypeId::Pylon, 3, bgr(20, 235, 0)),
    (UnitTypeId::Assimilator, 2, bgr(55, 200, 0)),
    (UnitTypeId::Gateway, 3, bgr(200, 100, 0)),
    (UnitTypeId::CyberneticsCore, 3, bgr(150, 150, 0)),
    (UnitTypeId::Stargate, 5, bgr(255, 0, 0)),
    (UnitTypeId::RoboticsFacility, 5, bgr(215, 155, 0)),
    (UnitTypeId::Probe, 1, bgr(55, 200, 0)),
    (UnitTypeId::VoidRay, 3, bgr(255, 100, 0)),
    (UnitTypeId::Observer, 3, bgr(255, 255, 255)),
];

const MAIN_BASES: [UnitTypeId; 3] = [
    UnitTypeId::Nexus,
    UnitTypeId::SupplyDepot,
    UnitTypeId::Hatchery,
];
const WORKERS: [UnitTypeId; 3] = [UnitTypeId::Probe, UnitTypeId::SCV, UnitTypeId::Drone];

const ENEMY_MAIN_BASE: (i32, Rgb<u8>) = (15, bgr(0, 0, 255));
const ENEMY_STRUCTURE: (i32, Rgb<u8>) = (5, bgr(200, 50, 212));
const ENEMY_WORKER: (i32, Rgb<u8>) = (1, bgr(55, 0, 155));
const ENEMY_UNIT: (i32, Rgb<u8>) = (3, bgr(50, 0, 215));
const SCOUT_MARK: (i32, Rgb<u8>) = (1, bgr(255, 255, 255));

const MILITARY_ROW: i32 = 19;
const SUPPLY_ROW: i32 = 15;
const POPULATION_ROW: i32 = 11;
const VESPENE_ROW: i32 = 7;
const MINERAL_ROW: i32 = 3;
const GAUGE_THICKNESS: u32 = 3;

/// Resource and supply ratios drawn as bars, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauges {
    pub military: f32,
    pub supply: f32,
    pub population: f32,
    pub vespene: f32,
    pub minerals: f32,
}

impl Gauges {
    pub fn read(game: &dyn Game) -> Self {
        let supply_cap = game.supply_cap();
        let supply_left = game.supply_left();
        let supply_used = supply_cap.saturating_sub(supply_left);
        let military = if supply_used == 0 {
            1f32
        } else {
            game.own(AIR_ARMY).len() as f32 / supply_used as f32
        };
        let population = if supply_cap == 0 {
            0f32
        } else {
            supply_left as f32 / supply_cap as f32
        };
        Self {
            military: military.min(1f32),
            supply: (supply_cap as f32 / SUPPLY_NORMALIZER).min(1f32),
            population: population.min(1f32),
            vespene: (game.vespene() as f32 / RESOURCE_NORMALIZER).min(1f32),
            minerals: (game.minerals() as f32 / RESOURCE_NORMALIZER).min(1f32),
        }
    }

    fn rows(&self) -> [(i32, f32, Rgb<u8>); 5] {
        [
            (MILITARY_ROW, self.military, bgr(250, 250, 200)),
            (SUPPLY_ROW, self.supply, bgr(220, 200, 200)),
            (POPULATION_ROW, self.population, bgr(150, 150, 150)),
            (VESPENE_ROW, self.vespene, bgr(210, 200, 0)),
            (MINERAL_ROW, self.minerals, bgr(0, 255, 25)),
        ]
    }
}

/// Length in pixels of a bar for the given ratio.
pub fn bar_length(ratio: f32) -> u32 {
    (GAUGE_LENGTH as f32 * ratio.clamp(0f32, 1f32)) as u32
}

fn pixel(position: Point2) -> (i32, i32) {
    (position.x as i32, position.y as i32)
}

fn mark(frame: &mut RgbImage, sighting: &Sighting, (radius, color): (i32, Rgb<u8>)) {
    draw_filled_circle_mut(frame, pixel(sighting.position), radius, color);
}

/// Draws the known state of the game, top-down, one pixel per map cell.
///
/// The raster is flipped vertically at the end so the map's origin ends up
/// in the bottom-left corner.
pub fn render(game: &dyn Game) -> RgbImage {
    let (width, height) = game.map_size();
    let mut frame = RgbImage::new(width as u32, height as u32);

    for (unit_type, radius, color) in OWN_UNITS {
        for unit in game.own(unit_type).iter().filter(|u| u.is_ready) {
            mark(&mut frame, unit, (radius, color));
        }
    }

    let enemy_structures = game.enemy_structures();
    for structure in enemy_structures
        .iter()
        .filter(|s| !MAIN_BASES.contains(&s.type_id))
    {
        mark(&mut frame, structure, ENEMY_STRUCTURE);
    }
    for structure in enemy_structures
        .iter()
        .filter(|s| MAIN_BASES.contains(&s.type_id))
    {
        mark(&mut frame, structure, ENEMY_MAIN_BASE);
    }

    for unit in game.enemy_units().iter() {
        if WORKERS.contains(&unit.type_id) {
            mark(&mut frame, unit, ENEMY_WORKER);
        } else {
            mark(&mut frame, unit, ENEMY_UNIT);
        }
    }

    for scout in game.own(SCOUT).iter().filter(|u| u.is_ready) {
        mark(&mut frame, scout, SCOUT_MARK);
    }

    for (row, ratio, color) in Gauges::read(game).rows() {
        let length = bar_length(ratio) + 1;
        let top = row - GAUGE_THICKNESS as i32 / 2;
        draw_filled_rect_mut(
            &mut frame,
            Rect::at(0, top).of_size(length, GAUGE_THICKNESS),
            color,
        );
    }

    imageops::flip_vertical_in_place(&mut frame);
    frame
}

#[cfg(feature = "display")]
mod window {
    use image::imageops::{self, FilterType};
    use image::RgbImage;
    use log::warn;
    use minifb::{Window, WindowOptions};

    #[derive(Default)]
    pub struct Display {
        window: Option<Window>,
    }

    impl Display {
        /// Shows the frame at twice its size.
        pub fn show(&mut self, frame: &RgbImage) {
            let (width, height) = (frame.width() * 2, frame.height() * 2);
            let resized = imageops::resize(frame, width, height, FilterType::Triangle);
            let buffer = resized
                .pixels()
                .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
                .collect::<Vec<u32>>();

            if self.window.is_none() {
                match Window::new(
                    "Intel",
                    width as usize,
                    height as usize,
                    WindowOptions::default(),
                ) {
                    Ok(window) => self.window = Some(window),
                    Err(e) => {
                        warn!("Unable to open intel window: {}", e);
                        return;
                    }
                }
            }
            if let Some(window) = self.window.as_mut() {
                if let Err(e) = window.update_with_buffer(&buffer, width as usize, height as usize)
                {
                    warn!("Intel window closed: {}", e);
                    self.window = None;
                }
            }
        }
    }
}

#[derive(Default)]
pub struct IntelManager {
    #[cfg(feature = "display")]
    display: Option<window::Display>,
}

impl AIComponent for IntelManager {
    fn process(&mut self, game: &mut dyn Game, bot_state: &mut BotState) {
        let frame = render(game);
        #[cfg(feature = "display")]
        self.display
            .get_or_insert_with(window::Display::default)
            .show(&frame);
        bot_state.snapshot = Some(frame);
    }
}
