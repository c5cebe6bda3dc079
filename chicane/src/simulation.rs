use crate::config::ConfigData;
use crate::hud::HudData;
use crate::input::InputEvent;
use crate::input::InputState;
use crate::timing::LapTimer;
use crate::track::Track;
use crate::vehicle::Vehicle;
use crate::vehicle::VehicleTuning;
use anyhow::Result;
use glam::Vec2;
use std::f32::consts::PI;

pub const WORLD_SIZE: Vec2 = Vec2::new(800.0, 600.0);
pub const SPAWN_POSITION: Vec2 = Vec2::new(550.0, 90.0);
pub const SPAWN_HEADING: f32 = PI;

pub struct Simulation {
    pub input: InputState,
    pub track: Track,
    pub vehicle: Vehicle,
    pub timer: LapTimer,
    hud_speed_scale: f32,
}

#[derive(Clone, Debug)]
pub struct TickSnapshot {
    pub position: Vec2,
    pub heading: f32,
    pub lap_completed: bool,
    pub hud: HudData,
}

impl Simulation {
    pub fn new(config: &ConfigData, now: f64) -> Result<Self> {
        let tuning = VehicleTuning::new(config.max_speed, config.acceleration, config.friction, config.turn_rate, config.min_turn_speed);

        Ok(Self {
            input: InputState::default(),
            track: Track::circuit()?,
            vehicle: Vehicle::new(SPAWN_POSITION, SPAWN_HEADING, tuning),
            timer: LapTimer::new(now),
            hud_speed_scale: config.hud_speed_scale,
        })
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.process(event);
    }

    pub fn tick(&mut self, now: f64) -> TickSnapshot {
        self.vehicle.step(&self.input, &self.track);

        let lap_completed = self.track.check_lap_crossing(self.vehicle.position, self.vehicle.heading);
        if lap_completed {
            self.timer.on_crossing(now);
        }

        TickSnapshot {
            position: self.vehicle.position,
            heading: self.vehicle.heading,
            lap_completed,
            hud: HudData::new(&self.vehicle, &self.timer, self.hud_speed_scale, now),
        }
    }
}
