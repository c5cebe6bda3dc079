use crate::timing::format_lap_time;
use crate::timing::LapTimer;
use crate::vehicle::Vehicle;

#[derive(Clone, Debug)]
pub struct HudData {
    pub speed: i32,
    pub current_lap_time: String,
    pub best_lap_time: String,
    pub lap_count: u32,
}

impl HudData {
    pub fn new(vehicle: &Vehicle, timer: &LapTimer, speed_scale: f32, now: f64) -> Self {
        Self {
            // The displayed speed is an arbitrary scale of the physics value, not calibrated
            speed: (vehicle.speed * speed_scale).round().abs() as i32,
            current_lap_time: format_lap_time(timer.current_lap_time(now)),
            best_lap_time: format_lap_time(timer.best_lap_time()),
            lap_count: timer.lap_count(),
        }
    }
}
