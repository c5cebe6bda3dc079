use crate::utils::json::read_value_or;
use anyhow::anyhow;
use anyhow::Result;
use log::error;
use std::collections::HashMap;
use std::fs;
use tinyjson::JsonValue;

#[derive(Clone, Debug)]
pub struct ConfigLoader {
    pub path: String,
    pub data: ConfigData,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConfigData {
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub turn_rate: f32,
    pub min_turn_speed: f32,
    pub hud_speed_scale: f32,
    pub tick_interval_ms: u64,
    pub demo_duration_ms: u64,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            acceleration: 0.10,
            friction: 0.05,
            turn_rate: 0.035,
            min_turn_speed: 0.3,
            hud_speed_scale: 40.0,
            tick_interval_ms: 16,
            demo_duration_ms: 30000,
        }
    }
}

impl ConfigLoader {
    pub fn new(path: &str) -> Self {
        let mut loader = Self { path: path.to_string(), data: ConfigData::default() };

        if let Err(err) = loader.reload() {
            error!("Failed to load configuration from {} ({}), falling back to defaults", loader.path, err);
        }

        loader
    }

    pub fn reload(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        let json = content.parse::<JsonValue>().map_err(|err| anyhow!("Invalid configuration format ({})", err))?;
        let data = json.get::<HashMap<String, JsonValue>>().ok_or_else(|| anyhow!("Configuration root is not an object"))?;

        let defaults = ConfigData::default();
        self.data = ConfigData {
            max_speed: read_value_or(data, "max_speed", defaults.max_speed as f64) as f32,
            acceleration: read_value_or(data, "acceleration", defaults.acceleration as f64) as f32,
            friction: read_value_or(data, "friction", defaults.friction as f64) as f32,
            turn_rate: read_value_or(data, "turn_rate", defaults.turn_rate as f64) as f32,
            min_turn_speed: read_value_or(data, "min_turn_speed", defaults.min_turn_speed as f64) as f32,
            hud_speed_scale: read_value_or(data, "hud_speed_scale", defaults.hud_speed_scale as f64) as f32,
            tick_interval_ms: read_value_or(data, "tick_interval_ms", defaults.tick_interval_ms as f64) as u64,
            demo_duration_ms: read_value_or(data, "demo_duration_ms", defaults.demo_duration_ms as f64) as u64,
        };

        Ok(())
    }
}
