pub mod config;
pub mod hud;
pub mod input;
pub mod simulation;
pub mod timing;
pub mod track;
pub mod utils;
pub mod vehicle;

pub use anyhow;
pub use glam;
pub use instant;
pub use log;
pub use tinyjson;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { log::error!($($arg)+); return; } };
}
