use chicane::config::ConfigLoader;
use chicane::error_return;
use chicane::input::InputEvent;
use chicane::input::Key;
use chicane::instant::Instant;
use chicane::simulation::Simulation;
use log::info;
use log::Level;
use std::thread;
use std::time::Duration;

const HUD_LOG_INTERVAL_TICKS: u64 = 30;

fn main() {
    simple_logger::init_with_level(Level::Info).unwrap();

    let config = ConfigLoader::new("config.json");
    let mut simulation = match Simulation::new(&config.data, 0.0) {
        Ok(simulation) => simulation,
        Err(err) => error_return!("Failed to initialize simulation ({})", err),
    };

    simulation.handle_event(InputEvent::KeyPress { key: Key::ArrowUp, repeat: false });
    info!("Hotlap session started, flat out from the grid");

    let started = Instant::now();
    let mut ticks = 0;

    loop {
        let now = started.elapsed().as_secs_f64() * 1000.0;
        if now >= config.data.demo_duration_ms as f64 {
            break;
        }

        let snapshot = simulation.tick(now);

        if snapshot.lap_completed || ticks % HUD_LOG_INTERVAL_TICKS == 0 {
            let hud = &snapshot.hud;
            info!(
                "Lap {} | time {} | best {} | {:3} km/h | ({:.1}, {:.1})",
                hud.lap_count, hud.current_lap_time, hud.best_lap_time, hud.speed, snapshot.position.x, snapshot.position.y
            );
        }

        ticks += 1;
        thread::sleep(Duration::from_millis(config.data.tick_interval_ms));
    }

    info!("Session over after {} ticks", ticks);
}
