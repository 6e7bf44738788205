//! Bouncing Balls headless runner
//!
//! Usage: `bouncing-balls [scene.json] [frames]`
//!
//! Without a scene file the classic two-ball drop in an 800x600 px window
//! (4 m x 3 m at 200 px/m) is used. Frames are fed at a steady 60 Hz
//! through the fixed-step driver and ball positions are logged once per
//! simulated second.

use bouncing_balls::consts::{PIXELS_PER_METER, SIM_DT};
use bouncing_balls::{FixedStepDriver, Scene, SimConfig};

const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;
const DEFAULT_FRAMES: u32 = 600;

fn main() {
    let mut args = std::env::args().skip(1);

    let scene = match args.next() {
        Some(path) => match Scene::load(&path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Failed to load scene {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Scene::classic(
            WINDOW_WIDTH / PIXELS_PER_METER,
            WINDOW_HEIGHT / PIXELS_PER_METER,
            SimConfig::new(true, true, false),
        ),
    };

    let frames = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Invalid frame count: {}", e);
            std::process::exit(1);
        }
        None => DEFAULT_FRAMES,
    };

    let default_filter = if scene.config.debug_logging_enabled {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::info!("Bouncing Balls (native) starting...");

    let sim = match scene.build() {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut driver = FixedStepDriver::new(sim);
    let frames_per_report = (1.0 / SIM_DT).round() as u32;

    for frame in 1..=frames {
        driver.advance(SIM_DT);

        if frame % frames_per_report == 0 {
            let sim = driver.simulation();
            log::info!(
                "t={:.2}s energy={:.4}",
                sim.elapsed(),
                sim.kinetic_energy()
            );
            for ball in sim.snapshot() {
                log::info!(
                    "  ball {}: ({:.3}, {:.3}) r={:.2}",
                    ball.id,
                    ball.position[0],
                    ball.position[1],
                    ball.radius
                );
            }
        }
    }

    log::info!(
        "Done: {} steps, {:.2}s simulated",
        driver.simulation().time_ticks(),
        driver.simulation().elapsed()
    );
}
