//! Turf Wars entry point
//!
//! Headless demo: runs a four-quadrant session with power-ups for a fixed
//! number of frames and prints the final snapshot as JSON. Set RUST_LOG for
//! progress output.

use turf_wars::session::SessionController;
use turf_wars::settings::{GameConfig, Topology};
use turf_wars::sim::GameEvent;

/// Frames per simulated second of the synthetic clock
const FPS: u32 = 60;
/// Demo length in seconds
const DEMO_SECS: u32 = 30;

fn main() {
    env_logger::init();

    let config = GameConfig {
        topology: Topology::FourQuadrant,
        powerups_enabled: true,
        powerup_interval_secs: 3,
        sound_enabled: false,
    };
    let mut session = match SessionController::new(config, 0xC0FFEE) {
        Ok(session) => session,
        Err(err) => {
            log::error!("bad configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut conversions = 0u64;
    for frame in 0..FPS * DEMO_SECS {
        let now = frame as f64 / FPS as f64;
        for event in session.frame(now) {
            if event == GameEvent::CellConverted {
                conversions += 1;
            }
        }

        if frame % (FPS * 5) == 0 {
            let snap = session.snapshot();
            log::info!(
                "t={now:>5.1}s cells={:?} balls={:?} power-ups={}",
                snap.scores.cells,
                snap.scores.balls,
                snap.powerups.len()
            );
        }
    }

    log::info!("{conversions} cells converted over {DEMO_SECS}s");
    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
