//! Orbit Catch entry point
//!
//! Headless demo: plays rounds on the simulation clock with a scripted
//! shield-reversal cadence and logs the action.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use orbit_catch::consts::TICK_RATE;
use orbit_catch::sim::GameSnapshot;
use orbit_catch::{DemoSettings, RoundObserver, SimulationClock};

/// Logs deflections and the miss as the round unfolds
#[derive(Default)]
struct LogObserver {
    ticks: u64,
    score: u32,
}

impl RoundObserver for LogObserver {
    fn on_tick(&mut self, snapshot: &GameSnapshot) {
        self.ticks += 1;
        self.score = snapshot.score;
    }

    fn on_scored(&mut self) {
        log::info!("deflection! score {} at tick {}", self.score, self.ticks);
    }

    fn on_missed(&mut self) {
        log::info!("ball escaped at tick {}", self.ticks);
    }
}

fn main() {
    env_logger::init();
    log::info!("Orbit Catch (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => DemoSettings::load(Path::new(&path)),
        None => DemoSettings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("seed: {seed}");

    let mut clock = SimulationClock::new(seed);

    for round in 0..settings.rounds {
        if round == 0 {
            clock.start();
        } else {
            clock.restart();
        }

        let mut observer = LogObserver::default();
        let mut ticks: u64 = 0;
        while ticks < settings.max_ticks {
            if settings.reverse_period > 0 && ticks % settings.reverse_period == 0 && ticks > 0 {
                clock.reverse_shield();
            }
            let active = clock.tick(&mut observer);
            ticks += 1;
            if !active {
                break;
            }
        }

        let snapshot = clock.snapshot();
        let sim_secs = ticks as f32 / TICK_RATE as f32;
        if clock.is_active() {
            log::warn!(
                "round {}: tick budget exhausted after {ticks} ticks, score {}",
                round + 1,
                snapshot.score
            );
        } else {
            log::info!(
                "round {}: over after {ticks} ticks (~{sim_secs:.1}s at {TICK_RATE} Hz), score {}",
                round + 1,
                snapshot.score
            );
        }
        if let Ok(json) = serde_json::to_string(snapshot) {
            log::debug!("final snapshot: {json}");
        }
    }
}
