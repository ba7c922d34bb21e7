//! Paddle Break headless host
//!
//! Drives the simulation at a fixed timestep with an autopilot pointer and
//! logs what happens. Useful for soak-testing tunables without a window.
//!
//! Usage: `paddle-break [config.json] [ticks]`

use std::process::ExitCode;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use paddle_break::consts::SIM_DT;
use paddle_break::sim::{Contact, GameState, TickInput, tick};
use paddle_break::Config;

/// Ticks to run when none are given (one minute at 60 Hz)
const DEFAULT_TICKS: u64 = 60 * 60;
/// Autopilot seed, fixed so runs are reproducible
const AUTOPILOT_SEED: u64 = 0x5EED_BA11;
/// How far the autopilot may miss the ball center (pixels)
const AUTOPILOT_JITTER: f64 = 30.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Paddle Break running {} ticks", ticks);

    let mut rng = Pcg32::seed_from_u64(AUTOPILOT_SEED);
    let mut balls_lost = 0u32;
    let mut blocks_destroyed = 0u32;
    let mut last = None;

    for _ in 0..ticks {
        // Aim near the ball, not exactly at it, so every paddle zone gets used
        let jitter = rng.random_range(-AUTOPILOT_JITTER..AUTOPILOT_JITTER);
        let pointer = state.ball.rect().center_x() + jitter;
        let result = tick(&mut state, &TickInput::pointer(pointer), SIM_DT);

        for contact in &result.contacts {
            if let Contact::Block { id, face } = contact {
                blocks_destroyed += 1;
                log::info!("Tick {}: block {} destroyed ({:?})", result.tick, id, face);
            }
        }
        if result.ball_lost {
            balls_lost += 1;
            log::info!("Tick {}: ball lost ({} so far)", result.tick, balls_lost);
        }

        let cleared = state.config().variant.has_blocks() && result.blocks.is_empty();
        last = Some(result);
        if cleared {
            log::info!("Block field cleared");
            break;
        }
    }

    log::info!(
        "Finished: {} blocks destroyed, {} balls lost, {} blocks left",
        blocks_destroyed,
        balls_lost,
        state.blocks.len()
    );

    if let Some(result) = last {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize final tick: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
