//! Headless battle runner.
//!
//! Drives the scene at the nominal tick rate without a renderer, logging
//! battle events as they happen and printing a JSON snapshot plus score
//! summary at the end. Useful for tuning AI constants and for soak-testing
//! the simulation outside the wallpaper host.

use std::time::{Duration, Instant};

use skirmish_core::constants::{TICK_DT, TICK_RATE};
use skirmish_sim::render::{NullRenderContext, SceneObject};
use skirmish_sim::scene::{BattleScene, SceneConfig};

/// Wall-clock duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Battle length in ticks (10 seconds at the nominal rate).
const DEFAULT_RUN_TICKS: u64 = TICK_RATE as u64 * 10;

fn main() {
    env_logger::init();

    let mut config = SceneConfig::default();
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }

    log::info!("starting battle, seed {}", config.seed);

    let mut scene = BattleScene::new(config);
    let mut ctx = NullRenderContext;
    let mut next_tick_time = Instant::now();

    for _ in 0..DEFAULT_RUN_TICKS {
        scene.tick(TICK_DT);
        for event in scene.drain_events() {
            log::info!("{event:?}");
        }
        scene.draw(&mut ctx);

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }

    let snapshot = scene.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }

    let score = scene.score();
    println!(
        "battle over after {:.1}s: {} enemies destroyed, {} player deaths, {} shots dropped",
        scene.time().elapsed_secs,
        score.enemies_destroyed,
        score.player_deaths,
        score.shots_dropped
    );
}
