use std::sync::mpsc;

use anyhow::Context;
use glam::Vec3;

use arpakai_app::config::{self, AppConfig};
use arpakai_app::display::{ChannelDisplay, DisplayUpdate};
use arpakai_app::game_loop::spawn_game_loop;
use arpakai_app::input::spawn_stdin_reader;
use arpakai_app::score_slot::{read_score, JsonScoreSlot};
use arpakai_app::state::{new_shared_snapshot, read_snapshot};
use arpakai_app::tracking::ScriptedTracking;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::config_path(
        std::env::args().skip(1),
        std::env::var(config::CONFIG_ENV_VAR).ok(),
    ) {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match read_score(&config.score_path) {
        Ok(Some(score)) => log::info!("Last final score: {}", score),
        Ok(None) => {}
        Err(err) => log::warn!("Could not read previous score: {}", err),
    }

    let tracking = ScriptedTracking::new();
    tracking.look(Vec3::ZERO, Vec3::NEG_Z);

    let (display_tx, display_rx) = mpsc::channel::<DisplayUpdate>();
    let snapshot = new_shared_snapshot();

    let game_loop = spawn_game_loop(
        config.clone(),
        tracking.clone(),
        JsonScoreSlot::new(&config.score_path),
        ChannelDisplay::new(display_tx),
        snapshot.clone(),
    )
    .context("spawning game loop")?;

    // Detached: blocks on stdin and exits with the process.
    spawn_stdin_reader(game_loop.commands(), tracking).context("spawning input reader")?;
    println!("Commands: <enter>/fire, aim x y z, lost, start, quit");

    // Display updates are only ever printed from this thread.
    for update in display_rx {
        println!("{}", update.render());
        if matches!(update, DisplayUpdate::RoundEnded { .. }) {
            break;
        }
    }

    game_loop.join();

    if let Some(snap) = read_snapshot(&snapshot) {
        println!(
            "Fired {} projectiles, {} targets left ({} bonus)",
            snap.projectiles_fired, snap.targets_remaining, snap.bonus_targets_remaining
        );
    }
    Ok(())
}
