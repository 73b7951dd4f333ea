//! Courier Dash entry point
//!
//! Headless demo driver: loads the campaign from `levels/` and runs the
//! simulation with a scripted input until the run ends. Rendering and real
//! input belong to an external front end; this binary exercises the core
//! and persists the run statistics.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use courier_dash::Stats;
use courier_dash::sim::{SessionPhase, SessionState, TickInput, tick};

const STATS_PATH: &str = "stats.json";
const LEVEL_DIR: &str = "levels";

/// Tick cap for the scripted run; a stuck script should not spin forever
const MAX_TICKS: u32 = 50_000;

fn main() -> ExitCode {
    env_logger::init();

    let campaign = match campaign_levels(LEVEL_DIR) {
        Ok(campaign) if !campaign.is_empty() => campaign,
        Ok(_) => {
            log::error!("no level files under {LEVEL_DIR}/");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            log::error!("cannot read {LEVEL_DIR}/: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = Stats::load(STATS_PATH);
    let mut session = match SessionState::new(campaign, stats) {
        Ok(session) => session,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut ticks = 0u32;
    while session.running && ticks < MAX_TICKS {
        // Scripted input: walk right, hop periodically.
        let input = TickInput {
            move_x: Some(1.0),
            jump: ticks % 45 == 0,
        };
        if let Err(err) = tick(&mut session, &input) {
            log::error!("{err}");
            break;
        }
        ticks += 1;
    }

    if session.running {
        session.quit_to_menu();
    }

    match session.phase {
        SessionPhase::GameOver(outcome) => log::info!(
            "run over after {ticks} ticks: {outcome:?}, {} dollars, {} left",
            session.score,
            session.timer.display(),
        ),
        phase => log::info!("run stopped after {ticks} ticks in {phase:?}"),
    }

    if let Err(err) = session.stats.save(STATS_PATH) {
        log::error!("could not save stats: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Level files under the campaign directory, in name order
fn campaign_levels(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut levels: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    levels.sort();
    Ok(levels)
}
