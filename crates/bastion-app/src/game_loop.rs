//! Game loop: drives the simulation engine one frame at a time.
//!
//! Headless: there is no renderer, so the loop either runs as fast as it can
//! with a fixed `dt` of one nominal frame, or paces itself at 60 Hz and feeds
//! the engine the measured wall-clock delta.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use bastion_core::commands::PlayerCommand;
use bastion_core::enums::GamePhase;
use bastion_core::events::GameEvent;
use bastion_core::types::frame_dt;
use bastion_sim::SimulationEngine;

use crate::autopilot::Autopilot;

/// Target frame rate when pacing in real time.
pub const FRAME_RATE: u64 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many frames even if the game is still running.
    pub max_frames: u64,
    /// Sleep between frames and use measured deltas.
    pub realtime: bool,
    pub autopilot: bool,
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub rounds_completed: u32,
    pub enemies_destroyed: u32,
    pub structures_lost: u32,
    pub interceptors_launched: u32,
}

/// Run frames until the game reaches `Win` or `GameOver`, or the frame budget
/// is spent. Rounds are advanced as soon as they end.
pub fn run(engine: &mut SimulationEngine, options: &LoopOptions) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut autopilot = Autopilot::new();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    while summary.frames < options.max_frames {
        if options.autopilot && engine.phase() == GamePhase::Playing {
            if let Some(point) = autopilot.aim(engine) {
                engine.queue_command(PlayerCommand::Fire {
                    x: point.x,
                    y: point.y,
                });
            }
        }

        let dt = if options.realtime {
            let now = Instant::now();
            let dt = frame_dt(now - last_frame);
            last_frame = now;
            dt
        } else {
            1.0
        };
        engine.tick(dt);
        summary.frames += 1;

        for event in engine.drain_events() {
            tally(&mut summary, &event);
        }

        match engine.phase() {
            GamePhase::RoundEnd => {
                autopilot.reset();
                engine.queue_command(PlayerCommand::AdvanceRound);
            }
            GamePhase::Win | GamePhase::GameOver => break,
            GamePhase::Start | GamePhase::Playing => {}
        }

        if options.realtime {
            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > FRAME_DURATION * 2 {
                // Fell behind; resync instead of catching up
                next_frame_time = now;
            }
        }
    }

    info!(
        frames = summary.frames,
        phase = ?engine.phase(),
        score = engine.score(),
        round = engine.round(),
        "Run finished"
    );
    summary
}

fn tally(summary: &mut RunSummary, event: &GameEvent) {
    match event {
        GameEvent::RoundComplete { .. } => summary.rounds_completed += 1,
        GameEvent::EnemyDestroyed { .. } => summary.enemies_destroyed += 1,
        GameEvent::StructureDestroyed { kind, .. } => {
            debug!(?kind, "Structure lost");
            summary.structures_lost += 1;
        }
        GameEvent::InterceptorLaunched { .. } => summary.interceptors_launched += 1,
        _ => {}
    }
}
