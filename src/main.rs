//! Dino Dash headless runner
//!
//! Plays a seeded session with a simple autopilot. This binary stands in for
//! the host: it integrates gravity, detects overlaps and collisions, and feeds
//! the outcomes into the run core.
//!
//! Usage: `dino-dash [seed] [classic|turbo]`. Set `DINO_TUNING` to a JSON file
//! to override balance values.

use dino_dash::consts::*;
use dino_dash::sim::{GameEvent, ObstacleKind, RunState, Session, TickInput, first_overlap};
use dino_dash::{GameVersion, Tuning};

/// Simulated frame length (60 Hz)
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Total simulated time
const DEMO_SECONDS: f32 = 120.0;
/// Host gravity (pixels/s²)
const GRAVITY: f32 = 5000.0;
/// Pause on the game-over screen before restarting
const RESTART_DELAY_FRAMES: u32 = 60;
/// Autopilot reacts when an obstacle is this close
const REACTION_DISTANCE: f32 = 160.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(20_240_601);
    let version = args
        .next()
        .and_then(|s| GameVersion::parse(&s))
        .unwrap_or_default();

    let tuning = match load_tuning(version) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Dino Dash (headless) starting...");
    let mut session = Session::new(seed, tuning);
    let mut game_over_frames = 0;
    let total_frames = (DEMO_SECONDS * 1000.0 / FRAME_MS) as u32;

    for _ in 0..total_frames {
        let mut input = autopilot(&session);
        if session.run_state() == RunState::GameOver {
            game_over_frames += 1;
            if game_over_frames >= RESTART_DELAY_FRAMES {
                input.restart = true;
                game_over_frames = 0;
            }
        }

        session.advance(FRAME_MS, &input);
        step_physics(&mut session, FRAME_MS / 1000.0);
        detect_contacts(&mut session);

        for event in session.drain_events() {
            match event {
                GameEvent::GameOver {
                    score,
                    high_score,
                    new_record,
                    rank,
                } => {
                    println!(
                        "Run over: {:05} (Top: {:05}, #{}){}",
                        score,
                        high_score,
                        rank,
                        if new_record { " NEW RECORD" } else { "" }
                    );
                }
                GameEvent::ScoreMilestone(score) => log::info!("Milestone {}", score),
                other => log::trace!("{:?}", other),
            }
        }
    }

    let state = session.state();
    println!(
        "Session {} finished: {} runs, best {}",
        state.seed,
        state.high_scores.runs().len(),
        state.high_scores.best()
    );
}

fn load_tuning(version: GameVersion) -> Result<Tuning, Box<dyn std::error::Error>> {
    match std::env::var("DINO_TUNING") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path);
            Ok(tuning)
        }
        Err(_) => Ok(Tuning::from_version(version)),
    }
}

/// Jump over ground obstacles and low birds, duck under high birds.
/// While idle, jump to reach the start trigger.
fn autopilot(session: &Session) -> TickInput {
    let state = session.state();
    let player = &state.player;

    match state.run_state() {
        RunState::Idle => TickInput {
            jump: player.on_floor,
            ..Default::default()
        },
        RunState::Running => {
            let front = player.pos.x + PLAYER_WIDTH;
            let next = state
                .obstacles
                .iter()
                .filter(|o| o.bounds().right() > player.pos.x)
                .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

            let Some(obstacle) = next else {
                return TickInput::default();
            };
            if obstacle.pos.x - front > REACTION_DISTANCE {
                return TickInput::default();
            }

            let ground_y = state.tuning.viewport_height;
            let high_bird = obstacle.kind == ObstacleKind::Bird
                && obstacle.hitbox().max.y <= ground_y - PLAYER_HEIGHT + state.tuning.duck_offset;
            if high_bird {
                TickInput {
                    duck_held: true,
                    ..Default::default()
                }
            } else {
                TickInput {
                    jump: true,
                    ..Default::default()
                }
            }
        }
        RunState::WarmingUp | RunState::GameOver => TickInput::default(),
    }
}

/// Minimal stand-in for the host physics engine
fn step_physics(session: &mut Session, dt: f32) {
    let state = session.state_mut();
    if state.physics_paused {
        return;
    }
    let ground_y = state.tuning.viewport_height;
    let max_x = state.tuning.viewport_width - PLAYER_WIDTH;
    let player = &mut state.player;

    let before_y = player.pos.y;
    player.vel.y += GRAVITY * dt;
    player.pos += player.vel * dt;
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    if player.pos.y >= ground_y {
        player.pos.y = ground_y;
        player.vel.y = 0.0;
        player.on_floor = true;
    } else {
        player.on_floor = false;
    }
    player.delta_abs_y = (player.pos.y - before_y).abs();
}

/// Overlap with the start trigger, collision with obstacles
fn detect_contacts(session: &mut Session) {
    let hitbox = session.state().player.hitbox();

    let trigger = &session.state().trigger;
    if trigger.enabled && trigger.bounds().intersects(&hitbox) {
        session.on_trigger_overlap();
    }

    if session.run_state() != RunState::Running {
        return;
    }
    if let Some(id) = first_overlap(&hitbox, &session.state().obstacles) {
        log::debug!("Hit obstacle #{}", id);
        session.on_collision();
    }
}
