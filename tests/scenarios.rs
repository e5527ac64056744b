//! End-to-end run scenarios driven through the public API

use dino_dash::sim::{
    GameEvent, GameState, ObstacleDescriptor, ObstacleKind, RunState, Session, TickInput, tick,
};
use dino_dash::{GameVersion, Tuning};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn start_running(state: &mut GameState) {
    assert!(!state.on_trigger_overlap());
    assert!(state.on_trigger_overlap());
    while !state.warmup_tick() {}
}

#[test]
fn trigger_warmup_and_first_run() {
    let mut state = GameState::new(42, Tuning::from_version(GameVersion::Turbo));

    // First overlap at y=10 is spurious
    assert_eq!(state.trigger.pos.y, 10.0);
    assert!(!state.on_trigger_overlap());
    assert_eq!(state.run_state(), RunState::Idle);
    assert_ne!(state.trigger.pos.y, 10.0);

    assert!(state.on_trigger_overlap());
    assert_eq!(state.run_state(), RunState::WarmingUp);

    let mut widths = Vec::new();
    while !state.warmup_tick() {
        widths.push(state.warmup().map(|w| w.width()).unwrap());
    }
    // +34 per tick, past the viewport, up to the completion width
    assert_eq!(widths[0], 88.0 + 34.0);
    assert!(widths.windows(2).all(|w| w[1] - w[0] == 34.0));
    assert!(widths.iter().any(|&w| w >= 600.0));
    assert!(widths.iter().all(|&w| w < 1000.0));

    assert_eq!(state.run_state(), RunState::Running);
    assert_eq!(state.ground.width, 600.0);
    assert_eq!(state.player.vel.x, 0.0);
}

#[test]
fn collision_at_speed_twenty_with_score_150() {
    let mut state = GameState::new(42, Tuning::from_version(GameVersion::Turbo));
    start_running(&mut state);
    assert_eq!(state.difficulty.speed(), 20.0);

    for _ in 0..150 {
        state.score_tick();
    }
    assert_eq!(state.score.value(), 150);

    assert!(state.on_collision());
    assert_eq!(state.high_scores.best(), 150);
    assert_eq!(state.run_state(), RunState::GameOver);
    assert_eq!(state.score.value(), 0);
    assert_eq!(state.difficulty.speed(), 20.0);
    assert!(state.hud.game_over.visible);
    assert_eq!(state.hud.high_score.text, "Top: 00150");
}

#[test]
fn obstacle_at_2000_is_culled() {
    let tuning = Tuning {
        spawn_threshold: f32::MAX,
        ..Tuning::from_version(GameVersion::Turbo)
    };
    let mut state = GameState::new(42, tuning);
    start_running(&mut state);

    let id = state.place_obstacle(ObstacleDescriptor {
        kind: ObstacleKind::Bird,
        offset: 1400.0,
        altitude: Some(22.0),
    });
    assert_eq!(state.obstacles[0].pos.x, 2000.0);

    let mut frames = 0;
    while state.obstacles.iter().any(|o| o.id == id) {
        tick(&mut state, &TickInput::default(), FRAME_MS);
        frames += 1;
        assert!(frames < 1000);
    }
    // Bird is 92 wide: 2000 + 92 - 20 * frames < 0
    assert_eq!(frames, 105);
    assert!(state.drain_events().contains(&GameEvent::ObstacleCulled { id }));
}

#[test]
fn high_score_tracks_max_across_restarts() {
    let mut state = GameState::new(7, Tuning::default());
    start_running(&mut state);

    let runs = [120u32, 30, 480, 479, 0, 250];
    let mut expected_best = 0;
    for (i, &score) in runs.iter().enumerate() {
        if i > 0 {
            assert!(state.restart());
            assert_eq!(state.difficulty.speed(), state.difficulty.base());
            assert_eq!(state.spawner.timer(), 0.0);
            assert_eq!(state.score.value(), 0);
        }
        for _ in 0..score {
            state.score_tick();
        }
        state.on_collision();
        expected_best = expected_best.max(score);
        assert_eq!(state.high_scores.best(), expected_best);
    }
    assert_eq!(state.high_scores.runs().len(), runs.len());
}

#[test]
fn illegal_requests_are_ignored() {
    let mut state = GameState::new(7, Tuning::default());
    assert!(!state.restart());
    assert!(!state.on_collision());
    assert!(!state.warmup_tick());
    assert!(!state.score_tick());
    assert_eq!(state.run_state(), RunState::Idle);

    start_running(&mut state);
    assert!(!state.restart());
    assert!(!state.on_trigger_overlap());
    assert_eq!(state.run_state(), RunState::Running);
}

#[test]
fn session_plays_through_warmup_and_game_over() {
    let mut session = Session::new(11, Tuning::from_version(GameVersion::Classic));
    session.on_trigger_overlap();
    session.on_trigger_overlap();

    let input = TickInput::default();
    for _ in 0..60 {
        session.advance(FRAME_MS, &input);
    }
    assert_eq!(session.run_state(), RunState::Running);
    assert!(!session.warmup_timer_active());

    // Ten seconds of running
    for _ in 0..600 {
        session.advance(FRAME_MS, &input);
    }
    let score = session.state().score.value();
    assert!(score > 80, "score {score}");
    assert!(session.state().difficulty.speed() > 10.0);

    assert!(session.on_collision());
    assert!(!session.on_collision());
    assert_eq!(session.state().high_scores.best(), score);

    // Game over freezes score and speed
    for _ in 0..120 {
        session.advance(FRAME_MS, &input);
    }
    assert_eq!(session.state().score.value(), 0);
    assert_eq!(session.state().difficulty.speed(), 10.0);

    assert!(session.restart());
    assert_eq!(session.run_state(), RunState::Running);
    assert!(session.state().obstacles.is_empty());
}
