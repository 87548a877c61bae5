use approx::{assert_abs_diff_eq, assert_relative_eq};

use asteroid_rage::{
    BodySet, ConsumePolicy, ControlInput, Controls, ControlsConfig, Engine, GameConfig, GameSession, NVec2, Parameters,
    ScreenProjection, SessionState,
};

fn controls() -> Controls {
    Controls::from(&ControlsConfig::default())
}

/// Player at the origin plus the given (position, mass, density) bodies, all at rest
fn session_with(engine: Engine, others: &[(NVec2, f64, f64)]) -> GameSession {
    let mut set = BodySet::new(engine, Parameters::default());
    set.push(NVec2::zeros(), NVec2::zeros(), 1.0e-4, 5.0e6);
    for &(x, m, rho) in others {
        set.push(x, NVec2::zeros(), m, rho);
    }
    GameSession::new(set, controls(), ScreenProjection::new(800, 600, 30.0, 1.0), 0.01)
}

fn far_star() -> GameSession {
    session_with(Engine::default(), &[(NVec2::new(1000.0, 0.0), 1.0, 2.3e6)])
}

// ==================================================================================
// Ship controls
// ==================================================================================

#[test]
fn rotation_wraps_heading() {
    let mut session = far_star();

    session.tick(&ControlInput { rotate_ccw: true, ..Default::default() }).unwrap();
    assert_abs_diff_eq!(session.heading(), 358.0, epsilon = 1e-12);

    session.tick(&ControlInput { rotate_cw: true, ..Default::default() }).unwrap();
    session.tick(&ControlInput { rotate_cw: true, ..Default::default() }).unwrap();
    assert_abs_diff_eq!(session.heading(), 2.0, epsilon = 1e-12);
}

#[test]
fn boost_pushes_player_and_burns_fuel() {
    let mut session = far_star();
    let dt = session.dt();

    session.tick(&ControlInput { boost: true, ..Default::default() }).unwrap();

    // the player frame absorbs the boost, so the star recoils instead
    let star = session.system().body(1).unwrap();
    assert_abs_diff_eq!(star.v.y, -dt, epsilon = 1e-9);
    assert_eq!(session.system().player().unwrap().v, NVec2::zeros());

    let expected = 1.0e-4 - controls().flow_rate * dt;
    assert_relative_eq!(session.system().player().unwrap().m, expected, max_relative = 1e-12);
}

#[test]
fn empty_tank_blocks_boost() {
    let mut set = BodySet::new(Engine::default(), Parameters::default());
    set.push(NVec2::zeros(), NVec2::zeros(), controls().dry_mass, 5.0e6);
    set.push(NVec2::new(1000.0, 0.0), NVec2::zeros(), 1.0, 2.3e6);
    let mut session = GameSession::new(set, controls(), ScreenProjection::new(800, 600, 30.0, 1.0), 0.01);

    assert_eq!(session.fuel(), None);
    session.tick(&ControlInput { boost: true, ..Default::default() }).unwrap();

    assert_abs_diff_eq!(session.system().body(1).unwrap().v.y, 0.0, epsilon = 1e-12);
    assert_eq!(session.system().player().unwrap().m, controls().dry_mass);
}

#[test]
fn view_controls_scale_dt_and_zoom() {
    let mut session = far_star();
    let c = controls();

    session
        .tick(&ControlInput { speed_up: true, zoom_in: true, ..Default::default() })
        .unwrap();
    assert_relative_eq!(session.dt(), 0.01 * c.speed_up, max_relative = 1e-12);
    assert_relative_eq!(session.projection().zoom(), c.zoom_in, max_relative = 1e-12);

    session
        .tick(&ControlInput { slow_down: true, zoom_out: true, ..Default::default() })
        .unwrap();
    assert_relative_eq!(session.dt(), 0.01 * c.speed_up * c.slow_down, max_relative = 1e-12);
    assert_relative_eq!(session.projection().zoom(), c.zoom_in * c.zoom_out, max_relative = 1e-12);
    assert_relative_eq!(session.elapsed(), 0.01 + 0.01 * c.speed_up, max_relative = 1e-12);
}

// ==================================================================================
// Collision and consumption
// ==================================================================================

#[test]
fn overlapping_body_destroys_player() {
    // radius of (1e-3, 1e6) at scale 500 is about 0.31 AU
    let mut session = session_with(Engine::default(), &[(NVec2::new(0.1, 0.0), 1.0e-3, 1.0e6)]);

    let outcome = session.tick(&ControlInput::default()).unwrap();
    assert_eq!(outcome.state, SessionState::Destroyed);

    // terminal state: further ticks do nothing
    let elapsed = session.elapsed();
    let outcome = session.tick(&ControlInput { boost: true, ..Default::default() }).unwrap();
    assert_eq!(outcome.state, SessionState::Destroyed);
    assert_eq!(session.elapsed(), elapsed);
}

#[test]
fn out_of_range_body_is_not_eaten() {
    let mut session = session_with(Engine::default(), &[(NVec2::new(5.0, 0.0), 1.0e-3, 1.0e6)]);

    let outcome = session.tick(&ControlInput { consume: true, ..Default::default() }).unwrap();
    assert!(!outcome.in_range);
    assert_eq!(outcome.consumed, None);
    assert_eq!(session.system().body(1).unwrap().m, 1.0e-3);
}

#[test]
fn gradual_eating_ends_in_victory() {
    let mut session = session_with(Engine::default(), &[(NVec2::new(1.0, 0.0), 1.0e-3, 1.0e6)]);
    let id = session.system().body(1).unwrap().id;
    let eat = ControlInput { consume: true, ..Default::default() };

    let outcome = session.tick(&eat).unwrap();
    assert!(outcome.in_range);
    assert_eq!(outcome.consumed, None);
    assert_relative_eq!(session.system().body(1).unwrap().m, 9.0e-4, max_relative = 1e-9);
    assert_relative_eq!(session.system().player().unwrap().m, 2.0e-4, max_relative = 1e-9);

    let mut last = outcome;
    for _ in 0..20 {
        last = session.tick(&eat).unwrap();
        if last.consumed.is_some() {
            break;
        }
    }

    assert_eq!(last.consumed, Some(id));
    assert_eq!(last.state, SessionState::Victory);
    assert_eq!(session.progress(), (1, 1));
    assert_relative_eq!(session.system().total_mass(), 1.1e-3, max_relative = 1e-9);
}

#[test]
fn instant_eating_removes_on_first_bite() {
    let engine = Engine {
        consume_policy: ConsumePolicy::Instant,
        ..Engine::default()
    };
    let mut session = session_with(
        engine,
        &[(NVec2::new(1.0, 0.0), 1.0e-3, 1.0e6), (NVec2::new(-20.0, 0.0), 1.0, 2.3e6)],
    );
    let id = session.system().body(1).unwrap().id;

    let outcome = session.tick(&ControlInput { consume: true, ..Default::default() }).unwrap();
    assert_eq!(outcome.consumed, Some(id));
    assert_eq!(outcome.state, SessionState::Playing);
    assert_eq!(session.system().len(), 2);
    assert_eq!(session.progress(), (1, 2));
}

// ==================================================================================
// Full session
// ==================================================================================

#[test]
fn default_session_starts_playing() {
    let session = GameSession::from_config(&GameConfig::default());

    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.progress(), (0, 8));
    assert_relative_eq!(session.fuel().unwrap(), 1.0e-4 - 1.0e-5, max_relative = 1e-12);
    assert_eq!(session.projection().width(), 1920);
}

#[test]
fn idle_session_keeps_player_at_origin() {
    let mut session = GameSession::from_config(&GameConfig::default());

    for _ in 0..100 {
        let outcome = session.tick(&ControlInput::default()).unwrap();
        if outcome.state != SessionState::Playing {
            break;
        }
        let player = session.system().player().unwrap();
        assert_eq!(player.x, NVec2::zeros());
        assert_eq!(player.v, NVec2::zeros());
    }
}
