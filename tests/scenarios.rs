//! End-to-end runs of small hand-built levels

use std::f32::consts::PI;

use glam::Vec2;
use ring_escape::consts::{BOUNCE_JITTER, FIXED_DT};
use ring_escape::level::{BallDef, LevelConfig, RingDef};
use ring_escape::sim::{Contact, FixedJitter, GameState, GameStatus, SeededJitter, TickEvent, tick};

const CENTER: Vec2 = Vec2::new(200.0, 200.0);

fn single_ring(ball: BallDef) -> GameState {
    let level = LevelConfig {
        rings: vec![RingDef::new(80.0, PI / 2.0, 0.0)],
        ball,
    };
    level.validate().expect("valid level");
    GameState::new(&level, CENTER)
}

#[test]
fn escape_through_gap_clears_last_ring() {
    let mut state = single_ring(BallDef { x: 200.0, y: 200.0, vx: 160.0, vy: 0.0, r: 8.0 });
    let mut jitter = FixedJitter(0.5);

    let mut ticks = 0;
    while !state.status.is_terminal() {
        let event = tick(&mut state, &mut jitter, FIXED_DT);
        ticks += 1;
        assert!(ticks <= 30, "ball should reach the ring within 30 ticks");
        if let Some(Contact::Bounced { .. }) = event.contact() {
            panic!("ball moving along angle 0 must not bounce");
        }
    }

    assert_eq!(state.status, GameStatus::Success);
    assert!(state.rings.is_empty());
    assert_eq!(state.escapes, 1);
    // The final escape applies no growth
    assert_eq!(state.ball.radius, 8.0);
}

#[test]
fn bounce_off_solid_arc() {
    // Moving left, the ball meets the ring at angle π, outside the [0, π/2) gap
    let mut state = single_ring(BallDef { x: 200.0, y: 200.0, vx: -160.0, vy: 0.0, r: 8.0 });
    let mut jitter = FixedJitter(0.5);

    loop {
        let before = state.clone();
        match tick(&mut state, &mut jitter, FIXED_DT).contact() {
            Some(Contact::Bounced { angle, normal }) => {
                assert!((angle - PI).abs() < 1e-4);
                assert!((normal - Vec2::new(-1.0, 0.0)).length() < 1e-4);
                assert!((state.ball.radius - 8.05).abs() < 1e-5);
                assert!((state.ball.vel.x - 160.0).abs() < 1e-3);
                assert!(state.ball.vel.y.abs() < 1e-3);

                let moved_x = before.ball.pos.x + before.ball.vel.x * FIXED_DT;
                assert!((state.ball.pos.x - (moved_x + 1.5)).abs() < 1e-3);
                assert_eq!(state.status, GameStatus::Playing);
                assert_eq!(state.rings.len(), 1);
                break;
            }
            Some(Contact::None) => assert!(state.time_ticks < 40),
            other => panic!("unexpected contact {:?}", other),
        }
    }
}

#[test]
fn bounce_jitter_is_bounded_and_keeps_speed() {
    let mut state = single_ring(BallDef { x: 200.0, y: 200.0, vx: -160.0, vy: 0.0, r: 8.0 });
    let mut jitter = SeededJitter::new(2024);

    while tick(&mut state, &mut jitter, FIXED_DT).contact() == Some(Contact::None) {}

    assert_eq!(state.bounces, 1);
    assert!((state.ball.speed() - 160.0).abs() < 1e-2);
    let heading = state.ball.vel.y.atan2(state.ball.vel.x);
    assert!(heading.abs() <= BOUNCE_JITTER + 1e-5, "heading {}", heading);
}

#[test]
fn grown_ball_loses_on_next_ring() {
    // After escaping the first ring the ball is 23 across; the second ring
    // only opens 100 * 0.2 = 20
    let level = LevelConfig {
        rings: vec![RingDef::new(80.0, PI / 2.0, 0.0), RingDef::new(100.0, 0.2, 0.0)],
        ball: BallDef { x: 200.0, y: 200.0, vx: 160.0, vy: 0.0, r: 8.0 },
    };
    level.validate().expect("valid level");
    let mut state = GameState::new(&level, CENTER);
    let mut jitter = FixedJitter(0.5);

    let mut escape_tick = None;
    while !state.status.is_terminal() {
        let event = tick(&mut state, &mut jitter, FIXED_DT);
        if let Some(Contact::Escaped { remaining }) = event.contact() {
            assert_eq!(remaining, 1);
            assert_eq!(state.status, GameStatus::Playing);
            assert!((state.ball.radius - 11.5).abs() < 1e-5);
            assert!((state.ball.vel.x - 168.0).abs() < 1e-3);
            escape_tick = Some(state.time_ticks);
        }
        assert!(state.time_ticks < 60);
    }

    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(Some(state.time_ticks - 1), escape_tick);
    assert_eq!(state.rings.len(), 1);

    // Frozen from here on
    let frozen = state.clone();
    assert_eq!(tick(&mut state, &mut jitter, FIXED_DT), TickEvent::Halted);
    assert_eq!(state, frozen);
}

#[test]
fn default_level_always_finishes() {
    for seed in [1, 7, 42, 1234, 99999] {
        let mut state = GameState::new(&LevelConfig::default(), CENTER);
        let mut jitter = SeededJitter::new(seed);
        let mut ticks = 0;
        while !state.status.is_terminal() && ticks < 500_000 {
            tick(&mut state, &mut jitter, FIXED_DT);
            ticks += 1;
        }
        assert!(state.status.is_terminal(), "seed {} never finished", seed);
    }
}
