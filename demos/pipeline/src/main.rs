//! pipeline-demo — one character steering through a rock field.
//!
//! The character seeks a fixed goal through a `SteeringPipe`: a sub-goal
//! decomposer keeps each leg short, a sphere-avoidance constraint bends the
//! leg around rocks, and a priority list of avoid-then-wander behaviours
//! takes over when the constraint loop cannot settle.
//!
//! Usage: `pipeline-demo [config.json]` (an `AgentConfig` such as
//! `demos/agent.json`; missing fields take their defaults).  Set
//! `RUST_LOG=debug` to watch the resolution loop.

mod scene;

use std::path::Path;

use anyhow::{Context, Result};

use ai_core::{AgentConfig, AiRng, FrameClock, Kinematic};
use ai_pipeline::{
    AvoidSpheresConstraint, BasicActuator, FixedGoalTargeter, Goal, Resolution, SteeringPipeBuilder,
    SubGoalDecomposer,
};
use ai_steering::{AvoidSphere, PrioritySteering, Wander};

use scene::{GOAL, START, build_obstacles, clearance};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_FRAMES:      u64 = 3_600;
const LEG_LENGTH:      f32 = 25.0;
const ARRIVAL_RADIUS:  f32 = 2.0;
const LOOKAHEAD_SECS:  f32 = 1.5;

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<AgentConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AgentConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── Resolution tally ──────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    resolved:  u64,
    detoured:  u64,
    fallback:  u64,
    exhausted: u64,
}

impl Tally {
    fn record(&mut self, resolution: Option<Resolution>) {
        match resolution {
            Some(Resolution::Resolved { rounds: 1 }) => self.resolved += 1,
            Some(Resolution::Resolved { .. }) => self.detoured += 1,
            Some(Resolution::Fallback) => self.fallback += 1,
            Some(Resolution::Exhausted) | None => self.exhausted += 1,
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== pipeline-demo — steering pipe through a rock field ===");
    println!(
        "Max speed: {}  |  Max accel: {}  |  Constraint steps: {}  |  Margin: {}",
        config.max_speed, config.max_acceleration, config.constraint_steps, config.avoid_margin
    );

    // 1. Course.
    let obstacles = build_obstacles();
    println!("Obstacles: {}  |  Start: {START}  |  Goal: {GOAL}", obstacles.len());

    // 2. Fallback: dodge whatever is ahead, otherwise wander.
    let mut rng = AiRng::new(config.seed);
    let lookahead = config.max_speed * LOOKAHEAD_SECS;
    let mut fallback = PrioritySteering::new(config.priority_epsilon)?;
    for &rock in obstacles.iter() {
        fallback.push(AvoidSphere::new(rock, config.avoid_margin, lookahead, config.max_acceleration));
    }
    fallback.push(Wander::new(
        config.wander_volatility,
        config.wander_turn_speed,
        config.max_acceleration,
        rng.child(1),
    ));

    // 3. Pipe.
    let mut pipe = SteeringPipeBuilder::new()
        .constraint_steps(config.constraint_steps)
        .targeter(FixedGoalTargeter::new(Goal::new().with_position(GOAL)))
        .decomposer(SubGoalDecomposer::new(LEG_LENGTH))
        .constraint(AvoidSpheresConstraint::new(obstacles.clone(), config.avoid_margin))
        .actuator(BasicActuator::new(config.max_acceleration))
        .fallback(fallback)
        .build()?;

    // 4. Frame loop.
    let mut character = Kinematic::at(START);
    let mut clock = FrameClock::new();
    let frame_ms = (config.frame_duration_secs * 1000.0).round() as u32;
    let mut tally = Tally::default();
    let mut tightest = f32::INFINITY;

    while clock.frame.0 < MAX_FRAMES {
        clock.advance(frame_ms);

        let steer = pipe.get_steering(&character)?;
        tally.record(pipe.last_resolution());

        character.integrate_steering(&steer, config.frame_duration_secs);
        character.trim_max_speed(config.max_speed);
        character.set_orientation_from_velocity();

        tightest = tightest.min(clearance(character.position, &obstacles));
        if clock.frame.0 % 120 == 0 {
            tracing::info!(frame = %clock.frame, position = %character.position, "progress");
        }
        if character.position.distance(GOAL) < ARRIVAL_RADIUS {
            break;
        }
    }

    // 5. Summary.
    let arrived = character.position.distance(GOAL) < ARRIVAL_RADIUS;
    println!();
    println!("Frames run:       {}", clock.frame);
    println!("Arrived:          {arrived}");
    println!("Final position:   {}", character.position);
    println!("Tightest gap:     {tightest:.2}");
    println!(
        "Resolution:       {} direct, {} detoured, {} fallback, {} exhausted",
        tally.resolved, tally.detoured, tally.fallback, tally.exhausted
    );

    Ok(())
}
