//! actions-demo — a guard's action schedule over a short shift.
//!
//! The guard patrols and hums, glances around at random, gets interrupted by
//! an alarm sequence, and then handles a queued combination once the alarm
//! is dealt with.  Every lifecycle change is printed by an observer.
//!
//! Usage: `actions-demo [config.json]` (an `AgentConfig`; only `seed` and
//! `frame_duration_secs` are used).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use ai_action::{Action, ActionCombination, ActionManager, ActionObserver, ActionSequence, CountedAction};
use ai_core::{ActionId, AgentConfig, AiRng, Frame, FrameClock, Real};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_FRAMES:     u64 = 120;
const ALARM_FRAME:    u64 = 12;
const RESPONSE_FRAME: u64 = 14;
/// One in this many frames schedules a glance.
const GLANCE_ODDS:    u32 = 8;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each lifecycle event with the action's name and the current frame.
#[derive(Default)]
struct LifecyclePrinter {
    names:      HashMap<ActionId, &'static str>,
    frame:      Frame,
    completed:  usize,
    superseded: usize,
}

impl LifecyclePrinter {
    fn name(&self, id: ActionId) -> &'static str {
        self.names.get(&id).copied().unwrap_or("?")
    }
}

impl ActionObserver for LifecyclePrinter {
    fn on_interrupt(&mut self, id: ActionId, priority: Real) {
        println!("{:>5}  INTERRUPT   {} (priority {priority})", self.frame.to_string(), self.name(id));
    }

    fn on_superseded(&mut self, id: ActionId) {
        self.superseded += 1;
        println!("{:>5}  superseded  {}", self.frame.to_string(), self.name(id));
    }

    fn on_admit(&mut self, id: ActionId) {
        println!("{:>5}  start       {}", self.frame.to_string(), self.name(id));
    }

    fn on_complete(&mut self, id: ActionId) {
        self.completed += 1;
        println!("{:>5}  done        {}", self.frame.to_string(), self.name(id));
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

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

fn schedule<A: Action + 'static>(
    manager: &mut ActionManager,
    printer: &mut LifecyclePrinter,
    name:    &'static str,
    action:  A,
) -> Result<ActionId> {
    let id = manager.schedule(action)?;
    printer.names.insert(id, name);
    Ok(id)
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
    let frame_ms = (config.frame_duration_secs * 1000.0).round() as u32;

    println!("=== actions-demo — guard shift ===");
    println!();

    let mut manager = ActionManager::new();
    let mut printer = LifecyclePrinter::default();
    let mut clock = FrameClock::new();
    let mut rng = AiRng::new(config.seed);

    schedule(&mut manager, &mut printer, "patrol", CountedAction::new(1.0, 40).concurrent())?;
    schedule(&mut manager, &mut printer, "hum", CountedAction::new(0.5, 15).concurrent())?;

    while clock.frame.0 < MAX_FRAMES {
        clock.advance(frame_ms);
        printer.frame = clock.frame;

        if rng.random_int(GLANCE_ODDS)? == 0 {
            schedule(&mut manager, &mut printer, "glance", CountedAction::one_shot(0.2).concurrent())?;
        }

        match clock.frame.0 {
            ALARM_FRAME => {
                let alarm = ActionSequence::new(10.0)
                    .with(CountedAction::one_shot(10.0).interrupting())
                    .with(CountedAction::new(10.0, 5));
                schedule(&mut manager, &mut printer, "alarm: shout, run", alarm)?;
            }
            RESPONSE_FRAME => {
                let response = ActionCombination::new(5.0)
                    .with(CountedAction::new(5.0, 2))
                    .with(CountedAction::new(5.0, 4));
                schedule(&mut manager, &mut printer, "respond: draw, radio", response)?;
            }
            _ => {}
        }

        manager.execute_observed(&mut printer);

        if clock.frame.0 > RESPONSE_FRAME && manager.is_idle() {
            break;
        }
    }

    println!();
    println!("Frames run:   {}", clock.frame);
    println!("Completed:    {}", printer.completed);
    println!("Superseded:   {}", printer.superseded);
    println!("Still queued: {}", manager.queued().count());

    Ok(())
}
