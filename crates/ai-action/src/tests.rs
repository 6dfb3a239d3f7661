//! Unit tests for ai-action.

use std::cell::RefCell;
use std::rc::Rc;

use ai_core::{ActionId, Real};

use crate::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Records every `act` and every drop by name.
#[derive(Default)]
struct Harness {
    acts:  Log,
    drops: Log,
}

impl Harness {
    fn probe(&self, name: &'static str, priority: Real, ticks: u32) -> Probe {
        Probe {
            name,
            priority,
            ticks,
            interrupts: false,
            concurrent: false,
            acts:       self.acts.clone(),
            drops:      self.drops.clone(),
        }
    }

    fn acts(&self) -> Vec<&'static str> {
        self.acts.borrow().clone()
    }

    fn dropped(&self, name: &str) -> bool {
        self.drops.borrow().iter().any(|dropped| *dropped == name)
    }
}

struct Probe {
    name:       &'static str,
    priority:   Real,
    ticks:      u32,
    interrupts: bool,
    concurrent: bool,
    acts:       Log,
    drops:      Log,
}

impl Probe {
    fn interrupting(mut self) -> Self {
        self.interrupts = true;
        self
    }

    fn concurrent(mut self) -> Self {
        self.concurrent = true;
        self
    }
}

impl Action for Probe {
    fn priority(&self) -> Real {
        self.priority
    }

    fn can_interrupt(&self) -> bool {
        self.interrupts
    }

    fn can_do_both(&self, _other: &dyn Action) -> bool {
        self.concurrent
    }

    fn is_complete(&self) -> bool {
        self.ticks == 0
    }

    fn act(&mut self) {
        self.ticks = self.ticks.saturating_sub(1);
        self.acts.borrow_mut().push(self.name);
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.drops.borrow_mut().push(self.name);
    }
}

#[derive(Debug, PartialEq)]
enum Event {
    Interrupt(ActionId),
    Superseded(ActionId),
    Admit(ActionId),
    Complete(ActionId),
}

#[derive(Default)]
struct Recorder(Vec<Event>);

impl ActionObserver for Recorder {
    fn on_interrupt(&mut self, id: ActionId, _priority: Real) {
        self.0.push(Event::Interrupt(id));
    }

    fn on_superseded(&mut self, id: ActionId) {
        self.0.push(Event::Superseded(id));
    }

    fn on_admit(&mut self, id: ActionId) {
        self.0.push(Event::Admit(id));
    }

    fn on_complete(&mut self, id: ActionId) {
        self.0.push(Event::Complete(id));
    }
}

fn priorities(manager: &ActionManager) -> Vec<Real> {
    manager.queued().map(|(_, p)| p).collect()
}

// ── Action defaults ───────────────────────────────────────────────────────────

#[cfg(test)]
mod defaults {
    use super::*;

    struct Bare;

    impl Action for Bare {
        fn priority(&self) -> Real {
            1.0
        }
    }

    #[test]
    fn bare_action_is_a_polite_one_shot() {
        let mut bare = Bare;
        assert!(!bare.can_interrupt());
        assert!(!bare.can_do_both(&Bare));
        assert!(bare.is_complete());
        bare.act();
    }

    #[test]
    fn counted_action_finishes_after_its_ticks() {
        let mut a = CountedAction::new(2.0, 3).interrupting().concurrent();
        assert!(a.can_interrupt());
        assert!(a.can_do_both(&Bare));
        for left in (0..3).rev() {
            assert!(!a.is_complete());
            a.act();
            assert_eq!(a.remaining(), left);
        }
        assert!(a.is_complete());
        a.act();
        assert_eq!(a.remaining(), 0);

        let mut once = CountedAction::one_shot(1.0);
        once.act();
        assert!(once.is_complete());
    }
}

// ── ActionQueue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    fn entry(id: u64, priority: Real) -> Scheduled {
        Scheduled::new(ActionId(id), Box::new(CountedAction::one_shot(priority)))
    }

    #[test]
    fn sorted_descending_and_stable() {
        let mut q = ActionQueue::new();
        for (id, p) in [(0, 3.0), (1, 1.0), (2, 5.0), (3, 1.0), (4, 3.0)] {
            q.push(entry(id, p));
        }
        let order: Vec<(u64, Real)> = q.iter().map(|e| (e.id.0, e.priority)).collect();
        assert_eq!(order, vec![(2, 5.0), (0, 3.0), (4, 3.0), (1, 1.0), (3, 1.0)]);
        assert_eq!(q.peek().map(|e| e.id), Some(ActionId(2)));
    }

    #[test]
    fn remove_by_index() {
        let mut q = ActionQueue::new();
        q.push(entry(0, 1.0));
        q.push(entry(1, 2.0));
        assert!(q.remove(5).is_none());
        assert_eq!(q.remove(0).map(|e| e.id), Some(ActionId(1)));
        assert_eq!(q.len(), 1);
        q.clear();
        assert!(q.is_empty());
    }
}

// ── Compound actions ──────────────────────────────────────────────────────────

#[cfg(test)]
mod compound {
    use super::*;

    #[test]
    fn sequence_pops_completed_heads() {
        let h = Harness::default();
        let mut seq = ActionSequence::new(1.0).with(h.probe("first", 0.0, 1)).with(h.probe("second", 0.0, 1));

        seq.act();
        assert_eq!(seq.len(), 1);
        assert!(h.dropped("first"));
        assert!(!seq.is_complete());

        seq.act();
        assert!(seq.is_complete());
        assert_eq!(h.acts(), vec!["first", "second"]);
    }

    #[test]
    fn sequence_only_ticks_its_head() {
        let h = Harness::default();
        let mut seq = ActionSequence::new(1.0).with(h.probe("long", 0.0, 2)).with(h.probe("next", 0.0, 1));
        seq.act();
        seq.act();
        seq.act();
        assert_eq!(h.acts(), vec!["long", "long", "next"]);
        assert!(seq.is_complete());
    }

    #[test]
    fn sequence_interrupt_follows_head() {
        let h = Harness::default();
        let mut seq = ActionSequence::new(1.0)
            .with(h.probe("calm", 0.0, 1))
            .with(h.probe("urgent", 0.0, 1).interrupting());
        assert!(!seq.can_interrupt());
        seq.act();
        assert!(seq.can_interrupt());

        let mut empty = ActionSequence::new(0.0);
        assert!(empty.is_complete() && empty.is_empty());
        assert!(!empty.can_interrupt());
        empty.act();
    }

    #[test]
    fn combination_ticks_unfinished_members_until_all_done() {
        let h = Harness::default();
        let mut combo = ActionCombination::new(2.0).with(h.probe("short", 0.0, 1)).with(h.probe("long", 0.0, 3));
        assert_eq!(combo.len(), 2);

        combo.act();
        combo.act();
        assert!(!combo.is_complete());
        combo.act();
        assert!(combo.is_complete());
        assert_eq!(h.acts(), vec!["short", "long", "long", "long"]);
        // Finished members are kept until the combination itself goes.
        assert!(!h.dropped("short"));
        drop(combo);
        assert!(h.dropped("short") && h.dropped("long"));
    }

    #[test]
    fn compound_queries_aggregate_members() {
        let h = Harness::default();
        let other = CountedAction::one_shot(0.0);

        let combo = ActionCombination::new(1.0)
            .with(h.probe("a", 0.0, 1).concurrent())
            .with(h.probe("b", 0.0, 1).interrupting().concurrent());
        assert!(combo.can_interrupt());
        assert!(combo.can_do_both(&other));

        let mixed = ActionCombination::new(1.0)
            .with(h.probe("c", 0.0, 1).concurrent())
            .with(h.probe("d", 0.0, 1));
        assert!(!mixed.can_interrupt());
        assert!(!mixed.can_do_both(&other));
        assert!(ActionCombination::new(0.0).is_complete());
    }
}

// ── ActionManager ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod manager {
    use super::*;

    #[test]
    fn drains_in_priority_order_stable_among_equals() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        m.schedule(h.probe("a3", 3.0, 1)).unwrap();
        m.schedule(h.probe("b1", 1.0, 1)).unwrap();
        m.schedule(h.probe("c5", 5.0, 1)).unwrap();
        m.schedule(h.probe("d1", 1.0, 1)).unwrap();
        assert_eq!(priorities(&m), vec![5.0, 3.0, 1.0, 1.0]);

        for _ in 0..4 {
            m.execute();
        }
        assert_eq!(h.acts(), vec!["c5", "a3", "b1", "d1"]);
        assert!(m.is_idle());
    }

    #[test]
    fn interrupt_replaces_active_set_and_drops_it() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        let low = m.schedule(h.probe("low", 1.0, 100)).unwrap();
        m.execute();
        assert!(m.is_active(low));

        let high = m.schedule(h.probe("high", 10.0, 5).interrupting()).unwrap();
        m.execute();

        assert_eq!(m.active().collect::<Vec<_>>(), vec![(high, 10.0)]);
        assert!(h.dropped("low"));
        assert!(!m.is_queued(low) && !m.is_active(low));
        assert_eq!(m.active_priority(), 10.0);
        assert_eq!(h.acts().last(), Some(&"high"));
    }

    #[test]
    fn interrupt_needs_at_least_the_active_priority() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        let running = m.schedule(h.probe("running", 5.0, 10)).unwrap();
        m.execute();
        assert_eq!(m.active_priority(), 5.0);

        let weak = m.schedule(h.probe("weak", 3.0, 1).interrupting()).unwrap();
        m.execute();
        assert!(m.is_active(running));
        assert!(m.is_queued(weak));

        let equal = m.schedule(h.probe("equal", 5.0, 1).interrupting()).unwrap();
        m.execute();
        assert!(m.is_active(equal) || h.acts().contains(&"equal"));
        assert!(h.dropped("running"));
    }

    #[test]
    fn one_interrupter_per_tick() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        m.schedule(h.probe("idle", 1.0, 100)).unwrap();
        m.execute();

        let second = m.schedule(h.probe("second", 8.0, 10).interrupting()).unwrap();
        let first = m.schedule(h.probe("first", 10.0, 10).interrupting()).unwrap();
        m.execute();
        assert!(m.is_active(first));
        assert!(m.is_queued(second));

        // 8 is below the new active priority, so it keeps waiting.
        m.execute();
        assert!(m.is_active(first));
        assert!(m.is_queued(second));
    }

    #[test]
    fn compatible_actions_share_the_active_set() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        let walk = m.schedule(h.probe("walk", 2.0, 3).concurrent()).unwrap();
        let talk = m.schedule(h.probe("talk", 1.0, 3).concurrent()).unwrap();
        let loner = m.schedule(h.probe("loner", 1.5, 1)).unwrap();

        m.execute();
        let mut active: Vec<ActionId> = m.active().map(|(id, _)| id).collect();
        active.sort();
        assert_eq!(active, vec![walk, talk]);
        assert!(m.is_queued(loner));
        assert_eq!(h.acts(), vec!["walk", "talk"]);
    }

    #[test]
    fn admission_raises_active_priority() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        m.schedule(h.probe("low", 1.0, 100).concurrent()).unwrap();
        m.execute();
        assert_eq!(m.active_priority(), 1.0);

        let high = m.schedule(h.probe("high", 5.0, 100).concurrent()).unwrap();
        m.execute();
        assert!(m.is_active(high));
        assert_eq!(m.active_priority(), 5.0);

        // Admitting something lower leaves it alone.
        m.schedule(h.probe("quiet", 0.5, 100).concurrent()).unwrap();
        m.execute();
        assert_eq!(m.active_priority(), 5.0);

        let mid = m.schedule(h.probe("mid", 2.0, 1).interrupting()).unwrap();
        m.execute();
        assert!(m.is_queued(mid));
        assert!(m.is_active(high));
        assert!(!h.dropped("high"));
    }

    #[test]
    fn compatibility_must_hold_both_ways() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        m.schedule(h.probe("stubborn", 2.0, 5)).unwrap();
        let willing = m.schedule(h.probe("willing", 1.0, 5).concurrent()).unwrap();
        m.execute();
        assert!(m.is_queued(willing));
    }

    #[test]
    fn active_priority_resets_when_drained() {
        let mut m = ActionManager::new();
        m.schedule(CountedAction::new(7.0, 2)).unwrap();
        m.execute();
        assert_eq!(m.active_priority(), 7.0);
        m.execute();
        assert!(m.is_idle());
        assert_eq!(m.active_priority(), 0.0);
    }

    #[test]
    fn superseded_combination_drops_its_members() {
        let h = Harness::default();
        let mut m = ActionManager::new();
        m.schedule(ActionCombination::new(1.0).with(h.probe("x", 0.0, 9)).with(h.probe("y", 0.0, 9)))
            .unwrap();
        m.execute();
        m.schedule(CountedAction::one_shot(4.0).interrupting()).unwrap();
        m.execute();
        assert!(h.dropped("x") && h.dropped("y"));
    }

    #[test]
    fn nan_priority_is_rejected() {
        let mut m = ActionManager::new();
        let result = m.schedule(CountedAction::one_shot(Real::NAN));
        assert!(matches!(result, Err(ActionError::InvalidPriority(_))));
        assert!(m.is_idle());
        assert!(m.schedule(CountedAction::one_shot(Real::INFINITY)).is_ok());
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut m = ActionManager::new();
        let a = m.schedule(CountedAction::one_shot(1.0)).unwrap();
        let b = m.schedule(CountedAction::one_shot(1.0)).unwrap();
        assert!(a < b);
    }

    #[test]
    fn observer_sees_lifecycle_in_order() {
        let mut m = ActionManager::new();
        let mut rec = Recorder::default();
        let low = m.schedule(CountedAction::new(1.0, 10)).unwrap();
        m.execute_observed(&mut rec);
        let high = m.schedule(CountedAction::one_shot(3.0).interrupting()).unwrap();
        m.execute_observed(&mut rec);

        assert_eq!(
            rec.0,
            vec![Event::Admit(low), Event::Superseded(low), Event::Interrupt(high), Event::Complete(high)]
        );
        assert!(m.is_idle());
    }
}
