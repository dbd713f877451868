//! Cycle detection for deterministic simulations.
//!
//! Repeatedly applying a step function to a hashable state (a [`Grid`],
//! a tuple of positions, ...) eventually repeats on any finite state space.
//! [`detect`] records every state seen until the first repeat and returns
//! a [`Cycle`] that answers "what is the state after `n` steps" for any `n`
//! without simulating that far.
//!
//! [`Grid`]: crate::Grid

use std::collections::HashMap;
use std::hash::Hash;

/// The prefix and loop of a state sequence `s0, s1 = step(s0), ...`.
#[derive(Clone, Debug)]
pub struct Cycle<S> {
    /// Index of the first state that belongs to the loop.
    pub start: usize,
    /// Number of states in the loop (at least 1).
    pub period: usize,
    states: Vec<S>,
}

impl<S> Cycle<S> {
    /// The state after `n` steps.
    pub fn state_at(&self, n: usize) -> &S {
        if n < self.states.len() {
            &self.states[n]
        } else {
            &self.states[self.start + (n - self.start) % self.period]
        }
    }

    /// Every distinct state, in the order first visited.
    pub fn states(&self) -> &[S] {
        &self.states
    }
}

/// Step from `initial` until a state repeats.
///
/// Never returns if the sequence does not repeat; see [`detect_within`].
pub fn detect<S, F>(initial: S, mut step: F) -> Cycle<S>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut seen: HashMap<S, usize> = HashMap::new();
    let mut states = Vec::new();
    let mut cur = initial;
    loop {
        if let Some(cycle) = record(&mut seen, &mut states, &cur) {
            return cycle;
        }
        cur = step(&cur);
    }
}

/// Like [`detect`], but gives up after `max_steps` steps.
pub fn detect_within<S, F>(initial: S, max_steps: usize, mut step: F) -> Option<Cycle<S>>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut seen: HashMap<S, usize> = HashMap::new();
    let mut states = Vec::new();
    let mut cur = initial;
    for _ in 0..=max_steps {
        if let Some(cycle) = record(&mut seen, &mut states, &cur) {
            return Some(cycle);
        }
        cur = step(&cur);
    }
    log::debug!("no cycle within {max_steps} steps");
    None
}

fn record<S: Clone + Eq + Hash>(
    seen: &mut HashMap<S, usize>,
    states: &mut Vec<S>,
    cur: &S,
) -> Option<Cycle<S>> {
    if let Some(&start) = seen.get(cur) {
        let period = states.len() - start;
        log::debug!("cycle found: start {start}, period {period}");
        return Some(Cycle {
            start,
            period,
            states: std::mem::take(states),
        });
    }
    seen.insert(cur.clone(), states.len());
    states.push(cur.clone());
    None
}
