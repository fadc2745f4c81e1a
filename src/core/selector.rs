use rand::Rng;
use std::collections::HashSet;

/// Picks a uniformly random identifier in `[0, ceiling)` that is not yet in
/// `seen`, records it there, and returns it. Retries until an unused value
/// comes up; if `seen` already covers the whole range this never terminates.
/// Callers keep the seen-set small relative to the ceiling, so the hazard is
/// accepted rather than guarded.
pub fn select_unseen<R: Rng>(rng: &mut R, ceiling: u32, seen: &mut HashSet<u32>) -> u32 {
    loop {
        let candidate = rng.gen_range(0..ceiling);
        if seen.insert(candidate) {
            return candidate;
        }
    }
}
