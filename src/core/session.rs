use crate::core::{selector, renderer};
use crate::core::{Card, ConfigProvider, DisplaySurface, RecordSource, Result, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// One display session: owns the seen-identifier set, the RNG, and the display
/// surface. Add and reset are independent and unsynchronized beyond the state
/// lock; the lock is never held across the network await, so a reset during an
/// in-flight fetch does not cancel it. The late card lands on the cleared
/// display with its identifier absent from the emptied seen-set — the
/// original's race, preserved deliberately.
pub struct Session<S: RecordSource, D: DisplaySurface> {
    source: S,
    display: D,
    ceiling: u32,
    inner: Mutex<SessionInner>,
}

struct SessionInner {
    seen: HashSet<u32>,
    rng: StdRng,
}

impl<S: RecordSource, D: DisplaySurface> Session<S, D> {
    pub fn new<C: ConfigProvider>(source: S, display: D, config: &C) -> Self {
        let rng = match config.rng_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            source,
            display,
            ceiling: config.id_ceiling(),
            inner: Mutex::new(SessionInner {
                seen: HashSet::new(),
                rng,
            }),
        }
    }

    /// The "add" control: draw one unseen identifier, fetch its record, render
    /// a card, append it. Errors are logged here and swallowed; the user sees
    /// no card and no message beyond the log line.
    pub async fn add(&self) {
        match self.try_add().await {
            Ok(card) => tracing::info!("Added card: {}", card.name),
            Err(e) => tracing::error!("Add produced no card: {}", e),
        }
    }

    /// Same chain as [`add`](Self::add) with the error surfaced. The selected
    /// identifier stays in the seen-set even when the fetch fails.
    pub async fn try_add(&self) -> Result<Card> {
        let id = {
            let mut inner = self.lock_inner();
            let inner = &mut *inner;
            selector::select_unseen(&mut inner.rng, self.ceiling, &mut inner.seen)
        };
        tracing::debug!("Selected identifier {}", id);

        let record = self.source.fetch(id).await?;
        let card = renderer::render(&record)?;
        self.display.append(card.clone());
        Ok(card)
    }

    /// The "clear" control: drop every displayed card and forget all seen
    /// identifiers. Synchronous and infallible.
    pub fn reset(&self) {
        self.display.clear();
        self.lock_inner().seen.clear();
        tracing::debug!("Session reset");
    }

    pub fn state(&self) -> SessionState {
        if self.lock_inner().seen.is_empty() && self.display.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Populated
        }
    }

    pub fn seen_count(&self) -> usize {
        self.lock_inner().seen.len()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn lock_inner(&self) -> MutexGuard<'_, SessionInner> {
        // A poisoned lock only means another add panicked mid-selection; the
        // seen-set is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
