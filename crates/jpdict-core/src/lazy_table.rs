//! Lazily loaded index table with idle eviction.
//!
//! A table is loaded on first access and dropped again once it has gone
//! unread for its TTL. Every access goes through one per-table lock that
//! cancels the pending eviction, loads if needed and re-arms the timer, so a
//! reader never sees a table disappear between the load check and the read.
//! Readers receive an `Arc` snapshot; eviction only drops the table's own
//! reference.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::LoadError;

/// Idle time after which a loaded table is evicted
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

type LoadFn<T> = dyn Fn() -> Result<T, LoadError> + Send + Sync;

struct Slot<T> {
    contents: Option<Arc<T>>,
    /// Bumped every time the eviction timer is armed
    generation: u64,
    eviction: Option<CancellationToken>,
}

struct Shared<T> {
    name: &'static str,
    slot: Mutex<Slot<T>>,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop the contents unless the table was accessed after this timer was armed
    fn evict_if_current(&self, generation: u64) {
        let mut slot = self.lock();
        if slot.generation != generation {
            return;
        }
        slot.eviction = None;
        if slot.contents.take().is_some() {
            tracing::info!(table = self.name, "Evicted idle table");
        }
    }
}

pub struct LazyTable<T> {
    shared: Arc<Shared<T>>,
    loader: Box<LoadFn<T>>,
    ttl: Duration,
    runtime: Handle,
}

impl<T: Send + Sync + 'static> LazyTable<T> {
    /// Create an unloaded table. Eviction timers are spawned on `runtime`.
    pub fn new<F>(name: &'static str, ttl: Duration, runtime: Handle, loader: F) -> Self
    where
        F: Fn() -> Result<T, LoadError> + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                name,
                slot: Mutex::new(Slot {
                    contents: None,
                    generation: 0,
                    eviction: None,
                }),
            }),
            loader: Box::new(loader),
            ttl,
            runtime,
        }
    }

    /// Get the table contents, loading them if needed
    pub fn contents(&self) -> Result<Arc<T>, LoadError> {
        let mut slot = self.shared.lock();

        // Cancel before looking at the contents so the timer can't fire in between
        if let Some(pending) = slot.eviction.take() {
            pending.cancel();
        }

        let contents = match slot.contents.clone() {
            Some(contents) => contents,
            None => {
                tracing::info!(table = self.shared.name, "Loading table");
                let loaded = Arc::new((self.loader)()?);
                slot.contents = Some(Arc::clone(&loaded));
                loaded
            }
        };

        self.arm(&mut slot);
        Ok(contents)
    }

    fn arm(&self, slot: &mut Slot<T>) {
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;

        let token = CancellationToken::new();
        slot.eviction = Some(token.clone());

        let deadline = Instant::now() + self.ttl;
        let shared: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep_until(deadline) => {
                    if let Some(shared) = shared.upgrade() {
                        shared.evict_if_current(generation);
                    }
                }
            }
        });
    }
}

impl<T> LazyTable<T> {
    pub fn name(&self) -> &'static str {
        self.shared.name
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_loaded(&self) -> bool {
        self.shared.lock().contents.is_some()
    }

    /// Drop the cached contents now; the next access reloads
    pub fn evict(&self) {
        let mut slot = self.shared.lock();
        if let Some(pending) = slot.eviction.take() {
            pending.cancel();
        }
        slot.generation = slot.generation.wrapping_add(1);
        slot.contents = None;
    }
}

impl<T> Drop for LazyTable<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.shared.lock().eviction.take() {
            pending.cancel();
        }
    }
}
