//! Source of fresh tab ids, injected into the tab reducer so it stays deterministic.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TabId;

pub trait TabIdGenerator: Send + Sync {
    fn next_id(&self) -> TabId;
}

impl<F> TabIdGenerator for F
where
    F: Fn() -> TabId + Send + Sync,
{
    fn next_id(&self) -> TabId {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTabIdGenerator;

impl TabIdGenerator for UuidTabIdGenerator {
    fn next_id(&self) -> TabId {
        TabId::new()
    }
}

/// Yields `{prefix}-1`, `{prefix}-2`, ... Useful for replaying a session deterministically.
#[derive(Debug)]
pub struct SequentialTabIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTabIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialTabIdGenerator {
    fn default() -> Self {
        Self::new("tab")
    }
}

impl TabIdGenerator for SequentialTabIdGenerator {
    fn next_id(&self) -> TabId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TabId::from_string(format!("{}-{}", self.prefix, n))
    }
}
