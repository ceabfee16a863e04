//! In-memory deny-list recording lease acquisitions and releases

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::deny_list::{DenyListLease, DenyListStore};

#[derive(Default)]
struct Counters {
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Mock deny-list.
///
/// Stores full keys (prefix included). A lease counts as released when it is
/// dropped, whichever path drops it.
#[derive(Clone, Default)]
pub struct MockDenyList {
    keys: Arc<RwLock<HashSet<String>>>,
    counters: Arc<Counters>,
    fail_acquire: bool,
    fail_lookup: bool,
}

impl MockDenyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `acquire` fails
    pub fn unavailable() -> Self {
        Self {
            fail_acquire: true,
            ..Self::default()
        }
    }

    /// Leases are granted but every lookup fails
    pub fn failing_lookups() -> Self {
        Self {
            fail_lookup: true,
            ..Self::default()
        }
    }

    pub async fn insert(&self, key: impl Into<String>) {
        self.keys.write().await.insert(key.into());
    }

    pub fn acquired(&self) -> usize {
        self.counters.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DenyListStore for MockDenyList {
    async fn acquire(&self) -> Result<Box<dyn DenyListLease>, DomainError> {
        if self.fail_acquire {
            return Err(DomainError::internal("deny-list pool exhausted"));
        }
        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockLease {
            keys: Arc::clone(&self.keys),
            counters: Arc::clone(&self.counters),
            fail_lookup: self.fail_lookup,
        }))
    }
}

struct MockLease {
    keys: Arc<RwLock<HashSet<String>>>,
    counters: Arc<Counters>,
    fail_lookup: bool,
}

#[async_trait]
impl DenyListLease for MockLease {
    async fn get(&mut self, key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_lookup {
            return Err(DomainError::internal("deny-list connection reset"));
        }
        let keys = self.keys.read().await;
        Ok(keys.contains(key).then(|| "1".to_string()))
    }

    fn release(self: Box<Self>) {}
}

impl Drop for MockLease {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
