//! In-memory storage for stations and lines.
//!
//! Both tables live behind a single lock so that operations spanning
//! stations and lines (for example "delete a station unless a line uses it")
//! see one consistent state.

mod lines;
mod stations;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use lines::LineTable;
pub use stations::StationTable;

/// A name is already used by another record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("name {0:?} is already taken")]
pub struct NameTaken(pub String);

/// The stations and lines of the network.
#[derive(Debug, Default)]
pub struct Network {
    pub stations: StationTable,
    pub lines: LineTable,
}

/// Thread-safe handle to the network.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Network>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared access to the network.
    pub async fn read(&self) -> RwLockReadGuard<'_, Network> {
        self.inner.read().await
    }

    /// Acquire exclusive access to the network.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Network> {
        self.inner.write().await
    }
}
