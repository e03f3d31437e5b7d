use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::shared::TournamentId;

/// Per-tournament async mutexes
///
/// Draft operations on one tournament hold its lock across their whole
/// read-check-write sequence, so at most one nomination can be decided for a
/// given `(tournament, round, turn)`. Different tournaments never contend.
#[derive(Default, Clone)]
pub struct TournamentLocks {
    locks: Arc<Mutex<HashMap<TournamentId, Arc<AsyncMutex<()>>>>>,
}

impl TournamentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock of one tournament
    pub async fn acquire(&self, tournament_id: &TournamentId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            locks.entry(tournament_id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
