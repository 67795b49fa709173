//! The commitment store collaborator.
//!
//! The conflict checker reads commitments through [`CommitmentStore`]; the
//! persistence layer that owns bookings and leave records implements it.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Commitment;

/// Errors a commitment store can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The backing store could not be reached or answered with an error.
    #[error("commitment store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },

    /// The read did not complete in time.
    #[error("commitment read timed out after {after_ms}ms")]
    TimedOut {
        /// The timeout that elapsed, in milliseconds.
        after_ms: u64,
    },
}

/// Read-only access to existing commitments.
///
/// Implementations return every commitment (bookings, leave, blocked days)
/// for the staff member on exactly that calendar date, in any order. No
/// commitments is an empty vector, not an error.
pub trait CommitmentStore: Send + Sync {
    /// Lists the commitments of `staff_id` on `date`.
    fn list_commitments(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Commitment>, StoreError>;
}

impl<T: CommitmentStore + ?Sized> CommitmentStore for Arc<T> {
    fn list_commitments(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Commitment>, StoreError> {
        (**self).list_commitments(staff_id, date)
    }
}

impl<T: CommitmentStore + ?Sized> CommitmentStore for &T {
    fn list_commitments(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Commitment>, StoreError> {
        (**self).list_commitments(staff_id, date)
    }
}

/// A commitment store held in memory.
///
/// Used by the service binary for seeded commitments and by tests.
#[derive(Debug, Default)]
pub struct InMemoryCommitmentStore {
    commitments: RwLock<Vec<Commitment>>,
}

impl InMemoryCommitmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given commitments.
    pub fn with_commitments(commitments: Vec<Commitment>) -> Self {
        Self {
            commitments: RwLock::new(commitments),
        }
    }

    /// Adds a commitment.
    pub fn insert(&self, commitment: Commitment) -> Result<(), StoreError> {
        let mut guard = self.commitments.write().map_err(|_| poisoned())?;
        guard.push(commitment);
        Ok(())
    }

    /// Returns the number of commitments held.
    pub fn len(&self) -> Result<usize, StoreError> {
        let guard = self.commitments.read().map_err(|_| poisoned())?;
        Ok(guard.len())
    }

    /// Returns true if the store holds no commitments.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable {
        message: "in-memory store lock poisoned".to_string(),
    }
}

impl CommitmentStore for InMemoryCommitmentStore {
    fn list_commitments(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Commitment>, StoreError> {
        let guard = self.commitments.read().map_err(|_| poisoned())?;

        Ok(guard
            .iter()
            .filter(|c| c.staff_id == staff_id && c.date == date)
            .cloned()
            .collect())
    }
}
