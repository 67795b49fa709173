//! Staff availability checking.
//!
//! This module provides the [`CommitmentStore`] collaborator interface, an
//! in-memory implementation, and the [`ConflictChecker`] that decides whether
//! a requested date or window clashes with existing commitments.
//!
//! The checker is read-only. Two bookings finalized at the same moment can
//! both pass a check; the persistence layer serializes the final commit.

mod checker;
mod store;

pub use checker::{ConflictChecker, check_conflicts, find_conflicts};
pub use store::{CommitmentStore, InMemoryCommitmentStore, StoreError};
