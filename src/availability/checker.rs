//! Availability conflict checking.
//!
//! Compares a requested date or window against a staff member's existing
//! commitments. Windows overlap under half-open semantics: a commitment ending
//! exactly when the request starts (or the reverse) is not a conflict. A
//! date-only request clashes with every commitment that day, and a full-day
//! commitment clashes with every request that day.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AvailabilityQuery, Commitment, Conflict, ConflictResult, MINUTES_PER_DAY};

use super::store::CommitmentStore;

/// Checks availability against a [`CommitmentStore`].
///
/// The checker holds no state of its own besides the store handle and the
/// open-window policy, so clones can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct ConflictChecker<S> {
    store: S,
    open_window_end: u32,
}

impl<S: CommitmentStore> ConflictChecker<S> {
    /// Creates a checker whose start-only windows run to midnight.
    pub fn new(store: S) -> Self {
        Self {
            store,
            open_window_end: MINUTES_PER_DAY,
        }
    }

    /// Sets where a start-only window closes, in minutes since midnight.
    pub fn with_open_window_end(mut self, minutes: u32) -> Self {
        self.open_window_end = minutes.min(MINUTES_PER_DAY);
        self
    }

    /// Returns the store this checker reads from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the staff member's commitments and returns every clash.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DependencyFailure`] when the store read fails.
    /// A failed read is never reported as "no conflict".
    pub fn check(&self, query: &AvailabilityQuery) -> EngineResult<ConflictResult> {
        let commitments = self
            .store
            .list_commitments(&query.staff_id, query.date)
            .map_err(|err| {
                warn!(
                    staff_id = %query.staff_id,
                    date = %query.date,
                    error = %err,
                    "Commitment read failed"
                );
                EngineError::DependencyFailure {
                    message: err.to_string(),
                }
            })?;

        let conflicts = find_conflicts(query, &commitments, self.open_window_end);

        debug!(
            staff_id = %query.staff_id,
            date = %query.date,
            commitments = commitments.len(),
            conflicts = conflicts.len(),
            "Checked availability"
        );

        Ok(ConflictResult::from_conflicts(conflicts))
    }
}

/// Validates raw request values and checks for conflicts in one call.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank staff id or malformed time, before any
/// store read. Returns `DependencyFailure` when the store read fails.
///
/// # Examples
///
/// ```
/// use shift_engine::availability::{InMemoryCommitmentStore, check_conflicts};
/// use shift_engine::models::{Commitment, CommitmentKind};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let store = InMemoryCommitmentStore::with_commitments(vec![Commitment::timed(
///     "bk_1",
///     "staff_1",
///     date,
///     CommitmentKind::Booking,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
/// )]);
///
/// let back_to_back = check_conflicts(&store, "staff_1", date, Some("13:00"), Some("17:00")).unwrap();
/// assert!(!back_to_back.has_conflict);
///
/// let overlapping = check_conflicts(&store, "staff_1", date, Some("12:00"), Some("16:00")).unwrap();
/// assert!(overlapping.has_conflict);
/// ```
pub fn check_conflicts<S: CommitmentStore + ?Sized>(
    store: &S,
    staff_id: &str,
    date: NaiveDate,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> EngineResult<ConflictResult> {
    let query = AvailabilityQuery::new(staff_id, date, start_time, end_time)?;
    ConflictChecker::new(store).check(&query)
}

/// Returns every commitment that clashes with the query.
///
/// Commitments for another staff member or date are ignored. Full-day
/// commitments come first, then timed ones by start time.
pub fn find_conflicts(
    query: &AvailabilityQuery,
    commitments: &[Commitment],
    open_window_end: u32,
) -> Vec<Conflict> {
    let requested = query.requested_range(open_window_end);

    let mut conflicts: Vec<Conflict> = commitments
        .iter()
        .filter(|c| {
            if c.staff_id != query.staff_id || c.date != query.date {
                warn!(
                    commitment_id = %c.id,
                    staff_id = %c.staff_id,
                    date = %c.date,
                    "Store returned a commitment outside the requested staff/date"
                );
                return false;
            }
            query.exclude_commitment_id.as_deref() != Some(c.id.as_str())
        })
        .filter_map(|c| clash(requested, c))
        .collect();

    // Full-day first (None sorts before Some), then by start minute.
    conflicts.sort_by(|a, b| {
        a.window
            .minute_range()
            .cmp(&b.window.minute_range())
            .then_with(|| a.commitment_id.cmp(&b.commitment_id))
    });

    conflicts
}

/// Decides whether one commitment clashes with the requested range.
fn clash(requested: Option<(u32, u32)>, commitment: &Commitment) -> Option<Conflict> {
    match (requested, commitment.window.minute_range()) {
        // Date-only request: any commitment that day blocks it.
        (None, _) => Some(Conflict::from_commitment(commitment, None)),
        // Full-day commitment: blocks any window that day.
        (Some(_), None) => Some(Conflict::from_commitment(commitment, None)),
        (Some((req_start, req_end)), Some((c_start, c_end))) => {
            if req_start < c_end && c_start < req_end {
                let overlap = req_end.min(c_end) - req_start.max(c_start);
                Some(Conflict::from_commitment(commitment, Some(overlap)))
            } else {
                None
            }
        }
    }
}
