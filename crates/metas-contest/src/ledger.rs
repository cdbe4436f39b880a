//! Contestation state machine and ledger.
//!
//! # Design
//!
//! Explicit state machine for a single contestation.  Every lifecycle
//! transition goes through [`ContestationLedger::resolve`] or
//! [`ContestationLedger::dismiss`], which enforce two invariants:
//!
//! 1. **Legal transitions only.** `Pending` is the sole non-terminal state;
//!    resolving or dismissing an already-terminal contestation returns
//!    [`ContestError::IllegalTransition`].  A further dispute over the same
//!    (goal, submission) pair requires a brand-new record.
//! 2. **No blank text.** Creation requires a non-blank reason; terminal
//!    transitions require a non-blank manager response.
//!
//! # State diagram
//!
//! ```text
//!               resolve(response)
//!   create ──► Pending ──────────► Resolved  (terminal; dispute upheld)
//!                 │
//!                 │ dismiss(response)
//!                 └──────────────► Dismissed (terminal; dispute rejected)
//! ```
//!
//! The ledger itself does not enforce pair uniqueness: multiple
//! contestations may reference the same (goal, submission) pair, and only
//! `Pending` ones block payment.

use chrono::{DateTime, Utc};
use metas_schemas::{ContestReason, Contestation, ContestationStatus};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// All ways a contestation write can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestError {
    /// Creation payload carried a blank free-text reason.
    BlankReason,
    /// A terminal transition was attempted without a manager response.
    BlankResponse,
    /// No contestation with the given id exists in this ledger.
    NotFound { id: Uuid },
    /// The contestation is already in a terminal state.
    IllegalTransition {
        from: ContestationStatus,
        attempted: ContestationStatus,
    },
}

impl std::fmt::Display for ContestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankReason => write!(f, "contestation reason must not be blank"),
            Self::BlankResponse => {
                write!(f, "resolution response must not be blank")
            }
            Self::NotFound { id } => write!(f, "contestation {id} not found"),
            Self::IllegalTransition { from, attempted } => write!(
                f,
                "illegal contestation transition: {from:?} -> {attempted:?}"
            ),
        }
    }
}

impl std::error::Error for ContestError {}

// ---------------------------------------------------------------------------
// Create payload
// ---------------------------------------------------------------------------

/// What a manager supplies when opening a dispute.
#[derive(Debug, Clone)]
pub struct ContestationDraft {
    pub goal_id: Uuid,
    pub submission_id: Uuid,
    pub collaborator_id: Uuid,
    pub manager_id: Uuid,
    pub reason: ContestReason,
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// Insertion-ordered record of contestations with the transition boundary.
///
/// The ledger is the only writer of `status`, `response`, and `resolved_at`;
/// records read back through [`ContestationLedger::all`] are otherwise
/// immutable.  The ledger is **not** mutated when a write returns an error.
#[derive(Debug, Clone, Default)]
pub struct ContestationLedger {
    entries: Vec<Contestation>,
}

impl ContestationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Write surface
    // -----------------------------------------------------------------------

    /// Open a new dispute in `Pending` state.  Returns the new record's id.
    ///
    /// # Errors
    /// [`ContestError::BlankReason`] when the reason carries no usable text.
    pub fn create(
        &mut self,
        draft: ContestationDraft,
        now: DateTime<Utc>,
    ) -> Result<Uuid, ContestError> {
        if draft.reason.is_blank() {
            return Err(ContestError::BlankReason);
        }
        let id = Uuid::new_v4();
        self.entries.push(Contestation {
            id,
            goal_id: draft.goal_id,
            submission_id: draft.submission_id,
            collaborator_id: draft.collaborator_id,
            manager_id: draft.manager_id,
            reason: draft.reason,
            status: ContestationStatus::Pending,
            response: None,
            created_at: now,
            resolved_at: None,
        });
        Ok(id)
    }

    /// `Pending -> Resolved`: the dispute stands, the submission was
    /// deficient; the contested amount is forfeited.
    pub fn resolve(
        &mut self,
        id: Uuid,
        response: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ContestError> {
        self.transition(id, ContestationStatus::Resolved, response, now)
    }

    /// `Pending -> Dismissed`: the dispute is rejected, the submission
    /// stands as valid; the contested amount becomes payable again.
    pub fn dismiss(
        &mut self,
        id: Uuid,
        response: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ContestError> {
        self.transition(id, ContestationStatus::Dismissed, response, now)
    }

    fn transition(
        &mut self,
        id: Uuid,
        to: ContestationStatus,
        response: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ContestError> {
        if response.trim().is_empty() {
            return Err(ContestError::BlankResponse);
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContestError::NotFound { id })?;
        if entry.status.is_terminal() {
            return Err(ContestError::IllegalTransition {
                from: entry.status,
                attempted: to,
            });
        }
        entry.status = to;
        entry.response = Some(response.to_string());
        entry.resolved_at = Some(now);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// First pending contestation over the given pair, in insertion order.
    pub fn find_pending_for(&self, goal_id: Uuid, submission_id: Uuid) -> Option<&Contestation> {
        self.entries.iter().find(|c| {
            c.status == ContestationStatus::Pending
                && c.goal_id == goal_id
                && c.submission_id == submission_id
        })
    }

    /// All pending contestations against the collaborator, insertion order.
    pub fn list_pending_for(&self, collaborator_id: Uuid) -> Vec<&Contestation> {
        self.entries
            .iter()
            .filter(|c| {
                c.status == ContestationStatus::Pending && c.collaborator_id == collaborator_id
            })
            .collect()
    }

    /// Every record, insertion order.  This is the slice the reward engine
    /// consumes.
    pub fn all(&self) -> &[Contestation] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&Contestation> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    fn draft() -> ContestationDraft {
        ContestationDraft {
            goal_id: Uuid::new_v4(),
            submission_id: Uuid::new_v4(),
            collaborator_id: Uuid::new_v4(),
            manager_id: Uuid::new_v4(),
            reason: ContestReason::MissingProof,
        }
    }

    // --- Creation ---

    #[test]
    fn create_starts_pending_with_timestamp() {
        let mut ledger = ContestationLedger::new();
        let id = ledger.create(draft(), now()).unwrap();

        let c = ledger.get(id).unwrap();
        assert_eq!(c.status, ContestationStatus::Pending);
        assert_eq!(c.created_at, now());
        assert_eq!(c.response, None);
        assert_eq!(c.resolved_at, None);
    }

    #[test]
    fn create_rejects_blank_free_text_reason() {
        let mut ledger = ContestationLedger::new();
        let mut d = draft();
        d.reason = ContestReason::Other("   ".to_string());
        assert_eq!(ledger.create(d, now()), Err(ContestError::BlankReason));
        assert!(ledger.is_empty()); // ledger not mutated
    }

    #[test]
    fn create_accepts_free_text_reason() {
        let mut ledger = ContestationLedger::new();
        let mut d = draft();
        d.reason = ContestReason::Other("wrong shift".to_string());
        assert!(ledger.create(d, now()).is_ok());
    }

    #[test]
    fn same_pair_can_be_contested_twice() {
        let mut ledger = ContestationLedger::new();
        let d = draft();
        ledger.create(d.clone(), now()).unwrap();
        ledger.create(d, now()).unwrap();
        assert_eq!(ledger.len(), 2);
    }

    // --- Transitions ---

    #[test]
    fn resolve_stamps_response_and_time() {
        let mut ledger = ContestationLedger::new();
        let id = ledger.create(draft(), now()).unwrap();
        ledger.resolve(id, "checked on site, not done", now()).unwrap();

        let c = ledger.get(id).unwrap();
        assert_eq!(c.status, ContestationStatus::Resolved);
        assert_eq!(c.response.as_deref(), Some("checked on site, not done"));
        assert_eq!(c.resolved_at, Some(now()));
    }

    #[test]
    fn dismiss_stamps_response_and_time() {
        let mut ledger = ContestationLedger::new();
        let id = ledger.create(draft(), now()).unwrap();
        ledger.dismiss(id, "proof was attached after all", now()).unwrap();

        let c = ledger.get(id).unwrap();
        assert_eq!(c.status, ContestationStatus::Dismissed);
        assert!(c.resolved_at.is_some());
    }

    #[test]
    fn terminal_states_reject_further_transitions() {
        let mut ledger = ContestationLedger::new();
        let id = ledger.create(draft(), now()).unwrap();
        ledger.resolve(id, "upheld", now()).unwrap();

        assert_eq!(
            ledger.dismiss(id, "changed my mind", now()),
            Err(ContestError::IllegalTransition {
                from: ContestationStatus::Resolved,
                attempted: ContestationStatus::Dismissed,
            })
        );
        assert_eq!(
            ledger.resolve(id, "again", now()),
            Err(ContestError::IllegalTransition {
                from: ContestationStatus::Resolved,
                attempted: ContestationStatus::Resolved,
            })
        );
    }

    #[test]
    fn transition_requires_non_blank_response() {
        let mut ledger = ContestationLedger::new();
        let id = ledger.create(draft(), now()).unwrap();
        assert_eq!(
            ledger.resolve(id, "  ", now()),
            Err(ContestError::BlankResponse)
        );
        // Still pending after the failed write.
        assert_eq!(ledger.get(id).unwrap().status, ContestationStatus::Pending);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut ledger = ContestationLedger::new();
        let id = Uuid::new_v4();
        assert_eq!(
            ledger.resolve(id, "x", now()),
            Err(ContestError::NotFound { id })
        );
    }

    // --- Lookups ---

    #[test]
    fn find_pending_for_matches_pair_only() {
        let mut ledger = ContestationLedger::new();
        let d = draft();
        let id = ledger.create(d.clone(), now()).unwrap();

        assert_eq!(
            ledger.find_pending_for(d.goal_id, d.submission_id).unwrap().id,
            id
        );
        assert!(ledger
            .find_pending_for(Uuid::new_v4(), d.submission_id)
            .is_none());
    }

    #[test]
    fn find_pending_for_ignores_terminal_records() {
        let mut ledger = ContestationLedger::new();
        let d = draft();
        let id = ledger.create(d.clone(), now()).unwrap();
        ledger.dismiss(id, "ok", now()).unwrap();

        assert!(ledger.find_pending_for(d.goal_id, d.submission_id).is_none());
    }

    #[test]
    fn list_pending_for_filters_by_collaborator() {
        let mut ledger = ContestationLedger::new();
        let d1 = draft();
        let d2 = draft();
        ledger.create(d1.clone(), now()).unwrap();
        ledger.create(d2, now()).unwrap();

        let pending = ledger.list_pending_for(d1.collaborator_id);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].collaborator_id, d1.collaborator_id);
    }
}
