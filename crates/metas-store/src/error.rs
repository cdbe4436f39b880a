//! Store error taxonomy.
//!
//! Four caller-visible failure families plus the duplicate-submission
//! constraint, kept distinct so callers can route each one correctly:
//! configuration problems go to an administrator, authorization failures are
//! surfaced as-is, validation failures re-prompt the user, and not-found is
//! never conflated with a broken backing schema.

use chrono::NaiveDate;
use uuid::Uuid;

/// All failures the store adapters can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backing schema is missing expected fields or a record violates its
    /// own invariants.  User-facing guidance: contact an administrator.
    /// Never retried.
    Configuration { detail: String },
    /// Caller lacks permission for the requested scope.  Not retried.
    Authorization { detail: String },
    /// Malformed write payload; the caller must re-prompt before retrying.
    Validation { detail: String },
    /// The one-submission-per-day constraint fired at write time.
    DuplicateSubmission {
        collaborator_id: Uuid,
        date: NaiveDate,
    },
    /// Referenced record does not exist.  Distinct from `Configuration`.
    NotFound { entity: &'static str, id: Uuid },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { detail } => {
                write!(f, "store not configured: {detail} (contact an administrator)")
            }
            Self::Authorization { detail } => write!(f, "not authorized: {detail}"),
            Self::Validation { detail } => write!(f, "invalid payload: {detail}"),
            Self::DuplicateSubmission {
                collaborator_id,
                date,
            } => write!(
                f,
                "submission already exists for collaborator {collaborator_id} on {date}"
            ),
            Self::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}
