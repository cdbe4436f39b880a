//! metas-store
//!
//! Adapter seam in front of the external goal/submission store:
//! - `GoalCatalog` / `SubmissionLedger` traits (read pass-through plus the
//!   append-only submission write)
//! - Store error taxonomy (configuration vs authorization vs validation vs
//!   not-found, plus the duplicate-submission constraint)
//! - `MemoryStore` reference implementation whose map key makes the
//!   one-submission-per-day policy atomic at write time
//! - Proof-attachment assembly with partial-failure logging
//!
//! Retry policy: idempotent reads may be retried transparently by real
//! adapter implementations; nothing in this crate retries.

mod error;
mod memory;
mod proofs;

pub use error::StoreError;
pub use memory::{validate_goal, MemoryStore};
pub use proofs::{collect_proofs, ProofUpload};

use metas_schemas::{SectorGoal, Submission};
use uuid::Uuid;

/// Read-only view of configured sector goals.
pub trait GoalCatalog {
    /// Active goals for a sector.  `Configuration` when the backing schema
    /// is unusable, `Authorization` when the sector is outside the caller's
    /// scope.
    fn list_active_goals(&self, sector_id: Uuid) -> Result<Vec<SectorGoal>, StoreError>;

    /// A single goal by id.  `NotFound` when absent — distinct from
    /// `Configuration`.
    fn get_goal(&self, id: Uuid) -> Result<SectorGoal, StoreError>;
}

/// Append-only view of submitted checklist records.
pub trait SubmissionLedger {
    /// Every submission owned by the collaborator.
    fn submissions_for(&self, collaborator_id: Uuid) -> Result<Vec<Submission>, StoreError>;

    /// Insert the day's submission.  Implementations MUST enforce the
    /// one-per-(collaborator, day) constraint atomically at write time;
    /// a conflict surfaces as [`StoreError::DuplicateSubmission`].
    fn insert_submission(&mut self, submission: Submission) -> Result<(), StoreError>;
}
