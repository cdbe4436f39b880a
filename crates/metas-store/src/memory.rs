//! In-memory reference store.
//!
//! Implements both adapter traits over `BTreeMap`s.  The submission map is
//! keyed by `(collaborator_id, date)`, so the one-submission-per-day policy
//! is a structural constraint checked and inserted in one step — there is no
//! separate existence check for a concurrent writer to race against.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use metas_schemas::{GoalType, SectorGoal, Submission};
use uuid::Uuid;

use crate::error::StoreError;
use crate::{GoalCatalog, SubmissionLedger};

/// Validate a goal record read back from the store.
///
/// Violations are configuration errors (the record was mis-administered),
/// not validation errors: the reader cannot fix them.
pub fn validate_goal(goal: &SectorGoal) -> Result<(), StoreError> {
    match goal.goal_type {
        GoalType::Numeric | GoalType::Percentage => {
            if goal.target_value <= 0.0 {
                return Err(StoreError::Configuration {
                    detail: format!("goal {} has non-positive target", goal.id),
                });
            }
        }
        GoalType::BooleanChecklist => {
            if goal.checklist_items.is_empty() {
                return Err(StoreError::Configuration {
                    detail: format!("checklist goal {} has no items", goal.id),
                });
            }
        }
        GoalType::TaskCompletion => {}
    }
    if goal.reward_cents < 0 {
        return Err(StoreError::Configuration {
            detail: format!("goal {} has negative reward", goal.id),
        });
    }
    Ok(())
}

/// In-memory store for tests and single-process deployments.
///
/// `goals` is `None` until [`MemoryStore::new`] seeds it — an unconfigured
/// store models the missing-schema condition and answers every goal read
/// with [`StoreError::Configuration`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    goals: Option<BTreeMap<Uuid, SectorGoal>>,
    submissions: BTreeMap<(Uuid, NaiveDate), Submission>,
    /// When set, goal reads outside this sector are rejected.
    sector_scope: Option<Uuid>,
}

impl MemoryStore {
    /// An empty but configured store.
    pub fn new() -> Self {
        Self {
            goals: Some(BTreeMap::new()),
            submissions: BTreeMap::new(),
            sector_scope: None,
        }
    }

    /// A store whose goal schema is absent; every goal read fails with a
    /// configuration error.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Restrict goal reads to a single sector; reads outside it surface
    /// [`StoreError::Authorization`].
    pub fn with_sector_scope(mut self, sector_id: Uuid) -> Self {
        self.sector_scope = Some(sector_id);
        self
    }

    /// Seed or replace a goal definition.  Invariants are checked on read,
    /// not here, mirroring a backing store that accepts whatever an
    /// administrator writes.
    pub fn put_goal(&mut self, goal: SectorGoal) {
        self.goals
            .get_or_insert_with(BTreeMap::new)
            .insert(goal.id, goal);
    }

    fn check_sector(&self, sector_id: Uuid) -> Result<(), StoreError> {
        match self.sector_scope {
            Some(scope) if scope != sector_id => Err(StoreError::Authorization {
                detail: format!("sector {sector_id} outside caller scope"),
            }),
            _ => Ok(()),
        }
    }

    fn goal_map(&self) -> Result<&BTreeMap<Uuid, SectorGoal>, StoreError> {
        self.goals.as_ref().ok_or_else(|| StoreError::Configuration {
            detail: "goal collection missing from backing store".to_string(),
        })
    }
}

impl GoalCatalog for MemoryStore {
    fn list_active_goals(&self, sector_id: Uuid) -> Result<Vec<SectorGoal>, StoreError> {
        self.check_sector(sector_id)?;
        let mut out = Vec::new();
        for goal in self.goal_map()?.values() {
            if goal.sector_id != sector_id || !goal.is_active {
                continue;
            }
            validate_goal(goal)?;
            out.push(goal.clone());
        }
        Ok(out)
    }

    fn get_goal(&self, id: Uuid) -> Result<SectorGoal, StoreError> {
        let goal = self
            .goal_map()?
            .get(&id)
            .ok_or(StoreError::NotFound {
                entity: "goal",
                id,
            })?;
        self.check_sector(goal.sector_id)?;
        validate_goal(goal)?;
        Ok(goal.clone())
    }
}

impl SubmissionLedger for MemoryStore {
    fn submissions_for(&self, collaborator_id: Uuid) -> Result<Vec<Submission>, StoreError> {
        Ok(self
            .submissions
            .values()
            .filter(|s| s.collaborator_id == collaborator_id)
            .cloned()
            .collect())
    }

    fn insert_submission(&mut self, submission: Submission) -> Result<(), StoreError> {
        if submission.collaborator_id.is_nil() {
            return Err(StoreError::Validation {
                detail: "submission has no collaborator profile".to_string(),
            });
        }
        let key = (submission.collaborator_id, submission.date);
        // Conditional insert: occupancy check and write are one operation
        // on the entry, closing the check-then-act race.
        match self.submissions.entry(key) {
            std::collections::btree_map::Entry::Occupied(_) => {
                tracing::debug!(
                    collaborator = %key.0,
                    date = %key.1,
                    "duplicate submission rejected"
                );
                Err(StoreError::DuplicateSubmission {
                    collaborator_id: key.0,
                    date: key.1,
                })
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(submission);
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
