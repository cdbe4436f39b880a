//! metas-schemas
//!
//! Plain records exchanged with the external store (goals, submissions,
//! contestations) and the derived reward-statistics output.  This crate holds
//! data shapes only — evaluation rules live in metas-reward, the contestation
//! state machine in metas-contest.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// How a goal's completion is evaluated from a submission's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    /// Reported quantity against a numeric target.
    Numeric,
    /// A fixed list of checklist items, each answered true/false.
    BooleanChecklist,
    /// A single done/not-done flag.
    TaskCompletion,
    /// Reported percentage (0–100) against a percentage target.
    Percentage,
}

/// Calendar bucket over which a goal's submissions are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// A recurring target configured for an organizational sector.
///
/// `reward_cents` is the amount payable for 100% completion of one period
/// instance of this goal. `checklist_items` is meaningful only when
/// `goal_type == BooleanChecklist`; for the boolean kinds the target is a
/// completion flag fixed at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorGoal {
    pub id: Uuid,
    pub sector_id: Uuid,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub checklist_items: Vec<String>,
    pub period: Period,
    pub reward_cents: i64,
    pub is_active: bool,
}

/// A checklist answer: either a done flag or a reported quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
}

/// A collaborator's daily checklist record.  Append-only: created once for
/// the day, never mutated.  At most one per (collaborator, calendar day).
///
/// `answers` is keyed by goal id (or checklist-item key for
/// `BooleanChecklist` goals, as `"{goal_id}:{index}"`).  `proof_files` maps
/// goal ids to opaque upload identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub collaborator_id: Uuid,
    pub date: NaiveDate,
    pub answers: BTreeMap<String, AnswerValue>,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub proof_files: BTreeMap<String, Vec<String>>,
}

/// Answer key for a checklist item within a `BooleanChecklist` goal.
pub fn checklist_item_key(goal_id: Uuid, index: usize) -> String {
    format!("{goal_id}:{index}")
}

/// Lifecycle state of a contestation.  `Pending` blocks payment of the
/// contested pair; the terminal states release or forfeit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestationStatus {
    Pending,
    Resolved,
    Dismissed,
}

impl ContestationStatus {
    /// `true` if no further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Dismissed)
    }
}

/// Why a manager disputed a goal within a submission: one of the fixed
/// labels, or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContestReason {
    NotDone,
    IncorrectMethod,
    Incomplete,
    PoorQuality,
    MissingProof,
    Other(String),
}

impl ContestReason {
    pub fn label(&self) -> &str {
        match self {
            Self::NotDone => "not done",
            Self::IncorrectMethod => "incorrect method",
            Self::Incomplete => "incomplete",
            Self::PoorQuality => "poor quality",
            Self::MissingProof => "missing proof",
            Self::Other(text) => text,
        }
    }

    /// `true` when the reason carries no usable text (blank free text).
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Other(text) if text.trim().is_empty())
    }
}

impl From<String> for ContestReason {
    fn from(s: String) -> Self {
        match s.as_str() {
            "not done" => Self::NotDone,
            "incorrect method" => Self::IncorrectMethod,
            "incomplete" => Self::Incomplete,
            "poor quality" => Self::PoorQuality,
            "missing proof" => Self::MissingProof,
            _ => Self::Other(s),
        }
    }
}

impl From<ContestReason> for String {
    fn from(r: ContestReason) -> Self {
        r.label().to_string()
    }
}

/// A manager-initiated dispute over a (goal, submission) pair.
///
/// `response` and `resolved_at` are set only on the terminal transition.
/// Multiple contestations may reference the same pair; only `Pending` ones
/// block payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contestation {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub submission_id: Uuid,
    pub collaborator_id: Uuid,
    pub manager_id: Uuid,
    pub reason: ContestReason,
    pub status: ContestationStatus,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Per-goal, per-period-bucket reward line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReward {
    pub goal_id: Uuid,
    /// Bucket identifier, e.g. `2025-07` for a Monthly goal.
    pub period_key: String,
    /// Completion ratio in `[0, 1]`.
    pub completion_ratio: f64,
    /// Amount attributed to this bucket in cents (earned or blocked).
    pub earned_cents: i64,
    /// `true` when a pending contestation withholds this amount.
    pub blocked: bool,
}

/// Aggregate reward statistics for one collaborator over one time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardStats {
    pub total_earned_cents: i64,
    pub total_blocked_cents: i64,
    pub per_goal: Vec<GoalReward>,
}
