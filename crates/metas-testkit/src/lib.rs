//! metas-testkit
//!
//! Shared fixtures for scenario tests: goal and submission builders with
//! deterministic-enough defaults so each scenario states only what it is
//! about.  Scenario tests live under `tests/`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use metas_schemas::{
    checklist_item_key, AnswerValue, GoalType, Period, SectorGoal, Submission,
};
use std::collections::BTreeMap;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn at_noon(d: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).expect("valid fixture time"))
}

/// A numeric goal against a quantity target.
pub fn numeric_goal(sector_id: Uuid, target: f64, reward_cents: i64, period: Period) -> SectorGoal {
    SectorGoal {
        id: Uuid::new_v4(),
        sector_id,
        goal_type: GoalType::Numeric,
        target_value: target,
        checklist_items: Vec::new(),
        period,
        reward_cents,
        is_active: true,
    }
}

/// A single done/not-done goal.
pub fn task_goal(sector_id: Uuid, reward_cents: i64, period: Period) -> SectorGoal {
    SectorGoal {
        id: Uuid::new_v4(),
        sector_id,
        goal_type: GoalType::TaskCompletion,
        target_value: 1.0,
        checklist_items: Vec::new(),
        period,
        reward_cents,
        is_active: true,
    }
}

/// A checklist goal with the given item labels.
pub fn checklist_goal(
    sector_id: Uuid,
    items: &[&str],
    reward_cents: i64,
    period: Period,
) -> SectorGoal {
    SectorGoal {
        id: Uuid::new_v4(),
        sector_id,
        goal_type: GoalType::BooleanChecklist,
        target_value: 1.0,
        checklist_items: items.iter().map(|s| s.to_string()).collect(),
        period,
        reward_cents,
        is_active: true,
    }
}

/// Builder for a day's submission.
pub struct SubmissionBuilder {
    submission: Submission,
}

impl SubmissionBuilder {
    pub fn new(collaborator_id: Uuid, date: NaiveDate) -> Self {
        Self {
            submission: Submission {
                id: Uuid::new_v4(),
                collaborator_id,
                date,
                answers: BTreeMap::new(),
                observation: String::new(),
                proof_files: BTreeMap::new(),
            },
        }
    }

    pub fn number(mut self, goal: &SectorGoal, value: f64) -> Self {
        self.submission
            .answers
            .insert(goal.id.to_string(), AnswerValue::Number(value));
        self
    }

    pub fn done(mut self, goal: &SectorGoal, value: bool) -> Self {
        self.submission
            .answers
            .insert(goal.id.to_string(), AnswerValue::Bool(value));
        self
    }

    pub fn check_item(mut self, goal: &SectorGoal, index: usize, value: bool) -> Self {
        self.submission
            .answers
            .insert(checklist_item_key(goal.id, index), AnswerValue::Bool(value));
        self
    }

    pub fn observation(mut self, text: &str) -> Self {
        self.submission.observation = text.to_string();
        self
    }

    pub fn build(self) -> Submission {
        self.submission
    }
}

pub fn submission_on(collaborator_id: Uuid, date: NaiveDate) -> SubmissionBuilder {
    SubmissionBuilder::new(collaborator_id, date)
}
