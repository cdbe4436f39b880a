//! Per-goal-type completion evaluators.
//!
//! One evaluator per `GoalType`, selected by the goal's type tag.  Every
//! evaluator returns a ratio in `[0, 1]` no matter what the submission
//! reports — over-achieving a numeric target caps at 1, garbage answers read
//! as 0.  Adding a goal type means adding one match arm here, nothing in the
//! engine changes.

use metas_schemas::{checklist_item_key, AnswerValue, GoalType, SectorGoal, Submission};

/// Completion ratio of one submission against one goal, in `[0, 1]`.
pub fn completion_ratio(goal: &SectorGoal, submission: &Submission) -> f64 {
    match goal.goal_type {
        GoalType::Numeric => numeric_ratio(goal, submission),
        GoalType::Percentage => percentage_ratio(goal, submission),
        GoalType::TaskCompletion => task_ratio(goal, submission),
        GoalType::BooleanChecklist => checklist_ratio(goal, submission),
    }
}

/// `true` if the submission carries any answer relevant to the goal.
/// Buckets without a relevant answer produce no reward line.
pub fn has_answer(goal: &SectorGoal, submission: &Submission) -> bool {
    match goal.goal_type {
        GoalType::BooleanChecklist => (0..goal.checklist_items.len())
            .any(|i| submission.answers.contains_key(&checklist_item_key(goal.id, i))),
        _ => submission.answers.contains_key(&goal.id.to_string()),
    }
}

fn reported_number(goal: &SectorGoal, submission: &Submission) -> f64 {
    match submission.answers.get(&goal.id.to_string()) {
        Some(AnswerValue::Number(v)) if v.is_finite() => *v,
        // A bare done-flag against a quantitative goal reads as no quantity.
        _ => 0.0,
    }
}

fn numeric_ratio(goal: &SectorGoal, submission: &Submission) -> f64 {
    // Zero-target policy: a target of 0 (or below) is treated as already
    // met, never divided by.
    if goal.target_value <= 0.0 {
        return 1.0;
    }
    (reported_number(goal, submission) / goal.target_value).clamp(0.0, 1.0)
}

fn percentage_ratio(goal: &SectorGoal, submission: &Submission) -> f64 {
    (reported_number(goal, submission) / 100.0).clamp(0.0, 1.0)
}

fn task_ratio(goal: &SectorGoal, submission: &Submission) -> f64 {
    match submission.answers.get(&goal.id.to_string()) {
        Some(AnswerValue::Bool(true)) => 1.0,
        _ => 0.0,
    }
}

fn checklist_ratio(goal: &SectorGoal, submission: &Submission) -> f64 {
    let total = goal.checklist_items.len();
    if total == 0 {
        // The store rejects itemless checklist goals as misconfigured;
        // defined here anyway so the evaluator is total.
        return 0.0;
    }
    let done = (0..total)
        .filter(|&i| {
            matches!(
                submission.answers.get(&checklist_item_key(goal.id, i)),
                Some(AnswerValue::Bool(true))
            )
        })
        .count();
    done as f64 / total as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
