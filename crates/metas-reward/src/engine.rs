//! Reward computation engine.
//!
//! # Design
//!
//! Stateless and pure: [`compute`] is a function of the collaborator id, the
//! goal slice, the submission slice, the contestation slice, and a date
//! window.  It never mutates its inputs, caches nothing, and recomputes
//! everything on every call — re-running after a contestation transition
//! yields the post-transition totals with no reconciliation step.  Degenerate
//! inputs (no goals, no submissions, empty window) produce the zero result;
//! the computation is total and never errors.
//!
//! # Pipeline, per active goal
//!
//! 1. Bucket the collaborator's in-window submissions by the goal's period
//!    key; within a bucket the representative answer is the latest dated
//!    submission carrying an answer for the goal (latest-value semantics:
//!    "did you hit the target by period end", not a cumulative sum).
//! 2. Evaluate the completion ratio and convert to cents through the
//!    fixed-point money type.
//! 3. Net out contestations over the (goal, representative submission)
//!    pair: a `Resolved` one forfeits the amount outright, a `Pending` one
//!    moves it into the blocked total, a `Dismissed` one has no effect.

use metas_money::Cents;
use metas_schemas::{
    Contestation, ContestationStatus, GoalReward, RewardStats, SectorGoal, Submission,
};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::evaluator::{completion_ratio, has_answer};
use crate::period::{period_key, Window};

/// Everything one reward computation reads.  The caller owns fetching (and,
/// if historical stability matters, archiving) these collections.
#[derive(Debug, Clone, Copy)]
pub struct RewardRequest<'a> {
    pub collaborator_id: Uuid,
    pub goals: &'a [SectorGoal],
    pub submissions: &'a [Submission],
    pub contestations: &'a [Contestation],
    pub window: Window,
}

/// How contestations dispose of one (goal, submission) pair's amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Payable,
    Blocked,
    Forfeited,
}

fn disposition(contestations: &[Contestation], goal_id: Uuid, submission_id: Uuid) -> Disposition {
    let mut pending = false;
    for c in contestations {
        if c.goal_id != goal_id || c.submission_id != submission_id {
            continue;
        }
        match c.status {
            // An upheld dispute forfeits the pair permanently, even if a
            // newer dispute over the same pair is still open.
            ContestationStatus::Resolved => return Disposition::Forfeited,
            ContestationStatus::Pending => pending = true,
            ContestationStatus::Dismissed => {}
        }
    }
    if pending {
        Disposition::Blocked
    } else {
        Disposition::Payable
    }
}

/// Compute reward statistics for one collaborator over one window.
pub fn compute(req: &RewardRequest) -> RewardStats {
    let mut relevant: Vec<&Submission> = req
        .submissions
        .iter()
        .filter(|s| s.collaborator_id == req.collaborator_id && req.window.contains(s.date))
        .collect();
    relevant.sort_by_key(|s| s.date);

    let mut total_earned = Cents::ZERO;
    let mut total_blocked = Cents::ZERO;
    let mut per_goal = Vec::new();

    for goal in req.goals.iter().filter(|g| g.is_active) {
        // Latest-dated answering submission wins the bucket: `relevant` is
        // date-sorted, so a plain overwrite leaves the latest one.
        let mut buckets: BTreeMap<String, &Submission> = BTreeMap::new();
        for sub in &relevant {
            if has_answer(goal, sub) {
                buckets.insert(period_key(goal.period, sub.date), sub);
            }
        }

        for (key, representative) in buckets {
            let ratio = completion_ratio(goal, representative);
            let amount = Cents::new(goal.reward_cents).scale_by_ratio(ratio);

            match disposition(req.contestations, goal.id, representative.id) {
                Disposition::Payable => {
                    total_earned = total_earned.saturating_add(amount);
                    per_goal.push(GoalReward {
                        goal_id: goal.id,
                        period_key: key,
                        completion_ratio: ratio,
                        earned_cents: amount.raw(),
                        blocked: false,
                    });
                }
                Disposition::Blocked => {
                    // Withheld, not discarded: the amount stays visible on
                    // the row while it sits in the blocked total.
                    total_blocked = total_blocked.saturating_add(amount);
                    per_goal.push(GoalReward {
                        goal_id: goal.id,
                        period_key: key,
                        completion_ratio: ratio,
                        earned_cents: amount.raw(),
                        blocked: true,
                    });
                }
                Disposition::Forfeited => {
                    per_goal.push(GoalReward {
                        goal_id: goal.id,
                        period_key: key,
                        completion_ratio: ratio,
                        earned_cents: 0,
                        blocked: false,
                    });
                }
            }
        }
    }

    RewardStats {
        total_earned_cents: total_earned.raw(),
        total_blocked_cents: total_blocked.raw(),
        per_goal,
    }
}

/// Same computation restricted to one calendar month.  An invalid
/// year/month yields the zero result.
pub fn compute_monthly(
    collaborator_id: Uuid,
    goals: &[SectorGoal],
    submissions: &[Submission],
    contestations: &[Contestation],
    year: i32,
    month: u32,
) -> RewardStats {
    let Some(window) = Window::month(year, month) else {
        return RewardStats::default();
    };
    compute(&RewardRequest {
        collaborator_id,
        goals,
        submissions,
        contestations,
        window,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
