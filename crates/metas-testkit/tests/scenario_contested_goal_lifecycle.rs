use metas_contest::{ContestationDraft, ContestationLedger};
use metas_reward::{compute, RewardRequest, Window};
use metas_schemas::{ContestReason, Period};
use metas_testkit::{at_noon, date, submission_on, task_goal};
use uuid::Uuid;

#[test]
fn scenario_pending_dispute_blocks_then_dismissal_restores_and_resolution_forfeits() {
    // GIVEN a fully completed 1000-cent daily goal
    let sector = Uuid::new_v4();
    let collaborator = Uuid::new_v4();
    let goal = task_goal(sector, 1_000, Period::Daily);
    let sub = submission_on(collaborator, date(2025, 7, 10))
        .done(&goal, true)
        .build();
    let window = Window::month(2025, 7).unwrap();

    let stats_for = |ledger: &ContestationLedger| {
        compute(&RewardRequest {
            collaborator_id: collaborator,
            goals: std::slice::from_ref(&goal),
            submissions: std::slice::from_ref(&sub),
            contestations: ledger.all(),
            window,
        })
    };

    // WHEN the manager opens a dispute over the pair
    let mut ledger = ContestationLedger::new();
    let id = ledger
        .create(
            ContestationDraft {
                goal_id: goal.id,
                submission_id: sub.id,
                collaborator_id: collaborator,
                manager_id: Uuid::new_v4(),
                reason: ContestReason::MissingProof,
            },
            at_noon(date(2025, 7, 11)),
        )
        .unwrap();

    // THEN the amount is withheld, not discarded
    let blocked = stats_for(&ledger);
    assert_eq!(blocked.total_earned_cents, 0);
    assert_eq!(blocked.total_blocked_cents, 1_000);
    assert!(blocked.per_goal[0].blocked);

    // WHEN the dispute is dismissed, recomputation restores the amount
    let mut dismissed = ledger.clone();
    dismissed
        .dismiss(id, "proof located in the shared drive", at_noon(date(2025, 7, 12)))
        .unwrap();
    let restored = stats_for(&dismissed);
    assert_eq!(restored.total_earned_cents, 1_000);
    assert_eq!(restored.total_blocked_cents, 0);

    // WHEN the dispute is instead upheld, the amount is forfeited outright
    let mut resolved = ledger;
    resolved
        .resolve(id, "no proof could be produced", at_noon(date(2025, 7, 12)))
        .unwrap();
    let forfeited = stats_for(&resolved);
    assert_eq!(forfeited.total_earned_cents, 0);
    assert_eq!(forfeited.total_blocked_cents, 0);
}

#[test]
fn scenario_pending_disputes_listed_per_collaborator() {
    let sector = Uuid::new_v4();
    let collaborator = Uuid::new_v4();
    let goal = task_goal(sector, 1_000, Period::Daily);
    let sub = submission_on(collaborator, date(2025, 7, 10))
        .done(&goal, true)
        .build();

    let mut ledger = ContestationLedger::new();
    let id = ledger
        .create(
            ContestationDraft {
                goal_id: goal.id,
                submission_id: sub.id,
                collaborator_id: collaborator,
                manager_id: Uuid::new_v4(),
                reason: ContestReason::Incomplete,
            },
            at_noon(date(2025, 7, 11)),
        )
        .unwrap();

    assert_eq!(ledger.list_pending_for(collaborator).len(), 1);
    assert_eq!(
        ledger.find_pending_for(goal.id, sub.id).map(|c| c.id),
        Some(id)
    );

    ledger
        .dismiss(id, "item was outside the shift scope", at_noon(date(2025, 7, 12)))
        .unwrap();
    assert!(ledger.list_pending_for(collaborator).is_empty());
}
