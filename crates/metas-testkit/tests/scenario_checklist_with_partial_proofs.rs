use metas_reward::{compute, RewardRequest, Window};
use metas_schemas::Period;
use metas_store::{collect_proofs, ProofUpload};
use metas_testkit::{checklist_goal, date, submission_on};
use uuid::Uuid;

#[test]
fn scenario_checklist_pays_proportionally_and_survives_failed_proof_uploads() {
    // GIVEN a 4-item checklist goal worth 2000 cents per day
    let sector = Uuid::new_v4();
    let collaborator = Uuid::new_v4();
    let goal = checklist_goal(
        sector,
        &["clean counters", "restock shelves", "close register", "lock doors"],
        2_000,
        Period::Daily,
    );

    // AND proof uploads where one goal attachment failed mid-flight
    let other_goal = Uuid::new_v4();
    let proofs = collect_proofs(vec![
        ProofUpload {
            goal_id: goal.id,
            result: Ok("upload/1a2b".to_string()),
        },
        ProofUpload {
            goal_id: other_goal,
            result: Err("connection reset".to_string()),
        },
    ]);

    // THEN the submission is still created with the surviving refs
    assert_eq!(proofs.len(), 1);
    assert!(proofs.contains_key(&goal.id.to_string()));

    let mut sub = submission_on(collaborator, date(2025, 7, 15))
        .check_item(&goal, 0, true)
        .check_item(&goal, 1, true)
        .check_item(&goal, 2, true)
        .check_item(&goal, 3, false)
        .build();
    sub.proof_files = proofs;

    // WHEN the day's reward is computed
    let stats = compute(&RewardRequest {
        collaborator_id: collaborator,
        goals: std::slice::from_ref(&goal),
        submissions: std::slice::from_ref(&sub),
        contestations: &[],
        window: Window::month(2025, 7).unwrap(),
    });

    // THEN 3 of 4 items pay 75% of the reward
    assert_eq!(stats.per_goal[0].completion_ratio, 0.75);
    assert_eq!(stats.total_earned_cents, 1_500);
}
