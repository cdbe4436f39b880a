use anyhow::Result;
use metas_money::{format_amount, Cents};
use metas_reward::compute_monthly;
use metas_schemas::Period;
use metas_store::{GoalCatalog, MemoryStore, SubmissionLedger};
use metas_testkit::{date, numeric_goal, submission_on};
use uuid::Uuid;

#[test]
fn scenario_month_end_value_drives_the_monthly_reward() -> Result<()> {
    // GIVEN a monthly numeric goal: target 100, reward R$ 50,00
    let sector = Uuid::new_v4();
    let collaborator = Uuid::new_v4();
    let goal = numeric_goal(sector, 100.0, 5_000, Period::Monthly);

    let mut store = MemoryStore::new();
    store.put_goal(goal.clone());

    // AND two submissions in the same month reporting 40 then 90
    store.insert_submission(
        submission_on(collaborator, date(2025, 7, 10))
            .number(&goal, 40.0)
            .build(),
    )?;
    store.insert_submission(
        submission_on(collaborator, date(2025, 7, 25))
            .number(&goal, 90.0)
            .observation("restock finished late")
            .build(),
    )?;

    // WHEN July's rewards are computed from the store's views
    let goals = store.list_active_goals(sector)?;
    let submissions = store.submissions_for(collaborator)?;
    let stats = compute_monthly(collaborator, &goals, &submissions, &[], 2025, 7);

    // THEN the later value is representative: ratio 0.9, R$ 45,00 earned
    assert_eq!(stats.per_goal.len(), 1);
    let row = &stats.per_goal[0];
    assert_eq!(row.period_key, "2025-07");
    assert_eq!(row.completion_ratio, 0.9);
    assert_eq!(row.earned_cents, 4_500);
    assert_eq!(stats.total_earned_cents, 4_500);
    assert_eq!(stats.total_blocked_cents, 0);

    assert_eq!(
        format_amount(Cents::new(stats.total_earned_cents).to_decimal()),
        "R$ 45,00"
    );
    Ok(())
}

#[test]
fn scenario_adjacent_months_do_not_leak_into_the_query() -> Result<()> {
    let sector = Uuid::new_v4();
    let collaborator = Uuid::new_v4();
    let goal = numeric_goal(sector, 100.0, 5_000, Period::Monthly);

    let mut store = MemoryStore::new();
    store.put_goal(goal.clone());
    store.insert_submission(
        submission_on(collaborator, date(2025, 6, 30))
            .number(&goal, 100.0)
            .build(),
    )?;
    store.insert_submission(
        submission_on(collaborator, date(2025, 7, 1))
            .number(&goal, 50.0)
            .build(),
    )?;

    let goals = store.list_active_goals(sector)?;
    let submissions = store.submissions_for(collaborator)?;

    let june = compute_monthly(collaborator, &goals, &submissions, &[], 2025, 6);
    assert_eq!(june.total_earned_cents, 5_000);

    let july = compute_monthly(collaborator, &goals, &submissions, &[], 2025, 7);
    assert_eq!(july.total_earned_cents, 2_500);
    Ok(())
}
