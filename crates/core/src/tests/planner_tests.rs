// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_even_week, create_odd_week, create_test_config, create_test_store,
};
use crate::{CoreError, Optimizer, PlanOutcome, RuleEngine, SearchKind};
use conges_domain::{DateRange, NoHolidays, OverrideKind, OverrideStore, RestCycleConfig};
use time::macros::date;

#[test]
fn test_plan_fills_work_days_up_to_quota() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);

    let outcome: PlanOutcome = optimizer
        .plan_range(&OverrideStore::new(), create_odd_week(), 3)
        .unwrap();

    assert_eq!(
        outcome.placed,
        vec![
            date!(2026 - 05 - 04),
            date!(2026 - 05 - 05),
            date!(2026 - 05 - 06),
        ]
    );
    assert_eq!(outcome.evaluation.charged_count, 3);
    assert_eq!(outcome.quota_remaining, 0);
}

#[test]
fn test_plan_counts_taxed_rest_against_quota() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);

    let outcome: PlanOutcome = optimizer
        .plan_range(&OverrideStore::new(), create_even_week(), 3)
        .unwrap();

    // The first leave also taxes Monday, leaving room for one more day.
    assert_eq!(
        outcome.placed,
        vec![date!(2026 - 05 - 12), date!(2026 - 05 - 13)]
    );
    assert_eq!(outcome.evaluation.taxed_days(), vec![date!(2026 - 05 - 11)]);
    assert_eq!(outcome.evaluation.charged_count, 3);
    assert_eq!(outcome.store.get(date!(2026 - 05 - 14)), None);
}

#[test]
fn test_plan_skips_days_that_would_exceed_quota() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);

    let outcome: PlanOutcome = optimizer
        .plan_range(&OverrideStore::new(), create_even_week(), 1)
        .unwrap();

    assert!(outcome.placed.is_empty());
    assert!(outcome.store.is_empty());
    assert_eq!(outcome.quota_remaining, 1);
}

#[test]
fn test_plan_counts_existing_leave() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);
    let store: OverrideStore =
        create_test_store(&[(date!(2026 - 05 - 07), OverrideKind::SupplementaryLeave)]);

    let outcome: PlanOutcome = optimizer.plan_range(&store, create_odd_week(), 4).unwrap();

    assert_eq!(
        outcome.placed,
        vec![
            date!(2026 - 05 - 04),
            date!(2026 - 05 - 05),
            date!(2026 - 05 - 06),
        ]
    );
    assert_eq!(outcome.evaluation.charged_count, 4);
    assert_eq!(outcome.quota_remaining, 0);
}

#[test]
fn test_plan_keeps_walking_into_untaxed_week() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);
    let range: DateRange = DateRange::new(date!(2026 - 05 - 11), date!(2026 - 05 - 19)).unwrap();

    let outcome: PlanOutcome = optimizer
        .plan_range(&OverrideStore::new(), range, 1)
        .unwrap();

    // Every work day of the even week would also tax Monday; the odd week
    // that follows is never taxed, so its Monday still fits.
    assert_eq!(outcome.placed, vec![date!(2026 - 05 - 18)]);
    assert!(outcome.evaluation.taxed_days().is_empty());
    assert_eq!(outcome.evaluation.charged_count, 1);
    assert_eq!(outcome.quota_remaining, 0);
}

#[test]
fn test_plan_rejects_range_beyond_cap() {
    let config: RestCycleConfig = create_test_config();
    let engine: RuleEngine<'_, NoHolidays> = RuleEngine::new(&config, &NoHolidays);
    let optimizer: Optimizer<'_, '_, NoHolidays> = Optimizer::new(&engine);
    let range: DateRange = DateRange::with_length(date!(2026 - 01 - 01), 365).unwrap();

    let result: Result<PlanOutcome, CoreError> =
        optimizer.plan_range(&OverrideStore::new(), range, 31);

    assert_eq!(
        result,
        Err(CoreError::UnboundedSearch {
            search: SearchKind::OptimizerHorizon,
            from: date!(2026 - 01 - 01),
            limit_days: 184,
        })
    );
}
