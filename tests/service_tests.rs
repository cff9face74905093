mod common;

use std::f64::consts::TAU;

use common::{march, setup_tracker};
use pocketbook::core::services::{ChartLayout, EntryKind};
use pocketbook::domain::{MonthCursor, NewTransaction};
use pocketbook::errors::Rejection;

#[test]
fn salary_and_food_in_march() {
    let (mut tracker, _dir) = setup_tracker();
    tracker
        .add_transaction(NewTransaction::new("Salary", 1000.0, "income").on(march(1)))
        .unwrap();
    tracker
        .add_transaction(NewTransaction::new("Food", 200.0, "expense").on(march(5)))
        .unwrap();

    let summary = tracker.summary();
    assert_eq!(summary.balance_total, 800.0);
    assert_eq!(summary.savings_total, 0.0);
    assert_eq!(summary.entries.len(), 2);

    let layout = tracker.chart(400.0);
    let wedges = layout.wedges();
    assert_eq!(wedges.len(), 1);
    assert_eq!(wedges[0].category, "expense");
    assert!((wedges[0].percent - 100.0).abs() < 1e-9);
    assert!((wedges[0].sweep - TAU).abs() < 1e-12);
}

#[test]
fn duplicate_category_leaves_registry_unchanged() {
    let (mut tracker, _dir) = setup_tracker();
    tracker.add_category("food", "🥦").unwrap();
    let before = tracker.categories().clone();

    let err = tracker.add_category("Food", "🍔").unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&Rejection::DuplicateCategory("Food".into()))
    );
    assert_eq!(tracker.categories(), &before);
}

#[test]
fn withdrawal_reduces_savings_by_amount() {
    let (mut tracker, _dir) = setup_tracker();
    tracker
        .add_transaction(NewTransaction::new("Deposit", 120.0, "savings"))
        .unwrap();
    let before = tracker.summary().savings_total;

    tracker.withdraw_savings(50.0).unwrap();

    let last = tracker.transactions().last().unwrap();
    assert_eq!(last.amount, -50.0);
    assert_eq!(last.category, "savings");
    assert_eq!(last.date, march(15));
    assert_eq!(tracker.summary().savings_total, before - 50.0);
}

#[test]
fn custom_categories_are_expenses_in_the_chart() {
    let (mut tracker, _dir) = setup_tracker();
    tracker.add_category("Car", "🚗").unwrap();
    tracker.add_category("Fun", "🎉").unwrap();
    for (description, amount, category) in [
        ("Fuel", 30.0, "Car"),
        ("Cinema", -10.0, "Fun"),
        ("Bread", 20.0, "expense"),
        ("Salary", 900.0, "income"),
    ] {
        tracker
            .add_transaction(NewTransaction::new(description, amount, category))
            .unwrap();
    }

    let summary = tracker.summary();
    assert_eq!(summary.balance_total, 900.0 - 60.0);
    let kinds: Vec<_> = summary.entries.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Expense,
            EntryKind::Expense,
            EntryKind::Expense,
            EntryKind::Income
        ]
    );

    let ChartLayout::Pie { wedges, .. } = tracker.chart(400.0) else {
        panic!("expected a pie");
    };
    let sum: f64 = wedges.iter().map(|wedge| wedge.sweep).sum();
    assert!((sum - TAU).abs() < 1e-9);
    assert_eq!(wedges[1].label, "Fun (16.7%)");
}

#[test]
fn month_navigation_round_trips_across_years() {
    let (mut tracker, _dir) = setup_tracker();
    tracker.set_month(MonthCursor::new(11, 2023).unwrap());
    assert_eq!(tracker.next_month(), MonthCursor::new(0, 2024).unwrap());
    assert_eq!(tracker.previous_month(), MonthCursor::new(11, 2023).unwrap());
}

#[test]
fn empty_month_shows_placeholder_and_zero_totals() {
    let (mut tracker, _dir) = setup_tracker();
    tracker
        .add_transaction(NewTransaction::new("Salary", 1000.0, "income"))
        .unwrap();
    tracker.previous_month();

    let summary = tracker.summary();
    assert!(summary.is_empty());
    assert_eq!(summary.balance_total, 0.0);
    assert_eq!(summary.savings_total, 0.0);
    assert!(tracker.chart(400.0).is_empty());
}

#[test]
fn rejected_transactions_are_not_persisted() {
    let (mut tracker, dir) = setup_tracker();
    let err = tracker
        .add_transaction(NewTransaction::new("   ", 10.0, "expense"))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::EmptyDescription));
    let err = tracker
        .add_transaction(NewTransaction::new("Food", f64::NAN, "expense"))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::InvalidAmount));
    assert!(tracker.transactions().is_empty());
    assert!(!dir.join("transactions.json").exists());
}
