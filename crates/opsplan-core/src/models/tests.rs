//! Unit tests for model types: string/serde representations, summary
//! derivation and the small invariant helpers.

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::*;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn sample_task(id: u64, status: TaskStatus) -> Task {
    Task {
        id,
        plan_id: 1,
        title: format!("Task {id}"),
        status,
        assignee: None,
        due_time: None,
        started_at: None,
        completed_at: None,
        actions: Vec::new(),
        tradeoff: None,
        system_impact: None,
        position: 0,
        created_at: ts("2025-06-01T08:00:00Z"),
        updated_at: ts("2025-06-01T08:00:00Z"),
    }
}

fn sample_plan() -> Plan {
    Plan {
        id: 1,
        name: "Rebalance line 2".to_string(),
        status: PlanStatus::Active,
        outcome: None,
        priority: Priority::High,
        progress: 50,
        shift_context: "day".to_string(),
        created_by: "shift-lead".to_string(),
        target_completion: None,
        success_criteria: vec![SuccessCriterion::new("Queue below 10".to_string())],
        tasks: vec![
            sample_task(1, TaskStatus::Done),
            sample_task(2, TaskStatus::InProgress),
        ],
        origin: None,
        projected_impact: None,
        stop_reason: None,
        stop_notes: None,
        completion_notes: None,
        created_at: ts("2025-06-01T08:00:00Z"),
        updated_at: ts("2025-06-01T09:00:00Z"),
    }
}

#[test]
fn test_plan_status_string_round_trip() {
    for status in [
        PlanStatus::Draft,
        PlanStatus::Active,
        PlanStatus::PendingApproval,
        PlanStatus::Completed,
        PlanStatus::Partial,
        PlanStatus::Abandoned,
    ] {
        assert_eq!(status.as_str().parse::<PlanStatus>().unwrap(), status);
    }
}

#[test]
fn test_plan_status_parse_accepts_underscore_form() {
    assert_eq!(
        "pending_approval".parse::<PlanStatus>().unwrap(),
        PlanStatus::PendingApproval
    );
    assert!("finished".parse::<PlanStatus>().is_err());
}

#[test]
fn test_plan_status_terminal_set() {
    assert!(PlanStatus::Completed.is_terminal());
    assert!(PlanStatus::Partial.is_terminal());
    assert!(PlanStatus::Abandoned.is_terminal());
    assert!(!PlanStatus::Draft.is_terminal());
    assert!(!PlanStatus::Active.is_terminal());
    assert!(!PlanStatus::PendingApproval.is_terminal());
}

#[test]
fn test_task_status_editable_set() {
    assert!(TaskStatus::Todo.is_editable());
    assert!(TaskStatus::InProgress.is_editable());
    assert!(!TaskStatus::Done.is_editable());
    assert!(!TaskStatus::Incomplete.is_editable());
}

#[test]
fn test_task_status_icons() {
    assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
    assert_eq!(TaskStatus::Todo.with_icon(), "○ Todo");
    assert_eq!(TaskStatus::Incomplete.with_icon(), "⊘ Incomplete");
}

#[test]
fn test_status_serde_uses_kebab_case() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(
        serde_json::to_string(&StopReason::NotWorking).unwrap(),
        "\"not-working\""
    );
    assert_eq!(
        serde_json::to_string(&Disposition::FollowOn).unwrap(),
        "\"follow-on\""
    );
    assert_eq!(
        serde_json::from_str::<PlanStatus>("\"pending-approval\"").unwrap(),
        PlanStatus::PendingApproval
    );
}

#[test]
fn test_success_criterion_created_unmet() {
    let criterion = SuccessCriterion::new("Alert A7 cleared".to_string());
    assert_eq!(criterion.text, "Alert A7 cleared");
    assert!(!criterion.met);
}

#[test]
fn test_plan_done_task_count() {
    let plan = sample_plan();
    assert_eq!(plan.done_task_count(), 1);
}

#[test]
fn test_plan_task_lookup() {
    let mut plan = sample_plan();
    assert_eq!(plan.task(2).unwrap().status, TaskStatus::InProgress);
    assert!(plan.task(99).is_none());
    plan.task_mut(2).unwrap().title = "renamed".to_string();
    assert_eq!(plan.task(2).unwrap().title, "renamed");
}

#[test]
fn test_plan_summary_from_plan() {
    let plan = sample_plan();
    let summary = PlanSummary::from(&plan);

    assert_eq!(summary.id, 1);
    assert_eq!(summary.name, "Rebalance line 2");
    assert_eq!(summary.status, PlanStatus::Active);
    assert_eq!(summary.priority, Priority::High);
    assert_eq!(summary.progress, 50);
    assert_eq!(summary.total_tasks, 2);
    assert_eq!(summary.done_tasks, 1);
}

#[test]
fn test_impact_projection_delta() {
    let projection = ImpactProjection {
        base: 72.0,
        projected: 80.5,
    };
    assert!((projection.delta() - 8.5).abs() < f64::EPSILON);
}

#[test]
fn test_plan_origin_serde_round_trip() {
    let origin = PlanOrigin {
        kind: OriginKind::FollowOn,
        source: "12".to_string(),
    };
    let json = serde_json::to_string(&origin).unwrap();
    assert!(json.contains("\"follow-on\""));
    let back: PlanOrigin = serde_json::from_str(&json).unwrap();
    assert_eq!(back, origin);
}

#[test]
fn test_projected_impact_serde_round_trip() {
    let mut impact = BTreeMap::new();
    impact.insert(
        "throughput".to_string(),
        ImpactProjection {
            base: 60.0,
            projected: 75.0,
        },
    );
    let json = serde_json::to_string(&impact).unwrap();
    let back: BTreeMap<String, ImpactProjection> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, impact);
}

#[test]
fn test_activity_kind_parse() {
    assert_eq!(
        "status-change".parse::<ActivityKind>().unwrap(),
        ActivityKind::StatusChange
    );
    assert_eq!("comment".parse::<ActivityKind>().unwrap(), ActivityKind::Comment);
    assert_eq!("metric".parse::<ActivityKind>().unwrap(), ActivityKind::Metric);
    assert!("note".parse::<ActivityKind>().is_err());
}

#[test]
fn test_plan_filter_from_list_params() {
    let params = crate::params::ListPlans {
        status: Some("active".to_string()),
        query: Some("line 2".to_string()),
    };
    let filter = PlanFilter::try_from(&params).unwrap();
    assert_eq!(filter.status, Some(PlanStatus::Active));
    assert_eq!(filter.query.as_deref(), Some("line 2"));

    let bad = crate::params::ListPlans {
        status: Some("finished".to_string()),
        query: None,
    };
    assert!(PlanFilter::try_from(&bad).is_err());
}
