//! Tests for the pure lifecycle state machine, run against in-memory
//! entities with fixed clocks.

use jiff::Timestamp;

use super::{plan_fsm, progress::progress, resolver, task_fsm};
use crate::error::BoardError;
use crate::models::{
    ActionItem, ActionStatus, Disposition, OriginKind, Plan, PlanOutcome, PlanStatus, Priority,
    StopReason, SuccessCriterion, Task, TaskStatus,
};

fn t0() -> Timestamp {
    "2025-06-01T08:00:00Z".parse().unwrap()
}

fn t1() -> Timestamp {
    "2025-06-01T09:30:00Z".parse().unwrap()
}

fn make_task(id: u64, status: TaskStatus) -> Task {
    Task {
        id,
        plan_id: 1,
        title: format!("Task {id}"),
        status,
        assignee: None,
        due_time: None,
        started_at: match status {
            TaskStatus::InProgress | TaskStatus::Done => Some(t0()),
            _ => None,
        },
        completed_at: match status {
            TaskStatus::Done => Some(t0()),
            _ => None,
        },
        actions: Vec::new(),
        tradeoff: None,
        system_impact: None,
        position: id as u32,
        created_at: t0(),
        updated_at: t0(),
    }
}

fn make_action(id: u64, task_id: u64, status: ActionStatus) -> ActionItem {
    ActionItem {
        id,
        task_id,
        entity_kind: "station".to_string(),
        entity_name: format!("station-{id}"),
        action_kind: "reassign".to_string(),
        target: "packing".to_string(),
        status,
        actual: match status {
            ActionStatus::Applied => Some("packing".to_string()),
            ActionStatus::Pending => None,
        },
        applied_at: match status {
            ActionStatus::Applied => Some(t0()),
            ActionStatus::Pending => None,
        },
        position: 0,
    }
}

fn make_plan(status: PlanStatus, tasks: Vec<Task>) -> Plan {
    Plan {
        id: 1,
        name: "Stabilize line 3".to_string(),
        status,
        outcome: None,
        priority: Priority::High,
        progress: progress(&tasks),
        shift_context: "day".to_string(),
        created_by: "lead-a".to_string(),
        target_completion: None,
        success_criteria: Vec::new(),
        tasks,
        origin: None,
        projected_impact: None,
        stop_reason: None,
        stop_notes: None,
        completion_notes: None,
        created_at: t0(),
        updated_at: t0(),
    }
}

// ---------------------------------------------------------------------------
// Progress calculator
// ---------------------------------------------------------------------------

#[test]
fn test_progress_empty_task_list_is_zero() {
    assert_eq!(progress(&[]), 0);
}

#[test]
fn test_progress_rounds_to_nearest_percent() {
    let tasks = vec![
        make_task(1, TaskStatus::Done),
        make_task(2, TaskStatus::InProgress),
        make_task(3, TaskStatus::Todo),
    ];
    assert_eq!(progress(&tasks), 33);

    let tasks = vec![
        make_task(1, TaskStatus::Done),
        make_task(2, TaskStatus::Done),
        make_task(3, TaskStatus::Todo),
    ];
    assert_eq!(progress(&tasks), 67);
}

#[test]
fn test_progress_all_done_is_hundred() {
    let tasks = vec![make_task(1, TaskStatus::Done), make_task(2, TaskStatus::Done)];
    assert_eq!(progress(&tasks), 100);
}

#[test]
fn test_progress_ignores_incomplete_tasks() {
    let tasks = vec![
        make_task(1, TaskStatus::Done),
        make_task(2, TaskStatus::Incomplete),
    ];
    assert_eq!(progress(&tasks), 50);
}

// ---------------------------------------------------------------------------
// Task state machine
// ---------------------------------------------------------------------------

#[test]
fn test_start_stamps_started_at() {
    let mut task = make_task(1, TaskStatus::Todo);
    task_fsm::start(&mut task, t1()).unwrap();

    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.started_at, Some(t1()));
    assert_eq!(task.completed_at, None);
}

#[test]
fn test_start_rejected_when_already_started() {
    for status in [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Incomplete] {
        let mut task = make_task(1, status);
        let before = task.clone();
        assert!(matches!(
            task_fsm::start(&mut task, t1()).unwrap_err(),
            BoardError::InvalidTransition { .. }
        ));
        assert_eq!(task, before);
    }
}

#[test]
fn test_complete_from_in_progress() {
    let mut task = make_task(1, TaskStatus::InProgress);
    task_fsm::complete(&mut task, t1()).unwrap();

    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.started_at, Some(t0()));
    assert_eq!(task.completed_at, Some(t1()));
}

#[test]
fn test_complete_from_todo_is_implicit_start() {
    let mut task = make_task(1, TaskStatus::Todo);
    task_fsm::complete(&mut task, t1()).unwrap();

    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.started_at, Some(t1()));
    assert_eq!(task.completed_at, Some(t1()));
}

#[test]
fn test_complete_rejected_from_terminal_statuses() {
    for status in [TaskStatus::Done, TaskStatus::Incomplete] {
        let mut task = make_task(1, status);
        assert!(matches!(
            task_fsm::complete(&mut task, t1()).unwrap_err(),
            BoardError::InvalidTransition { .. }
        ));
    }
}

#[test]
fn test_apply_status_rejects_backwards_and_incomplete() {
    let mut task = make_task(1, TaskStatus::InProgress);
    assert!(matches!(
        task_fsm::apply_status(&mut task, TaskStatus::Todo, t1()).unwrap_err(),
        BoardError::InvalidTransition { .. }
    ));
    assert!(matches!(
        task_fsm::apply_status(&mut task, TaskStatus::Incomplete, t1()).unwrap_err(),
        BoardError::InvalidTransition { .. }
    ));
    assert_eq!(task.status, TaskStatus::InProgress);
}

#[test]
fn test_toggle_action_applies_and_stamps() {
    let mut task = make_task(1, TaskStatus::InProgress);
    task.actions.push(make_action(10, 1, ActionStatus::Pending));

    task_fsm::toggle_action(&mut task, 10, t1()).unwrap();

    let action = &task.actions[0];
    assert_eq!(action.status, ActionStatus::Applied);
    assert_eq!(action.actual.as_deref(), Some("packing"));
    assert_eq!(action.applied_at, Some(t1()));
}

#[test]
fn test_toggle_action_is_self_inverse() {
    let mut task = make_task(1, TaskStatus::Todo);
    task.actions.push(make_action(10, 1, ActionStatus::Pending));
    let before = task.actions[0].clone();

    task_fsm::toggle_action(&mut task, 10, t1()).unwrap();
    task_fsm::toggle_action(&mut task, 10, t1()).unwrap();

    assert_eq!(task.actions[0], before);
}

#[test]
fn test_toggle_action_rejected_on_done_task() {
    let mut task = make_task(1, TaskStatus::Done);
    task.actions.push(make_action(10, 1, ActionStatus::Pending));
    let before = task.actions[0].clone();

    assert!(matches!(
        task_fsm::toggle_action(&mut task, 10, t1()).unwrap_err(),
        BoardError::InvalidTransition { .. }
    ));
    assert_eq!(task.actions[0], before);
}

#[test]
fn test_toggle_action_unknown_id() {
    let mut task = make_task(1, TaskStatus::Todo);
    assert!(matches!(
        task_fsm::toggle_action(&mut task, 99, t1()).unwrap_err(),
        BoardError::ActionNotFound { id: 99 }
    ));
}

// ---------------------------------------------------------------------------
// Plan transitions
// ---------------------------------------------------------------------------

#[test]
fn test_execute_draft_sets_target_completion() {
    let mut plan = make_plan(PlanStatus::Draft, vec![]);
    plan_fsm::execute_draft(&mut plan, t1()).unwrap();

    assert_eq!(plan.status, PlanStatus::Active);
    let expected: Timestamp = "2025-06-01T13:30:00Z".parse().unwrap();
    assert_eq!(plan.target_completion, Some(expected));
}

#[test]
fn test_execute_draft_rejected_from_other_statuses() {
    for status in [
        PlanStatus::Active,
        PlanStatus::Completed,
        PlanStatus::Partial,
        PlanStatus::Abandoned,
    ] {
        let mut plan = make_plan(status, vec![]);
        let before = plan.clone();
        assert!(matches!(
            plan_fsm::execute_draft(&mut plan, t1()).unwrap_err(),
            BoardError::InvalidTransition { .. }
        ));
        assert_eq!(plan, before);
    }
}

#[test]
fn test_stop_with_no_done_tasks_is_abandoned() {
    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Todo), make_task(2, TaskStatus::InProgress)],
    );

    let status = plan_fsm::stop_plan(&mut plan, StopReason::NotWorking, None, t1()).unwrap();

    assert_eq!(status, PlanStatus::Abandoned);
    assert_eq!(plan.status, PlanStatus::Abandoned);
    assert_eq!(plan.outcome, Some(PlanOutcome::Abandoned));
    assert_eq!(plan.stop_reason, Some(StopReason::NotWorking));
}

#[test]
fn test_stop_with_done_task_is_partial() {
    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Done), make_task(2, TaskStatus::Todo)],
    );

    plan_fsm::stop_plan(&mut plan, StopReason::Priority, Some("notes".to_string()), t1())
        .unwrap();

    assert_eq!(plan.status, PlanStatus::Partial);
    assert_eq!(plan.outcome, Some(PlanOutcome::Partial));
    assert_eq!(plan.stop_notes.as_deref(), Some("notes"));
}

#[test]
fn test_stop_rejected_on_draft() {
    let mut plan = make_plan(PlanStatus::Draft, vec![]);
    assert!(matches!(
        plan_fsm::stop_plan(&mut plan, StopReason::Other, None, t1()).unwrap_err(),
        BoardError::InvalidTransition { .. }
    ));
}

// ---------------------------------------------------------------------------
// Completion resolver
// ---------------------------------------------------------------------------

#[test]
fn test_assess_counts_unfinished_work() {
    let mut t2 = make_task(2, TaskStatus::InProgress);
    t2.actions.push(make_action(10, 2, ActionStatus::Pending));
    t2.actions.push(make_action(11, 2, ActionStatus::Applied));

    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Done), t2, make_task(3, TaskStatus::Todo)],
    );
    plan.success_criteria = vec![
        SuccessCriterion { text: "Throughput above 90%".to_string(), met: true },
        SuccessCriterion::new("Queue below 10"),
    ];

    let a = resolver::assess(&plan);
    assert_eq!(a.pending_actions, 1);
    assert_eq!(a.open_tasks, 2);
    assert_eq!(a.unmet_criteria, 1);
    assert_eq!(a.total_criteria, 2);
    assert!(a.incomplete_work());
    assert!(!a.is_full_success());
}

#[test]
fn test_full_success_requires_nonempty_criteria() {
    // All tasks done, no criteria defined: never a full success.
    let plan = make_plan(PlanStatus::Active, vec![make_task(1, TaskStatus::Done)]);
    let a = resolver::assess(&plan);
    assert!(!a.incomplete_work());
    assert!(!a.is_full_success());
}

#[test]
fn test_complete_disposition_rejected_with_incomplete_work() {
    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Done), make_task(2, TaskStatus::Todo)],
    );
    let before = plan.clone();

    let err =
        resolver::resolve_completion(&mut plan, Disposition::Complete, None, t1()).unwrap_err();

    match err {
        BoardError::IncompleteWork { open_tasks, .. } => assert_eq!(open_tasks, 1),
        other => panic!("Expected IncompleteWork, got {other:?}"),
    }
    assert_eq!(plan, before);
}

#[test]
fn test_complete_disposition_full_success() {
    let mut plan = make_plan(PlanStatus::Active, vec![make_task(1, TaskStatus::Done)]);
    plan.success_criteria = vec![SuccessCriterion {
        text: "Line recovered".to_string(),
        met: true,
    }];

    let carryover =
        resolver::resolve_completion(&mut plan, Disposition::Complete, None, t1()).unwrap();

    assert!(carryover.is_none());
    assert_eq!(plan.status, PlanStatus::Completed);
    assert_eq!(plan.outcome, Some(PlanOutcome::Success));
}

#[test]
fn test_close_disposition_partial_outcome_and_incomplete_stamping() {
    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Done), make_task(2, TaskStatus::InProgress)],
    );

    let carryover = resolver::resolve_completion(
        &mut plan,
        Disposition::Close,
        Some("ran out of shift".to_string()),
        t1(),
    )
    .unwrap();

    assert!(carryover.is_none());
    assert_eq!(plan.status, PlanStatus::Completed);
    assert_eq!(plan.outcome, Some(PlanOutcome::Partial));
    assert_eq!(plan.completion_notes.as_deref(), Some("ran out of shift"));
    assert_eq!(plan.tasks[0].status, TaskStatus::Done);
    assert_eq!(plan.tasks[1].status, TaskStatus::Incomplete);
}

#[test]
fn test_follow_on_carries_non_done_tasks_and_pending_actions() {
    // The 3-task scenario: T1 done, T2 in-progress, T3 todo, 1 unmet criterion.
    let mut t2 = make_task(2, TaskStatus::InProgress);
    t2.actions.push(make_action(10, 2, ActionStatus::Pending));
    t2.actions.push(make_action(11, 2, ActionStatus::Applied));
    let mut plan = make_plan(
        PlanStatus::Active,
        vec![make_task(1, TaskStatus::Done), t2, make_task(3, TaskStatus::Todo)],
    );
    plan.success_criteria = vec![SuccessCriterion::new("Queue below 10")];
    assert_eq!(plan.progress, 33);

    let draft = resolver::resolve_completion(&mut plan, Disposition::FollowOn, None, t1())
        .unwrap()
        .expect("follow-on must produce a draft");

    // (non-done tasks) + (unmet criteria)
    assert_eq!(draft.tasks.len(), 3);
    assert_eq!(draft.tasks[0].title, "Task 2");
    assert_eq!(draft.tasks[1].title, "Task 3");
    assert_eq!(draft.tasks[2].title, "Address criterion: Queue below 10");
    assert!(draft.tasks[2].actions.is_empty());

    // Only the pending action carries forward.
    assert_eq!(draft.tasks[0].actions.len(), 1);
    assert_eq!(draft.tasks[0].actions[0].entity_name, "station-10");

    assert!(!draft.activate_immediately);
    assert_eq!(draft.name, "Follow-on: Stabilize line 3");
    assert_eq!(draft.shift_context, "day");
    assert_eq!(draft.created_by, "lead-a");
    let origin = draft.origin.expect("carryover draft carries an origin");
    assert_eq!(origin.kind, OriginKind::FollowOn);
    assert_eq!(origin.source, "1");

    // Source still closes as completed/partial.
    assert_eq!(plan.status, PlanStatus::Completed);
    assert_eq!(plan.outcome, Some(PlanOutcome::Partial));
}

#[test]
fn test_handoff_advances_shift_and_reassigns_creator() {
    let mut plan = make_plan(PlanStatus::Active, vec![make_task(1, TaskStatus::Todo)]);

    let draft = resolver::resolve_completion(&mut plan, Disposition::Handoff, None, t1())
        .unwrap()
        .expect("handoff must produce a draft");

    assert_eq!(draft.name, "Handoff: Stabilize line 3");
    assert_eq!(draft.shift_context, "swing");
    assert_eq!(draft.created_by, "next-shift-lead");
    assert_eq!(draft.origin.unwrap().kind, OriginKind::Handoff);
}

#[test]
fn test_resolve_rejected_on_non_active_plan() {
    for status in [PlanStatus::Draft, PlanStatus::Completed, PlanStatus::Abandoned] {
        let mut plan = make_plan(status, vec![]);
        assert!(matches!(
            resolver::resolve_completion(&mut plan, Disposition::Close, None, t1()).unwrap_err(),
            BoardError::InvalidTransition { .. }
        ));
    }
}
