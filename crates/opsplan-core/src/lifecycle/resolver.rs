//! Completion resolver: decides a closing plan's outcome and derives the
//! follow-on or handoff draft that carries unfinished work forward.

use jiff::Timestamp;

use crate::error::{BoardError, Result};
use crate::models::{
    Disposition, OriginKind, Plan, PlanOrigin, PlanOutcome, PlanStatus, TaskStatus,
};
use crate::params::{ActionSpec, CreatePlan, TaskSpec};

/// Placeholder creator assigned to handoff drafts.
const NEXT_SHIFT_LEAD: &str = "next-shift-lead";

/// Snapshot of a plan's unfinished work, computed before closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionAssessment {
    /// Actions still pending across all tasks
    pub pending_actions: usize,
    /// Tasks still in `todo` or `in-progress`
    pub open_tasks: usize,
    /// Success criteria not yet met
    pub unmet_criteria: usize,
    /// Total success criteria defined on the plan
    pub total_criteria: usize,
}

impl CompletionAssessment {
    /// Any pending action, open task or unmet criterion counts as
    /// incomplete work.
    pub fn incomplete_work(&self) -> bool {
        self.pending_actions > 0 || self.open_tasks > 0 || self.unmet_criteria > 0
    }

    /// Full success requires no incomplete work *and* a non-empty criteria
    /// list with every criterion met. A plan with no criteria defined can
    /// never be a full success; inherited behavior, kept as-is.
    pub fn is_full_success(&self) -> bool {
        !self.incomplete_work() && self.total_criteria > 0
    }
}

/// Measures a plan's unfinished work.
pub fn assess(plan: &Plan) -> CompletionAssessment {
    let pending_actions = plan.tasks.iter().map(|t| t.pending_action_count()).sum();
    let open_tasks = plan
        .tasks
        .iter()
        .filter(|t| matches!(t.status, TaskStatus::Todo | TaskStatus::InProgress))
        .count();
    let unmet_criteria = plan.success_criteria.iter().filter(|c| !c.met).count();

    CompletionAssessment {
        pending_actions,
        open_tasks,
        unmet_criteria,
        total_criteria: plan.success_criteria.len(),
    }
}

/// Resolves a completion command against an active plan.
///
/// Marks the plan `completed` with outcome `success` (full success) or
/// `partial`, stamps still-open tasks `incomplete`, and for the `follow-on`
/// and `handoff` dispositions returns the derivative draft specification the
/// caller should create. `complete` is rejected outright while incomplete
/// work remains; the plan is left untouched on any rejection.
pub fn resolve_completion(
    plan: &mut Plan,
    disposition: Disposition,
    notes: Option<String>,
    now: Timestamp,
) -> Result<Option<CreatePlan>> {
    if plan.status != PlanStatus::Active {
        return Err(BoardError::invalid_transition(format!(
            "Plan {} cannot be completed from status '{}'",
            plan.id,
            plan.status.as_str()
        )));
    }

    let assessment = assess(plan);

    if disposition == Disposition::Complete && assessment.incomplete_work() {
        return Err(BoardError::IncompleteWork {
            pending_actions: assessment.pending_actions,
            open_tasks: assessment.open_tasks,
            unmet_criteria: assessment.unmet_criteria,
        });
    }

    let carryover = match disposition {
        Disposition::FollowOn => Some(carryover_draft(plan, OriginKind::FollowOn)),
        Disposition::Handoff => Some(carryover_draft(plan, OriginKind::Handoff)),
        Disposition::Complete | Disposition::Close => None,
    };

    // The source closes as completed regardless of disposition.
    for task in &mut plan.tasks {
        if task.status.is_editable() {
            task.status = TaskStatus::Incomplete;
            task.updated_at = now;
        }
    }
    plan.status = PlanStatus::Completed;
    plan.outcome = Some(if assessment.is_full_success() {
        PlanOutcome::Success
    } else {
        PlanOutcome::Partial
    });
    plan.completion_notes = notes;
    plan.updated_at = now;

    Ok(carryover)
}

/// Builds the draft specification carrying a closing plan's unfinished work:
/// every non-done task reset to `todo` with only its pending actions, plus
/// one synthetic action-less task per unmet criterion. Applied actions never
/// carry forward; that is a contract, not an accident.
fn carryover_draft(plan: &Plan, kind: OriginKind) -> CreatePlan {
    let mut tasks: Vec<TaskSpec> = plan
        .tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done)
        .map(|task| TaskSpec {
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            due_time: task.due_time,
            tradeoff: task.tradeoff.clone(),
            actions: task
                .actions
                .iter()
                .filter(|a| a.status == crate::models::ActionStatus::Pending)
                .map(|a| ActionSpec {
                    entity_kind: a.entity_kind.clone(),
                    entity_name: a.entity_name.clone(),
                    action_kind: a.action_kind.clone(),
                    target: a.target.clone(),
                })
                .collect(),
        })
        .collect();

    let unmet: Vec<String> = plan
        .success_criteria
        .iter()
        .filter(|c| !c.met)
        .map(|c| c.text.clone())
        .collect();

    for text in &unmet {
        tasks.push(TaskSpec {
            title: format!("Address criterion: {text}"),
            ..Default::default()
        });
    }

    let (name, shift_context, created_by) = match kind {
        OriginKind::Handoff => (
            format!("Handoff: {}", plan.name),
            next_shift(&plan.shift_context),
            NEXT_SHIFT_LEAD.to_string(),
        ),
        _ => (
            format!("Follow-on: {}", plan.name),
            plan.shift_context.clone(),
            plan.created_by.clone(),
        ),
    };

    CreatePlan {
        name,
        priority: plan.priority,
        shift_context,
        created_by,
        activate_immediately: false,
        origin: Some(PlanOrigin {
            kind,
            source: plan.id.to_string(),
        }),
        // Predictions describe the source plan's moment; a carryover draft
        // needs a fresh prediction run.
        projected_impact: None,
        success_criteria: unmet,
        tasks,
    }
}

/// Advances a shift context to the next shift in the standard rotation.
/// Unknown contexts get a "(next)" suffix rather than guessing.
fn next_shift(shift_context: &str) -> String {
    match shift_context.to_lowercase().as_str() {
        "day" => "swing".to_string(),
        "swing" => "night".to_string(),
        "night" => "day".to_string(),
        other if other.is_empty() => String::new(),
        _ => format!("{shift_context} (next)"),
    }
}
