//! Display implementations for domain models.
//!
//! All output is markdown for rich terminal rendering: a plan renders as a
//! document with metadata, criteria checklist and task sections; summaries
//! and activity entries render as list items.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ActionItem, ActionStatus, ActivityEntry, OriginKind, Plan, PlanOutcome, PlanStatus,
    PlanSummary, Priority, StopReason, Task, TaskStatus,
};
use crate::scenario::ScenarioPreview;

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        write!(f, "- Status: {}", self.status)?;
        match self.outcome {
            Some(outcome) => writeln!(f, " ({outcome})")?,
            None => writeln!(f)?,
        }
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        if !self.shift_context.is_empty() {
            writeln!(f, "- Shift: {}", self.shift_context)?;
        }
        if !self.created_by.is_empty() {
            writeln!(f, "- Created by: {}", self.created_by)?;
        }
        if let Some(target) = &self.target_completion {
            writeln!(f, "- Target completion: {}", LocalDateTime(target))?;
        }
        if let Some(origin) = &self.origin {
            let kind = match origin.kind {
                OriginKind::Alert => "alert",
                OriginKind::FollowOn => "follow-on of plan",
                OriginKind::Handoff => "handoff from plan",
            };
            writeln!(f, "- Origin: {} {}", kind, origin.source)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(reason) = self.stop_reason {
            write!(f, "- Stopped: {reason}")?;
            match &self.stop_notes {
                Some(notes) => writeln!(f, " ({notes})")?,
                None => writeln!(f)?,
            }
        }
        if let Some(notes) = &self.completion_notes {
            writeln!(f, "- Completion notes: {notes}")?;
        }

        if !self.success_criteria.is_empty() {
            writeln!(f, "\n## Success Criteria")?;
            writeln!(f)?;
            for criterion in &self.success_criteria {
                let mark = if criterion.met { "x" } else { " " };
                writeln!(f, "- [{mark}] {}", criterion.text)?;
            }
        }

        if !self.tasks.is_empty() {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        } else {
            writeln!(f, "\nNo tasks in this plan.")?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(assignee) = &self.assignee {
            writeln!(f, "- Assignee: {assignee}")?;
        }
        if let Some(due) = &self.due_time {
            writeln!(f, "- Due: {}", LocalDateTime(due))?;
        }
        if let Some(started) = &self.started_at {
            writeln!(f, "- Started: {}", LocalDateTime(started))?;
        }
        if let Some(completed) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        if let Some(tradeoff) = &self.tradeoff {
            writeln!(f, "- Tradeoff: {tradeoff}")?;
        }
        if let Some(impact) = &self.system_impact {
            writeln!(f, "- Impact: {} → {}", impact.before, impact.after)?;
        }

        if !self.actions.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Actions")?;
            writeln!(f)?;
            for action in &self.actions {
                write!(f, "{action}")?;
            }
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.status {
            ActionStatus::Applied => "x",
            ActionStatus::Pending => " ",
        };
        write!(
            f,
            "- [{mark}] {} '{}': {} → {}",
            self.entity_kind, self.entity_name, self.action_kind, self.target
        )?;
        if let Some(applied_at) = &self.applied_at {
            write!(f, " (applied {})", LocalDateTime(applied_at))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {}: {}",
            LocalDateTime(&self.at),
            self.kind.as_str(),
            self.message
        )
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.done_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        write!(f, "- **Status**: {}", self.status)?;
        match self.outcome {
            Some(outcome) => writeln!(f, " ({outcome})")?,
            None => writeln!(f)?,
        }
        writeln!(f, "- **Priority**: {}", self.priority)?;
        writeln!(f, "- **Progress**: {}%", self.progress)?;
        if !self.shift_context.is_empty() {
            writeln!(f, "- **Shift**: {}", self.shift_context)?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Blank line after each plan

        Ok(())
    }
}

impl fmt::Display for ScenarioPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Preview of plan {}", self.plan_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Score: {} → {} ({:+})",
            self.snapshot.before,
            self.snapshot.after,
            self.score_delta()
        )?;
        writeln!(f, "- Alerts resolved: {}", self.snapshot.alerts_resolved)?;
        writeln!(f, "- New alerts: {}", self.snapshot.alerts_new)?;
        if !self.impact_deltas.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Projected Impact")?;
            writeln!(f)?;
            for delta in &self.impact_deltas {
                writeln!(
                    f,
                    "- {}: {} → {} ({:+})",
                    delta.category, delta.base, delta.projected, delta.delta
                )?;
            }
        }
        if !self.snapshot.remaining_root_causes.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Remaining Root Causes")?;
            writeln!(f)?;
            for cause in &self.snapshot.remaining_root_causes {
                writeln!(f, "- {cause}")?;
            }
        }
        Ok(())
    }
}
