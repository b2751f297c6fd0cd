//! Board operations that return formatted wrapper types.
//!
//! Interface layers (the CLI today) render everything through `Display`
//! implementations; these handlers produce the display wrappers so the
//! formatting is identical across interfaces.

use super::Board;
use crate::{
    display::{ActivityFeed, PlanSummaries},
    error::{BoardError, Result},
    models::{PlanFilter, PlanStatus, PlanSummary},
    params::{Id, ListPlans},
    scenario::{self, PreviewContext, ScenarioPreview},
};

impl Board {
    /// Handle listing plans as summaries for consistent list display.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let filter = PlanFilter::try_from(params)?;
        let plans = self.list_plans(filter).await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle fetching a plan's activity log as a renderable feed.
    pub async fn activity_feed(&self, params: &Id) -> Result<ActivityFeed> {
        let entries = self.list_activity(params).await?;
        Ok(ActivityFeed(entries))
    }

    /// Handle a read-only scenario preview of a draft plan.
    ///
    /// Previews never mutate the plan; they only make sense before
    /// execution, so any other status is rejected.
    pub async fn preview_draft(&self, context: &PreviewContext) -> Result<ScenarioPreview> {
        let plan = self
            .get_plan(&Id {
                id: context.plan_id,
            })
            .await?
            .ok_or(BoardError::PlanNotFound {
                id: context.plan_id,
            })?;

        if plan.status != PlanStatus::Draft {
            return Err(BoardError::invalid_transition(format!(
                "Plan {} is '{}'; only drafts can be previewed",
                plan.id,
                plan.status.as_str()
            )));
        }

        Ok(scenario::run_exploratory_preview(
            context,
            plan.projected_impact.as_ref(),
        ))
    }
}
