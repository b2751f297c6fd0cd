//! Scenario projector: read-only previews of an unexecuted draft plan.
//!
//! Pure and stateless. Projection values come from the external predictor;
//! this module only derives per-category deltas and structures
//! caller-supplied exploratory snapshots for display. Preview state is
//! threaded explicitly through [`PreviewContext`] so multiple previews (or
//! parallel tests) never interfere through shared state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ImpactProjection;

/// Delta of one score category for a previewed plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDelta {
    pub category: String,
    pub base: f64,
    pub projected: f64,
    /// Projected minus base
    pub delta: f64,
}

/// Computes projected − base for each requested category.
///
/// Categories absent from the projection map are skipped; output order
/// follows the requested order.
pub fn impact_deltas(
    impact: &BTreeMap<String, ImpactProjection>,
    categories: &[String],
) -> Vec<CategoryDelta> {
    categories
        .iter()
        .filter_map(|category| {
            impact.get(category).map(|projection| CategoryDelta {
                category: category.clone(),
                base: projection.base,
                projected: projection.projected,
                delta: projection.delta(),
            })
        })
        .collect()
}

/// Caller-supplied snapshot of an exploratory prediction run.
///
/// None of these values are computed here; the predictor is an external
/// collaborator and this core only stores and forwards its output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExploratorySnapshot {
    /// System score before the previewed changes
    pub before: f64,
    /// Predicted system score after the previewed changes
    pub after: f64,
    /// Alerts the predictor expects to be resolved
    pub alerts_resolved: u32,
    /// Alerts the predictor expects to be newly raised
    pub alerts_new: u32,
    /// Root causes left unaddressed by the draft
    #[serde(default)]
    pub remaining_root_causes: Vec<String>,
}

/// Explicit preview state for one draft plan, threaded by the caller
/// instead of living in ambient shared state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewContext {
    /// The draft plan being previewed
    pub plan_id: u64,
    /// Baseline snapshot supplied by the predictor
    pub baseline: ExploratorySnapshot,
}

/// Structured result of an exploratory preview, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioPreview {
    pub plan_id: u64,
    pub snapshot: ExploratorySnapshot,
    /// Per-category deltas from the plan's stored projection, if any
    #[serde(default)]
    pub impact_deltas: Vec<CategoryDelta>,
}

impl ScenarioPreview {
    /// After minus before, for display alongside the snapshot.
    pub fn score_delta(&self) -> f64 {
        self.snapshot.after - self.snapshot.before
    }
}

/// Runs a read-only exploratory preview: structures the caller-supplied
/// baseline for display and derives per-category deltas from the plan's
/// stored projection, without touching any plan state.
pub fn run_exploratory_preview(
    context: &PreviewContext,
    projected_impact: Option<&BTreeMap<String, ImpactProjection>>,
) -> ScenarioPreview {
    let deltas = match projected_impact {
        Some(impact) => {
            let categories: Vec<String> = impact.keys().cloned().collect();
            impact_deltas(impact, &categories)
        }
        None => Vec::new(),
    };

    ScenarioPreview {
        plan_id: context.plan_id,
        snapshot: context.baseline.clone(),
        impact_deltas: deltas,
    }
}
