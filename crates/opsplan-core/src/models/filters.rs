//! Filter types for querying plans.

use std::str::FromStr;

use super::PlanStatus;
use crate::error::{BoardError, Result};
use crate::params::ListPlans;

/// Filter options for querying plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by plan status; None shows every status
    pub status: Option<PlanStatus>,

    /// Case-insensitive free-text match over name, creator and shift context
    pub query: Option<String>,
}

impl TryFrom<&ListPlans> for PlanFilter {
    type Error = BoardError;

    fn try_from(params: &ListPlans) -> Result<Self> {
        let status = match &params.status {
            Some(raw) => {
                Some(
                    PlanStatus::from_str(raw).map_err(|reason| BoardError::InvalidInput {
                        field: "status".to_string(),
                        reason,
                    })?,
                )
            }
            None => None,
        };

        Ok(Self {
            status,
            query: params.query.clone(),
        })
    }
}
