//! Command definitions and handlers for the opsplan CLI.
//!
//! Each subcommand has its own clap argument struct that converts into the
//! framework-free parameter types from `opsplan_core::params` via `From`.
//! The [`Cli`] struct owns the board and the renderer and maps each command
//! to a board call plus a display wrapper.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use opsplan_core::{
    display::{CompletionReport, CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        AddComment, CompletePlan, CreatePlan, Id, ListPlans, StopPlan, TaskSpec, ToggleAction,
        UpdateTaskStatus,
    },
    scenario::{ExploratorySnapshot, PreviewContext},
    Board, ImpactProjection,
};

use crate::renderer::TerminalRenderer;

/// Commands for managing plans
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(alias = "l")]
    List(ListPlansArgs),
    /// Show a plan with its tasks and actions
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Execute a draft plan
    #[command(alias = "e")]
    Execute(PlanIdArgs),
    /// Permanently discard a draft plan
    #[command(alias = "d")]
    Discard(PlanIdArgs),
    /// Stop an active plan early
    Stop(StopPlanArgs),
    /// Complete an active plan
    Complete(CompletePlanArgs),
    /// Add a comment to a plan's activity log
    Comment(CommentArgs),
    /// Show a plan's activity log
    #[command(alias = "a")]
    Activity(PlanIdArgs),
    /// Preview a draft plan against a predictor snapshot
    #[command(alias = "p")]
    Preview(PreviewArgs),
}

/// Commands for managing tasks and their actions
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Start working on a task (todo -> in-progress)
    Start(TaskIdArgs),
    /// Mark a task as done
    Done(TaskIdArgs),
    /// Set a task's status directly
    SetStatus(SetTaskStatusArgs),
    /// Toggle an action between pending and applied
    Toggle(ToggleActionArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Normal,
    High,
    Critical,
}

impl From<PriorityArg> for opsplan_core::Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Normal => Self::Normal,
            PriorityArg::High => Self::High,
            PriorityArg::Critical => Self::Critical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StopReasonArg {
    Changed,
    NotWorking,
    Priority,
    Conflict,
    Other,
}

impl StopReasonArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::NotWorking => "not-working",
            Self::Priority => "priority",
            Self::Conflict => "conflict",
            Self::Other => "other",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DispositionArg {
    Complete,
    FollowOn,
    Handoff,
    Close,
}

impl DispositionArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::FollowOn => "follow-on",
            Self::Handoff => "handoff",
            Self::Close => "close",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TaskStatusArg {
    Todo,
    InProgress,
    Done,
}

impl TaskStatusArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Arguments for creating a plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,

    /// Priority of the intervention
    #[arg(long, value_enum, default_value = "normal")]
    pub priority: PriorityArg,

    /// Shift the plan belongs to (e.g. "day", "swing", "night")
    #[arg(long, default_value = "")]
    pub shift: String,

    /// Who is authoring the plan
    #[arg(long, default_value = "")]
    pub created_by: String,

    /// Create the plan directly in active status
    #[arg(long)]
    pub execute: bool,

    /// Comma-separated success criteria, created unmet
    #[arg(long, value_delimiter = ',')]
    pub criteria: Vec<String>,

    /// Predictor projection as 'category=base:projected'; repeat for
    /// multiple categories
    #[arg(long = "impact", value_parser = parse_impact)]
    pub impact: Vec<(String, ImpactProjection)>,

    /// Task title; repeat for multiple tasks, created in order
    #[arg(long = "task")]
    pub tasks: Vec<String>,
}

/// Parses a 'category=base:projected' projection argument.
fn parse_impact(s: &str) -> Result<(String, ImpactProjection), String> {
    let invalid = format!("expected 'category=base:projected', got '{s}'");
    let Some((category, scores)) = s.split_once('=') else {
        return Err(invalid);
    };
    let Some((base, projected)) = scores.split_once(':') else {
        return Err(invalid);
    };
    let base: f64 = base.trim().parse().map_err(|_| invalid.clone())?;
    let projected: f64 = projected.trim().parse().map_err(|_| invalid)?;
    Ok((category.trim().to_string(), ImpactProjection { base, projected }))
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(args: CreatePlanArgs) -> Self {
        Self {
            name: args.name,
            priority: args.priority.into(),
            shift_context: args.shift,
            created_by: args.created_by,
            activate_immediately: args.execute,
            origin: None,
            projected_impact: if args.impact.is_empty() {
                None
            } else {
                Some(args.impact.into_iter().collect())
            },
            success_criteria: args.criteria,
            tasks: args
                .tasks
                .into_iter()
                .map(|title| TaskSpec {
                    title,
                    ..Default::default()
                })
                .collect(),
        }
    }
}

/// Arguments for listing plans
#[derive(Args)]
pub struct ListPlansArgs {
    /// Restrict to one plan status ('draft', 'active', ...)
    #[arg(long)]
    pub status: Option<String>,

    /// Free-text match over name, creator and shift context
    #[arg(long)]
    pub query: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(args: ListPlansArgs) -> Self {
        Self {
            status: args.status,
            query: args.query,
        }
    }
}

/// Arguments for commands that take just a plan ID
#[derive(Args)]
pub struct PlanIdArgs {
    /// Plan ID
    pub plan_id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(args: PlanIdArgs) -> Self {
        Self { id: args.plan_id }
    }
}

/// Arguments for stopping a plan
#[derive(Args)]
pub struct StopPlanArgs {
    /// Plan ID
    pub plan_id: u64,

    /// Why the plan is being stopped
    #[arg(value_enum)]
    pub reason: StopReasonArg,

    /// Optional free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<StopPlanArgs> for StopPlan {
    fn from(args: StopPlanArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            reason: args.reason.as_str().to_string(),
            notes: args.notes,
        }
    }
}

/// Arguments for completing a plan
#[derive(Args)]
pub struct CompletePlanArgs {
    /// Plan ID
    pub plan_id: u64,

    /// How unfinished work should be handled
    #[arg(value_enum)]
    pub disposition: DispositionArg,

    /// Optional free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<CompletePlanArgs> for CompletePlan {
    fn from(args: CompletePlanArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            disposition: args.disposition.as_str().to_string(),
            notes: args.notes,
        }
    }
}

/// Arguments for commenting on a plan
#[derive(Args)]
pub struct CommentArgs {
    /// Plan ID
    pub plan_id: u64,

    /// Comment text
    pub text: String,
}

impl From<CommentArgs> for AddComment {
    fn from(args: CommentArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            text: args.text,
        }
    }
}

/// Arguments for previewing a draft plan
#[derive(Args)]
pub struct PreviewArgs {
    /// Plan ID
    pub plan_id: u64,

    /// System score before the previewed changes
    #[arg(long, default_value_t = 0.0)]
    pub before: f64,

    /// Predicted system score after the previewed changes
    #[arg(long, default_value_t = 0.0)]
    pub after: f64,

    /// Alerts the predictor expects to be resolved
    #[arg(long, default_value_t = 0)]
    pub alerts_resolved: u32,

    /// Alerts the predictor expects to be newly raised
    #[arg(long, default_value_t = 0)]
    pub alerts_new: u32,

    /// Root cause left unaddressed; repeat for multiple
    #[arg(long = "root-cause")]
    pub root_causes: Vec<String>,
}

impl From<PreviewArgs> for PreviewContext {
    fn from(args: PreviewArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            baseline: ExploratorySnapshot {
                before: args.before,
                after: args.after,
                alerts_resolved: args.alerts_resolved,
                alerts_new: args.alerts_new,
                remaining_root_causes: args.root_causes,
            },
        }
    }
}

/// Arguments for commands that address a task within a plan
#[derive(Args)]
pub struct TaskIdArgs {
    /// Plan ID
    pub plan_id: u64,

    /// Task ID
    pub task_id: u64,
}

/// Arguments for setting a task's status directly
#[derive(Args)]
pub struct SetTaskStatusArgs {
    /// Plan ID
    pub plan_id: u64,

    /// Task ID
    pub task_id: u64,

    /// Target status
    #[arg(value_enum)]
    pub status: TaskStatusArg,
}

impl From<SetTaskStatusArgs> for UpdateTaskStatus {
    fn from(args: SetTaskStatusArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            task_id: args.task_id,
            status: args.status.as_str().to_string(),
        }
    }
}

/// Arguments for toggling an action
#[derive(Args)]
pub struct ToggleActionArgs {
    /// Plan ID
    pub plan_id: u64,

    /// Task ID
    pub task_id: u64,

    /// Action ID
    pub action_id: u64,
}

impl From<ToggleActionArgs> for ToggleAction {
    fn from(args: ToggleActionArgs) -> Self {
        Self {
            plan_id: args.plan_id,
            task_id: args.task_id,
            action_id: args.action_id,
        }
    }
}

/// Command handler wiring the board to the terminal renderer
pub struct Cli {
    board: Board,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler
    pub fn new(board: Board, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    /// List plans with default filters; used when no subcommand is given
    pub async fn list_plans_default(&self) -> Result<()> {
        let summaries = self.board.list_plans_summary(&ListPlans::default()).await?;
        self.renderer.render(&summaries.to_string())
    }

    /// Handle plan subcommands
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self.board.create_plan(&args.into()).await?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List(args) => {
                let summaries = self.board.list_plans_summary(&args.into()).await?;
                self.renderer.render(&summaries.to_string())
            }
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.board.get_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!("Plan with ID {} not found", params.id))
                            .to_string(),
                    ),
                }
            }
            PlanCommands::Execute(args) => {
                let plan = self.board.execute_draft(&args.into()).await?;
                let changes = vec![format!("status: {}", plan.status)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Discard(args) => {
                let plan = self.board.discard_draft(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
            PlanCommands::Stop(args) => {
                let plan = self.board.stop_plan(&args.into()).await?;
                let changes = vec![format!("status: {}", plan.status)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Complete(args) => {
                let outcome = self.board.complete_plan(&args.into()).await?;
                self.renderer
                    .render(&CompletionReport(outcome).to_string())
            }
            PlanCommands::Comment(args) => {
                let entry = self.board.add_comment(&args.into()).await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Comment added to plan {}", entry.plan_id))
                        .to_string(),
                )
            }
            PlanCommands::Activity(args) => {
                let feed = self.board.activity_feed(&args.into()).await?;
                self.renderer.render(&feed.to_string())
            }
            PlanCommands::Preview(args) => {
                let preview = self.board.preview_draft(&args.into()).await?;
                self.renderer.render(&preview.to_string())
            }
        }
    }

    /// Handle task subcommands
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Start(args) => {
                self.update_task(args.plan_id, args.task_id, TaskStatusArg::InProgress)
                    .await
            }
            TaskCommands::Done(args) => {
                self.update_task(args.plan_id, args.task_id, TaskStatusArg::Done)
                    .await
            }
            TaskCommands::SetStatus(args) => {
                self.update_task(args.plan_id, args.task_id, args.status)
                    .await
            }
            TaskCommands::Toggle(args) => {
                let action = self.board.toggle_action(&args.into()).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Action {} is now {}",
                        action.id,
                        action.status.as_str()
                    ))
                    .to_string(),
                )
            }
        }
    }

    async fn update_task(&self, plan_id: u64, task_id: u64, status: TaskStatusArg) -> Result<()> {
        let params = UpdateTaskStatus {
            plan_id,
            task_id,
            status: status.as_str().to_string(),
        };
        let task = self.board.update_task_status(&params).await?;
        let changes = vec![format!("status: {}", task.status)];
        self.renderer
            .render(&UpdateResult::with_changes(task, changes).to_string())
    }
}
