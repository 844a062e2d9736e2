//! Command-line interface definitions and handlers using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and converts it into the corresponding `outline_core::params` type. CLI
//! concerns (help text, aliases, value parsing) stay here; business logic
//! validation stays in the core.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use outline_core::{
    display::{step_header, CreateResult, DeleteResult, OperationStatus, RequirementsSheet,
        TaskSummaries, UpdateResult},
    filter_tasks,
    models::{Field, TaskSummary},
    params::{CreateTask, UpdateTask},
    Wizard,
};

use crate::renderer::TerminalRenderer;

/// Command handler tying the wizard controller to terminal output.
pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Handle task management commands.
    pub async fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Create(args) => {
                let task = self.wizard.create_task(&args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => self.list_tasks(args.query.as_deref().unwrap_or("")),
            TaskCommands::Show(args) => {
                let task = self.require_task(args.id)?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Update(args) => {
                let changes = args.describe_changes();
                match self.wizard.update_task(&args.into()).await? {
                    Some(task) => self
                        .renderer
                        .render(&UpdateResult::with_changes(task, changes).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(
                            "The task no longer exists in the store".to_string(),
                        )
                        .to_string(),
                    ),
                }
            }
            TaskCommands::Delete(args) => {
                self.wizard.delete_task(args.id).await?;
                self.renderer.render(&DeleteResult::new(args.id).to_string())
            }
            TaskCommands::Export(args) => {
                let task = self.require_task(args.id)?;
                self.renderer.render(&RequirementsSheet(task).to_string())
            }
        }
    }

    /// Handle worksheet editing commands.
    pub async fn handle_step_command(mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Show(args) => {
                self.select(args.task_id)?;
                if let Some(step) = args.step {
                    self.wizard.goto_step(step)?;
                }
                let header = step_header(self.wizard.current_step());
                let task = self.require_task(args.task_id)?;
                let mut output = String::new();
                if let Some(header) = header {
                    output.push_str(&format!("{header}\n\n"));
                }
                output.push_str(&task.to_string());
                self.renderer.render(&output)
            }
            StepCommands::Edit(args) => {
                self.select(args.task_id)?;
                self.wizard.edit_field(args.field.into(), &args.value)?;
                self.commit_and_show().await
            }
            StepCommands::Idea { command } => self.handle_idea_command(command).await,
        }
    }

    /// Handle brainstorm list commands.
    async fn handle_idea_command(&mut self, command: IdeaCommands) -> Result<()> {
        match command {
            IdeaCommands::Add(args) => {
                self.select(args.task_id)?;
                self.wizard.add_idea(&args.value);
            }
            IdeaCommands::Set(args) => {
                self.select(args.task_id)?;
                self.wizard.edit_field(Field::Idea(args.index), &args.value)?;
            }
            IdeaCommands::Remove(args) => {
                self.select(args.task_id)?;
                self.wizard.remove_idea(args.index)?;
            }
        }
        self.commit_and_show().await
    }

    /// List tasks, optionally filtered by a case-insensitive query.
    pub fn list_tasks(&self, query: &str) -> Result<()> {
        let matches = filter_tasks(self.wizard.tasks(), query);
        let summaries = TaskSummaries(matches.into_iter().map(TaskSummary::from).collect());
        self.renderer.render(&summaries.to_string())
    }

    /// Select a task for editing, failing if the id is unknown.
    fn select(&mut self, id: u64) -> Result<()> {
        self.wizard.select_task(id);
        if self.wizard.current_task_id() != Some(id) {
            anyhow::bail!("Task with ID {id} not found");
        }
        Ok(())
    }

    /// Look up a task in the wizard's collection by id.
    fn require_task(&self, id: u64) -> Result<&outline_core::Task> {
        self.wizard
            .tasks()
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow::anyhow!("Task with ID {id} not found"))
    }

    /// Commit the buffer and show the resulting worksheet state.
    async fn commit_and_show(&mut self) -> Result<()> {
        let committed = self.wizard.commit().await?;
        let mut output = if committed {
            OperationStatus::success(format!(
                "Saved. Progress: {}/4 steps complete",
                self.wizard.progress()
            ))
            .to_string()
        } else {
            OperationStatus::failure("The task no longer exists in the store".to_string())
                .to_string()
        };
        if let Some(task) = self.wizard.current_task() {
            output.push('\n');
            output.push_str(&task.to_string());
        }
        self.renderer.render(&output)
    }
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// These structures implement the CLI side of the parameter wrapper pattern.
// The into_params() conversions make the boundary between CLI and core
// layers explicit and verifiable at compile time.

/// Create a new task
///
/// CLI wrapper for CreateTask that adds clap-specific argument handling
/// including short/long flags and help text generation.
#[derive(Args)]
pub struct CreateTaskArgs {
    /// Title of the task
    pub title: String,
    /// Optional description providing more context about the task
    #[arg(
        short,
        long,
        help = "Optional description providing more context about the task"
    )]
    pub description: Option<String>,
}

impl From<CreateTaskArgs> for CreateTask {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description.unwrap_or_default(),
        }
    }
}

/// List all tasks
///
/// Tasks are shown most recently updated first, each with its derived
/// progress count. An optional query narrows the list to tasks whose title
/// or description contains the query, ignoring case.
#[derive(Args)]
pub struct ListTasksArgs {
    /// Filter tasks by a case-insensitive substring of title or description
    #[arg(short, long, help = "Show only tasks whose title or description contains this text")]
    pub query: Option<String>,
}

/// Show details of a specific task
///
/// Displays the task's metadata and the full four-step worksheet with
/// per-step completion markers.
#[derive(Args)]
pub struct ShowTaskArgs {
    /// ID of the task to display
    #[arg(help = "Unique identifier of the task to show details for")]
    pub id: u64,
}

/// Update a task's title or description
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// ID of the task to update
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    /// Updated title for the task
    #[arg(short, long, help = "Updated title for the task")]
    pub title: Option<String>,
    /// Updated description for the task
    #[arg(short, long, help = "Updated description for the task")]
    pub description: Option<String>,
}

impl UpdateTaskArgs {
    /// Human-readable list of the changes this update will make.
    fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(ref title) = self.title {
            changes.push(format!("Title changed to \"{title}\""));
        }
        if self.description.is_some() {
            changes.push("Description updated".to_string());
        }
        changes
    }
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            description: val.description,
        }
    }
}

/// Delete a task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// ID of the task to delete
    #[arg(help = "Unique identifier of the task to permanently delete")]
    pub id: u64,
}

/// Export a task's worksheet as a requirements document
#[derive(Args)]
pub struct ExportTaskArgs {
    /// ID of the task to export
    #[arg(help = "Unique identifier of the task to export")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// List all tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update a task's title or description
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Export a task's worksheet as a requirements document
    #[command(alias = "e")]
    Export(ExportTaskArgs),
}

/// Show a task's worksheet, optionally focused on one step
#[derive(Args)]
pub struct ShowStepArgs {
    /// ID of the task whose worksheet to show
    #[arg(help = "Unique identifier of the task whose worksheet to show")]
    pub task_id: u64,
    /// Step number to focus on (1-4)
    #[arg(short, long, help = "Step number to focus on (1-4)")]
    pub step: Option<u8>,
}

/// Fill in one worksheet field and save
///
/// Clearing a field (passing an empty value) retracts the completion of its
/// step, since completion is derived from the written content.
#[derive(Args)]
pub struct EditFieldArgs {
    /// ID of the task to edit
    #[arg(help = "Unique identifier of the task to edit")]
    pub task_id: u64,
    /// Worksheet field to fill in
    #[arg(help = "Worksheet field to fill in")]
    pub field: FieldArg,
    /// New value for the field
    #[arg(help = "New value for the field; pass an empty string to clear")]
    pub value: String,
}

/// Append a new idea slot to the step 1 brainstorm list
#[derive(Args)]
pub struct AddIdeaArgs {
    /// ID of the task to edit
    #[arg(help = "Unique identifier of the task to edit")]
    pub task_id: u64,
    /// Text of the new idea (may be empty to reserve a slot)
    #[arg(default_value = "", help = "Text of the new idea; empty reserves a blank slot")]
    pub value: String,
}

/// Overwrite an existing idea slot
#[derive(Args)]
pub struct SetIdeaArgs {
    /// ID of the task to edit
    #[arg(help = "Unique identifier of the task to edit")]
    pub task_id: u64,
    /// 0-based index of the idea slot
    #[arg(help = "0-based index of the idea slot to overwrite")]
    pub index: usize,
    /// New text for the idea
    pub value: String,
}

/// Remove an idea slot from the brainstorm list
///
/// The list always keeps at least one slot; removing the last one fails.
#[derive(Args)]
pub struct RemoveIdeaArgs {
    /// ID of the task to edit
    #[arg(help = "Unique identifier of the task to edit")]
    pub task_id: u64,
    /// 0-based index of the idea slot to remove
    #[arg(help = "0-based index of the idea slot to remove")]
    pub index: usize,
}

#[derive(Subcommand)]
pub enum IdeaCommands {
    /// Append a new idea slot to the brainstorm list
    #[command(alias = "a")]
    Add(AddIdeaArgs),
    /// Overwrite an existing idea slot
    #[command(alias = "s")]
    Set(SetIdeaArgs),
    /// Remove an idea slot from the brainstorm list
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveIdeaArgs),
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Show a task's worksheet, optionally focused on one step
    #[command(alias = "s")]
    Show(ShowStepArgs),
    /// Fill in one worksheet field and save
    #[command(alias = "e")]
    Edit(EditFieldArgs),
    /// Manage the step 1 brainstorm list
    #[command(alias = "i")]
    Idea {
        #[command(subcommand)]
        command: IdeaCommands,
    },
}

/// Command-line argument representation of the named worksheet fields
///
/// Converts between user-friendly kebab-case field names and the core
/// [`Field`] enum. Step 1 idea slots are index-addressed and managed through
/// the `idea` subcommands instead.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum FieldArg {
    /// Who the product is for (step 2)
    TargetUsers,
    /// When and where they would use it (step 2)
    UsageScenarios,
    /// What they gain from it (step 2)
    Benefits,
    /// Concrete scenes of the product in use (step 3)
    UsageScenes,
    /// How you would explain the product in a sentence (step 3)
    Explanation,
    /// What a peer reviewer said (step 4)
    Feedback,
    /// Improvements drawn from the feedback (step 4)
    Improvements,
    /// Final go/no-go check (step 4)
    FinalCheck,
}

impl From<FieldArg> for Field {
    fn from(val: FieldArg) -> Self {
        match val {
            FieldArg::TargetUsers => Field::TargetUsers,
            FieldArg::UsageScenarios => Field::UsageScenarios,
            FieldArg::Benefits => Field::Benefits,
            FieldArg::UsageScenes => Field::UsageScenes,
            FieldArg::Explanation => Field::Explanation,
            FieldArg::Feedback => Field::Feedback,
            FieldArg::Improvements => Field::Improvements,
            FieldArg::FinalCheck => Field::FinalCheck,
        }
    }
}
