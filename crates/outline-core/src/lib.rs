//! Core library for the Outline requirements-definition wizard.
//!
//! This crate provides the business logic for a guided four-step
//! requirements worksheet: the step data model, the derived completion
//! predicate, the pluggable task store, and the wizard controller that
//! synchronizes a local edit buffer with the store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Wizard      │    │   TaskStore     │    │   Persistence   │
//! │ (selection,     │───▶│ (list, create,  │───▶│ (SQLite file or │
//! │  buffer, steps) │    │  update, delete)│    │  in-memory map) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Editing session      Store adapter          Durable documents
//! ```
//!
//! Completion is never stored: [`models::completion::completed_steps`]
//! derives it from the worksheet content on every read, so a cleared field
//! immediately un-completes its step.
//!
//! # Quick Start
//!
//! ```rust
//! use outline_core::{params::CreateTask, Field, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a wizard over a SQLite store
//! let mut wizard = WizardBuilder::new()
//!     .with_database_path(Some("outline.db"))
//!     .build()
//!     .await?;
//!
//! // Create and work on a task
//! let task = wizard
//!     .create_task(&CreateTask {
//!         title: "My product idea".to_string(),
//!         description: "A first sketch".to_string(),
//!     })
//!     .await?;
//!
//! wizard.edit_field(Field::Idea(0), "solve scheduling pain")?;
//! wizard.advance_step().await?;
//!
//! println!("{}/4 steps complete for task {}", wizard.progress(), task.id);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod params;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, OperationStatus, RequirementsSheet, TaskSummaries, UpdateResult,
};
pub use error::{Result, WizardError};
pub use filter::filter_tasks;
pub use models::{Field, StepData, Task, TaskSummary};
pub use params::{CreateTask, UpdateTask};
pub use store::{Database, MemoryStore, SqliteStore, TaskPatch, TaskStore};
pub use wizard::{StepCursor, Wizard, WizardBuilder};
