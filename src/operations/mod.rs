//! Task operations - the action surface
//!
//! Every user action that mutates the task list goes through this layer,
//! so the TUI never touches `TaskList` mutators directly.

pub mod tasks;
