//! Core task actions invoked by the presentation layer
//!
//! The presentation layer builds a [`TaskAction`] from a key press or click,
//! calls [`apply`], and re-renders from the list afterwards. The returned
//! [`ActionOutcome`] only drives feedback (toast, selection); the list itself
//! is always the source of truth.
//!
//! ## Modes
//!
//! - **Default**: blank fields and unknown ids are absorbed as no-ops and
//!   reported as [`ActionOutcome::Ignored`].
//! - **Strict** (`tasks.strict_input = true`): the same inputs come back as
//!   [`ActionOutcome::Rejected`] carrying the reason. State changes are
//!   identical in both modes.

use tracing::{debug, info, warn};

use crate::error::StudyError;
use crate::model::{TaskId, TaskList};

/// A single user-issued action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add { subject: String, description: String },
    Toggle(TaskId),
    Delete(TaskId),
}

impl TaskAction {
    pub fn add(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Add {
            subject: subject.into(),
            description: description.into(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TaskAction::Add { .. } => "add",
            TaskAction::Toggle(_) => "toggle",
            TaskAction::Delete(_) => "delete",
        }
    }
}

/// Result of applying an action
#[derive(Debug)]
pub enum ActionOutcome {
    Added(TaskId),
    Toggled { id: TaskId, completed: bool },
    Deleted(TaskId),
    /// No state change (default mode)
    Ignored,
    /// No state change, with the reason (strict mode)
    Rejected(StudyError),
}

impl ActionOutcome {
    /// Whether the task list changed
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Added(_) | ActionOutcome::Toggled { .. } | ActionOutcome::Deleted(_)
        )
    }
}

/// Apply an action to the list
///
/// Never fails: invalid input yields `Ignored` or `Rejected` and leaves the
/// list untouched.
pub fn apply(list: &mut TaskList, action: TaskAction, strict: bool) -> ActionOutcome {
    let name = action.name();
    let outcome = if strict {
        apply_strict(list, action)
    } else {
        apply_lenient(list, action)
    };

    match &outcome {
        ActionOutcome::Added(id) => {
            info!(id = id.0, pending = list.pending_count(), "task added")
        }
        ActionOutcome::Toggled { id, completed } => {
            info!(id = id.0, completed, pending = list.pending_count(), "task toggled")
        }
        ActionOutcome::Deleted(id) => {
            info!(id = id.0, remaining = list.len(), "task deleted")
        }
        ActionOutcome::Ignored => debug!(action = name, "action ignored"),
        ActionOutcome::Rejected(err) => warn!(action = name, error = %err, "action rejected"),
    }

    outcome
}

fn apply_lenient(list: &mut TaskList, action: TaskAction) -> ActionOutcome {
    match action {
        TaskAction::Add {
            subject,
            description,
        } => match list.add(&subject, &description) {
            Some(task) => ActionOutcome::Added(task.id),
            None => ActionOutcome::Ignored,
        },
        TaskAction::Toggle(id) => {
            list.toggle(id);
            match list.get(id) {
                Some(task) => ActionOutcome::Toggled {
                    id,
                    completed: task.is_completed,
                },
                None => ActionOutcome::Ignored,
            }
        }
        TaskAction::Delete(id) => {
            let before = list.len();
            list.delete(id);
            if list.len() < before {
                ActionOutcome::Deleted(id)
            } else {
                ActionOutcome::Ignored
            }
        }
    }
}

fn apply_strict(list: &mut TaskList, action: TaskAction) -> ActionOutcome {
    let result = match action {
        TaskAction::Add {
            subject,
            description,
        } => list.try_add(&subject, &description).map(ActionOutcome::Added),
        TaskAction::Toggle(id) => list
            .try_toggle(id)
            .map(|completed| ActionOutcome::Toggled { id, completed }),
        TaskAction::Delete(id) => list.try_delete(id).map(|task| ActionOutcome::Deleted(task.id)),
    };

    result.unwrap_or_else(ActionOutcome::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_outcomes() {
        let mut list = TaskList::new();
        let outcome = apply(&mut list, TaskAction::add("Math", "Chapter 3"), false);
        assert!(matches!(outcome, ActionOutcome::Added(TaskId(0))));
        assert!(outcome.is_mutation());

        let outcome = apply(&mut list, TaskAction::add("", "Chapter 3"), false);
        assert!(matches!(outcome, ActionOutcome::Ignored));
        assert!(!outcome.is_mutation());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_outcomes() {
        let mut list = TaskList::new();
        list.add("Math", "Chapter 3");

        let outcome = apply(&mut list, TaskAction::Toggle(TaskId(0)), false);
        assert!(matches!(
            outcome,
            ActionOutcome::Toggled {
                id: TaskId(0),
                completed: true
            }
        ));

        let outcome = apply(&mut list, TaskAction::Toggle(TaskId(9)), false);
        assert!(matches!(outcome, ActionOutcome::Ignored));
        assert_eq!(list.pending_count(), 0);
    }

    #[test]
    fn test_delete_outcomes() {
        let mut list = TaskList::new();
        list.add("Math", "Chapter 3");

        let outcome = apply(&mut list, TaskAction::Delete(TaskId(0)), false);
        assert!(matches!(outcome, ActionOutcome::Deleted(TaskId(0))));

        let outcome = apply(&mut list, TaskAction::Delete(TaskId(0)), false);
        assert!(matches!(outcome, ActionOutcome::Ignored));
        assert!(list.is_empty());
    }

    #[test]
    fn test_strict_mode_reports_reason() {
        let mut list = TaskList::new();

        let outcome = apply(&mut list, TaskAction::add("Math", "  "), true);
        assert!(matches!(
            outcome,
            ActionOutcome::Rejected(StudyError::BlankField("Description"))
        ));

        let outcome = apply(&mut list, TaskAction::Toggle(TaskId(5)), true);
        assert!(matches!(
            outcome,
            ActionOutcome::Rejected(StudyError::TaskNotFound(TaskId(5)))
        ));

        let outcome = apply(&mut list, TaskAction::Delete(TaskId(5)), true);
        assert!(matches!(outcome, ActionOutcome::Rejected(_)));
        assert!(list.is_empty());
        assert_eq!(list.next_id(), TaskId(0));
    }

    #[test]
    fn test_strict_and_lenient_mutate_identically() {
        let actions = vec![
            TaskAction::add("Math", "Chapter 3"),
            TaskAction::add("", "skip"),
            TaskAction::add("Physics", "Lab report"),
            TaskAction::Toggle(TaskId(0)),
            TaskAction::Toggle(TaskId(7)),
            TaskAction::Delete(TaskId(1)),
            TaskAction::Delete(TaskId(1)),
            TaskAction::add("Art", "Sketch"),
        ];

        let mut lenient = TaskList::new();
        let mut strict = TaskList::new();
        for action in actions {
            apply(&mut lenient, action.clone(), false);
            apply(&mut strict, action, true);
        }

        assert_eq!(lenient, strict);
        assert_eq!(lenient.next_id(), TaskId(3));
    }
}
