// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the `Schedura` core library, the CLI and the rendering layer.
//! Everything here is plain data: the rendering layer only ever reacts to these values.

use serde::{Deserialize, Serialize};

/// Storage key of the persisted session marker
pub const USER_TOKEN_KEY: &str = "USER_TOKEN";

/// Identifier of a task
pub type TaskId = String;

/// Outcome of the startup session gate
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// A non-empty session marker was found
    Authenticated,
    /// No marker, an empty marker, or the read failed
    Unauthenticated,
}

impl SessionState {
    /// Map a raw marker read onto a session state.
    ///
    /// Only presence matters; the content of the marker is never inspected.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(token) if !token.is_empty() => SessionState::Authenticated,
            _ => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

/// The two forms that carry validation rules
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    Login,
    Register,
}

/// Screens of the unauthenticated flow
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AuthScreen {
    Register,
    Login,
}

/// Tabs of the authenticated shell
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShellTab {
    Home,
    Profile,
}

/// Which navigation root the rendering layer should mount
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "root", rename_all = "camelCase")]
pub enum NavigationRoot {
    /// Login / registration stack
    /// # Fields
    /// * `initial` - First screen shown after the splash
    AuthFlow { initial: AuthScreen },
    /// Drawer wrapping the tab navigator
    /// # Fields
    /// * `initial` - Tab selected on mount
    AppShell { initial: ShellTab },
}

impl From<SessionState> for NavigationRoot {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Authenticated => NavigationRoot::AppShell {
                initial: ShellTab::Home,
            },
            // The splash always hands over to the registration screen
            SessionState::Unauthenticated => NavigationRoot::AuthFlow {
                initial: AuthScreen::Register,
            },
        }
    }
}

/// A single task on the home screen
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Short title shown in the list
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
    /// Longer text shown when the task is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    /// Create a new, not yet completed task with a fresh id
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            description,
        }
    }
}

/// Counters shown above the task list
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}
