//! View-state primitives: the lookup/create mode and the status line.

use serde::{Deserialize, Serialize};

/// The two states a record view can be in.
///
/// Lookup shows read-only fields and a fetch-by-id affordance; create shows
/// editable fields and a submit affordance. Transitions happen only through
/// the controller's commands, never by toggling ambient flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fields read-only, GET affordance shown.
    Lookup,
    /// Fields editable, POST affordance shown.
    Create,
}

impl Mode {
    /// Whether form fields accept input in this mode.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Create)
    }
}

/// The short status line shown under the form.
///
/// Every outcome the controller can produce is enumerated here; the
/// user-facing wording lives in the `Display` impl, in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusMessage {
    /// A record was loaded into the form, by fetch or by row click.
    RecordLoaded { id: String },
    /// Fetch-by-id was rejected by the service.
    NotFound { id: String },
    /// A call failed before the service could answer.
    ConnectionFailed,
    /// The view switched to create mode.
    CreatePrompt,
    /// The view returned to lookup mode.
    LookupMode,
    /// A create succeeded; `id` is the identifier the service echoed.
    Created { id: Option<String> },
    /// A create was rejected or failed in transit.
    CreateFailed,
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordLoaded { id } => write!(f, "record {id} loaded"),
            Self::NotFound { id } => write!(f, "record {id} not found"),
            Self::ConnectionFailed => write!(f, "could not reach the service"),
            Self::CreatePrompt => write!(f, "enter the details for a new record"),
            Self::LookupMode => write!(f, "lookup mode"),
            Self::Created { id } => {
                write!(f, "created with ID: {}", id.as_deref().unwrap_or("?"))
            }
            Self::CreateFailed => write!(f, "could not create the record"),
        }
    }
}
