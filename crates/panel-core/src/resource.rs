//! Per-resource state machine values.

use crate::error::AppError;

/// The three dependently fetched resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Ticket,
    Customer,
    Posts,
}

impl ResourceKind {
    /// Get the resource name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::Customer => "customer",
            Self::Posts => "posts",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one resource.
///
/// `NotStarted` doubles as the dependency-skip state: a resource whose
/// prerequisite never produced a usable value stays here rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceState<T> {
    #[default]
    NotStarted,
    Loading,
    Ready(T),
    Failed(AppError),
}

impl<T> ResourceState<T> {
    pub fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Get the ready value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Get the failure, if any.
    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T> From<Result<T, AppError>> for ResourceState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}
