//! Success-or-default result of one assembly step.

use std::fmt::Display;

/// The value a step produced, or the default it fell back to and why.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Computed(T),
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    /// Keep `Ok` values; replace errors with `default()` and record the error.
    pub fn from_result<E: Display>(result: Result<T, E>, default: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Self::Computed(value),
            Err(e) => Self::Fallback {
                value: default(),
                reason: e.to_string(),
            },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Computed(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Computed(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Why the default was used, if it was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}
