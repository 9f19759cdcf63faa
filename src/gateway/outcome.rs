//! Tagged result of a best-effort gateway call.

/// Either the model's answer or a deterministic stand-in.
///
/// Callers normally collapse this with [`Outcome::into_value`]; the tag stays
/// available for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The remote model produced a usable value.
    Ok(T),
    /// The call failed or returned unusable data; `value` is the stand-in.
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Self::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Ok(value) | Self::Fallback { value, .. } => value,
        }
    }

    /// Why the fallback was used, if it was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) | Self::Fallback { value, .. } => value,
        }
    }
}
