use crate::core::models::guess::GuessType;
use crate::core::models::response::Direction;
use std::fmt;
use tracing::warn;

/// Non-fatal event raised while resolving a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A requested guess could not be used and a fallback strategy was chosen.
    GuessFallback {
        /// `None` for the ground state, the Cartesian direction for a response component.
        direction: Option<Direction>,
        requested: GuessType,
        fallback: GuessType,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::GuessFallback {
                direction,
                requested,
                fallback,
                reason,
            } => {
                write!(f, "{}", reason)?;
                if let Some(d) = direction {
                    write!(f, " for direction {}", d)?;
                }
                write!(
                    f,
                    ", falling back to '{}' instead of '{}' initial guess",
                    fallback, requested
                )
            }
        }
    }
}

pub type DiagnosticCallback<'a> = Box<dyn Fn(&Diagnostic) + Send + Sync + 'a>;

#[derive(Default)]
pub struct DiagnosticReporter<'a> {
    callback: Option<DiagnosticCallback<'a>>,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: DiagnosticCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Logs the event and hands it to the callback, if any.
    pub fn report(&self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        if let Some(cb) = &self.callback {
            cb(&diagnostic);
        }
    }
}
