//! Phase descriptors

use std::fmt;

use super::session::Session;

/// When a phase runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Only when the user enabled version control
    VcsEnabled,
}

impl Gate {
    pub fn allows(&self, session: &Session) -> bool {
        match self {
            Self::Always => true,
            Self::VcsEnabled => session.answers().is_some_and(|a| a.enable_vcs()),
        }
    }
}

/// The six pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initialize,
    Prompt,
    Resolve,
    Materialize,
    Install,
    Finalize,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Initialize,
        Phase::Prompt,
        Phase::Resolve,
        Phase::Materialize,
        Phase::Install,
        Phase::Finalize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Prompt => "prompt",
            Self::Resolve => "resolve",
            Self::Materialize => "materialize",
            Self::Install => "install",
            Self::Finalize => "finalize",
        }
    }

    /// Precondition for the whole phase. Conditional sub-steps inside
    /// Resolve and Materialize are checked by the phase itself.
    pub fn gate(&self) -> Gate {
        match self {
            Self::Finalize => Gate::VcsEnabled,
            _ => Gate::Always,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
