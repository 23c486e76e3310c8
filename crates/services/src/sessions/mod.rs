mod persistence;
mod plan;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use persistence::{HISTORY_KEY, SESSION_KEY, SessionStore};
pub use plan::{SessionBuilder, SessionPlan};
pub use workflow::{QuizLoopService, SessionAnswerResult, SessionStart};
