mod catalog;
mod filter;
mod history;
mod ids;
mod question;
mod session;

pub use ids::{ParseIdError, QuestionId};

pub use catalog::{QuestionCatalog, unique_values};
pub use filter::{CountLimit, FilterSpec};
pub use history::HistoryEntry;
pub use question::{CHOICE_SLOTS, QuestionError, QuestionField, QuestionRecord};
pub use session::{QuizPhase, Score, SessionProgress, SessionState, SessionStateError};
