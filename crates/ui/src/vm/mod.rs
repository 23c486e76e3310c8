mod filter_vm;
mod question_vm;
mod results_vm;

pub use filter_vm::{FilterFormVm, FilterOptionVm};
pub use question_vm::{ChoiceVm, QuestionVm, map_question};
pub use results_vm::{ResultsVm, ReviewItemVm, map_results};
