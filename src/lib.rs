pub mod error;
pub mod grading;
pub mod output;
pub mod parser;
pub mod record;

pub use error::GradeError;
pub use grading::{calculate_grades, required_score_for_target};
pub use parser::{Grade, RawValue, parse_grade};
