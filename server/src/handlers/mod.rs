mod get_published_questions;
mod get_question_details;

pub use self::get_published_questions::*;
pub use self::get_question_details::*;
