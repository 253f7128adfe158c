pub mod accounts;
pub mod answer;

pub use accounts::AccountService;
pub use answer::{Answer, AnswerEngine, AnswerSource};
