//! Domain models with validation at construction
//!
//! Request bodies are deserialized into loose wire types and converted
//! into validated models once, at the HTTP boundary. Invalid input
//! returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod quiz;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{Category, CategoryId, CategoryMap};
pub use question::{CreateQuestionRequest, NewQuestion, Question, QuestionId, SearchTerm};
pub use quiz::{QuizCategory, QuizRequest};
pub use pagination::{Pagination, PageParams, QUESTIONS_PER_PAGE};
