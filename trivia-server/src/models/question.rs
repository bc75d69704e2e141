//! Questions and the validated creation payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{CategoryId, ValidationError};

/// Question primary key
pub type QuestionId = i32;

/// Maximum length for question and answer text
const MAX_TEXT_LEN: usize = 1000;

/// Maximum length for a search term
const MAX_SEARCH_LEN: usize = 200;

/// Allowed difficulty range (inclusive)
const MIN_DIFFICULTY: i32 = 1;
const MAX_DIFFICULTY: i32 = 5;

/// Question record, also its formatted JSON shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// POST /questions body as it arrives on the wire.
///
/// Every field is optional here so that a missing field becomes a 400
/// with a useful message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<CategoryId>,
}

/// Validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i32,
    category: CategoryId,
}

impl NewQuestion {
    /// Create a new question payload.
    ///
    /// # Rules
    /// - `question` and `answer` non-empty after trimming, max 1000 characters
    /// - `difficulty` in 1..=5
    /// - `category` positive
    ///
    /// The category is not checked against existing categories.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("2+2?", "4", 1, 1).is_ok());
    /// assert!(NewQuestion::new("  ", "4", 1, 1).is_err());
    /// assert!(NewQuestion::new("2+2?", "4", 9, 1).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        difficulty: i32,
        category: CategoryId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: text_field("question", question)?,
            answer: text_field("answer", answer)?,
            difficulty: difficulty_field(difficulty)?,
            category: category_field(category)?,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Attach a storage-generated id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    /// Zero counts as missing for the numeric fields, like an absent value.
    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = req
            .question
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing { field: "question" })?;
        let answer = req
            .answer
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = req
            .difficulty
            .filter(|d| *d != 0)
            .ok_or(ValidationError::Missing { field: "difficulty" })?;
        let category = req
            .category
            .filter(|c| *c != 0)
            .ok_or(ValidationError::Missing { field: "category" })?;

        Self::new(&question, &answer, difficulty, category)
    }
}

fn text_field(field: &'static str, s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

fn difficulty_field(difficulty: i32) -> Result<i32, ValidationError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(ValidationError::OutOfRange {
            field: "difficulty",
            min: MIN_DIFFICULTY,
            max: MAX_DIFFICULTY,
        });
    }
    Ok(difficulty)
}

fn category_field(category: CategoryId) -> Result<CategoryId, ValidationError> {
    if category < 1 {
        return Err(ValidationError::OutOfRange {
            field: "category",
            min: 1,
            max: i32::MAX,
        });
    }
    Ok(category)
}

/// Search term for case-insensitive substring matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parse an optional term.
    ///
    /// Absent or blank input yields `Ok(None)`: the search is a no-op
    /// and returns no questions, not all of them. Otherwise the term is
    /// kept as sent, surrounding whitespace included.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        let Some(term) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        if term.chars().count() > MAX_SEARCH_LEN {
            return Err(ValidationError::TooLong {
                field: "searchTerm",
                max: MAX_SEARCH_LEN,
            });
        }

        Ok(Some(Self(term.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against question text.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// ILIKE pattern with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        question: Option<&str>,
        answer: Option<&str>,
        difficulty: Option<i32>,
        category: Option<i32>,
    ) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: question.map(str::to_owned),
            answer: answer.map(str::to_owned),
            difficulty,
            category,
        }
    }

    #[test]
    fn valid_request_converts() {
        let q = NewQuestion::try_from(request(Some(" 2+2? "), Some("4"), Some(1), Some(1))).unwrap();
        assert_eq!(q.question(), "2+2?");
        assert_eq!(q.answer(), "4");
        assert_eq!(q.difficulty(), 1);
        assert_eq!(q.category(), 1);
    }

    #[test]
    fn reports_first_missing_field() {
        let err = NewQuestion::try_from(request(None, None, Some(1), Some(1))).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });

        let err = NewQuestion::try_from(request(Some("q"), Some(""), Some(1), Some(1))).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });
    }

    #[test]
    fn zero_numbers_count_as_missing() {
        let err = NewQuestion::try_from(request(Some("q"), Some("a"), Some(0), Some(1))).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "difficulty" });

        let err = NewQuestion::try_from(request(Some("q"), Some("a"), Some(2), Some(0))).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "category" });
    }

    #[test]
    fn rejects_whitespace_text() {
        let err = NewQuestion::new("q", "   ", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(matches!(
            NewQuestion::new("q", "a", 6, 1),
            Err(ValidationError::OutOfRange { field: "difficulty", .. })
        ));
        assert!(matches!(
            NewQuestion::new("q", "a", 3, -2),
            Err(ValidationError::OutOfRange { field: "category", .. })
        ));
    }

    #[test]
    fn max_text_length() {
        assert!(NewQuestion::new(&"a".repeat(1000), "a", 1, 1).is_ok());
        let err = NewQuestion::new(&"a".repeat(1001), "a", 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 1000, .. }));
    }

    #[test]
    fn blank_search_is_none() {
        assert_eq!(SearchTerm::parse(None).unwrap(), None);
        assert_eq!(SearchTerm::parse(Some("")).unwrap(), None);
        assert_eq!(SearchTerm::parse(Some("   ")).unwrap(), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let term = SearchTerm::parse(Some("WORLD")).unwrap().unwrap();
        assert!(term.matches("Which world cup did Brazil win?"));
        assert!(term.matches("Hello, World"));
        assert!(!term.matches("Who painted the Mona Lisa?"));
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let term = SearchTerm::parse(Some("world ")).unwrap().unwrap();
        assert_eq!(term.as_str(), "world ");
        assert!(term.matches("Which world cup did Brazil win?"));
        assert!(!term.matches("Hello world?"));
        assert_eq!(term.like_pattern(), "%world %");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let term = SearchTerm::parse(Some("50%_off\\")).unwrap().unwrap();
        assert_eq!(term.like_pattern(), r"%50\%\_off\\%");
    }

    #[test]
    fn formatted_shape() {
        let q = Question {
            id: 7,
            question: "2+2?".into(),
            answer: "4".into(),
            difficulty: 1,
            category: 1,
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            serde_json::json!({
                "id": 7,
                "question": "2+2?",
                "answer": "4",
                "difficulty": 1,
                "category": 1
            })
        );
    }
}
