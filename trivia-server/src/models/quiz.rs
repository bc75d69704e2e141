//! Quiz play request

use serde::{de, Deserialize, Deserializer};

use super::{CategoryId, QuestionId};

/// POST /quizzes body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown in this quiz round
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    /// Category to draw from; absent or id 0 means all categories
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector sent by quiz clients
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    /// Browser clients send object keys, so numeric strings are accepted
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: CategoryId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizRequest {
    /// Category filter, `None` for "all".
    pub fn category_filter(&self) -> Option<CategoryId> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|id| *id != 0)
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(CategoryId),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid category id '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_all_categories() {
        let req: QuizRequest = serde_json::from_str("{}").unwrap();
        assert!(req.previous_questions.is_empty());
        assert_eq!(req.category_filter(), None);
    }

    #[test]
    fn zero_id_means_all_categories() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 2], "quiz_category": {"type": "click", "id": 0}}"#,
        )
        .unwrap();
        assert_eq!(req.previous_questions, vec![1, 2]);
        assert_eq!(req.category_filter(), None);
    }

    #[test]
    fn accepts_string_ids() {
        let req: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"type": "Art", "id": "2"}}"#).unwrap();
        assert_eq!(req.category_filter(), Some(2));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let res: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"id": "art"}}"#);
        assert!(res.is_err());
    }
}
