use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TopicId(i32);

impl TopicId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for TopicId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<TopicId> for i32 {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted topic. Its serde form is the public JSON representation.
///
/// `min_lesson_number <= max_lesson_number` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Topic {
    #[schema(value_type = i32, example = 1)]
    pub id: TopicId,
    #[schema(example = "Algebra")]
    pub title: Option<String>,
    #[schema(example = 1)]
    pub min_lesson_number: Option<i32>,
    #[schema(example = 10)]
    pub max_lesson_number: Option<i32>,
}
