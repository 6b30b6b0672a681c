use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

// Input DTO for creating a topic; absent fields are stored as NULL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTopicData {
    pub title: Option<String>,
    pub min_lesson_number: Option<i32>,
    pub max_lesson_number: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

/// Write side of the topic store.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;
}
