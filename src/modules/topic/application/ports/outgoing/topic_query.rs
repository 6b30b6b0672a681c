use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the topic store.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// All topics in storage order.
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError>;
}
