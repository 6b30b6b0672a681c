use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::CurrentUser,
    topic::application::domain::entities::TopicId,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Admin required.")]
    AdminRequired,

    #[error("Topic does not exist")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, actor: CurrentUser, topic_id: TopicId)
        -> Result<(), DeleteTopicError>;
}
