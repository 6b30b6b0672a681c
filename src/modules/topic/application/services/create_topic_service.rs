use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::CurrentUser,
    topic::application::{
        domain::entities::Topic,
        ports::{
            incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
            outgoing::{CreateTopicData, TopicRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: CurrentUser,
        command: CreateTopicCommand,
    ) -> Result<Topic, CreateTopicError> {
        if !actor.is_admin() {
            return Err(CreateTopicError::AdminRequired);
        }

        let data = CreateTopicData {
            title: command.title().map(str::to_string),
            min_lesson_number: command.min_lesson_number(),
            max_lesson_number: command.max_lesson_number(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
