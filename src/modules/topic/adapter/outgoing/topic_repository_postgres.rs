use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError},
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            title: Set(data.title),
            min_lesson_number: Set(data.min_lesson_number),
            max_lesson_number: Set(data.max_lesson_number),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
