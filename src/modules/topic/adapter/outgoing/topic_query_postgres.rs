use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::modules::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::outgoing::{TopicQuery, TopicQueryError},
};

// SeaORM entity
use super::sea_orm_entity::{Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        // No ORDER BY: callers get whatever order the table scan yields.
        let models: Vec<TopicModel> = TopicEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TopicModel::to_domain).collect())
    }

    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(TopicModel::to_domain))
    }
}
