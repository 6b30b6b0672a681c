use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

#[derive(Default)]
struct StoreState {
    rows: Vec<Topic>,
    last_id: i32,
}

/// Serial-keyed topic table kept in memory. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryTopicStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Topic> {
        self.state.lock().unwrap().rows.clone()
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|t| t.id == topic_id).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;

        let topic = Topic {
            id: TopicId::from(state.last_id),
            title: data.title,
            min_lesson_number: data.min_lesson_number,
            max_lesson_number: data.max_lesson_number,
        };
        state.rows.push(topic.clone());

        Ok(topic)
    }

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|t| t.id != topic_id);

        if state.rows.len() == before {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}
