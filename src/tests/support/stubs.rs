use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::domain::entities::CurrentUser;
use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicsError, GetTopicsUseCase,
};

pub fn sample_topic(id: i32, title: &str, min: i32, max: i32) -> Topic {
    Topic {
        id: TopicId::from(id),
        title: Some(title.to_string()),
        min_lesson_number: Some(min),
        max_lesson_number: Some(max),
    }
}

//
// ──────────────────────────────────────────────────────────
// Get topics
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<Topic>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Create topic
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubCreateTopicUseCase {
    result: Result<Topic, CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn success(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn admin_required() -> Self {
        Self {
            result: Err(CreateTopicError::AdminRequired),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(CreateTopicError::RepositoryError(msg.into())),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(
        &self,
        _actor: CurrentUser,
        _command: CreateTopicCommand,
    ) -> Result<Topic, CreateTopicError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete topic
// ──────────────────────────────────────────────────────────
//

/// Records the ids it was asked to delete.
#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
    received: Arc<Mutex<Vec<TopicId>>>,
}

impl StubDeleteTopicUseCase {
    fn with_result(result: Result<(), DeleteTopicError>) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn success() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn not_found() -> Self {
        Self::with_result(Err(DeleteTopicError::TopicNotFound))
    }

    pub fn admin_required() -> Self {
        Self::with_result(Err(DeleteTopicError::AdminRequired))
    }

    pub fn failure(msg: &str) -> Self {
        Self::with_result(Err(DeleteTopicError::DatabaseError(msg.into())))
    }

    pub fn received_ids(&self) -> Vec<TopicId> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(
        &self,
        _actor: CurrentUser,
        topic_id: TopicId,
    ) -> Result<(), DeleteTopicError> {
        self.received.lock().unwrap().push(topic_id);
        self.result.clone()
    }
}
