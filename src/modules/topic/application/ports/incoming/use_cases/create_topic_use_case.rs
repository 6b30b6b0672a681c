use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::CurrentUser,
    topic::application::domain::entities::Topic,
};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

/// Fields are taken as sent. Missing values stay `None` and no range check
/// is made between the lesson bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTopicCommand {
    title: Option<String>,
    min_lesson_number: Option<i32>,
    max_lesson_number: Option<i32>,
}

impl CreateTopicCommand {
    pub fn new(
        title: Option<String>,
        min_lesson_number: Option<i32>,
        max_lesson_number: Option<i32>,
    ) -> Self {
        Self {
            title,
            min_lesson_number,
            max_lesson_number,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn min_lesson_number(&self) -> Option<i32> {
        self.min_lesson_number
    }

    pub fn max_lesson_number(&self) -> Option<i32> {
        self.max_lesson_number
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Admin required.")]
    AdminRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: CurrentUser,
        command: CreateTopicCommand,
    ) -> Result<Topic, CreateTopicError>;
}
