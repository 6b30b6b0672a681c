use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicsUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_topics: Option<Arc<dyn GetTopicsUseCase + Send + Sync>>,
    create_topic: Option<Arc<dyn CreateTopicUseCase + Send + Sync>>,
    delete_topic: Option<Arc<dyn DeleteTopicUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_topics: Some(Arc::new(StubGetTopicsUseCase::success(vec![]))),
            create_topic: Some(Arc::new(StubCreateTopicUseCase::failure(
                "not used in this test",
            ))),
            delete_topic: Some(Arc::new(StubDeleteTopicUseCase::success())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Some(Arc::new(uc));
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_topics_use_case: self.get_topics.expect("get_topics not set"),
            create_topic_use_case: self.create_topic.expect("create_topic not set"),
            delete_topic_use_case: self.delete_topic.expect("delete_topic not set"),
        })
    }
}
