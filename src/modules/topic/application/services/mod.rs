mod create_topic_service;
mod delete_topic_service;
mod get_topics_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topics_service::GetTopicsService;
