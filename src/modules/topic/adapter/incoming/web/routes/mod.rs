mod create_topic;
mod delete_topic;
mod get_topics;

pub use create_topic::{create_topic_handler, CreateTopicRequest};
pub use delete_topic::delete_topic_handler;
pub use get_topics::get_topics_handler;

// Paths generated by `#[utoipa::path]`, needed by the OpenAPI derive.
pub use create_topic::__path_create_topic_handler;
pub use delete_topic::__path_delete_topic_handler;
pub use get_topics::__path_get_topics_handler;
