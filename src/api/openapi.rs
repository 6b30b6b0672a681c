use crate::api::schemas::{ErrorResponse, MessageBody, TopicListResponse, TopicResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::topic::adapter::incoming::web::routes::CreateTopicRequest;
use crate::topic::application::domain::entities::Topic;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Topics API",
        version = "1.0.0",
        description = "Lesson topics: list, create and delete"
    ),
    paths(
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
    ),
    components(schemas(
        Topic,
        CreateTopicRequest,
        TopicListResponse,
        TopicResponse,
        MessageBody,
        ErrorResponse
    )),
    modifiers(&SecurityAddon),
    tags((name = "topics", description = "Topic management endpoints"))
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token carrying the is_admin claim"))
                        .build(),
                ),
            )
        }
    }
}
