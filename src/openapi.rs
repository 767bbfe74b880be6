/// OpenAPI documentation for Board Service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board Service API",
        version = "1.0.0",
        description = "Minimal posts and comments service backed by process-local, in-memory storage. Supports creating posts, attaching comments to a post, listing all posts, listing comments for a post, and fetching a post together with its comments.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post creation and retrieval"),
        (name = "comments", description = "Comment creation and per-post listing"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Board Service"
    }

    pub fn version() -> &'static str {
        "1.0.0"
    }

    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}
