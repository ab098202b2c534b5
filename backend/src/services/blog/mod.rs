//! # Blog Service Module
//!
//! Model viewset for blog `Post` records, under `/posts/` and `/posts/{id}/`.
//! Posts are returned as `id, title, content, author, created_at`;
//! `created_at` is set by the server and cannot be changed.

use crate::services::viewset;
use actix_web::web::ServiceConfig;
use common::model::post::Post;

const API_PATH: &str = "/posts";

/// Registers the post viewset on `cfg` under `/posts`.
///
/// # Registered Routes:
///
/// *   **`GET|HEAD|POST /posts/`**:
///     - **Handler**: `viewset::list` / `viewset::create`
///     - **Description**: Lists posts by id, or creates one from `title`, `content` and `author`.
///
/// *   **`GET|HEAD|PUT|PATCH|DELETE /posts/{id}/`**:
///     - **Handler**: `viewset::retrieve`, `update`, `partial_update`, `destroy`
///     - **Description**: Single post operations.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    viewset::register::<Post>(cfg, API_PATH);
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn full_lifecycle() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({
                "title": "First post",
                "content": "Hello, world",
                "author": "admin",
                "created_at": "1970-01-01T00:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_ne!(created["created_at"], "1970-01-01T00:00:00Z");

        let req = test::TestRequest::put()
            .uri("/posts/1/")
            .set_json(json!({
                "title": "First post (edited)",
                "content": "Hello again",
                "author": "admin"
            }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["title"], "First post (edited)");
        assert_eq!(updated["content"], "Hello again");
        assert_eq!(updated["created_at"], created["created_at"]);

        let req = test::TestRequest::get().uri("/posts/").to_request();
        let posts: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts, json!([updated]));

        let req = test::TestRequest::delete().uri("/posts/1/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/posts/1/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn author_longer_than_100_characters_is_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({ "title": "t", "content": "c", "author": "a".repeat(101) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "author": ["Ensure this field has no more than 100 characters."] })
        );
    }
}
