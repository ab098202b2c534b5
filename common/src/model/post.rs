use crate::model::Resource;
use crate::validation::{Payload, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostPayload {
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub author: Option<String>,
}

impl Payload for PostPayload {
    const FIELDS: &'static [&'static str] = &["title", "content", "author"];
}

impl Resource for Post {
    type Payload = PostPayload;

    fn blank() -> Self {
        Post {
            id: 0,
            title: String::new(),
            content: String::new(),
            author: String::new(),
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, payload: PostPayload) {
        if let Some(title) = payload.title {
            self.title = title;
        }
        if let Some(content) = payload.content {
            self.content = content;
        }
        if let Some(author) = payload.author {
            self.author = author;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_declaration_order() {
        let post = Post {
            id: 3,
            title: "Hello".into(),
            content: "World".into(),
            author: "me".into(),
            created_at: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        assert_eq!(
            serde_json::to_string(&post).unwrap(),
            r#"{"id":3,"title":"Hello","content":"World","author":"me","created_at":"2024-05-01T10:00:00Z"}"#
        );
    }
}
