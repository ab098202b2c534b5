use crate::model::Resource;
use crate::validation::{Payload, not_blank};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A news article. `date` is assigned once, when the article is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub email: String,
    pub date: NaiveDate,
}

/// Body of `POST`/`PUT`/`PATCH` requests on article endpoints.
///
/// `id` and `date` are read-only; if a client sends them they are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArticlePayload {
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
}

impl Payload for ArticlePayload {
    const FIELDS: &'static [&'static str] = &["title", "author", "email"];
}

impl Resource for Article {
    type Payload = ArticlePayload;

    fn blank() -> Self {
        Article {
            id: 0,
            title: String::new(),
            author: String::new(),
            email: String::new(),
            date: Utc::now().date_naive(),
        }
    }

    fn apply(&mut self, payload: ArticlePayload) {
        if let Some(title) = payload.title {
            self.title = title;
        }
        if let Some(author) = payload.author {
            self.author = author;
        }
        if let Some(email) = payload.email {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check;

    fn payload(json: &str) -> ArticlePayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn new_article_is_dated_today() {
        let article = Article::from_payload(payload(
            r#"{"title": " Rust ", "author": "Ferris", "email": "ferris@example.com"}"#,
        ));
        assert_eq!(article.id, 0);
        assert_eq!(article.title, "Rust");
        assert_eq!(article.date, Utc::now().date_naive());
    }

    #[test]
    fn read_only_fields_in_payload_are_ignored() {
        let mut article = Article::from_payload(payload(
            r#"{"title": "a", "author": "b", "email": "c@example.com"}"#,
        ));
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        article.id = 7;
        article.date = date;

        article.apply(payload(
            r#"{"id": 99, "title": "changed", "date": "1999-12-31"}"#,
        ));

        assert_eq!(article.id, 7);
        assert_eq!(article.date, date);
        assert_eq!(article.title, "changed");
        assert_eq!(article.author, "b");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let errors = check(
            &payload(r#"{"title": "a", "author": "b", "email": "nope"}"#),
            false,
        )
        .unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn every_field_is_required_on_create() {
        let errors = check(&payload("{}"), false).unwrap_err();
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["author", "email", "title"]
        );
    }

    #[test]
    fn surrounding_whitespace_does_not_count_against_rules() {
        let title = "a".repeat(200);
        let article = payload(&format!(
            r#"{{"title": "{title}  ", "author": " Ferris", "email": " ferris@example.com "}}"#
        ));
        assert_eq!(check(&article, false), Ok(()));

        let article = Article::from_payload(article);
        assert_eq!(article.title, title);
        assert_eq!(article.author, "Ferris");
        assert_eq!(article.email, "ferris@example.com");
    }

    #[test]
    fn title_over_the_limit_after_trimming_is_rejected() {
        let title = "a".repeat(201);
        let errors = check(
            &payload(&format!(
                r#"{{"title": " {title} ", "author": "b", "email": "c@example.com"}}"#
            )),
            false,
        )
        .unwrap_err();
        assert_eq!(
            errors["title"],
            vec!["Ensure this field has no more than 200 characters.".to_string()]
        );
    }
}
