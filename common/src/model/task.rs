use crate::model::Resource;
use crate::validation::{Payload, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskPayload {
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub title: Option<String>,
    /// May be blank.
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Payload for TaskPayload {
    const FIELDS: &'static [&'static str] = &["title", "description", "completed"];
}

impl Resource for Task {
    type Payload = TaskPayload;

    fn blank() -> Self {
        Task {
            id: 0,
            title: String::new(),
            description: String::new(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, payload: TaskPayload) {
        if let Some(title) = payload.title {
            self.title = title;
        }
        if let Some(description) = payload.description {
            self.description = description;
        }
        if let Some(completed) = payload.completed {
            self.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check;

    #[test]
    fn optional_fields_take_defaults() {
        let payload: TaskPayload = serde_json::from_str(r#"{"title": "write docs"}"#).unwrap();
        assert_eq!(check(&payload, false), Ok(()));

        let task = Task::from_payload(payload);
        assert_eq!(task.title, "write docs");
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }

    #[test]
    fn completing_a_task_keeps_other_fields() {
        let mut task = Task::from_payload(TaskPayload {
            title: Some("ship".into()),
            description: Some("v1".into()),
            completed: None,
        });
        let created_at = task.created_at;

        task.apply(TaskPayload {
            completed: Some(true),
            ..TaskPayload::default()
        });

        assert!(task.completed);
        assert_eq!(task.title, "ship");
        assert_eq!(task.description, "v1");
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn description_keeps_its_whitespace() {
        let payload: TaskPayload =
            serde_json::from_str(r#"{"title": "  plan  ", "description": "  indented\n"}"#)
                .unwrap();
        let task = Task::from_payload(payload);
        assert_eq!(task.title, "plan");
        assert_eq!(task.description, "  indented\n");
    }
}
