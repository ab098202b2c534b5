use crate::model::Resource;
use crate::validation::{Payload, not_blank};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemPayload {
    #[serde(default, deserialize_with = "crate::validation::trim")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Payload for ItemPayload {
    const FIELDS: &'static [&'static str] = &["name", "description"];
}

impl Resource for Item {
    type Payload = ItemPayload;

    fn blank() -> Self {
        Item {
            id: 0,
            name: String::new(),
            description: String::new(),
        }
    }

    fn apply(&mut self, payload: ItemPayload) {
        if let Some(name) = payload.name {
            self.name = name;
        }
        if let Some(description) = payload.description {
            self.description = description;
        }
    }
}
