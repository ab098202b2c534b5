//! Field-level validation shared by every payload type.
//!
//! Payload structs declare their rules with `validator` attributes. This
//! module turns a failed run into [`FieldErrors`], the map that the backend
//! returns as the body of a `400 Bad Request`:
//!
//! ```json
//! { "email": ["Enter a valid email address."], "title": ["This field is required."] }
//! ```
//!
//! Request bodies arrive as a [`Submission`], which only accepts a JSON
//! object and keeps track of what a plain `Option` field loses: fields sent
//! as `null` and fields whose value has the wrong JSON type.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Field name -> human readable messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Code emitted by `#[validate(required)]`.
const REQUIRED: &str = "required";

const NOT_NULL: &str = "This field may not be null.";

/// A payload type: every field is optional at the type level.
pub trait Payload: Validate + DeserializeOwned + Send + 'static {
    /// Writable field names, as sent on the wire.
    const FIELDS: &'static [&'static str];
}

/// A request body: the typed payload plus the problems typing could not express.
#[derive(Debug)]
pub struct Submission<P> {
    pub payload: P,
    /// Writable fields sent as `null`.
    nulls: Vec<&'static str>,
    /// Writable fields whose value could not be read, with the reason.
    invalid: Vec<(&'static str, String)>,
}

impl<P: Payload> Submission<P> {
    /// Runs [`check`] on the payload, then reports null and mistyped fields,
    /// which take precedence over any other message for the same field.
    pub fn check(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut fields = check(&self.payload, partial).err().unwrap_or_default();
        for name in &self.nulls {
            fields.insert(name.to_string(), vec![NOT_NULL.to_string()]);
        }
        for (name, reason) in &self.invalid {
            fields.insert(name.to_string(), vec![reason.clone()]);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(fields)
        }
    }
}

impl<'de, P: Payload> Deserialize<'de> for Submission<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;

        let nulls: Vec<&'static str> = P::FIELDS
            .iter()
            .copied()
            .filter(|name| body.get(*name).is_some_and(Value::is_null))
            .collect();
        body.retain(|_, value| !value.is_null());

        // Every payload field is optional, so a body holding a single field
        // only fails to deserialize when that field has the wrong type.
        let mut invalid = Vec::new();
        for name in P::FIELDS {
            let Some(value) = body.get(*name) else {
                continue;
            };
            let mut single = Map::new();
            single.insert(name.to_string(), value.clone());
            if let Err(err) = serde_json::from_value::<P>(Value::Object(single)) {
                invalid.push((*name, err.to_string()));
            }
        }
        for (name, _) in &invalid {
            body.remove(*name);
        }

        let payload = serde_json::from_value(Value::Object(body)).map_err(D::Error::custom)?;
        Ok(Submission {
            payload,
            nulls,
            invalid,
        })
    }
}

/// Runs the payload validators.
///
/// A partial check (used for `PATCH`) ignores missing fields, every other
/// rule still applies to the fields that are present.
pub fn check<P: Validate>(payload: &P, partial: bool) -> Result<(), FieldErrors> {
    let Err(errors) = payload.validate() else {
        return Ok(());
    };

    let mut fields = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages: Vec<String> = errs
            .iter()
            .filter(|e| !(partial && e.code == REQUIRED))
            .map(message_for)
            .collect();
        if !messages.is_empty() {
            fields.insert(field.to_string(), messages);
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(fields)
    }
}

fn message_for(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

/// `deserialize_with` helper for character fields: surrounding whitespace is
/// dropped before any validator sees the value.
pub fn trim<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(|value| {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_owned()
        }
    }))
}

/// Values that can be blank: text that is empty once trimmed.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

/// A missing value is not blank, `required` reports it.
impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_some_and(Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// Rejects text that is empty once surrounding whitespace is removed.
pub fn not_blank<T: Blank + ?Sized>(value: &T) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::new("blank").with_message("This field may not be blank.".into()));
    }
    Ok(())
}
