//! Records exposed by the API and the payloads that create or change them.
//!
//! Every record type comes in two halves:
//! - the record itself (`Article`, `Task`, ...), which is what gets stored and
//!   what the API returns, including read-only fields such as `id` or `date`;
//! - a payload (`ArticlePayload`, ...), which is what clients send. Payload
//!   fields are all `Option` so a missing field is reported by validation
//!   instead of failing JSON parsing, and so `PATCH` can carry a subset.
//!   Character fields are trimmed while the payload is read, so length and
//!   format rules apply to the value that is stored.

pub mod article;
pub mod item;
pub mod post;
pub mod task;

/// Mapping between a record and its payload.
pub trait Resource: Sized {
    type Payload: crate::validation::Payload;

    /// A record with every writable field empty and auto fields set to now.
    fn blank() -> Self;

    /// Copies the fields present in `payload` onto the record.
    ///
    /// Read-only fields (`id`, creation dates) are never touched.
    fn apply(&mut self, payload: Self::Payload);

    /// Builds a new, not yet stored, record (`id == 0`).
    fn from_payload(payload: Self::Payload) -> Self {
        let mut record = Self::blank();
        record.apply(payload);
        record
    }
}
