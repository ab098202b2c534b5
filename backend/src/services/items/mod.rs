//! # Item Service Module
//!
//! Model viewset for `Item` records under `/items/` and `/items/{id}/`.

use crate::services::viewset;
use actix_web::web::ServiceConfig;
use common::model::item::Item;

const API_PATH: &str = "/items";

/// Registers the item viewset on `cfg` under `/items`.
///
/// # Registered Routes:
///
/// *   **`GET|HEAD|POST /items/`**:
///     - **Handler**: `viewset::list` / `viewset::create`
///     - **Description**: Lists items by id, or creates one. `name` is required.
///
/// *   **`GET|HEAD|PUT|PATCH|DELETE /items/{id}/`**:
///     - **Handler**: `viewset::retrieve`, `update`, `partial_update`, `destroy`
///     - **Description**: Single item operations.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    viewset::register::<Item>(cfg, API_PATH);
}
