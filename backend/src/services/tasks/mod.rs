//! # Task Service Module
//!
//! Model viewset for `Task` records:
//!
//! *   **`GET /task/`** / **`POST /task/`**: list every task, create a task.
//! *   **`GET|PUT|PATCH|DELETE /task/{id}/`**: retrieve, replace, partially
//!     update (e.g. `{"completed": true}`) or delete one task.

use crate::services::viewset;
use actix_web::web::ServiceConfig;
use common::model::task::Task;

const API_PATH: &str = "/task";

/// Registers the task viewset on `cfg` under `/task`.
///
/// # Registered Routes:
///
/// *   **`GET|HEAD|POST /task/`**:
///     - **Handler**: `viewset::list` / `viewset::create`
///     - **Description**: Lists tasks by id, or creates one. Only `title` is required,
///       `description` defaults to empty and `completed` to `false`.
///
/// *   **`GET|HEAD|PUT|PATCH|DELETE /task/{id}/`**:
///     - **Handler**: `viewset::retrieve`, `update`, `partial_update`, `destroy`
///     - **Description**: Single task operations. `created_at` is never changed.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    viewset::register::<Task>(cfg, API_PATH);
}
