//! # Article Service Module
//!
//! Articles are served through several URL layouts that all share the same
//! handlers from `viewset`. They differ only in which methods each path
//! accepts:
//!
//! *   **Viewset**: `/viewset/article/` (`GET`, `POST`) and
//!     `/viewset/article/{id}/` (`GET`, `PUT`, `PATCH`, `DELETE`), with the
//!     router index at `/viewset/`.
//! *   **Class view**: `/article/` (`GET` list, `POST` create) and
//!     `/detail/{id}/` (`GET`, `PUT`, `DELETE`).
//! *   **Generic mixin view**: `/genericarticle/{id}/`, where `GET` retrieves,
//!     `PUT` updates, `DELETE` destroys and `POST` creates a new article (the
//!     id in the path is not used for creation).
//! *   **Function views**: `/fn/article/` and `/fn/detail/{id}/`, the same
//!     methods as the class views.
//!
//! The article `date` is assigned on creation and is never changed by an update.

use crate::services::root::api_root;
use crate::services::viewset::{self, create, list_create, retrieve_update_destroy};
use actix_web::web::{self, ServiceConfig};
use common::model::article::Article;

const VIEWSET_ROOT: &str = "/viewset/";

/// Registers every article layout on `cfg`.
///
/// # Registered Routes:
///
/// *   **`GET /viewset/`**:
///     - **Handler**: `root::api_root`
///     - **Description**: Index of the article viewset.
///
/// *   **`/viewset/article/`**, **`/article/`**, **`/fn/article/`**:
///     - **Handler**: `viewset::list` (`GET`, `HEAD`) / `viewset::create` (`POST`)
///
/// *   **`/viewset/article/{id}/`**, **`/detail/{id}/`**, **`/fn/detail/{id}/`**:
///     - **Handler**: `viewset::retrieve`, `update`, `destroy`; `partial_update` on the
///       viewset path only.
///
/// *   **`/genericarticle/{id}/`**:
///     - **Handler**: as the detail paths, plus `viewset::create` on `POST`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(api_root(VIEWSET_ROOT, &[("article", "/viewset/article/")]));
    viewset::register::<Article>(cfg, "/viewset/article");

    cfg.service(list_create::<Article>("/article/"))
        .service(retrieve_update_destroy::<Article>("/detail/{id}/"))
        .service(
            retrieve_update_destroy::<Article>("/genericarticle/{id}/")
                .route(web::post().to(create::<Article>)),
        )
        .service(list_create::<Article>("/fn/article/"))
        .service(retrieve_update_destroy::<Article>("/fn/detail/{id}/"));
}
