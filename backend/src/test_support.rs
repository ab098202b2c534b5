//! Builds the full application against a fresh in-memory database.

/// `let app = test_app!();` inside an `#[actix_web::test]`.
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::new(
                    actix_web::middleware::TrailingSlash::Always,
                ))
                .app_data(actix_web::web::Data::new(
                    crate::db::Db::open_in_memory().expect("in-memory database"),
                ))
                .configure(|cfg| crate::services::configure(cfg, 1024 * 1024)),
        )
        .await
    };
}

pub(crate) use test_app;
