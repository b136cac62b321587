use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpRequest, HttpServer};

use crate::attendance;
use crate::config;
use crate::db;
use crate::errors::ServiceError;
use crate::events;
use crate::game_types;
use crate::gamers;
use crate::games;

pub type Response = Result<web::HttpResponse, ServiceError>;

#[get("/health")]
async fn health(_: HttpRequest) -> &'static str {
    "ok"
}

pub async fn launch(db_pool: db::Pool) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .data(db_pool.clone())
            .wrap(middleware::DefaultHeaders::new().header("X-Version", env!("CARGO_PKG_VERSION")))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            // limit the maximum amount of data that the server will accept
            .data(web::JsonConfig::default().limit(262_144))
            .data(web::PayloadConfig::default().limit(262_144))
            .service(health)
            .configure(game_types::routes::register)
            .configure(gamers::routes::register)
            .configure(games::routes::register)
            .configure(events::routes::register)
            .configure(attendance::routes::register)
    })
    .bind(format!(
        "{}:{}",
        config::Config::api_host(),
        config::Config::api_port()
    ))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_rt::test]
    async fn health_responds_ok() {
        let mut app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&mut app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "ok");
    }
}
