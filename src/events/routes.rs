use actix_web::web;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpRequest};

use crate::auth;
use crate::db;
use crate::events::models::{CreateEvent, Event};
use crate::server;
use crate::validator::Validator;

#[get("/events")]
async fn find_all(pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let events = web::block(move || Event::find_all(&conn)).await?;

    http_ok_json!(events);
}

#[get("/events/{id}")]
async fn find(event_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let event = web::block(move || Event::find_by_id(*event_id, &conn)).await?;

    http_ok_json!(event);
}

#[post("/events")]
async fn create(
    req: HttpRequest,
    event: Json<Validator<CreateEvent>>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let mut event = event.into_inner().validate()?;

    let conn = pool.get()?;

    let event = web::block(move || {
        let gamer = auth::identify(&token, &conn)?;
        event.organizer_id = gamer.id;

        Event::create(event, &conn)
    })
    .await?;

    http_created_json!(event);
}

#[put("/events/{id}")]
async fn update(
    req: HttpRequest,
    event_id: Path<i64>,
    event: Json<Validator<CreateEvent>>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let mut event = event.into_inner().validate()?;

    let conn = pool.get()?;

    web::block(move || {
        let gamer = auth::identify(&token, &conn)?;
        event.organizer_id = gamer.id;

        Event::update(*event_id, event, &conn)
    })
    .await?;

    http_no_content!();
}

// any authenticated gamer may cancel an event, not just its organizer
#[delete("/events/{id}")]
async fn destroy(req: HttpRequest, event_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let token = auth::bearer_token(&req)?;

    let conn = pool.get()?;

    web::block(move || {
        auth::identify(&token, &conn)?;

        Event::delete(*event_id, &conn)
    })
    .await?;

    http_no_content!();
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
    cfg.service(create);
    cfg.service(update);
    cfg.service(destroy);
}
