use actix_web::web;
use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, HttpRequest};

use crate::auth;
use crate::db;
use crate::game_types::models::{CreateGameType, GameType};
use crate::server;
use crate::validator::Validator;

#[get("/game_types")]
async fn find_all(pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let game_types = web::block(move || GameType::find_all(&conn)).await?;

    http_ok_json!(game_types);
}

#[get("/game_types/{id}")]
async fn find(game_type_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let game_type = web::block(move || GameType::find_by_id(*game_type_id, &conn)).await?;

    http_ok_json!(game_type);
}

#[post("/game_types")]
async fn create(
    req: HttpRequest,
    game_type: Json<Validator<CreateGameType>>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let game_type = game_type.into_inner().validate()?;

    let conn = pool.get()?;

    let game_type = web::block(move || {
        auth::identify(&token, &conn)?;
        GameType::create(game_type, &conn)
    })
    .await?;

    http_created_json!(game_type);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
    cfg.service(create);
}
