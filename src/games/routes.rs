use actix_web::web;
use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, put, HttpRequest};

use crate::auth;
use crate::db;
use crate::games::models::{CreateGame, Game};
use crate::server;
use crate::validator::Validator;

#[get("/games")]
async fn find_all(pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let games = web::block(move || Game::find_all(&conn)).await?;

    http_ok_json!(games);
}

#[get("/games/{id}")]
async fn find(game_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let game = web::block(move || Game::find_by_id(*game_id, &conn)).await?;

    http_ok_json!(game);
}

#[post("/games")]
async fn create(
    req: HttpRequest,
    game: Json<Validator<CreateGame>>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let mut game = game.into_inner().validate()?;

    let conn = pool.get()?;

    let game = web::block(move || {
        let gamer = auth::identify(&token, &conn)?;
        game.creator_id = gamer.id;

        Game::create(game, &conn)
    })
    .await?;

    http_created_json!(game);
}

#[put("/games/{id}")]
async fn update(
    req: HttpRequest,
    game_id: Path<i64>,
    game: Json<Validator<CreateGame>>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let mut game = game.into_inner().validate()?;

    let conn = pool.get()?;

    web::block(move || {
        let gamer = auth::identify(&token, &conn)?;
        game.creator_id = gamer.id;

        Game::update(*game_id, game, &conn)
    })
    .await?;

    http_no_content!();
}

// games are deliberately not deletable through this API

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
    cfg.service(create);
    cfg.service(update);
}
