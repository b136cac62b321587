use actix_web::web;
use actix_web::web::{Data, Path};
use actix_web::get;

use crate::db;
use crate::gamers::Gamer;
use crate::server;

#[get("/gamers")]
async fn find_all(pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let gamers = web::block(move || Gamer::find_all(&conn)).await?;

    http_ok_json!(gamers);
}

#[get("/gamers/{id}")]
async fn find(gamer_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let gamer = web::block(move || Gamer::find_by_id(*gamer_id, &conn)).await?;

    http_ok_json!(gamer);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
}
