use actix_web::web;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, HttpRequest};

use crate::attendance::models::{Attendance, AttendanceFilter, CreateAttendance};
use crate::auth;
use crate::db;
use crate::server;

#[get("/attendance")]
async fn find_all(filter: Query<AttendanceFilter>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let attendances = web::block(move || Attendance::find_all(filter.into_inner(), &conn)).await?;

    http_ok_json!(attendances);
}

#[get("/attendance/{id}")]
async fn find(attendance_id: Path<i64>, pool: Data<db::Pool>) -> server::Response {
    let conn = pool.get()?;

    let attendance = web::block(move || Attendance::find_by_id(*attendance_id, &conn)).await?;

    http_ok_json!(attendance);
}

#[post("/attendance")]
async fn create(
    req: HttpRequest,
    signup: Json<CreateAttendance>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;
    let mut signup = signup.into_inner();

    let conn = pool.get()?;

    let attendance = web::block(move || {
        let gamer = auth::identify(&token, &conn)?;
        signup.gamer_id = gamer.id;

        Attendance::create(signup, &conn)
    })
    .await?;

    http_created_json!(attendance);
}

#[delete("/attendance/{id}")]
async fn destroy(
    req: HttpRequest,
    attendance_id: Path<i64>,
    pool: Data<db::Pool>,
) -> server::Response {
    let token = auth::bearer_token(&req)?;

    let conn = pool.get()?;

    web::block(move || {
        auth::identify(&token, &conn)?;

        Attendance::delete(*attendance_id, &conn)
    })
    .await?;

    http_no_content!();
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all);
    cfg.service(find);
    cfg.service(create);
    cfg.service(destroy);
}
