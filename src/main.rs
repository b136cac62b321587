//!
#![warn(missing_debug_implementations, rust_2018_idioms)]

#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;

use anyhow::Error;
use dotenv::dotenv;

#[macro_use]
mod macros;

mod attendance;
mod auth;
mod config;
mod db;
mod errors;
mod events;
mod game_types;
mod gamers;
mod games;
mod schema;
mod server;
mod validator;

#[actix_web::main]
async fn main() -> anyhow::Result<(), Error> {
    init().await?;

    Ok(())
}

async fn init() -> anyhow::Result<(), Error> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .expect("unable to initialize the tracing subscriber");

    db::migrate(config::Config::database_url())?;

    let pool = db::build_connection_pool(config::Config::database_url())?;

    debug!("launching the actix webserver");
    server::launch(pool).await?;

    Ok(())
}
