use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::{gamers, users};

/// A gamer profile, linked one-to-one to an external user account
#[derive(Debug, Queryable, Identifiable)]
pub struct Gamer {
    pub id: i64,
    pub user_id: i64,
    pub bio: String,
}

#[derive(Debug, Queryable)]
pub struct GamerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct GamerResponse {
    pub id: i64,
    pub full_name: String,
    pub bio: String,
}

impl From<GamerRecord> for GamerResponse {
    fn from(record: GamerRecord) -> GamerResponse {
        GamerResponse {
            id: record.id,
            full_name: format!("{} {}", record.first_name, record.last_name),
            bio: record.bio,
        }
    }
}

impl Gamer {
    pub fn find_all(conn: &db::Conn) -> Result<Vec<GamerResponse>, ServiceError> {
        let gamers = gamers::table
            .inner_join(users::table)
            .select((
                gamers::id,
                users::first_name,
                users::last_name,
                gamers::bio,
            ))
            .order(gamers::id)
            .load::<GamerRecord>(conn)?;

        Ok(gamers.into_iter().map(GamerResponse::from).collect())
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<GamerResponse, ServiceError> {
        let gamer = gamers::table
            .inner_join(users::table)
            .filter(gamers::id.eq(id))
            .select((
                gamers::id,
                users::first_name,
                users::last_name,
                gamers::bio,
            ))
            .first::<GamerRecord>(conn)?;

        Ok(gamer.into())
    }

    /// the gamer profile belonging to an external user account
    pub fn find_by_user(user_id: i64, conn: &db::Conn) -> Result<Gamer, ServiceError> {
        let gamer = gamers::table
            .filter(gamers::user_id.eq(user_id))
            .first::<Gamer>(conn)?;

        Ok(gamer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last_name() {
        let record = GamerRecord {
            id: 3,
            first_name: String::from("Ricky"),
            last_name: String::from("Bobby"),
            bio: String::from("shake and bake"),
        };

        let response = GamerResponse::from(record);

        assert_eq!(response.full_name, "Ricky Bobby");
    }

    #[test]
    fn response_shape() {
        let response = GamerResponse {
            id: 3,
            full_name: String::from("Ricky Bobby"),
            bio: String::from("shake and bake"),
        };

        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({
                "id": 3,
                "full_name": "Ricky Bobby",
                "bio": "shake and bake",
            })
        );
    }
}
