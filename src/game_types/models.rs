use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::game_types;

/// Category lookup value for a game, e.g. "Strategy" or "Trivia"
#[derive(Debug, Serialize, Queryable, Identifiable)]
#[table_name = "game_types"]
pub struct GameType {
    pub id: i64,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Deserialize, Insertable)]
#[table_name = "game_types"]
pub struct CreateGameType {
    #[serde(rename = "type")]
    pub type_: String,
}

impl GameType {
    pub fn find_all(conn: &db::Conn) -> Result<Vec<GameType>, ServiceError> {
        let game_types = game_types::table
            .order(game_types::id)
            .load::<GameType>(conn)?;

        Ok(game_types)
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<GameType, ServiceError> {
        let game_type = game_types::table
            .filter(game_types::id.eq(id))
            .first::<GameType>(conn)?;

        Ok(game_type)
    }

    pub fn create(new_game_type: CreateGameType, conn: &db::Conn) -> Result<GameType, ServiceError> {
        let game_type = diesel::insert_into(game_types::table)
            .values(&new_game_type)
            .get_result::<GameType>(conn)?;

        Ok(game_type)
    }
}

impl crate::validator::Validate<CreateGameType> for CreateGameType {
    fn validate(&self) -> Result<(), ServiceError> {
        if self.type_.trim().is_empty() {
            bad_request!("type can't be empty");
        }

        if self.type_.trim().len() > 50 {
            bad_request!("type is too long, maximum 50 characters");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;

    #[test]
    fn type_field_keeps_its_json_name() {
        let game_type = GameType {
            id: 1,
            type_: String::from("Strategy"),
        };

        let serialized = serde_json::to_value(&game_type).unwrap();

        assert_eq!(serialized, serde_json::json!({"id": 1, "type": "Strategy"}));

        let parsed: CreateGameType = serde_json::from_str(r#"{"type": "Trivia"}"#).unwrap();
        assert_eq!(parsed.type_, "Trivia");
    }

    #[test]
    fn empty_type_is_rejected() {
        let game_type = CreateGameType {
            type_: String::from("  "),
        };

        assert!(Validator::new(game_type).validate().is_err());
    }

    #[test]
    fn overlong_type_is_rejected() {
        let game_type = CreateGameType {
            type_: "a".repeat(51),
        };

        assert!(Validator::new(game_type).validate().is_err());
    }
}
