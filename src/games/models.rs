use std::collections::HashMap;

use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::game_types::GameType;
use crate::schema::{events, games};

#[derive(Debug, Queryable, Identifiable)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: String,
    pub creator_id: i64,
    pub game_type_id: i64,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[table_name = "games"]
pub struct CreateGame {
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: String,
    #[serde(rename = "game_type")]
    pub game_type_id: i64,
    #[serde(skip)]
    pub creator_id: i64,
}

/// The flat game projection: foreign keys as plain ids, plus the
/// ids of the events scheduled for this game.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub creator: i64,
    pub game_type: i64,
    pub events: Vec<i64>,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: String,
}

impl GameResponse {
    fn new(game: Game, events: Vec<i64>) -> GameResponse {
        GameResponse {
            id: game.id,
            title: game.title,
            creator: game.creator_id,
            game_type: game.game_type_id,
            events,
            maker: game.maker,
            number_of_players: game.number_of_players,
            skill_level: game.skill_level,
        }
    }
}

impl Game {
    pub fn find_all(conn: &db::Conn) -> Result<Vec<GameResponse>, ServiceError> {
        let games = games::table.order(games::id).load::<Game>(conn)?;

        let mut events_by_game: HashMap<i64, Vec<i64>> = HashMap::new();
        let pairs = events::table
            .select((events::game_id, events::id))
            .load::<(i64, i64)>(conn)?;

        for (game_id, event_id) in pairs {
            events_by_game.entry(game_id).or_default().push(event_id);
        }

        let games = games
            .into_iter()
            .map(|game| {
                let events = events_by_game.remove(&game.id).unwrap_or_default();
                GameResponse::new(game, events)
            })
            .collect();

        Ok(games)
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<GameResponse, ServiceError> {
        let game = games::table.filter(games::id.eq(id)).first::<Game>(conn)?;

        let events = events::table
            .filter(events::game_id.eq(game.id))
            .select(events::id)
            .load::<i64>(conn)?;

        Ok(GameResponse::new(game, events))
    }

    /// Insert a new game for the caller.
    /// The referenced game type has to exist, otherwise nothing is inserted.
    pub fn create(new_game: CreateGame, conn: &db::Conn) -> Result<GameResponse, ServiceError> {
        GameType::find_by_id(new_game.game_type_id, conn)?;

        let game: Game = diesel::insert_into(games::table)
            .values(&new_game)
            .get_result(conn)?;

        Ok(GameResponse::new(game, Vec::new()))
    }

    /// Replace every field of the game, reassigning the creator to the caller.
    pub fn update(game_id: i64, changes: CreateGame, conn: &db::Conn) -> Result<(), ServiceError> {
        GameType::find_by_id(changes.game_type_id, conn)?;

        let updated = diesel::update(games::table.find(game_id))
            .set(&changes)
            .execute(conn)?;

        if updated == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }
}

impl crate::validator::Validate<CreateGame> for CreateGame {
    fn validate(&self) -> Result<(), ServiceError> {
        if self.title.trim().is_empty() {
            bad_request!("title can't be empty");
        }

        if self.title.trim().len() > 60 {
            bad_request!("title is too long, maximum 60 characters");
        }

        if self.maker.trim().is_empty() {
            bad_request!("maker can't be empty");
        }

        if self.maker.trim().len() > 25 {
            bad_request!("maker is too long, maximum 25 characters");
        }

        if self.number_of_players < 1 {
            bad_request!("a game needs at least 1 player");
        }

        if self.skill_level.trim().len() > 10 {
            bad_request!("skill_level is too long, maximum 10 characters");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;

    fn catan() -> CreateGame {
        CreateGame {
            title: String::from("Catan"),
            maker: String::from("Kosmos"),
            number_of_players: 4,
            skill_level: String::from("2"),
            game_type_id: 1,
            creator_id: 3,
        }
    }

    #[test]
    fn created_game_response_shape() {
        let game = Game {
            id: 7,
            title: String::from("Catan"),
            maker: String::from("Kosmos"),
            number_of_players: 4,
            skill_level: String::from("2"),
            creator_id: 3,
            game_type_id: 1,
        };

        let serialized = serde_json::to_value(&GameResponse::new(game, Vec::new())).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({
                "id": 7,
                "title": "Catan",
                "creator": 3,
                "game_type": 1,
                "events": [],
                "maker": "Kosmos",
                "number_of_players": 4,
                "skill_level": "2",
            })
        );
    }

    #[test]
    fn create_game_body_field_names() {
        let body = r#"{
            "title": "Catan",
            "maker": "Kosmos",
            "number_of_players": 4,
            "skill_level": "2",
            "game_type": 1
        }"#;

        let game: CreateGame = serde_json::from_str(body).unwrap();

        assert_eq!(game.game_type_id, 1);
        // the creator always comes from the caller's identity, never the body
        assert_eq!(game.creator_id, 0);
    }

    #[test]
    fn valid_game() {
        assert!(Validator::new(catan()).validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut game = catan();
        game.title = String::from(" ");

        assert!(Validator::new(game).validate().is_err());
    }

    #[test]
    fn overlong_maker_is_rejected() {
        let mut game = catan();
        game.maker = "a".repeat(26);

        assert!(Validator::new(game).validate().is_err());
    }

    #[test]
    fn playerless_game_is_rejected() {
        let mut game = catan();
        game.number_of_players = 0;

        assert!(Validator::new(game).validate().is_err());
    }
}
