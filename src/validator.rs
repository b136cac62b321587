use crate::errors::ServiceError;
use serde::de::DeserializeOwned;

/// Wraps a request body so handlers can take `Json<Validator<T>>` and
/// check the payload before it reaches the database.
#[derive(Deserialize)]
pub struct Validator<T>(T);

pub trait Validate<T> {
    fn validate(&self) -> Result<(), ServiceError>;
}

impl<T> Validator<T> {
    #[allow(dead_code)]
    pub fn new(i: T) -> Validator<T> {
        Validator::<T>(i)
    }
}

impl<T> Validator<T>
where
    T: Validate<T>,
    T: DeserializeOwned,
{
    pub fn validate(self) -> Result<T, ServiceError> {
        self.0.validate()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::CreateGame;

    fn payload(title: &str) -> CreateGame {
        CreateGame {
            title: title.to_string(),
            maker: String::from("Kosmos"),
            number_of_players: 4,
            skill_level: String::from("2"),
            game_type_id: 1,
            creator_id: 0,
        }
    }

    #[test]
    fn invalid_payloads_are_rejected() {
        let invalid = Validator::new(payload(""));

        assert!(invalid.validate().is_err());
    }

    #[test]
    fn valid_payloads_pass_through_unchanged() {
        let valid = Validator::new(payload("Catan"));

        let game = valid.validate().unwrap();

        assert_eq!(game.title, "Catan");
    }
}
