use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::ser::SerializeStruct;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::{events, gamers, games, users};

#[derive(Debug, Queryable, Identifiable)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub organizer_id: i64,
    pub game_id: i64,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[table_name = "events"]
pub struct CreateEvent {
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "game")]
    pub game_id: i64,
    #[serde(skip)]
    pub organizer_id: i64,
}

/// Nested organizer projection: id and full name, nothing else.
/// The bio stays out of nested contexts on purpose.
#[derive(Debug, Queryable)]
pub struct Organizer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl serde::Serialize for Organizer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Organizer", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field(
            "full_name",
            &format!("{} {}", self.first_name, self.last_name),
        )?;
        state.end()
    }
}

/// Nested game projection, only the id and title
#[derive(Debug, Serialize, Queryable)]
pub struct EventGame {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Serialize, Queryable)]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub organizer: Organizer,
    pub game: EventGame,
}

impl Event {
    pub fn find_all(conn: &db::Conn) -> Result<Vec<EventResponse>, ServiceError> {
        let events = events::table
            .inner_join(gamers::table.inner_join(users::table))
            .inner_join(games::table)
            .select((
                events::id,
                events::title,
                events::date_time,
                events::location,
                (gamers::id, users::first_name, users::last_name),
                (games::id, games::title),
            ))
            .order(events::date_time)
            .load::<EventResponse>(conn)?;

        Ok(events)
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<EventResponse, ServiceError> {
        let event = events::table
            .inner_join(gamers::table.inner_join(users::table))
            .inner_join(games::table)
            .filter(events::id.eq(id))
            .select((
                events::id,
                events::title,
                events::date_time,
                events::location,
                (gamers::id, users::first_name, users::last_name),
                (games::id, games::title),
            ))
            .first::<EventResponse>(conn)?;

        Ok(event)
    }

    /// Schedule a new event, organized by the caller.
    /// The referenced game has to exist, otherwise nothing is inserted.
    pub fn create(new_event: CreateEvent, conn: &db::Conn) -> Result<EventResponse, ServiceError> {
        games::table
            .find(new_event.game_id)
            .select(games::id)
            .first::<i64>(conn)?;

        let event: Event = diesel::insert_into(events::table)
            .values(&new_event)
            .get_result(conn)?;

        Self::find_by_id(event.id, conn)
    }

    /// Replace every field of the event, reassigning the organizer to the caller.
    pub fn update(event_id: i64, changes: CreateEvent, conn: &db::Conn) -> Result<(), ServiceError> {
        games::table
            .find(changes.game_id)
            .select(games::id)
            .first::<i64>(conn)?;

        let updated = diesel::update(events::table.find(event_id))
            .set(&changes)
            .execute(conn)?;

        if updated == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }

    pub fn delete(event_id: i64, conn: &db::Conn) -> Result<(), ServiceError> {
        let deleted =
            diesel::delete(events::table.filter(events::id.eq(event_id))).execute(conn)?;

        if deleted == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }
}

impl crate::validator::Validate<CreateEvent> for CreateEvent {
    fn validate(&self) -> Result<(), ServiceError> {
        if self.title.trim().is_empty() {
            bad_request!("title can't be empty");
        }

        if self.title.trim().len() > 150 {
            bad_request!("title is too long, maximum 150 characters");
        }

        if self.location.trim().is_empty() {
            bad_request!("location can't be empty");
        }

        if self.location.trim().len() > 60 {
            bad_request!("location is too long, maximum 60 characters");
        }

        Ok(())
    }
}
