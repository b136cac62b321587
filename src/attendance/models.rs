use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::{attendances, events};

/// A gamer signed up for an event.
/// The (event, gamer) pair is unique, signing up twice is a conflict.
#[derive(Debug, Serialize, Queryable, Identifiable)]
#[table_name = "attendances"]
pub struct Attendance {
    pub id: i64,
    #[serde(rename = "event")]
    pub event_id: i64,
    #[serde(rename = "gamer")]
    pub gamer_id: i64,
}

#[derive(Debug, Deserialize, Insertable)]
#[table_name = "attendances"]
pub struct CreateAttendance {
    #[serde(rename = "event")]
    pub event_id: i64,
    #[serde(skip)]
    pub gamer_id: i64,
}

/// AttendanceFilter is a struct that the client can use to
/// narrow the signups down to a single event.
#[derive(Debug, Deserialize)]
pub struct AttendanceFilter {
    pub event: Option<i64>,
}

impl Attendance {
    pub fn find_all(
        filter: AttendanceFilter,
        conn: &db::Conn,
    ) -> Result<Vec<Attendance>, ServiceError> {
        let mut query = attendances::table.order(attendances::id).into_boxed();

        if let Some(event_id) = filter.event {
            query = query.filter(attendances::event_id.eq(event_id));
        }

        let attendances = query.load::<Attendance>(conn)?;

        Ok(attendances)
    }

    pub fn find_by_id(id: i64, conn: &db::Conn) -> Result<Attendance, ServiceError> {
        let attendance = attendances::table
            .filter(attendances::id.eq(id))
            .first::<Attendance>(conn)?;

        Ok(attendance)
    }

    /// Sign the caller up for an event.
    /// The event has to exist, otherwise nothing is inserted.
    pub fn create(
        signup: CreateAttendance,
        conn: &db::Conn,
    ) -> Result<Attendance, ServiceError> {
        events::table
            .find(signup.event_id)
            .select(events::id)
            .first::<i64>(conn)?;

        let attendance = diesel::insert_into(attendances::table)
            .values(&signup)
            .get_result::<Attendance>(conn)?;

        Ok(attendance)
    }

    pub fn delete(id: i64, conn: &db::Conn) -> Result<(), ServiceError> {
        let deleted =
            diesel::delete(attendances::table.filter(attendances::id.eq(id))).execute(conn)?;

        if deleted == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_bare_field_names() {
        let attendance = Attendance {
            id: 5,
            event_id: 2,
            gamer_id: 3,
        };

        let serialized = serde_json::to_value(&attendance).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({"id": 5, "event": 2, "gamer": 3})
        );
    }

    #[test]
    fn signup_body_field_names() {
        let signup: CreateAttendance = serde_json::from_str(r#"{"event": 2}"#).unwrap();

        assert_eq!(signup.event_id, 2);
        // the gamer always comes from the caller's identity, never the body
        assert_eq!(signup.gamer_id, 0);
    }
}
