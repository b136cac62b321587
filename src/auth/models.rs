use diesel::prelude::*;

use crate::db;
use crate::errors::ServiceError;
use crate::schema::users;

/// The account managed by the external identity provider.
/// Never serialized, only consumed to resolve a credential to a gamer.
#[derive(Debug, Queryable, Identifiable)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub token: String,
}

impl User {
    pub fn find_by_token(token: &str, conn: &db::Conn) -> Result<Self, ServiceError> {
        let user = users::table
            .filter(users::token.eq(token))
            .first::<User>(conn)?;

        Ok(user)
    }
}
