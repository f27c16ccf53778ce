//! User account model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::users::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
///
/// The stored digest embeds its own salt and cost parameters; the account
/// record never holds plaintext credentials.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID.
    pub id: Uuid,
    /// Unique username, matched case-sensitively.
    pub username: String,
    /// Argon2 digest of the user's password.
    pub password_digest: String,
    /// When this user was created.
    pub created_at: DateTime<Utc>,
    /// When this user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    /// Unique username.
    pub username: String,
    /// Argon2 digest of the user's password.
    pub password_digest: String,
}

impl NewUser {
    /// Creates the user in the database.
    ///
    /// The unique index on `username` is the last word on uniqueness; a
    /// concurrent insert of the same name surfaces as
    /// [`Error::DuplicateKey`].
    pub fn create(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(users)
            .values(&self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    /// Fetches a user by exact username, if one exists.
    pub fn fetch_by_username(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(User::by_username(target)
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    /// Returns a query filtered by username.
    #[diesel::dsl::auto_type(no_type_alias)]
    pub(crate) fn by_username(target: &str) -> _ {
        crate::schema::users::dsl::users.filter(username.eq(target))
    }
}
