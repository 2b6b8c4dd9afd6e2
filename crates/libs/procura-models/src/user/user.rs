//! User account model.
//!
//! The `access_token` column is an advisory copy of the last issued token.
//! Logout clears it, nothing reads it during verification, so clearing it does
//! not revoke a still-unexpired token.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::users::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A marketplace account (buyer, seller, or admin).
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    /// Argon2 hash, never the plaintext. Excluded from every response body.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub description: Option<String>,
    pub address_id: Option<i32>,
    pub category_id: Option<i32>,
    pub disabled: bool,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user. `password_hash` must already be hashed.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub description: Option<String>,
    pub address_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Merge-patch payload: only present fields overwrite the stored row.
#[derive(AsChangeset, Debug, Clone, Default, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub description: Option<String>,
    pub address_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl UserPatch {
    /// True when no field is present; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.gender.is_none()
            && self.phone_number.is_none()
            && self.company_name.is_none()
            && self.date_of_birth.is_none()
            && self.description.is_none()
            && self.address_id.is_none()
            && self.category_id.is_none()
    }
}

impl NewUser {
    /// Inserts the user and returns the stored row.
    pub fn save(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(users)
            .values(self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(users.select(User::as_select()).load(conn)?)
    }

    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(users
            .filter(id.eq(target))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(users
            .filter(email.eq(target))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_category(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(users
            .filter(category_id.eq(target))
            .select(User::as_select())
            .load(conn)?)
    }

    /// Stores the freshly issued token in the advisory side-channel column.
    pub fn store_access_token(target: i32, token: &str, connection: &DbConnection) -> Result<()> {
        let conn = &mut connection.pool.get()?;

        diesel::update(users.filter(id.eq(target)))
            .set(access_token.eq(Some(token)))
            .execute(conn)?;
        Ok(())
    }

    /// Clears the advisory token column. Returns the number of updated rows.
    pub fn clear_access_token(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(users.filter(id.eq(target)))
            .set(access_token.eq(None::<String>))
            .execute(conn)?)
    }

    /// Overwrites the stored password hash for the given email.
    pub fn update_password_hash(
        target: &str,
        new_hash: &str,
        connection: &DbConnection,
    ) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(users.filter(email.eq(target)))
            .set(password_hash.eq(new_hash))
            .execute(conn)?)
    }

    /// Applies a merge patch and returns the updated row, `None` when absent.
    pub fn apply_patch(
        target: i32,
        patch: &UserPatch,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        if patch.is_empty() {
            return Self::fetch_by_id(target, connection);
        }
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(users.filter(id.eq(target)))
            .set(patch)
            .returning(User::as_returning())
            .get_result(conn)
            .optional()?)
    }

    /// Deletes the user. Returns the number of deleted rows.
    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(users.filter(id.eq(target))).execute(conn)?)
    }
}
