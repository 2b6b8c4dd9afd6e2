//! Comment model.

use crate::prelude::*;
use crate::user::user::User;
use crate::{db::connection::DbConnection, schema::comments::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub user_id: Option<i32>,
    pub description: Option<String>,
    pub total_likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub user_id: Option<i32>,
    pub description: Option<String>,
}

impl NewComment {
    pub fn save(self, connection: &DbConnection) -> Result<Comment> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(comments)
            .values(self)
            .returning(Comment::as_returning())
            .get_result(conn)?)
    }
}

impl Comment {
    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(comments
            .filter(id.eq(target))
            .select(Comment::as_select())
            .first(conn)
            .optional()?)
    }

    /// All comments joined with their author.
    pub fn fetch_all_with_authors(connection: &DbConnection) -> Result<Vec<(Self, User)>> {
        let conn = &mut connection.pool.get()?;

        Ok(comments
            .inner_join(crate::schema::users::table)
            .select((Comment::as_select(), User::as_select()))
            .load(conn)?)
    }

    /// One comment joined with its author.
    pub fn fetch_with_author(
        target: i32,
        connection: &DbConnection,
    ) -> Result<Option<(Self, User)>> {
        let conn = &mut connection.pool.get()?;

        Ok(comments
            .inner_join(crate::schema::users::table)
            .filter(id.eq(target))
            .select((Comment::as_select(), User::as_select()))
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_user(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(comments
            .filter(user_id.eq(target))
            .select(Comment::as_select())
            .load(conn)?)
    }

    pub fn update_description(
        target: i32,
        text: Option<&str>,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(comments.filter(id.eq(target)))
            .set(description.eq(text))
            .returning(Comment::as_returning())
            .get_result(conn)
            .optional()?)
    }

    /// Increments the like counter. Returns the updated row.
    pub fn add_like(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(comments.filter(id.eq(target)))
            .set(total_likes.eq(total_likes + 1))
            .returning(Comment::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(comments.filter(id.eq(target))).execute(conn)?)
    }
}
