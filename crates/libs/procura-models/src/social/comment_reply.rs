//! Comment reply model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::comment_replies::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::comment_replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct CommentReply {
    pub id: i32,
    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,
    pub description: Option<String>,
    pub total_likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::comment_replies)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentReply {
    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,
    pub description: Option<String>,
}

impl NewCommentReply {
    pub fn save(self, connection: &DbConnection) -> Result<CommentReply> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(comment_replies)
            .values(self)
            .returning(CommentReply::as_returning())
            .get_result(conn)?)
    }
}

impl CommentReply {
    pub fn fetch_by_user(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(comment_replies
            .filter(user_id.eq(target))
            .select(CommentReply::as_select())
            .load(conn)?)
    }

    pub fn update_description(
        target: i32,
        text: Option<&str>,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(comment_replies.filter(id.eq(target)))
            .set(description.eq(text))
            .returning(CommentReply::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn add_like(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(comment_replies.filter(id.eq(target)))
            .set(total_likes.eq(total_likes + 1))
            .returning(CommentReply::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(comment_replies.filter(id.eq(target))).execute(conn)?)
    }
}
