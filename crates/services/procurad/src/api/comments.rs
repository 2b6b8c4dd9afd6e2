//! Comment and comment-reply handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use procura_models::{
    social::{
        comment::{Comment, NewComment},
        comment_reply::{CommentReply, NewCommentReply},
    },
    user::user::User,
};
use procura_web::prelude::{Error as WebError, Result as WebResult};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::state::AppState;

/// A comment joined with its author's public profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    #[serde(flatten)]
    pub comment: Comment,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdate {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCreate {
    pub user_id: Option<i32>,
    pub description: Option<String>,
}

fn detail(comment: Comment, author: User) -> CommentDetail {
    CommentDetail {
        comment,
        first_name: author.first_name,
        last_name: author.last_name,
        email: author.email,
        image_url: author.image_url,
    }
}

pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewComment>,
) -> WebResult<Json<Comment>> {
    Ok(Json(payload.save(&state.db)?))
}

pub async fn list(State(state): State<AppState>) -> WebResult<Json<Vec<CommentDetail>>> {
    let comments = Comment::fetch_all_with_authors(&state.db)?
        .into_iter()
        .map(|(comment, author)| detail(comment, author))
        .collect();
    Ok(Json(comments))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<CommentDetail>> {
    let (comment, author) =
        Comment::fetch_with_author(id, &state.db)?.ok_or(WebError::NotFound("Comment"))?;
    Ok(Json(detail(comment, author)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CommentUpdate>,
) -> WebResult<Json<Comment>> {
    let comment = Comment::update_description(id, payload.description.as_deref(), &state.db)?
        .ok_or(WebError::NotFound("Comment"))?;
    Ok(Json(comment))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> WebResult<Json<Value>> {
    if Comment::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Comment"));
    }
    Ok(Json(json!({"message": "Comment deleted."})))
}

pub async fn like(State(state): State<AppState>, Path(id): Path<i32>) -> WebResult<Json<Value>> {
    Comment::add_like(id, &state.db)?.ok_or(WebError::NotFound("Comment"))?;
    Ok(Json(json!({"message": "Like added"})))
}

/// Replies to an existing comment; the parent must exist.
pub async fn add_reply(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Json(payload): Json<ReplyCreate>,
) -> WebResult<Json<CommentReply>> {
    Comment::fetch_by_id(comment_id, &state.db)?.ok_or(WebError::NotFound("Comment"))?;

    let reply = NewCommentReply {
        comment_id: Some(comment_id),
        user_id: payload.user_id,
        description: payload.description,
    }
    .save(&state.db)?;
    Ok(Json(reply))
}

pub async fn update_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CommentUpdate>,
) -> WebResult<Json<CommentReply>> {
    let reply = CommentReply::update_description(id, payload.description.as_deref(), &state.db)?
        .ok_or(WebError::NotFound("Comment reply"))?;
    Ok(Json(reply))
}

pub async fn like_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Value>> {
    CommentReply::add_like(id, &state.db)?.ok_or(WebError::NotFound("Comment reply"))?;
    Ok(Json(json!({"message": "Like added"})))
}

pub async fn remove_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Value>> {
    if CommentReply::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Comment reply"));
    }
    Ok(Json(json!({"message": "Comment reply deleted."})))
}

pub async fn replies_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> WebResult<Json<Vec<CommentReply>>> {
    Ok(Json(CommentReply::fetch_by_user(user_id, &state.db)?))
}

pub async fn comments_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> WebResult<Json<Vec<Comment>>> {
    Ok(Json(Comment::fetch_by_user(user_id, &state.db)?))
}
