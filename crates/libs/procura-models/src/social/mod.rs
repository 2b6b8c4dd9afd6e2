pub mod comment;
pub mod comment_reply;
