//! Shared application state.

use procura_mailer::mailer::Mailer;
use procura_models::db::connection::DbConnection;
use tokio::sync::broadcast;

/// Capacity of the chat broadcast channel. Slow readers that fall further
/// behind than this lose messages and are disconnected.
const CHAT_CHANNEL_CAPACITY: usize = 64;

/// State shared by every handler: the connection pool, the SMTP mailer, and
/// the chat broadcast channel.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConnection,
    pub mailer: Mailer,
    pub chat: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(db: DbConnection, mailer: Mailer) -> Self {
        let (chat, _) = broadcast::channel(CHAT_CHANNEL_CAPACITY);
        Self { db, mailer, chat }
    }
}
