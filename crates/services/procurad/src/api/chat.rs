//! Broadcast chat over WebSocket.
//!
//! Every connected client shares one broadcast channel. A text frame is
//! echoed back to its sender ("You wrote: ...") and fanned out to everyone,
//! sender included, as "Client #N says: ...". Disconnects are announced to
//! the remaining clients.

use axum::{
    extract::{
        ConnectInfo, Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use std::net::SocketAddr;

use crate::state::AppState;

/// The handler for the HTTP request that starts websocket negotiation. After
/// this completes, the actual switch from HTTP to the websocket protocol
/// occurs.
pub async fn chat_handler(
    ws: WebSocketUpgrade,
    Path(client_id): Path<i32>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!("Chat client #{client_id} at {addr} connected");
    ws.on_upgrade(move |socket| handle_socket(state, socket, client_id, addr))
}

/// The websocket state machine, one per connection.
async fn handle_socket(state: AppState, socket: WebSocket, client_id: i32, addr: SocketAddr) {
    let (mut sender, mut receiver) = socket.split();

    // Personal echoes and the shared broadcast both funnel into the single
    // socket sink through this task.
    let (personal_tx, mut personal_rx) = mpsc::channel::<String>(8);
    let mut chat_rx = state.chat.subscribe();

    let mut send_task = tokio::spawn(async move {
        loop {
            let line = tokio::select! {
                personal = personal_rx.recv() => match personal {
                    Some(line) => line,
                    None => break,
                },
                shared = chat_rx.recv() => match shared {
                    Ok(line) => line,
                    Err(_) => break,
                },
            };
            if sender.send(Message::Text(line.into())).await.is_err() {
                break;
            }
        }
    });

    let chat_tx = state.chat.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            match message {
                Message::Text(text) => {
                    if personal_tx.send(format!("You wrote: {text}")).await.is_err() {
                        break;
                    }
                    // Err only means no one is listening right now.
                    let _ = chat_tx.send(format!("Client #{client_id} says: {text}"));
                }
                Message::Close(_) => break,
                Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    let _ = state.chat.send(format!("Client #{client_id} has left the chat"));
    debug!("Chat client #{client_id} at {addr} disconnected");
}
