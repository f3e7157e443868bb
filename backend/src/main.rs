use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::{Arc, PoisonError, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trace_connect_core::Board;

mod commands;
mod config;

use config::ServerConfig;

// Application State
struct AppState {
    board: Arc<RwLock<Board>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let shared_state = Arc::new(AppState {
        board: Arc::new(RwLock::new(Board::new())),
    });

    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> String {
    format!("Trace connect backend v{}", trace_connect_core::version())
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("Client connected");
    let (mut sender, mut receiver) = socket.split();

    let initial = {
        let board = state.board.read().unwrap_or_else(PoisonError::into_inner);
        commands::board_update(&board)
    };
    if sender.send(Message::Text(initial)).await.is_err() {
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            return;
        };

        if let Message::Text(text) = msg {
            info!("Received message: {}", text);

            // Lock is released before any reply is sent
            let replies = {
                let mut board = state.board.write().unwrap_or_else(PoisonError::into_inner);
                commands::handle_command(&mut board, &text)
            };

            for reply in replies {
                if sender.send(Message::Text(reply)).await.is_err() {
                    return;
                }
            }
        }
    }

    info!("Client disconnected");
}
