use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::info;

use engine::Direction;

use crate::session::GameSession;

pub type SharedSession = Arc<Mutex<GameSession>>;

const WEB_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Snake</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #1a1a1a;
            color: #e0e0e0;
            padding: 20px;
            text-align: center;
        }
        h1 { color: #00aaff; margin-bottom: 10px; }
        #frame { image-rendering: pixelated; border: 1px solid #505050; margin: 10px 0; }
        #caption { font-size: 1.1em; margin-bottom: 10px; }
        #message { color: #ff4444; font-weight: 600; min-height: 1.5em; margin-bottom: 10px; }
        .controls { display: inline-grid; grid-template-columns: repeat(3, 60px); gap: 6px; }
        button {
            background: #00aaff;
            color: white;
            border: none;
            padding: 10px 0;
            border-radius: 4px;
            font-size: 1.1em;
            cursor: pointer;
        }
        button:active { background: #0088cc; }
        .misc { margin-top: 14px; }
        .misc label { margin-left: 12px; }
    </style>
</head>
<body>
    <h1>🐍 Snake</h1>
    <div id="caption"></div>
    <div id="message"></div>
    <img id="frame" alt="game frame">
    <br>
    <div class="controls">
        <span></span><button onclick="step('Up')">⬆️</button><span></span>
        <button onclick="step('Left')">⬅️</button><button onclick="step(null)">·</button><button onclick="step('Right')">➡️</button>
        <span></span><button onclick="step('Down')">⬇️</button><span></span>
    </div>
    <div class="misc">
        <button onclick="restart()">Restart</button>
        <label><input type="checkbox" id="auto" onchange="toggleAuto()"> auto-step</label>
    </div>
    <script>
        let speed = 10;
        let timer = null;

        function render(payload) {
            document.getElementById('frame').src = 'data:image/png;base64,' + payload.image;
            document.getElementById('caption').textContent = payload.caption;
            document.getElementById('message').textContent = payload.message || '';
            if (payload.speed !== speed) {
                speed = payload.speed;
                if (timer) { clearInterval(timer); timer = setInterval(() => step(null), 1000 / speed); }
            }
            if (!payload.running && timer) {
                clearInterval(timer);
                timer = null;
                document.getElementById('auto').checked = false;
            }
        }

        async function step(direction) {
            const res = await fetch('/api/step', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ direction: direction }),
            });
            render(await res.json());
        }

        async function restart() {
            await fetch('/api/restart', { method: 'POST' });
            await refresh();
        }

        async function refresh() {
            const res = await fetch('/api/state');
            render(await res.json());
        }

        function toggleAuto() {
            if (timer) { clearInterval(timer); timer = null; }
            if (document.getElementById('auto').checked) {
                timer = setInterval(() => step(null), 1000 / speed);
            }
        }

        refresh();
    </script>
</body>
</html>"#;

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub direction: Option<Direction>,
}

/// Run the HTTP server: the embedded page plus the JSON/PNG frame API.
pub async fn run_http_server(addr: &str, session: SharedSession) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/state", get(get_state))
        .route("/api/step", post(step))
        .route("/api/restart", post(restart))
        .route("/api/frame.png", get(frame_png))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(session);

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))
}

async fn index() -> Html<&'static str> {
    Html(WEB_UI_HTML)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn get_state(State(session): State<SharedSession>) -> Response {
    let session = match session.lock() {
        Ok(session) => session,
        Err(_) => return internal_error("session lock poisoned"),
    };
    match session.payload() {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn step(
    State(session): State<SharedSession>,
    Json(request): Json<StepRequest>,
) -> Response {
    let mut session = match session.lock() {
        Ok(session) => session,
        Err(_) => return internal_error("session lock poisoned"),
    };
    match session.step(request.direction) {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn restart(State(session): State<SharedSession>) -> Response {
    let mut session = match session.lock() {
        Ok(session) => session,
        Err(_) => return internal_error("session lock poisoned"),
    };
    if let Err(e) = session.restart(rand::random()) {
        return internal_error(e);
    }
    info!("session restarted");
    match session.payload() {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn frame_png(State(session): State<SharedSession>) -> Response {
    let session = match session.lock() {
        Ok(session) => session,
        Err(_) => return internal_error("session lock poisoned"),
    };
    match session.frame_png() {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error(err: impl ToString) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
