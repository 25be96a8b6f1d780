//! Throwaway chat-completion server for tests.

use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};

pub const MOCK_API_KEY: &str = "test-key";

#[derive(Clone, Copy)]
pub enum MockReply {
    /// Responds with the given status and raw body.
    Raw(StatusCode, &'static str),
    /// Wraps the string as `choices[0].message.content` in a 200 response.
    Content(&'static str),
    /// Sleeps before answering 200 with an empty object.
    Slow(Duration),
}

/// Binds 127.0.0.1:0, serves `reply` on `/v1/chat/completions`, and returns the full URL.
/// Requests without `Authorization: Bearer test-key` get a 401.
pub async fn spawn_chat_server(reply: MockReply) -> String {
    let handler = move |headers: HeaderMap| async move {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {MOCK_API_KEY}"))
            .unwrap_or(false);
        if !authorized {
            return (StatusCode::UNAUTHORIZED, String::from("{}"));
        }
        match reply {
            MockReply::Raw(status, body) => (status, body.to_string()),
            MockReply::Content(content) => {
                let body = serde_json::json!({
                    "choices": [{ "message": { "role": "assistant", "content": content } }],
                    "usage": { "prompt_tokens": 10, "completion_tokens": 20 }
                });
                (StatusCode::OK, body.to_string())
            }
            MockReply::Slow(delay) => {
                tokio::time::sleep(delay).await;
                (StatusCode::OK, String::from("{}"))
            }
        }
    };

    let app = Router::new().route("/v1/chat/completions", post(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}
