//! `GET /stream`: one-shot Server-Sent Events push.
//!
//! Each connection waits the configured delay, then receives:
//!
//! ```text
//! event: metrics
//! data: {"type":"metrics_update","metrics":[...],"timestamp":"2025-06-01T12:00:05.000Z"}
//!
//! event: complete
//! data: {"status":"complete"}
//! ```
//!
//! and the response ends. If the query fails the error is logged and the
//! response ends with no events.

use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{
        IntoResponse,
        sse::{Event, Sse},
    },
};
use chrono::{SecondsFormat, Utc};
use futures::StreamExt;
use serde_json::json;
use services::metric_view::MetricView;
use std::convert::Infallible;
use util::push::{PushMessage, delayed_push};

pub const METRICS_EVENT: &str = "metrics";
pub const COMPLETE_EVENT: &str = "complete";

/// Builds the two messages sent after a successful query.
pub fn metric_messages(metrics: &[MetricView]) -> Result<Vec<PushMessage>, serde_json::Error> {
    let update = json!({
        "type": "metrics_update",
        "metrics": metrics,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    let complete = json!({ "status": "complete" });

    Ok(vec![
        PushMessage::new(METRICS_EVENT, serde_json::to_string(&update)?),
        PushMessage::new(COMPLETE_EVENT, serde_json::to_string(&complete)?),
    ])
}

pub async fn stream_metrics(State(app_state): State<AppState>) -> impl IntoResponse {
    let company = app_state.stream_company().to_owned();
    let metrics = app_state.metrics().clone();

    let messages = delayed_push(
        format!("stream:{company}"),
        app_state.stream_delay(),
        move || async move {
            let views = metrics
                .list_for_company(&company)
                .await
                .map_err(|e| e.to_string())?;
            metric_messages(&views).map_err(|e| e.to_string())
        },
    );

    let events = messages
        .map(|msg| Ok::<_, Infallible>(Event::default().event(msg.event).data(msg.data)));

    (
        [(
            HeaderName::from_static("x-accel-buffering"),
            HeaderValue::from_static("no"),
        )],
        Sse::new(events),
    )
}
