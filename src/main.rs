/// API сервер движка оптимального времени

use axum::{
    extract::State,
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber;

use snaplink_timing::{
    error::SchedulerError,
    stores::{ActivityEventStore, InMemoryActivityStore, InMemoryPreferenceStore, PreferenceStore},
    types::{
        ActivityEvent, OptimalTimesInput, OptimalTimesOutput, ScheduleDecision, ScheduleInput,
        SetPreferencesInput,
    },
    OptimalTimeScheduler,
};

#[derive(Clone)]
struct AppState {
    activity_store: std::sync::Arc<InMemoryActivityStore>,
    preference_store: std::sync::Arc<InMemoryPreferenceStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let state = AppState {
        activity_store: std::sync::Arc::new(InMemoryActivityStore::new()),
        preference_store: std::sync::Arc::new(InMemoryPreferenceStore::new()),
    };

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/activity", post(record_activity))
        .route("/api/preferences", post(set_preferences))
        .route("/api/optimal-times", post(optimal_times))
        .route("/api/schedule", post(schedule))
        .layer(cors)
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://0.0.0.0:8000");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "SnapLink Timing API (Rust)",
        "version": "0.1.0"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn record_activity(
    State(state): State<AppState>,
    Json(event): Json<ActivityEvent>,
) -> Json<serde_json::Value> {
    tracing::info!("Activity: user={} action={}", event.user_id, event.action);
    state.activity_store.record(event);
    Json(serde_json::json!({ "status": "recorded" }))
}

async fn set_preferences(
    State(state): State<AppState>,
    Json(input): Json<SetPreferencesInput>,
) -> Json<serde_json::Value> {
    tracing::info!(
        "Preferences: user={} windows={}",
        input.user_id,
        input.preferred_windows.len()
    );
    state
        .preference_store
        .set_preferred_windows(&input.user_id, input.preferred_windows);
    Json(serde_json::json!({ "status": "saved" }))
}

async fn optimal_times(
    State(state): State<AppState>,
    Json(input): Json<OptimalTimesInput>,
) -> Result<Json<OptimalTimesOutput>, SchedulerError> {
    let scheduler = OptimalTimeScheduler::new(input.config.unwrap_or_default())?;
    let events = state
        .activity_store
        .fetch_recent(&input.friend_ids, scheduler.config().max_events);
    tracing::info!(
        "Optimal times request: {} friends, {} events",
        input.friend_ids.len(),
        events.len()
    );

    let optimal_hours = scheduler.calculate_optimal_times(&events);
    Ok(Json(OptimalTimesOutput {
        optimal_hours,
        events_considered: events.len(),
    }))
}

async fn schedule(
    State(state): State<AppState>,
    Json(input): Json<ScheduleInput>,
) -> Result<Json<ScheduleDecision>, SchedulerError> {
    let scheduler = OptimalTimeScheduler::new(input.config.unwrap_or_default())?;
    let events = state
        .activity_store
        .fetch_recent(&input.friend_ids, scheduler.config().max_events);
    let windows = state.preference_store.preferred_windows(&input.user_id);
    tracing::info!(
        "Schedule request: user={}, {} events, {} windows",
        input.user_id,
        events.len(),
        windows.len()
    );

    let decision = scheduler.schedule_notification(&events, &windows, Utc::now())?;
    Ok(Json(decision))
}
