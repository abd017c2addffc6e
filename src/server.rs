//!
//! studiosite HTTP server
//! ----------------------
//! This module defines the Axum-based HTTP API for the studio site.
//!
//! Responsibilities:
//! - Login/logout endpoints backed by the `identity` module, with a simple
//!   session cookie marking the logged-in browser.
//! - Public content endpoints for the catalog, newsroom, team and contact
//!   pages, delegating to the in-memory collections.
//! - The gated dashboard surface: reachability and render variant come from
//!   the access gate, editing goes through the `can_mutate` capability.
//! - Startup inventory logs for the seeded collections.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::content::{ArticleDraft, ContactMessage, GameDraft, StudioContent, TeamMemberDraft, CATEGORIES};
use crate::error::{AppError, AppResult};
use crate::identity::{
    select_dashboard, Access, AllowListDirectory, FileSessionStore, SessionManager, ViewContext,
};

const SESSION_COOKIE: &str = "studio_session";

/// Shared server state injected into all handlers.
///
/// Holds the session manager (owner of the single current session) and the
/// seeded content collections. Handlers consult the session manager for
/// "who is logged in" and the access gate for what that session may see.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub content: Arc<StudioContent>,
}

fn log_startup_config(http_port: u16, data_root: &str) {
    let cwd = std::env::current_dir().ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    info!(
        target: "startup",
        "studiosite starting: cwd={:?}, http_port={}, data_root='{}', RUST_LOG={:?}",
        cwd, http_port, data_root, rust_log
    );
}

/// Log the seeded collection inventory on startup.
fn log_seeded_content(content: &StudioContent) {
    info!(
        target: "startup",
        "seeded content: {} games, {} articles, {} team members",
        content.games.len(),
        content.news.len(),
        content.team.len()
    );
}

/// Start the studio site HTTP server bound to the given port.
///
/// This sets up the durable session store under the data root, hydrates any
/// persisted session, seeds the content collections and mounts all routes.
pub async fn run_with_port(http_port: u16, data_root: &str) -> anyhow::Result<()> {
    log_startup_config(http_port, data_root);

    std::fs::create_dir_all(data_root)
        .with_context(|| format!("Failed to create or access data root: {}", data_root))?;

    let directory = Arc::new(AllowListDirectory::studio_accounts());
    let store = Arc::new(FileSessionStore::new(data_root));
    let sessions = Arc::new(SessionManager::new(directory, store));
    if let Some(user) = sessions.current_user() {
        info!(target: "startup", "restored session for {} ({:?})", user.email, user.role);
    }

    let content = Arc::new(StudioContent::seeded());
    log_seeded_content(&content);

    let app_state = AppState { sessions, content };

    let app = Router::new()
        .route("/", get(overview))
        .route("/games", get(list_games))
        .route("/news", get(list_news))
        .route("/team", get(list_team))
        .route("/contact", post(contact))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/games", post(create_game))
        .route("/dashboard/games/{id}", put(update_game).delete(delete_game))
        .route("/dashboard/news", post(create_article))
        .route("/dashboard/news/{id}", put(update_article).delete(delete_article))
        .route("/dashboard/team", post(create_member))
        .route("/dashboard/team/{id}", put(update_member).delete(delete_member))
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", http_port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Convenience entry point using the default port (8787) and data root "data".
pub async fn run() -> anyhow::Result<()> {
    run_with_port(8787, "data").await
}

fn new_session_id() -> String {
    let mut bytes = [0u8; 16];
    let _ = getrandom::getrandom(&mut bytes);
    let mut sid = String::with_capacity(32);
    use std::fmt::Write as _;
    for b in &bytes {
        let _ = write!(&mut sid, "{:02x}", b);
    }
    sid
}

fn set_session_cookie(sid: &str) -> HeaderValue {
    // HttpOnly cookie scoped to path / with SameSite=Strict
    HeaderValue::from_str(&format!("{}={}; HttpOnly; SameSite=Strict; Path=/", SESSION_COOKIE, sid))
        .unwrap_or(HeaderValue::from_static(""))
}

fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Strict; Path=/",
        SESSION_COOKIE
    ))
    .unwrap_or(HeaderValue::from_static(""))
}

/// Gate a dashboard request: anonymous sessions are told to go to the login
/// route instead of receiving protected content.
fn require_session(state: &AppState) -> AppResult<ViewContext> {
    match Access::of(state.sessions.current_user()) {
        Access::RedirectToLogin => Err(AppError::auth("login_required", "redirect to /login")),
        Access::Granted(ctx) => Ok(ctx),
    }
}

/// Gate a mutating dashboard request on the `can_mutate` capability.
fn require_editor(state: &AppState) -> AppResult<ViewContext> {
    let ctx = require_session(state)?;
    if !ctx.can_mutate {
        return Err(AppError::forbidden("readonly", "this account has read-only access"));
    }
    Ok(ctx)
}

// --- public site ---

async fn overview(State(state): State<AppState>) -> impl IntoResponse {
    let games = state.content.games.list();
    let articles = state.content.news.list();
    let featured: Vec<_> = games.into_iter().take(3).collect();
    let latest: Vec<_> = articles.into_iter().take(2).collect();
    Json(json!({
        "status": "ok",
        "studio": "GameStudio",
        "featured_games": featured,
        "latest_articles": latest,
        "stats": state.content.stats(),
    }))
}

#[derive(Debug, Deserialize, Default)]
struct CatalogQuery {
    search: Option<String>,
    category: Option<String>,
}

async fn list_games(State(state): State<AppState>, Query(q): Query<CatalogQuery>) -> impl IntoResponse {
    let games = state.content.games.filter(q.search.as_deref(), q.category.as_deref());
    Json(json!({
        "status": "ok",
        "count": games.len(),
        "categories": CATEGORIES,
        "games": games,
    }))
}

#[derive(Debug, Deserialize, Default)]
struct NewsQuery {
    search: Option<String>,
}

async fn list_news(State(state): State<AppState>, Query(q): Query<NewsQuery>) -> impl IntoResponse {
    let articles = state.content.news.search(q.search.as_deref());
    Json(json!({ "status": "ok", "count": articles.len(), "articles": articles }))
}

async fn list_team(State(state): State<AppState>) -> impl IntoResponse {
    let members = state.content.team.list();
    Json(json!({ "status": "ok", "count": members.len(), "members": members }))
}

async fn contact(Json(message): Json<ContactMessage>) -> AppResult<Json<serde_json::Value>> {
    message.validate()?;
    // No mailbox behind the mock; acknowledge and log.
    info!("contact message from {} <{}>: {}", message.name, message.email, message.subject);
    Ok(Json(json!({ "status": "ok", "message": "Message envoyé !" })))
}

// --- authentication ---

#[derive(Debug, Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}

async fn login(State(state): State<AppState>, Json(payload): Json<LoginPayload>) -> impl IntoResponse {
    if state.sessions.login(&payload.email, &payload.password).await {
        let mut headers = HeaderMap::new();
        headers.insert("Set-Cookie", set_session_cookie(&new_session_id()));
        let user = state.sessions.current_user();
        (StatusCode::OK, headers, Json(json!({ "status": "ok", "user": user })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            HeaderMap::new(),
            Json(json!({ "status": "unauthorized", "error": "Email ou mot de passe incorrect" })),
        )
    }
}

async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.sessions.logout();
    let mut headers = HeaderMap::new();
    headers.insert("Set-Cookie", clear_session_cookie());
    (StatusCode::OK, headers, Json(json!({ "status": "ok" })))
}

async fn session(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "user": state.sessions.current_user(),
        "loading": state.sessions.is_loading(),
    }))
}

// --- dashboard ---

async fn dashboard(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let ctx = require_session(&state)?;
    let view = select_dashboard(&ctx, &state.content);
    Ok(Json(json!({
        "status": "ok",
        "user": ctx.user,
        "can_mutate": ctx.can_mutate,
        "dashboard": view,
    })))
}

async fn create_game(
    State(state): State<AppState>,
    Json(draft): Json<GameDraft>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state)?;
    let game = state.content.games.add(draft)?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "ok", "game": game }))))
}

async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<GameDraft>,
) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    let game = state.content.games.update(&id, draft)?;
    Ok(Json(json!({ "status": "ok", "game": game })))
}

async fn delete_game(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    state.content.games.remove(&id)?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn create_article(
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state)?;
    let article = state.content.news.add(draft)?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "ok", "article": article }))))
}

async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ArticleDraft>,
) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    let article = state.content.news.update(&id, draft)?;
    Ok(Json(json!({ "status": "ok", "article": article })))
}

async fn delete_article(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    state.content.news.remove(&id)?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn create_member(
    State(state): State<AppState>,
    Json(draft): Json<TeamMemberDraft>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state)?;
    let member = state.content.team.add(draft)?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "ok", "member": member }))))
}

async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<TeamMemberDraft>,
) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    let member = state.content.team.update(&id, draft)?;
    Ok(Json(json!({ "status": "ok", "member": member })))
}

async fn delete_member(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state)?;
    state.content.team.remove(&id)?;
    Ok(Json(json!({ "status": "ok" })))
}
