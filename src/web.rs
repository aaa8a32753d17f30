use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use tracing::info;
use crate::error::ValidationError;
use crate::form::{timing_presets, AdFormat, GameFormat, ScheduleForm};
use crate::form::timing::TimingPreset;
use crate::schedule::{RoundResult, ScheduleResult};
use crate::session::Session;

// One shared session; schedules live only as long as the process
pub struct AppState {
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self { session: Mutex::new(session) }
    }
}

#[derive(Deserialize)]
pub struct AddPlayerRequest {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Serialize)]
pub struct PlayersResponse {
    players: Vec<String>,
}

#[derive(Serialize)]
pub struct FormatsResponse {
    game_formats: Vec<GameFormat>,
    ad_formats: Vec<AdFormat>,
    presets: Vec<TimingPreset>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    schedule: ScheduleResult,
    current_round: usize,
    current: Option<RoundResult>,
    upcoming: Option<RoundResult>,
    has_previous: bool,
    has_next: bool,
}

fn lock_session(state: &web::Data<AppState>) -> Result<MutexGuard<'_, Session>> {
    state
        .session
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Session state poisoned"))
}

fn validation_failure(err: ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "error": err.reason(),
    }))
}

fn schedule_response(session: &Session) -> HttpResponse {
    match session.last_result() {
        Some(result) => HttpResponse::Ok().json(ScheduleResponse {
            schedule: result.clone(),
            current_round: session.current_round_index(),
            current: session.current_round().cloned(),
            upcoming: session.upcoming_round().cloned(),
            has_previous: session.has_previous(),
            has_next: session.has_next(),
        }),
        None => HttpResponse::NotFound().json(serde_json::json!({"error": "Schedule not available"})),
    }
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

async fn get_formats() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(FormatsResponse {
        game_formats: GameFormat::ALL.to_vec(),
        ad_formats: AdFormat::ALL.to_vec(),
        presets: timing_presets(),
    }))
}

async fn get_players(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = lock_session(&state)?;
    Ok(HttpResponse::Ok().json(PlayersResponse {
        players: session.players().to_vec(),
    }))
}

async fn add_player(
    req: web::Json<AddPlayerRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    let name = req.name.as_deref().unwrap_or("");
    match session.add_player(name) {
        Ok(added) => {
            info!("Added player {}", added);
            Ok(HttpResponse::Ok().json(PlayersResponse {
                players: session.players().to_vec(),
            }))
        }
        Err(e) => Ok(validation_failure(e)),
    }
}

async fn remove_player(
    name: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    match session.remove_player(name.as_str()) {
        Ok(()) => {
            info!("Removed player {}", name.as_str());
            Ok(HttpResponse::Ok().json(PlayersResponse {
                players: session.players().to_vec(),
            }))
        }
        Err(e) => Ok(validation_failure(e)),
    }
}

async fn generate(
    form: web::Json<ScheduleForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    match session.generate(&form).map(|_| ()) {
        Ok(()) => Ok(schedule_response(&session)),
        Err(e) => Ok(validation_failure(e)),
    }
}

async fn regenerate(
    form: web::Json<ScheduleForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    match session.regenerate(&form).map(|_| ()) {
        Ok(()) => {
            info!("Regenerated with seed {}", session.seed());
            Ok(schedule_response(&session))
        }
        Err(e) => Ok(validation_failure(e)),
    }
}

async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = lock_session(&state)?;
    Ok(schedule_response(&session))
}

async fn next_round(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    session.focus_next();
    Ok(schedule_response(&session))
}

async fn previous_round(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut session = lock_session(&state)?;
    session.focus_previous();
    Ok(schedule_response(&session))
}

/// Registers every route on an app; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/formats", web::get().to(get_formats))
        .route("/api/players", web::get().to(get_players))
        .route("/api/players", web::post().to(add_player))
        .service(web::resource("/api/players/{name}").route(web::delete().to(remove_player)))
        .route("/api/generate", web::post().to(generate))
        .route("/api/regenerate", web::post().to(regenerate))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/schedule/next", web::post().to(next_round))
        .route("/api/schedule/previous", web::post().to(previous_round));
}

pub async fn start_server(bind: &str, port: u16, session: Session) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(session));

    info!("Binding to {}:{}", bind, port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((bind, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Session::new(42)))
    }

    fn singles_form() -> Value {
        serde_json::json!({
            "courts": 1,
            "match_format": "singles",
            "total_minutes": 60,
            "round_minutes": 20
        })
    }

    #[actix_web::test]
    async fn generate_returns_schedule() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(singles_form())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["schedule"]["seed"], 42);
        assert_eq!(body["schedule"]["rounds"].as_array().unwrap().len(), 3);
        assert_eq!(body["current_round"], 0);
        assert_eq!(body["current"]["round_number"], 1);
        assert_eq!(body["upcoming"]["round_number"], 2);
        assert_eq!(body["has_next"], true);
    }

    #[actix_web::test]
    async fn schedule_missing_before_generate() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/schedule").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn invalid_form_is_bad_request() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({
                "courts": 2,
                "match_format": "doubles",
                "total_minutes": 60,
                "round_minutes": 20
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Need at least 8 players.");
    }

    #[actix_web::test]
    async fn roster_edits_and_regenerate() {
        let data = state();
        let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/players")
            .set_json(serde_json::json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["players"].as_array().unwrap().len(), 6);
        assert_eq!(body["players"][5], "P6");

        let req = test::TestRequest::delete().uri("/api/players/P1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["players"][0], "P2");

        let req = test::TestRequest::post()
            .uri("/api/regenerate")
            .set_json(singles_form())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["schedule"]["seed"], 43);

        let req = test::TestRequest::post().uri("/api/schedule/next").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["current_round"], 1);
        assert_eq!(body["current"]["round_number"], 2);
        assert_eq!(body["upcoming"]["round_number"], 3);
        assert_eq!(body["has_previous"], true);

        let req = test::TestRequest::post().uri("/api/schedule/next").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["current"]["round_number"], 3);
        assert!(body["upcoming"].is_null());
        assert_eq!(body["has_next"], false);

        assert_eq!(data.session.lock().unwrap().seed(), 43);
    }

    #[actix_web::test]
    async fn formats_list_presets() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/formats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["presets"].as_array().unwrap().len(), 12);
        assert_eq!(body["game_formats"][1], "FIRST_TO_4");
    }
}
