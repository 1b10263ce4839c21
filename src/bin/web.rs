//! Single binary web server: REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (snapshot dir).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use padel_tournament_web::{
    standings_order, Format, JsonStorage, MatchId, PlayerId, Tournament, TournamentConfig,
    TournamentError, TournamentId, TournamentStore,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// Whole-app state: the tournament store plus its snapshot channel.
struct AppState {
    store: TournamentStore,
    storage: JsonStorage,
}

type State = Data<RwLock<AppState>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    format: Format,
    #[serde(default = "default_points_to_play")]
    points_to_play: u32,
    description: Option<String>,
    club: Option<String>,
    start_at: Option<String>,
    entrance_fee: Option<u32>,
    #[serde(default)]
    ranked: bool,
    #[serde(default)]
    court_booked: bool,
    config: Option<TournamentConfig>,
    courts: Option<u32>,
}

fn default_points_to_play() -> u32 {
    24
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct SetActiveBody {
    id: Option<TournamentId>,
}

#[derive(Deserialize)]
struct SetCourtsBody {
    courts: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreBody {
    team_1_score: u32,
    team_2_score: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id.
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: Uuid,
}

/// Path segments: tournament id, round number, match id.
#[derive(Deserialize)]
struct MatchScorePath {
    id: TournamentId,
    round_number: u32,
    match_id: MatchId,
}

/// One row of the leaderboard, names resolved for display.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StandingsEntry {
    rank: usize,
    player_id: PlayerId,
    name: String,
    points: f64,
    wins: u32,
    draws: u32,
    losses: u32,
    points_for: u32,
    points_against: u32,
}

/// Match card for the current round, team ids resolved to names.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchView {
    id: MatchId,
    court: u32,
    team_1: [String; 2],
    team_2: [String; 2],
    team_1_score: u32,
    team_2_score: u32,
    complete: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundView {
    round_number: u32,
    matches: Vec<MatchView>,
}

fn err_json(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn resolve_team(t: &Tournament, team: &[PlayerId; 2]) -> [String; 2] {
    [
        t.player_name(team[0]).unwrap_or("?").to_string(),
        t.player_name(team[1]).unwrap_or("?").to_string(),
    ]
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List all tournaments plus the active tournament id.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: State) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.store)
}

/// Create a new Draft tournament (returns it with id; it becomes active).
#[post("/api/tournaments")]
async fn api_create_tournament(state: State, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    let mut t = Tournament::new(body.name.trim(), body.format, body.points_to_play);
    t.description = body.description;
    t.club = body.club;
    t.start_at = body.start_at;
    t.entrance_fee = body.entrance_fee;
    t.ranked = body.ranked;
    t.court_booked = body.court_booked;
    if let Some(config) = body.config {
        t.config = Some(config);
    }
    if let Some(courts) = body.courts {
        // manual court count chosen up front
        let _ = t.set_courts(courts);
    }
    let id = g.store.create_tournament(t);
    g.storage.save(&g.store);
    HttpResponse::Ok().json(g.store.get(id))
}

/// Remove every tournament (fresh slate).
#[delete("/api/tournaments")]
async fn api_clear_tournaments(state: State) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.store.clear_all();
    g.storage.save(&g.store);
    HttpResponse::Ok().json(&g.store)
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.get(path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => err_json(TournamentError::TournamentNotFound),
    }
}

/// Point the app at a tournament (or none).
#[put("/api/active-tournament")]
async fn api_set_active(state: State, body: Json<SetActiveBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.set_active_tournament(body.id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(&g.store)
        }
        Err(e) => err_json(e),
    }
}

/// Add a player (tournament must be in Draft).
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: State,
    path: Path<TournamentPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.add_player(path.id, &body.name) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Remove a player by id (tournament must be in Draft).
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: State, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.remove_player(path.id, path.player_id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Replace the pending pairing/scoring config (Draft only).
#[put("/api/tournaments/{id}/config")]
async fn api_set_config(
    state: State,
    path: Path<TournamentPath>,
    body: Json<TournamentConfig>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.set_config(path.id, body.into_inner()) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Manually override the court count (Draft only; disables auto-sizing).
#[put("/api/tournaments/{id}/courts")]
async fn api_set_courts(
    state: State,
    path: Path<TournamentPath>,
    body: Json<SetCourtsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.set_courts(path.id, body.courts) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Start the tournament (Draft -> Active, round 1 generated).
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.start_tournament(path.id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Open the next round, paired from the current standings.
#[post("/api/tournaments/{id}/rounds/advance")]
async fn api_advance_round(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.advance_round(path.id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Regenerate the current round (discards its scores).
#[post("/api/tournaments/{id}/rounds/reshuffle")]
async fn api_reshuffle_round(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.reshuffle_current_round(path.id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Finish the tournament (terminal; idempotent).
#[post("/api/tournaments/{id}/finish")]
async fn api_finish_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.finish_tournament(path.id) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Record both scores for one match; standings are refolded from the ledger.
#[put("/api/tournaments/{id}/rounds/{round_number}/matches/{match_id}/score")]
async fn api_record_score(
    state: State,
    path: Path<MatchScorePath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.record_match_score(
        path.id,
        path.round_number,
        path.match_id,
        body.team_1_score,
        body.team_2_score,
    ) {
        Ok(()) => {
            g.storage.save(&g.store);
            HttpResponse::Ok().json(g.store.get(path.id))
        }
        Err(e) => err_json(e),
    }
}

/// Leaderboard: players in standings order, names resolved.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.store.get(path.id) else {
        return err_json(TournamentError::TournamentNotFound);
    };
    let mode = t.effective_config().scoring_mode;
    let entries: Vec<StandingsEntry> = standings_order(&t.players, mode)
        .into_iter()
        .enumerate()
        .map(|(i, p)| StandingsEntry {
            rank: i + 1,
            player_id: p.id,
            name: p.name,
            points: p.points,
            wins: p.wins,
            draws: p.draws,
            losses: p.losses,
            points_for: p.points_for,
            points_against: p.points_against,
        })
        .collect();
    HttpResponse::Ok().json(entries)
}

/// Match cards for the round currently being played.
#[get("/api/tournaments/{id}/rounds/current")]
async fn api_current_round(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.store.get(path.id) else {
        return err_json(TournamentError::TournamentNotFound);
    };
    let Some(round) = t.current_round_ref() else {
        return err_json(TournamentError::InvalidState);
    };
    let view = RoundView {
        round_number: round.round_number,
        matches: round
            .matches
            .iter()
            .map(|m| MatchView {
                id: m.id,
                court: m.court,
                team_1: resolve_team(t, &m.team_1),
                team_2: resolve_team(t, &m.team_2),
                team_1_score: m.team_1_score,
                team_2_score: m.team_2_score,
                complete: m.is_complete(t.points_to_play),
            })
            .collect(),
    };
    HttpResponse::Ok().json(view)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let bind = (host.as_str(), port);

    let storage = JsonStorage::in_dir(&data_dir);
    let store = match storage.load() {
        Some(store) => {
            log::info!(
                "Hydrated {} tournament(s) from {}",
                store.tournaments().len(),
                storage.path().display()
            );
            store
        }
        None => TournamentStore::new(),
    };

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    let state = Data::new(RwLock::new(AppState { store, storage }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_clear_tournaments)
            .service(api_get_tournament)
            .service(api_set_active)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_set_config)
            .service(api_set_courts)
            .service(api_start_tournament)
            .service(api_advance_round)
            .service(api_reshuffle_round)
            .service(api_finish_tournament)
            .service(api_record_score)
            .service(api_standings)
            .service(api_current_round)
    })
    .bind(bind)?
    .run()
    .await
}
