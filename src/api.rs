//! REST API: health check and per-tournament standings as JSON or CSV.
//!
//! Handlers fetch the tournament from Challonge, run the scoring engine and shape the
//! response. Errors are returned as `{ "error": message }` bodies.

use crate::challonge::{validate_tournament_key, ChallongeClient, FetchError};
use crate::error::StandingsError;
use crate::export::standings_csv_string;
use crate::models::{PlayerStats, Stage, Tournament};
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    get,
    http::{
        header::{HeaderName, HeaderValue, CONTENT_DISPOSITION},
        StatusCode,
    },
    middleware::Next,
    web::{self, Data, Path, Query},
    Error, HttpMessage, HttpRequest, HttpResponse, Responder,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Header carrying the request id on requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared handler state.
pub struct AppState {
    pub client: ChallongeClient,
    /// Used when a request has no `api_key` query parameter.
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(client: ChallongeClient, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }
}

#[derive(Clone, Debug)]
struct RequestId(String);

/// Middleware: reuse the caller's `x-request-id` or generate a UUID, expose it to handlers
/// and echo it on the response.
pub async fn request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.call(req).await?;
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    Ok(res)
}

fn request_id_of(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: tournament key (e.g. /api/tournaments/{key}/standings)
#[derive(Deserialize)]
struct TournamentPath {
    key: String,
}

#[derive(Deserialize)]
struct StandingsQuery {
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GroupSummary {
    group: String,
    completed_matches: usize,
}

#[derive(Serialize)]
struct TournamentSummary {
    id: u64,
    name: String,
    url: String,
    participants: usize,
    completed_group_matches: usize,
    completed_final_matches: usize,
    groups: Vec<GroupSummary>,
}

impl From<&Tournament> for TournamentSummary {
    fn from(t: &Tournament) -> Self {
        let mut per_group: BTreeMap<u64, usize> = BTreeMap::new();
        for m in t.matches.iter().filter(|m| m.is_complete()) {
            if let (Stage::Group, Some(gid)) = (m.stage(), m.group_id) {
                *per_group.entry(gid).or_insert(0) += 1;
            }
        }
        let groups = per_group
            .into_iter()
            .map(|(gid, completed_matches)| GroupSummary {
                group: t
                    .group_label(gid)
                    .map(str::to_string)
                    .unwrap_or_else(|| gid.to_string()),
                completed_matches,
            })
            .collect();
        let (completed_group_matches, completed_final_matches) = t.completed_match_counts();
        Self {
            id: t.id,
            name: t.name.clone(),
            url: t.url.clone(),
            participants: t.participants.len(),
            completed_group_matches,
            completed_final_matches,
            groups,
        }
    }
}

#[derive(Serialize)]
struct StandingsResponse {
    tournament: TournamentSummary,
    standings: Vec<PlayerStats>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-standings",
    })
}

/// Standings as JSON, with a short tournament summary.
#[get("/api/tournaments/{key}/standings")]
async fn api_standings(
    state: Data<AppState>,
    req: HttpRequest,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let request_id = request_id_of(&req);
    match load_standings(&state, &path.key, query.api_key.as_deref(), &request_id).await {
        Ok((tournament, standings)) => HttpResponse::Ok().json(StandingsResponse {
            tournament: TournamentSummary::from(&tournament),
            standings,
        }),
        Err(e) => error_response(&request_id, &e),
    }
}

/// Standings as a CSV download.
#[get("/api/tournaments/{key}/standings.csv")]
async fn api_standings_csv(
    state: Data<AppState>,
    req: HttpRequest,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let request_id = request_id_of(&req);
    let csv = load_standings(&state, &path.key, query.api_key.as_deref(), &request_id)
        .await
        .and_then(|(_, standings)| standings_csv_string(&standings).map_err(StandingsError::from));
    match csv {
        Ok(body) => {
            let filename = format!(
                "standings-{}-{}.csv",
                path.key,
                Utc::now().format("%Y%m%d")
            );
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(body)
        }
        Err(e) => error_response(&request_id, &e),
    }
}

/// Resolve the API key, fetch the tournament and score it.
async fn load_standings(
    state: &AppState,
    key: &str,
    api_key: Option<&str>,
    request_id: &str,
) -> Result<(Tournament, Vec<PlayerStats>), StandingsError> {
    validate_tournament_key(key)?;
    let api_key = api_key
        .filter(|k| !k.trim().is_empty())
        .or(state.api_key.as_deref())
        .ok_or(FetchError::MissingApiKey)?;

    log::info!("[{}] fetching tournament {}", request_id, key);
    let tournament = state.client.fetch_tournament(key, api_key).await?;
    let standings = tournament.standings();
    log::info!(
        "[{}] tournament {}: {} participants, {} matches, {} standings",
        request_id,
        key,
        tournament.participants.len(),
        tournament.matches.len(),
        standings.len()
    );
    Ok((tournament, standings))
}

/// HTTP status for a failed standings request. Any upstream failure other than 404 is a 502.
fn error_status(err: &StandingsError) -> StatusCode {
    match err {
        StandingsError::Fetch(FetchError::MissingApiKey | FetchError::InvalidKey(_)) => {
            StatusCode::BAD_REQUEST
        }
        StandingsError::Fetch(e) if e.is_not_found() => StatusCode::NOT_FOUND,
        StandingsError::Fetch(_) => StatusCode::BAD_GATEWAY,
        StandingsError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(request_id: &str, err: &StandingsError) -> HttpResponse {
    log::warn!("[{}] {}", request_id, err);
    HttpResponse::build(error_status(err)).json(serde_json::json!({ "error": err.to_string() }))
}

/// Register every route. State (`Data<AppState>`) is added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_standings)
        .service(api_standings_csv);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportError;

    fn status(status: u16) -> StandingsError {
        FetchError::Status {
            status,
            url: "https://api.challonge.com/v1/tournaments/x.json".to_string(),
        }
        .into()
    }

    #[test]
    fn upstream_not_found_is_not_found() {
        assert_eq!(error_status(&status(404)), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_upstream_statuses_are_bad_gateway() {
        for code in [401, 403, 429, 500, 503] {
            assert_eq!(error_status(&status(code)), StatusCode::BAD_GATEWAY, "{code}");
        }
    }

    #[test]
    fn request_errors_are_bad_request() {
        assert_eq!(
            error_status(&FetchError::MissingApiKey.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&FetchError::InvalidKey("a.b".to_string()).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn export_errors_are_internal() {
        let err = ExportError::Io(std::io::Error::other("disk full"));
        assert_eq!(
            error_status(&err.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
