//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use soulcore_domain::{CharacterId, CharacterRecord};
use soulcore_shared::{
    rank_table, DamageRequest, DamageResponse, ErrorResponse, ExportQuery, RankDiceEntry,
    RulesResponse, SheetResponse, ValidationError,
};

use crate::app::App;
use crate::use_cases::character::CharacterError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/rules", get(get_rules))
        .route("/api/ranks", get(list_ranks))
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route("/api/characters/import", post(import_character))
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/api/characters/{id}/sheet", get(get_sheet))
        .route("/api/characters/{id}/damage", post(apply_damage))
        .route("/api/characters/{id}/export", get(export_character))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Rules
// =============================================================================

async fn get_rules(State(app): State<Arc<App>>) -> Json<RulesResponse> {
    Json(RulesResponse::new(app.system.config()))
}

async fn list_ranks() -> Json<Vec<RankDiceEntry>> {
    Json(rank_table())
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<CharacterRecord>>, ApiError> {
    let characters = app.use_cases.character.ops.list().await?;
    Ok(Json(characters))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let character = app.use_cases.character.ops.get(parse_id(&id)?).await?;
    Ok(Json(character))
}

async fn create_character(
    State(app): State<Arc<App>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let Json(raw) = body.map_err(ApiError::from_json_rejection)?;
    let character = app.use_cases.character.ops.create(&raw).await?;
    Ok(Json(character))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = parse_id(&id)?;
    let Json(raw) = body.map_err(ApiError::from_json_rejection)?;
    let character = app.use_cases.character.ops.update(id, &raw).await?;
    Ok(Json(character))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.character.ops.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<SheetResponse>, ApiError> {
    let sheet = app.use_cases.character.ops.sheet(parse_id(&id)?).await?;
    Ok(Json(sheet))
}

async fn apply_damage(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<DamageRequest>, JsonRejection>,
) -> Result<Json<DamageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body.map_err(|rejection| {
        ApiError::BadRequest(
            ErrorResponse::new("Invalid damage request").with_details(rejection.body_text()),
        )
    })?;
    let response = app
        .use_cases
        .character
        .damage
        .execute(id, request.incoming)
        .await?;
    Ok(Json(response))
}

// =============================================================================
// Import / Export
// =============================================================================

async fn import_character(
    State(app): State<Arc<App>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let Json(raw) = body.map_err(ApiError::from_json_rejection)?;
    let character = app.use_cases.character.transfer.import(&raw).await?;
    Ok(Json(character))
}

async fn export_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let Query(query) = query.map_err(|rejection| {
        ApiError::BadRequest(
            ErrorResponse::new("Invalid export format").with_details(rejection.body_text()),
        )
    })?;

    let exported = app
        .use_cases
        .character
        .transfer
        .export(id, query.format)
        .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        exported.file_name
    ))
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_DISPOSITION, disposition)],
        Json(exported.document),
    )
        .into_response())
}

fn parse_id(raw: &str) -> Result<CharacterId, ApiError> {
    raw.parse::<CharacterId>()
        .map_err(|_| ApiError::BadRequest(ErrorResponse::new("Invalid character id")))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(ErrorResponse),
    Internal(String),
}

impl ApiError {
    const INVALID_CHARACTER_DATA: &'static str = "Invalid character data";

    fn from_json_rejection(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(
            ErrorResponse::new(Self::INVALID_CHARACTER_DATA).with_details(rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Character not found")),
            )
                .into_response(),
            ApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(
            ErrorResponse::new(Self::INVALID_CHARACTER_DATA).with_details(e.to_string()),
        )
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        match e {
            CharacterError::NotFound(_) => ApiError::NotFound,
            CharacterError::Validation(e) => e.into(),
            CharacterError::Serialization(e) => ApiError::Internal(e.to_string()),
            CharacterError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use serde_json::json;
    use soulcore_domain::{
        CharacterSheet, EquipmentEntry, HitPointPolicy, ProficiencyLevel, RangePolicy,
        RuleSystemConfig, SkillName, SoulCoreSystem,
    };
    use tower::ServiceExt;

    use crate::infrastructure::memory_store::InMemoryCharacterStore;

    fn router_with(config: RuleSystemConfig) -> Router {
        let app = App::new(
            Arc::new(InMemoryCharacterStore::new()),
            SoulCoreSystem::new(config),
        );
        routes().with_state(Arc::new(app))
    }

    fn router() -> Router {
        router_with(RuleSystemConfig::new(HitPointPolicy::BodyPlusEndurance))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Response) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        (response.status(), response)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn call(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, response) = send(router, method, uri, body).await;
        if status == StatusCode::NO_CONTENT {
            return (status, Value::Null);
        }
        (status, json_body(response).await)
    }

    fn sheet_json(sheet: &CharacterSheet) -> Value {
        serde_json::to_value(sheet).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok_text() {
        let router = router();
        for uri in ["/", "/api/health"] {
            let (status, response) = send(&router, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"OK");
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let router = router();

        let (status, created) = call(
            &router,
            Method::POST,
            "/api/characters",
            Some(sheet_json(&CharacterSheet::new("Ash"))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 1);

        let (status, listed) = call(&router, Method::GET, "/api/characters", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let mut changed = sheet_json(&CharacterSheet::new("Ash").with_hp(20, 50));
        changed["id"] = json!(77);
        let (status, updated) =
            call(&router, Method::PUT, "/api/characters/1", Some(changed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["currentHp"], 20);

        let (status, fetched) = call(&router, Method::GET, "/api/characters/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, updated);

        let (status, _) = call(&router, Method::DELETE, "/api/characters/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = call(&router, Method::GET, "/api/characters/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Character not found" }));
    }

    #[tokio::test]
    async fn unknown_ids_are_404_and_bad_ids_are_400() {
        let router = router();
        let body = sheet_json(&CharacterSheet::new("Ghost"));

        let (status, _) = call(&router, Method::PUT, "/api/characters/5", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&router, Method::DELETE, "/api/characters/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&router, Method::GET, "/api/characters/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid character id");
    }

    #[tokio::test]
    async fn invalid_bodies_are_400_with_a_message() {
        let router = router();

        let (status, body) = call(
            &router,
            Method::POST,
            "/api/characters",
            Some(json!({ "name": "Half" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid character data");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .starts_with("Missing field"));

        let (status, response) = send(&router, Method::POST, "/api/characters", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "Invalid character data");
    }

    #[tokio::test]
    async fn bad_body_is_rejected_before_the_id_lookup() {
        let router = router();
        let (status, body) = call(
            &router,
            Method::PUT,
            "/api/characters/99",
            Some(json!({ "name": "Half" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid character data");
    }

    #[tokio::test]
    async fn extreme_scores_are_stored_and_derived() {
        let router = router();
        let sheet = CharacterSheet::new("Big")
            .with_attributes(i32::MAX, i32::MIN, 10)
            .with_skill_base(i32::MAX)
            .with_armor(EquipmentEntry::new("Wall", i32::MAX));
        let (status, _) =
            call(&router, Method::POST, "/api/characters", Some(sheet_json(&sheet))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&router, Method::GET, "/api/characters/1/sheet", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["derived"]["computedMaxHp"], i32::MAX);

        let (status, body) = call(
            &router,
            Method::POST,
            "/api/characters/1/damage",
            Some(json!({ "incoming": i32::MAX })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["damage"]["mitigation"]["totalArmor"], i32::MAX);
    }

    #[tokio::test]
    async fn strict_ranges_reject_out_of_range_records() {
        let router = router_with(
            RuleSystemConfig::new(HitPointPolicy::BodyOnly).with_ranges(RangePolicy::Strict),
        );
        let sheet = CharacterSheet::new("Overflow").with_hp(60, 50);
        let (status, _) =
            call(&router, Method::POST, "/api/characters", Some(sheet_json(&sheet))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sheet_reports_derived_values() {
        let router = router();
        let sheet = CharacterSheet::new("Ash")
            .with_attributes(14, 10, 10)
            .with_skill_base(2)
            .with_skill(SkillName::Strength, ProficiencyLevel::Mastered, 1);
        call(&router, Method::POST, "/api/characters", Some(sheet_json(&sheet))).await;

        let (status, body) = call(&router, Method::GET, "/api/characters/1/sheet", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["character"]["name"], "Ash");
        assert_eq!(body["derived"]["skills"][0]["skill"], "strength");
        assert_eq!(body["derived"]["skills"][0]["bonus"], 9);
        assert_eq!(body["derived"]["skills"][0]["display"], "+9");
        // endurance rating 2 + 2 * 1 = 4; 14 * 5 + 4 * 2
        assert_eq!(body["derived"]["computedMaxHp"], 78);
    }

    #[tokio::test]
    async fn damage_updates_stored_hit_points() {
        let router = router();
        let sheet = CharacterSheet::new("Tank")
            .with_skill_base(0)
            .with_armor(EquipmentEntry::new("Plate", 50))
            .with_hp(100, 100);
        call(&router, Method::POST, "/api/characters", Some(sheet_json(&sheet))).await;

        let (status, body) = call(
            &router,
            Method::POST,
            "/api/characters/1/damage",
            Some(json!({ "incoming": 100 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["damage"]["mitigation"]["hpDelta"], 67);
        assert_eq!(body["damage"]["mitigation"]["branch"], "heavy");
        assert_eq!(body["character"]["currentHp"], 33);

        let (_, stored) = call(&router, Method::GET, "/api/characters/1", None).await;
        assert_eq!(stored["currentHp"], 33);

        let (status, _) = call(
            &router,
            Method::POST,
            "/api/characters/1/damage",
            Some(json!({ "incoming": "lots" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn export_sets_an_attachment_file_name() {
        let router = router();
        call(
            &router,
            Method::POST,
            "/api/characters",
            Some(sheet_json(&CharacterSheet::new("Mira"))),
        )
        .await;

        let (status, response) =
            send(&router, Method::GET, "/api/characters/1/export", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Mira.json\""
        );
        let document = json_body(response).await;
        assert_eq!(document["name"], "Mira");

        let (status, legacy) = call(
            &router,
            Method::GET,
            "/api/characters/1/export?format=legacy",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(legacy["dicevalue"], "1d4");
    }

    #[tokio::test]
    async fn import_accepts_canonical_and_legacy_documents() {
        let router = router();
        call(
            &router,
            Method::POST,
            "/api/characters",
            Some(sheet_json(&CharacterSheet::new("Mira"))),
        )
        .await;
        let (_, legacy) = call(
            &router,
            Method::GET,
            "/api/characters/1/export?format=legacy",
            None,
        )
        .await;

        let (status, imported) =
            call(&router, Method::POST, "/api/characters/import", Some(legacy.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(imported["id"], 2);
        assert_eq!(imported["name"], "Mira");

        let mut mismatched = legacy;
        mismatched["wisdomBase"] = json!(6);
        let (status, body) =
            call(&router, Method::POST, "/api/characters/import", Some(mismatched)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"].as_str().unwrap().contains("wisdomBase"));
    }

    #[tokio::test]
    async fn rules_and_ranks_describe_the_deployment() {
        let router = router();
        let (status, rules) = call(&router, Method::GET, "/api/rules", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rules["hitPoints"]["version"], "bodyPlusEndurance");
        assert_eq!(rules["damageRounding"], "ceiling");

        let (status, ranks) = call(&router, Method::GET, "/api/ranks", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ranks[5], json!({ "rank": "Sacred", "dice": "1d20" }));
    }
}
