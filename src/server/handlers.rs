// FICHIER : src/server/handlers.rs

//! Handlers axum. Les formes de réponse (y compris les corps d'échec
//! historiques : `{}` pour un fluorophore absent, `[]` pour une caméra
//! absente) font partie du contrat avec le client de visualisation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::server::AppState;
use crate::spectra_db::{catalog, dye_schema, resolve, writes, Collection};
use crate::utils::error::AppError;

// --- FLUOROPHORES ---

pub async fn list_dyes(State(state): State<AppState>) -> Response {
    match catalog::list_dyes(&state.db).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => {
            error!(erreur = %e, "échec du listing des fluorophores");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response()
        }
    }
}

pub async fn get_dye(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match resolve::resolve_and_read(&state.db, Collection::Dyes, &id).await {
        Ok(doc) => Json(dye_schema::normalize(doc)).into_response(),
        Err(e) => {
            // Contrat : tout échec de lecture d'un fluorophore = 404 {}
            warn!(fiche = %id, erreur = %e, "fluorophore illisible");
            (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
        }
    }
}

pub async fn set_brightness(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    let Some(value) = payload
        .get("brightness_coefficient")
        .and_then(Value::as_number)
        .cloned()
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing brightness_coefficient"})),
        )
            .into_response();
    };

    match writes::set_brightness(&state.db, &id, value).await {
        Ok(written) => Json(json!({
            "success": true,
            "brightness_coefficient": written
        }))
        .into_response(),
        Err(e) => {
            error!(fiche = %id, erreur = %e, "échec d'écriture du coefficient de luminosité");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// --- FILTRES ---

pub async fn list_filters(State(state): State<AppState>) -> Response {
    match catalog::list_filters(&state.db).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => {
            error!(erreur = %e, "échec du listing des filtres");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response()
        }
    }
}

pub async fn get_filter(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match catalog::read_raw(&state.db, Collection::Filters, &id).await {
        Ok(doc) => Json(doc).into_response(),
        Err(AppError::NotFound(_)) | Err(AppError::Unavailable(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Spectra file {id}.json not found")})),
        )
            .into_response(),
        Err(e) => {
            error!(fiche = %id, erreur = %e, "échec de lecture du filtre");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
                .into_response()
        }
    }
}

// --- CAMÉRAS ---

pub async fn list_cameras(State(state): State<AppState>) -> Response {
    match catalog::list_cameras(&state.db).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => {
            error!(erreur = %e, "échec du listing des caméras");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response()
        }
    }
}

pub async fn get_camera(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match catalog::read_raw(&state.db, Collection::Cameras, &id).await {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => {
            // Contrat historique : corps `[]` pour une caméra absente
            warn!(fiche = %id, erreur = %e, "caméra illisible");
            (StatusCode::NOT_FOUND, Json(json!([]))).into_response()
        }
    }
}

// --- CONFIGS INSTRUMENT ---

pub async fn list_instrument_configs(State(state): State<AppState>) -> Response {
    match writes::read_instrument_configs(&state.db).await {
        Ok(configs) => Json(configs).into_response(),
        Err(e) => {
            error!(erreur = %e, "échec de lecture des configs instrument");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response()
        }
    }
}

pub async fn save_instrument_config(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    match writes::append_instrument_config(&state.db, payload).await {
        Ok(()) => Json(json!({"success": true})).into_response(),
        Err(AppError::InvalidRequest(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid config"})),
        )
            .into_response(),
        Err(e) => {
            error!(erreur = %e, "échec d'enregistrement de la config instrument");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// --- RÉGLAGES ---

pub async fn get_settings(State(state): State<AppState>) -> Response {
    match writes::read_settings(&state.db).await {
        Ok(doc) => Json(doc).into_response(),
        Err(e) => {
            warn!(erreur = %e, "réglages illisibles, renvoi d'un objet vide");
            Json(json!({})).into_response()
        }
    }
}

pub async fn save_settings(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    match writes::replace_settings(&state.db, &payload).await {
        Ok(()) => Json(json!({"status": "saved"})).into_response(),
        Err(e) => {
            error!(erreur = %e, "échec d'enregistrement des réglages");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
