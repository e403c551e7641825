// FICHIER : src/spectra_db/catalog.rs

//! Listings `{id, name}` des collections. Une fiche illisible n'avorte
//! jamais le listing : elle apparaît sous son nom dérivé et l'incident
//! est logué.

use crate::spectra_db::dye_schema::DyeRecord;
use crate::spectra_db::{naming, resolve, store, Collection, SpectraDbConfig};
use crate::utils::error::{AppError, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
}

/// Collection absente = listing vide (décision unifiée, voir DESIGN.md).
async fn ids_or_empty(cfg: &SpectraDbConfig, collection: Collection) -> Result<Vec<String>> {
    match store::list_record_ids(cfg, collection).await {
        Ok(ids) => Ok(ids),
        Err(AppError::Unavailable(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Nom legacy imbriqué d'abord, puis nom racine, puis dérivation.
pub async fn list_dyes(cfg: &SpectraDbConfig) -> Result<Vec<RecordSummary>> {
    let ids = ids_or_empty(cfg, Collection::Dyes).await?;
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let name = match store::read_record(cfg, Collection::Dyes, &id).await {
            Ok(doc) => DyeRecord::classify(&doc).display_name(&id),
            Err(e) => {
                warn!(fiche = %id, erreur = %e, "fiche fluorophore illisible, nom dérivé de l'identifiant");
                naming::derive_display_name(&id)
            }
        };
        out.push(RecordSummary { id, name });
    }
    Ok(out)
}

/// Nom en fiche s'il est présent et non vide, sinon dérivation.
pub async fn list_filters(cfg: &SpectraDbConfig) -> Result<Vec<RecordSummary>> {
    let ids = ids_or_empty(cfg, Collection::Filters).await?;
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let name = match store::read_record(cfg, Collection::Filters, &id).await {
            Ok(doc) => doc
                .get("name")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| naming::derive_display_name(&id)),
            Err(e) => {
                warn!(fiche = %id, erreur = %e, "fiche filtre illisible, nom dérivé de l'identifiant");
                naming::derive_display_name(&id)
            }
        };
        out.push(RecordSummary { id, name });
    }
    Ok(out)
}

/// Les caméras n'ont pas de champ nom en fiche : l'identifiant sert de
/// nom d'affichage tel quel.
pub async fn list_cameras(cfg: &SpectraDbConfig) -> Result<Vec<RecordSummary>> {
    let ids = ids_or_empty(cfg, Collection::Cameras).await?;
    Ok(ids
        .into_iter()
        .map(|id| RecordSummary {
            name: id.clone(),
            id,
        })
        .collect())
}

/// Lecture d'une fiche filtre ou caméra : résolution puis passage brut.
pub async fn read_raw(
    cfg: &SpectraDbConfig,
    collection: Collection,
    id: &str,
) -> Result<Value> {
    resolve::resolve_and_read(cfg, collection, id).await
}
