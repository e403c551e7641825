// FICHIER : src/spectra_db/resolve.rs

//! Résolution d'identifiant : fait correspondre l'identifiant fourni par
//! le client à la fiche réellement stockée, en tolérant les différences
//! de casse.

use crate::spectra_db::{store, Collection, SpectraDbConfig};
use crate::utils::error::{AppError, Result};
use serde_json::Value;

/// Résolution en deux phases : test exact d'abord (chemin rapide, pas de
/// listing), puis balayage du listing trié pour le premier identifiant
/// dont la forme minuscule correspond. Le tri du listing rend le
/// départage déterministe si plusieurs identifiants se replient sur la
/// même forme.
pub async fn resolve_record_id(
    cfg: &SpectraDbConfig,
    collection: Collection,
    id: &str,
) -> Result<String> {
    if store::record_exists(cfg, collection, id).await {
        return Ok(id.to_string());
    }

    let ids = match store::list_record_ids(cfg, collection).await {
        Ok(ids) => ids,
        // Collection absente : aucun identifiant ne peut correspondre
        Err(AppError::Unavailable(_)) => Vec::new(),
        Err(e) => return Err(e),
    };

    let wanted = id.to_lowercase();
    for stored in ids {
        if stored.to_lowercase() == wanted {
            return Ok(stored);
        }
    }

    Err(AppError::NotFound(format!("{}/{id}", collection.label())))
}

/// Résout puis lit : le flux standard de toute lecture du service.
pub async fn resolve_and_read(
    cfg: &SpectraDbConfig,
    collection: Collection,
    id: &str,
) -> Result<Value> {
    let stored = resolve_record_id(cfg, collection, id).await?;
    store::read_record(cfg, collection, &stored).await
}

// =========================================================================
// TESTS UNITAIRES
// =========================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_exact_match_fast_path() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        store::write_record(&cfg, Collection::Dyes, "Alexa_488", &json!({}))
            .await
            .unwrap();

        let resolved = resolve_record_id(&cfg, Collection::Dyes, "Alexa_488")
            .await
            .unwrap();
        assert_eq!(resolved, "Alexa_488");
    }

    #[tokio::test]
    async fn test_case_insensitive_fallback() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        store::write_record(&cfg, Collection::Dyes, "Alexa_488", &json!({"name": "Alexa 488"}))
            .await
            .unwrap();

        // Toute variante de casse doit résoudre vers la même fiche
        for variant in ["alexa_488", "ALEXA_488", "aLeXa_488"] {
            let resolved = resolve_record_id(&cfg, Collection::Dyes, variant)
                .await
                .unwrap();
            assert_eq!(resolved, "Alexa_488");

            let doc = resolve_and_read(&cfg, Collection::Dyes, variant).await.unwrap();
            assert_eq!(doc["name"], "Alexa 488");
        }
    }

    #[tokio::test]
    async fn test_first_match_in_listing_order_wins() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        // Deux fiches qui se replient sur la même forme minuscule
        store::write_record(&cfg, Collection::Dyes, "FITC", &json!({"v": 1}))
            .await
            .unwrap();
        store::write_record(&cfg, Collection::Dyes, "Fitc", &json!({"v": 2}))
            .await
            .unwrap();

        // Le listing est trié : "FITC" < "Fitc", le premier gagne
        let resolved = resolve_record_id(&cfg, Collection::Dyes, "fitc")
            .await
            .unwrap();
        assert_eq!(resolved, "FITC");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        store::write_record(&cfg, Collection::Dyes, "fitc", &json!({}))
            .await
            .unwrap();

        let res = resolve_record_id(&cfg, Collection::Dyes, "dapi").await;
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_collection_is_not_found() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let res = resolve_record_id(&cfg, Collection::Cameras, "orca").await;
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }
}
