// FICHIER : src/spectra_db/store.rs

//! Primitives du magasin de fiches : énumération, lecture et écriture de
//! documents JSON dans une collection. Uniquement persistance et I/O,
//! pas de normalisation ici.

use crate::spectra_db::{Collection, SpectraDbConfig};
use crate::utils::error::{AppError, Result};
use crate::utils::{fs, json};
use serde_json::Value;

/// Refuse les identifiants qui sortiraient du répertoire de la collection.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

/// Énumère les identifiants de la collection (triés pour rendre la
/// résolution du premier match déterministe).
/// Échoue avec `Unavailable` si le répertoire n'existe pas ; les listings
/// appelants traitent ce cas comme une collection vide.
pub async fn list_record_ids(cfg: &SpectraDbConfig, collection: Collection) -> Result<Vec<String>> {
    let root = cfg.collection_root(collection);
    if !fs::exists(&root).await {
        return Err(AppError::Unavailable(format!(
            "répertoire absent pour {}",
            collection.label()
        )));
    }

    let mut out = Vec::new();
    let mut entries = fs::read_dir(&root).await?;
    while let Some(e) = entries.next_entry().await.map_err(AppError::Io)? {
        let p = e.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json") {
            if let Some(stem) = p.file_stem().and_then(|s| s.to_str()) {
                out.push(stem.to_string());
            }
        }
    }
    out.sort();
    Ok(out)
}

/// Test d'existence exact (sensible à la casse du système de fichiers).
pub async fn record_exists(cfg: &SpectraDbConfig, collection: Collection, id: &str) -> bool {
    is_safe_id(id) && fs::exists(&cfg.record_path(collection, id)).await
}

/// Lit une fiche par son identifiant résolu. `NotFound` si absente.
pub async fn read_record(
    cfg: &SpectraDbConfig,
    collection: Collection,
    id: &str,
) -> Result<Value> {
    if !is_safe_id(id) {
        return Err(AppError::NotFound(format!("{}/{id}", collection.label())));
    }
    let path = cfg.record_path(collection, id);
    if !fs::exists(&path).await {
        return Err(AppError::NotFound(format!("{}/{id}", collection.label())));
    }
    let content = fs::read_to_string(&path).await?;
    json::parse(&content)
}

/// Écrase entièrement une fiche (écriture atomique : tmp + rename).
pub async fn write_record(
    cfg: &SpectraDbConfig,
    collection: Collection,
    id: &str,
    doc: &Value,
) -> Result<()> {
    if !is_safe_id(id) {
        return Err(AppError::InvalidRequest(format!(
            "identifiant invalide : {id}"
        )));
    }
    let path = cfg.record_path(collection, id);
    fs::write_json_atomic(&path, doc).await
}

// --- SÉQUENCE DES CONFIGS INSTRUMENT ---

/// Fichier absent = séquence vide, jamais une erreur.
pub async fn read_sequence(cfg: &SpectraDbConfig) -> Result<Vec<Value>> {
    let path = cfg.instrument_configs_path();
    if !fs::exists(&path).await {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).await?;
    json::parse(&content)
}

/// Lit la séquence complète, ajoute en fin, réécrit le tout.
/// Séquence lecture-modification-écriture non protégée : deux écrivains
/// concurrents peuvent perdre une entrée (usage mono-utilisateur assumé).
pub async fn append_sequence(cfg: &SpectraDbConfig, doc: Value) -> Result<()> {
    let mut seq = read_sequence(cfg).await?;
    seq.push(doc);
    fs::write_json_atomic(&cfg.instrument_configs_path(), &seq).await
}

// --- SINGLETON DES RÉGLAGES ---

/// Fichier absent = objet vide.
pub async fn read_singleton(cfg: &SpectraDbConfig) -> Result<Value> {
    let path = cfg.settings_path();
    if !fs::exists(&path).await {
        return Ok(json::json!({}));
    }
    let content = fs::read_to_string(&path).await?;
    json::parse(&content)
}

/// Remplacement intégral, dernier écrivain gagnant. Aucune fusion.
pub async fn write_singleton(cfg: &SpectraDbConfig, doc: &Value) -> Result<()> {
    fs::write_json_atomic(&cfg.settings_path(), doc).await
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
    async fn test_record_crud() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let doc = json!({"name": "FITC", "brightness_coefficient": 0.9});
        write_record(&cfg, Collection::Dyes, "fitc", &doc)
            .await
            .unwrap();

        let read = read_record(&cfg, Collection::Dyes, "fitc").await.unwrap();
        assert_eq!(read["name"], "FITC");

        let ids = list_record_ids(&cfg, Collection::Dyes).await.unwrap();
        assert_eq!(ids, vec!["fitc"]);
    }

    #[tokio::test]
    async fn test_list_sorted_and_json_only() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        for id in ["Zeta", "alpha", "Mu"] {
            write_record(&cfg, Collection::Filters, id, &json!({}))
                .await
                .unwrap();
        }
        // Un fichier non-JSON ne doit pas apparaître dans le listing
        std::fs::write(
            cfg.collection_root(Collection::Filters).join("notes.txt"),
            "x",
        )
        .unwrap();

        let ids = list_record_ids(&cfg, Collection::Filters).await.unwrap();
        assert_eq!(ids, vec!["Mu", "Zeta", "alpha"]);
    }

    #[tokio::test]
    async fn test_list_missing_collection_is_unavailable() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let res = list_record_ids(&cfg, Collection::Cameras).await;
        assert!(matches!(res, Err(AppError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_read_missing_record_is_not_found() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let res = read_record(&cfg, Collection::Dyes, "inconnu").await;
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unsafe_id_rejected() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let res = read_record(&cfg, Collection::Dyes, "../secret").await;
        assert!(matches!(res, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_append_sequence_twice_grows_by_two() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        let config = json!({"name": "Confocal A", "filters": ["FF01-520"]});
        append_sequence(&cfg, config.clone()).await.unwrap();
        append_sequence(&cfg, config).await.unwrap();

        // Deux soumissions identiques = deux entrées (pas de déduplication)
        let seq = read_sequence(&cfg).await.unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], seq[1]);
    }

    #[tokio::test]
    async fn test_singleton_full_replace() {
        let dir = tempdir().unwrap();
        let cfg = SpectraDbConfig::new(dir.path().to_path_buf());

        assert_eq!(read_singleton(&cfg).await.unwrap(), json!({}));

        write_singleton(&cfg, &json!({"theme": "dark", "overlay": true}))
            .await
            .unwrap();
        write_singleton(&cfg, &json!({"theme": "light"})).await.unwrap();

        // Remplacement intégral : aucune trace de l'ancien document
        let settings = read_singleton(&cfg).await.unwrap();
        assert_eq!(settings, json!({"theme": "light"}));
    }
}
