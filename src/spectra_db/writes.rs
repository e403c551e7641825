// FICHIER : src/spectra_db/writes.rs

//! Chemins d'écriture : fusion d'un champ unique dans une fiche
//! fluorophore, ajout en fin de séquence des configs instrument,
//! remplacement intégral des réglages.

use crate::spectra_db::{resolve, store, Collection, SpectraDbConfig};
use crate::utils::error::{AppError, Result};
use serde_json::{Number, Value};

/// Fusion-écriture du coefficient de luminosité : lit la fiche BRUTE
/// (aucune normalisation, les valeurs legacy imbriquées restent
/// intactes), pose la clé racine, réécrit la fiche entière.
/// Après une première écriture, une fiche legacy porte à la fois la
/// nouvelle valeur racine et l'ancienne valeur imbriquée : la racine
/// prime à toute lecture normalisée ultérieure.
pub async fn set_brightness(
    cfg: &SpectraDbConfig,
    id: &str,
    value: Number,
) -> Result<Number> {
    let stored = resolve::resolve_record_id(cfg, Collection::Dyes, id).await?;
    let mut doc = store::read_record(cfg, Collection::Dyes, &stored).await?;

    let Some(obj) = doc.as_object_mut() else {
        return Err(AppError::InvalidRequest(format!(
            "la fiche {stored} n'est pas un objet JSON"
        )));
    };
    obj.insert(
        "brightness_coefficient".to_string(),
        Value::Number(value.clone()),
    );

    store::write_record(cfg, Collection::Dyes, &stored, &doc).await?;
    Ok(value)
}

/// Ajout en fin de séquence, sans identifiant ni déduplication : deux
/// soumissions identiques produisent deux entrées. Seule la présence de
/// `name` et `filters` est validée ; l'existence des filtres référencés
/// ne l'est pas.
pub async fn append_instrument_config(cfg: &SpectraDbConfig, doc: Value) -> Result<()> {
    if doc.get("name").is_none() || doc.get("filters").is_none() {
        return Err(AppError::InvalidRequest("Invalid config".to_string()));
    }
    store::append_sequence(cfg, doc).await
}

pub async fn read_instrument_configs(cfg: &SpectraDbConfig) -> Result<Vec<Value>> {
    store::read_sequence(cfg).await
}

/// Remplacement intégral du document de réglages, aucun schéma imposé.
pub async fn replace_settings(cfg: &SpectraDbConfig, doc: &Value) -> Result<()> {
    store::write_singleton(cfg, doc).await
}

pub async fn read_settings(cfg: &SpectraDbConfig) -> Result<Value> {
    store::read_singleton(cfg).await
}
