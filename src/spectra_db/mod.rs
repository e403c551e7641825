// FICHIER : src/spectra_db/mod.rs

//! Couche de résolution et de normalisation des fiches de calibration.
//! Toute la logique de décision du service vit ici ; le serveur HTTP
//! n'est qu'un habillage fin au-dessus de ces opérations.

pub mod catalog;
pub mod dye_schema;
pub mod naming;
pub mod resolve;
pub mod store;
pub mod writes;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// --- COLLECTIONS ---

/// Les collections adressées par identifiant (un fichier `{id}.json` par
/// fiche). Les configs instrument et les réglages utilisateur ne sont pas
/// des collections au sens strict : un seul fichier chacun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Dyes,
    Filters,
    Cameras,
}

impl Collection {
    /// Nom du répertoire physique (hérité de la disposition historique).
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Dyes => "dye_spectra_data",
            Collection::Filters => "chroma_filter_spectra",
            Collection::Cameras => "cameras",
        }
    }

    /// Nom logique, utilisé dans les messages d'erreur et les logs.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Dyes => "dyes",
            Collection::Filters => "filters",
            Collection::Cameras => "cameras",
        }
    }
}

// --- CONFIGURATION ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectraDbConfig {
    pub data_root: PathBuf,
}

impl SpectraDbConfig {
    pub fn new(data_root: PathBuf) -> Self {
        Self { data_root }
    }

    /// Racine d'une collection : {data_root}/{dir_name}
    pub fn collection_root(&self, collection: Collection) -> PathBuf {
        self.data_root.join(collection.dir_name())
    }

    /// Fichier d'une fiche : {collection_root}/{id}.json
    pub fn record_path(&self, collection: Collection, id: &str) -> PathBuf {
        self.collection_root(collection).join(format!("{id}.json"))
    }

    /// Séquence ordonnée des configs instrument (append-only).
    pub fn instrument_configs_path(&self) -> PathBuf {
        self.data_root.join("instrument_configs.json")
    }

    /// Document singleton des réglages utilisateur.
    pub fn settings_path(&self) -> PathBuf {
        self.data_root.join("user_settings.json")
    }
}
