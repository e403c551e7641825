// FICHIER : src/utils/error.rs

use serde::Serialize;
use std::io;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité des couches hautes) ---
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

// --- GESTION D'ERREUR STRICTE ---

/// Type de résultat standard pour l'application lumispec.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs de l'application.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    /// Identifiant inconnu après résolution (insensible à la casse).
    #[error("Introuvable : {0}")]
    NotFound(String),

    /// Le répertoire de la collection n'existe pas. Les appelants des
    /// listings doivent traiter ce cas comme une collection vide.
    #[error("Collection indisponible : {0}")]
    Unavailable(String),

    /// Champ requis manquant ou forme invalide dans une requête d'écriture.
    #[error("Requête invalide : {0}")]
    InvalidRequest(String),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

// Implémentation manuelle de Serialize pour renvoyer l'erreur au client
// dans les corps JSON ({"error": ...}).
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        // On sérialise l'erreur en une simple chaîne de caractères
        serializer.serialize_str(self.to_string().as_ref())
    }
}

// Helpers pour convertir des erreurs string en AppError
// Permet de faire : return Err("Mon erreur".into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}
