// FICHIER : src/config.rs

use crate::utils::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

/// Configuration explicite du serveur, construite au démarrage et passée
/// au magasin de fiches à la construction. Aucun état global.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Racine des données : collections de spectres, configs instrument,
    /// réglages utilisateur.
    pub data_root: PathBuf,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let data_root = match env::var("LUMISPEC_DATA_DIR") {
            Ok(v) if !v.is_empty() => PathBuf::from(v),
            _ => default_data_root()?,
        };
        let port = env_u16("PORT", 5000);
        Ok(Self { data_root, port })
    }
}

fn default_data_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("lumispec_data"))
        .ok_or_else(|| {
            AppError::Config(
                "Répertoire personnel introuvable : définissez LUMISPEC_DATA_DIR".to_string(),
            )
        })
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}
