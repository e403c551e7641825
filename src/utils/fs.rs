// FICHIER : src/utils/fs.rs

use crate::utils::error::{AppError, Result};
use crate::utils::json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};
pub use tempfile::{tempdir, TempDir};
pub use tokio::fs::{DirEntry, ReadDir};

pub async fn exists(path: &Path) -> bool {
    fs::metadata(path).await.is_ok()
}

/// Crée le répertoire (récursivement) s'il n'existe pas encore.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).await.map_err(AppError::Io)?;
    }
    Ok(())
}

pub async fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(AppError::Io)
}

pub async fn read_dir(path: &Path) -> Result<ReadDir> {
    fs::read_dir(path).await.map_err(AppError::Io)
}

/// Lit et parse un fichier JSON en un type T.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !exists(path).await {
        return Err(AppError::NotFound(format!(
            "fichier JSON absent : {}",
            path.to_string_lossy()
        )));
    }
    let content = read_to_string(path).await?;
    json::parse(&content)
}

// --- ÉCRITURE ATOMIQUE ---

/// Écriture atomique sécurisée (write -> sync -> rename).
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let tmp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&tmp_path).await.map_err(AppError::Io)?;
        file.write_all(content).await.map_err(AppError::Io)?;
        file.flush().await.ok();
        // On force l'écriture physique sur le plateau du disque
        file.sync_all().await.ok();
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::Io(e));
    }
    Ok(())
}

pub async fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = json::stringify_pretty(data)?;
    write_atomic(path, content.as_bytes()).await
}
