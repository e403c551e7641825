// FICHIER : src/utils/mod.rs

// =========================================================================
//  LUMISPEC UTILS - Foundation Layer
// =========================================================================

pub mod error;
pub mod fs;
pub mod json;
pub mod logger;

// --> Config & Erreurs
pub use error::{AppError, Result};
pub use logger::init_logging;

// --> Logging
pub use tracing::{debug, error, info, instrument, warn};
