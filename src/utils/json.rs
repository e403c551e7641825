// FICHIER : src/utils/json.rs

use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Number, Value};

/// Parse une chaîne JSON en un type T.
/// Logue un extrait du contenu en cas d'échec pour aider au débogage.
pub fn parse<T: DeserializeOwned>(s: &str) -> Result<T> {
    match serde_json::from_str(s) {
        Ok(val) => Ok(val),
        Err(e) => {
            let snippet = s.get(..100).unwrap_or(s);
            tracing::debug!(snippet, erreur = %e, "échec de parsing JSON");
            Err(e.into())
        }
    }
}

/// Convertit un type T en chaîne JSON formatée (pretty).
pub fn stringify_pretty<T: Serialize>(v: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(v)?)
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        role: String,
    }

    #[test]
    fn test_parse_success() {
        let raw = r#"{"id": 1, "role": "admin"}"#;
        let user: User = parse(raw).unwrap();
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_parse_error() {
        let bad_raw = r#"{"id": "not_a_number"}"#;
        let res: Result<User> = parse(bad_raw);
        assert!(res.is_err());
    }

    #[test]
    fn test_value_preserves_key_order() {
        // La feature `preserve_order` de serde_json est requise : l'extraction
        // du schéma legacy dépend de l'ordre d'itération du document.
        let raw = r#"{"zeta": 1, "alpha": 2, "mu": 3}"#;
        let val: Value = parse(raw).unwrap();
        let keys: Vec<&String> = val.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
    }
}
