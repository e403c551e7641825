// FICHIER : src/spectra_db/naming.rs

//! Dérivation d'un nom d'affichage depuis un identifiant de fiche.
//! Fonction pure et totale : jamais d'échec, toujours déterministe.

/// Coupe au premier `_` (motif "nom_variante"), convertit les séparateurs
/// restants en espaces et passe chaque mot en capitale initiale.
/// `"Alexa_488"` → `"Alexa"`, `"fitc"` → `"Fitc"`.
pub fn derive_display_name(id: &str) -> String {
    let base = match id.find('_') {
        Some(i) => &id[..i],
        None => id,
    };

    let mut out = String::with_capacity(base.len());
    let mut at_word_start = true;
    for c in base.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(if c == '_' { ' ' } else { c });
            at_word_start = true;
        }
    }
    out
}

// =========================================================================
// TESTS UNITAIRES
// =========================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_at_first_separator() {
        assert_eq!(derive_display_name("Alexa_488"), "Alexa");
        assert_eq!(derive_display_name("alexa_fluor_647"), "Alexa");
    }

    #[test]
    fn test_whole_identifier_without_separator() {
        assert_eq!(derive_display_name("fitc"), "Fitc");
        assert_eq!(derive_display_name("DAPI"), "Dapi");
    }

    #[test]
    fn test_word_boundaries_after_non_alphabetic() {
        assert_eq!(derive_display_name("atto647n"), "Atto647N");
        assert_eq!(derive_display_name("cy5-er"), "Cy5-Er");
    }

    #[test]
    fn test_total_on_degenerate_inputs() {
        assert_eq!(derive_display_name(""), "");
        assert_eq!(derive_display_name("_488"), "");
        assert_eq!(derive_display_name("488"), "488");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(derive_display_name("eGFP"), derive_display_name("eGFP"));
    }
}
