// FICHIER : src/spectra_db/dye_schema.rs

//! Normalisation des deux générations de schéma des fiches fluorophores.
//!
//! Génération plate : `name` et `brightness_coefficient` à la racine.
//! Génération legacy : `data -> {clé interne} -> info` portant `name` et
//! `brightness_coefficient`. Les deux générations sont modélisées comme
//! variantes explicites avec une projection pure vers une forme canonique,
//! jamais de sondage de champs dispersé dans les appelants.

use crate::spectra_db::naming;
use serde_json::{Number, Value};

/// Vue classifiée d'une fiche fluorophore brute.
#[derive(Debug, Clone, PartialEq)]
pub enum DyeRecord {
    Flat {
        name: Option<String>,
        brightness: Option<Number>,
    },
    /// Une fiche legacy peut aussi porter des champs racine introduits par
    /// un outillage postérieur : les deux sources sont conservées pour
    /// appliquer les règles de précédence.
    Legacy {
        top_name: Option<String>,
        top_brightness: Option<Number>,
        nested_name: Option<String>,
        nested_brightness: Option<Number>,
    },
}

/// Forme canonique exposée aux lecteurs.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDye {
    pub name: Option<String>,
    pub brightness: Option<Number>,
}

/// Chaîne vide = absence (un placeholder vide ne doit jamais masquer le
/// nom dérivé de l'identifiant).
fn non_empty(v: Option<&Value>) -> Option<String> {
    v.and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(v: Option<&Value>) -> Option<Number> {
    v.and_then(Value::as_number).cloned()
}

impl DyeRecord {
    /// Classifie une fiche brute. La présence d'un objet `data` à la
    /// racine sélectionne la génération legacy.
    pub fn classify(doc: &Value) -> Self {
        let top_name = non_empty(doc.get("name"));
        let top_brightness = number(doc.get("brightness_coefficient"));

        match doc.get("data").and_then(Value::as_object) {
            Some(data) => {
                // Seule la première entrée (ordre du document) fait foi
                // pour le nom ; la luminosité prend la première entrée
                // qui en porte une.
                let mut nested_name = None;
                let mut nested_brightness = None;
                for (i, (_key, entry)) in data.iter().enumerate() {
                    let info = entry.get("info");
                    if i == 0 {
                        nested_name = non_empty(info.and_then(|inf| inf.get("name")));
                    }
                    if nested_brightness.is_none() {
                        nested_brightness =
                            number(info.and_then(|inf| inf.get("brightness_coefficient")));
                    }
                }
                DyeRecord::Legacy {
                    top_name,
                    top_brightness,
                    nested_name,
                    nested_brightness,
                }
            }
            None => DyeRecord::Flat {
                name: top_name,
                brightness: top_brightness,
            },
        }
    }

    /// Projection pure vers la forme canonique.
    /// Luminosité : racine d'abord, sinon valeur legacy imbriquée.
    /// Nom : valeur legacy imbriquée d'abord (les fiches legacy prédatent
    /// le schéma plat), sinon racine.
    pub fn canonical(&self) -> CanonicalDye {
        match self {
            DyeRecord::Flat { name, brightness } => CanonicalDye {
                name: name.clone(),
                brightness: brightness.clone(),
            },
            DyeRecord::Legacy {
                top_name,
                top_brightness,
                nested_name,
                nested_brightness,
            } => CanonicalDye {
                name: nested_name.clone().or_else(|| top_name.clone()),
                brightness: top_brightness.clone().or_else(|| nested_brightness.clone()),
            },
        }
    }

    /// Nom d'affichage avec repli sur la dérivation depuis l'identifiant.
    pub fn display_name(&self, id: &str) -> String {
        self.canonical()
            .name
            .unwrap_or_else(|| naming::derive_display_name(id))
    }
}

/// Normalise une fiche brute : injecte `brightness_coefficient` à la
/// racine si une source existe (la racine prime), sans jamais injecter
/// `null`. Tous les autres champs traversent intacts — les valeurs legacy
/// imbriquées ne sont pas réécrites.
pub fn normalize(mut doc: Value) -> Value {
    if let Some(brightness) = DyeRecord::classify(&doc).canonical().brightness {
        if let Some(obj) = doc.as_object_mut() {
            obj.insert(
                "brightness_coefficient".to_string(),
                Value::Number(brightness),
            );
        }
    }
    doc
}
