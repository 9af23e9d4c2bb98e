// crates/profile/src/domain/normalization/field_normalizer.rs

//! # Normalisation des champs de profil
//!
//! Les colonnes JSON du profil arrivent sous des formes hétérogènes selon le
//! chemin d'écriture : tableau natif, chaîne JSON (parfois double-encodée),
//! objet, `null` ou absence totale. Ces fonctions ramènent toujours la valeur
//! à une forme sûre (`[]` ou `None` au pire) et ne paniquent jamais.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::entries::ProfileEntry;

/// Normalise un champ liste.
///
/// 1. Tableau : filtré par `is_valid_entry`, ordre conservé.
/// 2. Chaîne non vide : parsée ; un tableau est filtré, tout le reste donne `[]`.
/// 3. Tout autre cas (absent, `null`, `""`, nombre, objet) : `[]`.
pub fn normalize_list<P>(raw: Option<&Value>, is_valid_entry: P) -> Vec<Value>
where
    P: Fn(&Value) -> bool,
{
    match raw {
        Some(Value::Array(items)) => filter_entries(items.iter().cloned(), &is_valid_entry),
        Some(Value::String(s)) if !s.is_empty() => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => filter_entries(items.into_iter(), &is_valid_entry),
            Ok(_) => Vec::new(),
            Err(_) => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Normalise un champ objet unique (`featured_video`, `appointments`, ...).
///
/// Un objet est rendu tel quel ; une chaîne non vide est parsée et retenue si
/// elle décrit un objet. Tableaux, nombres et chaînes illisibles donnent `None`.
pub fn normalize_object(raw: Option<&Value>) -> Option<Map<String, Value>> {
    match raw {
        Some(Value::Object(obj)) => Some(obj.clone()),
        Some(Value::String(s)) if !s.is_empty() => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(obj)) => Some(obj),
            _ => None,
        },
        _ => None,
    }
}

/// Variante typée de [`normalize_list`] : applique le prédicat de l'entrée puis
/// la désérialise. Une entrée dont les types ne se laissent pas convertir est
/// écartée (et tracée), jamais remontée en erreur.
pub fn normalize_entries<E>(raw: Option<&Value>) -> Vec<E>
where
    E: ProfileEntry,
{
    normalize_list(raw, E::is_valid_entry)
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<E>(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(kind = E::KIND, error = %err, "Dropping entry with incompatible shape");
                None
            }
        })
        .collect()
}

/// Variante typée de [`normalize_object`].
pub fn normalize_record<T>(raw: Option<&Value>) -> Option<T>
where
    T: DeserializeOwned,
{
    let obj = normalize_object(raw)?;
    match serde_json::from_value::<T>(Value::Object(obj)) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::debug!(error = %err, "Dropping single-object field with incompatible shape");
            None
        }
    }
}

fn filter_entries<I, P>(items: I, is_valid_entry: &P) -> Vec<Value>
where
    I: Iterator<Item = Value>,
    P: Fn(&Value) -> bool,
{
    items.filter(|item| is_valid_entry(item)).collect()
}
