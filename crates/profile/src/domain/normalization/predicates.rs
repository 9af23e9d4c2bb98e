// crates/profile/src/domain/normalization/predicates.rs

use serde_json::Value;

/// Truthiness au sens JavaScript, telle que l'appliquaient les données d'origine.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Objet JSON non nul (un tableau n'est pas un objet ici).
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Objet dont la clé `key` est truthy.
pub fn has_truthy(key: &'static str) -> impl Fn(&Value) -> bool {
    move |value: &Value| {
        value
            .as_object()
            .and_then(|obj| obj.get(key))
            .map(is_truthy)
            .unwrap_or(false)
    }
}

/// Forme minimale d'un highlight ou d'un média : un objet avec une `url` truthy.
pub fn has_truthy_url(value: &Value) -> bool {
    has_truthy("url")(value)
}
