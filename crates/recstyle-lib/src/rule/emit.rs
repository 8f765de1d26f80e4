//! Replacement text for both rewrite directions.

pub const FIX_TO_RECORD: &str = "convert to `Record`";
pub const FIX_TO_INDEX_SIGNATURE: &str = "convert to index signature";

/// `{ [key: K]: V }`
pub fn index_signature(key: &str, value: &str) -> String {
    format!("{{ [key: {key}]: {value} }}")
}

/// `Record<K, V>`
pub fn record(key: &str, value: &str) -> String {
    format!("Record<{key}, {value}>")
}

/// `Name<inner>`, used for the `Readonly`, `Partial` and `Required` wrappers.
pub fn wrap(name: &str, inner: String) -> String {
    format!("{name}<{inner}>")
}

/// `[declare ]type Name<P, Q> = T;`
pub fn type_alias(declare: bool, name: &str, type_params: &[String], ty: &str) -> String {
    let mut out = String::new();
    if declare {
        out.push_str("declare ");
    }
    out.push_str("type ");
    out.push_str(name);
    if !type_params.is_empty() {
        out.push('<');
        out.push_str(&type_params.join(", "));
        out.push('>');
    }
    out.push_str(" = ");
    out.push_str(ty);
    out.push(';');
    out
}
