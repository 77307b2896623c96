//! Request signing.
//!
//! Every request carries a `sign` field computed from its other parameters and
//! the channel secret:
//!
//! 1. The secret joins the parameters under the [`SIGN_KEY_FIELD`] key.
//! 2. Keys are sorted byte-wise ascending.
//! 3. Falsy values (`""`, `"0"`, `0`, `false`, `null`, `[]`, `{}`) are dropped,
//!    key included.
//! 4. Scalars append `key` + value, lists append `key` + compact JSON, and
//!    string-keyed maps append nothing. List JSON escapes `/` as `\/` and
//!    every non-ASCII character as a `\uXXXX` UTF-16 escape, the way the
//!    platform encodes it when checking.
//! 5. The accumulated string is hashed with SHA-1 and hex encoded.
//!
//! ```text
//! {"b": "2", "a": "1", "list": ["x", "y"]} + secret "s"
//!   => a1b2list["x","y"]signKeys
//!   => sha1(...)
//! ```

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use sha1::{Digest, Sha1};

use crate::shared::Params;

/// Key under which the secret takes part in the signature. Never sent on the wire.
pub const SIGN_KEY_FIELD: &str = "signKey";

/// Body field carrying the computed signature.
pub const SIGN_FIELD: &str = "sign";

/// Compute the hex SHA-1 signature of `params` under `secret`.
pub fn compute_signature(params: &Params, secret: &str) -> String {
    let canonical = canonical_string(params, secret);
    hex::encode(Sha1::digest(canonical.as_bytes()))
}

/// Recompute the signature of `params` and compare it with `signature`.
///
/// `params` must not contain the `sign` field itself.
pub fn verify_signature(params: &Params, secret: &str, signature: &str) -> bool {
    compute_signature(params, secret).eq_ignore_ascii_case(signature)
}

/// Build the string that gets hashed.
///
/// Exposed for debugging signature mismatches against the platform; it embeds
/// the secret, so keep it out of logs.
pub fn canonical_string(params: &Params, secret: &str) -> String {
    let secret_value = Value::String(secret.to_owned());

    let mut entries: BTreeMap<&str, &Value> =
        params.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.insert(SIGN_KEY_FIELD, &secret_value);

    let mut out = String::new();
    for (key, value) in entries {
        if is_falsy(value) {
            continue;
        }
        match value {
            Value::Array(_) => {
                out.push_str(key);
                out.push_str(&list_json(value));
            }
            // string-keyed maps never contribute
            Value::Object(_) => {}
            scalar => {
                out.push_str(key);
                out.push_str(&scalar_to_string(scalar));
            }
        }
    }
    out
}

/// Whether a value is left out of the signature entirely.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Compact JSON with the platform's escaping. Insertion order is kept.
fn list_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, EscapingFormatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

/// Compact formatter that additionally escapes `/` and all non-ASCII text.
struct EscapingFormatter;

impl Formatter for EscapingFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '/' {
                continue;
            }
            writer.write_all(&bytes[start..i])?;
            if ch == '/' {
                writer.write_all(b"\\/")?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display prints integral floats without a fraction ("2", not "2.0")
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
