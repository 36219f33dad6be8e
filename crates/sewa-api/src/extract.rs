//! Request extraction that never rejects.
//!
//! Every handler is total over its defaults. A missing body, or a body
//! that is not a JSON object, resolves to the request type's `Default`
//! instead of a 4xx. Inside an object each field is read on its own, so a
//! field of the wrong shape falls back to that field's default and the
//! rest of the request is kept.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body extractor that falls back to `T::default()`.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "could not read request body, using defaults");
                return Ok(LenientJson(T::default()));
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        let object = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ Value::Object(_)) => value,
            Ok(other) => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "request body is not an object, using defaults"
                );
                return Ok(LenientJson(T::default()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed request body, using defaults");
                return Ok(LenientJson(T::default()));
            }
        };

        match serde_json::from_value(object) {
            Ok(value) => Ok(LenientJson(value)),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable request body, using defaults");
                Ok(LenientJson(T::default()))
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field deserializers that accept the loose shapes legacy clients send.
///
/// None of them fail on a well-formed JSON value. Numeric readers return
/// `None` for anything they cannot use, and the request type substitutes
/// its own default for that field.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// `true`/`false`, `0`/`1`, or `"true"`/`"1"`/`"yes"`. Anything else is false.
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
            _ => false,
        })
    }

    /// A non-negative whole number given as an integer, a float or a
    /// numeric string. Floats are rounded. Negative, non-numeric or
    /// out-of-range values read as `None`.
    pub fn count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        Ok(real_value(Value::deserialize(deserializer)?)
            .filter(|v| *v >= 0.0 && *v <= u64::MAX as f64)
            .and_then(|v| T::try_from(v.round() as u64).ok()))
    }

    /// A finite number given as a JSON number or a numeric string.
    pub fn real<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(real_value(Value::deserialize(deserializer)?))
    }

    /// A string. Any other value reads as empty.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    fn real_value(value: Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite())
    }
}
