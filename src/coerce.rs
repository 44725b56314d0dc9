//! Best-effort coercion of raw string values into typed scalars.
//!
//! CLI arguments and environment variables arrive as strings; the schema
//! expects typed values. Coercion guesses the type, first match wins:
//! boolean, integer, float, then the original string unchanged. Failure to
//! coerce is never an error; the string form is always a valid outcome.

use serde_json::Value;

/// Coerces a raw string into the most specific scalar it parses as.
///
/// Applied in order:
/// 1. Case-insensitive `"true"` / `"false"` become booleans, so `"TRUE"`
///    and `"False"` coerce the same way as the lower-case forms.
/// 2. A base-10 integer parse (`i64`); leading zeros are accepted, so
///    `"007"` coerces to `7`.
/// 3. A float parse (`f64`). Values a JSON number cannot represent
///    (NaN, infinities) fall through to the string form.
/// 4. Anything else is returned as the original string.
///
/// Callers holding an already-typed value (the boolean sentinel for a bare
/// CLI flag) insert it directly rather than routing it through here.
#[must_use]
pub fn coerce(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }

    if let Ok(float) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }

    Value::String(raw.to_string())
}
