//! CLI source adapter.
//!
//! A minimal `--key value` tokenizer, not an argument grammar: no short
//! flags, no `=`-joined syntax, no repeated-flag accumulation. `--a-b.c-d`
//! style flags become dotted key paths (`-` normalized to `.`), a bare
//! `--flag` with no following value is boolean true, and any token outside
//! the two-token cadence is skipped rather than rejected. The leniency is
//! intentional: this adapter is a convenience layer, and malformed input
//! noise must never make resolution fail.

use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::path::{split_key, write_path};

/// Marker introducing a flag token.
pub(crate) const FLAG_MARKER: &str = "--";

/// Builds the CLI layer from an ordered argument list.
///
/// Scans left to right: a `--`-prefixed token introduces a key; the next
/// token is consumed as its value unless it is itself `--`-prefixed, in
/// which case the key is a boolean-true flag. Values are coerced; flags
/// insert the typed boolean directly. Orphaned tokens and flags whose key
/// normalizes to an empty segment are skipped.
#[must_use]
pub fn collect<I, S>(args: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut layer = Map::new();
    let mut index = 0;

    while index < args.len() {
        let token = &args[index];

        let Some(stripped) = token.strip_prefix(FLAG_MARKER) else {
            tracing::debug!(token = %token, "skipping token outside flag cadence");
            index += 1;
            continue;
        };

        let key = stripped.replace('-', ".");

        let value = match args.get(index + 1) {
            Some(next) if !next.starts_with(FLAG_MARKER) => {
                index += 2;
                coerce(next)
            }
            _ => {
                index += 1;
                Value::Bool(true)
            }
        };

        match split_key(&key) {
            Some(segments) => write_path(&mut layer, &segments, value),
            None => tracing::warn!(flag = %token, "ignoring flag with an empty key segment"),
        }
    }

    layer
}
