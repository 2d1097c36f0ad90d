use super::types::WordRecord;
use serde_json::Value;

/// Relevance bucket plus an in-bucket distance. Lower sorts first.
type Rank = (u8, usize);

const EXACT: u8 = 0;
const CONTAINS: u8 = 1;
const DISTANT: u8 = 2;
const MISSING: u8 = 3;

/// Re-orders `records` by how closely the value at `field_path` matches
/// `term`: case-insensitive equality first, then by the position at which the
/// term occurs, then by edit distance. The sort is stable, so records that
/// rank the same keep the order the store returned them in.
pub fn sort_docs_by(term: &str, records: Vec<WordRecord>, field_path: &str) -> Vec<WordRecord> {
    let needle = term.to_lowercase();
    let mut records = records;
    records.sort_by_cached_key(|record| {
        serde_json::to_value(record)
            .ok()
            .as_ref()
            .and_then(|value| resolve_path(value, field_path))
            .and_then(value_text)
            .map(|text| rank(&needle, &text.to_lowercase()))
            .unwrap_or((MISSING, 0))
    });
    records
}

fn rank(needle: &str, haystack: &str) -> Rank {
    if haystack == needle {
        return (EXACT, 0);
    }
    match haystack.find(needle) {
        Some(byte_idx) => (CONTAINS, haystack[..byte_idx].chars().count()),
        None => (DISTANT, levenshtein(needle, haystack)),
    }
}

/// Resolves a dotted path with optional indexes, e.g. `definitions[0]` or
/// `dialects[1].variations[0]`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let (key, indexes) = match segment.find('[') {
            Some(idx) => (&segment[..idx], &segment[idx..]),
            None => (segment, ""),
        };
        if !key.is_empty() {
            current = current.get(key)?;
        }
        for index in indexes.split('[').filter(|s| !s.is_empty()) {
            let index: usize = index.strip_suffix(']')?.parse().ok()?;
            current = current.get(index)?;
        }
    }
    Some(current)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
