//! Numeric range parsing and serialization for search query parameters.

use crate::form_snapshot::FieldValue;


/// Numeric bounds extracted from a selection field. `max` is absent when
/// an "N+" token marked the selection open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRange {
    pub min: f64,
    pub max: Option<f64>,
}

/// Strip all whitespace from a raw field value. Absent, empty and
/// whitespace-only values normalize to nothing. String-level only, the
/// digits are kept verbatim for later numeric conversion.
pub fn normalize_number(value: Option<&FieldValue>) -> Option<String> {
    let raw = value?.joined();
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Serialize a bounded pair. A missing side keeps its hyphen so the
/// target reads that bound as open; both sides missing means no range
/// at all.
pub fn format_range(min: Option<&FieldValue>, max: Option<&FieldValue>) -> Option<String> {
    match (normalize_number(min), normalize_number(max)) {
        (None, None) => None,
        (Some(min), Some(max)) => Some(format!("{min}-{max}")),
        (Some(min), None) => Some(format!("{min}-")),
        (None, Some(max)) => Some(format!("-{max}")),
    }
}

/// Parse a selection field into numeric bounds. Tokens may arrive as a
/// single value or a list, and each token may be a plain number, a comma
/// list, an "a-b" sub-range or an "N+" open-ended marker. Non-numeric
/// tokens contribute nothing and never raise an error.
pub fn parse_selection(value: &FieldValue) -> Option<SelectionRange> {
    let mut pool = Vec::new();
    let mut open_ended = false;
    for token in value.values() {
        collect_tokens(token, &mut pool, &mut open_ended);
    }
    if pool.is_empty() {
        return None;
    }
    let min = pool.iter().copied().fold(f64::INFINITY, f64::min);
    let max = pool.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(SelectionRange {
        min,
        max: if open_ended { None } else { Some(max) },
    })
}

fn collect_tokens(token: &str, pool: &mut Vec<f64>, open_ended: &mut bool) {
    let token = token.trim();
    if let Some(base) = token.strip_suffix('+') {
        *open_ended = true;
        push_if_finite(base, pool);
    } else if token.contains(',') {
        for part in token.split(',') {
            collect_tokens(part, pool, open_ended);
        }
    } else if let Some((low, high)) = token.split_once('-') {
        if !low.is_empty() {
            push_if_finite(low, pool);
        }
        if !high.is_empty() {
            push_if_finite(high, pool);
        }
    } else {
        push_if_finite(token, pool);
    }
}

fn push_if_finite(token: &str, pool: &mut Vec<f64>) {
    if let Ok(number) = token.trim().parse::<f64>() {
        if number.is_finite() {
            pool.push(number);
        }
    }
}

/// Collapse parsed bounds to their query form. A single discrete value
/// prints as a scalar rather than a degenerate "n-n" range.
pub fn format_selection(range: &SelectionRange) -> String {
    match range.max {
        Some(max) if max == range.min => range.min.to_string(),
        Some(max) => format!("{}-{max}", range.min),
        None => format!("{}-", range.min),
    }
}

/// Parse and serialize a selection field in one step.
pub fn selection_to_range(value: Option<&FieldValue>) -> Option<String> {
    let range = parse_selection(value?)?;
    Some(format_selection(&range))
}

/// Integer prefix of a token, in the style of lenient form parsing:
/// leading whitespace and a sign are accepted, conversion stops at the
/// first non-digit character.
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() {
        return None;
    }
    let value = prefix.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
