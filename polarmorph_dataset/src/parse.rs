// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use polarmorph_physics::CoefficientPoint;
use serde::Deserialize;

/// Key that introduces the sample array in a dataset file.
pub const STALLPOINT_KEY: &str = "stallpoint";

/// Why a dataset file was rejected as a whole.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The text has no `stallpoint:` key.
    #[error("no `stallpoint:` key found")]
    MissingMarker,
    /// The key is not followed by an array.
    #[error("`stallpoint:` at byte {at} is not followed by an array")]
    MissingArray {
        /// Byte offset of the key.
        at: usize,
    },
    /// The array is opened but never closed.
    #[error("array opened at byte {start} is never closed")]
    UnterminatedArray {
        /// Byte offset of the opening bracket.
        start: usize,
    },
    /// The bracketed text is not a JSON array.
    #[error("sample array is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// Every element of the array was malformed, or the array was empty.
    #[error("no valid samples ({skipped} malformed)")]
    NoValidSamples {
        /// Number of malformed elements.
        skipped: usize,
    },
}

/// Samples extracted from a dataset file.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedSamples {
    /// Dimensionless `(CL, CD)` samples in file order.
    pub samples: Vec<CoefficientPoint>,
    /// Number of array elements that were skipped as malformed.
    pub skipped: usize,
}

#[derive(Deserialize)]
struct RawSample {
    cl: f64,
    cd: f64,
}

/// Extracts the `stallpoint:` sample array from `text`.
///
/// The key may be bare or quoted. Brackets inside JSON strings do not count
/// towards nesting. Elements that do not carry finite numeric `cl` and `cd`
/// fields are skipped and counted.
pub fn parse_stallpoints(text: &str) -> Result<ParsedSamples, DatasetError> {
    let start = find_array(text)?;
    let end = matching_bracket(text, start).ok_or(DatasetError::UnterminatedArray { start })?;

    let elements: Vec<serde_json::Value> =
        serde_json::from_str(&text[start..=end]).map_err(DatasetError::InvalidJson)?;

    let mut samples = Vec::with_capacity(elements.len());
    let mut skipped = 0;
    for (index, element) in elements.into_iter().enumerate() {
        match RawSample::deserialize(element) {
            Ok(RawSample { cl, cd }) if cl.is_finite() && cd.is_finite() => {
                samples.push(CoefficientPoint::new(cl, cd));
            }
            Ok(_) => {
                skipped += 1;
                tracing::warn!(index, "skipping sample with non-finite coefficients");
            }
            Err(err) => {
                skipped += 1;
                tracing::warn!(index, %err, "skipping malformed sample");
            }
        }
    }

    if samples.is_empty() {
        return Err(DatasetError::NoValidSamples { skipped });
    }
    Ok(ParsedSamples { samples, skipped })
}

/// Byte offset of the `[` opening the first `stallpoint:` value that is an
/// array.
///
/// Keys whose value is something else are passed over.
fn find_array(text: &str) -> Result<usize, DatasetError> {
    let mut first_key = None;
    for (key_at, after_colon) in keys(text) {
        first_key.get_or_insert(key_at);
        let rest = &text[after_colon..];
        let start = after_colon + (rest.len() - rest.trim_start().len());
        if text[start..].starts_with('[') {
            return Ok(start);
        }
    }
    Err(first_key.map_or(DatasetError::MissingMarker, |at| {
        DatasetError::MissingArray { at }
    }))
}

/// Byte offsets of every `stallpoint` key that is followed by a colon, paired
/// with the offset of the byte after that colon.
fn keys(text: &str) -> impl Iterator<Item = (usize, usize)> {
    text.match_indices(STALLPOINT_KEY).filter_map(move |(at, key)| {
        let tail = &text[at + key.len()..];
        let tail = tail.strip_prefix(['"', '\'']).unwrap_or(tail);
        let trimmed = tail.trim_start();
        trimmed
            .starts_with(':')
            .then(|| (at, text.len() - trimmed.len() + 1))
    })
}

/// Index of the `]` closing the `[` at `open`, ignoring brackets in strings.
fn matching_bracket(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, b) in text.bytes().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, matching_bracket, parse_stallpoints};

    #[test]
    fn parses_bare_and_quoted_keys() {
        let bare = parse_stallpoints(r#"x = { stallpoint: [{"cl": 0.5, "cd": 0.25}] }"#).unwrap();
        assert_eq!(bare.samples.len(), 1);
        assert_eq!(bare.samples[0].cl, 0.5);
        assert_eq!(bare.samples[0].cd, 0.25);

        let quoted = parse_stallpoints(r#"{"stallpoint" : [{"cl": 1, "cd": 2}]}"#).unwrap();
        assert_eq!(quoted.samples[0].cl, 1.0);
        assert_eq!(quoted.samples[0].cd, 2.0);
    }

    #[test]
    fn ignores_mentions_without_colon() {
        let text = r#"// stallpoint data below
            stallpoint: [{"cl": 0.1, "cd": 0.2}]"#;
        assert_eq!(parse_stallpoints(text).unwrap().samples.len(), 1);
    }

    #[test]
    fn skips_keys_not_followed_by_an_array() {
        let text = "// stallpoint: see below\nstallpoint: [{\"cl\": 0.5, \"cd\": 0.4}]";
        let parsed = parse_stallpoints(text).unwrap();
        assert_eq!(parsed.samples.len(), 1);
        assert_eq!(parsed.samples[0].cd, 0.4);

        assert!(matches!(
            parse_stallpoints("a: 1, stallpoint: {}, stallpoint: 3"),
            Err(DatasetError::MissingArray { at: 6 })
        ));
    }

    #[test]
    fn brackets_inside_strings_do_not_nest() {
        let text = r#"stallpoint: [{"cl": 0.3, "cd": 0.1, "note": "]["}], other: [1]"#;
        let parsed = parse_stallpoints(text).unwrap();
        assert_eq!(parsed.samples.len(), 1);
        assert_eq!(matching_bracket("[\"\\\"]\"]", 0), Some(6));
    }

    #[test]
    fn skips_malformed_elements_only() {
        let text = r#"stallpoint: [
            {"cl": 0.5, "cd": 0.4},
            {"cl": "high", "cd": 0.4},
            {"cd": 0.2},
            7,
            {"cl": 0.6, "cd": 0.35}
        ]"#;
        let parsed = parse_stallpoints(text).unwrap();
        assert_eq!(parsed.samples.len(), 2);
        assert_eq!(parsed.skipped, 3);
        assert_eq!(parsed.samples[1].cl, 0.6);
    }

    #[test]
    fn structural_errors_reject_the_file() {
        assert!(matches!(
            parse_stallpoints("cl: 0.5, cd: 0.4"),
            Err(DatasetError::MissingMarker)
        ));
        assert!(matches!(
            parse_stallpoints("stallpoint: {}"),
            Err(DatasetError::MissingArray { at: 0 })
        ));
        assert!(matches!(
            parse_stallpoints(r#"stallpoint: [{"cl": 1, "cd": 1}"#),
            Err(DatasetError::UnterminatedArray { start: 12 })
        ));
        assert!(matches!(
            parse_stallpoints("stallpoint: [{cl: 1, cd: 1}]"),
            Err(DatasetError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_stallpoints(r#"stallpoint: [{"cl": null, "cd": 1}]"#),
            Err(DatasetError::NoValidSamples { skipped: 1 })
        ));
        assert!(matches!(
            parse_stallpoints("stallpoint: []"),
            Err(DatasetError::NoValidSamples { skipped: 0 })
        ));
    }

    #[test]
    fn errors_describe_the_problem() {
        let err = parse_stallpoints("nothing").unwrap_err();
        assert_eq!(err.to_string(), "no `stallpoint:` key found");
    }
}
