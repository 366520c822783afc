use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::data::{KeyframeRecord, WeightedMode};
use crate::error::CurveError;

/// Public API: parse authoring-tool curve JSON into keyframe records.
///
/// Accepted shapes:
/// - a bare array of keys: `[{ "time": 0, "value": 1, "inTangent": 0, "outTangent": 0 }, ...]`
/// - an object wrapping them: `{ "name": "fade", "keys": [...] }`
///
/// Notes:
/// - `weightedMode` is optional and defaults to none. It may be a name
///   (`"none" | "in" | "out" | "both"`) or the authoring tool's index (0..=3).
/// - Records are returned in document order; sorting is the builder's job.
/// - Weighted records parse fine and are rejected later by [`build`](crate::build).
pub fn parse_curve_json(s: &str) -> Result<Vec<KeyframeRecord>, CurveError> {
    let doc: JsonValue = serde_json::from_str(s).map_err(parse_error)?;
    let keys: Vec<StoredKey> = match doc {
        JsonValue::Array(_) => serde_json::from_value(doc).map_err(parse_error)?,
        JsonValue::Object(_) => {
            let named: NamedCurve = serde_json::from_value(doc).map_err(parse_error)?;
            if let Some(name) = &named.name {
                log::debug!("parsing curve '{name}' ({} keys)", named.keys.len());
            }
            named.keys
        }
        _ => {
            return Err(CurveError::Parse(
                "expected an array of keys or an object with \"keys\"".into(),
            ))
        }
    };

    keys.into_iter()
        .enumerate()
        .map(|(i, k)| -> Result<KeyframeRecord, CurveError> {
            let weighted_mode = match k.weighted_mode {
                Some(raw) => to_weighted_mode(raw)
                    .ok_or_else(|| CurveError::Parse(format!("key {i}: unknown weightedMode")))?,
                None => WeightedMode::None,
            };
            Ok(KeyframeRecord {
                time: k.time as f32,
                value: k.value as f32,
                in_tangent: k.in_tangent as f32,
                out_tangent: k.out_tangent as f32,
                weighted_mode,
            })
        })
        .collect()
}

fn parse_error(e: serde_json::Error) -> CurveError {
    CurveError::Parse(e.to_string())
}

fn to_weighted_mode(raw: RawWeightedMode) -> Option<WeightedMode> {
    match raw {
        RawWeightedMode::Index(0) => Some(WeightedMode::None),
        RawWeightedMode::Index(1) => Some(WeightedMode::In),
        RawWeightedMode::Index(2) => Some(WeightedMode::Out),
        RawWeightedMode::Index(3) => Some(WeightedMode::Both),
        RawWeightedMode::Index(_) => None,
        RawWeightedMode::Name(name) => match name.to_ascii_lowercase().as_str() {
            "none" => Some(WeightedMode::None),
            "in" => Some(WeightedMode::In),
            "out" => Some(WeightedMode::Out),
            "both" => Some(WeightedMode::Both),
            _ => None,
        },
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct NamedCurve {
    #[serde(default)]
    name: Option<String>,
    keys: Vec<StoredKey>,
}

#[derive(Debug, Deserialize)]
struct StoredKey {
    time: f64,
    value: f64,
    #[serde(rename = "inTangent", alias = "in_tangent", default)]
    in_tangent: f64,
    #[serde(rename = "outTangent", alias = "out_tangent", default)]
    out_tangent: f64,
    #[serde(rename = "weightedMode", alias = "weighted_mode", default)]
    weighted_mode: Option<RawWeightedMode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWeightedMode {
    Index(u8),
    Name(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let recs = parse_curve_json(
            r#"[
                {"time": 0, "value": 0, "inTangent": 0, "outTangent": 1},
                {"time": 1, "value": 2, "inTangent": -1, "outTangent": 0}
            ]"#,
        )
        .expect("parse");
        assert_eq!(
            recs,
            vec![
                KeyframeRecord::new(0.0, 0.0, 0.0, 1.0),
                KeyframeRecord::new(1.0, 2.0, -1.0, 0.0),
            ]
        );
    }

    #[test]
    fn parses_named_object_with_modes() {
        let recs = parse_curve_json(
            r#"{"name": "fade", "keys": [
                {"time": 0, "value": 0, "weightedMode": "Both"},
                {"time": 1, "value": 1, "weightedMode": 2},
                {"time": 2, "value": 1, "weighted_mode": "none", "extra": true}
            ]}"#,
        )
        .expect("parse");
        let modes: Vec<WeightedMode> = recs.iter().map(|r| r.weighted_mode).collect();
        assert_eq!(
            modes,
            vec![WeightedMode::Both, WeightedMode::Out, WeightedMode::None]
        );
        assert_eq!(recs[1].in_tangent, 0.0);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = parse_curve_json(r#"[{"time": 0, "value": 0, "weightedMode": "diagonal"}]"#)
            .expect_err("bad mode");
        assert!(matches!(err, CurveError::Parse(msg) if msg.contains("key 0")));
        assert!(parse_curve_json(r#"[{"time": 0, "value": 0, "weightedMode": 9}]"#).is_err());
    }

    #[test]
    fn missing_fields_fail() {
        assert!(matches!(
            parse_curve_json(r#"[{"value": 1}]"#),
            Err(CurveError::Parse(_))
        ));
    }

    #[test]
    fn nested_key_errors_name_the_field() {
        let err = parse_curve_json(r#"{"name": "fade", "keys": [{"value": 1}]}"#)
            .expect_err("key without time");
        match err {
            CurveError::Parse(msg) => assert!(msg.contains("`time`"), "message: {msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }

        let err = parse_curve_json(r#"[{"time": 0}]"#).expect_err("key without value");
        assert!(matches!(err, CurveError::Parse(msg) if msg.contains("`value`")));

        let err = parse_curve_json(r#"{"name": "fade"}"#).expect_err("object without keys");
        assert!(matches!(err, CurveError::Parse(msg) if msg.contains("`keys`")));
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = parse_curve_json("42").expect_err("not a curve");
        assert!(matches!(err, CurveError::Parse(msg) if msg.contains("array of keys")));
    }
}
