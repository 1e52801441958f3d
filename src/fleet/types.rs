use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One fleet member: display name + base URL of its status API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub name: String,
    pub base_url: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

/// Body of `GET {base}/api/status`
///
/// Every field is read leniently: a missing or mistyped value becomes `None`
/// (or an empty probe list) instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusPayload {
    #[serde(rename = "uptime_s", default, deserialize_with = "lenient::unsigned")]
    pub uptime_seconds: Option<u64>,

    #[serde(default, deserialize_with = "lenient::port")]
    pub listen_port: Option<u16>,

    #[serde(default, deserialize_with = "lenient::probes")]
    pub probes: Vec<ProbeResult>,
}

impl StatusPayload {
    /// Parse a response body
    ///
    /// Only invalid JSON is an error. Valid JSON that is not an object yields
    /// an empty payload, the same as an object with none of the known fields.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            StatusPayload::default()
        }
    }
}

/// One latency series an endpoint reports for a sub-target it monitors
///
/// Latencies are `None` when the remote reported the unknown sentinel
/// (any negative number) or a non-numeric value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProbeResult {
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub host: String,

    #[serde(default, deserialize_with = "lenient::port")]
    pub port: Option<u16>,

    #[serde(default, deserialize_with = "lenient::latency")]
    pub last_ms: Option<f64>,

    #[serde(default, deserialize_with = "lenient::latency")]
    pub p50_ms: Option<f64>,

    #[serde(default, deserialize_with = "lenient::latency")]
    pub p95_ms: Option<f64>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub samples: u64,
}

/// Result of reaching one endpoint in one cycle
#[derive(Debug, Clone, PartialEq)]
pub enum FleetOutcome {
    Success(StatusPayload),
    Failure,
}

impl FleetOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FleetOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&StatusPayload> {
        match self {
            FleetOutcome::Success(payload) => Some(payload),
            FleetOutcome::Failure => None,
        }
    }
}

/// Field deserializers that never fail on a well-formed JSON value
mod lenient {
    use super::*;

    /// Non-negative integer, also when written as a whole float (`100.0`)
    fn whole_number(value: &Value) -> Option<u64> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|x| x.is_finite() && *x >= 0.0 && x.fract() == 0.0 && *x < u64::MAX as f64)
                .map(|x| x as u64)
        })
    }

    pub fn unsigned<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(whole_number(&Value::deserialize(d)?))
    }

    pub fn port<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u16>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(whole_number(&value).and_then(|p| u16::try_from(p).ok()))
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        Ok(whole_number(&Value::deserialize(d)?).unwrap_or(0))
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(value.as_str().map(str::to_owned).unwrap_or_default())
    }

    /// Negative latencies are the remote's "unknown" sentinel
    pub fn latency<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(value.as_f64().filter(|ms| ms.is_finite() && *ms >= 0.0))
    }

    /// Non-array values count as "no probes"; non-object entries are skipped
    pub fn probes<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<ProbeResult>, D::Error> {
        let probes = match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        };
        Ok(probes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let payload = StatusPayload::from_json(
            br#"{
                "uptime_s": 100,
                "listen_port": 7777,
                "probes": [
                    {"label":"db","host":"10.0.0.1","port":5432,
                     "last_ms":3.2,"p50_ms":4.0,"p95_ms":9.9,"samples":50}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.uptime_seconds, Some(100));
        assert_eq!(payload.listen_port, Some(7777));
        assert_eq!(
            payload.probes,
            vec![ProbeResult {
                label: "db".to_string(),
                host: "10.0.0.1".to_string(),
                port: Some(5432),
                last_ms: Some(3.2),
                p50_ms: Some(4.0),
                p95_ms: Some(9.9),
                samples: 50,
            }]
        );
    }

    #[test]
    fn test_missing_fields_are_absent_not_zero() {
        let payload = StatusPayload::from_json(br#"{"version":"1.2"}"#).unwrap();
        assert_eq!(payload.uptime_seconds, None);
        assert_eq!(payload.listen_port, None);
        assert!(payload.probes.is_empty());
    }

    #[test]
    fn test_null_fields() {
        let payload =
            StatusPayload::from_json(br#"{"uptime_s":null,"listen_port":null,"probes":null}"#)
                .unwrap();
        assert_eq!(payload, StatusPayload::default());
    }

    #[test]
    fn test_probes_not_a_sequence() {
        let payload =
            StatusPayload::from_json(br#"{"uptime_s":5,"probes":{"label":"db"}}"#).unwrap();
        assert_eq!(payload.uptime_seconds, Some(5));
        assert!(payload.probes.is_empty());

        let payload = StatusPayload::from_json(br#"{"probes":"none"}"#).unwrap();
        assert!(payload.probes.is_empty());
    }

    #[test]
    fn test_negative_sentinel_becomes_absent() {
        let payload = StatusPayload::from_json(
            br#"{"probes":[{"label":"api","host":"h","port":443,
                 "last_ms":-1,"p50_ms":-1.0,"p95_ms":"n/a","samples":0}]}"#,
        )
        .unwrap();

        let probe = &payload.probes[0];
        assert_eq!(probe.last_ms, None);
        assert_eq!(probe.p50_ms, None);
        assert_eq!(probe.p95_ms, None);
        assert_eq!(probe.port, Some(443));
    }

    #[test]
    fn test_probe_order_preserved_and_junk_entries_skipped() {
        let payload = StatusPayload::from_json(
            br#"{"probes":[{"label":"b"}, 42, {"label":"a"}, null, {"label":"c"}]}"#,
        )
        .unwrap();

        let labels: Vec<&str> = payload.probes.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(payload.probes[0].samples, 0);
        assert_eq!(payload.probes[0].port, None);
    }

    #[test]
    fn test_non_object_body_is_empty_payload() {
        let payload = StatusPayload::from_json(b"[1,2,3]").unwrap();
        assert_eq!(payload, StatusPayload::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(StatusPayload::from_json(b"<html>502 Bad Gateway</html>").is_err());
        assert!(StatusPayload::from_json(b"").is_err());
    }

    #[test]
    fn test_mistyped_metadata() {
        let payload =
            StatusPayload::from_json(br#"{"uptime_s":-3,"listen_port":99999}"#).unwrap();
        assert_eq!(payload.uptime_seconds, None);
        assert_eq!(payload.listen_port, None);
    }

    #[test]
    fn test_whole_number_floats_accepted() {
        let payload = StatusPayload::from_json(
            br#"{"uptime_s":100.0,"listen_port":7777.0,
                 "probes":[{"label":"db","port":5432.0,"samples":50.0}]}"#,
        )
        .unwrap();
        assert_eq!(payload.uptime_seconds, Some(100));
        assert_eq!(payload.listen_port, Some(7777));
        assert_eq!(payload.probes[0].port, Some(5432));
        assert_eq!(payload.probes[0].samples, 50);

        let payload = StatusPayload::from_json(br#"{"uptime_s":100.5,"listen_port":-1.0}"#).unwrap();
        assert_eq!(payload.uptime_seconds, None);
        assert_eq!(payload.listen_port, None);
    }
}
