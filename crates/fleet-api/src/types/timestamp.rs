//! Serde support for control plane timestamps
//!
//! The wire carries timestamps as JSON numbers of fractional seconds since the
//! Unix epoch (`1430167761.485`). Fields using this module must also carry
//! `#[serde(default)]` so an absent field decodes to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => {
            let secs = ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / 1e9;
            serializer.serialize_f64(secs)
        }
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let total_nanos = (secs * 1e9).round();
    if !total_nanos.is_finite() || total_nanos.abs() >= i64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "timestamp out of range: {secs}"
        )));
    }
    let total_nanos = total_nanos as i64;
    let whole = total_nanos.div_euclid(1_000_000_000);
    let frac = total_nanos.rem_euclid(1_000_000_000) as u32;
    DateTime::from_timestamp(whole, frac)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(
            with = "super",
            skip_serializing_if = "Option::is_none",
            default
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_fractional_seconds_round_trip() {
        let stamped: Stamped = serde_json::from_value(json!({"at": 1430167761.5})).unwrap();
        let at = stamped.at.unwrap();
        assert_eq!(at.timestamp(), 1430167761);
        assert_eq!(at.timestamp_subsec_millis(), 500);

        let value = serde_json::to_value(&stamped).unwrap();
        assert_eq!(value, json!({"at": 1430167761.5}));
    }

    #[test]
    fn test_integer_epoch_accepted() {
        let stamped: Stamped = serde_json::from_value(json!({"at": 1430167761})).unwrap();
        assert_eq!(stamped.at.unwrap().timestamp(), 1430167761);
    }

    #[test]
    fn test_absent_field_decodes_to_none() {
        let stamped: Stamped = serde_json::from_value(json!({})).unwrap();
        assert!(stamped.at.is_none());
        assert_eq!(serde_json::to_value(&stamped).unwrap(), json!({}));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = serde_json::from_value::<Stamped>(json!({"at": 1e30})).unwrap_err();
        assert!(err.to_string().contains("timestamp out of range"));
    }
}
