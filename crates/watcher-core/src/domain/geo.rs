use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Country marker used for home addresses.
pub const HOME_COUNTRY: &str = "HOME";

/// Location and ISP metadata attached to an IP address.
///
/// Every field is optional: an empty annotation is what a failed lookup
/// degrades to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoAnnotation {
    #[serde(default)]
    pub country: Option<String>,
    /// Tautulli reports this as `code`.
    #[serde(default, alias = "code")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
}

impl GeoAnnotation {
    /// The fixed pseudo-location for addresses inside a home range.
    pub fn home() -> Self {
        Self {
            country: Some(HOME_COUNTRY.to_string()),
            country_code: Some(HOME_COUNTRY.to_string()),
            region: Some(String::new()),
            city: Some("Home".to_string()),
            ..Self::default()
        }
    }

    pub fn is_home(&self) -> bool {
        self.country.as_deref() == Some(HOME_COUNTRY)
    }

    /// True when no ISP is known yet (absent or blank).
    pub fn lacks_isp(&self) -> bool {
        self.isp.as_deref().is_none_or(str::is_empty)
    }
}

/// Accepts a JSON number, a numeric string, or null/garbage (as `None`).
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_home_annotation() {
        let geo = GeoAnnotation::home();
        assert!(geo.is_home());
        assert_eq!(geo.country_code.as_deref(), Some("HOME"));
        assert_eq!(geo.city.as_deref(), Some("Home"));
        assert_eq!(geo.region.as_deref(), Some(""));
        assert!(geo.latitude.is_none());
        assert!(geo.isp.is_none());
    }

    #[test]
    fn test_decodes_tautulli_geoip_payload() {
        let geo: GeoAnnotation = serde_json::from_value(json!({
            "city": "Mountain View",
            "code": "US",
            "continent": "NA",
            "country": "United States",
            "latitude": 37.4056,
            "longitude": "-122.0775",
            "postal_code": "94043",
            "region": "California",
            "timezone": "America/Los_Angeles",
            "accuracy": 1000
        }))
        .unwrap();

        assert_eq!(geo.country_code.as_deref(), Some("US"));
        assert_eq!(geo.latitude, Some(37.4056));
        assert_eq!(geo.longitude, Some(-122.0775));
        assert!(!geo.is_home());
        assert!(geo.lacks_isp());
    }

    #[test]
    fn test_empty_annotation_is_not_home() {
        let geo = GeoAnnotation::default();
        assert!(!geo.is_home());
        assert!(geo.lacks_isp());

        let geo = GeoAnnotation {
            isp: Some(String::new()),
            ..GeoAnnotation::default()
        };
        assert!(geo.lacks_isp());
    }
}
