use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const COUNTRY_INFO_KEY: &str = "country_info";
const ASN_INFO_KEY: &str = "asn_info";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("CIRCL response is not a valid list or is empty")]
    EmptyOrNotAList,
    #[error("'country_info' missing or not a map")]
    CountryInfoMissing,
    #[error("Latitude/Longitude invalid or missing")]
    CoordinatesInvalid,
}

/// Normalized geolocation record returned to callers. `ip` is echoed from
/// the inbound request, never taken from the upstream body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeoResult {
    pub ip: String,
    pub country: String,
    pub country_code: Option<String>,
    pub isp: Option<String>,
    pub asn: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Reshapes a raw CIRCL geolookup body into a [`GeoResult`].
///
/// The upstream body is a list of loosely-typed entries: the first entry
/// must carry the `country_info` map (country name, ISO code, average
/// coordinates), and any entry may carry an `asn_info` map with the
/// network operator. Coordinates are mandatory; operator info is not.
pub fn normalize(ip: &str, raw: &Value) -> Result<GeoResult, NormalizeError> {
    let entries = match raw.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(NormalizeError::EmptyOrNotAList),
    };

    let country_info = entries[0]
        .get(COUNTRY_INFO_KEY)
        .and_then(Value::as_object)
        .ok_or(NormalizeError::CountryInfoMissing)?;

    let country = country_info
        .get("Country")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();

    let country_code = country_info
        .get("ISO 3166 Country Code")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let latitude =
        as_f64(country_info.get("Latitude (average)")).ok_or(NormalizeError::CoordinatesInvalid)?;
    let longitude = as_f64(country_info.get("Longitude (average)"))
        .ok_or(NormalizeError::CoordinatesInvalid)?;

    // First entry carrying an AS organization wins; later matches are ignored.
    let mut isp = None;
    let mut asn = None;
    for entry in entries {
        let asn_info = match entry.get(ASN_INFO_KEY).and_then(Value::as_object) {
            Some(asn_info) => asn_info,
            None => continue,
        };
        if let Some(org) = asn_info.get("AS Organization").and_then(Value::as_str) {
            isp = Some(org.to_string());
            asn = as_u32(asn_info.get("AS Number"));
            break;
        }
    }

    Ok(GeoResult {
        ip: ip.to_string(),
        country,
        country_code,
        isp,
        asn,
        latitude,
        longitude,
    })
}

// CIRCL serves the averaged-coordinates dataset with stringified numbers,
// so both JSON numbers and numeric strings must convert.
fn as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_u32(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
