// City domain model
use serde::Deserialize;

/// A single city entry as returned by the world-clocks endpoint.
///
/// Records are replaced wholesale on every refresh; nothing is merged or
/// patched in place. The payload carries more fields than these (preformatted
/// time strings, the IANA timezone name) which are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    /// Display name, unique within one response.
    pub city: String,
    /// Fixed signed UTC offset in hours. May be fractional (5.5, 5.75) and
    /// may exceed +/-12.
    pub offset_hours: f64,
    /// Advisory day/night flag from the data source, never derived locally.
    #[serde(default)]
    pub is_day: bool,
    /// Advisory DST flag from the data source, never derived locally.
    #[serde(default)]
    pub is_dst: bool,
}
