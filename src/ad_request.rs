use serde::{Deserialize, Serialize};

/// Get-ad request posted to the Vistar endpoint.
/// Serialises as:
///  ```JSON
/// {
///   "api_key": "...", "network_id": "...",
///   "device_id": "lobby-1", "venue_id": "lobby-1",
///   "direct_connection": false, "latitude": 45.5, "longitude": 44.4,
///   "display_time": 1760821200, "number_of_screens": 1,
///   "display_area": [ { "id": "display-0", "width": 1920, ... } ],
///   "device_attribute": [ { "name": "UserAgent", "value": "..." } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AdRequest {
    pub api_key: String,
    pub network_id: String,
    pub device_id: String,
    pub venue_id: String,
    pub direct_connection: bool,
    pub latitude: f64,
    pub longitude: f64,
    /// Unix seconds; 0 until the request is finalised.
    pub display_time: i64,
    pub number_of_screens: i64,
    #[serde(rename = "display_area", default)]
    pub display_areas: Vec<DisplayArea>,
    #[serde(rename = "device_attribute", default)]
    pub device_attributes: Vec<DeviceAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DisplayArea {
    pub id: String,
    pub width: i64,
    pub height: i64,
    pub allow_audio: bool,
    #[serde(default)]
    pub supported_media: Vec<String>,
    /// Seconds a static creative stays on screen.
    pub static_duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceAttribute {
    pub name: String,
    pub value: String,
}

impl DeviceAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
