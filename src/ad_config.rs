use chrono::Utc;
use tracing::{debug, trace};

use crate::ad_request::{AdRequest, DeviceAttribute, DisplayArea};
use crate::params::{ParamMap, parse_array, parse_bool, parse_float, parse_int, parse_string};

/// Recognised parameter keys. Anything else in the map is ignored.
pub mod keys {
    pub const URL: &str = "vistar.url";
    pub const API_KEY: &str = "vistar.api_key";
    pub const NETWORK_ID: &str = "vistar.network_id";
    pub const VENUE_ID: &str = "vistar.venue_id";
    pub const DIRECT_CONNECTION: &str = "vistar.direct_connection";
    pub const LATITUDE: &str = "vistar.latitude";
    pub const LONGITUDE: &str = "vistar.longitude";
    pub const MIME_TYPES: &str = "vistar.mime_types";
    pub const WIDTH: &str = "vistar.width";
    pub const HEIGHT: &str = "vistar.height";
    pub const ALLOW_AUDIO: &str = "vistar.allow_audio";
    pub const STATIC_DURATION: &str = "vistar.static_duration";
}

/// Values used when a key is absent or malformed.
pub mod defaults {
    pub const URL: &str = "https://api.vistarmedia.com/api/v1/get_ad/json";
    pub const DIRECT_CONNECTION: bool = false;
    pub const LATITUDE: f64 = 0.0;
    pub const LONGITUDE: f64 = 0.0;
    pub const MIME_TYPES: &[String] = &[];
    pub const WIDTH: i64 = 1920;
    pub const HEIGHT: i64 = 1080;
    pub const ALLOW_AUDIO: bool = false;
    pub const STATIC_DURATION: i64 = 10;
    pub const NUMBER_OF_SCREENS: i64 = 1;
    pub const DISPLAY_AREA_ID: &str = "display-0";
}

/// Parsed Vistar settings: the endpoint plus the request defaults every
/// outgoing [`AdRequest`] is finalised with.
#[derive(Debug, Clone, Default)]
pub struct AdConfig {
    url: String,
    base_request: AdRequest,
}

impl AdConfig {
    /// Builds the endpoint and base request from host parameters.
    /// Never fails; see [`defaults`] for what stands in for missing keys.
    pub fn parse(params: &ParamMap) -> Self {
        let url = parse_string(params, keys::URL, defaults::URL);
        // Vistar identifies the player by venue, so both ids share one value.
        let venue_id = parse_string(params, keys::VENUE_ID, "");

        let display_area = DisplayArea {
            id: defaults::DISPLAY_AREA_ID.to_string(),
            width: parse_int(params, keys::WIDTH, defaults::WIDTH),
            height: parse_int(params, keys::HEIGHT, defaults::HEIGHT),
            allow_audio: parse_bool(params, keys::ALLOW_AUDIO, defaults::ALLOW_AUDIO),
            supported_media: parse_array(params, keys::MIME_TYPES, defaults::MIME_TYPES),
            static_duration: parse_int(params, keys::STATIC_DURATION, defaults::STATIC_DURATION),
        };

        let base_request = AdRequest {
            api_key: parse_string(params, keys::API_KEY, ""),
            network_id: parse_string(params, keys::NETWORK_ID, ""),
            device_id: venue_id.clone(),
            venue_id,
            direct_connection: parse_bool(
                params,
                keys::DIRECT_CONNECTION,
                defaults::DIRECT_CONNECTION,
            ),
            latitude: parse_float(params, keys::LATITUDE, defaults::LATITUDE),
            longitude: parse_float(params, keys::LONGITUDE, defaults::LONGITUDE),
            display_time: 0,
            number_of_screens: defaults::NUMBER_OF_SCREENS,
            display_areas: vec![display_area],
            device_attributes: default_device_attributes(),
        };

        debug!(
            url = %url,
            network_id = %base_request.network_id,
            venue_id = %base_request.venue_id,
            "parsed vistar config"
        );

        Self { url, base_request }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn base_request(&self) -> &AdRequest {
        &self.base_request
    }

    /// Finalises `req` in place: identity and geo fields are overwritten,
    /// `display_time` is stamped with the current time, and the base display
    /// area and device attributes are appended after the caller's entries.
    pub fn update_ad_request(&self, req: &mut AdRequest) {
        let base = &self.base_request;

        req.api_key = base.api_key.clone();
        req.network_id = base.network_id.clone();
        req.device_id = base.device_id.clone();
        req.venue_id = base.venue_id.clone();
        req.direct_connection = base.direct_connection;
        req.latitude = base.latitude;
        req.longitude = base.longitude;
        req.number_of_screens = base.number_of_screens;
        req.display_time = Utc::now().timestamp();

        req.display_areas.extend(base.display_areas.iter().cloned());
        req.device_attributes
            .extend(base.device_attributes.iter().cloned());

        trace!(
            display_areas = req.display_areas.len(),
            device_attributes = req.device_attributes.len(),
            display_time = req.display_time,
            "updated ad request"
        );
    }

    /// A finalised request carrying only the configured defaults.
    pub fn ad_request(&self) -> AdRequest {
        let mut req = AdRequest::default();
        self.update_ad_request(&mut req);
        req
    }
}

fn default_device_attributes() -> Vec<DeviceAttribute> {
    vec![
        DeviceAttribute::new(
            "UserAgent",
            format!("vistar-config/{}", env!("CARGO_PKG_VERSION")),
        ),
        DeviceAttribute::new("Platform", std::env::consts::OS),
    ]
}
