//! Maps flat host parameters (`vistar.*` keys) onto a Vistar get-ad request.
//!
//! ```no_run
//! use vistar_config::{AdConfig, AdRequest, params};
//!
//! let params = params::from_json(r#"{ "vistar.api_key": "abc", "vistar.venue_id": "lobby-1" }"#)?;
//! let config = AdConfig::parse(&params);
//!
//! let mut req = AdRequest::default();
//! config.update_ad_request(&mut req);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod ad_config;
pub mod ad_request;
pub mod params;

pub use ad_config::{AdConfig, defaults, keys};
pub use ad_request::{AdRequest, DeviceAttribute, DisplayArea};
pub use params::{Lookup, ParamMap};
