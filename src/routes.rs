//! Route Paths
//!
//! Builders for client-side paths. Route and query params come back from
//! the router already decoded.

#[cfg(test)]
use percent_encoding::percent_decode_str;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same reserved set as `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";

/// Prefix shared by every protected route
pub const PLACES_PREFIX: &str = "/places";

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Single `decodeURIComponent` pass, as the router applies to params
#[cfg(test)]
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// `/places/{district}`
pub fn district_path(district: &str) -> String {
    format!("{}/{}", PLACES_PREFIX, encode_segment(district))
}

/// `/places/{district}/{place}`
pub fn place_path(district: &str, place: &str) -> String {
    format!("{}/{}/{}", PLACES_PREFIX, encode_segment(district), encode_segment(place))
}
