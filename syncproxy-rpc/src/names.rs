//! Wire-level names shared with the head unit.
//!
//! These strings are part of the protocol vocabulary. Accessors use them
//! verbatim; nothing in this crate derives a key from a Rust identifier.

// Operation identifiers
pub const SEND_LOCATION: &str = "SendLocation";

// Envelope
pub const REQUEST: &str = "request";
pub const RESPONSE: &str = "response";
pub const NOTIFICATION: &str = "notification";
pub const FUNCTION_NAME: &str = "name";
pub const CORRELATION_ID: &str = "correlationID";
pub const PARAMETERS: &str = "parameters";

// SendLocation
pub const LONGITUDE_DEGREES: &str = "longitudeDegrees";
pub const LATITUDE_DEGREES: &str = "latitudeDegrees";
pub const LOCATION_NAME: &str = "locationName";
pub const LOCATION_DESCRIPTION: &str = "locationDescription";
pub const ADDRESS_LINES: &str = "addressLines";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const LOCATION_IMAGE: &str = "locationImage";

// Image
pub const VALUE: &str = "value";
pub const IMAGE_TYPE: &str = "imageType";
