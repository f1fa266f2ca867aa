use super::image::Image;
use crate::names;

crate::rpc_request! {
    /// Asks the head unit to display a point of interest and offer navigation
    /// to it.
    ///
    /// Every field is optional. Getters return `None` both when a field is
    /// unset and when the store holds a value of the wrong shape for it.
    pub struct SendLocation => names::SEND_LOCATION {
        longitude_degrees / set_longitude_degrees: f64 => names::LONGITUDE_DEGREES,
        latitude_degrees / set_latitude_degrees: f64 => names::LATITUDE_DEGREES,
        /// Name or title of the location.
        location_name / set_location_name: String => names::LOCATION_NAME,
        /// Description of the location or establishment.
        location_description / set_location_description: String => names::LOCATION_DESCRIPTION,
        /// Postal address, one entry per line.
        address_lines / set_address_lines: Vec<String> => names::ADDRESS_LINES,
        /// Phone number of the location or establishment.
        phone_number / set_phone_number: String => names::PHONE_NUMBER,
        /// Icon for the location, when the head unit supports images.
        location_image / set_location_image: Image => names::LOCATION_IMAGE,
    }
}
