use crate::config::AccessorConfig;
use crate::names;
use crate::value::{FromValue, IntoValue, Value};

/// How the head unit should treat an image reference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    /// Built-in image identified by a numeric value
    Static,
    /// File previously uploaded by the application
    Dynamic,
}

impl IntoValue for ImageType {
    fn into_value(self) -> Value {
        let name: &'static str = self.into();
        Value::from(name)
    }
}

impl FromValue for ImageType {
    fn from_value(value: &Value, _config: &AccessorConfig) -> Option<Self> {
        value.as_str()?.parse().ok()
    }
}

crate::rpc_struct! {
    /// Reference to an image shown by the head unit.
    pub struct Image {
        /// Static image id or uploaded file name, depending on the image type.
        value / set_value: String => names::VALUE,
        image_type / set_image_type: ImageType => names::IMAGE_TYPE,
    }
}

impl Image {
    pub fn dynamic(file_name: impl Into<String>) -> Self {
        let mut image = Image::new();
        image.set_value(Some(file_name.into()));
        image.set_image_type(Some(ImageType::Dynamic));
        image
    }

    pub fn static_image(id: impl Into<String>) -> Self {
        let mut image = Image::new();
        image.set_value(Some(id.into()));
        image.set_image_type(Some(ImageType::Static));
        image
    }
}
