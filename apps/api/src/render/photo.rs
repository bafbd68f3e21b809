use serde::Serialize;

use crate::document::model::CvDocument;
use crate::render::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoShape {
    Square,
    Rounded,
    Circle,
    /// Rounded and slightly rotated.
    Tilted,
}

/// How a template masks the photo. The framing offset is never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoStyle {
    pub shape: PhotoShape,
    pub grayscale: bool,
    pub fallback: Option<Icon>,
}

impl PhotoStyle {
    pub const fn new(shape: PhotoShape) -> Self {
        Self {
            shape,
            grayscale: false,
            fallback: None,
        }
    }

    pub const fn grayscale(mut self) -> Self {
        self.grayscale = true;
        self
    }

    pub const fn with_fallback(mut self, icon: Icon) -> Self {
        self.fallback = Some(icon);
        self
    }
}

/// The framed photo as rendered. `draggable` is true only when an image is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoView {
    pub image: Option<String>,
    /// Vertical background position in percent.
    pub offset: f64,
    /// CSS `background-position` for `offset`.
    pub position: String,
    pub shape: PhotoShape,
    pub grayscale: bool,
    pub draggable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Icon>,
}

impl PhotoView {
    pub fn framed(doc: &CvDocument, style: PhotoStyle) -> Self {
        let has_image = doc.has_photo();
        Self {
            image: doc.profile_image.clone(),
            offset: doc.profile_image_pos,
            position: background_position(doc.profile_image_pos),
            shape: style.shape,
            grayscale: style.grayscale && has_image,
            draggable: has_image,
            fallback: if has_image { None } else { style.fallback },
        }
    }
}

fn background_position(offset: f64) -> String {
    format!("50% {offset}%")
}
