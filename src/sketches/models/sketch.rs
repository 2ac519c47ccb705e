use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{
    app::models::api_error::ApiError,
    sketches::{errors::SketchesApiError, util::data_uri},
};

pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const INK_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// An immutable copy of a pane's raster buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    image: RgbaImage,
}

impl Sketch {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND_COLOR),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|pixel| *pixel == BACKGROUND_COLOR)
    }

    pub fn to_png(&self) -> Result<Vec<u8>, ApiError> {
        let mut cursor = Cursor::new(Vec::new());

        match self.image.write_to(&mut cursor, ImageFormat::Png) {
            Ok(_) => Ok(cursor.into_inner()),
            Err(e) => {
                tracing::error!("failed to encode sketch as png: {}", e);
                Err(SketchesApiError::EncodingFailed.value())
            }
        }
    }

    pub fn to_base64(&self) -> Result<String, ApiError> {
        Ok(base64::encode(self.to_png()?))
    }

    pub fn to_data_uri(&self) -> Result<String, ApiError> {
        Ok(data_uri::png_data_uri(&self.to_base64()?))
    }

    pub fn from_png(bytes: &[u8]) -> Result<Self, ApiError> {
        match image::load_from_memory(bytes) {
            Ok(decoded) => Ok(Self::from_image(decoded.to_rgba8())),
            Err(e) => {
                tracing::warn!("failed to decode image: {}", e);
                Err(SketchesApiError::UndecodableImage.value())
            }
        }
    }

    /// Decodes a `data:image/...;base64,` URI or a bare base64 image.
    pub fn from_encoded(value: &str) -> Result<Self, ApiError> {
        let Ok(bytes) = base64::decode(data_uri::base64_payload(value)) else {
            tracing::warn!("pasted image is not valid base64");
            return Err(SketchesApiError::UndecodableImage.value());
        };

        Self::from_png(&bytes)
    }
}
