// src/sheet/image.rs
use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat};

use crate::core::net::ByteFetcher;
use crate::error::{Result, SheetError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// PNG when the URL path ends in `.png` (any case), JPEG for everything else.
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let file = path.rsplit('/').next().unwrap_or(path);
        match file.rsplit_once('.') {
            Some((_, ext)) if ext.eq_ignore_ascii_case("png") => ImageKind::Png,
            _ => ImageKind::Jpeg,
        }
    }
}

/// How the image goes into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageData {
    /// The fetched JPEG stream, embedded untouched under DCTDecode.
    Jpeg { bytes: Vec<u8>, gray: bool },
    /// 8-bit RGB for a Flate stream. `alpha` is present only when some pixel
    /// is not fully opaque.
    Raw { rgb: Vec<u8>, alpha: Option<Vec<u8>> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: ImageData,
}

fn raw_pixels(img: &DynamicImage) -> ImageData {
    let rgba = img.to_rgba8();
    let rgb = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
    let alpha = rgba
        .pixels()
        .any(|p| p.0[3] < u8::MAX)
        .then(|| rgba.pixels().map(|p| p.0[3]).collect());
    ImageData::Raw { rgb, alpha }
}

fn check_size(img: &DynamicImage) -> Result<(u32, u32)> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(SheetError::EmptyImage { width, height });
    }
    Ok((width, height))
}

/// Decode fully so broken files are caught before they reach the PDF.
/// Gray and RGB JPEGs keep their original bytes; CMYK and other JPEG
/// layouts fall back to raw RGB.
fn decode_jpeg(bytes: Vec<u8>) -> Result<DecodedImage> {
    let decoder = JpegDecoder::new(Cursor::new(bytes.as_slice()))?;
    let original = decoder.original_color_type();
    let img = DynamicImage::from_decoder(decoder)?;
    let (width, height) = check_size(&img)?;

    let data = match original {
        ExtendedColorType::L8 => ImageData::Jpeg { bytes, gray: true },
        ExtendedColorType::Rgb8 => ImageData::Jpeg { bytes, gray: false },
        _ => raw_pixels(&img),
    };
    Ok(DecodedImage { width, height, data })
}

pub fn decode(bytes: Vec<u8>, kind: ImageKind) -> Result<DecodedImage> {
    match kind {
        ImageKind::Jpeg => decode_jpeg(bytes),
        ImageKind::Png => {
            let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?;
            let (width, height) = check_size(&img)?;
            Ok(DecodedImage { width, height, data: raw_pixels(&img) })
        }
    }
}

/// What the card gets for its image slot.
#[derive(Clone, Debug, PartialEq)]
pub enum EmbedOutcome {
    Embedded(DecodedImage),
    Skipped(String),
}

/// Fetch and decode one card image. Never fails: any error becomes `Skipped`.
pub fn load_image(fetcher: &dyn ByteFetcher, url: &str) -> EmbedOutcome {
    let kind = ImageKind::from_url(url);
    match fetcher.fetch_bytes(url).and_then(|bytes| decode(bytes, kind)) {
        Ok(img) => EmbedOutcome::Embedded(img),
        Err(e) => EmbedOutcome::Skipped(e.to_string()),
    }
}
