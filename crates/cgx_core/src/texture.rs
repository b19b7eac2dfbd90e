//! Uncompressed 24-bit BMP textures
//!
//! Only the layout the exercises ship is accepted: a `BM` file header, a
//! BITMAPINFOHEADER (or a larger header that extends it), one plane, 24 bits
//! per pixel and no compression. The header is checked here so unsupported
//! files are reported by field; pixel decoding and encoding go through the
//! `image` crate's BMP codec.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::{BmpDecoder, BmpEncoder};
use image::{ColorType, ExtendedColorType, ImageDecoder};

use crate::asset_cache::Asset;
use crate::asset_error::AssetError;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_MIN_LEN: u32 = 40;
const BI_RGB: u32 = 0;

/// Decoded RGB8 texture
///
/// Rows are tightly packed and ordered bottom row first, matching both the
/// BMP storage order and the origin convention of texture uploads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn read_i32(data: &[u8], at: usize) -> i32 {
    read_u32(data, at) as i32
}

/// Reverse the row order of tightly packed RGB8 rows
fn flip_rows(pixels: &[u8], width: u32) -> Vec<u8> {
    pixels
        .chunks_exact(3 * width as usize)
        .rev()
        .flatten()
        .copied()
        .collect()
}

impl Texture {
    /// Decode a BMP image held in memory
    pub fn decode(data: &[u8]) -> Result<Self, AssetError> {
        if data.len() < FILE_HEADER_LEN + INFO_HEADER_MIN_LEN as usize {
            return Err(AssetError::Parse(format!(
                "file is {} bytes, too short for BMP headers",
                data.len()
            )));
        }
        if &data[0..2] != b"BM" {
            return Err(AssetError::Parse("missing BM signature".to_string()));
        }

        let data_offset = read_u32(data, 10) as usize;
        let info_len = read_u32(data, 14);
        if info_len < INFO_HEADER_MIN_LEN {
            return Err(AssetError::Unsupported(format!(
                "info header of {} bytes (need at least {})",
                info_len, INFO_HEADER_MIN_LEN
            )));
        }
        let headers_len = FILE_HEADER_LEN + info_len as usize;
        if data_offset < headers_len {
            return Err(AssetError::Parse(format!(
                "pixel data offset {} lies inside the {} header bytes",
                data_offset, headers_len
            )));
        }

        let width = read_i32(data, 18);
        let height = read_i32(data, 22);
        if width <= 0 || height <= 0 {
            return Err(AssetError::Unsupported(format!(
                "image size {}x{} (must be positive)",
                width, height
            )));
        }

        let planes = read_u16(data, 26);
        if planes != 1 {
            return Err(AssetError::Unsupported(format!("{} planes (need 1)", planes)));
        }
        let bits = read_u16(data, 28);
        if bits != 24 {
            return Err(AssetError::Unsupported(format!("{} bits per pixel (need 24)", bits)));
        }
        let compression = read_u32(data, 30);
        if compression != BI_RGB {
            return Err(AssetError::Unsupported(format!(
                "compression type {} (need uncompressed)",
                compression
            )));
        }

        // Rows are padded to a multiple of four bytes
        let stride = (3 * width as usize + 3) & !3;
        let needed = stride
            .checked_mul(height as usize)
            .and_then(|n| n.checked_add(data_offset));
        match needed {
            Some(n) if n <= data.len() => {}
            _ => {
                return Err(AssetError::Parse(format!(
                    "pixel data truncated: {}x{} image at offset {} in {} bytes",
                    width,
                    height,
                    data_offset,
                    data.len()
                )))
            }
        }

        let decoder = BmpDecoder::new(Cursor::new(data))?;
        if decoder.color_type() != ColorType::Rgb8 {
            return Err(AssetError::Unsupported(format!(
                "decoded color type {:?} (need RGB8)",
                decoder.color_type()
            )));
        }
        let (width, height) = decoder.dimensions();
        let len = usize::try_from(decoder.total_bytes())
            .map_err(|_| AssetError::Unsupported(format!("{}x{} image is too large", width, height)))?;
        let mut top_down = vec![0; len];
        decoder.read_image(&mut top_down)?;

        Ok(Self {
            width,
            height,
            pixels: flip_rows(&top_down, width),
        })
    }

    /// Read and decode a BMP file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| AssetError::open(path, e))?;
        let texture = Self::decode(&data)?;
        log::info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Encode as an uncompressed 24-bit BMP
    pub fn encode(&self) -> Result<Vec<u8>, AssetError> {
        let top_down = flip_rows(&self.pixels, self.width);
        let mut out = Vec::new();
        BmpEncoder::new(&mut out).encode(&top_down, self.width, self.height, ExtendedColorType::Rgb8)?;
        Ok(out)
    }

    /// Build a texture from tightly packed RGB8 rows, bottom row first
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AssetError> {
        if width == 0 || height == 0 || pixels.len() != 3 * width as usize * height as usize {
            return Err(AssetError::Parse(format!(
                "{} bytes do not form a {}x{} RGB image",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB bytes, bottom row first
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at column `x` of row `y` (row 0 is the bottom)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 3 * (y as usize * self.width as usize + x as usize);
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Whether both sides are powers of two, as older GL drivers require
    pub fn is_power_of_two(&self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }
}

impl Asset for Texture {
    fn load_from_file(path: &Path) -> Result<Self, AssetError> {
        Self::load(path)
    }
}
