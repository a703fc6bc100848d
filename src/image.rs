use std::fmt;

use crate::error::EncodeError;

/// A square source image at a specific pixel size, as PNG-encoded bytes.
///
/// This is the unit the caller hands to the encoders.  The `size` label is
/// trusted: the encoders never re-measure the PNG, they only use the label
/// to place the image within the container.
#[derive(Clone)]
pub struct SizedImage {
    size: u32,
    data: Vec<u8>,
}

impl SizedImage {
    /// Creates a sized image from PNG-encoded bytes.
    pub fn new(size: u32, data: Vec<u8>) -> SizedImage {
        SizedImage { size, data }
    }

    /// Returns the width and height of the image, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the PNG-encoded image content.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for SizedImage {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.debug_struct("SizedImage")
           .field("size", &self.size)
           .field("data_len", &self.data.len())
           .finish()
    }
}

/// Plucks one image per requested size, in request order.
///
/// This is the validation a caller assembling encoder inputs must perform:
/// the encoders themselves either skip sizes they cannot place (ICNS) or
/// trust the list they are given (ICO), so a hole in the generated set must
/// be caught here, with [`EncodeError::MissingSize`] naming the first
/// absent size.
pub fn select_sizes<'a>(images: &'a [SizedImage],
                        sizes: &[u32])
                        -> Result<Vec<&'a SizedImage>, EncodeError> {
    let mut selected = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let image = images.iter()
                          .find(|image| image.size() == size)
                          .ok_or(EncodeError::MissingSize(size))?;
        selected.push(image);
    }
    Ok(selected)
}

/// A decoded raster image.
#[derive(Clone)]
pub struct Image {
    pub(crate) format: PixelFormat,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Box<[u8]>,
}

impl Image {
    /// Creates a new image with all pixel data set to zero.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Image {
        let data_bits = format.bits_per_pixel() * width * height;
        let data_bytes = (data_bits + 7) / 8;
        Image {
            format,
            width,
            height,
            data: vec![0u8; data_bytes as usize].into_boxed_slice(),
        }
    }

    /// Creates a copy of this image using the RGBA pixel format (that is,
    /// `foo.to_rgba().pixel_format()` will always return
    /// `PixelFormat::RGBA`).  If the source image is already in RGBA
    /// format, this is equivalent to simply calling `clone()`.
    pub fn to_rgba(&self) -> Image {
        let rgba_data = match self.format {
            PixelFormat::RGBA => self.data.clone(),
            PixelFormat::RGB => rgb_to_rgba(&self.data),
            PixelFormat::GrayAlpha => gray_alpha_to_rgba(&self.data),
            PixelFormat::Gray => gray_to_rgba(&self.data),
        };
        Image {
            format: PixelFormat::RGBA,
            width: self.width,
            height: self.height,
            data: rgba_data,
        }
    }

    /// Returns the format in which this image's pixel data is stored.
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the image's pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the image's pixel data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// A format for storing pixel data in an image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    /// 32-bit color with alpha channel.
    RGBA,
    /// 24-bit color with no alpha.
    RGB,
    /// 8-bit grayscale with 8-bit alpha.
    GrayAlpha,
    /// 8-bit grayscale with no alpha.
    Gray,
}

impl PixelFormat {
    /// Returns the number of bits needed to store a single pixel in this
    /// format.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::RGBA => 32,
            PixelFormat::RGB => 24,
            PixelFormat::GrayAlpha => 16,
            PixelFormat::Gray => 8,
        }
    }
}

/// Converts RGB image data into RGBA.
fn rgb_to_rgba(rgb: &[u8]) -> Box<[u8]> {
    assert_eq!(rgb.len() % 3, 0);
    let num_pixels = rgb.len() / 3;
    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        rgba.extend_from_slice(&rgb[(3 * i)..(3 * i + 3)]);
        rgba.push(u8::MAX);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale-with-alpha image data into RGBA.
fn gray_alpha_to_rgba(gray_alpha: &[u8]) -> Box<[u8]> {
    assert_eq!(gray_alpha.len() % 2, 0);
    let num_pixels = gray_alpha.len() / 2;
    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        let value = gray_alpha[2 * i];
        rgba.push(value);
        rgba.push(value);
        rgba.push(value);
        rgba.push(gray_alpha[2 * i + 1]);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale image data into RGBA.
fn gray_to_rgba(gray: &[u8]) -> Box<[u8]> {
    let num_pixels = gray.len();
    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for &value in gray {
        rgba.push(value);
        rgba.push(value);
        rgba.push(value);
        rgba.push(u8::MAX);
    }
    rgba.into_boxed_slice()
}
