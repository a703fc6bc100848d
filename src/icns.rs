//! Encoding of Apple Icon Image (.icns) containers.
//!
//! An ICNS file is an 8-byte header (`icns` magic plus a big-endian total
//! file length) followed by icon blocks, each carrying its own 8-byte
//! header: a 4-byte type tag and a big-endian length that includes the
//! header itself.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{Cursor, Write};
use tracing::{debug, trace};

use crate::error::EncodeError;
use crate::icontype::{BlockKind, OSType, ICON_BLOCK_TABLE};
use crate::image::{Image, SizedImage};
use crate::rle;

/// The first four bytes of an ICNS file:
const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of the file header and of each icon block header, in bytes:
const HEADER_LENGTH: u32 = 8;

/// Encodes the supplied images into an in-memory ICNS file.
///
/// Blocks are emitted in [`ICON_BLOCK_TABLE`] order; a table row with no
/// matching image is skipped, and an image whose size matches no row
/// contributes nothing.  Fails with [`EncodeError::EmptyOutput`] if no
/// image matched any row at all.
pub fn encode_icns<'a, I>(images: I) -> Result<Vec<u8>, EncodeError>
    where I: IntoIterator<Item = &'a SizedImage>
{
    let mut output = Vec::new();
    write_icns(images, &mut output)?;
    Ok(output)
}

/// Writes the supplied images to `writer` as an ICNS file.
///
/// Equivalent to [`encode_icns`]; the file is still assembled in memory
/// first, since the header must state the total length up front.
pub fn write_icns<'a, I, W>(images: I, mut writer: W)
                            -> Result<(), EncodeError>
    where I: IntoIterator<Item = &'a SizedImage>,
          W: Write
{
    let images: Vec<&SizedImage> = images.into_iter().collect();
    let mut body: Vec<u8> = Vec::new();
    for spec in ICON_BLOCK_TABLE {
        let image = match images.iter().find(|image| image.size() == spec.size) {
            Some(image) => *image,
            None => continue,
        };
        match spec.kind {
            BlockKind::Embedded(ostype) => {
                trace!(size = spec.size, %ostype, "embedding png block");
                write_block(&mut body, ostype, image.data())?;
            }
            BlockKind::Legacy { color, mask } => {
                trace!(size = spec.size, %color, %mask,
                       "packing legacy block pair");
                let (colors, masks) = legacy_block_bodies(image)?;
                write_block(&mut body, color, &colors)?;
                write_block(&mut body, mask, &masks)?;
            }
        }
    }
    if body.is_empty() {
        return Err(EncodeError::EmptyOutput);
    }
    debug!(file_length = HEADER_LENGTH as usize + body.len(),
           "encoded icns body");
    writer.write_all(ICNS_MAGIC_LITERAL)?;
    writer.write_u32::<BigEndian>(HEADER_LENGTH + body.len() as u32)?;
    writer.write_all(&body)?;
    Ok(())
}

/// Writes one icon block: the 4-byte type tag, the header-inclusive
/// big-endian length, then the body.
fn write_block<W: Write>(mut writer: W,
                         ostype: OSType,
                         body: &[u8])
                         -> Result<(), EncodeError> {
    let OSType(raw) = ostype;
    writer.write_all(&raw)?;
    writer.write_u32::<BigEndian>(HEADER_LENGTH + body.len() as u32)?;
    writer.write_all(body)?;
    Ok(())
}

/// Builds the two bodies of a legacy block pair from a PNG: the
/// concatenated RLE-packed R, G and B planes, and the raw alpha plane.
fn legacy_block_bodies(image: &SizedImage)
                       -> Result<(Vec<u8>, Vec<u8>), EncodeError> {
    let decoded = Image::read_png(Cursor::new(image.data()))
        .map_err(|source| EncodeError::PngDecode { size: image.size(), source })?
        .to_rgba();
    let num_pixels = decoded.data().len() / 4;
    let mut red = Vec::with_capacity(num_pixels);
    let mut green = Vec::with_capacity(num_pixels);
    let mut blue = Vec::with_capacity(num_pixels);
    let mut alpha = Vec::with_capacity(num_pixels);
    for pixel in decoded.data().chunks_exact(4) {
        red.push(pixel[0]);
        green.push(pixel[1]);
        blue.push(pixel[2]);
        alpha.push(pixel[3]);
    }
    let mut colors = rle::pack(&red);
    colors.extend_from_slice(&rle::pack(&green));
    colors.extend_from_slice(&rle::pack(&blue));
    Ok((colors, alpha))
}
