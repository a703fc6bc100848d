//! Encoding of Windows icon (.ico) containers.
//!
//! Every entry is stored as its PNG payload, unmodified; PNG-compressed
//! entries are understood by all consumers from Windows Vista on, and the
//! same encoder therefore also produces favicons.  All multi-byte fields
//! are little-endian, the opposite of ICNS.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;
use tracing::debug;

use crate::error::EncodeError;
use crate::image::SizedImage;

/// The length of an ICONDIR file header, in bytes:
const FILE_HEADER_LENGTH: u32 = 6;

/// The length of one ICONDIRENTRY, in bytes:
const DIR_ENTRY_LENGTH: u32 = 16;

/// The resource type number for icons (as opposed to cursors).
const RESOURCE_TYPE_ICON: u16 = 1;

/// Encodes the supplied images into an in-memory ICO file.
///
/// Entries appear in input order, both in the directory and in the payload
/// region.  Fails with [`EncodeError::NoSizes`] if the input is empty.
pub fn encode_ico<'a, I>(images: I) -> Result<Vec<u8>, EncodeError>
    where I: IntoIterator<Item = &'a SizedImage>
{
    let mut output = Vec::new();
    write_ico(images, &mut output)?;
    Ok(output)
}

/// Writes the supplied images to `writer` as an ICO file.
pub fn write_ico<'a, I, W>(images: I, mut writer: W)
                           -> Result<(), EncodeError>
    where I: IntoIterator<Item = &'a SizedImage>,
          W: Write
{
    let images: Vec<&SizedImage> = images.into_iter().collect();
    if images.is_empty() {
        return Err(EncodeError::NoSizes);
    }
    debug!(entries = images.len(), "encoding ico directory");
    writer.write_u16::<LittleEndian>(0)?; // reserved
    writer.write_u16::<LittleEndian>(RESOURCE_TYPE_ICON)?;
    writer.write_u16::<LittleEndian>(images.len() as u16)?;
    let mut data_offset = FILE_HEADER_LENGTH +
                          DIR_ENTRY_LENGTH * images.len() as u32;
    for image in &images {
        writer.write_u8(size_byte(image.size()))?; // width
        writer.write_u8(size_byte(image.size()))?; // height
        writer.write_u8(0)?; // no palette
        writer.write_u8(0)?; // reserved
        writer.write_u16::<LittleEndian>(0)?; // color planes
        writer.write_u16::<LittleEndian>(32)?; // bits per pixel
        writer.write_u32::<LittleEndian>(image.data().len() as u32)?;
        writer.write_u32::<LittleEndian>(data_offset)?;
        data_offset += image.data().len() as u32;
    }
    for image in &images {
        writer.write_all(image.data())?;
    }
    Ok(())
}

/// The 8-bit width/height field, where 0 stands in for 256 (and anything
/// larger; consumers read the true dimensions from the PNG itself).
fn size_byte(size: u32) -> u8 {
    if size >= 256 { 0 } else { size as u8 }
}
