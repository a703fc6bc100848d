//! Library for packing PNG images into multiplatform icon container files.
//!
//! Given square, PNG-encoded source images at specific pixel sizes, this
//! crate builds the two common container formats entirely in memory:
//!
//! * Windows `.ico` files ([`encode_ico`]), which double as favicons;
//! * Apple `.icns` files ([`encode_icns`]), which embed the PNG data
//!   directly for modern block types and fall back to RLE-compressed
//!   channel planes plus an alpha mask for the legacy 8-bit types.
//!
//! The encoders perform no I/O, no resizing and no format conversion:
//! producing correctly sized inputs, and writing the returned buffers
//! anywhere, is the caller's job.  Each encode call is independent and
//! side-effect-free, so concurrent calls are safe.
//!
//! See https://en.wikipedia.org/wiki/ICO_(file_format) and
//! https://en.wikipedia.org/wiki/Apple_Icon_Image_format for more
//! information about the file formats.

#![warn(missing_docs)]

mod error;
mod icns;
mod ico;
mod icontype;
mod image;
mod pngio;
pub mod rle;

pub use crate::error::EncodeError;
pub use crate::icns::{encode_icns, write_icns};
pub use crate::ico::{encode_ico, write_ico};
pub use crate::icontype::{BlockKind, IconBlockSpec, OSType,
                          ICON_BLOCK_TABLE};
pub use crate::image::{select_sizes, Image, PixelFormat, SizedImage};
