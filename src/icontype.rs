use std::fmt;
use std::str::FromStr;

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon block.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let &OSType(raw) = self;
        for &byte in &raw {
            write!(out, "{}", byte as char)?;
        }
        Ok(())
    }
}

impl FromStr for OSType {
    type Err = String;

    fn from_str(input: &str) -> Result<OSType, String> {
        let bytes = input.as_bytes();
        if bytes.len() != 4 {
            Err(format!("OSType string must be 4 bytes (was {})", bytes.len()))
        } else {
            let mut raw = [0u8; 4];
            raw.clone_from_slice(bytes);
            Ok(OSType(raw))
        }
    }
}

/// How an icon block stores its pixel data within an ICNS file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockKind {
    /// The block body is the PNG file for this size, embedded unchanged.
    Embedded(OSType),
    /// Two consecutive blocks: RLE-compressed R/G/B channel planes under
    /// the color type, then an uncompressed 8-bit alpha mask under the mask
    /// type.
    Legacy {
        /// Type tag of the color-data block.
        color: OSType,
        /// Type tag of the companion mask block.
        mask: OSType,
    },
}

/// One row of the size-to-block-type table.
#[derive(Clone, Copy, Debug)]
pub struct IconBlockSpec {
    /// Width and height of the (square) source image, in pixels.
    pub size: u32,
    /// The block type(s) emitted for this size.
    pub kind: BlockKind,
}

/// Every block type the ICNS encoder can emit, in emission order.
///
/// The order is part of the output in practice: blocks land in the file in
/// table order, which is what existing loaders expect.  `icp4`, `icp5` and
/// `icp6` are deliberately absent; icons carrying them cannot be assigned
/// to folders in the Finder.
pub const ICON_BLOCK_TABLE: &[IconBlockSpec] = &[
    // Normal
    IconBlockSpec { size: 128, kind: BlockKind::Embedded(OSType(*b"ic07")) },
    IconBlockSpec { size: 256, kind: BlockKind::Embedded(OSType(*b"ic08")) },
    IconBlockSpec { size: 512, kind: BlockKind::Embedded(OSType(*b"ic09")) },
    IconBlockSpec { size: 1024, kind: BlockKind::Embedded(OSType(*b"ic10")) },
    // Retina
    IconBlockSpec { size: 32, kind: BlockKind::Embedded(OSType(*b"ic11")) },
    IconBlockSpec { size: 64, kind: BlockKind::Embedded(OSType(*b"ic12")) },
    IconBlockSpec { size: 256, kind: BlockKind::Embedded(OSType(*b"ic13")) },
    IconBlockSpec { size: 512, kind: BlockKind::Embedded(OSType(*b"ic14")) },
    // Mac OS 8.5
    IconBlockSpec {
        size: 16,
        kind: BlockKind::Legacy {
            color: OSType(*b"is32"),
            mask: OSType(*b"s8mk"),
        },
    },
    IconBlockSpec {
        size: 32,
        kind: BlockKind::Legacy {
            color: OSType(*b"il32"),
            mask: OSType(*b"l8mk"),
        },
    },
];
