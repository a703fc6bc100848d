use std::io;

use thiserror::Error;

/// Failure to produce a single container file.
///
/// Errors are scoped to one output: a failed `.icns` does not affect a
/// sibling `.ico` requested in the same run.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The ICO encoder was handed an empty image list.
    #[error("no sizes selected for ico output")]
    NoSizes,
    /// None of the supplied images matched a size in the ICNS block table,
    /// so the file body would be empty.
    #[error("no supplied size matches an icns block type")]
    EmptyOutput,
    /// A requested output size was never produced upstream.
    #[error("output size {0} is missing")]
    MissingSize(u32),
    /// A source PNG for a legacy ICNS block could not be decoded.
    #[error("failed to decode {size}x{size} png")]
    PngDecode {
        /// The labeled size of the offending image.
        size: u32,
        /// The underlying decoder error.
        #[source]
        source: png::DecodingError,
    },
    /// The destination writer failed.  Never returned by the in-memory
    /// `encode_*` functions.
    #[error(transparent)]
    Io(#[from] io::Error),
}
