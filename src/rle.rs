//! Run-length compression for legacy ICNS channel planes.
//!
//! This is the PackBits variant used by the `is32`/`il32` family of icon
//! blocks.  It differs from classic PackBits in its control-byte ranges: a
//! control byte with the high bit set introduces a run of `control - 125`
//! repeated bytes (so a single run spans 3 to 130 bytes), while a control
//! byte with the high bit clear introduces `control + 1` literal bytes
//! (1 to 128).

use std::io::{self, Error, ErrorKind};

/// The longest run a single control byte can express.
const MAX_RUN: usize = 130;
/// The shortest sequence worth encoding as a run; anything shorter is
/// cheaper inside a literal span.
const MIN_RUN: usize = 3;
/// The longest literal span a single control byte can express.
const MAX_LITERAL: usize = 128;

/// Compresses a single 8-bit channel plane.
///
/// This function is total: any input, including empty or fully random data,
/// produces a valid stream.  In the worst case (no runs at all) the output
/// is one control byte per 128 input bytes longer than the input.
pub fn pack(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() / 2 + 2);
    let mut literal_start = 0;
    let mut index = 0;
    while index < input.len() {
        let value = input[index];
        let mut run = 1;
        while index + run < input.len() && input[index + run] == value {
            run += 1;
        }
        if run >= MIN_RUN {
            flush_literal(&mut output, &input[literal_start..index]);
            let mut remaining = run;
            while remaining > 0 {
                let mut chunk = remaining.min(MAX_RUN);
                // Never strand a tail of 1 or 2 repeats past the last
                // full-size chunk; it could not be encoded as a run.
                if remaining - chunk > 0 && remaining - chunk < MIN_RUN {
                    chunk = remaining - MIN_RUN;
                }
                output.push(0x80 | (chunk - MIN_RUN) as u8);
                output.push(value);
                remaining -= chunk;
            }
            index += run;
            literal_start = index;
        } else {
            // Runs of 1 or 2 stay in the surrounding literal span.
            index += run;
        }
    }
    flush_literal(&mut output, &input[literal_start..]);
    output
}

fn flush_literal(output: &mut Vec<u8>, mut literal: &[u8]) {
    while !literal.is_empty() {
        let span = literal.len().min(MAX_LITERAL);
        output.push((span - 1) as u8);
        output.extend_from_slice(&literal[..span]);
        literal = &literal[span..];
    }
}

/// Expands a stream produced by [`pack`] back into `output_len` bytes.
///
/// Returns an error if the stream is truncated, or if it does not decode to
/// exactly `output_len` bytes.
pub fn unpack(input: &[u8], output_len: usize) -> io::Result<Vec<u8>> {
    let mut output = Vec::with_capacity(output_len);
    let mut iter = input.iter();
    while output.len() < output_len {
        let control = *iter.next().ok_or_else(rle_error)?;
        if control < 0x80 {
            for _ in 0..(control as usize + 1) {
                output.push(*iter.next().ok_or_else(rle_error)?);
            }
        } else {
            let value = *iter.next().ok_or_else(rle_error)?;
            for _ in 0..(control as usize - 125) {
                output.push(value);
            }
        }
    }
    if output.len() != output_len || iter.next().is_some() {
        return Err(rle_error());
    }
    Ok(output)
}

fn rle_error() -> Error {
    Error::new(ErrorKind::InvalidData, "invalid RLE-compressed data")
}
