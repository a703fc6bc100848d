//! Creates an ICNS file from one or more PNG files.
//!
//! ```shell
//! cargo run --example png2icns <path/to/16.png> [<path/to/32.png> ...]
//! # ICNS will be saved next to the first input file.
//! ```
//!
//! Each input must be a square PNG whose dimensions match one of the
//! supported icon sizes (16, 32, 64, 128, 256, 512 or 1024); other sizes
//! are silently left out of the output.

use iconpack::{encode_icns, Image, SizedImage};
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::Path;

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        println!("Usage: png2icns <path>...");
        return;
    }
    let mut images = Vec::new();
    for path in &paths {
        let data = fs::read(path).expect("failed to read input file");
        let decoded = Image::read_png(Cursor::new(&data[..]))
            .expect("failed to decode PNG");
        images.push(SizedImage::new(decoded.width(), data));
    }
    let buffer = encode_icns(&images).expect("failed to encode ICNS");
    let out_path = Path::new(&paths[0]).with_extension("icns");
    fs::write(&out_path, buffer).expect("failed to write ICNS");
    println!("Saved {}", out_path.display());
}
