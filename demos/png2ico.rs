//! Creates an ICO file from one or more PNG files.
//!
//! ```shell
//! cargo run --example png2ico <path/to/16.png> [<path/to/32.png> ...]
//! # ICO will be saved next to the first input file.
//! ```
//!
//! Inputs should be square PNGs no larger than 256x256; they are embedded
//! in the ICO in the order given.

use iconpack::{encode_ico, Image, SizedImage};
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::Path;

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        println!("Usage: png2ico <path>...");
        return;
    }
    let mut images = Vec::new();
    for path in &paths {
        let data = fs::read(path).expect("failed to read input file");
        let decoded = Image::read_png(Cursor::new(&data[..]))
            .expect("failed to decode PNG");
        images.push(SizedImage::new(decoded.width(), data));
    }
    let buffer = encode_ico(&images).expect("failed to encode ICO");
    let out_path = Path::new(&paths[0]).with_extension("ico");
    fs::write(&out_path, buffer).expect("failed to write ICO");
    println!("Saved {}", out_path.display());
}
