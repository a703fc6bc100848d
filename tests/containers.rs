//! End-to-end encoding tests over in-memory PNG fixtures.

use iconpack::{encode_icns, encode_ico, rle, select_sizes, EncodeError,
               Image, PixelFormat, SizedImage};

/// Builds a solid-color RGBA PNG of the given size.
fn solid_png(size: u32, rgba: [u8; 4]) -> SizedImage {
    let mut image = Image::new(PixelFormat::RGBA, size, size);
    for pixel in image.data_mut().chunks_exact_mut(4) {
        pixel.copy_from_slice(&rgba);
    }
    let mut data = Vec::new();
    image.write_png(&mut data).expect("failed to encode fixture png");
    SizedImage::new(size, data)
}

/// Walks the icon blocks of an ICNS buffer, checking the file header and
/// that the blocks tile the body exactly; returns (tag, body length) pairs.
fn walk_icns(output: &[u8]) -> Vec<(String, usize)> {
    assert_eq!(&output[..4], b"icns");
    let file_length =
        u32::from_be_bytes(output[4..8].try_into().unwrap()) as usize;
    assert_eq!(file_length, output.len());
    let mut blocks = Vec::new();
    let mut offset = 8;
    while offset < output.len() {
        let tag = String::from_utf8(output[offset..offset + 4].to_vec())
            .expect("non-ascii block tag");
        let length = u32::from_be_bytes(
            output[offset + 4..offset + 8].try_into().unwrap()) as usize;
        assert!(length >= 8, "block length shorter than its header");
        assert!(offset + length <= output.len(), "block overruns the file");
        blocks.push((tag, length - 8));
        offset += length;
    }
    assert_eq!(offset, output.len());
    blocks
}

#[test]
fn ico_worked_example() {
    let png16 = solid_png(16, [255, 0, 0, 255]);
    let png32 = solid_png(32, [0, 255, 0, 255]);
    let len16 = png16.data().len();
    let len32 = png32.data().len();
    let images = vec![png16, png32];

    let output = encode_ico(&images).unwrap();
    assert_eq!(output.len(), 6 + 2 * 16 + len16 + len32);
    assert_eq!(&output[0..6], &[0, 0, 1, 0, 2, 0]);

    // Entry 0: 16x16 at offset 6 + 32.
    assert_eq!(output[6], 16);
    assert_eq!(output[7], 16);
    assert_eq!(&output[14..18], &(len16 as u32).to_le_bytes());
    assert_eq!(&output[18..22], &38u32.to_le_bytes());

    // Entry 1: 32x32 right after the first payload.
    assert_eq!(output[22], 32);
    assert_eq!(output[23], 32);
    assert_eq!(&output[30..34], &(len32 as u32).to_le_bytes());
    assert_eq!(&output[34..38], &(38 + len16 as u32).to_le_bytes());

    // Payloads are the PNG bytes, verbatim and in order.
    assert_eq!(&output[38..38 + len16], images[0].data());
    assert_eq!(&output[38 + len16..], images[1].data());
}

#[test]
fn ico_empty_input_fails() {
    let images: Vec<SizedImage> = Vec::new();
    assert!(matches!(encode_ico(&images), Err(EncodeError::NoSizes)));
}

#[test]
fn icns_size_selection() {
    let images = vec![solid_png(16, [1, 2, 3, 4]),
                      solid_png(32, [5, 6, 7, 8]),
                      solid_png(256, [9, 10, 11, 12]),
                      solid_png(1024, [13, 14, 15, 16])];
    let output = encode_icns(&images).unwrap();
    let blocks = walk_icns(&output);
    let tags: Vec<&str> = blocks.iter().map(|(tag, _)| tag.as_str()).collect();
    assert_eq!(tags, vec!["ic08", "ic10", "ic11", "ic13", "is32", "s8mk",
                          "il32", "l8mk"]);
}

#[test]
fn icns_embedded_blocks_carry_png_verbatim() {
    let image = solid_png(256, [40, 50, 60, 70]);
    let output = encode_icns(std::iter::once(&image)).unwrap();
    let blocks = walk_icns(&output);
    // 256 matches both the ic08 and ic13 table rows.
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], ("ic08".to_string(), image.data().len()));
    assert_eq!(blocks[1], ("ic13".to_string(), image.data().len()));
    assert_eq!(&output[16..16 + image.data().len()], image.data());
}

#[test]
fn icns_legacy_blocks_pack_channels() {
    let image = solid_png(16, [10, 20, 30, 0x80]);
    let output = encode_icns(std::iter::once(&image)).unwrap();
    let blocks = walk_icns(&output);
    assert_eq!(blocks[0].0, "is32");
    assert_eq!(blocks[1].0, "s8mk");

    // Color body: the R, G and B planes, each RLE-packed, in that order.
    let mut expected = rle::pack(&[10u8; 256]);
    expected.extend_from_slice(&rle::pack(&[20u8; 256]));
    expected.extend_from_slice(&rle::pack(&[30u8; 256]));
    let color_body = &output[16..16 + blocks[0].1];
    assert_eq!(color_body, &expected[..]);

    // Mask body: one uncompressed alpha byte per pixel.
    let mask_start = 16 + blocks[0].1 + 8;
    let mask_body = &output[mask_start..mask_start + blocks[1].1];
    assert_eq!(mask_body, &[0x80u8; 256][..]);
}

#[test]
fn icns_legacy_planes_unpack_to_source_channels() {
    let image = solid_png(16, [7, 8, 9, 10]);
    let output = encode_icns(std::iter::once(&image)).unwrap();
    let blocks = walk_icns(&output);
    let color_body = &output[16..16 + blocks[0].1];
    // The three packed planes are concatenated; unpack them in sequence.
    let mut offset = 0;
    for expected_value in [7u8, 8, 9] {
        let mut consumed = None;
        for end in offset + 1..=color_body.len() {
            if let Ok(plane) = rle::unpack(&color_body[offset..end], 256) {
                assert_eq!(plane, vec![expected_value; 256]);
                consumed = Some(end);
                break;
            }
        }
        offset = consumed.expect("plane did not unpack");
    }
    assert_eq!(offset, color_body.len());
}

#[test]
fn icns_unmatched_sizes_fail() {
    let images = vec![solid_png(20, [0, 0, 0, 255])];
    assert!(matches!(encode_icns(&images), Err(EncodeError::EmptyOutput)));
}

#[test]
fn icns_failure_leaves_sibling_ico_unaffected() {
    // Outputs are independent artifacts of one run: the same image set can
    // fail as ICNS while still producing a valid ICO.
    let images = vec![solid_png(20, [0, 0, 0, 255])];
    assert!(encode_icns(&images).is_err());
    let ico = encode_ico(&images).unwrap();
    assert_eq!(&ico[0..6], &[0, 0, 1, 0, 1, 0]);
}

#[test]
fn favicon_flow_selects_then_encodes() {
    let images = vec![solid_png(16, [1, 1, 1, 255]),
                      solid_png(32, [2, 2, 2, 255]),
                      solid_png(48, [3, 3, 3, 255]),
                      solid_png(64, [4, 4, 4, 255])];
    let selected = select_sizes(&images, &[16, 32, 48]).unwrap();
    let output = encode_ico(selected).unwrap();
    assert_eq!(&output[4..6], &[3, 0]);
    assert_eq!(output[6], 16);
    assert_eq!(output[22], 32);
    assert_eq!(output[38], 48);
}

#[test]
fn missing_requested_size_is_caught_before_encoding() {
    let images = vec![solid_png(16, [1, 1, 1, 255])];
    assert!(matches!(select_sizes(&images, &[16, 32]),
                     Err(EncodeError::MissingSize(32))));
}
