//! Format round-trip regression test
//!
//! Encodes synthetic swatches in every writable format, decodes them back
//! through the detecting reader and checks dimensions, provenance and
//! pixel fidelity.
//!
//! Run with:
//! ```
//! cargo test -p vastra-io --test ioformats_reg
//! ```

use std::io::Cursor;
use vastra_io::{ColorMode, ImageFormat, IoError, read_image_mem, write_image_mem};
use vastra_test::{RegParams, fixtures};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let check = fixtures::make_checkerboard_rgb(40, 30, 5, (200, 30, 40), (20, 60, 180)).unwrap();

    // Lossless formats come back bit-exact
    for format in [ImageFormat::Png, ImageFormat::WebP] {
        let bytes = write_image_mem(&check, format).unwrap();
        let back = read_image_mem(&bytes).unwrap();
        rp.compare_buffers(&check, &back);
        rp.check(back.source_format() == format, "source format recorded");
    }

    // JPEG is lossy; interior of a cell stays close to the dye color
    let bytes = write_image_mem(&check, ImageFormat::Jpeg).unwrap();
    let back = read_image_mem(&bytes).unwrap();
    rp.compare_values(40.0, back.width() as f64, 0.0);
    rp.compare_values(30.0, back.height() as f64, 0.0);
    let (r, g, b) = back.get_rgb(2, 2).unwrap();
    rp.compare_values(200.0, r as f64, 12.0);
    rp.compare_values(30.0, g as f64, 12.0);
    rp.compare_values(40.0, b as f64, 12.0);
    rp.write_buffer(&back, "jpeg").unwrap();

    assert!(rp.cleanup());
}

#[test]
fn ioformats_source_modes_reg() {
    let mut rp = RegParams::new("ioformats_modes");

    // 8-bit gray PNG
    let mut gray = Vec::new();
    {
        let mut enc = png::Encoder::new(&mut gray, 3, 1);
        enc.set_color(png::ColorType::Grayscale);
        enc.set_depth(png::BitDepth::Eight);
        let mut w = enc.write_header().unwrap();
        w.write_image_data(&[0, 128, 255]).unwrap();
    }
    let buf = read_image_mem(&gray).unwrap();
    rp.check(buf.source_mode() == ColorMode::Gray, "gray mode");
    rp.check(buf.get_rgb(1, 0) == Some((128, 128, 128)), "gray replicated");

    // Palette PNG
    let mut indexed = Vec::new();
    {
        let mut enc = png::Encoder::new(&mut indexed, 2, 1);
        enc.set_color(png::ColorType::Indexed);
        enc.set_depth(png::BitDepth::Eight);
        enc.set_palette(vec![255, 0, 0, 0, 0, 255]);
        let mut w = enc.write_header().unwrap();
        w.write_image_data(&[1, 0]).unwrap();
    }
    let buf = read_image_mem(&indexed).unwrap();
    rp.check(buf.source_mode() == ColorMode::Indexed, "indexed mode");
    rp.check(buf.get_rgb(0, 0) == Some((0, 0, 255)), "palette expanded");
    rp.check(buf.get_rgb(1, 0) == Some((255, 0, 0)), "palette expanded");

    // GIF, single frame
    let mut gif_bytes = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut gif_bytes, 2, 1, &[]).unwrap();
        let frame = gif::Frame::from_rgb(2, 1, &[10, 200, 10, 250, 250, 250]);
        enc.write_frame(&frame).unwrap();
    }
    let buf = read_image_mem(&gif_bytes).unwrap();
    rp.check(buf.source_format() == ImageFormat::Gif, "gif detected");
    rp.check(buf.get_rgb(0, 0) == Some((10, 200, 10)), "gif pixel");

    assert!(rp.cleanup());
}

#[test]
fn ioformats_rejects_reg() {
    let mut rp = RegParams::new("ioformats_rejects");

    rp.check(
        matches!(read_image_mem(&[]), Err(IoError::InvalidData(_))),
        "empty input",
    );
    rp.check(
        matches!(
            read_image_mem(b"not an image at all"),
            Err(IoError::UnsupportedFormat(_))
        ),
        "unrecognized bytes",
    );
    rp.check(
        matches!(
            read_image_mem(b"II\x2a\x00\x08\x00\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ),
        "tiff rejected",
    );

    // Valid signature, truncated body
    let swatch = fixtures::make_uniform_rgb(32, 32, (90, 90, 90)).unwrap();
    let mut png_bytes = fixtures::encode_png(&swatch).unwrap();
    png_bytes.truncate(20);
    rp.check(read_image_mem(&png_bytes).is_err(), "truncated png");

    let jpeg_bytes = fixtures::encode_jpeg(&swatch, 80).unwrap();
    rp.check(
        vastra_io::jpeg::read_jpeg(Cursor::new(&jpeg_bytes[..jpeg_bytes.len() / 3])).is_err(),
        "truncated jpeg",
    );

    assert!(rp.cleanup());
}
