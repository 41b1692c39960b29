//! Downsampling regression test
//!
//! Checks the fit-to-cap sizes for landscape, portrait and extreme aspect
//! ratios, and that both reduction methods preserve flat color and the
//! source provenance.
//!
//! Run with:
//! ```
//! cargo test -p vastra-transform --test scale_reg
//! ```

use vastra_core::{ColorMode, ImageFormat, PixelBuffer, PixelBufferMut};
use vastra_test::{RegParams, fixtures};
use vastra_transform::{ScaleMethod, scale_to_fit};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let cases: [((u32, u32), (u32, u32)); 5] = [
        ((1600, 1200), (300, 225)),
        ((1200, 1600), (225, 300)),
        ((900, 301), (300, 100)),
        ((5000, 2), (300, 1)),
        ((300, 300), (300, 300)),
    ];
    for ((w, h), (ew, eh)) in cases {
        let buf = fixtures::make_uniform_rgb(w, h, (40, 70, 110)).unwrap();
        for method in [ScaleMethod::AreaMap, ScaleMethod::Sampling] {
            let out = scale_to_fit(&buf, 300, method).unwrap();
            rp.compare_values(ew as f64, out.width() as f64, 0.0);
            rp.compare_values(eh as f64, out.height() as f64, 0.0);
            rp.check(
                out.rgb_pixels().all(|p| p == (40, 70, 110)),
                "flat color preserved",
            );
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn scale_checkerboard_reg() {
    let mut rp = RegParams::new("scale_checkerboard");

    // 4x reduction of 8px cells leaves 2px cells of the same two colors
    let buf =
        fixtures::make_checkerboard_rgb(1200, 800, 8, (0, 0, 0), (255, 255, 255)).unwrap();
    let out = scale_to_fit(&buf, 300, ScaleMethod::AreaMap).unwrap();
    rp.compare_values(300.0, out.width() as f64, 0.0);
    rp.compare_values(200.0, out.height() as f64, 0.0);
    rp.check(out.get_rgb(0, 0) == Some((0, 0, 0)), "dark cell");
    rp.check(out.get_rgb(2, 0) == Some((255, 255, 255)), "light cell");
    rp.write_buffer(&out, "areamap").unwrap();

    let sampled = scale_to_fit(&buf, 300, ScaleMethod::Sampling).unwrap();
    rp.check(
        sampled
            .rgb_pixels()
            .all(|p| p == (0, 0, 0) || p == (255, 255, 255)),
        "sampling introduces no new colors",
    );

    let mut pm = PixelBufferMut::new(600, 600).unwrap();
    pm.set_source_format(ImageFormat::Jpeg);
    pm.set_source_mode(ColorMode::Cmyk);
    let big: PixelBuffer = pm.into();
    let out = scale_to_fit(&big, 300, ScaleMethod::AreaMap).unwrap();
    rp.check(out.source_format() == ImageFormat::Jpeg, "format kept");
    rp.check(out.source_mode() == ColorMode::Cmyk, "mode kept");

    assert!(rp.cleanup());
}
