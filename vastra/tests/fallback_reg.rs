//! Fallback and contract regression test
//!
//! Malformed input must always yield the fallback record; valid input
//! must yield the same record on every call and on every thread.
//!
//! Run with:
//! ```
//! cargo test -p vastra --test fallback_reg
//! ```

use vastra::{
    AnalysisOptions, AnalysisRecord, Analyzer, MaterialFilter, Provenance, Stage,
    analyze_image, suggest_price_per_kg,
};
use vastra_test::{RegParams, fixtures};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn swatch_png() -> Vec<u8> {
    let buf = fixtures::make_checkerboard_rgb(360, 240, 6, (40, 70, 110), (200, 190, 170))
        .unwrap();
    fixtures::encode_png(&buf).unwrap()
}

#[test]
fn fallback_malformed_reg() {
    init_logger();
    let mut rp = RegParams::new("fallback_malformed");

    let png = swatch_png();
    let jpeg =
        fixtures::encode_jpeg(&fixtures::make_uniform_rgb(64, 64, (1, 2, 3)).unwrap(), 80)
            .unwrap();
    let inputs: Vec<(&str, Vec<u8>)> = vec![
        ("empty", Vec::new()),
        ("garbage", b"definitely not a fabric photo".to_vec()),
        ("truncated png", png[..40].to_vec()),
        ("truncated jpeg", jpeg[..24].to_vec()),
        ("bmp header", b"BM\x36\x00\x00\x00\x00\x00\x00\x00".to_vec()),
        ("signature only", b"\x89PNG\r\n\x1a\n".to_vec()),
    ];

    for (label, bytes) in &inputs {
        let rec = analyze_image(bytes);
        rp.check(rec.provenance == Provenance::Fallback, label);
        rp.check(
            rec.texture == "Cotton Blend" || rec.texture == "Cotton",
            label,
        );
        rp.check(rec == AnalysisRecord::fallback(), label);
    }

    let err = Analyzer::default().try_analyze(&png[..40]).unwrap_err();
    rp.check(err.stage == Stage::Decoding, "truncated png fails while decoding");
    rp.compare_labels("DecodeError", err.source.kind());

    assert!(rp.cleanup());
}

#[test]
fn fallback_declared_size_reg() {
    init_logger();
    let mut rp = RegParams::new("fallback_declared_size");

    // A few dozen bytes claiming a screen far beyond the decode budget
    for (w, h) in [(12000, 12000), (65535, 65535)] {
        let gif = fixtures::encode_pixel_gif(w, h);
        rp.compare_values(35.0, gif.len() as f64, 0.0);
        let rec = analyze_image(&gif);
        rp.check(rec.provenance == Provenance::Fallback, "oversized screen");
        rp.check(rec == AnalysisRecord::fallback(), "oversized screen");
        let err = Analyzer::default().try_analyze(&gif).unwrap_err();
        rp.check(err.stage == Stage::Decoding, "rejected while decoding");
        rp.compare_labels("DecodeError", err.source.kind());
    }

    // A zero-width screen decodes to nothing
    let empty = fixtures::encode_pixel_gif(0, 1);
    let err = Analyzer::default().try_analyze(&empty).unwrap_err();
    rp.check(err.stage == Stage::Decoding, "empty screen fails while decoding");
    rp.compare_labels("EmptyImageError", err.source.kind());
    rp.check(
        analyze_image(&empty) == AnalysisRecord::fallback(),
        "empty screen falls back",
    );

    // The same pixel on a small screen is analyzed normally
    let small = analyze_image(&fixtures::encode_pixel_gif(3, 2));
    rp.check(small.provenance == Provenance::Computed, "small screen computed");

    assert!(rp.cleanup());
}

#[test]
fn fallback_determinism_reg() {
    init_logger();
    let mut rp = RegParams::new("fallback_determinism");

    let png = swatch_png();
    let first = analyze_image(&png);
    rp.check(first.provenance == Provenance::Computed, "swatch computed");
    for _ in 0..3 {
        let again = analyze_image(&png);
        rp.check(again == first, "identical record");
        rp.compare_labels(
            &first.to_json_string().unwrap(),
            &again.to_json_string().unwrap(),
        );
    }

    assert!(rp.cleanup());
}

#[test]
fn fallback_concurrent_reg() {
    init_logger();
    let mut rp = RegParams::new("fallback_concurrent");

    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analyzer>();

    let analyzer = Analyzer::default();
    let good = swatch_png();
    let bad = good[..64].to_vec();
    let expected = analyzer.analyze(&good);

    let results: Vec<AnalysisRecord> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let analyzer = &analyzer;
                let bytes = if i % 2 == 0 { &good } else { &bad };
                s.spawn(move || analyzer.analyze(bytes))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, rec) in results.iter().enumerate() {
        if i % 2 == 0 {
            rp.check(*rec == expected, "worker matches single-threaded result");
        } else {
            rp.check(rec.is_fallback(), "worker on truncated bytes falls back");
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn fallback_options_reg() {
    init_logger();
    let mut rp = RegParams::new("fallback_options");

    let opts = AnalysisOptions::from_json_str(
        r#"{"max_side": 120, "scale_method": "sampling", "dominant_palette_size": 1}"#,
    )
    .unwrap();
    let analyzer = Analyzer::new(opts).unwrap();
    rp.compare_values(120.0, analyzer.options().max_side as f64, 0.0);

    let rec = analyzer.analyze(&swatch_png());
    rp.check(rec.provenance == Provenance::Computed, "sampled analysis computed");
    rp.compare_values(1.0, rec.dominant_colors.len() as f64, 0.0);
    // Scored on the 360 x 240 original; the 120 x 80 sample would give 0.69
    rp.compare_values(0.70, rec.quality, 1e-9);

    let rejected = AnalysisOptions::default().with_edge_threshold(255);
    rp.check(Analyzer::new(rejected).is_err(), "threshold 255 rejected");
    rp.check(
        AnalysisOptions::from_json_str(r#"{"max_side": 1}"#).is_err(),
        "max_side 1 rejected",
    );

    assert!(rp.cleanup());
}

#[test]
fn fallback_marketplace_reg() {
    let mut rp = RegParams::new("fallback_marketplace");

    let rec = analyze_image(&swatch_png());
    let by_texture = MaterialFilter::new("all", &rec.texture.to_uppercase());
    rp.check(by_texture.matches(&rec), "texture filter is case-insensitive");
    rp.check(
        !MaterialFilter::new("no such color", "").matches(&rec),
        "unknown color excluded",
    );

    let fallback = AnalysisRecord::fallback();
    rp.compare_values(83.0, suggest_price_per_kg(&fallback, 100.0), 0.0);

    assert!(rp.cleanup());
}
