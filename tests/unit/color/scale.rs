use super::*;

#[test]
fn global_extrema_cover_every_frame() {
    let frames = vec![
        vec![0.5, 1.0, 2.0],
        vec![-3.0, 0.0, 1.5],
        vec![4.25, 0.1, 0.2],
    ];
    let scale = ColorScale::across_frames(&frames).unwrap();
    assert_eq!(scale, ColorScale { min: -3.0, max: 4.25 });
    for frame in &frames {
        assert!(frame.iter().all(|v| *v >= scale.min && *v <= scale.max));
    }
    assert!(frames.iter().flatten().any(|v| *v == scale.min));
    assert!(frames.iter().flatten().any(|v| *v == scale.max));
}

#[test]
fn nan_is_ignored_and_empty_has_no_scale() {
    let frames = vec![vec![f64::NAN, 1.0], vec![2.0, f64::NAN]];
    assert_eq!(
        ColorScale::across_frames(&frames),
        Some(ColorScale { min: 1.0, max: 2.0 })
    );
    assert_eq!(ColorScale::across_frames::<Vec<f64>>(&[]), None);
    assert_eq!(ColorScale::of_values(&[f64::NAN]), None);
}

#[test]
fn twelve_levels_span_the_range() {
    let scale = ColorScale::for_contour(&[0.25, -1.0, 3.0]).unwrap();
    let levels = scale.levels(DEFAULT_LEVEL_COUNT).unwrap();
    assert_eq!(levels.len(), 12);
    assert_eq!(levels[0], -1.0);
    assert_eq!(levels[11], 3.0);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
    let widths: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(widths.iter().all(|w| (w - 4.0 / 11.0).abs() < 1e-12));
}

#[test]
fn flat_field_still_gets_strictly_increasing_levels() {
    let scale = ColorScale::for_contour(&[5.0; 16]).unwrap();
    assert!(scale.min < 5.0 && scale.max > 5.0);
    assert!(scale.span() > 0.0);

    let levels = scale.levels(DEFAULT_LEVEL_COUNT).unwrap();
    assert_eq!(levels.len(), 12);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn flat_field_is_widened_at_large_magnitudes() {
    for v in [3.0e7, 1.0e9, -2.5e12] {
        let scale = ColorScale::for_contour(&[v; 4]).unwrap();
        assert!(scale.min < v && v < scale.max, "{v}: {scale:?}");
        assert!(scale.span() > 0.0);

        let levels = scale.levels(DEFAULT_LEVEL_COUNT).unwrap();
        assert!(levels.windows(2).all(|w| w[0] < w[1]), "{v}: {levels:?}");
    }
}

#[test]
fn one_ulp_range_is_widened() {
    let v = 1.0e9;
    let scale = ColorScale { min: v, max: v.next_up() }.widened_if_degenerate();
    let levels = scale.levels(DEFAULT_LEVEL_COUNT).unwrap();
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn wide_ranges_are_not_widened() {
    let scale = ColorScale { min: 0.0, max: 1.0 }.widened_if_degenerate();
    assert_eq!(scale, ColorScale { min: 0.0, max: 1.0 });
}

#[test]
fn fewer_than_two_levels_is_invalid() {
    let scale = ColorScale { min: 0.0, max: 1.0 };
    assert!(matches!(scale.levels(1), Err(FieldError::Validation(_))));
}

#[test]
fn normalize_clamps() {
    let scale = ColorScale { min: -2.0, max: 2.0 };
    assert_eq!(scale.normalize(0.0), 0.5);
    assert_eq!(scale.normalize(-9.0), 0.0);
    assert_eq!(scale.normalize(9.0), 1.0);
    assert_eq!(ColorScale { min: 1.0, max: 1.0 }.normalize(1.0), 0.5);
}

#[test]
fn exponent_tracks_largest_magnitude() {
    assert_eq!(ColorScale { min: -0.004, max: 0.0021 }.colorbar_exponent(), -3);
    assert_eq!(ColorScale { min: 0.0, max: 12_345.0 }.colorbar_exponent(), 4);
    assert_eq!(ColorScale { min: -1e-12, max: 1e-12 }.colorbar_exponent(), 0);
    assert_eq!(ColorScale { min: 1.0, max: 9.99 }.colorbar_exponent(), 0);
}

#[test]
fn offset_label_is_best_effort() {
    let ok = ColorScale { min: 0.0, max: 0.05 }.offset_label().unwrap();
    assert_eq!(ok.exponent, -2);
    assert_eq!(ok.format_tick(0.025, 0.005), "2.5");
    assert_eq!(ok.format_tick(0.04, 0.01), "4");
    assert_eq!(ok.format_tick(-0.0, 0.01), "0");

    let err = ColorScale { min: f64::NEG_INFINITY, max: 1.0 }
        .offset_label()
        .unwrap_err();
    assert!(matches!(err, FieldError::Cosmetic(_)));
}
