use super::*;

#[test]
fn linspace_hits_both_ends() {
    let v = linspace(-1.0, 1.0, 5);
    assert_eq!(v, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
    assert!(linspace(3.0, 4.0, 0).is_empty());

    let v = linspace(0.1, 0.7, 12);
    assert_eq!(v.len(), 12);
    assert_eq!(v[0], 0.1);
    assert_eq!(v[11], 0.7);
}

#[test]
fn nice_ticks_are_round_and_in_range() {
    let t = nice_ticks(0.0, 1.0, 5);
    let want = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    assert_eq!(t.len(), want.len());
    for (got, want) in t.iter().zip(want) {
        assert!((got - want).abs() < 1e-12, "{got} vs {want}");
    }

    let t = nice_ticks(-0.013, 0.047, 6);
    assert!(t.iter().all(|v| *v >= -0.013 && *v <= 0.047));
    assert!(t.contains(&0.0));
    assert!(t.len() >= 3);

    assert_eq!(nice_ticks(5.0, 5.0, 6), vec![5.0]);
    assert!(nice_ticks(1.0, 0.0, 6).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 6).is_empty());
}

#[test]
fn unpremultiply_restores_channels() {
    let straight = unpremultiply_rgba8(&[64, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0]);
    assert_eq!(&straight[..4], &[128, 64, 0, 128]);
    assert_eq!(&straight[4..8], &[10, 20, 30, 255]);
    assert_eq!(&straight[8..], &[0, 0, 0, 0]);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(0, 200), 0);
}
