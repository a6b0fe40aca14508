use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_linear_scale_maps_domain_to_range() {
    let x = LinearScale::new((0.0, 50.0), (0.0, 800.0));
    assert_eq!(x.apply(0.0), 0.0);
    assert_eq!(x.apply(25.0), 400.0);
    assert_eq!(x.apply(50.0), 800.0);
}

#[test]
fn test_linear_scale_collapsed_domain_is_zero() {
    let x = LinearScale::new((0.0, 0.0), (0.0, 800.0));
    assert_eq!(x.apply(0.0), 0.0);
    assert_eq!(x.apply(3.0), 0.0);
}

#[test]
fn test_ticks_use_round_steps() {
    assert_eq!(ticks(0.0, 50.0, 6), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    assert_eq!(ticks(0.0, 1.0, 6), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(
        ticks(0.0, 27.3, 6),
        vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]
    );
    assert_eq!(tick_step(0.0, 27.3, 6), 5.0);
    assert_eq!(tick_step(0.0, 1.0, 6), 0.2);
}

#[test]
fn test_ticks_degenerate_inputs() {
    assert_eq!(ticks(0.0, 0.0, 6), vec![0.0]);
    assert!(ticks(0.0, 10.0, 0).is_empty());
    assert_eq!(tick_step(0.0, 0.0, 6), 0.0);
}

#[test]
fn test_band_scale_positions_with_padding() {
    let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let y = BandScale::new(keys, (0.0, 600.0), 0.15);
    // step = 600 / (3 - 0.15 + 0.3)
    let step = 600.0 / 3.15;
    assert!(approx(y.bandwidth(), step * 0.85));
    let first = y.position("a").unwrap();
    assert!(approx(y.position("b").unwrap() - first, step));
    assert!(approx(first, step * 0.15));
    assert!(approx(y.position("c").unwrap(), first + 2.0 * step));
    assert!(approx(y.position("c").unwrap() + y.bandwidth(), 600.0 - step * 0.15));
    assert_eq!(y.position("zzz"), None);
}

#[test]
fn test_band_scale_empty_domain() {
    let y = BandScale::new(Vec::new(), (0.0, 600.0), 0.15);
    assert!(approx(y.bandwidth(), 600.0 * 0.85));
    assert_eq!(y.position("a"), None);
}
