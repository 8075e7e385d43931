use super::*;

#[test]
fn order_of_magnitude_floors_to_power_of_ten() {
    assert_eq!(order_of_magnitude(104_634.0), 100_000.0);
    assert_eq!(order_of_magnitude(37.0), 10.0);
    assert_eq!(order_of_magnitude(1000.0), 1000.0);
    assert_eq!(order_of_magnitude(9.99), 1.0);
    assert!((order_of_magnitude(0.37) - 0.1).abs() < 1e-12);
}

#[test]
fn overshoot_keeps_five_times_magnitude_for_small_mantissas() {
    assert_eq!(overshoot_multiplier(37.0), 50.0);
    assert_eq!(overshoot_multiplier(10.0), 50.0);
    assert_eq!(overshoot_multiplier(49.0), 50.0);
}

#[test]
fn overshoot_always_exceeds_input() {
    assert_eq!(overshoot_multiplier(81.0), 500.0);
    assert_eq!(overshoot_multiplier(50.0), 500.0);
    for t in [0.3, 1.0, 5.0, 6.0, 9.5, 37.0, 99.0, 810.0, 12_345.0] {
        assert!(overshoot_multiplier(t) > t, "t = {t}");
    }
}

#[test]
fn round_to_tenth_matches_slider_label() {
    assert_eq!(round_to_tenth(0.0), 0.0);
    assert_eq!(round_to_tenth(3.0 * 0.01), 0.0);
    assert_eq!(round_to_tenth(15.0 * 0.01), 0.2);
    assert_eq!(round_to_tenth(-12.0 * 0.1), -1.2);
}
