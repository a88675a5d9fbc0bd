use super::*;

#[test]
fn can_compare_coordinates_by_bits() {
    let a = Coordinate::new(-96.3, 41.9);
    let b = Coordinate::new(-96.3, 41.9);
    let c = Coordinate::new(-96.3, 41.900000000001);

    assert_eq!(a.bits_key(), b.bits_key());
    assert_ne!(a.bits_key(), c.bits_key());
}

#[test]
fn can_treat_signed_zeros_as_same_location() {
    let positive = Coordinate::new(0., 0.);
    let negative = Coordinate::new(-0., -0.);

    assert_eq!(positive.bits_key(), negative.bits_key());
    assert_ne!(positive.bits_key(), Coordinate::new(0., f64::MIN_POSITIVE).bits_key());
}

#[test]
fn can_display_coordinate() {
    assert_eq!(Coordinate::new(-96.5, 41.25).to_string(), "lng=-96.5, lat=41.25");
}
