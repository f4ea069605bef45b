// Host-side tests for star ratings. Random ratings are checked against a
// range, never an exact value.

use folio_core::{RandomSource, Rating, RngSource, RATING_MAX, RATING_MIN};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn glyph_counts_always_sum_to_five() {
    for tenths in -20..=80 {
        let r = Rating::new(tenths as f64 / 10.0);
        assert_eq!(r.stars().total(), 5, "rating {}", r.value());
    }
}

#[test]
fn supplied_rating_is_rounded_and_clamped() {
    assert_eq!(Rating::new(4.74).value(), 4.7);
    assert_eq!(Rating::new(4.76).value(), 4.8);
    assert_eq!(Rating::new(3.0).value(), 4.5);
    assert_eq!(Rating::new(9.0).value(), 5.0);
}

#[test]
fn star_breakdown_matches_value() {
    let s = Rating::new(4.5).stars();
    assert_eq!((s.full, s.half, s.empty), (4, 1, 0));
    let s = Rating::new(5.0).stars();
    assert_eq!((s.full, s.half, s.empty), (5, 0, 0));
    let s = Rating::new(4.7).stars();
    assert_eq!((s.full, s.half, s.empty), (4, 1, 0));
}

#[test]
fn supplied_attribute_is_deterministic() {
    let mut rng = Fixed(0.0);
    let r = Rating::from_attr(Some("4.8"), &mut rng);
    assert_eq!(r.value(), 4.8);
    assert_eq!(r.label(), "4.8");
    let r = Rating::from_attr(Some(" 5 "), &mut rng);
    assert_eq!(r.label(), "5.0");
}

#[test]
fn missing_or_invalid_attribute_uses_random_source() {
    let mut low = Fixed(0.0);
    assert_eq!(Rating::from_attr(None, &mut low).value(), 4.5);
    let mut high = Fixed(0.999);
    assert_eq!(Rating::from_attr(Some("n/a"), &mut high).value(), 5.0);
    let mut mid = Fixed(0.5);
    assert_eq!(Rating::from_attr(Some("NaN"), &mut mid).label(), "4.8");
    for raw in ["inf", "-inf", "Infinity"] {
        let mut low = Fixed(0.0);
        assert_eq!(Rating::from_attr(Some(raw), &mut low).label(), "4.5", "{raw}");
    }
}

#[test]
fn random_ratings_stay_in_range() {
    let mut rng = RngSource(StdRng::seed_from_u64(7));
    for _ in 0..1000 {
        let r = Rating::from_attr(None, &mut rng);
        assert!(r.value() >= RATING_MIN && r.value() <= RATING_MAX);
        let label: f64 = r.label().parse().unwrap();
        assert!((RATING_MIN..=RATING_MAX).contains(&label));
        assert_eq!(r.stars().total(), 5);
    }
}
