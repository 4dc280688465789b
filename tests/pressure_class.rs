//! 압력등급 정규화 회귀 테스트.
use piping_boq_toolbox::piping::{
    classify_pressure_class, normalize_pressure_class, NormalizedClass, PressureClass,
};

const CANONICAL: [&str; 8] = [
    "PN10", "PN16", "PN25", "PN40", "PN64", "Class 150", "Class 300", "Class 600",
];

#[test]
fn canonical_keys_are_fixed_points() {
    for key in CANONICAL {
        let once = normalize_pressure_class(key);
        let twice = normalize_pressure_class(once.as_str());
        assert_eq!(once.as_str(), key);
        assert_eq!(once, twice);
    }
}

#[test]
fn kpa_threshold_is_inclusive_low() {
    assert_eq!(normalize_pressure_class("1000/3").as_str(), "PN10");
    assert_eq!(normalize_pressure_class("1001/3").as_str(), "PN16");
}

#[test]
fn bare_integer_magnitude_decides_kpa_or_class() {
    assert_eq!(
        normalize_pressure_class("150"),
        NormalizedClass::Canonical(PressureClass::Class150)
    );
    assert_eq!(
        normalize_pressure_class("1600"),
        NormalizedClass::Canonical(PressureClass::Pn16)
    );
}

#[test]
fn empty_defaults_and_garbage_passes_through() {
    assert_eq!(normalize_pressure_class("  ").as_str(), "PN16");
    assert_eq!(
        normalize_pressure_class("Table D"),
        NormalizedClass::Unrecognized("Table D".to_string())
    );
}

#[test]
fn top_band_overflow_is_flagged() {
    let c = classify_pressure_class("PN99");
    assert_eq!(c.normalized.as_str(), "PN64");
    assert!(c.beyond_top_band);
    assert_eq!(c.table_key(), None);
    assert!(!classify_pressure_class("PN63").beyond_top_band);
}
