//! 재질 적합성 검토의 압력/온도 비대칭 테스트.
use piping_boq_toolbox::piping::{check_material_suitability, suitable_materials};
use piping_boq_toolbox::reference::ReferenceTables;

#[test]
fn temperature_over_limit_is_unsuitable() {
    let r = check_material_suitability("ASTM A106", Some(500.0), Some(50.0));
    assert!(!r.is_suitable);
    assert!(r.warnings.iter().any(|w| w.contains("427")));
    assert!(r.recommendation.is_some_and(|s| s.contains("A335 P11/P22")));
}

#[test]
fn pressure_over_limit_only_warns() {
    let r = check_material_suitability("ASTM A106", Some(300.0), Some(1000.0));
    assert!(r.is_suitable);
    assert!(r.warnings.iter().any(|w| w.contains("1000 bar")));
}

#[test]
fn list_treats_pressure_as_hard_filter() {
    let tables = ReferenceTables::standard();
    let list = suitable_materials(tables, Some(300.0), Some(1000.0));
    assert!(!list.contains(&"ASTM A106"));
    assert!(suitable_materials(tables, Some(300.0), Some(50.0)).contains(&"ASTM A106"));
}
