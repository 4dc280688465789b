//! 최소 두께와 스케줄 추천 테스트.
use piping_boq_toolbox::piping::{
    find_recommended_schedule, schedule_list_for_spec, validate_schedule_for_pressure,
    DesignFactors, WallThicknessInput, NO_SCHEDULE_MEETS_MINIMUM,
};
use piping_boq_toolbox::reference::ReferenceTables;

fn input(pressure_bar: f64) -> WallThicknessInput {
    WallThicknessInput {
        outside_diameter_mm: 114.3,
        design_pressure_bar: pressure_bar,
        material_code: "A106B".to_string(),
        temperature_c: 100.0,
        factors: DesignFactors::default(),
    }
}

fn schedule_at(pressure_bar: f64) -> (String, f64, Vec<String>) {
    let list = schedule_list_for_spec(ReferenceTables::standard(), 100, "ASTM A106 Gr. B");
    let rec = find_recommended_schedule(&list, &input(pressure_bar));
    let schedule = rec.schedule.unwrap();
    (schedule.designation, schedule.wall_thickness_mm, rec.validation.warnings)
}

#[test]
fn lightest_sufficient_schedule() {
    let (designation, wall, warnings) = schedule_at(100.0);
    assert_eq!(designation, "Sch 40/STD");
    assert!((wall - 6.02).abs() < 1e-12);
    assert!(warnings.is_empty());
    assert_eq!(schedule_at(200.0).0, "Sch 120");
}

#[test]
fn thickest_with_warning_when_nothing_suffices() {
    let (designation, _, warnings) = schedule_at(400.0);
    assert_eq!(designation, "XXS");
    assert!(warnings.iter().any(|w| w == NO_SCHEDULE_MEETS_MINIMUM));
}

#[test]
fn recommendation_is_monotonic_in_pressure() {
    let mut previous = 0.0;
    for step in 0..60 {
        let (_, wall, _) = schedule_at(f64::from(step) * 10.0);
        assert!(wall >= previous, "wall dropped at {} bar", step * 10);
        previous = wall;
    }
}

#[test]
fn validation_reports_margin() {
    let v = validate_schedule_for_pressure(6.02, &input(100.0));
    assert!(v.is_adequate);
    assert!(v.max_allowable_pressure_bar > 100.0);
    let margin = v.margin.unwrap();
    assert!((margin - v.max_allowable_pressure_bar / 100.0).abs() < 1e-12);
    assert!(validate_schedule_for_pressure(6.02, &input(0.0)).margin.is_none());
}
