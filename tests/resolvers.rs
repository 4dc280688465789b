//! 참조 테이블 조회기의 대체 경로 테스트.
use piping_boq_toolbox::piping::{
    bnw_set_info, bolt_holes_per_flange, flange_weight, gasket_weight, resolve_flange_weight,
    resolve_gasket_weight, Confidence,
};
use piping_boq_toolbox::reference::ReferenceTables;

#[test]
fn unknown_class_falls_back_to_pn16_table() {
    let unknown = flange_weight(100, Some("PN99"));
    let pn16 = flange_weight(100, Some("PN16"));
    assert!((unknown - pn16).abs() < 1e-12);
    assert!((pn16 - 6.0).abs() < 1e-12);
    let r = resolve_flange_weight(ReferenceTables::standard(), 100, Some("PN99"));
    assert_eq!(r.confidence, Confidence::Fallback);
}

#[test]
fn untabulated_bore_uses_size_band() {
    let r = resolve_flange_weight(ReferenceTables::standard(), 1300, Some("PN16"));
    assert_eq!(r.confidence, Confidence::Estimate);
    assert!((r.value - 150.0).abs() < 1e-12);
}

#[test]
fn gasket_rounds_down_never_up() {
    let at_40 = gasket_weight("SW-316", 40);
    let at_47 = gasket_weight("SW-316", 47);
    let at_50 = gasket_weight("SW-316", 50);
    assert!((at_47 - at_40).abs() < 1e-12);
    assert!((at_47 - at_50).abs() > 1e-6);
    let r = resolve_gasket_weight(ReferenceTables::standard(), "SW-316", 47);
    assert_eq!(r.confidence, Confidence::Fallback);
}

#[test]
fn gasket_category_priority() {
    // "SW-" 접두어가 PTFE 포함 여부보다 먼저 검사된다.
    assert!((gasket_weight("SW-PTFE filled", 100) - 0.150).abs() < 1e-12);
    assert!((gasket_weight("EPDM full face", 100) - 0.030).abs() < 1e-12);
    assert!((gasket_weight("unknown", 100) - 0.150).abs() < 1e-12);
}

#[test]
fn bolt_defaults_for_unknown_class() {
    assert_eq!(bolt_holes_per_flange(100, "Table D"), 8);
    let info = bnw_set_info(100, "Table D");
    assert_eq!(info.bolt_size, "M16x65");
    assert!((info.set_weight_kg() - 0.18 * 8.0).abs() < 1e-12);
}

#[test]
fn bolts_above_top_band_use_top_class_table() {
    // 플랜지 중량과 달리 볼트 표는 최고 등급 표로 조회한다.
    assert_eq!(bolt_holes_per_flange(200, "Class 600"), 16);
    assert_eq!(bolt_holes_per_flange(200, "Class 900"), 16);
    assert_eq!(bnw_set_info(200, "Class 900"), bnw_set_info(200, "Class 600"));
    assert_eq!(bnw_set_info(200, "Class 900").bolt_size, "1 1/8\"x180");

    assert_eq!(bolt_holes_per_flange(250, "PN100"), bolt_holes_per_flange(250, "PN64"));
    assert_eq!(bnw_set_info(250, "PN100"), bnw_set_info(250, "PN64"));
    assert_eq!(bolt_holes_per_flange(200, "10000/3"), bolt_holes_per_flange(200, "PN64"));

    let class900 = bnw_set_info(200, "Class 900");
    assert!((class900.set_weight_kg() - 0.95 * 16.0).abs() < 1e-12);
}
