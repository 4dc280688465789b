//! 참조 테이블 조회기.
//!
//! 조회는 실패하지 않는다. 정확한 값이 없으면 문서화된 대체 표나 크기 구간 추정값으로
//! 내려가며, 어느 단계의 값인지는 [`Confidence`]로 함께 돌려준다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pressure_class::{classify_pressure_class, PressureClass};
use crate::reference::{GasketMaterial, ReferenceTables};

/// 조회 결과의 정밀도 단계. 뒤로 갈수록 정밀도가 낮다.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Confidence {
    /// 표에서 정확히 일치
    #[default]
    Exact,
    /// 대체 표 또는 문서화된 기본값
    Fallback,
    /// 크기 구간 추정
    Estimate,
}

impl Confidence {
    pub fn worst(self, other: Confidence) -> Confidence {
        self.max(other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    pub confidence: Confidence,
}

impl<T> Resolved<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            confidence: Confidence::Exact,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            confidence: Confidence::Fallback,
        }
    }

    pub fn estimate(value: T) -> Self {
        Self {
            value,
            confidence: Confidence::Estimate,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            confidence: self.confidence,
        }
    }
}

/// 플랜지 1개분 BNW 세트 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnwSetInfo {
    pub bolt_size: String,
    pub weight_per_hole_kg: f64,
    pub holes_per_flange: u32,
}

impl BnwSetInfo {
    /// 플랜지 1개 접속부의 BNW 세트 중량.
    pub fn set_weight_kg(&self) -> f64 {
        self.weight_per_hole_kg * f64::from(self.holes_per_flange)
    }
}

/// 맹플랜지 도장/라이닝 면적.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceArea {
    pub external_m2: f64,
    pub internal_m2: f64,
}

pub const DEFAULT_BOLT_HOLES: u32 = 8;
pub const DEFAULT_BOLT_SIZE: &str = "M16x65";
pub const DEFAULT_BOLT_WEIGHT_PER_HOLE_KG: f64 = 0.18;

/// 플랜지 중량 표 조회에 쓸 등급. 인식하지 못했거나 최고 등급을 넘은 표기는 None.
fn table_class(designation: &str) -> Option<PressureClass> {
    classify_pressure_class(designation).table_key()
}

/// 볼트 표 조회에 쓸 등급. 최고 등급을 넘은 표기도 정규화된 최고 등급으로 조회한다.
fn normalized_class(designation: &str) -> Option<PressureClass> {
    classify_pressure_class(designation).normalized.canonical()
}

/// 호칭경 → 외경. 표에 없으면 `nb × 1.05`로 추정한다.
pub fn resolve_outside_diameter(tables: &ReferenceTables, nb_mm: u32) -> Resolved<f64> {
    match tables.outside_diameters.get(&nb_mm) {
        Some(od) => Resolved::exact(*od),
        None => {
            debug!(nb_mm, "outside diameter not tabulated, estimating");
            Resolved::estimate(f64::from(nb_mm) * 1.05)
        }
    }
}

fn banded_flange_estimate(nb_mm: u32) -> f64 {
    match nb_mm {
        0..=99 => 5.0,
        100..=199 => 12.0,
        200..=399 => 40.0,
        400..=599 => 80.0,
        _ => 150.0,
    }
}

/// 플랜지 단품 중량(kg).
///
/// 등급 표 → PN16 표 → 크기 구간 추정 순으로 내려간다. 등급이 없으면 PN16으로 본다.
/// 0은 값이 없는 것으로 취급한다.
pub fn resolve_flange_weight(
    tables: &ReferenceTables,
    nb_mm: u32,
    designation: Option<&str>,
) -> Resolved<f64> {
    let lookup = |class: PressureClass| {
        tables
            .flange_weights
            .get(&class)
            .and_then(|by_nb| by_nb.get(&nb_mm))
            .copied()
            .filter(|w| *w > 0.0)
    };

    if let Some(weight) = table_class(designation.unwrap_or_default()).and_then(lookup) {
        return Resolved::exact(weight);
    }
    if let Some(weight) = lookup(PressureClass::Pn16) {
        debug!(nb_mm, ?designation, "flange weight from PN16 fallback table");
        return Resolved::fallback(weight);
    }
    let estimate = banded_flange_estimate(nb_mm);
    debug!(nb_mm, ?designation, estimate, "flange weight from size band estimate");
    Resolved::estimate(estimate)
}

/// 플랜지당 볼트 홀 수. 등급이나 호칭경이 표에 없으면 8.
pub fn resolve_bolt_holes(tables: &ReferenceTables, nb_mm: u32, designation: &str) -> Resolved<u32> {
    let holes = normalized_class(designation)
        .and_then(|class| tables.bolt_holes.get(&class))
        .and_then(|by_nb| by_nb.get(&nb_mm))
        .copied()
        .filter(|h| *h > 0);
    match holes {
        Some(holes) => Resolved::exact(holes),
        None => {
            debug!(nb_mm, designation, "bolt holes defaulted");
            Resolved::fallback(DEFAULT_BOLT_HOLES)
        }
    }
}

/// BNW 세트 정보. 볼트 사양이 없으면 M16x65 / 0.18 kg을 쓴다.
pub fn resolve_bnw_set(tables: &ReferenceTables, nb_mm: u32, designation: &str) -> Resolved<BnwSetInfo> {
    let holes = resolve_bolt_holes(tables, nb_mm, designation);
    let spec = normalized_class(designation)
        .and_then(|class| tables.bnw_sets.get(&class))
        .and_then(|by_nb| by_nb.get(&nb_mm));

    match spec {
        Some(spec) => Resolved {
            value: BnwSetInfo {
                bolt_size: spec.bolt_size.clone(),
                weight_per_hole_kg: spec.weight_per_hole_kg,
                holes_per_flange: holes.value,
            },
            confidence: Confidence::Exact.worst(holes.confidence),
        },
        None => {
            debug!(nb_mm, designation, "bolt spec defaulted");
            Resolved {
                value: BnwSetInfo {
                    bolt_size: DEFAULT_BOLT_SIZE.to_string(),
                    weight_per_hole_kg: DEFAULT_BOLT_WEIGHT_PER_HOLE_KG,
                    holes_per_flange: holes.value,
                },
                confidence: Confidence::Fallback.worst(holes.confidence),
            }
        }
    }
}

type GasketRule = (fn(&str) -> bool, GasketMaterial);

/// 가스켓 표기 분류 규칙. 위에서부터 처음 일치한 규칙이 이긴다.
pub const GASKET_RULES: [GasketRule; 6] = [
    (
        |s: &str| s.starts_with("SW-") || s.contains("Spiral"),
        GasketMaterial::SpiralWound,
    ),
    (|s: &str| s.starts_with("RTJ-"), GasketMaterial::Rtj),
    (
        |s: &str| s.starts_with("PTFE-") || s.contains("PTFE"),
        GasketMaterial::Ptfe,
    ),
    (
        |s: &str| s.starts_with("Graphite-") || s.contains("Graphite"),
        GasketMaterial::Graphite,
    ),
    (|s: &str| s.starts_with("CAF-"), GasketMaterial::Caf),
    (
        |s: &str| s.starts_with("Rubber-") || s.contains("EPDM") || s.contains("NBR"),
        GasketMaterial::Rubber,
    ),
];

/// 가스켓 표기를 재질로 분류한다. 일치하는 규칙이 없으면 스파이럴 운드.
pub fn classify_gasket(gasket_type: &str) -> GasketMaterial {
    GASKET_RULES
        .iter()
        .find(|(matches, _)| matches(gasket_type))
        .map(|(_, material)| *material)
        .unwrap_or(GasketMaterial::SpiralWound)
}

/// 가스켓 1매 중량(kg).
///
/// 호칭경은 표에서 같거나 작은 가장 큰 크기로 내림한다. 가장 작은 크기보다 작으면
/// 가장 작은 크기를 쓴다. 표가 비어 있으면 0.
pub fn resolve_gasket_weight(tables: &ReferenceTables, gasket_type: &str, nb_mm: u32) -> Resolved<f64> {
    let row = tables
        .gaskets
        .range(..=nb_mm)
        .next_back()
        .or_else(|| tables.gaskets.iter().next());

    let Some((table_nb, weights)) = row else {
        return Resolved::estimate(0.0);
    };
    let weight = weights.weight(classify_gasket(gasket_type));
    if *table_nb == nb_mm {
        Resolved::exact(weight)
    } else {
        debug!(nb_mm, table_nb, gasket_type, "gasket weight from nearest smaller size");
        Resolved::fallback(weight)
    }
}

/// 맹플랜지 표 등급 선택. 공백을 없앤 대문자 표기에서 포함 여부로 본다.
fn blank_flange_class(designation: &str) -> PressureClass {
    let key: String = designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if key.contains("PN40") || key.contains("CLASS300") {
        PressureClass::Pn40
    } else if key.contains("PN25") || key.contains("CLASS150") {
        PressureClass::Pn25
    } else if key.contains("PN10") {
        PressureClass::Pn10
    } else {
        PressureClass::Pn16
    }
}

/// 맹플랜지 중량(kg). 표에 없으면 `nb × 0.15`.
pub fn blank_flange_weight(tables: &ReferenceTables, nb_mm: u32, designation: &str) -> Resolved<f64> {
    let class = blank_flange_class(designation);
    match tables
        .blank_flange_weights
        .get(&class)
        .and_then(|by_nb| by_nb.get(&nb_mm))
    {
        Some(weight) => Resolved::exact(*weight),
        None => Resolved::estimate(f64::from(nb_mm) * 0.15),
    }
}

/// 맹플랜지 외면(면 + 테두리)과 내면(면) 면적.
pub fn blank_flange_surface_area(tables: &ReferenceTables, nb_mm: u32) -> Resolved<SurfaceArea> {
    let nb = f64::from(nb_mm);
    let od = match tables.flange_outside_diameters.get(&nb_mm) {
        Some(od) => Resolved::exact(*od),
        None => Resolved::estimate(nb * 1.7),
    };
    let thickness_mm = (nb * 0.08).max(20.0);
    od.map(|od_mm| {
        let face = std::f64::consts::PI * (od_mm / 2000.0).powi(2);
        let edge = std::f64::consts::PI * (od_mm / 1000.0) * (thickness_mm / 1000.0);
        SurfaceArea {
            external_m2: face + edge,
            internal_m2: face,
        }
    })
}

/// 표준 테이블 기준 외경.
pub fn outside_diameter(nb_mm: u32) -> f64 {
    resolve_outside_diameter(ReferenceTables::standard(), nb_mm).value
}

/// 표준 테이블 기준 플랜지 중량.
pub fn flange_weight(nb_mm: u32, designation: Option<&str>) -> f64 {
    resolve_flange_weight(ReferenceTables::standard(), nb_mm, designation).value
}

pub fn bolt_holes_per_flange(nb_mm: u32, designation: &str) -> u32 {
    resolve_bolt_holes(ReferenceTables::standard(), nb_mm, designation).value
}

pub fn bnw_set_info(nb_mm: u32, designation: &str) -> BnwSetInfo {
    resolve_bnw_set(ReferenceTables::standard(), nb_mm, designation).value
}

pub fn gasket_weight(gasket_type: &str, nb_mm: u32) -> f64 {
    resolve_gasket_weight(ReferenceTables::standard(), gasket_type, nb_mm).value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flange_weight_tiers() {
        let t = ReferenceTables::standard();
        assert_eq!(resolve_flange_weight(t, 100, Some("PN40")), Resolved::exact(9.0));
        assert_eq!(resolve_flange_weight(t, 100, Some("Table D")), Resolved::fallback(6.0));
        assert_eq!(resolve_flange_weight(t, 110, Some("PN16")), Resolved::estimate(12.0));
        assert_eq!(resolve_flange_weight(t, 100, None), Resolved::exact(6.0));
    }

    #[test]
    fn bnw_confidence_is_worst_of_holes_and_spec() {
        let t = ReferenceTables::standard();
        assert_eq!(resolve_bnw_set(t, 200, "Class 600").confidence, Confidence::Exact);
        assert_eq!(resolve_bnw_set(t, 200, "Class 900").confidence, Confidence::Exact);
        assert_eq!(resolve_bnw_set(t, 200, "Table D").confidence, Confidence::Fallback);
        assert_eq!(Confidence::Exact.worst(Confidence::Estimate), Confidence::Estimate);
        assert_eq!(Confidence::Fallback.worst(Confidence::Exact), Confidence::Fallback);
    }

    #[test]
    fn band_estimate_edges() {
        assert_eq!(banded_flange_estimate(99), 5.0);
        assert_eq!(banded_flange_estimate(100), 12.0);
        assert_eq!(banded_flange_estimate(399), 40.0);
        assert_eq!(banded_flange_estimate(599), 80.0);
        assert_eq!(banded_flange_estimate(600), 150.0);
    }

    #[test]
    fn gasket_rules_in_priority_order() {
        assert_eq!(classify_gasket("SW-316"), GasketMaterial::SpiralWound);
        assert_eq!(classify_gasket("RTJ-R45"), GasketMaterial::Rtj);
        assert_eq!(classify_gasket("Expanded PTFE"), GasketMaterial::Ptfe);
        assert_eq!(classify_gasket("Graphite-316"), GasketMaterial::Graphite);
        assert_eq!(classify_gasket("CAF-3mm"), GasketMaterial::Caf);
        assert_eq!(classify_gasket("Sheet EPDM"), GasketMaterial::Rubber);
        // Spiral + PTFE 표기는 먼저 선언된 규칙이 이긴다.
        assert_eq!(classify_gasket("Spiral PTFE filler"), GasketMaterial::SpiralWound);
        assert_eq!(classify_gasket("unknown"), GasketMaterial::SpiralWound);
    }

    #[test]
    fn blank_flange_class_mapping() {
        assert_eq!(blank_flange_class("Class 300"), PressureClass::Pn40);
        assert_eq!(blank_flange_class("class150"), PressureClass::Pn25);
        assert_eq!(blank_flange_class("PN 10"), PressureClass::Pn10);
        assert_eq!(blank_flange_class("1600/3"), PressureClass::Pn16);
    }

    #[test]
    fn blank_flange_area_uses_min_thickness() {
        let t = ReferenceTables::standard();
        let area = blank_flange_surface_area(t, 100);
        assert_eq!(area.confidence, Confidence::Exact);
        let face = std::f64::consts::PI * 0.11_f64.powi(2);
        assert!((area.value.internal_m2 - face).abs() < 1e-12);
        let edge = std::f64::consts::PI * 0.22 * 0.02;
        assert!((area.value.external_m2 - (face + edge)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn gasket_weight_never_rounds_up(nb in 15u32..1500) {
            let t = ReferenceTables::standard();
            let floor_nb = *t.gaskets.range(..=nb).next_back().map(|(k, _)| k).unwrap_or(&15);
            let expected = t.gaskets[&floor_nb].spiral_wound;
            prop_assert_eq!(gasket_weight("SW-316", nb), expected);
        }

        #[test]
        fn flange_weight_is_always_positive(nb in 0u32..2000, class in "(PN ?[0-9]{1,3}|Class [0-9]{2,4}|[0-9]{1,5}(/3)?)?") {
            let w = flange_weight(nb, Some(class.as_str()));
            prop_assert!(w > 0.0);
        }
    }
}
