//! 배관 BOQ 계산용 참조 테이블.
//!
//! 모든 테이블은 한 번 만들어진 뒤 변경되지 않는다. 계산 함수는 `&ReferenceTables`를
//! 인자로 받으므로 테스트에서는 임의의 테이블을 만들어 주입할 수 있다.

pub mod dimensions;
pub mod flange_tables;
pub mod gasket_tables;
pub mod material_groups;
pub mod material_limits;
pub mod schedule_tables;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::piping::pressure_class::PressureClass;

pub use gasket_tables::{GasketMaterial, GasketWeights};
pub use material_groups::MaterialGroupMapping;
pub use material_limits::MaterialLimits;

/// 볼트 1개(너트/와셔 포함) 사양.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltSpec {
    pub bolt_size: String,
    pub weight_per_hole_kg: f64,
}

impl BoltSpec {
    pub fn new(bolt_size: impl Into<String>, weight_per_hole_kg: f64) -> Self {
        Self {
            bolt_size: bolt_size.into(),
            weight_per_hole_kg,
        }
    }
}

/// 호칭경 하나에 대한 스케줄(두께) 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeScheduleEntry {
    pub nominal_bore_mm: u32,
    pub designation: String,
    pub wall_thickness_mm: f64,
}

impl PipeScheduleEntry {
    pub fn new(nominal_bore_mm: u32, designation: impl Into<String>, wall_thickness_mm: f64) -> Self {
        Self {
            nominal_bore_mm,
            designation: designation.into(),
            wall_thickness_mm,
        }
    }
}

pub type ClassTable<T> = BTreeMap<PressureClass, BTreeMap<u32, T>>;
pub type ScheduleTable = BTreeMap<u32, Vec<PipeScheduleEntry>>;

/// 전체 참조 데이터 묶음.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// 호칭경(mm) → 외경(mm)
    pub outside_diameters: BTreeMap<u32, f64>,
    /// 플랜지 단품 중량(kg). 볼트/가스켓 제외.
    pub flange_weights: ClassTable<f64>,
    pub bolt_holes: ClassTable<u32>,
    pub bnw_sets: ClassTable<BoltSpec>,
    pub gaskets: BTreeMap<u32, GasketWeights>,
    pub blank_flange_weights: ClassTable<f64>,
    /// 맹플랜지 면적 계산용 플랜지 외경(mm)
    pub flange_outside_diameters: BTreeMap<u32, f64>,
    pub astm_schedules: ScheduleTable,
    pub sabs719_schedules: ScheduleTable,
    pub sabs62_medium: ScheduleTable,
    pub sabs62_heavy: ScheduleTable,
    /// 선언 순서가 우선순위다.
    pub material_limits: Vec<MaterialLimits>,
    pub material_groups: Vec<MaterialGroupMapping>,
}

impl ReferenceTables {
    /// 표준 참조 테이블. 프로세스 전체에서 한 번만 만들어진다.
    pub fn standard() -> &'static ReferenceTables {
        static STANDARD: OnceLock<ReferenceTables> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    pub fn build_standard() -> Self {
        Self {
            outside_diameters: dimensions::outside_diameters(),
            flange_weights: flange_tables::flange_weights(),
            bolt_holes: flange_tables::bolt_holes(),
            bnw_sets: flange_tables::bnw_sets(),
            gaskets: gasket_tables::gasket_weights(),
            blank_flange_weights: flange_tables::blank_flange_weights(),
            flange_outside_diameters: dimensions::flange_outside_diameters(),
            astm_schedules: schedule_tables::astm_schedules(),
            sabs719_schedules: schedule_tables::sabs719_schedules(),
            sabs62_medium: schedule_tables::sabs62_medium(),
            sabs62_heavy: schedule_tables::sabs62_heavy(),
            material_limits: material_limits::material_limits(),
            material_groups: material_groups::material_groups(),
        }
    }

    /// 표에 등록된 호칭경 목록(오름차순).
    pub fn nominal_bores(&self) -> impl Iterator<Item = u32> + '_ {
        self.outside_diameters.keys().copied()
    }
}

/// `(nb, value)` 쌍 배열을 BTreeMap으로 만든다.
pub(crate) fn by_nb<T: Clone>(rows: &[(u32, T)]) -> BTreeMap<u32, T> {
    rows.iter().cloned().collect()
}

/// 호칭경 목록과 같은 길이의 값 배열을 짝지어 BTreeMap으로 만든다.
pub(crate) fn zip_nb(nbs: &[u32], values: &[f64]) -> BTreeMap<u32, f64> {
    nbs.iter().copied().zip(values.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_populated() {
        let t = ReferenceTables::standard();
        assert_eq!(t.outside_diameters.len(), 26);
        assert_eq!(t.flange_weights.len(), PressureClass::ALL.len());
        assert_eq!(t.bnw_sets.len(), PressureClass::ALL.len());
        assert!(!t.material_limits.is_empty());
        assert!(t.gaskets.contains_key(&15));
    }

    #[test]
    fn every_flange_class_covers_all_sizes() {
        let t = ReferenceTables::standard();
        for class in PressureClass::ALL {
            let table = &t.flange_weights[&class];
            for nb in t.nominal_bores() {
                assert!(table.get(&nb).is_some_and(|w| *w > 0.0), "{class} {nb}");
            }
        }
    }

    #[test]
    fn schedules_are_per_nb() {
        let t = ReferenceTables::standard();
        for (nb, entries) in &t.astm_schedules {
            assert!(entries.iter().all(|e| e.nominal_bore_mm == *nb));
        }
    }
}
