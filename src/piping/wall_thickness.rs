//! 최소 관 두께 산정과 스케줄 추천.
//!
//! Barlow 형태의 얇은 관 공식 하나만 쓰는 단순화 계산이다.
//!
//! ```text
//! t_min = P·D·SF / (2·S·E) + c
//! ```
//!
//! P는 설계압력(MPa), D는 외경(mm), S는 허용응력(MPa), E는 용접 이음 효율, c는 부식 여유다.
//! ASME B31.3 전체 적합성 검토를 대신하지 않는다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::material_db::lookup_allowable_stress;
use crate::reference::{PipeScheduleEntry, ReferenceTables};

pub const NO_SCHEDULE_MEETS_MINIMUM: &str =
    "no schedule meets minimum wall thickness; using thickest available";
pub const NO_SCHEDULES_AVAILABLE: &str = "no schedules available for this size";

/// 설계 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignFactors {
    pub joint_efficiency: f64,
    pub corrosion_allowance_mm: f64,
    pub safety_factor: f64,
}

impl Default for DesignFactors {
    fn default() -> Self {
        Self {
            joint_efficiency: 1.0,
            corrosion_allowance_mm: 0.0,
            safety_factor: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallThicknessInput {
    pub outside_diameter_mm: f64,
    pub design_pressure_bar: f64,
    pub material_code: String,
    pub temperature_c: f64,
    #[serde(default)]
    pub factors: DesignFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinWallThickness {
    pub min_thickness_mm: f64,
    pub allowable_stress_mpa: f64,
    pub material_used: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleValidation {
    pub min_required_mm: f64,
    pub selected_thickness_mm: f64,
    pub max_allowable_pressure_bar: f64,
    pub design_pressure_bar: f64,
    /// 최대 허용압력 / 설계압력. 설계압력이 0 이하이면 없음.
    pub margin: Option<f64>,
    pub is_adequate: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecommendation {
    pub schedule: Option<PipeScheduleEntry>,
    pub validation: ScheduleValidation,
}

/// 최소 필요 두께와 사용한 허용응력.
pub fn calculate_min_wall_thickness(input: &WallThicknessInput) -> MinWallThickness {
    let stress = lookup_allowable_stress(&input.material_code, input.temperature_c);
    let f = input.factors;
    let pressure_mpa = input.design_pressure_bar * 0.1;
    let min_thickness_mm = pressure_mpa * input.outside_diameter_mm * f.safety_factor
        / (2.0 * stress.value_mpa * f.joint_efficiency)
        + f.corrosion_allowance_mm;

    MinWallThickness {
        min_thickness_mm,
        allowable_stress_mpa: stress.value_mpa,
        material_used: stress.material_code,
        warnings: stress.warnings,
    }
}

/// 최소 필요 두께(mm)만 돌려주는 편의 함수.
pub fn min_wall_thickness_mm(
    outside_diameter_mm: f64,
    design_pressure_bar: f64,
    material_code: &str,
    temperature_c: f64,
    factors: DesignFactors,
) -> f64 {
    calculate_min_wall_thickness(&WallThicknessInput {
        outside_diameter_mm,
        design_pressure_bar,
        material_code: material_code.to_string(),
        temperature_c,
        factors,
    })
    .min_thickness_mm
}

/// 주어진 두께에서의 최대 허용압력(bar). 두께가 부식 여유 이하이면 0.
pub fn max_allowable_pressure_bar(
    wall_thickness_mm: f64,
    outside_diameter_mm: f64,
    allowable_stress_mpa: f64,
    factors: DesignFactors,
) -> f64 {
    let effective = wall_thickness_mm - factors.corrosion_allowance_mm;
    if effective <= 0.0 {
        return 0.0;
    }
    let mpa = 2.0 * allowable_stress_mpa * factors.joint_efficiency * effective
        / (outside_diameter_mm * factors.safety_factor);
    if mpa.is_finite() {
        mpa * 10.0
    } else {
        0.0
    }
}

fn validate_against(
    wall_thickness_mm: f64,
    input: &WallThicknessInput,
    min: MinWallThickness,
) -> ScheduleValidation {
    let max_bar = max_allowable_pressure_bar(
        wall_thickness_mm,
        input.outside_diameter_mm,
        min.allowable_stress_mpa,
        input.factors,
    );
    let is_adequate = wall_thickness_mm >= min.min_thickness_mm;
    let mut warnings = min.warnings;
    if !is_adequate {
        warnings.push(format!(
            "wall thickness {wall_thickness_mm:.2} mm is below the required minimum {:.2} mm",
            min.min_thickness_mm
        ));
    }
    ScheduleValidation {
        min_required_mm: min.min_thickness_mm,
        selected_thickness_mm: wall_thickness_mm,
        max_allowable_pressure_bar: max_bar,
        design_pressure_bar: input.design_pressure_bar,
        margin: (input.design_pressure_bar > 0.0).then(|| max_bar / input.design_pressure_bar),
        is_adequate,
        warnings,
    }
}

/// 선택한 두께가 설계압력을 견디는지 검토한다.
pub fn validate_schedule_for_pressure(
    wall_thickness_mm: f64,
    input: &WallThicknessInput,
) -> ScheduleValidation {
    validate_against(wall_thickness_mm, input, calculate_min_wall_thickness(input))
}

/// 최소 두께를 만족하는 가장 얇은 스케줄을 고른다.
///
/// 두께가 같으면 표기가 사전순으로 앞선 쪽을 고른다. 만족하는 스케줄이 없으면 가장 두꺼운
/// 스케줄과 경고를 돌려주고, 목록이 비어 있으면 스케줄 없이 경고만 돌려준다.
pub fn find_recommended_schedule(
    schedules: &[PipeScheduleEntry],
    input: &WallThicknessInput,
) -> ScheduleRecommendation {
    let min = calculate_min_wall_thickness(input);

    let mut sorted: Vec<&PipeScheduleEntry> = schedules.iter().collect();
    sorted.sort_by(|a, b| {
        a.wall_thickness_mm
            .total_cmp(&b.wall_thickness_mm)
            .then_with(|| a.designation.cmp(&b.designation))
    });

    let sufficient = sorted
        .iter()
        .find(|s| s.wall_thickness_mm >= min.min_thickness_mm)
        .copied();
    let (chosen, extra_warning) = match sufficient {
        Some(s) => (Some(s), None),
        None => {
            let thickest = sorted.last().map(|s| s.wall_thickness_mm);
            let chosen = thickest.and_then(|wall| {
                sorted.iter().find(|s| s.wall_thickness_mm == wall).copied()
            });
            match chosen {
                Some(s) => (Some(s), Some(NO_SCHEDULE_MEETS_MINIMUM)),
                None => (None, Some(NO_SCHEDULES_AVAILABLE)),
            }
        }
    };

    debug!(
        min_mm = min.min_thickness_mm,
        schedule = chosen.map(|s| s.designation.as_str()),
        "schedule selected"
    );

    let wall = chosen.map_or(0.0, |s| s.wall_thickness_mm);
    let mut validation = validate_against(wall, input, min);
    if let Some(warning) = extra_warning {
        validation.warnings.push(warning.to_string());
    }
    ScheduleRecommendation {
        schedule: chosen.cloned(),
        validation,
    }
}

/// 강재 규격 이름으로 대체 스케줄 표를 고른다.
///
/// SABS/SANS 62는 이름에 "Heavy"가 있으면 Heavy, 아니면 Medium. SABS/SANS 719는 WT 표,
/// 나머지는 ASTM 표. 호칭경이 없으면 빈 목록.
pub fn schedule_list_for_spec(
    tables: &ReferenceTables,
    nominal_bore_mm: u32,
    steel_spec_name: &str,
) -> Vec<PipeScheduleEntry> {
    let upper = steel_spec_name.to_ascii_uppercase();
    let table = if upper.contains("SABS 62") || upper.contains("SANS 62") {
        if upper.contains("HEAVY") {
            &tables.sabs62_heavy
        } else {
            &tables.sabs62_medium
        }
    } else if upper.contains("SABS 719") || upper.contains("SANS 719") {
        &tables.sabs719_schedules
    } else {
        &tables.astm_schedules
    };
    table.get(&nominal_bore_mm).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pressure_bar: f64) -> WallThicknessInput {
        WallThicknessInput {
            outside_diameter_mm: 114.3,
            design_pressure_bar: pressure_bar,
            material_code: "ASTM_A106_Grade_B".to_string(),
            temperature_c: 100.0,
            factors: DesignFactors::default(),
        }
    }

    #[test]
    fn barlow_minimum_wall() {
        let min = calculate_min_wall_thickness(&input(100.0));
        // 10 MPa × 114.3 × 1.2 / (2 × 138)
        assert!((min.min_thickness_mm - 4.969_565).abs() < 1e-5);
        assert_eq!(min.material_used, "A106B");
        assert!(min.warnings.is_empty());
    }

    #[test]
    fn corrosion_allowance_adds_linearly() {
        let mut i = input(100.0);
        i.factors.corrosion_allowance_mm = 1.5;
        let base = calculate_min_wall_thickness(&input(100.0)).min_thickness_mm;
        assert!((calculate_min_wall_thickness(&i).min_thickness_mm - base - 1.5).abs() < 1e-12);
    }

    #[test]
    fn max_pressure_inverts_minimum() {
        let f = DesignFactors::default();
        let t = min_wall_thickness_mm(114.3, 100.0, "A106B", 100.0, f);
        let p = max_allowable_pressure_bar(t, 114.3, 138.0, f);
        assert!((p - 100.0).abs() < 1e-9);
        assert_eq!(max_allowable_pressure_bar(1.0, 114.3, 138.0, DesignFactors {
            corrosion_allowance_mm: 1.0,
            ..f
        }), 0.0);
    }

    #[test]
    fn picks_lightest_sufficient() {
        let t = ReferenceTables::standard();
        let schedules = schedule_list_for_spec(t, 100, "ASTM A106 Gr B");
        let rec = find_recommended_schedule(&schedules, &input(100.0));
        assert_eq!(rec.schedule.map(|s| s.designation), Some("Sch 40/STD".to_string()));
        assert!(rec.validation.is_adequate);
        assert!(rec.validation.margin.is_some_and(|m| m >= 1.0));
    }

    #[test]
    fn equal_walls_prefer_lower_designation() {
        let schedules = [
            PipeScheduleEntry::new(100, "Sch B", 8.0),
            PipeScheduleEntry::new(100, "Sch A", 8.0),
            PipeScheduleEntry::new(100, "Sch C", 4.0),
        ];
        let rec = find_recommended_schedule(&schedules, &input(100.0));
        assert_eq!(rec.schedule.map(|s| s.designation), Some("Sch A".to_string()));
    }

    #[test]
    fn thickest_with_warning_when_none_suffice() {
        let schedules = [
            PipeScheduleEntry::new(100, "Thin", 2.0),
            PipeScheduleEntry::new(100, "Thick", 3.0),
        ];
        let rec = find_recommended_schedule(&schedules, &input(100.0));
        assert_eq!(rec.schedule.map(|s| s.designation), Some("Thick".to_string()));
        assert!(!rec.validation.is_adequate);
        assert!(rec
            .validation
            .warnings
            .iter()
            .any(|w| w == NO_SCHEDULE_MEETS_MINIMUM));
    }

    #[test]
    fn empty_list_warns_without_schedule() {
        let rec = find_recommended_schedule(&[], &input(10.0));
        assert!(rec.schedule.is_none());
        assert!(rec.validation.warnings.iter().any(|w| w == NO_SCHEDULES_AVAILABLE));
    }

    #[test]
    fn spec_name_selects_table() {
        let t = ReferenceTables::standard();
        let heavy = schedule_list_for_spec(t, 50, "SANS 62 ERW Heavy");
        assert!(heavy.iter().all(|s| s.designation == "Heavy"));
        assert!(!heavy.is_empty());
        let medium = schedule_list_for_spec(t, 50, "SABS 62 ERW");
        assert!(medium.iter().all(|s| s.designation == "Medium"));
        let wt = schedule_list_for_spec(t, 200, "SABS 719 ERW");
        assert!(wt.iter().all(|s| s.designation.starts_with("WT")));
        assert!(schedule_list_for_spec(t, 15, "SABS 719 ERW").is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn recommendation_is_monotonic_in_pressure(
            nb_index in 0usize..20,
            low in 1.0f64..200.0,
            step in 0.0f64..200.0,
            temp in 20.0f64..450.0,
        ) {
            let t = ReferenceTables::standard();
            let nb = *t.astm_schedules.keys().nth(nb_index % t.astm_schedules.len()).unwrap_or(&100);
            let od = t.outside_diameters.get(&nb).copied().unwrap_or(f64::from(nb) * 1.05);
            let schedules = schedule_list_for_spec(t, nb, "ASTM A106");
            let at = |p: f64| {
                let input = WallThicknessInput {
                    outside_diameter_mm: od,
                    design_pressure_bar: p,
                    material_code: "A106B".to_string(),
                    temperature_c: temp,
                    factors: DesignFactors::default(),
                };
                find_recommended_schedule(&schedules, &input)
                    .schedule
                    .map_or(0.0, |s| s.wall_thickness_mm)
            };
            prop_assert!(at(low + step) >= at(low));
        }
    }
}
