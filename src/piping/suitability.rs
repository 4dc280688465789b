//! 강관 재질 적합성 검토와 플랜지 재질 그룹 조회.
//!
//! 온도 한계를 벗어나면 부적합이다. 압력 한계 초과는 두께를 모르는 상태의 판단이므로
//! 경고만 남긴다. 단, 압력 용도가 아닌 강재(내마모/구조용)에 압력을 주면 부적합이다.

use serde::{Deserialize, Serialize};

use crate::reference::{MaterialLimits, ReferenceTables};

pub const DEFAULT_PT_RATING_GROUP: &str = "Carbon Steel A105 (Group 1.1)";
pub const STAINLESS_PT_RATING_GROUP: &str = "Stainless Steel 304 (Group 2.1)";
pub const DEFAULT_ASME_GROUP: &str = "1.1";

const PRESSURE_SERVICE_ALTERNATIVES: &str = "For pressure service, use ASTM A106 Grade B (carbon steel), ASTM A335 P11/P22 (alloy steel), or ASTM A312 TP304/TP316 (stainless steel)";
const HIGH_TEMPERATURE_ALTERNATIVES: &str = "Consider ASTM A106 Grade B (up to 427°C), ASTM A335 P11/P22 (up to 593°C), or ASTM A312 stainless (up to 816°C)";
const LOW_TEMPERATURE_ALTERNATIVES: &str =
    "Consider ASTM A333 Grade 6 (down to -100°C) or ASTM A312 stainless (down to -196°C)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityResult {
    pub is_suitable: bool,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<MaterialLimits>,
}

/// 규격명에 패턴이 포함된 첫 번째 한계 항목.
pub fn find_material_limits<'a>(
    tables: &'a ReferenceTables,
    steel_spec_name: &str,
) -> Option<&'a MaterialLimits> {
    if steel_spec_name.is_empty() {
        return None;
    }
    tables
        .material_limits
        .iter()
        .find(|limits| steel_spec_name.contains(limits.pattern.as_str()))
}

pub fn check_material_suitability(
    steel_spec_name: &str,
    temperature_c: Option<f64>,
    pressure_bar: Option<f64>,
) -> SuitabilityResult {
    check_material_suitability_with(
        ReferenceTables::standard(),
        steel_spec_name,
        temperature_c,
        pressure_bar,
    )
}

/// 재질 적합성 검토. 한계 데이터가 없는 재질은 적합으로 본다.
pub fn check_material_suitability_with(
    tables: &ReferenceTables,
    steel_spec_name: &str,
    temperature_c: Option<f64>,
    pressure_bar: Option<f64>,
) -> SuitabilityResult {
    let Some(limits) = find_material_limits(tables, steel_spec_name) else {
        return SuitabilityResult {
            is_suitable: true,
            warnings: Vec::new(),
            recommendation: None,
            limits: None,
        };
    };

    let name = steel_spec_name;
    let pressurised = pressure_bar.filter(|p| *p > 0.0);
    let mut warnings = Vec::new();
    let mut is_suitable = true;

    if limits.not_for_pressure_service {
        warnings.push(format!(
            "WARNING: {name} is NOT rated for pressure service. This material is designed for wear/abrasion resistance only and requires specific engineering analysis for any pressure containment applications."
        ));
        if let Some(p) = pressurised {
            is_suitable = false;
            warnings.push(format!(
                "{name} cannot be used for pressure applications ({p} bar specified). Use carbon steel or alloy steel for pressure service."
            ));
        }
    }

    if let Some(t) = temperature_c {
        if t < limits.min_temp_c {
            is_suitable = false;
            warnings.push(format!(
                "Temperature {t}°C is below minimum {}°C for {name}",
                limits.min_temp_c
            ));
        }
        if t > limits.max_temp_c {
            is_suitable = false;
            warnings.push(format!(
                "Temperature {t}°C exceeds maximum {}°C for {name}",
                limits.max_temp_c
            ));
            if limits.not_for_pressure_service {
                warnings.push(format!(
                    "{name} will soften and lose hardness above {}°C due to tempering effects.",
                    limits.max_temp_c
                ));
            }
        }
    }

    if let Some(p) = pressure_bar {
        if !limits.not_for_pressure_service && p > limits.max_pressure_bar {
            warnings.push(format!(
                "Pressure {p} bar may require special consideration for {name} (typical max: {} bar)",
                limits.max_pressure_bar
            ));
        }
    }

    let recommendation = if is_suitable {
        None
    } else if limits.not_for_pressure_service && pressurised.is_some() {
        Some(PRESSURE_SERVICE_ALTERNATIVES)
    } else {
        match temperature_c {
            Some(t) if t > 400.0 => Some(HIGH_TEMPERATURE_ALTERNATIVES),
            Some(t) if t < -29.0 => Some(LOW_TEMPERATURE_ALTERNATIVES),
            _ => None,
        }
    };

    SuitabilityResult {
        is_suitable,
        warnings,
        recommendation: recommendation.map(str::to_string),
        limits: Some(limits.clone()),
    }
}

/// 조건을 만족하는 재질 패턴 목록(선언 순서).
///
/// 단일 재질 검토와 달리 압력 한계를 넘으면 목록에서 뺀다.
pub fn suitable_materials(
    tables: &ReferenceTables,
    temperature_c: Option<f64>,
    pressure_bar: Option<f64>,
) -> Vec<&str> {
    tables
        .material_limits
        .iter()
        .filter(|limits| {
            let pressure_ok = match pressure_bar {
                Some(p) if limits.not_for_pressure_service => p <= 0.0,
                Some(p) => p <= limits.max_pressure_bar,
                None => true,
            };
            let temperature_ok = temperature_c.map_or(true, |t| limits.contains_temperature(t));
            pressure_ok && temperature_ok
        })
        .map(|limits| limits.pattern.as_str())
        .collect()
}

/// 압력 용도가 아닌 내마모/구조용 강재인지.
pub fn is_wear_resistant_steel(tables: &ReferenceTables, steel_spec_name: &str) -> bool {
    find_material_limits(tables, steel_spec_name).is_some_and(|l| l.not_for_pressure_service)
}

fn find_group<'a>(
    tables: &'a ReferenceTables,
    upper_name: &str,
) -> Option<&'a crate::reference::MaterialGroupMapping> {
    tables
        .material_groups
        .iter()
        .find(|m| upper_name.contains(m.pattern.to_uppercase().as_str()))
}

/// 관 규격에 맞는 플랜지 P-T 등급 재질 그룹.
///
/// 매핑이 없으면 이름에 "STAINLESS"나 "SS"가 있을 때 Group 2.1, 아니면 Group 1.1.
pub fn pt_rating_material_group(tables: &ReferenceTables, steel_spec_name: &str) -> String {
    let upper = steel_spec_name.to_uppercase();
    if upper.is_empty() {
        return DEFAULT_PT_RATING_GROUP.to_string();
    }
    if let Some(mapping) = find_group(tables, &upper) {
        return mapping.pt_rating_group.clone();
    }
    if upper.contains("STAINLESS") || upper.contains("SS") {
        STAINLESS_PT_RATING_GROUP.to_string()
    } else {
        DEFAULT_PT_RATING_GROUP.to_string()
    }
}

pub fn asme_group_number(tables: &ReferenceTables, steel_spec_name: &str) -> String {
    let upper = steel_spec_name.to_uppercase();
    if upper.is_empty() {
        return DEFAULT_ASME_GROUP.to_string();
    }
    find_group(tables, &upper)
        .map(|m| m.asme_group.clone())
        .unwrap_or_else(|| DEFAULT_ASME_GROUP.to_string())
}

/// 매핑에 등장하는 P-T 그룹(처음 등장한 순서, 중복 제거).
pub fn available_pt_rating_groups(tables: &ReferenceTables) -> Vec<&str> {
    let mut groups: Vec<&str> = Vec::new();
    for mapping in &tables.material_groups {
        if !groups.contains(&mapping.pt_rating_group.as_str()) {
            groups.push(&mapping.pt_rating_group);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> &'static ReferenceTables {
        ReferenceTables::standard()
    }

    #[test]
    fn unknown_material_has_no_objection() {
        let r = check_material_suitability("Mystery Alloy", Some(900.0), Some(900.0));
        assert!(r.is_suitable);
        assert!(r.warnings.is_empty());
        assert!(r.limits.is_none());
    }

    #[test]
    fn specific_grade_matches_before_family() {
        let limits = find_material_limits(t(), "SABS 62 Heavy ERW").map(|l| l.max_pressure_bar);
        assert_eq!(limits, Some(35.0));
    }

    #[test]
    fn low_temperature_recommends_a333() {
        let r = check_material_suitability("ASTM A106 Gr. B", Some(-40.0), None);
        assert!(!r.is_suitable);
        assert_eq!(r.warnings, ["Temperature -40°C is below minimum -29°C for ASTM A106 Gr. B"]);
        assert_eq!(r.recommendation.as_deref(), Some(LOW_TEMPERATURE_ALTERNATIVES));
    }

    #[test]
    fn wear_steel_rejects_pressure() {
        let r = check_material_suitability("Hardox 450", Some(20.0), Some(10.0));
        assert!(!r.is_suitable);
        assert_eq!(r.warnings.len(), 2);
        assert_eq!(r.recommendation.as_deref(), Some(PRESSURE_SERVICE_ALTERNATIVES));

        let unpressurised = check_material_suitability("Hardox 450", Some(20.0), Some(0.0));
        assert!(unpressurised.is_suitable);
        assert_eq!(unpressurised.warnings.len(), 1);
    }

    #[test]
    fn wear_steel_warns_about_softening() {
        let r = check_material_suitability("AR400 plate", Some(250.0), None);
        assert!(!r.is_suitable);
        assert!(r.warnings.iter().any(|w| w.contains("soften")));
        assert!(is_wear_resistant_steel(t(), "AR400 plate"));
        assert!(!is_wear_resistant_steel(t(), "ASTM A106 Gr. B"));
    }

    #[test]
    fn suitable_list_filters_pressure() {
        let list = suitable_materials(t(), Some(20.0), Some(300.0));
        assert!(list.contains(&"ASTM A106"));
        assert!(!list.contains(&"ASTM A53"));
        assert!(!list.contains(&"Hardox"));
        assert_eq!(suitable_materials(t(), None, None).len(), t().material_limits.len());
    }

    #[test]
    fn flange_groups() {
        assert_eq!(pt_rating_material_group(t(), "ASTM A106 Gr. B"), DEFAULT_PT_RATING_GROUP);
        assert_eq!(asme_group_number(t(), "astm a335 p22"), "1.10");
        assert_eq!(asme_group_number(t(), "A790 S32750"), "3.3");
        assert_eq!(pt_rating_material_group(t(), "Generic stainless pipe"), STAINLESS_PT_RATING_GROUP);
        assert_eq!(pt_rating_material_group(t(), ""), DEFAULT_PT_RATING_GROUP);
        assert_eq!(asme_group_number(t(), "Mystery"), DEFAULT_ASME_GROUP);
    }

    #[test]
    fn pt_groups_are_unique_in_first_seen_order() {
        let groups = available_pt_rating_groups(t());
        assert_eq!(groups.first(), Some(&DEFAULT_PT_RATING_GROUP));
        let mut sorted = groups.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), groups.len());
    }
}
