//! 온도별 허용응력 테이블과 선형 보간.
//!
//! 값은 ASME Sec II-D 계열 표를 단순화한 근사치다. 최소 두께 산정을 돕기 위한 것이며
//! 설계 인증용 계산이 아니다. 실제 설계는 최신 코드로 검증해야 한다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub value_mpa: f64,
}

impl TempPoint {
    pub const fn new(temp_c: f64, value_mpa: f64) -> Self {
        Self { temp_c, value_mpa }
    }
}

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 정규화된 별칭(영숫자 대문자, ASTM/GRADE 제거)
    pub aliases: &'static [&'static str],
    pub allowable: &'static [TempPoint],
}

impl MaterialData {
    /// 표에서 가장 낮은(가장 보수적인) 허용응력.
    pub fn min_allowable_mpa(&self) -> f64 {
        self.allowable
            .iter()
            .map(|p| p.value_mpa)
            .fold(f64::INFINITY, f64::min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialValue {
    pub value_mpa: f64,
    pub source_temp_c: f64,
    /// true면 테이블 범위 밖이라 보간하지 않은 값이다.
    pub clamped: bool,
}

/// 재질을 찾지 못했을 때 쓰는 재질(탄소강 ASTM A106 Gr.B).
pub const DEFAULT_MATERIAL_CODE: &str = "A106B";

/// 최소 두께 계산에 쓰는 허용응력 조회 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLookup {
    pub value_mpa: f64,
    pub source_temp_c: f64,
    pub clamped: bool,
    /// 실제로 사용한 재질 코드
    pub material_code: String,
    /// 요청한 재질을 찾지 못해 기본 재질로 대체했는지
    pub substituted: bool,
    pub warnings: Vec<String>,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

fn default_material() -> &'static MaterialData {
    &MATERIALS[0]
}

/// 비교용 키. 영숫자만 남기고 대문자로 바꾼 뒤 "ASTM", "GRADE", "GR" 표기를 지운다.
pub fn material_key(text: &str) -> String {
    let upper: String = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    upper.replace("ASTM", "").replace("GRADE", "").replace("GR", "")
}

/// 코드나 이름이 일치하면 그 재질, 아니면 입력에 포함된 가장 긴 별칭의 재질.
///
/// "A312 TP316L"은 TP316과 TP316L 별칭을 모두 포함하지만 긴 쪽이 이긴다.
pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    let exact = MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code));
    if exact.is_some() {
        return exact;
    }

    let key = material_key(code);
    if key.is_empty() {
        return None;
    }
    MATERIALS
        .iter()
        .flat_map(|m| m.aliases.iter().map(move |alias| (m, alias.len(), *alias)))
        .filter(|(_, _, alias)| key.contains(alias))
        .max_by_key(|(_, len, _)| *len)
        .map(|(m, _, _)| m)
}

pub fn allowable_stress(code: &str, temp_c: f64) -> Option<MaterialValue> {
    let mat = find_material(code)?;
    interpolate(mat.allowable, temp_c)
}

/// 실패하지 않는 허용응력 조회.
///
/// 재질을 모르면 [`DEFAULT_MATERIAL_CODE`]로 대체한다. 표 최고 온도보다 높으면 표의 최솟값을,
/// 최저 온도보다 낮으면 첫 점의 값을 쓰며 두 경우 모두 경고를 남긴다.
pub fn lookup_allowable_stress(code: &str, temp_c: f64) -> StressLookup {
    let mut warnings = Vec::new();
    let (material, substituted) = match find_material(code) {
        Some(m) => (m, false),
        None => {
            let fallback = default_material();
            warnings.push(format!(
                "unknown material '{code}'; using {} allowable stress",
                fallback.name
            ));
            (fallback, true)
        }
    };

    let points = material.allowable;
    let value = match interpolate(points, temp_c) {
        Some(v) if !v.clamped => v,
        Some(v) if temp_c < v.source_temp_c => {
            warnings.push(format!(
                "temperature {temp_c} °C is below the {} stress table ({} °C); using {} MPa",
                material.code, v.source_temp_c, v.value_mpa
            ));
            v
        }
        _ => {
            let top_c = points.last().map_or(temp_c, |p| p.temp_c);
            let min = material.min_allowable_mpa();
            warnings.push(format!(
                "temperature {temp_c} °C is above the {} stress table ({top_c} °C); using minimum stress {min} MPa",
                material.code
            ));
            MaterialValue {
                value_mpa: min,
                source_temp_c: top_c,
                clamped: true,
            }
        }
    };

    StressLookup {
        value_mpa: value.value_mpa,
        source_temp_c: value.source_temp_c,
        clamped: value.clamped,
        material_code: material.code.to_string(),
        substituted,
        warnings,
    }
}

/// 표 범위 밖이면 가장자리 점을 `clamped = true`로 돌려준다. NaN이면 None.
fn interpolate(points: &[TempPoint], temp_c: f64) -> Option<MaterialValue> {
    let (first, last) = (points.first()?, points.last()?);
    let edge = |p: &TempPoint| MaterialValue {
        value_mpa: p.value_mpa,
        source_temp_c: p.temp_c,
        clamped: true,
    };
    if points.len() == 1 || temp_c < first.temp_c {
        return Some(edge(first));
    }
    if temp_c > last.temp_c {
        return Some(edge(last));
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if temp_c >= a.temp_c && temp_c <= b.temp_c {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            let val = a.value_mpa + frac * (b.value_mpa - a.value_mpa);
            return Some(MaterialValue {
                value_mpa: val,
                source_temp_c: temp_c,
                clamped: false,
            });
        }
    }
    None
}

const CARBON_STEEL: &[TempPoint] = &[
    tp(20.0, 138.0),
    tp(100.0, 138.0),
    tp(150.0, 132.0),
    tp(200.0, 124.0),
    tp(250.0, 117.0),
    tp(300.0, 110.0),
    tp(350.0, 100.0),
    tp(400.0, 93.0),
    tp(450.0, 83.0),
    tp(500.0, 69.0),
    tp(550.0, 55.0),
    tp(600.0, 45.0),
    tp(650.0, 36.0),
    tp(700.0, 30.0),
];

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "A106B",
        name: "ASTM A106 Gr.B",
        notes: "Carbon steel seamless",
        aliases: &["A106B", "A106", "SA106B"],
        allowable: CARBON_STEEL,
    },
    MaterialData {
        code: "A53B",
        name: "ASTM A53 Gr.B",
        notes: "Carbon steel ERW/SM",
        aliases: &["A53B", "A53", "SA53B"],
        allowable: CARBON_STEEL,
    },
    MaterialData {
        code: "A333G6",
        name: "ASTM A333 Gr.6",
        notes: "Low temperature carbon steel",
        aliases: &["A3336", "A333"],
        allowable: &[
            tp(-45.0, 138.0),
            tp(100.0, 138.0),
            tp(200.0, 124.0),
            tp(300.0, 110.0),
            tp(350.0, 100.0),
        ],
    },
    MaterialData {
        code: "A335P11",
        name: "ASTM A335 P11",
        notes: "Cr-Mo 1.25Cr-0.5Mo",
        aliases: &["A335P11", "P11"],
        allowable: &[
            tp(20.0, 120.0),
            tp(100.0, 118.0),
            tp(200.0, 113.0),
            tp(300.0, 105.0),
            tp(400.0, 96.0),
            tp(500.0, 86.0),
            tp(550.0, 78.0),
            tp(600.0, 70.0),
            tp(650.0, 63.0),
            tp(700.0, 55.0),
        ],
    },
    MaterialData {
        code: "A335P12",
        name: "ASTM A335 P12",
        notes: "Cr-Mo 1Cr-0.5Mo",
        aliases: &["A335P12", "P12"],
        allowable: &[
            tp(20.0, 110.0),
            tp(100.0, 107.0),
            tp(200.0, 101.0),
            tp(300.0, 93.0),
            tp(400.0, 85.0),
            tp(500.0, 75.0),
            tp(550.0, 68.0),
            tp(600.0, 60.0),
            tp(650.0, 54.0),
            tp(700.0, 48.0),
        ],
    },
    MaterialData {
        code: "A335P22",
        name: "ASTM A335 P22",
        notes: "Cr-Mo 2.25Cr-1Mo",
        aliases: &["A335P22", "P22"],
        allowable: &[
            tp(20.0, 130.0),
            tp(100.0, 128.0),
            tp(200.0, 124.0),
            tp(300.0, 120.0),
            tp(400.0, 114.0),
            tp(500.0, 96.0),
            tp(550.0, 80.0),
            tp(600.0, 62.0),
            tp(650.0, 45.0),
        ],
    },
    MaterialData {
        code: "A335P91",
        name: "ASTM A335 P91",
        notes: "9Cr-1Mo-V",
        aliases: &["A335P91", "P91"],
        allowable: &[
            tp(20.0, 165.0),
            tp(100.0, 165.0),
            tp(200.0, 163.0),
            tp(300.0, 160.0),
            tp(400.0, 150.0),
            tp(500.0, 135.0),
            tp(550.0, 125.0),
            tp(600.0, 110.0),
            tp(650.0, 96.0),
            tp(700.0, 84.0),
        ],
    },
    MaterialData {
        code: "TP304",
        name: "ASTM A312 TP304",
        notes: "Austenitic stainless",
        aliases: &["TP304", "A312304", "SS304"],
        allowable: &[
            tp(20.0, 138.0),
            tp(100.0, 138.0),
            tp(200.0, 129.0),
            tp(300.0, 120.0),
            tp(400.0, 108.0),
            tp(500.0, 95.0),
            tp(550.0, 88.0),
            tp(600.0, 80.0),
            tp(650.0, 72.0),
            tp(700.0, 64.0),
        ],
    },
    MaterialData {
        code: "TP304L",
        name: "ASTM A312 TP304L",
        notes: "Austenitic stainless L-grade",
        aliases: &["TP304L", "A312304L", "SS304L"],
        allowable: &[
            tp(20.0, 110.0),
            tp(100.0, 110.0),
            tp(200.0, 103.0),
            tp(300.0, 95.0),
            tp(400.0, 87.0),
            tp(500.0, 75.0),
            tp(550.0, 68.0),
            tp(600.0, 60.0),
            tp(650.0, 54.0),
            tp(700.0, 48.0),
        ],
    },
    MaterialData {
        code: "TP316",
        name: "ASTM A312 TP316",
        notes: "Austenitic stainless Mo",
        aliases: &["TP316", "A312316", "SS316"],
        allowable: &[
            tp(20.0, 138.0),
            tp(100.0, 138.0),
            tp(200.0, 131.0),
            tp(300.0, 122.0),
            tp(400.0, 110.0),
            tp(500.0, 98.0),
            tp(550.0, 90.0),
            tp(600.0, 82.0),
            tp(650.0, 74.0),
            tp(700.0, 66.0),
        ],
    },
    MaterialData {
        code: "TP316L",
        name: "ASTM A312 TP316L",
        notes: "Austenitic stainless Mo L-grade",
        aliases: &["TP316L", "A312316L", "SS316L"],
        allowable: &[
            tp(20.0, 110.0),
            tp(100.0, 110.0),
            tp(200.0, 104.0),
            tp(300.0, 96.0),
            tp(400.0, 88.0),
            tp(500.0, 76.0),
            tp(550.0, 69.0),
            tp(600.0, 61.0),
            tp(650.0, 54.0),
            tp(700.0, 48.0),
        ],
    },
];

const fn tp(temp_c: f64, value_mpa: f64) -> TempPoint {
    TempPoint::new(temp_c, value_mpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_first() {
        assert_eq!(default_material().code, DEFAULT_MATERIAL_CODE);
    }

    #[test]
    fn aliases_resolve_longest_match() {
        assert_eq!(find_material("ASTM_A106_Grade_B").map(|m| m.code), Some("A106B"));
        assert_eq!(find_material("ASTM A53 Gr. B").map(|m| m.code), Some("A53B"));
        assert_eq!(find_material("ASTM A312 TP316L").map(|m| m.code), Some("TP316L"));
        assert_eq!(find_material("A335-P22").map(|m| m.code), Some("A335P22"));
        assert!(find_material("Inconel 625").is_none());
    }

    #[test]
    fn interpolates_between_points() {
        let v = allowable_stress("A106B", 175.0).map(|v| v.value_mpa).unwrap_or_default();
        assert!((v - 128.0).abs() < 1e-9);
    }

    #[test]
    fn above_table_uses_minimum_stress() {
        let r = lookup_allowable_stress("A335P22", 800.0);
        assert!((r.value_mpa - 45.0).abs() < 1e-12);
        assert!(r.clamped);
        assert_eq!(r.warnings.len(), 1);
        assert!(r.warnings[0].contains("above"));
    }

    #[test]
    fn below_table_uses_first_point() {
        let r = lookup_allowable_stress("TP304", -50.0);
        assert!((r.value_mpa - 138.0).abs() < 1e-12);
        assert!(r.warnings[0].contains("below"));
    }

    #[test]
    fn unknown_material_falls_back_with_warning() {
        let r = lookup_allowable_stress("Unobtainium", 100.0);
        assert!(r.substituted);
        assert_eq!(r.material_code, "A106B");
        assert!((r.value_mpa - 138.0).abs() < 1e-12);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn nan_temperature_is_treated_as_out_of_range() {
        let r = lookup_allowable_stress("A106B", f64::NAN);
        assert!((r.value_mpa - 30.0).abs() < 1e-12);
        assert!(!r.warnings.is_empty());
    }
}
