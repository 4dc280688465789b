//! 플랜지 압력등급 표기 정규화.
//!
//! "PN 16", "1600/3"(SABS kPa/N 표기), "Class 300", "600" 처럼 자유 형식으로 들어오는
//! 표기를 8개의 정규 등급 중 하나로 매핑한다. 규칙은 위에서부터 순서대로 평가되며
//! 처음 일치한 규칙이 결과를 결정한다.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 정규 압력등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PressureClass {
    Pn10,
    Pn16,
    Pn25,
    Pn40,
    Pn64,
    Class150,
    Class300,
    Class600,
}

impl PressureClass {
    pub const ALL: [PressureClass; 8] = [
        PressureClass::Pn10,
        PressureClass::Pn16,
        PressureClass::Pn25,
        PressureClass::Pn40,
        PressureClass::Pn64,
        PressureClass::Class150,
        PressureClass::Class300,
        PressureClass::Class600,
    ];

    /// 표 조회와 BOQ 표기에 쓰는 정규 문자열.
    pub fn designation(self) -> &'static str {
        match self {
            PressureClass::Pn10 => "PN10",
            PressureClass::Pn16 => "PN16",
            PressureClass::Pn25 => "PN25",
            PressureClass::Pn40 => "PN40",
            PressureClass::Pn64 => "PN64",
            PressureClass::Class150 => "Class 150",
            PressureClass::Class300 => "Class 300",
            PressureClass::Class600 => "Class 600",
        }
    }

    pub fn is_asme(self) -> bool {
        matches!(
            self,
            PressureClass::Class150 | PressureClass::Class300 | PressureClass::Class600
        )
    }
}

impl fmt::Display for PressureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

/// 정규화 결과. 어떤 규칙에도 맞지 않으면 입력 문자열을 그대로 돌려준다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedClass {
    Canonical(PressureClass),
    Unrecognized(String),
}

impl NormalizedClass {
    pub fn canonical(&self) -> Option<PressureClass> {
        match self {
            NormalizedClass::Canonical(class) => Some(*class),
            NormalizedClass::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NormalizedClass::Canonical(class) => class.designation(),
            NormalizedClass::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for NormalizedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 정규화 결과와 함께, 원래 등급이 표에 있는 최고 등급을 넘었는지 여부를 담는다.
///
/// `PN99`는 규칙상 `PN64`로 정규화되지만 실제로는 표에 없는 등급이다.
/// 해석기(resolver)는 `beyond_top_band`가 true면 미지 등급처럼 취급해 PN16 폴백으로 내려간다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPressureClass {
    pub normalized: NormalizedClass,
    pub beyond_top_band: bool,
}

impl ClassifiedPressureClass {
    /// 표 조회에 그대로 써도 되는 정규 등급. 최고 등급 초과나 미인식이면 None.
    pub fn table_key(&self) -> Option<PressureClass> {
        if self.beyond_top_band {
            None
        } else {
            self.normalized.canonical()
        }
    }

    fn exact(class: PressureClass, beyond_top_band: bool) -> Self {
        Self {
            normalized: NormalizedClass::Canonical(class),
            beyond_top_band,
        }
    }
}

/// 빈 입력에 적용되는 기본 등급.
pub const DEFAULT_PRESSURE_CLASS: PressureClass = PressureClass::Pn16;

static SABS_KPA: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(\d+)/\d+$").ok());
static PN_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^PN\s*(\d+)").ok());
static CLASS_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^CLASS\s*(\d+)").ok());
static BARE_INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(\d+)$").ok());

/// 압력등급 표기를 정규 등급으로 변환한다.
pub fn normalize_pressure_class(designation: &str) -> NormalizedClass {
    classify_pressure_class(designation).normalized
}

/// `normalize_pressure_class`와 같은 규칙을 적용하되 최고 등급 초과 여부도 함께 반환한다.
pub fn classify_pressure_class(designation: &str) -> ClassifiedPressureClass {
    let upper = designation.trim().to_uppercase();
    if upper.is_empty() {
        return ClassifiedPressureClass::exact(DEFAULT_PRESSURE_CLASS, false);
    }

    if let Some(kpa) = leading_number(&SABS_KPA, &upper) {
        return from_kpa(kpa);
    }
    if let Some(pn) = leading_number(&PN_PREFIX, &upper) {
        return from_pn(pn);
    }
    if let Some(class) = leading_number(&CLASS_PREFIX, &upper) {
        return from_asme_class(class);
    }
    if let Some(value) = leading_number(&BARE_INTEGER, &upper) {
        // 150은 "150 kPa"와 "Class 150" 둘 다 될 수 있다. 1000 이상만 kPa로 본다.
        return if value >= 1000 {
            from_kpa(value)
        } else {
            from_asme_class(value)
        };
    }

    ClassifiedPressureClass {
        normalized: NormalizedClass::Unrecognized(designation.to_string()),
        beyond_top_band: false,
    }
}

fn leading_number(re: &Option<Regex>, text: &str) -> Option<u64> {
    let caps = re.as_ref()?.captures(text)?;
    let digits = caps.get(1)?.as_str();
    // 자릿수가 u64를 넘으면 최고 등급 초과로 본다.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

fn from_kpa(kpa: u64) -> ClassifiedPressureClass {
    let class = match kpa {
        0..=1000 => PressureClass::Pn10,
        1001..=1600 => PressureClass::Pn16,
        1601..=2500 => PressureClass::Pn25,
        2501..=4000 => PressureClass::Pn40,
        _ => PressureClass::Pn64,
    };
    ClassifiedPressureClass::exact(class, kpa > 6400)
}

fn from_pn(pn: u64) -> ClassifiedPressureClass {
    let class = match pn {
        0..=10 => PressureClass::Pn10,
        11..=16 => PressureClass::Pn16,
        17..=25 => PressureClass::Pn25,
        26..=40 => PressureClass::Pn40,
        _ => PressureClass::Pn64,
    };
    ClassifiedPressureClass::exact(class, pn > 64)
}

fn from_asme_class(rating: u64) -> ClassifiedPressureClass {
    let class = match rating {
        0..=150 => PressureClass::Class150,
        151..=300 => PressureClass::Class300,
        _ => PressureClass::Class600,
    };
    ClassifiedPressureClass::exact(class, rating > 600)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(s: &str) -> Option<PressureClass> {
        normalize_pressure_class(s).canonical()
    }

    #[test]
    fn empty_defaults_to_pn16() {
        assert_eq!(canon(""), Some(PressureClass::Pn16));
        assert_eq!(canon("   "), Some(PressureClass::Pn16));
    }

    #[test]
    fn sabs_composite_uses_kpa_thresholds() {
        assert_eq!(canon("1000/3"), Some(PressureClass::Pn10));
        assert_eq!(canon("1001/3"), Some(PressureClass::Pn16));
        assert_eq!(canon("1600/3"), Some(PressureClass::Pn16));
        assert_eq!(canon("2500/3"), Some(PressureClass::Pn25));
        assert_eq!(canon("4000/3"), Some(PressureClass::Pn40));
        assert_eq!(canon("6400/3"), Some(PressureClass::Pn64));
    }

    #[test]
    fn pn_prefix_is_case_and_space_insensitive() {
        assert_eq!(canon("pn 16"), Some(PressureClass::Pn16));
        assert_eq!(canon("PN6"), Some(PressureClass::Pn10));
        assert_eq!(canon("PN63"), Some(PressureClass::Pn64));
        assert_eq!(canon(" PN40 "), Some(PressureClass::Pn40));
    }

    #[test]
    fn class_prefix_maps_upward() {
        assert_eq!(canon("Class 150"), Some(PressureClass::Class150));
        assert_eq!(canon("CLASS300"), Some(PressureClass::Class300));
        assert_eq!(canon("class 400"), Some(PressureClass::Class600));
    }

    #[test]
    fn bare_integer_magnitude_heuristic() {
        assert_eq!(canon("150"), Some(PressureClass::Class150));
        assert_eq!(canon("999"), Some(PressureClass::Class600));
        assert_eq!(canon("1000"), Some(PressureClass::Pn10));
        assert_eq!(canon("1600"), Some(PressureClass::Pn16));
    }

    #[test]
    fn unmatched_input_is_returned_unchanged() {
        let n = normalize_pressure_class("Table D");
        assert_eq!(n, NormalizedClass::Unrecognized("Table D".to_string()));
        assert_eq!(n.as_str(), "Table D");
    }

    #[test]
    fn beyond_top_band_is_flagged() {
        let c = classify_pressure_class("PN99");
        assert_eq!(c.normalized.canonical(), Some(PressureClass::Pn64));
        assert!(c.beyond_top_band);
        assert_eq!(c.table_key(), None);

        assert!(classify_pressure_class("Class 900").beyond_top_band);
        assert!(classify_pressure_class("10000/3").beyond_top_band);
        assert!(!classify_pressure_class("PN64").beyond_top_band);
        assert!(!classify_pressure_class("6400/3").beyond_top_band);
    }

    #[test]
    fn huge_numbers_do_not_panic() {
        let c = classify_pressure_class("PN99999999999999999999999");
        assert_eq!(c.normalized.canonical(), Some(PressureClass::Pn64));
        assert!(c.beyond_top_band);
    }
}
