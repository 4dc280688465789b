//! 내면 라이닝과 외면 코팅 추천 규칙.
//!
//! 두 엔진 모두 손상 기구를 먼저 분류하고, 순서가 고정된 규칙 목록에서 처음 일치한 규칙의
//! 추천을 쓴다. 필수 항목이 빠진 프로파일에는 추천 대신 [`Advice::NeedsMoreInput`]을 돌려준다.

pub mod coating;
pub mod lining;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use coating::{
    advise_external_coating, classify_external_damage_mechanisms, has_complete_external_profile,
    recommend_external_coating, ExternalCoatingRecommendation, ExternalDamageMechanisms,
    ExternalEnvironmentProfile,
};
pub use lining::{
    advise_lining, classify_damage_mechanisms, has_complete_profile, recommend_lining,
    DamageMechanisms, LiningRecommendation, MaterialTransferProfile,
};

/// 추천 결과. 프로파일이 불완전하면 추측하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Advice<D, R> {
    NeedsMoreInput {
        missing: Vec<String>,
    },
    Recommended {
        damage: D,
        recommendation: R,
    },
}

impl<D, R> Advice<D, R> {
    pub fn recommendation(&self) -> Option<&R> {
        match self {
            Advice::Recommended { recommendation, .. } => Some(recommendation),
            Advice::NeedsMoreInput { .. } => None,
        }
    }
}

/// 마모/충격 정도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WearSeverity {
    Low,
    Moderate,
    Severe,
}

/// 3단계 정도(내부식, 기계적 손상).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// 4단계 정도(대기 부식, 토양 부식).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExposureSeverity {
    Low,
    Moderate,
    High,
    Severe,
}

impl ExposureSeverity {
    pub fn is_high_or_severe(self) -> bool {
        matches!(self, ExposureSeverity::High | ExposureSeverity::Severe)
    }
}

/// 운전 온도 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TemperatureCategory {
    Ambient,
    Elevated,
    High,
}

/// 운전 온도(°C) → 온도 구간.
///
/// 60 초과 120 이하는 Elevated, 120 초과는 High, 나머지(-20 미만 포함)는 Ambient.
pub fn derive_temperature_category(temp_c: Option<f64>) -> Option<TemperatureCategory> {
    let t = temp_c?;
    Some(if t > 120.0 {
        TemperatureCategory::High
    } else if t > 60.0 {
        TemperatureCategory::Elevated
    } else {
        TemperatureCategory::Ambient
    })
}

/// `(항목 이름, 채워졌는지)` 목록에서 빠진 이름만 모은다.
pub(crate) fn missing_fields(fields: &[(&str, bool)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
