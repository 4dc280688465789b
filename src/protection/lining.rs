//! 슬러리 이송 조건 → 내면 손상 기구 → 라이닝 추천.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{missing_fields, strings, Advice, RiskLevel, TemperatureCategory, WearSeverity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ParticleSize {
    Fine,
    Medium,
    Coarse,
    VeryCoarse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ParticleShape {
    Rounded,
    SubAngular,
    Angular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SpecificGravity {
    Light,
    Medium,
    Heavy,
}

/// 경도, 유속, 운전 압력 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Grade {
    Low,
    Medium,
    High,
}

/// 실리카, 염화물 함량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Content {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PhRange {
    Acidic,
    Neutral,
    Alkaline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SolidsPercent {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ImpactAngle {
    Low,
    Mixed,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum EquipmentType {
    Pipe,
    Tank,
    Chute,
    Hopper,
    Launder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialProperties {
    pub particle_size: Option<ParticleSize>,
    pub particle_shape: Option<ParticleShape>,
    pub specific_gravity: Option<SpecificGravity>,
    pub hardness_class: Option<Grade>,
    pub silica_content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChemicalProperties {
    pub ph_range: Option<PhRange>,
    pub chlorides: Option<Content>,
    pub temperature_range: Option<TemperatureCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowProperties {
    pub solids_percent: Option<SolidsPercent>,
    pub velocity: Option<Grade>,
    pub flow_regime: Option<FlowRegime>,
    pub impact_angle: Option<ImpactAngle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentProperties {
    pub equipment_type: Option<EquipmentType>,
    pub impact_zones: bool,
    pub operating_pressure: Option<Grade>,
}

/// 내면 이송 조건. 모든 항목은 선택 사항이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialTransferProfile {
    pub material: MaterialProperties,
    pub chemistry: ChemicalProperties,
    pub flow: FlowProperties,
    pub equipment: EquipmentProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantMechanism {
    #[serde(rename = "Impact Abrasion")]
    ImpactAbrasion,
    #[serde(rename = "Sliding Abrasion")]
    SlidingAbrasion,
    Corrosion,
    Mixed,
}

impl DominantMechanism {
    pub fn label(self) -> &'static str {
        match self {
            DominantMechanism::ImpactAbrasion => "Impact Abrasion",
            DominantMechanism::SlidingAbrasion => "Sliding Abrasion",
            DominantMechanism::Corrosion => "Corrosion",
            DominantMechanism::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageMechanisms {
    pub abrasion: WearSeverity,
    pub impact: WearSeverity,
    pub corrosion: RiskLevel,
    pub dominant_mechanism: DominantMechanism,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiningRecommendation {
    pub lining: String,
    pub lining_type: String,
    pub thickness_range: String,
    pub standards_basis: Vec<String>,
    pub rationale: String,
    pub engineering_notes: Vec<String>,
}

fn recommendation(
    lining: &str,
    lining_type: &str,
    thickness_range: &str,
    standards_basis: &[&str],
    rationale: &str,
    engineering_notes: &[&str],
) -> LiningRecommendation {
    LiningRecommendation {
        lining: lining.to_string(),
        lining_type: lining_type.to_string(),
        thickness_range: thickness_range.to_string(),
        standards_basis: strings(standards_basis),
        rationale: rationale.to_string(),
        engineering_notes: strings(engineering_notes),
    }
}

pub fn abrasion_severity(profile: &MaterialTransferProfile) -> WearSeverity {
    let m = &profile.material;
    let velocity = profile.flow.velocity;
    if m.hardness_class == Some(Grade::High)
        && (velocity == Some(Grade::High) || m.silica_content == Some(Content::High))
    {
        WearSeverity::Severe
    } else if m.hardness_class == Some(Grade::Medium)
        || velocity == Some(Grade::Medium)
        || m.particle_shape == Some(ParticleShape::Angular)
    {
        WearSeverity::Moderate
    } else {
        WearSeverity::Low
    }
}

pub fn impact_severity(profile: &MaterialTransferProfile) -> WearSeverity {
    let angle = profile.flow.impact_angle;
    if angle == Some(ImpactAngle::High) && profile.equipment.impact_zones {
        WearSeverity::Severe
    } else if angle == Some(ImpactAngle::Mixed)
        || matches!(
            profile.material.particle_size,
            Some(ParticleSize::Coarse | ParticleSize::VeryCoarse)
        )
    {
        WearSeverity::Moderate
    } else {
        WearSeverity::Low
    }
}

pub fn corrosion_severity(profile: &MaterialTransferProfile) -> RiskLevel {
    let c = &profile.chemistry;
    if c.ph_range == Some(PhRange::Acidic) || c.chlorides == Some(Content::High) {
        RiskLevel::High
    } else if c.chlorides == Some(Content::Moderate)
        || c.temperature_range == Some(TemperatureCategory::High)
    {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// 세 손상 정도와 지배 기구. 충격 → 미끄럼 마모 → 부식 순으로 본다.
pub fn classify_damage_mechanisms(profile: &MaterialTransferProfile) -> DamageMechanisms {
    let abrasion = abrasion_severity(profile);
    let impact = impact_severity(profile);
    let corrosion = corrosion_severity(profile);

    let dominant_mechanism = if impact == WearSeverity::Severe {
        DominantMechanism::ImpactAbrasion
    } else if abrasion == WearSeverity::Severe {
        DominantMechanism::SlidingAbrasion
    } else if corrosion == RiskLevel::High {
        DominantMechanism::Corrosion
    } else {
        DominantMechanism::Mixed
    };

    DamageMechanisms {
        abrasion,
        impact,
        corrosion,
        dominant_mechanism,
    }
}

/// 라이닝 규칙 하나.
pub struct LiningRule {
    pub name: &'static str,
    pub applies: fn(&MaterialTransferProfile, &DamageMechanisms) -> bool,
    pub build: fn(&MaterialTransferProfile) -> LiningRecommendation,
}

/// 위에서부터 처음 일치한 규칙이 이긴다. 순서를 바꾸면 결과가 달라진다.
pub const LINING_RULES: [LiningRule; 5] = [
    LiningRule {
        name: "severe impact",
        applies: |_, d| d.impact == WearSeverity::Severe,
        build: |_| {
            recommendation(
                "Rubber-Ceramic Composite",
                "Ceramic Lined",
                "15–30 mm",
                &["ASTM C1327", "SANS 1198:2013", "ISO 4649"],
                "High impact combined with abrasion requires composite protection",
                &[
                    "SANS 1198 Type 1 rubber backing absorbs impact energy",
                    "Ceramic face provides wear resistance",
                    "Consider 92% or 95% alumina tiles for severe applications",
                    "Rubber backing: 40-50 IRHD for maximum impact absorption",
                ],
            )
        },
    },
    LiningRule {
        name: "severe sliding abrasion",
        applies: |_, d| d.abrasion == WearSeverity::Severe,
        build: |_| {
            recommendation(
                "Alumina Ceramic Tile",
                "Ceramic Lined",
                "10–20 mm",
                &["ASTM C1327", "ISO 14705", "ASTM C773"],
                "Severe sliding abrasion with moderate impact",
                &[
                    "96% or 99% alumina recommended for high silica content",
                    "Hexagonal tiles provide better coverage in curved sections",
                    "Ensure proper adhesive selection for operating temperature",
                ],
            )
        },
    },
    LiningRule {
        name: "high corrosion",
        applies: |_, d| d.corrosion == RiskLevel::High,
        build: |p| {
            let lining = if p.chemistry.temperature_range == Some(TemperatureCategory::High) {
                "Type 2 Butyl (IIR)"
            } else if p.chemistry.ph_range == Some(PhRange::Acidic) {
                "Type 5 CSM (Hypalon)"
            } else {
                "Type 1 Natural Rubber"
            };
            recommendation(
                lining,
                "Rubber Lined",
                "6–15 mm",
                &["SANS 1198:2013", "SANS 1201:2005", "ASTM D412"],
                "Acidic or high chloride environment requires chemical-resistant lining per SANS 1198",
                &[
                    "SANS 1198 Type 2 (Butyl) for chemical resistance up to 120°C",
                    "SANS 1198 Type 5 (CSM/Hypalon) for acid and ozone resistance",
                    "Grade A (18+ MPa) recommended for high-stress applications",
                    "50-60 IRHD hardness class for abrasion resistance",
                ],
            )
        },
    },
    LiningRule {
        name: "moderate fine-particle abrasion",
        applies: |p, d| {
            d.abrasion == WearSeverity::Moderate
                && p.material.particle_size == Some(ParticleSize::Fine)
        },
        build: |_| {
            recommendation(
                "Cast Polyurethane",
                "PU Lined",
                "5–10 mm",
                &["ASTM D412", "ASTM D2240", "ISO 4649"],
                "Fine particle abrasion with moderate severity",
                &[
                    "Excellent for fine particle slurries",
                    "Low friction coefficient reduces buildup",
                    "Shore hardness 70-85A typical for slurry applications",
                ],
            )
        },
    },
    LiningRule {
        name: "neutral low wear",
        applies: |p, d| {
            p.chemistry.ph_range == Some(PhRange::Neutral) && d.abrasion == WearSeverity::Low
        },
        build: |_| {
            recommendation(
                "HDPE Lining",
                "HDPE Lined",
                "3–8 mm",
                &["ASTM D3350", "ISO 4427"],
                "Low wear, neutral chemistry - cost-effective protection",
                &[
                    "PE100 grade for improved pressure resistance",
                    "Consider PE100-RC for stress crack resistance",
                    "Suitable for non-abrasive slurries",
                ],
            )
        },
    },
];

fn default_lining() -> LiningRecommendation {
    recommendation(
        "Type 1 Natural Rubber (NR/SBR)",
        "Rubber Lined",
        "6–12 mm",
        &["SANS 1198:2013", "SANS 1201:2005", "ASTM D412"],
        "General-purpose protection per SANS 1198 Type 1 specification",
        &[
            "SANS 1198 Type 1 (NR/SBR) for general industrial applications",
            "Grade B (14+ MPa) suitable for standard applications",
            "40-50 IRHD hardness class for impact absorption",
            "Autoclave vulcanization preferred per SANS 1201",
        ],
    )
}

pub fn recommend_lining(
    profile: &MaterialTransferProfile,
    damage: &DamageMechanisms,
) -> LiningRecommendation {
    LINING_RULES
        .iter()
        .find(|rule| (rule.applies)(profile, damage))
        .map(|rule| (rule.build)(profile))
        .unwrap_or_else(default_lining)
}

/// 추천에 필요한 항목 중 빠진 것(`material.particleSize` 형식).
pub fn missing_profile_fields(profile: &MaterialTransferProfile) -> Vec<String> {
    let MaterialTransferProfile {
        material,
        chemistry,
        flow,
        equipment,
    } = profile;
    missing_fields(&[
        ("material.particleSize", material.particle_size.is_some()),
        ("material.particleShape", material.particle_shape.is_some()),
        ("material.hardnessClass", material.hardness_class.is_some()),
        ("chemistry.phRange", chemistry.ph_range.is_some()),
        ("flow.velocity", flow.velocity.is_some()),
        ("flow.impactAngle", flow.impact_angle.is_some()),
        ("equipment.equipmentType", equipment.equipment_type.is_some()),
    ])
}

pub fn has_complete_profile(profile: &MaterialTransferProfile) -> bool {
    missing_profile_fields(profile).is_empty()
}

/// 완전한 프로파일이면 분류 후 추천, 아니면 빠진 항목 목록.
pub fn advise_lining(
    profile: &MaterialTransferProfile,
) -> Advice<DamageMechanisms, LiningRecommendation> {
    let missing = missing_profile_fields(profile);
    if !missing.is_empty() {
        return Advice::NeedsMoreInput { missing };
    }
    let damage = classify_damage_mechanisms(profile);
    let recommendation = recommend_lining(profile, &damage);
    Advice::Recommended {
        damage,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> MaterialTransferProfile {
        MaterialTransferProfile {
            material: MaterialProperties {
                particle_size: Some(ParticleSize::Medium),
                particle_shape: Some(ParticleShape::Rounded),
                hardness_class: Some(Grade::Low),
                ..Default::default()
            },
            chemistry: ChemicalProperties {
                ph_range: Some(PhRange::Alkaline),
                ..Default::default()
            },
            flow: FlowProperties {
                velocity: Some(Grade::Low),
                impact_angle: Some(ImpactAngle::Low),
                ..Default::default()
            },
            equipment: EquipmentProperties {
                equipment_type: Some(EquipmentType::Pipe),
                ..Default::default()
            },
        }
    }

    #[test]
    fn abrasion_needs_hardness_and_speed_or_silica() {
        let mut p = complete();
        p.material.hardness_class = Some(Grade::High);
        assert_eq!(abrasion_severity(&p), WearSeverity::Low);
        p.material.silica_content = Some(Content::High);
        assert_eq!(abrasion_severity(&p), WearSeverity::Severe);
        p.material.hardness_class = Some(Grade::Low);
        p.material.particle_shape = Some(ParticleShape::Angular);
        assert_eq!(abrasion_severity(&p), WearSeverity::Moderate);
    }

    #[test]
    fn impact_needs_zones_for_severe() {
        let mut p = complete();
        p.flow.impact_angle = Some(ImpactAngle::High);
        assert_eq!(impact_severity(&p), WearSeverity::Low);
        p.equipment.impact_zones = true;
        assert_eq!(impact_severity(&p), WearSeverity::Severe);
        p.equipment.impact_zones = false;
        p.material.particle_size = Some(ParticleSize::VeryCoarse);
        assert_eq!(impact_severity(&p), WearSeverity::Moderate);
    }

    #[test]
    fn corrosion_levels() {
        let mut p = complete();
        assert_eq!(corrosion_severity(&p), RiskLevel::Low);
        p.chemistry.temperature_range = Some(TemperatureCategory::High);
        assert_eq!(corrosion_severity(&p), RiskLevel::Moderate);
        p.chemistry.chlorides = Some(Content::High);
        assert_eq!(corrosion_severity(&p), RiskLevel::High);
    }

    #[test]
    fn hot_corrosive_service_gets_butyl() {
        let mut p = complete();
        p.chemistry.ph_range = Some(PhRange::Acidic);
        p.chemistry.temperature_range = Some(TemperatureCategory::High);
        let damage = classify_damage_mechanisms(&p);
        assert_eq!(damage.dominant_mechanism, DominantMechanism::Corrosion);
        assert_eq!(recommend_lining(&p, &damage).lining, "Type 2 Butyl (IIR)");

        p.chemistry.temperature_range = None;
        assert_eq!(recommend_lining(&p, &damage).lining, "Type 5 CSM (Hypalon)");
    }

    #[test]
    fn fine_particles_get_polyurethane() {
        let mut p = complete();
        p.material.particle_size = Some(ParticleSize::Fine);
        p.flow.velocity = Some(Grade::Medium);
        let damage = classify_damage_mechanisms(&p);
        assert_eq!(recommend_lining(&p, &damage).lining, "Cast Polyurethane");
    }

    #[test]
    fn neutral_low_wear_gets_hdpe_else_rubber() {
        let mut p = complete();
        let damage = classify_damage_mechanisms(&p);
        assert_eq!(recommend_lining(&p, &damage).lining, "Type 1 Natural Rubber (NR/SBR)");
        p.chemistry.ph_range = Some(PhRange::Neutral);
        assert_eq!(recommend_lining(&p, &damage).lining, "HDPE Lining");
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = LINING_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "severe impact",
                "severe sliding abrasion",
                "high corrosion",
                "moderate fine-particle abrasion",
                "neutral low wear"
            ]
        );
    }

    #[test]
    fn incomplete_profile_lists_missing_fields() {
        let advice = advise_lining(&MaterialTransferProfile::default());
        match advice {
            Advice::NeedsMoreInput { missing } => assert_eq!(missing.len(), 7),
            Advice::Recommended { .. } => panic!("empty profile must not be recommended"),
        }
        assert!(has_complete_profile(&complete()));
    }
}
