//! 외부 환경(설치/대기/토양/운전) → 외면 손상 기구 → 코팅 시스템 추천.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::lining::Grade;
use super::{missing_fields, strings, Advice, ExposureSeverity, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum InstallationType {
    AboveGround,
    Buried,
    Submerged,
    Splash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum UvExposure {
    None,
    Moderate,
    High,
}

/// ISO 12944 부식성 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Iso12944Category {
    C1,
    C2,
    C3,
    C4,
    C5,
    CX,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MarineInfluence {
    None,
    Coastal,
    Offshore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum IndustrialPollution {
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SoilType {
    Sandy,
    Clay,
    Rocky,
    Marshy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Resistivity {
    VeryLow,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Moisture {
    Dry,
    Normal,
    Wet,
    Saturated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OperatingTemperature {
    Ambient,
    Elevated,
    High,
    Cyclic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ServiceLife {
    Short,
    Medium,
    Long,
    Extended,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Installation {
    #[serde(rename = "type")]
    pub kind: Option<InstallationType>,
    pub uv_exposure: Option<UvExposure>,
    pub mechanical_risk: Option<Grade>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Atmosphere {
    pub iso12944_category: Option<Iso12944Category>,
    pub marine_influence: Option<MarineInfluence>,
    pub industrial_pollution: Option<IndustrialPollution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Soil {
    pub soil_type: Option<SoilType>,
    pub resistivity: Option<Resistivity>,
    pub moisture: Option<Moisture>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operating {
    pub temperature: Option<OperatingTemperature>,
    pub cathodic_protection: Option<bool>,
    pub service_life: Option<ServiceLife>,
}

/// 외부 환경 조건. 모든 항목은 선택 사항이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalEnvironmentProfile {
    pub installation: Installation,
    pub atmosphere: Atmosphere,
    pub soil: Soil,
    pub operating: Operating,
}

impl ExternalEnvironmentProfile {
    fn is_buried(&self) -> bool {
        self.installation.kind == Some(InstallationType::Buried)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExternalMechanism {
    Atmospheric,
    #[serde(rename = "Soil/Buried")]
    SoilBuried,
    Marine,
    Mechanical,
    Mixed,
}

impl ExternalMechanism {
    pub fn label(self) -> &'static str {
        match self {
            ExternalMechanism::Atmospheric => "Atmospheric",
            ExternalMechanism::SoilBuried => "Soil/Buried",
            ExternalMechanism::Marine => "Marine",
            ExternalMechanism::Mechanical => "Mechanical",
            ExternalMechanism::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDamageMechanisms {
    pub atmospheric_corrosion: ExposureSeverity,
    pub soil_corrosion: ExposureSeverity,
    pub mechanical_damage: RiskLevel,
    pub dominant_mechanism: ExternalMechanism,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCoatingRecommendation {
    pub coating: String,
    pub coating_type: String,
    pub system: String,
    pub thickness_range: String,
    pub standards_basis: Vec<String>,
    pub rationale: String,
    pub engineering_notes: Vec<String>,
}

pub const UV_TOPCOAT_SUFFIX: &str = " + Aliphatic Polyurethane UV topcoat (50-80μm)";
pub const UV_TOPCOAT_NOTE: &str = "High UV exposure: Aliphatic polyurethane topcoat required for UV resistance and color/gloss retention";
const BLAST_NOTE: &str = "Surface prep: SA 2.5 (ISO 8501-1) minimum - very thorough blast cleaning";

fn coating(
    coating: &str,
    coating_type: &str,
    system: &str,
    thickness_range: &str,
    standards_basis: &[&str],
    rationale: &str,
    engineering_notes: &[&str],
) -> ExternalCoatingRecommendation {
    ExternalCoatingRecommendation {
        coating: coating.to_string(),
        coating_type: coating_type.to_string(),
        system: system.to_string(),
        thickness_range: thickness_range.to_string(),
        standards_basis: strings(standards_basis),
        rationale: rationale.to_string(),
        engineering_notes: strings(engineering_notes),
    }
}

pub fn atmospheric_severity(profile: &ExternalEnvironmentProfile) -> ExposureSeverity {
    let a = &profile.atmosphere;
    if a.iso12944_category == Some(Iso12944Category::CX)
        || a.marine_influence == Some(MarineInfluence::Offshore)
    {
        ExposureSeverity::Severe
    } else if a.iso12944_category == Some(Iso12944Category::C5)
        || a.marine_influence == Some(MarineInfluence::Coastal)
        || a.industrial_pollution == Some(IndustrialPollution::Heavy)
    {
        ExposureSeverity::High
    } else if matches!(
        a.iso12944_category,
        Some(Iso12944Category::C3 | Iso12944Category::C4)
    ) || a.industrial_pollution == Some(IndustrialPollution::Moderate)
    {
        ExposureSeverity::Moderate
    } else {
        ExposureSeverity::Low
    }
}

/// 매설이 아니면 항상 Low.
pub fn soil_severity(profile: &ExternalEnvironmentProfile) -> ExposureSeverity {
    if !profile.is_buried() {
        return ExposureSeverity::Low;
    }
    let s = &profile.soil;
    if s.resistivity == Some(Resistivity::VeryLow) && s.moisture == Some(Moisture::Saturated) {
        ExposureSeverity::Severe
    } else if matches!(s.resistivity, Some(Resistivity::VeryLow | Resistivity::Low))
        || matches!(s.moisture, Some(Moisture::Wet | Moisture::Saturated))
    {
        ExposureSeverity::High
    } else if s.resistivity == Some(Resistivity::Medium) || s.soil_type == Some(SoilType::Clay) {
        ExposureSeverity::Moderate
    } else {
        ExposureSeverity::Low
    }
}

pub fn mechanical_severity(profile: &ExternalEnvironmentProfile) -> RiskLevel {
    match profile.installation.mechanical_risk {
        Some(Grade::High) => RiskLevel::High,
        Some(Grade::Medium) => RiskLevel::Moderate,
        _ if profile.is_buried() => RiskLevel::Moderate,
        _ => RiskLevel::Low,
    }
}

/// 지배 기구는 해양 → 매설 토양 → 대기 → 기계적 순으로 본다.
pub fn classify_external_damage_mechanisms(
    profile: &ExternalEnvironmentProfile,
) -> ExternalDamageMechanisms {
    let atmospheric = atmospheric_severity(profile);
    let soil = soil_severity(profile);
    let mechanical = mechanical_severity(profile);

    let dominant_mechanism = if matches!(
        profile.atmosphere.marine_influence,
        Some(MarineInfluence::Offshore | MarineInfluence::Coastal)
    ) {
        ExternalMechanism::Marine
    } else if profile.is_buried() && soil.is_high_or_severe() {
        ExternalMechanism::SoilBuried
    } else if atmospheric.is_high_or_severe() {
        ExternalMechanism::Atmospheric
    } else if mechanical == RiskLevel::High {
        ExternalMechanism::Mechanical
    } else {
        ExternalMechanism::Mixed
    };

    ExternalDamageMechanisms {
        atmospheric_corrosion: atmospheric,
        soil_corrosion: soil,
        mechanical_damage: mechanical,
        dominant_mechanism,
    }
}

/// 코팅 규칙 하나. `uv_topcoat`이면 UV 노출이 높을 때 PU 상도 보완 단계를 거친다.
pub struct CoatingRule {
    pub name: &'static str,
    pub applies: fn(&ExternalEnvironmentProfile, &ExternalDamageMechanisms) -> bool,
    pub build: fn() -> ExternalCoatingRecommendation,
    pub uv_topcoat: bool,
}

/// 위에서부터 처음 일치한 규칙이 이긴다. 순서를 바꾸면 결과가 달라진다.
pub const COATING_RULES: [CoatingRule; 8] = [
    CoatingRule {
        name: "buried severe soil",
        applies: |p, d| p.is_buried() && d.soil_corrosion.is_high_or_severe(),
        build: || {
            coating(
                "Fusion Bonded Epoxy (FBE) or 3-Layer Polyethylene (3LPE)",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → FBE: 350-500μm or 3LPE: 1.8-3.0mm total",
                "350–3000 μm",
                &["ISO 8501-1", "ISO 21809-1", "ISO 21809-2", "NACE SP0169", "AS/NZS 4822"],
                "Severe soil corrosivity requires heavy-duty pipeline coating with CP compatibility",
                &[
                    BLAST_NOTE,
                    "FBE provides excellent adhesion and CP compatibility",
                    "3LPE recommended for rocky terrain or high mechanical stress",
                    "Ensure holiday detection testing per NACE SP0188",
                    "Field joint coating critical - use compatible shrink sleeves",
                ],
            )
        },
        uv_topcoat: false,
    },
    CoatingRule {
        name: "buried",
        applies: |p, _| p.is_buried(),
        build: || {
            coating(
                "Coal Tar Epoxy or Polyurethane Coating",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → Primer + 2 coats, 400-600μm DFT",
                "400–600 μm",
                &["ISO 8501-1", "ISO 21809-3", "AWWA C222", "NACE SP0169"],
                "Moderate soil conditions with cathodic protection compatibility",
                &[
                    BLAST_NOTE,
                    "Coal tar epoxy for proven long-term performance",
                    "Consider wrap coating for additional mechanical protection",
                ],
            )
        },
        uv_topcoat: false,
    },
    CoatingRule {
        name: "marine or severe atmosphere",
        applies: |_, d| {
            d.dominant_mechanism == ExternalMechanism::Marine
                || d.atmospheric_corrosion == ExposureSeverity::Severe
        },
        build: || {
            coating(
                "High-Build Epoxy System",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → Zinc-rich primer + Epoxy MIO intermediate + Polyurethane topcoat",
                "320–450 μm total DFT",
                &["ISO 8501-1", "ISO 12944-5", "ISO 12944-6", "NORSOK M-501", "SSPC-PA 2"],
                "Marine/offshore environment requires maximum corrosion protection",
                &[
                    BLAST_NOTE,
                    "Zinc-rich primer (60-80μm) for cathodic protection",
                    "Epoxy MIO intermediate (150-200μm) for barrier protection",
                    "Polyurethane topcoat (60-80μm) for UV and gloss retention",
                    "Consider thermal spray aluminium (TSA) for splash zones",
                ],
            )
        },
        uv_topcoat: true,
    },
    CoatingRule {
        name: "high atmosphere",
        applies: |_, d| d.atmospheric_corrosion == ExposureSeverity::High,
        build: || {
            coating(
                "Epoxy-Polyurethane System",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → Zinc phosphate primer + Epoxy intermediate + Polyurethane topcoat",
                "250–350 μm total DFT",
                &["ISO 8501-1", "ISO 12944-5", "AS/NZS 2312.1", "SSPC-PA 2"],
                "Industrial or coastal atmosphere with high corrosion risk",
                &[
                    BLAST_NOTE,
                    "Zinc phosphate primer (50-75μm) for steel adhesion",
                    "High-build epoxy intermediate (125-175μm)",
                    "Aliphatic polyurethane topcoat for UV stability",
                    "Recoat intervals per ISO 12944-9",
                ],
            )
        },
        uv_topcoat: true,
    },
    CoatingRule {
        name: "mechanical risk or splash zone",
        applies: |p, _| {
            p.installation.mechanical_risk == Some(Grade::High)
                || p.installation.kind == Some(InstallationType::Splash)
        },
        build: || {
            coating(
                "Rubber Coating or Polyurea",
                "Rubber Lined",
                "SA 2.5 blast (ISO 8501-1) → Chloroprene rubber 3-6mm or Polyurea 1.5-3mm",
                "1500–6000 μm",
                &["ISO 8501-1", "ASTM D4541", "ASTM D2000", "ISO 4649"],
                "High mechanical stress or splash zone requires impact-resistant coating",
                &[
                    BLAST_NOTE,
                    "Chloroprene (Neoprene) rubber for abrasion and weathering",
                    "Polyurea for rapid application and seamless coverage",
                    "Shore A hardness 50-70 for impact absorption",
                    "Consider armoring at support points",
                ],
            )
        },
        uv_topcoat: true,
    },
    CoatingRule {
        name: "moderate atmosphere",
        applies: |_, d| d.atmospheric_corrosion == ExposureSeverity::Moderate,
        build: || {
            coating(
                "Alkyd or Acrylic System",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → Alkyd primer + Alkyd/Acrylic topcoat",
                "150–250 μm total DFT",
                &["ISO 8501-1", "ISO 12944-5", "AS/NZS 2312.1"],
                "Moderate atmospheric exposure - cost-effective protection",
                &[
                    BLAST_NOTE,
                    "Suitable for C2-C3 environments",
                    "Alkyd primer (50-75μm) on prepared steel",
                    "Acrylic topcoat for better UV resistance than alkyd",
                    "Regular maintenance inspection recommended",
                ],
            )
        },
        uv_topcoat: true,
    },
    CoatingRule {
        name: "elevated temperature",
        applies: |p, _| {
            matches!(
                p.operating.temperature,
                Some(OperatingTemperature::Elevated | OperatingTemperature::High)
            )
        },
        build: || {
            coating(
                "Silicone or Epoxy Phenolic",
                "Paint",
                "SA 2.5 blast (ISO 8501-1) → Heat-resistant primer + Silicone topcoat",
                "75–150 μm total DFT",
                &["ISO 8501-1", "ISO 12944-5", "ASTM D6695"],
                "Elevated temperature service requires heat-resistant coating",
                &[
                    BLAST_NOTE,
                    "Silicone coatings for temperatures up to 540°C",
                    "Epoxy phenolic for temperatures up to 200°C with chemical resistance",
                    "Inorganic zinc silicate primer for high-temp applications",
                    "Cure requirements critical for performance",
                ],
            )
        },
        uv_topcoat: true,
    },
    CoatingRule {
        name: "sheltered low corrosion",
        applies: |p, d| {
            p.installation.uv_exposure == Some(UvExposure::None)
                && d.atmospheric_corrosion == ExposureSeverity::Low
        },
        build: || {
            coating(
                "Hot-Dip Galvanizing",
                "Galvanized",
                "HDG per ISO 1461 (no blasting required - pickling process)",
                "45–85 μm (depends on steel thickness)",
                &["ISO 1461", "ASTM A123", "AS/NZS 4680"],
                "Indoor or sheltered environment with low corrosion risk",
                &[
                    "Surface prep: Chemical cleaning & pickling (no blast cleaning required)",
                    "Minimum 45μm for steel <1.5mm, 85μm for steel >6mm",
                    "Self-healing zinc protection",
                    "Can be duplex coated (galvanized + paint) for extended life",
                    "Ensure proper drainage design to avoid wet storage stain",
                ],
            )
        },
        uv_topcoat: false,
    },
];

fn default_coating() -> ExternalCoatingRecommendation {
    coating(
        "Standard Epoxy System",
        "Paint",
        "SA 2.5 blast (ISO 8501-1) → Epoxy primer + Epoxy topcoat",
        "200–300 μm total DFT",
        &["ISO 8501-1", "ISO 12944-5", "SSPC-PA 2"],
        "General-purpose protection for mild environments",
        &[
            BLAST_NOTE,
            "Epoxy primer (75-100μm) for adhesion",
            "High-build epoxy topcoat (125-200μm)",
            "Good chemical and abrasion resistance",
            "Note: Epoxy may chalk under UV - consider PU topcoat for exposed areas",
        ],
    )
}

fn has_polyurethane(rec: &ExternalCoatingRecommendation) -> bool {
    let system = rec.system.to_lowercase();
    system.contains("polyurethane")
        || system.contains("pu ")
        || rec.coating.to_lowercase().contains("polyurethane")
}

/// UV 노출이 높고 PU 성분이 없으면 지방족 PU 상도를 덧붙인다.
fn with_uv_topcoat(
    profile: &ExternalEnvironmentProfile,
    mut rec: ExternalCoatingRecommendation,
) -> ExternalCoatingRecommendation {
    if profile.installation.uv_exposure == Some(UvExposure::High) && !has_polyurethane(&rec) {
        rec.system.push_str(UV_TOPCOAT_SUFFIX);
        rec.engineering_notes.push(UV_TOPCOAT_NOTE.to_string());
    }
    rec
}

pub fn recommend_external_coating(
    profile: &ExternalEnvironmentProfile,
    damage: &ExternalDamageMechanisms,
) -> ExternalCoatingRecommendation {
    match COATING_RULES
        .iter()
        .find(|rule| (rule.applies)(profile, damage))
    {
        Some(rule) if rule.uv_topcoat => with_uv_topcoat(profile, (rule.build)()),
        Some(rule) => (rule.build)(),
        None => with_uv_topcoat(profile, default_coating()),
    }
}

/// 추천에 필요한 항목 중 빠진 것.
pub fn missing_external_fields(profile: &ExternalEnvironmentProfile) -> Vec<String> {
    missing_fields(&[
        ("installation.type", profile.installation.kind.is_some()),
        (
            "atmosphere.iso12944Category",
            profile.atmosphere.iso12944_category.is_some(),
        ),
        ("operating.serviceLife", profile.operating.service_life.is_some()),
    ])
}

pub fn has_complete_external_profile(profile: &ExternalEnvironmentProfile) -> bool {
    missing_external_fields(profile).is_empty()
}

pub fn advise_external_coating(
    profile: &ExternalEnvironmentProfile,
) -> Advice<ExternalDamageMechanisms, ExternalCoatingRecommendation> {
    let missing = missing_external_fields(profile);
    if !missing.is_empty() {
        return Advice::NeedsMoreInput { missing };
    }
    let damage = classify_external_damage_mechanisms(profile);
    let recommendation = recommend_external_coating(profile, &damage);
    Advice::Recommended {
        damage,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn above_ground(category: Iso12944Category) -> ExternalEnvironmentProfile {
        ExternalEnvironmentProfile {
            installation: Installation {
                kind: Some(InstallationType::AboveGround),
                uv_exposure: Some(UvExposure::Moderate),
                mechanical_risk: Some(Grade::Low),
            },
            atmosphere: Atmosphere {
                iso12944_category: Some(category),
                ..Default::default()
            },
            operating: Operating {
                service_life: Some(ServiceLife::Long),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn recommend(profile: &ExternalEnvironmentProfile) -> ExternalCoatingRecommendation {
        let damage = classify_external_damage_mechanisms(profile);
        recommend_external_coating(profile, &damage)
    }

    #[test]
    fn soil_is_low_unless_buried() {
        let mut p = above_ground(Iso12944Category::C2);
        p.soil.resistivity = Some(Resistivity::VeryLow);
        p.soil.moisture = Some(Moisture::Saturated);
        assert_eq!(soil_severity(&p), ExposureSeverity::Low);
        p.installation.kind = Some(InstallationType::Buried);
        assert_eq!(soil_severity(&p), ExposureSeverity::Severe);
        p.soil.moisture = Some(Moisture::Dry);
        assert_eq!(soil_severity(&p), ExposureSeverity::High);
        p.soil.resistivity = None;
        p.soil.soil_type = Some(SoilType::Clay);
        assert_eq!(soil_severity(&p), ExposureSeverity::Moderate);
    }

    #[test]
    fn buried_counts_as_moderate_mechanical_risk() {
        let mut p = above_ground(Iso12944Category::C2);
        p.installation.mechanical_risk = None;
        assert_eq!(mechanical_severity(&p), RiskLevel::Low);
        p.installation.kind = Some(InstallationType::Buried);
        assert_eq!(mechanical_severity(&p), RiskLevel::Moderate);
    }

    #[test]
    fn marine_dominates_everything() {
        let mut p = above_ground(Iso12944Category::C2);
        p.atmosphere.marine_influence = Some(MarineInfluence::Coastal);
        p.installation.mechanical_risk = Some(Grade::High);
        let d = classify_external_damage_mechanisms(&p);
        assert_eq!(d.dominant_mechanism, ExternalMechanism::Marine);
        assert_eq!(d.atmospheric_corrosion, ExposureSeverity::High);
        assert_eq!(recommend(&p).coating, "High-Build Epoxy System");
    }

    #[test]
    fn buried_rules_pick_by_soil() {
        let mut p = above_ground(Iso12944Category::C2);
        p.installation.kind = Some(InstallationType::Buried);
        assert_eq!(recommend(&p).coating, "Coal Tar Epoxy or Polyurethane Coating");
        p.soil.moisture = Some(Moisture::Wet);
        let rec = recommend(&p);
        assert!(rec.coating.starts_with("Fusion Bonded Epoxy"));
    }

    #[test]
    fn uv_topcoat_added_only_without_pu() {
        let mut p = above_ground(Iso12944Category::C3);
        p.installation.uv_exposure = Some(UvExposure::High);
        let alkyd = recommend(&p);
        assert_eq!(alkyd.coating, "Alkyd or Acrylic System");
        assert!(alkyd.system.ends_with(UV_TOPCOAT_SUFFIX));
        assert_eq!(alkyd.engineering_notes.last().map(String::as_str), Some(UV_TOPCOAT_NOTE));

        let mut severe = above_ground(Iso12944Category::CX);
        severe.installation.uv_exposure = Some(UvExposure::High);
        let epoxy = recommend(&severe);
        assert!(!epoxy.system.contains(UV_TOPCOAT_SUFFIX));
    }

    #[test]
    fn sheltered_gets_galvanizing_and_default_is_epoxy() {
        let mut p = above_ground(Iso12944Category::C1);
        assert_eq!(recommend(&p).coating, "Standard Epoxy System");
        p.installation.uv_exposure = Some(UvExposure::None);
        assert_eq!(recommend(&p).coating, "Hot-Dip Galvanizing");
    }

    #[test]
    fn hot_service_gets_silicone() {
        let mut p = above_ground(Iso12944Category::C2);
        p.operating.temperature = Some(OperatingTemperature::High);
        assert_eq!(recommend(&p).coating, "Silicone or Epoxy Phenolic");
    }

    #[test]
    fn completeness_gate() {
        let mut p = above_ground(Iso12944Category::C2);
        assert!(has_complete_external_profile(&p));
        p.operating.service_life = None;
        let advice = advise_external_coating(&p);
        assert_eq!(
            advice,
            Advice::NeedsMoreInput {
                missing: vec!["operating.serviceLife".to_string()]
            }
        );
    }
}
