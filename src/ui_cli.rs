//! 명령행 정의와 텍스트 출력.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::piping::{
    CalculationResult, ConsolidatedBoq, ScheduleRecommendation, SuitabilityResult,
};
use crate::protection::coating::{
    Installation, InstallationType, IndustrialPollution, Iso12944Category, MarineInfluence,
    Moisture, Operating, OperatingTemperature, Resistivity, ServiceLife, Soil, SoilType,
    UvExposure,
};
use crate::protection::lining::{
    Content, EquipmentType, FlowRegime, Grade, ImpactAngle, ParticleShape, ParticleSize, PhRange,
    SolidsPercent, SpecificGravity,
};
use crate::protection::{
    derive_temperature_category, Advice, ExternalCoatingRecommendation, ExternalDamageMechanisms,
    ExternalEnvironmentProfile, LiningRecommendation, MaterialTransferProfile, TemperatureCategory,
};

#[derive(Parser, Debug)]
#[command(name = "piping_boq_toolbox_cli")]
#[command(about = "직관 배관 BOQ, 최소 두께, 재질 적합성, 라이닝/코팅 추천", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 압력등급 표기 정규화
    Normalize {
        designation: String,
    },
    /// 플랜지 중량, 볼트 홀, BNW 세트, 가스켓 조회
    Flange {
        #[arg(long)]
        nb: u32,
        #[arg(long = "class")]
        pressure_class: Option<String>,
        #[arg(long)]
        gasket: Option<String>,
    },
    /// 직관 한 구간의 중량과 플랜지 수량
    Pipe(PipeArgs),
    /// JSON 파일의 직관 구간들을 BOQ 항목으로 통합
    Boq {
        /// `BoqEntry` 배열 JSON 파일
        input: PathBuf,
        #[arg(long)]
        gasket: Option<String>,
        #[arg(long)]
        flange_standard: Option<String>,
        #[arg(long = "class")]
        pressure_class: Option<String>,
    },
    /// 최소 두께와 추천 스케줄
    Wall(WallArgs),
    /// 재질 적합성 검토와 플랜지 재질 그룹
    Material {
        steel_spec_name: String,
        #[arg(long = "temp")]
        temperature_c: Option<f64>,
        #[arg(long = "pressure")]
        pressure_bar: Option<f64>,
    },
    /// 조건을 만족하는 재질 목록
    Materials {
        #[arg(long = "temp")]
        temperature_c: Option<f64>,
        #[arg(long = "pressure")]
        pressure_bar: Option<f64>,
    },
    /// 내면 라이닝 추천
    Lining(LiningArgs),
    /// 외면 코팅 추천
    Coating(CoatingArgs),
}

#[derive(Args, Debug)]
pub struct PipeArgs {
    #[arg(long)]
    pub nb: u32,
    /// 관 두께(mm)
    #[arg(long)]
    pub wt: f64,
    /// 관 1본 길이(m)
    #[arg(long)]
    pub length: f64,
    #[arg(long)]
    pub quantity: f64,
    /// number_of_pipes | total_length
    #[arg(long, default_value = "number_of_pipes")]
    pub quantity_type: String,
    /// PE, FOE, FBE, FOE_LF, FOE_RF, 2X_RF
    #[arg(long, default_value = "PE")]
    pub ends: String,
    #[arg(long = "class")]
    pub pressure_class: Option<String>,
}

#[derive(Args, Debug)]
pub struct WallArgs {
    #[arg(long)]
    pub nb: u32,
    #[arg(long)]
    pub pressure: f64,
    #[arg(long, default_value = "bar")]
    pub pressure_unit: String,
    #[arg(long)]
    pub temp: f64,
    #[arg(long, default_value = "C")]
    pub temp_unit: String,
    /// 허용응력 재질 코드(예: A106B, TP316L)
    #[arg(long)]
    pub material: Option<String>,
    /// 스케줄 표 선택용 강재 규격 이름(예: "SABS 719 ERW")
    #[arg(long, default_value = "ASTM A106")]
    pub spec: String,
    /// 이 두께를 검토한다(mm)
    #[arg(long)]
    pub thickness: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct LiningArgs {
    /// 프로파일 JSON 파일. 아래 항목은 파일 값을 덮어쓴다.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub particle_size: Option<ParticleSize>,
    #[arg(long, value_enum)]
    pub particle_shape: Option<ParticleShape>,
    #[arg(long, value_enum)]
    pub specific_gravity: Option<SpecificGravity>,
    #[arg(long, value_enum)]
    pub hardness: Option<Grade>,
    #[arg(long, value_enum)]
    pub silica: Option<Content>,
    #[arg(long, value_enum)]
    pub ph: Option<PhRange>,
    #[arg(long, value_enum)]
    pub chlorides: Option<Content>,
    /// 운전 온도(°C). 온도 구간으로 환산한다.
    #[arg(long)]
    pub temp: Option<f64>,
    #[arg(long, value_enum)]
    pub solids: Option<SolidsPercent>,
    #[arg(long, value_enum)]
    pub velocity: Option<Grade>,
    #[arg(long, value_enum)]
    pub flow_regime: Option<FlowRegime>,
    #[arg(long, value_enum)]
    pub impact_angle: Option<ImpactAngle>,
    #[arg(long, value_enum)]
    pub equipment: Option<EquipmentType>,
    #[arg(long)]
    pub impact_zones: bool,
    #[arg(long, value_enum)]
    pub operating_pressure: Option<Grade>,
}

impl LiningArgs {
    /// 명령행 값을 프로파일에 덮어쓴다.
    pub fn apply(&self, mut p: MaterialTransferProfile) -> MaterialTransferProfile {
        set(&mut p.material.particle_size, self.particle_size);
        set(&mut p.material.particle_shape, self.particle_shape);
        set(&mut p.material.specific_gravity, self.specific_gravity);
        set(&mut p.material.hardness_class, self.hardness);
        set(&mut p.material.silica_content, self.silica);
        set(&mut p.chemistry.ph_range, self.ph);
        set(&mut p.chemistry.chlorides, self.chlorides);
        set::<TemperatureCategory>(
            &mut p.chemistry.temperature_range,
            derive_temperature_category(self.temp),
        );
        set(&mut p.flow.solids_percent, self.solids);
        set(&mut p.flow.velocity, self.velocity);
        set(&mut p.flow.flow_regime, self.flow_regime);
        set(&mut p.flow.impact_angle, self.impact_angle);
        set(&mut p.equipment.equipment_type, self.equipment);
        set(&mut p.equipment.operating_pressure, self.operating_pressure);
        p.equipment.impact_zones |= self.impact_zones;
        p
    }
}

#[derive(Args, Debug, Default)]
pub struct CoatingArgs {
    /// 프로파일 JSON 파일. 아래 항목은 파일 값을 덮어쓴다.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub installation: Option<InstallationType>,
    #[arg(long, value_enum)]
    pub uv: Option<UvExposure>,
    #[arg(long, value_enum)]
    pub mechanical_risk: Option<Grade>,
    #[arg(long, value_enum)]
    pub iso12944: Option<Iso12944Category>,
    #[arg(long, value_enum)]
    pub marine: Option<MarineInfluence>,
    #[arg(long, value_enum)]
    pub pollution: Option<IndustrialPollution>,
    #[arg(long, value_enum)]
    pub soil_type: Option<SoilType>,
    #[arg(long, value_enum)]
    pub resistivity: Option<Resistivity>,
    #[arg(long, value_enum)]
    pub moisture: Option<Moisture>,
    #[arg(long, value_enum)]
    pub operating_temp: Option<OperatingTemperature>,
    #[arg(long)]
    pub cathodic_protection: bool,
    #[arg(long, value_enum)]
    pub service_life: Option<ServiceLife>,
}

impl CoatingArgs {
    pub fn apply(&self, mut p: ExternalEnvironmentProfile) -> ExternalEnvironmentProfile {
        let Installation {
            kind,
            uv_exposure,
            mechanical_risk,
        } = &mut p.installation;
        set(kind, self.installation);
        set(uv_exposure, self.uv);
        set(mechanical_risk, self.mechanical_risk);
        set(&mut p.atmosphere.iso12944_category, self.iso12944);
        set(&mut p.atmosphere.marine_influence, self.marine);
        set(&mut p.atmosphere.industrial_pollution, self.pollution);
        let Soil {
            soil_type,
            resistivity,
            moisture,
        } = &mut p.soil;
        set(soil_type, self.soil_type);
        set(resistivity, self.resistivity);
        set(moisture, self.moisture);
        let Operating {
            temperature,
            cathodic_protection,
            service_life,
        } = &mut p.operating;
        set(temperature, self.operating_temp);
        if self.cathodic_protection {
            *cathodic_protection = Some(true);
        }
        set(service_life, self.service_life);
        p
    }
}

fn set<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// 직관 계산 결과를 출력한다.
pub fn print_pipe_result(r: &CalculationResult) {
    println!("\n=== 직관 계산 결과 ({}) ===", r.pressure_class_used);
    println!("외경: {:.1} mm, 두께: {:.2} mm", r.outside_diameter_mm, r.wall_thickness_mm);
    println!("단위 중량: {:.3} kg/m", r.pipe_weight_per_meter);
    println!(
        "관 수량: {} 본, 총 길이: {:.2} m, 관 중량: {:.2} kg",
        r.calculated_pipe_count, r.calculated_total_length, r.total_pipe_weight
    );
    println!(
        "플랜지: {} 개 x {:.2} kg = {:.2} kg (접속부 {})",
        r.number_of_flanges, r.flange_weight_per_unit, r.total_flange_weight,
        r.number_of_flange_connections
    );
    println!(
        "플랜지 용접: {} 개소, {:.3} m",
        r.number_of_flange_welds, r.total_flange_weld_length
    );
    println!("총 중량: {:.2} kg", r.total_system_weight);
    if r.is_local_calculation {
        println!("(로컬 계산, 외경 {:?} / 플랜지 {:?})", r.outside_diameter_confidence, r.flange_weight_confidence);
    }
}

pub fn print_boq(boq: &ConsolidatedBoq) {
    for (title, items) in boq.sections() {
        if items.is_empty() {
            continue;
        }
        println!("\n-- {title} --");
        for item in items {
            println!(
                "{:<48} {:>10.2} {:<3} {:>10.2} kg",
                item.description, item.qty, item.unit, item.weight_kg
            );
        }
    }
    println!("\n총 중량: {:.2} kg", boq.total_weight_kg());
}

pub fn print_schedule(rec: &ScheduleRecommendation) {
    let v = &rec.validation;
    println!("\n=== 최소 두께 검토 ===");
    println!("최소 필요 두께: {:.3} mm", v.min_required_mm);
    match &rec.schedule {
        Some(s) => println!("추천 스케줄: {} ({:.2} mm)", s.designation, s.wall_thickness_mm),
        None => println!("추천 스케줄: 없음"),
    }
    print_validation_lines(v);
}

pub fn print_validation(v: &crate::piping::ScheduleValidation) {
    println!("\n=== 두께 검토 ===");
    println!("최소 필요 두께: {:.3} mm", v.min_required_mm);
    println!("검토 두께: {:.2} mm", v.selected_thickness_mm);
    print_validation_lines(v);
}

fn print_validation_lines(v: &crate::piping::ScheduleValidation) {
    println!(
        "최대 허용압력: {:.2} bar (설계 {:.2} bar)",
        v.max_allowable_pressure_bar, v.design_pressure_bar
    );
    if let Some(margin) = v.margin {
        println!("여유율: {margin:.2}");
    }
    println!("판정: {}", if v.is_adequate { "적합" } else { "부적합" });
    print_warnings(&v.warnings);
}

pub fn print_suitability(name: &str, r: &SuitabilityResult, pt_group: &str, asme_group: &str) {
    println!("\n=== 재질 적합성: {name} ===");
    println!("판정: {}", if r.is_suitable { "적합" } else { "부적합" });
    if let Some(limits) = &r.limits {
        println!(
            "한계: {}~{} °C, {} bar",
            limits.min_temp_c, limits.max_temp_c, limits.max_pressure_bar
        );
    }
    print_warnings(&r.warnings);
    if let Some(rec) = &r.recommendation {
        println!("권장: {rec}");
    }
    println!("플랜지 재질 그룹: {pt_group} (ASME {asme_group})");
}

pub fn print_lining(advice: &Advice<crate::protection::DamageMechanisms, LiningRecommendation>) {
    match advice {
        Advice::NeedsMoreInput { missing } => print_missing(missing),
        Advice::Recommended {
            damage,
            recommendation: r,
        } => {
            println!("\n=== 라이닝 추천 ===");
            println!(
                "손상 기구: 마모 {:?}, 충격 {:?}, 부식 {:?} (지배: {})",
                damage.abrasion, damage.impact, damage.corrosion,
                damage.dominant_mechanism.label()
            );
            println!("{} [{}] {}", r.lining, r.lining_type, r.thickness_range);
            println!("근거: {}", r.rationale);
            println!("규격: {}", r.standards_basis.join(", "));
            for note in &r.engineering_notes {
                println!("  - {note}");
            }
        }
    }
}

pub fn print_coating(
    advice: &Advice<ExternalDamageMechanisms, ExternalCoatingRecommendation>,
) {
    match advice {
        Advice::NeedsMoreInput { missing } => print_missing(missing),
        Advice::Recommended {
            damage,
            recommendation: r,
        } => {
            println!("\n=== 외면 코팅 추천 ===");
            println!(
                "손상 기구: 대기 {:?}, 토양 {:?}, 기계적 {:?} (지배: {})",
                damage.atmospheric_corrosion, damage.soil_corrosion, damage.mechanical_damage,
                damage.dominant_mechanism.label()
            );
            println!("{} [{}] {}", r.coating, r.coating_type, r.thickness_range);
            println!("시스템: {}", r.system);
            println!("근거: {}", r.rationale);
            println!("규격: {}", r.standards_basis.join(", "));
            for note in &r.engineering_notes {
                println!("  - {note}");
            }
        }
    }
}

fn print_missing(missing: &[String]) {
    println!("추천에 필요한 항목이 부족합니다: {}", missing.join(", "));
}

fn print_warnings(warnings: &[String]) {
    for w in warnings {
        println!("경고: {w}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pipe_subcommand() {
        let cli = Cli::try_parse_from([
            "piping_boq_toolbox_cli",
            "--json",
            "pipe",
            "--nb",
            "100",
            "--wt",
            "6.02",
            "--length",
            "6",
            "--quantity",
            "10",
            "--ends",
            "FBE",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Pipe(args) => {
                assert_eq!(args.nb, 100);
                assert_eq!(args.ends, "FBE");
                assert_eq!(args.quantity_type, "number_of_pipes");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn lining_flags_override_profile() {
        let cli = Cli::try_parse_from([
            "piping_boq_toolbox_cli",
            "lining",
            "--particle-size",
            "coarse",
            "--ph",
            "acidic",
            "--temp",
            "150",
        ])
        .unwrap();
        let Command::Lining(args) = cli.command else {
            panic!("expected lining");
        };
        let p = args.apply(MaterialTransferProfile::default());
        assert_eq!(p.material.particle_size, Some(ParticleSize::Coarse));
        assert_eq!(p.chemistry.ph_range, Some(PhRange::Acidic));
        assert_eq!(p.chemistry.temperature_range, Some(TemperatureCategory::High));
    }

    #[test]
    fn coating_flags_fill_profile() {
        let args = CoatingArgs {
            installation: Some(InstallationType::Buried),
            cathodic_protection: true,
            ..Default::default()
        };
        let p = args.apply(ExternalEnvironmentProfile::default());
        assert_eq!(p.installation.kind, Some(InstallationType::Buried));
        assert_eq!(p.operating.cathodic_protection, Some(true));
        assert_eq!(p.operating.service_life, None);
    }
}
