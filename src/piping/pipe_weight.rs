//! 직관 중량 및 플랜지/용접 수량 계산(로컬 경로).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::end_config::PipeEndConfiguration;
use super::error::{PipeInputError, PipeInputResult};
use super::pressure_class::DEFAULT_PRESSURE_CLASS;
use super::resolvers::{resolve_flange_weight, resolve_outside_diameter, Confidence};
use crate::reference::ReferenceTables;

/// 강재 밀도(7850 kg/m³)와 환형 단면적 공식을 mm 입력, kg/m 출력으로 묶은 상수.
pub const STEEL_WEIGHT_FACTOR: f64 = 0.02466;

/// 수량 입력 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityType {
    NumberOfPipes,
    TotalLength,
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityType::NumberOfPipes => f.write_str("number_of_pipes"),
            QuantityType::TotalLength => f.write_str("total_length"),
        }
    }
}

impl FromStr for QuantityType {
    type Err = PipeInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "number_of_pipes" | "pipes" => Ok(QuantityType::NumberOfPipes),
            "total_length" | "length" => Ok(QuantityType::TotalLength),
            _ => Err(PipeInputError::UnknownQuantityType(s.to_string())),
        }
    }
}

/// 직관 한 구간(같은 사양의 관 묶음) 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeRunInput {
    pub nominal_bore_mm: u32,
    pub wall_thickness_mm: f64,
    /// 관 1본 길이(m)
    pub individual_pipe_length_m: f64,
    pub quantity_value: f64,
    pub quantity_type: QuantityType,
    pub end_configuration: PipeEndConfiguration,
    #[serde(default)]
    pub pressure_class: Option<String>,
}

impl PipeRunInput {
    /// 계산 전에 호출자가 실행하는 입력 검증.
    pub fn validate(&self) -> PipeInputResult<()> {
        positive("nominal_bore_mm", f64::from(self.nominal_bore_mm))?;
        positive("wall_thickness_mm", self.wall_thickness_mm)?;
        positive("individual_pipe_length_m", self.individual_pipe_length_m)?;
        positive("quantity_value", self.quantity_value)?;

        let od = resolve_outside_diameter(ReferenceTables::standard(), self.nominal_bore_mm).value;
        if self.wall_thickness_mm * 2.0 >= od {
            return Err(PipeInputError::WallTooThick {
                wall_mm: self.wall_thickness_mm,
                outside_diameter_mm: od,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> PipeInputResult<()> {
    if !value.is_finite() {
        return Err(PipeInputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(PipeInputError::NonPositive { field, value });
    }
    Ok(())
}

/// 직관 계산 결과. 원격 계산기 응답과 같은 모양(camelCase JSON)을 유지한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub pipe_weight_per_meter: f64,
    pub calculated_pipe_count: u64,
    pub calculated_total_length: f64,
    pub total_pipe_weight: f64,
    pub number_of_flanges: u64,
    /// 볼트 세트가 필요한 플랜지 접속부 수
    pub number_of_flange_connections: u64,
    pub number_of_flange_welds: u64,
    /// 플랜지 용접 총 길이(m)
    pub total_flange_weld_length: f64,
    pub outside_diameter_mm: f64,
    pub wall_thickness_mm: f64,
    pub flange_weight_per_unit: f64,
    pub total_flange_weight: f64,
    /// 로컬 경로에서는 BNW를 별도 BOQ 항목으로 계산하므로 0.
    pub total_bolt_weight: f64,
    pub total_nut_weight: f64,
    pub total_system_weight: f64,
    pub pressure_class_used: String,
    /// 원격 응답에는 없을 수 있다.
    #[serde(default)]
    pub is_local_calculation: bool,
    #[serde(default)]
    pub outside_diameter_confidence: Confidence,
    #[serde(default)]
    pub flange_weight_confidence: Confidence,
}

/// 표준 테이블로 로컬 계산을 수행한다.
pub fn calculate_local_pipe_result(input: &PipeRunInput) -> CalculationResult {
    calculate_local_pipe_result_with(ReferenceTables::standard(), input)
}

/// 주어진 테이블로 로컬 계산을 수행한다. I/O가 없는 순수 함수다.
pub fn calculate_local_pipe_result_with(
    tables: &ReferenceTables,
    input: &PipeRunInput,
) -> CalculationResult {
    let od = resolve_outside_diameter(tables, input.nominal_bore_mm);
    let wt = input.wall_thickness_mm;
    let weight_per_meter = (od.value - wt) * wt * STEEL_WEIGHT_FACTOR;

    let (pipe_count, total_length) = match input.quantity_type {
        QuantityType::TotalLength => {
            let count = (input.quantity_value / input.individual_pipe_length_m).ceil();
            (count.max(0.0) as u64, input.quantity_value)
        }
        QuantityType::NumberOfPipes => {
            let count = input.quantity_value.round().max(0.0) as u64;
            (count, input.quantity_value * input.individual_pipe_length_m)
        }
    };
    let total_pipe_weight = weight_per_meter * total_length;

    let ends = input.end_configuration;
    let number_of_flanges = u64::from(ends.flange_count()) * pipe_count;
    let number_of_flange_welds = u64::from(ends.weld_count()) * pipe_count;
    let number_of_flange_connections = u64::from(ends.bolt_sets_per_pipe()) * pipe_count;
    let circumference_m = PI * od.value / 1000.0;
    let total_flange_weld_length = number_of_flange_welds as f64 * circumference_m;

    let designation = input
        .pressure_class
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let flange = resolve_flange_weight(tables, input.nominal_bore_mm, designation);
    let total_flange_weight = number_of_flanges as f64 * flange.value;

    CalculationResult {
        pipe_weight_per_meter: weight_per_meter,
        calculated_pipe_count: pipe_count,
        calculated_total_length: total_length,
        total_pipe_weight,
        number_of_flanges,
        number_of_flange_connections,
        number_of_flange_welds,
        total_flange_weld_length,
        outside_diameter_mm: od.value,
        wall_thickness_mm: wt,
        flange_weight_per_unit: flange.value,
        total_flange_weight,
        total_bolt_weight: 0.0,
        total_nut_weight: 0.0,
        total_system_weight: total_pipe_weight + total_flange_weight,
        pressure_class_used: designation
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_PRESSURE_CLASS.designation().to_string()),
        is_local_calculation: true,
        outside_diameter_confidence: od.confidence,
        flange_weight_confidence: flange.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(quantity_type: QuantityType, quantity_value: f64) -> PipeRunInput {
        PipeRunInput {
            nominal_bore_mm: 100,
            wall_thickness_mm: 6.02,
            individual_pipe_length_m: 12.192,
            quantity_value,
            quantity_type,
            end_configuration: PipeEndConfiguration::Fbe,
            pressure_class: Some("PN16".to_string()),
        }
    }

    #[test]
    fn total_length_rounds_pipe_count_up() {
        let result = calculate_local_pipe_result(&run(QuantityType::TotalLength, 100.0));
        assert_eq!(result.calculated_pipe_count, 9);
        assert!((result.calculated_total_length - 100.0).abs() < 1e-12);
        assert_eq!(result.number_of_flanges, 18);
        assert_eq!(result.number_of_flange_connections, 9);
    }

    #[test]
    fn missing_class_echoes_default() {
        let mut input = run(QuantityType::NumberOfPipes, 1.0);
        input.pressure_class = None;
        let result = calculate_local_pipe_result(&input);
        assert_eq!(result.pressure_class_used, "PN16");
        assert!((result.flange_weight_per_unit - 6.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_bore_is_estimated() {
        let mut input = run(QuantityType::NumberOfPipes, 1.0);
        input.nominal_bore_mm = 110;
        let result = calculate_local_pipe_result(&input);
        assert!((result.outside_diameter_mm - 115.5).abs() < 1e-9);
        assert_eq!(result.outside_diameter_confidence, Confidence::Estimate);
    }

    #[test]
    fn validation_rejects_bad_geometry() {
        let mut input = run(QuantityType::NumberOfPipes, 1.0);
        input.wall_thickness_mm = 0.0;
        assert!(matches!(
            input.validate(),
            Err(PipeInputError::NonPositive { field: "wall_thickness_mm", .. })
        ));
        input.wall_thickness_mm = 60.0;
        assert!(matches!(input.validate(), Err(PipeInputError::WallTooThick { .. })));
        input.wall_thickness_mm = f64::NAN;
        assert!(matches!(input.validate(), Err(PipeInputError::NotFinite { .. })));
    }

    #[test]
    fn quantity_type_parses_wire_names() {
        assert_eq!("total_length".parse::<QuantityType>(), Ok(QuantityType::TotalLength));
        assert_eq!("number-of-pipes".parse::<QuantityType>(), Ok(QuantityType::NumberOfPipes));
        assert!("bundles".parse::<QuantityType>().is_err());
    }
}
