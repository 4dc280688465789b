//! 문자열 단위 파싱과 엔진 기준 단위(bar g, °C)로의 환산.

use thiserror::Error;

use crate::units::pressure::{self, PressureUnit};
use crate::units::temperature::{self, TemperatureUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bar" | "barg" | "bar(g)" => Ok(PressureUnit::Bar),
        "bara" | "bar(a)" => Ok(PressureUnit::BarA),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "kg/cm2" | "kgf/cm2" | "kg/cm²" => Ok(PressureUnit::KgPerCm2),
        "psi" | "psig" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" | "degc" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "degf" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 단위 문자열과 함께 받은 압력을 bar(g)로 환산한다.
pub fn pressure_to_bar(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(pressure::to_bar(value, parse_pressure_unit(unit)?))
}

/// 단위 문자열과 함께 받은 온도를 °C로 환산한다.
pub fn temperature_to_celsius(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(temperature::to_celsius(value, parse_temperature_unit(unit)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse_pressure_unit(" MPa "), Ok(PressureUnit::MegaPascal));
        assert_eq!(parse_pressure_unit("PSIG"), Ok(PressureUnit::Psi));
        assert_eq!(parse_temperature_unit("°F"), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn unknown_unit_is_reported_verbatim() {
        assert_eq!(
            pressure_to_bar(1.0, "inHg"),
            Err(ConversionError::UnknownUnit("inHg".to_string()))
        );
        assert!(temperature_to_celsius(1.0, "R").is_err());
    }

    #[test]
    fn converts_to_engine_units() {
        assert!((pressure_to_bar(4.0, "MPa").unwrap_or(0.0) - 40.0).abs() < 1e-12);
        assert!((temperature_to_celsius(32.0, "F").unwrap_or(1.0)).abs() < 1e-12);
    }
}
