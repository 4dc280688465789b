//! CLI 입력 단위 정의. 계산 엔진은 bar(g)와 °C만 받는다.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
