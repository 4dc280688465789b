use serde::{Deserialize, Serialize};

/// 설계압력 입력 단위. 내부 기준은 bar(게이지)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    /// 절대압 bar
    BarA,
    MilliBar,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Psi,
}

pub const ATM_BAR: f64 = 1.01325;
const KGF_CM2_BAR: f64 = 0.980665;
const PSI_BAR: f64 = 0.0689476;

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::BarA => "bara",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::KgPerCm2 => "kg/cm2",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 주어진 압력을 bar(g)로 변환한다. 절대압 단위만 대기압을 뺀다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::BarA => value - ATM_BAR,
        PressureUnit::MilliBar => value / 1000.0,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::KgPerCm2 => value * KGF_CM2_BAR,
        PressureUnit::Psi => value * PSI_BAR,
    }
}

/// bar(g) 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::BarA => value_bar + ATM_BAR,
        PressureUnit::MilliBar => value_bar * 1000.0,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::KgPerCm2 => value_bar / KGF_CM2_BAR,
        PressureUnit::Psi => value_bar / PSI_BAR,
    }
}

pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_bar(to_bar(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_units_scale_only() {
        assert!((to_bar(1.6, PressureUnit::MegaPascal) - 16.0).abs() < 1e-12);
        assert!((to_bar(1600.0, PressureUnit::KiloPascal) - 16.0).abs() < 1e-12);
        assert!((to_bar(232.06, PressureUnit::Psi) - 16.0).abs() < 1e-3);
    }

    #[test]
    fn absolute_bar_subtracts_atmosphere() {
        assert!(to_bar(ATM_BAR, PressureUnit::BarA).abs() < 1e-12);
        let back = convert_pressure(10.0, PressureUnit::Bar, PressureUnit::BarA);
        assert!((back - 11.01325).abs() < 1e-9);
    }
}
