//! 관 끝단 구성(PE, FOE, FBE ...)과 용접/플랜지 개수.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PipeInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeEndConfiguration {
    /// 플레인 엔드
    #[serde(rename = "PE")]
    Pe,
    /// 한쪽 플랜지
    #[serde(rename = "FOE")]
    Foe,
    /// 양쪽 플랜지
    #[serde(rename = "FBE")]
    Fbe,
    /// 한쪽 플랜지 + 루즈 플랜지
    #[serde(rename = "FOE_LF")]
    FoeLf,
    /// 한쪽 플랜지 + 회전 플랜지
    #[serde(rename = "FOE_RF")]
    FoeRf,
    /// 양쪽 회전 플랜지
    #[serde(rename = "2X_RF")]
    TwoXRf,
}

impl PipeEndConfiguration {
    pub const ALL: [PipeEndConfiguration; 6] = [
        PipeEndConfiguration::Pe,
        PipeEndConfiguration::Foe,
        PipeEndConfiguration::Fbe,
        PipeEndConfiguration::FoeLf,
        PipeEndConfiguration::FoeRf,
        PipeEndConfiguration::TwoXRf,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PipeEndConfiguration::Pe => "PE",
            PipeEndConfiguration::Foe => "FOE",
            PipeEndConfiguration::Fbe => "FBE",
            PipeEndConfiguration::FoeLf => "FOE_LF",
            PipeEndConfiguration::FoeRf => "FOE_RF",
            PipeEndConfiguration::TwoXRf => "2X_RF",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PipeEndConfiguration::Pe => "PE - Plain ended (0 welds)",
            PipeEndConfiguration::Foe => "FOE - Flanged one end (1 weld)",
            PipeEndConfiguration::Fbe => "FBE - Flanged both ends (2 flange welds)",
            PipeEndConfiguration::FoeLf => "FOE + L/F - Flanged one end + loose flange (1 flange weld)",
            PipeEndConfiguration::FoeRf => "FOE + R/F - Flanged one end + rotating flange (2 flange welds)",
            PipeEndConfiguration::TwoXRf => "2 x R/F - Rotating flanges both ends (2 flange welds)",
        }
    }

    /// 관 1본당 플랜지 용접 수.
    pub fn weld_count(self) -> u32 {
        match self {
            PipeEndConfiguration::Pe => 0,
            PipeEndConfiguration::Foe | PipeEndConfiguration::FoeLf => 1,
            PipeEndConfiguration::Fbe
            | PipeEndConfiguration::FoeRf
            | PipeEndConfiguration::TwoXRf => 2,
        }
    }

    /// 관 1본당 물리적 플랜지 수. 루즈 플랜지는 용접되지 않지만 개수에는 포함된다.
    pub fn flange_count(self) -> u32 {
        match self {
            PipeEndConfiguration::Pe => 0,
            PipeEndConfiguration::Foe => 1,
            _ => 2,
        }
    }

    /// 관 1본당 볼트 세트(플랜지 접속부) 수.
    pub fn bolt_sets_per_pipe(self) -> u32 {
        match self {
            PipeEndConfiguration::Pe => 0,
            _ => 1,
        }
    }

    pub fn has_loose_flange(self) -> bool {
        self.code().contains("_LF")
    }

    pub fn flange_type_name(self) -> &'static str {
        match self {
            PipeEndConfiguration::Pe
            | PipeEndConfiguration::Foe
            | PipeEndConfiguration::Fbe
            | PipeEndConfiguration::FoeLf => "Slip On",
            PipeEndConfiguration::FoeRf | PipeEndConfiguration::TwoXRf => "Rotating",
        }
    }
}

impl fmt::Display for PipeEndConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PipeEndConfiguration {
    type Err = PipeInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace([' ', '-', '+'], "_");
        match key.as_str() {
            "PE" => Ok(PipeEndConfiguration::Pe),
            "FOE" => Ok(PipeEndConfiguration::Foe),
            "FBE" => Ok(PipeEndConfiguration::Fbe),
            "FOE_LF" => Ok(PipeEndConfiguration::FoeLf),
            "FOE_RF" => Ok(PipeEndConfiguration::FoeRf),
            "2X_RF" | "2XRF" => Ok(PipeEndConfiguration::TwoXRf),
            _ => Err(PipeInputError::UnknownEndConfiguration(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weld_and_flange_counts() {
        let welds: Vec<u32> = PipeEndConfiguration::ALL.iter().map(|c| c.weld_count()).collect();
        let flanges: Vec<u32> = PipeEndConfiguration::ALL.iter().map(|c| c.flange_count()).collect();
        assert_eq!(welds, [0, 1, 2, 1, 2, 2]);
        assert_eq!(flanges, [0, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn parses_codes_and_rejects_unknown() {
        for config in PipeEndConfiguration::ALL {
            assert_eq!(config.code().parse::<PipeEndConfiguration>(), Ok(config));
        }
        assert_eq!("foe lf".parse::<PipeEndConfiguration>(), Ok(PipeEndConfiguration::FoeLf));
        assert!("XYZ".parse::<PipeEndConfiguration>().is_err());
    }

    #[test]
    fn loose_flange_only_on_foe_lf() {
        let loose: Vec<_> = PipeEndConfiguration::ALL
            .into_iter()
            .filter(|c| c.has_loose_flange())
            .collect();
        assert_eq!(loose, [PipeEndConfiguration::FoeLf]);
    }

    #[test]
    fn flange_type_names() {
        let names: Vec<&str> = PipeEndConfiguration::ALL
            .iter()
            .map(|c| c.flange_type_name())
            .collect();
        assert_eq!(
            names,
            ["Slip On", "Slip On", "Slip On", "Slip On", "Rotating", "Rotating"]
        );
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&PipeEndConfiguration::TwoXRf).unwrap_or_default();
        assert_eq!(json, "\"2X_RF\"");
    }
}
