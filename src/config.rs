use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::material_db::DEFAULT_MATERIAL_CODE;
use crate::piping::pressure_class::DEFAULT_PRESSURE_CLASS;
use crate::piping::DesignFactors;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 계산 기본값 설정. 파일에 없는 키는 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 입력에 압력 등급이 없을 때 쓰는 등급
    pub default_pressure_class: String,
    pub default_material_code: String,
    /// BOQ 가스켓 종류
    pub default_gasket_type: String,
    pub output: OutputFormat,
    pub design_factors: DesignFactors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pressure_class: DEFAULT_PRESSURE_CLASS.designation().to_string(),
            default_material_code: DEFAULT_MATERIAL_CODE.to_string(),
            default_gasket_type: "SW-316".to_string(),
            output: OutputFormat::Text,
            design_factors: DesignFactors::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 만들어 저장한 뒤 돌려준다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
default_pressure_class = "Class 300"

[design_factors]
safety_factor = 1.5
"#,
        )
        .unwrap();
        assert_eq!(cfg.default_pressure_class, "Class 300");
        assert_eq!(cfg.default_material_code, "A106B");
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!((cfg.design_factors.safety_factor - 1.5).abs() < 1e-12);
        assert!((cfg.design_factors.joint_efficiency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("default_pressure_class = \"PN16\""));
        assert!(text.contains("[design_factors]"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn load_creates_file_when_absent() {
        let dir = std::env::temp_dir().join(format!("piping_boq_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
