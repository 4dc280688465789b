//! 배관 입력 검증 오류.

use thiserror::Error;

/// 계산 전에 호출자가 확인해야 하는 입력 오류.
///
/// 계산 엔진 자체는 표 조회 실패로 오류를 내지 않는다. 이 타입은 입력 파싱과
/// `PipeRunInput::validate`에서만 쓰인다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeInputError {
    #[error("입력 오류: {field} 값은 0보다 커야 합니다 (입력값 {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("입력 오류: {field} 값이 유한한 수가 아닙니다")]
    NotFinite { field: &'static str },

    #[error("입력 오류: 관 두께 {wall_mm} mm가 외경 {outside_diameter_mm} mm의 절반 이상입니다")]
    WallTooThick {
        wall_mm: f64,
        outside_diameter_mm: f64,
    },

    #[error("알 수 없는 관 끝단 구성: {0}")]
    UnknownEndConfiguration(String),

    #[error("알 수 없는 수량 기준: {0}")]
    UnknownQuantityType(String),
}

pub type PipeInputResult<T> = Result<T, PipeInputError>;
