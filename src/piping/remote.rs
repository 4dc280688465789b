//! 원격 계산기 경계.
//!
//! 원격 계산기는 선택 사항이다. 호출은 한 번만 시도하고, 실패하면 곧바로 로컬 계산으로
//! 넘어간다. 로컬 경로는 네트워크 없이 동작해야 한다.

use thiserror::Error;
use tracing::warn;

use super::pipe_weight::{calculate_local_pipe_result_with, CalculationResult, PipeRunInput};
use crate::reference::ReferenceTables;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("원격 계산기에 연결할 수 없습니다: {0}")]
    Unreachable(String),
    #[error("원격 계산기 응답 상태 {status}")]
    Status { status: u16 },
    #[error("원격 계산기 응답 시간 초과")]
    Timeout,
    #[error("원격 계산기 응답 형식 오류: {0}")]
    Malformed(String),
}

/// 권위 있는 원격 계산기. 구현체는 전송 방식을 자유롭게 고른다.
pub trait RemoteCalculator {
    fn calculate(&self, input: &PipeRunInput) -> Result<CalculationResult, RemoteError>;
}

/// JSON 문자열을 주고받는 전송 함수를 감싸는 원격 계산기.
///
/// 전송 함수는 요청 JSON을 받아 응답 JSON을 돌려준다. HTTP 클라이언트는 호출자가 고른다.
pub struct JsonRemote<F>
where
    F: Fn(&str) -> Result<String, RemoteError>,
{
    transport: F,
}

impl<F> JsonRemote<F>
where
    F: Fn(&str) -> Result<String, RemoteError>,
{
    pub fn new(transport: F) -> Self {
        Self { transport }
    }
}

impl<F> RemoteCalculator for JsonRemote<F>
where
    F: Fn(&str) -> Result<String, RemoteError>,
{
    fn calculate(&self, input: &PipeRunInput) -> Result<CalculationResult, RemoteError> {
        let body = serde_json::to_string(input)
            .map_err(|err| RemoteError::Malformed(err.to_string()))?;
        let response = (self.transport)(&body)?;
        let mut result: CalculationResult = serde_json::from_str(&response)
            .map_err(|err| RemoteError::Malformed(err.to_string()))?;
        result.is_local_calculation = false;
        Ok(result)
    }
}

/// 원격 결과가 있으면 그대로 쓰고, 없거나 실패하면 로컬 계산 결과를 쓴다.
pub fn calculate_with_fallback(
    remote: Option<&dyn RemoteCalculator>,
    tables: &ReferenceTables,
    input: &PipeRunInput,
) -> CalculationResult {
    if let Some(remote) = remote {
        match remote.calculate(input) {
            Ok(result) => return result,
            Err(err) => warn!(
                %err,
                nb_mm = input.nominal_bore_mm,
                "remote calculation failed, using local formulas"
            ),
        }
    }
    calculate_local_pipe_result_with(tables, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piping::end_config::PipeEndConfiguration;
    use crate::piping::pipe_weight::QuantityType;

    fn input() -> PipeRunInput {
        PipeRunInput {
            nominal_bore_mm: 50,
            wall_thickness_mm: 3.91,
            individual_pipe_length_m: 6.0,
            quantity_value: 2.0,
            quantity_type: QuantityType::NumberOfPipes,
            end_configuration: PipeEndConfiguration::Foe,
            pressure_class: None,
        }
    }

    #[test]
    fn malformed_response_falls_back() {
        let remote = JsonRemote::new(|_: &str| Ok("not json".to_string()));
        let result = calculate_with_fallback(Some(&remote), ReferenceTables::standard(), &input());
        assert!(result.is_local_calculation);
    }

    #[test]
    fn remote_result_is_used_verbatim() {
        let local = calculate_local_pipe_result_with(ReferenceTables::standard(), &input());
        let mut canned = local.clone();
        canned.total_system_weight = 999.0;
        let body = serde_json::to_string(&canned).unwrap_or_default();
        let remote = JsonRemote::new(move |_: &str| Ok(body.clone()));
        let result = calculate_with_fallback(Some(&remote), ReferenceTables::standard(), &input());
        assert!(!result.is_local_calculation);
        assert_eq!(result.total_system_weight, 999.0);
    }
}
