//! 직관 배관 BOQ 계산 모듈 모음.
//! 압력 등급 정규화, 참조 테이블 조회, 관/플랜지 중량, 최소 두께, 재질 적합성으로 구성한다.

pub mod boq;
pub mod end_config;
pub mod error;
pub mod pipe_weight;
pub mod pressure_class;
pub mod remote;
pub mod resolvers;
pub mod suitability;
pub mod wall_thickness;

pub use boq::{consolidate_boq, BoqEntry, BoqOptions, ConsolidatedBoq, LineItem};
pub use end_config::PipeEndConfiguration;
pub use error::{PipeInputError, PipeInputResult};
pub use pipe_weight::{
    calculate_local_pipe_result, calculate_local_pipe_result_with, CalculationResult,
    PipeRunInput, QuantityType,
};
pub use pressure_class::{
    classify_pressure_class, normalize_pressure_class, ClassifiedPressureClass, NormalizedClass,
    PressureClass,
};
pub use remote::{calculate_with_fallback, JsonRemote, RemoteCalculator, RemoteError};
pub use resolvers::*;
pub use suitability::*;
pub use wall_thickness::*;
