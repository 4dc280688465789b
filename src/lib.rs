//! 직관 배관 BOQ 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 엔진을 쓰게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod material_db;
pub mod piping;
pub mod protection;
pub mod reference;
pub mod ui_cli;
pub mod units;
