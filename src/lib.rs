//! 재무 계산 코어를 라이브러리로 분리하여 CLI와 GUI가 같은 계산을 공유한다.

pub mod app;
pub mod config;
pub mod export;
pub mod finance;
pub mod i18n;
pub mod integrations;
pub mod report;
pub mod system;
pub mod ui_cli;
pub mod units;
