//! 예측 결과를 JSON으로 내보낸다.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::finance::Projection;
use crate::system::SystemConfiguration;

/// 내보내기 오류.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 입력 구성과 결과를 함께 담는 내보내기 문서.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub configuration: &'a SystemConfiguration,
    pub projection: &'a Projection,
}

impl<'a> ExportDocument<'a> {
    pub fn new(configuration: &'a SystemConfiguration, projection: &'a Projection) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            configuration,
            projection,
        }
    }
}

/// 보기 좋게 들여쓴 JSON 문자열로 만든다.
pub fn to_json(configuration: &SystemConfiguration, projection: &Projection) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportDocument::new(configuration, projection))?)
}

/// JSON 파일로 저장한다.
pub fn write_json(
    path: &Path,
    configuration: &SystemConfiguration,
    projection: &Projection,
) -> Result<(), ExportError> {
    let json = to_json(configuration, projection)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "예측 결과 내보내기");
    Ok(())
}
