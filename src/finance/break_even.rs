use serde::{Deserialize, Serialize};

use crate::finance::projection::ProjectionRow;

/// 손익분기 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// 누적 편익이 처음으로 0 이상이 된 연도
    Year(u32),
    /// 예측 기간 안에 손익분기에 도달하지 못함
    NotWithinHorizon,
}

impl BreakEven {
    pub fn year(&self) -> Option<u32> {
        match self {
            BreakEven::Year(y) => Some(*y),
            BreakEven::NotWithinHorizon => None,
        }
    }
}

/// 누적 편익을 연도 순으로 훑어 처음 0 이상이 되는 연도를 찾는다.
///
/// 누적 편익이 단조 증가한다고 가정하지 않는다. 기간 밖으로 외삽하지 않는다.
pub fn detect_break_even(rows: &[ProjectionRow]) -> BreakEven {
    rows.iter()
        .find(|row| row.cumulative_benefit >= 0.0)
        .map_or(BreakEven::NotWithinHorizon, |row| BreakEven::Year(row.year))
}
