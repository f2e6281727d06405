use serde::{Deserialize, Serialize};

/// 전력량 단위. 내부 기준은 킬로와트시(kWh)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    WattHour,
    KilowattHour,
    MegawattHour,
}

fn to_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::WattHour => value / 1000.0,
        EnergyUnit::KilowattHour => value,
        EnergyUnit::MegawattHour => value * 1000.0,
    }
}

fn from_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::WattHour => value * 1000.0,
        EnergyUnit::KilowattHour => value,
        EnergyUnit::MegawattHour => value / 1000.0,
    }
}

/// 전력량을 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_kwh(to_kwh(value, from), to)
}

impl EnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::WattHour => "Wh",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::MegawattHour => "MWh",
        }
    }

    /// 값의 크기에 맞는 표시 단위를 고른다. 입력은 kWh 기준.
    pub fn best_fit(kwh: f64) -> Self {
        let abs = kwh.abs();
        if abs >= 10_000.0 {
            EnergyUnit::MegawattHour
        } else if abs < 1.0 && abs > 0.0 {
            EnergyUnit::WattHour
        } else {
            EnergyUnit::KilowattHour
        }
    }
}
