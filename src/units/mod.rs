//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod period;
pub mod power;

pub use energy::{convert_energy, EnergyUnit};
pub use period::{annualize, daily_sun_hours, SunHoursMode, UsagePeriod};
pub use power::{convert_power, PowerUnit};
