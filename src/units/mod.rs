//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod volume;

pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use volume::{convert_volume, VolumeUnit};
