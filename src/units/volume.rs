use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    UsCup,
    UsFluidOunce,
    UsGallon,
}

impl VolumeUnit {
    /// 셀렉터에 노출되는 순서.
    pub const ALL: [VolumeUnit; 6] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::UsCup,
        VolumeUnit::UsFluidOunce,
        VolumeUnit::UsGallon,
    ];

    /// 화면 표시용 라벨.
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "liter (L)",
            VolumeUnit::Milliliter => "milliliter (mL)",
            VolumeUnit::CubicMeter => "cubic meter (m³)",
            VolumeUnit::UsCup => "US cup",
            VolumeUnit::UsFluidOunce => "US fl oz",
            VolumeUnit::UsGallon => "US gallon",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::UsCup => value * 0.2365882365,
        VolumeUnit::UsFluidOunce => value * 0.0295735295625,
        VolumeUnit::UsGallon => value * 3.785411784,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::Milliliter => value_l * 1000.0,
        VolumeUnit::CubicMeter => value_l / 1000.0,
        VolumeUnit::UsCup => value_l / 0.2365882365,
        VolumeUnit::UsFluidOunce => value_l / 0.0295735295625,
        VolumeUnit::UsGallon => value_l / 3.785411784,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}
