use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Tonne,
    Pound,
    Ounce,
}

impl MassUnit {
    /// 셀렉터에 노출되는 순서.
    pub const ALL: [MassUnit; 6] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Milligram,
        MassUnit::Tonne,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];

    /// 화면 표시용 라벨.
    pub fn label(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kilogram (kg)",
            MassUnit::Gram => "gram (g)",
            MassUnit::Milligram => "milligram (mg)",
            MassUnit::Tonne => "tonne (t)",
            MassUnit::Pound => "pound (lb)",
            MassUnit::Ounce => "ounce (oz)",
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Milligram => value / 1_000_000.0,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * 0.45359237,
        MassUnit::Ounce => value * 0.028349523125,
    }
}

fn from_kg(value_kg: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value_kg,
        MassUnit::Gram => value_kg * 1000.0,
        MassUnit::Milligram => value_kg * 1_000_000.0,
        MassUnit::Tonne => value_kg / 1000.0,
        MassUnit::Pound => value_kg / 0.45359237,
        MassUnit::Ounce => value_kg / 0.028349523125,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
