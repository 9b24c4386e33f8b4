use crate::category::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
///
/// 호출자가 폼이므로 구조화된 오류 채널이 없다. `Display` 결과가 곧 화면에
/// 보여줄 메시지이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// 숫자로 해석할 수 없는 입력 값
    InvalidNumber,
    /// 알 수 없는 카테고리 이름
    UnknownCategory,
    /// 카테고리에 속하지 않는 단위 라벨
    UnknownUnit,
    /// 알 수 없는 온도 입력 단위
    UnknownSourceTemperature,
    /// 알 수 없는 온도 변환 단위
    UnknownTargetTemperature,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidNumber => write!(f, "Please enter a valid numeric value."),
            ConversionError::UnknownCategory => write!(f, "Unknown category."),
            ConversionError::UnknownUnit => write!(f, "Unit not available in that category."),
            ConversionError::UnknownSourceTemperature => {
                write!(f, "Unknown source temperature unit.")
            }
            ConversionError::UnknownTargetTemperature => {
                write!(f, "Unknown target temperature unit.")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 폼 입력을 받아 항상 표시 가능한 문자열을 반환한다.
///
/// 값 문자열만 실제 외부 입력이고 나머지는 셀렉터에서 오므로, 숫자 검증이
/// 유일한 1차 검증이다. 오류도 메시지 문자열로 렌더링해서 돌려준다.
pub fn convert(raw_value: &str, category: &str, from: &str, to: &str, decimals: u32) -> String {
    let value: f64 = match raw_value.trim().parse() {
        Ok(v) => v,
        Err(_) => return ConversionError::InvalidNumber.to_string(),
    };
    let result = Category::parse(category)
        .ok_or(ConversionError::UnknownCategory)
        .and_then(|cat| convert_value(cat, value, from, to));
    match result {
        Ok(out) => {
            let rounded = round_to_decimals(out, decimals);
            // 라벨은 호출자가 넘긴 문자열을 그대로 되돌려준다
            format!(
                "{} {} = {} {}",
                format_number(value),
                from,
                format_number(rounded),
                to
            )
        }
        Err(err) => err.to_string(),
    }
}

/// 이미 f64로 들고 있는 값을 라벨 기준으로 변환한다.
pub fn convert_value(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    match category {
        Category::Temperature => {
            let from = parse_temperature_unit(from)
                .ok_or(ConversionError::UnknownSourceTemperature)?;
            let to =
                parse_temperature_unit(to).ok_or(ConversionError::UnknownTargetTemperature)?;
            Ok(convert_temperature(value, from, to))
        }
        Category::Length => {
            let from = parse_length_unit(from)?;
            let to = parse_length_unit(to)?;
            Ok(convert_length(value, from, to))
        }
        Category::Mass => {
            let from = parse_mass_unit(from)?;
            let to = parse_mass_unit(to)?;
            Ok(convert_mass(value, from, to))
        }
        Category::Volume => {
            let from = parse_volume_unit(from)?;
            let to = parse_volume_unit(to)?;
            Ok(convert_volume(value, from, to))
        }
        Category::Time => {
            let from = parse_time_unit(from)?;
            let to = parse_time_unit(to)?;
            Ok(convert_time(value, from, to))
        }
    }
}

/// 셀렉터에 노출할 카테고리 이름 목록.
pub fn category_options() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.name()).collect()
}

/// 카테고리에 속한 단위 라벨 목록을 셀렉터 순서대로 반환한다.
pub fn unit_options(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    let cat = Category::parse(category).ok_or(ConversionError::UnknownCategory)?;
    Ok(match cat {
        Category::Length => LengthUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Mass => MassUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Volume => VolumeUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Time => TimeUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.label()).collect(),
    })
}

/// 소수 자릿수 기준 반올림. 정확히 절반인 값은 짝수 쪽으로 붙인다.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

// 정수로 떨어지는 값도 "100.0"처럼 소수점 한 자리를 붙여 표시한다
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    // 라벨에 "(°C)" 같은 장식이 붙어도 키워드 포함 여부로 판별한다
    let lower = s.to_lowercase();
    if lower.contains("celsius") {
        Some(TemperatureUnit::Celsius)
    } else if lower.contains("fahrenheit") {
        Some(TemperatureUnit::Fahrenheit)
    } else if lower.contains("kelvin") {
        Some(TemperatureUnit::Kelvin)
    } else {
        None
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "meter (m)" | "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "centimeter (cm)" | "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
        "millimeter (mm)" | "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
        "kilometer (km)" | "km" | "kilometer" => Ok(LengthUnit::Kilometer),
        "inch (in)" | "in" | "inch" => Ok(LengthUnit::Inch),
        "foot (ft)" | "ft" | "foot" => Ok(LengthUnit::Foot),
        "yard (yd)" | "yd" | "yard" => Ok(LengthUnit::Yard),
        "mile (mi)" | "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kilogram (kg)" | "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "gram (g)" | "g" | "gram" => Ok(MassUnit::Gram),
        "milligram (mg)" | "mg" | "milligram" => Ok(MassUnit::Milligram),
        "tonne (t)" | "t" | "tonne" => Ok(MassUnit::Tonne),
        "pound (lb)" | "lb" | "lbs" | "pound" => Ok(MassUnit::Pound),
        "ounce (oz)" | "oz" | "ounce" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "liter (l)" | "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "milliliter (ml)" | "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "cubic meter (m³)" | "m3" | "m^3" | "cubic meter" => Ok(VolumeUnit::CubicMeter),
        "us cup" | "cup" => Ok(VolumeUnit::UsCup),
        "us fl oz" | "fl oz" | "floz" => Ok(VolumeUnit::UsFluidOunce),
        "us gallon" | "gal" | "gallon" => Ok(VolumeUnit::UsGallon),
        _ => Err(ConversionError::UnknownUnit),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "second (s)" | "s" | "sec" | "second" => Ok(TimeUnit::Second),
        "minute (min)" | "min" | "minute" => Ok(TimeUnit::Minute),
        "hour (h)" | "h" | "hr" | "hour" => Ok(TimeUnit::Hour),
        "day" | "d" => Ok(TimeUnit::Day),
        _ => Err(ConversionError::UnknownUnit),
    }
}
