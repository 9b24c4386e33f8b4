//! 온도 변환 고정점과 왕복 회귀 테스트.
use unit_converter_toolbox::units::temperature::{convert_temperature, TemperatureUnit};

#[test]
fn celsius_to_fahrenheit_fixed_points() {
    let f0 = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f0 - 32.0).abs() < 1e-12, "0C => 32F, got {f0}");
    let f100 = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f100 - 212.0).abs() < 1e-12, "100C => 212F, got {f100}");
}

#[test]
fn absolute_zero_kelvin_to_celsius() {
    let c = convert_temperature(0.0, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    assert!((c + 273.15).abs() < 1e-12, "0K => -273.15C, got {c}");
}

#[test]
fn minus_forty_crossover() {
    // -40 °C == -40 °F
    let f = convert_temperature(-40.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f + 40.0).abs() < 1e-12, "got {f}");
}

#[test]
fn fahrenheit_kelvin_roundtrip() {
    let v = 451.0;
    let k = convert_temperature(v, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
    let back = convert_temperature(k, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit);
    assert!((back - v).abs() < 1e-9, "expected {v}, got {back}");
}

#[test]
fn same_unit_is_identity() {
    for unit in TemperatureUnit::ALL {
        let v = 36.6;
        let out = convert_temperature(v, unit, unit);
        assert!((out - v).abs() < 1e-12, "{unit:?}: got {out}");
    }
}
