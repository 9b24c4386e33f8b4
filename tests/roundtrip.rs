//! 항등 변환, 왕복 변환, 단조성, 반올림 규칙 회귀 테스트.
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::conversion;

#[test]
fn identity_conversion_renders_input_back() {
    for category in conversion::category_options() {
        for unit in conversion::unit_options(category).expect("listed category") {
            let line = conversion::convert("3.5", category, unit, unit, 4);
            assert_eq!(line, format!("3.5 {unit} = 3.5 {unit}"), "category={category}");
        }
    }
}

#[test]
fn roundtrip_within_tolerance() {
    // 왕복 변환은 부동소수점 오차 이내로 돌아와야 한다
    let cases = [
        ("Length", "inch (in)", "mile (mi)"),
        ("Mass", "ounce (oz)", "tonne (t)"),
        ("Volume", "US cup", "cubic meter (m³)"),
        ("Time", "day", "second (s)"),
    ];
    for (category, a, b) in cases {
        let cat = Category::parse(category).expect("known category");
        let v = 12.75;
        let there = conversion::convert_value(cat, v, a, b).expect("forward");
        let back = conversion::convert_value(cat, there, b, a).expect("back");
        assert!((back - v).abs() < 1e-9, "{category}: expected {v}, got {back}");
    }
}

#[test]
fn generic_result_increases_with_value() {
    let cat = Category::parse("Length").expect("known category");
    let lo = conversion::convert_value(cat, 1.0, "meter (m)", "foot (ft)").expect("convert");
    let hi = conversion::convert_value(cat, 2.0, "meter (m)", "foot (ft)").expect("convert");
    assert!(hi > lo);
}

#[test]
fn rounding_is_half_to_even() {
    assert_eq!(conversion::round_to_decimals(2.5, 0), 2.0);
    assert_eq!(conversion::round_to_decimals(3.5, 0), 4.0);
    assert_eq!(conversion::round_to_decimals(0.125, 2), 0.12);
}

#[test]
fn mile_to_kilometer_factor() {
    let cat = Category::parse("Length").expect("known category");
    let km = conversion::convert_value(cat, 1.0, "mile (mi)", "kilometer (km)").expect("convert");
    assert!((km - 1.609344).abs() < 1e-12, "got {km}");
}

#[test]
fn gallon_to_liter_factor() {
    let cat = Category::parse("Volume").expect("known category");
    let l = conversion::convert_value(cat, 1.0, "US gallon", "liter (L)").expect("convert");
    assert!((l - 3.785411784).abs() < 1e-12, "got {l}");
}
