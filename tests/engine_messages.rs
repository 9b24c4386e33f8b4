//! 변환 엔진의 문자열 계약(성공 렌더링과 오류 메시지) 회귀 테스트.
use unit_converter_toolbox::conversion;

#[test]
fn meter_to_centimeter_rendering() {
    let line = conversion::convert("1", "Length", "meter (m)", "centimeter (cm)", 1);
    assert_eq!(line, "1.0 meter (m) = 100.0 centimeter (cm)");
}

#[test]
fn invalid_numeric_input() {
    let line = conversion::convert("abc", "Length", "meter (m)", "foot (ft)", 2);
    assert_eq!(line, "Please enter a valid numeric value.");
}

#[test]
fn unknown_category() {
    assert_eq!(conversion::convert("5", "Bogus", "x", "y", 2), "Unknown category.");
}

#[test]
fn unknown_unit_in_known_category() {
    assert_eq!(
        conversion::convert("5", "Length", "lightyear", "meter (m)", 2),
        "Unit not available in that category."
    );
}

#[test]
fn unknown_temperature_labels() {
    // 입력 단위를 먼저 검사한다
    assert_eq!(
        conversion::convert("5", "Temperature", "Reaumur", "Celsius (°C)", 2),
        "Unknown source temperature unit."
    );
    assert_eq!(
        conversion::convert("5", "Temperature", "Celsius (°C)", "Reaumur", 2),
        "Unknown target temperature unit."
    );
}

#[test]
fn decorated_temperature_labels_resolve() {
    // 라벨에 장식이 붙어도 키워드 포함으로 판별된다
    let line = conversion::convert("0", "Temperature", "degrees Celsius", "Fahrenheit (°F)", 1);
    assert_eq!(line, "0.0 degrees Celsius = 32.0 Fahrenheit (°F)");
}

#[test]
fn category_name_is_case_sensitive() {
    // 셀렉터 밖에서 온 소문자 이름은 알 수 없는 카테고리로 처리한다
    assert_eq!(
        conversion::convert("5", "temperature", "Celsius (°C)", "Kelvin (K)", 2),
        "Unknown category."
    );
}

#[test]
fn surrounding_whitespace_in_value_is_accepted() {
    let line = conversion::convert(" 2.5 ", "Time", "minute (min)", "second (s)", 0);
    assert_eq!(line, "2.5 minute (min) = 150.0 second (s)");
}
