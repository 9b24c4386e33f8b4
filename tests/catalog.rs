//! 카테고리/단위 목록과 설정 기본값 회귀 테스트.
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::config::Config;
use unit_converter_toolbox::conversion;

#[test]
fn category_listing_order() {
    assert_eq!(
        conversion::category_options(),
        ["Length", "Mass", "Volume", "Time", "Temperature"]
    );
}

#[test]
fn unit_listing_matches_catalog() {
    let lengths = conversion::unit_options("Length").expect("length units");
    assert_eq!(
        lengths,
        [
            "meter (m)",
            "centimeter (cm)",
            "millimeter (mm)",
            "kilometer (km)",
            "inch (in)",
            "foot (ft)",
            "yard (yd)",
            "mile (mi)",
        ]
    );
    let temps = conversion::unit_options("Temperature").expect("temperature units");
    assert_eq!(temps, ["Celsius (°C)", "Fahrenheit (°F)", "Kelvin (K)"]);
    assert!(conversion::unit_options("Bogus").is_err());
}

#[test]
fn every_listed_label_resolves_in_its_category() {
    for category in conversion::category_options() {
        let cat = Category::parse(category).expect("listed name parses");
        for label in conversion::unit_options(category).expect("listed category") {
            conversion::convert_value(cat, 1.0, label, label)
                .unwrap_or_else(|e| panic!("{category}/{label}: {e}"));
        }
    }
}

#[test]
fn config_defaults_point_at_listed_units() {
    let cfg = Config::default();
    assert_eq!(cfg.decimals, 4);
    assert_eq!(cfg.default_category, Category::Length);
    for category in Category::ALL {
        let label = cfg.default_units.label_for(category);
        let options = conversion::unit_options(category.name()).expect("category");
        assert!(options.contains(&label), "{}: {label}", category.name());
    }
}

#[test]
fn config_roundtrips_through_toml() {
    let mut cfg = Config::default();
    cfg.decimals = 2;
    cfg.default_category = Category::Time;
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");
    assert_eq!(back.decimals, 2);
    assert_eq!(back.default_category, Category::Time);
}
