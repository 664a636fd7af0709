use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_matching_filter() {
    assert_eq!(*LogLevel::from_str("debug").unwrap(), LevelFilter::Debug);
    assert_eq!(*LogLevel::from_str("WARN").unwrap(), LevelFilter::Warn);
    assert_eq!(*LogLevel::from_str("off").unwrap(), LevelFilter::Off);
}

#[test]
fn given_unknown_level_name_when_parsed_then_info() {
    assert_eq!(*LogLevel::from_str("verbose").unwrap(), LevelFilter::Info);
}

#[test]
fn given_toml_level_when_deserialized_then_parsed() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str(r#"level = "trace""#).unwrap();

    assert_eq!(LevelFilter::from(wrapper.level), LevelFilter::Trace);
}
