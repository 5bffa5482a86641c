#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn cycle_order_is_light_dark_auto() {
    assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.next(), ThemeMode::Auto);
    assert_eq!(ThemeMode::Auto.next(), ThemeMode::Light);
}

#[test]
fn parse_round_trips_known_modes() {
    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto] {
        assert_eq!(ThemeMode::parse(mode.as_str()), mode);
    }
}

#[test]
fn parse_falls_back_to_auto() {
    assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Auto);
    assert_eq!(ThemeMode::parse(""), ThemeMode::Auto);
}

#[test]
fn read_preference_defaults_to_auto_without_storage() {
    assert_eq!(read_preference(), ThemeMode::Auto);
}

#[test]
fn toggle_advances_one_step() {
    assert_eq!(toggle(ThemeMode::Light), ThemeMode::Dark);
}
