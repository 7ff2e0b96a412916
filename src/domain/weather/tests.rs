use super::*;

#[test]
fn clear_code_respects_time_of_day() {
    assert_eq!(classify(0, TimeOfDay::Day), WeatherType::Sunny);
    assert_eq!(classify(0, TimeOfDay::Night), WeatherType::Night);
}

#[test]
fn partly_cloudy_codes_stay_cloudy_at_night() {
    for code in [1, 2, 3] {
        assert_eq!(classify(code, TimeOfDay::Day), WeatherType::Cloudy);
        assert_eq!(classify(code, TimeOfDay::Night), WeatherType::Cloudy);
    }
}

#[test]
fn precipitation_codes_map_to_their_types() {
    for code in [61, 63, 65, 80, 81, 82] {
        assert_eq!(classify(code, TimeOfDay::Day), WeatherType::Rain);
    }
    for code in [71, 73, 75, 85, 86] {
        assert_eq!(classify(code, TimeOfDay::Night), WeatherType::Snow);
    }
    for code in [95, 96, 99] {
        assert_eq!(classify(code, TimeOfDay::Day), WeatherType::Storm);
    }
}

#[test]
fn unlisted_codes_fall_back_by_time_of_day() {
    // Fog and drizzle have no dedicated backdrop.
    for code in [45, 48, 51, 66, 77] {
        assert_eq!(classify(code, TimeOfDay::Day), WeatherType::Cloudy);
        assert_eq!(classify(code, TimeOfDay::Night), WeatherType::Night);
    }
}

#[test]
fn labels_match_exactly_with_default_fallback() {
    assert_eq!(WeatherType::from_label("storm"), WeatherType::Storm);
    assert_eq!(WeatherType::from_label("RAIN"), WeatherType::Night);
    assert_eq!(WeatherType::from_label("Storm"), WeatherType::Night);
    assert_eq!(WeatherType::from_label(" snow "), WeatherType::Night);
    assert_eq!(WeatherType::recognize("Rain"), None);
    assert_eq!(WeatherType::from_label("hail"), WeatherType::Night);
    assert_eq!(WeatherType::from_label(""), WeatherType::Night);
    assert_eq!(WeatherType::recognize("hail"), None);
    assert_eq!(WeatherType::from("sunny"), WeatherType::Sunny);
}

#[test]
fn label_roundtrips_through_display() {
    for kind in WeatherType::ALL {
        assert_eq!(WeatherType::from_label(&kind.to_string()), kind);
    }
}

#[test]
fn next_and_previous_cycle_through_all_types() {
    let mut kind = WeatherType::Sunny;
    for _ in 0..WeatherType::ALL.len() {
        kind = kind.next();
    }
    assert_eq!(kind, WeatherType::Sunny);
    assert_eq!(WeatherType::Sunny.previous(), WeatherType::Storm);
    assert_eq!(WeatherType::Storm.next(), WeatherType::Sunny);
}

#[test]
fn serde_uses_lowercase_labels() {
    let json = serde_json::to_string(&WeatherType::Storm).expect("serialize");
    assert_eq!(json, "\"storm\"");
    let kind: ParticleKind = serde_json::from_str("\"cloud-blob\"").expect("deserialize");
    assert_eq!(kind, ParticleKind::CloudBlob);
}
