use super::*;

fn category_of(aqi: f64) -> AqiCategory {
    classify(aqi).expect("classified").category
}

#[test]
fn good_band_covers_zero_through_fifty() {
    for aqi in [0.0, 0.5, 12.0, 49.99, 50.0] {
        assert_eq!(category_of(aqi), AqiCategory::Good, "aqi={aqi}");
    }
}

#[test]
fn boundary_values_belong_to_the_lower_band() {
    let cases = [
        (50.0, AqiCategory::Good),
        (50.5, AqiCategory::Moderate),
        (51.0, AqiCategory::Moderate),
        (100.0, AqiCategory::Moderate),
        (101.0, AqiCategory::UnhealthyForSensitiveGroups),
        (150.0, AqiCategory::UnhealthyForSensitiveGroups),
        (151.0, AqiCategory::Unhealthy),
        (200.0, AqiCategory::Unhealthy),
        (201.0, AqiCategory::VeryUnhealthy),
        (300.0, AqiCategory::VeryUnhealthy),
        (301.0, AqiCategory::Hazardous),
        (300.0001, AqiCategory::Hazardous),
        (5000.0, AqiCategory::Hazardous),
    ];
    for (aqi, expected) in cases {
        assert_eq!(category_of(aqi), expected, "aqi={aqi}");
    }
}

#[test]
fn unclassifiable_inputs_yield_none() {
    assert!(classify(-1.0).is_none());
    assert!(classify(-0.0001).is_none());
    assert!(classify(f64::NAN).is_none());
    assert!(classify_input("").is_none());
    assert!(classify_input("   ").is_none());
    assert!(classify_input("abc").is_none());
    assert!(classify_input("-3").is_none());
}

#[test]
fn text_input_is_classified_like_numbers() {
    assert_eq!(classify_input("75"), classify(75.0));
    assert_eq!(
        classify_input(" 301 ").map(|info| info.category),
        Some(AqiCategory::Hazardous)
    );
}

#[test]
fn moderate_reading_carries_yellow_and_its_advisory() {
    let info = classify(75.0).expect("moderate");
    assert_eq!(info.category.label(), "Moderate");
    assert_eq!(info.color_name, "yellow");
    assert_eq!(info.color.hex(), "#F1C40F");
    assert_eq!(
        info.advisory,
        "Moderate air quality. Sensitive individuals should consider limiting prolonged outdoor exertion."
    );
}

#[test]
fn classification_is_repeatable() {
    let first = classify(180.0);
    for _ in 0..5 {
        assert_eq!(classify(180.0), first);
    }
}

#[test]
fn validated_readings_use_the_same_bands() {
    let reading = AqiReading::new(150.0).expect("reading");
    assert_eq!(category_for(reading), AqiCategory::UnhealthyForSensitiveGroups);
}

#[test]
fn classified_reading_carries_the_band_payload() {
    let unhealthy = classify(175.0).expect("unhealthy");
    assert_eq!(unhealthy.color.hex(), "#E74C3C");
    assert_eq!(
        unhealthy.advisory,
        "Everyone may begin to experience health effects. Limit outdoor activities; consider wearing a mask."
    );

    let very_unhealthy = classify(250.0).expect("very unhealthy");
    assert_eq!(very_unhealthy.color.hex(), "#8E44AD");
    assert_eq!(very_unhealthy.color_name, "purple");
    assert_eq!(
        very_unhealthy.advisory,
        "Serious health effects possible. Avoid outdoor exertion. Use air purifiers indoors if available."
    );
}
