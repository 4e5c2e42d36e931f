use super::*;

#[test]
fn parses_plain_and_padded_numbers() {
    assert_eq!("42".parse::<AqiReading>().expect("42").value(), 42.0);
    assert_eq!(" 87.5 ".parse::<AqiReading>().expect("87.5").value(), 87.5);
    assert_eq!("0".parse::<AqiReading>().expect("0").value(), 0.0);
}

#[test]
fn rejects_empty_and_whitespace_input() {
    let err = "".parse::<AqiReading>().expect_err("empty");
    assert_eq!(err.reason, InvalidReason::Empty);

    let err = "   ".parse::<AqiReading>().expect_err("blank");
    assert_eq!(err.reason, InvalidReason::Empty);
    assert_eq!(err.input, "   ");
}

#[test]
fn rejects_non_numeric_negative_and_infinite_input() {
    assert_eq!(
        "abc".parse::<AqiReading>().expect_err("abc").reason,
        InvalidReason::NotANumber
    );
    assert_eq!(
        "NaN".parse::<AqiReading>().expect_err("nan").reason,
        InvalidReason::NotANumber
    );
    assert_eq!(
        "-5".parse::<AqiReading>().expect_err("negative").reason,
        InvalidReason::Negative
    );
    assert_eq!(
        "inf".parse::<AqiReading>().expect_err("inf").reason,
        InvalidReason::NotFinite
    );
}

#[test]
fn negative_zero_is_accepted_as_zero() {
    let reading = "-0".parse::<AqiReading>().expect("negative zero");
    assert_eq!(reading.to_string(), "0");
}

#[test]
fn readings_render_without_trailing_fraction() {
    assert_eq!(AqiReading::new(75.0).expect("75").to_string(), "75");
    assert_eq!(AqiReading::new(50.5).expect("50.5").to_string(), "50.5");
}

#[test]
fn invalid_reading_displays_the_user_notice() {
    let err = InvalidReading::new("abc", InvalidReason::NotANumber);
    assert_eq!(err.to_string(), crate::error::INVALID_READING_NOTICE);
}

#[test]
fn band_bounds_ascend_and_only_hazardous_is_open() {
    let bounds: Vec<Option<f64>> = AqiCategory::ALL.iter().map(|c| c.upper_bound()).collect();
    assert_eq!(
        bounds,
        vec![
            Some(50.0),
            Some(100.0),
            Some(150.0),
            Some(200.0),
            Some(300.0),
            None
        ]
    );
}

#[test]
fn every_band_carries_its_label_color_and_advisory() {
    let expected = [
        (
            "Good",
            "#00A65A",
            "green",
            "Air quality is good. Enjoy outdoor activities.",
        ),
        (
            "Moderate",
            "#F1C40F",
            "yellow",
            "Moderate air quality. Sensitive individuals should consider limiting prolonged outdoor exertion.",
        ),
        (
            "Unhealthy for Sensitive Groups",
            "#F39C12",
            "orange",
            "Members of sensitive groups may experience health effects. Reduce prolonged or heavy exertion outdoors.",
        ),
        (
            "Unhealthy",
            "#E74C3C",
            "red",
            "Everyone may begin to experience health effects. Limit outdoor activities; consider wearing a mask.",
        ),
        (
            "Very Unhealthy",
            "#8E44AD",
            "purple",
            "Serious health effects possible. Avoid outdoor exertion. Use air purifiers indoors if available.",
        ),
        (
            "Hazardous",
            "#6B1F1F",
            "maroon",
            "Health alert: everyone may experience more serious effects. Stay indoors and use a well-fitted mask if you must go out.",
        ),
    ];
    assert_eq!(AqiCategory::ALL.len(), expected.len());
    for (category, (label, hex, color_name, advisory)) in AqiCategory::ALL.into_iter().zip(expected) {
        assert_eq!(category.label(), label);
        assert_eq!(category.color().hex(), hex, "{label}");
        assert_eq!(category.color_name(), color_name, "{label}");
        assert_eq!(category.advisory(), advisory, "{label}");

        let info = category.info();
        assert_eq!(info.category, category);
        assert_eq!(info.color, category.color());
        assert_eq!(info.advisory, advisory);
    }
}

#[test]
fn tip_catalog_holds_the_eight_sentences_in_order() {
    assert_eq!(
        TIP_CATALOG,
        [
            "Use public transportation or carpool when possible.",
            "Avoid idling your vehicle and maintain proper tire pressure.",
            "Choose walking or cycling for short trips.",
            "Reduce energy consumption at home; switch to LED bulbs.",
            "Avoid burning trash or leaves; compost instead.",
            "Plant trees and maintain indoor plants to improve air quality.",
            "Refuel vehicles in the evening to reduce ozone formation.",
            "Work from home when possible to reduce commuting emissions.",
        ]
    );
}

#[test]
fn tip_indices_wrap_onto_the_catalog() {
    assert_eq!(Tip::wrapping(TIP_CATALOG.len()).index(), 0);
    let tip = Tip::wrapping(TIP_CATALOG.len() + 2);
    assert_eq!(tip.index(), 2);
    assert_eq!(tip.text(), "Choose walking or cycling for short trips.");
    assert_eq!(
        serde_json::to_string(&tip).expect("json"),
        "\"Choose walking or cycling for short trips.\""
    );
}

#[test]
fn category_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&AqiCategory::UnhealthyForSensitiveGroups).expect("json"),
        "\"unhealthy_for_sensitive_groups\""
    );
}
