use super::*;

fn dataset(spec: &ChartSpec) -> &serde_json::Value {
    &spec.config["data"]["datasets"][0]
}

#[test]
fn every_range_has_matching_labels_and_samples() {
    for range in Range::ALL {
        let (labels, data) = range.weight_series();
        assert_eq!(labels.len(), data.len(), "{range:?}");
        assert!(!labels.is_empty());
    }
}

#[test]
fn default_range_is_month() {
    assert_eq!(Range::default(), Range::Month);
    assert_eq!(weight_chart(Range::Month).config["data"]["labels"][0], "S1");
}

#[test]
fn switching_range_replaces_data() {
    let mut spec = weight_chart(Range::Month);
    switch_range(&mut spec, Range::Week);
    assert_eq!(spec.config["data"]["labels"].as_array().map(Vec::len), Some(7));
    assert_eq!(dataset(&spec)["label"], "Poids (kg)");
}

#[test]
fn year_range_recolors_the_series() {
    let mut spec = weight_chart(Range::Month);
    switch_range(&mut spec, Range::Year);
    assert_eq!(dataset(&spec)["borderColor"], BLUE);
    assert_eq!(spec.gradient.as_deref(), Some(BLUE));
}

#[test]
fn activity_chart_covers_the_week() {
    let spec = week_activity_chart();
    assert_eq!(spec.config["type"], "bar");
    assert_eq!(dataset(&spec)["data"].as_array().map(Vec::len), Some(7));
}
