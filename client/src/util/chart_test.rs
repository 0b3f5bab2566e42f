use super::*;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// progress_chart
// =============================================================

#[test]
fn progress_chart_is_smoothed_filled_line() {
    let spec = progress_chart(&labels(&["Lun", "Mar"]), &[80.5, 80.1], "Poids", None);
    let set = &spec.config["data"]["datasets"][0];

    assert_eq!(spec.config["type"], "line");
    assert_eq!(set["label"], "Poids");
    assert_eq!(set["tension"], 0.4);
    assert_eq!(set["fill"], true);
    assert_eq!(set["borderColor"], PRIMARY);
    assert_eq!(set["pointBackgroundColor"], BACKGROUND);
    assert_eq!(spec.config["data"]["labels"][1], "Mar");
    assert_eq!(spec.gradient.as_deref(), Some(PRIMARY));
    assert_eq!(spec.tooltip, TooltipLabel::SeriesValue);
}

#[test]
fn progress_chart_options() {
    let spec = progress_chart(&[], &[], "Reps", Some(BLUE));
    let options = &spec.config["options"];

    assert_eq!(options["plugins"]["legend"]["display"], false);
    assert_eq!(options["interaction"]["mode"], "index");
    assert_eq!(options["scales"]["y"]["beginAtZero"], false);
    assert_eq!(options["plugins"]["tooltip"]["backgroundColor"], TOOLTIP_BG);
    assert_eq!(spec.config["data"]["datasets"][0]["pointHoverBackgroundColor"], BLUE);
}

// =============================================================
// activity_chart
// =============================================================

#[test]
fn activity_chart_bar_layout() {
    let spec = activity_chart(&labels(&["L", "M", "M"]), &[30.0, 45.0, 0.0]);
    let set = &spec.config["data"]["datasets"][0];

    assert_eq!(spec.config["type"], "bar");
    assert_eq!(set["label"], "Activité");
    assert_eq!(set["borderRadius"], 5);
    assert_eq!(set["barThickness"], 20);
    assert_eq!(set["backgroundColor"], PRIMARY);
    assert_eq!(spec.config["options"]["scales"]["y"]["beginAtZero"], true);
    assert_eq!(spec.gradient, None);
}

#[test]
fn tooltip_labels() {
    assert_eq!(TooltipLabel::Minutes.format("Activité", 45.0), "45 min");
    assert_eq!(TooltipLabel::SeriesValue.format("Poids", 80.5), "Poids: 80.5");
}

// =============================================================
// update_chart_data
// =============================================================

#[test]
fn update_replaces_data_and_labels_only() {
    let mut spec = progress_chart(&labels(&["a"]), &[1.0], "Poids", None);
    update_chart_data(&mut spec, &labels(&["x", "y"]), &[2.0, 3.0], None, None);

    let set = &spec.config["data"]["datasets"][0];
    assert_eq!(set["data"], json!([2.0, 3.0]));
    assert_eq!(set["label"], "Poids");
    assert_eq!(spec.config["data"]["labels"], json!(["x", "y"]));
    assert_eq!(spec.gradient.as_deref(), Some(PRIMARY));
}

#[test]
fn update_relabels_and_recolors() {
    let mut spec = progress_chart(&[], &[], "Poids", None);
    update_chart_data(&mut spec, &[], &[], Some("Squat"), Some(SECONDARY));

    let set = &spec.config["data"]["datasets"][0];
    assert_eq!(set["label"], "Squat");
    assert_eq!(set["borderColor"], SECONDARY);
    assert_eq!(set["pointBorderColor"], SECONDARY);
    assert_eq!(spec.gradient.as_deref(), Some(SECONDARY));
}

#[test]
fn update_without_datasets_is_noop() {
    let mut spec = ChartSpec { config: json!({ "type": "line" }), gradient: None, tooltip: TooltipLabel::Minutes };
    update_chart_data(&mut spec, &labels(&["x"]), &[1.0], Some("l"), Some(BLUE));
    assert_eq!(spec.config, json!({ "type": "line" }));
    assert_eq!(spec.gradient, None);
}

#[test]
fn gradient_fades_to_transparent() {
    let [top, bottom] = gradient_stops(PRIMARY);
    assert_eq!(top, (0.0, "rgba(204, 255, 0, 0.5)".to_owned()));
    assert_eq!(bottom, (1.0, "rgba(204, 255, 0, 0)".to_owned()));
}

#[test]
fn defaults_use_palette() {
    let defaults = chart_defaults();
    assert_eq!(defaults["color"], TEXT);
    assert_eq!(defaults["scale"]["grid"]["color"], GRID);
}
