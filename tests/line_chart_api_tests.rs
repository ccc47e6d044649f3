use std::cell::RefCell;
use std::rc::Rc;

use chartable::api::{Invalidation, LineChart, LineChartConfig, WidgetEvent};
use chartable::core::Dimension;
use chartable::render::{MarkupRenderer, NullRenderer, to_markup};

fn recorder(chart: &mut LineChart) -> Rc<RefCell<Vec<WidgetEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    chart.add_observer(move |event| sink.borrow_mut().push(event));
    events
}

#[test]
fn default_config_matches_documented_props() {
    let config = LineChartConfig::default();

    assert_eq!(config.width.get(), 100.0);
    assert_eq!(config.height.get(), 50.0);
    assert_eq!(config.fill, "none");
    assert_eq!(config.stroke, "#000000");
    assert!(config.data.is_empty());
}

#[test]
fn json_config_accepts_string_dimensions_and_fills_defaults() {
    let config = LineChartConfig::from_json_str(r#"{"width":"120","height":40,"data":[1,2]}"#)
        .expect("config");

    assert_eq!(config.width.get(), 120.0);
    assert_eq!(config.height.get(), 40.0);
    assert_eq!(config.fill, "none");
    assert_eq!(config.data, vec![1.0, 2.0]);
}

#[test]
fn json_config_rejects_undersized_surface() {
    assert!(LineChartConfig::from_json_str(r#"{"width":"8"}"#).is_err());
    assert!(LineChartConfig::from_json_str(r#"{"height":0}"#).is_err());
}

#[test]
fn render_emits_container_surface_and_path() {
    let config = LineChartConfig::default().with_data(vec![0.0, 10.0, 5.0]);
    let chart = LineChart::new(config).expect("chart");

    let tree = chart.render();
    assert_eq!(
        to_markup(&tree),
        "<div class=\"line\"><svg width=\"100\" height=\"50\"><g>\
         <path fill=\"none\" stroke=\"#000000\" d=\"M0,0L50,50L100,25\"></path>\
         </g></svg></div>"
    );
}

#[test]
fn empty_series_renders_path_without_data() {
    let chart = LineChart::new(LineChartConfig::default()).expect("chart");

    let tree = chart.render();
    let path = tree.find_first("path").expect("path element");
    assert_eq!(path.attr("d"), None);
    assert_eq!(path.attr("stroke"), Some("#000000"));
}

#[test]
fn set_data_recomputes_path_and_requests_full_redraw() {
    let mut chart = LineChart::new(LineChartConfig::default()).expect("chart");
    let events = recorder(&mut chart);

    let level = chart.set_data(vec![2.0, 4.0]).expect("set data");

    assert_eq!(level, Invalidation::Full);
    assert_eq!(chart.path_data().as_deref(), Some("M0,25L100,50"));
    assert_eq!(
        *events.borrow(),
        vec![
            WidgetEvent::DataUpdated { len: 2 },
            WidgetEvent::RedrawRequested(Invalidation::Full),
        ]
    );
}

#[test]
fn rejected_data_keeps_previous_series() {
    let config = LineChartConfig::default().with_data(vec![1.0, 2.0]);
    let mut chart = LineChart::new(config).expect("chart");
    let events = recorder(&mut chart);

    assert!(chart.set_data(vec![1.0, f64::NAN]).is_err());
    assert_eq!(chart.data(), &[1.0, 2.0]);
    assert!(events.borrow().is_empty());
}

#[test]
fn attribute_updates_only_request_attribute_redraw() {
    let mut chart = LineChart::new(LineChartConfig::default()).expect("chart");
    let events = recorder(&mut chart);

    assert_eq!(chart.set_stroke("#ff0000"), Invalidation::Attributes);
    assert_eq!(chart.set_stroke("#ff0000"), Invalidation::None);
    assert_eq!(chart.set_fill("steelblue"), Invalidation::Attributes);

    assert_eq!(
        *events.borrow(),
        vec![
            WidgetEvent::AttributesChanged,
            WidgetEvent::RedrawRequested(Invalidation::Attributes),
            WidgetEvent::AttributesChanged,
            WidgetEvent::RedrawRequested(Invalidation::Attributes),
        ]
    );

    let tree = chart.render();
    let path = tree.find_first("path").expect("path");
    assert_eq!(path.attr("fill"), Some("steelblue"));
    assert_eq!(path.attr("stroke"), Some("#ff0000"));
}

#[test]
fn empty_fill_is_not_applied_to_path() {
    let mut chart = LineChart::new(LineChartConfig::default()).expect("chart");
    chart.set_fill("");

    let tree = chart.render();
    let path = tree.find_first("path").expect("path");
    assert_eq!(path.attr("fill"), None);
}

#[test]
fn width_change_reprojects_path_against_new_range() {
    let config = LineChartConfig::default().with_data(vec![0.0, 10.0, 5.0]);
    let mut chart = LineChart::new(config).expect("chart");

    let width = Dimension::new(200.0, "width").expect("width");
    assert_eq!(chart.set_width(width).expect("resize"), Invalidation::Attributes);

    assert_eq!(chart.path_data().as_deref(), Some("M0,0L100,50L200,25"));
    let tree = chart.render();
    assert_eq!(tree.find_first("svg").and_then(|svg| svg.attr("width")), Some("200"));
}

#[test]
fn height_change_caches_reprojected_path() {
    let config = LineChartConfig::default().with_data(vec![0.0, 10.0, 5.0]);
    let mut chart = LineChart::new(config).expect("chart");
    let events = recorder(&mut chart);

    let height = Dimension::new(100.0, "height").expect("height");
    assert_eq!(chart.set_height(height).expect("resize"), Invalidation::Attributes);
    assert_eq!(chart.set_height(height).expect("resize"), Invalidation::None);

    assert_eq!(chart.path().len(), 3);
    assert_eq!(chart.path().vertices[1].y, 100.0);
    assert_eq!(chart.path_data().as_deref(), Some("M0,0L50,100L100,50"));
    assert_eq!(
        *events.borrow(),
        vec![
            WidgetEvent::AttributesChanged,
            WidgetEvent::RedrawRequested(Invalidation::Attributes),
        ]
    );
}

#[test]
fn overflowing_data_span_is_rejected() {
    let config = LineChartConfig::default().with_data(vec![1.0, 2.0]);
    let mut chart = LineChart::new(config).expect("chart");

    assert!(chart.set_data(vec![f64::MAX, -f64::MAX]).is_err());
    assert_eq!(chart.data(), &[1.0, 2.0]);
    assert_eq!(chart.path_data().as_deref(), Some("M0,25L100,50"));
}

#[test]
fn invalid_raw_dimension_keeps_prior_value() {
    let mut chart = LineChart::new(LineChartConfig::default()).expect("chart");

    assert!(chart.set_width_raw("5").is_err());
    assert!(chart.set_height_raw("tall").is_err());
    assert_eq!(chart.size().width(), 100.0);
    assert_eq!(chart.size().height(), 50.0);

    assert_eq!(
        chart.set_height_raw("80px").expect("valid height"),
        Invalidation::Attributes
    );
    assert_eq!(chart.size().height(), 80.0);
}

#[test]
fn renderers_receive_validated_tree() {
    let config = LineChartConfig::default().with_data(vec![1.0, 3.0]);
    let chart = LineChart::new(config).expect("chart");

    let mut null = NullRenderer::default();
    chart.draw(&mut null).expect("null draw");
    assert_eq!(null.last_node_count, 4);
    assert_eq!(null.render_count, 1);

    let mut markup = MarkupRenderer::default();
    chart.draw(&mut markup).expect("markup draw");
    assert!(markup.last_markup.starts_with("<div class=\"line\">"));
}
