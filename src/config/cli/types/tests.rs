//! Tests for CLI value types.

use super::*;
use serde_json::json;

#[test]
fn test_output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().expect("parsing should succeed"), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().expect("parsing should succeed"), OutputFormat::Json);
    assert_eq!("yml".parse::<OutputFormat>().expect("parsing should succeed"), OutputFormat::Yaml);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_metric_arg_json_value() {
    let metric: MetricArg = "accuracy=0.93".parse().expect("parsing should succeed");
    assert_eq!(metric.key, "accuracy");
    assert_eq!(metric.value, json!(0.93));

    let metric: MetricArg = "layers=[1,2]".parse().expect("parsing should succeed");
    assert_eq!(metric.value, json!([1, 2]));
}

#[test]
fn test_metric_arg_string_fallback() {
    let metric: MetricArg = "dataset=imdb".parse().expect("parsing should succeed");
    assert_eq!(metric.value, json!("imdb"));
}

#[test]
fn test_metric_arg_value_may_contain_equals() {
    let metric: MetricArg = "note=a=b".parse().expect("parsing should succeed");
    assert_eq!(metric.key, "note");
    assert_eq!(metric.value, json!("a=b"));
}

#[test]
fn test_metric_arg_invalid() {
    assert!("accuracy".parse::<MetricArg>().is_err());
    assert!("=0.5".parse::<MetricArg>().is_err());
}
