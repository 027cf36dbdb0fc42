use serde_json::json;

use freezetable::state::data_model::TableData;
use freezetable::state::framer::{self, capitalize_words, frozen_width, transform_header_key};
use freezetable::state::table_config::HeaderCase;

fn five_rows() -> TableData {
    serde_json::from_value(json!([
        {"exercise": "squats", "set Count": "3"},
        {"exercise": "lunges", "set Count": "4"},
        {"exercise": "plank", "set Count": "2"},
        {"exercise": "burpees", "set Count": "5"},
        {"exercise": "crunches", "set Count": "3"},
    ]))
    .unwrap()
}

fn columns() -> Vec<String> {
    vec!["exercise".to_string(), "set Count".to_string()]
}

fn case(capitalize_words: bool, uppercase: bool) -> HeaderCase {
    HeaderCase {
        capitalize_words,
        uppercase,
    }
}

#[test]
fn test_header_case_composition() {
    assert_eq!(transform_header_key("set Count", case(true, true)), "SET COUNT");
    assert_eq!(transform_header_key("set Count", case(true, false)), "Set Count");
    assert_eq!(transform_header_key("set Count", case(false, true)), "SET COUNT");
    assert_eq!(transform_header_key("set Count", case(false, false)), "set Count");
}

#[test]
fn test_capitalize_words_keeps_inner_case_and_spacing() {
    assert_eq!(capitalize_words("reps per  set"), "Reps Per  Set");
    assert_eq!(capitalize_words(" leading space"), " Leading Space");
    assert_eq!(capitalize_words("mIxed"), "MIxed");
    assert_eq!(capitalize_words(""), "");
}

#[test]
fn test_header_frame_row_count_matches_freeze_header_num() {
    let data = five_rows();
    for n in 1..=data.len() {
        let frame = framer::frame(&data, &columns(), n, HeaderCase::default(), "");
        assert_eq!(frame.header_rows.len(), n);
        assert_eq!(frame.body_rows.len(), data.len() - (n - 1));
    }
}

#[test]
fn test_first_header_row_synthesized_from_keys() {
    let frame = framer::frame(&five_rows(), &columns(), 1, case(true, false), "count");
    let header = &frame.header_rows[0];
    assert_eq!(header.label, "count");
    assert_eq!(header.values, vec!["Exercise", "Set Count"]);
    assert_eq!(header.source_index, None);
}

#[test]
fn test_extra_header_rows_take_leading_data_rows() {
    let frame = framer::frame(&five_rows(), &columns(), 3, HeaderCase::default(), "");
    assert_eq!(frame.header_rows[1].label, "1");
    assert_eq!(frame.header_rows[1].values, vec!["squats", "3"]);
    assert_eq!(frame.header_rows[2].label, "2");
    assert_eq!(frame.header_rows[2].values, vec!["lunges", "4"]);
}

#[test]
fn test_body_rows_keep_original_index() {
    let frame = framer::frame(&five_rows(), &columns(), 2, HeaderCase::default(), "");
    let labels: Vec<&str> = frame.body_rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["2", "3", "4", "5"]);
    assert_eq!(frame.body_rows[0].values, vec!["lunges", "4"]);
    assert_eq!(frame.body_rows[0].source_index, Some(1));
}

#[test]
fn test_body_row_cells_start_with_label() {
    let frame = framer::frame(&five_rows(), &columns(), 1, HeaderCase::default(), "");
    let cells: Vec<&str> = frame.body_rows[4].cells().collect();
    assert_eq!(cells, vec!["5", "crunches", "3"]);
}

#[test]
fn test_non_string_values_are_displayed() {
    let data: TableData =
        serde_json::from_value(json!([{"a": 1, "b": true, "c": null}])).unwrap();
    let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let frame = framer::frame(&data, &columns, 1, HeaderCase::default(), "");
    assert_eq!(frame.body_rows[0].values, vec!["1", "true", ""]);
}

#[test]
fn test_frozen_width_accumulates_leading_widths() {
    let widths = [100.0, 175.0, 175.0, 275.0];
    assert_eq!(frozen_width(&widths, 1), 100.0);
    assert_eq!(frozen_width(&widths, 2), 275.0);
    assert_eq!(frozen_width(&widths, 10), 725.0);
}
