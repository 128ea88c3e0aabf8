//! End-to-end walk over the public API: program text in, renderable
//! availability payload and bakeable query strings out.

use choicematrix::{
    from_query_str, required_chart_ids, ChoiceKind, DecisionMatrix, ExplorerProgram,
};
use choicematrix_test::{
    COVID_STYLE_CHART_IDS, COVID_STYLE_MATRIX, DEVICE_PROGRAM, EMISSIONS_MATRIX,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn program_to_matrix_to_selected_chart() {
    init_tracing();
    let program = ExplorerProgram::new("devices", DEVICE_PROGRAM);
    assert_eq!(program.title(), Some("Data Explorer"));
    assert_eq!(program.required_chart_ids(), [35, 46]);

    let mut matrix = DecisionMatrix::parse(program.decision_matrix_code().unwrap()).unwrap();
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 35);
    assert!(matrix.set_value("Device", "Mobile"));
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 46);
}

#[test]
fn prefetch_ids_match_the_parsed_table() {
    init_tracing();
    assert_eq!(required_chart_ids(COVID_STYLE_MATRIX), COVID_STYLE_CHART_IDS);

    let matrix = DecisionMatrix::parse(COVID_STYLE_MATRIX).unwrap();
    let parsed_ids: Vec<i64> =
        matrix.table().rows().iter().map(|row| row.chart_id()).collect();
    assert_eq!(parsed_ids, COVID_STYLE_CHART_IDS);
}

#[test]
fn availability_payload_serializes_for_the_frontend() {
    init_tracing();
    let mut matrix = DecisionMatrix::parse(EMISSIONS_MATRIX).unwrap();
    matrix.set_value("Gas", "GHGs");

    let choices = matrix.choices_with_availability();
    assert_eq!(choices[0].kind, ChoiceKind::Radio);

    let json = serde_json::to_value(&choices).unwrap();
    assert_eq!(json[0]["name"], "Gas");
    assert_eq!(json[0]["kind"], "radio");
    assert_eq!(json[1]["value"], "Production-based");
    assert_eq!(json[1]["options"][0]["checked"], true);
    assert_eq!(json[1]["options"][1]["available"], false);
}

#[test]
fn unavailable_groups_serialize_as_null_keys() {
    init_tracing();
    let mut matrix = DecisionMatrix::parse(COVID_STYLE_MATRIX).unwrap();
    matrix.set_value("country", "france");

    let constrained = matrix.to_constrained_options();
    let json = serde_json::to_value(&constrained).unwrap();
    assert_eq!(json["indicator"], "Life expectancy");
    assert!(json["interval"].is_null());
    assert!(json["perCapita"].is_null());
    assert!(json.as_object().unwrap().contains_key("perCapita"));
}

#[test]
fn baked_query_strings_round_trip() {
    init_tracing();
    let matrix = DecisionMatrix::parse(COVID_STYLE_MATRIX).unwrap();
    let all = matrix.all_options_as_query_strings();
    assert_eq!(all.len(), matrix.table().rows().len());

    for (query, row) in all.iter().zip(matrix.table().rows()) {
        for (group, value) in from_query_str(query) {
            assert_eq!(row.value(&group), Some(value.as_str()));
        }
    }
}
