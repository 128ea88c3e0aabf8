use choicematrix_test::{COVID_STYLE_MATRIX as COVID_STYLE, EMISSIONS_MATRIX as EMISSIONS};

use crate::matrix::DecisionMatrix;
use crate::MatrixError;

#[test]
fn starts_with_the_first_row_selected() {
    let matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 21);
    assert_eq!(matrix.selection().get("country").unwrap(), "usa");
    assert_eq!(matrix.selection().get("indicator").unwrap(), "GDP");
}

#[test]
fn enumerates_one_query_string_per_row() {
    let matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    let all = matrix.all_options_as_query_strings();
    assert_eq!(all.len(), 7);
    assert_eq!(all[0], "country=usa&indicator=GDP&interval=annual&perCapita=false");
    // Blank cells drop out of the row's query string.
    assert_eq!(all[4], "country=france&indicator=Life%20expectancy");
}

#[test]
fn detects_unavailable_options_after_a_pivot() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    assert!(matrix.set_value("country", "france"));

    assert!(!matrix.is_option_available("indicator", "GDP"));
    assert!(matrix.is_option_available("country", "france"));
    assert!(!matrix.is_option_available("interval", "annual"));
    assert!(!matrix.is_option_available("interval", "monthly"));

    let constrained = matrix.to_constrained_options();
    assert_eq!(constrained.get("indicator").unwrap().as_deref(), Some("Life expectancy"));
    assert_eq!(constrained.get("perCapita").unwrap(), &None);
    assert_eq!(constrained.get("interval").unwrap(), &None);

    // The raw selection keeps the stale values; only the resolved view moves.
    assert_eq!(matrix.selection().get("perCapita").unwrap(), "false");
    assert_eq!(matrix.selection().get("interval").unwrap(), "annual");
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 33);
}

#[test]
fn reopens_boolean_options_when_the_prefix_changes() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    matrix.set_value("country", "france");
    assert!(!matrix.is_option_available("perCapita", "false"));

    matrix.set_value("country", "usa");
    matrix.set_value("perCapita", "Per million");
    assert!(matrix.is_option_available("perCapita", "false"));
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 24);
}

#[test]
fn later_groups_see_blank_cells_as_wildcards() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    matrix.set_value("country", "usa");
    matrix.set_value("perCapita", "Per million");
    matrix.set_value("country", "spain");

    assert!(matrix.is_option_available("perCapita", "false"));
    assert!(matrix.is_option_available("perCapita", "Per million"));
    // The queried column itself must match exactly; spain rows leave the
    // interval blank, so no interval option is on offer.
    assert!(!matrix.is_option_available("interval", "annual"));
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 56);
}

#[test]
fn group_resolves_to_none_when_its_value_dies() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    matrix.set_value("country", "usa");
    matrix.set_value("indicator", "GDP");
    matrix.set_value("interval", "annual");
    assert_eq!(
        matrix.choices_with_availability()[2].value.as_deref(),
        Some("annual")
    );

    matrix.set_value("country", "spain");
    assert_eq!(matrix.choices_with_availability()[2].value, None);
}

#[test]
fn sole_surviving_option_becomes_checked() {
    let mut matrix = DecisionMatrix::parse(EMISSIONS).unwrap();
    matrix.set_value("Gas", "CO₂");
    matrix.set_value("Accounting", "Consumption-based");
    matrix.set_value("Gas", "GHGs");

    assert_eq!(matrix.selected_row().unwrap().chart_id(), 4147);
    assert_eq!(
        matrix.to_constrained_options().get("Accounting").unwrap().as_deref(),
        Some("Production-based")
    );

    let accounting = &matrix.choices_with_availability()[1];
    assert_eq!(accounting.value.as_deref(), Some("Production-based"));
    assert_eq!(accounting.options[0].value, "Production-based");
    assert!(accounting.options[0].checked);
    assert!(!accounting.options[1].checked);
}

#[test]
fn forced_group_is_always_available_and_checked() {
    let mut matrix = DecisionMatrix::parse(
        "chartId,country Radio,source Radio\n1,usa,WHO\n2,france,WHO\n3,spain,",
    )
    .unwrap();
    for country in ["usa", "france", "spain"] {
        matrix.set_value("country", country);
        let source = matrix
            .choices_with_availability()
            .into_iter()
            .find(|choice| choice.name == "source")
            .unwrap();
        assert!(matrix.is_option_available("source", "WHO"));
        assert!(source.options[0].available);
        assert!(source.options[0].checked);
    }
}

#[test]
fn rejects_values_never_observed() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    assert!(!matrix.set_value("country", "germany"));
    assert!(!matrix.set_value("continent", "europe"));
    assert_eq!(matrix.selection().get("country").unwrap(), "usa");
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 21);
}

#[test]
fn unavailable_group_serializes_as_none_not_a_panic() {
    let mut matrix = DecisionMatrix::parse(COVID_STYLE).unwrap();
    matrix.set_value("country", "france");
    // perCapita has live options elsewhere in the table, but none under
    // country=france; the key stays present with a None value.
    let constrained = matrix.to_constrained_options();
    assert!(constrained.contains_key("perCapita"));
    assert_eq!(constrained.get("perCapita").unwrap(), &None);
}

#[test]
fn missing_id_column_fails_construction() {
    let err = DecisionMatrix::parse("country Radio,indicator Radio\nusa,GDP\nfrance,Life expectancy")
        .unwrap_err();
    assert!(matches!(err, MatrixError::MissingIdColumn));
}

#[test]
fn handles_columns_without_options() {
    let matrix =
        DecisionMatrix::parse("chartId,country Radio,indicator Radio\n123,usa,\n32,usa,\n23,france,")
            .unwrap();
    assert_eq!(matrix.selected_row().unwrap().chart_id(), 123);
    let choices = matrix.choices_with_availability();
    assert_eq!(choices.len(), 2);
    assert!(choices[1].options.is_empty());
    assert_eq!(choices[1].value, None);
}

#[test]
fn empty_text_yields_no_choices_and_no_row() {
    let matrix = DecisionMatrix::parse("").unwrap();
    assert!(matrix.choices_with_availability().is_empty());
    assert!(matrix.selected_row().is_none());
    assert!(matrix.all_options_as_query_strings().is_empty());
}

#[test]
fn selection_query_str_uses_header_order() {
    let mut matrix = DecisionMatrix::parse(EMISSIONS).unwrap();
    matrix.set_value("Gas", "GHGs");
    assert_eq!(
        matrix.selection_as_query_str(),
        "Gas=GHGs&Accounting=Production-based"
    );
}

#[test]
fn selection_query_str_ignores_set_order() {
    // The first row leaves interval blank, so it enters the selection only
    // via the later set_value; the serialized pairs must still come out in
    // header order, not click order.
    let mut matrix = DecisionMatrix::parse(
        "chartId,interval Radio,metric Radio\n1,,Cases\n2,weekly,Cases",
    )
    .unwrap();
    assert_eq!(matrix.selection_as_query_str(), "metric=Cases");

    assert!(matrix.set_value("interval", "weekly"));
    assert_eq!(matrix.selection_as_query_str(), "interval=weekly&metric=Cases");
}

#[test]
fn parsing_twice_gives_identical_answers() {
    let mut first = DecisionMatrix::parse(COVID_STYLE).unwrap();
    let mut second = DecisionMatrix::parse(COVID_STYLE).unwrap();
    for matrix in [&mut first, &mut second] {
        matrix.set_value("country", "spain");
    }
    assert_eq!(
        first.selected_row().unwrap().chart_id(),
        second.selected_row().unwrap().chart_id()
    );
    assert_eq!(first.to_constrained_options(), second.to_constrained_options());
    assert_eq!(first.all_options_as_query_strings(), second.all_options_as_query_strings());
}
