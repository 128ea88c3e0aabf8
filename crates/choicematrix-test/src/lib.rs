//! Shared fixtures for ChoiceMatrix tests.
//!
//! Matrix sources modelled on real explorer pages, small enough to reason
//! about by hand. Keep these stable: the behavioral tests pin exact chart
//! ids and option orders against them.

/// Seven-row CSV matrix with four choice groups and plenty of blank
/// (wildcard) cells.
pub const COVID_STYLE_MATRIX: &str = "\
chartId,country Radio,indicator Radio,interval Radio,perCapita Radio
21,usa,GDP,annual,false
24,usa,GDP,annual,Per million
26,usa,GDP,monthly,
29,usa,Life expectancy,,
33,france,Life expectancy,,
55,spain,GDP,,false
56,spain,GDP,,Per million";

/// Three-row CSV matrix where pivoting the first group leaves a single
/// compatible option in the second.
pub const EMISSIONS_MATRIX: &str = "\
chartId,Gas Radio,Accounting Radio
488,CO₂,Production-based
4331,CO₂,Consumption-based
4147,GHGs,Production-based";

/// A minimal explorer program: one statement, one switcher block with an
/// interior blank line.
pub const DEVICE_PROGRAM: &str =
    "title\tData Explorer\nswitcher\n\tchartId\tDevice Radio\n\t35\tInternet\n\n\t46\tMobile";

/// Chart ids of [`COVID_STYLE_MATRIX`], in row order.
pub const COVID_STYLE_CHART_IDS: [i64; 7] = [21, 24, 26, 29, 33, 55, 56];
