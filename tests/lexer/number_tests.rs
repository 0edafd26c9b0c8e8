// Value classification test cases
//
// Selector values are emitted bare when they parse as a 64-bit float and
// quoted otherwise. These cases cover:
// - Integers and decimals
// - Scientific notation
// - Hexadecimal floats
// - Special values
// - Digit separators
// - Zero with an exponent far out of range
// - Near misses that must stay quoted

/// Values classified as numbers
/// Format: (input, expected_value)
pub const NUMERIC_VALUES: &[(&str, f64)] = &[
    // Integers
    ("0", 0.0),
    ("1", 1.0),
    ("42", 42.0),
    ("-7", -7.0),
    ("+7", 7.0),
    // Leading zeros stay decimal
    ("007", 7.0),
    // Decimals
    ("1.5", 1.5),
    (".5", 0.5),
    ("5.", 5.0),
    ("-0.25", -0.25),
    // Scientific notation
    ("1e3", 1000.0),
    ("1E3", 1000.0),
    ("2.5e-3", 0.0025),
    ("1.e2", 100.0),
    // Hexadecimal floats
    ("0x1p4", 16.0),
    ("0x1.8p1", 3.0),
    ("-0X2P-1", -1.0),
    // Digit separators
    ("1_000", 1000.0),
    ("2_500.5", 2500.5),
    ("0x_1_2p3", 144.0),
    // Zero never overflows
    ("0e3000", 0.0),
    ("0x0p3000", 0.0),
    ("0x0.0p5000", 0.0),
];

/// Special float values, also classified as numbers
pub const SPECIAL_VALUES: &[&str] = &["Inf", "+inf", "-Inf", "infinity", "-Infinity", "NaN", "nan"];

/// Values classified as text
pub const TEXT_VALUES: &[&str] = &[
    "",
    "api",
    "prod-1",
    "1.2.3",
    "10%",
    "1,000",
    "1_",
    "1__0",
    "_1",
    "1_.5",
    " 1",
    "1 ",
    "e10",
    "1e",
    "--1",
    "0x1F",
    "0x",
    "-nan",
    "info",
    // Out of range
    "1e400",
    "-1e309",
    "0x1p3000",
];
