use super::*;

parameterized_test! {can_compare_floats, (left, right, expected), {
    assert_eq!(compare_floats(left, right), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_infinity: (Float::INFINITY, 1E10, Ordering::Greater),
    case05_nan_left: (Float::NAN, 1., Ordering::Greater),
    case06_nan_right: (1., Float::NAN, Ordering::Less),
    case07_nan_both: (Float::NAN, Float::NAN, Ordering::Equal),
}
