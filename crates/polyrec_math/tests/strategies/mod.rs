use proptest::prelude::*;

/// Bases the decoder supports.
pub fn arb_base() -> impl Strategy<Value = u32> {
    2u32..=36
}

/// A base together with a non-empty digit string valid in that base.
pub fn arb_base_and_digits() -> impl Strategy<Value = (u32, String)> {
    arb_base().prop_flat_map(|base| {
        let digit = (0u32..base).prop_map(|d| {
            char::from_digit(d, 36).expect("digit below 36")
        });
        (
            Just(base),
            proptest::collection::vec(digit, 1..12)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
        )
    })
}

/// Coefficient vectors small enough that interpolation stays well inside
/// f64 range for x = 1..K.
pub fn arb_coefficients() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100.0f64..100.0, 1..=7)
}
