use exprcalc::{get_result, interpreter::evaluator::core::Context};
use proptest::prelude::*;

fn eval(src: &str) -> f64 {
    get_result(src, &Context::new()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                                     .result
}

proptest! {
    #[test]
    fn integer_arithmetic_matches_rust(a in 0u16..1000, b in 0u16..1000, c in 1u16..1000) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(eval(&format!("{a} + {b} * {c}")), a + b * c);
        prop_assert_eq!(eval(&format!("{a} - {b} - {c}")), (a - b) - c);
        prop_assert_eq!(eval(&format!("{a} * {b} / {c}")), (a * b) / c);
        prop_assert_eq!(eval(&format!("({a} - {b}) * {c}")), (a - b) * c);
        prop_assert_eq!(eval(&format!("-{a} + {b}")), -a + b);
    }

    #[test]
    fn power_groups_to_the_right(a in 1u8..4, b in 0u8..3, c in 0u8..3) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(eval(&format!("{a}^{b}^{c}")), a.powf(b.powf(c)));
    }

    #[test]
    fn same_input_same_outcome(src in "[0-9a-z+*/^(), .-]{0,24}") {
        let context = Context::new();
        let first = format!("{:?}", get_result(&src, &context));
        let second = format!("{:?}", get_result(&src, &context));
        prop_assert_eq!(first, second);
    }
}
