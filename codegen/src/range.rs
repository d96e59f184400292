use ast::ast::RangeArgs;

/// Lower range arguments to the literal argument list Python's `range`
/// expects. Pure pass-through: the raw lexemes are joined in source order
/// with values untouched, since `range` has the same (stop) / (start, stop) /
/// (start, stop, step) arities in both languages.
pub fn translate_range_args(args: &RangeArgs) -> String {
    match args {
        RangeArgs::Stop(stop) => stop.raw_value().to_string(),
        RangeArgs::StartStop(start, stop) => {
            format!("{},{}", start.raw_value(), stop.raw_value())
        }
        RangeArgs::StartStopStep(start, stop, step) => {
            format!(
                "{},{},{}",
                start.raw_value(),
                stop.raw_value(),
                step.raw_value()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use ast::ast::S;
    use diagnostic::Span;
    use tokenizer::Number;

    use super::*;

    fn num(raw: &str) -> S<Number> {
        S::new(Number::Integer(raw.to_string()), Span::zero())
    }

    #[test]
    fn pass_through_for_each_arity() {
        assert_eq!(translate_range_args(&RangeArgs::Stop(num("5"))), "5");
        assert_eq!(
            translate_range_args(&RangeArgs::StartStop(num("0"), num("5"))),
            "0,5"
        );
        assert_eq!(
            translate_range_args(&RangeArgs::StartStopStep(num("0"), num("5"), num("1"))),
            "0,5,1"
        );
    }

    #[test]
    fn lexemes_are_not_normalized() {
        // Negative and unusual-looking values come through verbatim.
        assert_eq!(
            translate_range_args(&RangeArgs::StartStop(num("-3"), num("007"))),
            "-3,007"
        );
    }
}
