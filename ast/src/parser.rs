use std::iter::{Filter, Peekable};

use diagnostic::{Span, Spanned};
use tokenizer::{Bracket, Keyword, LogicOp, Number, Token};

use super::ast::{
    BooleanTerm, Comparison, Conditional, DoubleFor, FunctionCall, FunctionDef, Instruction, Item,
    MoveInstruction, Operand, Program, RangeArgs, S, SingleFor,
};
use crate::error::ParseError;

type FilterFn = fn(&(Token, Span)) -> bool;

/// Recursive-descent parser for High-LOGO.
///
/// Consumes the token stream (trivia filtered out) and produces the typed
/// program tree. Errors are accumulated rather than aborting the walk, so one
/// run can report several of them; any error makes the translation fail.
pub struct ASTParser<'a, I: Iterator<Item = (Token, Span)>> {
    iter: Peekable<Filter<&'a mut I, FilterFn>>,
    errors: Vec<Spanned<ParseError>>,
    last_span: Span,
}

impl<'a, I> ASTParser<'a, I>
where
    I: Iterator<Item = (Token, Span)>,
{
    pub fn new(token_iter: &'a mut I) -> Self {
        ASTParser {
            iter: token_iter
                .by_ref()
                .filter(Self::token_filter as FilterFn)
                .peekable(),
            errors: Vec::new(),
            last_span: Span::zero(),
        }
    }

    fn token_filter(element: &(Token, Span)) -> bool {
        !matches!(
            element.0,
            Token::Comment(_) | Token::Whitespace(_) | Token::NewLine
        )
    }

    /// Take the next token and remember its span if it's not EOF.
    fn take_next(&mut self) -> Option<(Token, Span)> {
        let (token, span) = self.iter.next()?;
        self.last_span = span;
        Some((token, span))
    }

    fn expect(&mut self, expected: Token) -> Option<()> {
        match self.take_next() {
            Some((token, span)) => {
                if token == expected {
                    Some(())
                } else {
                    self.errors.push(Spanned::new(
                        ParseError::UnexpectedToken {
                            token,
                            expected: format!("`{expected}`"),
                        },
                        span,
                    ));
                    None
                }
            }
            None => {
                self.errors.push(Spanned::new(
                    ParseError::UnexpectedEof {
                        expected: format!("`{expected}`"),
                    },
                    self.last_span,
                ));
                None
            }
        }
    }

    fn expect_extract<F, T>(&mut self, extract: F, expected: &str) -> Option<(T, Span)>
    where
        F: FnOnce(Token) -> Option<T>,
    {
        match self.take_next() {
            Some((token, span)) => match extract(token.clone()) {
                Some(val) => Some((val, span)),
                None => {
                    self.errors.push(Spanned::new(
                        ParseError::UnexpectedToken {
                            token,
                            expected: expected.to_string(),
                        },
                        span,
                    ));
                    None
                }
            },
            None => {
                self.errors.push(Spanned::new(
                    ParseError::UnexpectedEof {
                        expected: expected.to_string(),
                    },
                    self.last_span,
                ));
                None
            }
        }
    }

    fn expect_ident(&mut self) -> Option<(String, Span)> {
        self.expect_extract(
            |t| match t {
                Token::Identifier(s) => Some(s),
                _ => None,
            },
            "identifier",
        )
    }

    fn expect_number(&mut self) -> Option<S<Number>> {
        self.expect_extract(
            |t| match t {
                Token::Number(n) => Some(n),
                _ => None,
            },
            "number",
        )
        .map(|(number, span)| S::new(number, span))
    }

    /// The grammar restricts loop variables to a single letter in `i`..`z`.
    /// Lexically they are ordinary identifiers, so the restriction lives here.
    fn expect_loop_var(&mut self) -> Option<S<char>> {
        let (name, span) = self.expect_ident()?;
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(ch @ 'i'..='z'), None) => Some(S::new(ch, span)),
            _ => {
                self.errors
                    .push(Spanned::new(ParseError::InvalidLoopVariable { name }, span));
                None
            }
        }
    }

    fn peek_is(&mut self, token: Token) -> bool {
        matches!(self.iter.peek(), Some((t, _)) if *t == token)
    }

    pub fn parse(mut self) -> (Program, Vec<Spanned<ParseError>>) {
        let mut program = Program::new();

        while let Some((token, _)) = self.iter.peek() {
            match token {
                Token::Keyword(Keyword::Def) => {
                    if let Some(func) = self.parse_function_def() {
                        program.add_item(Item::FunctionDef(func));
                    }
                }
                _ => {
                    if let Some(instruction) = self.parse_instruction() {
                        program.add_item(Item::Instruction(instruction));
                    }
                }
            }
        }

        (program, self.errors)
    }

    fn parse_function_def(&mut self) -> Option<FunctionDef> {
        self.expect(Token::Keyword(Keyword::Def))?;
        let (name, name_span) = self.expect_ident()?;
        self.expect(Token::Bracket(Bracket::RoundOpen))?;

        let mut params = Vec::new();
        if !self.peek_is(Token::Bracket(Bracket::RoundClose)) {
            let (first, first_span) = self.expect_ident()?;
            params.push(S::new(first, first_span));
            while self.peek_is(Token::Comma) {
                self.take_next();
                // Grammar defect preserved: trailing list elements are
                // expressions, read back as parameter names by literal text.
                let operand = self.parse_operand()?;
                params.push(operand.map(|op| op.literal_text().to_string()));
            }
        }
        self.expect(Token::Bracket(Bracket::RoundClose))?;
        let body = self.parse_block()?;

        Some(FunctionDef {
            name: S::new(name, name_span),
            params,
            body,
        })
    }

    fn parse_block(&mut self) -> Option<Vec<Instruction>> {
        self.expect(Token::Bracket(Bracket::CurlyOpen))?;
        let mut block = Vec::new();

        loop {
            match self.iter.peek() {
                Some((token, _span)) => match token {
                    Token::Bracket(Bracket::CurlyClose) => {
                        self.take_next();
                        break Some(block);
                    }
                    _ => {
                        let Some(instruction) = self.parse_instruction() else {
                            continue;
                        };
                        block.push(instruction);
                    }
                },
                None => {
                    self.errors.push(Spanned::new(
                        ParseError::UnexpectedEof {
                            expected: "instruction or `}`".to_string(),
                        },
                        self.last_span,
                    ));
                    break Some(block);
                }
            }
        }
    }

    fn parse_instruction(&mut self) -> Option<Instruction> {
        match self.iter.peek() {
            Some((token, _span)) => match token {
                Token::Move(_) => self.parse_move_instruction().map(Instruction::Move),
                Token::Pen(_) => {
                    let Some((Token::Pen(command), span)) = self.take_next() else {
                        unreachable!(); // we peeked and saw Pen
                    };
                    Some(Instruction::Pen(S::new(command, span)))
                }
                Token::Keyword(Keyword::If) => {
                    self.parse_conditional().map(Instruction::Conditional)
                }
                Token::Keyword(Keyword::For) => self.parse_for(),
                Token::Identifier(_) => {
                    let Some((Token::Identifier(name), span)) = self.take_next() else {
                        unreachable!(); // we peeked and saw Identifier
                    };
                    self.parse_function_call(name, span).map(Instruction::Call)
                }
                _ => {
                    let (token, span) = self.take_next()?;
                    let err = ParseError::UnexpectedToken {
                        token,
                        expected: "an instruction".to_string(),
                    };
                    self.errors.push(Spanned::new(err, span));
                    None
                }
            },
            None => {
                self.errors.push(Spanned::new(
                    ParseError::UnexpectedEof {
                        expected: "an instruction".to_string(),
                    },
                    self.last_span,
                ));
                None
            }
        }
    }

    fn parse_move_instruction(&mut self) -> Option<MoveInstruction> {
        let Some((Token::Move(command), span)) = self.take_next() else {
            unreachable!(); // caller peeked and saw Move
        };
        let value = self.parse_operand()?;
        Some(MoveInstruction {
            command: S::new(command, span),
            value,
        })
    }

    fn parse_operand(&mut self) -> Option<S<Operand>> {
        self.expect_extract(
            |t| match t {
                Token::Number(n) => Some(Operand::Number(n)),
                Token::Identifier(name) => Some(Operand::Name(name)),
                _ => None,
            },
            "a number or a name",
        )
        .map(|(operand, span)| S::new(operand, span))
    }

    fn parse_function_call(&mut self, name: String, span: Span) -> Option<FunctionCall> {
        self.expect(Token::Bracket(Bracket::RoundOpen))?;
        let mut args = Vec::new();
        if !self.peek_is(Token::Bracket(Bracket::RoundClose)) {
            args.push(self.parse_operand()?);
            while self.peek_is(Token::Comma) {
                self.take_next();
                args.push(self.parse_operand()?);
            }
        }
        self.expect(Token::Bracket(Bracket::RoundClose))?;

        Some(FunctionCall {
            name: S::new(name, span),
            args,
        })
    }

    fn parse_conditional(&mut self) -> Option<Conditional> {
        self.expect(Token::Keyword(Keyword::If))?;
        self.expect(Token::Bracket(Bracket::RoundOpen))?;
        let condition = self.parse_boolean_term()?;
        self.expect(Token::Bracket(Bracket::RoundClose))?;
        let then_block = self.parse_block()?;

        let else_block = if self.peek_is(Token::Keyword(Keyword::Else)) {
            self.take_next();
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Conditional {
            condition,
            then_block,
            else_block,
        })
    }

    /// `&&`/`||` chains fold left-associatively; the grammar leaves the
    /// order ambiguous, and generated output re-parenthesizes every binary
    /// node, so the choice never changes evaluation.
    fn parse_boolean_term(&mut self) -> Option<BooleanTerm> {
        let mut left = self.parse_boolean_factor()?;

        loop {
            let op = match self.iter.peek() {
                Some((Token::Logic(op @ (LogicOp::And | LogicOp::Or)), _)) => *op,
                _ => break Some(left),
            };
            self.take_next();
            let right = self.parse_boolean_factor()?;
            left = match op {
                LogicOp::And => BooleanTerm::And(Box::new(left), Box::new(right)),
                LogicOp::Or => BooleanTerm::Or(Box::new(left), Box::new(right)),
                LogicOp::Not => unreachable!(), // filtered by the peek above
            };
        }
    }

    fn parse_boolean_factor(&mut self) -> Option<BooleanTerm> {
        match self.iter.peek() {
            Some((Token::Logic(LogicOp::Not), _)) => {
                self.take_next();
                let inner = self.parse_boolean_factor()?;
                Some(BooleanTerm::Not(Box::new(inner)))
            }
            Some((Token::Bracket(Bracket::RoundOpen), _)) => {
                self.take_next();
                let term = self.parse_boolean_term()?;
                self.expect(Token::Bracket(Bracket::RoundClose))?;
                Some(term)
            }
            Some((Token::Number(_), _)) => self.parse_comparison().map(BooleanTerm::Comparison),
            Some(_) => {
                let (token, span) = self.take_next()?;
                let err = ParseError::UnexpectedToken {
                    token,
                    expected: "a boolean term".to_string(),
                };
                self.errors.push(Spanned::new(err, span));
                None
            }
            None => {
                self.errors.push(Spanned::new(
                    ParseError::UnexpectedEof {
                        expected: "a boolean term".to_string(),
                    },
                    self.last_span,
                ));
                None
            }
        }
    }

    fn parse_comparison(&mut self) -> Option<Comparison> {
        let left = self.expect_number()?;
        let (op, op_span) = self.expect_extract(
            |t| match t {
                Token::Comparator(c) => Some(c),
                _ => None,
            },
            "comparison operator",
        )?;
        let right = self.expect_number()?;

        Some(Comparison {
            left,
            op: S::new(op, op_span),
            right,
        })
    }

    fn parse_for(&mut self) -> Option<Instruction> {
        self.expect(Token::Keyword(Keyword::For))?;
        let var = self.expect_loop_var()?;

        if self.peek_is(Token::Comma) {
            self.take_next();
            let var2 = self.expect_loop_var()?;
            self.expect(Token::Keyword(Keyword::In))?;
            self.expect(Token::Keyword(Keyword::Zip))?;
            self.expect(Token::Bracket(Bracket::RoundOpen))?;
            let range1 = self.parse_range_expr()?;
            self.expect(Token::Comma)?;
            let range2 = self.parse_range_expr()?;
            self.expect(Token::Bracket(Bracket::RoundClose))?;
            let body = self.parse_block()?;

            Some(Instruction::DoubleFor(DoubleFor {
                vars: (var, var2),
                ranges: (range1, range2),
                body,
            }))
        } else {
            self.expect(Token::Keyword(Keyword::In))?;
            self.expect(Token::Keyword(Keyword::Range))?;
            self.expect(Token::Bracket(Bracket::RoundOpen))?;
            let range = self.parse_range_args()?;
            self.expect(Token::Bracket(Bracket::RoundClose))?;
            let body = self.parse_block()?;

            Some(Instruction::SingleFor(SingleFor { var, range, body }))
        }
    }

    fn parse_range_expr(&mut self) -> Option<RangeArgs> {
        self.expect(Token::Keyword(Keyword::Range))?;
        self.expect(Token::Bracket(Bracket::RoundOpen))?;
        let args = self.parse_range_args()?;
        self.expect(Token::Bracket(Bracket::RoundClose))?;
        Some(args)
    }

    fn parse_range_args(&mut self) -> Option<RangeArgs> {
        let first = self.expect_number()?;
        if !self.peek_is(Token::Comma) {
            return Some(RangeArgs::Stop(first));
        }
        self.take_next();
        let second = self.expect_number()?;
        if !self.peek_is(Token::Comma) {
            return Some(RangeArgs::StartStop(first, second));
        }
        self.take_next();
        let third = self.expect_number()?;
        Some(RangeArgs::StartStopStep(first, second, third))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use tokenizer::{tokenize, Comparator, MoveCommand, PenCommand};

    use super::super::ast::Operand;
    use super::*;

    fn parse(code: &str) -> (Program, Vec<Spanned<ParseError>>) {
        let mut token_iter = tokenize(code.chars());
        ASTParser::new(&mut token_iter).parse()
    }

    fn parse_ok(code: &str) -> Program {
        let (program, errors) = parse(code);
        assert_eq!(errors, vec![], "unexpected parse errors");
        program
    }

    #[test]
    fn single_move_instruction_exact() {
        let (program, errors) = parse("FD 100");

        let expected = Program {
            items: vec![Item::Instruction(Instruction::Move(MoveInstruction {
                command: S::new(MoveCommand::Forward, Span::new(0, 2)),
                value: S::new(
                    Operand::Number(Number::Integer("100".to_string())),
                    Span::new(3, 6),
                ),
            }))],
        };

        assert_eq!(program, expected);
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn function_def_and_call() {
        let program = parse_ok(indoc! {"
            def sq(x) {
                FD x
                LT 90
            }
            sq(50)"});

        assert_eq!(program.items.len(), 2);

        let Item::FunctionDef(func) = &program.items[0] else {
            panic!("expected a function definition");
        };
        assert_eq!(func.name.node, "sq");
        assert_eq!(
            func.params.iter().map(|p| p.node.as_str()).collect::<Vec<_>>(),
            vec!["x"]
        );
        assert_eq!(func.body.len(), 2);
        let Instruction::Move(m) = &func.body[0] else {
            panic!("expected a move instruction");
        };
        assert_eq!(m.command.node, MoveCommand::Forward);
        assert_eq!(m.value.literal_text(), "x");

        let Item::Instruction(Instruction::Call(call)) = &program.items[1] else {
            panic!("expected a function call");
        };
        assert_eq!(call.name.node, "sq");
        assert_eq!(call.args.len(), 1);
        assert_eq!(call.args[0].literal_text(), "50");
    }

    #[test]
    fn param_list_defect_keeps_numeric_elements() {
        let program = parse_ok("def f(x, 5, y) { }");

        let Item::FunctionDef(func) = &program.items[0] else {
            panic!("expected a function definition");
        };
        assert_eq!(
            func.params.iter().map(|p| p.node.as_str()).collect::<Vec<_>>(),
            vec!["x", "5", "y"]
        );
        assert!(func.body.is_empty());
    }

    #[test]
    fn conditional_with_else_and_nested_boolean() {
        let program = parse_ok("if (1==1 && (2==2 || !(3==3))) { PD } else { PU }");

        let Item::Instruction(Instruction::Conditional(cond)) = &program.items[0] else {
            panic!("expected a conditional");
        };

        let BooleanTerm::And(left, right) = &cond.condition else {
            panic!("expected an AND at the top");
        };
        let BooleanTerm::Comparison(cmp) = left.as_ref() else {
            panic!("expected a comparison on the left");
        };
        assert_eq!(cmp.op.node, Comparator::Eq);
        let BooleanTerm::Or(_, negated) = right.as_ref() else {
            panic!("expected an OR on the right");
        };
        assert!(matches!(negated.as_ref(), BooleanTerm::Not(_)));

        assert_eq!(
            cond.then_block,
            vec![Instruction::Pen(S::new(PenCommand::Down, Span::new(33, 35)))]
        );
        assert!(cond.else_block.is_some());
    }

    #[test]
    fn single_and_double_for_loops() {
        let program = parse_ok(indoc! {"
            for i in range(0,5,1) {
                FD 10
            }
            for i,j in zip(range(3), range(0,9)) {
                BK i
            }"});

        let Item::Instruction(Instruction::SingleFor(single)) = &program.items[0] else {
            panic!("expected a single for");
        };
        assert_eq!(single.var.node, 'i');
        let RangeArgs::StartStopStep(start, stop, step) = &single.range else {
            panic!("expected three range arguments");
        };
        assert_eq!(start.raw_value(), "0");
        assert_eq!(stop.raw_value(), "5");
        assert_eq!(step.raw_value(), "1");
        assert_eq!(single.body.len(), 1);

        let Item::Instruction(Instruction::DoubleFor(double)) = &program.items[1] else {
            panic!("expected a double for");
        };
        assert_eq!((double.vars.0.node, double.vars.1.node), ('i', 'j'));
        assert!(matches!(double.ranges.0, RangeArgs::Stop(_)));
        assert!(matches!(double.ranges.1, RangeArgs::StartStop(_, _)));
    }

    #[test]
    fn rejects_invalid_loop_variable() {
        let (_, errors) = parse("for abc in range(5) { FD 1 }");
        assert!(errors.iter().any(|e| matches!(
            &e.node,
            ParseError::InvalidLoopVariable { name } if name == "abc"
        )));

        let (_, errors) = parse("for a in range(5) { FD 1 }");
        assert!(errors
            .iter()
            .any(|e| matches!(&e.node, ParseError::InvalidLoopVariable { .. })));
    }

    #[test]
    fn mismatched_braces_report_errors() {
        let (_, errors) = parse("def sq(x) { FD x");
        assert!(!errors.is_empty());
        assert!(errors
            .iter()
            .any(|e| matches!(&e.node, ParseError::UnexpectedEof { .. })));

        let (_, errors) = parse("if (1==1) { PD ");
        assert!(!errors.is_empty());
    }

    #[test]
    fn rejects_malformed_number_lexemes() {
        for code in ["FD 1e", "FD 1.2.3", "FD 1e+"] {
            let (_, errors) = parse(code);
            assert!(
                errors
                    .iter()
                    .any(|e| matches!(&e.node, ParseError::UnexpectedToken { .. })),
                "{code:?} must fail to parse"
            );
        }
    }

    #[test]
    fn comparison_requires_numeric_operands() {
        let (_, errors) = parse("if (x == 1) { PD }");
        assert!(errors
            .iter()
            .any(|e| matches!(&e.node, ParseError::UnexpectedToken { .. })));
    }
}
