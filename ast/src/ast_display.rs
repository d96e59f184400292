use std::fmt::{Display, Formatter, Result};

use super::ast::{
    BooleanTerm, Conditional, DoubleFor, FunctionCall, FunctionDef, Instruction, Item,
    MoveInstruction, Operand, Program, RangeArgs, SingleFor,
};

// Indented tree rendering of a parsed program, printed by the CLI for
// inspection. Node labels follow the grammar rule names.

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "start")?;
        for item in &self.items {
            write!(f, "{}", Indent::new(item))?;
        }
        Ok(())
    }
}

/// A helper struct to display nodes with indentation
struct Indent<'a, T> {
    node: &'a T,
    indent: usize,
}

impl<'a, T> Indent<'a, T> {
    fn new(node: &'a T) -> Self {
        Self { node, indent: 1 }
    }

    fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }
}

fn write_indent(f: &mut Formatter<'_>, depth: usize) -> Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn write_block(f: &mut Formatter<'_>, block: &[Instruction], indent: usize) -> Result {
    for instruction in block {
        write!(f, "{}", Indent::new(instruction).with_indent(indent))?;
    }
    Ok(())
}

impl<'a> Display for Indent<'a, Item> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.node {
            Item::FunctionDef(func) => write!(f, "{}", Indent::new(func).with_indent(self.indent)),
            Item::Instruction(instruction) => {
                write!(f, "{}", Indent::new(instruction).with_indent(self.indent))
            }
        }
    }
}

impl<'a> Display for Indent<'a, FunctionDef> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        write!(f, "function_def {}(", self.node.name)?;
        for (i, param) in self.node.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        writeln!(f, ")")?;
        write_block(f, &self.node.body, self.indent + 1)
    }
}

impl<'a> Display for Indent<'a, Instruction> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use super::ast::Instruction::*;
        match self.node {
            Move(m) => write!(f, "{}", Indent::new(m).with_indent(self.indent)),
            Pen(command) => {
                write_indent(f, self.indent)?;
                writeln!(f, "pen_instruction {command}")
            }
            Conditional(c) => write!(f, "{}", Indent::new(c).with_indent(self.indent)),
            SingleFor(s) => write!(f, "{}", Indent::new(s).with_indent(self.indent)),
            DoubleFor(d) => write!(f, "{}", Indent::new(d).with_indent(self.indent)),
            Call(call) => write!(f, "{}", Indent::new(call).with_indent(self.indent)),
        }
    }
}

impl<'a> Display for Indent<'a, MoveInstruction> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(
            f,
            "move_instruction {} {}",
            self.node.command,
            self.node.value.node
        )
    }
}

impl<'a> Display for Indent<'a, Conditional> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(f, "conditional {}", self.node.condition)?;
        write_block(f, &self.node.then_block, self.indent + 1)?;
        if let Some(else_block) = &self.node.else_block {
            write_indent(f, self.indent)?;
            writeln!(f, "else")?;
            write_block(f, else_block, self.indent + 1)?;
        }
        Ok(())
    }
}

impl<'a> Display for Indent<'a, SingleFor> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(f, "single_for {} range({})", self.node.var, self.node.range)?;
        write_block(f, &self.node.body, self.indent + 1)
    }
}

impl<'a> Display for Indent<'a, DoubleFor> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(
            f,
            "double_for {},{} zip(range({}), range({}))",
            self.node.vars.0, self.node.vars.1, self.node.ranges.0, self.node.ranges.1
        )?;
        write_block(f, &self.node.body, self.indent + 1)
    }
}

impl<'a> Display for Indent<'a, FunctionCall> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        write!(f, "function_call {}(", self.node.name)?;
        for (i, arg) in self.node.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.node)?;
        }
        writeln!(f, ")")
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.literal_text())
    }
}

// Boolean terms and range arguments print in source form.

impl Display for BooleanTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BooleanTerm::Comparison(cmp) => {
                write!(f, "{} {} {}", cmp.left, cmp.op, cmp.right)
            }
            BooleanTerm::Not(term) => write!(f, "!({term})"),
            BooleanTerm::And(left, right) => write!(f, "({left} && {right})"),
            BooleanTerm::Or(left, right) => write!(f, "({left} || {right})"),
        }
    }
}

impl Display for RangeArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RangeArgs::Stop(stop) => write!(f, "{stop}"),
            RangeArgs::StartStop(start, stop) => write!(f, "{start},{stop}"),
            RangeArgs::StartStopStep(start, stop, step) => {
                write!(f, "{start},{stop},{step}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use tokenizer::tokenize;

    use crate::ASTParser;

    #[test]
    fn tree_rendering() {
        let code = indoc! {"
            def sq(x) {
                FD x
                LT 90
            }
            if (1==1) { PD } else { PU }
            sq(50)"};

        let mut token_iter = tokenize(code.chars());
        let (program, errors) = ASTParser::new(&mut token_iter).parse();
        assert_eq!(errors, vec![]);

        let expected = indoc! {"
            start
              function_def sq(x)
                move_instruction FD x
                move_instruction LT 90
              conditional 1 == 1
                pen_instruction PD
              else
                pen_instruction PU
              function_call sq(50)
        "};

        assert_eq!(program.to_string(), expected);
    }
}
