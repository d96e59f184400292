use std::fmt::{Display, Formatter, Result};

use ast::ast::{
    Conditional, DoubleFor, FunctionCall, FunctionDef, Instruction, Item, MoveInstruction, Program,
    SingleFor,
};
use tokenizer::{MoveCommand, PenCommand};

use super::boolean::translate_boolean_term;
use super::range::translate_range_args;

const PROLOGUE: &str = "import turtle\nt = turtle.Turtle()\n\n";
const EPILOGUE: &str = "\nturtle.mainloop()\n";
const INDENT_UNIT: &str = "    ";

/// Movement commands map onto methods of the generated turtle instance.
const fn move_method(command: MoveCommand) -> &'static str {
    match command {
        MoveCommand::Forward => "forward",
        MoveCommand::Backward => "backward",
        MoveCommand::Left => "left",
        MoveCommand::Right => "right",
        MoveCommand::Width => "width",
    }
}

const fn pen_method(command: PenCommand) -> &'static str {
    match command {
        PenCommand::Up => "penup",
        PenCommand::Down => "pendown",
    }
}

/// Render a parsed program as an executable Python turtle-graphics script.
///
/// The prologue constructs the turtle instance `t`, function definitions are
/// emitted before all other top-level instructions (source order kept within
/// each group), and the epilogue enters the turtle event loop.
pub fn generate(program: &Program) -> String {
    PySource { program }.to_string()
}

struct PySource<'a> {
    program: &'a Program,
}

impl Display for PySource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(PROLOGUE)?;
        for item in &self.program.items {
            if let Item::FunctionDef(func) = item {
                write!(f, "{}", Py::new(func))?;
            }
        }
        for item in &self.program.items {
            if let Item::Instruction(instruction) = item {
                write!(f, "{}", Py::new(instruction))?;
            }
        }
        f.write_str(EPILOGUE)
    }
}

/// A helper struct to display nodes at an indentation depth.
struct Py<'a, T> {
    node: &'a T,
    indent: usize,
}

impl<'a, T> Py<'a, T> {
    fn new(node: &'a T) -> Self {
        Self { node, indent: 0 }
    }

    fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }
}

fn write_indent(f: &mut Formatter<'_>, depth: usize) -> Result {
    for _ in 0..depth {
        f.write_str(INDENT_UNIT)?;
    }
    Ok(())
}

fn write_block(f: &mut Formatter<'_>, block: &[Instruction], indent: usize) -> Result {
    if block.is_empty() {
        // Python requires a body even when the source block was empty
        write_indent(f, indent)?;
        return writeln!(f, "pass");
    }
    for instruction in block {
        write!(f, "{}", Py::new(instruction).with_indent(indent))?;
    }
    Ok(())
}

impl<'a> Display for Py<'a, FunctionDef> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        write!(f, "def {}(", self.node.name)?;
        for (i, param) in self.node.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        writeln!(f, "):")?;
        write_block(f, &self.node.body, self.indent + 1)?;
        writeln!(f)
    }
}

impl<'a> Display for Py<'a, Instruction> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use ast::ast::Instruction::*;
        match self.node {
            Move(m) => write!(f, "{}", Py::new(m).with_indent(self.indent)),
            Pen(command) => {
                write_indent(f, self.indent)?;
                writeln!(f, "t.{}()", pen_method(command.node))
            }
            Conditional(c) => write!(f, "{}", Py::new(c).with_indent(self.indent)),
            SingleFor(s) => write!(f, "{}", Py::new(s).with_indent(self.indent)),
            DoubleFor(d) => write!(f, "{}", Py::new(d).with_indent(self.indent)),
            Call(call) => write!(f, "{}", Py::new(call).with_indent(self.indent)),
        }
    }
}

impl<'a> Display for Py<'a, MoveInstruction> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(
            f,
            "t.{}({})",
            move_method(self.node.command.node),
            self.node.value.literal_text()
        )
    }
}

impl<'a> Display for Py<'a, Conditional> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(f, "if {}:", translate_boolean_term(&self.node.condition))?;
        write_block(f, &self.node.then_block, self.indent + 1)?;
        if let Some(else_block) = &self.node.else_block {
            write_indent(f, self.indent)?;
            writeln!(f, "else:")?;
            write_block(f, else_block, self.indent + 1)?;
        }
        Ok(())
    }
}

impl<'a> Display for Py<'a, SingleFor> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(
            f,
            "for {} in range({}):",
            self.node.var,
            translate_range_args(&self.node.range)
        )?;
        write_block(f, &self.node.body, self.indent + 1)
    }
}

impl<'a> Display for Py<'a, DoubleFor> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        writeln!(
            f,
            "for {},{} in zip(range({}), range({})):",
            self.node.vars.0,
            self.node.vars.1,
            translate_range_args(&self.node.ranges.0),
            translate_range_args(&self.node.ranges.1)
        )?;
        write_block(f, &self.node.body, self.indent + 1)
    }
}

impl<'a> Display for Py<'a, FunctionCall> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_indent(f, self.indent)?;
        write!(f, "{}(", self.node.name)?;
        for (i, arg) in self.node.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.literal_text())?;
        }
        writeln!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use ast::ASTParser;
    use indoc::indoc;
    use tokenizer::tokenize;

    use super::*;

    fn generate_source(code: &str) -> String {
        let mut token_iter = tokenize(code.chars());
        let (program, errors) = ASTParser::new(&mut token_iter).parse();
        assert_eq!(errors, vec![], "fixture must parse cleanly");
        generate(&program)
    }

    #[test]
    fn single_forward_instruction() {
        assert_eq!(
            generate_source("FD 100"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                t.forward(100)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn conditional_with_pen_and_move() {
        assert_eq!(
            generate_source("if (1==1) { PD FD 50 }"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                if 1 == 1:
                    t.pendown()
                    t.forward(50)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn single_for_loop() {
        assert_eq!(
            generate_source("for i in range(0,5,1) { FD 10 }"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                for i in range(0,5,1):
                    t.forward(10)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn double_for_loop() {
        assert_eq!(
            generate_source("for i,j in zip(range(3), range(0,9)) { FD i BK j }"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                for i,j in zip(range(3), range(0,9)):
                    t.forward(i)
                    t.backward(j)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn function_defs_precede_other_statements() {
        // The call comes first in the source; the definition must still be
        // emitted before it.
        let code = indoc! {"
            sq(50)
            def sq(x) {
                FD x
                LT 90
            }"};

        assert_eq!(
            generate_source(code),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                def sq(x):
                    t.forward(x)
                    t.left(90)

                sq(50)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn every_movement_command_is_mapped() {
        assert_eq!(
            generate_source("FD 1 BK 2 LT 3 RT 4 WIDTH 5 PU PD"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                t.forward(1)
                t.backward(2)
                t.left(3)
                t.right(4)
                t.width(5)
                t.penup()
                t.pendown()

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn indentation_tracks_nesting_to_depth_four() {
        let code = indoc! {"
            def deep(x) {
                for i in range(3) {
                    if (1==1) {
                        for j in range(2) {
                            FD 1
                        }
                    }
                }
            }"};

        assert_eq!(
            generate_source(code),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                def deep(x):
                    for i in range(3):
                        if 1 == 1:
                            for j in range(2):
                                t.forward(1)


                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn empty_blocks_emit_pass() {
        assert_eq!(
            generate_source("def nop() { }\nif (1==2) { } else { FD 1 }"),
            indoc! {"
                import turtle
                t = turtle.Turtle()

                def nop():
                    pass

                if 1 == 2:
                    pass
                else:
                    t.forward(1)

                turtle.mainloop()
            "}
        );
    }

    #[test]
    fn call_arguments_keep_literal_text() {
        let code = indoc! {"
            def jump(a, b) {
                PU
                FD a
                PD
                FD b
            }
            jump(10,-2.5)"};

        let output = generate_source(code);
        assert!(output.contains("def jump(a, b):\n"));
        assert!(output.contains("jump(10,-2.5)\n"));
    }

    #[test]
    fn instructions_appear_exactly_once_in_source_order() {
        let output = generate_source("FD 1\nBK 2\nFD 1");

        let body: Vec<_> = output
            .lines()
            .filter(|l| l.starts_with("t."))
            .collect();
        assert_eq!(body, vec!["t.forward(1)", "t.backward(2)", "t.forward(1)"]);
    }
}
