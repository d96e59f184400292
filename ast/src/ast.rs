use diagnostic::Spanned;
use tokenizer::{Comparator, MoveCommand, Number, PenCommand};

use serde::Serialize;

pub type S<T> = Spanned<T>;

/// A parsed High-LOGO program: top-level items in source order.
///
/// The tree is immutable after parsing; code generation only reads it.
#[derive(Debug, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum Item {
    FunctionDef(FunctionDef),
    Instruction(Instruction),
}

/// `def <name>(<params>) { ... }`
///
/// The grammar's parameter list is `NAME ("," expression)*`; every element's
/// literal text is kept as a parameter name, numeric elements included.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FunctionDef {
    pub name: S<String>,
    pub params: Vec<S<String>>,
    pub body: Block,
}

pub type Block = Vec<Instruction>;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum Instruction {
    Move(MoveInstruction),
    Pen(S<PenCommand>),
    Conditional(Conditional),
    SingleFor(SingleFor),
    DoubleFor(DoubleFor),
    Call(FunctionCall),
}

/// `FD 100`, `LT x`, ... — one movement command and its operand.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MoveInstruction {
    pub command: S<MoveCommand>,
    pub value: S<Operand>,
}

/// The grammar's `expression`: a number or a name, carried as literal text.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum Operand {
    Number(Number),
    Name(String),
}

impl Operand {
    pub fn literal_text(&self) -> &str {
        match self {
            Self::Number(number) => number.raw_value(),
            Self::Name(name) => name,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Conditional {
    pub condition: BooleanTerm,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

/// `for <var> in range(<args>) { ... }`
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SingleFor {
    pub var: S<char>,
    pub range: RangeArgs,
    pub body: Block,
}

/// `for <var1>,<var2> in zip(range(<args1>), range(<args2>)) { ... }`
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DoubleFor {
    pub vars: (S<char>, S<char>),
    pub ranges: (RangeArgs, RangeArgs),
    pub body: Block,
}

/// The 1-to-3 numeric arguments of a `range(...)`, raw lexemes preserved.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum RangeArgs {
    Stop(S<Number>),
    StartStop(S<Number>, S<Number>),
    StartStopStep(S<Number>, S<Number>, S<Number>),
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    pub name: S<String>,
    pub args: Vec<S<Operand>>,
}

/// A boolean sub-expression. Grouping is structural: the grammar's
/// parenthesized productions collapse into the nesting of the boxes, and the
/// translator re-parenthesizes every binary node, so source grouping is
/// preserved without any precedence inference.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum BooleanTerm {
    Comparison(Comparison),
    Not(Box<BooleanTerm>),
    And(Box<BooleanTerm>, Box<BooleanTerm>),
    Or(Box<BooleanTerm>, Box<BooleanTerm>),
}

/// `<number> <comparator> <number>` — exactly three parts.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub left: S<Number>,
    pub op: S<Comparator>,
    pub right: S<Number>,
}
