//! The parse tree produced from tokenized input.
//!
//! This is a faithful record of the formula's syntax, before any layout
//! decisions (fonts, spacing, script placement) have been made. It is the
//! input both to layout building and to purified TeX generation.

/// A node of a formula parsed in math mode.
///
/// Commands are stored by name (e.g. `"\frac"`), exactly as they appear
/// in the token stream after macro expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathNode {
    /// A single symbol or command without arguments, like `"x"`, `"2"`
    /// or `"\alpha"`.
    Symbol(String),
    /// A list of zero or more nodes appearing in sequence.
    List(Vec<MathNode>),
    /// A node enclosed in grouping braces.
    Group(Box<MathNode>),
    /// A base with attached superscript and/or subscript. Any of the
    /// three may be absent; `"^2"` at the start of a group has no base.
    Scripts {
        base: Option<Box<MathNode>>,
        upper: Option<Box<MathNode>>,
        lower: Option<Box<MathNode>>,
    },
    /// A command taking one argument, like `"\hat"` or `"\mathbb"`.
    Command1Arg { command: String, child: Box<MathNode> },
    /// A command taking two arguments, like `"\frac"`. Infix commands
    /// like `"\over"` are stored in the same shape, with the material
    /// before the command as the first child.
    Command2Args {
        command: String,
        child1: Box<MathNode>,
        child2: Box<MathNode>,
        is_infix: bool,
    },
    /// A limits modifier (`"\limits"`, `"\nolimits"`, `"\displaylimits"`)
    /// applied to the preceding node. The child is absent when the
    /// modifier follows an empty script base.
    Limits {
        command: String,
        child: Option<Box<MathNode>>,
    },
    /// A style change command like `"\scriptstyle"` or `"\bf"`, affecting
    /// everything up to the end of the enclosing group.
    StyleChange { command: String, child: Box<MathNode> },
    /// A command like `"\text"` whose argument is parsed in text mode.
    EnterTextMode { command: String, child: Box<TextNode> },
    /// A `\big` family command applied to a delimiter.
    Big { command: String, delimiter: String },
    /// Material surrounded by `\left` and `\right` delimiters.
    Delimited {
        left: String,
        right: String,
        child: Box<MathNode>,
    },
    /// An environment like `\begin{pmatrix} ... \end{pmatrix}`, storing
    /// the table cells row by row.
    Environment {
        name: String,
        rows: Vec<Vec<MathNode>>,
    },
}

/// A node of a formula parsed in text mode, inside e.g. `\text{...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// A single character or symbol command, including the whitespace
    /// token `" "`.
    Symbol(String),
    List(Vec<TextNode>),
    Group(Box<TextNode>),
    Command1Arg { command: String, child: Box<TextNode> },
    StyleChange { command: String, child: Box<TextNode> },
}
