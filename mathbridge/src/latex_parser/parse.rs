use super::error::{TexError, TexErrKind};
use super::macros::MacroProcessor;
use super::token::{TokenCode, environment_name, math_token_code, strip_reserved_suffix, text_token_code};
use crate::parse_node::{MathNode, TextNode};
use crate::symbol_tables::DELIMITERS;

fn err(kind: TexErrKind) -> TexError {
    TexError(0, kind)
}

/// Recursive descent parser for tokenized math-mode input.
pub struct Parser {
    src: MacroProcessor,
}

impl Parser {
    /// Parses the whole token stream as math-mode material.
    pub fn parse(input: Vec<String>) -> Result<MathNode, TexError> {
        let mut parser = Parser {
            src: MacroProcessor::new(input),
        };
        let output = parser.parse_math_list()?;

        match parser.math_code_at_peek()? {
            TokenCode::EndOfInput => Ok(output),
            TokenCode::EndGroup => Err(err(TexErrKind::UnmatchedCloseBrace)),
            TokenCode::Right => Err(err(TexErrKind::UnmatchedRight)),
            TokenCode::NextCell => Err(err(TexErrKind::UnexpectedNextCell)),
            TokenCode::NextRow => Err(err(TexErrKind::UnexpectedNextRow)),
            TokenCode::EndEnvironment => Err(err(TexErrKind::UnmatchedEnd)),
            // parse_math_list only returns at one of the codes above.
            _ => unreachable!(),
        }
    }

    fn math_code_at_peek(&mut self) -> Result<TokenCode, TexError> {
        let token = self.src.peek()?;
        math_token_code(&token).map_err(err)
    }

    fn text_code_at_peek(&mut self) -> Result<TokenCode, TexError> {
        let token = self.src.peek()?;
        text_token_code(&token).map_err(err)
    }

    fn parse_math_list(&mut self) -> Result<MathNode, TexError> {
        let mut children: Vec<MathNode> = Vec::new();

        // While an infix command like "\over" is pending, the material
        // before it is parked here until the denominator is complete.
        let mut infix: Option<(String, Vec<MathNode>)> = None;

        loop {
            match self.math_code_at_peek()? {
                TokenCode::EndGroup
                | TokenCode::Right
                | TokenCode::NextCell
                | TokenCode::NextRow
                | TokenCode::EndEnvironment
                | TokenCode::EndOfInput => {
                    return Ok(match infix {
                        Some((command, numerator)) => MathNode::Command2Args {
                            command,
                            child1: Box::new(MathNode::List(numerator)),
                            child2: Box::new(MathNode::List(children)),
                            is_infix: true,
                        },
                        None if children.len() == 1 => children.remove(0),
                        None => MathNode::List(children),
                    });
                }

                TokenCode::Newcommand => self.src.handle_newcommand()?,

                TokenCode::Whitespace => self.src.advance(),

                TokenCode::Symbol | TokenCode::SymbolUnsafe => {
                    children.push(MathNode::Symbol(self.src.get()?));
                }

                TokenCode::BeginGroup => {
                    self.src.advance();
                    let inner = self.parse_math_list()?;
                    if self.src.peek()? != "}" {
                        return Err(err(TexErrKind::UnmatchedOpenBrace));
                    }
                    self.src.advance();
                    children.push(MathNode::Group(Box::new(inner)));
                }

                TokenCode::BeginEnvironment => {
                    children.push(self.parse_environment()?);
                }

                TokenCode::EnterTextMode => {
                    let command = self.src.get()?;
                    self.src.skip_whitespace()?;
                    if self.src.peek()? != "{" {
                        return Err(err(TexErrKind::MissingOpenBraceAfter(
                            strip_reserved_suffix(&command).to_string(),
                        )));
                    }
                    let child = Box::new(self.parse_text_field()?);
                    children.push(MathNode::EnterTextMode { command, child });
                }

                TokenCode::Left => {
                    self.src.advance();
                    let left = self.delimiter_after("\\left")?;

                    let child = Box::new(self.parse_math_list()?);

                    if self.src.peek()? != "\\right" {
                        return Err(err(TexErrKind::UnmatchedLeft));
                    }
                    self.src.advance();
                    let right = self.delimiter_after("\\right")?;

                    children.push(MathNode::Delimited { left, right, child });
                }

                TokenCode::Big => {
                    let command = self.src.get()?;
                    let delimiter = self.delimiter_after(strip_reserved_suffix(&command))?;
                    children.push(MathNode::Big { command, delimiter });
                }

                TokenCode::Superscript => {
                    self.src.advance();
                    if let MathNode::Scripts { upper: Some(_), .. } = prepare_scripts(&mut children)
                    {
                        return Err(err(TexErrKind::DoubleSuperscript));
                    }
                    let field = self.parse_math_field()?;
                    let Some(MathNode::Scripts { upper, .. }) = children.last_mut() else {
                        unreachable!()
                    };
                    *upper = Some(Box::new(field));
                }

                TokenCode::Subscript => {
                    self.src.advance();
                    if let MathNode::Scripts { lower: Some(_), .. } = prepare_scripts(&mut children)
                    {
                        return Err(err(TexErrKind::DoubleSubscript));
                    }
                    let field = self.parse_math_field()?;
                    let Some(MathNode::Scripts { lower, .. }) = children.last_mut() else {
                        unreachable!()
                    };
                    *lower = Some(Box::new(field));
                }

                TokenCode::Prime => {
                    // A run of primes becomes a superscript list of
                    // "\prime" symbols, possibly merged with an explicit
                    // superscript: "f''^2" is legal.
                    let mut superscript = Vec::new();
                    while self.src.peek()? == "'" {
                        superscript.push(MathNode::Symbol("\\prime".to_string()));
                        self.src.advance();
                    }

                    if let MathNode::Scripts { upper: Some(_), .. } = prepare_scripts(&mut children)
                    {
                        return Err(err(TexErrKind::DoubleSuperscript));
                    }

                    if self.src.peek()? == "^" {
                        self.src.advance();
                        superscript.push(self.parse_math_field()?);
                    }

                    let Some(MathNode::Scripts { upper, .. }) = children.last_mut() else {
                        unreachable!()
                    };
                    *upper = Some(Box::new(MathNode::Group(Box::new(MathNode::List(
                        superscript,
                    )))));
                }

                TokenCode::Limits => {
                    let command = self.src.get()?;
                    let Some(last) = children.last_mut() else {
                        return Err(err(TexErrKind::MisplacedLimits(command)));
                    };
                    match last {
                        MathNode::Scripts { base, .. } => {
                            let child = base.take();
                            *base = Some(Box::new(MathNode::Limits { command, child }));
                        }
                        _ => {
                            let child = std::mem::replace(last, MathNode::List(Vec::new()));
                            *last = MathNode::Limits {
                                command,
                                child: Some(Box::new(child)),
                            };
                        }
                    }
                }

                TokenCode::Command1Arg => {
                    let command = self.src.get()?;
                    if command == "\\substack" {
                        children.push(self.parse_substack()?);
                    } else {
                        let child = Box::new(self.parse_math_field()?);
                        children.push(MathNode::Command1Arg { command, child });
                    }
                }

                TokenCode::StyleChange => {
                    let command = self.src.get()?;
                    let child = Box::new(self.parse_math_list()?);
                    children.push(MathNode::StyleChange { command, child });
                }

                TokenCode::Command2Args => {
                    let command = self.src.get()?;
                    let child1 = Box::new(self.parse_math_field()?);
                    let child2 = Box::new(self.parse_math_field()?);
                    children.push(MathNode::Command2Args {
                        command,
                        child1,
                        child2,
                        is_infix: false,
                    });
                }

                TokenCode::CommandInfix => {
                    if infix.is_some() {
                        return Err(err(TexErrKind::AmbiguousInfix(self.src.peek()?)));
                    }
                    let command = self.src.get()?;
                    infix = Some((command, std::mem::take(&mut children)));
                }

                // Illegal tokens are reported by math_token_code.
                TokenCode::Illegal => unreachable!(),
            }
        }
    }

    /// Reads a single argument: either one symbol token or a braced group.
    fn parse_math_field(&mut self) -> Result<MathNode, TexError> {
        self.src.skip_whitespace()?;
        let command = self.src.get()?;

        match math_token_code(&command).map_err(err)? {
            TokenCode::Symbol => Ok(MathNode::Symbol(command)),
            TokenCode::BeginGroup => {
                let inner = self.parse_math_list()?;
                if self.src.peek()? != "}" {
                    return Err(err(TexErrKind::UnmatchedOpenBrace));
                }
                self.src.advance();
                Ok(MathNode::Group(Box::new(inner)))
            }
            TokenCode::EndOfInput => Err(err(TexErrKind::MissingOpenBraceAtEnd)),
            _ => Err(err(TexErrKind::MissingOpenBraceBefore(
                strip_reserved_suffix(&command).to_string(),
            ))),
        }
    }

    fn delimiter_after(&mut self, command: &str) -> Result<String, TexError> {
        self.src.skip_whitespace()?;
        let delimiter = self.src.get()?;
        if delimiter.is_empty() {
            return Err(err(TexErrKind::MissingDelimiter(command.to_string())));
        }
        if !DELIMITERS.contains_key(delimiter.as_str()) {
            return Err(err(TexErrKind::IllegalDelimiter(command.to_string())));
        }
        Ok(delimiter)
    }

    fn parse_environment(&mut self) -> Result<MathNode, TexError> {
        let begin_command = self.src.get()?;
        let name = match environment_name(&begin_command) {
            Some(name) => name.to_string(),
            None => unreachable!(),
        };

        let rows = self.parse_math_table()?;

        let end_command = self.src.get()?;
        if math_token_code(&end_command).map_err(err)? != TokenCode::EndEnvironment {
            return Err(err(TexErrKind::UnmatchedBegin));
        }
        if environment_name(&end_command) != Some(name.as_str()) {
            return Err(err(TexErrKind::MismatchedBeginAndEnd(
                begin_command,
                end_command,
            )));
        }

        if name == "cases" && rows.iter().any(|row| row.len() > 2) {
            return Err(err(TexErrKind::CasesRowTooBig));
        }

        Ok(MathNode::Environment { name, rows })
    }

    // "\substack{a \\ b}" takes table material in braces rather than a
    // \begin ... \end pair.
    fn parse_substack(&mut self) -> Result<MathNode, TexError> {
        self.src.skip_whitespace()?;
        if self.src.peek()? != "{" {
            return Err(err(TexErrKind::MissingOpenBraceAfter(
                "\\substack".to_string(),
            )));
        }
        self.src.advance();

        let rows = self.parse_math_table()?;

        if self.src.peek()? != "}" {
            return Err(err(TexErrKind::UnmatchedOpenBrace));
        }
        self.src.advance();

        Ok(MathNode::Environment {
            name: "substack".to_string(),
            rows,
        })
    }

    fn parse_math_table(&mut self) -> Result<Vec<Vec<MathNode>>, TexError> {
        let mut rows: Vec<Vec<MathNode>> = Vec::new();
        let mut row: Vec<MathNode> = Vec::new();

        loop {
            let entry = self.parse_math_list()?;

            match self.math_code_at_peek()? {
                TokenCode::NextCell => {
                    self.src.advance();
                    row.push(entry);
                }
                TokenCode::NextRow => {
                    self.src.advance();
                    row.push(entry);
                    rows.push(std::mem::take(&mut row));
                }
                _ => {
                    // A trailing blank row is dropped, so that e.g.
                    // "\begin{matrix} a \\ \end{matrix}" has a single row.
                    let blank = matches!(&entry, MathNode::List(c) if c.is_empty());
                    if !blank || !row.is_empty() {
                        row.push(entry);
                        rows.push(row);
                    }
                    return Ok(rows);
                }
            }
        }
    }

    fn parse_text_field(&mut self) -> Result<TextNode, TexError> {
        self.src.skip_whitespace()?;
        let command = self.src.get()?;

        match text_token_code(&command).map_err(err)? {
            TokenCode::Symbol => Ok(TextNode::Symbol(command)),
            TokenCode::BeginGroup => {
                let inner = self.parse_text_list()?;
                if self.src.peek()? != "}" {
                    return Err(err(TexErrKind::UnmatchedOpenBrace));
                }
                self.src.advance();
                Ok(TextNode::Group(Box::new(inner)))
            }
            TokenCode::EndOfInput => Err(err(TexErrKind::MissingOpenBraceAtEnd)),
            _ => Err(err(TexErrKind::MissingOpenBraceBefore(
                strip_reserved_suffix(&command).to_string(),
            ))),
        }
    }

    fn parse_text_list(&mut self) -> Result<TextNode, TexError> {
        let mut children: Vec<TextNode> = Vec::new();

        loop {
            match self.text_code_at_peek()? {
                TokenCode::EndGroup | TokenCode::EndOfInput => {
                    return Ok(if children.len() == 1 {
                        children.remove(0)
                    } else {
                        TextNode::List(children)
                    });
                }

                TokenCode::Newcommand => self.src.handle_newcommand()?,

                TokenCode::BeginGroup => {
                    self.src.advance();
                    let inner = self.parse_text_list()?;
                    if self.src.peek()? != "}" {
                        return Err(err(TexErrKind::UnmatchedOpenBrace));
                    }
                    self.src.advance();
                    children.push(TextNode::Group(Box::new(inner)));
                }

                TokenCode::Whitespace | TokenCode::Symbol | TokenCode::SymbolUnsafe => {
                    children.push(TextNode::Symbol(self.src.get()?));
                }

                TokenCode::Command1Arg => {
                    let command = self.src.get()?;
                    let child = Box::new(self.parse_text_field()?);
                    children.push(TextNode::Command1Arg { command, child });
                }

                TokenCode::StyleChange => {
                    let command = self.src.get()?;
                    let child = Box::new(self.parse_text_list()?);
                    children.push(TextNode::StyleChange { command, child });
                }

                // The remaining codes never appear in the text token table.
                _ => unreachable!(),
            }
        }
    }
}

/// Ensures the list ends with a `Scripts` node that the pending script
/// can attach to: an existing one is reused, the previous node becomes a
/// base, and an empty list gets a base-less node.
fn prepare_scripts(children: &mut Vec<MathNode>) -> &mut MathNode {
    match children.last() {
        Some(MathNode::Scripts { .. }) => {}
        Some(_) => {
            let base = children.pop().map(Box::new);
            children.push(MathNode::Scripts {
                base,
                upper: None,
                lower: None,
            });
        }
        None => children.push(MathNode::Scripts {
            base: None,
            upper: None,
            lower: None,
        }),
    }
    match children.last_mut() {
        Some(node) => node,
        None => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex_parser::lexer::tokenise;

    fn parse(input: &str) -> Result<MathNode, TexError> {
        Parser::parse(tokenise(input).unwrap())
    }

    fn sym(s: &str) -> MathNode {
        MathNode::Symbol(s.to_string())
    }

    #[test]
    fn symbol_runs() {
        assert_eq!(parse("x").unwrap(), sym("x"));
        assert_eq!(
            parse("x+1").unwrap(),
            MathNode::List(vec![sym("x"), sym("+"), sym("1")])
        );
        assert_eq!(parse("").unwrap(), MathNode::List(vec![]));
    }

    #[test]
    fn groups_unwrap_singletons() {
        assert_eq!(
            parse("{x}").unwrap(),
            MathNode::Group(Box::new(sym("x")))
        );
        assert_eq!(
            parse("{}").unwrap(),
            MathNode::Group(Box::new(MathNode::List(vec![])))
        );
    }

    #[test]
    fn scripts() {
        assert_eq!(
            parse("x^2").unwrap(),
            MathNode::Scripts {
                base: Some(Box::new(sym("x"))),
                upper: Some(Box::new(sym("2"))),
                lower: None,
            }
        );
        // Order of ^ and _ does not matter.
        assert_eq!(parse("x^2_3").unwrap(), parse("x_3^2").unwrap());
        // A script with no base.
        assert_eq!(
            parse("^2").unwrap(),
            MathNode::Scripts {
                base: None,
                upper: Some(Box::new(sym("2"))),
                lower: None,
            }
        );
    }

    #[test]
    fn double_scripts_are_rejected() {
        assert_eq!(
            parse("x^2^3").unwrap_err().1,
            TexErrKind::DoubleSuperscript
        );
        assert_eq!(parse("x_2_3").unwrap_err().1, TexErrKind::DoubleSubscript);
    }

    #[test]
    fn script_argument_must_be_symbol_or_group() {
        assert_eq!(
            parse(r"x^\frac").unwrap_err().1,
            TexErrKind::MissingOpenBraceBefore("\\frac".to_string())
        );
        assert_eq!(
            parse("x^").unwrap_err().1,
            TexErrKind::MissingOpenBraceAtEnd
        );
        // SymbolUnsafe tokens can't stand alone as a script.
        assert_eq!(
            parse(r"x^\lim").unwrap_err().1,
            TexErrKind::MissingOpenBraceBefore("\\lim".to_string())
        );
        assert!(parse(r"x^\alpha").is_ok());
    }

    #[test]
    fn primes_become_superscripts() {
        assert_eq!(
            parse("f'").unwrap(),
            MathNode::Scripts {
                base: Some(Box::new(sym("f"))),
                upper: Some(Box::new(MathNode::Group(Box::new(MathNode::List(vec![
                    sym("\\prime")
                ]))))),
                lower: None,
            }
        );
        let MathNode::Scripts { upper, .. } = parse("f''^a").unwrap() else {
            panic!("expected scripts");
        };
        assert_eq!(
            upper,
            Some(Box::new(MathNode::Group(Box::new(MathNode::List(vec![
                sym("\\prime"),
                sym("\\prime"),
                sym("a"),
            ])))))
        );
        assert_eq!(
            parse("f'^a^b").unwrap_err().1,
            TexErrKind::DoubleSuperscript
        );
    }

    #[test]
    fn prime_and_subscript_share_one_base() {
        assert!(matches!(
            parse("f'_n").unwrap(),
            MathNode::Scripts { base: Some(_), lower: Some(_), upper: Some(_) }
        ));
    }

    #[test]
    fn two_argument_commands() {
        assert_eq!(
            parse(r"\frac x y").unwrap(),
            MathNode::Command2Args {
                command: "\\frac".to_string(),
                child1: Box::new(sym("x")),
                child2: Box::new(sym("y")),
                is_infix: false,
            }
        );
    }

    #[test]
    fn infix_commands() {
        assert_eq!(
            parse(r"a \over b").unwrap(),
            MathNode::Command2Args {
                command: "\\over".to_string(),
                child1: Box::new(MathNode::List(vec![sym("a")])),
                child2: Box::new(MathNode::List(vec![sym("b")])),
                is_infix: true,
            }
        );
        assert_eq!(
            parse(r"a \over b \over c").unwrap_err().1,
            TexErrKind::AmbiguousInfix("\\over".to_string())
        );
        // Braces disambiguate.
        assert!(parse(r"{a \over b} \over c").is_ok());
    }

    #[test]
    fn left_right() {
        assert_eq!(
            parse(r"\left( x \right)").unwrap(),
            MathNode::Delimited {
                left: "(".to_string(),
                right: ")".to_string(),
                child: Box::new(sym("x")),
            }
        );
        assert_eq!(
            parse(r"\left( x").unwrap_err().1,
            TexErrKind::UnmatchedLeft
        );
        assert_eq!(
            parse(r"x \right)").unwrap_err().1,
            TexErrKind::UnmatchedRight
        );
        assert_eq!(
            parse(r"\left q x \right)").unwrap_err().1,
            TexErrKind::IllegalDelimiter("\\left".to_string())
        );
        // The null delimiter is accepted.
        assert!(parse(r"\left. x \right|").is_ok());
    }

    #[test]
    fn environments() {
        let parsed = parse(r"\begin{matrix} a & b \\ c & d \end{matrix}").unwrap();
        assert_eq!(
            parsed,
            MathNode::Environment {
                name: "matrix".to_string(),
                rows: vec![
                    vec![
                        MathNode::List(vec![sym("a")]),
                        MathNode::List(vec![sym("b")])
                    ],
                    vec![
                        MathNode::List(vec![sym("c")]),
                        MathNode::List(vec![sym("d")])
                    ],
                ],
            }
        );
    }

    #[test]
    fn trailing_blank_row_is_dropped() {
        let MathNode::Environment { rows, .. } =
            parse(r"\begin{matrix} a \\ \end{matrix}").unwrap()
        else {
            panic!("expected environment");
        };
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn mismatched_environments() {
        assert_eq!(
            parse(r"\begin{pmatrix} a \end{matrix}").unwrap_err().1,
            TexErrKind::MismatchedBeginAndEnd(
                "\\begin{pmatrix}".to_string(),
                "\\end{matrix}".to_string()
            )
        );
        assert_eq!(
            parse(r"\begin{matrix} a ").unwrap_err().1,
            TexErrKind::UnmatchedBegin
        );
        assert_eq!(
            parse(r"x \end{matrix}").unwrap_err().1,
            TexErrKind::UnmatchedEnd
        );
    }

    #[test]
    fn cases_rows_are_limited_to_two_entries() {
        assert!(parse(r"\begin{cases} a & b \\ c & d \end{cases}").is_ok());
        assert_eq!(
            parse(r"\begin{cases} a & b & c \end{cases}").unwrap_err().1,
            TexErrKind::CasesRowTooBig
        );
    }

    #[test]
    fn substack_takes_braced_rows() {
        assert_eq!(
            parse(r"\substack{a \\ b}").unwrap(),
            MathNode::Environment {
                name: "substack".to_string(),
                rows: vec![
                    vec![MathNode::List(vec![sym("a")])],
                    vec![MathNode::List(vec![sym("b")])],
                ],
            }
        );
    }

    #[test]
    fn limits_modifiers() {
        let parsed = parse(r"\sum\limits_n").unwrap();
        let MathNode::Scripts { base: Some(base), .. } = parsed else {
            panic!("expected scripts");
        };
        assert_eq!(
            *base,
            MathNode::Limits {
                command: "\\limits".to_string(),
                child: Some(Box::new(sym("\\sum"))),
            }
        );
        assert_eq!(
            parse(r"\limits").unwrap_err().1,
            TexErrKind::MisplacedLimits("\\limits".to_string())
        );
    }

    #[test]
    fn text_mode() {
        assert_eq!(
            parse(r"\hbox{ab c}").unwrap(),
            MathNode::EnterTextMode {
                command: "\\hbox".to_string(),
                child: Box::new(TextNode::Group(Box::new(TextNode::List(vec![
                    TextNode::Symbol("a".to_string()),
                    TextNode::Symbol("b".to_string()),
                    TextNode::Symbol(" ".to_string()),
                    TextNode::Symbol("c".to_string()),
                ])))),
            }
        );
        assert_eq!(
            parse(r"\hbox x").unwrap_err().1,
            TexErrKind::MissingOpenBraceAfter("\\hbox".to_string())
        );
    }

    #[test]
    fn stray_group_closers() {
        assert_eq!(parse("x}").unwrap_err().1, TexErrKind::UnmatchedCloseBrace);
        assert_eq!(parse("{x").unwrap_err().1, TexErrKind::UnmatchedOpenBrace);
        assert_eq!(parse("x & y").unwrap_err().1, TexErrKind::UnexpectedNextCell);
    }

    #[test]
    fn newcommand_in_stream() {
        assert_eq!(
            parse(r"\newcommand{\f}[1]{#1+#1}\f x").unwrap(),
            MathNode::List(vec![sym("x"), sym("+"), sym("x")])
        );
    }
}
