//! Purified TeX generation.
//!
//! Reconstructs a formula from the parse tree as a self-contained LaTeX
//! document that a stock `latex` binary can compile: macros are already
//! expanded, `\usepackage` lines cover every command in the output, and
//! characters LaTeX cannot digest are rejected.

use crate::latex_parser::error::{TexErrKind, TexError};
use crate::latex_parser::lexer::tokenise;
use crate::parse_node::{MathNode, TextNode};
use crate::symbol_tables::{
    is_latexable_unicode, AMSFONTS_COMMANDS, AMSMATH_COMMANDS, AMSSYMB_COMMANDS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PurifiedTexOptions {
    /// Allow the `ucs` LaTeX package, which makes a selection of
    /// non-ASCII characters available in text mode via `\unichar`.
    pub use_ucs_package: bool,
}

impl MathNode {
    fn write_purified_tex(
        &self,
        out: &mut String,
        options: &PurifiedTexOptions,
    ) -> Result<(), TexError> {
        match self {
            MathNode::Symbol(command) => {
                out.push(' ');
                out.push_str(command);
            }

            MathNode::List(children) => {
                for child in children {
                    child.write_purified_tex(out, options)?;
                }
            }

            MathNode::Group(child) => {
                out.push('{');
                child.write_purified_tex(out, options)?;
                out.push('}');
            }

            MathNode::Scripts { base, upper, lower } => {
                if let Some(base) = base {
                    base.write_purified_tex(out, options)?;
                }
                if let Some(upper) = upper {
                    out.push_str("^{");
                    upper.write_purified_tex(out, options)?;
                    out.push('}');
                }
                if let Some(lower) = lower {
                    out.push_str("_{");
                    lower.write_purified_tex(out, options)?;
                    out.push('}');
                }
            }

            MathNode::Command1Arg { command, child } => {
                // "\not <" has to stay unbraced; "\not{<}" does not
                // compile.
                if command == "\\not" {
                    out.push_str(command);
                    out.push(' ');
                    child.write_purified_tex(out, options)?;
                } else {
                    out.push_str(command);
                    out.push('{');
                    child.write_purified_tex(out, options)?;
                    out.push('}');
                }
            }

            MathNode::Command2Args {
                command,
                child1,
                child2,
                is_infix,
            } => {
                if *is_infix {
                    out.push('{');
                    child1.write_purified_tex(out, options)?;
                    out.push('}');
                    out.push_str(command);
                    out.push('{');
                    child2.write_purified_tex(out, options)?;
                    out.push('}');
                } else if command == "\\rootReserved" {
                    out.push_str("\\sqrt[{");
                    child1.write_purified_tex(out, options)?;
                    out.push_str("}]{");
                    child2.write_purified_tex(out, options)?;
                    out.push('}');
                } else {
                    out.push_str(command);
                    out.push('{');
                    child1.write_purified_tex(out, options)?;
                    out.push_str("}{");
                    child2.write_purified_tex(out, options)?;
                    out.push('}');
                }
            }

            MathNode::Limits { command, child } => {
                if let Some(child) = child {
                    child.write_purified_tex(out, options)?;
                }
                out.push_str(command);
            }

            MathNode::StyleChange { command, child } => {
                out.push_str(command);
                child.write_purified_tex(out, options)?;
            }

            MathNode::EnterTextMode { command, child } => {
                out.push_str(command);
                out.push('{');
                child.write_purified_tex(out, options)?;
                out.push('}');
            }

            MathNode::Big { command, delimiter } => {
                out.push_str(command);
                out.push_str(delimiter);
            }

            MathNode::Delimited { left, right, child } => {
                out.push_str("\\left");
                out.push_str(left);
                child.write_purified_tex(out, options)?;
                out.push_str("\\right");
                out.push_str(right);
            }

            MathNode::Environment { name, rows } => {
                // \substack takes its rows in braces rather than in a
                // \begin...\end pair.
                if name == "substack" {
                    out.push_str("\\substack{");
                    write_table(rows, out, options)?;
                    out.push('}');
                } else {
                    out.push_str("\\begin{");
                    out.push_str(name);
                    out.push('}');
                    write_table(rows, out, options)?;
                    out.push_str("\\end{");
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        Ok(())
    }
}

fn write_table(
    rows: &[Vec<MathNode>],
    out: &mut String,
    options: &PurifiedTexOptions,
) -> Result<(), TexError> {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(" \\\\");
        }
        for (j, entry) in row.iter().enumerate() {
            if j > 0 {
                out.push_str(" &");
            }
            entry.write_purified_tex(out, options)?;
        }
    }
    Ok(())
}

impl TextNode {
    fn write_purified_tex(
        &self,
        out: &mut String,
        options: &PurifiedTexOptions,
    ) -> Result<(), TexError> {
        match self {
            TextNode::Symbol(command) => {
                let mut chars = command.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if c as u32 > 0x7F {
                        if options.use_ucs_package && is_latexable_unicode(c) {
                            out.push_str("\\unichar{");
                            out.push_str(&(c as u32).to_string());
                            out.push('}');
                        } else {
                            return Err(TexError(
                                0,
                                TexErrKind::LatexIncompatibleCharacter(format!(
                                    "U+{:08X}",
                                    c as u32
                                )),
                            ));
                        }
                        return Ok(());
                    }
                }
                out.push_str(command);
            }

            TextNode::List(children) => {
                for child in children {
                    child.write_purified_tex(out, options)?;
                }
            }

            TextNode::Group(child) => {
                out.push('{');
                child.write_purified_tex(out, options)?;
                out.push('}');
            }

            TextNode::Command1Arg { command, child } => {
                out.push_str(command);
                out.push('{');
                child.write_purified_tex(out, options)?;
                out.push('}');
            }

            TextNode::StyleChange { command, child } => {
                out.push_str(command);
                child.write_purified_tex(out, options)?;
            }
        }
        Ok(())
    }
}

/// Reconstructs the formula alone, without the document envelope.
pub fn purified_tex_fragment(
    tree: &MathNode,
    options: &PurifiedTexOptions,
) -> Result<String, TexError> {
    let mut out = String::new();
    tree.write_purified_tex(&mut out, options)?;
    Ok(out)
}

/// Wraps the reconstructed formula in a complete LaTeX document, with
/// `\usepackage` lines for exactly the packages its commands need.
pub fn purified_tex_document(
    tree: &MathNode,
    options: &PurifiedTexOptions,
) -> Result<String, TexError> {
    let latex = purified_tex_fragment(tree, options)?;

    // Re-tokenise the output to find which commands appear in it. The
    // input never fails here since it was reconstructed from a parse
    // tree.
    let tokens = tokenise(&latex)?;

    let mut needs_amsmath = false;
    let mut needs_amsfonts = false;
    let mut needs_amssymb = false;
    let mut needs_ucs = false;
    for token in &tokens {
        if !token.starts_with('\\') {
            continue;
        }
        let token = token.as_str();
        needs_amsmath |= AMSMATH_COMMANDS.contains(token);
        needs_amsfonts |= AMSFONTS_COMMANDS.contains(token);
        needs_amssymb |= AMSSYMB_COMMANDS.contains(token);
        needs_ucs |= token == "\\unichar";
    }

    let mut output = String::from("\\nonstopmode\n\\documentclass[12pt]{article}\n");
    if needs_amsmath {
        output.push_str("\\usepackage{amsmath}\n");
    }
    if needs_amsfonts {
        output.push_str("\\usepackage{amsfonts}\n");
    }
    if needs_amssymb {
        output.push_str("\\usepackage{amssymb}\n");
    }
    if needs_ucs {
        output.push_str("\\usepackage{ucs}\n");
    }
    output.push_str("\\pagestyle{empty}\n\\begin{document}\n$\n");
    output.push_str(&latex);
    output.push_str("\n$\n\\end{document}\n");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex_parser::parse::Parser;

    fn fragment(input: &str) -> String {
        let tree = Parser::parse(tokenise(input).unwrap()).unwrap();
        purified_tex_fragment(&tree, &PurifiedTexOptions::default()).unwrap()
    }

    #[test]
    fn symbols_are_space_separated() {
        assert_eq!(fragment("x+y"), " x + y");
        assert_eq!(fragment(r"\alpha\beta"), r" \alpha \beta");
    }

    #[test]
    fn arguments_are_rebraced() {
        assert_eq!(fragment(r"\frac12"), r"\frac{ 1}{ 2}");
        assert_eq!(fragment(r"\hat x"), r"\hat{ x}");
        assert_eq!(fragment("x^2"), " x^{ 2}");
        assert_eq!(fragment("{xy}"), "{ x y}");
    }

    #[test]
    fn negation_stays_unbraced() {
        assert_eq!(fragment(r"\not<"), r"\not  <");
    }

    #[test]
    fn infix_commands_get_explicit_groups() {
        assert_eq!(fragment(r"a\over b"), r"{ a}\over{ b}");
        assert_eq!(fragment(r"n\choose k"), r"{ n}\choose{ k}");
    }

    #[test]
    fn delimiters_and_limits() {
        assert_eq!(fragment(r"\left(x\right)"), r"\left( x\right)");
        assert_eq!(fragment(r"\sum\limits_k"), r" \sum\limits_{ k}");
        assert_eq!(fragment(r"\bigl("), r"\bigl(");
    }

    #[test]
    fn environments() {
        assert_eq!(
            fragment(r"\begin{pmatrix}a&b\\c&d\end{pmatrix}"),
            r"\begin{pmatrix} a & b \\ c & d\end{pmatrix}"
        );
        assert_eq!(fragment(r"\substack{a\\b}"), r"\substack{ a \\ b}");
    }

    #[test]
    fn document_envelope_and_packages() {
        let tree = Parser::parse(tokenise(r"\leqslant").unwrap()).unwrap();
        let doc = purified_tex_document(&tree, &PurifiedTexOptions::default()).unwrap();
        assert!(doc.starts_with("\\nonstopmode\n\\documentclass[12pt]{article}\n"));
        assert!(doc.contains("\\usepackage{amssymb}\n"));
        assert!(!doc.contains("\\usepackage{amsmath}"));
        assert!(doc.ends_with("\n$\n\\end{document}\n"));

        let tree = Parser::parse(tokenise(r"\mathbb R").unwrap()).unwrap();
        let doc = purified_tex_document(&tree, &PurifiedTexOptions::default()).unwrap();
        assert!(doc.contains("\\usepackage{amsfonts}\n"));

        let tree = Parser::parse(tokenise(r"\text{hi}").unwrap()).unwrap();
        let doc = purified_tex_document(&tree, &PurifiedTexOptions::default()).unwrap();
        assert!(doc.contains("\\usepackage{amsmath}\n"));
    }

    #[test]
    fn text_mode_unicode_needs_ucs() {
        let tree = Parser::parse(tokenise("\\text{caf\u{E9}}").unwrap()).unwrap();

        let err = purified_tex_document(&tree, &PurifiedTexOptions::default()).unwrap_err();
        assert_eq!(
            err.1,
            TexErrKind::LatexIncompatibleCharacter("U+000000E9".to_string())
        );

        let options = PurifiedTexOptions {
            use_ucs_package: true,
        };
        let doc = purified_tex_document(&tree, &options).unwrap();
        assert!(doc.contains("\\text{caf\\unichar{233}}"));
        assert!(doc.contains("\\usepackage{ucs}\n"));
    }
}
