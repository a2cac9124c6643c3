use std::fmt;

use strum_macros::IntoStaticStr;

/// An error raised while converting a formula, together with the
/// approximate token offset in the input where it occurred (0 when no
/// useful position is available).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexError(pub usize, pub TexErrKind);

#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum TexErrKind {
    NonAsciiInMathMode,
    IllegalCharacter,
    /// The character (given as "U+XXXXXXXX") cannot be expressed in
    /// purified TeX.
    LatexIncompatibleCharacter(String),
    ReservedCommand(String),
    TooManyTokens,
    IllegalFinalBackslash,
    UnrecognisedCommand(String),
    IllegalCommandInMathMode(String),
    IllegalCommandInMathModeWithHint(String, String),
    IllegalCommandInTextMode(String),
    IllegalCommandInTextModeWithHint(String, String),
    MissingOpenBraceBefore(String),
    MissingOpenBraceAfter(String),
    MissingOpenBraceAtEnd,
    NotEnoughArguments(String),
    MissingCommandAfterNewcommand,
    IllegalRedefinition(String),
    MissingOrIllegalParameterCount(String),
    MissingOrIllegalParameterIndex(String),
    UnmatchedOpenBracket,
    UnmatchedOpenBrace,
    UnmatchedCloseBrace,
    UnmatchedLeft,
    UnmatchedRight,
    UnmatchedBegin,
    UnmatchedEnd,
    UnexpectedNextCell,
    UnexpectedNextRow,
    MismatchedBeginAndEnd(String, String),
    CasesRowTooBig,
    MissingDelimiter(String),
    IllegalDelimiter(String),
    MisplacedLimits(String),
    DoubleSuperscript,
    DoubleSubscript,
    AmbiguousInfix(String),
    UnavailableSymbolFontCombination(String, String),
    InvalidNegation,
    TooManyMathmlNodes,
    /// `generate_mathml` or `generate_purified_tex` was called before a
    /// successful `process_input`.
    NothingProcessed,
}

impl TexErrKind {
    /// The stable, machine-readable name of the error code.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Deferred errors do not abort `process_input`; they are stored and
    /// re-raised when MathML is requested, so that purified TeX can still
    /// be generated for the same input.
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            TexErrKind::InvalidNegation | TexErrKind::UnavailableSymbolFontCombination(_, _)
        )
    }

    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            TexErrKind::NonAsciiInMathMode => {
                "Non-ASCII characters may only be used in text mode \
                 (try enclosing the problem characters in \"\\text{...}\")"
                    .to_string()
            }
            TexErrKind::IllegalCharacter => "Illegal character in input".to_string(),
            TexErrKind::LatexIncompatibleCharacter(c) => {
                "Unable to generate purified TeX for the character ".to_string() + c
            }
            TexErrKind::ReservedCommand(cmd) => {
                "The command \"".to_string() + cmd + "\" is reserved for internal use"
            }
            TexErrKind::TooManyTokens => "The input is too long".to_string(),
            TexErrKind::IllegalFinalBackslash => {
                "Illegal backslash \"\\\" at end of input".to_string()
            }
            TexErrKind::UnrecognisedCommand(cmd) => {
                "Unrecognised command \"".to_string() + cmd + "\""
            }
            TexErrKind::IllegalCommandInMathMode(cmd) => {
                "The command \"".to_string() + cmd + "\" is illegal in math mode"
            }
            TexErrKind::IllegalCommandInMathModeWithHint(cmd, hint) => {
                "The command \"".to_string()
                    + cmd
                    + "\" is illegal in math mode (perhaps you intended to use \""
                    + hint
                    + "\" instead?)"
            }
            TexErrKind::IllegalCommandInTextMode(cmd) => {
                "The command \"".to_string() + cmd + "\" is illegal in text mode"
            }
            TexErrKind::IllegalCommandInTextModeWithHint(cmd, hint) => {
                "The command \"".to_string()
                    + cmd
                    + "\" is illegal in text mode (perhaps you intended to use \""
                    + hint
                    + "\" instead?)"
            }
            TexErrKind::MissingOpenBraceBefore(cmd) => {
                "Missing open brace \"{\" before \"".to_string() + cmd + "\""
            }
            TexErrKind::MissingOpenBraceAfter(cmd) => {
                "Missing open brace \"{\" after \"".to_string() + cmd + "\""
            }
            TexErrKind::MissingOpenBraceAtEnd => {
                "Missing open brace \"{\" at end of input".to_string()
            }
            TexErrKind::NotEnoughArguments(cmd) => {
                "Not enough arguments were supplied for \"".to_string() + cmd + "\""
            }
            TexErrKind::MissingCommandAfterNewcommand => {
                "Missing or illegal new command name after \"\\newcommand\" \
                 (there must be precisely one command defined; it must begin with \
                 a backslash \"\\\" and contain only alphabetic characters)"
                    .to_string()
            }
            TexErrKind::IllegalRedefinition(cmd) => {
                "The command \"".to_string()
                    + cmd
                    + "\" has already been defined; you cannot redefine it"
            }
            TexErrKind::MissingOrIllegalParameterCount(cmd) => {
                "Missing or illegal parameter count in definition of \"".to_string()
                    + cmd
                    + "\" (must be a single digit between 1 and 9 inclusive)"
            }
            TexErrKind::MissingOrIllegalParameterIndex(cmd) => {
                "Missing or illegal parameter index in definition of \"".to_string() + cmd + "\""
            }
            TexErrKind::UnmatchedOpenBracket => {
                "Encountered open bracket \"[\" without matching close bracket \"]\"".to_string()
            }
            TexErrKind::UnmatchedOpenBrace => {
                "Encountered open brace \"{\" without matching close brace \"}\"".to_string()
            }
            TexErrKind::UnmatchedCloseBrace => {
                "Encountered close brace \"}\" without matching open brace \"{\"".to_string()
            }
            TexErrKind::UnmatchedLeft => {
                "Encountered \"\\left\" without matching \"\\right\"".to_string()
            }
            TexErrKind::UnmatchedRight => {
                "Encountered \"\\right\" without matching \"\\left\"".to_string()
            }
            TexErrKind::UnmatchedBegin => {
                "Encountered \"\\begin\" without matching \"\\end\"".to_string()
            }
            TexErrKind::UnmatchedEnd => {
                "Encountered \"\\end\" without matching \"\\begin\"".to_string()
            }
            TexErrKind::UnexpectedNextCell => {
                "The command \"&\" may only appear inside a \"\\begin ... \\end\" block"
                    .to_string()
            }
            TexErrKind::UnexpectedNextRow => {
                "The command \"\\\\\" may only appear inside a \"\\begin ... \\end\" block"
                    .to_string()
            }
            TexErrKind::MismatchedBeginAndEnd(begin, end) => {
                "Commands \"".to_string() + begin + "\" and \"" + end + "\" do not match"
            }
            TexErrKind::CasesRowTooBig => {
                "There can only be two entries in each row of a \"cases\" block".to_string()
            }
            TexErrKind::MissingDelimiter(cmd) => {
                "Missing delimiter after \"".to_string() + cmd + "\""
            }
            TexErrKind::IllegalDelimiter(cmd) => {
                "Illegal delimiter following \"".to_string() + cmd + "\""
            }
            TexErrKind::MisplacedLimits(cmd) => {
                "The command \"".to_string()
                    + cmd
                    + "\" can only appear after a math operator (consider using \"\\mathop\")"
            }
            TexErrKind::DoubleSuperscript => {
                "Encountered two superscripts attached to the same base (only one is allowed)"
                    .to_string()
            }
            TexErrKind::DoubleSubscript => {
                "Encountered two subscripts attached to the same base (only one is allowed)"
                    .to_string()
            }
            TexErrKind::AmbiguousInfix(cmd) => {
                "Ambiguous placement of \"".to_string()
                    + cmd
                    + "\" (try using additional braces \"{ ... }\" to disambiguate)"
            }
            TexErrKind::UnavailableSymbolFontCombination(symbol, font) => {
                "The symbol \"".to_string()
                    + symbol
                    + "\" is not available in the font \""
                    + font
                    + "\""
            }
            TexErrKind::InvalidNegation => {
                "No negative version of the symbol(s) following \"\\not\" is available"
                    .to_string()
            }
            TexErrKind::TooManyMathmlNodes => {
                "The MathML output would contain too many nodes".to_string()
            }
            TexErrKind::NothingProcessed => {
                "No input has been processed yet".to_string()
            }
        }
    }
}

impl fmt::Display for TexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1.string())
    }
}

impl std::error::Error for TexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages() {
        let err = TexErrKind::UnrecognisedCommand("\\foo".to_string());
        assert_eq!(err.code(), "UnrecognisedCommand");
        assert_eq!(err.string(), "Unrecognised command \"\\foo\"");

        let err = TexErrKind::MismatchedBeginAndEnd(
            "\\begin{pmatrix}".to_string(),
            "\\end{matrix}".to_string(),
        );
        assert_eq!(
            err.string(),
            "Commands \"\\begin{pmatrix}\" and \"\\end{matrix}\" do not match"
        );
    }

    #[test]
    fn deferred_classification() {
        assert!(TexErrKind::InvalidNegation.is_deferred());
        assert!(
            TexErrKind::UnavailableSymbolFontCombination("a".into(), "\\mathbb".into())
                .is_deferred()
        );
        assert!(!TexErrKind::DoubleSuperscript.is_deferred());
    }

    #[test]
    fn display_includes_position() {
        let err = TexError(4, TexErrKind::DoubleSubscript);
        assert_eq!(
            err.to_string(),
            "4: Encountered two subscripts attached to the same base (only one is allowed)"
        );
    }
}
