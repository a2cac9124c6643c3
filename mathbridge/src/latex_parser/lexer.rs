use memchr::memchr;

use super::error::{TexError, TexErrKind};

/// Splits the input into tokens, each represented by a string.
///
/// The token kinds are:
/// * single characters like "a" or "{", or single non-ASCII characters,
/// * alphabetic commands like `\frac`,
/// * commands like `\,` with a single non-alphabetic character after the
///   backslash,
/// * commands like `\   ` which have their whitespace collapsed to `\ `,
/// * other consecutive whitespace, collapsed to a single `" "`,
/// * the sequence `\begin   {  stuff  }` stored as the single token
///   `\begin{  stuff  }`; whitespace is preserved between the braces but
///   not between `\begin` and `{`. Similarly for `\end`.
pub fn tokenise(input: &str) -> Result<Vec<String>, TexError> {
    let mut output: Vec<String> = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            output.push(" ".to_string());
            rest = rest.trim_start();
        } else if c != '\\' {
            // Non-printable, non-whitespace ASCII is disallowed.
            if (c as u32) < 0x20 || c == '\u{7F}' {
                return Err(TexError(output.len(), TexErrKind::IllegalCharacter));
            }
            let len = c.len_utf8();
            output.push(rest[..len].to_string());
            rest = &rest[len..];
        } else {
            rest = &rest[1..];
            let Some(after) = rest.chars().next() else {
                return Err(TexError(output.len(), TexErrKind::IllegalFinalBackslash));
            };

            if after.is_ascii_alphabetic() {
                let end = rest
                    .find(|ch: char| !ch.is_ascii_alphabetic())
                    .unwrap_or(rest.len());
                let mut token = String::from("\\");
                token.push_str(&rest[..end]);
                rest = &rest[end..];

                // "\begin  {xyz}" collapses to the single token "\begin{xyz}".
                if token == "\\begin" || token == "\\end" {
                    rest = rest.trim_start();
                    if !rest.starts_with('{') {
                        return Err(TexError(
                            output.len(),
                            TexErrKind::MissingOpenBraceAfter(token),
                        ));
                    }
                    match memchr(b'}', rest.as_bytes()) {
                        Some(close) => {
                            token.push_str(&rest[..=close]);
                            rest = &rest[close + 1..];
                        }
                        None => {
                            return Err(TexError(output.len(), TexErrKind::UnmatchedOpenBrace));
                        }
                    }
                }
                output.push(token);
            } else if after.is_whitespace() {
                output.push("\\ ".to_string());
                rest = rest.trim_start();
            } else {
                let len = after.len_utf8();
                let mut token = String::from("\\");
                token.push_str(&rest[..len]);
                output.push(token);
                rest = &rest[len..];
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        tokenise(input).unwrap()
    }

    #[test]
    fn single_characters_and_commands() {
        assert_eq!(tokens("x+y"), ["x", "+", "y"]);
        assert_eq!(tokens(r"\alpha\beta"), [r"\alpha", r"\beta"]);
        assert_eq!(tokens(r"\frac12"), [r"\frac", "1", "2"]);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(tokens("x  \t\n y"), ["x", " ", "y"]);
        assert_eq!(tokens(r"\   x"), [r"\ ", "x"]);
    }

    #[test]
    fn two_character_commands() {
        assert_eq!(tokens(r"\,\;\!"), [r"\,", r"\;", r"\!"]);
        assert_eq!(tokens(r"\\"), [r"\\"]);
    }

    #[test]
    fn begin_end_merge_with_group() {
        assert_eq!(tokens(r"\begin{matrix}"), [r"\begin{matrix}"]);
        assert_eq!(tokens(r"\begin  {  matrix  }"), [r"\begin{  matrix  }"]);
        assert_eq!(tokens(r"\end {cases}x"), [r"\end{cases}", "x"]);
    }

    #[test]
    fn begin_errors() {
        assert_eq!(
            tokenise(r"\begin matrix"),
            Err(TexError(
                0,
                TexErrKind::MissingOpenBraceAfter(r"\begin".to_string())
            ))
        );
        assert_eq!(
            tokenise(r"\begin{matrix"),
            Err(TexError(0, TexErrKind::UnmatchedOpenBrace))
        );
    }

    #[test]
    fn final_backslash_is_an_error() {
        assert_eq!(
            tokenise(r"xy\"),
            Err(TexError(2, TexErrKind::IllegalFinalBackslash))
        );
    }

    #[test]
    fn control_characters_are_illegal() {
        assert_eq!(
            tokenise("x\u{1}y"),
            Err(TexError(1, TexErrKind::IllegalCharacter))
        );
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(tokens("café"), ["c", "a", "f", "é"]);
    }
}
