use rustc_hash::FxHashMap;

use super::error::{TexError, TexErrKind};
use super::token::{MATH_TOKENS, TEXT_TOKENS, environment_name, strip_reserved_suffix};

/// An upper bound on the combined work done by macro expansion, measured
/// in tokens touched. Guards against exponential blowup from nested macro
/// definitions.
const MAX_PARSE_COST: usize = 200_000;

struct Macro {
    parameter_count: usize,
    replacement: Vec<String>,
}

/// A token stream with TeX macro expansion.
///
/// Tokens are stored in reverse, so the next token is always at the back.
/// `peek` expands macros lazily until the top of the stack is a token
/// that is not a macro call; the result is memoized until the stream is
/// advanced.
///
/// `\sqrt` needs special handling due to its optional argument: the
/// incoming token is `\sqrtReserved` (renamed before macro processing so
/// that a user-supplied `\sqrt` argument is grouped the way TeX does it),
/// and `peek` converts `\sqrtReserved[y]{x}` into `\rootReserved{y}{x}`
/// and plain `\sqrtReserved{x}` back into `\sqrt{x}`.
pub struct MacroProcessor {
    tokens: Vec<String>,
    macros: FxHashMap<String, Macro>,
    cost_incurred: usize,
    is_token_ready: bool,
}

fn err(kind: TexErrKind) -> TexError {
    TexError(0, kind)
}

impl MacroProcessor {
    pub fn new(input: Vec<String>) -> Self {
        let cost_incurred = input.len();
        let mut tokens = input;
        tokens.reverse();
        MacroProcessor {
            tokens,
            macros: FxHashMap::default(),
            cost_incurred,
            is_token_ready: false,
        }
    }

    /// Returns the next token without consuming it, expanding macros as
    /// needed. Returns the empty string at end of input.
    pub fn peek(&mut self) -> Result<String, TexError> {
        self.prepare_token()?;
        Ok(self.tokens.last().cloned().unwrap_or_default())
    }

    pub fn advance(&mut self) {
        if self.tokens.pop().is_some() {
            self.cost_incurred += 1;
            self.is_token_ready = false;
        }
    }

    /// Returns the next token and consumes it.
    pub fn get(&mut self) -> Result<String, TexError> {
        let token = self.peek()?;
        self.advance();
        Ok(token)
    }

    pub fn skip_whitespace(&mut self) -> Result<(), TexError> {
        while self.peek()? == " " {
            self.advance();
        }
        Ok(())
    }

    fn prepare_token(&mut self) -> Result<(), TexError> {
        while let Some(token) = self.tokens.last() {
            if self.is_token_ready {
                return Ok(());
            }

            self.cost_incurred += 2;
            if self.tokens.len() + self.cost_incurred >= MAX_PARSE_COST {
                return Err(err(TexErrKind::TooManyTokens));
            }

            if token == "\\sqrtReserved" {
                self.rewrite_sqrt()?;
                return Ok(());
            }

            let Some(token) = self.tokens.last().and_then(|t| {
                if self.macros.contains_key(t) {
                    Some(t.clone())
                } else {
                    None
                }
            }) else {
                // Not a macro, so we're finished here.
                self.is_token_ready = true;
                return Ok(());
            };
            self.tokens.pop();

            // It's a macro. Determine the arguments to substitute in...
            let parameter_count = self.macros[&token].parameter_count;
            let mut arguments: Vec<Vec<String>> = Vec::with_capacity(parameter_count);
            for _ in 0..parameter_count {
                let mut argument = Vec::new();
                if !self.read_argument(&mut argument)? {
                    return Err(err(TexErrKind::NotEnoughArguments(
                        strip_reserved_suffix(&token).to_string(),
                    )));
                }
                arguments.push(argument);
            }

            // ... and write out the replacement, substituting as we go.
            let replacement = &self.macros[&token].replacement;
            let mut output: Vec<String> = Vec::with_capacity(replacement.len());
            let mut source = replacement.iter();
            while let Some(piece) = source.next() {
                self.cost_incurred += 1;
                if piece != "#" {
                    output.push(piece.clone());
                    continue;
                }
                let index = source
                    .next()
                    .and_then(|t| {
                        let mut chars = t.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => (c as i64).checked_sub('1' as i64),
                            _ => None,
                        }
                    })
                    .filter(|&i| (0..parameter_count as i64).contains(&i));
                let Some(index) = index else {
                    return Err(err(TexErrKind::MissingOrIllegalParameterIndex(
                        strip_reserved_suffix(&token).to_string(),
                    )));
                };
                let argument = &arguments[index as usize];
                output.extend(argument.iter().cloned());
                self.cost_incurred += argument.len();
            }
            self.cost_incurred += output.len();
            self.tokens.extend(output.into_iter().rev());
        }

        Ok(())
    }

    // The top of the stack is "\sqrtReserved". Converts "\sqrtReserved[y]"
    // to "\rootReserved{y}", taking grouping braces into account (so
    // "\sqrt[{]}]{2}" is valid), and plain "\sqrtReserved" to "\sqrt".
    fn rewrite_sqrt(&mut self) -> Result<(), TexError> {
        self.tokens.pop();

        self.skip_whitespace()?;
        if self.tokens.last().is_some_and(|t| t == "[") {
            let open = self.tokens.len() - 1;
            self.tokens[open] = "{".to_string();

            let mut brace_depth: i32 = 0;
            let mut i = open;
            let close = loop {
                if i == 0 {
                    return Err(err(TexErrKind::UnmatchedOpenBracket));
                }
                i -= 1;
                self.cost_incurred += 1;
                match self.tokens[i].as_str() {
                    "]" if brace_depth == 0 => break i,
                    "{" => brace_depth += 1,
                    "}" => {
                        brace_depth -= 1;
                        if brace_depth < 0 {
                            return Err(err(TexErrKind::UnmatchedCloseBrace));
                        }
                    }
                    _ => {}
                }
            };
            self.tokens[close] = "}".to_string();
            self.tokens.push("\\rootReserved".to_string());
        } else {
            self.tokens.push("\\sqrt".to_string());
        }

        self.is_token_ready = true;
        Ok(())
    }

    /// Reads one macro argument: either a single token, or a braced group
    /// with the outer braces removed. Returns false if no argument is
    /// available. Tokens are collected without macro expansion; they get
    /// expanded when the substituted replacement is scanned.
    fn read_argument(&mut self, output: &mut Vec<String>) -> Result<bool, TexError> {
        self.skip_whitespace()?;
        let Some(token) = self.tokens.pop() else {
            return Ok(false);
        };
        self.cost_incurred += 1;

        if token == "}" {
            // An argument can't start with "}".
            return Ok(false);
        }

        if token == "{" {
            let mut brace_depth = 1;
            loop {
                let Some(token) = self.tokens.pop() else {
                    return Err(err(TexErrKind::UnmatchedOpenBrace));
                };
                self.cost_incurred += 1;
                match token.as_str() {
                    "{" => brace_depth += 1,
                    "}" => {
                        brace_depth -= 1;
                        if brace_depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                output.push(token);
            }
        } else {
            output.push(token);
        }

        self.is_token_ready = false;
        Ok(true)
    }

    /// Consumes a whole `\newcommand` definition, starting at the
    /// `\newcommand` token itself.
    pub fn handle_newcommand(&mut self) -> Result<(), TexError> {
        self.advance();

        self.skip_whitespace()?;
        if self.tokens.last().is_none_or(|t| t != "{") {
            return Err(err(TexErrKind::MissingOpenBraceAfter(
                "\\newcommand".to_string(),
            )));
        }
        self.tokens.pop();

        self.skip_whitespace()?;
        let Some(new_command) = self.tokens.last().filter(|t| t.starts_with('\\')).cloned() else {
            return Err(err(TexErrKind::MissingCommandAfterNewcommand));
        };
        if self.macros.contains_key(&new_command)
            || MATH_TOKENS.contains_key(&new_command)
            || TEXT_TOKENS.contains_key(&new_command)
            || environment_name(&new_command).is_some()
        {
            return Err(err(TexErrKind::IllegalRedefinition(
                strip_reserved_suffix(&new_command).to_string(),
            )));
        }
        self.tokens.pop();

        self.skip_whitespace()?;
        if self.tokens.last().is_none_or(|t| t != "}") {
            return Err(err(TexErrKind::UnmatchedOpenBrace));
        }
        self.tokens.pop();

        let mut parameter_count = 0;
        self.skip_whitespace()?;
        // An optional parameter count, e.g. "[2]".
        if self.tokens.last().is_some_and(|t| t == "[") {
            self.tokens.pop();

            self.skip_whitespace()?;
            parameter_count = self
                .tokens
                .last()
                .and_then(|t| {
                    let mut chars = t.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => c.to_digit(10),
                        _ => None,
                    }
                })
                .filter(|&n| (1..=9).contains(&n))
                .ok_or_else(|| {
                    err(TexErrKind::MissingOrIllegalParameterCount(
                        strip_reserved_suffix(&new_command).to_string(),
                    ))
                })? as usize;
            self.tokens.pop();

            self.skip_whitespace()?;
            if self.tokens.last().is_none_or(|t| t != "]") {
                return Err(err(TexErrKind::UnmatchedOpenBracket));
            }
            self.tokens.pop();
        }

        let mut replacement = Vec::new();
        if !self.read_argument(&mut replacement)? {
            return Err(err(TexErrKind::NotEnoughArguments(
                "\\newcommand".to_string(),
            )));
        }

        self.macros.insert(
            new_command,
            Macro {
                parameter_count,
                replacement,
            },
        );
        self.is_token_ready = false;
        Ok(())
    }
}
