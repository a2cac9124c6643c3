use super::error::TexErrKind;

/// Coarse classification of a single token, determining which parsing
/// rule consumes it. `Symbol` tokens may appear as the sole content of a
/// script or command argument without braces; `SymbolUnsafe` tokens may
/// not (so `x^\alpha` is accepted but `x^\lim` is rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCode {
    EndOfInput,
    Whitespace,
    Newcommand,
    Illegal,
    BeginGroup,
    EndGroup,
    NextCell,
    NextRow,
    Superscript,
    Subscript,
    Prime,
    EnterTextMode,
    Command1Arg,
    Command2Args,
    CommandInfix,
    Left,
    Right,
    Big,
    Limits,
    Symbol,
    SymbolUnsafe,
    BeginEnvironment,
    EndEnvironment,
    StyleChange,
}

pub static MATH_TOKENS: phf::Map<&'static str, TokenCode> = phf::phf_map! {
    "" => TokenCode::EndOfInput,
    " " => TokenCode::Whitespace,
    "\\newcommand" => TokenCode::Newcommand,
    "$" => TokenCode::Illegal,
    "%" => TokenCode::Illegal,
    "#" => TokenCode::Illegal,
    "`" => TokenCode::Illegal,
    "\"" => TokenCode::Illegal,
    "{" => TokenCode::BeginGroup,
    "}" => TokenCode::EndGroup,
    "&" => TokenCode::NextCell,
    "\\\\" => TokenCode::NextRow,
    "^" => TokenCode::Superscript,
    "_" => TokenCode::Subscript,
    "'" => TokenCode::Prime,
    "\\hbox" => TokenCode::EnterTextMode,
    "\\emph" => TokenCode::EnterTextMode,
    "\\text" => TokenCode::EnterTextMode,
    "\\textit" => TokenCode::EnterTextMode,
    "\\textbf" => TokenCode::EnterTextMode,
    "\\textrm" => TokenCode::EnterTextMode,
    "\\texttt" => TokenCode::EnterTextMode,
    "\\textsf" => TokenCode::EnterTextMode,
    "\\sqrt" => TokenCode::Command1Arg,
    "\\pmod" => TokenCode::Command1Arg,
    "\\operatorname" => TokenCode::Command1Arg,
    "\\operatornamewithlimits" => TokenCode::Command1Arg,
    "\\rootReserved" => TokenCode::Command2Args,
    "\\binom" => TokenCode::Command2Args,
    "\\frac" => TokenCode::Command2Args,
    "\\cfrac" => TokenCode::Command2Args,
    "\\over" => TokenCode::CommandInfix,
    "\\choose" => TokenCode::CommandInfix,
    "\\atop" => TokenCode::CommandInfix,
    "\\left" => TokenCode::Left,
    "\\right" => TokenCode::Right,
    "\\big" => TokenCode::Big,
    "\\bigl" => TokenCode::Big,
    "\\bigr" => TokenCode::Big,
    "\\Big" => TokenCode::Big,
    "\\Bigl" => TokenCode::Big,
    "\\Bigr" => TokenCode::Big,
    "\\bigg" => TokenCode::Big,
    "\\biggl" => TokenCode::Big,
    "\\biggr" => TokenCode::Big,
    "\\Bigg" => TokenCode::Big,
    "\\Biggl" => TokenCode::Big,
    "\\Biggr" => TokenCode::Big,
    "\\mathop" => TokenCode::Command1Arg,
    "\\mathrel" => TokenCode::Command1Arg,
    "\\mathord" => TokenCode::Command1Arg,
    "\\mathbin" => TokenCode::Command1Arg,
    "\\mathopen" => TokenCode::Command1Arg,
    "\\mathclose" => TokenCode::Command1Arg,
    "\\mathpunct" => TokenCode::Command1Arg,
    "\\mathinner" => TokenCode::Command1Arg,
    "\\not" => TokenCode::Command1Arg,
    "\\limits" => TokenCode::Limits,
    "\\nolimits" => TokenCode::Limits,
    "\\displaylimits" => TokenCode::Limits,
    "\\_" => TokenCode::Symbol,
    "\\&" => TokenCode::Symbol,
    "\\$" => TokenCode::Symbol,
    "\\#" => TokenCode::Symbol,
    "\\%" => TokenCode::Symbol,
    "\\{" => TokenCode::Symbol,
    "\\}" => TokenCode::Symbol,
    "\\mod" => TokenCode::SymbolUnsafe,
    "\\bmod" => TokenCode::SymbolUnsafe,
    "~" => TokenCode::SymbolUnsafe,
    "\\," => TokenCode::SymbolUnsafe,
    "\\!" => TokenCode::SymbolUnsafe,
    "\\ " => TokenCode::SymbolUnsafe,
    "\\;" => TokenCode::SymbolUnsafe,
    "\\>" => TokenCode::SymbolUnsafe,
    "\\quad" => TokenCode::SymbolUnsafe,
    "\\qquad" => TokenCode::SymbolUnsafe,
    "(" => TokenCode::Symbol,
    ")" => TokenCode::Symbol,
    "[" => TokenCode::Symbol,
    "]" => TokenCode::Symbol,
    "<" => TokenCode::Symbol,
    ">" => TokenCode::Symbol,
    "+" => TokenCode::Symbol,
    "-" => TokenCode::Symbol,
    "=" => TokenCode::Symbol,
    "|" => TokenCode::Symbol,
    ";" => TokenCode::Symbol,
    ":" => TokenCode::Symbol,
    "," => TokenCode::Symbol,
    "." => TokenCode::Symbol,
    "/" => TokenCode::Symbol,
    "?" => TokenCode::Symbol,
    "!" => TokenCode::Symbol,
    "@" => TokenCode::Symbol,
    "*" => TokenCode::Symbol,
    "\\vert" => TokenCode::Symbol,
    "\\lvert" => TokenCode::Symbol,
    "\\rvert" => TokenCode::Symbol,
    "\\Vert" => TokenCode::Symbol,
    "\\lVert" => TokenCode::Symbol,
    "\\rVert" => TokenCode::Symbol,
    "\\lfloor" => TokenCode::Symbol,
    "\\rfloor" => TokenCode::Symbol,
    "\\lceil" => TokenCode::Symbol,
    "\\rceil" => TokenCode::Symbol,
    "\\lbrace" => TokenCode::Symbol,
    "\\rbrace" => TokenCode::Symbol,
    "\\langle" => TokenCode::Symbol,
    "\\rangle" => TokenCode::Symbol,
    "\\lbrack" => TokenCode::Symbol,
    "\\rbrack" => TokenCode::Symbol,
    "\\hat" => TokenCode::Command1Arg,
    "\\widehat" => TokenCode::Command1Arg,
    "\\dot" => TokenCode::Command1Arg,
    "\\ddot" => TokenCode::Command1Arg,
    "\\bar" => TokenCode::Command1Arg,
    "\\overline" => TokenCode::Command1Arg,
    "\\underline" => TokenCode::Command1Arg,
    "\\overbrace" => TokenCode::Command1Arg,
    "\\underbrace" => TokenCode::Command1Arg,
    "\\overleftarrow" => TokenCode::Command1Arg,
    "\\overrightarrow" => TokenCode::Command1Arg,
    "\\overleftrightarrow" => TokenCode::Command1Arg,
    "\\check" => TokenCode::Command1Arg,
    "\\acute" => TokenCode::Command1Arg,
    "\\grave" => TokenCode::Command1Arg,
    "\\vec" => TokenCode::Command1Arg,
    "\\breve" => TokenCode::Command1Arg,
    "\\tilde" => TokenCode::Command1Arg,
    "\\widetilde" => TokenCode::Command1Arg,
    "\\mathbf" => TokenCode::Command1Arg,
    "\\mathbb" => TokenCode::Command1Arg,
    "\\mathrm" => TokenCode::Command1Arg,
    "\\mathit" => TokenCode::Command1Arg,
    "\\mathcal" => TokenCode::Command1Arg,
    "\\mathfrak" => TokenCode::Command1Arg,
    "\\mathsf" => TokenCode::Command1Arg,
    "\\mathtt" => TokenCode::Command1Arg,
    "\\boldsymbol" => TokenCode::Command1Arg,
    "\\rm" => TokenCode::StyleChange,
    "\\bf" => TokenCode::StyleChange,
    "\\it" => TokenCode::StyleChange,
    "\\cal" => TokenCode::StyleChange,
    "\\tt" => TokenCode::StyleChange,
    "\\sf" => TokenCode::StyleChange,
    "\\displaystyle" => TokenCode::StyleChange,
    "\\textstyle" => TokenCode::StyleChange,
    "\\scriptstyle" => TokenCode::StyleChange,
    "\\scriptscriptstyle" => TokenCode::StyleChange,
    "\\varlimsup" => TokenCode::SymbolUnsafe,
    "\\varliminf" => TokenCode::SymbolUnsafe,
    "\\lim" => TokenCode::SymbolUnsafe,
    "\\sup" => TokenCode::SymbolUnsafe,
    "\\inf" => TokenCode::SymbolUnsafe,
    "\\limsup" => TokenCode::SymbolUnsafe,
    "\\liminf" => TokenCode::SymbolUnsafe,
    "\\injlim" => TokenCode::SymbolUnsafe,
    "\\projlim" => TokenCode::SymbolUnsafe,
    "\\min" => TokenCode::SymbolUnsafe,
    "\\max" => TokenCode::SymbolUnsafe,
    "\\gcd" => TokenCode::SymbolUnsafe,
    "\\det" => TokenCode::SymbolUnsafe,
    "\\Pr" => TokenCode::SymbolUnsafe,
    "\\ker" => TokenCode::SymbolUnsafe,
    "\\hom" => TokenCode::SymbolUnsafe,
    "\\dim" => TokenCode::SymbolUnsafe,
    "\\arg" => TokenCode::SymbolUnsafe,
    "\\sin" => TokenCode::SymbolUnsafe,
    "\\cos" => TokenCode::SymbolUnsafe,
    "\\sec" => TokenCode::SymbolUnsafe,
    "\\csc" => TokenCode::SymbolUnsafe,
    "\\tan" => TokenCode::SymbolUnsafe,
    "\\cot" => TokenCode::SymbolUnsafe,
    "\\arcsin" => TokenCode::SymbolUnsafe,
    "\\arccos" => TokenCode::SymbolUnsafe,
    "\\arcsec" => TokenCode::SymbolUnsafe,
    "\\arccsc" => TokenCode::SymbolUnsafe,
    "\\arctan" => TokenCode::SymbolUnsafe,
    "\\arccot" => TokenCode::SymbolUnsafe,
    "\\sinh" => TokenCode::SymbolUnsafe,
    "\\cosh" => TokenCode::SymbolUnsafe,
    "\\tanh" => TokenCode::SymbolUnsafe,
    "\\coth" => TokenCode::SymbolUnsafe,
    "\\log" => TokenCode::SymbolUnsafe,
    "\\lg" => TokenCode::SymbolUnsafe,
    "\\ln" => TokenCode::SymbolUnsafe,
    "\\exp" => TokenCode::SymbolUnsafe,
    "\\deg" => TokenCode::SymbolUnsafe,
    "\\alpha" => TokenCode::Symbol,
    "\\beta" => TokenCode::Symbol,
    "\\gamma" => TokenCode::Symbol,
    "\\delta" => TokenCode::Symbol,
    "\\epsilon" => TokenCode::Symbol,
    "\\varepsilon" => TokenCode::Symbol,
    "\\zeta" => TokenCode::Symbol,
    "\\eta" => TokenCode::Symbol,
    "\\theta" => TokenCode::Symbol,
    "\\vartheta" => TokenCode::Symbol,
    "\\iota" => TokenCode::Symbol,
    "\\kappa" => TokenCode::Symbol,
    "\\varkappa" => TokenCode::Symbol,
    "\\lambda" => TokenCode::Symbol,
    "\\mu" => TokenCode::Symbol,
    "\\nu" => TokenCode::Symbol,
    "\\pi" => TokenCode::Symbol,
    "\\varpi" => TokenCode::Symbol,
    "\\rho" => TokenCode::Symbol,
    "\\varrho" => TokenCode::Symbol,
    "\\sigma" => TokenCode::Symbol,
    "\\varsigma" => TokenCode::Symbol,
    "\\tau" => TokenCode::Symbol,
    "\\upsilon" => TokenCode::Symbol,
    "\\phi" => TokenCode::Symbol,
    "\\varphi" => TokenCode::Symbol,
    "\\chi" => TokenCode::Symbol,
    "\\psi" => TokenCode::Symbol,
    "\\omega" => TokenCode::Symbol,
    "\\xi" => TokenCode::Symbol,
    "\\digamma" => TokenCode::Symbol,
    "\\Gamma" => TokenCode::Symbol,
    "\\Delta" => TokenCode::Symbol,
    "\\Theta" => TokenCode::Symbol,
    "\\Lambda" => TokenCode::Symbol,
    "\\Pi" => TokenCode::Symbol,
    "\\Sigma" => TokenCode::Symbol,
    "\\Upsilon" => TokenCode::Symbol,
    "\\Phi" => TokenCode::Symbol,
    "\\Psi" => TokenCode::Symbol,
    "\\Omega" => TokenCode::Symbol,
    "\\Xi" => TokenCode::Symbol,
    "\\aleph" => TokenCode::Symbol,
    "\\beth" => TokenCode::Symbol,
    "\\gimel" => TokenCode::Symbol,
    "\\daleth" => TokenCode::Symbol,
    "\\wp" => TokenCode::Symbol,
    "\\ell" => TokenCode::Symbol,
    "\\P" => TokenCode::Symbol,
    "\\imath" => TokenCode::Symbol,
    "\\forall" => TokenCode::Symbol,
    "\\exists" => TokenCode::Symbol,
    "\\Finv" => TokenCode::Symbol,
    "\\Game" => TokenCode::Symbol,
    "\\partial" => TokenCode::Symbol,
    "\\Re" => TokenCode::Symbol,
    "\\Im" => TokenCode::Symbol,
    "\\leftarrow" => TokenCode::Symbol,
    "\\rightarrow" => TokenCode::Symbol,
    "\\longleftarrow" => TokenCode::SymbolUnsafe,
    "\\longrightarrow" => TokenCode::SymbolUnsafe,
    "\\Leftarrow" => TokenCode::Symbol,
    "\\Rightarrow" => TokenCode::Symbol,
    "\\Longleftarrow" => TokenCode::SymbolUnsafe,
    "\\Longrightarrow" => TokenCode::SymbolUnsafe,
    "\\mapsto" => TokenCode::SymbolUnsafe,
    "\\longmapsto" => TokenCode::SymbolUnsafe,
    "\\leftrightarrow" => TokenCode::Symbol,
    "\\Leftrightarrow" => TokenCode::Symbol,
    "\\longleftrightarrow" => TokenCode::SymbolUnsafe,
    "\\Longleftrightarrow" => TokenCode::SymbolUnsafe,
    "\\uparrow" => TokenCode::Symbol,
    "\\Uparrow" => TokenCode::Symbol,
    "\\downarrow" => TokenCode::Symbol,
    "\\Downarrow" => TokenCode::Symbol,
    "\\updownarrow" => TokenCode::Symbol,
    "\\Updownarrow" => TokenCode::Symbol,
    "\\searrow" => TokenCode::Symbol,
    "\\nearrow" => TokenCode::Symbol,
    "\\swarrow" => TokenCode::Symbol,
    "\\nwarrow" => TokenCode::Symbol,
    "\\hookrightarrow" => TokenCode::SymbolUnsafe,
    "\\hookleftarrow" => TokenCode::SymbolUnsafe,
    "\\upharpoonright" => TokenCode::Symbol,
    "\\upharpoonleft" => TokenCode::Symbol,
    "\\downharpoonright" => TokenCode::Symbol,
    "\\downharpoonleft" => TokenCode::Symbol,
    "\\rightharpoonup" => TokenCode::Symbol,
    "\\rightharpoondown" => TokenCode::Symbol,
    "\\leftharpoonup" => TokenCode::Symbol,
    "\\leftharpoondown" => TokenCode::Symbol,
    "\\nleftarrow" => TokenCode::Symbol,
    "\\nrightarrow" => TokenCode::Symbol,
    "\\supset" => TokenCode::Symbol,
    "\\subset" => TokenCode::Symbol,
    "\\supseteq" => TokenCode::Symbol,
    "\\subseteq" => TokenCode::Symbol,
    "\\sqsupset" => TokenCode::Symbol,
    "\\sqsubset" => TokenCode::Symbol,
    "\\sqsupseteq" => TokenCode::Symbol,
    "\\sqsubseteq" => TokenCode::Symbol,
    "\\supsetneq" => TokenCode::Symbol,
    "\\subsetneq" => TokenCode::Symbol,
    "\\in" => TokenCode::Symbol,
    "\\ni" => TokenCode::Symbol,
    "\\notin" => TokenCode::SymbolUnsafe,
    "\\iff" => TokenCode::SymbolUnsafe,
    "\\mid" => TokenCode::Symbol,
    "\\sim" => TokenCode::Symbol,
    "\\simeq" => TokenCode::Symbol,
    "\\approx" => TokenCode::Symbol,
    "\\propto" => TokenCode::Symbol,
    "\\equiv" => TokenCode::Symbol,
    "\\cong" => TokenCode::SymbolUnsafe,
    "\\neq" => TokenCode::SymbolUnsafe,
    "\\ll" => TokenCode::Symbol,
    "\\gg" => TokenCode::Symbol,
    "\\geq" => TokenCode::Symbol,
    "\\leq" => TokenCode::Symbol,
    "\\triangleleft" => TokenCode::Symbol,
    "\\triangleright" => TokenCode::Symbol,
    "\\trianglelefteq" => TokenCode::Symbol,
    "\\trianglerighteq" => TokenCode::Symbol,
    "\\models" => TokenCode::SymbolUnsafe,
    "\\vdash" => TokenCode::Symbol,
    "\\Vdash" => TokenCode::Symbol,
    "\\vDash" => TokenCode::Symbol,
    "\\lesssim" => TokenCode::Symbol,
    "\\nless" => TokenCode::Symbol,
    "\\ngeq" => TokenCode::Symbol,
    "\\nleq" => TokenCode::Symbol,
    "\\times" => TokenCode::Symbol,
    "\\div" => TokenCode::Symbol,
    "\\wedge" => TokenCode::Symbol,
    "\\vee" => TokenCode::Symbol,
    "\\oplus" => TokenCode::Symbol,
    "\\otimes" => TokenCode::Symbol,
    "\\cap" => TokenCode::Symbol,
    "\\cup" => TokenCode::Symbol,
    "\\sqcap" => TokenCode::Symbol,
    "\\sqcup" => TokenCode::Symbol,
    "\\smile" => TokenCode::Symbol,
    "\\frown" => TokenCode::Symbol,
    "\\smallsmile" => TokenCode::Symbol,
    "\\smallfrown" => TokenCode::Symbol,
    "\\setminus" => TokenCode::Symbol,
    "\\smallsetminus" => TokenCode::Symbol,
    "\\And" => TokenCode::SymbolUnsafe,
    "\\sum" => TokenCode::SymbolUnsafe,
    "\\prod" => TokenCode::SymbolUnsafe,
    "\\int" => TokenCode::SymbolUnsafe,
    "\\iint" => TokenCode::SymbolUnsafe,
    "\\iiint" => TokenCode::SymbolUnsafe,
    "\\iiiint" => TokenCode::SymbolUnsafe,
    "\\oint" => TokenCode::SymbolUnsafe,
    "\\bigcap" => TokenCode::SymbolUnsafe,
    "\\bigodot" => TokenCode::SymbolUnsafe,
    "\\bigcup" => TokenCode::SymbolUnsafe,
    "\\bigotimes" => TokenCode::SymbolUnsafe,
    "\\coprod" => TokenCode::SymbolUnsafe,
    "\\bigsqcup" => TokenCode::SymbolUnsafe,
    "\\bigoplus" => TokenCode::SymbolUnsafe,
    "\\bigvee" => TokenCode::SymbolUnsafe,
    "\\biguplus" => TokenCode::SymbolUnsafe,
    "\\bigwedge" => TokenCode::SymbolUnsafe,
    "\\star" => TokenCode::Symbol,
    "\\triangle" => TokenCode::Symbol,
    "\\wr" => TokenCode::Symbol,
    "\\infty" => TokenCode::Symbol,
    "\\circ" => TokenCode::Symbol,
    "\\hbar" => TokenCode::Symbol,
    "\\lnot" => TokenCode::Symbol,
    "\\nabla" => TokenCode::Symbol,
    "\\prime" => TokenCode::Symbol,
    "\\backslash" => TokenCode::Symbol,
    "\\pm" => TokenCode::Symbol,
    "\\mp" => TokenCode::Symbol,
    "\\emptyset" => TokenCode::Symbol,
    "\\varnothing" => TokenCode::Symbol,
    "\\S" => TokenCode::Symbol,
    "\\angle" => TokenCode::Symbol,
    "\\colon" => TokenCode::SymbolUnsafe,
    "\\Diamond" => TokenCode::Symbol,
    "\\nmid" => TokenCode::Symbol,
    "\\square" => TokenCode::Symbol,
    "\\Box" => TokenCode::Symbol,
    "\\checkmark" => TokenCode::Symbol,
    "\\complement" => TokenCode::Symbol,
    "\\eth" => TokenCode::Symbol,
    "\\hslash" => TokenCode::Symbol,
    "\\mho" => TokenCode::Symbol,
    "\\flat" => TokenCode::Symbol,
    "\\sharp" => TokenCode::Symbol,
    "\\natural" => TokenCode::Symbol,
    "\\bullet" => TokenCode::Symbol,
    "\\dagger" => TokenCode::Symbol,
    "\\ddagger" => TokenCode::Symbol,
    "\\clubsuit" => TokenCode::Symbol,
    "\\spadesuit" => TokenCode::Symbol,
    "\\heartsuit" => TokenCode::Symbol,
    "\\diamondsuit" => TokenCode::Symbol,
    "\\top" => TokenCode::Symbol,
    "\\bot" => TokenCode::Symbol,
    "\\perp" => TokenCode::Symbol,
    "\\ldots" => TokenCode::SymbolUnsafe,
    "\\cdot" => TokenCode::Symbol,
    "\\cdots" => TokenCode::SymbolUnsafe,
    "\\vdots" => TokenCode::SymbolUnsafe,
    "\\ddots" => TokenCode::SymbolUnsafe,
    "\\dots" => TokenCode::SymbolUnsafe,
    "\\dotsb" => TokenCode::SymbolUnsafe,
    "\\varinjlim" => TokenCode::SymbolUnsafe,
    "\\varprojlim" => TokenCode::SymbolUnsafe,
    "\\mbox" => TokenCode::EnterTextMode,
    "\\overset" => TokenCode::Command2Args,
    "\\underset" => TokenCode::Command2Args,
    "\\substack" => TokenCode::Command1Arg,
};

pub static TEXT_TOKENS: phf::Map<&'static str, TokenCode> = phf::phf_map! {
    "" => TokenCode::EndOfInput,
    " " => TokenCode::Whitespace,
    "\\newcommand" => TokenCode::Newcommand,
    "{" => TokenCode::BeginGroup,
    "}" => TokenCode::EndGroup,
    "$" => TokenCode::Illegal,
    "%" => TokenCode::Illegal,
    "#" => TokenCode::Illegal,
    "&" => TokenCode::Illegal,
    "\\\\" => TokenCode::Illegal,
    "^" => TokenCode::Illegal,
    "_" => TokenCode::Illegal,
    "\\&" => TokenCode::Symbol,
    "\\_" => TokenCode::Symbol,
    "\\$" => TokenCode::Symbol,
    "\\#" => TokenCode::Symbol,
    "\\%" => TokenCode::Symbol,
    "\\{" => TokenCode::Symbol,
    "\\}" => TokenCode::Symbol,
    "\\textbackslash" => TokenCode::Symbol,
    "\\textvisiblespace" => TokenCode::Symbol,
    "\\O" => TokenCode::Symbol,
    "\\S" => TokenCode::Symbol,
    "!" => TokenCode::Symbol,
    "@" => TokenCode::Symbol,
    "*" => TokenCode::Symbol,
    "(" => TokenCode::Symbol,
    ")" => TokenCode::Symbol,
    "-" => TokenCode::Symbol,
    "=" => TokenCode::Symbol,
    "+" => TokenCode::Symbol,
    "[" => TokenCode::Symbol,
    "]" => TokenCode::Symbol,
    "|" => TokenCode::Symbol,
    ";" => TokenCode::Symbol,
    ":" => TokenCode::Symbol,
    "<" => TokenCode::Symbol,
    ">" => TokenCode::Symbol,
    "," => TokenCode::Symbol,
    "." => TokenCode::Symbol,
    "/" => TokenCode::Symbol,
    "?" => TokenCode::Symbol,
    "\"" => TokenCode::Symbol,
    "~" => TokenCode::SymbolUnsafe,
    "\\," => TokenCode::SymbolUnsafe,
    "\\!" => TokenCode::SymbolUnsafe,
    "\\ " => TokenCode::SymbolUnsafe,
    "\\;" => TokenCode::SymbolUnsafe,
    "\\quad" => TokenCode::SymbolUnsafe,
    "\\qquad" => TokenCode::SymbolUnsafe,
    "\\hbox" => TokenCode::Command1Arg,
    "\\emph" => TokenCode::Command1Arg,
    "\\text" => TokenCode::Command1Arg,
    "\\textit" => TokenCode::Command1Arg,
    "\\textbf" => TokenCode::Command1Arg,
    "\\textrm" => TokenCode::Command1Arg,
    "\\texttt" => TokenCode::Command1Arg,
    "\\textsf" => TokenCode::Command1Arg,
    "\\rm" => TokenCode::StyleChange,
    "\\it" => TokenCode::StyleChange,
    "\\bf" => TokenCode::StyleChange,
    "\\tt" => TokenCode::StyleChange,
    "\\sf" => TokenCode::StyleChange,
    "\\mbox" => TokenCode::Command1Arg,
};

/// Strips the "Reserved" suffix used internally to hide commands like
/// `\sqrtReserved` from user input, recovering the user-visible name.
pub fn strip_reserved_suffix(token: &str) -> &str {
    token.strip_suffix("Reserved").unwrap_or(token)
}

/// If `token` is a merged `\begin{...}` or `\end{...}` token, returns the
/// environment name with surrounding whitespace removed.
pub fn environment_name(token: &str) -> Option<&str> {
    let inner = token
        .strip_prefix("\\begin{")
        .or_else(|| token.strip_prefix("\\end{"))?;
    Some(inner.strip_suffix('}')?.trim())
}

const ENVIRONMENT_NAMES: &[&str] = &[
    "matrix",
    "pmatrix",
    "bmatrix",
    "Bmatrix",
    "vmatrix",
    "Vmatrix",
    "cases",
    "aligned",
    "smallmatrix",
];

fn environment_code(token: &str) -> Option<Result<TokenCode, TexErrKind>> {
    let name = environment_name(token)?;
    if !ENVIRONMENT_NAMES.contains(&name) {
        return Some(Err(TexErrKind::UnrecognisedCommand(token.to_string())));
    }
    Some(Ok(if token.starts_with("\\begin{") {
        TokenCode::BeginEnvironment
    } else {
        TokenCode::EndEnvironment
    }))
}

/// Classifies a token in math mode.
pub fn math_token_code(token: &str) -> Result<TokenCode, TexErrKind> {
    if let Some(&code) = MATH_TOKENS.get(token) {
        if code != TokenCode::Illegal {
            return Ok(code);
        }
        // Helpful hints for common illegal characters.
        return Err(match token {
            "%" | "#" | "$" => TexErrKind::IllegalCommandInMathModeWithHint(
                token.to_string(),
                "\\".to_string() + token,
            ),
            _ => TexErrKind::IllegalCommandInMathMode("`".to_string()),
        });
    }

    if let Some(result) = environment_code(token) {
        return result;
    }

    if token.starts_with('\\') {
        return Err(if TEXT_TOKENS.contains_key(token) {
            TexErrKind::IllegalCommandInMathMode(strip_reserved_suffix(token).to_string())
        } else {
            TexErrKind::UnrecognisedCommand(token.to_string())
        });
    }

    match token.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => Ok(TokenCode::Symbol),
        Some(c) if c as u32 > 0x7F => Err(TexErrKind::NonAsciiInMathMode),
        _ => Err(TexErrKind::UnrecognisedCommand(token.to_string())),
    }
}

/// Classifies a token in text mode.
pub fn text_token_code(token: &str) -> Result<TokenCode, TexErrKind> {
    if let Some(&code) = TEXT_TOKENS.get(token) {
        if code != TokenCode::Illegal {
            return Ok(code);
        }
        return Err(match token {
            "&" | "_" | "%" | "#" | "$" => TexErrKind::IllegalCommandInTextModeWithHint(
                token.to_string(),
                "\\".to_string() + token,
            ),
            "\\\\" => TexErrKind::IllegalCommandInTextModeWithHint(
                "\\\\".to_string(),
                "\\textbackslash".to_string(),
            ),
            _ => TexErrKind::IllegalCommandInTextMode(strip_reserved_suffix(token).to_string()),
        });
    }

    if token.starts_with('\\') {
        return Err(
            if MATH_TOKENS.contains_key(token) || environment_name(token).is_some() {
                TexErrKind::IllegalCommandInTextMode(strip_reserved_suffix(token).to_string())
            } else {
                TexErrKind::UnrecognisedCommand(token.to_string())
            },
        );
    }

    match token.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c as u32 > 0x7F => Ok(TokenCode::Symbol),
        _ => Err(TexErrKind::UnrecognisedCommand(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_table_lookups() {
        assert_eq!(math_token_code(""), Ok(TokenCode::EndOfInput));
        assert_eq!(math_token_code(" "), Ok(TokenCode::Whitespace));
        assert_eq!(math_token_code("{"), Ok(TokenCode::BeginGroup));
        assert_eq!(math_token_code("\\frac"), Ok(TokenCode::Command2Args));
        assert_eq!(math_token_code("\\alpha"), Ok(TokenCode::Symbol));
        assert_eq!(math_token_code("\\lim"), Ok(TokenCode::SymbolUnsafe));
        assert_eq!(math_token_code("x"), Ok(TokenCode::Symbol));
        assert_eq!(math_token_code("7"), Ok(TokenCode::Symbol));
        assert_eq!(math_token_code("\\over"), Ok(TokenCode::CommandInfix));
    }

    #[test]
    fn environments() {
        assert_eq!(
            math_token_code("\\begin{pmatrix}"),
            Ok(TokenCode::BeginEnvironment)
        );
        assert_eq!(
            math_token_code("\\end{  cases  }"),
            Ok(TokenCode::EndEnvironment)
        );
        assert_eq!(
            math_token_code("\\begin{unknown}"),
            Err(TexErrKind::UnrecognisedCommand(
                "\\begin{unknown}".to_string()
            ))
        );
        assert_eq!(environment_name("\\begin{ matrix }"), Some("matrix"));
    }

    #[test]
    fn math_mode_hints() {
        assert_eq!(
            math_token_code("%"),
            Err(TexErrKind::IllegalCommandInMathModeWithHint(
                "%".to_string(),
                "\\%".to_string()
            ))
        );
        assert_eq!(
            math_token_code("\""),
            Err(TexErrKind::IllegalCommandInMathMode("`".to_string()))
        );
    }

    #[test]
    fn cross_mode_commands() {
        // A text-only command used in math mode names the user-visible form.
        assert_eq!(
            math_token_code("\\textbackslash"),
            Err(TexErrKind::IllegalCommandInMathMode(
                "\\textbackslash".to_string()
            ))
        );
        // A math-only command used in text mode.
        assert_eq!(
            text_token_code("\\alpha"),
            Err(TexErrKind::IllegalCommandInTextMode("\\alpha".to_string()))
        );
        assert_eq!(
            math_token_code("\\nosuchcommand"),
            Err(TexErrKind::UnrecognisedCommand("\\nosuchcommand".to_string()))
        );
    }

    #[test]
    fn text_mode_hints() {
        assert_eq!(
            text_token_code("&"),
            Err(TexErrKind::IllegalCommandInTextModeWithHint(
                "&".to_string(),
                "\\&".to_string()
            ))
        );
        assert_eq!(
            text_token_code("\\\\"),
            Err(TexErrKind::IllegalCommandInTextModeWithHint(
                "\\\\".to_string(),
                "\\textbackslash".to_string()
            ))
        );
    }

    #[test]
    fn non_ascii_only_in_text_mode() {
        assert_eq!(math_token_code("é"), Err(TexErrKind::NonAsciiInMathMode));
        assert_eq!(text_token_code("é"), Ok(TokenCode::Symbol));
    }

    #[test]
    fn reserved_suffix_stripping() {
        assert_eq!(strip_reserved_suffix("\\sqrtReserved"), "\\sqrt");
        assert_eq!(strip_reserved_suffix("\\alpha"), "\\alpha");
    }
}
