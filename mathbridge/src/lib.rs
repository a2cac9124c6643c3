//! mathbridge
//!
//! Converts TeX mathematics into a MathML tree and into "purified" TeX, a
//! self-contained LaTeX document with all macros expanded and the right
//! `\usepackage` lines, suitable for feeding to a stock `latex` binary.
//!
//! The conversion runs in two stages. [`Converter::process_input`]
//! tokenises the input, expands macros, parses, and builds the layout
//! tree, making all the typesetting decisions (spacing, script placement,
//! fonts). [`Converter::generate_mathml`] and
//! [`Converter::generate_purified_tex`] then produce the outputs, each as
//! often as desired with different options.
//!
//! ```rust
//! use mathbridge::{Converter, MathmlOptions, EncodingOptions};
//!
//! let mut converter = Converter::new();
//! converter.process_input(r"\frac{x+1}{2}", false).unwrap();
//! let mathml = converter.generate_mathml(&MathmlOptions::default()).unwrap();
//! println!("{}", mathml.print(&EncodingOptions::default(), true));
//! ```

mod fonts;
mod latex_parser;
mod layout_build;
mod parse_node;
mod purified;
mod raw_node;
mod symbol_tables;

use std::sync::OnceLock;

use mathml_renderer::arena::{Arena, FrozenArena};
use mathml_renderer::attribute::Style;
use mathml_renderer::layout::build_mathml;

use crate::fonts::TexMathFont;
use crate::latex_parser::lexer::tokenise;
use crate::latex_parser::parse::Parser;
use crate::parse_node::MathNode;
use crate::raw_node::RawNodeRef;

pub use crate::latex_parser::error::{TexErrKind, TexError};
pub use crate::purified::PurifiedTexOptions;
pub use mathml_renderer::options::{
    EncodingOptions, MathmlEncoding, MathmlOptions, SpacingControl,
};
pub use mathml_renderer::xml::XmlNode;

/// Macros defined by texvc (MediaWiki's TeX validator) which are not part
/// of TeX, LaTeX or AMS-LaTeX. Most cater for those more familiar with
/// HTML entities. Enabled by the `texvc_compatibility` flag.
const TEXVC_COMPATIBILITY_MACROS: &str = concat!(
    r"\newcommand{\R}{{\mathbb R}}",
    r"\newcommand{\Reals}{\R}",
    r"\newcommand{\reals}{\R}",
    r"\newcommand{\Z}{{\mathbb Z}}",
    r"\newcommand{\N}{{\mathbb N}}",
    r"\newcommand{\natnums}{\N}",
    r"\newcommand{\Complex}{{\mathbb C}}",
    r"\newcommand{\cnums}{\Complex}",
    r"\newcommand{\alefsym}{\aleph}",
    r"\newcommand{\alef}{\aleph}",
    r"\newcommand{\larr}{\leftarrow}",
    r"\newcommand{\rarr}{\rightarrow}",
    r"\newcommand{\Larr}{\Leftarrow}",
    r"\newcommand{\lArr}{\Leftarrow}",
    r"\newcommand{\Rarr}{\Rightarrow}",
    r"\newcommand{\rArr}{\Rightarrow}",
    r"\newcommand{\uarr}{\uparrow}",
    r"\newcommand{\uArr}{\Uparrow}",
    r"\newcommand{\Uarr}{\Uparrow}",
    r"\newcommand{\darr}{\downarrow}",
    r"\newcommand{\dArr}{\Downarrow}",
    r"\newcommand{\Darr}{\Downarrow}",
    r"\newcommand{\lrarr}{\leftrightarrow}",
    r"\newcommand{\harr}{\leftrightarrow}",
    r"\newcommand{\Lrarr}{\Leftrightarrow}",
    r"\newcommand{\Harr}{\Leftrightarrow}",
    r"\newcommand{\lrArr}{\Leftrightarrow}",
    // Faithfully reproduces what looks like a typo in texvc itself.
    r"\newcommand{\hAar}{\Leftrightarrow}",
    r"\newcommand{\sub}{\subset}",
    r"\newcommand{\supe}{\supseteq}",
    r"\newcommand{\sube}{\subseteq}",
    r"\newcommand{\infin}{\infty}",
    r"\newcommand{\lang}{\langle}",
    r"\newcommand{\rang}{\rangle}",
    r"\newcommand{\real}{\Re}",
    r"\newcommand{\image}{\Im}",
    r"\newcommand{\bull}{\bullet}",
    r"\newcommand{\weierp}{\wp}",
    r"\newcommand{\isin}{\in}",
    r"\newcommand{\plusmn}{\pm}",
    r"\newcommand{\Dagger}{\ddagger}",
    r"\newcommand{\exist}{\exists}",
    r"\newcommand{\sect}{\S}",
    r"\newcommand{\clubs}{\clubsuit}",
    r"\newcommand{\spades}{\spadesuit}",
    r"\newcommand{\hearts}{\heartsuit}",
    r"\newcommand{\diamonds}{\diamondsuit}",
    r"\newcommand{\sdot}{\cdot}",
    r"\newcommand{\ang}{\angle}",
    r"\newcommand{\thetasym}{\theta}",
    r"\newcommand{\Alpha}{A}",
    r"\newcommand{\Beta}{B}",
    r"\newcommand{\Epsilon}{E}",
    r"\newcommand{\Zeta}{Z}",
    r"\newcommand{\Eta}{H}",
    r"\newcommand{\Iota}{I}",
    r"\newcommand{\Kappa}{K}",
    r"\newcommand{\Mu}{M}",
    r"\newcommand{\Nu}{N}",
    r"\newcommand{\Rho}{P}",
    r"\newcommand{\Tau}{T}",
    r"\newcommand{\Chi}{X}",
    r"\newcommand{\arccot}{\operatorname{arccot}}",
    r"\newcommand{\arcsec}{\operatorname{arcsec}}",
    r"\newcommand{\arccsc}{\operatorname{arccsc}}",
    r"\newcommand{\sgn}{\operatorname{sgn}}",
    // These are defined in TeX/LaTeX/AMS-LaTeX, but mean something else
    // there (e.g. "\part" starts a book part). texvc redefines them and
    // plenty of wiki formulas rely on that.
    r"\newcommand{\empty}{\emptyset}",
    r"\newcommand{\and}{\wedge}",
    r"\newcommand{\or}{\vee}",
    r"\newcommand{\part}{\partial}",
);

/// Macros always in effect. The first group are standard synonyms; then
/// come the xxxReserved macros, which implement TeX's macro argument
/// grabbing for commands like `\frac` and `\mbox`: `process_input`
/// renames `\mbox` to `\mboxReserved`, and macro expansion turns
/// `\mboxReserved A` into `\mbox{A}`, so the parser can always expect
/// braces. Most of them also add safety braces around the result, making
/// `x^\frac yz` legal.
const STANDARD_MACROS: &str = concat!(
    r"\newcommand{\|}{\Vert}",
    r"\newcommand{\implies}{\;\Longrightarrow\;}",
    r"\newcommand{\neg}{\lnot}",
    r"\newcommand{\ne}{\neq}",
    r"\newcommand{\ge}{\geq}",
    r"\newcommand{\le}{\leq}",
    r"\newcommand{\land}{\wedge}",
    r"\newcommand{\lor}{\vee}",
    r"\newcommand{\gets}{\leftarrow}",
    r"\newcommand{\to}{\rightarrow}",
    r"\newcommand{\doublecap}{\Cap}",
    r"\newcommand{\restriction}{\upharpoonright}",
    r"\newcommand{\llless}{\lll}",
    r"\newcommand{\gggtr}{\ggg}",
    r"\newcommand{\Doteq}{\doteqdot}",
    r"\newcommand{\doublecup}{\Cup}",
    r"\newcommand{\dasharrow}{\dashleftarrow}",
    r"\newcommand{\vartriangleleft}{\lhd}",
    r"\newcommand{\vartriangleright}{\rhd}",
    r"\newcommand{\trianglelefteq}{\unlhd}",
    r"\newcommand{\trianglerighteq}{\unrhd}",
    r"\newcommand{\Join}{\bowtie}",
    r"\newcommand{\Diamond}{\lozenge}",
    // amsfonts accepts these two but warns they are obsolete.
    r"\newcommand{\Bbb}{\mathbb}",
    r"\newcommand{\bold}{\mathbf}",
    r"\newcommand{\mboxReserved}[1]{\mbox{#1}}",
    r"\newcommand{\substackReserved}[1]{\substack{#1}}",
    r"\newcommand{\oversetReserved}[2]{\overset{#1}{#2}}",
    r"\newcommand{\undersetReserved}[2]{\underset{#1}{#2}}",
    r"\newcommand{\textReserved}[1]{{\text{#1}}}",
    r"\newcommand{\textitReserved}[1]{{\textit{#1}}}",
    r"\newcommand{\textrmReserved}[1]{{\textrm{#1}}}",
    r"\newcommand{\textbfReserved}[1]{{\textbf{#1}}}",
    r"\newcommand{\textsfReserved}[1]{{\textsf{#1}}}",
    r"\newcommand{\textttReserved}[1]{{\texttt{#1}}}",
    r"\newcommand{\emphReserved}[1]{{\emph{#1}}}",
    r"\newcommand{\fracReserved}[2]{{\frac{#1}{#2}}}",
    r"\newcommand{\mathrmReserved}[1]{{\mathrm{#1}}}",
    r"\newcommand{\mathbfReserved}[1]{{\mathbf{#1}}}",
    r"\newcommand{\mathbbReserved}[1]{{\mathbb{#1}}}",
    r"\newcommand{\mathitReserved}[1]{{\mathit{#1}}}",
    r"\newcommand{\mathcalReserved}[1]{{\mathcal{#1}}}",
    r"\newcommand{\mathfrakReserved}[1]{{\mathfrak{#1}}}",
    r"\newcommand{\mathttReserved}[1]{{\mathtt{#1}}}",
    r"\newcommand{\mathsfReserved}[1]{{\mathsf{#1}}}",
    r"\newcommand{\bigReserved}[1]{{\big#1}}",
    r"\newcommand{\biggReserved}[1]{{\bigg#1}}",
    r"\newcommand{\BigReserved}[1]{{\Big#1}}",
    r"\newcommand{\BiggReserved}[1]{{\Bigg#1}}",
);

/// Commands which get "Reserved" tacked on the end before macro expansion
/// sees them, so that the xxxReserved macros above can grab their
/// arguments. `\sqrt` is renamed too but handled directly by the macro
/// processor because of its optional argument.
static RESERVED_COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "\\sqrt",
    "\\mbox",
    "\\text",
    "\\textit",
    "\\textrm",
    "\\textbf",
    "\\textsf",
    "\\texttt",
    "\\emph",
    "\\frac",
    "\\mathrm",
    "\\mathbf",
    "\\mathbb",
    "\\mathit",
    "\\mathcal",
    "\\mathfrak",
    "\\mathtt",
    "\\mathsf",
    "\\big",
    "\\bigg",
    "\\Big",
    "\\Bigg",
    "\\overset",
    "\\underset",
    "\\substack",
};

/// Tokenises a macro block the first time it is needed and caches the
/// result for the rest of the process. Losing the race to another thread
/// is harmless, both threads tokenise the same fixed text.
fn cached_macro_tokens(
    source: &'static str,
    cache: &'static OnceLock<Vec<String>>,
) -> Result<&'static [String], TexError> {
    if let Some(tokens) = cache.get() {
        return Ok(tokens);
    }
    let tokens = tokenise(source)?;
    Ok(cache.get_or_init(|| tokens))
}

/// Holds the state of a single formula conversion.
pub struct Converter {
    parse_tree: Option<MathNode>,
    layout: Option<(FrozenArena, RawNodeRef)>,
    /// An error found while building the layout tree that only matters
    /// for MathML output; purified TeX is still available.
    deferred_error: Option<TexError>,
    strict_spacing_requested: bool,
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            parse_tree: None,
            layout: None,
            deferred_error: None,
            strict_spacing_requested: false,
        }
    }

    /// Tokenises, expands macros, parses and builds the layout tree for
    /// one formula. With `texvc_compatibility`, macros defined by texvc
    /// (MediaWiki) are available too.
    pub fn process_input(&mut self, input: &str, texvc_compatibility: bool) -> Result<(), TexError> {
        self.parse_tree = None;
        self.layout = None;
        self.deferred_error = None;
        self.strict_spacing_requested = false;

        let mut input_tokens = tokenise(input)?;

        // Rename the commands whose arguments are grabbed by macros, and
        // reject user-supplied tokens ending in the internal suffix. Also
        // look out for magic commands; the only one is "\strictspacing".
        for token in &mut input_tokens {
            if RESERVED_COMMANDS.contains(token.as_str()) {
                token.push_str("Reserved");
            } else if token.ends_with("Reserved") {
                return Err(TexError(0, TexErrKind::ReservedCommand(token.clone())));
            } else if token == "\\strictspacing" {
                self.strict_spacing_requested = true;
                " ".clone_into(token);
            }
        }

        static TEXVC_TOKENS: OnceLock<Vec<String>> = OnceLock::new();
        static STANDARD_TOKENS: OnceLock<Vec<String>> = OnceLock::new();

        let mut tokens = Vec::new();
        if texvc_compatibility {
            tokens
                .extend_from_slice(cached_macro_tokens(TEXVC_COMPATIBILITY_MACROS, &TEXVC_TOKENS)?);
        }
        tokens.extend_from_slice(cached_macro_tokens(STANDARD_MACROS, &STANDARD_TOKENS)?);
        tokens.extend(input_tokens);

        let parse_tree = Parser::parse(tokens)?;

        let arena = Arena::new();
        match parse_tree.build_layout_tree(&arena, TexMathFont::default(), Style::Text) {
            Ok(root) => {
                let root = arena.push(root);
                let raw = RawNodeRef::from_node(root);
                self.layout = Some((arena.freeze(), raw));
            }
            Err(error) if error.1.is_deferred() => {
                self.deferred_error = Some(error);
            }
            Err(error) => return Err(error),
        }

        self.parse_tree = Some(parse_tree);
        Ok(())
    }

    /// Builds the MathML tree for the processed formula. The returned
    /// root is the content of the `<math>` element, not the element
    /// itself.
    pub fn generate_mathml(&self, options: &MathmlOptions) -> Result<XmlNode, TexError> {
        if let Some(error) = &self.deferred_error {
            return Err(error.clone());
        }
        let Some((arena, raw)) = &self.layout else {
            return Err(TexError(0, TexErrKind::NothingProcessed));
        };
        let Some(root) = raw.lift(arena) else {
            return Err(TexError(0, TexErrKind::NothingProcessed));
        };

        let mut options = options.clone();
        if self.strict_spacing_requested {
            // "\strictspacing" in the input overrides the option.
            options.spacing_control = SpacingControl::Strict;
        }

        let mut xml = build_mathml(root, &options, Style::Text)
            .map_err(|_| TexError(0, TexErrKind::TooManyMathmlNodes))?;
        xml.cleanup_font_attributes(options.use_version1_font_attributes);
        Ok(xml)
    }

    /// Reconstructs the processed formula as a complete LaTeX document.
    /// Available even when MathML generation would fail, e.g. for an
    /// invalid `\not`.
    pub fn generate_purified_tex(&self, options: &PurifiedTexOptions) -> Result<String, TexError> {
        let Some(parse_tree) = &self.parse_tree else {
            return Err(TexError(0, TexErrKind::NothingProcessed));
        };
        purified::purified_tex_document(parse_tree, options)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_encoding() -> EncodingOptions {
        EncodingOptions {
            mathml_encoding: MathmlEncoding::Raw,
            other_encoding_raw: true,
            allow_plane_1: true,
        }
    }

    fn convert(input: &str, texvc_compatibility: bool) -> Result<String, TexError> {
        let mut converter = Converter::new();
        converter.process_input(input, texvc_compatibility)?;
        let xml = converter.generate_mathml(&MathmlOptions::default())?;
        Ok(xml.print(&raw_encoding(), false))
    }

    fn mathml(input: &str) -> Result<String, TexError> {
        convert(input, false)
    }

    fn mathml_texvc(input: &str) -> Result<String, TexError> {
        convert(input, true)
    }

    #[test]
    fn basic_formula() {
        assert_eq!(
            mathml("x^2").unwrap(),
            "<msup><mi>x</mi><mn>2</mn></msup>"
        );
    }

    #[test]
    fn reserved_macros_grab_arguments() {
        // "\frac12" takes single tokens as arguments, like the TeX macro.
        assert_eq!(
            mathml(r"\frac12").unwrap(),
            "<mfrac><mn>1</mn><mn>2</mn></mfrac>"
        );
        // Safety braces make a fraction legal as a script.
        assert_eq!(
            mathml(r"x^\frac yz").unwrap(),
            "<msup><mi>x</mi><mfrac><mi>y</mi><mi>z</mi></mfrac></msup>"
        );
    }

    #[test]
    fn sqrt_optional_argument() {
        assert_eq!(
            mathml(r"\sqrt2").unwrap(),
            "<msqrt><mn>2</mn></msqrt>"
        );
        assert_eq!(
            mathml(r"\sqrt[3]{x}").unwrap(),
            "<mroot><mi>x</mi><mn>3</mn></mroot>"
        );
    }

    #[test]
    fn standard_macros() {
        assert_eq!(mathml(r"\ne").unwrap(), "<mo>\u{2260}</mo>");
        assert_eq!(
            mathml(r"a\le b").unwrap(),
            "<mrow><mi>a</mi><mo>\u{2264}</mo><mi>b</mi></mrow>"
        );
    }

    #[test]
    fn texvc_macros_are_optional() {
        assert_eq!(mathml_texvc(r"\R").unwrap(), "<mi>\u{211D}</mi>");
        assert_eq!(
            mathml(r"\R").unwrap_err().1,
            TexErrKind::UnrecognisedCommand("\\R".to_string())
        );
        // "\part" means \partial only in texvc mode.
        assert_eq!(
            mathml_texvc(r"\part").unwrap(),
            "<mi mathvariant=\"normal\">\u{2202}</mi>"
        );
    }

    #[test]
    fn reserved_suffix_is_rejected() {
        let mut converter = Converter::new();
        assert_eq!(
            converter.process_input(r"\fracReserved xy", false).unwrap_err().1,
            TexErrKind::ReservedCommand("\\fracReserved".to_string())
        );
    }

    #[test]
    fn strict_spacing_magic_command() {
        let mut converter = Converter::new();
        converter.process_input(r"x \strictspacing + y", false).unwrap();
        let xml = converter.generate_mathml(&MathmlOptions::default()).unwrap();
        assert_eq!(
            xml.print(&raw_encoding(), false),
            "<mrow><mi>x</mi><mo lspace=\"0.222em\" rspace=\"0.222em\">+</mo><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn deferred_error_still_purifies() {
        let mut converter = Converter::new();
        converter.process_input(r"\not xy", false).unwrap();
        assert_eq!(
            converter
                .generate_mathml(&MathmlOptions::default())
                .unwrap_err()
                .1,
            TexErrKind::InvalidNegation
        );
        let purified = converter
            .generate_purified_tex(&PurifiedTexOptions::default())
            .unwrap();
        assert!(purified.contains(r"\not  x y"));
    }

    #[test]
    fn nothing_processed() {
        let converter = Converter::new();
        assert_eq!(
            converter
                .generate_mathml(&MathmlOptions::default())
                .unwrap_err()
                .1,
            TexErrKind::NothingProcessed
        );
        assert_eq!(
            converter
                .generate_purified_tex(&PurifiedTexOptions::default())
                .unwrap_err()
                .1,
            TexErrKind::NothingProcessed
        );
    }

    #[test]
    fn purified_tex_reconstruction() {
        let mut converter = Converter::new();
        converter.process_input(r"\binom nk", false).unwrap();
        let purified = converter
            .generate_purified_tex(&PurifiedTexOptions::default())
            .unwrap();
        assert!(purified.contains("\\usepackage{amsmath}\n"));
        assert!(purified.contains("\\binom{ n}{ k}"));
    }

    #[test]
    fn purified_tex_reparses_identically() {
        let input = r"\frac12+\sqrt[3]{x}";
        let mut converter = Converter::new();
        converter.process_input(input, false).unwrap();
        let first = converter
            .generate_mathml(&MathmlOptions::default())
            .unwrap()
            .print(&raw_encoding(), false);

        let doc = converter
            .generate_purified_tex(&PurifiedTexOptions::default())
            .unwrap();
        let start = doc.find("$\n").unwrap() + 2;
        let end = doc.rfind("\n$").unwrap();
        assert_eq!(mathml(&doc[start..end]).unwrap(), first);
    }

    #[test]
    fn negated_symbols() {
        assert_eq!(mathml(r"\not\in").unwrap(), "<mo>\u{2209}</mo>");
        assert_eq!(mathml(r"\not\exists").unwrap(), "<mo>\u{2204}</mo>");
    }

    #[test]
    fn script_order_is_irrelevant() {
        assert_eq!(mathml("x^2_3").unwrap(), mathml("x_3^2").unwrap());
    }

    #[test]
    fn double_superscript_is_rejected() {
        let mut converter = Converter::new();
        let error = converter.process_input("x^2^3", false).unwrap_err();
        assert_eq!(error.1, TexErrKind::DoubleSuperscript);
    }
}
