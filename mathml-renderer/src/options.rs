use strum_macros::IntoStaticStr;

/// How aggressively spacing markup is written into the MathML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr)]
pub enum SpacingControl {
    /// Emit spacing markup wherever possible, so that the output spacing
    /// matches TeX as closely as the renderer allows.
    #[strum(serialize = "strict")]
    Strict,
    /// Emit spacing markup only where a MathML renderer is likely to get
    /// the spacing wrong on its own.
    #[default]
    #[strum(serialize = "moderate")]
    Moderate,
    /// Emit spacing markup only where the input specifically requested it
    /// (`\,`, `\quad` and friends).
    #[strum(serialize = "relaxed")]
    Relaxed,
}

/// Options controlling the layout tree to MathML conversion.
#[derive(Debug, Clone)]
pub struct MathmlOptions {
    pub spacing_control: SpacingControl,
    /// Substitute plane-1 codepoints (and their letterlike exceptions) for
    /// single characters in script, fraktur and double-struck fonts, instead
    /// of relying on `mathvariant`.
    pub fancy_font_substitution: bool,
    /// Write MathML 1.x `fontfamily`/`fontstyle`/`fontweight` attributes
    /// instead of `mathvariant`.
    pub use_version1_font_attributes: bool,
    /// Hard limit on the number of XML nodes generated for one formula.
    pub max_mathml_node_count: usize,
}

impl Default for MathmlOptions {
    fn default() -> Self {
        MathmlOptions {
            spacing_control: SpacingControl::default(),
            fancy_font_substitution: true,
            use_version1_font_attributes: false,
            max_mathml_node_count: 4096,
        }
    }
}

/// How MathML characters get encoded in the printed XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr)]
pub enum MathmlEncoding {
    /// Long entity names like `&InvisibleTimes;` where they exist.
    #[strum(serialize = "long")]
    Long,
    /// Short entity names like `&it;`.
    #[strum(serialize = "short")]
    Short,
    /// Numeric character references like `&#x2062;`.
    #[default]
    #[strum(serialize = "numeric")]
    Numeric,
    /// Raw UTF-8 characters.
    #[strum(serialize = "raw")]
    Raw,
}

/// Options controlling XML entity encoding during printing.
#[derive(Debug, Clone)]
pub struct EncodingOptions {
    pub mathml_encoding: MathmlEncoding,
    /// Print non-MathML characters raw instead of as numeric references.
    pub other_encoding_raw: bool,
    /// Permit plane-1 characters in numeric or raw form. When false they
    /// fall back to short entity names.
    pub allow_plane_1: bool,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        EncodingOptions {
            mathml_encoding: MathmlEncoding::default(),
            other_encoding_raw: false,
            allow_plane_1: true,
        }
    }
}
