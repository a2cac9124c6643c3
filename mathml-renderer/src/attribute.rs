use strum_macros::IntoStaticStr;

/// The eight TeX atom flavours. The flavour of a node decides how much
/// space separates it from its neighbours and which atoms get demoted
/// from binary operator to ordinary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Flavour {
    Ord,
    Op,
    Bin,
    Rel,
    Open,
    Close,
    Punct,
    Inner,
}

impl Flavour {
    pub const COUNT: usize = 8;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Limits convention for `Op` atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limits {
    /// Use the default for the operator and style.
    Auto,
    /// Scripts are placed above and below (`\limits`).
    Limits,
    /// Scripts are placed to the side (`\nolimits`).
    NoLimits,
    /// Above/below in display style, to the side otherwise (`\displaylimits`).
    DisplayLimits,
}

/// One of the four TeX styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Style {
    Display,
    Text,
    Script,
    ScriptScript,
}

impl Style {
    /// The MathML `scriptlevel` corresponding to this style.
    pub const fn script_level(self) -> u8 {
        match self {
            Style::Display | Style::Text => 0,
            Style::Script => 1,
            Style::ScriptScript => 2,
        }
    }

    /// The style used for the numerator and denominator of a fraction.
    pub const fn smaller_for_fraction(self) -> Style {
        match self {
            Style::Display => Style::Text,
            Style::Text => Style::Script,
            Style::Script | Style::ScriptScript => Style::ScriptScript,
        }
    }

    /// The style used for subscripts and superscripts.
    pub const fn smaller_for_script(self) -> Style {
        match self {
            Style::Display | Style::Text => Style::Script,
            Style::Script | Style::ScriptScript => Style::ScriptScript,
        }
    }

    /// True in script and scriptscript styles, where the automatic
    /// inter-atom spacing is dropped for most pairs.
    pub const fn is_compact(self) -> bool {
        matches!(self, Style::Script | Style::ScriptScript)
    }
}

/// The fonts MathML can express with `mathvariant`. (There are further font
/// attributes in MathML, but they are deprecated, so we avoid them.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MathmlFont {
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "bold")]
    Bold,
    #[strum(serialize = "italic")]
    Italic,
    #[strum(serialize = "bold-italic")]
    BoldItalic,
    #[strum(serialize = "double-struck")]
    DoubleStruck,
    #[strum(serialize = "bold-fraktur")]
    BoldFraktur,
    #[strum(serialize = "script")]
    Script,
    #[strum(serialize = "bold-script")]
    BoldScript,
    #[strum(serialize = "fraktur")]
    Fraktur,
    #[strum(serialize = "sans-serif")]
    SansSerif,
    #[strum(serialize = "bold-sans-serif")]
    BoldSansSerif,
    #[strum(serialize = "sans-serif-italic")]
    SansSerifItalic,
    #[strum(serialize = "sans-serif-bold-italic")]
    SansSerifBoldItalic,
    #[strum(serialize = "monospace")]
    Monospace,
}

impl MathmlFont {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Script placement, decided while the layout tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `msub`/`msup`/`msubsup`.
    Sideset,
    /// `munder`/`mover`/`munderover`.
    Underover,
    /// Under/over with `accent`/`accentunder` set.
    Accent,
}

/// Column alignment of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAlign {
    /// MathML's default (centred); no `columnalign` attribute.
    Centre,
    /// All columns left-aligned, used for `cases`.
    Left,
    /// Alternating right/left columns, used for `aligned`.
    RightLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_strings() {
        assert_eq!(MathmlFont::Normal.as_str(), "normal");
        assert_eq!(MathmlFont::BoldItalic.as_str(), "bold-italic");
        assert_eq!(MathmlFont::DoubleStruck.as_str(), "double-struck");
        assert_eq!(MathmlFont::SansSerifBoldItalic.as_str(), "sans-serif-bold-italic");
    }

    #[test]
    fn style_descent() {
        assert_eq!(Style::Display.smaller_for_fraction(), Style::Text);
        assert_eq!(Style::Text.smaller_for_fraction(), Style::Script);
        assert_eq!(Style::Script.smaller_for_fraction(), Style::ScriptScript);
        assert_eq!(Style::ScriptScript.smaller_for_fraction(), Style::ScriptScript);

        assert_eq!(Style::Display.smaller_for_script(), Style::Script);
        assert_eq!(Style::Text.smaller_for_script(), Style::Script);
        assert_eq!(Style::Script.smaller_for_script(), Style::ScriptScript);
    }

    #[test]
    fn script_levels() {
        assert_eq!(Style::Display.script_level(), 0);
        assert_eq!(Style::Text.script_level(), 0);
        assert_eq!(Style::Script.script_level(), 1);
        assert_eq!(Style::ScriptScript.script_level(), 2);
    }
}
