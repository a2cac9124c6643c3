//! TeX font state, tracked separately for math and text mode, and its
//! projection onto the single MathML `mathvariant` axis.

use mathml_renderer::attribute::MathmlFont;

/// The font family active in math mode. `Default` means no family
/// command is in effect, so letters get italics and digits get roman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathFamily {
    #[default]
    Default,
    Rm,
    Bf,
    It,
    Sf,
    Tt,
    Bb,
    Cal,
    Frak,
}

/// Math-mode font state. The `\boldsymbol` flag is orthogonal to the
/// family selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TexMathFont {
    pub family: MathFamily,
    pub is_boldsymbol: bool,
}

impl TexMathFont {
    /// The closest `mathvariant` value matching this TeX font. The
    /// `Default` family renders like italics.
    pub fn mathml_approximation(self) -> MathmlFont {
        if self.is_boldsymbol {
            match self.family {
                MathFamily::Rm | MathFamily::Bf => MathmlFont::Bold,
                MathFamily::Default | MathFamily::It => MathmlFont::BoldItalic,
                MathFamily::Bb => MathmlFont::DoubleStruck,
                MathFamily::Sf => MathmlFont::BoldSansSerif,
                MathFamily::Cal => MathmlFont::BoldScript,
                MathFamily::Tt => MathmlFont::Monospace,
                MathFamily::Frak => MathmlFont::BoldFraktur,
            }
        } else {
            match self.family {
                MathFamily::Rm => MathmlFont::Normal,
                MathFamily::Default | MathFamily::It => MathmlFont::Italic,
                MathFamily::Bf => MathmlFont::Bold,
                MathFamily::Bb => MathmlFont::DoubleStruck,
                MathFamily::Sf => MathmlFont::SansSerif,
                MathFamily::Cal => MathmlFont::Script,
                MathFamily::Tt => MathmlFont::Monospace,
                MathFamily::Frak => MathmlFont::Fraktur,
            }
        }
    }
}

/// The font family active in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFamily {
    #[default]
    Rm,
    Sf,
    Tt,
}

/// Text-mode font state, as selected by `\textbf`, `\sf` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TexTextFont {
    pub family: TextFamily,
    pub is_bold: bool,
    pub is_italic: bool,
}

impl TexTextFont {
    pub const fn new(family: TextFamily, is_bold: bool, is_italic: bool) -> Self {
        TexTextFont {
            family,
            is_bold,
            is_italic,
        }
    }

    /// The closest `mathvariant` value matching this TeX font. There is
    /// no bold or italic monospace in MathML.
    pub fn mathml_approximation(self) -> MathmlFont {
        match (self.family, self.is_bold, self.is_italic) {
            (TextFamily::Rm, false, false) => MathmlFont::Normal,
            (TextFamily::Rm, false, true) => MathmlFont::Italic,
            (TextFamily::Rm, true, false) => MathmlFont::Bold,
            (TextFamily::Rm, true, true) => MathmlFont::BoldItalic,
            (TextFamily::Sf, false, false) => MathmlFont::SansSerif,
            (TextFamily::Sf, false, true) => MathmlFont::SansSerifItalic,
            (TextFamily::Sf, true, false) => MathmlFont::BoldSansSerif,
            (TextFamily::Sf, true, true) => MathmlFont::SansSerifBoldItalic,
            (TextFamily::Tt, _, _) => MathmlFont::Monospace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_approximations() {
        assert_eq!(
            TexMathFont::default().mathml_approximation(),
            MathmlFont::Italic
        );
        let bb = TexMathFont {
            family: MathFamily::Bb,
            is_boldsymbol: false,
        };
        assert_eq!(bb.mathml_approximation(), MathmlFont::DoubleStruck);

        let boldsymbol_cal = TexMathFont {
            family: MathFamily::Cal,
            is_boldsymbol: true,
        };
        assert_eq!(boldsymbol_cal.mathml_approximation(), MathmlFont::BoldScript);
    }

    #[test]
    fn text_approximations() {
        assert_eq!(
            TexTextFont::default().mathml_approximation(),
            MathmlFont::Normal
        );
        assert_eq!(
            TexTextFont::new(TextFamily::Sf, true, true).mathml_approximation(),
            MathmlFont::SansSerifBoldItalic
        );
        assert_eq!(
            TexTextFont::new(TextFamily::Tt, true, true).mathml_approximation(),
            MathmlFont::Monospace
        );
    }
}
