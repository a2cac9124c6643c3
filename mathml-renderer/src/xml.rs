use std::fmt::Write;

use crate::entities::entity_names;
use crate::options::{EncodingOptions, MathmlEncoding};

/// A node in the XML output tree. Tag and attribute names are always drawn
/// from a fixed set, so they are static; text content is stored directly in
/// Unicode and only encoded while printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: &'static str,
    attributes: Vec<(&'static str, String)>,
    pub children: Vec<XmlContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Tag(XmlNode),
    Text(String),
}

impl XmlNode {
    pub fn new(name: &'static str) -> Self {
        XmlNode {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(name: &'static str, text: impl Into<String>) -> Self {
        let mut node = XmlNode::new(name);
        node.children.push(XmlContent::Text(text.into()));
        node
    }

    /// Sets an attribute, replacing any previous value. Attributes are kept
    /// sorted by name so the printed output is deterministic.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        match self.attributes.binary_search_by_key(&name, |&(n, _)| n) {
            Ok(i) => self.attributes[i].1 = value.into(),
            Err(i) => self.attributes.insert(i, (name, value.into())),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .binary_search_by_key(&name, |&(n, _)| n)
            .ok()
            .map(|i| self.attributes[i].1.as_str())
    }

    pub fn remove_attr(&mut self, name: &str) {
        if let Ok(i) = self.attributes.binary_search_by_key(&name, |&(n, _)| n) {
            self.attributes.remove(i);
        }
    }

    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(XmlContent::Tag(child));
    }

    /// The first text child, if the node starts with one.
    pub fn first_text(&self) -> Option<&str> {
        match self.children.first() {
            Some(XmlContent::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Prints the XML tree rooted at this node. If `indent` is true, each
    /// tag pair goes on its own line with two-space indenting; text content
    /// stays inline with its parent tags.
    pub fn print(&self, options: &EncodingOptions, indent: bool) -> String {
        let mut out = String::new();
        self.print_into(&mut out, options, indent, 0);
        out
    }

    fn print_into(&self, out: &mut String, options: &EncodingOptions, indent: bool, depth: usize) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            encode_into(out, value, options);
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        let mut just_wrote_text = false;
        for child in &self.children {
            match child {
                XmlContent::Tag(tag) => {
                    if !just_wrote_text && indent {
                        write_indent(out, depth + 1);
                    }
                    tag.print_into(out, options, indent, depth + 1);
                    just_wrote_text = false;
                }
                XmlContent::Text(text) => {
                    encode_into(out, text, options);
                    just_wrote_text = true;
                }
            }
        }

        if !just_wrote_text && indent {
            write_indent(out, depth);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }

    /// Post-processing pass over the font attributes of the whole tree.
    ///
    /// Every token element gets an explicit `mathvariant` while the tree is
    /// built, which makes merging decisions easy; here redundant ones are
    /// erased again. With `version1` set, `mathvariant` is rewritten into
    /// the MathML 1.x `fontfamily`/`fontstyle`/`fontweight` attributes.
    pub fn cleanup_font_attributes(&mut self, version1: bool) {
        if let Some(variant) = self.get_attr("mathvariant").map(str::to_owned) {
            if variant.is_empty() {
                self.remove_attr("mathvariant");
            } else {
                // The MathML default: single-character <mi> is italic,
                // everything else upright.
                let default_italic = self.name == "mi"
                    && self
                        .first_text()
                        .is_some_and(|t| t.chars().count() == 1);

                if version1 {
                    // Fraktur digits and similar have no version-1
                    // equivalent; bold is the least bad approximation.
                    let (family, italic, bold) = version1_font_info(&variant)
                        .unwrap_or(("", false, true));

                    self.remove_attr("mathvariant");
                    if !family.is_empty() {
                        self.set_attr("fontfamily", family);
                    }
                    if italic != default_italic {
                        self.set_attr("fontstyle", if italic { "italic" } else { "normal" });
                    }
                    if bold {
                        self.set_attr("fontweight", "bold");
                    }
                } else {
                    let default_variant = if default_italic { "italic" } else { "normal" };
                    if variant == default_variant {
                        self.remove_attr("mathvariant");
                    }
                }
            }
        }

        for child in &mut self.children {
            if let XmlContent::Tag(tag) = child {
                tag.cleanup_font_attributes(version1);
            }
        }
    }
}

fn write_indent(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Translation of `mathvariant` values into MathML 1.x font attributes:
/// `(fontfamily, is_italic, is_bold)`.
fn version1_font_info(variant: &str) -> Option<(&'static str, bool, bool)> {
    Some(match variant {
        "normal" => ("", false, false),
        "bold" => ("", false, true),
        "italic" => ("", true, false),
        "bold-italic" => ("", true, true),
        "sans-serif" => ("sans-serif", false, false),
        "bold-sans-serif" => ("sans-serif", false, true),
        "sans-serif-italic" => ("sans-serif", true, false),
        "sans-serif-bold-italic" => ("sans-serif", true, true),
        "monospace" => ("monospace", false, false),
        _ => return None,
    })
}

/// Encodes a string as XML text, converting non-ASCII characters to
/// entities as the options dictate.
pub fn xml_encode(input: &str, options: &EncodingOptions) -> String {
    let mut out = String::with_capacity(input.len());
    encode_into(&mut out, input, options);
    out
}

fn encode_into(out: &mut String, input: &str, options: &EncodingOptions) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if (c as u32) <= 0x7F => out.push(c),
            c => match entity_names(c) {
                None => {
                    if options.other_encoding_raw {
                        out.push(c);
                    } else {
                        let _ = write!(out, "&#x{:x};", c as u32);
                    }
                }
                Some((short, long)) => {
                    let mut encoding = options.mathml_encoding;

                    // Plane-1 characters may not be wanted in numeric or
                    // raw form.
                    if !options.allow_plane_1
                        && (c as u32) >= 0x10000
                        && matches!(encoding, MathmlEncoding::Numeric | MathmlEncoding::Raw)
                    {
                        encoding = MathmlEncoding::Short;
                    }

                    // Fall back on the next encoding when a name is not
                    // available.
                    if encoding == MathmlEncoding::Long && long.is_empty() {
                        encoding = MathmlEncoding::Short;
                    }
                    if encoding == MathmlEncoding::Short && short.is_empty() {
                        encoding = MathmlEncoding::Numeric;
                    }

                    match encoding {
                        MathmlEncoding::Long => {
                            out.push('&');
                            out.push_str(long);
                            out.push(';');
                        }
                        MathmlEncoding::Short => {
                            out.push('&');
                            out.push_str(short);
                            out.push(';');
                        }
                        MathmlEncoding::Numeric => {
                            let _ = write!(out, "&#x{:x};", c as u32);
                        }
                        MathmlEncoding::Raw => out.push(c),
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(encoding: MathmlEncoding) -> EncodingOptions {
        EncodingOptions {
            mathml_encoding: encoding,
            ..EncodingOptions::default()
        }
    }

    #[test]
    fn reserved_characters_always_escape() {
        let o = opts(MathmlEncoding::Raw);
        assert_eq!(xml_encode("a<b&c>d", &o), "a&lt;b&amp;c&gt;d");
    }

    #[test]
    fn encoding_preferences() {
        let alpha = "\u{3B1}";
        assert_eq!(xml_encode(alpha, &opts(MathmlEncoding::Raw)), "\u{3B1}");
        assert_eq!(xml_encode(alpha, &opts(MathmlEncoding::Numeric)), "&#x3b1;");
        assert_eq!(xml_encode(alpha, &opts(MathmlEncoding::Short)), "&alpha;");
        // "alpha" has no long name, so long falls back on short.
        assert_eq!(xml_encode(alpha, &opts(MathmlEncoding::Long)), "&alpha;");

        let sum = "\u{2211}";
        assert_eq!(xml_encode(sum, &opts(MathmlEncoding::Long)), "&Sum;");
    }

    #[test]
    fn plane1_fallback() {
        let afr = "\u{1D504}";
        let mut o = opts(MathmlEncoding::Numeric);
        assert_eq!(xml_encode(afr, &o), "&#x1d504;");
        o.allow_plane_1 = false;
        assert_eq!(xml_encode(afr, &o), "&Afr;");
        o.mathml_encoding = MathmlEncoding::Raw;
        assert_eq!(xml_encode(afr, &o), "&Afr;");
    }

    #[test]
    fn unnamed_character_encoding() {
        let mut o = opts(MathmlEncoding::Raw);
        // U+00E9 has no MathML name in our table.
        assert_eq!(xml_encode("\u{E9}", &o), "&#xe9;");
        o.other_encoding_raw = true;
        assert_eq!(xml_encode("\u{E9}", &o), "\u{E9}");
    }

    #[test]
    fn print_plain_and_indented() {
        let mut row = XmlNode::new("mrow");
        row.push_child(XmlNode::with_text("mi", "x"));
        let mut op = XmlNode::with_text("mo", "+");
        op.set_attr("lspace", "0.222em");
        row.push_child(op);
        row.push_child(XmlNode::new("mspace"));

        let o = EncodingOptions::default();
        assert_eq!(
            row.print(&o, false),
            "<mrow><mi>x</mi><mo lspace=\"0.222em\">+</mo><mspace/></mrow>"
        );
        assert_eq!(
            row.print(&o, true),
            "<mrow>\n  <mi>x</mi>\n  <mo lspace=\"0.222em\">+</mo>\n  <mspace/>\n</mrow>"
        );
    }

    #[test]
    fn attributes_print_sorted() {
        let mut node = XmlNode::with_text("mo", "(");
        node.set_attr("stretchy", "true");
        node.set_attr("minsize", "1.2em");
        node.set_attr("maxsize", "1.2em");
        assert_eq!(
            node.print(&EncodingOptions::default(), false),
            "<mo maxsize=\"1.2em\" minsize=\"1.2em\" stretchy=\"true\">(</mo>"
        );
    }

    #[test]
    fn cleanup_erases_redundant_mathvariant() {
        let mut mi = XmlNode::with_text("mi", "x");
        mi.set_attr("mathvariant", "italic");
        mi.cleanup_font_attributes(false);
        assert_eq!(mi.get_attr("mathvariant"), None);

        let mut sin = XmlNode::with_text("mi", "sin");
        sin.set_attr("mathvariant", "normal");
        sin.cleanup_font_attributes(false);
        assert_eq!(sin.get_attr("mathvariant"), None);

        let mut bold = XmlNode::with_text("mi", "x");
        bold.set_attr("mathvariant", "bold");
        bold.cleanup_font_attributes(false);
        assert_eq!(bold.get_attr("mathvariant"), Some("bold"));
    }

    #[test]
    fn cleanup_version1_attributes() {
        let mut mi = XmlNode::with_text("mi", "x");
        mi.set_attr("mathvariant", "sans-serif-bold-italic");
        mi.cleanup_font_attributes(true);
        assert_eq!(mi.get_attr("mathvariant"), None);
        assert_eq!(mi.get_attr("fontfamily"), Some("sans-serif"));
        // Single-character <mi> is italic by default, so no fontstyle.
        assert_eq!(mi.get_attr("fontstyle"), None);
        assert_eq!(mi.get_attr("fontweight"), Some("bold"));

        let mut mn = XmlNode::with_text("mn", "2");
        mn.set_attr("mathvariant", "italic");
        mn.cleanup_font_attributes(true);
        assert_eq!(mn.get_attr("fontstyle"), Some("italic"));
        assert_eq!(mn.get_attr("fontweight"), None);
    }
}
