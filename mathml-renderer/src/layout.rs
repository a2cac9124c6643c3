use static_assertions::assert_impl_all;

use crate::attribute::{Flavour, Limits, MathmlFont, Placement, Style, TableAlign};
use crate::options::{MathmlOptions, SpacingControl};
use crate::xml::{XmlContent, XmlNode};

/// A node of the layout tree.
///
/// Every node knows its atom flavour (used for automatic spacing and the
/// bin-to-ord demotion while rows are assembled), its limits convention and
/// the TeX style it is typeset in. The body is `Copy` so that a node can be
/// shallow-copied into the arena with one field changed.
#[derive(Debug, Clone, Copy)]
pub struct Node<'arena> {
    pub flavour: Flavour,
    pub limits: Limits,
    pub style: Style,
    pub body: Body<'arena>,
}

#[derive(Debug, Clone, Copy)]
pub enum Body<'arena> {
    /// A horizontal list. Adjacent `Space` entries have already been put in
    /// place when the tree was built.
    Row { children: &'arena [&'arena Node<'arena>] },
    /// Horizontal glue, in units of 1/18 em (mu). `is_user_requested`
    /// distinguishes `\,` and friends from automatically inserted spacing.
    Space { width: i32, is_user_requested: bool },
    /// An identifier or digit; becomes `<mi>` or `<mn>`.
    SymbolPlain { text: &'arena str, font: MathmlFont },
    /// An operator; becomes `<mo>`.
    SymbolOperator {
        text: &'arena str,
        font: MathmlFont,
        is_stretchy: bool,
        /// With `is_stretchy`, forces the vertical size (`\big` etc).
        size: Option<&'arena str>,
    },
    /// Text-mode material; becomes `<mtext>`.
    SymbolText { text: &'arena str, font: MathmlFont },
    Scripts {
        base: Option<&'arena Node<'arena>>,
        upper: Option<&'arena Node<'arena>>,
        lower: Option<&'arena Node<'arena>>,
        placement: Placement,
    },
    Fraction {
        numerator: &'arena Node<'arena>,
        denominator: &'arena Node<'arena>,
        is_line_visible: bool,
    },
    /// `\left ... \right`. An empty string means a null delimiter (`.`).
    Fenced {
        left: &'arena str,
        right: &'arena str,
        child: &'arena Node<'arena>,
    },
    Sqrt { child: &'arena Node<'arena> },
    Root {
        inside: &'arena Node<'arena>,
        outside: &'arena Node<'arena>,
    },
    Table {
        rows: &'arena [&'arena [&'arena Node<'arena>]],
        align: TableAlign,
    },
}

assert_impl_all!(Body<'static>: Copy);
assert_impl_all!(Node<'static>: Copy, Send, Sync);

impl<'arena> Node<'arena> {
    pub const fn new(style: Style, flavour: Flavour, body: Body<'arena>) -> Self {
        Node {
            flavour,
            limits: Limits::Auto,
            style,
            body,
        }
    }

    /// An ordinary atom in text style; mostly useful in tests.
    pub const fn plain(body: Body<'arena>) -> Self {
        Self::new(Style::Text, Flavour::Ord, body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The node-count ceiling was hit while generating MathML.
    TooManyNodes,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::TooManyNodes => {
                f.write_str("The MathML output would contain too many nodes")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Limit on the number of XML elements one formula may generate. Tables
/// with one long row and many short rows can blow the output up
/// quadratically, so the whole build shares a single counter.
pub struct NodeCounter {
    remaining: usize,
}

impl NodeCounter {
    pub fn new(max: usize) -> Self {
        NodeCounter { remaining: max }
    }

    fn tag(&mut self, name: &'static str) -> Result<XmlNode, RenderError> {
        if self.remaining == 0 {
            return Err(RenderError::TooManyNodes);
        }
        self.remaining -= 1;
        Ok(XmlNode::new(name))
    }

    fn tag_with_text(
        &mut self,
        name: &'static str,
        text: impl Into<String>,
    ) -> Result<XmlNode, RenderError> {
        let mut node = self.tag(name)?;
        node.children.push(XmlContent::Text(text.into()));
        Ok(node)
    }
}

/// Converts a layout tree into an XML tree, obeying the node-count ceiling
/// in the options. `current_style` is the style of the surrounding context,
/// normally [`Style::Text`].
pub fn build_mathml(
    root: &Node<'_>,
    options: &MathmlOptions,
    current_style: Style,
) -> Result<XmlNode, RenderError> {
    let mut counter = NodeCounter::new(options.max_mathml_node_count);
    root.emit(options, current_style, &mut counter)
}

/// Wraps a node in `<mstyle>` if the node's style differs from the context.
fn insert_mstyle(
    node: XmlNode,
    source: Style,
    target: Style,
    counter: &mut NodeCounter,
) -> Result<XmlNode, RenderError> {
    if source == target {
        return Ok(node);
    }

    let mut style = counter.tag("mstyle")?;
    style.push_child(node);

    if source == Style::Display {
        style.set_attr("displaystyle", "false");
    } else if target == Style::Display {
        style.set_attr("displaystyle", "true");
    }

    let target_level = target.script_level();
    if target_level != source.script_level() {
        style.set_attr("scriptlevel", target_level.to_string());
    }

    Ok(style)
}

/// Tags whose spacing behaviour is carried by their first child (see
/// "embellished operators" in the MathML specification).
fn is_embellished(name: &str) -> bool {
    matches!(
        name,
        "msup" | "msub" | "msubsup" | "mover" | "munder" | "munderover"
    )
}

/// The nucleus of an expression: the `<mo>` (if any) that should receive
/// `lspace`/`rspace` attributes.
fn nucleus(node: &XmlNode) -> &XmlNode {
    let mut cur = node;
    loop {
        if !is_embellished(cur.name) {
            return cur;
        }
        match cur.children.first() {
            Some(XmlContent::Tag(first)) => cur = first,
            _ => return cur,
        }
    }
}

fn nucleus_mut(node: &mut XmlNode) -> &mut XmlNode {
    if is_embellished(node.name) && matches!(node.children.first(), Some(XmlContent::Tag(_))) {
        match node.children.first_mut() {
            Some(XmlContent::Tag(first)) => nucleus_mut(first),
            _ => unreachable!(),
        }
    } else {
        node
    }
}

/// Operators which MathML renderers stretch by default; for these an
/// explicit `stretchy="false"` is written when stretching is not wanted.
fn is_stretchy_by_default(text: &str) -> bool {
    let mut chars = text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '|'
            | '/'
            | '\u{2216}'
            | '\u{2329}'
            | '\u{232A}'
            | '\u{2308}'
            | '\u{2309}'
            | '\u{230A}'
            | '\u{230B}'
            | '\u{2211}'
            | '\u{220F}'
            | '\u{222B}'
            | '\u{222C}'
            | '\u{222D}'
            | '\u{2A0C}'
            | '\u{222E}'
            | '\u{22C2}'
            | '\u{2A00}'
            | '\u{2A02}'
            | '\u{2210}'
            | '\u{2A06}'
            | '\u{2A01}'
            | '\u{22C1}'
            | '\u{2A04}'
            | '\u{22C0}'
    )
}

/// Plane-1 (or letterlike) replacement for a single character in one of the
/// fancy fonts, so that the character itself carries the font and no
/// `mathvariant` attribute is needed.
fn fancy_substitution(c: char, font: MathmlFont) -> Option<char> {
    let (base_uppercase, base_lowercase): (u32, u32) = match font {
        MathmlFont::BoldScript => (0x1D4D0, 0),
        MathmlFont::Script => (0x1D49C, 0),
        MathmlFont::Fraktur => (0x1D504, 0x1D51E),
        MathmlFont::BoldFraktur => (0x1D56C, 0x1D586),
        MathmlFont::DoubleStruck => (0x1D538, 0),
        _ => return None,
    };

    let mut replacement = 0u32;
    if base_uppercase != 0 && c.is_ascii_uppercase() {
        replacement = base_uppercase + (c as u32 - 'A' as u32);
    }
    if base_lowercase != 0 && c.is_ascii_lowercase() {
        replacement = base_lowercase + (c as u32 - 'a' as u32);
    }

    // Letterlike symbols predate the plane-1 alphabets, which left holes
    // there; Unicode keeps the original BMP codepoints instead.
    replacement = match replacement {
        0x1D49D => 0x212C, // script B
        0x1D4A0 => 0x2130, // script E
        0x1D4A1 => 0x2131, // script F
        0x1D4A3 => 0x210B, // script H
        0x1D4A4 => 0x2110, // script I
        0x1D4A7 => 0x2112, // script L
        0x1D4A8 => 0x2133, // script M
        0x1D4AD => 0x211B, // script R

        0x1D53A => 0x2102, // double struck C
        0x1D53F => 0x210D, // double struck H
        0x1D545 => 0x2115, // double struck N
        0x1D547 => 0x2119, // double struck P
        0x1D548 => 0x211A, // double struck Q
        0x1D549 => 0x211D, // double struck R
        0x1D551 => 0x2124, // double struck Z

        0x1D506 => 0x212D, // fraktur C
        0x1D50B => 0x210C, // fraktur H
        0x1D50C => 0x2111, // fraktur I
        0x1D515 => 0x211C, // fraktur R
        0x1D51D => 0x2128, // fraktur Z

        0 => return None,
        other => other,
    };

    char::from_u32(replacement)
}

impl Node<'_> {
    fn emit(
        &self,
        options: &MathmlOptions,
        current_style: Style,
        counter: &mut NodeCounter,
    ) -> Result<XmlNode, RenderError> {
        match self.body {
            Body::Row { children } => self.emit_row(children, options, current_style, counter),

            // A bare space outside a row, e.g. "x^{\,}". There is no
            // neighbour to attach it to, so it becomes an <mspace>.
            Body::Space { width, .. } => {
                let mut node = counter.tag("mspace")?;
                node.set_attr("width", format_space_width(width));
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::SymbolPlain { text, font } => {
                let is_digit = {
                    let mut chars = text.chars();
                    matches!(
                        (chars.next(), chars.next()),
                        (Some('0'..='9'), None)
                    )
                };
                let name = if is_digit { "mn" } else { "mi" };

                if options.fancy_font_substitution {
                    let mut chars = text.chars();
                    if let (Some(c), None) = (chars.next(), chars.next()) {
                        if let Some(replacement) = fancy_substitution(c, font) {
                            let node =
                                counter.tag_with_text(name, replacement.to_string())?;
                            return insert_mstyle(node, current_style, self.style, counter);
                        }
                    }
                }

                let mut node = counter.tag_with_text(name, text)?;
                // The font goes in explicitly, which makes the merging
                // decisions in emit_row straightforward. Redundant
                // mathvariant attributes are erased again in the cleanup
                // pass.
                node.set_attr("mathvariant", font.as_str());
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::SymbolOperator {
                text,
                font,
                is_stretchy,
                size,
            } => {
                let mut node = counter.tag_with_text("mo", text)?;

                if self.limits == Limits::Limits {
                    node.set_attr("movablelimits", "false");
                }
                if font != MathmlFont::Normal {
                    node.set_attr("mathvariant", font.as_str());
                }
                if is_stretchy {
                    node.set_attr("stretchy", "true");
                    if let Some(size) = size {
                        node.set_attr("minsize", size);
                        node.set_attr("maxsize", size);
                    }
                } else if is_stretchy_by_default(text) {
                    node.set_attr("stretchy", "false");
                }

                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::SymbolText { text, font } => {
                let mut node = counter.tag_with_text("mtext", text)?;
                node.set_attr("mathvariant", font.as_str());
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::Scripts {
                base,
                upper,
                lower,
                placement,
            } => {
                let smaller_style = self.style.smaller_for_script();

                let base = match base {
                    Some(base) => base.emit(options, self.style, counter)?,
                    // An empty base is represented by "<mrow/>".
                    None => counter.tag("mrow")?,
                };

                let sideset = placement == Placement::Sideset;
                let mut node;
                match (upper, lower) {
                    (Some(upper), Some(lower)) => {
                        node = counter.tag(if sideset { "msubsup" } else { "munderover" })?;
                        node.push_child(base);
                        node.push_child(lower.emit(options, smaller_style, counter)?);
                        node.push_child(upper.emit(options, smaller_style, counter)?);
                    }
                    (Some(upper), None) => {
                        node = counter.tag(if sideset { "msup" } else { "mover" })?;
                        node.push_child(base);
                        node.push_child(upper.emit(options, smaller_style, counter)?);
                    }
                    (None, Some(lower)) => {
                        node = counter.tag(if sideset { "msub" } else { "munder" })?;
                        node.push_child(base);
                        node.push_child(lower.emit(options, smaller_style, counter)?);
                    }
                    (None, None) => {
                        // The parser never produces a script node without
                        // scripts; degrade to the bare base.
                        node = base;
                    }
                }

                if placement == Placement::Accent {
                    if upper.is_some() {
                        node.set_attr("accent", "true");
                    }
                    if lower.is_some() {
                        node.set_attr("accentunder", "true");
                    }
                }

                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::Fraction {
                numerator,
                denominator,
                is_line_visible,
            } => {
                let smaller_style = self.style.smaller_for_fraction();
                let mut node = counter.tag("mfrac")?;
                node.push_child(numerator.emit(options, smaller_style, counter)?);
                node.push_child(denominator.emit(options, smaller_style, counter)?);
                if !is_line_visible {
                    node.set_attr("linethickness", "0");
                }
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::Fenced { left, right, child } => {
                let mut inside = child.emit(options, self.style, counter)?;

                if left.is_empty() && right.is_empty() {
                    return Ok(inside);
                }

                if inside.name != "mrow" {
                    let mut row = counter.tag("mrow")?;
                    row.push_child(inside);
                    inside = row;
                }

                let mut output = counter.tag("mrow")?;
                if !left.is_empty() {
                    let mut delim = counter.tag_with_text("mo", left)?;
                    delim.set_attr("stretchy", "true");
                    output.push_child(delim);
                }
                output.push_child(inside);
                if !right.is_empty() {
                    let mut delim = counter.tag_with_text("mo", right)?;
                    delim.set_attr("stretchy", "true");
                    output.push_child(delim);
                }

                insert_mstyle(output, current_style, self.style, counter)
            }

            Body::Sqrt { child } => {
                let mut node = counter.tag("msqrt")?;
                node.push_child(child.emit(options, self.style, counter)?);
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::Root { inside, outside } => {
                let mut node = counter.tag("mroot")?;
                node.push_child(inside.emit(options, self.style, counter)?);
                node.push_child(outside.emit(options, Style::ScriptScript, counter)?);
                insert_mstyle(node, current_style, self.style, counter)
            }

            Body::Table { rows, align } => {
                self.emit_table(rows, align, options, current_style, counter)
            }
        }
    }

    fn emit_row(
        &self,
        children: &[&Node<'_>],
        options: &MathmlOptions,
        current_style: Style,
        counter: &mut NodeCounter,
    ) -> Result<XmlNode, RenderError> {
        let mut node = counter.tag("mrow")?;

        if children.is_empty() {
            return Ok(node);
        }

        let mut i = 0;
        loop {
            // Gather a run of spaces.
            let mut space_width: i32 = 0;
            let mut is_user_requested = false;
            while let Some(child) = children.get(i) {
                let Body::Space {
                    width,
                    is_user_requested: requested,
                } = child.body
                else {
                    break;
                };
                space_width += width;
                if requested {
                    is_user_requested = true;
                }
                i += 1;
            }

            let mut current = match children.get(i) {
                Some(child) => Some(child.emit(options, self.style, counter)?),
                None => None,
            };

            // With no intervening space, adjacent token elements of the
            // same kind are merged, e.g. <mn>4</mn><mn>2</mn> becomes
            // <mn>42</mn>.
            let mut merged = false;
            if space_width == 0 {
                if let (Some(XmlContent::Tag(previous)), Some(cur)) =
                    (node.children.last_mut(), current.as_ref())
                {
                    let prev_variant = previous.get_attr("mathvariant").unwrap_or("");
                    let cur_variant = cur.get_attr("mathvariant").unwrap_or("");
                    let mergeable = (matches!(previous.name, "mn" | "mtext")
                        && cur.name == previous.name
                        && prev_variant == cur_variant)
                        || (previous.name == "mi"
                            && cur.name == "mi"
                            && prev_variant == "normal"
                            && cur_variant == "normal");

                    if mergeable {
                        if let (Some(XmlContent::Text(prev_text)), Some(cur_text)) =
                            (previous.children.first_mut(), cur.first_text())
                        {
                            prev_text.push_str(cur_text);
                            merged = true;
                        }
                    }
                }
            }

            if !merged {
                // Spacing goes into "lspace"/"rspace" attributes when <mo>
                // nodes are available on either side, and into <mspace>
                // otherwise. MathML renderers have their own ideas about
                // space around <mo> nodes, which is why zero-width spacing
                // still gets written out next to them in moderate mode.
                let is_previous_mo = match node.children.last() {
                    Some(XmlContent::Tag(previous)) => nucleus(previous).name == "mo",
                    _ => false,
                };
                let is_current_mo = current
                    .as_ref()
                    .is_some_and(|cur| nucleus(cur).name == "mo");

                let do_space = match options.spacing_control {
                    SpacingControl::Strict => true,
                    _ if is_user_requested => true,
                    SpacingControl::Moderate => {
                        if is_previous_mo || is_current_mo {
                            space_width == 0
                        } else {
                            space_width != 0
                        }
                    }
                    SpacingControl::Relaxed => false,
                };

                if do_space {
                    let width_string = format_space_width(space_width);
                    if is_previous_mo {
                        if let Some(XmlContent::Tag(previous)) = node.children.last_mut() {
                            nucleus_mut(previous).set_attr("rspace", width_string);
                        }
                        if is_current_mo {
                            if let Some(cur) = current.as_mut() {
                                nucleus_mut(cur).set_attr("lspace", "0");
                            }
                        }
                    } else if is_current_mo {
                        if let Some(cur) = current.as_mut() {
                            nucleus_mut(cur).set_attr("lspace", width_string);
                        }
                    } else if space_width != 0 {
                        let mut space = counter.tag("mspace")?;
                        space.set_attr("width", width_string);
                        node.push_child(space);
                    }
                }

                if let Some(cur) = current {
                    node.push_child(cur);
                }
            }

            if i >= children.len() {
                break;
            }
            i += 1;
        }

        // A row with a single child collapses to that child.
        if node.children.len() == 1 {
            if let Some(XmlContent::Tag(only)) = node.children.pop() {
                node = only;
            }
        }

        insert_mstyle(node, current_style, self.style, counter)
    }

    fn emit_table(
        &self,
        rows: &[&[&Node<'_>]],
        align: TableAlign,
        options: &MathmlOptions,
        current_style: Style,
        counter: &mut NodeCounter,
    ) -> Result<XmlNode, RenderError> {
        let mut node = counter.tag("mtable")?;

        let table_width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

        match align {
            TableAlign::Centre => {}
            TableAlign::Left => node.set_attr("columnalign", "left"),
            TableAlign::RightLeft => {
                let mut align_string = String::from("right");
                for i in 1..table_width {
                    align_string.push_str(if i % 2 == 1 { " left" } else { " right" });
                }
                node.set_attr("columnalign", align_string);
            }
        }

        for row in rows {
            let mut out_row = counter.tag("mtr")?;
            for entry in *row {
                let mut cell = counter.tag("mtd")?;
                cell.push_child(entry.emit(options, self.style, counter)?);
                out_row.push_child(cell);
            }
            // Short rows are padded with empty cells.
            for _ in row.len()..table_width {
                out_row.push_child(counter.tag("mtd")?);
            }
            node.push_child(out_row);
        }

        if self.style == Style::Display {
            node.set_attr("displaystyle", "true");
        }

        let level = self.style.script_level();
        if level != current_style.script_level() {
            let mut style = counter.tag("mstyle")?;
            style.set_attr("scriptlevel", level.to_string());
            style.push_child(node);
            return Ok(style);
        }

        Ok(node)
    }
}

fn format_space_width(width: i32) -> String {
    if width == 0 {
        "0".to_string()
    } else {
        format!("{:.3}em", f64::from(width) / 18.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::options::{EncodingOptions, MathmlEncoding};

    fn print(node: &XmlNode) -> String {
        let encoding = EncodingOptions {
            mathml_encoding: MathmlEncoding::Raw,
            other_encoding_raw: true,
            allow_plane_1: true,
        };
        node.print(&encoding, false)
    }

    fn render(root: &Node<'_>, options: &MathmlOptions) -> String {
        let mut xml = build_mathml(root, options, Style::Text).unwrap();
        xml.cleanup_font_attributes(options.use_version1_font_attributes);
        print(&xml)
    }

    fn sym<'arena>(
        arena: &'arena Arena,
        flavour: Flavour,
        body: Body<'arena>,
    ) -> &'arena Node<'arena> {
        arena.push(Node::new(Style::Text, flavour, body))
    }

    fn identifier<'arena>(arena: &'arena Arena, text: &'arena str) -> &'arena Node<'arena> {
        sym(
            arena,
            Flavour::Ord,
            Body::SymbolPlain {
                text,
                font: MathmlFont::Italic,
            },
        )
    }

    fn operator<'arena>(
        arena: &'arena Arena,
        flavour: Flavour,
        text: &'arena str,
    ) -> &'arena Node<'arena> {
        sym(
            arena,
            flavour,
            Body::SymbolOperator {
                text,
                font: MathmlFont::Normal,
                is_stretchy: false,
                size: None,
            },
        )
    }

    fn space<'arena>(arena: &'arena Arena, width: i32, user: bool) -> &'arena Node<'arena> {
        sym(
            arena,
            Flavour::Ord,
            Body::Space {
                width,
                is_user_requested: user,
            },
        )
    }

    #[test]
    fn digits_merge_into_one_mn() {
        let arena = Arena::new();
        let four = sym(
            &arena,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "4",
                font: MathmlFont::Normal,
            },
        );
        let two = sym(
            &arena,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "2",
                font: MathmlFont::Normal,
            },
        );
        let children = arena.push_slice(&[four, two]);
        let row = Node::plain(Body::Row { children });
        assert_eq!(render(&row, &MathmlOptions::default()), "<mn>42</mn>");
    }

    #[test]
    fn space_between_operators_moderate_mode() {
        // "x + y" with the automatic 4/18 em around the binary operator.
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let plus = operator(&arena, Flavour::Bin, "+");
        let y = identifier(&arena, "y");
        let children = arena.push_slice(&[x, space(&arena, 4, false), plus, space(&arena, 4, false), y]);
        let row = Node::plain(Body::Row { children });
        // Moderate mode trusts the renderer for nonzero space next to <mo>.
        assert_eq!(
            render(&row, &MathmlOptions::default()),
            "<mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn strict_mode_writes_all_spacing() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let plus = operator(&arena, Flavour::Bin, "+");
        let y = identifier(&arena, "y");
        let children = arena.push_slice(&[x, space(&arena, 4, false), plus, space(&arena, 4, false), y]);
        let row = Node::plain(Body::Row { children });
        let options = MathmlOptions {
            spacing_control: SpacingControl::Strict,
            ..MathmlOptions::default()
        };
        assert_eq!(
            render(&row, &options),
            "<mrow><mi>x</mi><mo lspace=\"0.222em\" rspace=\"0.222em\">+</mo><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn zero_space_next_to_mo_in_moderate_mode() {
        // Suppressed spacing (script style) around an operator must be
        // written out, because the renderer would add its own otherwise.
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let plus = operator(&arena, Flavour::Bin, "+");
        let y = identifier(&arena, "y");
        let children = arena.push_slice(&[x, plus, y]);
        let row = Node::plain(Body::Row { children });
        assert_eq!(
            render(&row, &MathmlOptions::default()),
            "<mrow><mi>x</mi><mo lspace=\"0\" rspace=\"0\">+</mo><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn user_requested_space_survives_relaxed_mode() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let y = identifier(&arena, "y");
        let children = arena.push_slice(&[x, space(&arena, 18, true), y]);
        let row = Node::plain(Body::Row { children });
        let options = MathmlOptions {
            spacing_control: SpacingControl::Relaxed,
            ..MathmlOptions::default()
        };
        assert_eq!(
            render(&row, &options),
            "<mrow><mi>x</mi><mspace width=\"1.000em\"/><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn singleton_row_unwraps() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let children = arena.push_slice(&[x]);
        let row = Node::plain(Body::Row { children });
        assert_eq!(render(&row, &MathmlOptions::default()), "<mi>x</mi>");
    }

    fn script_identifier<'arena>(arena: &'arena Arena, text: &'arena str) -> &'arena Node<'arena> {
        arena.push(Node::new(
            Style::Script,
            Flavour::Ord,
            Body::SymbolPlain {
                text,
                font: MathmlFont::Italic,
            },
        ))
    }

    #[test]
    fn fraction_descends_one_style() {
        let arena = Arena::new();
        let x = script_identifier(&arena, "x");
        let y = script_identifier(&arena, "y");
        let frac = Node::new(
            Style::Text,
            Flavour::Inner,
            Body::Fraction {
                numerator: x,
                denominator: y,
                is_line_visible: true,
            },
        );
        // Text style context: no mstyle needed, children at script size
        // is the renderer's own job inside <mfrac>.
        assert_eq!(
            render(&frac, &MathmlOptions::default()),
            "<mfrac><mi>x</mi><mi>y</mi></mfrac>"
        );
    }

    #[test]
    fn invisible_fraction_line() {
        let arena = Arena::new();
        let n = script_identifier(&arena, "n");
        let k = script_identifier(&arena, "k");
        let frac = Node::new(
            Style::Text,
            Flavour::Inner,
            Body::Fraction {
                numerator: n,
                denominator: k,
                is_line_visible: false,
            },
        );
        assert_eq!(
            render(&frac, &MathmlOptions::default()),
            "<mfrac linethickness=\"0\"><mi>n</mi><mi>k</mi></mfrac>"
        );
    }

    #[test]
    fn scripts_sideset_and_underover() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let two = arena.push(Node::new(
            Style::Script,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "2",
                font: MathmlFont::Normal,
            },
        ));
        let two: &Node<'_> = two;
        let sideset = Node::new(
            Style::Text,
            Flavour::Ord,
            Body::Scripts {
                base: Some(x),
                upper: Some(two),
                lower: None,
                placement: Placement::Sideset,
            },
        );
        assert_eq!(
            render(&sideset, &MathmlOptions::default()),
            "<msup><mi>x</mi><mn>2</mn></msup>"
        );

        let underover = Node::new(
            Style::Text,
            Flavour::Op,
            Body::Scripts {
                base: Some(x),
                upper: Some(two),
                lower: None,
                placement: Placement::Underover,
            },
        );
        assert_eq!(
            render(&underover, &MathmlOptions::default()),
            "<mover><mi>x</mi><mn>2</mn></mover>"
        );
    }

    #[test]
    fn empty_script_base_is_mrow() {
        let arena = Arena::new();
        let two = arena.push(Node::new(
            Style::Script,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "2",
                font: MathmlFont::Normal,
            },
        ));
        let two: &Node<'_> = two;
        let scripts = Node::new(
            Style::Text,
            Flavour::Ord,
            Body::Scripts {
                base: None,
                upper: Some(two),
                lower: None,
                placement: Placement::Sideset,
            },
        );
        assert_eq!(
            render(&scripts, &MathmlOptions::default()),
            "<msup><mrow/><mn>2</mn></msup>"
        );
    }

    #[test]
    fn fenced_wraps_with_stretchy_delimiters() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let fenced = Node::new(
            Style::Text,
            Flavour::Inner,
            Body::Fenced {
                left: "(",
                right: ")",
                child: x,
            },
        );
        assert_eq!(
            render(&fenced, &MathmlOptions::default()),
            "<mrow><mo stretchy=\"true\">(</mo><mrow><mi>x</mi></mrow><mo stretchy=\"true\">)</mo></mrow>"
        );
    }

    #[test]
    fn null_delimiters_disappear() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let fenced = Node::new(
            Style::Text,
            Flavour::Inner,
            Body::Fenced {
                left: "",
                right: "",
                child: x,
            },
        );
        assert_eq!(render(&fenced, &MathmlOptions::default()), "<mi>x</mi>");
    }

    #[test]
    fn default_stretchy_operator_gets_pinned_down() {
        let arena = Arena::new();
        let paren = operator(&arena, Flavour::Open, "(");
        assert_eq!(
            render(paren, &MathmlOptions::default()),
            "<mo stretchy=\"false\">(</mo>"
        );
    }

    #[test]
    fn big_delimiter_sizes() {
        let arena = Arena::new();
        let node = sym(
            &arena,
            Flavour::Open,
            Body::SymbolOperator {
                text: "(",
                font: MathmlFont::Normal,
                is_stretchy: true,
                size: Some("1.2em"),
            },
        );
        assert_eq!(
            render(node, &MathmlOptions::default()),
            "<mo maxsize=\"1.2em\" minsize=\"1.2em\" stretchy=\"true\">(</mo>"
        );
    }

    #[test]
    fn fancy_font_substitution_and_exceptions() {
        let arena = Arena::new();
        let r = sym(
            &arena,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "R",
                font: MathmlFont::DoubleStruck,
            },
        );
        // Letterlike exception: double-struck R is U+211D.
        assert_eq!(render(r, &MathmlOptions::default()), "<mi>\u{211D}</mi>");

        let a = sym(
            &arena,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "A",
                font: MathmlFont::Fraktur,
            },
        );
        assert_eq!(render(a, &MathmlOptions::default()), "<mi>\u{1D504}</mi>");

        // With substitution off, the mathvariant attribute does the work.
        let options = MathmlOptions {
            fancy_font_substitution: false,
            ..MathmlOptions::default()
        };
        assert_eq!(
            render(a, &options),
            "<mi mathvariant=\"fraktur\">A</mi>"
        );
    }

    #[test]
    fn mstyle_wraps_style_changes() {
        let arena = Arena::new();
        let x = arena.push(Node::new(
            Style::Display,
            Flavour::Ord,
            Body::SymbolPlain {
                text: "x",
                font: MathmlFont::Italic,
            },
        ));
        let x: &Node<'_> = x;
        let mut xml = build_mathml(x, &MathmlOptions::default(), Style::Text).unwrap();
        xml.cleanup_font_attributes(false);
        assert_eq!(
            print(&xml),
            "<mstyle displaystyle=\"true\"><mi>x</mi></mstyle>"
        );
    }

    #[test]
    fn table_alignment_and_padding() {
        let arena = Arena::new();
        let a = identifier(&arena, "a");
        let b = identifier(&arena, "b");
        let c = identifier(&arena, "c");
        let row1 = arena.push_slice(&[a, b]);
        let row2 = arena.push_slice(&[c]);
        let rows = arena.push_rows(&[row1, row2]);
        let table = Node::new(
            Style::Text,
            Flavour::Inner,
            Body::Table {
                rows,
                align: TableAlign::Left,
            },
        );
        assert_eq!(
            render(&table, &MathmlOptions::default()),
            "<mtable columnalign=\"left\">\
             <mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
             <mtr><mtd><mi>c</mi></mtd><mtd/></mtr>\
             </mtable>"
        );
    }

    #[test]
    fn node_ceiling_is_enforced() {
        let arena = Arena::new();
        let x = identifier(&arena, "x");
        let y = identifier(&arena, "y");
        let children = arena.push_slice(&[x, y]);
        let row = Node::plain(Body::Row { children });
        let options = MathmlOptions {
            max_mathml_node_count: 2,
            ..MathmlOptions::default()
        };
        assert_eq!(
            build_mathml(&row, &options, Style::Text),
            Err(RenderError::TooManyNodes)
        );
    }
}
