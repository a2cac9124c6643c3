//! Layout tree construction.
//!
//! This stage turns the parse tree into the renderer's layout tree and
//! makes all the typesetting decisions on the way: atom flavours and the
//! bin-to-ord demotions, automatic inter-atom spacing, script placement,
//! fonts and style changes.

use mathml_renderer::arena::Arena;
use mathml_renderer::attribute::{Flavour, Limits, MathmlFont, Placement, Style, TableAlign};
use mathml_renderer::layout::{Body, Node};

use crate::fonts::{MathFamily, TexMathFont, TexTextFont, TextFamily};
use crate::latex_parser::error::{TexErrKind, TexError};
use crate::parse_node::{MathNode, TextNode};
use crate::symbol_tables::{
    ACCENTS, BIG_COMMANDS, DELIMITERS, IDENTIFIERS, LOWERCASE_GREEK, NEGATIONS, OPERATORS,
    SPACE_COMMANDS, TEXT_SUBSTITUTIONS, UPPERCASE_GREEK,
};

fn err(kind: TexErrKind) -> TexError {
    TexError(0, kind)
}

const fn node<'arena>(
    style: Style,
    flavour: Flavour,
    limits: Limits,
    body: Body<'arena>,
) -> Node<'arena> {
    Node {
        flavour,
        limits,
        style,
        body,
    }
}

const fn space_node(style: Style, width: i32, is_user_requested: bool) -> Node<'static> {
    node(
        style,
        Flavour::Ord,
        Limits::DisplayLimits,
        Body::Space {
            width,
            is_user_requested,
        },
    )
}

const fn operator<'arena>(
    style: Style,
    flavour: Flavour,
    limits: Limits,
    text: &'arena str,
    font: MathmlFont,
    is_stretchy: bool,
    size: Option<&'arena str>,
) -> Node<'arena> {
    node(
        style,
        flavour,
        limits,
        Body::SymbolOperator {
            text,
            font,
            is_stretchy,
            size,
        },
    )
}

/// Operators and lowercase greek only respond to `\boldsymbol`, not to
/// the family commands.
const fn symbol_font(font: TexMathFont) -> MathmlFont {
    if font.is_boldsymbol {
        MathmlFont::Bold
    } else {
        MathmlFont::Normal
    }
}

/// Allocates a fixed collection of nodes and gathers references to them.
fn push_all<'arena, const N: usize>(
    arena: &'arena Arena,
    nodes: [Node<'arena>; N],
) -> &'arena [&'arena Node<'arena>] {
    let refs: Vec<&Node<'_>> = nodes.into_iter().map(|n| &*arena.push(n)).collect();
    arena.push_slice(&refs)
}

/// The amount of space TeX inserts between atoms of the two flavours, in
/// 1/18 em units. Rows index this as `[left][right]`.
static SPACE_TABLE: [[i32; Flavour::COUNT]; Flavour::COUNT] = [
    // ord op bin rel open close punct inner
    [0, 3, 4, 5, 0, 0, 0, 3], // ord
    [3, 3, 0, 5, 0, 0, 0, 3], // op
    [4, 4, 0, 0, 4, 0, 0, 4], // bin
    [5, 5, 0, 0, 5, 0, 0, 5], // rel
    [0, 0, 0, 0, 0, 0, 0, 0], // open
    [0, 3, 4, 5, 0, 0, 0, 3], // close
    [3, 3, 0, 3, 3, 3, 3, 3], // punct
    [3, 3, 4, 5, 3, 0, 3, 3], // inner
];

/// True where the space between the two flavours is dropped in script
/// and scriptscript styles.
static IGNORE_SPACE_TABLE: [[bool; Flavour::COUNT]; Flavour::COUNT] = [
    // ord  op     bin    rel    open   close  punct  inner
    [false, false, true, true, false, false, false, true],  // ord
    [false, false, false, true, false, false, false, true], // op
    [true, true, false, false, true, false, false, true],   // bin
    [true, true, false, false, true, false, false, true],   // rel
    [false, false, false, false, false, false, false, false], // open
    [false, false, true, true, false, false, false, true],  // close
    [true, true, false, true, true, true, true, true],      // punct
    [true, false, true, true, true, false, true, true],     // inner
];

/// Assembles a math-mode row: demotes binary operators that lack an
/// operand on either side, inserts the automatic inter-atom spacing,
/// splices child rows of the same style, and unwraps singletons.
fn assemble_row<'arena>(
    arena: &'arena Arena,
    style: Style,
    mut nodes: Vec<Node<'arena>>,
) -> Node<'arena> {
    for i in 0..nodes.len() {
        match nodes[i].flavour {
            Flavour::Bin => {
                if i == 0
                    || matches!(
                        nodes[i - 1].flavour,
                        Flavour::Bin
                            | Flavour::Op
                            | Flavour::Rel
                            | Flavour::Open
                            | Flavour::Punct
                    )
                {
                    nodes[i].flavour = Flavour::Ord;
                }
            }
            Flavour::Rel | Flavour::Close | Flavour::Punct => {
                if i > 0 && nodes[i - 1].flavour == Flavour::Bin {
                    nodes[i - 1].flavour = Flavour::Ord;
                }
            }
            _ => {}
        }
    }
    if let Some(last) = nodes.last_mut() {
        if last.flavour == Flavour::Bin {
            last.flavour = Flavour::Ord;
        }
    }

    // Spacing goes immediately before each atom, after any user spaces.
    let mut spaced: Vec<Node<'arena>> = Vec::with_capacity(nodes.len() * 2);
    let mut previous_flavour: Option<Flavour> = None;
    for n in nodes {
        if !matches!(n.body, Body::Space { .. }) {
            if let Some(left) = previous_flavour {
                let right = n.flavour;
                let width =
                    if IGNORE_SPACE_TABLE[left.index()][right.index()] && style.is_compact() {
                        0
                    } else {
                        SPACE_TABLE[left.index()][right.index()]
                    };
                spaced.push(space_node(style, width, false));
            }
            previous_flavour = Some(n.flavour);
        }
        spaced.push(n);
    }

    // No row may contain a row of the same style as a child.
    let mut refs: Vec<&'arena Node<'arena>> = Vec::with_capacity(spaced.len());
    for n in spaced {
        if let Body::Row { children } = n.body {
            if n.style == style {
                refs.extend_from_slice(children);
                continue;
            }
        }
        refs.push(arena.push(n));
    }

    if refs.len() == 1 {
        return *refs[0];
    }

    node(
        style,
        Flavour::Ord,
        Limits::DisplayLimits,
        Body::Row {
            children: arena.push_slice(&refs),
        },
    )
}

impl MathNode {
    pub fn build_layout_tree<'arena>(
        &self,
        arena: &'arena Arena,
        font: TexMathFont,
        style: Style,
    ) -> Result<Node<'arena>, TexError> {
        match self {
            MathNode::Symbol(command) => build_math_symbol(command, arena, font, style),

            MathNode::List(children) => {
                let mut nodes = Vec::with_capacity(children.len());
                for child in children {
                    nodes.push(child.build_layout_tree(arena, font, style)?);
                }
                Ok(assemble_row(arena, style, nodes))
            }

            // TeX treats any group enclosed in braces as an ordinary
            // atom, which is why "123{,}456" looks different from
            // "123,456".
            MathNode::Group(child) => {
                let mut node = child.build_layout_tree(arena, font, style)?;
                node.flavour = Flavour::Ord;
                Ok(node)
            }

            MathNode::Scripts { base, upper, lower } => {
                let mut flavour = Flavour::Ord;
                let mut limits = Limits::DisplayLimits;
                let base = match base {
                    Some(base) => {
                        let built = base.build_layout_tree(arena, font, style)?;
                        flavour = built.flavour;
                        limits = built.limits;
                        Some(&*arena.push(built))
                    }
                    None => None,
                };

                let smaller_style = style.smaller_for_script();
                let upper = match upper {
                    Some(upper) => {
                        Some(&*arena.push(upper.build_layout_tree(arena, font, smaller_style)?))
                    }
                    None => None,
                };
                let lower = match lower {
                    Some(lower) => {
                        Some(&*arena.push(lower.build_layout_tree(arena, font, smaller_style)?))
                    }
                    None => None,
                };

                let is_sideset = flavour != Flavour::Op
                    || (limits != Limits::Limits
                        && (limits != Limits::DisplayLimits || style != Style::Display));

                Ok(node(
                    style,
                    flavour,
                    Limits::DisplayLimits,
                    Body::Scripts {
                        base,
                        upper,
                        lower,
                        placement: if is_sideset {
                            Placement::Sideset
                        } else {
                            Placement::Underover
                        },
                    },
                ))
            }

            MathNode::Command1Arg { command, child } => {
                build_command_1arg(command, child, arena, font, style)
            }

            MathNode::Command2Args {
                command,
                child1,
                child2,
                ..
            } => build_command_2args(command, child1, child2, arena, font, style),

            MathNode::Limits { command, child } => {
                let Some(child) = child else {
                    return Err(err(TexErrKind::MisplacedLimits(command.clone())));
                };
                let mut node = child.build_layout_tree(arena, font, style)?;
                if node.flavour != Flavour::Op {
                    return Err(err(TexErrKind::MisplacedLimits(command.clone())));
                }
                node.limits = match command.as_str() {
                    "\\limits" => Limits::Limits,
                    "\\nolimits" => Limits::NoLimits,
                    _ => Limits::DisplayLimits,
                };
                Ok(node)
            }

            MathNode::StyleChange { command, child } => match command.as_str() {
                "\\displaystyle" => child.build_layout_tree(arena, font, Style::Display),
                "\\textstyle" => child.build_layout_tree(arena, font, Style::Text),
                "\\scriptstyle" => child.build_layout_tree(arena, font, Style::Script),
                "\\scriptscriptstyle" => child.build_layout_tree(arena, font, Style::ScriptScript),
                other => {
                    let family = match other {
                        "\\rm" => MathFamily::Rm,
                        "\\bf" => MathFamily::Bf,
                        "\\it" => MathFamily::It,
                        "\\cal" => MathFamily::Cal,
                        "\\tt" => MathFamily::Tt,
                        "\\sf" => MathFamily::Sf,
                        _ => {
                            return Err(err(TexErrKind::UnrecognisedCommand(command.clone())));
                        }
                    };
                    child.build_layout_tree(arena, TexMathFont { family, ..font }, style)
                }
            },

            MathNode::EnterTextMode { command, child } => {
                let text_font = match command.as_str() {
                    "\\mbox" | "\\hbox" | "\\text" | "\\textrm" => {
                        TexTextFont::new(TextFamily::Rm, false, false)
                    }
                    "\\textbf" => TexTextFont::new(TextFamily::Rm, true, false),
                    "\\emph" | "\\textit" => TexTextFont::new(TextFamily::Rm, false, true),
                    "\\textsf" => TexTextFont::new(TextFamily::Sf, false, false),
                    "\\texttt" => TexTextFont::new(TextFamily::Tt, false, false),
                    _ => return Err(err(TexErrKind::UnrecognisedCommand(command.clone()))),
                };
                // \hbox and \mbox ignore the surrounding style.
                let text_style = if command == "\\hbox" || command == "\\mbox" {
                    Style::Text
                } else {
                    style
                };
                child.build_layout_tree(arena, text_font, text_style)
            }

            MathNode::Big { command, delimiter } => {
                let Some(&(size, flavour)) = BIG_COMMANDS.get(command.as_str()) else {
                    return Err(err(TexErrKind::UnrecognisedCommand(command.clone())));
                };
                let Some(&text) = DELIMITERS.get(delimiter.as_str()) else {
                    return Err(err(TexErrKind::IllegalDelimiter(command.clone())));
                };
                let new_style = if style == Style::Display || style == Style::Text {
                    style
                } else {
                    Style::Text
                };
                Ok(operator(
                    new_style,
                    flavour,
                    Limits::DisplayLimits,
                    text,
                    MathmlFont::Normal,
                    true,
                    Some(size),
                ))
            }

            MathNode::Delimited { left, right, child } => {
                let Some(&left) = DELIMITERS.get(left.as_str()) else {
                    return Err(err(TexErrKind::IllegalDelimiter("\\left".to_string())));
                };
                let Some(&right) = DELIMITERS.get(right.as_str()) else {
                    return Err(err(TexErrKind::IllegalDelimiter("\\right".to_string())));
                };
                let child = arena.push(child.build_layout_tree(arena, font, style)?);
                Ok(node(
                    style,
                    Flavour::Inner,
                    Limits::DisplayLimits,
                    Body::Fenced { left, right, child },
                ))
            }

            MathNode::Environment { name, rows } => {
                build_environment(name, rows, arena, font, style)
            }
        }
    }
}

fn build_math_symbol<'arena>(
    command: &str,
    arena: &'arena Arena,
    font: TexMathFont,
    style: Style,
) -> Result<Node<'arena>, TexError> {
    let mut chars = command.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // fancy_fonts_illegal marks characters which have no glyph in the
        // cal and bb fonts.
        let (good, fancy_fonts_illegal, default_family) = match c {
            'A'..='Z' => (true, false, MathFamily::It),
            'a'..='z' => (true, true, MathFamily::It),
            '0'..='9' => (true, true, MathFamily::Rm),
            _ => (false, false, MathFamily::It),
        };

        if good {
            let mut font = font;
            if font.family == MathFamily::Default {
                font.family = default_family;
            }
            if fancy_fonts_illegal && font.family == MathFamily::Cal {
                return Err(err(TexErrKind::UnavailableSymbolFontCombination(
                    command.to_string(),
                    "cal".to_string(),
                )));
            }
            if fancy_fonts_illegal && font.family == MathFamily::Bb {
                return Err(err(TexErrKind::UnavailableSymbolFontCombination(
                    command.to_string(),
                    "bb".to_string(),
                )));
            }
            return Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::SymbolPlain {
                    text: arena.alloc_str(command),
                    font: font.mathml_approximation(),
                },
            ));
        }
    }

    if let Some(&text) = LOWERCASE_GREEK.get(command) {
        let font = if font.is_boldsymbol {
            MathmlFont::BoldItalic
        } else {
            MathmlFont::Italic
        };
        return Ok(node(
            style,
            Flavour::Ord,
            Limits::DisplayLimits,
            Body::SymbolPlain { text, font },
        ));
    }

    if let Some(&text) = UPPERCASE_GREEK.get(command) {
        let mut font = font;
        let missing = match font.family {
            MathFamily::Cal => Some("cal"),
            MathFamily::Bb => Some("bb"),
            MathFamily::Frak => Some("frak"),
            _ => None,
        };
        if let Some(missing) = missing {
            return Err(err(TexErrKind::UnavailableSymbolFontCombination(
                command.to_string(),
                missing.to_string(),
            )));
        }
        if font.family == MathFamily::Default {
            font.family = MathFamily::Rm;
        }
        return Ok(node(
            style,
            Flavour::Ord,
            Limits::DisplayLimits,
            Body::SymbolPlain {
                text,
                font: font.mathml_approximation(),
            },
        ));
    }

    if let Some(&width) = SPACE_COMMANDS.get(command) {
        return Ok(space_node(style, width, true));
    }

    if let Some(&(text, flavour, limits)) = OPERATORS.get(command) {
        return Ok(operator(
            style,
            flavour,
            limits,
            text,
            symbol_font(font),
            false,
            None,
        ));
    }

    if let Some(&(is_italic_default, text, flavour)) = IDENTIFIERS.get(command) {
        let font = TexMathFont {
            family: if is_italic_default {
                MathFamily::It
            } else {
                MathFamily::Rm
            },
            ..font
        };
        return Ok(node(
            style,
            flavour,
            if flavour == Flavour::Op {
                Limits::NoLimits
            } else {
                Limits::DisplayLimits
            },
            Body::SymbolPlain {
                text,
                font: font.mathml_approximation(),
            },
        ));
    }

    match command {
        "\\And" | "\\iff" => {
            let text = if command == "\\And" { "&" } else { "\u{21D4}" };
            let children = push_all(
                arena,
                [
                    space_node(style, 5, true),
                    operator(
                        style,
                        Flavour::Ord,
                        Limits::DisplayLimits,
                        text,
                        symbol_font(font),
                        false,
                        None,
                    ),
                    space_node(style, 5, true),
                ],
            );
            Ok(node(
                style,
                Flavour::Rel,
                Limits::DisplayLimits,
                Body::Row { children },
            ))
        }

        "\\colon" => {
            let children = push_all(
                arena,
                [
                    space_node(style, 2, true),
                    operator(
                        style,
                        Flavour::Ord,
                        Limits::DisplayLimits,
                        ":",
                        symbol_font(font),
                        false,
                        None,
                    ),
                    space_node(style, 6, true),
                ],
            );
            Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::Row { children },
            ))
        }

        "\\bmod" | "\\mod" => {
            let (before, after, flavour) = if command == "\\bmod" {
                (1, 1, Flavour::Bin)
            } else {
                (18, 6, Flavour::Ord)
            };
            let children = push_all(
                arena,
                [
                    space_node(style, before, true),
                    operator(
                        style,
                        Flavour::Ord,
                        Limits::DisplayLimits,
                        "mod",
                        symbol_font(font),
                        false,
                        None,
                    ),
                    space_node(style, after, true),
                ],
            );
            Ok(node(
                style,
                flavour,
                Limits::DisplayLimits,
                Body::Row { children },
            ))
        }

        "\\varinjlim" | "\\varprojlim" | "\\varliminf" | "\\varlimsup" => {
            let base = arena.push(operator(
                style,
                Flavour::Op,
                Limits::Limits,
                "lim",
                symbol_font(font),
                false,
                None,
            ));
            // The script style keeps the renderer from wrapping the
            // accent in an <mstyle>.
            let accent_style = style.smaller_for_script();
            let (text, is_stretchy, is_upper) = match command {
                "\\varinjlim" => ("\u{2192}", false, false),
                "\\varprojlim" => ("\u{2190}", false, false),
                "\\varliminf" => ("\u{AF}", true, false),
                _ => ("\u{AF}", true, true),
            };
            let accent = arena.push(operator(
                accent_style,
                Flavour::Ord,
                Limits::DisplayLimits,
                text,
                symbol_font(font),
                is_stretchy,
                None,
            ));
            let (upper, lower) = if is_upper {
                (Some(&*accent), None)
            } else {
                (None, Some(&*accent))
            };
            Ok(node(
                style,
                Flavour::Op,
                Limits::DisplayLimits,
                Body::Scripts {
                    base: Some(base),
                    upper,
                    lower,
                    placement: Placement::Accent,
                },
            ))
        }

        _ => Err(err(TexErrKind::UnrecognisedCommand(command.to_string()))),
    }
}

fn build_command_1arg<'arena>(
    command: &str,
    child: &MathNode,
    arena: &'arena Arena,
    font: TexMathFont,
    style: Style,
) -> Result<Node<'arena>, TexError> {
    match command {
        "\\sqrt" => {
            let child = arena.push(child.build_layout_tree(arena, font, style)?);
            Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::Sqrt { child },
            ))
        }

        "\\overbrace" | "\\underbrace" => {
            let new_style = if style == Style::Display {
                Style::Display
            } else {
                Style::Text
            };
            let brace = arena.push(operator(
                Style::Script,
                Flavour::Ord,
                Limits::DisplayLimits,
                if command == "\\overbrace" {
                    "\u{FE37}"
                } else {
                    "\u{FE38}"
                },
                MathmlFont::Normal,
                true,
                None,
            ));
            let base = arena.push(child.build_layout_tree(arena, font, new_style)?);
            let (upper, lower) = if command == "\\overbrace" {
                (Some(&*brace), None)
            } else {
                (None, Some(&*brace))
            };
            Ok(node(
                new_style,
                Flavour::Op,
                Limits::Limits,
                Body::Scripts {
                    base: Some(base),
                    upper,
                    lower,
                    placement: Placement::Underover,
                },
            ))
        }

        "\\pmod" => {
            let op_font = symbol_font(font);
            let children = [
                space_node(style, 18, true),
                operator(
                    style,
                    Flavour::Open,
                    Limits::DisplayLimits,
                    "(",
                    op_font,
                    false,
                    None,
                ),
                operator(
                    style,
                    Flavour::Ord,
                    Limits::DisplayLimits,
                    "mod",
                    op_font,
                    false,
                    None,
                ),
                space_node(style, 6, true),
                child.build_layout_tree(arena, font, style)?,
                operator(
                    style,
                    Flavour::Close,
                    Limits::DisplayLimits,
                    ")",
                    op_font,
                    false,
                    None,
                ),
            ];
            Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::Row {
                    children: push_all(arena, children),
                },
            ))
        }

        // Writes the argument upright, e.g. as a run of
        // <mi mathvariant="normal"> elements that merge into one <mi>.
        "\\operatorname" | "\\operatornamewithlimits" => {
            let font = TexMathFont {
                family: MathFamily::Rm,
                ..font
            };
            let mut node = child.build_layout_tree(arena, font, style)?;
            node.flavour = Flavour::Op;
            node.limits = if command == "\\operatorname" {
                Limits::NoLimits
            } else {
                Limits::DisplayLimits
            };
            Ok(node)
        }

        "\\not" => {
            let mut child = child.build_layout_tree(arena, font, style)?;
            let Body::SymbolOperator { text, .. } = &mut child.body else {
                return Err(err(TexErrKind::InvalidNegation));
            };
            let negated = NEGATIONS
                .get(*text)
                .copied()
                .ok_or_else(|| err(TexErrKind::InvalidNegation))?;
            *text = negated;
            Ok(child)
        }

        "\\mathop" | "\\mathrel" | "\\mathbin" | "\\mathord" | "\\mathopen" | "\\mathclose"
        | "\\mathpunct" | "\\mathinner" => {
            let mut node = child.build_layout_tree(arena, font, style)?;
            node.flavour = match command {
                "\\mathop" => Flavour::Op,
                "\\mathrel" => Flavour::Rel,
                "\\mathbin" => Flavour::Bin,
                "\\mathord" => Flavour::Ord,
                "\\mathopen" => Flavour::Open,
                "\\mathclose" => Flavour::Close,
                "\\mathpunct" => Flavour::Punct,
                _ => Flavour::Inner,
            };
            if node.flavour == Flavour::Op {
                node.limits = Limits::DisplayLimits;
            }
            Ok(node)
        }

        "\\mathbf" | "\\mathbb" | "\\mathit" | "\\mathrm" | "\\mathsf" | "\\mathtt"
        | "\\mathcal" | "\\mathfrak" => {
            let family = match command {
                "\\mathbf" => MathFamily::Bf,
                "\\mathbb" => MathFamily::Bb,
                "\\mathit" => MathFamily::It,
                "\\mathrm" => MathFamily::Rm,
                "\\mathsf" => MathFamily::Sf,
                "\\mathtt" => MathFamily::Tt,
                "\\mathcal" => MathFamily::Cal,
                _ => MathFamily::Frak,
            };
            child.build_layout_tree(arena, TexMathFont { family, ..font }, style)
        }

        "\\boldsymbol" => child.build_layout_tree(
            arena,
            TexMathFont {
                is_boldsymbol: true,
                ..font
            },
            style,
        ),

        _ => {
            let Some(&(text, is_stretchy, is_under)) = ACCENTS.get(command) else {
                return Err(err(TexErrKind::UnrecognisedCommand(command.to_string())));
            };
            let base = arena.push(child.build_layout_tree(arena, font, style)?);
            // The script style keeps the renderer from wrapping the
            // accent in an <mstyle>; accents are not shrunk.
            let accent = arena.push(operator(
                style.smaller_for_script(),
                Flavour::Ord,
                Limits::DisplayLimits,
                text,
                symbol_font(font),
                is_stretchy,
                None,
            ));
            let (upper, lower) = if is_under {
                (None, Some(&*accent))
            } else {
                (Some(&*accent), None)
            };
            Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::Scripts {
                    base: Some(base),
                    upper,
                    lower,
                    placement: Placement::Accent,
                },
            ))
        }
    }
}

fn build_command_2args<'arena>(
    command: &str,
    child1: &MathNode,
    child2: &MathNode,
    arena: &'arena Arena,
    font: TexMathFont,
    style: Style,
) -> Result<Node<'arena>, TexError> {
    // (visible line, parentheses) for the fraction-like commands.
    let fraction = match command {
        "\\frac" | "\\over" => Some((true, false)),
        "\\atop" => Some((false, false)),
        "\\binom" | "\\choose" => Some((false, true)),
        _ => None,
    };

    if let Some((is_line_visible, has_parentheses)) = fraction {
        let smaller_style = style.smaller_for_fraction();
        let numerator = arena.push(child1.build_layout_tree(arena, font, smaller_style)?);
        let denominator = arena.push(child2.build_layout_tree(arena, font, smaller_style)?);
        let inside = node(
            style,
            Flavour::Inner,
            Limits::DisplayLimits,
            Body::Fraction {
                numerator,
                denominator,
                is_line_visible,
            },
        );
        if has_parentheses {
            return Ok(node(
                style,
                Flavour::Inner,
                Limits::DisplayLimits,
                Body::Fenced {
                    left: "(",
                    right: ")",
                    child: arena.push(inside),
                },
            ));
        }
        return Ok(inside);
    }

    match command {
        "\\rootReserved" => {
            let inside = arena.push(child2.build_layout_tree(arena, font, style)?);
            let outside =
                arena.push(child1.build_layout_tree(arena, font, Style::ScriptScript)?);
            Ok(node(
                style,
                Flavour::Ord,
                Limits::DisplayLimits,
                Body::Root { inside, outside },
            ))
        }

        "\\cfrac" => {
            let numerator = arena.push(child1.build_layout_tree(arena, font, Style::Text)?);
            let denominator = arena.push(child2.build_layout_tree(arena, font, Style::Text)?);
            Ok(node(
                Style::Display,
                Flavour::Inner,
                Limits::DisplayLimits,
                Body::Fraction {
                    numerator,
                    denominator,
                    is_line_visible: true,
                },
            ))
        }

        "\\overset" | "\\underset" => {
            let smaller_style = style.smaller_for_script();
            let script = arena.push(child1.build_layout_tree(arena, font, smaller_style)?);
            let base = arena.push(child2.build_layout_tree(arena, font, style)?);
            let (upper, lower) = if command == "\\overset" {
                (Some(&*script), None)
            } else {
                (None, Some(&*script))
            };
            Ok(node(
                style,
                base.flavour,
                Limits::NoLimits,
                Body::Scripts {
                    base: Some(base),
                    upper,
                    lower,
                    placement: Placement::Underover,
                },
            ))
        }

        _ => Err(err(TexErrKind::UnrecognisedCommand(command.to_string()))),
    }
}

fn build_environment<'arena>(
    name: &str,
    rows: &[Vec<MathNode>],
    arena: &'arena Arena,
    font: TexMathFont,
    style: Style,
) -> Result<Node<'arena>, TexError> {
    let (left, right) = match name {
        "matrix" | "aligned" | "smallmatrix" | "substack" => ("", ""),
        "pmatrix" => ("(", ")"),
        "bmatrix" => ("[", "]"),
        "Bmatrix" => ("{", "}"),
        "vmatrix" => ("|", "|"),
        "Vmatrix" => ("\u{2225}", "\u{2225}"),
        "cases" => ("{", ""),
        _ => {
            return Err(err(TexErrKind::UnrecognisedCommand(
                "\\begin{".to_string() + name + "}",
            )));
        }
    };

    // Only the boldsymbol flag survives into an environment; any math
    // font command outside it is forgotten.
    let font = TexMathFont {
        family: MathFamily::Default,
        is_boldsymbol: font.is_boldsymbol,
    };

    let table_style = match name {
        "smallmatrix" | "substack" => Style::Script,
        "aligned" => Style::Display,
        _ => Style::Text,
    };

    let mut row_slices: Vec<&'arena [&'arena Node<'arena>]> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut entries: Vec<&Node<'_>> = Vec::with_capacity(row.len());
        for entry in row {
            entries.push(arena.push(entry.build_layout_tree(arena, font, table_style)?));
        }
        row_slices.push(arena.push_slice(&entries));
    }

    let align = match name {
        "aligned" => TableAlign::RightLeft,
        "cases" => TableAlign::Left,
        _ => TableAlign::Centre,
    };

    let table = node(
        table_style,
        Flavour::Inner,
        Limits::DisplayLimits,
        Body::Table {
            rows: arena.push_rows(&row_slices),
            align,
        },
    );

    if left.is_empty() && right.is_empty() {
        return Ok(table);
    }

    let fenced_style = if style == Style::Display {
        Style::Display
    } else {
        Style::Text
    };
    Ok(node(
        fenced_style,
        Flavour::Inner,
        Limits::DisplayLimits,
        Body::Fenced {
            left,
            right,
            child: arena.push(table),
        },
    ))
}

/// Assembles a text-mode row. Child rows are always spliced; there is no
/// flavour or spacing pass in text mode.
fn assemble_text_row<'arena>(
    arena: &'arena Arena,
    style: Style,
    nodes: Vec<Node<'arena>>,
) -> Node<'arena> {
    let mut refs: Vec<&'arena Node<'arena>> = Vec::with_capacity(nodes.len());
    for n in nodes {
        if let Body::Row { children } = n.body {
            refs.extend_from_slice(children);
            continue;
        }
        refs.push(arena.push(n));
    }
    node(
        style,
        Flavour::Ord,
        Limits::DisplayLimits,
        Body::Row {
            children: arena.push_slice(&refs),
        },
    )
}

impl TextNode {
    pub fn build_layout_tree<'arena>(
        &self,
        arena: &'arena Arena,
        font: TexTextFont,
        style: Style,
    ) -> Result<Node<'arena>, TexError> {
        match self {
            TextNode::Symbol(command) => {
                let text = match TEXT_SUBSTITUTIONS.get(command.as_str()) {
                    Some(&text) => text,
                    None => arena.alloc_str(command),
                };
                Ok(node(
                    style,
                    Flavour::Ord,
                    Limits::DisplayLimits,
                    Body::SymbolText {
                        text,
                        font: font.mathml_approximation(),
                    },
                ))
            }

            TextNode::List(children) => {
                let mut nodes = Vec::with_capacity(children.len());
                for child in children {
                    nodes.push(child.build_layout_tree(arena, font, style)?);
                }
                Ok(assemble_text_row(arena, style, nodes))
            }

            TextNode::Group(child) => child.build_layout_tree(arena, font, style),

            TextNode::Command1Arg { command, child } => {
                let mut font = font;
                match command.as_str() {
                    "\\textrm" => font.family = TextFamily::Rm,
                    "\\texttt" => font.family = TextFamily::Tt,
                    "\\textsf" => font.family = TextFamily::Sf,
                    "\\textit" => font.is_italic = true,
                    "\\emph" => font.is_italic = !font.is_italic,
                    "\\textbf" => font.is_bold = true,
                    "\\text" | "\\hbox" | "\\mbox" => {}
                    _ => return Err(err(TexErrKind::UnrecognisedCommand(command.clone()))),
                }
                child.build_layout_tree(arena, font, style)
            }

            TextNode::StyleChange { command, child } => {
                let font = match command.as_str() {
                    "\\rm" => TexTextFont::new(TextFamily::Rm, false, false),
                    "\\it" => TexTextFont::new(TextFamily::Rm, false, true),
                    "\\bf" => TexTextFont::new(TextFamily::Rm, true, false),
                    "\\sf" => TexTextFont::new(TextFamily::Sf, false, false),
                    "\\tt" => TexTextFont::new(TextFamily::Tt, false, false),
                    _ => return Err(err(TexErrKind::UnrecognisedCommand(command.clone()))),
                };
                child.build_layout_tree(arena, font, style)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex_parser::lexer::tokenise;
    use crate::latex_parser::parse::Parser;
    use mathml_renderer::layout::build_mathml;
    use mathml_renderer::options::{
        EncodingOptions, MathmlEncoding, MathmlOptions, SpacingControl,
    };

    fn raw_encoding() -> EncodingOptions {
        EncodingOptions {
            mathml_encoding: MathmlEncoding::Raw,
            other_encoding_raw: true,
            allow_plane_1: true,
        }
    }

    fn build(input: &str, style: Style) -> Result<String, TexError> {
        let tree = Parser::parse(tokenise(input)?)?;
        let arena = Arena::new();
        let root = tree.build_layout_tree(&arena, TexMathFont::default(), style)?;
        let mut xml = build_mathml(&root, &MathmlOptions::default(), style)
            .map_err(|_| err(TexErrKind::TooManyMathmlNodes))?;
        xml.cleanup_font_attributes(false);
        Ok(xml.print(&raw_encoding(), false))
    }

    fn render(input: &str) -> String {
        build(input, Style::Text).unwrap()
    }

    fn render_display(input: &str) -> String {
        build(input, Style::Display).unwrap()
    }

    fn error_of(input: &str) -> TexErrKind {
        build(input, Style::Text).unwrap_err().1
    }

    #[test]
    fn binary_operator_spacing() {
        assert_eq!(
            render("x+y"),
            "<mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow>"
        );
    }

    #[test]
    fn leading_minus_is_demoted_to_ord() {
        // A binary operator with no left operand becomes ordinary, so it
        // gets no spacing around it.
        assert_eq!(
            render("-x"),
            "<mrow><mo lspace=\"0\" rspace=\"0\">-</mo><mi>x</mi></mrow>"
        );
    }

    #[test]
    fn bin_before_rel_is_demoted() {
        let strict = MathmlOptions {
            spacing_control: SpacingControl::Strict,
            ..MathmlOptions::default()
        };
        let tree = Parser::parse(tokenise("a+=b").unwrap()).unwrap();
        let arena = Arena::new();
        let root = tree
            .build_layout_tree(&arena, TexMathFont::default(), Style::Text)
            .unwrap();
        let mut xml = build_mathml(&root, &strict, Style::Text).unwrap();
        xml.cleanup_font_attributes(false);
        // "+" loses its binary status before "=", so it is spaced like an
        // ordinary atom (0 on the left of it, 5/18 em before "=").
        assert_eq!(
            xml.print(&raw_encoding(), false),
            "<mrow><mi>a</mi><mo lspace=\"0\" rspace=\"0.278em\">+</mo>\
             <mo lspace=\"0\" rspace=\"0.278em\">=</mo><mi>b</mi></mrow>"
        );
    }

    #[test]
    fn script_style_suppresses_spacing() {
        // In script style the ord-bin spacing is dropped entirely.
        assert_eq!(
            render("x^{a+b}"),
            "<msup><mi>x</mi><mrow><mi>a</mi>\
             <mo lspace=\"0\" rspace=\"0\">+</mo><mi>b</mi></mrow></msup>"
        );
    }

    #[test]
    fn sum_limits_depend_on_style() {
        assert_eq!(
            render_display("\\sum_k"),
            "<munder><mo stretchy=\"false\">\u{2211}</mo><mi>k</mi></munder>"
        );
        assert_eq!(
            render("\\sum_k"),
            "<msub><mo stretchy=\"false\">\u{2211}</mo><mi>k</mi></msub>"
        );
    }

    #[test]
    fn integral_scripts_stay_sideset() {
        assert_eq!(
            render_display("\\int_0^1"),
            "<msubsup><mo stretchy=\"false\">\u{222B}</mo><mn>0</mn><mn>1</mn></msubsup>"
        );
    }

    #[test]
    fn limits_modifier_overrides_convention() {
        assert_eq!(
            render("\\sum\\limits_k"),
            "<munder><mo movablelimits=\"false\" stretchy=\"false\">\u{2211}</mo>\
             <mi>k</mi></munder>"
        );
        assert_eq!(error_of("x\\limits^2"), TexErrKind::MisplacedLimits("\\limits".to_string()));
    }

    #[test]
    fn fraction_and_binom() {
        assert_eq!(render("\\frac12"), "<mfrac><mn>1</mn><mn>2</mn></mfrac>");
        assert_eq!(
            render("\\binom nk"),
            "<mrow><mo stretchy=\"true\">(</mo>\
             <mrow><mfrac linethickness=\"0\"><mi>n</mi><mi>k</mi></mfrac></mrow>\
             <mo stretchy=\"true\">)</mo></mrow>"
        );
    }

    #[test]
    fn root_with_index() {
        // The index of the root is typeset at scriptscript size.
        let tokens = vec![
            "\\rootReserved".to_string(),
            "{".to_string(),
            "3".to_string(),
            "}".to_string(),
            "{".to_string(),
            "x".to_string(),
            "}".to_string(),
        ];
        let tree = Parser::parse(tokens).unwrap();
        let arena = Arena::new();
        let root = tree
            .build_layout_tree(&arena, TexMathFont::default(), Style::Text)
            .unwrap();
        let mut xml = build_mathml(&root, &MathmlOptions::default(), Style::Text).unwrap();
        xml.cleanup_font_attributes(false);
        assert_eq!(
            xml.print(&raw_encoding(), false),
            "<mroot><mi>x</mi><mn>3</mn></mroot>"
        );
    }

    #[test]
    fn negation_of_known_operator() {
        assert_eq!(render("\\not="), "<mo>\u{2260}</mo>");
        assert_eq!(render("\\not\\in"), "<mo>\u{2209}</mo>");
    }

    #[test]
    fn negation_of_everything_else_fails() {
        assert_eq!(error_of("\\not\\alpha"), TexErrKind::InvalidNegation);
        assert_eq!(error_of("\\not x"), TexErrKind::InvalidNegation);
    }

    #[test]
    fn blackboard_bold() {
        assert_eq!(render("\\mathbb R"), "<mi>\u{211D}</mi>");
        assert_eq!(
            error_of("\\mathbb a"),
            TexErrKind::UnavailableSymbolFontCombination("a".to_string(), "bb".to_string())
        );
        assert_eq!(
            error_of("\\mathcal 1"),
            TexErrKind::UnavailableSymbolFontCombination("1".to_string(), "cal".to_string())
        );
    }

    #[test]
    fn greek_ignores_family_commands() {
        assert_eq!(render("\\mathbf\\alpha"), "<mi>\u{3B1}</mi>");
        assert_eq!(
            error_of("\\mathbb\\Gamma"),
            TexErrKind::UnavailableSymbolFontCombination("\\Gamma".to_string(), "bb".to_string())
        );
    }

    #[test]
    fn boldsymbol_affects_greek_and_operators() {
        assert_eq!(
            render("\\boldsymbol\\alpha"),
            "<mi mathvariant=\"bold-italic\">\u{3B1}</mi>"
        );
        assert_eq!(
            render("\\boldsymbol+"),
            "<mo mathvariant=\"bold\">+</mo>"
        );
    }

    #[test]
    fn accents() {
        assert_eq!(
            render("\\hat x"),
            "<mover accent=\"true\"><mi>x</mi><mo>\u{302}</mo></mover>"
        );
        assert_eq!(
            render("\\underline x"),
            "<munder accentunder=\"true\"><mi>x</mi><mo stretchy=\"true\">\u{AF}</mo></munder>"
        );
    }

    #[test]
    fn upright_function_names_merge() {
        // The thin space after an operator atom has no <mo> to hang off,
        // so it becomes an explicit <mspace>.
        assert_eq!(
            render("\\sin x"),
            "<mrow><mi>sin</mi><mspace width=\"0.167em\"/><mi>x</mi></mrow>"
        );
        assert_eq!(
            render("\\operatorname{foo}x"),
            "<mrow><mi>foo</mi><mspace width=\"0.167em\"/><mi>x</mi></mrow>"
        );
    }

    #[test]
    fn group_makes_atom_ordinary() {
        // "123{,}456" keeps the comma from acting as punctuation.
        assert_eq!(render("123{,}456"), "<mrow><mn>123</mn><mo lspace=\"0\" rspace=\"0\">,</mo><mn>456</mn></mrow>");
    }

    #[test]
    fn big_delimiters() {
        assert_eq!(
            render("\\bigl("),
            "<mo maxsize=\"1.2em\" minsize=\"1.2em\" stretchy=\"true\">(</mo>"
        );
        assert_eq!(
            render("\\Bigg|"),
            "<mo maxsize=\"3em\" minsize=\"3em\" stretchy=\"true\">|</mo>"
        );
    }

    #[test]
    fn left_right_delimiters() {
        assert_eq!(
            render("\\left(x\\right."),
            "<mrow><mo stretchy=\"true\">(</mo><mrow><mi>x</mi></mrow></mrow>"
        );
    }

    #[test]
    fn environments() {
        assert_eq!(
            render("\\begin{pmatrix}a&b\\\\c&d\\end{pmatrix}"),
            "<mrow><mo stretchy=\"true\">(</mo>\
             <mrow><mtable>\
             <mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
             <mtr><mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr>\
             </mtable></mrow>\
             <mo stretchy=\"true\">)</mo></mrow>"
        );
        assert_eq!(
            render("\\begin{cases}x\\\\y\\end{cases}"),
            "<mrow><mo stretchy=\"true\">{</mo>\
             <mrow><mtable columnalign=\"left\">\
             <mtr><mtd><mi>x</mi></mtd></mtr>\
             <mtr><mtd><mi>y</mi></mtd></mtr>\
             </mtable></mrow></mrow>"
        );
    }

    #[test]
    fn text_mode() {
        assert_eq!(
            render("\\text{if }x"),
            "<mrow><mtext>if\u{A0}</mtext><mi>x</mi></mrow>"
        );
        assert_eq!(
            render("\\textbf{ab}"),
            "<mtext mathvariant=\"bold\">ab</mtext>"
        );
    }

    #[test]
    fn text_mode_escapes() {
        assert_eq!(render("\\text{a\\%b}"), "<mtext>a%b</mtext>");
        assert_eq!(
            render("\\text{\\emph{\\emph{x}}}"),
            "<mtext>x</mtext>"
        );
    }

    #[test]
    fn style_changes() {
        assert_eq!(
            render("\\scriptstyle x"),
            "<mstyle scriptlevel=\"1\"><mi>x</mi></mstyle>"
        );
        assert_eq!(render("\\rm x"), "<mi mathvariant=\"normal\">x</mi>");
    }

    #[test]
    fn overset_keeps_base_flavour() {
        let tree = Parser::parse(tokenise("\\overset a=").unwrap()).unwrap();
        let arena = Arena::new();
        let root = tree
            .build_layout_tree(&arena, TexMathFont::default(), Style::Text)
            .unwrap();
        assert_eq!(root.flavour, Flavour::Rel);
    }

    #[test]
    fn bmod_spacing() {
        // The user-requested 1/18 em merges with the automatic binary
        // spacing into a single 5/18 em run on each side of "mod".
        assert_eq!(
            render("a\\bmod b"),
            "<mrow><mi>a</mi><mo lspace=\"0.278em\" rspace=\"0.278em\">mod</mo><mi>b</mi></mrow>"
        );
    }
}
