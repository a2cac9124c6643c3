//! Static tables describing individual TeX commands: symbol translations,
//! atom flavours, delimiters, package requirements, and the characters
//! that can survive a round trip back into a TeX document.

use mathml_renderer::attribute::{Flavour, Limits};

/// Commands usable after `\left`, `\right` and the `\big` family, mapped
/// to the character that stretches. The null delimiter `.` maps to the
/// empty string and produces no output.
pub static DELIMITERS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "." => "",
    "[" => "[",
    "]" => "]",
    "\\lbrack" => "[",
    "\\rbrack" => "]",
    "(" => "(",
    ")" => ")",
    "<" => "\u{2329}",
    ">" => "\u{232A}",
    "\\langle" => "\u{2329}",
    "\\rangle" => "\u{232A}",
    "/" => "/",
    "\\backslash" => "\u{2216}",
    "\\{" => "{",
    "\\}" => "}",
    "\\lbrace" => "{",
    "\\rbrace" => "}",
    "|" => "|",
    "\\vert" => "|",
    "\\lvert" => "|",
    "\\rvert" => "|",
    "\\Vert" => "\u{2225}",
    "\\lVert" => "\u{2225}",
    "\\rVert" => "\u{2225}",
    "\\uparrow" => "\u{2191}",
    "\\downarrow" => "\u{2193}",
    "\\updownarrow" => "\u{2195}",
    "\\Uparrow" => "\u{21D1}",
    "\\Downarrow" => "\u{21D3}",
    "\\Updownarrow" => "\u{21D5}",
    "\\lfloor" => "\u{230A}",
    "\\rfloor" => "\u{230B}",
    "\\lceil" => "\u{2308}",
    "\\rceil" => "\u{2309}",
};

/// Math-mode commands rendered as `<mo>` operators, with their atom
/// flavour and limits convention.
pub static OPERATORS: phf::Map<&'static str, (&'static str, Flavour, Limits)> = phf::phf_map! {
    "(" => ("(", Flavour::Open, Limits::DisplayLimits),
    ")" => (")", Flavour::Close, Limits::DisplayLimits),
    "[" => ("[", Flavour::Open, Limits::DisplayLimits),
    "]" => ("]", Flavour::Close, Limits::DisplayLimits),
    "<" => ("<", Flavour::Rel, Limits::DisplayLimits),
    ">" => (">", Flavour::Rel, Limits::DisplayLimits),
    "+" => ("+", Flavour::Bin, Limits::DisplayLimits),
    "-" => ("-", Flavour::Bin, Limits::DisplayLimits),
    "=" => ("=", Flavour::Rel, Limits::DisplayLimits),
    "|" => ("|", Flavour::Ord, Limits::DisplayLimits),
    ";" => (";", Flavour::Punct, Limits::DisplayLimits),
    ":" => (":", Flavour::Rel, Limits::DisplayLimits),
    "," => (",", Flavour::Punct, Limits::DisplayLimits),
    "." => (".", Flavour::Ord, Limits::DisplayLimits),
    "/" => ("/", Flavour::Ord, Limits::DisplayLimits),
    "?" => ("?", Flavour::Close, Limits::DisplayLimits),
    "!" => ("!", Flavour::Close, Limits::DisplayLimits),
    "@" => ("@", Flavour::Ord, Limits::DisplayLimits),
    "*" => ("*", Flavour::Bin, Limits::DisplayLimits),
    "\\_" => ("_", Flavour::Ord, Limits::DisplayLimits),
    "\\&" => ("&", Flavour::Ord, Limits::DisplayLimits),
    "\\$" => ("$", Flavour::Ord, Limits::DisplayLimits),
    "\\#" => ("#", Flavour::Ord, Limits::DisplayLimits),
    "\\%" => ("%", Flavour::Ord, Limits::DisplayLimits),
    "\\{" => ("{", Flavour::Open, Limits::DisplayLimits),
    "\\}" => ("}", Flavour::Close, Limits::DisplayLimits),
    "\\lbrace" => ("{", Flavour::Open, Limits::DisplayLimits),
    "\\rbrace" => ("}", Flavour::Close, Limits::DisplayLimits),
    "\\vert" => ("|", Flavour::Ord, Limits::DisplayLimits),
    "\\lvert" => ("|", Flavour::Open, Limits::DisplayLimits),
    "\\rvert" => ("|", Flavour::Close, Limits::DisplayLimits),
    "\\Vert" => ("\u{2225}", Flavour::Ord, Limits::DisplayLimits),
    "\\lVert" => ("\u{2225}", Flavour::Open, Limits::DisplayLimits),
    "\\rVert" => ("\u{2225}", Flavour::Close, Limits::DisplayLimits),
    "\\lfloor" => ("\u{230A}", Flavour::Open, Limits::DisplayLimits),
    "\\rfloor" => ("\u{230B}", Flavour::Close, Limits::DisplayLimits),
    "\\lceil" => ("\u{2308}", Flavour::Open, Limits::DisplayLimits),
    "\\rceil" => ("\u{2309}", Flavour::Close, Limits::DisplayLimits),
    "\\langle" => ("\u{2329}", Flavour::Open, Limits::DisplayLimits),
    "\\rangle" => ("\u{232A}", Flavour::Close, Limits::DisplayLimits),
    "\\lbrack" => ("[", Flavour::Open, Limits::DisplayLimits),
    "\\rbrack" => ("]", Flavour::Close, Limits::DisplayLimits),
    "\\forall" => ("\u{2200}", Flavour::Ord, Limits::DisplayLimits),
    "\\exists" => ("\u{2203}", Flavour::Ord, Limits::DisplayLimits),
    "\\leftarrow" => ("\u{2190}", Flavour::Rel, Limits::DisplayLimits),
    "\\rightarrow" => ("\u{2192}", Flavour::Rel, Limits::DisplayLimits),
    "\\longleftarrow" => ("\u{2190}", Flavour::Rel, Limits::DisplayLimits),
    "\\longrightarrow" => ("\u{2192}", Flavour::Rel, Limits::DisplayLimits),
    "\\Leftarrow" => ("\u{21D0}", Flavour::Rel, Limits::DisplayLimits),
    "\\Rightarrow" => ("\u{21D2}", Flavour::Rel, Limits::DisplayLimits),
    "\\Longleftarrow" => ("\u{21D0}", Flavour::Rel, Limits::DisplayLimits),
    "\\Longrightarrow" => ("\u{21D2}", Flavour::Rel, Limits::DisplayLimits),
    "\\mapsto" => ("\u{21A6}", Flavour::Rel, Limits::DisplayLimits),
    "\\longmapsto" => ("\u{21A6}", Flavour::Rel, Limits::DisplayLimits),
    "\\leftrightarrow" => ("\u{2194}", Flavour::Rel, Limits::DisplayLimits),
    "\\Leftrightarrow" => ("\u{21D4}", Flavour::Rel, Limits::DisplayLimits),
    "\\longleftrightarrow" => ("\u{2194}", Flavour::Rel, Limits::DisplayLimits),
    "\\Longleftrightarrow" => ("\u{21D4}", Flavour::Rel, Limits::DisplayLimits),
    "\\uparrow" => ("\u{2191}", Flavour::Rel, Limits::DisplayLimits),
    "\\Uparrow" => ("\u{21D1}", Flavour::Rel, Limits::DisplayLimits),
    "\\downarrow" => ("\u{2193}", Flavour::Rel, Limits::DisplayLimits),
    "\\Downarrow" => ("\u{21D3}", Flavour::Rel, Limits::DisplayLimits),
    "\\updownarrow" => ("\u{2195}", Flavour::Rel, Limits::DisplayLimits),
    "\\Updownarrow" => ("\u{21D5}", Flavour::Rel, Limits::DisplayLimits),
    "\\searrow" => ("\u{2198}", Flavour::Rel, Limits::DisplayLimits),
    "\\nearrow" => ("\u{2197}", Flavour::Rel, Limits::DisplayLimits),
    "\\swarrow" => ("\u{2199}", Flavour::Rel, Limits::DisplayLimits),
    "\\nwarrow" => ("\u{2196}", Flavour::Rel, Limits::DisplayLimits),
    "\\hookrightarrow" => ("\u{21AA}", Flavour::Rel, Limits::DisplayLimits),
    "\\hookleftarrow" => ("\u{21A9}", Flavour::Rel, Limits::DisplayLimits),
    "\\upharpoonright" => ("\u{21BE}", Flavour::Rel, Limits::DisplayLimits),
    "\\upharpoonleft" => ("\u{21BF}", Flavour::Rel, Limits::DisplayLimits),
    "\\downharpoonright" => ("\u{21C2}", Flavour::Rel, Limits::DisplayLimits),
    "\\downharpoonleft" => ("\u{21C3}", Flavour::Rel, Limits::DisplayLimits),
    "\\rightharpoonup" => ("\u{21C0}", Flavour::Rel, Limits::DisplayLimits),
    "\\rightharpoondown" => ("\u{21C1}", Flavour::Rel, Limits::DisplayLimits),
    "\\leftharpoonup" => ("\u{21BC}", Flavour::Rel, Limits::DisplayLimits),
    "\\leftharpoondown" => ("\u{21BD}", Flavour::Rel, Limits::DisplayLimits),
    "\\nleftarrow" => ("\u{219A}", Flavour::Rel, Limits::DisplayLimits),
    "\\nrightarrow" => ("\u{219B}", Flavour::Rel, Limits::DisplayLimits),
    "\\supset" => ("\u{2283}", Flavour::Rel, Limits::DisplayLimits),
    "\\subset" => ("\u{2282}", Flavour::Rel, Limits::DisplayLimits),
    "\\supseteq" => ("\u{2287}", Flavour::Rel, Limits::DisplayLimits),
    "\\subseteq" => ("\u{2286}", Flavour::Rel, Limits::DisplayLimits),
    "\\sqsupset" => ("\u{2290}", Flavour::Rel, Limits::DisplayLimits),
    "\\sqsubset" => ("\u{228F}", Flavour::Rel, Limits::DisplayLimits),
    "\\sqsupseteq" => ("\u{2292}", Flavour::Rel, Limits::DisplayLimits),
    "\\sqsubseteq" => ("\u{2291}", Flavour::Rel, Limits::DisplayLimits),
    "\\supsetneq" => ("\u{228B}", Flavour::Rel, Limits::DisplayLimits),
    "\\subsetneq" => ("\u{228A}", Flavour::Rel, Limits::DisplayLimits),
    "\\in" => ("\u{2208}", Flavour::Rel, Limits::DisplayLimits),
    "\\ni" => ("\u{220B}", Flavour::Rel, Limits::DisplayLimits),
    "\\notin" => ("\u{2209}", Flavour::Rel, Limits::DisplayLimits),
    "\\mid" => ("|", Flavour::Rel, Limits::DisplayLimits),
    "\\sim" => ("\u{223C}", Flavour::Rel, Limits::DisplayLimits),
    "\\simeq" => ("\u{2243}", Flavour::Rel, Limits::DisplayLimits),
    "\\approx" => ("\u{2248}", Flavour::Rel, Limits::DisplayLimits),
    "\\propto" => ("\u{221D}", Flavour::Rel, Limits::DisplayLimits),
    "\\equiv" => ("\u{2261}", Flavour::Rel, Limits::DisplayLimits),
    "\\cong" => ("\u{2245}", Flavour::Rel, Limits::DisplayLimits),
    "\\neq" => ("\u{2260}", Flavour::Rel, Limits::DisplayLimits),
    "\\ll" => ("\u{226A}", Flavour::Rel, Limits::DisplayLimits),
    "\\gg" => ("\u{226B}", Flavour::Rel, Limits::DisplayLimits),
    "\\geq" => ("\u{2265}", Flavour::Rel, Limits::DisplayLimits),
    "\\leq" => ("\u{2264}", Flavour::Rel, Limits::DisplayLimits),
    "\\triangleleft" => ("\u{22B2}", Flavour::Bin, Limits::DisplayLimits),
    "\\triangleright" => ("\u{22B3}", Flavour::Bin, Limits::DisplayLimits),
    "\\trianglelefteq" => ("\u{22B4}", Flavour::Rel, Limits::DisplayLimits),
    "\\trianglerighteq" => ("\u{22B5}", Flavour::Rel, Limits::DisplayLimits),
    "\\models" => ("\u{22A7}", Flavour::Rel, Limits::DisplayLimits),
    "\\vdash" => ("\u{22A2}", Flavour::Rel, Limits::DisplayLimits),
    "\\Vdash" => ("\u{22A9}", Flavour::Rel, Limits::DisplayLimits),
    "\\vDash" => ("\u{22A8}", Flavour::Rel, Limits::DisplayLimits),
    "\\lesssim" => ("\u{2272}", Flavour::Rel, Limits::DisplayLimits),
    "\\nless" => ("\u{226E}", Flavour::Rel, Limits::DisplayLimits),
    "\\ngeq" => ("\u{2271}", Flavour::Rel, Limits::DisplayLimits),
    "\\nleq" => ("\u{2270}", Flavour::Rel, Limits::DisplayLimits),
    "\\div" => ("\u{F7}", Flavour::Bin, Limits::DisplayLimits),
    "\\wedge" => ("\u{2227}", Flavour::Bin, Limits::DisplayLimits),
    "\\vee" => ("\u{2228}", Flavour::Bin, Limits::DisplayLimits),
    "\\oplus" => ("\u{2295}", Flavour::Bin, Limits::DisplayLimits),
    "\\otimes" => ("\u{2297}", Flavour::Bin, Limits::DisplayLimits),
    "\\times" => ("\u{D7}", Flavour::Bin, Limits::DisplayLimits),
    "\\cap" => ("\u{2229}", Flavour::Bin, Limits::DisplayLimits),
    "\\cup" => ("\u{222A}", Flavour::Bin, Limits::DisplayLimits),
    "\\sqcap" => ("\u{2293}", Flavour::Bin, Limits::DisplayLimits),
    "\\sqcup" => ("\u{2294}", Flavour::Bin, Limits::DisplayLimits),
    "\\smile" => ("\u{2323}", Flavour::Rel, Limits::DisplayLimits),
    "\\frown" => ("\u{2322}", Flavour::Rel, Limits::DisplayLimits),
    "\\smallsmile" => ("\u{2323}", Flavour::Rel, Limits::DisplayLimits),
    "\\smallfrown" => ("\u{2322}", Flavour::Rel, Limits::DisplayLimits),
    "\\setminus" => ("\u{2216}", Flavour::Bin, Limits::DisplayLimits),
    "\\smallsetminus" => ("\u{2216}", Flavour::Bin, Limits::DisplayLimits),
    "\\star" => ("\u{22C6}", Flavour::Bin, Limits::DisplayLimits),
    "\\triangle" => ("\u{25B3}", Flavour::Ord, Limits::DisplayLimits),
    "\\wr" => ("\u{2240}", Flavour::Bin, Limits::DisplayLimits),
    "\\circ" => ("\u{2218}", Flavour::Bin, Limits::DisplayLimits),
    "\\lnot" => ("\u{AC}", Flavour::Ord, Limits::DisplayLimits),
    "\\nabla" => ("\u{2207}", Flavour::Ord, Limits::DisplayLimits),
    "\\prime" => ("\u{2032}", Flavour::Ord, Limits::DisplayLimits),
    "\\backslash" => ("\u{2216}", Flavour::Ord, Limits::DisplayLimits),
    "\\pm" => ("\u{B1}", Flavour::Bin, Limits::DisplayLimits),
    "\\mp" => ("\u{2213}", Flavour::Bin, Limits::DisplayLimits),
    "\\angle" => ("\u{2220}", Flavour::Ord, Limits::DisplayLimits),
    "\\Diamond" => ("\u{22C4}", Flavour::Bin, Limits::DisplayLimits),
    "\\nmid" => ("\u{2224}", Flavour::Rel, Limits::DisplayLimits),
    "\\square" => ("\u{25A1}", Flavour::Ord, Limits::DisplayLimits),
    "\\Box" => ("\u{25A1}", Flavour::Ord, Limits::DisplayLimits),
    "\\checkmark" => ("\u{2713}", Flavour::Ord, Limits::DisplayLimits),
    "\\complement" => ("\u{2201}", Flavour::Ord, Limits::DisplayLimits),
    "\\flat" => ("\u{266D}", Flavour::Ord, Limits::DisplayLimits),
    "\\sharp" => ("\u{266F}", Flavour::Ord, Limits::DisplayLimits),
    "\\natural" => ("\u{266E}", Flavour::Ord, Limits::DisplayLimits),
    "\\bullet" => ("\u{2022}", Flavour::Bin, Limits::DisplayLimits),
    "\\dagger" => ("\u{2020}", Flavour::Bin, Limits::DisplayLimits),
    "\\ddagger" => ("\u{2021}", Flavour::Bin, Limits::DisplayLimits),
    "\\clubsuit" => ("\u{2663}", Flavour::Ord, Limits::DisplayLimits),
    "\\spadesuit" => ("\u{2660}", Flavour::Ord, Limits::DisplayLimits),
    "\\heartsuit" => ("\u{2665}", Flavour::Ord, Limits::DisplayLimits),
    "\\diamondsuit" => ("\u{2666}", Flavour::Ord, Limits::DisplayLimits),
    "\\top" => ("\u{22A4}", Flavour::Ord, Limits::DisplayLimits),
    "\\bot" => ("\u{22A5}", Flavour::Ord, Limits::DisplayLimits),
    "\\perp" => ("\u{22A5}", Flavour::Rel, Limits::DisplayLimits),
    "\\cdot" => ("\u{22C5}", Flavour::Bin, Limits::DisplayLimits),
    "\\vdots" => ("\u{22EE}", Flavour::Ord, Limits::DisplayLimits),
    "\\ddots" => ("\u{22F1}", Flavour::Inner, Limits::DisplayLimits),
    "\\cdots" => ("\u{22EF}", Flavour::Inner, Limits::DisplayLimits),
    "\\ldots" => ("\u{2026}", Flavour::Inner, Limits::DisplayLimits),
    "\\dotsb" => ("\u{22EF}", Flavour::Inner, Limits::DisplayLimits),
    "\\dots" => ("\u{2026}", Flavour::Inner, Limits::DisplayLimits),
    "\\sum" => ("\u{2211}", Flavour::Op, Limits::DisplayLimits),
    "\\prod" => ("\u{220F}", Flavour::Op, Limits::DisplayLimits),
    "\\int" => ("\u{222B}", Flavour::Op, Limits::NoLimits),
    "\\iint" => ("\u{222C}", Flavour::Op, Limits::NoLimits),
    "\\iiint" => ("\u{222D}", Flavour::Op, Limits::NoLimits),
    "\\iiiint" => ("\u{2A0C}", Flavour::Op, Limits::NoLimits),
    "\\oint" => ("\u{222E}", Flavour::Op, Limits::NoLimits),
    "\\bigcap" => ("\u{22C2}", Flavour::Op, Limits::DisplayLimits),
    "\\bigodot" => ("\u{2A00}", Flavour::Op, Limits::DisplayLimits),
    "\\bigcup" => ("\u{22C3}", Flavour::Op, Limits::DisplayLimits),
    "\\bigotimes" => ("\u{2A02}", Flavour::Op, Limits::DisplayLimits),
    "\\coprod" => ("\u{2210}", Flavour::Op, Limits::DisplayLimits),
    "\\bigsqcup" => ("\u{2A06}", Flavour::Op, Limits::DisplayLimits),
    "\\bigoplus" => ("\u{2A01}", Flavour::Op, Limits::DisplayLimits),
    "\\bigvee" => ("\u{22C1}", Flavour::Op, Limits::DisplayLimits),
    "\\biguplus" => ("\u{2A04}", Flavour::Op, Limits::DisplayLimits),
    "\\bigwedge" => ("\u{22C0}", Flavour::Op, Limits::DisplayLimits),
    "\\lim" => ("lim", Flavour::Op, Limits::DisplayLimits),
    "\\sup" => ("sup", Flavour::Op, Limits::DisplayLimits),
    "\\inf" => ("inf", Flavour::Op, Limits::DisplayLimits),
    "\\min" => ("min", Flavour::Op, Limits::DisplayLimits),
    "\\max" => ("max", Flavour::Op, Limits::DisplayLimits),
    "\\gcd" => ("gcd", Flavour::Op, Limits::DisplayLimits),
    "\\det" => ("det", Flavour::Op, Limits::DisplayLimits),
    "\\Pr" => ("Pr", Flavour::Op, Limits::DisplayLimits),
    "\\limsup" => ("lim sup", Flavour::Op, Limits::DisplayLimits),
    "\\liminf" => ("lim inf", Flavour::Op, Limits::DisplayLimits),
    "\\injlim" => ("inj lim", Flavour::Op, Limits::DisplayLimits),
    "\\projlim" => ("proj lim", Flavour::Op, Limits::DisplayLimits),
};

/// Math-mode commands rendered as `<mi>` identifiers. The boolean says
/// whether the identifier is italic by default; `\sin`-like function
/// names are upright and never take movable limits.
pub static IDENTIFIERS: phf::Map<&'static str, (bool, &'static str, Flavour)> = phf::phf_map! {
    "\\ker" => (false, "ker", Flavour::Op),
    "\\deg" => (false, "deg", Flavour::Op),
    "\\hom" => (false, "hom", Flavour::Op),
    "\\dim" => (false, "dim", Flavour::Op),
    "\\arg" => (false, "arg", Flavour::Op),
    "\\sin" => (false, "sin", Flavour::Op),
    "\\cos" => (false, "cos", Flavour::Op),
    "\\sec" => (false, "sec", Flavour::Op),
    "\\csc" => (false, "csc", Flavour::Op),
    "\\tan" => (false, "tan", Flavour::Op),
    "\\cot" => (false, "cot", Flavour::Op),
    "\\arcsin" => (false, "arcsin", Flavour::Op),
    "\\arccos" => (false, "arccos", Flavour::Op),
    "\\arctan" => (false, "arctan", Flavour::Op),
    "\\sinh" => (false, "sinh", Flavour::Op),
    "\\cosh" => (false, "cosh", Flavour::Op),
    "\\tanh" => (false, "tanh", Flavour::Op),
    "\\coth" => (false, "coth", Flavour::Op),
    "\\log" => (false, "log", Flavour::Op),
    "\\lg" => (false, "lg", Flavour::Op),
    "\\ln" => (false, "ln", Flavour::Op),
    "\\exp" => (false, "exp", Flavour::Op),
    "\\aleph" => (false, "\u{2135}", Flavour::Ord),
    "\\beth" => (false, "\u{2136}", Flavour::Ord),
    "\\gimel" => (false, "\u{2137}", Flavour::Ord),
    "\\daleth" => (false, "\u{2138}", Flavour::Ord),
    "\\wp" => (true, "\u{2118}", Flavour::Ord),
    "\\ell" => (true, "\u{2113}", Flavour::Ord),
    "\\P" => (true, "\u{B6}", Flavour::Ord),
    "\\imath" => (true, "\u{131}", Flavour::Ord),
    "\\Finv" => (false, "\u{2132}", Flavour::Ord),
    "\\Game" => (false, "\u{2141}", Flavour::Ord),
    "\\partial" => (false, "\u{2202}", Flavour::Ord),
    "\\Re" => (false, "\u{211C}", Flavour::Ord),
    "\\Im" => (false, "\u{2111}", Flavour::Ord),
    "\\infty" => (false, "\u{221E}", Flavour::Ord),
    "\\hbar" => (false, "\u{127}", Flavour::Ord),
    "\\emptyset" => (false, "\u{2205}", Flavour::Ord),
    "\\varnothing" => (false, "\u{D8}", Flavour::Ord),
    "\\S" => (false, "\u{A7}", Flavour::Ord),
    "\\eth" => (false, "\u{F0}", Flavour::Ord),
    "\\hslash" => (false, "\u{210F}", Flavour::Ord),
    "\\mho" => (false, "\u{2127}", Flavour::Ord),
};

/// Lowercase greek letters. These are italic (or bold-italic under
/// `\boldsymbol`) regardless of the surrounding font commands.
pub static LOWERCASE_GREEK: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "\\alpha" => "\u{3B1}",
    "\\beta" => "\u{3B2}",
    "\\gamma" => "\u{3B3}",
    "\\delta" => "\u{3B4}",
    "\\epsilon" => "\u{3F5}",
    "\\varepsilon" => "\u{3B5}",
    "\\zeta" => "\u{3B6}",
    "\\eta" => "\u{3B7}",
    "\\theta" => "\u{3B8}",
    "\\vartheta" => "\u{3D1}",
    "\\iota" => "\u{3B9}",
    "\\kappa" => "\u{3BA}",
    "\\varkappa" => "\u{3F0}",
    "\\lambda" => "\u{3BB}",
    "\\mu" => "\u{3BC}",
    "\\nu" => "\u{3BD}",
    "\\pi" => "\u{3C0}",
    "\\varpi" => "\u{3D6}",
    "\\rho" => "\u{3C1}",
    "\\varrho" => "\u{3F1}",
    "\\sigma" => "\u{3C3}",
    "\\varsigma" => "\u{3C2}",
    "\\tau" => "\u{3C4}",
    "\\upsilon" => "\u{3C5}",
    "\\phi" => "\u{3D5}",
    "\\varphi" => "\u{3C6}",
    "\\chi" => "\u{3C7}",
    "\\psi" => "\u{3C8}",
    "\\omega" => "\u{3C9}",
    "\\xi" => "\u{3BE}",
    "\\digamma" => "\u{3DD}",
};

/// Uppercase greek letters. These respond to font commands, except that
/// the calligraphic, fraktur and blackboard fonts don't have them.
pub static UPPERCASE_GREEK: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "\\Gamma" => "\u{393}",
    "\\Delta" => "\u{394}",
    "\\Theta" => "\u{398}",
    "\\Lambda" => "\u{39B}",
    "\\Pi" => "\u{3A0}",
    "\\Sigma" => "\u{3A3}",
    "\\Upsilon" => "\u{3A5}",
    "\\Phi" => "\u{3A6}",
    "\\Psi" => "\u{3A8}",
    "\\Omega" => "\u{3A9}",
    "\\Xi" => "\u{39E}",
};

/// Spacing commands and their widths in 1/18 em units.
pub static SPACE_COMMANDS: phf::Map<&'static str, i32> = phf::phf_map! {
    "\\!" => -3,
    "\\," => 3,
    "\\>" => 4,
    "\\;" => 5,
    "\\quad" => 18,
    "\\qquad" => 36,
    "~" => 6,
    "\\ " => 6,
};

/// Commands that make the purified TeX document require the amsmath package.
pub static AMSMATH_COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "\\text",
    "\\binom",
    "\\cfrac",
    "\\begin{matrix}",
    "\\begin{pmatrix}",
    "\\begin{bmatrix}",
    "\\begin{Bmatrix}",
    "\\begin{vmatrix}",
    "\\begin{Vmatrix}",
    "\\begin{cases}",
    "\\begin{aligned}",
    "\\begin{smallmatrix}",
    "\\overleftrightarrow",
    "\\boldsymbol",
    "\\And",
    "\\iint",
    "\\iiint",
    "\\iiiint",
    "\\varlimsup",
    "\\varliminf",
    "\\varinjlim",
    "\\varprojlim",
    "\\injlim",
    "\\projlim",
    "\\dotsb",
    "\\operatorname",
    "\\operatornamewithlimits",
    "\\lvert",
    "\\rvert",
    "\\lVert",
    "\\rVert",
    "\\substack",
    "\\overset",
    "\\underset",
    "\\mod",
    "\\emph",
    "\\textit",
    "\\textbf",
    "\\textrm",
    "\\texttt",
    "\\textsf",
    "\\dots",
    "\\colon",
};

/// Commands that require the amsfonts package.
pub static AMSFONTS_COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "\\mathbb",
    "\\mathfrak",
};

/// Commands that require the amssymb package.
pub static AMSSYMB_COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "\\varkappa",
    "\\digamma",
    "\\beth",
    "\\gimel",
    "\\daleth",
    "\\Finv",
    "\\Game",
    "\\upharpoonright",
    "\\upharpoonleft",
    "\\downharpoonright",
    "\\downharpoonleft",
    "\\nleftarrow",
    "\\nrightarrow",
    "\\sqsupset",
    "\\sqsubset",
    "\\supsetneq",
    "\\subsetneq",
    "\\Vdash",
    "\\vDash",
    "\\lesssim",
    "\\nless",
    "\\ngeq",
    "\\nleq",
    "\\smallsmile",
    "\\smallfrown",
    "\\smallsetminus",
    "\\varnothing",
    "\\nmid",
    "\\square",
    "\\Box",
    "\\checkmark",
    "\\complement",
    "\\eth",
    "\\hslash",
    "\\mho",
    "\\circledR",
    "\\yen",
    "\\maltese",
    "\\ulcorner",
    "\\urcorner",
    "\\llcorner",
    "\\lrcorner",
    "\\dashrightarrow",
    "\\dasharrow",
    "\\dashleftarrow",
    "\\backprime",
    "\\vartriangle",
    "\\blacktriangle",
    "\\triangledown",
    "\\blacktriangledown",
    "\\blacksquare",
    "\\lozenge",
    "\\blacklozenge",
    "\\circledS",
    "\\bigstar",
    "\\sphericalangle",
    "\\measuredangle",
    "\\diagup",
    "\\diagdown",
    "\\Bbbk",
    "\\dotplus",
    "\\ltimes",
    "\\rtimes",
    "\\Cap",
    "\\leftthreetimes",
    "\\rightthreetimes",
    "\\Cup",
    "\\barwedge",
    "\\curlywedge",
    "\\veebar",
    "\\curlyvee",
    "\\doublebarwedge",
    "\\boxminus",
    "\\circleddash",
    "\\boxtimes",
    "\\circledast",
    "\\boxdot",
    "\\circledcirc",
    "\\boxplus",
    "\\centerdot",
    "\\divideontimes",
    "\\intercal",
    "\\leqq",
    "\\geqq",
    "\\leqslant",
    "\\geqslant",
    "\\eqslantless",
    "\\eqslantgtr",
    "\\gtrsim",
    "\\lessapprox",
    "\\gtrapprox",
    "\\approxeq",
    "\\eqsim",
    "\\lessdot",
    "\\gtrdot",
    "\\lll",
    "\\ggg",
    "\\lessgtr",
    "\\gtrless",
    "\\lesseqgtr",
    "\\gtreqless",
    "\\lesseqqgtr",
    "\\gtreqqless",
    "\\doteqdot",
    "\\eqcirc",
    "\\risingdotseq",
    "\\circeq",
    "\\fallingdotseq",
    "\\triangleq",
    "\\backsim",
    "\\thicksim",
    "\\backsimeq",
    "\\thickapprox",
    "\\subseteqq",
    "\\supseteqq",
    "\\Subset",
    "\\Supset",
    "\\preccurlyeq",
    "\\succcurlyeq",
    "\\curlyeqprec",
    "\\curlyeqsucc",
    "\\precsim",
    "\\succsim",
    "\\precapprox",
    "\\succapprox",
    "\\vartriangleleft",
    "\\vartriangleright",
    "\\Vvdash",
    "\\shortmid",
    "\\shortparallel",
    "\\bumpeq",
    "\\between",
    "\\Bumpeq",
    "\\varpropto",
    "\\backepsilon",
    "\\blacktriangleleft",
    "\\blacktriangleright",
    "\\therefore",
    "\\because",
    "\\ngtr",
    "\\nleqslant",
    "\\ngeqslant",
    "\\nleqq",
    "\\ngeqq",
    "\\lneqq",
    "\\gneqq",
    "\\lvertneqq",
    "\\gvertneqq",
    "\\lnsim",
    "\\gnsim",
    "\\lnapprox",
    "\\gnapprox",
    "\\nprec",
    "\\nsucc",
    "\\npreceq",
    "\\nsucceq",
    "\\precneqq",
    "\\succneqq",
    "\\precnsim",
    "\\succnsim",
    "\\precnapprox",
    "\\succnapprox",
    "\\nsim",
    "\\ncong",
    "\\nshortmid",
    "\\nshortparallel",
    "\\nparallel",
    "\\nvdash",
    "\\nvDash",
    "\\nVdash",
    "\\nVDash",
    "\\ntriangleleft",
    "\\ntriangleright",
    "\\ntrianglelefteq",
    "\\ntrianglerighteq",
    "\\nsubseteq",
    "\\nsupseteq",
    "\\nsubseteqq",
    "\\nsupseteqq",
    "\\varsubsetneq",
    "\\varsupsetneq",
    "\\subsetneqq",
    "\\supsetneqq",
    "\\varsubsetneqq",
    "\\varsupsetneqq",
    "\\leftleftarrows",
    "\\rightrightarrows",
    "\\leftrightarrows",
    "\\rightleftarrows",
    "\\Lleftarrow",
    "\\Rrightarrow",
    "\\twoheadleftarrow",
    "\\twoheadrightarrow",
    "\\leftarrowtail",
    "\\rightarrowtail",
    "\\looparrowleft",
    "\\looparrowright",
    "\\leftrightharpoons",
    "\\rightleftharpoons",
    "\\curvearrowleft",
    "\\curvearrowright",
    "\\circlearrowleft",
    "\\circlearrowright",
    "\\Lsh",
    "\\Rsh",
    "\\upuparrows",
    "\\downdownarrows",
    "\\multimap",
    "\\rightsquigarrow",
    "\\leftrightsquigarrow",
    "\\nLeftarrow",
    "\\nRightarrow",
    "\\nleftrightarrow",
    "\\nLeftrightarrow",
    "\\pitchfork",
    "\\nexists",
    "\\lhd",
    "\\rhd",
    "\\unlhd",
    "\\unrhd",
    "\\Join",
    "\\leadsto",
};


/// Operators which `\not` knows how to negate, mapped to the combined
/// negated character.
pub static NEGATIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "\u{2208}" => "\u{2209}",
    "\u{2261}" => "\u{2262}",
    "\u{2203}" => "\u{2204}",
    "=" => "\u{2260}",
    "\u{2192}" => "\u{219B}",
    "\u{2286}" => "\u{2288}",
    "\u{223C}" => "\u{2241}",
    "\u{22A9}" => "\u{22AE}",
    "\u{2194}" => "\u{21AE}",
};

/// Accent commands, mapped to the accent character, whether the accent
/// stretches to the width of its base, and whether it goes underneath.
pub static ACCENTS: phf::Map<&'static str, (&'static str, bool, bool)> = phf::phf_map! {
    "\\hat" => ("\u{302}", false, false),
    "\\widehat" => ("\u{302}", true, false),
    "\\bar" => ("\u{AF}", false, false),
    "\\overline" => ("\u{AF}", true, false),
    "\\underline" => ("\u{AF}", true, true),
    "\\tilde" => ("\u{2DC}", false, false),
    "\\widetilde" => ("\u{2DC}", true, false),
    "\\overleftarrow" => ("\u{2190}", true, false),
    "\\vec" => ("\u{20D7}", true, false),
    "\\overrightarrow" => ("\u{2192}", true, false),
    "\\overleftrightarrow" => ("\u{2194}", true, false),
    "\\dot" => ("\u{B7}", false, false),
    "\\ddot" => ("\u{B7}\u{B7}", false, false),
    "\\check" => ("\u{2C7}", false, false),
    "\\acute" => ("\u{B4}", false, false),
    "\\grave" => ("\u{60}", false, false),
    "\\breve" => ("\u{2D8}", false, false),
};

/// The `\big` family, mapped to the forced delimiter size and the atom
/// flavour of the resulting operator.
pub static BIG_COMMANDS: phf::Map<&'static str, (&'static str, Flavour)> = phf::phf_map! {
    "\\big" => ("1.2em", Flavour::Ord),
    "\\bigl" => ("1.2em", Flavour::Open),
    "\\bigr" => ("1.2em", Flavour::Close),
    "\\Big" => ("1.8em", Flavour::Ord),
    "\\Bigl" => ("1.8em", Flavour::Open),
    "\\Bigr" => ("1.8em", Flavour::Close),
    "\\bigg" => ("2.4em", Flavour::Ord),
    "\\biggl" => ("2.4em", Flavour::Open),
    "\\biggr" => ("2.4em", Flavour::Close),
    "\\Bigg" => ("3em", Flavour::Ord),
    "\\Biggl" => ("3em", Flavour::Open),
    "\\Biggr" => ("3em", Flavour::Close),
};

/// Text-mode commands (and the plain characters that TeX treats
/// specially) mapped to their output text. The spacing commands all
/// collapse to non-breaking spaces since MathML has no text-mode glue.
pub static TEXT_SUBSTITUTIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "\\!" => "",
    " " => "\u{A0}",
    "~" => "\u{A0}",
    "\\," => "\u{A0}",
    "\\ " => "\u{A0}",
    "\\;" => "\u{A0}",
    "\\quad" => "\u{A0}\u{A0}",
    "\\qquad" => "\u{A0}\u{A0}\u{A0}\u{A0}",
    "\\&" => "&",
    "<" => "<",
    ">" => ">",
    "\\_" => "_",
    "\\$" => "$",
    "\\#" => "#",
    "\\%" => "%",
    "\\{" => "{",
    "\\}" => "}",
    "\\textbackslash" => "\\",
    "\\textasciicircum" => "^",
    "\\textasciitilde" => "~",
    "\\textvisiblespace" => "\u{23B5}",
    "\\O" => "\u{D8}",
    "\\S" => "\u{A7}",
};

/// The non-ASCII characters permitted in text mode in purified TeX
/// output, in code point order. Anything else outside ASCII cannot be
/// represented in a LaTeX document.
static ALLOWED_TEXT_UNICODE: [char; 210] = [
    '\u{A1}', '\u{A3}', '\u{A7}', '\u{A9}', '\u{AC}', '\u{AE}', '\u{B0}', '\u{B5}',
    '\u{B6}', '\u{BF}', '\u{C0}', '\u{C1}', '\u{C2}', '\u{C3}', '\u{C4}', '\u{C5}',
    '\u{C6}', '\u{C7}', '\u{C8}', '\u{C9}', '\u{CA}', '\u{CB}', '\u{CC}', '\u{CD}',
    '\u{CE}', '\u{CF}', '\u{D1}', '\u{D2}', '\u{D3}', '\u{D4}', '\u{D5}', '\u{D6}',
    '\u{D7}', '\u{D8}', '\u{D9}', '\u{DA}', '\u{DB}', '\u{DC}', '\u{DD}', '\u{DF}',
    '\u{E0}', '\u{E1}', '\u{E2}', '\u{E3}', '\u{E4}', '\u{E5}', '\u{E6}', '\u{E7}',
    '\u{E8}', '\u{E9}', '\u{EA}', '\u{EB}', '\u{EC}', '\u{ED}', '\u{EE}', '\u{F1}',
    '\u{F2}', '\u{F3}', '\u{F4}', '\u{F5}', '\u{F6}', '\u{F7}', '\u{F8}', '\u{F9}',
    '\u{FA}', '\u{FB}', '\u{FC}', '\u{FD}', '\u{FF}', '\u{100}', '\u{101}', '\u{102}',
    '\u{103}', '\u{106}', '\u{107}', '\u{108}', '\u{109}', '\u{10A}', '\u{10B}', '\u{10C}',
    '\u{10D}', '\u{10E}', '\u{10F}', '\u{112}', '\u{113}', '\u{114}', '\u{115}', '\u{116}',
    '\u{117}', '\u{11A}', '\u{11B}', '\u{11C}', '\u{11D}', '\u{11E}', '\u{11F}', '\u{120}',
    '\u{121}', '\u{122}', '\u{124}', '\u{125}', '\u{128}', '\u{129}', '\u{12A}', '\u{12B}',
    '\u{12C}', '\u{12D}', '\u{130}', '\u{131}', '\u{134}', '\u{135}', '\u{136}', '\u{137}',
    '\u{139}', '\u{13A}', '\u{13B}', '\u{13C}', '\u{13D}', '\u{13E}', '\u{141}', '\u{142}',
    '\u{143}', '\u{144}', '\u{145}', '\u{146}', '\u{147}', '\u{148}', '\u{14C}', '\u{14D}',
    '\u{14E}', '\u{14F}', '\u{150}', '\u{151}', '\u{152}', '\u{153}', '\u{154}', '\u{155}',
    '\u{156}', '\u{157}', '\u{158}', '\u{159}', '\u{15A}', '\u{15B}', '\u{15C}', '\u{15D}',
    '\u{15E}', '\u{15F}', '\u{160}', '\u{161}', '\u{162}', '\u{163}', '\u{164}', '\u{165}',
    '\u{168}', '\u{169}', '\u{16A}', '\u{16B}', '\u{16C}', '\u{16D}', '\u{16E}', '\u{16F}',
    '\u{170}', '\u{171}', '\u{174}', '\u{175}', '\u{176}', '\u{177}', '\u{178}', '\u{179}',
    '\u{17A}', '\u{17B}', '\u{17C}', '\u{17D}', '\u{17E}', '\u{1CD}', '\u{1CE}', '\u{1CF}',
    '\u{1D0}', '\u{1D1}', '\u{1D2}', '\u{1D3}', '\u{1D4}', '\u{1E2}', '\u{1E3}', '\u{1E6}',
    '\u{1E7}', '\u{1E8}', '\u{1E9}', '\u{1F0}', '\u{1F4}', '\u{1F5}', '\u{1F8}', '\u{1F9}',
    '\u{1FC}', '\u{1FD}', '\u{1FE}', '\u{1FF}', '\u{218}', '\u{219}', '\u{21A}', '\u{21B}',
    '\u{21E}', '\u{21F}', '\u{226}', '\u{227}', '\u{228}', '\u{229}', '\u{22E}', '\u{22F}',
    '\u{232}', '\u{233}',
];

/// True if `c` is a non-ASCII character that the `ucs` LaTeX package can
/// represent with `\unichar` in text mode.
pub fn is_latexable_unicode(c: char) -> bool {
    ALLOWED_TEXT_UNICODE.binary_search(&c).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_lookups() {
        assert_eq!(DELIMITERS.get("."), Some(&""));
        assert_eq!(DELIMITERS.get("\\langle"), Some(&"\u{2329}"));
        assert_eq!(DELIMITERS.get("\\lfloor"), Some(&"\u{230A}"));
        assert!(DELIMITERS.get("\\alpha").is_none());
    }

    #[test]
    fn operator_flavours() {
        assert_eq!(OPERATORS.get("+"), Some(&("+", Flavour::Bin, Limits::DisplayLimits)));
        assert_eq!(
            OPERATORS.get("\\sum"),
            Some(&("\u{2211}", Flavour::Op, Limits::DisplayLimits))
        );
        assert_eq!(
            OPERATORS.get("\\int"),
            Some(&("\u{222B}", Flavour::Op, Limits::NoLimits))
        );
        assert_eq!(
            OPERATORS.get("\\times"),
            Some(&("\u{D7}", Flavour::Bin, Limits::DisplayLimits))
        );
    }

    #[test]
    fn function_names_are_upright_operators() {
        assert_eq!(IDENTIFIERS.get("\\sin"), Some(&(false, "sin", Flavour::Op)));
        assert_eq!(IDENTIFIERS.get("\\ell"), Some(&(true, "\u{2113}", Flavour::Ord)));
    }

    #[test]
    fn greek_letters() {
        assert_eq!(LOWERCASE_GREEK.get("\\alpha"), Some(&"\u{3B1}"));
        assert_eq!(LOWERCASE_GREEK.get("\\varepsilon"), Some(&"\u{3B5}"));
        assert_eq!(UPPERCASE_GREEK.get("\\Gamma"), Some(&"\u{393}"));
        assert!(UPPERCASE_GREEK.get("\\Alpha").is_none());
    }

    #[test]
    fn package_membership() {
        assert!(AMSMATH_COMMANDS.contains("\\text"));
        assert!(AMSMATH_COMMANDS.contains("\\begin{pmatrix}"));
        assert!(AMSFONTS_COMMANDS.contains("\\mathbb"));
        assert!(AMSSYMB_COMMANDS.contains("\\therefore"));
        assert!(!AMSSYMB_COMMANDS.contains("\\alpha"));
    }

    #[test]
    fn latexable_unicode_membership() {
        assert!(is_latexable_unicode('\u{E9}'));
        assert!(is_latexable_unicode('\u{161}'));
        assert!(!is_latexable_unicode('\u{3B1}'));
        assert!(!is_latexable_unicode('x'));
    }
}
