//! Names for the non-ASCII characters that can appear in MathML output.
//!
//! Each entry gives the codepoint, the short MathML entity name, and the
//! long name where one exists. The table is sorted by codepoint so lookups
//! can binary-search.

/// Returns `(short_name, long_name)` for a named character.
/// The long name is empty when the character only has a short name.
pub fn entity_names(c: char) -> Option<(&'static str, &'static str)> {
    let code = c as u32;
    UNICODE_NAMES
        .binary_search_by_key(&code, |&(cp, _, _)| cp)
        .ok()
        .map(|i| {
            let (_, short, long) = UNICODE_NAMES[i];
            (short, long)
        })
}

static UNICODE_NAMES: &[(u32, &str, &str)] = &[
    (0x60, "grave", "DiacriticalGrave"),
    (0xA0, "nbsp", "NonBreakingSpace"),
    (0xA7, "sect", ""),
    (0xAC, "not", ""),
    (0xAF, "macr", "OverBar"),
    (0xB1, "pm", "PlusMinus"),
    (0xB4, "acute", "DiacriticalAcute"),
    (0xB6, "para", ""),
    (0xB7, "middot", "CenterDot"),
    (0xD7, "times", ""),
    (0xD8, "Oslash", ""),
    (0xF0, "eth", ""),
    (0xF7, "div", "divide"),
    (0x127, "hstrok", ""),
    (0x131, "imath", ""),
    (0x2C7, "caron", "Hacek"),
    (0x2D8, "breve", "Breve"),
    (0x2DC, "tilde", "DiacriticalTilde"),
    (0x393, "Gamma", ""),
    (0x394, "Delta", ""),
    (0x398, "Theta", ""),
    (0x39B, "Lambda", ""),
    (0x39E, "Xi", ""),
    (0x3A0, "Pi", ""),
    (0x3A3, "Sigma", ""),
    (0x3A5, "Upsilon", ""),
    (0x3A6, "Phi", ""),
    (0x3A8, "Psi", ""),
    (0x3A9, "Omega", ""),
    (0x3B1, "alpha", ""),
    (0x3B2, "beta", ""),
    (0x3B3, "gamma", ""),
    (0x3B4, "delta", ""),
    (0x3B5, "epsiv", "varepsilon"),
    (0x3B6, "zeta", ""),
    (0x3B7, "eta", ""),
    (0x3B8, "theta", ""),
    (0x3B9, "iota", ""),
    (0x3BA, "kappa", ""),
    (0x3BB, "lambda", ""),
    (0x3BC, "mu", ""),
    (0x3BD, "nu", ""),
    (0x3BE, "xi", ""),
    (0x3C0, "pi", ""),
    (0x3C1, "rho", ""),
    (0x3C2, "sigmav", "varsigma"),
    (0x3C3, "sigma", ""),
    (0x3C4, "tau", ""),
    (0x3C5, "upsi", "upsilon"),
    (0x3C6, "phiv", "varphi"),
    (0x3C7, "chi", ""),
    (0x3C8, "psi", ""),
    (0x3C9, "omega", ""),
    (0x3D1, "thetav", "vartheta"),
    (0x3D5, "phi", "straightphi"),
    (0x3D6, "piv", "varpi"),
    (0x3DD, "gammad", "digamma"),
    (0x3F0, "kappav", "varkappa"),
    (0x3F1, "rhov", "varrho"),
    (0x3F5, "epsi", "straightepsilon"),
    (0x2020, "dagger", ""),
    (0x2021, "Dagger", "ddagger"),
    (0x2022, "bull", "bullet"),
    (0x2026, "hellip", ""),
    (0x2032, "prime", ""),
    (0x2102, "Copf", "complexes"),
    (0x210B, "Hscr", "HilbertSpace"),
    (0x210C, "Hfr", "Poincareplane"),
    (0x210D, "Hopf", "quaternions"),
    (0x210F, "hbar", "planck"),
    (0x2110, "Iscr", "imagline"),
    (0x2111, "Im", "imagpart"),
    (0x2112, "Lscr", "Laplacetrf"),
    (0x2113, "ell", ""),
    (0x2118, "wp", "weierp"),
    (0x2119, "Popf", "primes"),
    (0x211A, "Qopf", "rationals"),
    (0x211B, "Rscr", "realine"),
    (0x211C, "Re", "realpart"),
    (0x211D, "Ropf", "reals"),
    (0x2124, "Zopf", "integers"),
    (0x2127, "mho", ""),
    (0x2128, "Zfr", "zeetrf"),
    (0x212C, "Bscr", "Bernoullis"),
    (0x212D, "Cfr", "Cayleys"),
    (0x2130, "Escr", "expectation"),
    (0x2131, "Fscr", "Fouriertrf"),
    (0x2133, "Mscr", "Mellintrf"),
    (0x2135, "aleph", ""),
    (0x2136, "beth", ""),
    (0x2137, "gimel", ""),
    (0x2138, "daleth", ""),
    (0x2190, "larr", "LeftArrow"),
    (0x2191, "uarr", "UpArrow"),
    (0x2192, "rarr", "RightArrow"),
    (0x2193, "darr", "DownArrow"),
    (0x2194, "harr", "LeftRightArrow"),
    (0x2195, "varr", "UpDownArrow"),
    (0x2196, "nwarr", "UpperLeftArrow"),
    (0x2197, "nearr", "UpperRightArrow"),
    (0x2198, "searr", "LowerRightArrow"),
    (0x2199, "swarr", "LowerLeftArrow"),
    (0x219A, "nlarr", "nleftarrow"),
    (0x219B, "nrarr", "nrightarrow"),
    (0x21A6, "map", "RightTeeArrow"),
    (0x21A9, "larrhk", "hookleftarrow"),
    (0x21AA, "rarrhk", "hookrightarrow"),
    (0x21AE, "nharr", "nleftrightarrow"),
    (0x21BC, "lharu", "leftharpoonup"),
    (0x21BD, "lhard", "leftharpoondown"),
    (0x21BE, "uharr", "upharpoonright"),
    (0x21BF, "uharl", "upharpoonleft"),
    (0x21C0, "rharu", "rightharpoonup"),
    (0x21C1, "rhard", "rightharpoondown"),
    (0x21C2, "dharr", "downharpoonright"),
    (0x21C3, "dharl", "downharpoonleft"),
    (0x21CD, "nlArr", "nLeftarrow"),
    (0x21CE, "nhArr", "nLeftrightarrow"),
    (0x21CF, "nrArr", "nRightarrow"),
    (0x21D0, "lArr", "DoubleLeftArrow"),
    (0x21D1, "uArr", "DoubleUpArrow"),
    (0x21D2, "rArr", "DoubleRightArrow"),
    (0x21D3, "dArr", "DoubleDownArrow"),
    (0x21D4, "hArr", "DoubleLeftRightArrow"),
    (0x21D5, "vArr", "DoubleUpDownArrow"),
    (0x2200, "forall", "ForAll"),
    (0x2201, "comp", "complement"),
    (0x2202, "part", "PartialD"),
    (0x2203, "exist", "Exists"),
    (0x2204, "nexist", "NotExists"),
    (0x2205, "empty", "emptyset"),
    (0x2207, "nabla", "Del"),
    (0x2208, "in", "Element"),
    (0x2209, "notin", "NotElement"),
    (0x220B, "ni", "ReverseElement"),
    (0x220C, "notni", "NotReverseElement"),
    (0x220F, "prod", "Product"),
    (0x2210, "coprod", "Coproduct"),
    (0x2211, "sum", "Sum"),
    (0x2213, "mp", "MinusPlus"),
    (0x2216, "setmn", "Backslash"),
    (0x2218, "compfn", "SmallCircle"),
    (0x221D, "prop", "Proportional"),
    (0x221E, "infin", ""),
    (0x2220, "ang", "angle"),
    (0x2224, "nmid", "NotVerticalBar"),
    (0x2225, "par", "DoubleVerticalBar"),
    (0x2226, "npar", "NotDoubleVerticalBar"),
    (0x2227, "and", "wedge"),
    (0x2228, "or", "vee"),
    (0x2229, "cap", ""),
    (0x222A, "cup", ""),
    (0x222B, "int", "Integral"),
    (0x222C, "Int", ""),
    (0x222D, "tint", "iiint"),
    (0x222E, "conint", "ContourIntegral"),
    (0x223C, "sim", "Tilde"),
    (0x2240, "wr", "VerticalTilde"),
    (0x2241, "nsim", "NotTilde"),
    (0x2243, "sime", "TildeEqual"),
    (0x2244, "nsime", "NotTildeEqual"),
    (0x2245, "cong", "TildeFullEqual"),
    (0x2247, "ncong", "NotTildeFullEqual"),
    (0x2248, "ap", "TildeTilde"),
    (0x2249, "nap", "NotTildeTilde"),
    (0x2260, "ne", "NotEqual"),
    (0x2261, "equiv", "Congruent"),
    (0x2262, "nequiv", "NotCongruent"),
    (0x2264, "le", "leq"),
    (0x2265, "ge", "GreaterEqual"),
    (0x226A, "Lt", "NestedLessLess"),
    (0x226B, "Gt", "NestedGreaterGreater"),
    (0x226E, "nlt", "NotLess"),
    (0x226F, "ngt", "NotGreater"),
    (0x2270, "nle", "NotLessEqual"),
    (0x2271, "nge", "NotGreaterEqual"),
    (0x2272, "lsim", "LessTilde"),
    (0x2282, "sub", "subset"),
    (0x2283, "sup", "supset"),
    (0x2284, "nsub", ""),
    (0x2285, "nsup", ""),
    (0x2286, "sube", "SubsetEqual"),
    (0x2287, "supe", "SupersetEqual"),
    (0x2288, "nsube", "NotSubsetEqual"),
    (0x2289, "nsupe", "NotSupersetEqual"),
    (0x228A, "subne", "subsetneq"),
    (0x228B, "supne", "supsetneq"),
    (0x228F, "sqsub", "SquareSubset"),
    (0x2290, "sqsup", "SquareSuperset"),
    (0x2291, "sqsube", "SquareSubsetEqual"),
    (0x2292, "sqsupe", "SquareSupersetEqual"),
    (0x2293, "sqcap", "SquareIntersection"),
    (0x2294, "sqcup", "SquareUnion"),
    (0x2295, "oplus", "CirclePlus"),
    (0x2297, "otimes", "CircleTimes"),
    (0x22A2, "vdash", "RightTee"),
    (0x22A4, "top", "DownTee"),
    (0x22A5, "bot", "UpTee"),
    (0x22A7, "models", ""),
    (0x22A8, "vDash", "DoubleRightTee"),
    (0x22A9, "Vdash", ""),
    (0x22AC, "nvdash", ""),
    (0x22AD, "nvDash", ""),
    (0x22AE, "nVdash", ""),
    (0x22B2, "vltri", "LeftTriangle"),
    (0x22B3, "vrtri", "RightTriangle"),
    (0x22B4, "ltrie", "LeftTriangleEqual"),
    (0x22B5, "rtrie", "RightTriangleEqual"),
    (0x22C0, "xwedge", "Wedge"),
    (0x22C1, "xvee", "Vee"),
    (0x22C2, "xcap", "Intersection"),
    (0x22C3, "xcup", "Union"),
    (0x22C4, "diam", "Diamond"),
    (0x22C5, "sdot", ""),
    (0x22C6, "Star", ""),
    (0x22E2, "nsqsube", "NotSquareSubsetEqual"),
    (0x22E3, "nsqsupe", "NotSquareSupersetEqual"),
    (0x22EA, "nltri", "NotLeftTriangle"),
    (0x22EB, "nrtri", "NotRightTriangle"),
    (0x22EC, "nltrie", "NotLeftTriangleEqual"),
    (0x22ED, "nrtrie", "NotRightTriangleEqual"),
    (0x22EE, "vellip", ""),
    (0x22EF, "ctdot", ""),
    (0x22F1, "dtdot", ""),
    (0x2308, "lceil", "LeftCeiling"),
    (0x2309, "rceil", "RightCeiling"),
    (0x230A, "lfloor", "LeftFloor"),
    (0x230B, "rfloor", "RightFloor"),
    (0x2322, "frown", "sfrown"),
    (0x2323, "smile", "ssmile"),
    (0x2329, "lang", "LeftAngleBracket"),
    (0x232A, "rang", "RightAngleBracket"),
    (0x23B5, "bbrk", "UnderBracket"),
    (0x25A1, "squ", "Square"),
    (0x25B3, "xutri", "bigtriangleup"),
    (0x2660, "spades", "spadesuit"),
    (0x2663, "clubs", "clubsuit"),
    (0x2665, "hearts", "heartsuit"),
    (0x2666, "diams", "diamondsuit"),
    (0x266D, "flat", ""),
    (0x266E, "natur", "natural"),
    (0x266F, "sharp", ""),
    (0x2713, "check", "checkmark"),
    (0x2A00, "xodot", "bigodot"),
    (0x2A01, "xoplus", "bigoplus"),
    (0x2A02, "xotime", "bigotimes"),
    (0x2A04, "xuplus", "biguplus"),
    (0x2A06, "xsqcup", "bigsqcup"),
    (0x2A0C, "qint", "iiiint"),
    (0x2A2F, "Cross", ""),
    (0xFE37, "OverBrace", ""),
    (0xFE38, "UnderBrace", ""),
    (0x1D49C, "Ascr", ""),
    (0x1D49E, "Cscr", ""),
    (0x1D49F, "Dscr", ""),
    (0x1D4A2, "Gscr", ""),
    (0x1D4A5, "Jscr", ""),
    (0x1D4A6, "Kscr", ""),
    (0x1D4A9, "Nscr", ""),
    (0x1D4AA, "Oscr", ""),
    (0x1D4AB, "Pscr", ""),
    (0x1D4AC, "Qscr", ""),
    (0x1D4AE, "Sscr", ""),
    (0x1D4AF, "Tscr", ""),
    (0x1D4B0, "Uscr", ""),
    (0x1D4B1, "Vscr", ""),
    (0x1D4B2, "Wscr", ""),
    (0x1D4B3, "Xscr", ""),
    (0x1D4B4, "Yscr", ""),
    (0x1D4B5, "Zscr", ""),
    (0x1D504, "Afr", ""),
    (0x1D505, "Bfr", ""),
    (0x1D507, "Dfr", ""),
    (0x1D508, "Efr", ""),
    (0x1D509, "Ffr", ""),
    (0x1D50A, "Gfr", ""),
    (0x1D50D, "Jfr", ""),
    (0x1D50E, "Kfr", ""),
    (0x1D50F, "Lfr", ""),
    (0x1D510, "Mfr", ""),
    (0x1D511, "Nfr", ""),
    (0x1D512, "Ofr", ""),
    (0x1D513, "Pfr", ""),
    (0x1D514, "Qfr", ""),
    (0x1D516, "Sfr", ""),
    (0x1D517, "Tfr", ""),
    (0x1D518, "Ufr", ""),
    (0x1D519, "Vfr", ""),
    (0x1D51A, "Wfr", ""),
    (0x1D51B, "Xfr", ""),
    (0x1D51C, "Yfr", ""),
    (0x1D51E, "afr", ""),
    (0x1D51F, "bfr", ""),
    (0x1D520, "cfr", ""),
    (0x1D521, "dfr", ""),
    (0x1D522, "efr", ""),
    (0x1D523, "ffr", ""),
    (0x1D524, "gfr", ""),
    (0x1D525, "hfr", ""),
    (0x1D526, "ifr", ""),
    (0x1D527, "jfr", ""),
    (0x1D528, "kfr", ""),
    (0x1D529, "lfr", ""),
    (0x1D52A, "mfr", ""),
    (0x1D52B, "nfr", ""),
    (0x1D52C, "ofr", ""),
    (0x1D52D, "pfr", ""),
    (0x1D52E, "qfr", ""),
    (0x1D52F, "rfr", ""),
    (0x1D530, "sfr", ""),
    (0x1D531, "tfr", ""),
    (0x1D532, "ufr", ""),
    (0x1D533, "vfr", ""),
    (0x1D534, "wfr", ""),
    (0x1D535, "xfr", ""),
    (0x1D536, "yfr", ""),
    (0x1D537, "zfr", ""),
    (0x1D538, "Aopf", ""),
    (0x1D539, "Bopf", ""),
    (0x1D53B, "Dopf", ""),
    (0x1D53C, "Eopf", ""),
    (0x1D53D, "Fopf", ""),
    (0x1D53E, "Gopf", ""),
    (0x1D540, "Iopf", ""),
    (0x1D541, "Jopf", ""),
    (0x1D542, "Kopf", ""),
    (0x1D543, "Lopf", ""),
    (0x1D544, "Mopf", ""),
    (0x1D546, "Oopf", ""),
    (0x1D54A, "Sopf", ""),
    (0x1D54B, "Topf", ""),
    (0x1D54C, "Uopf", ""),
    (0x1D54D, "Vopf", ""),
    (0x1D54E, "Wopf", ""),
    (0x1D54F, "Xopf", ""),
    (0x1D550, "Yopf", ""),];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_deduplicated() {
        for pair in UNICODE_NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "out of order at {:#x}", pair[1].0);
        }
    }

    #[test]
    fn named_lookups() {
        assert_eq!(entity_names('\u{3B1}'), Some(("alpha", "")));
        assert_eq!(entity_names('\u{2211}'), Some(("sum", "Sum")));
        assert_eq!(entity_names('\u{A0}'), Some(("nbsp", "NonBreakingSpace")));
        assert_eq!(entity_names('x'), None);
    }
}
