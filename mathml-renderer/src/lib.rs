//! Layout tree and MathML emission layer.
//!
//! The layout tree is an intermediate stage between the parse tree (which
//! still speaks TeX) and the XML tree. It contains no TeX commands; all
//! symbols have been resolved to Unicode characters and all fonts to their
//! closest MathML approximation. Every node records its atom flavour, its
//! limits convention and the TeX style it is typeset in, which is everything
//! the emitter needs to place spacing and `mstyle` wrappers.

pub mod arena;
pub mod attribute;
pub mod entities;
pub mod layout;
pub mod options;
pub mod xml;
