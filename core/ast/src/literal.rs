//! Numeric-literal suffix analysis.
//!
//! The scanner hands literal lexemes over as raw text; these routines strip
//! a trailing width/sign suffix (`100i16`, `5u8`, `3.14f32`) and resolve
//! the literal's concrete kind. Unrecognized suffixes are not an error:
//! the text passes through unchanged with the default kind, and anything
//! grammar-invalid is caught downstream.

use tracing::trace;

/// Signedness and width of an integer literal. `i32` when no suffix says
/// otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, serde::Serialize)]
pub enum IntKind {
    I8,
    I16,
    #[default]
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

/// Precision of a float literal. `f64` when no suffix says otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, serde::Serialize)]
pub enum FloatKind {
    F16,
    F32,
    #[default]
    F64,
}

/// Strips a recognized integer suffix from `text` and resolves the
/// literal's kind.
///
/// Recognized forms, checked longest first:
/// - `i`/`u` followed by `16`, `32` or `64` (`100u32`)
/// - `i`/`u` followed by `8` (`5i8`)
/// - a bare trailing `i`/`u` on a width-valued literal (`16i` is the
///   16-bit signed sixteen)
///
/// Texts of length 2 or less are never stripped, so short numerals cannot
/// be misread as suffixed literals.
#[must_use]
pub fn parse_int_literal(text: &str) -> (String, IntKind) {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len <= 2 {
        return (text.to_string(), IntKind::default());
    }

    if len > 3 && matches!(bytes[len - 3], b'i' | b'u') {
        let signed = bytes[len - 3] == b'i';
        let kind = match &text[len - 2..] {
            "16" => Some(if signed { IntKind::I16 } else { IntKind::U16 }),
            "32" => Some(if signed { IntKind::I32 } else { IntKind::U32 }),
            "64" => Some(if signed { IntKind::I64 } else { IntKind::U64 }),
            _ => None,
        };
        if let Some(kind) = kind {
            return strip(text, 3, kind);
        }
    }

    if matches!(bytes[len - 2], b'i' | b'u') && bytes[len - 1] == b'8' {
        let kind = if bytes[len - 2] == b'i' {
            IntKind::I8
        } else {
            IntKind::U8
        };
        return strip(text, 2, kind);
    }

    if matches!(bytes[len - 1], b'i' | b'u') {
        let signed = bytes[len - 1] == b'i';
        let kind = match &text[..len - 1] {
            "16" => Some(if signed { IntKind::I16 } else { IntKind::U16 }),
            "32" => Some(if signed { IntKind::I32 } else { IntKind::U32 }),
            "64" => Some(if signed { IntKind::I64 } else { IntKind::U64 }),
            _ => None,
        };
        if let Some(kind) = kind {
            return strip(text, 1, kind);
        }
    }

    (text.to_string(), IntKind::default())
}

/// Strips a recognized float-precision suffix (`f16`, `f32`, `f64`) from
/// `text`. Anything else, including suffix-less floats, resolves to `f64`
/// with the text unchanged.
#[must_use]
pub fn parse_float_literal(text: &str) -> (String, FloatKind) {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len > 3 && bytes[len - 3] == b'f' {
        let kind = match &text[len - 2..] {
            "16" => Some(FloatKind::F16),
            "32" => Some(FloatKind::F32),
            "64" => Some(FloatKind::F64),
            _ => None,
        };
        if let Some(kind) = kind {
            let stripped = &text[..len - 3];
            trace!(text, ?kind, "resolved float literal suffix");
            return (stripped.to_string(), kind);
        }
    }
    (text.to_string(), FloatKind::default())
}

fn strip(text: &str, suffix_len: usize, kind: IntKind) -> (String, IntKind) {
    trace!(text, ?kind, "resolved integer literal suffix");
    (text[..text.len() - suffix_len].to_string(), kind)
}
