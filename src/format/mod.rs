//! Display masks
//!
//! Renders digit strings with the punctuation people expect to see:
//! - CPF `###.###.###-##`, CNPJ `##.###.###/####-##`
//! - phone `(##) ####-####` (landline) or `(##) #####-####` (mobile)
//! - CEP `#####-###`
//!
//! Masks are cosmetic. They never validate, and document/CEP masks format
//! partial input progressively so they can run on every keystroke.

use crate::document::DocumentKind;
use crate::error::Error;
use crate::util::only_digits;
use std::str::FromStr;

/// `#` is a digit slot; anything else is a literal separator
pub const CPF_MASK: &str = "###.###.###-##";
pub const CNPJ_MASK: &str = "##.###.###/####-##";
pub const CEP_MASK: &str = "#####-###";
pub const LANDLINE_MASK: &str = "(##) ####-####";
pub const MOBILE_MASK: &str = "(##) #####-####";

/// Fill `pattern` with the digits of `input`
///
/// Non-digits in `input` are ignored. A separator is written only if at
/// least one digit remains to follow it, and digits beyond the last slot
/// are dropped.
///
/// ```
/// use cadastro::format::{apply_mask, CPF_MASK};
/// assert_eq!(apply_mask("1234", CPF_MASK), "123.4");
/// assert_eq!(apply_mask("123", CPF_MASK), "123");
/// assert_eq!(apply_mask("1234567890999", CPF_MASK), "123.456.789-09");
/// ```
pub fn apply_mask(input: &str, pattern: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

/// Format a CPF or CNPJ for display, partially if input is incomplete
pub fn format_document(digits: &str, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Cpf => apply_mask(digits, CPF_MASK),
        DocumentKind::Cnpj => apply_mask(digits, CNPJ_MASK),
    }
}

/// Mask for a single "CPF or CNPJ" field
///
/// Up to 11 digits are shown as a CPF; the 12th digit switches to the
/// CNPJ layout.
pub fn format_document_auto(input: &str) -> String {
    let count = input.chars().filter(char::is_ascii_digit).count();
    if count <= DocumentKind::Cpf.digit_count() {
        format_document(input, DocumentKind::Cpf)
    } else {
        format_document(input, DocumentKind::Cnpj)
    }
}

/// Format a phone number with area code
///
/// Only complete numbers are masked: 10 digits as a landline, 11 as a
/// mobile. Anything else comes back exactly as given.
pub fn format_phone(digits: &str) -> String {
    let bare = only_digits(digits);
    match bare.len() {
        10 => apply_mask(&bare, LANDLINE_MASK),
        11 => apply_mask(&bare, MOBILE_MASK),
        _ => digits.to_string(),
    }
}

/// Format a CEP (postal code); existence is not checked
pub fn format_cep(digits: &str) -> String {
    apply_mask(digits, CEP_MASK)
}

/// Which mask to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Cpf,
    Cnpj,
    /// CPF or CNPJ, chosen by length
    Document,
    Phone,
    Cep,
}

impl FromStr for FormatKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(FormatKind::Cpf),
            "cnpj" => Ok(FormatKind::Cnpj),
            "doc" | "document" => Ok(FormatKind::Document),
            "phone" | "telefone" | "tel" => Ok(FormatKind::Phone),
            "cep" => Ok(FormatKind::Cep),
            other => Err(Error::Other(format!(
                "Unknown format kind: {}. Use cpf, cnpj, doc, phone or cep.",
                other
            ))),
        }
    }
}

/// Apply the mask for `kind` to `input`
pub fn format_value(input: &str, kind: FormatKind) -> String {
    match kind {
        FormatKind::Cpf => format_document(input, DocumentKind::Cpf),
        FormatKind::Cnpj => format_document(input, DocumentKind::Cnpj),
        FormatKind::Document => format_document_auto(input),
        FormatKind::Phone => format_phone(input),
        FormatKind::Cep => format_cep(input),
    }
}
