//! CPF and CNPJ check-digit validation
//!
//! Both identifiers end in two modulo-11 check digits ("dígitos
//! verificadores"). The first is computed over the base number, the second
//! over the base number followed by the first check digit.
//!
//! | Kind | Length | Base | Weights (left to right)          |
//! |------|--------|------|----------------------------------|
//! | CPF  | 11     | 9    | `n+1` down to `2`                |
//! | CNPJ | 14     | 12   | `2..=9` cycling from the right   |
//!
//! A weighted sum `s` reduces to `(s * 10) % 11`, with `10` mapped to `0`.
//! Numbers made of a single repeated digit pass the arithmetic for both
//! kinds and are rejected explicitly.
//!
//! [`is_valid_cpf`] and [`is_valid_cnpj`] are total over `&str`: any input
//! that does not normalize to a well-formed number is simply `false`.
//! [`Document::parse`] reports *why* a number was rejected.

use crate::error::Error;
use crate::format::format_document;
use crate::util::{digit_values, is_repdigit, only_digits};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

/// Kind of Brazilian taxpayer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoa Física (individuals, 11 digits)
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (companies, 14 digits)
    Cnpj,
}

impl DocumentKind {
    /// Number of digits, check digits included
    pub fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Number of digits before the two check digits
    pub fn base_len(self) -> usize {
        self.digit_count() - 2
    }

    /// Guess the kind from the number of digits in `input`
    ///
    /// ```
    /// use cadastro::DocumentKind;
    /// assert_eq!(DocumentKind::detect("123.456.789-09"), Some(DocumentKind::Cpf));
    /// assert_eq!(DocumentKind::detect("11.222.333/0001-81"), Some(DocumentKind::Cnpj));
    /// assert_eq!(DocumentKind::detect("123"), None);
    /// ```
    pub fn detect(input: &str) -> Option<Self> {
        match digit_values(input).len() {
            11 => Some(DocumentKind::Cpf),
            14 => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Weight of the digit at `index` in a sum over `len` digits
    fn weight(self, len: usize, index: usize) -> u32 {
        match self {
            DocumentKind::Cpf => (len + 1 - index) as u32,
            DocumentKind::Cnpj => 2 + ((len - 1 - index) % 8) as u32,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(DocumentKind::Cpf),
            "cnpj" => Ok(DocumentKind::Cnpj),
            other => Err(Error::Other(format!(
                "Unknown document kind: {}. Use 'cpf' or 'cnpj'.",
                other
            ))),
        }
    }
}

/// Why a document number was rejected
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("{kind} must have {expected} digits, found {found}")]
    WrongLength {
        kind: DocumentKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} cannot be a single repeated digit")]
    RepeatedDigits { kind: DocumentKind },

    #[error("{kind} check digit {position} does not match")]
    CheckDigitMismatch { kind: DocumentKind, position: u8 },

    #[error("cannot tell CPF from CNPJ with {found} digits (expected 11 or 14)")]
    UnknownKind { found: usize },
}

fn reduce_mod11(sum: u32) -> u8 {
    match (sum * 10) % 11 {
        10 => 0,
        d => d as u8,
    }
}

fn check_digit(kind: DocumentKind, digits: &[u8]) -> u8 {
    let len = digits.len();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * kind.weight(len, i))
        .sum();
    reduce_mod11(sum)
}

fn compute_check_digits(kind: DocumentKind, base: &[u8]) -> [u8; 2] {
    let first = check_digit(kind, base);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    [first, check_digit(kind, &extended)]
}

/// Compute both check digits for a base number
///
/// `base` may contain punctuation. Returns `None` unless it holds exactly
/// 9 digits (CPF) or 12 digits (CNPJ).
///
/// ```
/// use cadastro::{check_digits, DocumentKind};
/// assert_eq!(check_digits(DocumentKind::Cpf, "123.456.789"), Some([0, 9]));
/// assert_eq!(check_digits(DocumentKind::Cnpj, "11.222.333/0001"), Some([8, 1]));
/// assert_eq!(check_digits(DocumentKind::Cpf, "1234"), None);
/// ```
pub fn check_digits(kind: DocumentKind, base: &str) -> Option<[u8; 2]> {
    let digits = digit_values(base);
    if digits.len() != kind.base_len() {
        return None;
    }
    Some(compute_check_digits(kind, &digits))
}

/// A structurally valid CPF or CNPJ
///
/// Only [`Document::parse`] and [`Document::parse_any`] construct one, so
/// holding a `Document` means the length, repdigit and check-digit rules
/// all passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    /// Parse free-text input as a document of the given kind
    pub fn parse(input: &str, kind: DocumentKind) -> Result<Self, DocumentError> {
        let digits = digit_values(input);
        if digits.len() != kind.digit_count() {
            return Err(DocumentError::WrongLength {
                kind,
                expected: kind.digit_count(),
                found: digits.len(),
            });
        }
        if is_repdigit(&digits) {
            return Err(DocumentError::RepeatedDigits { kind });
        }

        let base = kind.base_len();
        let expected = compute_check_digits(kind, &digits[..base]);
        for (offset, want) in expected.iter().enumerate() {
            if digits[base + offset] != *want {
                return Err(DocumentError::CheckDigitMismatch {
                    kind,
                    position: offset as u8 + 1,
                });
            }
        }

        Ok(Self {
            kind,
            digits: only_digits(input),
        })
    }

    /// Parse input whose kind is inferred from its digit count
    pub fn parse_any(input: &str) -> Result<Self, DocumentError> {
        match DocumentKind::detect(input) {
            Some(kind) => Self::parse(input, kind),
            None => Err(DocumentError::UnknownKind {
                found: digit_values(input).len(),
            }),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Bare digits, no punctuation
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Digits with the conventional punctuation for the kind
    pub fn formatted(&self) -> String {
        format_document(&self.digits, self.kind)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Check a CPF (11 digits; punctuation is ignored)
pub fn is_valid_cpf(input: &str) -> bool {
    Document::parse(input, DocumentKind::Cpf).is_ok()
}

/// Check a CNPJ (14 digits; punctuation is ignored)
pub fn is_valid_cnpj(input: &str) -> bool {
    Document::parse(input, DocumentKind::Cnpj).is_ok()
}

/// Outcome of validating one input, as printed by the CLI
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DocumentReport {
    pub input: String,
    pub digits: String,
    pub kind: Option<DocumentKind>,
    pub valid: bool,
    pub error: Option<String>,
    pub formatted: Option<String>,
}

impl DocumentReport {
    /// Human-readable one-line summary
    pub fn to_report(&self) -> String {
        let kind = self
            .kind
            .map(|k| k.to_string())
            .unwrap_or_else(|| "document".to_string());
        match (&self.formatted, &self.error) {
            (Some(formatted), _) if self.valid => format!("✓ valid {}: {}", kind, formatted),
            (_, Some(error)) => format!("✗ invalid {}: {}", kind, error),
            _ => format!("✗ invalid {}", kind),
        }
    }
}

/// Validate `input`, inferring the kind from its length when `kind` is `None`
pub fn validate_document(input: &str, kind: Option<DocumentKind>) -> DocumentReport {
    let detected = kind.or_else(|| DocumentKind::detect(input));
    let parsed = match kind {
        Some(kind) => Document::parse(input, kind),
        None => Document::parse_any(input),
    };

    let (valid, error, formatted) = match parsed {
        Ok(doc) => (true, None, Some(doc.formatted())),
        Err(e) => (false, Some(e.to_string()), None),
    };

    DocumentReport {
        input: input.to_string(),
        digits: only_digits(input),
        kind: detected,
        valid,
        error,
        formatted,
    }
}
