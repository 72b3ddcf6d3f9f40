//! CPF and CNPJ check-digit validation against known numbers

use cadastro::{check_digits, is_valid_cnpj, is_valid_cpf, Document, DocumentError, DocumentKind};
use rstest::rstest;

// ============================================================================
// CPF
// ============================================================================

#[rstest]
#[case("12345678909", true)]
#[case("123.456.789-09", true)]
#[case("529.982.247-25", true)]
#[case("93541134780", true)]
#[case("111.444.777-35", true)]
#[case("000.000.001-91", true)]
// Check digits off by one
#[case("12345678908", false)]
#[case("52998224724", false)]
// Repeated digits satisfy the arithmetic but are never valid
#[case("11111111111", false)]
#[case("000.000.000-00", false)]
#[case("99999999999", false)]
// Wrong length after stripping punctuation
#[case("123", false)]
#[case("123456789091", false)]
#[case("", false)]
#[case("abc.def.ghi-jk", false)]
#[case("...---", false)]
fn test_cpf_vectors(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_cpf(input), expected, "is_valid_cpf({:?})", input);
}

// ============================================================================
// CNPJ
// ============================================================================

#[rstest]
#[case("11222333000181", true)]
#[case("11.222.333/0001-81", true)]
#[case("11.444.777/0001-61", true)]
#[case("19100000000191", true)]
#[case("04.530.003/0001-98", true)]
#[case("33592083000104", true)]
#[case("11222333000180", false)]
#[case("11222333000171", false)]
#[case("11111111111111", false)]
#[case("00000000000000", false)]
#[case("1122233300018", false)]
#[case("112223330001811", false)]
#[case("", false)]
fn test_cnpj_vectors(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_cnpj(input), expected, "is_valid_cnpj({:?})", input);
}

#[test]
fn test_kinds_do_not_cross_validate() {
    assert!(!is_valid_cnpj("12345678909"));
    assert!(!is_valid_cpf("11222333000181"));
}

#[test]
fn test_every_repdigit_is_rejected() {
    for d in '0'..='9' {
        let cpf: String = std::iter::repeat(d).take(11).collect();
        let cnpj: String = std::iter::repeat(d).take(14).collect();
        assert!(!is_valid_cpf(&cpf), "{}", cpf);
        assert!(!is_valid_cnpj(&cnpj), "{}", cnpj);
    }
}

#[test]
fn test_check_digits_reproduce_known_numbers() {
    assert_eq!(check_digits(DocumentKind::Cpf, "529982247"), Some([2, 5]));
    assert_eq!(check_digits(DocumentKind::Cnpj, "114447770001"), Some([6, 1]));
    assert_eq!(check_digits(DocumentKind::Cnpj, "12345678909"), None);
}

#[test]
fn test_parse_errors_are_specific() {
    assert_eq!(
        Document::parse("11.222.333/0001-8", DocumentKind::Cnpj),
        Err(DocumentError::WrongLength {
            kind: DocumentKind::Cnpj,
            expected: 14,
            found: 13,
        })
    );
    assert_eq!(
        Document::parse("22222222222222", DocumentKind::Cnpj),
        Err(DocumentError::RepeatedDigits {
            kind: DocumentKind::Cnpj
        })
    );
    assert_eq!(
        Document::parse("11222333000191", DocumentKind::Cnpj),
        Err(DocumentError::CheckDigitMismatch {
            kind: DocumentKind::Cnpj,
            position: 1,
        })
    );
}

#[test]
fn test_error_messages() {
    let err = Document::parse("123", DocumentKind::Cpf).unwrap_err();
    assert_eq!(err.to_string(), "CPF must have 11 digits, found 3");

    let err = Document::parse_any("1234567").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot tell CPF from CNPJ with 7 digits (expected 11 or 14)"
    );
}

#[test]
fn test_document_serializes_kind_and_digits() {
    let doc = Document::parse("529.982.247-25", DocumentKind::Cpf).unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["kind"], "cpf");
    assert_eq!(json["digits"], "52998224725");
}
