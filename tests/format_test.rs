//! Display masks, including partial input from live typing

use cadastro::format::{apply_mask, CNPJ_MASK};
use cadastro::{format_cep, format_document, format_phone, DocumentKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("12345678909", "123.456.789-09")]
#[case("123.456.789-09", "123.456.789-09")]
#[case("", "")]
#[case("1", "1")]
#[case("123", "123")]
#[case("1234", "123.4")]
#[case("1234567", "123.456.7")]
#[case("1234567890", "123.456.789-0")]
#[case("123456789091234", "123.456.789-09")]
fn test_cpf_mask(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_document(input, DocumentKind::Cpf), expected);
}

#[rstest]
#[case("11222333000181", "11.222.333/0001-81")]
#[case("11", "11")]
#[case("112", "11.2")]
#[case("11222333", "11.222.333")]
#[case("112223330", "11.222.333/0")]
#[case("1122233300018", "11.222.333/0001-8")]
fn test_cnpj_mask(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_document(input, DocumentKind::Cnpj), expected);
}

#[rstest]
#[case("11999999999", "(11) 99999-9999")]
#[case("1133334444", "(11) 3333-4444")]
#[case("(11) 3333-4444", "(11) 3333-4444")]
// Incomplete or overlong numbers pass through untouched
#[case("119999", "119999")]
#[case("119999999999", "119999999999")]
#[case("", "")]
fn test_phone_mask(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_phone(input), expected);
}

#[rstest]
#[case("01310100", "01310-100")]
#[case("01310-100", "01310-100")]
#[case("0131", "0131")]
#[case("013101", "01310-1")]
#[case("0131010099", "01310-100")]
fn test_cep_mask(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_cep(input), expected);
}

#[test]
fn test_mask_does_not_validate() {
    // Formatting an invalid CNPJ still produces the layout
    assert_eq!(
        format_document("00000000000000", DocumentKind::Cnpj),
        "00.000.000/0000-00"
    );
}

#[test]
fn test_apply_mask_is_prefix_of_full_format() {
    let full = apply_mask("11222333000181", CNPJ_MASK);
    for n in 0..=14 {
        let partial = apply_mask(&"11222333000181"[..n], CNPJ_MASK);
        assert!(
            full.starts_with(&partial),
            "{:?} is not a prefix of {:?}",
            partial,
            full
        );
    }
}
