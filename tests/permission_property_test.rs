//! Property-based tests for the permission reducer and the validators
//!
//! Uses proptest to generate random selections and document numbers and
//! verify the algebraic laws the editor relies on.

use cadastro::{
    apply_template, apply_template_ids, category_coverage, check_digits, format_cep,
    format_document, is_valid_cnpj, is_valid_cpf, toggle_category, toggle_one, Coverage,
    DocumentKind, PermissionSet, Template,
};
use proptest::prelude::*;

fn any_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("eventos.view".to_string()),
        Just("eventos.edit".to_string()),
        Just("clientes.view".to_string()),
        Just("financeiro.view".to_string()),
        Just("contratos.sign".to_string()),
        "[a-z]{1,6}\\.[a-z]{1,6}",
    ]
}

fn any_selection() -> impl Strategy<Value = PermissionSet> {
    prop::collection::btree_set(any_id(), 0..8)
}

fn any_category() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any_id(), 0..5)
}

proptest! {
    #[test]
    fn test_toggle_one_twice_is_identity(selected in any_selection(), id in any_id()) {
        let once = toggle_one(&selected, &id);
        prop_assert_ne!(&once, &selected);
        prop_assert_eq!(toggle_one(&once, &id), selected);
    }

    #[test]
    fn test_toggle_category_round_trip_from_full(selected in any_selection(), category in any_category()) {
        // Start from a superset of the category
        let mut full = selected.clone();
        full.extend(category.iter().cloned());

        let cleared = toggle_category(&full, &category);
        for id in &category {
            prop_assert!(!cleared.contains(id));
        }
        prop_assert_eq!(toggle_category(&cleared, &category), full);
    }

    #[test]
    fn test_toggle_category_never_mixes(selected in any_selection(), category in any_category()) {
        let next = toggle_category(&selected, &category);
        let coverage = category_coverage(&next, &category);
        prop_assert!(coverage != Coverage::Partial);
    }

    #[test]
    fn test_toggle_category_leaves_other_ids(selected in any_selection(), category in any_category()) {
        let next = toggle_category(&selected, &category);
        for id in selected.iter().filter(|id| !category.contains(id)) {
            prop_assert!(next.contains(id));
        }
        for id in next.iter().filter(|id| !category.contains(id)) {
            prop_assert!(selected.contains(id));
        }
    }

    #[test]
    fn test_empty_legacy_template_grants_catalog(selected in any_selection(), catalog in any_category()) {
        let empty: [&str; 0] = [];
        let expected: PermissionSet = catalog.iter().cloned().collect();
        prop_assert_eq!(apply_template_ids(&selected, &empty, &catalog), expected);
    }

    #[test]
    fn test_nonempty_template_replaces(
        selected in any_selection(),
        template in prop::collection::vec(any_id(), 1..5),
        catalog in any_category(),
    ) {
        let expected: PermissionSet = template.iter().cloned().collect();
        prop_assert_eq!(apply_template_ids(&selected, &template, &catalog), expected.clone());
        prop_assert_eq!(
            apply_template(&selected, &Template::Explicit(template.clone()), &catalog),
            expected
        );
    }

    #[test]
    fn test_cpf_with_computed_check_digits_is_valid(base in "[0-9]{9}") {
        let [d1, d2] = check_digits(DocumentKind::Cpf, &base).unwrap();
        let cpf = format!("{}{}{}", base, d1, d2);
        let repdigit = cpf.chars().all(|c| Some(c) == cpf.chars().next());
        prop_assert_eq!(is_valid_cpf(&cpf), !repdigit);
        // Punctuation does not change the verdict
        prop_assert_eq!(is_valid_cpf(&format_document(&cpf, DocumentKind::Cpf)), !repdigit);
    }

    #[test]
    fn test_cnpj_with_computed_check_digits_is_valid(base in "[0-9]{12}") {
        let [d1, d2] = check_digits(DocumentKind::Cnpj, &base).unwrap();
        let cnpj = format!("{}{}{}", base, d1, d2);
        let repdigit = cnpj.chars().all(|c| Some(c) == cnpj.chars().next());
        prop_assert_eq!(is_valid_cnpj(&cnpj), !repdigit);
    }

    #[test]
    fn test_wrong_first_check_digit_is_rejected(base in "[0-9]{9}", bump in 1u8..10) {
        let [d1, d2] = check_digits(DocumentKind::Cpf, &base).unwrap();
        let wrong = (d1 + bump) % 10;
        let tampered = format!("{}{}{}", base, wrong, d2);
        prop_assert!(!is_valid_cpf(&tampered));
    }

    #[test]
    fn test_validators_are_total(input in ".*") {
        // Must not panic on arbitrary text
        let _ = is_valid_cpf(&input);
        let _ = is_valid_cnpj(&input);
        let _ = format_cep(&input);
    }

    #[test]
    fn test_wrong_length_is_never_valid(digits in "[0-9]{0,20}") {
        if digits.len() != 11 {
            prop_assert!(!is_valid_cpf(&digits));
        }
        if digits.len() != 14 {
            prop_assert!(!is_valid_cnpj(&digits));
        }
    }
}
