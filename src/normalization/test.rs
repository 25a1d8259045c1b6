use crate::document::DocumentKind;
use crate::error::{DocumentError, StructuralReason};
use crate::normalization::{CnpjNormalizer, CpfNormalizer, Normalizer};

#[test]
fn cpf_clear_keeps_only_digits() {
    let test_cases = vec![
        ("012.345.678-90", "01234567890"),
        ("01234567890", "01234567890"),
        (" 012 345 678 90 ", "01234567890"),
        ("abc1x2", "12"),
        ("123", "123"),
        ("１２３", ""),
    ];
    for (input, expected) in test_cases {
        assert_eq!(CpfNormalizer.clear(input).unwrap(), expected, "input: {:?}", input);
    }
}

#[test]
fn cnpj_clear_keeps_letters_and_digits_with_case() {
    let test_cases = vec![
        ("12.345.678/0001-95", "12345678000195"),
        ("12.abc.345/01de-35", "12abc34501de35"),
        ("&12&.&345&", "12345"),
        ("ÀñôΑβω", ""),
    ];
    for (input, expected) in test_cases {
        assert_eq!(CnpjNormalizer.clear(input).unwrap(), expected, "input: {:?}", input);
    }
}

#[test]
fn clear_rejects_blank_input() {
    for input in ["", "   ", "\t\n"] {
        assert_eq!(
            CpfNormalizer.clear(input),
            Err(DocumentError::InputMissing {
                kind: DocumentKind::Cpf
            })
        );
        assert_eq!(
            CnpjNormalizer.normalize(input),
            Err(DocumentError::InputMissing {
                kind: DocumentKind::Cnpj
            })
        );
    }
}

#[test]
fn cpf_normalize() {
    assert_eq!(
        CpfNormalizer.normalize("012.345.678-90").unwrap(),
        "01234567890"
    );
    assert_eq!(
        CpfNormalizer.normalize("123"),
        Err(DocumentError::StructuralInvalid {
            kind: DocumentKind::Cpf,
            reason: StructuralReason::Length {
                expected: 11,
                actual: 3
            },
        })
    );
    assert!(CpfNormalizer.normalize("012.345.678-901").is_err());
}

#[test]
fn cnpj_normalize_upper_cases() {
    assert_eq!(
        CnpjNormalizer.normalize("12.abc.345/01de-35").unwrap(),
        "12ABC34501DE35"
    );
    assert_eq!(
        CnpjNormalizer
            .normalize("&12&.&345&.&678&/&0001&-&95&")
            .unwrap(),
        "12345678000195"
    );
}

#[test]
fn cnpj_normalize_wrong_length() {
    let err = CnpjNormalizer.normalize("123").unwrap_err();
    assert_eq!(
        err.structural_reason(),
        Some(&StructuralReason::Length {
            expected: 14,
            actual: 3
        })
    );
    assert_eq!(err.kind(), DocumentKind::Cnpj);
}

#[test]
fn normalizers_are_usable_as_trait_objects() {
    let normalizers: Vec<Box<dyn Normalizer>> = vec![Box::new(CpfNormalizer), Box::new(CnpjNormalizer)];
    for normalizer in normalizers {
        let input = "1".repeat(normalizer.kind().length());
        assert_eq!(normalizer.normalize(&input).unwrap(), input);
    }
}
