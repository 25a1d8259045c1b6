use br_documents::{cnpj, cpf, CnpjGenerator, CnpjType, CpfGenerator, StructuralReason};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cnpj_type_strategy() -> impl Strategy<Value = CnpjType> {
    prop_oneof![Just(CnpjType::Numeric), Just(CnpjType::Alphanumeric)]
}

// Arbitrary input never panics
proptest! {
    #[test]
    fn cpf_operations_never_panic(input in "\\PC*") {
        let _ = cpf::is_valid(&input);
        let _ = cpf::validate(&input);
        let _ = cpf::clear(&input);
        let _ = cpf::normalize(&input);
        let _ = cpf::format(&input);
    }

    #[test]
    fn cnpj_operations_never_panic(input in "\\PC*", cnpj_type in cnpj_type_strategy()) {
        let _ = cnpj::is_valid(&input);
        let _ = cnpj::validate_as(&input, cnpj_type);
        let _ = cnpj::clear(&input);
        let _ = cnpj::normalize(&input);
        let _ = cnpj::format(&input);
        let _ = cnpj::classify(&input);
    }

    #[test]
    fn is_valid_agrees_with_validate(input in "[0-9.\\-/A-Za-z ]{0,20}") {
        prop_assert_eq!(cpf::is_valid(&input), cpf::validate(&input).is_ok());
        prop_assert_eq!(cnpj::is_valid(&input), cnpj::validate(&input).is_ok());
    }
}

// Generation
proptest! {
    #[test]
    fn generated_cpfs_are_valid(seed in any::<u64>()) {
        let generated = CpfGenerator.generate_with(&mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(cpf::is_valid(&generated));
        prop_assert!(cpf::is_valid(&cpf::format(&generated).unwrap()));
    }

    #[test]
    fn generated_cnpjs_are_valid(seed in any::<u64>(), cnpj_type in cnpj_type_strategy()) {
        let generated = CnpjGenerator
            .generate_with(cnpj_type, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(cnpj::is_valid_as(&generated, cnpj_type));
        prop_assert!(cnpj::is_valid(&cnpj::format(&generated).unwrap()));
        if generated.chars().any(|c| c.is_ascii_uppercase()) {
            prop_assert_eq!(cnpj::classify(&generated), Ok(CnpjType::Alphanumeric));
        } else {
            prop_assert_eq!(cnpj::classify(&generated), Ok(CnpjType::Numeric));
        }
    }
}

// Normalization and formatting
proptest! {
    #[test]
    fn cpf_format_round_trips(digits in "[0-9]{11}", noise in "[ .\\-/&]{0,3}") {
        let raw = format!("{}{}{}", noise, digits, noise);
        let normalized = cpf::normalize(&raw).unwrap();
        prop_assert_eq!(&normalized, &digits);
        prop_assert_eq!(cpf::normalize(&cpf::format(&raw).unwrap()).unwrap(), normalized);
    }

    #[test]
    fn cnpj_format_round_trips(chars in "[0-9A-Za-z]{12}[0-9]{2}") {
        let normalized = cnpj::normalize(&chars).unwrap();
        prop_assert_eq!(&normalized, &chars.to_ascii_uppercase());
        let formatted = cnpj::format(&normalized).unwrap();
        prop_assert_eq!(formatted.len(), 18);
        prop_assert_eq!(cnpj::normalize(&formatted).unwrap(), normalized);
    }

    #[test]
    fn clear_keeps_the_permitted_subsequence(input in "[0-9a-zA-Z.\\-/ &]{1,30}") {
        prop_assume!(!input.trim().is_empty());
        let expected_cpf: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let expected_cnpj: String = input.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        prop_assert_eq!(cpf::clear(&input).unwrap(), expected_cpf);
        prop_assert_eq!(cnpj::clear(&input).unwrap(), expected_cnpj);
    }

    #[test]
    fn blank_input_is_missing(input in "[ \\t\\n]{0,10}") {
        prop_assert!(cpf::clear(&input).unwrap_err().is_contract_violation());
        prop_assert!(cnpj::normalize(&input).unwrap_err().is_contract_violation());
        prop_assert!(!cpf::is_valid(&input));
        prop_assert!(!cnpj::is_valid(&input));
    }
}

// Repeated characters
proptest! {
    #[test]
    fn repeated_characters_are_rejected(c in "[0-9]") {
        let cpf_err = cpf::validate(&c.repeat(11)).unwrap_err();
        prop_assert_eq!(
            cpf_err.structural_reason(),
            Some(&StructuralReason::RepeatedCharacters)
        );
        let cnpj_err = cnpj::validate(&c.repeat(14)).unwrap_err();
        prop_assert_eq!(
            cnpj_err.structural_reason(),
            Some(&StructuralReason::RepeatedCharacters)
        );
    }
}
