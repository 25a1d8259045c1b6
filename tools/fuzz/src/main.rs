use afl::fuzz;
use br_documents::{cnpj, cpf, CnpjGenerator, CnpjType, CpfGenerator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_cnpj_type(rng: &mut StdRng) -> CnpjType {
    if rng.gen_bool(0.5) {
        CnpjType::Numeric
    } else {
        CnpjType::Alphanumeric
    }
}

/// Overwrite one random position of a valid document with a random char.
fn mutate(document: &str, rng: &mut StdRng) -> String {
    let mut chars: Vec<char> = document.chars().collect();
    let idx = rng.gen_range(0..chars.len());
    chars[idx] = char::from(rng.gen_range(b'0'..=b'Z'));
    chars.into_iter().collect()
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    // arbitrary input never panics, and the outcomes agree with each other
    let cpf_valid = cpf::is_valid(input);
    assert_eq!(cpf_valid, cpf::validate(input).is_ok());
    if cpf_valid {
        let normalized = cpf::normalize(input).unwrap();
        assert!(cpf::is_valid(&cpf::format(&normalized).unwrap()));
    }
    if let Ok(cleared) = cpf::clear(input) {
        assert!(cleared.chars().all(|c| c.is_ascii_digit()));
    }

    let cnpj_valid = cnpj::is_valid(input);
    assert_eq!(cnpj_valid, cnpj::validate(input).is_ok());
    if cnpj_valid {
        let normalized = cnpj::normalize(input).unwrap();
        assert_eq!(cnpj::format(&normalized).unwrap(), cnpj::format(input).unwrap());
        assert!(cnpj::is_valid_as(input, CnpjType::Alphanumeric));
    }
    let _ = cnpj::classify(input);

    // generated documents always pass, and single-char mutations never panic
    let cpf = CpfGenerator.generate_with(&mut rng).unwrap();
    let _ = cpf::validate(&mutate(&cpf, &mut rng));

    let cnpj_type = gen_cnpj_type(&mut rng);
    let cnpj = CnpjGenerator.generate_with(cnpj_type, &mut rng).unwrap();
    assert!(cnpj::is_valid_as(&cnpj, cnpj_type));
    let mutated = mutate(&cnpj, &mut rng);
    #[cfg(feature = "manual_test")]
    {
        println!("Generated: {:?}, mutated: {:?}", cnpj, mutated);
    }
    let _ = cnpj::validate(&mutated);
}
