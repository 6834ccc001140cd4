//! Password generation.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::Zeroize;

use super::charset::CharacterPool;
use super::{GenerationConfig, Password};
use crate::error::ConfigError;

/// Generate a single password.
///
/// One character is drawn from each selected class, the rest are drawn with
/// replacement from the combined pool, and the buffer is shuffled so the
/// guaranteed characters land at uniformly random positions.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, ConfigError> {
    config.validate()?;
    let pool = CharacterPool::build(config);
    build(config, &pool, rng)
}

/// Generate `count` passwords from the same config, validating once.
pub fn generate_batch<R: Rng + ?Sized>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, ConfigError> {
    config.validate()?;
    let pool = CharacterPool::build(config);
    log::debug!("generating {count} password(s) from a pool of {} chars", pool.len());
    (0..count).map(|_| build(config, &pool, rng)).collect()
}

fn build<R: Rng + ?Sized>(
    config: &GenerationConfig,
    pool: &CharacterPool,
    rng: &mut R,
) -> Result<Password, ConfigError> {
    let classes = config.selected_classes();
    let remaining = config.length.checked_sub(classes.len()).ok_or(
        ConfigError::LengthTooShortForSelectedClasses {
            length: config.length,
            classes: classes.len(),
        },
    )?;

    let mut buf: Vec<char> = Vec::with_capacity(config.length);

    for class in &classes {
        let mut alphabet = class.alphabet(config);
        if let Some(&c) = alphabet.choose(rng) {
            buf.push(c);
        }
        alphabet.zeroize();
    }

    let chars = pool.as_slice();
    buf.extend((0..remaining).filter_map(|_| chars.choose(rng).copied()));

    buf.shuffle(rng);

    let password: String = buf.iter().collect();
    buf.zeroize();
    Ok(Password::new(password))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset::CharClass;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn config(length: usize, lower: bool, upper: bool, digits: bool, special: Option<&str>) -> GenerationConfig {
        GenerationConfig {
            length,
            include_lower: lower,
            include_upper: upper,
            include_digits: digits,
            include_special: special.is_some(),
            special_charset: special.unwrap_or_default().to_string(),
        }
    }

    fn all_configs() -> Vec<GenerationConfig> {
        let mut out = Vec::new();
        for mask in 1u8..16 {
            for length in [4, 5, 8, 17, 50] {
                out.push(config(
                    length,
                    mask & 1 != 0,
                    mask & 2 != 0,
                    mask & 4 != 0,
                    (mask & 8 != 0).then_some("!@#$%^&*"),
                ));
            }
        }
        out
    }

    #[test]
    fn build_rejects_length_below_class_count() {
        let config = config(2, true, true, true, None);
        let pool = CharacterPool::build(&config);
        assert_eq!(
            build(&config, &pool, &mut rng()),
            Err(ConfigError::LengthTooShortForSelectedClasses {
                length: 2,
                classes: 3
            })
        );
    }

    #[test]
    fn output_has_requested_length() {
        let mut rng = rng();
        for config in all_configs() {
            for _ in 0..20 {
                let pass = generate(&config, &mut rng).unwrap();
                assert_eq!(pass.as_str().chars().count(), config.length);
            }
        }
    }

    #[test]
    fn every_selected_class_is_present() {
        let mut rng = rng();
        for config in all_configs() {
            for _ in 0..50 {
                let pass = generate(&config, &mut rng).unwrap();
                for class in config.selected_classes() {
                    assert!(
                        pass.as_str().chars().any(|c| class.contains(&config, c)),
                        "{:?} missing {} in {:?}",
                        config,
                        class.label(),
                        pass.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn no_unselected_characters_leak() {
        let mut rng = rng();
        for config in all_configs() {
            for _ in 0..50 {
                let pass = generate(&config, &mut rng).unwrap();
                for c in pass.as_str().chars() {
                    assert!(
                        config.selected_classes().iter().any(|class| class.contains(&config, c)),
                        "{c:?} leaked into {:?}",
                        config
                    );
                }
            }
        }
    }

    #[test]
    fn length_boundaries() {
        let mut rng = rng();
        for (length, ok) in [(3, false), (4, true), (50, true), (51, false), (0, false)] {
            let result = generate(&config(length, true, true, true, None), &mut rng);
            if ok {
                assert_eq!(result.unwrap().len(), length);
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    ConfigError::InvalidLength(length.to_string())
                );
            }
        }
    }

    #[test]
    fn no_class_selected() {
        let result = generate(&config(12, false, false, false, None), &mut rng());
        assert_eq!(result.unwrap_err(), ConfigError::NoCharacterClassSelected);
    }

    #[test]
    fn blank_custom_charset() {
        let result = generate(&config(12, true, false, false, Some("   ")), &mut rng());
        assert_eq!(result.unwrap_err(), ConfigError::EmptySpecialCharset);
    }

    #[test]
    fn alphanumeric_example() {
        let config = config(8, true, true, true, None);
        let mut rng = rng();
        for _ in 0..200 {
            let pass = generate(&config, &mut rng).unwrap();
            let s = pass.as_str();
            assert_eq!(s.len(), 8);
            assert!(s.chars().any(|c| c.is_ascii_lowercase()));
            assert!(s.chars().any(|c| c.is_ascii_uppercase()));
            assert!(s.chars().any(|c| c.is_ascii_digit()));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn special_only_example() {
        let config = config(4, false, false, false, Some("!@#"));
        let mut rng = rng();
        for _ in 0..200 {
            let pass = generate(&config, &mut rng).unwrap();
            assert_eq!(pass.len(), 4);
            assert!(pass.as_str().chars().all(|c| "!@#".contains(c)));
        }
    }

    #[test]
    fn multibyte_custom_charset_counts_chars() {
        let config = config(6, false, false, false, Some("αβγ"));
        let pass = generate(&config, &mut rng()).unwrap();
        assert_eq!(pass.len(), 6);
        assert!(pass.as_str().chars().all(|c| "αβγ".contains(c)));
    }

    #[test]
    fn character_frequency_is_roughly_uniform() {
        let config = config(20, true, false, false, None);
        let mut rng = rng();
        let mut counts = [0usize; 26];
        let trials = 5_000;
        for _ in 0..trials {
            for c in generate(&config, &mut rng).unwrap().as_str().chars() {
                counts[(c as u8 - b'a') as usize] += 1;
            }
        }
        let expected = (trials * 20) as f64 / 26.0;
        for (i, &n) in counts.iter().enumerate() {
            let deviation = (n as f64 - expected).abs() / expected;
            assert!(deviation < 0.1, "{} drawn {n} times, expected ~{expected:.0}", (b'a' + i as u8) as char);
        }
    }

    #[test]
    fn guaranteed_characters_have_no_positional_bias() {
        // Lowercase pool is 26 of 36 chars; digits only get a guaranteed slot
        // plus their share of the fill, so an unshuffled buffer would pile
        // digits at a fixed index.
        let config = config(6, true, false, true, None);
        let mut rng = rng();
        let mut digits_at = [0usize; 6];
        let trials = 20_000;
        for _ in 0..trials {
            for (i, c) in generate(&config, &mut rng).unwrap().as_str().chars().enumerate() {
                if CharClass::Digit.contains(&config, c) {
                    digits_at[i] += 1;
                }
            }
        }
        let mean = digits_at.iter().sum::<usize>() as f64 / digits_at.len() as f64;
        for &n in &digits_at {
            assert!((n as f64 - mean).abs() / mean < 0.08, "{digits_at:?}");
        }
    }

    #[test]
    fn batch_validates_once_and_returns_count() {
        let mut rng = rng();
        let batch = generate_batch(&config(10, true, true, false, None), 7, &mut rng).unwrap();
        assert_eq!(batch.len(), 7);
        assert!(batch.iter().all(|p| p.len() == 10));

        let err = generate_batch(&config(10, false, false, false, None), 7, &mut rng);
        assert_eq!(err.unwrap_err(), ConfigError::NoCharacterClassSelected);
    }

    #[test]
    fn same_seed_same_password() {
        let config = config(16, true, true, true, Some("!?"));
        let a = generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }
}
