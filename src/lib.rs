//! Character-class password generator.
//!
//! The core is [`pass::generate`]: it takes an immutable
//! [`pass::GenerationConfig`] and any [`rand::Rng`], guarantees one character
//! from every selected class and shuffles the result. The remaining modules
//! are the terminal application built around it.
//!
//! ```
//! use rand::SeedableRng;
//! use passnote::pass::{GenerationConfig, generate};
//!
//! let config = GenerationConfig { include_special: false, ..GenerationConfig::new(8) };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let password = generate(&config, &mut rng).unwrap();
//! assert_eq!(password.len(), 8);
//! ```

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod locale;
pub mod pass;
pub mod record;
pub mod settings;
pub mod terminal;
pub mod tui;
