//! RNG test binary - outputs random bytes to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test          # Cycle-counter generator (what `passnote --hw` uses)
//!   ./rng_test --os     # OS-seeded default generator
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};

use passnote::entropy::Source;
use rand::RngCore;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: rng_test [OPTIONS]");
        eprintln!();
        eprintln!("Outputs random bytes to stdout for statistical testing.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --os        Use the OS-seeded generator instead of the cycle counter");
        eprintln!("  -h, --help  Show this help");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  rng_test | dieharder -a -g 200");
        eprintln!("  rng_test --os | RNG_test stdin -tlmax 1TB");
        std::process::exit(0);
    }

    let source = if args.iter().any(|a| a == "--os") {
        Source::Os
    } else {
        Source::Hardware
    };
    eprintln!("source: {}", source.name());

    let mut rng = source.rng();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; 8192];

    loop {
        rng.fill_bytes(&mut buf);
        if out.write_all(&buf).is_err() {
            break;
        }
    }
}
