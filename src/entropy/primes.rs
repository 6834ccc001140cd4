/// 64-bit primes used as state multipliers, one picked per step.
pub const PRIMES: [u64; 16] = [
    0x9e3779b97f4a7c55,
    0xbf58476d1ce4e5ff,
    0x94d049bb13311243,
    0xd6e8feb86659fd99,
    0xc2b2ae3d27d4eb4f,
    0x165667b19e3779f9,
    0x27d4eb2f165667c5,
    0xff51afd7ed558ccd,
    0xc4ceb9fe1a85eccd,
    0x87c37b911142540d,
    0x4cf5ad43274593b9,
    0xa0761d6478bd642f,
    0xe7037ed1a0b428db,
    0x8ebc6af09c88c6e3,
    0x589965cc75374cc3,
    0x1d8e4e27c47d124f,
];
