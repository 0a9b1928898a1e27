use cryptal_sha256::hash::sha256::{H256_INIT, K256};

/// First `n` primes.
fn primes(n: usize) -> Vec<u64> {
    let mut out = Vec::with_capacity(n);
    let mut candidate = 2u64;

    while out.len() < n {
        if out.iter().take_while(|&&p| p * p <= candidate).all(|&p| candidate % p != 0) {
            out.push(candidate);
        }
        candidate += 1;
    }

    out
}

/// Largest `r` with `r^k <= x`, computed exactly on integers.
fn int_root(x: u128, k: u32) -> u128 {
    let mut lo = 0u128;
    let mut hi = 1u128 << (128 / k + 1);

    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match mid.checked_pow(k) {
            Some(v) if v <= x => lo = mid,
            _ => hi = mid - 1,
        }
    }

    lo
}

/// First 32 bits of the fractional part of the `k`-th root of `p`.
fn fractional_root_bits(p: u64, k: u32) -> u32 {
    // floor(p^(1/k) * 2^32) == int_root(p * 2^(32k), k)
    let scaled = (p as u128) << (32 * k);
    int_root(scaled, k) as u32
}

#[test]
fn initial_hash_values_verbatim() {
    assert_eq!(
        H256_INIT,
        [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
            0x5be0cd19,
        ]
    );
}

#[test]
fn round_constants_verbatim() {
    let expected: [u32; 64] = [
        0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4,
        0xab1c5ed5, 0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe,
        0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f,
        0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
        0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc,
        0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b,
        0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116,
        0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
        0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
        0xc67178f2,
    ];

    assert_eq!(K256, expected);
}

#[test]
fn initial_hash_values_from_square_roots() {
    let derived: Vec<u32> = primes(8)
        .into_iter()
        .map(|p| fractional_root_bits(p, 2))
        .collect();

    assert_eq!(derived, H256_INIT);
}

#[test]
fn round_constants_from_cube_roots() {
    let derived: Vec<u32> = primes(64)
        .into_iter()
        .map(|p| fractional_root_bits(p, 3))
        .collect();

    assert_eq!(derived, K256);
}
