use super::K256;
use super::core::HashState;
use super::schedule::Schedule;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// One compression round over the working registers `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
pub fn round(registers: [u32; 8], k: u32, w: u32) -> [u32; 8] {
    let [a, b, c, d, e, f, g, h] = registers;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);

    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Runs the 64 rounds for one block and folds the result into `state`.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut HashState, schedule: &Schedule) {
    let mut registers = state.words();

    for (&k, &w) in K256.iter().zip(schedule.words()) {
        registers = round(registers, k, w);
    }

    state.accumulate(registers);
}

/// Runs the 64 rounds for one block and folds the result into `state`.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut HashState, schedule: &Schedule) {
    let w = schedule.words();
    let mut registers = state.words();

    macro_rules! R {
        ($($i:expr),* $(,)?) => {
            $( registers = round(registers, K256[$i], w[$i]); )*
        };
    }

    R!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
    R!(16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31);
    R!(32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47);
    R!(48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63);

    state.accumulate(registers);
}
