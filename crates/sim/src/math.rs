//! Fixed-point math on 18-decimal (WAD-scaled) quantities.
//!
//! All operations work on [`I256`] values interpreted as real numbers scaled
//! by 10^18, and the whole computation stays in integer space end to end: a
//! previewed rate must agree with the protocol's on-chain result to the last
//! unit, and any detour through native floats would drift from it.
//!
//! Division truncates toward zero, matching the EVM's `sdiv`. The
//! transcendental functions are ports of the canonical on-chain fixed-point
//! routines: [`exp_wad`] and [`ln_wad`] use base-2 range reduction followed
//! by a rational-polynomial evaluation in 2^96 basis and are bit-identical
//! to the reference for every input; [`sqrt_wad`] is the Babylonian integer
//! square root of the rescaled argument.
//!
//! # Example
//!
//! ```rust
//! use exactly_rs_sim::math::{exp_wad, ln_wad, WAD};
//! use alloy_primitives::I256;
//!
//! // e^0 = 1, e^1 = 2.718281828459045235
//! assert_eq!(exp_wad(I256::ZERO).unwrap(), WAD);
//! assert_eq!(exp_wad(WAD).unwrap().to_string(), "2718281828459045235");
//!
//! // ln rejects non-positive input instead of guessing
//! assert!(ln_wad(I256::ZERO).is_err());
//! ```

use alloy_primitives::{I256, U256};

use crate::error::MathError;

/// 10^18, the WAD fixed-point scale.
pub const WAD: I256 = pos(1_000_000_000_000_000_000);

/// 10^18 as an unsigned word, for the square-root rescaling step.
const WAD_UINT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// `exp_wad` underflows to zero at or below this input: ⌊ln(0.5e-18)·1e18⌋.
const EXP_INPUT_FLOOR: I256 = neg(42_139_678_854_452_767_551);

/// e^x no longer fits a signed 256-bit word from this input on:
/// ⌊(ln(2^255 - 1) - ln(1e18))·1e18⌋ + 1.
const EXP_INPUT_CEIL: I256 = pos(135_305_999_368_893_231_589);

/// 5^18, the odd factor of the 10^18 → 2^96 basis change (2^96/10^18 = 2^78/5^18).
const FIVE_POW_18: I256 = pos(3_814_697_265_625);

/// ln(2) in 2^96 basis.
const LN2_96: I256 = pos(54_916_777_467_707_473_351_141_471_128);

/// 2^95, the rounding bias for the range-reduction quotient.
const HALF_96: I256 = pos(39_614_081_257_132_168_796_771_975_168);

/// Combined scale factor for the exp result: s · 1e18/2^96 in 2^213 basis,
/// folded into a single shift together with the 2^k range-reduction term.
/// 3822833074963236453042738258902158003155416615667
const EXP_SCALE: U256 = U256::from_limbs([
    0xEE70_EF65_F997_8AF3,
    0x63C3_2E5C_2F6D_C192,
    0x2_9D9D_C385,
    0,
]);

/// Scale factor s·5e18·2^96 moving the ln mantissa result into 2^192 basis.
/// 1677202110996718588342820967067443963516166
const LN_SCALE: I256 = I256::from_raw(U256::from_limbs([
    0x5CEF_59F0_815A_5506,
    0xDAA0_D5F7_69DB_A191,
    0x1340,
    0,
]));

/// ln(2)·5e18·2^192, multiplied by the base-2 exponent of the argument.
/// 16597577552685614221487285958193947469193820559219878177908093499208371
const LN2_192: I256 = I256::from_raw(U256::from_limbs([
    0xD803_AE7B_6687_F2B3,
    0x7614_A3F7_5373_F047,
    0xB397_5AB3_EE5B_203A,
    0x267_A36C_0C95,
]));

/// ln(2^96/1e18)·5e18·2^192, the basis-change correction added at the end.
/// 600920179829731861736702779321621459595472258049074101567377883020018308
const LN_BASIS_OFFSET: I256 = I256::from_raw(U256::from_limbs([
    0xE802_8C72_B886_4284,
    0x356A_1B78_6300_8A5A,
    0x7177_EEBF_7CD3_70A3,
    0x5711_5E47_018C,
]));

/// Builds a positive `I256` constant from a decimal magnitude.
const fn pos(v: u128) -> I256 {
    I256::from_raw(U256::from_limbs([v as u64, (v >> 64) as u64, 0, 0]))
}

/// Builds a negative `I256` constant from a nonzero decimal magnitude.
const fn neg(v: u128) -> I256 {
    let m = v.wrapping_neg();
    I256::from_raw(U256::from_limbs([m as u64, (m >> 64) as u64, u64::MAX, u64::MAX]))
}

/// Converts a raw count or timestamp into a signed word.
pub(crate) fn from_u64(v: u64) -> I256 {
    I256::from_raw(U256::from(v))
}

/// Returns `x*y / 1e18`, truncated toward zero.
pub fn mul_wad(x: I256, y: I256) -> Result<I256, MathError> {
    let product = x.checked_mul(y).ok_or(MathError::Overflow)?;
    product.checked_div(WAD).ok_or(MathError::Overflow)
}

/// Returns `x*1e18 / y`, truncated toward zero.
pub fn div_wad(x: I256, y: I256) -> Result<I256, MathError> {
    if y.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let scaled = x.checked_mul(WAD).ok_or(MathError::Overflow)?;
    scaled.checked_div(y).ok_or(MathError::Overflow)
}

/// Returns the smaller of two values.
pub fn min(x: I256, y: I256) -> I256 {
    if x < y {
        x
    } else {
        y
    }
}

/// Returns the larger of two values.
pub fn max(x: I256, y: I256) -> I256 {
    if x > y {
        x
    } else {
        y
    }
}

/// Natural exponential of a WAD-scaled exponent.
///
/// Returns zero at or below the underflow floor (x ≈ -41.45, where the true
/// result rounds below one wei) and fails with [`MathError::Overflow`] once
/// e^x leaves the signed 256-bit range (x ≈ 135.31). In between, the input
/// is decomposed as `x = k·ln2 + r` with |r| ≤ ln(2)/2, e^r is evaluated
/// with a (6,7)-term rational polynomial in 2^96 basis, and the 2^k factor
/// is folded back in with a single shift.
pub fn exp_wad(x: I256) -> Result<I256, MathError> {
    if x <= EXP_INPUT_FLOOR {
        return Ok(I256::ZERO);
    }
    if x >= EXP_INPUT_CEIL {
        return Err(MathError::Overflow);
    }

    // 10^18 basis -> 2^96 basis for intermediate precision.
    let x = (x << 78) / FIVE_POW_18;

    // Range-reduce: x = k*ln2 + r, with k = round(x / ln2).
    let k = ((x << 96) / LN2_96 + HALF_96) >> 96;
    let r = x - k * LN2_96;

    // e^r via the rational approximation; p is monic, scaled later.
    let mut y = r + pos(1_346_386_616_545_796_478_920_950_773_328);
    y = ((y * r) >> 96) + pos(57_155_421_227_552_351_082_224_309_758_442);
    let mut p = y + r - pos(94_201_549_194_550_492_254_356_042_504_812);
    p = ((p * y) >> 96) + pos(28_719_021_644_029_726_153_956_944_680_412_240);
    p = p * r + (pos(4_385_272_521_454_847_904_659_076_985_693_276) << 96);

    // The denominator has no zeros in the reduced range; its roots are complex.
    let mut q = r - pos(2_855_989_394_907_223_263_936_484_059_900);
    q = ((q * r) >> 96) + pos(50_020_603_652_535_783_019_961_831_881_945);
    q = ((q * r) >> 96) - pos(533_845_033_583_426_703_283_633_433_725_380);
    q = ((q * r) >> 96) + pos(3_604_857_256_930_695_427_073_651_918_091_429);
    q = ((q * r) >> 96) - pos(14_423_608_567_350_463_180_887_372_962_807_573);
    q = ((q * r) >> 96) + pos(26_449_188_498_355_588_339_934_803_723_976_023);
    let ratio: I256 = p / q;

    // Scale by s, 2^k, and the 1e18/2^96 basis change all at once, from a
    // 2^213 intermediate basis so the shift is always non-negative.
    let shift = (pos(195) - k).into_raw().as_limbs()[0] as usize;
    Ok(I256::from_raw((ratio.into_raw() * EXP_SCALE) >> shift))
}

/// Natural logarithm of a WAD-scaled argument.
///
/// Fails with [`MathError::DomainError`] for non-positive input. The
/// argument is reduced by its bit length to a mantissa in [1, 2)·2^96,
/// evaluated with an (8,8)-term rational polynomial, and the k·ln2
/// contribution plus the basis-change correction are added back in 2^192
/// basis before the final scale-down. Truncates toward negative infinity,
/// like the reference.
pub fn ln_wad(x: I256) -> Result<I256, MathError> {
    if x <= I256::ZERO {
        return Err(MathError::DomainError);
    }
    let raw = x.into_raw();

    // k = log2(x) - 96 = 159 - leading_zeros; mantissa lands in [1, 2)*2^96.
    let zeros = raw.leading_zeros();
    let m = I256::from_raw((raw << zeros) >> 159);
    let k = if zeros <= 159 {
        pos((159 - zeros) as u128)
    } else {
        neg((zeros - 159) as u128)
    };

    // ln(m) via the rational approximation; p is monic, q monic by convention.
    let mut p = m + pos(3_273_285_459_638_523_848_632_254_066_296);
    p = ((p * m) >> 96) + pos(24_828_157_081_833_163_892_658_089_445_524);
    p = ((p * m) >> 96) + pos(43_456_485_725_739_037_958_740_375_743_393);
    p = ((p * m) >> 96) - pos(11_111_509_109_440_967_052_023_855_526_967);
    p = ((p * m) >> 96) - pos(45_023_709_667_254_063_763_336_534_515_857);
    p = ((p * m) >> 96) - pos(14_706_773_417_378_608_786_704_636_184_526);
    p = p * m - (pos(795_164_235_651_350_426_258_249_787_498) << 96);
    let mut q = m + pos(5_573_035_233_440_673_466_300_451_813_936);
    q = ((q * m) >> 96) + pos(71_694_874_799_317_883_764_090_561_454_958);
    q = ((q * m) >> 96) + pos(283_447_036_172_924_575_727_196_451_306_956);
    q = ((q * m) >> 96) + pos(401_686_690_394_027_663_651_624_208_769_553);
    q = ((q * m) >> 96) + pos(204_048_457_590_392_012_362_485_061_816_622);
    q = ((q * m) >> 96) + pos(31_853_899_698_501_571_402_653_359_427_138);
    q = ((q * m) >> 96) + pos(909_429_971_244_387_300_277_376_558_375);
    let mut r = p / q;

    // Scale to 2^192 basis, add k*ln2 and ln(2^96/1e18), then come back
    // down to the 10^18 basis.
    r = r * LN_SCALE;
    r = r + LN2_192 * k;
    r = r + LN_BASIS_OFFSET;
    Ok(r >> 174)
}

/// WAD-scaled square root: `floor(sqrt(x·1e18))`.
///
/// Fails with [`MathError::DomainError`] for negative input (the square
/// root lives in the unsigned domain; signed callers must guard) and with
/// [`MathError::Overflow`] if the rescaled argument exceeds the unsigned
/// 256-bit range.
pub fn sqrt_wad(x: I256) -> Result<I256, MathError> {
    if x.is_negative() {
        return Err(MathError::DomainError);
    }
    let scaled = x
        .into_raw()
        .checked_mul(WAD_UINT)
        .ok_or(MathError::Overflow)?;
    Ok(I256::from_raw(sqrt(scaled)))
}

/// Integer square root by Babylonian iteration, truncated.
fn sqrt(x: U256) -> U256 {
    if x.is_zero() {
        return U256::ZERO;
    }
    let mut z = (x >> 1) + U256::ONE;
    let mut y = x;
    while z < y {
        y = z;
        z = (x / z + z) >> 1;
    }
    y
}

/// Lossy conversion for display and assertions only; the computation path
/// never touches floats.
pub fn rate_to_f64(x: I256) -> f64 {
    x.to_string().parse::<f64>().unwrap_or_default() / 1e18
}
