//! Primality testing and random prime generation.

use crate::{
    Digit, Error, MAX_PRIME_BITS, MIN_PRIME_BITS, Result,
    int::BigInt,
    rand::RandomSource,
};
use core::ops::{BitOr, BitOrAssign};
use tracing::{debug, trace, warn};

/// Number of entries in [`SMALL_PRIMES`] and the upper bound on
/// Miller-Rabin rounds.
pub const FP_PRIME_SIZE: usize = 256;

/// Default bit length for generated primes.
pub const DEFAULT_PRIME_BITS: usize = 1024;

/// Default number of Miller-Rabin rounds.
pub const DEFAULT_MR_ROUNDS: usize = 25;

/// The first 256 primes, used for trial division and as Miller-Rabin bases.
pub const SMALL_PRIMES: [Digit; FP_PRIME_SIZE] = [
    0x0002, 0x0003, 0x0005, 0x0007, 0x000B, 0x000D, 0x0011, 0x0013, 0x0017, 0x001D, 0x001F, 0x0025,
    0x0029, 0x002B, 0x002F, 0x0035, 0x003B, 0x003D, 0x0043, 0x0047, 0x0049, 0x004F, 0x0053, 0x0059,
    0x0061, 0x0065, 0x0067, 0x006B, 0x006D, 0x0071, 0x007F, 0x0083, 0x0089, 0x008B, 0x0095, 0x0097,
    0x009D, 0x00A3, 0x00A7, 0x00AD, 0x00B3, 0x00B5, 0x00BF, 0x00C1, 0x00C5, 0x00C7, 0x00D3, 0x00DF,
    0x00E3, 0x00E5, 0x00E9, 0x00EF, 0x00F1, 0x00FB, 0x0101, 0x0107, 0x010D, 0x010F, 0x0115, 0x0119,
    0x011B, 0x0125, 0x0133, 0x0137, 0x0139, 0x013D, 0x014B, 0x0151, 0x015B, 0x015D, 0x0161, 0x0167,
    0x016F, 0x0175, 0x017B, 0x017F, 0x0185, 0x018D, 0x0191, 0x0199, 0x01A3, 0x01A5, 0x01AF, 0x01B1,
    0x01B7, 0x01BB, 0x01C1, 0x01C9, 0x01CD, 0x01CF, 0x01D3, 0x01DF, 0x01E7, 0x01EB, 0x01F3, 0x01F7,
    0x01FD, 0x0209, 0x020B, 0x021D, 0x0223, 0x022D, 0x0233, 0x0239, 0x023B, 0x0241, 0x024B, 0x0251,
    0x0257, 0x0259, 0x025F, 0x0265, 0x0269, 0x026B, 0x0277, 0x0281, 0x0283, 0x0287, 0x028D, 0x0293,
    0x0295, 0x02A1, 0x02A5, 0x02AB, 0x02B3, 0x02BD, 0x02C5, 0x02CF, 0x02D7, 0x02DD, 0x02E3, 0x02E7,
    0x02EF, 0x02F5, 0x02F9, 0x0301, 0x0305, 0x0313, 0x031D, 0x0329, 0x032B, 0x0335, 0x0337, 0x033B,
    0x033D, 0x0347, 0x0355, 0x0359, 0x035B, 0x035F, 0x036D, 0x0371, 0x0373, 0x0377, 0x038B, 0x038F,
    0x0397, 0x03A1, 0x03A9, 0x03AD, 0x03B3, 0x03B9, 0x03C7, 0x03CB, 0x03D1, 0x03D7, 0x03DF, 0x03E5,
    0x03F1, 0x03F5, 0x03FB, 0x03FD, 0x0407, 0x0409, 0x040F, 0x0419, 0x041B, 0x0425, 0x0427, 0x042D,
    0x043F, 0x0443, 0x0445, 0x0449, 0x044F, 0x0455, 0x045D, 0x0463, 0x0469, 0x047F, 0x0481, 0x048B,
    0x0493, 0x049D, 0x04A3, 0x04A9, 0x04B1, 0x04BD, 0x04C1, 0x04C7, 0x04CD, 0x04CF, 0x04D5, 0x04E1,
    0x04EB, 0x04FD, 0x04FF, 0x0503, 0x0509, 0x050B, 0x0511, 0x0515, 0x0517, 0x051B, 0x0527, 0x0529,
    0x052F, 0x0551, 0x0557, 0x055D, 0x0565, 0x0577, 0x0581, 0x058F, 0x0593, 0x0595, 0x0599, 0x059F,
    0x05A7, 0x05AB, 0x05AD, 0x05B3, 0x05BF, 0x05C9, 0x05CB, 0x05CF, 0x05D1, 0x05D5, 0x05DB, 0x05E7,
    0x05F3, 0x05FB, 0x0607, 0x060D, 0x0611, 0x0617, 0x061F, 0x0623, 0x062B, 0x062F, 0x063D, 0x0641,
    0x0647, 0x0649, 0x064D, 0x0653,
];

/// Options for [`BigInt::generate_prime_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimeFlags(u8);

impl PrimeFlags {
    /// No constraints beyond the bit length.
    pub const NONE: Self = Self(0);
    /// Blum-Blum-Shub style prime, `p ≡ 3 (mod 4)`.
    pub const BBS: Self = Self(0x01);
    /// Safe prime: `(p - 1) / 2` is prime as well. Implies [`PrimeFlags::BBS`].
    pub const SAFE: Self = Self(0x02);
    /// Force the second most significant bit to zero.
    pub const MSB2_OFF: Self = Self(0x04);
    /// Force the second most significant bit to one.
    pub const MSB2_ON: Self = Self(0x08);

    /// Are all flags in `other` set?
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PrimeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PrimeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BigInt {
    /// One Miller-Rabin round for the odd value `self > 2` to the given base.
    ///
    /// Returns `Ok(false)` when `base` proves `self` composite, and also for
    /// a base of one or less. Even or tiny candidates are
    /// [`Error::InvalidArgument`].
    pub fn miller_rabin(&self, base: &Self) -> Result<bool> {
        if self.is_even() || self.cmp_d(2) != core::cmp::Ordering::Greater {
            return Err(Error::InvalidArgument);
        }
        if base.cmp_d(1) != core::cmp::Ordering::Greater {
            return Ok(false);
        }

        let n1 = self.sub_d(1)?;
        let s = n1.cnt_lsb();
        let (r, _) = n1.div_2d(s);

        let mut y = base.exptmod(&r, self)?;
        if y != Self::ONE && y != n1 {
            let mut j = 1;
            while j < s && y != n1 {
                y = y.sqrmod(self)?;
                if y == Self::ONE {
                    return Ok(false);
                }
                j += 1;
            }
            if y != n1 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Probabilistic primality test.
    ///
    /// Trial division by [`SMALL_PRIMES`] is followed by `rounds` Miller-Rabin
    /// rounds using the first `rounds` small primes as bases. `rounds` must
    /// lie in `1..=FP_PRIME_SIZE`; anything else answers `false`.
    pub fn is_prime(&self, rounds: usize) -> bool {
        if !(1..=FP_PRIME_SIZE).contains(&rounds) {
            return false;
        }
        if self.is_negative() || self.cmp_d(2) == core::cmp::Ordering::Less {
            return false;
        }

        if self.used == 1 && SMALL_PRIMES.binary_search(&self.dp[0]).is_ok() {
            return true;
        }
        for &p in &SMALL_PRIMES {
            if matches!(self.mod_d(p), Ok(0)) {
                return false;
            }
        }

        SMALL_PRIMES[..rounds]
            .iter()
            .all(|&p| matches!(self.miller_rabin(&Self::from_u64(p)), Ok(true)))
    }

    /// Generate a random prime of exactly `bits` bits.
    ///
    /// `bits` must lie in `16..=4096`. One byte drawn from `rng` decides
    /// whether the second most significant bit is cleared or set; each
    /// candidate then consumes `ceil(bits / 8)` bytes. With `safe`, the
    /// result also satisfies "`(p - 1) / 2` is prime".
    pub fn generate_prime<R: RandomSource + ?Sized>(
        bits: usize,
        rounds: usize,
        safe: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if !(MIN_PRIME_BITS..=MAX_PRIME_BITS).contains(&bits) {
            return Err(Error::InvalidArgument);
        }

        let mut mode = [0u8];
        rng.fill_exact(&mut mode)?;
        let mut flags = if mode[0] & 1 == 1 {
            PrimeFlags::MSB2_OFF
        } else {
            PrimeFlags::MSB2_ON
        };
        if safe {
            flags |= PrimeFlags::SAFE;
        }

        let p = Self::generate_prime_with(bits, rounds, flags, rng)?;
        let actual = p.count_bits();
        if actual != bits {
            warn!(expected = bits, actual, "generated prime has the wrong size");
            return Err(Error::BitLengthMismatch {
                expected: bits,
                actual,
            });
        }
        Ok(p)
    }

    /// Search for a random prime of `bits` bits with explicit [`PrimeFlags`].
    ///
    /// `rounds` outside `1..=FP_PRIME_SIZE` or fewer than two bits is
    /// [`Error::PrimeGenerationFailed`]; more than `MAX_PRIME_BITS` bits, or a
    /// [`PrimeFlags::SAFE`] request below `MIN_PRIME_BITS` bits, is
    /// [`Error::InvalidArgument`].
    pub fn generate_prime_with<R: RandomSource + ?Sized>(
        bits: usize,
        rounds: usize,
        mut flags: PrimeFlags,
        rng: &mut R,
    ) -> Result<Self> {
        if !(1..=FP_PRIME_SIZE).contains(&rounds) || bits < 2 {
            return Err(Error::PrimeGenerationFailed);
        }
        if bits > MAX_PRIME_BITS {
            return Err(Error::InvalidArgument);
        }
        // some tiny sizes hold no safe prime at all
        if flags.contains(PrimeFlags::SAFE) && bits < MIN_PRIME_BITS {
            return Err(Error::InvalidArgument);
        }
        if flags.contains(PrimeFlags::SAFE) {
            flags |= PrimeFlags::BBS;
        }

        let len = bits.div_ceil(8);
        let mask_and = 0xffu8 >> ((8 - (bits & 7)) & 7);
        let top = 1u8 << ((bits - 1) & 7);

        // the second bit lands in the next byte when the top bit is alone in byte 0
        let msb2_offset = usize::from(bits & 7 == 1);
        let msb2 = 0x80u8 >> (9usize.wrapping_sub(bits) & 7);
        let (msb2_set, msb2_clear) = if flags.contains(PrimeFlags::MSB2_ON) {
            (msb2, 0)
        } else if flags.contains(PrimeFlags::MSB2_OFF) {
            (0, msb2)
        } else {
            (0, 0)
        };
        let lsb = if flags.contains(PrimeFlags::BBS) { 3 } else { 1 };

        debug!(bits, rounds, ?flags, "searching for prime");

        let mut buf = [0u8; MAX_PRIME_BITS / 8];
        let buf = &mut buf[..len];
        let mut candidates = 0usize;
        loop {
            candidates += 1;
            rng.fill_exact(buf)?;

            buf[0] &= mask_and;
            buf[0] |= top;
            buf[msb2_offset] = (buf[msb2_offset] | msb2_set) & !msb2_clear;
            buf[len - 1] |= lsb;

            let p = Self::from_unsigned_bytes(buf)?;
            if !p.is_prime(rounds) {
                continue;
            }
            if flags.contains(PrimeFlags::SAFE) && !p.sub_d(1)?.div_2().is_prime(rounds) {
                trace!(candidates, "prime is not safe");
                continue;
            }

            debug!(bits, candidates, "found prime");
            return Ok(p);
        }
    }
}
