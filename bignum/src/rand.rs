//! Injected randomness.

use rand_core::TryCryptoRng;

/// Source of random bytes for prime and key generation.
///
/// `fill` writes up to `dst.len()` bytes and returns how many were written.
/// Callers treat a short write as [`Error::RandomSourceExhausted`](crate::Error).
pub trait RandomSource {
    /// Fill `dst` with random bytes, returning the number written.
    fn fill(&mut self, dst: &mut [u8]) -> usize;

    /// Fill `dst` completely or fail.
    fn fill_exact(&mut self, dst: &mut [u8]) -> crate::Result<()> {
        if self.fill(dst) == dst.len() {
            Ok(())
        } else {
            Err(crate::Error::RandomSourceExhausted)
        }
    }
}

impl<R: TryCryptoRng + ?Sized> RandomSource for R {
    fn fill(&mut self, dst: &mut [u8]) -> usize {
        match self.try_fill_bytes(dst) {
            Ok(()) => dst.len(),
            Err(_) => 0,
        }
    }
}

/// Adapter turning a `FnMut(&mut [u8]) -> usize` callback into a [`RandomSource`].
pub struct FillFn<F>(pub F);

impl<F: FnMut(&mut [u8]) -> usize> RandomSource for FillFn<F> {
    fn fill(&mut self, dst: &mut [u8]) -> usize {
        (self.0)(dst).min(dst.len())
    }
}
