use crate::core::{Calculation, CheckOutcome, NumberCruncher};
use crate::utils::error::{CrunchError, Result};

/// Drives a [`NumberCruncher`] and reports what it answered.
pub struct CrunchEngine<N: NumberCruncher> {
    cruncher: N,
}

impl<N: NumberCruncher> CrunchEngine<N> {
    pub fn new(cruncher: N) -> Self {
        Self { cruncher }
    }

    pub fn cruncher(&self) -> &N {
        &self.cruncher
    }

    pub fn sum(&self, x: f64, y: f64) -> Calculation {
        let sum = self.cruncher.add(x, y);
        tracing::debug!(x, y, sum, "computed sum");

        Calculation { x, y, sum }
    }

    pub fn verify(&self, got: f64, want: f64) -> bool {
        let verified = self.cruncher.verify(got, want);
        tracing::debug!(got, want, verified, "verified result");

        verified
    }

    /// Sums `x` and `y`, then asks the cruncher to verify the sum against `want`.
    pub fn check(&self, x: f64, y: f64, want: f64) -> Result<CheckOutcome> {
        let calculation = self.sum(x, y);

        let verified = self.verify(calculation.sum, want);
        if !verified {
            tracing::warn!(got = calculation.sum, want, "verification rejected result");
            return Err(CrunchError::VerificationFailed {
                got: calculation.sum,
                want,
            });
        }

        tracing::info!(got = calculation.sum, want, "verification passed");
        Ok(CheckOutcome {
            calculation,
            want,
            verified,
        })
    }
}
