use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub x: f64,
    pub y: f64,
    pub sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub calculation: Calculation,
    pub want: f64,
    /// Always true when produced by `CrunchEngine::check`, which returns
    /// `VerificationFailed` instead of a rejected outcome.
    pub verified: bool,
}
