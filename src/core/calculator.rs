use crate::core::NumberCruncher;

/// Sums two numbers.
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Stand-in for a remote verification call that has not been built yet.
/// Accepts every pair until that service exists.
pub fn verify(_got: f64, _want: f64) -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }
}

impl NumberCruncher for Calculator {
    fn add(&self, x: f64, y: f64) -> f64 {
        add(x, y)
    }

    fn verify(&self, got: f64, want: f64) -> bool {
        verify(got, want)
    }
}
