/// Runs calculations and verifications.
///
/// Production code uses [`crate::Calculator`]; tests substitute a double so
/// they can control what each call answers.
pub trait NumberCruncher: Send + Sync {
    fn add(&self, x: f64, y: f64) -> f64;
    fn verify(&self, got: f64, want: f64) -> bool;
}

impl<T: NumberCruncher + ?Sized> NumberCruncher for &T {
    fn add(&self, x: f64, y: f64) -> f64 {
        (**self).add(x, y)
    }

    fn verify(&self, got: f64, want: f64) -> bool {
        (**self).verify(got, want)
    }
}

impl<T: NumberCruncher + ?Sized> NumberCruncher for Box<T> {
    fn add(&self, x: f64, y: f64) -> f64 {
        (**self).add(x, y)
    }

    fn verify(&self, got: f64, want: f64) -> bool {
        (**self).verify(got, want)
    }
}
