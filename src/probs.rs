//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
    fn sharpen(&mut self, tau: f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    /// Raises every element to the exponent `tau` and renormalises to 1.
    /// For `tau > 1` this pushes mass toward the already-favoured outcome;
    /// `tau == 1` leaves the distribution unchanged.
    fn sharpen(&mut self, tau: f64) {
        for element in &mut *self {
            *element = element.powf(tau);
        }
        self.normalise(1.0);
    }
}
