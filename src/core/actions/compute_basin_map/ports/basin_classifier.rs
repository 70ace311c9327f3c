use crate::core::data::basin::BasinClassification;
use crate::core::data::complex::Complex;

pub trait BasinClassifier {
    fn classify(&self, z0: Complex) -> BasinClassification;
}
