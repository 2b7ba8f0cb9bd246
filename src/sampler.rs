use rand::RngCore;
use crate::field::{PrimeField, PrimeFieldElement};

/// Source of uniformly distributed field elements.
pub trait FieldSampler {
    fn sample(&mut self, field: &PrimeField) -> PrimeFieldElement;

    fn sample_many(&mut self, field: &PrimeField, n: usize) -> Vec<PrimeFieldElement> {
        (0..n).map(|_| self.sample(field)).collect()
    }
}

impl<R: RngCore + ?Sized> FieldSampler for R {
    fn sample(&mut self, field: &PrimeField) -> PrimeFieldElement {
        field.sample(self)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
pub struct FixedSampler {
    current_index: usize,
    values: Vec<i64>,
}

impl FixedSampler {
    pub fn new(values: Vec<i64>) -> Self {
        assert_ne!(values.len(), 0);

        Self {
            current_index: 0,
            values,
        }
    }
}

impl FieldSampler for FixedSampler {
    fn sample(&mut self, field: &PrimeField) -> PrimeFieldElement {
        let value = field.from(self.values[self.current_index]);

        self.current_index += 1;
        if self.current_index == self.values.len() {
            self.current_index = 0;
        }

        value
    }
}
