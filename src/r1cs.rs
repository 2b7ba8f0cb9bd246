use crate::algebra::{RingElement, Structure};
use crate::errors::{ProtocolError, ProtocolResult};
use crate::field::{PrimeField, PrimeFieldElement};

/// Boundaries of the public part of the witness vector.
///
/// Layout: `[one | inputs (..=input) | outputs (..=output) | private inputs | intermediates]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireIndex {
    pub one: usize,
    /// Index of the last public input.
    pub input: usize,
    /// Index of the last public output.
    pub output: usize,
    pub private_inputs: usize,
}

impl WireIndex {
    pub fn new(input: usize, output: usize) -> Self {
        Self {
            one: 0,
            input,
            output,
            private_inputs: 0,
        }
    }

    pub fn with_private_inputs(mut self, private_inputs: usize) -> Self {
        self.private_inputs = private_inputs;
        self
    }

    pub fn input_count(&self) -> usize {
        self.input - self.one
    }

    pub fn output_count(&self) -> usize {
        self.output - self.input
    }

    /// First witness index that is not public.
    pub fn mid_start(&self) -> usize {
        self.output + 1
    }
}

/// Constraints `(A·w) * (B·w) = (C·w)`, one row per constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct R1cs {
    pub field: PrimeField,
    pub index: WireIndex,
    pub a: Vec<Vec<PrimeFieldElement>>,
    pub b: Vec<Vec<PrimeFieldElement>>,
    pub c: Vec<Vec<PrimeFieldElement>>,
}

impl R1cs {
    pub fn new(
        field: PrimeField,
        index: WireIndex,
        a: Vec<Vec<PrimeFieldElement>>,
        b: Vec<Vec<PrimeFieldElement>>,
        c: Vec<Vec<PrimeFieldElement>>,
    ) -> Self {
        Self { field, index, a, b, c }
    }

    pub fn constraint_count(&self) -> usize {
        self.a.len()
    }

    /// Number of witness columns referenced by the widest row.
    pub fn width(&self) -> usize {
        self.a
            .iter()
            .chain(&self.b)
            .chain(&self.c)
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
    }

    pub fn check_dimensions(&self) -> ProtocolResult<()> {
        if self.a.len() != self.b.len() || self.a.len() != self.c.len() {
            return Err(ProtocolError::DimensionMismatch(format!(
                "matrices have {}, {} and {} rows",
                self.a.len(),
                self.b.len(),
                self.c.len()
            )));
        }

        let index = &self.index;
        if index.one != 0 || index.input < index.one || index.output < index.input {
            return Err(ProtocolError::DimensionMismatch(format!("malformed wire index {index:?}")));
        }

        Ok(())
    }

    /// Checks the input, output and private input counts of `witness` against the wire index.
    pub fn check_layout(&self, witness: &StructuralWitness) -> ProtocolResult<()> {
        if witness.inputs.len() != self.index.input_count() {
            return Err(ProtocolError::InvalidWitness(format!(
                "expected {} inputs, got {}",
                self.index.input_count(),
                witness.inputs.len()
            )));
        }
        if witness.outputs.len() != self.index.output_count() {
            return Err(ProtocolError::InvalidWitness(format!(
                "expected {} outputs, got {}",
                self.index.output_count(),
                witness.outputs.len()
            )));
        }
        if witness.private_inputs.len() != self.index.private_inputs {
            return Err(ProtocolError::InvalidWitness(format!(
                "expected {} private inputs, got {}",
                self.index.private_inputs,
                witness.private_inputs.len()
            )));
        }

        Ok(())
    }

    /// `Ok(false)` when some constraint does not hold; errors are reserved for
    /// malformed systems or witnesses.
    pub fn is_satisfied(&self, witness: &StructuralWitness) -> ProtocolResult<bool> {
        self.check_dimensions()?;

        if !witness.one.is_one() {
            return Err(ProtocolError::InvalidWitness("witness.one must equal 1".to_string()));
        }

        let w = witness.to_witness_vector();

        for (i, ((a, b), c)) in self.a.iter().zip(&self.b).zip(&self.c).enumerate() {
            let lhs = dot(&self.field, a, &w)?.mul(&dot(&self.field, b, &w)?);
            let rhs = dot(&self.field, c, &w)?;

            if lhs != rhs {
                log::debug!("constraint {i} is not satisfied");
                return Ok(false);
            }
        }

        Ok(true)
    }
}

fn dot(
    field: &PrimeField,
    row: &[PrimeFieldElement],
    w: &[PrimeFieldElement],
) -> ProtocolResult<PrimeFieldElement> {
    let mut acc = field.zero();

    for (j, coeff) in row.iter().enumerate() {
        if coeff.is_zero() {
            continue;
        }

        let value = w.get(j).ok_or_else(|| {
            ProtocolError::DimensionMismatch(format!(
                "constraint references wire {j} but the witness has {} entries",
                w.len()
            ))
        })?;

        acc = acc.add(&coeff.mul(value));
    }

    Ok(acc)
}

/// Witness split by role; [`Self::to_witness_vector`] fixes the column order
/// used by every matrix and polynomial index.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralWitness {
    pub one: PrimeFieldElement,
    pub inputs: Vec<PrimeFieldElement>,
    pub outputs: Vec<PrimeFieldElement>,
    pub private_inputs: Vec<PrimeFieldElement>,
    pub intermediates: Vec<PrimeFieldElement>,
}

impl StructuralWitness {
    pub fn new(
        field: &PrimeField,
        inputs: Vec<PrimeFieldElement>,
        outputs: Vec<PrimeFieldElement>,
        intermediates: Vec<PrimeFieldElement>,
    ) -> Self {
        Self {
            one: field.one(),
            inputs,
            outputs,
            private_inputs: vec![],
            intermediates,
        }
    }

    pub fn with_private_inputs(mut self, private_inputs: Vec<PrimeFieldElement>) -> Self {
        self.private_inputs = private_inputs;
        self
    }

    pub fn to_witness_vector(&self) -> Vec<PrimeFieldElement> {
        std::iter::once(&self.one)
            .chain(&self.inputs)
            .chain(&self.outputs)
            .chain(&self.private_inputs)
            .chain(&self.intermediates)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ProtocolError;
    use crate::poly_utils::to_f;
    use crate::r1cs::{StructuralWitness, WireIndex};
    use crate::test_utils::{build_witness, complex_r1cs, fr, private_input_r1cs, simple_r1cs};

    #[test]
    pub fn test_witness_vector_order() {
        let field = fr();
        let witness = StructuralWitness::new(&field, to_f(&field, &[3]), to_f(&field, &[4]), to_f(&field, &[12]))
            .with_private_inputs(to_f(&field, &[7]));

        assert_eq!(witness.to_witness_vector(), to_f(&field, &[1, 3, 4, 7, 12]));
    }

    #[test]
    pub fn test_wire_index() {
        let index = WireIndex::new(1, 2);

        assert_eq!(index.input_count(), 1);
        assert_eq!(index.output_count(), 1);
        assert_eq!(index.mid_start(), 3);
        assert_eq!(index.with_private_inputs(2).private_inputs, 2);
    }

    #[test]
    pub fn test_simple_circuit_satisfaction() {
        let field = fr();
        let r1cs = simple_r1cs(&field);

        assert_eq!(r1cs.constraint_count(), 1);
        assert_eq!(r1cs.width(), 4);
        assert!(r1cs.is_satisfied(&build_witness(&field, 3, 4, &[12])).unwrap());
        assert!(!r1cs.is_satisfied(&build_witness(&field, 3, 4, &[10])).unwrap());
    }

    #[test]
    pub fn test_complex_circuit_satisfaction() {
        let field = fr();
        let r1cs = complex_r1cs(&field);

        assert!(r1cs.is_satisfied(&build_witness(&field, 3, 35, &[9, 27, 30])).unwrap());
        assert!(!r1cs.is_satisfied(&build_witness(&field, 3, 36, &[9, 27, 30])).unwrap());
    }

    #[test]
    pub fn test_dimension_errors() {
        let field = fr();
        let mut r1cs = simple_r1cs(&field);

        // wire 3 is referenced but the witness stops at index 2
        let short = StructuralWitness::new(&field, to_f(&field, &[3]), to_f(&field, &[4]), vec![]);
        assert!(matches!(r1cs.is_satisfied(&short), Err(ProtocolError::DimensionMismatch(_))));

        r1cs.c.push(to_f(&field, &[0, 0, 0, 1]));
        assert!(matches!(
            r1cs.is_satisfied(&build_witness(&field, 3, 4, &[12])),
            Err(ProtocolError::DimensionMismatch(_))
        ));
    }

    #[test]
    pub fn test_witness_one_must_be_one() {
        let field = fr();
        let r1cs = simple_r1cs(&field);
        let mut witness = build_witness(&field, 3, 4, &[12]);
        witness.one = field.from(2);

        assert!(matches!(r1cs.is_satisfied(&witness), Err(ProtocolError::InvalidWitness(_))));
    }

    #[test]
    pub fn test_layout_check() {
        let field = fr();
        let r1cs = simple_r1cs(&field);
        let witness = StructuralWitness::new(&field, to_f(&field, &[3, 1]), to_f(&field, &[4]), to_f(&field, &[12]));

        assert!(r1cs.check_layout(&build_witness(&field, 3, 4, &[12])).is_ok());
        assert!(matches!(r1cs.check_layout(&witness), Err(ProtocolError::InvalidWitness(_))));
    }

    #[test]
    pub fn test_layout_check_counts_private_inputs() {
        let field = fr();
        let r1cs = private_input_r1cs(&field);
        let witness = build_witness(&field, 6, 42, &[]);

        assert!(matches!(r1cs.check_layout(&witness), Err(ProtocolError::InvalidWitness(_))));
        assert!(r1cs.check_layout(&witness.clone().with_private_inputs(to_f(&field, &[7]))).is_ok());
        assert!(matches!(
            simple_r1cs(&field).check_layout(&build_witness(&field, 3, 4, &[12]).with_private_inputs(to_f(&field, &[1]))),
            Err(ProtocolError::InvalidWitness(_))
        ));
    }
}
