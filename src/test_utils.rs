use crate::bls12_381::CURVE_ORDER;
use crate::field::{PrimeField, PrimeFieldElement};
use crate::poly_utils::to_f;
use crate::r1cs::{R1cs, StructuralWitness, WireIndex};

#[cfg(test)]
pub fn fr() -> PrimeField {
    PrimeField::new(CURVE_ORDER.parse().unwrap())
}

#[cfg(test)]
fn matrix(field: &PrimeField, rows: &[&[i64]]) -> Vec<Vec<PrimeFieldElement>> {
    rows.iter().map(|row| to_f(field, row)).collect()
}

/// `x * y = z` with `x` public input, `y` public output, `z` intermediate.
#[cfg(test)]
pub fn simple_r1cs(field: &PrimeField) -> R1cs {
    R1cs::new(
        field.clone(),
        WireIndex::new(1, 2),
        matrix(field, &[&[0, 1, 0, 0]]),
        matrix(field, &[&[0, 0, 1, 0]]),
        matrix(field, &[&[0, 0, 0, 1]]),
    )
}

/// `out = x^3 + x + 5` flattened into four constraints over
/// `[one, x, out, sym_1 = x*x, y = sym_1*x, sym_2 = y + x]`.
#[cfg(test)]
pub fn complex_r1cs(field: &PrimeField) -> R1cs {
    R1cs::new(
        field.clone(),
        WireIndex::new(1, 2),
        matrix(
            field,
            &[
                &[0, 1, 0, 0, 0, 0],
                &[0, 0, 0, 1, 0, 0],
                &[0, 1, 0, 0, 1, 0],
                &[5, 0, 0, 0, 0, 1],
            ],
        ),
        matrix(
            field,
            &[
                &[0, 1, 0, 0, 0, 0],
                &[0, 1, 0, 0, 0, 0],
                &[1, 0, 0, 0, 0, 0],
                &[1, 0, 0, 0, 0, 0],
            ],
        ),
        matrix(
            field,
            &[
                &[0, 0, 0, 1, 0, 0],
                &[0, 0, 0, 0, 1, 0],
                &[0, 0, 0, 0, 0, 1],
                &[0, 0, 1, 0, 0, 0],
            ],
        ),
    )
}

/// `a * b = out` with `a` public input, `b` private input and `out` public output.
#[cfg(test)]
pub fn private_input_r1cs(field: &PrimeField) -> R1cs {
    R1cs::new(
        field.clone(),
        WireIndex::new(1, 2).with_private_inputs(1),
        matrix(field, &[&[0, 1, 0, 0]]),
        matrix(field, &[&[0, 0, 0, 1]]),
        matrix(field, &[&[0, 0, 1, 0]]),
    )
}

#[cfg(test)]
pub fn build_witness(field: &PrimeField, x: i64, y: i64, intermediates: &[i64]) -> StructuralWitness {
    StructuralWitness::new(field, to_f(field, &[x]), to_f(field, &[y]), to_f(field, intermediates))
}
