use crate::algebra::{FieldElement, RingElement, Structure};
use crate::errors::{AlgebraError, AlgebraResult};
use crate::field::{PrimeField, PrimeFieldElement};
use crate::polynomial::{Polynomial, PolynomialRing};

pub fn to_f(field: &PrimeField, values: &[i64]) -> Vec<PrimeFieldElement> {
    values.iter().map(|&v| field.from(v)).collect()
}

/// `L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)` for every point of `xs`.
pub fn generate_lagrange_basis_polys<F: FieldElement>(
    ring: &PolynomialRing<F>,
    xs: &[F],
) -> AlgebraResult<Vec<Polynomial<F>>> {
    let x = ring.x();

    xs.iter()
        .enumerate()
        .map(|(i, xi)| {
            let mut numerator = ring.one();
            let mut denominator = ring.coeff_field().one();

            for (j, xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = numerator.mul(&x.sub(&ring.constant(xj.clone())));
                denominator = denominator.mul(&xi.sub(xj));
            }

            if denominator.is_zero() {
                return Err(AlgebraError::DivisionByZero);
            }

            Ok(numerator.mul_scalar(&denominator.inverse()?))
        })
        .collect()
}

/// `sum_i values[i] * L_i(x)`
pub fn interpolate_on_lagrange_basis_polys<F: FieldElement>(
    ring: &PolynomialRing<F>,
    basis: &[Polynomial<F>],
    values: &[F],
) -> Polynomial<F> {
    linear_combine_polynomials(ring, basis, values)
}

/// `sum_i coeffs[i] * polys[i]`; missing or zero coefficients are skipped.
pub fn linear_combine_polynomials<F: FieldElement>(
    ring: &PolynomialRing<F>,
    polys: &[Polynomial<F>],
    coeffs: &[F],
) -> Polynomial<F> {
    polys
        .iter()
        .zip(coeffs)
        .filter(|(_, c)| !c.is_zero())
        .fold(ring.zero(), |acc, (p, c)| acc.add(&p.mul_scalar(c)))
}

/// Interpolates the unique polynomial of degree `< points.len()` through `points`.
/// Repeated abscissae fail with [`AlgebraError::DivisionByZero`].
pub fn lagrange_interpolation<F: FieldElement>(
    ring: &PolynomialRing<F>,
    points: &[(F, F)],
) -> AlgebraResult<Polynomial<F>> {
    if points.is_empty() {
        return Ok(ring.zero());
    }

    let (xs, ys): (Vec<F>, Vec<F>) = points.iter().cloned().unzip();
    let basis = generate_lagrange_basis_polys(ring, &xs)?;

    Ok(interpolate_on_lagrange_basis_polys(ring, &basis, &ys))
}
