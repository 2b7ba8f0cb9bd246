use rayon::prelude::*;
use crate::algebra::{EuclideanElement, RingElement, Structure};
use crate::errors::{AlgebraResult, ProtocolError, ProtocolResult};
use crate::evaluation_domain::ConstraintDomain;
use crate::field::{PrimeField, PrimeFieldElement};
use crate::poly_utils::linear_combine_polynomials;
use crate::polynomial::{Polynomial, PolynomialRing};
use crate::r1cs::R1cs;

/// One polynomial per witness column: column `j` is interpolated through
/// `(i + 1, matrix[i][j])`. Short rows read as zero.
pub fn matrix_to_polynomials(
    field: &PrimeField,
    matrix: &[Vec<PrimeFieldElement>],
) -> AlgebraResult<Vec<Polynomial<PrimeFieldElement>>> {
    if matrix.is_empty() {
        return Ok(vec![]);
    }

    let domain = ConstraintDomain::new(field, matrix.len())?;
    let width = matrix.iter().map(|row| row.len()).max().unwrap_or(0);

    Ok(matrix_to_polynomials_on(&domain, matrix, width))
}

fn matrix_to_polynomials_on(
    domain: &ConstraintDomain,
    matrix: &[Vec<PrimeFieldElement>],
    width: usize,
) -> Vec<Polynomial<PrimeFieldElement>> {
    let zero = domain.ring().coeff_field().zero();

    (0..width)
        .into_par_iter()
        .map(|column| {
            let values = matrix
                .iter()
                .map(|row| row.get(column).cloned().unwrap_or_else(|| zero.clone()))
                .collect::<Vec<_>>();

            domain.interpolate_univariate(&values)
        })
        .collect()
}

/// `t(x) = (x - 1)(x - 2)...(x - n)`
pub fn build_target_polynomial(
    ring: &PolynomialRing<PrimeFieldElement>,
    constraint_count: usize,
) -> Polynomial<PrimeFieldElement> {
    let field = ring.coeff_field();
    let x = ring.x();

    (1..=constraint_count).fold(ring.one(), |acc, i| {
        acc.mul(&x.sub(&ring.constant(field.from(i as u64))))
    })
}

/// `A(τ), B(τ), C(τ), t(τ)` for one witness.
#[derive(Clone, Debug, PartialEq)]
pub struct QapEvaluation {
    pub a: PrimeFieldElement,
    pub b: PrimeFieldElement,
    pub c: PrimeFieldElement,
    pub t: PrimeFieldElement,
}

/// R1CS compiled to wire polynomials over the domain `{1..n}`.
#[derive(Clone, Debug)]
pub struct Qap {
    ring: PolynomialRing<PrimeFieldElement>,
    pub left: Vec<Polynomial<PrimeFieldElement>>,
    pub right: Vec<Polynomial<PrimeFieldElement>>,
    pub output: Vec<Polynomial<PrimeFieldElement>>,
    pub target: Polynomial<PrimeFieldElement>,
}

impl Qap {
    pub fn from_r1cs(r1cs: &R1cs) -> ProtocolResult<Self> {
        r1cs.check_dimensions()?;

        if r1cs.constraint_count() == 0 {
            return Err(ProtocolError::EmptyConstraintSystem);
        }

        let domain = ConstraintDomain::new(&r1cs.field, r1cs.constraint_count())?;
        let width = r1cs.width();

        let left = matrix_to_polynomials_on(&domain, &r1cs.a, width);
        let right = matrix_to_polynomials_on(&domain, &r1cs.b, width);
        let output = matrix_to_polynomials_on(&domain, &r1cs.c, width);
        let target = domain.get_vanishing_polynomial();

        log::debug!(
            "compiled R1CS with {} constraints and {} wires, target degree {:?}",
            r1cs.constraint_count(),
            width,
            target.degree()
        );

        Ok(Self {
            ring: domain.ring().clone(),
            left,
            right,
            output,
            target,
        })
    }

    pub fn ring(&self) -> &PolynomialRing<PrimeFieldElement> {
        &self.ring
    }

    pub fn wire_count(&self) -> usize {
        self.left.len()
    }

    /// Highest degree among all wire polynomials and the target.
    pub fn max_degree(&self) -> usize {
        self.left
            .iter()
            .chain(&self.right)
            .chain(&self.output)
            .chain(std::iter::once(&self.target))
            .filter_map(|p| p.degree())
            .max()
            .unwrap_or(0)
    }

    /// `(A(x), B(x), C(x))` for witness vector `w`.
    pub fn witness_polynomials(
        &self,
        w: &[PrimeFieldElement],
    ) -> (Polynomial<PrimeFieldElement>, Polynomial<PrimeFieldElement>, Polynomial<PrimeFieldElement>) {
        (
            linear_combine_polynomials(&self.ring, &self.left, w),
            linear_combine_polynomials(&self.ring, &self.right, w),
            linear_combine_polynomials(&self.ring, &self.output, w),
        )
    }

    /// Whether `t` divides `A*B - C`.
    pub fn verify_witness(&self, w: &[PrimeFieldElement]) -> AlgebraResult<bool> {
        let (a, b, c) = self.witness_polynomials(w);

        Ok(a.mul(&b).sub(&c).remainder(&self.target)?.is_zero())
    }

    pub fn evaluate_at(&self, w: &[PrimeFieldElement], tau: &PrimeFieldElement) -> QapEvaluation {
        let (a, b, c) = self.witness_polynomials(w);

        QapEvaluation {
            a: a.eval(tau),
            b: b.eval(tau),
            c: c.eval(tau),
            t: self.target.eval(tau),
        }
    }
}
