use num_bigint::BigInt;
use crate::algebra::{impl_ring_ops, EuclideanElement, FieldElement, RingElement, Structure};
use crate::errors::{AlgebraError, AlgebraResult};

/// Univariate polynomials over a field.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialRing<F: FieldElement> {
    coeff_field: F::Structure,
}

impl<F: FieldElement> PolynomialRing<F> {
    pub fn new(coeff_field: F::Structure) -> Self {
        Self { coeff_field }
    }

    pub fn coeff_field(&self) -> &F::Structure {
        &self.coeff_field
    }

    /// Builds a polynomial from coefficients (lowest degree first), stripping trailing zeros.
    pub fn from(&self, coeffs: Vec<F>) -> Polynomial<F> {
        Polynomial::new(self.clone(), coeffs)
    }

    pub fn constant(&self, c: F) -> Polynomial<F> {
        self.from(vec![c])
    }

    /// The polynomial `x`.
    pub fn x(&self) -> Polynomial<F> {
        self.from(vec![self.coeff_field.zero(), self.coeff_field.one()])
    }
}

impl<F: FieldElement> Structure for PolynomialRing<F> {
    type Element = Polynomial<F>;

    fn zero(&self) -> Polynomial<F> {
        Polynomial {
            ring: self.clone(),
            coeffs: vec![self.coeff_field.zero()],
        }
    }

    fn one(&self) -> Polynomial<F> {
        Polynomial {
            ring: self.clone(),
            coeffs: vec![self.coeff_field.one()],
        }
    }
}

/// Dense polynomial, coefficient `i` multiplies `x^i`.
///
/// Never carries trailing zero coefficients; the zero polynomial is the single
/// coefficient `[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<F: FieldElement> {
    ring: PolynomialRing<F>,
    coeffs: Vec<F>,
}

impl<F: FieldElement> Polynomial<F> {
    fn new(ring: PolynomialRing<F>, mut coeffs: Vec<F>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            return ring.zero();
        }

        Self { ring, coeffs }
    }

    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Coefficient of `x^i`, zero past the degree.
    pub fn coeff(&self, i: usize) -> F {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.ring.coeff_field.zero())
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    pub fn leading_coeff(&self) -> &F {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Horner evaluation.
    pub fn eval(&self, x: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(self.ring.coeff_field.zero(), |acc, c| acc.mul(x).add(c))
    }

    /// Multiplies every coefficient by a field element.
    pub fn mul_scalar(&self, c: &F) -> Self {
        if c.is_zero() {
            return self.ring.zero();
        }

        self.ring.from(self.coeffs.iter().map(|a| a.mul(c)).collect())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(&F, &F) -> F) -> Self {
        let zero = self.ring.coeff_field.zero();
        let len = self.coeffs.len().max(other.coeffs.len());

        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                op(a, b)
            })
            .collect();

        self.ring.from(coeffs)
    }
}

/// Long division of `dividend` by `divisor`, eliminating the leading term on each
/// step. `lead_inv` is the inverse of the divisor's leading coefficient.
/// Returns `(quotient, remainder)` coefficient vectors.
pub(crate) fn long_division<F: FieldElement>(
    dividend: &[F],
    divisor: &[F],
    lead_inv: &F,
    zero: &F,
) -> (Vec<F>, Vec<F>) {
    let divisor_len = divisor.len();
    if dividend.len() < divisor_len {
        return (vec![zero.clone()], dividend.to_vec());
    }

    let mut remainder = dividend.to_vec();
    let mut quotient = vec![zero.clone(); dividend.len() - divisor_len + 1];

    for i in (0..quotient.len()).rev() {
        let coeff = remainder[i + divisor_len - 1].mul(lead_inv);
        if coeff.is_zero() {
            continue;
        }

        for (j, d) in divisor.iter().enumerate() {
            if d.is_zero() {
                continue;
            }
            remainder[i + j] = remainder[i + j].sub(&coeff.mul(d));
        }

        quotient[i] = coeff;
    }

    remainder.truncate(divisor_len - 1);

    (quotient, remainder)
}

impl<F: FieldElement> RingElement for Polynomial<F> {
    type Structure = PolynomialRing<F>;

    fn structure(&self) -> &PolynomialRing<F> {
        &self.ring
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.add(b))
    }

    fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.sub(b))
    }

    fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return self.ring.zero();
        }

        let mut result = vec![self.ring.coeff_field.zero(); self.coeffs.len() + other.coeffs.len() - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].add(&a.mul(b));
            }
        }

        self.ring.from(result)
    }

    fn negate(&self) -> Self {
        self.ring.from(self.coeffs.iter().map(|c| c.negate()).collect())
    }

    fn scale(&self, n: &BigInt) -> Self {
        self.ring.from(self.coeffs.iter().map(|c| c.scale(n)).collect())
    }
}

impl<F: FieldElement> EuclideanElement for Polynomial<F> {
    fn divmod(&self, other: &Self) -> AlgebraResult<(Self, Self)> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((self.ring.zero(), self.ring.zero()));
        }
        if self.coeffs.len() < other.coeffs.len() {
            return Ok((self.ring.zero(), self.clone()));
        }

        let lead_inv = other.leading_coeff().inverse()?;

        if other.coeffs.len() == 1 {
            return Ok((self.mul_scalar(&lead_inv), self.ring.zero()));
        }

        let zero = self.ring.coeff_field.zero();
        let (quotient, remainder) = long_division(&self.coeffs, &other.coeffs, &lead_inv, &zero);

        Ok((self.ring.from(quotient), self.ring.from(remainder)))
    }
}

impl_ring_ops!([F: FieldElement] Polynomial<F>);
