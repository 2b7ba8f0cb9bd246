use std::ops::Deref;
use crate::algebra::{RingElement, Structure};
use crate::errors::AlgebraResult;
use crate::field::{PrimeField, PrimeFieldElement};
use crate::poly_utils::{generate_lagrange_basis_polys, interpolate_on_lagrange_basis_polys};
use crate::polynomial::{Polynomial, PolynomialRing};

/// The constraint-index domain `{1, 2, ..., n}` with its Lagrange basis.
#[derive(Debug, Clone)]
pub struct ConstraintDomain {
    ring: PolynomialRing<PrimeFieldElement>,
    points: Vec<PrimeFieldElement>,
    lagrange_polys: Vec<Polynomial<PrimeFieldElement>>,
}

impl Deref for ConstraintDomain {
    type Target = Vec<PrimeFieldElement>;
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl ConstraintDomain {
    pub fn new(field: &PrimeField, n: usize) -> AlgebraResult<Self> {
        let ring = PolynomialRing::new(field.clone());
        let points = (1..=n).map(|i| field.from(i as u64)).collect::<Vec<_>>();
        let lagrange_polys = generate_lagrange_basis_polys(&ring, &points)?;

        Ok(Self {
            ring,
            points,
            lagrange_polys,
        })
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn ring(&self) -> &PolynomialRing<PrimeFieldElement> {
        &self.ring
    }

    pub fn lagrange_polys(&self) -> &[Polynomial<PrimeFieldElement>] {
        self.lagrange_polys.as_slice()
    }

    /// `t(x) = (x - 1)(x - 2)...(x - n)`
    pub fn get_vanishing_polynomial(&self) -> Polynomial<PrimeFieldElement> {
        let x = self.ring.x();

        self.points
            .iter()
            .fold(self.ring.one(), |acc, p| acc.mul(&x.sub(&self.ring.constant(p.clone()))))
    }

    /// The polynomial taking `values[i]` at point `i + 1`.
    pub fn interpolate_univariate(&self, values: &[PrimeFieldElement]) -> Polynomial<PrimeFieldElement> {
        interpolate_on_lagrange_basis_polys(&self.ring, &self.lagrange_polys, values)
    }
}

impl<'a> IntoIterator for &'a ConstraintDomain {
    type Item = &'a PrimeFieldElement;
    type IntoIter = std::slice::Iter<'a, PrimeFieldElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use crate::algebra::RingElement;
    use crate::evaluation_domain::ConstraintDomain;
    use crate::field::PrimeField;
    use crate::poly_utils::to_f;

    fn field() -> PrimeField {
        PrimeField::new(BigUint::from(101u32))
    }

    #[test]
    fn vanishing_poly_test() {
        let field = field();
        let domain = ConstraintDomain::new(&field, 5).unwrap();

        let t = domain.get_vanishing_polynomial();

        assert_eq!(t.degree(), Some(5));
        for p in &domain {
            assert!(t.eval(p).is_zero());
        }
        assert!(!t.eval(&field.from(6)).is_zero());
        assert!(!t.eval(&field.from(0)).is_zero());
    }

    #[test]
    fn test_interpolate_univariate() {
        let field = field();
        let values = to_f(&field, &[8, 10, 15]);
        let domain = ConstraintDomain::new(&field, 3).unwrap();

        let poly = domain.interpolate_univariate(&values);

        for (y, x) in values.iter().zip(domain.iter()) {
            assert_eq!(&poly.eval(x), y);
        }
        assert_eq!(domain.size(), 3);
        assert_eq!(domain.lagrange_polys().len(), 3);
    }
}
