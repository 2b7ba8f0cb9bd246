use std::sync::Arc;
use num_bigint::BigInt;
use crate::algebra::{extended_gcd, impl_ring_ops, EuclideanElement, FieldElement, RingElement, Structure};
use crate::errors::{AlgebraError, AlgebraResult};
use crate::polynomial::{long_division, Polynomial, PolynomialRing};

#[derive(Debug, PartialEq)]
struct Modulus<F: FieldElement> {
    poly: Polynomial<F>,
    lead_inv: F,
}

/// `F[x] / (m(x))` for an irreducible `m` of degree `k >= 1`.
///
/// Irreducibility is not checked; a reducible modulus only shows up later as
/// [`AlgebraError::NotInvertible`] on some inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionField<F: FieldElement> {
    modulus: Arc<Modulus<F>>,
}

impl<F: FieldElement> ExtensionField<F> {
    pub fn new(modulus: Polynomial<F>) -> AlgebraResult<Self> {
        match modulus.degree() {
            Some(d) if d >= 1 => {}
            _ => {
                return Err(AlgebraError::InvalidArgument(
                    "extension modulus must have degree at least 1".to_string(),
                ))
            }
        }

        let lead_inv = modulus.leading_coeff().inverse()?;

        Ok(Self {
            modulus: Arc::new(Modulus {
                poly: modulus,
                lead_inv,
            }),
        })
    }

    pub fn modulus(&self) -> &Polynomial<F> {
        &self.modulus.poly
    }

    pub fn degree(&self) -> usize {
        self.modulus.poly.coeffs().len() - 1
    }

    pub fn poly_ring(&self) -> &PolynomialRing<F> {
        self.modulus.poly.structure()
    }

    pub fn base_field(&self) -> &F::Structure {
        self.poly_ring().coeff_field()
    }

    /// Reduces `poly` modulo the field polynomial.
    pub fn from(&self, poly: Polynomial<F>) -> ExtensionFieldElement<F> {
        let value = self.reduce(poly);

        ExtensionFieldElement {
            field: self.clone(),
            value,
        }
    }

    pub fn from_coeffs(&self, coeffs: Vec<F>) -> ExtensionFieldElement<F> {
        self.from(self.poly_ring().from(coeffs))
    }

    /// Embeds a base field element as a constant.
    pub fn lift(&self, c: F) -> ExtensionFieldElement<F> {
        self.from(self.poly_ring().constant(c))
    }

    fn reduce(&self, poly: Polynomial<F>) -> Polynomial<F> {
        if poly.coeffs().len() < self.modulus.poly.coeffs().len() {
            return poly;
        }

        let zero = self.base_field().zero();
        let (_, remainder) = long_division(
            poly.coeffs(),
            self.modulus.poly.coeffs(),
            &self.modulus.lead_inv,
            &zero,
        );

        self.poly_ring().from(remainder)
    }
}

impl<F: FieldElement> Structure for ExtensionField<F> {
    type Element = ExtensionFieldElement<F>;

    fn zero(&self) -> ExtensionFieldElement<F> {
        self.from(self.poly_ring().zero())
    }

    fn one(&self) -> ExtensionFieldElement<F> {
        self.from(self.poly_ring().one())
    }
}

/// Residue class represented by its unique polynomial of degree `< k`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionFieldElement<F: FieldElement> {
    field: ExtensionField<F>,
    value: Polynomial<F>,
}

impl<F: FieldElement> ExtensionFieldElement<F> {
    pub fn value(&self) -> &Polynomial<F> {
        &self.value
    }

    /// Coefficient of `x^i` in the canonical representative.
    pub fn coeff(&self, i: usize) -> F {
        self.value.coeff(i)
    }

    fn with_value(&self, value: Polynomial<F>) -> Self {
        self.field.from(value)
    }
}

impl<F: FieldElement> RingElement for ExtensionFieldElement<F> {
    type Structure = ExtensionField<F>;

    fn structure(&self) -> &ExtensionField<F> {
        &self.field
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn add(&self, other: &Self) -> Self {
        self.with_value(self.value.add(&other.value))
    }

    fn sub(&self, other: &Self) -> Self {
        self.with_value(self.value.sub(&other.value))
    }

    fn mul(&self, other: &Self) -> Self {
        self.with_value(self.value.mul(&other.value))
    }

    fn negate(&self) -> Self {
        self.with_value(self.value.negate())
    }

    fn scale(&self, n: &BigInt) -> Self {
        self.with_value(self.value.scale(n))
    }
}

impl<F: FieldElement> EuclideanElement for ExtensionFieldElement<F> {
    fn divmod(&self, other: &Self) -> AlgebraResult<(Self, Self)> {
        Ok((self.div(other)?, self.field.zero()))
    }
}

impl<F: FieldElement> FieldElement for ExtensionFieldElement<F> {
    fn inverse(&self) -> AlgebraResult<Self> {
        if self.is_zero() {
            return Err(AlgebraError::NoInverse);
        }

        let (gcd, s, _) = extended_gcd(&self.value, self.field.modulus())?;

        match gcd.degree() {
            Some(0) => {
                let scale = gcd.leading_coeff().inverse()?;
                Ok(self.with_value(s.mul_scalar(&scale)))
            }
            Some(d) => Err(AlgebraError::NotInvertible(d)),
            None => Err(AlgebraError::NoInverse),
        }
    }
}

impl_ring_ops!([F: FieldElement] ExtensionFieldElement<F>);
