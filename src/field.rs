use std::fmt;
use std::sync::Arc;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;
use crate::algebra::{impl_ring_ops, EuclideanElement, FieldElement, RingElement, Structure};
use crate::errors::{AlgebraError, AlgebraResult};

/// Integers modulo a prime `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: Arc<BigUint>,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Self {
        Self {
            modulus: Arc::new(modulus),
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduces any (possibly negative) integer into `[0, p)`.
    pub fn from<T: Into<BigInt>>(&self, value: T) -> PrimeFieldElement {
        let modulus = BigInt::from_biguint(Sign::Plus, self.modulus.as_ref().clone());
        let (_, value) = value.into().mod_floor(&modulus).into_parts();

        self.element(value)
    }

    pub fn from_biguint(&self, value: &BigUint) -> PrimeFieldElement {
        self.element(value % self.modulus.as_ref())
    }

    /// Uniform element: draws 128 bits more than the modulus width and reduces,
    /// which keeps the bias below 2^-128.
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> PrimeFieldElement {
        let byte_len = (self.modulus.bits() as usize).div_ceil(8) + 16;
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);

        self.from_biguint(&BigUint::from_bytes_le(&bytes))
    }

    fn element(&self, value: BigUint) -> PrimeFieldElement {
        PrimeFieldElement {
            field: self.clone(),
            value,
        }
    }
}

impl Structure for PrimeField {
    type Element = PrimeFieldElement;

    fn zero(&self) -> PrimeFieldElement {
        self.element(BigUint::zero())
    }

    fn one(&self) -> PrimeFieldElement {
        self.element(BigUint::one())
    }
}

/// Element of a [`PrimeField`], always kept in `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeFieldElement {
    field: PrimeField,
    value: BigUint,
}

impl PrimeFieldElement {
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    fn with_value(&self, value: BigUint) -> Self {
        self.field.element(value)
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl RingElement for PrimeFieldElement {
    type Structure = PrimeField;

    fn structure(&self) -> &PrimeField {
        &self.field
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.field, other.field);
        let sum = &self.value + &other.value;
        let modulus = self.modulus();

        if &sum >= modulus {
            self.with_value(sum - modulus)
        } else {
            self.with_value(sum)
        }
    }

    fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.field, other.field);
        if self.value >= other.value {
            self.with_value(&self.value - &other.value)
        } else {
            self.with_value(self.modulus() - &other.value + &self.value)
        }
    }

    fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.field, other.field);
        self.with_value((&self.value * &other.value) % self.modulus())
    }

    fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        self.with_value(self.modulus() - &self.value)
    }

    fn scale(&self, n: &BigInt) -> Self {
        self.mul(&self.field.from(n.clone()))
    }

    fn pow(&self, n: &BigUint) -> Self {
        self.with_value(self.value.modpow(n, self.modulus()))
    }
}

impl EuclideanElement for PrimeFieldElement {
    /// A field is trivially Euclidean: the remainder is always zero.
    fn divmod(&self, other: &Self) -> AlgebraResult<(Self, Self)> {
        Ok((self.div(other)?, self.field.zero()))
    }
}

impl FieldElement for PrimeFieldElement {
    fn inverse(&self) -> AlgebraResult<Self> {
        let value = BigInt::from_biguint(Sign::Plus, self.value.clone());
        let modulus = BigInt::from_biguint(Sign::Plus, self.modulus().clone());
        let egcd = value.extended_gcd(&modulus);

        if !egcd.gcd.is_one() {
            return Err(AlgebraError::NoInverse);
        }

        Ok(self.field.from(egcd.x))
    }
}

impl_ring_ops!([] PrimeFieldElement);
