use std::fmt::Debug;
use num_bigint::{BigInt, BigUint};
use crate::errors::{AlgebraError, AlgebraResult};

/// An algebraic structure acting as the factory of its elements.
pub trait Structure: Clone + Debug + PartialEq + Send + Sync {
    type Element: RingElement<Structure = Self>;

    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;
}

/// Element of a commutative ring with unity. Every element keeps a handle to
/// the structure it belongs to, so `zero`/`one` are always reachable from a value.
pub trait RingElement: Clone + Debug + PartialEq + Send + Sync + Sized {
    type Structure: Structure<Element = Self>;

    fn structure(&self) -> &Self::Structure;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == self.structure().one()
    }

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    fn negate(&self) -> Self;

    /// Integer multiple `n * self`.
    fn scale(&self, n: &BigInt) -> Self;

    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Binary exponentiation, least significant bit first.
    fn pow(&self, n: &BigUint) -> Self {
        let mut result = self.structure().one();
        let mut base = self.clone();
        let bits = n.bits();

        for i in 0..bits {
            if n.bit(i) {
                result = result.mul(&base);
            }
            if i + 1 < bits {
                base = base.square();
            }
        }

        result
    }
}

/// Ring with Euclidean division.
pub trait EuclideanElement: RingElement {
    fn divmod(&self, other: &Self) -> AlgebraResult<(Self, Self)>;

    fn quotient(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(self.divmod(other)?.0)
    }

    fn remainder(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(self.divmod(other)?.1)
    }
}

pub trait FieldElement: EuclideanElement {
    fn inverse(&self) -> AlgebraResult<Self>;

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }

        Ok(self.mul(&other.inverse()?))
    }
}

/// Extended Euclid: returns `(g, s, t)` with `s*a + t*b = g`.
pub fn extended_gcd<E: EuclideanElement>(a: &E, b: &E) -> AlgebraResult<(E, E, E)> {
    let structure = a.structure();
    let (mut r1, mut r2) = (a.clone(), b.clone());
    let (mut s1, mut s2) = (structure.one(), structure.zero());
    let (mut t1, mut t2) = (structure.zero(), structure.one());

    while !r2.is_zero() {
        let (q, r) = r1.divmod(&r2)?;
        r1 = std::mem::replace(&mut r2, r);

        let s_next = s1.sub(&q.mul(&s2));
        s1 = std::mem::replace(&mut s2, s_next);

        let t_next = t1.sub(&q.mul(&t2));
        t1 = std::mem::replace(&mut t2, t_next);
    }

    Ok((r1, s1, t1))
}

/// Implements `std::ops` arithmetic on references by delegating to [`RingElement`].
macro_rules! impl_ring_ops {
    ([$($generics:tt)*] $ty:ty) => {
        impl<'a, 'b, $($generics)*> std::ops::Add<&'b $ty> for &'a $ty {
            type Output = $ty;

            fn add(self, rhs: &'b $ty) -> $ty {
                $crate::algebra::RingElement::add(self, rhs)
            }
        }

        impl<'a, 'b, $($generics)*> std::ops::Sub<&'b $ty> for &'a $ty {
            type Output = $ty;

            fn sub(self, rhs: &'b $ty) -> $ty {
                $crate::algebra::RingElement::sub(self, rhs)
            }
        }

        impl<'a, 'b, $($generics)*> std::ops::Mul<&'b $ty> for &'a $ty {
            type Output = $ty;

            fn mul(self, rhs: &'b $ty) -> $ty {
                $crate::algebra::RingElement::mul(self, rhs)
            }
        }

        impl<'a, $($generics)*> std::ops::Neg for &'a $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::algebra::RingElement::negate(self)
            }
        }
    };
}

pub(crate) use impl_ring_ops;
