use std::sync::Arc;
use num_bigint::{BigInt, BigUint, Sign};
use crate::algebra::{FieldElement, Structure};
use crate::errors::{AlgebraError, AlgebraResult};

#[derive(Debug, PartialEq)]
struct CurveParams<F: FieldElement> {
    a: F,
    b: F,
    field: F::Structure,
}

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over any field.
///
/// The identity is encoded as the sentinel `(0, 0)`, which only works while
/// `b != 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipticCurve<F: FieldElement> {
    params: Arc<CurveParams<F>>,
}

impl<F: FieldElement> EllipticCurve<F> {
    pub fn new(a: F, b: F) -> Self {
        if b.is_zero() {
            log::warn!("curve with b = 0: (0, 0) is a real point and collides with the identity sentinel");
        }

        let field = a.structure().clone();

        Self {
            params: Arc::new(CurveParams { a, b, field }),
        }
    }

    pub fn a(&self) -> &F {
        &self.params.a
    }

    pub fn b(&self) -> &F {
        &self.params.b
    }

    pub fn field(&self) -> &F::Structure {
        &self.params.field
    }

    /// The identity point.
    pub fn zero(&self) -> CurvePoint<F> {
        CurvePoint {
            curve: self.clone(),
            x: self.params.field.zero(),
            y: self.params.field.zero(),
        }
    }

    pub fn is_on_curve(&self, x: &F, y: &F) -> bool {
        if x.is_zero() && y.is_zero() {
            return true;
        }

        let lhs = y.square();
        let rhs = x.square().mul(x).add(&self.params.a.mul(x)).add(&self.params.b);

        lhs == rhs
    }

    pub fn point(&self, x: F, y: F) -> AlgebraResult<CurvePoint<F>> {
        if !self.is_on_curve(&x, &y) {
            return Err(AlgebraError::InvalidPoint);
        }

        Ok(CurvePoint {
            curve: self.clone(),
            x,
            y,
        })
    }

    /// Same curve parameters, checked by pointer first.
    pub fn same_curve(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.params, &other.params) || self.params == other.params
    }

    fn point_unchecked(&self, x: F, y: F) -> CurvePoint<F> {
        CurvePoint {
            curve: self.clone(),
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurvePoint<F: FieldElement> {
    curve: EllipticCurve<F>,
    x: F,
    y: F,
}

impl<F: FieldElement> CurvePoint<F> {
    pub fn curve(&self) -> &EllipticCurve<F> {
        &self.curve
    }

    pub fn x(&self) -> &F {
        &self.x
    }

    pub fn y(&self) -> &F {
        &self.y
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Whether this is a valid point of `curve`.
    pub fn lies_on(&self, curve: &EllipticCurve<F>) -> bool {
        self.curve.same_curve(curve) && curve.is_on_curve(&self.x, &self.y)
    }

    pub fn add(&self, other: &Self) -> AlgebraResult<Self> {
        if !self.curve.same_curve(&other.curve) {
            return Err(AlgebraError::InvalidArgument("points lie on different curves".to_string()));
        }
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);

        if x1 == x2 {
            // P + (-P), including the 2-torsion case P = -P
            if y1 != y2 || y1.is_zero() {
                return Ok(self.curve.zero());
            }

            return self.double();
        }

        let m = y1.sub(y2).div(&x1.sub(x2))?;
        let x3 = m.square().sub(x1).sub(x2);
        let y3 = m.mul(&x1.sub(&x3)).sub(y1);

        Ok(self.curve.point_unchecked(x3, y3))
    }

    pub fn double(&self) -> AlgebraResult<Self> {
        if self.is_zero() || self.y.is_zero() {
            return Ok(self.curve.zero());
        }

        let (x1, y1) = (&self.x, &self.y);
        let three = BigInt::from(3);
        let two = BigInt::from(2);

        let m = x1.square().scale(&three).add(self.curve.a()).div(&y1.scale(&two))?;
        let x3 = m.square().sub(&x1.scale(&two));
        let y3 = m.mul(&x1.sub(&x3)).sub(y1);

        Ok(self.curve.point_unchecked(x3, y3))
    }

    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        self.curve.point_unchecked(self.x.clone(), self.y.negate())
    }

    pub fn sub(&self, other: &Self) -> AlgebraResult<Self> {
        self.add(&other.negate())
    }

    /// `n * P` for a non-negative integer `n`.
    pub fn scale(&self, n: &BigInt) -> AlgebraResult<Self> {
        match n.sign() {
            Sign::Minus => Err(AlgebraError::InvalidArgument(format!(
                "cannot scale a point by negative {n}"
            ))),
            _ => self.scale_unsigned(n.magnitude()),
        }
    }

    /// Double-and-add, least significant bit first.
    pub fn scale_unsigned(&self, n: &BigUint) -> AlgebraResult<Self> {
        let mut result = self.curve.zero();
        let mut addend = self.clone();
        let bits = n.bits();

        for i in 0..bits {
            if n.bit(i) {
                result = result.add(&addend)?;
            }
            if i + 1 < bits {
                addend = addend.double()?;
            }
        }

        Ok(result)
    }
}

/// Curve together with a generator of a prime-order subgroup.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclicGroup<F: FieldElement> {
    curve: EllipticCurve<F>,
    generator: CurvePoint<F>,
    order: BigUint,
}

impl<F: FieldElement> CyclicGroup<F> {
    pub fn new(curve: EllipticCurve<F>, gen_x: F, gen_y: F, order: BigUint) -> AlgebraResult<Self> {
        let generator = curve.point(gen_x, gen_y)?;

        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    pub fn curve(&self) -> &EllipticCurve<F> {
        &self.curve
    }

    pub fn generator(&self) -> &CurvePoint<F> {
        &self.generator
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn zero(&self) -> CurvePoint<F> {
        self.curve.zero()
    }

    /// `g * n`
    pub fn generate(&self, n: &BigUint) -> AlgebraResult<CurvePoint<F>> {
        self.generator.scale_unsigned(n)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use crate::algebra::{RingElement, Structure};
    use crate::curve::{CurvePoint, CyclicGroup, EllipticCurve};
    use crate::errors::AlgebraError;
    use crate::field::{PrimeField, PrimeFieldElement};

    // y^2 = x^3 + 2x + 2 over F_17
    fn curve17() -> (PrimeField, EllipticCurve<PrimeFieldElement>) {
        let field = PrimeField::new(BigUint::from(17u32));
        let curve = EllipticCurve::new(field.from(2), field.from(2));

        (field, curve)
    }

    fn pt(curve: &EllipticCurve<PrimeFieldElement>, field: &PrimeField, x: i64, y: i64) -> CurvePoint<PrimeFieldElement> {
        curve.point(field.from(x), field.from(y)).unwrap()
    }

    #[test]
    pub fn test_point_validation() {
        let (field, curve) = curve17();

        assert!(curve.is_on_curve(&field.from(5), &field.from(1)));
        assert!(curve.is_on_curve(&field.zero(), &field.zero()));
        assert!(!curve.is_on_curve(&field.from(5), &field.from(2)));
        assert_eq!(curve.point(field.from(1), field.from(1)), Err(AlgebraError::InvalidPoint));
    }

    #[test]
    pub fn test_group_law() {
        let (field, curve) = curve17();
        let p1 = pt(&curve, &field, 3, 1);
        let p2 = pt(&curve, &field, 5, 1);
        let p3 = pt(&curve, &field, 6, 3);
        let p4 = pt(&curve, &field, 3, 16);

        assert_eq!(p1.add(&p2).unwrap(), pt(&curve, &field, 9, 16));
        assert_eq!(p1.add(&p3).unwrap(), pt(&curve, &field, 16, 13));
        assert_eq!(p1.add(&p1).unwrap(), pt(&curve, &field, 13, 7));
        assert_eq!(p1.double().unwrap(), pt(&curve, &field, 13, 7));
        assert!(p1.add(&p4).unwrap().is_zero());
        assert_eq!(p1.negate(), p4);
        assert!(p1.sub(&p1).unwrap().is_zero());

        assert_eq!(p1.add(&curve.zero()).unwrap(), p1);
        assert_eq!(curve.zero().add(&p1).unwrap(), p1);
        assert!(curve.zero().negate().is_zero());
    }

    #[test]
    pub fn test_scale() {
        let (field, curve) = curve17();
        let p = pt(&curve, &field, 5, 1);

        assert!(p.scale(&BigInt::from(0)).unwrap().is_zero());
        assert_eq!(p.scale(&BigInt::from(1)).unwrap(), p);
        assert_eq!(p.scale(&BigInt::from(2)).unwrap(), p.add(&p).unwrap());

        for a in 0..7 {
            for b in 0..7 {
                let lhs = p.scale(&BigInt::from(a + b)).unwrap();
                let rhs = p.scale(&BigInt::from(a)).unwrap().add(&p.scale(&BigInt::from(b)).unwrap()).unwrap();
                assert_eq!(lhs, rhs);
            }
        }

        assert!(matches!(p.scale(&BigInt::from(-1)), Err(AlgebraError::InvalidArgument(_))));
    }

    #[test]
    pub fn test_cyclic_group() {
        let (field, curve) = curve17();
        // (5, 1) generates the whole group of order 19
        let group = CyclicGroup::new(curve.clone(), field.from(5), field.from(1), BigUint::from(19u32)).unwrap();

        assert!(group.generate(group.order()).unwrap().is_zero());
        assert_eq!(group.generate(&BigUint::from(20u32)).unwrap(), *group.generator());

        let bad = CyclicGroup::new(curve, field.from(5), field.from(2), BigUint::from(19u32));
        assert_eq!(bad, Err(AlgebraError::InvalidPoint));
    }

    #[test]
    pub fn test_two_torsion_point() {
        // y^2 = x^3 + x + 15 over F_17 vanishes at x = 1
        let field = PrimeField::new(BigUint::from(17u32));
        let curve = EllipticCurve::new(field.from(1), field.from(15));
        let p = curve.point(field.from(1), field.zero()).unwrap();

        assert!(p.y().is_zero());
        assert!(p.add(&p).unwrap().is_zero());
        assert!(p.double().unwrap().is_zero());
    }

    #[test]
    pub fn test_points_on_different_curves() {
        let (field, curve) = curve17();
        let p = pt(&curve, &field, 5, 1);
        // (1, 2) lies on y^2 = x^3 + 3
        let other = EllipticCurve::new(field.zero(), field.from(3));
        let q = other.point(field.from(1), field.from(2)).unwrap();

        assert!(p.lies_on(&curve));
        assert!(!q.lies_on(&curve));
        assert!(q.lies_on(&other));
        assert!(curve.same_curve(&EllipticCurve::new(field.from(2), field.from(2))));
        assert!(matches!(p.add(&q), Err(AlgebraError::InvalidArgument(_))));
        assert!(matches!(curve.zero().add(&q), Err(AlgebraError::InvalidArgument(_))));
    }
}
