use num_bigint::BigUint;
use rayon::prelude::*;
use crate::algebra::{FieldElement, RingElement, Structure};
use crate::bls12_381::{Bls12_381, Fq12, G1Point, G2Point};
use crate::curve::{CurvePoint, EllipticCurve};
use crate::errors::AlgebraResult;
use crate::extension_field::{ExtensionField, ExtensionFieldElement};
use crate::field::PrimeFieldElement;

/// |x| for the BLS parameter x = -0xd201000000010000.
pub const ATE_LOOP_COUNT: u64 = 15132376222941642752;
pub const LOG_ATE_LOOP_COUNT: u32 = 62;

/// Points that can be moved onto the curve `y^2 = x^3 + 4` over `Fq12`.
pub trait IntoTarget {
    fn into_target(&self, pairing: &Pairing) -> AlgebraResult<CurvePoint<Fq12>>;
}

impl IntoTarget for CurvePoint<PrimeFieldElement> {
    fn into_target(&self, pairing: &Pairing) -> AlgebraResult<CurvePoint<Fq12>> {
        pairing.embed(self)
    }
}

impl IntoTarget for CurvePoint<ExtensionFieldElement<PrimeFieldElement>> {
    fn into_target(&self, pairing: &Pairing) -> AlgebraResult<CurvePoint<Fq12>> {
        if self.curve().field().degree() == 2 {
            pairing.twist(self)
        } else {
            pairing.embed_extension(self)
        }
    }
}

/// Optimal ate pairing on BLS12-381, computed entirely in `Fq12`.
#[derive(Clone, Debug)]
pub struct Pairing {
    fq12: ExtensionField<PrimeFieldElement>,
    curve: EllipticCurve<Fq12>,
    w2_inv: Fq12,
    w3_inv: Fq12,
    final_exponent: BigUint,
}

impl Pairing {
    pub fn new(bls: &Bls12_381) -> AlgebraResult<Self> {
        let fq = bls.fq();
        let fq12 = bls.fq12().clone();

        let curve = EllipticCurve::new(fq12.zero(), fq12.lift(fq.from(4)));

        let w = fq12.from_coeffs(vec![fq.zero(), fq.one()]);
        let w2 = w.square();
        let w3 = w2.mul(&w);

        let final_exponent = (fq.modulus().pow(12) - 1u32) / bls.g1().order();

        Ok(Self {
            w2_inv: w2.inverse()?,
            w3_inv: w3.inverse()?,
            fq12,
            curve,
            final_exponent,
        })
    }

    pub fn target_field(&self) -> &ExtensionField<PrimeFieldElement> {
        &self.fq12
    }

    pub fn final_exponent(&self) -> &BigUint {
        &self.final_exponent
    }

    /// Lifts a G1 point coordinate-wise into `Fq12`.
    pub fn embed(&self, p: &CurvePoint<PrimeFieldElement>) -> AlgebraResult<CurvePoint<Fq12>> {
        if p.is_zero() {
            return Ok(self.curve.zero());
        }

        self.curve
            .point(self.fq12.lift(p.x().clone()), self.fq12.lift(p.y().clone()))
    }

    /// Lifts a point over any extension of `Fq` by reading its coordinates as
    /// `Fq12` polynomials.
    pub fn embed_extension(
        &self,
        p: &CurvePoint<ExtensionFieldElement<PrimeFieldElement>>,
    ) -> AlgebraResult<CurvePoint<Fq12>> {
        if p.is_zero() {
            return Ok(self.curve.zero());
        }

        self.curve.point(
            self.fq12.from(p.x().value().clone()),
            self.fq12.from(p.y().value().clone()),
        )
    }

    /// Untwists a G2 point from `Fq2 = Fq[u]/(u^2 + 1)` into `Fq12 = Fq[w]/(w^12 - 2w^6 + 2)`
    /// using `u = w^6 - 1`, then divides by `w^2` and `w^3`.
    pub fn twist(&self, q: &CurvePoint<ExtensionFieldElement<PrimeFieldElement>>) -> AlgebraResult<CurvePoint<Fq12>> {
        if q.is_zero() {
            return Ok(self.curve.zero());
        }

        let nx = self.untwist_coord(q.x());
        let ny = self.untwist_coord(q.y());

        self.curve.point(nx.mul(&self.w2_inv), ny.mul(&self.w3_inv))
    }

    fn untwist_coord(&self, c: &ExtensionFieldElement<PrimeFieldElement>) -> Fq12 {
        let (c0, c1) = (c.coeff(0), c.coeff(1));
        let mut coeffs = vec![self.fq12.base_field().zero(); 7];
        coeffs[0] = c0.sub(&c1);
        coeffs[6] = c1;

        self.fq12.from_coeffs(coeffs)
    }

    /// Evaluates at `t` the line through `p1` and `p2` (tangent when equal,
    /// vertical when `p2 = -p1`).
    pub fn line_function(
        &self,
        p1: &CurvePoint<Fq12>,
        p2: &CurvePoint<Fq12>,
        t: &CurvePoint<Fq12>,
    ) -> AlgebraResult<Fq12> {
        if p1.is_zero() || p2.is_zero() || t.is_zero() {
            return Ok(self.fq12.one());
        }

        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());
        let (xt, yt) = (t.x(), t.y());

        let m = if x1 != x2 {
            y2.sub(y1).div(&x2.sub(x1))?
        } else if y1 == y2 {
            x1.square().scale(&3.into()).div(&y1.scale(&2.into()))?
        } else {
            return Ok(xt.sub(x1));
        };

        Ok(m.mul(&xt.sub(x1)).sub(&yt.sub(y1)))
    }

    /// Miller loop over the ate loop count followed by the final exponentiation.
    pub fn miller_loop(&self, p: &CurvePoint<Fq12>, q: &CurvePoint<Fq12>) -> AlgebraResult<Fq12> {
        Ok(self.final_exponentiation(&self.miller_loop_unreduced(p, q)?))
    }

    /// The Miller loop value `f_{|x|, q}(p)` before the final exponentiation.
    pub fn miller_loop_unreduced(&self, p: &CurvePoint<Fq12>, q: &CurvePoint<Fq12>) -> AlgebraResult<Fq12> {
        let mut r = q.clone();
        let mut f = self.fq12.one();

        for i in (0..=LOG_ATE_LOOP_COUNT).rev() {
            f = f.square().mul(&self.line_function(&r, &r, p)?);
            r = r.double()?;

            if ATE_LOOP_COUNT & (1 << i) != 0 {
                f = f.mul(&self.line_function(&r, q, p)?);
                r = r.add(q)?;
            }
        }

        Ok(f)
    }

    /// `f^((p^12 - 1) / r)`
    pub fn final_exponentiation(&self, f: &Fq12) -> Fq12 {
        f.pow(&self.final_exponent)
    }

    pub fn pairing<P: IntoTarget, Q: IntoTarget>(&self, p: &P, q: &Q) -> AlgebraResult<Fq12> {
        let p = p.into_target(self)?;
        let q = q.into_target(self)?;

        self.miller_loop(&p, &q)
    }

    /// Whether `prod e(lhs_i) == prod e(rhs_i)`. Both sides run their Miller
    /// loops in parallel and share a single final exponentiation.
    pub fn pairing_products_equal(
        &self,
        lhs: &[(&G1Point, &G2Point)],
        rhs: &[(&G1Point, &G2Point)],
    ) -> AlgebraResult<bool> {
        let (l, r) = rayon::join(|| self.miller_product(lhs), || self.miller_product(rhs));
        let ratio = l?.mul(&r?.inverse()?);

        Ok(self.final_exponentiation(&ratio).is_one())
    }

    fn miller_product(&self, pairs: &[(&G1Point, &G2Point)]) -> AlgebraResult<Fq12> {
        pairs
            .par_iter()
            .map(|(p, q)| {
                if p.is_zero() || q.is_zero() {
                    return Ok(self.fq12.one());
                }
                self.miller_loop_unreduced(&self.embed(p)?, &self.twist(q)?)
            })
            .try_reduce(|| self.fq12.one(), |a, b| Ok(a.mul(&b)))
    }

    /// `e(P, Q)` for P in G1 and Q in G2, one when either is the identity.
    pub fn safe_pairing(
        &self,
        p: &CurvePoint<PrimeFieldElement>,
        q: &CurvePoint<ExtensionFieldElement<PrimeFieldElement>>,
    ) -> AlgebraResult<Fq12> {
        if p.is_zero() || q.is_zero() {
            return Ok(self.fq12.one());
        }

        self.pairing(p, q)
    }
}
