use rayon::prelude::*;
use crate::algebra::RingElement;
use crate::bls12_381::{G1Point, G2Point};
use crate::errors::{AlgebraResult, ProtocolError, ProtocolResult};
use crate::field::PrimeFieldElement;
use crate::pinocchio::types::PairedPoint;
use crate::polynomial::Polynomial;

/// Group operations on [`PairedPoint`]s, componentwise in G1 and G2.
#[derive(Clone, Debug)]
pub struct PointOps {
    g1: G1Point,
    g2: G2Point,
}

impl PointOps {
    pub fn new(g1: G1Point, g2: G2Point) -> Self {
        Self { g1, g2 }
    }

    /// `(g1^v, g2^v)`
    pub fn encode(&self, v: &PrimeFieldElement) -> AlgebraResult<PairedPoint> {
        let (g1, g2) = rayon::join(
            || self.g1.scale_unsigned(v.value()),
            || self.g2.scale_unsigned(v.value()),
        );

        Ok(PairedPoint { g1: g1?, g2: g2? })
    }

    pub fn zero(&self) -> PairedPoint {
        PairedPoint {
            g1: self.g1.curve().zero(),
            g2: self.g2.curve().zero(),
        }
    }

    pub fn add(&self, a: &PairedPoint, b: &PairedPoint) -> AlgebraResult<PairedPoint> {
        Ok(PairedPoint {
            g1: a.g1.add(&b.g1)?,
            g2: a.g2.add(&b.g2)?,
        })
    }

    pub fn scale(&self, point: &PairedPoint, scalar: &PrimeFieldElement) -> AlgebraResult<PairedPoint> {
        Ok(PairedPoint {
            g1: point.g1.scale_unsigned(scalar.value())?,
            g2: point.g2.scale_unsigned(scalar.value())?,
        })
    }

    /// `sum_i coeffs[i] * points[i]`; zero coefficients are skipped.
    pub fn linear_combination(
        &self,
        points: &[PairedPoint],
        coeffs: &[PrimeFieldElement],
    ) -> AlgebraResult<PairedPoint> {
        points
            .par_iter()
            .zip(coeffs)
            .filter(|(_, c)| !c.is_zero())
            .map(|(p, c)| self.scale(p, c))
            .try_reduce(|| self.zero(), |a, b| self.add(&a, &b))
    }

    /// `g^{poly(s)}` from `g^1` and the powers `g^{s^1}, g^{s^2}, ...`.
    pub fn eval_poly_with_crs(
        &self,
        poly: &Polynomial<PrimeFieldElement>,
        g_one: &PairedPoint,
        g_ss: &[PairedPoint],
    ) -> ProtocolResult<PairedPoint> {
        let degree = poly.degree().unwrap_or(0);
        if degree > g_ss.len() {
            return Err(ProtocolError::EvaluationKeyDegreeOverflow {
                degree,
                supported: g_ss.len(),
            });
        }

        let bases = std::iter::once(g_one)
            .chain(g_ss)
            .take(degree + 1)
            .cloned()
            .collect::<Vec<_>>();

        Ok(self.linear_combination(&bases, poly.coeffs())?)
    }
}
