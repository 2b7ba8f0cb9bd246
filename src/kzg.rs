use rayon::prelude::*;
use crate::algebra::{EuclideanElement, RingElement, Structure};
use crate::bls12_381::{Bls12_381, G1Point, G2Point};
use crate::errors::{AlgebraResult, ProtocolError, ProtocolResult};
use crate::field::PrimeFieldElement;
use crate::pairing::Pairing;
use crate::polynomial::Polynomial;

/// Structured reference string `g1 * tau^i` for `i < n` and the verifier key `g2 * tau`.
#[derive(Clone, Debug, PartialEq)]
pub struct KzgConfig {
    pub srs: Vec<G1Point>,
    pub verifier_key: G2Point,
}

pub fn setup(curve: &Bls12_381, n: usize, toxic_waste: &PrimeFieldElement) -> AlgebraResult<KzgConfig> {
    let g1 = curve.g1().generator();

    let srs = (0..n)
        .into_par_iter()
        .map(|i| g1.scale_unsigned(toxic_waste.pow(&(i as u64).into()).value()))
        .collect::<AlgebraResult<Vec<_>>>()?;

    Ok(KzgConfig {
        srs,
        verifier_key: curve.g2().generator().scale_unsigned(toxic_waste.value())?,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct Opening {
    pub evaluation: PrimeFieldElement,
    pub evaluation_proof: G1Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchOpening {
    pub evaluations: Vec<PrimeFieldElement>,
    pub evaluation_proof: G1Point,
}

impl From<Opening> for BatchOpening {
    fn from(opening: Opening) -> Self {
        Self {
            evaluations: vec![opening.evaluation],
            evaluation_proof: opening.evaluation_proof,
        }
    }
}

pub struct Kzg {
    config: KzgConfig,
    g1: G1Point,
    g2: G2Point,
    pairing: Pairing,
}

impl Kzg {
    pub fn new(curve: &Bls12_381, config: KzgConfig) -> AlgebraResult<Self> {
        Ok(Self {
            config,
            g1: curve.g1().generator().clone(),
            g2: curve.g2().generator().clone(),
            pairing: Pairing::new(curve)?,
        })
    }

    pub fn config(&self) -> &KzgConfig {
        &self.config
    }

    pub fn commit(&self, poly: &Polynomial<PrimeFieldElement>) -> ProtocolResult<G1Point> {
        let degree = poly.degree().unwrap_or(0);
        if self.config.srs.len() < degree + 1 {
            return Err(ProtocolError::EvaluationKeyDegreeOverflow {
                degree,
                supported: self.config.srs.len().saturating_sub(1),
            });
        }

        let zero = self.g1.curve().zero();

        Ok(poly
            .coeffs()
            .par_iter()
            .zip(&self.config.srs)
            .filter(|(c, _)| !c.is_zero())
            .map(|(c, h)| h.scale_unsigned(c.value()))
            .try_reduce(|| zero.clone(), |a, b| a.add(&b))?)
    }

    /// `sum_i elements[i] * scalar^i`
    pub fn linearize_elements(elements: &[PrimeFieldElement], linearization_scalar: &PrimeFieldElement) -> PrimeFieldElement {
        elements
            .iter()
            .rev()
            .fold(linearization_scalar.structure().zero(), |acc, e| {
                acc.mul(linearization_scalar).add(e)
            })
    }

    pub fn linearize_commitments(
        &self,
        elements: &[G1Point],
        linearization_scalar: &PrimeFieldElement,
    ) -> AlgebraResult<G1Point> {
        elements
            .iter()
            .rev()
            .try_fold(self.g1.curve().zero(), |acc, e| {
                acc.scale_unsigned(linearization_scalar.value())?.add(e)
            })
    }

    pub fn batch_open(
        &self,
        polys: &[&Polynomial<PrimeFieldElement>],
        point: &PrimeFieldElement,
        linearization_scalar: &PrimeFieldElement,
    ) -> ProtocolResult<BatchOpening> {
        let Some(first) = polys.first() else {
            return Err(ProtocolError::DimensionMismatch("nothing to open".to_string()));
        };
        let ring = first.structure();
        let divisor = ring.x().sub(&ring.constant(point.clone()));

        let mut linearized_poly = ring.zero();
        let mut evaluations = vec![];
        let mut power = point.structure().one();

        for poly in polys {
            let evaluation = poly.eval(point);
            let quotient_poly = poly.sub(&ring.constant(evaluation.clone())).quotient(&divisor)?;

            linearized_poly = linearized_poly.add(&quotient_poly.mul_scalar(&power));
            power = power.mul(linearization_scalar);
            evaluations.push(evaluation);
        }

        Ok(BatchOpening {
            evaluations,
            evaluation_proof: self.commit(&linearized_poly)?,
        })
    }

    pub fn open(&self, poly: &Polynomial<PrimeFieldElement>, point: &PrimeFieldElement) -> ProtocolResult<Opening> {
        let one = point.structure().one();
        let BatchOpening {
            mut evaluations,
            evaluation_proof,
        } = self.batch_open(&[poly], point, &one)?;

        Ok(Opening {
            evaluation: evaluations.remove(0),
            evaluation_proof,
        })
    }

    pub fn check_single(&self, point: &PrimeFieldElement, commitment: &G1Point, opening: &Opening) -> AlgebraResult<bool> {
        self.check(
            point,
            std::slice::from_ref(commitment),
            std::slice::from_ref(&opening.evaluation),
            &opening.evaluation_proof,
            &point.structure().one(),
        )
    }

    pub fn check_batched(
        &self,
        point: &PrimeFieldElement,
        commitments: &[G1Point],
        openings: &BatchOpening,
        linearization_scalar: &PrimeFieldElement,
    ) -> AlgebraResult<bool> {
        self.check(
            point,
            commitments,
            &openings.evaluations,
            &openings.evaluation_proof,
            linearization_scalar,
        )
    }

    /// `e(C - g1 * v, g2) == e(proof, vk - g2 * z)`
    fn check(
        &self,
        point: &PrimeFieldElement,
        commitments: &[G1Point],
        evaluations: &[PrimeFieldElement],
        evaluation_proof: &G1Point,
        linearization_scalar: &PrimeFieldElement,
    ) -> AlgebraResult<bool> {
        if commitments.len() != evaluations.len() {
            return Ok(false);
        }

        let commitment = self.linearize_commitments(commitments, linearization_scalar)?;
        let evaluation = Self::linearize_elements(evaluations, linearization_scalar);

        let lhs = commitment.sub(&self.g1.scale_unsigned(evaluation.value())?)?;
        let rhs = self.config.verifier_key.sub(&self.g2.scale_unsigned(point.value())?)?;

        self.pairing
            .pairing_products_equal(&[(&lhs, &self.g2)], &[(evaluation_proof, &rhs)])
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::{FieldElement, RingElement, Structure};
    use crate::bls12_381::{Bls12_381, G1Point};
    use crate::errors::ProtocolError;
    use crate::field::PrimeFieldElement;
    use crate::kzg::{setup, BatchOpening, Kzg};
    use crate::poly_utils::to_f;
    use crate::polynomial::{Polynomial, PolynomialRing};

    struct TestData {
        kzg: Kzg,
        g1: G1Point,
        tau: PrimeFieldElement,
        linearization_scalar: PrimeFieldElement,
        opening_point: PrimeFieldElement,
    }

    fn test_setup() -> TestData {
        let bls = Bls12_381::new().unwrap();
        let fr = bls.fr().clone();
        let linearization_scalar = fr.from(133);
        let tau = fr.from(333444555);
        let config = setup(&bls, 11, &tau).unwrap();
        let kzg = Kzg::new(&bls, config).unwrap();
        let opening_point = fr.from(123);

        TestData {
            kzg,
            g1: bls.g1().generator().clone(),
            tau,
            linearization_scalar,
            opening_point,
        }
    }

    fn test_polys() -> (Polynomial<PrimeFieldElement>, Polynomial<PrimeFieldElement>, Polynomial<PrimeFieldElement>) {
        let fr = Bls12_381::new().unwrap().fr().clone();
        let ring = PolynomialRing::new(fr.clone());

        let poly_1 = ring.from(to_f(&fr, &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]));
        let poly_2 = poly_1
            .mul_scalar(&fr.from(123))
            .mul(&ring.from(to_f(&fr, &[999, 8919])));
        let poly_3 = ring.from(to_f(&fr, &[22, 33, 44, 55, 66, 77, 88, 99, 1000, 1231]));

        (poly_1, poly_2, poly_3)
    }

    fn encode(g1: &G1Point, v: &PrimeFieldElement) -> G1Point {
        g1.scale_unsigned(v.value()).unwrap()
    }

    #[test]
    pub fn test_commitment() {
        let TestData { kzg, g1, tau, .. } = test_setup();
        let (poly, _, _) = test_polys();

        let comm = kzg.commit(&poly).unwrap();

        assert_eq!(comm, encode(&g1, &poly.eval(&tau)));
    }

    #[test]
    pub fn test_commitment_degree_overflow() {
        let TestData { kzg, .. } = test_setup();
        let (poly_1, _, _) = test_polys();
        let too_big = poly_1.mul(&poly_1);

        assert_eq!(
            kzg.commit(&too_big),
            Err(ProtocolError::EvaluationKeyDegreeOverflow { degree: 18, supported: 10 })
        );
    }

    #[test]
    pub fn test_batch_commitment() {
        let TestData { kzg, g1, tau, linearization_scalar, .. } = test_setup();
        let (poly_1, poly_2, poly_3) = test_polys();

        let comm_1 = kzg.commit(&poly_1).unwrap();
        let comm_2 = kzg.commit(&poly_2).unwrap();
        let comm_3 = kzg.commit(&poly_3).unwrap();
        let comm = kzg
            .linearize_commitments(&[comm_1, comm_2, comm_3], &linearization_scalar)
            .unwrap();

        let expected = poly_1
            .eval(&tau)
            .add(&poly_2.eval(&tau).mul(&linearization_scalar))
            .add(&poly_3.eval(&tau).mul(&linearization_scalar.square()));

        assert_eq!(comm, encode(&g1, &expected));
    }

    #[test]
    pub fn test_open() {
        let TestData { kzg, g1, tau, opening_point, .. } = test_setup();
        let (poly, ..) = test_polys();

        let opening = kzg.open(&poly, &opening_point).unwrap();

        assert_eq!(opening.evaluation, poly.eval(&opening_point));

        let quotient = poly
            .eval(&tau)
            .sub(&poly.eval(&opening_point))
            .div(&tau.sub(&opening_point))
            .unwrap();
        assert_eq!(opening.evaluation_proof, encode(&g1, &quotient));
    }

    #[test]
    pub fn test_batch_open() {
        let TestData { kzg, g1, tau, linearization_scalar, opening_point } = test_setup();
        let (poly_1, poly_2, poly_3) = test_polys();

        let opening = kzg
            .batch_open(&[&poly_1, &poly_2, &poly_3], &opening_point, &linearization_scalar)
            .unwrap();

        let openings = vec![poly_1.eval(&opening_point), poly_2.eval(&opening_point), poly_3.eval(&opening_point)];
        let linearized_commitments_raw = Kzg::linearize_elements(
            &[poly_1.eval(&tau), poly_2.eval(&tau), poly_3.eval(&tau)],
            &linearization_scalar,
        );
        let linearized_openings_raw = Kzg::linearize_elements(&openings, &linearization_scalar);

        assert_eq!(opening.evaluations, openings);
        assert_eq!(
            opening.evaluation_proof,
            encode(
                &g1,
                &linearized_commitments_raw
                    .sub(&linearized_openings_raw)
                    .div(&tau.sub(&opening_point))
                    .unwrap()
            )
        );
    }

    #[test]
    pub fn test_kzg_single_open() {
        let TestData { kzg, opening_point, .. } = test_setup();
        let (poly, _, _) = test_polys();
        let commitment = kzg.commit(&poly).unwrap();
        let opening = kzg.open(&poly, &opening_point).unwrap();

        assert!(kzg.check_single(&opening_point, &commitment, &opening).unwrap());

        let mut wrong = opening.clone();
        wrong.evaluation = wrong.evaluation.add(&opening_point);
        assert!(!kzg.check_single(&opening_point, &commitment, &wrong).unwrap());
    }

    #[test]
    pub fn test_kzg_batch_open() {
        let TestData { kzg, linearization_scalar, opening_point, .. } = test_setup();
        let (poly_1, poly_2, poly_3) = test_polys();
        let commitment_1 = kzg.commit(&poly_1).unwrap();
        let commitment_2 = kzg.commit(&poly_2).unwrap();
        let commitment_3 = kzg.commit(&poly_3).unwrap();

        let openings = kzg
            .batch_open(&[&poly_1, &poly_2, &poly_3], &opening_point, &linearization_scalar)
            .unwrap();

        assert!(kzg
            .check_batched(
                &opening_point,
                &[commitment_1.clone(), commitment_2.clone(), commitment_3.clone()],
                &openings,
                &linearization_scalar,
            )
            .unwrap());

        // commitments in the wrong order
        assert!(!kzg
            .check_batched(
                &opening_point,
                &[commitment_2, commitment_1, commitment_3],
                &openings,
                &linearization_scalar,
            )
            .unwrap());
    }

    #[test]
    pub fn test_single_opening_as_batch() {
        let TestData { kzg, opening_point, .. } = test_setup();
        let (poly, _, _) = test_polys();
        let commitment = kzg.commit(&poly).unwrap();

        let batch = BatchOpening::from(kzg.open(&poly, &opening_point).unwrap());
        let one = opening_point.structure().one();

        assert!(kzg.check_batched(&opening_point, &[commitment], &batch, &one).unwrap());
    }
}
