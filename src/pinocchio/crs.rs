use rayon::prelude::*;
use crate::algebra::RingElement;
use crate::errors::AlgebraResult;
use crate::field::{PrimeField, PrimeFieldElement};
use crate::pinocchio::operations::PointOps;
use crate::pinocchio::types::{AlphaCrs, PairedPoint};
use crate::polynomial::Polynomial;
use crate::sampler::FieldSampler;

/// Setup secrets. Neither `Clone` nor `Debug`: the value lives only inside
/// a setup call and is dropped when it returns.
pub(crate) struct ToxicWaste {
    pub s: PrimeFieldElement,
    pub alpha_a: PrimeFieldElement,
    pub alpha_b: PrimeFieldElement,
    pub alpha_c: PrimeFieldElement,
    pub beta: PrimeFieldElement,
}

impl ToxicWaste {
    pub fn sample<S: FieldSampler + ?Sized>(field: &PrimeField, sampler: &mut S) -> Self {
        Self {
            s: sampler.sample(field),
            alpha_a: sampler.sample(field),
            alpha_b: sampler.sample(field),
            alpha_c: sampler.sample(field),
            beta: sampler.sample(field),
        }
    }
}

/// `{g^{u_k(s)}, g^{alpha * u_k(s)}}` for every polynomial in `polys`.
pub(crate) fn build_alpha_crs(
    ops: &PointOps,
    polys: &[Polynomial<PrimeFieldElement>],
    s: &PrimeFieldElement,
    alpha: &PrimeFieldElement,
) -> AlgebraResult<AlphaCrs> {
    let pairs = polys
        .par_iter()
        .map(|poly| {
            let at_s = poly.eval(s);
            Ok((ops.encode(&at_s)?, ops.encode(&alpha.mul(&at_s))?))
        })
        .collect::<AlgebraResult<Vec<_>>>()?;

    let (g_poly_at_s, g_alpha_poly_at_s) = pairs.into_iter().unzip();

    Ok(AlphaCrs {
        g_poly_at_s,
        g_alpha_poly_at_s,
    })
}

/// `g^{beta * (a_k(s) + b_k(s) + c_k(s))}` per wire.
pub(crate) fn build_beta_bundles(
    ops: &PointOps,
    aps: &[Polynomial<PrimeFieldElement>],
    bps: &[Polynomial<PrimeFieldElement>],
    cps: &[Polynomial<PrimeFieldElement>],
    s: &PrimeFieldElement,
    beta: &PrimeFieldElement,
) -> AlgebraResult<Vec<PairedPoint>> {
    aps.par_iter()
        .zip(bps)
        .zip(cps)
        .map(|((a, b), c)| {
            let sum = a.eval(s).add(&b.eval(s)).add(&c.eval(s));
            ops.encode(&beta.mul(&sum))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::algebra::Structure;
    use crate::bls12_381::Bls12_381;
    use crate::pinocchio::crs::{build_alpha_crs, build_beta_bundles, ToxicWaste};
    use crate::pinocchio::operations::PointOps;
    use crate::poly_utils::to_f;
    use crate::polynomial::PolynomialRing;
    use crate::sampler::FixedSampler;
    use crate::test_utils::fr;

    #[test]
    pub fn test_toxic_waste_sampling_order() {
        let field = fr();
        let waste = ToxicWaste::sample(&field, &mut FixedSampler::new(vec![2, 3, 5, 7, 11]));

        assert_eq!(waste.s, field.from(2));
        assert_eq!(waste.alpha_a, field.from(3));
        assert_eq!(waste.alpha_b, field.from(5));
        assert_eq!(waste.alpha_c, field.from(7));
        assert_eq!(waste.beta, field.from(11));
    }

    #[test]
    pub fn test_crs_vectors() {
        let bls = Bls12_381::new().unwrap();
        let ops = PointOps::new(bls.g1().generator().clone(), bls.g2().generator().clone());
        let field = fr();
        let ring = PolynomialRing::new(field.clone());

        let a = vec![ring.from(to_f(&field, &[1, 1])), ring.zero()];
        let b = vec![ring.from(to_f(&field, &[0, 2])), ring.from(to_f(&field, &[3]))];
        let c = vec![ring.zero(), ring.from(to_f(&field, &[0, 0, 1]))];
        let (s, alpha, beta) = (field.from(4), field.from(10), field.from(6));

        let crs = build_alpha_crs(&ops, &a, &s, &alpha).unwrap();
        // a_0(4) = 5, a_1 = 0
        assert_eq!(crs.g_poly_at_s, vec![ops.encode(&field.from(5)).unwrap(), ops.zero()]);
        assert_eq!(crs.g_alpha_poly_at_s[0], ops.encode(&field.from(50)).unwrap());

        let bundles = build_beta_bundles(&ops, &a, &b, &c, &s, &beta).unwrap();
        // 6 * (5 + 8 + 0), 6 * (0 + 3 + 16)
        assert_eq!(
            bundles,
            vec![ops.encode(&field.from(78)).unwrap(), ops.encode(&field.from(114)).unwrap()]
        );
    }
}
