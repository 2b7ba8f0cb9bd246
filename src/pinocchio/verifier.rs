use crate::algebra::RingElement;
use crate::bls12_381::{G1Point, G2Point};
use crate::errors::ProtocolResult;
use crate::pinocchio::types::{PinocchioSetup, ProveResult};
use crate::pinocchio::Pinocchio;
use crate::poly_utils::linear_combine_polynomials;

type PairingSide<'a> = Vec<(&'a G1Point, &'a G2Point)>;

impl Pinocchio {
    /// Checks a proof against the public io coefficients.
    ///
    /// Returns `Ok(false)` for any proof that fails a pairing check, carries
    /// the wrong number of io coefficients or holds a point off the key's curves. Errors only come from the algebra
    /// layer.
    pub fn verify(&self, setup: &PinocchioSetup, result: &ProveResult) -> ProtocolResult<bool> {
        let (circuit, key, metadata) = (&setup.circuit, &setup.key, &setup.metadata);
        let ops = &self.ops;
        let proof = &result.proof;
        let io = &result.io_coeffs;

        if io.len() != metadata.mid_start {
            log::debug!("expected {} io coefficients, got {}", metadata.mid_start, io.len());
            return Ok(false);
        }

        let (curve1, curve2) = (self.curve.g1().curve(), self.curve.g2().curve());
        for (name, point) in proof.points() {
            if !point.g1.lies_on(curve1) || !point.g2.lies_on(curve2) {
                log::debug!("proof point {name} is not on the expected curve");
                return Ok(false);
            }
        }

        let ring = circuit.t.structure();
        let mid_start = metadata.mid_start;
        let a_io = linear_combine_polynomials(ring, &circuit.aps[..mid_start], io);
        let b_io = linear_combine_polynomials(ring, &circuit.bps[..mid_start], io);
        let c_io = linear_combine_polynomials(ring, &circuit.cps[..mid_start], io);

        let g_a = ops.add(&ops.eval_poly_with_crs(&a_io, &key.g_one, &key.g_ss)?, &proof.g_a_mid)?;
        let g_b = ops.add(&ops.eval_poly_with_crs(&b_io, &key.g_one, &key.g_ss)?, &proof.g_b_mid)?;
        let g_c = ops.add(&ops.eval_poly_with_crs(&c_io, &key.g_one, &key.g_ss)?, &proof.g_c_mid)?;

        let g_mid_sum = ops.add(&ops.add(&proof.g_a_mid, &proof.g_b_mid)?, &proof.g_c_mid)?;
        let one = &key.g_one.g2;

        let checks: [(&str, PairingSide, PairingSide); 5] = [
            (
                "divisibility",
                vec![(&g_a.g1, &g_b.g2)],
                vec![(&key.g_t.g1, &proof.g_h.g2), (&g_c.g1, one)],
            ),
            (
                "alpha_a",
                vec![(&proof.g_alpha_a_mid.g1, one)],
                vec![(&proof.g_a_mid.g1, &key.g_alpha_a.g2)],
            ),
            (
                "alpha_b",
                vec![(&proof.g_alpha_b_mid.g1, one)],
                vec![(&proof.g_b_mid.g1, &key.g_alpha_b.g2)],
            ),
            (
                "alpha_c",
                vec![(&proof.g_alpha_c_mid.g1, one)],
                vec![(&proof.g_c_mid.g1, &key.g_alpha_c.g2)],
            ),
            (
                "beta",
                vec![(&proof.g_z.g1, one)],
                vec![(&g_mid_sum.g1, &key.g_beta.g2)],
            ),
        ];

        for (name, lhs, rhs) in &checks {
            if !self.pairing.pairing_products_equal(lhs, rhs)? {
                log::debug!("{name} check failed");
                return Ok(false);
            }
        }

        Ok(true)
    }
}
