use crate::algebra::{EuclideanElement, RingElement};
use crate::errors::{ProtocolError, ProtocolResult};
use crate::field::PrimeFieldElement;
use crate::pinocchio::types::{PairedPoint, PinocchioProof, PinocchioSetup, ProveResult, ZkShiftKey};
use crate::pinocchio::Pinocchio;
use crate::poly_utils::linear_combine_polynomials;
use crate::polynomial::Polynomial;
use crate::r1cs::StructuralWitness;
use crate::sampler::FieldSampler;

/// Witness vector with its QAP polynomials and the quotient `h = (A*B - C) / t`.
struct Assignment {
    w: Vec<PrimeFieldElement>,
    a: Polynomial<PrimeFieldElement>,
    b: Polynomial<PrimeFieldElement>,
    h: Polynomial<PrimeFieldElement>,
}

impl Pinocchio {
    pub fn prove(&self, setup: &PinocchioSetup, witness: &StructuralWitness) -> ProtocolResult<ProveResult> {
        let assignment = self.assign(setup, witness)?;
        let proof = self.commit(setup, &assignment.w, &assignment.h)?;

        log::debug!("proof created, h degree {:?}", assignment.h.degree());

        Ok(ProveResult {
            io_coeffs: assignment.w[..setup.metadata.mid_start].to_vec(),
            proof,
        })
    }

    /// Proof whose mid-wire commitments are blinded by random multiples of
    /// `t(s)`. Requires a setup from [`Self::zk_trusted_setup`].
    pub fn zk_prove<S: FieldSampler + ?Sized>(
        &self,
        setup: &PinocchioSetup,
        witness: &StructuralWitness,
        sampler: &mut S,
    ) -> ProtocolResult<ProveResult> {
        let zk = setup.key.zk.as_ref().ok_or(ProtocolError::MissingZeroKnowledgeKey)?;
        let assignment = self.assign(setup, witness)?;

        let field = &setup.metadata.field;
        let (delta_a, delta_b, delta_c) = (sampler.sample(field), sampler.sample(field), sampler.sample(field));

        // (A + da*t)(B + db*t) - (C + dc*t) = t * (h + db*A + da*B + da*db*t - dc)
        let t = &setup.circuit.t;
        let h = assignment
            .h
            .add(&assignment.a.mul_scalar(&delta_b))
            .add(&assignment.b.mul_scalar(&delta_a))
            .add(&t.mul_scalar(&delta_a.mul(&delta_b)))
            .sub(&t.structure().constant(delta_c.clone()));

        let proof = self.commit(setup, &assignment.w, &h)?;
        let proof = self.shift(setup, zk, proof, &delta_a, &delta_b, &delta_c)?;

        log::debug!("zero-knowledge proof created, h degree {:?}", h.degree());

        Ok(ProveResult {
            io_coeffs: assignment.w[..setup.metadata.mid_start].to_vec(),
            proof,
        })
    }

    fn assign(&self, setup: &PinocchioSetup, witness: &StructuralWitness) -> ProtocolResult<Assignment> {
        let circuit = &setup.circuit;

        circuit.r1cs.check_layout(witness)?;
        if !circuit.r1cs.is_satisfied(witness)? {
            return Err(ProtocolError::WitnessViolatesConstraints);
        }

        let w = witness.to_witness_vector();
        if w.len() != circuit.aps.len() {
            return Err(ProtocolError::DimensionMismatch(format!(
                "witness has {} entries but the circuit has {} wires",
                w.len(),
                circuit.aps.len()
            )));
        }

        let ring = circuit.t.structure();
        let a = linear_combine_polynomials(ring, &circuit.aps, &w);
        let b = linear_combine_polynomials(ring, &circuit.bps, &w);
        let c = linear_combine_polynomials(ring, &circuit.cps, &w);

        let (h, remainder) = a.mul(&b).sub(&c).divmod(&circuit.t)?;
        if !remainder.is_zero() {
            return Err(ProtocolError::NonDivisibleConstraintPolynomial);
        }

        Ok(Assignment { w, a, b, h })
    }

    fn commit(
        &self,
        setup: &PinocchioSetup,
        w: &[PrimeFieldElement],
        h: &Polynomial<PrimeFieldElement>,
    ) -> ProtocolResult<PinocchioProof> {
        let key = &setup.key;
        let ops = &self.ops;
        let mid = &w[setup.metadata.mid_start..];

        let g_h = ops.eval_poly_with_crs(h, &key.g_one, &key.g_ss)?;

        Ok(PinocchioProof {
            g_h,
            g_a_mid: ops.linear_combination(&key.crs_a_mid.g_poly_at_s, mid)?,
            g_alpha_a_mid: ops.linear_combination(&key.crs_a_mid.g_alpha_poly_at_s, mid)?,
            g_b_mid: ops.linear_combination(&key.crs_b_mid.g_poly_at_s, mid)?,
            g_alpha_b_mid: ops.linear_combination(&key.crs_b_mid.g_alpha_poly_at_s, mid)?,
            g_c_mid: ops.linear_combination(&key.crs_c_mid.g_poly_at_s, mid)?,
            g_alpha_c_mid: ops.linear_combination(&key.crs_c_mid.g_alpha_poly_at_s, mid)?,
            g_z: ops.linear_combination(&key.beta_bundles, mid)?,
        })
    }

    fn shift(
        &self,
        setup: &PinocchioSetup,
        zk: &ZkShiftKey,
        proof: PinocchioProof,
        delta_a: &PrimeFieldElement,
        delta_b: &PrimeFieldElement,
        delta_c: &PrimeFieldElement,
    ) -> ProtocolResult<PinocchioProof> {
        let ops = &self.ops;
        let g_t = &setup.key.g_t;
        let shifted = |point: &PairedPoint, base: &PairedPoint, delta: &PrimeFieldElement| {
            ops.add(point, &ops.scale(base, delta)?)
        };

        Ok(PinocchioProof {
            g_a_mid: shifted(&proof.g_a_mid, g_t, delta_a)?,
            g_alpha_a_mid: shifted(&proof.g_alpha_a_mid, &zk.g_alpha_a_t, delta_a)?,
            g_b_mid: shifted(&proof.g_b_mid, g_t, delta_b)?,
            g_alpha_b_mid: shifted(&proof.g_alpha_b_mid, &zk.g_alpha_b_t, delta_b)?,
            g_c_mid: shifted(&proof.g_c_mid, g_t, delta_c)?,
            g_alpha_c_mid: shifted(&proof.g_alpha_c_mid, &zk.g_alpha_c_t, delta_c)?,
            g_z: shifted(&proof.g_z, &zk.g_beta_t, &delta_a.add(delta_b).add(delta_c))?,
            g_h: proof.g_h,
        })
    }
}
