use rayon::prelude::*;
use crate::algebra::{RingElement, Structure};
use crate::errors::{AlgebraError, ProtocolError, ProtocolResult};
use crate::pinocchio::crs::{build_alpha_crs, build_beta_bundles, ToxicWaste};
use crate::pinocchio::types::{PinocchioCircuit, PinocchioKey, PinocchioMetadata, PinocchioSetup, ZkShiftKey};
use crate::pinocchio::Pinocchio;
use crate::qap::Qap;
use crate::r1cs::R1cs;
use crate::sampler::FieldSampler;

impl Pinocchio {
    pub fn trusted_setup<S: FieldSampler + ?Sized>(
        &self,
        r1cs: &R1cs,
        sampler: &mut S,
    ) -> ProtocolResult<PinocchioSetup> {
        self.setup(r1cs, sampler, false)
    }

    /// Same as [`Self::trusted_setup`] plus the [`ZkShiftKey`] needed by
    /// [`Self::zk_prove`].
    pub fn zk_trusted_setup<S: FieldSampler + ?Sized>(
        &self,
        r1cs: &R1cs,
        sampler: &mut S,
    ) -> ProtocolResult<PinocchioSetup> {
        self.setup(r1cs, sampler, true)
    }

    fn setup<S: FieldSampler + ?Sized>(
        &self,
        r1cs: &R1cs,
        sampler: &mut S,
        zero_knowledge: bool,
    ) -> ProtocolResult<PinocchioSetup> {
        let field = &r1cs.field;
        if field.modulus() != self.scalar_field().modulus() {
            return Err(AlgebraError::InvalidArgument(
                "R1CS field must be the scalar field of the curve".to_string(),
            )
            .into());
        }

        let qap = Qap::from_r1cs(r1cs)?;
        let mid_start = r1cs.index.mid_start();
        if mid_start > qap.wire_count() {
            return Err(ProtocolError::DimensionMismatch(format!(
                "public wires end at {} but the circuit has {} wires",
                mid_start,
                qap.wire_count()
            )));
        }
        let max_degree = qap.max_degree();

        let waste = ToxicWaste::sample(field, sampler);
        let key = self.encode_key(&qap, mid_start, max_degree, &waste, zero_knowledge)?;
        drop(waste);

        log::debug!(
            "trusted setup: {} wires ({} public), max degree {}, zero knowledge {}",
            qap.wire_count(),
            mid_start,
            max_degree,
            zero_knowledge
        );

        let metadata = PinocchioMetadata {
            field: field.clone(),
            input_count: r1cs.index.input_count(),
            output_count: r1cs.index.output_count(),
            private_input_count: r1cs.index.private_inputs,
            mid_start,
            max_degree,
            constraint_count: r1cs.constraint_count(),
        };

        let Qap {
            left,
            right,
            output,
            target,
            ..
        } = qap;

        Ok(PinocchioSetup {
            circuit: PinocchioCircuit {
                r1cs: r1cs.clone(),
                aps: left,
                bps: right,
                cps: output,
                t: target,
            },
            key,
            metadata,
        })
    }

    fn encode_key(
        &self,
        qap: &Qap,
        mid_start: usize,
        max_degree: usize,
        waste: &ToxicWaste,
        zero_knowledge: bool,
    ) -> ProtocolResult<PinocchioKey> {
        let ops = &self.ops;
        let field = qap.ring().coeff_field();
        let s = &waste.s;

        let g_ss = (1..=max_degree)
            .into_par_iter()
            .map(|i| ops.encode(&s.pow(&(i as u64).into())))
            .collect::<Result<Vec<_>, _>>()?;

        let a_mid = &qap.left[mid_start..];
        let b_mid = &qap.right[mid_start..];
        let c_mid = &qap.output[mid_start..];

        let crs_a_mid = build_alpha_crs(ops, a_mid, s, &waste.alpha_a)?;
        let crs_b_mid = build_alpha_crs(ops, b_mid, s, &waste.alpha_b)?;
        let crs_c_mid = build_alpha_crs(ops, c_mid, s, &waste.alpha_c)?;
        let beta_bundles = build_beta_bundles(ops, a_mid, b_mid, c_mid, s, &waste.beta)?;

        let t_at_s = qap.target.eval(s);

        let zk = if zero_knowledge {
            Some(ZkShiftKey {
                g_alpha_a_t: ops.encode(&waste.alpha_a.mul(&t_at_s))?,
                g_alpha_b_t: ops.encode(&waste.alpha_b.mul(&t_at_s))?,
                g_alpha_c_t: ops.encode(&waste.alpha_c.mul(&t_at_s))?,
                g_beta_t: ops.encode(&waste.beta.mul(&t_at_s))?,
            })
        } else {
            None
        };

        Ok(PinocchioKey {
            g_ss,
            crs_a_mid,
            crs_b_mid,
            crs_c_mid,
            beta_bundles,
            g_one: ops.encode(&field.one())?,
            g_alpha_a: ops.encode(&waste.alpha_a)?,
            g_alpha_b: ops.encode(&waste.alpha_b)?,
            g_alpha_c: ops.encode(&waste.alpha_c)?,
            g_beta: ops.encode(&waste.beta)?,
            g_t: ops.encode(&t_at_s)?,
            zk,
        })
    }
}
