use crate::bls12_381::{G1Point, G2Point};
use crate::field::{PrimeField, PrimeFieldElement};
use crate::polynomial::Polynomial;
use crate::r1cs::R1cs;

/// The same scalar encoded in both source groups: `(g1^v, g2^v)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PairedPoint {
    pub g1: G1Point,
    pub g2: G2Point,
}

/// Knowledge-of-exponent pairs for one wire-polynomial family, mid wires only.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaCrs {
    /// `g^{u_k(s)}`
    pub g_poly_at_s: Vec<PairedPoint>,
    /// `g^{alpha * u_k(s)}`
    pub g_alpha_poly_at_s: Vec<PairedPoint>,
}

/// Public circuit data: the QAP wire polynomials and target.
#[derive(Clone, Debug)]
pub struct PinocchioCircuit {
    pub r1cs: R1cs,
    pub aps: Vec<Polynomial<PrimeFieldElement>>,
    pub bps: Vec<Polynomial<PrimeFieldElement>>,
    pub cps: Vec<Polynomial<PrimeFieldElement>>,
    pub t: Polynomial<PrimeFieldElement>,
}

/// Extra CRS points that let the prover add multiples of `t(s)` to its
/// mid-wire commitments.
#[derive(Clone, Debug, PartialEq)]
pub struct ZkShiftKey {
    pub g_alpha_a_t: PairedPoint,
    pub g_alpha_b_t: PairedPoint,
    pub g_alpha_c_t: PairedPoint,
    pub g_beta_t: PairedPoint,
}

/// Encoded CRS shared by prover and verifier.
#[derive(Clone, Debug, PartialEq)]
pub struct PinocchioKey {
    /// `g^{s^1}, ..., g^{s^max_degree}`
    pub g_ss: Vec<PairedPoint>,
    pub crs_a_mid: AlphaCrs,
    pub crs_b_mid: AlphaCrs,
    pub crs_c_mid: AlphaCrs,
    /// `g^{beta * (a_k(s) + b_k(s) + c_k(s))}` per mid wire
    pub beta_bundles: Vec<PairedPoint>,
    pub g_one: PairedPoint,
    pub g_alpha_a: PairedPoint,
    pub g_alpha_b: PairedPoint,
    pub g_alpha_c: PairedPoint,
    pub g_beta: PairedPoint,
    pub g_t: PairedPoint,
    pub zk: Option<ZkShiftKey>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinocchioMetadata {
    pub field: PrimeField,
    pub input_count: usize,
    pub output_count: usize,
    pub private_input_count: usize,
    /// Index of the first non-public wire in the witness vector.
    pub mid_start: usize,
    pub max_degree: usize,
    pub constraint_count: usize,
}

#[derive(Clone, Debug)]
pub struct PinocchioSetup {
    pub circuit: PinocchioCircuit,
    pub key: PinocchioKey,
    pub metadata: PinocchioMetadata,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinocchioProof {
    pub g_h: PairedPoint,
    pub g_a_mid: PairedPoint,
    pub g_alpha_a_mid: PairedPoint,
    pub g_b_mid: PairedPoint,
    pub g_alpha_b_mid: PairedPoint,
    pub g_c_mid: PairedPoint,
    pub g_alpha_c_mid: PairedPoint,
    pub g_z: PairedPoint,
}

impl PinocchioProof {
    pub fn points(&self) -> [(&'static str, &PairedPoint); 8] {
        [
            ("g_h", &self.g_h),
            ("g_a_mid", &self.g_a_mid),
            ("g_alpha_a_mid", &self.g_alpha_a_mid),
            ("g_b_mid", &self.g_b_mid),
            ("g_alpha_b_mid", &self.g_alpha_b_mid),
            ("g_c_mid", &self.g_c_mid),
            ("g_alpha_c_mid", &self.g_alpha_c_mid),
            ("g_z", &self.g_z),
        ]
    }
}

/// Public io coefficients `w[..mid_start]` and the proof for them.
#[derive(Clone, Debug, PartialEq)]
pub struct ProveResult {
    pub io_coeffs: Vec<PrimeFieldElement>,
    pub proof: PinocchioProof,
}
