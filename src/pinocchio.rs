//! Pinocchio verifiable computation over BLS12-381.
//!
//! [`Pinocchio::trusted_setup`] compiles an [`R1cs`](crate::r1cs::R1cs) to a QAP and
//! encodes it at a secret point, [`Pinocchio::prove`] commits to the private part of a
//! witness and [`Pinocchio::verify`] checks five pairing equations against the public
//! io coefficients.

mod crs;
mod operations;
mod prover;
mod setup;
mod types;
mod verifier;

pub use operations::PointOps;
pub use types::*;

use crate::bls12_381::Bls12_381;
use crate::errors::AlgebraResult;
use crate::field::PrimeField;
use crate::pairing::Pairing;

#[derive(Clone, Debug)]
pub struct Pinocchio {
    curve: Bls12_381,
    pairing: Pairing,
    ops: PointOps,
}

impl Pinocchio {
    pub fn new() -> AlgebraResult<Self> {
        Self::with_curve(Bls12_381::new()?)
    }

    pub fn with_curve(curve: Bls12_381) -> AlgebraResult<Self> {
        let pairing = Pairing::new(&curve)?;
        let ops = PointOps::new(curve.g1().generator().clone(), curve.g2().generator().clone());

        Ok(Self { curve, pairing, ops })
    }

    pub fn curve(&self) -> &Bls12_381 {
        &self.curve
    }

    /// Field every circuit must be defined over.
    pub fn scalar_field(&self) -> &PrimeField {
        self.curve.fr()
    }

    pub fn ops(&self) -> &PointOps {
        &self.ops
    }
}
