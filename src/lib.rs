pub mod errors;
pub mod algebra;
pub mod field;
pub mod polynomial;
pub mod extension_field;
pub mod curve;
pub mod bls12_381;
pub mod pairing;
pub mod poly_utils;
pub mod evaluation_domain;
pub mod r1cs;
pub mod qap;
pub mod sampler;
pub mod pinocchio;
pub mod kzg;

#[cfg(test)]
mod test_utils;

pub use errors::*;
pub use algebra::{EuclideanElement, FieldElement, RingElement, Structure};
pub use bls12_381::Bls12_381;
pub use pairing::Pairing;
pub use r1cs::{R1cs, StructuralWitness, WireIndex};
pub use qap::Qap;
pub use sampler::{FieldSampler, FixedSampler};
pub use pinocchio::*;
