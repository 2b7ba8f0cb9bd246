use num_bigint::ParseBigIntError;
use thiserror::Error;

/// Failures of the algebra layer (fields, polynomials, curves).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("Point is not on curve")]
    InvalidPoint,

    #[error("No inverse")]
    NoInverse,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Not invertible: gcd with the modulus polynomial has degree {0}")]
    NotInvertible(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed constant: {0}")]
    MalformedConstant(#[from] ParseBigIntError),
}

/// Failures of the R1CS/QAP and protocol layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Invalid witness: {0}")]
    InvalidWitness(String),

    #[error("Witness violates constraints")]
    WitnessViolatesConstraints,

    #[error("Constraint polynomial is not divisible by target")]
    NonDivisibleConstraintPolynomial,

    #[error("Evaluation key does not cover polynomial degree {degree} (supports up to {supported})")]
    EvaluationKeyDegreeOverflow { degree: usize, supported: usize },

    #[error("Setup carries no zero-knowledge shift key")]
    MissingZeroKnowledgeKey,

    #[error("R1CS must have at least one constraint")]
    EmptyConstraintSystem,

    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;

pub type ProtocolResult<T> = Result<T, ProtocolError>;
