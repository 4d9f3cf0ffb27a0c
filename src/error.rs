use thiserror::Error;

/// Errors raised while assembling a roster. Construction is all-or-nothing:
/// a vehicle with an out-of-range parameter never comes into existence.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("a truck must weigh between 1000 kg and 10000 kg, got {0} kg")]
    TruckWeightOutOfRange(f32),

    #[error("displacement must be between 125 cc and 1000 cc, got {0} cc")]
    DisplacementOutOfRange(u32),

    #[error("vehicle names must be unique, '{0}' is already taken")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
