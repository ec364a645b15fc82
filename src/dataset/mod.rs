mod outcome;
mod policy;
mod rows;
mod validate;

pub use outcome::{BenefitStream, Outcome, OutcomeValue};
pub use policy::{Dataset, Policy};
pub use rows::read_dataset;
pub use validate::validate;
