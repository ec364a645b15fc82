mod two_period;

pub use two_period::{Allocation, AllocationInputs, allocate};
