mod allocate;
mod pv;
mod rank;

pub use allocate::{AllocateArgs, process_allocate};
pub use pv::{PvArgs, process_pv};
pub use rank::{RankArgs, process_rank};
