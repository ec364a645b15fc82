mod pv;
mod rate;

pub use pv::present_value;
pub use rate::DiscountRate;
