pub mod api;
pub mod catalog;
pub mod device;
pub mod error;
pub mod estimate;

pub use catalog::PriceCatalog;
pub use device::{Device, DeviceVendor};
pub use error::CostError;
pub use estimate::{CostEstimate, PricePair};
