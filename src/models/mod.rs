pub mod observables;
pub mod assessment;
pub mod wallet_scan;

pub use observables::*;
pub use assessment::*;
pub use wallet_scan::*;
