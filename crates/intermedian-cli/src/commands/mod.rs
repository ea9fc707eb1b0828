//! Command implementations.

pub mod analyze;
pub mod calc;
pub mod configure;
pub mod subintervals;

pub use self::analyze::execute_analyze;
pub use self::calc::execute_calc;
pub use self::configure::execute_config;
pub use self::subintervals::execute_subintervals;
