pub mod iter;
pub mod logging;
