mod core_ops;

pub use core_ops::*;
