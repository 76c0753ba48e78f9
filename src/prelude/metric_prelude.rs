pub use crate::metric::accuracy;
