pub mod analysis;
pub mod consultation;
pub mod derived;
pub mod snapshot;
