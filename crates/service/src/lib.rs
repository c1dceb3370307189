pub mod errors;
pub mod organizations;
pub mod runtime;
pub mod storage;
