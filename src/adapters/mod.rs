// Adapters layer: concrete implementations for external systems (store backends, http surface).

pub mod http;
pub mod storage;
