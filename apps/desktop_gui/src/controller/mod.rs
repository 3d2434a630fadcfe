//! Controller layer: status notices and the click queue between painting and dispatch.

pub mod events;
pub mod orchestration;
