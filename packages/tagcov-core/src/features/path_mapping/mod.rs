//! Path Mapping Feature
//!
//! Source tree path → output tree base path. Assumes the build mirrors the
//! source layout one to one.

pub mod mapper;

pub use mapper::PathMapper;
