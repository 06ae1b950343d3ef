//! Export of sampler traces. Each format sits behind a cargo feature of the same name.

#[cfg(feature = "csv")]
pub mod csv;
