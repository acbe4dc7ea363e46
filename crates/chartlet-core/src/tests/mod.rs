#[cfg(feature = "generate")]
mod properties;
