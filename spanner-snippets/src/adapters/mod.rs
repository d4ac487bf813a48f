#[cfg(feature = "spanner")]
pub mod spanner;

#[cfg(feature = "spanner")]
pub use spanner::SpannerClients;
