//! Service implementations
//!
//! Real implementations of the A/B testing services for production use

pub mod ab_http_api;
pub mod banner;
pub mod hit_reporter;

#[cfg(test)]
mod tests;

pub use ab_http_api::ABHttpApi;
pub use banner::BannerService;
pub use hit_reporter::HitReporter;
