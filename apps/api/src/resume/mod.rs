// Resume analysis: mock scorer, bundled sample text and the service that
// simulates analysis latency.

pub mod analyzer;
pub mod handlers;
pub mod sample;
pub mod service;

pub use service::ResumeService;
