//! ideagen observability - logging and optional trace export
//!
//! Console logs go to stderr so that stdout carries only ideas and
//! machine-readable output. When an OTLP endpoint is configured, spans are
//! also exported over gRPC.
//!
//! # Quick Start
//!
//! ```no_run
//! use ideagen_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("ideagen").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("ready");
//! # Ok::<(), ideagen_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `IDEAGEN_LOG`, `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint (export disabled when unset)
//! - `OTEL_SERVICE_NAME` - Service name (default `ideagen`)

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use crate::tracing::record_duration;
