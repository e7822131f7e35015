//! Logging and OpenTelemetry tracing with file-based export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros ─┬─ fmt layer ─────────────────────────────→ stderr
//!                 └─ tracing-opentelemetry → SDK → FileSpanExporter → JSON lines
//! ```
//!
//! The OpenTelemetry branch is only installed when `trace_file` is configured.
//!
//! # Features
//!
//! - **File-Based Export**: one OTLP JSON document per line
//! - **Automatic Rotation**: files rotate at 10MB with 3-backup retention
//! - **Resource Metadata**: service name and version
//!
//! # Configuration
//!
//! Filter directives come from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
