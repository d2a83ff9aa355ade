//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin, using
//! OpenTelemetry OTLP format with file-based exporting. Zellij plugins run in
//! a WASM sandbox with no network access, so spans are written to a JSON file
//! under the plugin data directory for offline analysis.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Trace level is controlled via the `trace_level` plugin configuration
//! option (default `"info"`). The trace file rotates at a size threshold with
//! a small number of backups retained.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
