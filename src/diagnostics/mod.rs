// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting activity events.
//!
//! Events from the update loop and from background tasks are stored in a
//! memory-bounded circular buffer and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender for async tasks

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
