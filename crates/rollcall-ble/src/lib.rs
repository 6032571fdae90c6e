//! BLE presence advertising for the rollcall attendance system
//!
//! This crate lets a device (the "teacher" in a classroom) broadcast its
//! presence over Bluetooth Low Energy, identified by a 128-bit service UUID
//! derived deterministically from an opaque seed string. Students discover
//! the broadcast with an ordinary BLE scanner; this crate is the broadcasting
//! side only.
//!
//! ## Architecture
//!
//! - [`identifier`] - Deterministic name-based identifier derivation
//! - [`payload`] - Advertising settings and payload types
//! - [`driver`] - Platform capability traits (radio and advertiser)
//! - [`platform`] - Platform radio implementations and detection
//! - [`controller`] - The advertising session controller
//! - [`error`] - Error types with host-facing error codes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall_ble::{AdvertisingController, PlatformRadio};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = AdvertisingController::new(PlatformRadio::new());
//!
//! // Broadcast presence under the identifier derived from "teacher-42".
//! controller.start_advertising("teacher-42").await?;
//!
//! // ...
//!
//! // `false` here would mean no session was active.
//! let was_active = controller.stop_advertising().await?;
//! assert!(was_active);
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform Support
//!
//! - **Linux**: Full support via the `bluer` crate (BlueZ)
//! - **Other platforms**: Reported as radio-unavailable; `start_advertising`
//!   fails with [`StartError::RadioUnavailable`]

mod controller;
mod driver;
mod error;
mod identifier;
mod payload;
mod platform;

// Public API exports
pub use controller::AdvertisingController;
pub use driver::{start_failure, Advertiser, RadioAdapter, StartSink};
pub use error::{StartError, StopError};
pub use identifier::derive_identifier;
pub use payload::{AdvertiseMode, AdvertiseSettings, AdvertisementPayload, TxPowerLevel};
pub use platform::PlatformRadio;
