//! Advertising session controller

use std::sync::Arc;

use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};

use crate::driver::{Advertiser, RadioAdapter};
use crate::error::{StartError, StopError};
use crate::identifier::derive_identifier;
use crate::payload::{AdvertiseSettings, AdvertisementPayload};

// ----------------------------------------------------------------------------
// Session State
// ----------------------------------------------------------------------------

/// One active advertising session.
struct AdvertisingSession {
    /// The capability the session was started on; stop goes through it.
    advertiser: Arc<dyn Advertiser>,
    /// Payload on air for this session.
    payload: AdvertisementPayload,
}

/// Lifecycle state of the controller's single session slot.
#[derive(Default)]
enum SessionSlot {
    /// No session pending or active.
    #[default]
    Idle,
    /// A start request was submitted; its completion sink has not resolved.
    Starting,
    /// The platform confirmed the advertisement; radio is transmitting.
    Active(AdvertisingSession),
}

// ----------------------------------------------------------------------------
// Controller
// ----------------------------------------------------------------------------

/// Mediates start/stop of BLE peripheral advertising against a platform radio.
///
/// At most one session may be pending or active per controller. Each start
/// attempt resolves exactly once, and stopping when nothing is active is a
/// no-op reported as `Ok(false)`.
pub struct AdvertisingController<R> {
    radio: R,
    settings: AdvertiseSettings,
    slot: Mutex<SessionSlot>,
}

impl<R: RadioAdapter> AdvertisingController<R> {
    /// Create a controller with the default broadcast policy: low-latency
    /// discovery, high transmit power, non-connectable.
    pub fn new(radio: R) -> Self {
        Self::with_settings(radio, AdvertiseSettings::default())
    }

    /// Create a controller with custom advertising settings.
    pub fn with_settings(radio: R, settings: AdvertiseSettings) -> Self {
        Self {
            radio,
            settings,
            slot: Mutex::new(SessionSlot::Idle),
        }
    }

    /// Start advertising, identifying this device by the identifier derived
    /// from `seed`. Suspends until the platform reports the start outcome.
    ///
    /// Fails with [`StartError::SessionAlreadyPending`] while a prior start
    /// is unresolved or its session is still on air.
    pub async fn start_advertising(&self, seed: &str) -> Result<(), StartError> {
        {
            let mut slot = self.slot.lock().await;
            if !matches!(*slot, SessionSlot::Idle) {
                return Err(StartError::SessionAlreadyPending);
            }
            *slot = SessionSlot::Starting;
        }

        // Any failure below must return the slot to Idle so the next start
        // attempt is possible.
        match self.submit_start(seed).await {
            Ok(session) => {
                *self.slot.lock().await = SessionSlot::Active(session);
                Ok(())
            }
            Err(err) => {
                *self.slot.lock().await = SessionSlot::Idle;
                Err(err)
            }
        }
    }

    async fn submit_start(&self, seed: &str) -> Result<AdvertisingSession, StartError> {
        if !self.radio.is_powered().await {
            warn!("advertising start rejected: radio absent or powered off");
            return Err(StartError::RadioUnavailable);
        }

        let advertiser = self.radio.advertiser().await.ok_or_else(|| {
            warn!("advertising start rejected: platform exposes no BLE advertiser");
            StartError::AdvertiserUnsupported
        })?;

        let payload = AdvertisementPayload::new(derive_identifier(seed));
        debug!(service_uuid = %payload.service_uuid, "submitting advertising start request");

        let (done, pending) = oneshot::channel();
        advertiser
            .start(self.settings.clone(), payload.clone(), done)
            .await;

        match pending.await {
            Ok(Ok(())) => {
                info!(service_uuid = %payload.service_uuid, "BLE advertising started");
                Ok(AdvertisingSession {
                    advertiser,
                    payload,
                })
            }
            Ok(Err(code)) => {
                warn!(code, "platform rejected advertising start");
                Err(StartError::AdvertiseStartFailed(code))
            }
            Err(_) => {
                warn!("advertising driver dropped the completion sink");
                Err(StartError::DriverGone)
            }
        }
    }

    /// Stop the active advertising session.
    ///
    /// Returns `Ok(true)` when a session was torn down and `Ok(false)` when
    /// none was active. The session slot is cleared even when the platform
    /// reports a stop failure, so the controller never believes a session is
    /// still on air after the driver tore it down.
    pub async fn stop_advertising(&self) -> Result<bool, StopError> {
        let session = {
            let mut slot = self.slot.lock().await;
            match std::mem::take(&mut *slot) {
                SessionSlot::Active(session) => session,
                SessionSlot::Starting => {
                    // Stop does not cancel an unresolved start.
                    *slot = SessionSlot::Starting;
                    debug!("stop requested while a start is still pending");
                    return Ok(false);
                }
                SessionSlot::Idle => {
                    debug!("stop requested with no active advertising session");
                    return Ok(false);
                }
            }
        };

        match session.advertiser.stop().await {
            Ok(()) => {
                info!("BLE advertising stopped");
                Ok(true)
            }
            Err(message) => {
                warn!(%message, "platform error while stopping advertising");
                Err(StopError::StopFailed(message))
            }
        }
    }

    /// Whether a confirmed advertisement is currently on air.
    pub async fn is_advertising(&self) -> bool {
        matches!(*self.slot.lock().await, SessionSlot::Active(_))
    }

    /// Payload of the active session, if any.
    pub async fn active_payload(&self) -> Option<AdvertisementPayload> {
        match &*self.slot.lock().await {
            SessionSlot::Active(session) => Some(session.payload.clone()),
            _ => None,
        }
    }
}
