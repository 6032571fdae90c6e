//! Linux radio implementation using bluer (BlueZ)

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::driver::{start_failure, Advertiser, RadioAdapter, StartSink};
use crate::payload::{AdvertiseSettings, AdvertisementPayload};

// ----------------------------------------------------------------------------
// Linux Implementation
// ----------------------------------------------------------------------------

/// BlueZ-backed radio. The adapter is resolved fresh per query so a radio
/// toggled off between calls is observed.
pub struct LinuxRadio;

impl LinuxRadio {
    pub fn new() -> Self {
        Self
    }

    async fn default_adapter(&self) -> Option<bluer::Adapter> {
        let session = bluer::Session::new().await.ok()?;
        session.default_adapter().await.ok()
    }
}

impl Default for LinuxRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RadioAdapter for LinuxRadio {
    async fn is_powered(&self) -> bool {
        match self.default_adapter().await {
            Some(adapter) => adapter.is_powered().await.unwrap_or(false),
            None => false,
        }
    }

    async fn advertiser(&self) -> Option<Arc<dyn Advertiser>> {
        let adapter = self.default_adapter().await?;
        Some(Arc::new(BluerAdvertiser {
            adapter,
            handle: Mutex::new(None),
        }))
    }
}

/// Advertiser capability over a BlueZ adapter.
struct BluerAdvertiser {
    adapter: bluer::Adapter,
    /// Registration handle; dropping it unregisters the advertisement.
    handle: Mutex<Option<bluer::adv::AdvertisementHandle>>,
}

#[async_trait::async_trait]
impl Advertiser for BluerAdvertiser {
    async fn start(
        &self,
        settings: AdvertiseSettings,
        payload: AdvertisementPayload,
        done: StartSink,
    ) {
        let local_name = if payload.include_device_name {
            self.adapter.alias().await.ok()
        } else {
            None
        };

        let advertisement = bluer::adv::Advertisement {
            advertisement_type: if settings.connectable {
                bluer::adv::Type::Peripheral
            } else {
                bluer::adv::Type::Broadcast
            },
            service_uuids: std::iter::once(payload.service_uuid).collect(),
            local_name,
            discoverable: settings.connectable.then_some(true),
            min_interval: Some(settings.mode.interval()),
            max_interval: Some(settings.mode.interval()),
            tx_power: Some(settings.tx_power.dbm()),
            ..Default::default()
        };

        match self.adapter.advertise(advertisement).await {
            Ok(handle) => {
                *self.handle.lock().await = Some(handle);
                info!(service_uuid = %payload.service_uuid, "BlueZ advertisement registered");
                let _ = done.send(Ok(()));
            }
            Err(err) => {
                debug!(%err, "BlueZ rejected advertisement registration");
                let _ = done.send(Err(start_failure::INTERNAL_ERROR));
            }
        }
    }

    async fn stop(&self) -> Result<(), String> {
        if self.handle.lock().await.take().is_some() {
            info!("BlueZ advertisement unregistered");
        }
        Ok(())
    }
}
