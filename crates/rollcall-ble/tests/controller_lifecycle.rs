//! End-to-end advertising lifecycle against a scripted platform driver

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_test::assert_ok;

use rollcall_ble::{
    derive_identifier, AdvertiseMode, AdvertiseSettings, AdvertisementPayload, Advertiser,
    AdvertisingController, RadioAdapter, StartError, StartSink, TxPowerLevel,
};

// ----------------------------------------------------------------------------
// Scripted Driver
// ----------------------------------------------------------------------------

/// In-memory platform driver that records every request it receives and
/// resolves each start immediately with a scripted outcome.
struct ScriptedDriver {
    powered: bool,
    supports_advertising: bool,
    start_outcome: Result<(), i32>,
    log: Arc<Mutex<Vec<DriverEvent>>>,
}

#[derive(Debug, Clone, PartialEq)]
enum DriverEvent {
    Start(AdvertiseSettings, AdvertisementPayload),
    Stop,
}

impl ScriptedDriver {
    fn healthy() -> Self {
        Self {
            powered: true,
            supports_advertising: true,
            start_outcome: Ok(()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

struct ScriptedAdvertiser {
    start_outcome: Result<(), i32>,
    log: Arc<Mutex<Vec<DriverEvent>>>,
}

#[async_trait]
impl RadioAdapter for ScriptedDriver {
    async fn is_powered(&self) -> bool {
        self.powered
    }

    async fn advertiser(&self) -> Option<Arc<dyn Advertiser>> {
        self.supports_advertising.then(|| {
            Arc::new(ScriptedAdvertiser {
                start_outcome: self.start_outcome,
                log: self.log.clone(),
            }) as Arc<dyn Advertiser>
        })
    }
}

#[async_trait]
impl Advertiser for ScriptedAdvertiser {
    async fn start(
        &self,
        settings: AdvertiseSettings,
        payload: AdvertisementPayload,
        done: StartSink,
    ) {
        self.log
            .lock()
            .await
            .push(DriverEvent::Start(settings, payload));
        let _ = done.send(self.start_outcome);
    }

    async fn stop(&self) -> Result<(), String> {
        self.log.lock().await.push(DriverEvent::Stop);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Scenarios
// ----------------------------------------------------------------------------

#[tokio::test]
async fn teacher_beacon_full_lifecycle() {
    let driver = ScriptedDriver::healthy();
    let log = driver.log.clone();
    let controller = AdvertisingController::new(driver);

    assert_ok!(controller.start_advertising("teacher-42").await);
    assert!(controller.is_advertising().await);

    // The broadcast payload carries the deterministically derived identifier
    // and includes the device name; the settings are non-connectable and
    // biased toward fastest discovery at strongest power.
    let expected_uuid = derive_identifier("teacher-42");
    {
        let events = log.lock().await;
        match &events[..] {
            [DriverEvent::Start(settings, payload)] => {
                assert_eq!(payload.service_uuid, expected_uuid);
                assert!(payload.include_device_name);
                assert!(!settings.connectable);
                assert_eq!(settings.mode, AdvertiseMode::LowLatency);
                assert_eq!(settings.tx_power, TxPowerLevel::High);
            }
            other => panic!("unexpected driver events: {other:?}"),
        }
    }

    // Stop tears the session down; a second stop is a no-op.
    assert!(controller.stop_advertising().await.unwrap());
    assert!(!controller.is_advertising().await);
    assert!(!controller.stop_advertising().await.unwrap());

    let events = log.lock().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], DriverEvent::Stop);
}

#[tokio::test]
async fn same_seed_broadcasts_same_identifier_across_sessions() {
    let driver = ScriptedDriver::healthy();
    let log = driver.log.clone();
    let controller = AdvertisingController::new(driver);

    for _ in 0..2 {
        assert_ok!(controller.start_advertising("teacher-42").await);
        assert!(controller.stop_advertising().await.unwrap());
    }

    let events = log.lock().await;
    let uuids: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            DriverEvent::Start(_, payload) => Some(payload.service_uuid),
            DriverEvent::Stop => None,
        })
        .collect();
    assert_eq!(uuids.len(), 2);
    assert_eq!(uuids[0], uuids[1]);
    assert_eq!(uuids[0], derive_identifier("teacher-42"));
}

#[tokio::test]
async fn precondition_failures_never_reach_the_driver() {
    let mut driver = ScriptedDriver::healthy();
    driver.powered = false;
    let log = driver.log.clone();
    let controller = AdvertisingController::new(driver);

    let err = controller.start_advertising("teacher-42").await.unwrap_err();
    assert_eq!(err.code(), "BLUETOOTH_NOT_ENABLED");
    assert!(log.lock().await.is_empty());

    let mut driver = ScriptedDriver::healthy();
    driver.supports_advertising = false;
    let log = driver.log.clone();
    let controller = AdvertisingController::new(driver);

    let err = controller.start_advertising("teacher-42").await.unwrap_err();
    assert_eq!(err.code(), "ADVERTISER_NOT_AVAILABLE");
    assert!(log.lock().await.is_empty());
}

#[tokio::test]
async fn platform_rejection_resolves_the_attempt_once() {
    let mut driver = ScriptedDriver::healthy();
    driver.start_outcome = Err(3);
    let controller = AdvertisingController::new(driver);

    let err = controller.start_advertising("teacher-42").await.unwrap_err();
    assert!(matches!(err, StartError::AdvertiseStartFailed(3)));
    assert_eq!(err.code(), "ADVERTISE_FAILED");

    // The failed attempt leaves no session behind.
    assert!(!controller.is_advertising().await);
    assert!(!controller.stop_advertising().await.unwrap());
}
