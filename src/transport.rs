//! HID transport seam.

use hidapi::{HidApi, HidDevice};

use crate::error::Error;

/// MSI SteelSeries keyboard HID identity.
const VENDOR_ID: u16 = 0x1770;
const PRODUCT_ID: u16 = 0xff00;

/// Feature report sink, backed by the keyboard in production and by a
/// recording double in tests.
pub(crate) trait Transport {
    fn send_feature_report(&mut self, report: &[u8]) -> Result<(), Error>;
}

/// The real keyboard, opened once per process.
pub(crate) struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    pub(crate) fn open() -> Result<Self, Error> {
        let api = HidApi::new()
            .map_err(|err| Error::Transport(format!("unable to access HID: {}", err)))?;
        let device = api.open(VENDOR_ID, PRODUCT_ID).map_err(|err| {
            Error::Transport(format!(
                "unable to open keyboard: {} (root permissions required)",
                err
            ))
        })?;
        Ok(Self { device })
    }
}

impl Transport for HidTransport {
    fn send_feature_report(&mut self, report: &[u8]) -> Result<(), Error> {
        self.device
            .send_feature_report(report)
            .map_err(|err| Error::Transport(format!("unable to send feature report: {}", err)))
    }
}
