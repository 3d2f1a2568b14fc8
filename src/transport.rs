//! Transport adapter: turns the raw midir input stream into a serialized
//! stream of decoded Control Change messages.
//!
//! midir delivers messages on its own input thread. Decoding happens there,
//! but nothing else: decoded messages are handed over a channel so that a
//! single consumer drives [`Surface::dispatch`](crate::Surface::dispatch)
//! in arrival order.

use crossbeam_channel as channel;
use std::sync::Arc;

use crate::midi::{self, CcMsg};

/// Substring the device's input port advertises on every platform.
pub const DEVICE_PORT_HINT: &str = "nanoKONTROL";

pub struct Transport {
    ports: midi::PortsIn<channel::Sender<CcMsg>>,
}

impl Transport {
    /// Creates the adapter and the receiving end of its CC stream.
    pub fn try_new(
        client_name: impl Into<Arc<str>>,
    ) -> Result<(Self, channel::Receiver<CcMsg>), midi::Error> {
        let (cc_tx, cc_rx) = channel::unbounded();

        let mut ports = midi::PortsIn::try_new(client_name.into(), cc_tx)?;
        ports.refresh()?;

        Ok((Self { ports }, cc_rx))
    }

    /// Rescans the available input ports.
    pub fn refresh(&mut self) -> Result<(), midi::Error> {
        self.ports.refresh()
    }

    /// Names of the known input ports.
    pub fn ports(&self) -> impl Iterator<Item = Arc<str>> + '_ {
        self.ports.list()
    }

    /// Name of the currently connected port, if any.
    pub fn connected_port(&self) -> Option<Arc<str>> {
        self.ports.cur()
    }

    /// Connects to a port by exact name.
    pub fn connect(&mut self, port_name: Arc<str>) -> Result<(), midi::Error> {
        self.ports.connect(port_name, forward_cc)
    }

    /// Connects to the first port whose name contains `hint`,
    /// e.g. [`DEVICE_PORT_HINT`].
    pub fn connect_matching(&mut self, hint: &str) -> Result<Arc<str>, midi::Error> {
        let port_name = self
            .ports
            .list()
            .find(|name| name.contains(hint))
            .ok_or_else(|| midi::Error::NoMatchingPort(hint.into()))?;

        self.connect(port_name.clone())?;

        Ok(port_name)
    }

    pub fn disconnect(&mut self) {
        self.ports.disconnect();
    }
}

/// midir input callback: decode, filter to CC, forward.
fn forward_cc(_ts: u64, buf: &[u8], cc_tx: &mut channel::Sender<CcMsg>) {
    match CcMsg::try_parse(buf) {
        Ok(cc) => {
            // Send only fails once the consumer is gone, which means the
            // session is shutting down anyway.
            let _ = cc_tx.send(cc);
        }
        Err(midi::Error::NotControlChange(_)) => {
            log::trace!(
                "filtered non-CC message {}",
                crate::bytes::Displayable::from(buf)
            );
        }
        Err(err) => log::debug!("{err}"),
    }
}
