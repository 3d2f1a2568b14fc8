//! MIDI input port enumeration and connection.
//!
//! Only the input direction exists here: the nanoKONTROL2 model receives
//! control changes and never drives LEDs back.

use std::{collections::BTreeMap, sync::Arc};

use super::Error;

enum Connection<D: 'static> {
    Connected(midir::MidiInputConnection<D>),
    Disconnected((midir::MidiInput, D)),
    None,
}

impl<D> Default for Connection<D> {
    fn default() -> Self {
        Self::None
    }
}

/// Known input ports, at most one of them connected.
pub struct PortsIn<D: 'static> {
    map: BTreeMap<Arc<str>, midir::MidiInputPort>,
    cur: Option<Arc<str>>,
    conn: Connection<D>,
    client_name: Arc<str>,
}

impl<D: Send + Clone + 'static> PortsIn<D> {
    pub fn try_new(client_name: Arc<str>, data: D) -> Result<Self, Error> {
        let input = midir::MidiInput::new(&client_name)?;

        Ok(Self {
            map: BTreeMap::new(),
            cur: None,
            conn: Connection::Disconnected((input, data)),
            client_name,
        })
    }

    /// Rescans the available input ports, keeping the current connection.
    ///
    /// Ports published by this client are skipped so the application never
    /// loops back onto itself.
    pub fn refresh(&mut self) -> Result<(), Error> {
        let scanner = midir::MidiInput::new(&format!("{} port scan", self.client_name))?;

        self.map.clear();
        for port in scanner.ports().iter() {
            let name = scanner.port_name(port)?;
            if !name.starts_with(self.client_name.as_ref()) {
                self.map.insert(name.into(), port.clone());
            }
        }

        Ok(())
    }

    /// Names of the known ports, sorted.
    pub fn list(&self) -> impl Iterator<Item = Arc<str>> + '_ {
        self.map.keys().cloned()
    }

    /// Name of the currently connected port, if any.
    pub fn cur(&self) -> Option<Arc<str>> {
        self.cur.clone()
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.conn, Connection::Connected(_))
    }

    /// Connects to `port_name`, invoking `callback` for every incoming
    /// message on midir's input thread.
    pub fn connect<C>(&mut self, port_name: Arc<str>, callback: C) -> Result<(), Error>
    where
        C: FnMut(u64, &[u8], &mut D) + Send + 'static,
    {
        let port = self
            .map
            .get(&port_name)
            .ok_or_else(|| Error::PortNotFound(port_name.clone()))?
            .clone();

        self.disconnect();
        match std::mem::take(&mut self.conn) {
            Connection::Disconnected((input, data)) => {
                match input.connect(&port, &self.client_name, callback, data.clone()) {
                    Ok(conn) => self.conn = Connection::Connected(conn),
                    Err(err) => {
                        // err.into_inner() doesn't give the data back,
                        // hence the Clone bound on D.
                        self.conn = Connection::Disconnected((err.into_inner(), data));
                        self.cur = None;

                        let err = Error::Connection(port_name);
                        log::error!("{err}");
                        return Err(err);
                    }
                }
            }
            _ => unreachable!(),
        }

        log::info!("Connected for input to {port_name}");
        self.cur = Some(port_name);

        Ok(())
    }

    pub fn disconnect(&mut self) {
        if self.is_connected() {
            match std::mem::take(&mut self.conn) {
                Connection::Connected(conn) => {
                    let (input, data) = conn.close();
                    self.conn = Connection::Disconnected((input, data));
                }
                _ => unreachable!(),
            }
        }

        if let Some(cur) = self.cur.take() {
            log::debug!("Disconnected input from {cur}");
        }
    }
}
