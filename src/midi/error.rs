use crate::bytes;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("MIDI initialization failed")]
    Init(#[from] midir::InitError),

    #[error("Error connecting to MIDI port {}", .0)]
    Connection(Arc<str>),

    #[error("Couldn't retrieve a MIDI port name")]
    PortInfo(#[from] midir::PortInfoError),

    #[error("Invalid MIDI port name {}", .0)]
    PortNotFound(Arc<str>),

    #[error("No input port matching \"{}\"", .0)]
    NoMatchingPort(Arc<str>),

    #[error("Not a Control Change message: {}", .0)]
    NotControlChange(bytes::Displayable<'static>),

    #[error("Truncated MIDI message: {}", .0)]
    Truncated(bytes::Displayable<'static>),
}
