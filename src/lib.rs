//! Model of the Korg nanoKONTROL2 control surface.
//!
//! The device transmits one MIDI Control Change message per physical
//! gesture. [`Surface`] maps every controller number of the fixed factory
//! layout to a named, typed [`Control`] and routes incoming `(identifier,
//! value)` pairs to it, firing the control's change observer inline.
//!
//! ```no_run
//! use nanokontrol2::{transport::Transport, Surface};
//!
//! # fn main() -> Result<(), nanokontrol2::midi::Error> {
//! let mut surface = Surface::new();
//!
//! let play = surface.transport().play;
//! surface
//!     .control_mut(play)
//!     .set_on_change(|ctrl| println!("{} -> {}", ctrl.name(), ctrl.value()));
//!
//! let (mut transport, cc_rx) = Transport::try_new("nk2 example")?;
//! transport.connect_matching(nanokontrol2::transport::DEVICE_PORT_HINT)?;
//!
//! for cc in cc_rx {
//!     surface.dispatch(cc.controller, cc.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bytes;
pub mod midi;
pub mod surface;
pub use surface::{Control, ControlId, Kind, Surface, Track, TransportButtons};
pub mod transport;
