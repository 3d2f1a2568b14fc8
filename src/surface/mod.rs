//! The control registry: every physical control of the surface, owned in
//! one arena, addressable by MIDI CC identifier.

mod control;
pub use control::{Control, Kind, MAX_VALUE};

mod layout;
pub use layout::{Track, TransportButtons, CONTROL_COUNT, TRACK_COUNT};

/// Opaque handle to a control owned by a [`Surface`].
///
/// Handles index the surface's arena, so a handle is only meaningful for
/// the surface that produced it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlId(pub(crate) usize);

/// The whole device: 8 channel strips plus the transport bank.
///
/// The surface owns its 51 [`Control`]s in a flat arena; [`Track`] and
/// [`TransportButtons`] hold arena handles, and a dense per-identifier
/// table built once at construction routes incoming messages. The arena
/// is the single source of truth, the table only indexes it.
pub struct Surface {
    controls: Vec<Control>,
    tracks: [Track; TRACK_COUNT],
    transport: TransportButtons,
    by_identifier: [Option<ControlId>; 128],
}

impl Surface {
    /// Builds the fixed layout. No I/O is involved.
    pub fn new() -> Self {
        let mut controls = Vec::with_capacity(CONTROL_COUNT);

        let tracks = std::array::from_fn(|n| Track::build(n, &mut controls));
        let transport = TransportButtons::build(&mut controls);

        // Identifiers are unique by construction. Should the layout table
        // ever regress, the last registered control wins its slot.
        let mut by_identifier = [None; 128];
        for (idx, control) in controls.iter().enumerate() {
            by_identifier[control.identifier() as usize] = Some(ControlId(idx));
        }

        Self {
            controls,
            tracks,
            transport,
            by_identifier,
        }
    }

    /// Resolves a MIDI CC identifier to the control listening on it.
    pub fn lookup(&self, identifier: u8) -> Option<ControlId> {
        *self.by_identifier.get(identifier as usize)?
    }

    /// Routes one decoded CC message to its control.
    ///
    /// This is the sole mutating entry point and it never fails: the
    /// device emits CC numbers this model does not cover (jog wheel, LED
    /// feedback echoes), so an unmapped identifier is ignored, and an out
    /// of range value is clamped by [`Control::set_value`]. A malformed
    /// message must never stop the live control stream.
    ///
    /// Callers are expected to invoke this from a single execution
    /// context, in message arrival order.
    pub fn dispatch(&mut self, identifier: u8, value: u8) {
        match self.lookup(identifier) {
            Some(id) => self.controls[id.0].set_value(value),
            None => log::trace!("ignoring unmapped cc {identifier} (value {value})"),
        }
    }

    pub fn control(&self, id: ControlId) -> &Control {
        &self.controls[id.0]
    }

    pub fn control_mut(&mut self, id: ControlId) -> &mut Control {
        &mut self.controls[id.0]
    }

    pub fn tracks(&self) -> &[Track; TRACK_COUNT] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> &Track {
        &self.tracks[index]
    }

    pub fn transport(&self) -> &TransportButtons {
        &self.transport
    }

    /// All owned controls, in layout order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    /// Handles of all owned controls, in layout order.
    pub fn control_ids(&self) -> impl Iterator<Item = ControlId> {
        (0..self.controls.len()).map(ControlId)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<ControlId> for Surface {
    type Output = Control;

    fn index(&self, id: ControlId) -> &Control {
        self.control(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn every_identifier_resolves_to_its_own_control() {
        let surface = Surface::new();

        let mut mapped = 0;
        for identifier in 0..=127u8 {
            if let Some(id) = surface.lookup(identifier) {
                assert_eq!(surface[id].identifier(), identifier);
                mapped += 1;
            }
        }
        assert_eq!(mapped, CONTROL_COUNT);
    }

    #[test]
    fn dispatch_updates_exactly_one_control() {
        let mut surface = Surface::new();
        surface.dispatch(17, 99); // knob 2

        for control in surface.controls() {
            if control.identifier() == 17 {
                assert_eq!(control.value(), 99);
            } else {
                assert_eq!(control.value(), 0);
            }
        }
    }

    #[test]
    fn unmapped_dispatch_is_a_no_op() {
        let mut surface = Surface::new();

        // Observers on every control so that any spurious update trips.
        for id in surface.control_ids().collect::<Vec<_>>() {
            surface
                .control_mut(id)
                .set_on_change(|ctrl| panic!("unexpected update of {}", ctrl.name()));
        }

        // 127 is outside the mapped tables; 15 sits in the slider/knob gap.
        surface.dispatch(127, 64);
        surface.dispatch(15, 64);

        for control in surface.controls() {
            assert_eq!(control.value(), 0);
        }
    }

    #[test]
    fn no_identifier_collisions_across_the_surface() {
        let surface = Surface::new();

        let mut seen = [false; 128];
        for control in surface.controls() {
            let idx = control.identifier() as usize;
            assert!(!seen[idx], "duplicate identifier {idx}");
            seen[idx] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), CONTROL_COUNT);
    }

    #[test]
    fn observer_runs_on_the_dispatch_path() {
        let mut surface = Surface::new();
        let count = Arc::new(AtomicUsize::new(0));

        let play = surface.transport().play;
        let count_in_cb = count.clone();
        surface.control_mut(play).set_on_change(move |ctrl| {
            assert_eq!(ctrl.name(), "Play");
            assert!(ctrl.is_pressed());
            count_in_cb.fetch_add(1, Ordering::SeqCst);
        });

        surface.dispatch(41, 127);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn solo_press_release_and_marker_scenario() {
        let mut surface = Surface::new();

        surface.dispatch(32, 127);
        let solo = surface.track(0).solo;
        assert_eq!(surface[solo].value(), 127);
        assert!(surface[solo].is_pressed());

        surface.dispatch(32, 0);
        assert!(surface[solo].is_released());

        surface.dispatch(61, 64);
        let marker_prev = surface.transport().marker_prev;
        assert_eq!(surface[marker_prev].value(), 64);
        assert!((surface[marker_prev].percentage() - 0.504).abs() < 1e-3);
    }

    #[test]
    fn track_handles_point_into_the_arena() {
        let mut surface = Surface::new();

        for n in 0..TRACK_COUNT {
            let track = *surface.track(n);
            surface.dispatch(n as u8, 42);
            assert_eq!(surface[track.slider].value(), 42);
            assert_eq!(surface[track.slider].name(), format!("Slider {}", n + 1));
        }
    }
}
