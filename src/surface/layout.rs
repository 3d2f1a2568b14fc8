//! Fixed nanoKONTROL2 layout: which CC number each physical control
//! transmits on. The scheme is wired into the device firmware (factory
//! scene), not negotiated at runtime.

use super::{Control, ControlId, Kind};

pub const TRACK_COUNT: usize = 8;
pub const CONTROLS_PER_TRACK: usize = 5;
pub const TRANSPORT_BUTTON_COUNT: usize = 11;
pub const CONTROL_COUNT: usize = TRACK_COUNT * CONTROLS_PER_TRACK + TRANSPORT_BUTTON_COUNT;

/// CC number offsets of the per-track controls. Track `n` transmits on
/// `offset + n`.
mod track_cc {
    pub const SLIDER: u8 = 0;
    pub const KNOB: u8 = 16;
    pub const SOLO: u8 = 32;
    pub const MUTE: u8 = 48;
    pub const RECORD: u8 = 64;
}

/// CC numbers of the transport bank. Hand-assigned by the firmware,
/// no arithmetic scheme.
mod transport_cc {
    pub const REWIND: u8 = 43;
    pub const FORWARD: u8 = 44;
    pub const CYCLE: u8 = 46;
    pub const TRACK_PREV: u8 = 58;
    pub const TRACK_NEXT: u8 = 59;
    pub const STOP: u8 = 42;
    pub const PLAY: u8 = 41;
    pub const RECORD: u8 = 45;
    pub const MARKER_SET: u8 = 60;
    pub const MARKER_PREV: u8 = 61;
    pub const MARKER_NEXT: u8 = 62;
}

fn push(arena: &mut Vec<Control>, kind: Kind, name: String, identifier: u8) -> ControlId {
    arena.push(Control::new(kind, name, identifier));
    ControlId(arena.len() - 1)
}

/// One channel strip: slider, knob and the solo / mute / record buttons.
#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub slider: ControlId,
    pub knob: ControlId,
    pub solo: ControlId,
    pub mute: ControlId,
    pub record: ControlId,
}

impl Track {
    pub(super) fn build(index: usize, arena: &mut Vec<Control>) -> Self {
        debug_assert!(index < TRACK_COUNT);

        let n = index as u8;
        let nb = index + 1;

        Self {
            slider: push(arena, Kind::Slider, format!("Slider {nb}"), track_cc::SLIDER + n),
            knob: push(arena, Kind::Knob, format!("Knob {nb}"), track_cc::KNOB + n),
            solo: push(
                arena,
                Kind::Button,
                format!("Solo Button {nb}"),
                track_cc::SOLO + n,
            ),
            mute: push(
                arena,
                Kind::Button,
                format!("Mute Button {nb}"),
                track_cc::MUTE + n,
            ),
            record: push(
                arena,
                Kind::Button,
                format!("Record Button {nb}"),
                track_cc::RECORD + n,
            ),
        }
    }

    /// The track's controls in layout order.
    pub fn controls(&self) -> [ControlId; CONTROLS_PER_TRACK] {
        [self.slider, self.knob, self.solo, self.mute, self.record]
    }
}

/// The transport and navigation button bank.
#[derive(Clone, Copy, Debug)]
pub struct TransportButtons {
    pub rewind: ControlId,
    pub forward: ControlId,
    pub cycle: ControlId,
    pub track_prev: ControlId,
    pub track_next: ControlId,
    pub stop: ControlId,
    pub play: ControlId,
    pub record: ControlId,
    pub marker_set: ControlId,
    pub marker_prev: ControlId,
    pub marker_next: ControlId,
}

impl TransportButtons {
    pub(super) fn build(arena: &mut Vec<Control>) -> Self {
        use transport_cc::*;

        let mut button =
            |name: &str, cc| push(arena, Kind::Button, name.to_string(), cc);

        Self {
            rewind: button("Rewind", REWIND),
            forward: button("Forward", FORWARD),
            cycle: button("Cycle", CYCLE),
            track_prev: button("Previous Track", TRACK_PREV),
            track_next: button("Next Track", TRACK_NEXT),
            stop: button("Stop", STOP),
            play: button("Play", PLAY),
            record: button("Record", RECORD),
            marker_set: button("Set Marker", MARKER_SET),
            marker_prev: button("Previous Marker", MARKER_PREV),
            marker_next: button("Next Marker", MARKER_NEXT),
        }
    }

    /// The bank's buttons in layout order.
    pub fn controls(&self) -> [ControlId; TRANSPORT_BUTTON_COUNT] {
        [
            self.rewind,
            self.forward,
            self.cycle,
            self.track_prev,
            self.track_next,
            self.stop,
            self.play,
            self.record,
            self.marker_set,
            self.marker_prev,
            self.marker_next,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_identifier_scheme() {
        for n in 0..TRACK_COUNT {
            let mut arena = Vec::new();
            let track = Track::build(n, &mut arena);

            let ids: Vec<u8> = track
                .controls()
                .iter()
                .map(|&id| arena[id.0].identifier())
                .collect();
            let n = n as u8;
            assert_eq!(ids, [n, n + 16, n + 32, n + 48, n + 64]);
        }
    }

    #[test]
    fn track_kinds_and_names() {
        let mut arena = Vec::new();
        let track = Track::build(2, &mut arena);

        assert_eq!(arena[track.slider.0].kind(), Kind::Slider);
        assert_eq!(arena[track.knob.0].kind(), Kind::Knob);
        for id in [track.solo, track.mute, track.record] {
            assert_eq!(arena[id.0].kind(), Kind::Button);
        }

        assert_eq!(arena[track.slider.0].name(), "Slider 3");
        assert_eq!(arena[track.knob.0].name(), "Knob 3");
        assert_eq!(arena[track.solo.0].name(), "Solo Button 3");
        assert_eq!(arena[track.mute.0].name(), "Mute Button 3");
        assert_eq!(arena[track.record.0].name(), "Record Button 3");
    }

    #[test]
    fn transport_identifier_table() {
        let mut arena = Vec::new();
        let transport = TransportButtons::build(&mut arena);

        let expected = [
            (transport.rewind, 43, "Rewind"),
            (transport.forward, 44, "Forward"),
            (transport.cycle, 46, "Cycle"),
            (transport.track_prev, 58, "Previous Track"),
            (transport.track_next, 59, "Next Track"),
            (transport.stop, 42, "Stop"),
            (transport.play, 41, "Play"),
            (transport.record, 45, "Record"),
            (transport.marker_set, 60, "Set Marker"),
            (transport.marker_prev, 61, "Previous Marker"),
            (transport.marker_next, 62, "Next Marker"),
        ];

        for (id, cc, name) in expected {
            assert_eq!(arena[id.0].identifier(), cc);
            assert_eq!(arena[id.0].name(), name);
            assert_eq!(arena[id.0].kind(), Kind::Button);
        }
    }
}
