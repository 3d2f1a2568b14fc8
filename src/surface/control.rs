use std::fmt;

/// Raw MIDI CC values are 7 bit.
pub const MAX_VALUE: u8 = 127;

/// The physical kind of a control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Slider,
    Knob,
    Button,
}

pub type Callback = Box<dyn FnMut(&Control) + Send + 'static>;

/// One physical control: its identity, its last received value and
/// an optional change observer.
///
/// The MIDI `identifier` is the control's identity: two controls are
/// considered equal iff their identifiers match, regardless of kind
/// or display name.
pub struct Control {
    kind: Kind,
    name: String,
    identifier: u8,
    value: u8,
    on_change: Option<Callback>,
}

impl Control {
    pub(super) fn new(kind: Kind, name: impl Into<String>, identifier: u8) -> Self {
        Self {
            kind,
            name: name.into(),
            identifier,
            value: 0,
            on_change: None,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> u8 {
        self.identifier
    }

    /// Last received raw value, in `[0, 127]`.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Position of the control as a ratio of its full range.
    pub fn percentage(&self) -> f32 {
        f32::from(self.value) / f32::from(MAX_VALUE)
    }

    /// Whether a button control is currently held down.
    ///
    /// Always `false` for sliders and knobs.
    pub fn is_pressed(&self) -> bool {
        self.kind == Kind::Button && self.value == MAX_VALUE
    }

    /// Whether a button control is currently up.
    ///
    /// Always `false` for sliders and knobs.
    pub fn is_released(&self) -> bool {
        self.kind == Kind::Button && self.value == 0
    }

    /// Stores a new raw value, then synchronously notifies the observer,
    /// if any, with the post-mutation state.
    ///
    /// MIDI data bytes are 7 bit, so a value above 127 means the transport
    /// layer is buggy: it is clamped to 127 and logged, never propagated
    /// as an error. The dispatch loop must survive malformed input.
    pub fn set_value(&mut self, raw: u8) {
        if raw > MAX_VALUE {
            log::warn!(
                "{} (cc {}): out of range value {raw}, clamping to {MAX_VALUE}",
                self.name,
                self.identifier,
            );
        }
        self.value = raw.min(MAX_VALUE);

        // The slot is empty while the observer runs, which also keeps a
        // reentrant registration from being invoked for this change.
        if let Some(mut cb) = self.on_change.take() {
            cb(self);
            self.on_change = Some(cb);
        }
    }

    /// Registers the change observer. The latest registration wins;
    /// there is no multi-listener fan-out.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&Control) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Drops the registered observer, if any.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }
}

impl PartialEq for Control {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Control {}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("identifier", &self.identifier)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
