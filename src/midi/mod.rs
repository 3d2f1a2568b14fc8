mod error;
pub use error::Error;

pub mod port;
pub use port::PortsIn;

/// Status byte with the channel nibble masked off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tag(u8);

impl Tag {
    pub const fn from(byte: u8) -> Self {
        Self(byte & 0xf0)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag.0
    }
}

/// MIDI channel, from the low nibble of a status byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Channel(u8);

impl Channel {
    pub const fn from(byte: u8) -> Self {
        Self(byte & 0x0f)
    }
}

impl From<Channel> for u8 {
    fn from(chan: Channel) -> u8 {
        chan.0
    }
}

pub mod cc {
    use super::Tag;

    pub const TAG: Tag = Tag::from(0xb0);
}

/// One decoded Control Change message.
///
/// The channel is carried along for logging but the surface model is
/// channel-agnostic: the factory scene transmits everything on channel 0
/// and routing is by controller number alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcMsg {
    pub channel: Channel,
    pub controller: u8,
    pub value: u8,
}

impl CcMsg {
    /// Decodes a raw message, rejecting anything that is not a complete
    /// Control Change.
    pub fn try_parse(buf: &[u8]) -> Result<Self, Error> {
        let status = *buf
            .first()
            .ok_or_else(|| Error::Truncated(crate::bytes::Displayable::from(buf).to_owned()))?;

        if Tag::from(status) != cc::TAG {
            return Err(Error::NotControlChange(
                crate::bytes::Displayable::from(buf).to_owned(),
            ));
        }

        match buf.get(1..=2) {
            Some(&[controller, value]) => Ok(Self {
                channel: Channel::from(status),
                controller,
                value,
            }),
            _ => Err(Error::Truncated(
                crate::bytes::Displayable::from(buf).to_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_control_change() {
        let msg = CcMsg::try_parse(&[0xb0, 32, 127]).unwrap();
        assert_eq!(msg.channel, Channel::from(0));
        assert_eq!(msg.controller, 32);
        assert_eq!(msg.value, 127);
    }

    #[test]
    fn any_channel_is_accepted() {
        let msg = CcMsg::try_parse(&[0xb5, 61, 64]).unwrap();
        assert_eq!(u8::from(msg.channel), 5);
        assert_eq!(msg.controller, 61);
        assert_eq!(msg.value, 64);
    }

    #[test]
    fn rejects_other_message_kinds() {
        // Note On must be filtered out upstream of the surface.
        assert!(matches!(
            CcMsg::try_parse(&[0x90, 60, 100]),
            Err(Error::NotControlChange(_))
        ));
    }

    #[test]
    fn rejects_truncated_messages() {
        assert!(matches!(CcMsg::try_parse(&[]), Err(Error::Truncated(_))));
        assert!(matches!(
            CcMsg::try_parse(&[0xb0, 32]),
            Err(Error::Truncated(_))
        ));
    }
}
