//! Control-byte framing for the I2C transport
//!
//! Over I2C the SSD1306 has no D/C pin; instead every payload byte is
//! preceded by a control byte:
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | 7   | Continuation: another control/payload pair follows |
//! | 6   | Type: 0 = command, 1 = data (GDDRAM) |
//! | 5:0 | Always 0 |
//!
//! A [`Packet`] is built per burst, transmitted, and dropped. The wire form is
//! always exactly twice the payload length.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{ContinuationPolicy, Packet, PacketKind};
//!
//! let packet = match Packet::encode(
//!     PacketKind::Data,
//!     &[0xAA, 0x55],
//!     ContinuationPolicy::LastByteTerminates,
//! ) {
//!     Ok(packet) => packet,
//!     Err(_) => return,
//! };
//! assert_eq!(packet.as_bytes(), &[0xC0, 0xAA, 0x40, 0x55]);
//! ```

use core::fmt;

/// Continuation flag (bit 7 of a control byte)
pub const CONTROL_CONTINUATION: u8 = 0x80;

/// Data type tag (bit 6 of a control byte)
pub const CONTROL_DATA: u8 = 0x40;

/// Largest payload a single packet can carry
///
/// One full page row of the 128-column controller.
pub const MAX_PAYLOAD_LEN: usize = 128;

/// Largest wire packet: one control byte per payload byte
pub const MAX_PACKET_LEN: usize = MAX_PAYLOAD_LEN * 2;

/// Type tag carried by every control byte of a packet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketKind {
    /// Command bytes (opcodes and their parameters)
    Command = 0,
    /// Display RAM data
    Data = 1,
}

/// How the continuation bit is set across a burst
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContinuationPolicy {
    /// Continuation bit is never set
    ///
    /// Only valid when every payload byte stands on its own.
    Unflagged,
    /// Continuation bit set on every control byte except the last
    #[default]
    LastByteTerminates,
}

/// Errors produced while framing a packet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketError {
    /// Payload exceeds what fits in one transaction
    BufferTooLarge {
        /// Payload length requested
        provided: usize,
        /// Largest payload accepted
        max: usize,
    },
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooLarge { provided, max } => {
                write!(f, "Payload too large: {provided} bytes, max {max}")
            }
        }
    }
}

impl core::error::Error for PacketError {}

/// Build a control byte
///
/// ```
/// use ssd1306_i2c::packet::control_byte;
/// use ssd1306_i2c::PacketKind;
///
/// assert_eq!(control_byte(PacketKind::Command, false), 0x00);
/// assert_eq!(control_byte(PacketKind::Command, true), 0x80);
/// assert_eq!(control_byte(PacketKind::Data, false), 0x40);
/// assert_eq!(control_byte(PacketKind::Data, true), 0xC0);
/// ```
pub const fn control_byte(kind: PacketKind, continuation: bool) -> u8 {
    ((continuation as u8) << 7) | ((kind as u8) << 6)
}

/// An encoded, ready-to-send burst
#[derive(Clone)]
pub struct Packet {
    buf: [u8; MAX_PACKET_LEN],
    len: usize,
}

impl Packet {
    /// Frame `payload` using the full packet capacity
    ///
    /// # Errors
    ///
    /// Returns [`PacketError::BufferTooLarge`] if `payload` is longer than
    /// [`MAX_PAYLOAD_LEN`].
    pub fn encode(
        kind: PacketKind,
        payload: &[u8],
        policy: ContinuationPolicy,
    ) -> Result<Self, PacketError> {
        Self::encode_limited(kind, payload, policy, MAX_PAYLOAD_LEN)
    }

    /// Frame `payload`, rejecting anything longer than `limit` bytes
    ///
    /// `limit` is clamped to [`MAX_PAYLOAD_LEN`]. Transports with a smaller
    /// transaction buffer pass their own limit here.
    pub fn encode_limited(
        kind: PacketKind,
        payload: &[u8],
        policy: ContinuationPolicy,
        limit: usize,
    ) -> Result<Self, PacketError> {
        let max = limit.min(MAX_PAYLOAD_LEN);
        if payload.len() > max {
            return Err(PacketError::BufferTooLarge {
                provided: payload.len(),
                max,
            });
        }

        let mut buf = [0u8; MAX_PACKET_LEN];
        let last = payload.len().saturating_sub(1);
        for (i, (pair, byte)) in buf.chunks_exact_mut(2).zip(payload).enumerate() {
            let continuation = match policy {
                ContinuationPolicy::Unflagged => false,
                ContinuationPolicy::LastByteTerminates => i != last,
            };
            pair[0] = control_byte(kind, continuation);
            pair[1] = *byte;
        }

        Ok(Self {
            buf,
            len: payload.len() * 2,
        })
    }

    /// Wire bytes of the packet
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of wire bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the packet carries no payload
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(kind: PacketKind, payload: &[u8], policy: ContinuationPolicy) -> Packet {
        Packet::encode(kind, payload, policy).unwrap()
    }

    #[test]
    fn test_length_is_twice_payload() {
        for n in [1usize, 2, 3, 7, 64, MAX_PAYLOAD_LEN] {
            let payload = alloc::vec![0x5Au8; n];
            let packet = encode(PacketKind::Command, &payload, ContinuationPolicy::default());
            assert_eq!(packet.len(), 2 * n);
        }
    }

    #[test]
    fn test_payload_at_odd_positions() {
        let payload = [0x11, 0x22, 0x33, 0x44, 0x55];
        let packet = encode(
            PacketKind::Command,
            &payload,
            ContinuationPolicy::LastByteTerminates,
        );
        let odd: alloc::vec::Vec<u8> = packet.as_bytes().iter().skip(1).step_by(2).copied().collect();
        assert_eq!(odd, payload);
    }

    #[test]
    fn test_type_bit_follows_kind() {
        let payload = [0xFF, 0x00, 0x81, 0x7F];
        for policy in [
            ContinuationPolicy::Unflagged,
            ContinuationPolicy::LastByteTerminates,
        ] {
            let data = encode(PacketKind::Data, &payload, policy);
            assert!(data.as_bytes().iter().step_by(2).all(|c| c & CONTROL_DATA != 0));

            let cmd = encode(PacketKind::Command, &payload, policy);
            assert!(cmd.as_bytes().iter().step_by(2).all(|c| c & CONTROL_DATA == 0));
        }
    }

    #[test]
    fn test_last_byte_terminates() {
        let packet = encode(
            PacketKind::Data,
            &[1, 2, 3, 4],
            ContinuationPolicy::LastByteTerminates,
        );
        let controls: alloc::vec::Vec<u8> = packet.as_bytes().iter().step_by(2).copied().collect();
        assert_eq!(controls, [0xC0, 0xC0, 0xC0, 0x40]);
    }

    #[test]
    fn test_single_byte_never_continues() {
        let packet = encode(
            PacketKind::Command,
            &[0xAF],
            ContinuationPolicy::LastByteTerminates,
        );
        assert_eq!(packet.as_bytes(), &[0x00, 0xAF]);
    }

    #[test]
    fn test_unflagged_clears_continuation() {
        let packet = encode(
            PacketKind::Command,
            &[0x81, 0x7F, 0xA4],
            ContinuationPolicy::Unflagged,
        );
        assert_eq!(packet.as_bytes(), &[0x00, 0x81, 0x00, 0x7F, 0x00, 0xA4]);
    }

    #[test]
    fn test_empty_payload() {
        let packet = encode(PacketKind::Data, &[], ContinuationPolicy::default());
        assert!(packet.is_empty());
        assert!(packet.as_bytes().is_empty());
    }

    #[test]
    fn test_too_large_payload_returns_error() {
        let payload = [0u8; MAX_PAYLOAD_LEN + 1];
        let result = Packet::encode(PacketKind::Data, &payload, ContinuationPolicy::default());
        assert!(matches!(
            result,
            Err(PacketError::BufferTooLarge {
                provided: 129,
                max: 128
            })
        ));
    }

    #[test]
    fn test_limit_is_clamped_and_enforced() {
        let payload = [0u8; 32];
        let result = Packet::encode_limited(
            PacketKind::Data,
            &payload,
            ContinuationPolicy::default(),
            16,
        );
        assert!(matches!(
            result,
            Err(PacketError::BufferTooLarge {
                provided: 32,
                max: 16
            })
        ));

        let payload = [0u8; MAX_PAYLOAD_LEN + 1];
        let result = Packet::encode_limited(
            PacketKind::Data,
            &payload,
            ContinuationPolicy::default(),
            usize::MAX,
        );
        assert!(matches!(
            result,
            Err(PacketError::BufferTooLarge { max: 128, .. })
        ));
    }
}
