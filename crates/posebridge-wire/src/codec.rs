//! Encode/decode for the pose message datagram

use bytes::{Buf, BufMut};

use posebridge_core::{
    BridgeError, BridgeResult, EntityId, Pose, PoseMessage, Position3, Quaternion,
};

/// Current wire version
pub const WIRE_VERSION: u8 = 0x01;

/// Serialized size of one pose (7 x f64)
pub const POSE_SIZE: usize = 7 * 8;

/// Total datagram size: version + counter + entity id + two poses
pub const MESSAGE_SIZE: usize = 1 + 8 + 8 + 2 * POSE_SIZE;

/// Pose message codec
pub struct MessageCodec;

impl MessageCodec {
    /// Encode a message to its datagram bytes
    pub fn encode(message: &PoseMessage) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MESSAGE_SIZE);
        buf.put_u8(WIRE_VERSION);
        buf.put_u64_le(message.counter);
        buf.put_u64_le(message.entity.0);
        Self::put_pose(&mut buf, &message.body);
        Self::put_pose(&mut buf, &message.mount);
        buf
    }

    /// Decode a datagram back into a message.
    ///
    /// Rejects truncated buffers, trailing bytes, and unknown versions;
    /// never panics on arbitrary input.
    pub fn decode(mut buf: &[u8]) -> BridgeResult<PoseMessage> {
        if buf.len() < MESSAGE_SIZE {
            return Err(BridgeError::BufferTooShort {
                expected: MESSAGE_SIZE,
                actual: buf.len(),
            });
        }
        if buf.len() > MESSAGE_SIZE {
            return Err(BridgeError::InvalidWireFormat(format!(
                "Trailing bytes: expected {}, got {}",
                MESSAGE_SIZE,
                buf.len()
            )));
        }

        let version = buf.get_u8();
        if version != WIRE_VERSION {
            return Err(BridgeError::UnsupportedVersion(version));
        }

        let counter = buf.get_u64_le();
        let entity = EntityId::new(buf.get_u64_le());
        let body = Self::get_pose(&mut buf);
        let mount = Self::get_pose(&mut buf);

        Ok(PoseMessage {
            counter,
            entity,
            body,
            mount,
        })
    }

    fn put_pose(buf: &mut Vec<u8>, pose: &Pose) {
        buf.put_f64_le(pose.position.x);
        buf.put_f64_le(pose.position.y);
        buf.put_f64_le(pose.position.z);
        buf.put_f64_le(pose.orientation.w);
        buf.put_f64_le(pose.orientation.xi);
        buf.put_f64_le(pose.orientation.yj);
        buf.put_f64_le(pose.orientation.zk);
    }

    fn get_pose(buf: &mut &[u8]) -> Pose {
        let position = Position3::new(buf.get_f64_le(), buf.get_f64_le(), buf.get_f64_le());
        let orientation = Quaternion::new(
            buf.get_f64_le(),
            buf.get_f64_le(),
            buf.get_f64_le(),
            buf.get_f64_le(),
        );
        Pose::new(position, orientation)
    }
}
