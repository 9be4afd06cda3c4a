//! UDP transport implementation

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use posebridge_core::{BridgeError, BridgeResult, PoseMessage, PoseSink};
use posebridge_wire::{MessageCodec, MESSAGE_SIZE};

/// UDP pose sender
///
/// Construction is the one-time establish step: bind an ephemeral local
/// socket and connect it to the destination. After that, each completed
/// pair is one `send` call and one datagram.
pub struct UdpPoseSender {
    socket: UdpSocket,
    dest: SocketAddr,
}

impl UdpPoseSender {
    /// Establish the outbound channel to `dest`
    pub fn establish(dest: SocketAddr) -> BridgeResult<Self> {
        let bind_addr: SocketAddr = if dest.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket =
            UdpSocket::bind(bind_addr).map_err(|e| BridgeError::Transport(e.to_string()))?;
        socket
            .connect(dest)
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        let local = socket
            .local_addr()
            .map_err(|e| BridgeError::Transport(e.to_string()))?;
        tracing::debug!(%local, %dest, "pose sender established");

        Ok(UdpPoseSender { socket, dest })
    }

    /// Destination the sender was established against
    pub fn dest(&self) -> SocketAddr {
        self.dest
    }

    /// Local address of the bound socket
    pub fn local_addr(&self) -> BridgeResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| BridgeError::Transport(e.to_string()))
    }
}

impl PoseSink for UdpPoseSender {
    fn send(&mut self, message: &PoseMessage) -> BridgeResult<()> {
        let bytes = MessageCodec::encode(message);
        self.socket
            .send(&bytes)
            .map_err(|e| BridgeError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Blocking receive side of the channel, for consumers and tests
pub struct PoseReceiver {
    socket: UdpSocket,
}

impl PoseReceiver {
    /// Bind to a local address
    pub fn bind(addr: SocketAddr) -> BridgeResult<Self> {
        let socket = UdpSocket::bind(addr).map_err(|e| BridgeError::Transport(e.to_string()))?;
        Ok(PoseReceiver { socket })
    }

    /// Local address of the bound socket
    pub fn local_addr(&self) -> BridgeResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| BridgeError::Transport(e.to_string()))
    }

    /// Receive one datagram and decode it (blocking)
    pub fn recv(&self) -> BridgeResult<PoseMessage> {
        let mut buf = [0u8; MESSAGE_SIZE];
        let len = self
            .socket
            .recv(&mut buf)
            .map_err(|e| BridgeError::Transport(e.to_string()))?;
        MessageCodec::decode(&buf[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posebridge_core::{EntityId, Pose, Position3, Quaternion};

    #[test]
    fn test_sender_establish() {
        let receiver = PoseReceiver::bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let sender = UdpPoseSender::establish(receiver.local_addr().unwrap()).unwrap();

        assert_ne!(sender.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn test_send_recv_roundtrip() {
        let receiver = PoseReceiver::bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let mut sender = UdpPoseSender::establish(receiver.local_addr().unwrap()).unwrap();

        let message = PoseMessage {
            counter: 7,
            entity: EntityId::new(2),
            body: Pose::new(
                Position3::new(0.5, 1.5, 2.5),
                Quaternion::new(1.0, 0.0, 0.0, 0.0),
            ),
            mount: Pose::new(
                Position3::new(0.5, 1.5, 2.7),
                Quaternion::new(0.7, 0.7, 0.0, 0.0),
            ),
        };

        sender.send(&message).unwrap();
        let received = receiver.recv().unwrap();
        assert_eq!(received, message);
    }
}
