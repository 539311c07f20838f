//! Message channel between the extension surface and a page

use crate::protocol::{Command, Response};
use crate::utils::{BoxscopeError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// IPC message types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcMessageType {
    /// A [`Command`] for the other side
    Request,
    /// The [`Response`] to a request with the same sequence id
    Response,
}

/// IPC message carrying a JSON payload
#[derive(Debug, Clone)]
pub struct IpcMessage {
    pub msg_type: IpcMessageType,
    pub payload: Vec<u8>,
    pub sequence_id: u64,
}

impl IpcMessage {
    fn encode<T: Serialize>(msg_type: IpcMessageType, sequence_id: u64, body: &T) -> Result<Self> {
        Ok(Self {
            msg_type,
            payload: serde_json::to_vec(body)?,
            sequence_id,
        })
    }

    /// Create a request with a fresh sequence id
    pub fn request(command: &Command) -> Result<Self> {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self::encode(
            IpcMessageType::Request,
            COUNTER.fetch_add(1, Ordering::SeqCst),
            command,
        )
    }

    /// Create the response to request `sequence_id`
    pub fn response(sequence_id: u64, response: &Response) -> Result<Self> {
        Self::encode(IpcMessageType::Response, sequence_id, response)
    }

    /// Decode the JSON payload
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.payload)?)
    }

    /// Get payload as string
    pub fn payload_str(&self) -> Option<String> {
        String::from_utf8(self.payload.clone()).ok()
    }
}

/// One end of a bidirectional channel
#[derive(Debug)]
pub struct IpcChannel {
    sender: Sender<IpcMessage>,
    receiver: Receiver<IpcMessage>,
}

impl IpcChannel {
    /// Create a connected pair of endpoints
    pub fn pair() -> (Self, Self) {
        let (tx1, rx1) = channel();
        let (tx2, rx2) = channel();

        let first = Self {
            sender: tx2,
            receiver: rx1,
        };
        let second = Self {
            sender: tx1,
            receiver: rx2,
        };

        (first, second)
    }

    /// Send a message; fails when the other end has been dropped
    pub fn send(&self, message: IpcMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|_| BoxscopeError::delivery("message", "receiving end is gone"))
    }

    /// Try to receive a message (non-blocking)
    pub fn try_recv(&self) -> Option<IpcMessage> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload() {
        let msg = IpcMessage::request(&Command::Toggle).unwrap();
        assert_eq!(msg.msg_type, IpcMessageType::Request);
        assert_eq!(msg.payload_str(), Some(r#"{"action":"toggle"}"#.to_string()));
        assert_eq!(msg.decode::<Command>().unwrap(), Command::Toggle);
    }

    #[test]
    fn test_sequence_ids_increase() {
        let a = IpcMessage::request(&Command::GetStatus).unwrap();
        let b = IpcMessage::request(&Command::GetStatus).unwrap();
        assert!(b.sequence_id > a.sequence_id);
    }

    #[test]
    fn test_send_recv() {
        let (host, page) = IpcChannel::pair();
        assert!(page.try_recv().is_none());

        host.send(IpcMessage::request(&Command::GetStatus).unwrap()).unwrap();
        let received = page.try_recv().unwrap();
        let reply = IpcMessage::response(received.sequence_id, &Response::Status { enabled: true }).unwrap();
        page.send(reply).unwrap();

        let answer = host.try_recv().unwrap();
        assert_eq!(answer.sequence_id, received.sequence_id);
        assert_eq!(answer.decode::<Response>().unwrap().enabled(), Some(true));
    }

    #[test]
    fn test_send_to_dropped_end_fails() {
        let (host, page) = IpcChannel::pair();
        drop(page);
        let err = host.send(IpcMessage::request(&Command::Toggle).unwrap()).unwrap_err();
        assert!(matches!(err, BoxscopeError::Delivery { .. }));
    }
}
