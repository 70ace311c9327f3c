use crate::controllers::session::events::sweep_event::SweepEvent;
use crate::controllers::session::ports::session_port::SessionPort;
use crossbeam_channel::{Receiver, Sender};

/// Forwards sweep events over a channel so the consumer receives them on
/// whichever thread drains the [`Receiver`].
#[derive(Debug, Clone)]
pub struct ChannelPort {
    sender: Sender<SweepEvent>,
}

impl ChannelPort {
    #[must_use]
    pub fn new() -> (Self, Receiver<SweepEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }
}

impl SessionPort for ChannelPort {
    fn present(&self, event: SweepEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("sweep event dropped, receiver is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_events_arrive_on_receiving_thread_in_order() {
        let (port, receiver) = ChannelPort::new();

        let sender_thread = thread::spawn(move || {
            port.present(SweepEvent::Progress {
                generation: 1,
                progress: Some(0.0),
            });
            port.present(SweepEvent::Progress {
                generation: 1,
                progress: None,
            });
        });
        sender_thread.join().unwrap();

        let events: Vec<SweepEvent> = receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SweepEvent::Progress {
                    generation: 1,
                    progress: Some(0.0)
                },
                SweepEvent::Progress {
                    generation: 1,
                    progress: None
                },
            ]
        );
    }

    #[test]
    fn test_present_after_receiver_dropped_does_not_panic() {
        let (port, receiver) = ChannelPort::new();
        drop(receiver);

        port.present(SweepEvent::Progress {
            generation: 3,
            progress: None,
        });
    }
}
