use crate::controllers::session::events::sweep_event::SweepEvent;

/// Consumer side of a [`Session`](crate::Session).
///
/// `present` is called on the sweep worker thread. Implementations that feed a
/// UI must hand the event over to the UI's own thread, as
/// [`ChannelPort`](crate::ChannelPort) does.
pub trait SessionPort: Send + Sync {
    fn present(&self, event: SweepEvent);
}
