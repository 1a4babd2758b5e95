//! Request numbering used to drop responses that arrive out of order.
//!
//! Each fetch is tagged with a [`RequestId`] issued for its channel. When the
//! response arrives it is applied only if no newer request has been issued
//! on that channel since.

/// Independent streams of fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchChannel {
    /// The university list.
    Universities,
    /// Results for the selected university.
    Results,
    /// A single result for the detail screen.
    Detail,
    /// Comments for the detail screen.
    Comments,
}

/// Identifier attached to an in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId {
    channel: FetchChannel,
    serial: u64,
}

impl RequestId {
    /// Channel the request was issued on.
    #[must_use]
    pub const fn channel(self) -> FetchChannel {
        self.channel
    }
}

/// Latest issued serial per channel.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    universities: u64,
    results: u64,
    detail: u64,
    comments: u64,
}

impl RequestSequence {
    /// Issues a new request id, superseding earlier ones on `channel`.
    pub const fn issue(&mut self, channel: FetchChannel) -> RequestId {
        let slot = self.slot_mut(channel);
        *slot = slot.saturating_add(1);
        RequestId {
            channel,
            serial: *slot,
        }
    }

    /// Returns true if `id` is the latest request on its channel.
    #[must_use]
    pub const fn is_current(&self, id: RequestId) -> bool {
        self.slot(id.channel) == id.serial
    }

    /// Like [`Self::is_current`], logging when a stale response is dropped.
    #[must_use]
    pub fn accept(&self, id: RequestId) -> bool {
        let current = self.is_current(id);
        if !current {
            tracing::debug!(
                channel = ?id.channel,
                serial = id.serial,
                latest = self.slot(id.channel),
                "discarding stale response"
            );
        }
        current
    }

    const fn slot(&self, channel: FetchChannel) -> u64 {
        match channel {
            FetchChannel::Universities => self.universities,
            FetchChannel::Results => self.results,
            FetchChannel::Detail => self.detail,
            FetchChannel::Comments => self.comments,
        }
    }

    const fn slot_mut(&mut self, channel: FetchChannel) -> &mut u64 {
        match channel {
            FetchChannel::Universities => &mut self.universities,
            FetchChannel::Results => &mut self.results,
            FetchChannel::Detail => &mut self.detail,
            FetchChannel::Comments => &mut self.comments,
        }
    }
}
