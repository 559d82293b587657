//! Lazy sequences: an unbounded counter and a channel-skipping remote control.

use crate::Error;

/// Counts up from 1 without end, one value per call to `next`.
/// Stops only if the count would pass `u64::MAX`.
#[derive(Debug, Clone)]
pub struct CountUp {
    next: Option<u64>,
}

impl CountUp {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }
}

/// The counter consumed while the value stays at or below `limit`.
pub fn count_up_to(limit: u64) -> impl Iterator<Item = u64> {
    CountUp::new().take_while(move |&n| n <= limit)
}

const DEFAULT_CHANNELS: [&str; 4] = ["HBO", "CNN", "ABC", "ESPN"];
const DEFAULT_STRIDE: usize = 2;

/// Flips through channels, skipping ahead `stride` channels per press.
///
/// Each press moves the position by `stride` and shows the channel just
/// before it, so with the default lineup and stride the remote shows
/// `CNN` then `ESPN`.
#[derive(Debug, Clone)]
pub struct RemoteControl {
    channels: Vec<String>,
    stride: usize,
    idx: usize,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self {
            channels: DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect(),
            stride: DEFAULT_STRIDE,
            idx: 0,
        }
    }

    pub fn with_channels<I, S>(channels: I, stride: usize) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if stride == 0 {
            return Err(Error::InvalidStride);
        }
        Ok(Self {
            channels: channels.into_iter().map(Into::into).collect(),
            stride,
            idx: 0,
        })
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RemoteControl {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.idx.checked_add(self.stride)?;
        if idx > self.channels.len() {
            return None;
        }
        self.idx = idx;
        Some(self.channels[idx - 1].clone())
    }
}
