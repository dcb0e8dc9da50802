//! Bounded queue between asynchronous producers and the cooperative loop.
//!
//! Built on `critical-section` and a fixed-size `heapless::Deque`, so a
//! `static` channel can be written from an interrupt or callback context
//! and drained from the main loop without locks or allocation.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Returned by [`Sender::try_send`] on a full queue; carries the rejected
/// value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Returned by [`Receiver::try_receive`] on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A fixed-capacity, interrupt-safe FIFO queue.
///
/// Handles borrow the channel, so the channel itself outlives both ends;
/// typically it lives in a `static` or on the stack of the bring-up code.
pub struct Channel<T, const N: usize> {
    queue: Mutex<RefCell<Deque<T, N>>>,
}

impl<T, const N: usize> Channel<T, N> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle. Senders are `Copy` and may coexist.
    pub const fn sender(&self) -> Sender<'_, T, N> {
        Sender { channel: self }
    }

    /// Consumer handle. One receiver should drain the queue.
    pub const fn receiver(&self) -> Receiver<'_, T, N> {
        Receiver { channel: self }
    }

    fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<T, const N: usize> Default for Channel<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const N: usize> {
    channel: &'a Channel<T, N>,
}

impl<T, const N: usize> Sender<'_, T, N> {
    /// Enqueue a value, returning it in [`TrySendError`] when the queue
    /// is full. Never blocks.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Consumer handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const N: usize> {
    channel: &'a Channel<T, N>,
}

impl<T, const N: usize> Receiver<'_, T, N> {
    /// Dequeue the oldest value, or [`TryReceiveError`] when the queue is
    /// empty. Never blocks.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}
