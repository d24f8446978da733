//! Delayed reply delivery on the tokio runtime.
//!
//! Accepted submits are queued, in ticket order, to a single driver task that
//! sleeps until each reply's deadline and then delivers it. Deadlines never
//! decrease, so replies land in the order their messages were sent. The driver
//! holds only a weak reference to the conversation: once the scheduler is
//! dropped, late replies are discarded.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::conversation::{Conversation, PendingReply};
use crate::types::{ConversationState, Message};

type QueuedReply = (Instant, PendingReply);

/// The FIFO driver task and the sending half of its queue.
struct Driver {
    queue: mpsc::UnboundedSender<QueuedReply>,
    handle: JoinHandle<()>,
}

impl Driver {
    fn spawn(conversation: Weak<Mutex<Conversation>>) -> Self {
        let (queue, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(drive(conversation, rx));
        debug!("Reply driver started");
        Self { queue, handle }
    }
}

/// Owns a conversation and schedules its assistant replies.
pub struct ReplyScheduler {
    conversation: Arc<Mutex<Conversation>>,
    reply_delay: Duration,
    driver: Mutex<Option<Driver>>,
}

impl ReplyScheduler {
    pub fn new(conversation: Conversation, reply_delay: Duration) -> Self {
        Self {
            conversation: Arc::new(Mutex::new(conversation)),
            reply_delay,
            driver: Mutex::new(None),
        }
    }

    /// Submit user input; the user message is appended before this returns.
    ///
    /// Returns `false` for blank input, which changes nothing. The reply is due
    /// `reply_delay` after this call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit(&self, raw: &str) -> bool {
        // Held until the reply is queued so ticket order equals queue order.
        let mut conversation = lock(&self.conversation);
        let Some(reply) = conversation.submit(raw) else {
            return false;
        };

        debug!(
            ticket = reply.ticket(),
            delay_ms = self.reply_delay.as_millis() as u64,
            "Reply scheduled"
        );
        let deadline = Instant::now() + self.reply_delay;

        let mut driver = lock(&self.driver);
        let queued = match driver.as_ref() {
            Some(d) => d.queue.send((deadline, reply)).err().map(|e| e.0),
            None => Some((deadline, reply)),
        };
        if let Some(item) = queued {
            // No driver yet, or the previous one exited.
            let fresh = Driver::spawn(Arc::downgrade(&self.conversation));
            if fresh.queue.send(item).is_err() {
                warn!("Reply driver closed its queue; reply dropped");
            }
            *driver = Some(fresh);
        }
        drop(conversation);
        true
    }

    /// Wait until every reply scheduled so far has been delivered.
    pub async fn settle(&self) {
        let driver = lock(&self.driver).take();
        if let Some(Driver { queue, handle }) = driver {
            // Closing the queue lets the driver exit once it has drained.
            drop(queue);
            if let Err(e) = handle.await {
                warn!(error = %e, "Reply driver failed");
            }
        }
    }

    pub fn state(&self) -> ConversationState {
        lock(&self.conversation).state()
    }

    pub fn pending_replies(&self) -> usize {
        lock(&self.conversation).pending_replies()
    }

    /// Copy of the log at this instant.
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.conversation).log().as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        lock(&self.conversation).log().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against the conversation while it is locked.
    pub fn with_conversation<R>(&self, f: impl FnOnce(&Conversation) -> R) -> R {
        let conversation = lock(&self.conversation);
        f(&*conversation)
    }
}

async fn drive(
    conversation: Weak<Mutex<Conversation>>,
    mut queue: mpsc::UnboundedReceiver<QueuedReply>,
) {
    while let Some((deadline, reply)) = queue.recv().await {
        tokio::time::sleep_until(deadline).await;

        match conversation.upgrade() {
            Some(conversation) => {
                lock(&conversation).deliver(reply);
            }
            None => warn!(
                ticket = reply.ticket(),
                "Conversation disposed before reply fired; reply dropped"
            ),
        }
    }
    debug!("Reply driver stopped");
}

/// Lock, recovering the value if a previous holder panicked. Appends leave the
/// log consistent at every step, so the inner value is always usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
