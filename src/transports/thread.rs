use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::crashnote_debug;
use crate::protocol::Notice;

enum Task {
    SendNotice(Box<Notice>),
    Flush(SyncSender<()>),
    Shutdown,
}

/// Sends notices from a background thread, in the order they were queued.
pub struct TransportThread {
    sender: SyncSender<Task>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TransportThread {
    pub fn new<SendFn>(mut send: SendFn) -> Self
    where
        SendFn: FnMut(Notice) + Send + 'static,
    {
        let (sender, receiver) = sync_channel(30);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_worker = shutdown.clone();
        let handle = thread::Builder::new()
            .name("crashnote-transport".into())
            .spawn(move || {
                for task in receiver.into_iter() {
                    if shutdown_worker.load(Ordering::SeqCst) {
                        return;
                    }
                    match task {
                        Task::SendNotice(notice) => send(*notice),
                        Task::Flush(sender) => {
                            sender.send(()).ok();
                        }
                        Task::Shutdown => return,
                    }
                }
            })
            .ok();

        Self {
            sender,
            shutdown,
            handle,
        }
    }

    /// Queues a notice without blocking; drops it if the queue is full.
    pub fn send(&self, notice: Notice) {
        match self.sender.try_send(Task::SendNotice(Box::new(notice))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                crashnote_debug!("Transport queue is full, dropping notice");
            }
            Err(TrySendError::Disconnected(_)) => {
                crashnote_debug!("Transport thread is gone, dropping notice");
            }
        }
    }

    /// Waits until every notice queued so far has been sent.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (sender, receiver) = sync_channel(1);
        let _ = self.sender.send(Task::Flush(sender));
        receiver.recv_timeout(timeout).is_ok()
    }
}

impl Drop for TransportThread {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        let _ = self.sender.send(Task::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_notices_are_sent_in_order() {
        let sent = Arc::new(Mutex::new(vec![]));
        let sent_by_worker = sent.clone();
        let thread = TransportThread::new(move |notice: Notice| {
            sent_by_worker.lock().unwrap().push(notice.error.message);
        });
        for message in ["a", "b", "c"] {
            let mut notice = Notice::default();
            notice.error.message = message.into();
            thread.send(notice);
        }
        assert!(thread.flush(Duration::from_secs(5)));
        assert_eq!(*sent.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drop_stops_worker() {
        let thread = TransportThread::new(|_| {});
        assert!(thread.flush(Duration::from_secs(5)));
        drop(thread);
    }
}
