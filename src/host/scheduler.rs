use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Ticket for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Next-frame scheduling primitive (`requestAnimationFrame` in a browser).
///
/// Takes `&self`: callbacks hold the scheduler to request their successor.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. `None` if the host refused.
    fn request(&self, callback: FrameCallback) -> Option<FrameHandle>;
    /// Drop a pending callback. Unknown or already-run handles are ignored.
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Default)]
struct Queue {
    next_id: i32,
    pending: Vec<(FrameHandle, FrameCallback)>,
}

/// Scheduler driven by hand, one "display refresh" per [`run_frame`](Self::run_frame).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Run every callback that was pending when called. Callbacks requested
    /// while running wait for the next call.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let ran = due.len();
        for (_, callback) in due {
            callback();
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.push((handle, callback));
        Some(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        self.queue.borrow_mut().pending.retain(|(h, _)| *h != handle);
    }
}
