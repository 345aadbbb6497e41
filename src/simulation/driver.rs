use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::Viewport;
use crate::host::{DrawSurface, FrameHandle, FrameScheduler};

use super::ParticleField;

/// Runs a [`ParticleField`] off a [`FrameScheduler`].
///
/// Each callback runs one frame and requests the next. `stop` cancels the
/// pending callback before returning, and a callback that still fires after a
/// stop finds the field stopped and does nothing.
pub struct FrameDriver<S: FrameScheduler + 'static> {
    field: Rc<RefCell<ParticleField>>,
    scheduler: Rc<S>,
    pending: Rc<Cell<Option<FrameHandle>>>,
}

impl<S: FrameScheduler + 'static> FrameDriver<S> {
    pub fn new(field: ParticleField, scheduler: S) -> Self {
        Self {
            field: Rc::new(RefCell::new(field)),
            scheduler: Rc::new(scheduler),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Shared handle for input callbacks.
    pub fn field(&self) -> Rc<RefCell<ParticleField>> {
        Rc::clone(&self.field)
    }

    pub fn is_running(&self) -> bool {
        self.field.borrow().is_running()
    }

    pub fn start(&self, viewport: Viewport, surface: Option<Box<dyn DrawSurface>>) -> bool {
        let started = self.field.borrow_mut().start(viewport, surface);
        if started && self.pending.get().is_none() {
            schedule(
                Rc::clone(&self.field),
                Rc::clone(&self.scheduler),
                Rc::clone(&self.pending),
            );
        }
        started && self.is_running()
    }

    pub fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.field.borrow_mut().stop();
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameDriver<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if let Ok(mut field) = self.field.try_borrow_mut() {
            field.stop();
        }
    }
}

fn schedule<S: FrameScheduler + 'static>(
    field: Rc<RefCell<ParticleField>>,
    scheduler: Rc<S>,
    pending: Rc<Cell<Option<FrameHandle>>>,
) {
    let (f, s, p) = (Rc::clone(&field), Rc::clone(&scheduler), Rc::clone(&pending));
    let handle = scheduler.request(Box::new(move || {
        p.set(None);
        if !f.borrow().is_running() {
            return;
        }
        f.borrow_mut().frame();
        schedule(f, s, p);
    }));
    if handle.is_none() {
        field_warn!("host refused a frame callback, particle field stopped");
        field.borrow_mut().stop();
    }
    pending.set(handle);
}
