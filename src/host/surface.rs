use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Vec2;

/// One primitive for the 2D surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f64,
        color: Rc<str>,
        alpha: f64,
        /// Shadow blur radius; 0 disables the glow.
        glow: f64,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rc<str>,
        alpha: f64,
        width: f64,
    },
    Sparkle {
        center: Vec2,
        radius: f64,
        alpha: f64,
    },
}

/// A viewport-sized 2D drawing target.
pub trait DrawSurface {
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn draw(&mut self, command: &DrawCommand);
}

#[derive(Debug, Default)]
struct Recording {
    size: (f64, f64),
    clears: u32,
    frame: Vec<DrawCommand>,
}

/// In-memory surface that keeps the commands drawn since the last clear.
///
/// Clones share one recording: hand one to the field, inspect the other.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (f64, f64) {
        self.inner.borrow().size
    }

    pub fn clears(&self) -> u32 {
        self.inner.borrow().clears
    }

    /// Commands drawn since the last clear.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.inner.borrow().frame.clone()
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.inner.borrow().frame.iter().filter(|c| pred(c)).count()
    }

    pub fn circles(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn sparkles(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Sparkle { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.inner.borrow_mut().size = (width, height);
    }

    fn clear(&mut self) {
        let mut rec = self.inner.borrow_mut();
        rec.clears += 1;
        rec.frame.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.inner.borrow_mut().frame.push(command.clone());
    }
}
