// Recording test doubles for the drawing, scheduling and resize seams.
// Expects the including test crate to declare `paint`, `frame` and `surface`.

use crate::frame::FrameScheduler;
use crate::paint::{Canvas2d, GradientStop};
use crate::surface::ResizeSubscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    BackingSize(u32, u32),
    Scale(f64),
    Clear(f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Fill {
        width: f64,
        length: f64,
        stops: Vec<GradientStop>,
    },
}

#[derive(Clone, Default)]
pub struct RecordingCanvas {
    pub ops: Rc<RefCell<Vec<Op>>>,
    pub available: Rc<Cell<bool>>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        let c = Self::default();
        c.available.set(true);
        c
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn take_ops(&self) -> Vec<Op> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    pub fn fills(&self) -> Vec<Op> {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Fill { .. }))
            .cloned()
            .collect()
    }

    fn push(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl Canvas2d for RecordingCanvas {
    fn ready(&mut self) -> bool {
        self.available.get()
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.push(Op::BackingSize(width, height));
    }

    fn set_scale_transform(&mut self, dpr: f64) {
        self.push(Op::Scale(dpr));
    }

    fn clear_rect(&mut self, width: f64, height: f64) {
        self.push(Op::Clear(width, height));
    }

    fn save(&mut self) {
        self.push(Op::Save);
    }

    fn restore(&mut self) {
        self.push(Op::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.push(Op::Translate(x, y));
    }

    fn rotate(&mut self, radians: f64) {
        self.push(Op::Rotate(radians));
    }

    fn fill_vertical_gradient(&mut self, width: f64, length: f64, stops: &[GradientStop]) {
        self.push(Op::Fill {
            width,
            length,
            stops: stops.to_vec(),
        });
    }
}

#[derive(Clone, Default)]
pub struct CountingScheduler {
    pub requests: Rc<Cell<usize>>,
    pub cancelled: Rc<RefCell<Vec<u32>>>,
    pub released: Rc<Cell<usize>>,
    pub refuse: Rc<Cell<bool>>,
    next: u32,
}

impl FrameScheduler for CountingScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.requests.set(self.requests.get() + 1);
        if self.refuse.get() {
            return None;
        }
        self.next += 1;
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.borrow_mut().push(handle);
    }

    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct CountingListener {
    pub unsubscribed: Rc<Cell<usize>>,
}

impl ResizeSubscription for CountingListener {
    fn unsubscribe(&mut self) {
        self.unsubscribed.set(self.unsubscribed.get() + 1);
    }
}
