use crate::interception::event::{EventSink, ObservabilityEvent};
use std::fmt::Debug;
use std::sync::Arc;

/// Storage for a field whose accesses may be intercepted.
pub trait Slot<T>: Debug + Send + Sync {
    fn get(&self) -> &T;

    /// Mutable access, observed as a read of the current value.
    fn get_mut(&mut self) -> &mut T;

    fn set(&mut self, value: T);
}

#[derive(Debug)]
pub struct PlainSlot<T> {
    value: T,
}

impl<T> PlainSlot<T> {
    pub fn new(value: T) -> Self {
        PlainSlot { value }
    }
}

impl<T: Debug + Send + Sync> Slot<T> for PlainSlot<T> {
    fn get(&self) -> &T {
        &self.value
    }

    fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn set(&mut self, value: T) {
        self.value = value;
    }
}

#[derive(Debug)]
pub struct LoggedSlot<T> {
    owner: &'static str,
    property: &'static str,
    value: T,
    sink: Arc<dyn EventSink>,
}

impl<T: Debug> LoggedSlot<T> {
    pub fn new(owner: &'static str, property: &'static str, value: T, sink: Arc<dyn EventSink>) -> Self {
        LoggedSlot {
            owner,
            property,
            value,
            sink,
        }
    }

    fn emit_read(&self) {
        self.sink.emit(&ObservabilityEvent::PropertyRead {
            owner: self.owner,
            property: self.property,
            value: format!("{:?}", self.value),
        });
    }
}

impl<T: Debug + Send + Sync> Slot<T> for LoggedSlot<T> {
    fn get(&self) -> &T {
        self.emit_read();
        &self.value
    }

    fn get_mut(&mut self) -> &mut T {
        self.emit_read();
        &mut self.value
    }

    fn set(&mut self, value: T) {
        self.sink.emit(&ObservabilityEvent::PropertyWritten {
            owner: self.owner,
            property: self.property,
            previous: format!("{:?}", self.value),
            value: format!("{:?}", value),
        });
        self.value = value;
    }
}
