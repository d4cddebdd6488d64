mod access;
mod event;
mod member;
mod param_registry;
mod property;

pub use access::{AccessError, Grants, Privilege};
#[cfg(test)]
pub use event::RecordingSink;
pub use event::{EventSink, ObservabilityEvent, TracingSink};
pub use member::Member;
pub use param_registry::tag_param;
pub use property::Slot;

use property::{LoggedSlot, PlainSlot};
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Cross-cutting behavior shared by every intercepted type.
///
/// The enabled flag is fixed at construction. When it is off no logging wrapper is installed and arguments are
/// never formatted.
#[derive(Clone, Debug)]
pub struct Interceptors {
    enabled: bool,
    sink: Arc<dyn EventSink>,
}

impl Interceptors {
    pub fn new(enabled: bool, sink: Arc<dyn EventSink>) -> Self {
        Interceptors { enabled, sink }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Interceptors::new(false, Arc::new(TracingSink))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn property<T: Debug + Send + Sync + 'static>(&self, owner: &'static str, property: &'static str, value: T) -> Box<dyn Slot<T>> {
        if self.enabled {
            Box::new(LoggedSlot::new(owner, property, value, self.sink.clone()))
        } else {
            Box::new(PlainSlot::new(value))
        }
    }

    pub fn instance_created(&self, type_name: &'static str, arguments: &[&dyn Display]) {
        if !self.enabled {
            return;
        }

        self.emit(ObservabilityEvent::InstanceCreated {
            type_name,
            arguments: arguments.iter().map(|argument| argument.to_string()).collect(),
        });
    }

    fn emit(&self, event: ObservabilityEvent) {
        self.sink.emit(&event);
    }
}
