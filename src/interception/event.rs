use std::fmt::{Debug, Display, Formatter};
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub enum ObservabilityEvent {
    PropertyRead {
        owner: &'static str,
        property: &'static str,
        value: String,
    },
    PropertyWritten {
        owner: &'static str,
        property: &'static str,
        previous: String,
        value: String,
    },
    InstanceCreated {
        type_name: &'static str,
        arguments: Vec<String>,
    },
    MethodInput {
        owner: &'static str,
        method: &'static str,
        arguments: Vec<String>,
    },
}

impl Display for ObservabilityEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObservabilityEvent::PropertyRead { value, .. } => write!(f, "Get value: {}", value),
            ObservabilityEvent::PropertyWritten { previous, value, .. } => write!(f, "Set value: {} -> {}", previous, value),
            ObservabilityEvent::InstanceCreated { type_name, arguments } => {
                write!(f, "New {} instance created with arguments: {}", type_name, arguments.join(","))
            }
            ObservabilityEvent::MethodInput { method, arguments, .. } => {
                write!(f, "Input for method {}: {}", method, arguments.join(", "))
            }
        }
    }
}

pub trait EventSink: Debug + Send + Sync {
    fn emit(&self, event: &ObservabilityEvent);
}

/// Forwards every event to the `observability` tracing target.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ObservabilityEvent) {
        match event {
            ObservabilityEvent::PropertyRead { owner, property, .. } | ObservabilityEvent::PropertyWritten { owner, property, .. } => {
                info!(target: "observability", owner = owner, property = property, "🔎 {}", event)
            }
            ObservabilityEvent::InstanceCreated { type_name, .. } => info!(target: "observability", owner = type_name, "🔎 {}", event),
            ObservabilityEvent::MethodInput { owner, method, .. } => {
                info!(target: "observability", owner = owner, method = method, "🔎 {}", event)
            }
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: std::sync::Mutex<Vec<ObservabilityEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn events(&self) -> Vec<ObservabilityEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(|event| event.to_string()).collect()
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn emit(&self, event: &ObservabilityEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(
        ObservabilityEvent::PropertyRead { owner: "Trail", property: "coordinates", value: "[]".to_string() },
        "Get value: []"
    )]
    #[case(
        ObservabilityEvent::PropertyWritten {
            owner: "Trail",
            property: "coordinates",
            previous: "[]".to_string(),
            value: "[1]".to_string(),
        },
        "Set value: [] -> [1]"
    )]
    #[case(
        ObservabilityEvent::InstanceCreated { type_name: "Trail", arguments: vec!["1".to_string(), "2".to_string()] },
        "New Trail instance created with arguments: 1,2"
    )]
    #[case(
        ObservabilityEvent::MethodInput { owner: "Trail", method: "add", arguments: vec!["Point: (0, 0)".to_string()] },
        "Input for method add: Point: (0, 0)"
    )]
    fn events_display_their_message(#[case] event: ObservabilityEvent, #[case] expected: &str) {
        assert_eq!(event.to_string(), expected);
    }

    #[test]
    fn recording_sink_keeps_events_in_order() {
        let sink = RecordingSink::default();
        sink.emit(&ObservabilityEvent::InstanceCreated {
            type_name: "Trail",
            arguments: vec![],
        });
        sink.emit(&ObservabilityEvent::MethodInput {
            owner: "Trail",
            method: "add",
            arguments: vec![],
        });

        assert_eq!(sink.messages(), vec!["New Trail instance created with arguments: ", "Input for method add: "]);
    }
}
