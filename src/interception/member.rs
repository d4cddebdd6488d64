use crate::interception::param_registry::tagged_positions;
use crate::interception::{AccessError, Grants, Interceptors, ObservabilityEvent, Privilege};
use std::fmt::Display;

/// Describes the behavior wrapped around one member of a type.
///
/// Authorization runs first and short-circuits, so a denied call never emits an event. Input logging runs second,
/// using the parameter positions tagged with `#[log_params]`.
#[derive(Clone, Copy, Debug)]
pub struct Member {
    owner: &'static str,
    name: &'static str,
    required: &'static [Privilege],
    log_params: bool,
}

impl Member {
    pub const fn new(owner: &'static str, name: &'static str) -> Self {
        Member {
            owner,
            name,
            required: &[],
            log_params: false,
        }
    }

    pub const fn requires(self, required: &'static [Privilege]) -> Self {
        Member { required, ..self }
    }

    pub const fn log_params(self) -> Self {
        Member { log_params: true, ..self }
    }

    pub fn authorize(&self, grants: &Grants) -> Result<(), AccessError> {
        grants.require(self.owner, self.name, self.required)
    }

    pub fn before_call(&self, interceptors: &Interceptors, grants: &Grants, arguments: &[&dyn Display]) -> Result<(), AccessError> {
        self.authorize(grants)?;

        if self.log_params && interceptors.is_enabled() {
            let arguments = tagged_positions(self.owner, self.name)
                .into_iter()
                .filter_map(|position| arguments.get(position))
                .map(|argument| argument.to_string())
                .collect();

            interceptors.emit(ObservabilityEvent::MethodInput {
                owner: self.owner,
                method: self.name,
                arguments,
            });
        }

        Ok(())
    }

    pub fn invoke<R>(
        &self,
        interceptors: &Interceptors,
        grants: &Grants,
        arguments: &[&dyn Display],
        body: impl FnOnce() -> R,
    ) -> Result<R, AccessError> {
        self.before_call(interceptors, grants, arguments)?;
        Ok(body())
    }
}
