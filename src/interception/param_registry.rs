use std::collections::{BTreeSet, HashMap};
use std::sync::{LazyLock, RwLock};

type ParamTags = HashMap<(&'static str, &'static str), BTreeSet<usize>>;

static PARAM_REGISTRY: LazyLock<RwLock<ParamTags>> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Marks parameter `position` of `owner::member` for input logging. Called by `#[log_params]` at process start.
pub fn tag_param(owner: &'static str, member: &'static str, position: usize) {
    let mut registry = PARAM_REGISTRY.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.entry((owner, member)).or_default().insert(position);
}

pub fn tagged_positions(owner: &'static str, member: &'static str) -> BTreeSet<usize> {
    let registry = PARAM_REGISTRY.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.get(&(owner, member)).cloned().unwrap_or_default()
}
