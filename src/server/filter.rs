// ABOUTME: Filter evaluation over external container views.
// ABOUTME: All set predicates must pass; unset or empty predicates match anything.

use crate::cri::{Container, ContainerFilter};

/// Whether `container` satisfies every predicate in `filter`.
///
/// `None` matches every container, as does an empty filter. An empty `id` or
/// `pod_sandbox_id` is treated as unset.
pub fn matches(container: &Container, filter: Option<&ContainerFilter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    if let Some(id) = non_empty(&filter.id)
        && id != container.id
    {
        return false;
    }

    if let Some(sandbox) = non_empty(&filter.pod_sandbox_id)
        && sandbox != container.pod_sandbox_id
    {
        return false;
    }

    if let Some(state) = filter.state
        && state != container.state
    {
        return false;
    }

    // Subset match: extra labels on the container are fine.
    filter
        .label_selector
        .iter()
        .all(|(key, value)| container.labels.get(key) == Some(value))
}

/// Keep the containers matching `filter`, preserving their order.
pub fn filter_containers(
    containers: Vec<Container>,
    filter: Option<&ContainerFilter>,
) -> Vec<Container> {
    if filter.is_none() {
        return containers;
    }

    containers
        .into_iter()
        .filter(|container| matches(container, filter))
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
