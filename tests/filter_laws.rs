// ABOUTME: Property tests for filter semantics.
// ABOUTME: Wildcard identity, exact-match exclusion, subset labels, order, and idempotence.

mod support;

use crilist::cri::{Container, ContainerFilter, ContainerState};
use crilist::server::{filter_containers, matches};
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use std::collections::HashMap;

fn state() -> impl Strategy<Value = ContainerState> {
    prop_oneof![
        Just(ContainerState::Created),
        Just(ContainerState::Running),
        Just(ContainerState::Exited),
        Just(ContainerState::Unknown),
    ]
}

fn label_map() -> impl Strategy<Value = HashMap<String, String>> {
    hash_map("[a-c]{1,2}", "[xy]{0,1}", 0..4)
}

fn container() -> impl Strategy<Value = Container> {
    ("c[0-9]", "pod-[ab]", state(), label_map()).prop_map(|(id, sandbox, state, labels)| {
        let mut c = support::view(&id, &sandbox, state, &[]);
        c.labels = labels;
        c
    })
}

fn filter() -> impl Strategy<Value = ContainerFilter> {
    (
        proptest::option::of("c[0-9]"),
        proptest::option::of("pod-[ab]"),
        proptest::option::of(state()),
        label_map(),
    )
        .prop_map(|(id, pod_sandbox_id, state, label_selector)| ContainerFilter {
            id,
            pod_sandbox_id,
            state,
            label_selector,
        })
}

proptest! {
    #[test]
    fn none_and_empty_filters_match_everything(c in container()) {
        prop_assert!(matches(&c, None));
        prop_assert!(matches(&c, Some(&ContainerFilter::default())));
    }

    #[test]
    fn mismatched_id_never_matches(c in container(), f in filter(), other in "c[0-9]") {
        prop_assume!(other != c.id);
        let f = ContainerFilter { id: Some(other), ..f };
        prop_assert!(!matches(&c, Some(&f)));
    }

    #[test]
    fn mismatched_sandbox_never_matches(c in container(), f in filter(), other in "pod-[ab]") {
        prop_assume!(other != c.pod_sandbox_id);
        let f = ContainerFilter { pod_sandbox_id: Some(other), ..f };
        prop_assert!(!matches(&c, Some(&f)));
    }

    #[test]
    fn mismatched_state_never_matches(c in container(), f in filter(), other in state()) {
        prop_assume!(other != c.state);
        let f = ContainerFilter { state: Some(other), ..f };
        prop_assert!(!matches(&c, Some(&f)));
    }

    #[test]
    fn any_subset_of_labels_selects(c in container(), keep in vec(any::<bool>(), 4)) {
        let selector: HashMap<_, _> = c
            .labels
            .iter()
            .zip(keep.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|((k, v), _)| (k.clone(), v.clone()))
            .collect();
        let f = ContainerFilter { label_selector: selector, ..Default::default() };
        prop_assert!(matches(&c, Some(&f)));
    }

    #[test]
    fn output_is_ordered_subsequence(input in vec(container(), 0..12), f in filter()) {
        let output = filter_containers(input.clone(), Some(&f));

        let mut rest = input.iter();
        for kept in &output {
            prop_assert!(rest.any(|c| c == kept));
        }
        let expected = input.iter().filter(|c| matches(c, Some(&f))).count();
        prop_assert_eq!(output.len(), expected);
    }

    #[test]
    fn filtering_is_idempotent(input in vec(container(), 0..12), f in filter()) {
        let once = filter_containers(input, Some(&f));
        let twice = filter_containers(once.clone(), Some(&f));
        prop_assert_eq!(once, twice);
    }
}
