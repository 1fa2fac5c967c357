// tests/property_ordering.rs

use proptest::prelude::*;
use godeploy::types::OperationKind;
use godeploy::workflow::{Plan, Request};

/// Build a request by applying flags in the given order; a repeated
/// `--commit`/`--tag` keeps its last value, as the CLI does.
fn request_from_flags(flags: &[(OperationKind, String)]) -> Request {
    let mut request = Request::default();
    for (kind, value) in flags {
        match kind {
            OperationKind::Build => request.build = true,
            OperationKind::Test => request.test = true,
            OperationKind::Commit => request.commit = Some(value.clone()),
            OperationKind::Tag => request.tag = Some(value.clone()),
        }
    }
    request
}

fn flag_strategy() -> impl Strategy<Value = (OperationKind, String)> {
    (
        prop::sample::select(OperationKind::ORDER.to_vec()),
        "[a-z][a-z0-9 .-]{0,12}",
    )
}

proptest! {
    #[test]
    fn plan_order_is_canonical(flags in proptest::collection::vec(flag_strategy(), 0..8)) {
        let request = request_from_flags(&flags);
        let plan = Plan::from_request(&request).unwrap();
        let kinds = plan.kinds();

        // Sorted, no duplicates.
        prop_assert!(kinds.windows(2).all(|w| w[0] < w[1]));

        // Exactly the requested kinds.
        let mut requested: Vec<OperationKind> = flags.iter().map(|(k, _)| *k).collect();
        requested.sort();
        requested.dedup();
        prop_assert_eq!(kinds, requested);
    }
}
