use csv_aggregate_shared_kernel::AggregateError;

/// One-line diagnostic for stderr, prefixed with the failure category when known.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AggregateError>() {
        Some(inner) => format!("Error ({}): {inner}", inner.kind().label()),
        None => format!("Error: {err:#}"),
    }
}
