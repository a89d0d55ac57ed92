pub mod graph;
pub mod sets;
pub mod statistics;
pub mod traversal;

#[cfg(test)]
pub(crate) fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    // try_init: the first test in the process installs the subscriber, the rest reuse it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
