use once_cell::sync::Lazy;
use prometheus::{register_int_counter, IntCounter};

/// Antall rapporter beregnet (vellykkede kall).
static REPORTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "healthgraph_reports_total",
        "Number of health reports computed"
    )
    .unwrap()
});

/// Antall målinger avvist i valideringen.
static REPORTS_REJECTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "healthgraph_reports_rejected_total",
        "Number of measurements rejected by validation"
    )
    .unwrap()
});

pub fn reports_total() -> &'static IntCounter {
    &REPORTS_TOTAL
}

pub fn reports_rejected_total() -> &'static IntCounter {
    &REPORTS_REJECTED_TOTAL
}
