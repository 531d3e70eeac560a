/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    pub records_read: u64,
    pub groups_written: usize,
}
