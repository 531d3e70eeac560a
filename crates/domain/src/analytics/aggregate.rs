use csv_aggregate_shared_kernel::DomainResult;
use hashbrown::HashMap;
use log::{debug, info, trace};

use crate::{
    config::AggregationPlan,
    model::{AggregateRecord, GroupKey, Record},
};

/// Result of one aggregation run: the header to emit and one row per group.
#[derive(Debug, Clone)]
pub struct AggregationOutput {
    pub columns: Vec<String>,
    pub rows: Vec<AggregateRecord>,
    pub records_read: u64,
}

/// Groups records by their key columns and folds aggregate columns into a
/// running value per group.
///
/// Records are pushed one at a time; memory grows with the number of
/// distinct groups, not the number of records. Groups are kept in order of
/// first appearance until [`Aggregator::finish`] applies the sort.
#[derive(Debug)]
pub struct Aggregator {
    plan: AggregationPlan,
    slots: HashMap<GroupKey, usize>,
    groups: Vec<AggregateRecord>,
    records_read: u64,
}

impl Aggregator {
    pub fn new(plan: AggregationPlan) -> Self {
        Self {
            plan,
            slots: HashMap::new(),
            groups: Vec::new(),
            records_read: 0,
        }
    }

    /// Aggregate a whole sequence in one call.
    pub fn aggregate<I>(plan: AggregationPlan, records: I) -> DomainResult<AggregationOutput>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut aggregator = Self::new(plan);
        for record in records {
            aggregator.push(record)?;
        }
        Ok(aggregator.finish())
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    pub fn push(&mut self, record: Record) -> DomainResult<()> {
        self.plan.check_width(&record)?;
        let key = self.plan.group_key(&record);
        match self.slots.get(&key) {
            Some(&slot) => self.plan.fold(&mut self.groups[slot], &record)?,
            None => {
                trace!("line {}: new group {:?}", record.line, key.values());
                let group = self.plan.seed(record)?;
                self.slots.insert(key, self.groups.len());
                self.groups.push(group);
            }
        }
        self.records_read += 1;
        Ok(())
    }

    /// Drop the group table and return the groups in sorted order.
    pub fn finish(self) -> AggregationOutput {
        let Self { plan, groups, records_read, .. } = self;
        let (columns, strategy) = plan.into_parts();
        info!("aggregated {records_read} records into {} groups", groups.len());

        let rows = if strategy.is_empty() {
            groups
        } else {
            debug!(
                "sorting by {:?}",
                strategy.specs().iter().map(|s| s.name()).collect::<Vec<_>>()
            );
            strategy.sorted(groups)
        };

        AggregationOutput { columns: columns.into_names(), rows, records_read }
    }
}
