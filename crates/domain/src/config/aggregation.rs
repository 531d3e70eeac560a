// crates/domain/src/config/aggregation.rs
use csv_aggregate_shared_kernel::{DomainError, DomainResult, FieldRole};
use hashbrown::HashMap;

use super::AggregationPlan;
use crate::model::ColumnSet;

/// Role assignment requested by the caller, before it is checked against a header.
///
/// Each aggregate role is a set: naming a column twice under the same role is
/// harmless, naming it under two different roles is rejected at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationConfig {
    sum: Vec<String>,
    min: Vec<String>,
    max: Vec<String>,
    sort: Vec<String>,
}

impl AggregationConfig {
    pub fn new<S: Into<String>>(
        sum: impl IntoIterator<Item = S>,
        min: impl IntoIterator<Item = S>,
        max: impl IntoIterator<Item = S>,
        sort: impl IntoIterator<Item = S>,
    ) -> DomainResult<Self> {
        let config = Self {
            sum: dedup(sum),
            min: dedup(min),
            max: dedup(max),
            sort: sort.into_iter().map(Into::into).collect(),
        };
        config.check_disjoint()?;
        Ok(config)
    }

    pub fn sum_fields(&self) -> &[String] {
        &self.sum
    }

    pub fn min_fields(&self) -> &[String] {
        &self.min
    }

    pub fn max_fields(&self) -> &[String] {
        &self.max
    }

    pub fn sort_fields(&self) -> &[String] {
        &self.sort
    }

    pub fn fields_for(&self, role: FieldRole) -> &[String] {
        match role {
            FieldRole::Sum => &self.sum,
            FieldRole::Min => &self.min,
            FieldRole::Max => &self.max,
            FieldRole::Key => &[],
        }
    }

    /// Aggregate-role names paired with their role, sum first, then min, then max.
    pub fn aggregate_fields(&self) -> impl Iterator<Item = (&str, FieldRole)> {
        FieldRole::AGGREGATES
            .into_iter()
            .flat_map(move |role| self.fields_for(role).iter().map(move |name| (name.as_str(), role)))
    }

    /// Check the configuration against a header and fix every column's role.
    pub fn resolve(&self, columns: ColumnSet) -> DomainResult<AggregationPlan> {
        AggregationPlan::resolve(self, columns)
    }

    fn check_disjoint(&self) -> DomainResult<()> {
        let mut seen: HashMap<&str, FieldRole> = HashMap::new();
        for (name, role) in self.aggregate_fields() {
            if let Some(first) = seen.insert(name, role) {
                return Err(DomainError::OverlappingRoles {
                    field: name.to_string(),
                    first,
                    second: role,
                });
            }
        }
        Ok(())
    }
}

fn dedup<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names.into_iter().map(Into::into) {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
