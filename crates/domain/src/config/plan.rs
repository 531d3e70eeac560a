// crates/domain/src/config/plan.rs
use csv_aggregate_shared_kernel::{CellValue, DomainError, DomainResult, FieldRole, Number};
use log::debug;

use super::AggregationConfig;
use crate::{
    analytics::{SortSpec, SortStrategy},
    model::{AggregateRecord, ColumnSet, GroupKey, Record},
};

/// An [`AggregationConfig`] checked against a concrete header.
///
/// Every column has exactly one role; columns not named by any aggregate
/// role form the group key, enumerated in header order.
#[derive(Debug, Clone)]
pub struct AggregationPlan {
    columns: ColumnSet,
    roles: Vec<FieldRole>,
    key_indices: Vec<usize>,
    sort: SortStrategy,
}

impl AggregationPlan {
    pub(crate) fn resolve(config: &AggregationConfig, columns: ColumnSet) -> DomainResult<Self> {
        let mut roles = vec![FieldRole::Key; columns.len()];
        for (name, role) in config.aggregate_fields() {
            let idx = columns
                .position(name)
                .ok_or_else(|| DomainError::UnknownField { field: name.to_string(), role })?;
            roles[idx] = role;
        }

        let specs = config
            .sort_fields()
            .iter()
            .map(|name| {
                columns
                    .position(name)
                    .map(|idx| SortSpec::new(idx, name.clone()))
                    .ok_or_else(|| DomainError::UnknownSortField { field: name.clone() })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let key_indices: Vec<usize> = roles
            .iter()
            .enumerate()
            .filter(|(_, role)| !role.is_aggregate())
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "resolved {} columns: key={:?} sum={:?} min={:?} max={:?} sort={:?}",
            columns.len(),
            key_indices.iter().map(|&i| columns.name(i)).collect::<Vec<_>>(),
            config.sum_fields(),
            config.min_fields(),
            config.max_fields(),
            config.sort_fields(),
        );

        Ok(Self { columns, roles, key_indices, sort: SortStrategy::new(specs) })
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn role(&self, idx: usize) -> FieldRole {
        self.roles[idx]
    }

    pub fn key_indices(&self) -> &[usize] {
        &self.key_indices
    }

    pub(crate) fn into_parts(self) -> (ColumnSet, SortStrategy) {
        (self.columns, self.sort)
    }

    pub(crate) fn check_width(&self, record: &Record) -> DomainResult<()> {
        if record.len() == self.columns.len() {
            Ok(())
        } else {
            Err(DomainError::RecordWidthMismatch {
                line: record.line,
                expected: self.columns.len(),
                found: record.len(),
            })
        }
    }

    pub(crate) fn group_key(&self, record: &Record) -> GroupKey {
        GroupKey::from_record(record, &self.key_indices)
    }

    /// First record of a group: key cells copied, aggregate cells parsed.
    pub(crate) fn seed(&self, record: Record) -> DomainResult<AggregateRecord> {
        let line = record.line;
        let cells = record
            .values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| match self.roles[idx] {
                FieldRole::Key => Ok(CellValue::Text(value)),
                _ => self.parse(idx, &value, line).map(CellValue::Number),
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(AggregateRecord::new(cells))
    }

    /// Fold a further record of the same group into its running aggregate.
    pub(crate) fn fold(&self, group: &mut AggregateRecord, record: &Record) -> DomainResult<()> {
        for (idx, role) in self.roles.iter().enumerate() {
            if !role.is_aggregate() {
                continue;
            }
            let incoming = self.parse(idx, &record.values[idx], record.line)?;
            let Some(current) = group.number_mut(idx) else {
                continue;
            };
            match role {
                FieldRole::Sum => *current += incoming,
                FieldRole::Min => current.keep_min(incoming),
                FieldRole::Max => current.keep_max(incoming),
                FieldRole::Key => {}
            }
        }
        Ok(())
    }

    fn parse(&self, idx: usize, value: &str, line: u64) -> DomainResult<Number> {
        Number::parse(value).map_err(|_| DomainError::InvalidNumber {
            field: self.columns.name(idx).to_string(),
            value: value.to_string(),
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn header() -> ColumnSet {
        ColumnSet::try_new(["FieldName1", "FieldName2", "Key1", "Key2"]).unwrap()
    }

    #[test]
    fn complement_of_aggregates_forms_the_key() {
        let config = AggregationConfig::new(["FieldName1"], NONE, ["FieldName2"], NONE).unwrap();
        let plan = config.resolve(header()).unwrap();
        assert_eq!(plan.key_indices(), [2, 3]);
        assert_eq!(plan.role(0), FieldRole::Sum);
        assert_eq!(plan.role(1), FieldRole::Max);
        assert_eq!(plan.role(3), FieldRole::Key);
    }

    #[test]
    fn unknown_aggregate_field_is_a_configuration_error() {
        let config = AggregationConfig::new(["NoSuchField"], NONE, NONE, NONE).unwrap();
        let err = config.resolve(header()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnknownField { ref field, role: FieldRole::Sum } if field == "NoSuchField"
        ));
    }

    #[test]
    fn unknown_sort_field_is_reported_separately() {
        let config = AggregationConfig::new(NONE, NONE, NONE, ["Key1", "Missing"]).unwrap();
        let err = config.resolve(header()).unwrap_err();
        assert!(matches!(err, DomainError::UnknownSortField { ref field } if field == "Missing"));
    }

    #[test]
    fn empty_header_knows_no_fields() {
        let config = AggregationConfig::new(["x"], NONE, NONE, NONE).unwrap();
        assert!(config.resolve(ColumnSet::default()).is_err());

        let plain = AggregationConfig::default();
        let plan = plain.resolve(ColumnSet::default()).unwrap();
        assert!(plan.key_indices().is_empty());
    }

    #[test]
    fn seed_rejects_non_numeric_aggregate_value() {
        let config = AggregationConfig::new(["FieldName1"], NONE, NONE, NONE).unwrap();
        let plan = config.resolve(header()).unwrap();
        let err = plan.seed(Record::new(7, ["ten", "20", "foo", "bar"])).unwrap_err();
        match err {
            DomainError::InvalidNumber { field, value, line } => {
                assert_eq!(field, "FieldName1");
                assert_eq!(value, "ten");
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn key_values_are_not_parsed() {
        let config = AggregationConfig::new(["FieldName1"], NONE, NONE, NONE).unwrap();
        let plan = config.resolve(header()).unwrap();
        let group = plan.seed(Record::new(2, ["10", "not-a-number", "foo", "bar"])).unwrap();
        assert_eq!(group.get(1), Some(&CellValue::from("not-a-number")));
        assert_eq!(group.get(0), Some(&CellValue::from(Number::new(10.0))));
    }

    #[test]
    fn width_mismatch_is_detected() {
        let plan = AggregationConfig::default().resolve(header()).unwrap();
        let err = plan.check_width(&Record::new(3, ["1", "2", "3"])).unwrap_err();
        assert!(matches!(err, DomainError::RecordWidthMismatch { line: 3, expected: 4, found: 3 }));
    }
}
