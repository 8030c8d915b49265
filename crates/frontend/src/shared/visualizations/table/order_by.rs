//! Multi-key row ordering driven by header clicks

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Ordered sort keys; the first key is the primary one.
/// Empty means the input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBy(Vec<OrderByKey>);

impl OrderBy {
    pub fn new(keys: Vec<OrderByKey>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[OrderByKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index and direction of `column` among the keys
    pub fn position(&self, column: &str) -> Option<(usize, SortDirection)> {
        self.0
            .iter()
            .position(|key| key.column == column)
            .map(|index| (index, self.0[index].direction))
    }

    /// Next ordering after a click on `column`.
    ///
    /// The primary key flips its direction; any other column becomes the
    /// primary key ascending, and its previous entry is dropped.
    pub fn toggle(&self, column: &str) -> OrderBy {
        match self.0.first() {
            Some(first) if first.column == column => {
                let mut keys = self.0.clone();
                keys[0].direction = first.direction.reverse();
                OrderBy(keys)
            }
            _ => {
                let mut keys = Vec::with_capacity(self.0.len() + 1);
                keys.push(OrderByKey {
                    column: column.to_string(),
                    direction: SortDirection::Ascending,
                });
                keys.extend(self.0.iter().filter(|key| key.column != column).cloned());
                OrderBy(keys)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(column: &str, direction: SortDirection) -> OrderByKey {
        OrderByKey {
            column: column.to_string(),
            direction,
        }
    }

    #[test]
    fn test_toggle_new_column_prepends_ascending() {
        let order = OrderBy::default().toggle("age");
        assert_eq!(order.keys(), &[key("age", SortDirection::Ascending)]);

        let order = order.toggle("name");
        assert_eq!(
            order.keys(),
            &[
                key("name", SortDirection::Ascending),
                key("age", SortDirection::Ascending)
            ]
        );
    }

    #[test]
    fn test_toggle_primary_flips_direction() {
        let order = OrderBy::default().toggle("age").toggle("age");
        assert_eq!(order.keys(), &[key("age", SortDirection::Descending)]);
        assert_eq!(
            order.toggle("age").keys(),
            &[key("age", SortDirection::Ascending)]
        );
    }

    #[test]
    fn test_toggle_secondary_moves_to_front() {
        let order = OrderBy::new(vec![
            key("name", SortDirection::Ascending),
            key("age", SortDirection::Descending),
        ]);
        let order = order.toggle("age");
        assert_eq!(
            order.keys(),
            &[
                key("age", SortDirection::Ascending),
                key("name", SortDirection::Ascending)
            ]
        );
        assert_eq!(order.position("name"), Some((1, SortDirection::Ascending)));
        assert_eq!(order.position("city"), None);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }
}
