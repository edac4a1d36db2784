//! Lookup of charges by the assignment they belong to.

use crate::entities::ProductCharge;
use std::collections::HashMap;

/// Builds an assignment-id to charge map for O(1) joins.
///
/// When several charges reference the same assignment, the last one in
/// dataset order wins.
#[must_use]
pub fn index_charges(charges: &[ProductCharge]) -> HashMap<i64, &ProductCharge> {
    let mut by_assignment = HashMap::with_capacity(charges.len());
    for charge in charges {
        by_assignment.insert(charge.special_product_assignment_id, charge);
    }
    by_assignment
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::charge;

    #[test]
    fn test_index_charges_keys_by_assignment_id() {
        let charges = vec![charge(1, true, 10.0), charge(2, false, 20.0)];
        let index = index_charges(&charges);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&1).map(|c| c.amount), Some(10.0));
        assert_eq!(index.get(&2).map(|c| c.active), Some(false));
        assert!(!index.contains_key(&3));
    }

    #[test]
    fn test_index_charges_last_duplicate_wins() {
        let charges = vec![
            charge(1, true, 10.0),
            charge(1, false, 99.0),
        ];
        let index = index_charges(&charges);
        assert_eq!(index.len(), 1);
        let kept = index.get(&1).copied();
        assert_eq!(kept, Some(&charges[1]));
    }
}
