//! Enumeration-to-lookup-table reconciliation
//!
//! The seeder walks an enumeration's member table and stages a lookup row for
//! every member that storage does not know yet. It never updates or deletes,
//! so a table that was hand-edited after its initial seeding keeps those
//! edits. Committing whatever got staged stays with the caller.

use std::collections::HashSet;

use crate::descriptor::{EnumDescriptor, LookupEnum};
use crate::Result;
use crate::row::LookupRow;

/// Minimal storage capability the seeder reconciles against.
///
/// `existing_ids` must report staged rows as well as persisted ones; that is
/// what makes a repeated pass over the same uncommitted view a no-op.
pub trait LookupStore {
    /// Identifiers currently visible: persisted rows plus anything staged
    fn existing_ids(&self) -> Result<HashSet<i32>>;

    /// Record a row for later insertion
    fn stage(&mut self, row: LookupRow);
}

/// The simplest store: a plain row collection. Staging appends to the same
/// collection the existence check reads, so reconciling twice against one
/// `Vec` changes nothing the second time.
impl LookupStore for Vec<LookupRow> {
    fn existing_ids(&self) -> Result<HashSet<i32>> {
        Ok(self.iter().map(|r| r.id).collect())
    }

    fn stage(&mut self, row: LookupRow) {
        self.push(row);
    }
}

/// Bring a lookup table in sync with its enumeration.
///
/// Walks `descriptor`'s members in declaration order and stages a row for
/// every member whose id is not yet visible in `store`. Returns the rows this
/// pass staged. Reconciliation is idempotent: run against the same persisted
/// state twice, the second pass stages zero rows.
///
/// The pass fails without staging anything if the descriptor is malformed;
/// see [`EnumDescriptor::validate`] for the checks and error taxonomy. These
/// are declaration mistakes that should abort startup, not conditions to
/// retry.
///
/// Callers must ensure single-writer access for the duration of a pass. Two
/// concurrent passes over the same table can both stage the same id and then
/// collide on the primary key at commit; the storage schema's key constraint
/// is the backstop, not this routine.
pub fn reconcile<S: LookupStore>(
    descriptor: &EnumDescriptor,
    store: &mut S,
) -> Result<Vec<LookupRow>> {
    descriptor.validate()?;

    let existing = store.existing_ids()?;
    let mut staged = Vec::new();

    for member in descriptor.members {
        // Fits i32: validated above.
        let id = member.value as i32;
        if existing.contains(&id) {
            continue;
        }

        let row = LookupRow::new(id, member.name, member.description);
        tracing::debug!(
            "staging {}::{} as lookup row {}",
            descriptor.type_name,
            member.name,
            id
        );
        store.stage(row.clone());
        staged.push(row);
    }

    tracing::info!(
        "reconciled `{}`: staged {} of {} members",
        descriptor.type_name,
        staged.len(),
        descriptor.members.len()
    );
    Ok(staged)
}

/// [`reconcile`] for a declared lookup enum: `reconcile_enum::<Rating, _>(&mut store)`
pub fn reconcile_enum<E: LookupEnum, S: LookupStore>(store: &mut S) -> Result<Vec<LookupRow>> {
    reconcile(E::descriptor(), store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EnumMember, Repr};

    crate::lookup_enum! {
        enum Rating {
            Brilliant = 1, "Something really good";
            Good = 2;
            Average = 3;
            Bad = 4;
            Terrible = 5, "Something really bad";
            Jarl = 6;
        }
    }

    #[test]
    fn test_fresh_seed_stages_every_member() {
        let mut rows: Vec<LookupRow> = Vec::new();
        let staged = reconcile_enum::<Rating, _>(&mut rows).unwrap();

        assert_eq!(staged.len(), 6);
        assert_eq!(rows, staged);

        // Declaration order, id = member value, name = symbolic name.
        assert_eq!(staged[0], LookupRow::new(1, "Brilliant", "Something really good"));
        assert_eq!(staged[1], LookupRow::new(2, "Good", ""));
        assert_eq!(staged[5], LookupRow::new(6, "Jarl", ""));
    }

    #[test]
    fn test_idempotent_over_same_collection() {
        let mut rows: Vec<LookupRow> = Vec::new();
        reconcile_enum::<Rating, _>(&mut rows).unwrap();
        let second = reconcile_enum::<Rating, _>(&mut rows).unwrap();

        assert!(second.is_empty());
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn test_partial_preexistence_fills_gaps_only() {
        crate::lookup_enum! {
            enum Abc {
                A = 1;
                B = 2;
                C = 3;
            }
        }

        // Row 2 already exists with a hand-edited name.
        let mut rows = vec![LookupRow::new(2, "B (edited)", "")];
        let staged = reconcile_enum::<Abc, _>(&mut rows).unwrap();

        assert_eq!(staged.len(), 2);
        assert_eq!(staged[0].id, 1);
        assert_eq!(staged[0].name, "A");
        assert_eq!(staged[1].id, 3);
        assert_eq!(staged[1].name, "C");

        // The existing row was neither duplicated nor touched.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], LookupRow::new(2, "B (edited)", ""));
    }

    #[test]
    fn test_description_derivation() {
        let mut rows: Vec<LookupRow> = Vec::new();
        let staged = reconcile_enum::<Rating, _>(&mut rows).unwrap();

        assert_eq!(staged[4].description, "Something really bad");
        // Unannotated members get the empty string, not an absent marker.
        assert_eq!(staged[2].description, "");
    }

    #[test]
    fn test_validation_failure_stages_nothing() {
        let bad = EnumDescriptor {
            type_name: "Bad",
            repr: Repr::I32,
            members: &[
                EnumMember { name: "Ok", value: 1, description: "" },
                EnumMember { name: "Zero", value: 0, description: "" },
            ],
        };

        let mut rows: Vec<LookupRow> = Vec::new();
        let err = reconcile(&bad, &mut rows).unwrap_err();

        assert!(matches!(err, crate::Error::NonPositiveValue { .. }));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_non_enumeration_descriptor_rejected() {
        let not_an_enum = EnumDescriptor {
            type_name: "NotAnEnum",
            repr: Repr::I32,
            members: &[],
        };

        let mut rows: Vec<LookupRow> = Vec::new();
        let err = reconcile(&not_an_enum, &mut rows).unwrap_err();

        assert!(matches!(err, crate::Error::InvalidType { .. }));
        assert!(rows.is_empty());
    }
}
