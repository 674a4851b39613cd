//! The module contains `Collection`, the ordered record store shared by
//! transactions and categories.

use serde_json::Value;

use crate::{Addressing, EngineError, Record, ResultEngine};

/// Name of the field the engine writes the assigned id into.
pub const ID_FIELD: &str = "id";

#[derive(Debug)]
struct Slot {
    /// Id assigned when the record was created.
    ///
    /// Kept apart from the record itself, since a replace may drop or
    /// rewrite the record's own `id` field.
    id: u64,
    record: Record,
}

/// An ordered sequence of free-form records.
///
/// Records are kept in insertion order. How an id maps to a slot depends
/// on the collection's [`Addressing`].
#[derive(Debug)]
pub struct Collection {
    kind: &'static str,
    addressing: Addressing,
    next_id: u64,
    slots: Vec<Slot>,
}

impl Collection {
    pub fn new(kind: &'static str, addressing: Addressing) -> Self {
        Self {
            kind,
            addressing,
            next_id: 1,
            slots: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<Record> {
        self.slots.iter().map(|slot| slot.record.clone()).collect()
    }

    /// Assign an id to `record`, append it and return the stored copy.
    ///
    /// Any `id` the caller put in the record is overwritten.
    pub fn create(&mut self, mut record: Record) -> Record {
        let id = match self.addressing {
            Addressing::Positional => self.slots.len() as u64 + 1,
            Addressing::Stable => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        record.insert(ID_FIELD.to_string(), Value::from(id));
        self.slots.push(Slot {
            id,
            record: record.clone(),
        });
        tracing::debug!(kind = self.kind, id, "record created");

        record
    }

    /// Overwrite the record addressed by `id` with `record`, as given.
    pub fn replace(&mut self, id: u64, record: Record) -> ResultEngine<Record> {
        let position = self.position(id)?;
        self.slots[position].record = record.clone();
        tracing::debug!(kind = self.kind, id, position, "record replaced");

        Ok(record)
    }

    /// Remove the record addressed by `id`. Later records move one
    /// position earlier.
    pub fn delete(&mut self, id: u64) -> ResultEngine<Record> {
        let position = self.position(id)?;
        let slot = self.slots.remove(position);
        tracing::debug!(kind = self.kind, id, position, "record deleted");

        Ok(slot.record)
    }

    fn position(&self, id: u64) -> ResultEngine<usize> {
        let position = match self.addressing {
            Addressing::Positional => id
                .checked_sub(1)
                .and_then(|position| usize::try_from(position).ok())
                .filter(|position| *position < self.slots.len()),
            // Slots are appended with increasing ids, so they stay sorted.
            Addressing::Stable => self.slots.binary_search_by_key(&id, |slot| slot.id).ok(),
        };

        position.ok_or(EngineError::OutOfRange(id))
    }
}
