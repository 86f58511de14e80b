//! Column lookups and the counting primitives the reporters share.
//!
//! Ties are broken towards the smallest key, so results do not depend on row
//! order.

use anyhow::{anyhow, Result};
use arrow::{
    array::{Array, Float64Array, Int32Array, StringArray},
    record_batch::RecordBatch,
};
use std::collections::BTreeMap;

pub fn has_column(batch: &RecordBatch, name: &str) -> bool {
    batch.schema().index_of(name).is_ok()
}

fn typed_column<'a, T: Array + 'static>(batch: &'a RecordBatch, name: &str) -> Result<&'a T> {
    batch
        .column_by_name(name)
        .ok_or_else(|| anyhow!("column {name:?} not found"))?
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| anyhow!("column {name:?} has unexpected type"))
}

pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    typed_column(batch, name)
}

pub fn int_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int32Array> {
    typed_column(batch, name)
}

pub fn float_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Float64Array> {
    typed_column(batch, name)
}

fn count<K: Ord>(values: impl IntoIterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value; on a tie the smallest. `None` for no values.
pub fn mode<K: Ord>(values: impl IntoIterator<Item = K>) -> Option<K> {
    count(values)
        .into_iter()
        .fold(None, |best: Option<(K, usize)>, (k, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((k, n)),
        })
        .map(|(k, _)| k)
}

/// Occurrences of each value, most frequent first, ties in key order.
pub fn value_counts<K: Ord>(values: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = count(values).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
