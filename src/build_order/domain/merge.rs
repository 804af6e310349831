use super::VersionConstraint;
use std::collections::BTreeMap;

/// Additive, recursive merge of parsed dependency data
///
/// Map-shaped values merge key by key and never lose siblings that are
/// already present in the destination. Leaf values (constraint sequences)
/// are replaced by the incoming value: last write wins.
pub trait DeepMerge {
    fn merge_from(&mut self, source: Self);
}

impl DeepMerge for Vec<VersionConstraint> {
    fn merge_from(&mut self, source: Self) {
        *self = source;
    }
}

impl<K, V> DeepMerge for BTreeMap<K, V>
where
    K: Ord,
    V: DeepMerge + Default,
{
    fn merge_from(&mut self, source: Self) {
        for (key, value) in source {
            self.entry(key).or_default().merge_from(value);
        }
    }
}

/// Merges `source` into `destination`, returning the destination for chaining
pub fn merge<T: DeepMerge>(source: T, destination: &mut T) -> &mut T {
    destination.merge_from(source);
    destination
}
