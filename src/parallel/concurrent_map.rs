use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use crate::core::types::DocId;

/// Integer keys that can pick a shard.
pub trait ShardKey: Ord + Copy + Send {
    fn shard_index(&self, shard_count: usize) -> usize;
}

macro_rules! impl_shard_key {
    ($($t:ty),*) => {
        $(
            impl ShardKey for $t {
                fn shard_index(&self, shard_count: usize) -> usize {
                    // Euclidean remainder keeps negative keys in range
                    (*self as i128).rem_euclid(shard_count as i128) as usize
                }
            }
        )*
    };
}

impl_shard_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ShardKey for DocId {
    fn shard_index(&self, shard_count: usize) -> usize {
        self.0.shard_index(shard_count)
    }
}

/// How `fold` combines values that share a key.
pub trait Merge {
    fn merge(&mut self, other: Self);
}

macro_rules! impl_merge_by_sum {
    ($($t:ty),*) => {
        $(
            impl Merge for $t {
                fn merge(&mut self, other: Self) {
                    *self += other;
                }
            }
        )*
    };
}

impl_merge_by_sum!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T> Merge for Vec<T> {
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

/// Exclusive access to one value slot. The shard lock is held for the
/// lifetime of this guard and released when it is dropped.
pub struct Access<'a, V> {
    guard: MappedMutexGuard<'a, V>,
}

impl<V> Deref for Access<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.guard
    }
}

impl<V> DerefMut for Access<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.guard
    }
}

/// Lock-striped map: `shard_count` independently locked `BTreeMap`s, the
/// shard chosen by `key mod shard_count`. At most one shard lock is ever held
/// by a single call.
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: ShardKey,
    V: Default + Merge + Send,
{
    /// A shard count of zero is treated as one.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        ConcurrentMap { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, key: &K) -> &Mutex<BTreeMap<K, V>> {
        &self.shards[key.shard_index(self.shards.len())]
    }

    /// Locks the key's shard and returns its value slot, inserting
    /// `V::default()` first if the key is absent.
    pub fn access(&self, key: K) -> Access<'_, V> {
        let guard = self.shard(&key).lock();
        Access {
            guard: MutexGuard::map(guard, |shard| shard.entry(key).or_default()),
        }
    }

    pub fn remove(&self, key: K) -> Option<V> {
        self.shard(&key).lock().remove(&key)
    }

    /// Merges every shard into one ordered map. Shards are locked one at a
    /// time; each lock is released before the next is taken.
    pub fn fold(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let shard = shard.lock();
            for (key, value) in shard.iter() {
                result.entry(*key).or_insert_with(V::default).merge(value.clone());
            }
        }
        result
    }

    /// Consuming variant of `fold`; needs no locking and moves the values out.
    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in self.shards {
            for (key, value) in shard.into_inner() {
                result.entry(key).or_insert_with(V::default).merge(value);
            }
        }
        result
    }
}
