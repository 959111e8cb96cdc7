#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can reach the
// private rehash path through small capacities and a colliding hasher.

use crate::config::{TableConfig, GROWTH_COEFFICIENT};
use crate::hash_table::HashTable;
use crate::test_util::ConstBuildHasher;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, String),
    Remove(usize),
    Search(usize),
    Contains(i64),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i64>, Vec<OpI>)> {
    proptest::collection::vec(any::<i64>(), 1..=16).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), "[a-z]{0,4}").prop_map(|(i, v)| OpI::Put(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Search),
            1 => prop_oneof![contains_pool, any::<i64>()].prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (1usize..=8, 1u32..=100).prop_map(|(c, lf)| TableConfig::new(c, lf as f64 / 100.0))
}

// Drive `sut` and a std HashMap model through the same operations and
// compare after each step.
// Invariants exercised:
// - Last write wins per key; `put` reports the previous value on update.
// - `remove` returns the model's value, or None without changing anything.
// - `search`/`contains_key` parity with the model.
// - `keys`/`values`/`iter` each yield every live pair exactly once.
// - `len`/`is_empty` parity; capacity only ever grows by GROWTH_COEFFICIENT.
fn run_state_machine<S: BuildHasher>(
    mut sut: HashTable<S>,
    pool: &[i64],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<i64, String> = HashMap::new();
    for op in ops {
        let capacity_before = sut.capacity();
        match op {
            OpI::Put(i, v) => {
                let k = pool[i];
                let prev = sut.put(k, v.clone());
                prop_assert_eq!(prev, model.insert(k, v.clone()));
                prop_assert_eq!(sut.search(k), Some(v.as_str()));
                let cap = sut.capacity();
                let grew = cap == capacity_before * GROWTH_COEFFICIENT;
                prop_assert!(grew || cap == capacity_before);
                // Without growth the table must be below its threshold.
                prop_assert!(grew || (sut.len() as f64 / cap as f64) < sut.load_factor());
            }
            OpI::Remove(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(&k));
                prop_assert!(!sut.contains_key(k));
                prop_assert_eq!(sut.capacity(), capacity_before);
            }
            OpI::Search(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.search(k), model.get(&k).map(|v| v.as_str()));
            }
            OpI::Contains(k) => {
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            OpI::Iterate => {
                let s_keys: BTreeSet<i64> = sut.keys().into_iter().collect();
                let m_keys: BTreeSet<i64> = model.keys().copied().collect();
                prop_assert_eq!(s_keys, m_keys);

                let mut s_vals = sut.values();
                let mut m_vals: Vec<String> = model.values().cloned().collect();
                s_vals.sort();
                m_vals.sort();
                prop_assert_eq!(s_vals, m_vals);

                let mut pairs: Vec<(i64, String)> =
                    sut.iter().map(|(k, v)| (k, v.to_string())).collect();
                pairs.sort();
                let mut m_pairs: Vec<(i64, String)> =
                    model.iter().map(|(k, v)| (*k, v.clone())).collect();
                m_pairs.sort();
                prop_assert_eq!(pairs, m_pairs);
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), capacity_before);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.capacity() >= 1);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut = HashTable::from_config(config).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }
}

// Low-bit hasher: keys that agree modulo small powers of two collide under
// one capacity and split under the next, so growth both splits and merges
// chains.
#[derive(Clone, Default)]
struct IdentityBuildHasher;
#[derive(Default)]
struct IdentityHasher(u64);
impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 8) | b as u64;
        }
    }
    fn write_i64(&mut self, i: i64) {
        self.0 = i as u64;
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

// Collision variant using a constant hasher to stress chain scanning and
// rehash merging.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut = HashTable::with_hasher(config, ConstBuildHasher).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_identity_hash((pool, ops) in arb_scenario(), config in arb_config()) {
        let sut = HashTable::with_hasher(config, IdentityBuildHasher).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }
}
