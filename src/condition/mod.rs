mod cmp;
mod kind;

#[allow(non_upper_case_globals)]
pub mod op;

mod value;
mod variant;

pub use {
    cmp::{ArnCmp, DateCmp, NumericCmp, StringCmp},
    kind::ConditionType,
    op::ConditionOp,
    value::{ConditionValue, IntoConditionValues},
    variant::Variant,
};
use {
    crate::serutil::{display_json, StringLikeList},
    log::trace,
    serde::{ser::Serializer, Serialize},
    std::{
        borrow::Borrow,
        collections::{
            btree_map::{Iter, Keys},
            BTreeMap,
        },
        ops::Index,
    },
};

/// Condition keys and their values for a single operator.
pub type ConditionMap = BTreeMap<String, StringLikeList<String>>;

/// The `Condition` element of a statement: operator → key → values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<ConditionOp, ConditionMap>,
}

display_json!(Condition);

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `values` under `op` and `key`. Values for an operator/key pair that is already present are appended after
    /// the existing ones. Operators are stored in their [ConditionOp::canonical] form.
    pub fn insert_values<K: Into<String>>(&mut self, op: ConditionOp, key: K, values: Vec<String>) {
        let op = op.canonical();
        let key = key.into();
        trace!("Condition: {} {} += {:?}", op, key, values);

        let map = self.map.entry(op).or_default();
        match map.get_mut(&key) {
            Some(existing) => {
                for value in values {
                    existing.push(value);
                }
            }
            None => {
                map.insert(key, StringLikeList::from_items(values));
            }
        }
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        ConditionOp: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&ConditionMap>
    where
        ConditionOp: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, ConditionOp, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, ConditionOp, ConditionMap> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<Q> Index<&Q> for Condition
where
    ConditionOp: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = ConditionMap;

    fn index(&self, key: &Q) -> &ConditionMap {
        self.map.index(key)
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a ConditionOp, &'a ConditionMap);
    type IntoIter = Iter<'a, ConditionOp, ConditionMap>;
    fn into_iter(self) -> Iter<'a, ConditionOp, ConditionMap> {
        self.map.iter()
    }
}
