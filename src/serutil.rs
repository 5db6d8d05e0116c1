use {
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        ops::Index,
        slice::Iter,
    },
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                $crate::serutil::write_json(self, f)
            }
        }
    };
}

pub(crate) use display_json;

/// Write `value` to `f` as JSON indented by four spaces.
pub(crate) fn write_json<T: Serialize + ?Sized>(value: &T, f: &mut Formatter) -> FmtResult {
    let buf = Vec::new();
    let serde_formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(buf, serde_formatter);
    if let Err(e) = value.serialize(&mut ser) {
        log::error!("Failed to serialize: {}", e);
        return Err(std::fmt::Error {});
    }

    match std::str::from_utf8(&ser.into_inner()) {
        Ok(s) => f.write_str(s),
        Err(e) => {
            log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
            Err(std::fmt::Error {})
        }
    }
}

/// Whether a [StringLikeList] holds a bare element or a JSON array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Single,
    List,
}

/// An IAM policy element that is written as a bare value when it holds exactly one element and as a JSON array
/// otherwise. `Action`, `Resource`, principal identifiers and condition values all follow this shape.
#[derive(Clone, Debug, Eq)]
pub enum StringLikeList<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> StringLikeList<T> {
    /// Build a list from `items`, collapsing a single element to [StringLikeList::Single].
    pub fn from_items(mut items: Vec<T>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return Self::Single(item);
            }
        }

        Self::List(items)
    }

    #[inline]
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Single(_) => ListKind::Single,
            Self::List(_) => ListKind::List,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::List(items) => items.as_slice(),
        }
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Append an element. A single element is promoted to a list.
    pub fn push(&mut self, item: T) {
        match self {
            Self::List(items) => items.push(item),
            Self::Single(_) => {
                let previous = std::mem::replace(self, Self::List(Vec::with_capacity(2)));
                if let (Self::Single(first), Self::List(items)) = (previous, &mut *self) {
                    items.push(first);
                    items.push(item);
                }
            }
        }
    }
}

impl<T: PartialEq> PartialEq for StringLikeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> From<T> for StringLikeList<T> {
    fn from(item: T) -> Self {
        Self::Single(item)
    }
}

impl<T> From<Vec<T>> for StringLikeList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::List(items)
    }
}

impl<T> Index<usize> for StringLikeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Single(item) => {
                if index == 0 {
                    item
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index)
                }
            }
            Self::List(items) => &items[index],
        }
    }
}

impl<'a, T> IntoIterator for &'a StringLikeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Serialize> Serialize for StringLikeList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(item) => item.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

impl<T: Serialize> Display for StringLikeList<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_json(self, f)
    }
}
