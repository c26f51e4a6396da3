//! Dynamically typed elements, for dynamic arrays holding mixed content.

use core::{cmp::Ordering, fmt};
use std::rc::Rc;

use crate::collections::DynArr;

/// A single dynamically typed element.
///
/// Values only compare with values of the same variant: different variants are never equal and have no order,
/// so sorting mixed content fails with [`Error::NotComparable`](crate::error::Error::NotComparable).
///
/// Compound variants are reference counted, cloning a `Value` aliases the same string, tuple, or list.
/// This is what a shallow copy of a `DynArr<Value>` shares with the original.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    None,
    Int(i64),
    Str(Rc<str>),
    Tuple(Rc<[Value]>),
    List(Rc<DynArr<Value>>),
}

impl Value {
    /// Create a tuple from a sequence of values.
    pub fn tuple<I>(values: I) -> Self where
        I: IntoIterator,
        I::Item: Into<Value>
    {
        Value::Tuple(values.into_iter().map(Into::into).collect())
    }

    /// Truthiness of the value: `None`, `0`, and empty strings, tuples, and lists are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None       => false,
            Value::Int(val)   => *val != 0,
            Value::Str(s)     => !s.is_empty(),
            Value::Tuple(tup) => !tup.is_empty(),
            Value::List(list) => !list.is_empty(),
        }
    }

    /// Check if both values are the same object, compound values need to share the same allocation.
    pub fn is(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None)             => true,
            (Value::Int(lhs), Value::Int(rhs))     => lhs == rhs,
            (Value::Str(lhs), Value::Str(rhs))     => Rc::ptr_eq(lhs, rhs),
            (Value::Tuple(lhs), Value::Tuple(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Value::List(lhs), Value::List(rhs))   => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None)             => true,
            (Value::Int(lhs), Value::Int(rhs))     => lhs == rhs,
            (Value::Str(lhs), Value::Str(rhs))     => lhs == rhs,
            (Value::Tuple(lhs), Value::Tuple(rhs)) => lhs[..] == rhs[..],
            (Value::List(lhs), Value::List(rhs))   => **lhs == **rhs,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::None, Value::None)             => Some(Ordering::Equal),
            (Value::Int(lhs), Value::Int(rhs))     => lhs.partial_cmp(rhs),
            (Value::Str(lhs), Value::Str(rhs))     => lhs.partial_cmp(rhs),
            (Value::Tuple(lhs), Value::Tuple(rhs)) => lhs[..].partial_cmp(&rhs[..]),
            (Value::List(lhs), Value::List(rhs))   => (**lhs).partial_cmp(&**rhs),
            _ => None,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(val) if val == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Str(s) if &**s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for Value {
    /// Formats the value the way it would be written as a literal, strings are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None     => f.write_str("None"),
            Value::Int(val) => fmt::Display::fmt(val, f),
            Value::Str(s)   => write_quoted(f, s),
            Value::Tuple(tup) => {
                f.write_str("(")?;
                for (idx, elem) in tup.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(elem, f)?;
                }
                if tup.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            },
            Value::List(list) => fmt::Display::fmt(&**list, f),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    f.write_fmt(format_args!("{quote}"))?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => f.write_fmt(format_args!("\\{c}"))?,
            c => f.write_fmt(format_args!("{c}"))?,
        }
    }
    f.write_fmt(format_args!("{quote}"))
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Int(val.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

impl From<DynArr<Value>> for Value {
    fn from(list: DynArr<Value>) -> Self {
        Value::List(Rc::new(list))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dynarr, error::Error};

    #[test]
    fn value_equality_is_per_variant() {
        assert_eq!(Value::from(1), Value::Int(1));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::None, Value::from(0));
        assert_eq!(Value::tuple([5, -1]), Value::tuple([5i64, -1]));
        assert_eq!(Value::from("apple"), "apple");
        assert_eq!(Value::from(3), 3i64);
    }

    #[test]
    fn value_order_is_per_variant() {
        assert!(Value::from(1) < Value::from(2));
        assert!(Value::from("a") < Value::from("b"));
        assert!(Value::tuple([1, 2]) < Value::tuple([1, 3]));
        assert_eq!(Value::from(1).partial_cmp(&Value::from("1")), None);
        assert_eq!(Value::tuple([Value::from(1), Value::from("a")]).partial_cmp(&Value::tuple([1, 2])), None);
    }

    #[test]
    fn value_display() {
        let inner: DynArr<Value> = (0..5).map(Value::from).collect();
        let arr = dynarr![
            Value::from("apple"),
            Value::from(0),
            Value::tuple([5, -1]),
            Value::from(inner),
            Value::None,
            Value::tuple([7]),
            Value::from("it's"),
        ];
        assert_eq!(arr.to_string(), r#"['apple', 0, (5, -1), [0, 1, 2, 3, 4], None, (7,), "it's"]"#);
        assert_eq!(Value::from("a'\"b\\").to_string(), r#"'a\'"b\\'"#);
    }

    #[test]
    fn value_truthiness() {
        assert!(!Value::None.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(DynArr::new()).is_truthy());
        assert!(Value::tuple([0]).is_truthy());
        assert!(Value::from(-3).is_truthy());
    }

    #[test]
    fn value_sorting_mixed_content_fails() {
        let mut arr = dynarr![Value::from(3), Value::from("apple"), Value::from(1)];
        assert_eq!(arr.try_sort(false), Err(Error::NotComparable));
        assert_eq!(arr[0], 3i64);

        let mut arr = dynarr![Value::from("pear"), Value::from("apple")];
        arr.try_sort(false).unwrap();
        assert_eq!(arr[0], "apple");
    }

    #[test]
    fn value_clone_aliases() {
        let list = Value::from(dynarr![Value::from(1)]);
        let copy = list.clone();
        assert!(copy.is(&list));
        assert!(!Value::from("x").is(&Value::from("x")));
        assert!(Value::from(4).is(&Value::from(4)));
    }
}
