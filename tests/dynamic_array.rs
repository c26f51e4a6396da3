use flexarr::*;

const INITIAL_SIZE: i64 = 5;
const GROWTH_FACTOR: usize = 2;

fn ints(range: core::ops::Range<i64>) -> DynArr<Value> {
    range.map(Value::from).collect()
}

fn initial() -> DynArr<Value> {
    let mut arr = DynArr::with_growth_factor(GROWTH_FACTOR).unwrap();
    for i in 0..INITIAL_SIZE {
        arr.append(Value::from(i));
    }
    arr
}

#[test]
fn append_places_values_in_order() {
    let mut arr = DynArr::with_growth_factor(GROWTH_FACTOR).unwrap();
    assert_eq!(arr.len(), 0);
    for i in 0..1000i64 {
        arr.append(Value::from(i));
        assert_eq!(*arr.get(i as isize).unwrap(), i);
    }
    assert_eq!(arr.len(), 1000);
}

#[test]
fn extend_keeps_existing_values() {
    let mut arr = initial();
    arr.extend(ints(INITIAL_SIZE..INITIAL_SIZE + 20));
    for i in 0..INITIAL_SIZE + 20 {
        assert_eq!(arr[i as usize], i);
    }
}

#[test]
fn insert_mixed_values() {
    let mut arr = ints(0..5);
    arr.insert(0, Value::from("apple"));
    arr.insert(3, Value::tuple([5, -1]));
    arr.insert(arr.len() as isize, Value::from(initial()));

    let expected = dynarr![
        Value::from("apple"),
        Value::from(0),
        Value::from(1),
        Value::tuple([5, -1]),
        Value::from(2),
        Value::from(3),
        Value::from(4),
        Value::from(ints(0..INITIAL_SIZE)),
    ];
    assert_eq!(arr, expected);
    assert_eq!(arr.to_string(), "['apple', 0, 1, (5, -1), 2, 3, 4, [0, 1, 2, 3, 4]]");
}

#[test]
fn insert_out_of_bounds() {
    let mut arr = ints(0..5);
    arr.insert(-1, Value::from(5));
    arr.insert(100, Value::from(6));
    arr.insert(-10, Value::from(-1));
    assert_eq!(arr, ints(-1..4) + dynarr![Value::from(5), Value::from(4), Value::from(6)]);
}

#[test]
fn remove_valid_item() {
    let mut arr = initial();
    arr.remove(&Value::from(2)).unwrap();
    assert!(!arr.contains(&Value::from(2)));
    assert_eq!(arr[2], 3i64);
}

#[test]
fn remove_invalid_item() {
    let mut arr = initial();
    assert_eq!(arr.remove(&Value::from(INITIAL_SIZE)), Err(Error::ValueNotFound));
}

#[test]
fn pop_from_end_middle_and_beginning() {
    let mut arr = initial();
    assert_eq!(arr.pop().unwrap(), INITIAL_SIZE - 1);
    assert!(!arr.contains(&Value::from(INITIAL_SIZE - 1)));
    assert_eq!(arr.len() as i64, INITIAL_SIZE - 1);

    let mut arr = initial();
    assert_eq!(arr.pop_at(2).unwrap(), 2i64);
    assert!(!arr.contains(&Value::from(2)));
    assert_eq!(arr.len() as i64, INITIAL_SIZE - 1);

    let mut arr = initial();
    assert_eq!(arr.pop_at(0).unwrap(), 0i64);
    assert!(!arr.contains(&Value::from(0)));
    assert_eq!(arr.len() as i64, INITIAL_SIZE - 1);
}

#[test]
fn clear_removes_everything() {
    let mut arr = initial();
    arr.clear();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr, DynArr::<Value>::new());
}

#[test]
fn index_of_values() {
    let unique = INITIAL_SIZE + 2;
    let mut arr = initial();
    arr.append(Value::from(unique));
    assert_eq!(arr.index_of(&Value::from(unique)), Ok(INITIAL_SIZE as usize));

    let start = INITIAL_SIZE - INITIAL_SIZE / 2;
    assert_eq!(arr.index_of_within(&Value::from(unique), Some(start as isize), None), Ok(INITIAL_SIZE as usize));

    assert_eq!(initial().index_of(&Value::from(unique)), Err(Error::ValueNotFound));
}

#[test]
fn count_occurrences() {
    let mut arr = initial();
    arr.append(Value::from(INITIAL_SIZE - 1));
    assert_eq!(arr.count(&Value::from(INITIAL_SIZE - 1)), 2);
    assert_eq!(arr.count(&Value::from(0)), 1);
    assert_eq!(arr.count(&Value::from(INITIAL_SIZE)), 0);
}

#[test]
fn sort_and_reverse() {
    let mut arr = initial();
    arr.reverse();
    assert_eq!(arr, ints(0..INITIAL_SIZE).slice(SliceRange::full().step_by(-1)).unwrap());

    arr.try_sort(false).unwrap();
    assert_eq!(arr, ints(0..INITIAL_SIZE));

    let mut words = dynarr![Value::from("pear"), Value::from("fig"), Value::from("apple")];
    words.sort_keyed(|word| match word {
        Value::Str(s) => s.len(),
        _ => 0,
    }, false).unwrap();
    assert_eq!(words.to_string(), "['fig', 'pear', 'apple']");
}

#[test]
fn copy_is_shallow() {
    let mut arr = initial();
    arr.append(Value::from(dynarr![Value::from("nested")]));
    arr.append(Value::from("apple"));

    let copy = arr.clone();
    assert_eq!(copy, arr);
    for (lhs, rhs) in copy.iter().zip(arr.iter()) {
        assert!(lhs.is(rhs));
    }
}

#[test]
fn prints_like_a_list() {
    assert_eq!(initial().to_string(), "[0, 1, 2, 3, 4]");
}

#[test]
fn comparison_operators() {
    let arr = ints(0..5);
    assert_eq!(ints(0..5), arr);
    assert_ne!(ints(1..6), arr);
    assert_ne!(ints(0..4), arr);
    assert!(ints(-1..4) < arr);
    assert!(ints(-1..4) <= arr);
    assert!(ints(0..5) <= arr);
    assert!(ints(1..6) > arr);
    assert!(ints(1..6) >= arr);
    assert!(ints(0..5) >= arr);

    let mixed = dynarr![Value::from("a")];
    assert_eq!(mixed.partial_cmp(&arr), None);
}

#[test]
fn item_assignment() {
    let mut arr = initial();
    arr.set(0, Value::from("apple")).unwrap();
    arr.set(3, Value::from(-5)).unwrap();
    assert_eq!(arr[0], "apple");
    assert_eq!(arr[3], -5i64);
    assert_eq!(arr.set(INITIAL_SIZE as isize, Value::None), Err(Error::IndexOutOfRange { index: INITIAL_SIZE as isize, len: 5 }));
}

#[test]
fn contains_operator() {
    let mut arr = initial();
    arr.append(Value::from("apple"));
    arr.append(Value::from(20));
    assert!(arr.contains(&Value::from("apple")));
    assert!(arr.contains(&Value::from(20)));
    assert!(arr.contains("apple"));
}

#[test]
fn concatenation() {
    let tail = ints(INITIAL_SIZE..INITIAL_SIZE + 20);
    let concat = &initial() + &tail;
    assert_eq!(concat, ints(0..INITIAL_SIZE + 20));
}

#[test]
fn multiplication() {
    let mut arr = initial();
    arr *= 5;
    let expected: DynArr<Value> = (0..5).flat_map(|_| 0..INITIAL_SIZE).map(Value::from).collect();
    assert_eq!(arr, expected);
    assert!((&arr * 0).is_empty());
}

#[test]
fn deletion() {
    let mut arr = initial();
    arr.delete(INITIAL_SIZE as isize - 1).unwrap();
    arr.delete(0).unwrap();
    arr.delete(0).unwrap();
    assert_eq!(arr, ints(2..INITIAL_SIZE - 1));

    let mut arr = initial();
    arr.delete_slice(1..3).unwrap();
    assert_eq!(arr, dynarr![Value::from(0), Value::from(3), Value::from(4)]);
}

#[test]
fn slicing() {
    let arr = initial();
    let list: Vec<Value> = (0..INITIAL_SIZE).map(Value::from).collect();

    assert_eq!(arr.slice(0..2).unwrap(), list[0..2]);
    assert_eq!(arr.slice(..2).unwrap(), list[..2]);
    assert_eq!(arr.slice(2..).unwrap(), list[2..]);
    assert_eq!(arr.slice(..).unwrap(), list[..]);
    assert_eq!(arr.slice(-3..-1).unwrap(), list[2..4]);

    let reversed: Vec<Value> = list.iter().rev().cloned().collect();
    assert_eq!(arr.slice(SliceRange::full().step_by(-1)).unwrap(), reversed);
    assert_eq!(arr.slice(SliceRange::full().step_by(-3)).unwrap(), [list[4].clone(), list[1].clone()]);
}

#[test]
fn slice_assignment() {
    let mut arr = initial();
    arr.set_slice(1..3, [Value::from("a"), Value::from("b"), Value::from("c")]).unwrap();
    assert_eq!(arr.to_string(), "[0, 'a', 'b', 'c', 3, 4]");

    assert_eq!(
        arr.set_slice(SliceRange::full().step_by(2), [Value::None]),
        Err(Error::SliceLengthMismatch { expected: 3, found: 1 })
    );
}

#[test]
fn truthiness() {
    assert!(!initial().is_empty());
    assert!(DynArr::<Value>::new().is_empty());
    assert!(Value::from(initial()).is_truthy());
    assert!(!Value::from(DynArr::new()).is_truthy());
}
