use course_catalog::{Course, CourseStore};
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::Op;

fn store_of(numbers: &[String]) -> CourseStore {
    numbers
        .iter()
        .enumerate()
        .map(|(i, n)| Course::new(n.clone(), i.to_string()))
        .collect()
}

fn numbers(store: &CourseStore) -> Vec<&str> {
    store.iter().map(|c| c.course_number.as_str()).collect()
}

/// Applies a set of operations to a store and a model keeping the first course inserted for each
/// number. This way we can ensure that after a random smattering of inserts and clears the store
/// agrees with the model.
fn do_ops(ops: &[Op], store: &mut CourseStore, model: &mut BTreeMap<String, Vec<Course>>) -> bool {
    for op in ops {
        match op {
            Op::Insert(course) => {
                store.insert(course.clone());
                model
                    .entry(course.course_number.clone())
                    .or_default()
                    .push(course.clone());
            }
            Op::Clear => {
                store.clear();
                model.clear();
            }
            Op::Iter => {
                let expected: Vec<_> = model
                    .iter()
                    .flat_map(|(k, courses)| std::iter::repeat(k.as_str()).take(courses.len()))
                    .collect();
                if numbers(store) != expected {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut store = CourseStore::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut store, &mut model)
        && store.len() == model.values().map(Vec::len).sum::<usize>()
        && model
            .iter()
            .all(|(number, courses)| store.search(number) == courses.first())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<String>) -> bool {
    let store = store_of(&xs);
    let found = numbers(&store);

    found.len() == xs.len() && found.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn search_finds_first_insert(xs: Vec<String>) -> bool {
    let store = store_of(&xs);

    xs.iter().all(|x| {
        let first = xs.iter().position(|y| y == x).unwrap();
        store
            .search(x)
            .map_or(false, |c| c.course_number == *x && c.course_name == first.to_string())
    })
}

#[quickcheck]
fn search_misses(xs: Vec<String>, nots: Vec<String>) -> bool {
    let store = store_of(&xs);

    nots.iter()
        .filter(|n| !xs.contains(n))
        .all(|n| store.search(n).is_none())
}

#[quickcheck]
fn clear_empties(xs: Vec<String>) -> bool {
    let mut store = store_of(&xs);
    store.clear();
    let once = store.iter().next().is_none() && store.is_empty();
    store.clear();

    once && store.iter().next().is_none()
}
