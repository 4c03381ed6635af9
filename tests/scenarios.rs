//! End-to-end scenarios exercising the public API only.

use anyhow::Result;
use indexed_skiplist::{IndexedSkipList, InsertError, MAX_LEVELS, level_generator::Geometric};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn tens() -> Result<IndexedSkipList<i32>> {
    let mut skiplist = IndexedSkipList::new();
    for i in (10..=100).step_by(10) {
        skiplist.insert(i)?;
    }
    Ok(skiplist)
}

#[test]
fn ten_values() -> Result<()> {
    let skiplist = tens()?;
    assert_eq!(skiplist.to_string(), "10 20 30 40 50 60 70 80 90 100");
    assert_eq!(skiplist.rank(&50), Some(5));
    assert_eq!(skiplist.rank(&45), None);
    assert_eq!(skiplist.select_by_rank(5), Some(&50));

    let heights: Vec<_> = skiplist.profile().heights().collect();
    assert_eq!(heights.len(), 11);
    assert_eq!(heights[0], MAX_LEVELS);
    assert!(heights[1..].iter().all(|&h| (1..=skiplist.height()).contains(&h)));
    assert_eq!(heights[1..].iter().max(), Some(&skiplist.height()));
    Ok(())
}

#[test]
fn single_value_removed() -> Result<()> {
    let mut skiplist = IndexedSkipList::new();
    skiplist.insert(5)?;
    assert_eq!(skiplist.remove(&5), Some(5));
    assert!(!skiplist.contains(&5));
    assert_eq!(skiplist.rank(&5), None);
    assert_eq!(skiplist.remove(&5), None);
    Ok(())
}

#[test]
fn duplicate_leaves_contents() -> Result<()> {
    let mut skiplist = tens()?;
    assert_eq!(skiplist.insert(30), Err(InsertError::DuplicateValue));
    assert_eq!(skiplist.len(), 10);
    assert_eq!(skiplist.to_string(), "10 20 30 40 50 60 70 80 90 100");
    Ok(())
}

#[rstest]
#[case(0, None)]
#[case(1, Some(10))]
#[case(10, Some(100))]
#[case(11, None)]
#[case(usize::MAX, None)]
fn select_bounds(#[case] rank: usize, #[case] expected: Option<i32>) -> Result<()> {
    let skiplist = tens()?;
    assert_eq!(skiplist.select_by_rank(rank).copied(), expected);
    Ok(())
}

#[test]
fn ranks_round_trip_after_churn() -> Result<()> {
    let mut skiplist = IndexedSkipList::with_seed(99);
    for i in 0..1_000_u32 {
        skiplist.insert((i * 7_919) % 1_000)?;
    }
    for i in (0..1_000_u32).filter(|i| i % 3 == 0) {
        assert_eq!(skiplist.remove(&i), Some(i));
    }
    let values: Vec<_> = skiplist.iter().copied().collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));

    for reindexed in [false, true] {
        if reindexed {
            skiplist.reindex();
        }
        for (index, value) in values.iter().enumerate() {
            assert_eq!(skiplist.rank(value), Some(index + 1));
            assert_eq!(skiplist.select_by_rank(index + 1), Some(value));
        }
    }
    Ok(())
}

#[test]
fn custom_generator() -> Result<()> {
    let mut skiplist = IndexedSkipList::with_level_generator(Geometric::with_seed(8, 0.5, 1)?);
    for c in "skiplist".chars() {
        // Repeated letters are rejected.
        let _ = skiplist.insert(c);
    }
    assert_eq!(skiplist.to_string(), "i k l p s t");
    assert_eq!(skiplist.rank(&'p'), Some(4));
    assert!(skiplist.height() <= 8);
    Ok(())
}
