use balpart_rs::prelude::*;

#[test]
fn test_empty() {
    assert_eq!(minimum_substrings_in_partition(""), Ok(0));
    let table = PartitionTable::build("").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.min_pieces(), Some(0));
    assert_eq!(table.pieces(), Some(vec![]));
}

#[test]
fn test_simple() {
    assert_eq!(minimum_substrings_in_partition("fabccddg"), Ok(3));
    assert_eq!(minimum_substrings_in_partition("abababaccddb"), Ok(2));
    assert_eq!(minimum_substrings_in_partition("abc"), Ok(1));
    assert_eq!(minimum_substrings_in_partition("aaaa"), Ok(1));
    assert_eq!(minimum_substrings_in_partition("z"), Ok(1));
}

#[test]
fn test_pieces() {
    let table = PartitionTable::build("abababaccddb").unwrap();
    assert_eq!(table.pieces().unwrap(), ["abab", "abaccddb"]);

    let table = PartitionTable::build("aab").unwrap();
    assert_eq!(table.text(), "aab");
    assert_eq!(table.len(), 3);
    assert_eq!(
        (0..3).map(|i| table.prefix_cost(i)).collect::<Vec<_>>(),
        [Some(1), Some(1), Some(2)]
    );
    assert_eq!(table.prefix_cost(3), None);
    // ties keep the shortest last piece
    assert_eq!(table.pieces().unwrap(), ["aa", "b"]);

    let table = PartitionTable::build("fabccddg").unwrap();
    let pieces = table.pieces().unwrap();
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces.concat(), "fabccddg");
    assert!(pieces.iter().all(|p| is_balanced(p) == Ok(true)));
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        minimum_substrings_in_partition("abC"),
        Err(PartitionError::InvalidCharacter { index: 2, byte: b'C' })
    );
    assert_eq!(
        PartitionTable::build("a b"),
        Err(PartitionError::InvalidCharacter { index: 1, byte: b' ' })
    );
    assert_eq!(
        is_balanced("né"),
        Err(PartitionError::InvalidCharacter { index: 1, byte: 0xc3 })
    );
    let msg = PartitionError::InvalidCharacter { index: 2, byte: b'C' }.to_string();
    assert!(msg.contains("byte 2"), "{msg}");
}

#[test]
fn test_balanced() {
    assert_eq!(is_balanced(""), Ok(true));
    assert_eq!(is_balanced("aabbcc"), Ok(true));
    assert_eq!(is_balanced("aabbc"), Ok(false));
    assert_eq!(is_balanced("zzz"), Ok(true));
}

#[test]
fn test_tracker() {
    let mut tracker = BalanceTracker::new();
    assert!(tracker.is_empty());
    assert!(tracker.is_balanced());
    tracker.extend(b"abca");
    assert_eq!(tracker.len(), 4);
    assert_eq!(tracker.distinct(), 3);
    assert_eq!(tracker.count(b'a'), 2);
    assert!(!tracker.is_balanced());
    tracker.remove(b'a');
    assert!(tracker.is_balanced());
    tracker.remove(b'z');
    assert_eq!(tracker.count(b'z'), 0);
    assert_eq!(tracker.len(), 3);
    tracker.clear();
    assert_eq!(tracker, BalanceTracker::default());
}

#[test]
fn test_point() {
    let p = Point3(1, 2, 3);
    let q = Point3(4, -5, 6);
    assert_eq!(p + q, Point3(5, -3, 9));
    assert_eq!(p - q, Point3(-3, 7, -3));
    assert_eq!(p.dot(q), 12);
    assert_eq!(-p, Point3(-1, -2, -3));
    assert_eq!(p * 2, Point3(2, 4, 6));
    assert_eq!(p.sq_length(), 14);
    assert_eq!(Point3(1, 0, 0).cross(Point3(0, 1, 0)), Point3(0, 0, 1));
    assert_eq!(p.cross(q).dot(p), 0);
    let mut r = p;
    r += q;
    r -= p;
    assert_eq!(r, q);
    assert_eq!([p, q, -q].into_iter().sum::<Point3>(), p);
}
