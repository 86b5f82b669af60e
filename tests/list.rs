use linear_seq::{DoublyLinkedList, Error};

const ITEMS: usize = 1000;

#[test]
fn ends_track_insertions() {
    let mut list = DoublyLinkedList::new();

    for i in 0..ITEMS {
        list.push_back(i);
        assert_eq!(*list.back().unwrap(), i);
        assert_eq!(*list.front().unwrap(), 0);
    }
    assert_eq!(list.len(), ITEMS);

    for i in 1..=ITEMS {
        list.push_front(i);
        assert_eq!(*list.front().unwrap(), i);
    }
    assert_eq!(list.len(), 2 * ITEMS);
    assert_eq!(*list.back().unwrap(), ITEMS - 1);
}

#[test]
fn two_element_list_empties_cleanly() {
    let mut list = DoublyLinkedList::new();
    list.push_back("a");
    list.push_back("b");

    assert_eq!(list.pop_front(), Ok("a"));
    assert_eq!(list.pop_back(), Ok("b"));
    assert!(list.is_empty());

    assert_eq!(list.front().err(), Some(Error::EmptyCollection));
    assert_eq!(list.back().err(), Some(Error::EmptyCollection));
    assert_eq!(list.pop_front(), Err(Error::EmptyCollection));
    assert_eq!(list.pop_back(), Err(Error::EmptyCollection));
}

#[test]
fn push_pop_round_trip() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    let len = list.len();

    list.push_back(3);
    assert_eq!(list.pop_back(), Ok(3));
    assert_eq!(list.len(), len);

    list.push_front(0);
    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.len(), len);
}

#[test]
fn rendering_scenario() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    assert_eq!(list.to_string(), "[ 0, 1, 2 ]");

    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.to_string(), "[ 1, 2 ]");

    list.clear();
    assert_eq!(list.to_string(), "[ ]");
}

#[test]
fn remove_at_from_both_ends() {
    let mut list = DoublyLinkedList::new();
    for i in 0..10 {
        list.push_back(i);
    }

    // front half walks from the head, back half from the tail
    assert_eq!(list.remove_at(2), Ok(2));
    assert_eq!(list.remove_at(7), Ok(8));
    assert_eq!(list.remove_at(0), Ok(0));
    assert_eq!(list.remove_at(6), Ok(9));
    assert_eq!(list.len(), 6);

    let rest: Vec<_> = list.iter().collect();
    assert_eq!(rest, vec![1, 3, 4, 5, 6, 7]);
}

#[test]
fn invalid_index_is_rejected() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);

    assert_eq!(
        list.remove_at(2),
        Err(Error::InvalidArgument { index: 2, len: 2 })
    );
    assert_eq!(
        list.remove_at(usize::MAX),
        Err(Error::InvalidArgument {
            index: usize::MAX,
            len: 2
        })
    );

    // a rejected call leaves the list untouched
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "[ 1, 2 ]");
}

#[test]
fn search() {
    let mut list = DoublyLinkedList::new();
    for i in [4, 8, 15, 16, 23, 42] {
        list.push_back(i);
    }

    assert_eq!(list.index_of(&4), Some(0));
    assert_eq!(list.index_of(&42), Some(5));
    assert_eq!(list.index_of(&5), None);
    assert!(list.contains(&15));
    assert!(!list.contains(&13));
}

#[test]
fn long_list_drops_without_overflow() {
    let mut list = DoublyLinkedList::new();
    for i in 0..200_000 {
        list.push_back(i);
    }
    drop(list);
}
