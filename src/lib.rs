#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub mod d_list;
pub mod dyn_array;
pub mod error;

pub use d_list::LinkedList as DoublyLinkedList;
pub use dyn_array::DynamicArray;
pub use error::Error;
