mod array_list;
mod collection;
mod linked_list;
mod stack;

pub use array_list::ArrayIndexedList;
pub use collection::Collection;
pub use linked_list::LinkedIndexedList;
pub use stack::Stack;
