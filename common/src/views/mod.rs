//! Client-side state for the two stateful views. The frontend components own
//! one of these each and translate Yew messages into calls on it.

pub mod recommendation;
pub mod table;
