pub mod clipboard_slot;
pub mod pane;
pub mod pane_collection;
pub mod pane_view;
