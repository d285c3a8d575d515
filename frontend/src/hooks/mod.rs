pub mod use_scroll_state;
