pub mod help;
pub mod page_view;
