pub mod navigation;
pub mod options;

pub use navigation::reduce_select_tab;
pub use options::{reduce_close_options, reduce_select_option, reduce_select_row};
