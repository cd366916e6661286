pub mod number_input;
pub mod stat;
pub mod toast;
