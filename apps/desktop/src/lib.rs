pub mod form;
pub mod worker;
