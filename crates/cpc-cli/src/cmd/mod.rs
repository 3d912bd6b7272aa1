pub mod acts;
pub mod compute;
