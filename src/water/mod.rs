pub mod fragment;
pub mod profile;
pub mod treatment;
