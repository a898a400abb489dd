pub mod app;
pub mod consts;
