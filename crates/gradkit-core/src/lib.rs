pub mod accel;
pub mod config;
pub mod consts;
pub mod detector;
pub mod edge;
pub mod error;
pub mod image;
pub mod io;
pub mod validate;
