pub mod aggregate;
pub mod controller;
pub mod duration;
pub mod guard;
pub mod validate;
