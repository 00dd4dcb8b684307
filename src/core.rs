pub mod bindings;
pub mod catalog;
pub mod controller;
pub mod events;
pub mod remote;
pub mod seed;
pub mod session;
pub mod store;
