pub mod controller;
pub mod policy;
pub mod zoom;
