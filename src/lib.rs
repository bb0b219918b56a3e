pub mod cli;
pub mod installer;
pub mod manifest;
pub mod network;
pub mod platform;
