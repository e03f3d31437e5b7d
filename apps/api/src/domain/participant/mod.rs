// Participant domain module

#![allow(clippy::module_inception)]

pub mod participant;

pub use participant::Participant;
