//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod step;

pub(crate) use input::read_input;
pub(crate) use step::configure_tuning;
