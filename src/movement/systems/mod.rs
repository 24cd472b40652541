//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{gather_contact_signals, check_ground};
pub(crate) use input::read_input;
pub(crate) use movement::{run_motion_tick, sync_facing};
