//! Command-driven simulator owning the live vehicle pose.

mod command;
mod sim;

pub use command::{Command, playbook_from_json, playbook_from_yaml};
pub use sim::Simulator;
