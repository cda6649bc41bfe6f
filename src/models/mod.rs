pub mod event;
pub mod hackathon;

pub use event::{CreateEventCommand, CreateEventPhoto, Event, EventPhoto, UpdateEventCommand};
pub use hackathon::{HackathonTeam, HackathonTeamMember, RegisterTeamCommand};
