pub mod event_enrollments;
pub mod event_locations;
pub mod event_tags;
pub mod events;
pub mod locations;
pub mod provinces;
pub mod tags;
pub mod users;
