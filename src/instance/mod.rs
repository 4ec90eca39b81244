pub mod achievements;
pub mod area_trigger;
pub mod coordinator;
pub mod dialogue;
pub mod encounter;
pub mod registry;
pub mod status;
pub mod timers;
