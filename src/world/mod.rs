pub mod instance_map;
pub mod position;
pub mod sandbox;
