pub mod compute;
pub mod entities;
pub mod settings;
pub mod sprites;
