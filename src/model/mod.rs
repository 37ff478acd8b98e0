pub mod catalog;
pub mod colors;
pub mod controls;
pub mod driver;
pub mod facts;
pub mod info;
pub mod orrery;
pub mod planetarium;
pub mod starfield;
pub mod state;
pub mod text;
pub mod trail;

pub use controls::Control;
pub use planetarium::Planetarium;
