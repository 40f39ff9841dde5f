pub mod class_list;
pub mod config;
pub mod constants;
pub mod error;
pub mod restore;
pub mod scroll;
pub mod startup;
pub mod state;

pub use class_list::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use restore::*;
pub use scroll::*;
pub use startup::*;
pub use state::*;
