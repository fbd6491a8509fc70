pub use config::*;
pub use run::*;
pub use view::*;

mod config;
mod run;
mod view;
