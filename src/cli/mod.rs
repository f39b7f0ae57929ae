pub mod list;
pub mod random;
pub mod run;
pub mod table;

pub use list::*;
pub use random::*;
pub use run::*;
pub use table::*;
