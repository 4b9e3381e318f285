pub mod book;
pub mod loan;
pub mod user;

pub use book::*;
pub use loan::*;
pub use user::*;
