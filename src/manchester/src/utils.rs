mod io;
pub use self::io::*;

mod parallel;
pub use parallel::*;

mod serde;
pub use self::serde::*;
