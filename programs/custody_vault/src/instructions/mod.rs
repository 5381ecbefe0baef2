pub mod execute;
pub mod proposal;
pub mod vault;

pub use execute::*;
pub use proposal::*;
pub use vault::*;
