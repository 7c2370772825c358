pub mod code;
pub mod diagnosis;
pub mod issues;

pub use code::*;
pub use diagnosis::*;
pub use issues::*;
