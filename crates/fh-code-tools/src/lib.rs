//! Source code scanner.
//!
//! Flags unsafe C library calls (`gets`, `strcpy`, `sprintf`, `memcpy`),
//! allocations with no `free`, and, for sources that parse as Python, bare
//! `except:` handlers and `eval()` calls. Rewrites the unsafe C calls that
//! have a drop-in bounded replacement.

pub mod error;
pub mod fixes;
pub mod python;
pub mod rules;
pub mod scanner;

pub use error::{CodeError, CodeResult};
pub use scanner::{correct_code, correct_file};
