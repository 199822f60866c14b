pub mod algorithm;
pub mod errors;
pub mod exact;
pub mod instance;
pub mod io;
pub mod log;

pub mod prelude {
    pub use super::algorithm::*;
    pub use super::errors::*;
    pub use super::exact::*;
    pub use super::instance::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
