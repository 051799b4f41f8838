pub mod agent;
pub mod harness;
pub mod jump_erase;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::ops::{Add, Mul, Sub};
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::harness::*;
    pub use super::jump_erase::prelude::*;
    pub use super::utils::prelude::*;
}
