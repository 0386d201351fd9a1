pub mod lister;
pub mod reconciler;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{DevUrl, Environment, Mutation, Outcome};
pub use crate::domain::ports::{ConfigProvider, DevUrlService, EnvironmentResolver};
pub use crate::utils::error::Result;
