pub mod alert;
pub mod command;
pub mod error;
pub mod observer;
pub mod state;
pub mod store;

#[cfg(test)]
mod fakes;

pub use alert::{AlertSink, LogAlerts};
pub use command::{Command, COMMAND_HELP};
pub use error::{CommandError, StoreError};
pub use observer::SubscriptionId;
pub use state::StoreState;
pub use store::Store;
