//! Card templates, instances, and the standard set.

mod definition;
mod instance;

pub use definition::{
    CardDefinition, CardId, CardKind, CardRegistry, GateKind, TargetRole,
};
pub use instance::{CardInstance, InstanceId};
