use crate::modules::interactions::core::interaction::Interaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Created(Interaction),
    /// Duplicate add accepted without a new record.
    AlreadyPresent,
}
