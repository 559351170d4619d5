use crate::solver::instance::VariableId;

pub type Result<T, E = InstanceError> = core::result::Result<T, E>;

/// Contract violations detected while constructing a [`Csp`] instance.
///
/// Every variant here is an adapter bug and is rejected by
/// [`CspBuilder::build`] before any solving begins, which keeps the solving
/// algorithms free of per-access validity checks. Solving itself never
/// errors: emptied domains, exhausted search spaces, and exceeded budgets
/// are ordinary outcome values, not errors.
///
/// [`Csp`]: crate::solver::instance::Csp
/// [`CspBuilder::build`]: crate::solver::instance::CspBuilder::build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    #[error("variable ?{0} declared twice")]
    DuplicateVariable(VariableId),

    #[error("variable ?{0} has an empty initial domain")]
    EmptyDomain(VariableId),

    #[error("constraint references undeclared variable ?{0}")]
    UnknownVariable(VariableId),

    #[error("variable ?{0} is constrained against itself")]
    SelfConstraint(VariableId),

    #[error("variables ?{0} and ?{1} already share a constraint")]
    DuplicateConstraint(VariableId, VariableId),

    #[error("malformed problem input: {0}")]
    MalformedInput(String),
}
