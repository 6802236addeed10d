pub(crate) use self::constraint_propagation::{propagate_constraints, PropagateResult};
pub(crate) use self::unary_constraints::apply_unary_constraints;

mod constraint_propagation;
mod unary_constraints;
