use tracing::trace;

use crate::error::{Error, Result};
use crate::model::{calc, complement, Expr, Operand};
use crate::registry::{Mark, Registry, Signal};

/// Demand-driven evaluator over a [`Registry`].
///
/// There is no global ordering pass: a wire's value is computed the first
/// time something asks for it and cached on the wire until the registry
/// is invalidated.
pub struct Resolver<'a> {
    registry: &'a Registry,
    evaluations: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            evaluations: 0,
        }
    }

    /// Number of wire expressions actually evaluated, not counting cache hits.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn resolve(&mut self, operand: &Operand) -> Result<u16> {
        match operand {
            Operand::Literal(value) => Ok(*value),
            Operand::Wire(name) => self.resolve_wire(name),
        }
    }

    pub fn resolve_wire(&mut self, name: &str) -> Result<u16> {
        let registry = self.registry;
        let signal = registry
            .lookup(name)
            .ok_or_else(|| Error::undefined(name))?;
        match signal.mark() {
            Mark::Resolved(value) => Ok(value),
            Mark::InProgress => Err(Error::Cycle { name: name.into() }),
            Mark::Unvisited => {
                signal.set_mark(Mark::InProgress);
                match self.eval(signal) {
                    Ok(value) => {
                        signal.set_mark(Mark::Resolved(value));
                        Ok(value)
                    }
                    Err(err) => {
                        signal.set_mark(Mark::Unvisited);
                        Err(err)
                    }
                }
            }
        }
    }

    fn eval(&mut self, signal: &Signal) -> Result<u16> {
        self.evaluations += 1;
        let value = match signal.expr() {
            Expr::Literal(value) => *value,
            Expr::Passthrough(operand) => self.resolve(operand)?,
            Expr::Not(operand) => complement(self.resolve(operand)?),
            Expr::Binary(op, left, right) => {
                let left = self.resolve(left)?;
                let right = self.resolve(right)?;
                calc(*op, left, right)
            }
        };
        trace!(wire = signal.name(), value, "resolved");
        Ok(value)
    }
}
