//! Per-kind evaluation of terms.

use rinha_ir::Term;

use super::Interpreter;
use crate::errors::{not_a_tuple, not_callable, type_mismatch, unbound_variable};
use crate::{evaluate_binary, Closure, Environment, EvalResult, Value};

/// Which component a tuple projection reads.
#[derive(Clone, Copy, Debug)]
enum Projection {
    First,
    Second,
}

impl Interpreter {
    /// Dispatch on the term kind. Called only through `eval`.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = term.kind()))]
    pub(super) fn eval_term(&mut self, env: &Environment, term: &Term) -> EvalResult {
        match term {
            Term::Int { value } => Ok(Value::int(*value)),
            Term::Str { value } => Ok(Value::string(value.as_str())),
            Term::Bool { value } => Ok(Value::Bool(*value)),

            Term::Binary { lhs, op, rhs } => {
                let left = self.eval(env, lhs)?;
                let right = self.eval(env, rhs)?;
                evaluate_binary(&left, &right, *op)
            }

            Term::If {
                condition,
                then,
                otherwise,
            } => match self.eval(env, condition)? {
                Value::Bool(true) => self.eval(env, then),
                Value::Bool(false) => self.eval(env, otherwise),
                other => Err(type_mismatch("if condition", "bool", &other)),
            },

            Term::Tuple { first, second } => {
                let first = self.eval(env, first)?;
                let second = self.eval(env, second)?;
                Ok(Value::tuple(first, second))
            }
            Term::First { value } => self.eval_projection(env, value, Projection::First),
            Term::Second { value } => self.eval_projection(env, value, Projection::Second),

            Term::Print { value } => {
                let value = self.eval(env, value)?;
                self.print_handler.println(&value.render());
                Ok(value)
            }

            Term::Let { name, value, next } => {
                let value = self.eval(env, value)?;
                tracing::debug!(name = name.as_str(), ty = value.type_name(), "let binding");
                env.define(name.as_str(), value);
                self.eval(env, next)
            }

            Term::Var { text } => env.lookup(text).ok_or_else(|| unbound_variable(text)),

            Term::Function { parameters, value } => Ok(Value::Closure(Closure::new(
                parameters.clone(),
                value.clone(),
                env.clone(),
            ))),

            Term::Call { callee, arguments } => {
                let callee = self.eval(env, callee)?;
                let closure = match callee {
                    Value::Closure(closure) => closure,
                    other => return Err(not_callable(&other)),
                };
                let args = arguments
                    .iter()
                    .map(|arg| self.eval(env, arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply_closure(&closure, args)
            }
        }
    }

    /// `First` / `Second`: the operand must evaluate to a tuple.
    fn eval_projection(
        &mut self,
        env: &Environment,
        operand: &Term,
        projection: Projection,
    ) -> EvalResult {
        match self.eval(env, operand)? {
            Value::Tuple(pair) => {
                let (first, second) = &*pair;
                Ok(match projection {
                    Projection::First => first.clone(),
                    Projection::Second => second.clone(),
                })
            }
            other => Err(not_a_tuple(&other)),
        }
    }
}
