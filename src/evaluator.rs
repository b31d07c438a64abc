use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use crate::ast::{
    BlockStatement, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement,
};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::object::{Function, Object};

/// Why evaluation stopped early.
///
/// `Return` is the control signal for a `return` statement: it rides the
/// `Err` side so `?` carries it out of nested blocks and expressions until
/// a call boundary (or the program) turns it back into a plain value.
#[derive(Debug)]
enum Unwind {
    Return(Object),
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(e: EvalError) -> Self {
        debug!("Evaluation error: {}", e);
        Unwind::Error(e)
    }
}

type Flow<T> = Result<T, Unwind>;

/// Close a call boundary: an early return becomes the value.
fn settle(flow: Flow<Object>) -> Result<Object, EvalError> {
    match flow {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(Unwind::Error(e)) => Err(e),
    }
}

/// Convenient alias for evaluator results.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluate `program` against `env`.
pub fn eval(program: &Program, env: Rc<RefCell<Environment>>) -> EvalResult<Object> {
    Interpreter::with_environment(env).interpret(program)
}

/// Tree‑walking interpreter. Holds the scope currently in effect; function
/// calls swap it for the callee's scope and restore it afterwards.
pub struct Interpreter {
    environment: Rc<RefCell<Environment>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter over a fresh top‑level environment.
    pub fn new() -> Self {
        info!("Initializing Interpreter");

        Self {
            environment: Environment::shared(),
        }
    }

    /// Interpreter over an existing environment, e.g. one kept alive across
    /// REPL lines.
    pub fn with_environment(environment: Rc<RefCell<Environment>>) -> Self {
        Self { environment }
    }

    /// Evaluates a whole program. A top‑level `return` ends it and its value
    /// is the result; an empty program yields `null`.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<Object> {
        debug!("Interpreting {} statements", program.statements.len());

        let result = settle(self.execute_all(&program.statements));

        if result.is_ok() {
            info!("Interpretation completed successfully");
        }

        result
    }

    /// Evaluates a single expression in the current scope.
    pub fn evaluate(&mut self, expr: &Expression) -> EvalResult<Object> {
        settle(self.eval_expression(expr))
    }

    // ───────────────────────────── statements ─────────────────────────────

    fn execute_all(&mut self, statements: &[Statement]) -> Flow<Object> {
        let mut result = Object::Null;

        for statement in statements {
            result = self.execute(statement)?;
        }

        Ok(result)
    }

    fn execute(&mut self, stmt: &Statement) -> Flow<Object> {
        match stmt {
            Statement::Expression(expr) => self.eval_expression(expr),

            Statement::Let { name, value } => {
                debug!("Defining variable '{}'", name);

                let value = self.eval_expression(value)?;

                self.environment
                    .borrow_mut()
                    .define(&name.name, value.clone());

                Ok(value)
            }

            Statement::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval_expression(expr)?,
                    None => Object::Null,
                };

                debug!("Returning value: {}", value);

                Err(Unwind::Return(value))
            }

            Statement::Block(block) => self.execute_block(block),
        }
    }

    /// Blocks share the enclosing scope; only calls open a new one.
    fn execute_block(&mut self, block: &BlockStatement) -> Flow<Object> {
        debug!("Entering block with {} statements", block.statements.len());

        self.execute_all(&block.statements)
    }

    // ───────────────────────────── expressions ────────────────────────────

    fn eval_expression(&mut self, expr: &Expression) -> Flow<Object> {
        match expr {
            Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),

            Expression::BooleanLiteral(b) => Ok(Object::Boolean(*b)),

            Expression::Identifier(ident) => Ok(self.eval_identifier(ident)?),

            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right)?;

                Ok(eval_prefix(*operator, right)?)
            }

            Expression::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;

                debug!("Left operand: {}, Right operand: {}", left, right);

                Ok(eval_infix(*operator, left, right)?)
            }

            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition)?;

                if condition.is_truthy() {
                    debug!("Condition is truthy; evaluating consequence");
                    self.execute_block(consequence)
                } else if let Some(alternative) = alternative {
                    debug!("Condition is falsy; evaluating alternative");
                    self.execute_block(alternative)
                } else {
                    Ok(Object::Null)
                }
            }

            Expression::FunctionLiteral { parameters, body } => {
                Ok(Object::Function(Rc::new(Function {
                    parameters: parameters.clone(),
                    body: body.clone(),
                    env: Rc::clone(&self.environment),
                })))
            }

            Expression::Call {
                function,
                arguments,
            } => {
                debug!("Evaluating function call");

                let callee = self.eval_expression(function)?;

                let mut values = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    values.push(self.eval_expression(arg)?);
                }

                Ok(self.apply_function(callee, values)?)
            }
        }
    }

    fn eval_identifier(&self, ident: &Identifier) -> EvalResult<Object> {
        debug!("Looking up variable '{}'", ident);

        self.environment
            .borrow()
            .get(&ident.name)
            .ok_or_else(|| EvalError::IdentifierNotFound {
                name: ident.name.clone(),
            })
    }

    /// Invokes a user function in a new scope enclosed by its captured one.
    fn apply_function(&mut self, callee: Object, args: Vec<Object>) -> EvalResult<Object> {
        let function = match callee {
            Object::Function(function) => function,
            other => {
                return Err(EvalError::NotAFunction {
                    found: other.object_type(),
                })
            }
        };

        if args.len() != function.parameters.len() {
            return Err(EvalError::WrongArgumentCount {
                expected: function.parameters.len(),
                found: args.len(),
            });
        }

        let mut scope = Environment::with_enclosing(Rc::clone(&function.env));
        for (param, arg) in function.parameters.iter().zip(args) {
            scope.define(&param.name, arg);
        }

        // Run the body in the callee's scope, then restore the caller's.
        let saved = std::mem::replace(&mut self.environment, Rc::new(RefCell::new(scope)));
        let result = self.execute_block(&function.body);
        self.environment = saved;

        let value = settle(result)?;
        debug!("Function returned: {}", value);

        Ok(value)
    }
}

fn eval_prefix(operator: PrefixOperator, right: Object) -> EvalResult<Object> {
    match (operator, right) {
        (PrefixOperator::Bang, right) => Ok(Object::Boolean(!right.is_truthy())),

        (PrefixOperator::Minus, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),

        (PrefixOperator::Minus, right) => Err(EvalError::UnknownPrefixOperator {
            operator,
            right: right.object_type(),
        }),
    }
}

fn eval_infix(operator: InfixOperator, left: Object, right: Object) -> EvalResult<Object> {
    match (&left, &right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(operator, *a, *b),

        (Object::Boolean(a), Object::Boolean(b)) if operator == InfixOperator::Eq => {
            Ok(Object::Boolean(a == b))
        }

        (Object::Boolean(a), Object::Boolean(b)) if operator == InfixOperator::NotEq => {
            Ok(Object::Boolean(a != b))
        }

        _ => {
            let (left, right) = (left.object_type(), right.object_type());

            if left != right {
                Err(EvalError::TypeMismatch {
                    left,
                    operator,
                    right,
                })
            } else {
                Err(EvalError::UnknownInfixOperator {
                    left,
                    operator,
                    right,
                })
            }
        }
    }
}

fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> EvalResult<Object> {
    let value = match operator {
        InfixOperator::Plus => Object::Integer(a.wrapping_add(b)),
        InfixOperator::Minus => Object::Integer(a.wrapping_sub(b)),
        InfixOperator::Asterisk => Object::Integer(a.wrapping_mul(b)),
        InfixOperator::Slash => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOperator::Lt => Object::Boolean(a < b),
        InfixOperator::Gt => Object::Boolean(a > b),
        InfixOperator::Eq => Object::Boolean(a == b),
        InfixOperator::NotEq => Object::Boolean(a != b),
    };

    Ok(value)
}
