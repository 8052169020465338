//! Term-by-term evaluation tests.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use rinha_ir::{BinaryOp, File, Term};

use super::run;
use crate::{buffer_handler, silent_handler, Environment, EvalErrorKind, Interpreter, Value};

fn value_of(term: &Term) -> Value {
    run(term).0.unwrap()
}

fn error_of(term: &Term) -> crate::EvalError {
    run(term).0.unwrap_err()
}

/// `let f = fn (n) => if (n == 0) { 1 } else { n * f(n - 1) }; f(5)`
fn factorial(n: i64) -> Term {
    Term::let_(
        "f",
        Term::function(
            ["n"],
            Term::if_(
                Term::binary(Term::var("n"), BinaryOp::Eq, Term::int(0)),
                Term::int(1),
                Term::binary(
                    Term::var("n"),
                    BinaryOp::Mul,
                    Term::call(
                        Term::var("f"),
                        vec![Term::binary(Term::var("n"), BinaryOp::Sub, Term::int(1))],
                    ),
                ),
            ),
        ),
        Term::call(Term::var("f"), vec![Term::int(n)]),
    )
}

/// Non-tail recursive sum of `0..=n`.
fn sum_to(n: i64) -> Term {
    Term::let_(
        "sum",
        Term::function(
            ["n"],
            Term::if_(
                Term::binary(Term::var("n"), BinaryOp::Eq, Term::int(0)),
                Term::int(0),
                Term::binary(
                    Term::var("n"),
                    BinaryOp::Add,
                    Term::call(
                        Term::var("sum"),
                        vec![Term::binary(Term::var("n"), BinaryOp::Sub, Term::int(1))],
                    ),
                ),
            ),
        ),
        Term::call(Term::var("sum"), vec![Term::int(n)]),
    )
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluate_to_themselves() {
        assert_eq!(value_of(&Term::int(7)), Value::int(7));
        assert_eq!(value_of(&Term::str("hi")), Value::string("hi"));
        assert_eq!(value_of(&Term::bool(true)), Value::Bool(true));
    }

    #[test]
    fn tuple_evaluates_both_components() {
        let term = Term::tuple(Term::int(1), Term::str("a"));
        assert_eq!(
            value_of(&term),
            Value::tuple(Value::int(1), Value::string("a"))
        );
    }
}

mod binary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluates_left_then_right() {
        let term = Term::binary(
            Term::print(Term::int(1)),
            BinaryOp::Add,
            Term::print(Term::int(2)),
        );
        let (result, output) = run(&term);
        assert_eq!(result.unwrap(), Value::int(3));
        assert_eq!(output, "1\n2\n");
    }

    #[test]
    fn logical_operators_do_not_short_circuit() {
        let term = Term::binary(
            Term::bool(false),
            BinaryOp::And,
            Term::print(Term::str("evaluated")),
        );
        let (result, output) = run(&term);
        assert_eq!(result.unwrap(), Value::Bool(false));
        assert_eq!(output, "evaluated\n");
    }

    #[test]
    fn left_failure_skips_right() {
        let term = Term::binary(
            Term::var("missing"),
            BinaryOp::Add,
            Term::print(Term::int(1)),
        );
        let (result, output) = run(&term);
        assert!(matches!(
            result.unwrap_err().kind,
            EvalErrorKind::UnboundVariable { .. }
        ));
        assert_eq!(output, "");
    }

    #[test]
    fn logical_operators_reject_closures() {
        let term = Term::binary(
            Term::function(Vec::<String>::new(), Term::int(1)),
            BinaryOp::And,
            Term::bool(true),
        );
        let err = error_of(&term);
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                operation: "`&&`".to_string(),
                expected: "int, str or bool",
                got: "closure",
            }
        );
        assert_eq!(err.term, Some("Binary"));
    }

    #[test]
    fn division_by_zero_names_binary() {
        let err = error_of(&Term::binary(Term::int(1), BinaryOp::Div, Term::int(0)));
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert_eq!(err.term, Some("Binary"));
    }
}

mod conditionals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_selected_branch_runs() {
        let term = Term::if_(
            Term::bool(true),
            Term::int(1),
            Term::call(Term::var("undefined"), vec![]),
        );
        assert_eq!(value_of(&term), Value::int(1));

        let term = Term::if_(
            Term::bool(false),
            Term::print(Term::str("then")),
            Term::print(Term::str("else")),
        );
        let (result, output) = run(&term);
        assert_eq!(result.unwrap(), Value::string("else"));
        assert_eq!(output, "else\n");
    }

    #[test]
    fn condition_must_be_bool() {
        let err = error_of(&Term::if_(Term::int(1), Term::int(2), Term::int(3)));
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                operation: "if condition".to_string(),
                expected: "bool",
                got: "int",
            }
        );
        assert_eq!(err.term, Some("If"));
    }
}

mod tuples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn projections_through_variable() {
        let term = Term::let_(
            "t",
            Term::tuple(Term::int(1), Term::str("a")),
            Term::tuple(
                Term::second(Term::var("t")),
                Term::first(Term::var("t")),
            ),
        );
        assert_eq!(
            value_of(&term),
            Value::tuple(Value::string("a"), Value::int(1))
        );
    }

    #[test]
    fn projection_of_non_tuple() {
        let err = error_of(&Term::first(Term::int(5)));
        assert_eq!(err.kind, EvalErrorKind::NotATuple { got: "int" });
        assert_eq!(err.term, Some("First"));

        let err = error_of(&Term::second(Term::str("x")));
        assert_eq!(err.kind, EvalErrorKind::NotATuple { got: "str" });
    }
}

mod print {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_its_value() {
        let term = Term::binary(Term::print(Term::int(3)), BinaryOp::Mul, Term::int(2));
        let (result, output) = run(&term);
        assert_eq!(result.unwrap(), Value::int(6));
        assert_eq!(output, "3\n");
    }

    #[test]
    fn renders_tuples_and_closures() {
        let term = Term::tuple(
            Term::print(Term::tuple(Term::int(1), Term::str("a"))),
            Term::print(Term::function(["x"], Term::var("x"))),
        );
        let (_, output) = run(&term);
        let (tuple_line, closure_line) = output.split_once('\n').unwrap();
        assert_eq!(tuple_line, "(1, a)");
        assert!(closure_line.starts_with("<#closure@"), "{closure_line}");
    }

    #[test]
    fn silent_handler_discards_output() {
        let mut interpreter = Interpreter::builder()
            .print_handler(silent_handler())
            .build();
        let result = interpreter
            .eval(&Environment::new(), &Term::print(Term::int(1)))
            .unwrap();
        assert_eq!(result, Value::int(1));
        assert_eq!(interpreter.print_handler().get_output(), "");
    }
}

mod calls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recursive_factorial() {
        assert_eq!(value_of(&factorial(5)), Value::int(120));
    }

    #[test]
    fn factorial_beyond_machine_integers() {
        assert_eq!(
            value_of(&factorial(25)).render(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn deep_recursion_grows_the_stack() {
        assert_eq!(value_of(&sum_to(10_000)), Value::int(50_005_000));
    }

    #[test]
    fn arguments_use_caller_scope_body_uses_captured_scope() {
        // let mk = fn (a) => fn (b) => a + b; let add1 = mk(1); let a = 100; add1(a)
        let term = Term::let_(
            "mk",
            Term::function(
                ["a"],
                Term::function(
                    ["b"],
                    Term::binary(Term::var("a"), BinaryOp::Add, Term::var("b")),
                ),
            ),
            Term::let_(
                "add1",
                Term::call(Term::var("mk"), vec![Term::int(1)]),
                Term::let_(
                    "a",
                    Term::int(100),
                    Term::call(Term::var("add1"), vec![Term::var("a")]),
                ),
            ),
        );
        assert_eq!(value_of(&term), Value::int(101));
    }

    #[test]
    fn arguments_evaluate_left_to_right() {
        let term = Term::let_(
            "pair",
            Term::function(["x", "y"], Term::tuple(Term::var("x"), Term::var("y"))),
            Term::call(
                Term::var("pair"),
                vec![Term::print(Term::int(1)), Term::print(Term::int(2))],
            ),
        );
        let (result, output) = run(&term);
        assert_eq!(result.unwrap(), Value::tuple(Value::int(1), Value::int(2)));
        assert_eq!(output, "1\n2\n");
    }

    #[test]
    fn closures_compare_by_identity() {
        // let f = fn (x) => x; let g = fn (y) => 1; (f == f, f == g)
        let term = Term::let_(
            "f",
            Term::function(["x"], Term::var("x")),
            Term::let_(
                "g",
                Term::function(["y"], Term::int(1)),
                Term::tuple(
                    Term::binary(Term::var("f"), BinaryOp::Eq, Term::var("f")),
                    Term::binary(Term::var("f"), BinaryOp::Eq, Term::var("g")),
                ),
            ),
        );
        assert_eq!(
            value_of(&term),
            Value::tuple(Value::Bool(true), Value::Bool(false))
        );
    }

    #[test]
    fn zero_parameter_function() {
        let term = Term::let_(
            "k",
            Term::function(Vec::<String>::new(), Term::int(9)),
            Term::call(Term::var("k"), vec![]),
        );
        assert_eq!(value_of(&term), Value::int(9));
    }

    #[test]
    fn arity_mismatch() {
        let term = Term::let_(
            "f",
            Term::function(["a", "b"], Term::var("a")),
            Term::call(Term::var("f"), vec![Term::int(1)]),
        );
        let err = error_of(&term);
        assert_eq!(err.kind, EvalErrorKind::ArityMismatch { expected: 2, got: 1 });
        assert_eq!(err.term, Some("Call"));
    }

    #[test]
    fn callee_must_be_a_closure() {
        let term = Term::call(Term::int(1), vec![Term::print(Term::int(2))]);
        let (result, output) = run(&term);
        assert_eq!(result.unwrap_err().kind, EvalErrorKind::NotCallable { got: "int" });
        // arguments are not evaluated once the callee is rejected
        assert_eq!(output, "");
    }

    #[test]
    fn errors_inside_the_body_keep_innermost_term() {
        let term = Term::let_(
            "f",
            Term::function(["x"], Term::var("nope")),
            Term::call(Term::var("f"), vec![Term::int(1)]),
        );
        let err = error_of(&term);
        assert_eq!(
            err.kind,
            EvalErrorKind::UnboundVariable {
                name: "nope".to_string()
            }
        );
        assert_eq!(err.term, Some("Var"));
        assert_eq!(err.to_string(), "unbound variable: nope (in Var)");
    }
}

mod limits {
    use super::*;
    use pretty_assertions::assert_eq;

    fn endless() -> Term {
        Term::let_(
            "loop",
            Term::function(Vec::<String>::new(), Term::call(Term::var("loop"), vec![])),
            Term::call(Term::var("loop"), vec![]),
        )
    }

    #[test]
    fn call_depth_limit() {
        let mut interpreter = Interpreter::builder()
            .print_handler(buffer_handler())
            .max_call_depth(Some(3))
            .build();
        let err = interpreter
            .eval(&Environment::new(), &endless())
            .unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 3 });
        assert_eq!(interpreter.call_depth(), 0);
    }

    #[test]
    fn limit_allows_calls_up_to_depth() {
        let mut interpreter = Interpreter::builder()
            .print_handler(buffer_handler())
            .max_call_depth(Some(6))
            .build();
        // factorial(5) nests six calls: f(5) .. f(0)
        let result = interpreter
            .eval(&Environment::new(), &factorial(5))
            .unwrap();
        assert_eq!(result, Value::int(120));
    }
}

mod host {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn run_file_uses_fresh_root() {
        let handler = buffer_handler();
        let mut interpreter = Interpreter::builder()
            .print_handler(handler.clone())
            .build();
        let file = File::new("fact.rinha", Term::print(factorial(4)));
        assert_eq!(interpreter.run_file(&file).unwrap(), Value::int(24));
        assert_eq!(handler.get_output(), "24\n");
    }

    #[test]
    fn call_closure_from_host() {
        let env = Environment::new();
        let mut interpreter = Interpreter::builder()
            .print_handler(buffer_handler())
            .build();
        let add = interpreter
            .eval(
                &env,
                &Term::function(
                    ["a", "b"],
                    Term::binary(Term::var("a"), BinaryOp::Add, Term::var("b")),
                ),
            )
            .unwrap();

        let sum = interpreter
            .call(&add, vec![Value::int(2), Value::string("x")])
            .unwrap();
        assert_eq!(sum, Value::string("2x"));

        let err = interpreter.call(&add, vec![Value::int(1)]).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::ArityMismatch { expected: 2, got: 1 });
        // nothing was bound by the failed call
        assert!(!env.contains("a"));

        let err = interpreter.call(&Value::Bool(true), vec![]).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::NotCallable { got: "bool" });
    }

    #[test]
    fn evaluate_free_function() {
        let env = Environment::new();
        env.define("x", Value::int(41));
        let result = crate::evaluate(
            &env,
            &Term::binary(Term::var("x"), BinaryOp::Add, Term::int(1)),
        )
        .unwrap();
        assert_eq!(result, Value::int(42));
    }
}
