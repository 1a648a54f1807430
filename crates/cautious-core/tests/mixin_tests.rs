//! The helpers called as methods, from inside a user type's own methods.

use cautious_core::{Guarded, Presence, SameAs, Steps, Value};
use cautious_eval::Scope;

// ══════════════════════════════════════════════════════════════════════════════
// Fixtures
// ══════════════════════════════════════════════════════════════════════════════

/// Behaviour shared through a trait with default methods, the way a mixin
/// module would be included into a type.
trait Inspects: Guarded {
    fn check_nil_chain(&self, fallback: Value, scope: &Scope, path: &str) -> Value {
        self.nil_chain_or(fallback, || scope.resolve(path))
    }

    fn check_bool_chain(&self, scope: &Scope, path: &str) -> Value {
        self.bool_chain(|| scope.resolve(path))
    }

    fn check_class_exists(&self, name: &str) -> bool {
        self.class_exists(name)
    }

    fn check_not_nil(&self, value: &Value) -> bool {
        value.not_nil()
    }

    fn check_same_as(&self) -> bool {
        Value::symbol("a").same_as("a")
    }

    fn check_cascade(&self, trigger: Option<&str>) -> Option<i32> {
        self.cascade(|steps: &mut Steps<i32>| {
            steps.exit_if(trigger.is_none())?;
            steps.set(1);
            steps.exit_if(trigger == Some("step1"))?;
            steps.set(2);
            steps.exit_if(trigger == Some("step2"))?;
            steps.set(3);
            steps.exit_if(trigger == Some("step3"))?;
            steps.set(4);
            Ok(())
        })
    }
}

struct Widget;

impl Inspects for Widget {}

fn scope() -> Scope {
    let mut scope = Scope::new();
    scope.define("params", Value::record([("foo", "bar")]));
    scope
}

// ══════════════════════════════════════════════════════════════════════════════
// Included behaviour
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn nil_chain_in_included_methods() {
    let (w, scope) = (Widget, scope());
    assert_eq!(w.check_nil_chain(Value::Nil, &scope, "params[:bogus_key]"), Value::Nil);
    assert_eq!(w.check_nil_chain(Value::Nil, &scope, "params[:foo]"), Value::from("bar"));
    assert_eq!(
        w.check_nil_chain(Value::Bool(true), &scope, "bogus_variable"),
        Value::Bool(true)
    );
}

#[test]
fn bool_chain_in_included_methods() {
    let (w, mut scope) = (Widget, scope());
    assert_eq!(w.check_bool_chain(&scope, "bogus_variable"), Value::Bool(false));
    scope.define("var", true);
    assert_eq!(w.check_bool_chain(&scope, "var"), Value::Bool(true));
    scope.define("var", "foo");
    assert_eq!(w.check_bool_chain(&scope, "var"), Value::from("foo"));
    assert_eq!(w.check_bool_chain(&scope, "var.transmogrify"), Value::Bool(false));
}

#[test]
fn class_exists_in_included_methods() {
    let w = Widget;
    assert!(w.check_class_exists("Symbol"));
    assert!(!w.check_class_exists("Symbology"));
}

#[test]
fn not_nil_in_included_methods() {
    let w = Widget;
    assert!(!w.check_not_nil(&Value::Nil));
    assert!(w.check_not_nil(&Value::from("foobar")));
}

#[test]
fn same_as_in_included_methods() {
    assert!(Widget.check_same_as());
}

#[test]
fn cascade_in_included_methods() {
    let w = Widget;
    assert_eq!(w.check_cascade(None), None);
    assert_eq!(w.check_cascade(Some("step1")), Some(1));
    assert_eq!(w.check_cascade(Some("step2")), Some(2));
    assert_eq!(w.check_cascade(Some("step3")), Some(3));
    assert_eq!(w.check_cascade(Some("foobar")), Some(4));
}

// ══════════════════════════════════════════════════════════════════════════════
// Methods on arbitrary values
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn any_value_is_a_receiver() {
    assert_eq!(42_u8.nil_chain(|| Some("x")), Some("x"));
    assert_eq!("text".method_chain(|| None::<i32>), None);
    assert!(!().bool_chain(|| Err::<bool, ()>(())));
    assert_eq!(
        Value::Nil.try_cascade(|steps: &mut Steps<i32>| {
            steps.set(9);
            Err(cautious_core::Halt::Fail("stop"))
        }),
        Err("stop")
    );
}
