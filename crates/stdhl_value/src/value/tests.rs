use super::*;
use crate::StringLayout;
use pretty_assertions::assert_eq;
use std::any::Any;

/// A payload with no fields.
#[derive(Clone, Debug)]
struct Marker;

impl Layout for Marker {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn kind(&self) -> &'static str {
        "marker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The smallest payload that still owns an allocation.
#[derive(Clone, Debug)]
struct Tag(u8);

impl Layout for Tag {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn kind(&self) -> &'static str {
        "tag"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn text(value: &Value) -> Option<&str> {
    value.downcast_ref::<StringLayout>().map(StringLayout::as_str)
}

// Constructors and flags

#[test]
fn scalar_is_trivial_and_defined() {
    let v = Value::scalar(42, true);
    assert!(v.trivial());
    assert!(v.defined());
    assert!(v.sign());
    assert_eq!(v.value(), 42);
    assert_eq!(v.kind(), "scalar");
}

#[test]
fn heap_value_is_defined() {
    let v = Value::with_layout(StringLayout::new("x"));
    assert!(!v.trivial());
    assert!(v.defined());
    assert!(!v.sign());
    assert_eq!(v.kind(), "string");
    assert_eq!(text(&v), Some("x"));
}

#[test]
fn undefined_value() {
    let v = Value::undefined();
    assert!(!v.trivial());
    assert!(!v.defined());
    assert!(v.ptr().is_none());
    assert_eq!(v.kind(), "undefined");
    assert_eq!(Value::default(), v);
}

#[test]
fn set_value_keeps_sign() {
    let mut v = Value::scalar(1, true);
    v.set_value(99);
    assert_eq!(v, Value::scalar(99, true));
}

// Accessor misuse

#[test]
#[should_panic(expected = "scalar accessor used on a heap-backed value")]
fn value_on_heap_panics() {
    let _ = Value::undefined().value();
}

#[test]
#[should_panic(expected = "scalar accessor used on a heap-backed value")]
fn set_value_on_heap_panics() {
    Value::with_layout(StringLayout::new("x")).set_value(1);
}

#[test]
#[should_panic(expected = "payload accessor used on a trivial value")]
fn ptr_on_scalar_panics() {
    let _ = Value::scalar(0, false).ptr();
}

#[test]
#[should_panic(expected = "payload accessor used on a trivial value")]
fn set_ptr_on_scalar_panics() {
    Value::scalar(0, false).set_ptr(None);
}

#[test]
fn downcast_on_scalar_is_none() {
    let mut v = Value::scalar(3, false);
    assert!(v.downcast_ref::<StringLayout>().is_none());
    assert!(v.downcast_mut::<StringLayout>().is_none());
}

// Payload management

#[test]
fn set_ptr_replaces_payload() {
    let mut v = Value::with_layout(StringLayout::new("old"));
    v.set_ptr(Some(Box::new(StringLayout::new("new"))));
    assert_eq!(text(&v), Some("new"));
    v.set_ptr(None);
    assert!(!v.defined());
}

#[test]
fn take_layout_leaves_undefined() {
    let mut v = Value::with_layout(StringLayout::new("payload"));
    let taken = v.take_layout();
    assert!(!v.defined());
    assert_eq!(
        taken.as_deref().and_then(|p| p.downcast_ref::<StringLayout>()),
        Some(&StringLayout::new("payload"))
    );
}

#[test]
fn ptr_mut_edits_in_place() {
    let mut v = Value::with_layout(StringLayout::new("a"));
    if let Some(layout) = v
        .ptr_mut()
        .and_then(|p| p.downcast_mut::<StringLayout>())
    {
        layout.append(&StringLayout::new("b"));
    }
    assert_eq!(text(&v), Some("ab"));
}

// Zero-sized payloads

#[test]
#[should_panic(expected = "zero-sized `marker` payload has no identity of its own")]
fn zero_sized_payload_is_rejected() {
    let _ = Value::with_layout(Marker);
}

#[test]
#[should_panic(expected = "zero-sized `marker` payload")]
fn zero_sized_boxed_payload_is_rejected() {
    let _ = Value::from_layout(Box::new(Marker));
}

#[test]
#[should_panic(expected = "zero-sized `marker` payload")]
fn zero_sized_replacement_is_rejected() {
    let mut v = Value::with_layout(Tag(1));
    v.set_ptr(Some(Box::new(Marker)));
}

#[test]
fn small_payloads_keep_distinct_identities() {
    let a = Value::with_layout(Tag(0));
    let b = a.clone();
    let c = Value::with_layout(Tag(0));
    assert_ne!(b, a);
    assert_ne!(c, a);
    assert_ne!(c, b);
    assert_eq!(b.downcast_ref::<Tag>().map(|tag| tag.0), Some(0));
}

// Copy

#[test]
fn clone_of_scalar_is_equal() {
    let v = Value::scalar(7, true);
    assert_eq!(v.clone(), v);
}

#[test]
fn clone_of_heap_value_is_independent() {
    let original = Value::with_layout(StringLayout::new("abc"));
    let mut copy = original.clone();

    // Distinct payloads: identity differs, content matches.
    assert_ne!(copy, original);
    assert_eq!(text(&copy), text(&original));

    if let Some(layout) = copy.downcast_mut::<StringLayout>() {
        layout.append(&StringLayout::new("def"));
    }
    assert_eq!(text(&original), Some("abc"));
    assert_eq!(text(&copy), Some("abcdef"));
}

#[test]
fn clone_of_undefined_is_undefined() {
    let v = Value::undefined().clone();
    assert!(!v.defined());
}

// Move

#[test]
fn move_scalar_into_heap_value_swaps() {
    let mut destination = Value::with_layout(StringLayout::new("held"));
    let mut source = Value::scalar(5, true);

    destination.move_from(&mut source);

    assert_eq!(destination, Value::scalar(5, true));
    assert!(!source.trivial());
    assert_eq!(text(&source), Some("held"));
}

#[test]
fn move_heap_value_into_scalar_swaps() {
    let mut destination = Value::scalar(1, false);
    let mut source = Value::with_layout(StringLayout::new("moving"));

    destination.move_from(&mut source);

    assert_eq!(text(&destination), Some("moving"));
    assert_eq!(source, Value::scalar(1, false));
}

#[test]
fn move_keeps_payload_identity() {
    let mut source = Value::with_layout(StringLayout::new("same"));
    let before = source.ptr().map(|p| std::ptr::from_ref(p).cast::<()>());
    let mut destination = Value::undefined();

    destination.move_from(&mut source);

    let after = destination
        .ptr()
        .map(|p| std::ptr::from_ref(p).cast::<()>());
    assert_eq!(before, after);
    assert!(!source.defined());
}

// Negation

#[test]
fn negation_flips_sign_only() {
    let v = Value::scalar(10, false);
    let n = -&v;
    assert_eq!(n, Value::scalar(10, true));
    assert!(!v.sign());
    assert_eq!(-n, v);
}

#[test]
fn negation_of_heap_value_copies_payload() {
    let v = Value::with_layout(StringLayout::new("t"));
    let n = -&v;
    assert!(n.sign());
    assert!(!v.sign());
    assert_eq!(text(&n), Some("t"));
}

// Equality

#[test]
fn scalar_equality_includes_sign() {
    assert_eq!(Value::scalar(3, false), Value::scalar(3, false));
    assert_ne!(Value::scalar(3, false), Value::scalar(3, true));
    assert_ne!(Value::scalar(3, false), Value::scalar(4, false));
}

#[test]
fn trivial_never_equals_non_trivial() {
    assert_ne!(Value::scalar(0, false), Value::undefined());
    assert_ne!(
        Value::scalar(0, false),
        Value::with_layout(StringLayout::new(""))
    );
}

#[test]
fn heap_equality_is_identity() {
    let v = Value::with_layout(StringLayout::new("x"));
    assert_eq!(v, v);
    assert_ne!(v, Value::with_layout(StringLayout::new("x")));
}

// Encoding

#[test]
fn encode_scalar() {
    let v = Value::scalar(10, false);
    assert_eq!(
        v.to_string_radix(Radix::Binary, Literal::Stdhl),
        Ok("0b1010".to_string())
    );
    assert_eq!(
        v.encode(NumeralFormat::new(Radix::Octal, Literal::C)),
        Ok("012".to_string())
    );
    assert_eq!(
        Value::scalar(0, true).encode(NumeralFormat::NATIVE_DECIMAL),
        Ok("0".to_string())
    );
}

#[test]
fn encode_unsupported_format() {
    let v = Value::scalar(1, false);
    assert_eq!(
        v.to_string_radix(Radix::Binary, Literal::C),
        Err(ValueError::Numeral(stdhl_numeral::NumeralError::UnsupportedFormat {
            radix: Radix::Binary,
            literal: Literal::C,
        }))
    );
}

#[test]
fn encode_heap_value_is_rejected() {
    let v = Value::with_layout(StringLayout::new("x"));
    assert_eq!(
        v.encode(NumeralFormat::default()),
        Err(ValueError::NotScalar { kind: "string" })
    );
    assert_eq!(
        Value::undefined().encode(NumeralFormat::default()),
        Err(ValueError::NotScalar { kind: "undefined" })
    );
}

#[test]
fn to_digit_delegates() {
    assert_eq!(Value::to_digit('f', Radix::Hexadecimal, Literal::C), Ok(15));
    assert!(Value::to_digit('2', Radix::Binary, Literal::Stdhl).is_err());
}

// Formatting

#[test]
fn display() {
    assert_eq!(Value::scalar(12, true).to_string(), "-12");
    assert_eq!(Value::scalar(0, true).to_string(), "0");
    assert_eq!(Value::with_layout(StringLayout::new("x")).to_string(), "<string>");
    assert_eq!(Value::undefined().to_string(), "<undefined>");
}

#[test]
fn debug() {
    assert_eq!(
        format!("{:?}", Value::scalar(1, false)),
        "Scalar { value: 1, sign: false }"
    );
    assert_eq!(format!("{:?}", Value::undefined()), "Undefined");
}
