use indoc::indoc;

use super::{check, fix};
use crate::Style::{IndexSignature, Record};

#[test]
fn mapped_type_is_fixed() {
    let input = "type Foo = { [K in Keys]: V };";

    insta::assert_snapshot!(check(input, Record), @"warning at 11..29: A record is preferred over an index signature. (fix: convert to `Record`)");
    insta::assert_snapshot!(fix(input, Record), @"type Foo = Record<Keys, V>;");
}

#[test]
fn key_used_in_value_is_ignored() {
    insta::assert_snapshot!(check("type A = { [K in Keys]: Lookup[K] };", Record), @"");
    insta::assert_snapshot!(check("type B<T> = { [P in keyof T as `get${P & string}`]: T[P] };", Record), @"");
    insta::assert_snapshot!(check("type C = { [K in Keys]: (k: K) => void };", Record), @"");
}

#[test]
fn bare_keyof_constraint_is_ignored() {
    insta::assert_snapshot!(check("type A = { [K in keyof X]: V };", Record), @"");
}

#[test]
fn parenthesized_keyof_is_eligible() {
    let input = "type A = { [K in (keyof X)]: V };";

    insta::assert_snapshot!(fix(input, Record), @"type A = Record<keyof X, V>;");
}

#[test]
fn modifiers_become_wrappers() {
    let input = indoc! {r#"
        type A = { readonly [K in (keyof X)]?: V };
        type B = { +readonly [K in Keys]-?: V };
        type C = { [K in Keys]+?: V };
        type D = { [K in Keys]-?: V };
        type E = { readonly [K in Keys]: V };
    "#};

    insta::assert_snapshot!(fix(input, Record), @r"
    type A = Readonly<Partial<Record<keyof X, V>>>;
    type B = Readonly<Required<Record<Keys, V>>>;
    type C = Partial<Record<Keys, V>>;
    type D = Required<Record<Keys, V>>;
    type E = Readonly<Record<Keys, V>>;
    ");
}

#[test]
fn minus_readonly_is_reported_without_fix() {
    let input = "type A = { -readonly [K in Keys]: V };";

    insta::assert_snapshot!(check(input, Record), @"warning at 9..37: A record is preferred over an index signature.");
    assert_eq!(fix(input, Record), input);
}

#[test]
fn missing_value_type_is_reported_without_fix() {
    let input = "type A = { [K in Keys] };";

    insta::assert_snapshot!(check(input, Record), @"warning at 9..24: A record is preferred over an index signature.");
}

#[test]
fn self_referencing_mapped_type_is_ignored() {
    insta::assert_snapshot!(check("type T = { [K in Keys]: T };", Record), @"");
    insta::assert_snapshot!(check("type T = { [K in Keys]: { next: T } };", Record), @"");
}

#[test]
fn as_clause_is_ignored() {
    insta::assert_snapshot!(check("type A = { [K in Keys as Upper]: V };", Record), @"");
}

#[test]
fn mapped_type_inside_interface_member() {
    let input = "interface A { m: { [K in Keys]: number } }";

    insta::assert_snapshot!(fix(input, Record), @"interface A { m: Record<Keys, number> }");
}

#[test]
fn record_output_round_trips() {
    let input = "type A = { [K in 'a' | 'b']: number };";
    let as_record = fix(input, Record);

    insta::assert_snapshot!(as_record, @"type A = Record<'a' | 'b', number>;");
    insta::assert_snapshot!(fix(&as_record, IndexSignature), @"type A = { [key: 'a' | 'b']: number };");
}

#[test]
#[should_panic(expected = "is not a type variable of the mapped type's scope")]
fn unbound_mapped_key_is_an_invariant_violation() {
    use crate::parser::ast::MappedType;
    use crate::rule::MappedTypeShape;

    let unrelated = crate::parser::parse("type X = 1;").unwrap();
    let model = crate::semantic::bind(&unrelated.root);

    let parsed = crate::parser::parse("type A = { [K in Keys]: V };").unwrap();
    let mapped = parsed
        .root
        .as_cst()
        .descendants()
        .find_map(MappedType::cast)
        .unwrap();

    MappedTypeShape::analyze(&mapped, &model);
}
