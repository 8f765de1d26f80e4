use indoc::indoc;

use super::{check, fix};
use crate::Style::Record;

#[test]
fn interface_is_fixed() {
    let input = "interface T { [x: string]: string }";

    insta::assert_snapshot!(check(input, Record), @"warning at 0..35: A record is preferred over an index signature. (fix: convert to `Record`)");
    insta::assert_snapshot!(fix(input, Record), @"type T = Record<string, string>;");
}

#[test]
fn interface_with_supertypes_is_reported_without_fix() {
    let input = "interface A extends B { [k: string]: number }";

    insta::assert_snapshot!(check(input, Record), @"warning at 0..45: A record is preferred over an index signature.");
    assert_eq!(fix(input, Record), input);
}

#[test]
fn self_referencing_interface_is_reported_without_fix() {
    let input = "interface Tree { [key: string]: Tree }";

    insta::assert_snapshot!(check(input, Record), @"warning at 0..38: A record is preferred over an index signature.");
    assert_eq!(fix(input, Record), input);
}

#[test]
fn interface_keeps_modifiers_and_type_params() {
    let input = "export declare interface Dict<K extends string, V = unknown> { readonly [key: K]: V }";

    insta::assert_snapshot!(
        fix(input, Record),
        @"export declare type Dict<K extends string, V = unknown> = Readonly<Record<K, V>>;"
    );
}

#[test]
fn type_literal_is_fixed_in_place() {
    let input = "type Foo = { [key: string]: number };";

    insta::assert_snapshot!(check(input, Record), @"warning at 11..36: A record is preferred over an index signature. (fix: convert to `Record`)");
    insta::assert_snapshot!(fix(input, Record), @"type Foo = Record<string, number>;");
}

#[test]
fn type_literal_outside_any_alias() {
    let input = indoc! {r#"
        let x: { [k: string]: boolean };
        function f(arg: { [k: number]: string }): { readonly [k: string]: number } {}
    "#};

    insta::assert_snapshot!(fix(input, Record), @r"
    let x: Record<string, boolean>;
    function f(arg: Record<number, string>): Readonly<Record<string, number>> {}
    ");
}

#[test]
fn self_referencing_type_literal_is_ignored() {
    insta::assert_snapshot!(check("type T = { [x: string]: T };", Record), @"");
    insta::assert_snapshot!(check("type T = { [x: string]: Array<T> };", Record), @"");
    insta::assert_snapshot!(check("type F = (x: { [k: string]: F }) => void;", Record), @"");
}

#[test]
fn shadowed_alias_name_is_not_circular() {
    let input = "type T<T> = { [x: string]: T };";

    insta::assert_snapshot!(fix(input, Record), @"type T<T> = Record<string, T>;");
}

#[test]
fn typeof_reference_is_not_circular() {
    let input = indoc! {r#"
        const T = {};
        type T = { [x: string]: typeof T };
    "#};

    insta::assert_snapshot!(fix(input, Record), @r"
    const T = {};
    type T = Record<string, typeof T>;
    ");
}

#[test]
fn parentheses_are_dropped_from_texts() {
    let input = "type A = { [k: (string)]: (number | boolean) };";

    insta::assert_snapshot!(fix(input, Record), @"type A = Record<string, number | boolean>;");
}

#[test]
fn nested_literals_take_two_passes() {
    let input = "type A = { [k: string]: { [j: string]: number } };";
    let fixed = super::linter(Record).fix(input).unwrap();

    assert_eq!(fixed.passes, 2);
    insta::assert_snapshot!(fixed.output, @"type A = Record<string, Record<string, number>>;");
}

#[test]
fn other_shapes_are_not_reported() {
    let input = indoc! {r#"
        interface A { [k: string]: number; b: number }
        interface B {}
        interface C { (x: string): number }
        type D = { [...rest: string[]]: number };
        type E = { [k: string] };
        type F = { [Symbol.iterator](): Iterator<number> };
        type G = Record<string, number>;
    "#};

    insta::assert_snapshot!(check(input, Record), @"");
}

#[test]
fn comments_and_surrounding_code_are_kept() {
    let input = indoc! {r#"
        // lookup table
        export interface Table { [name: string]: number } // trailing
        const t: Table = {};
    "#};

    insta::assert_snapshot!(fix(input, Record), @r"
    // lookup table
    export type Table = Record<string, number>; // trailing
    const t: Table = {};
    ");
}

#[test]
fn interface_inside_namespace() {
    let input = indoc! {r#"
        declare namespace NS {
          interface Map { [key: string]: Map }
          interface Flat { [key: string]: number }
        }
    "#};

    insta::assert_snapshot!(fix(input, Record), @r"
    declare namespace NS {
      interface Map { [key: string]: Map }
      type Flat = Record<string, number>;
    }
    ");
}

#[test]
fn declarations_spread_over_lines_are_fixed() {
    let input = indoc! {"
        interface  Spaced
        {
          [x: string]: string
        }
        type   Literal =
          { [k: string]: number };
    "};

    insta::assert_snapshot!(fix(input, Record), @r"
    type Spaced = Record<string, string>;
    type   Literal =
      Record<string, number>;
    ");
}

#[test]
fn unicode_names_are_fixed() {
    let input = "interface Données { [clé: string]: número }";

    insta::assert_snapshot!(fix(input, Record), @"type Données = Record<string, número>;");
}

#[test]
fn script_with_hashbang_is_fixed() {
    let input = "#!/usr/bin/env ts-node\ninterface Dict { [key: string]: number }\n";

    assert_eq!(
        fix(input, Record),
        "#!/usr/bin/env ts-node\ntype Dict = Record<string, number>;\n"
    );
}
