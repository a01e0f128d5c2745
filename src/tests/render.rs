use crate::node::op::BinaryOp;
use crate::node::raw::RawNode;
use crate::render::{describe, render};

fn text(raw: RawNode) -> String {
    render(Some(&raw.adopt()))
}

#[test]
fn absent_tree_renders_empty() {
    assert_eq!(render(None), "");
}

#[test]
fn lower_precedence_children_take_parentheses() {
    assert_eq!(text((num!(2) + num!(3)) * num!(4)), "(2 + 3) * 4");
    assert_eq!(text(RawNode::binary(BinaryOp::Pow, num!(1) + num!(2), num!(2))), "(1 + 2) ^ 2");
}

#[test]
fn higher_precedence_children_take_no_parentheses() {
    assert_eq!(text(num!(2) * num!(3) + num!(4)), "2 * 3 + 4");
}

#[test]
fn right_operands_of_sub_and_div_keep_grouping() {
    assert_eq!(text(num!(10) - (num!(5) - num!(2))), "10 - (5 - 2)");
    assert_eq!(text(num!(8) / (num!(4) / num!(2))), "8 / (4 / 2)");

    // Left-to-left association needs none
    assert_eq!(text((num!(10) - num!(5)) - num!(2)), "10 - 5 - 2");
    assert_eq!(text((num!(8) / num!(4)) / num!(2)), "8 / 4 / 2");
}

#[test]
fn exponentiation_chains_render_bare() {
    let chain = RawNode::binary(
        BinaryOp::Pow,
        num!(2),
        RawNode::binary(BinaryOp::Pow, num!(3), num!(4)),
    );
    assert_eq!(text(chain), "2 ^ 3 ^ 4");
}

#[test]
fn negation_wraps_binary_children_only() {
    assert_eq!(text(neg!(num!(5))), "-5");
    assert_eq!(text(neg!(num!(1) + num!(2))), "-(1 + 2)");
    assert_eq!(text(neg!(parens!(num!(1) + num!(2)))), "-(1 + 2)");
    assert_eq!(text(neg!(var!(x))), "-$x");
}

#[test]
fn explicit_parentheses_always_render() {
    assert_eq!(text(parens!(num!(7))), "(7)");
    assert_eq!(text(parens!(num!(1) + num!(2)) * num!(3)), "(1 + 2) * 3");
}

#[test]
fn calls_render_arguments_in_order() {
    assert_eq!(text(call!("SUM", num!(1), num!(2), num!(3))), "SUM(1, 2, 3)");
    assert_eq!(text(call!("NOW")), "NOW()");
    assert_eq!(text(call!("SQRT", num!(2) + num!(7))), "SQRT(2 + 7)");
}

#[test]
fn integral_numbers_render_without_a_fraction() {
    assert_eq!(text(num!(3)), "3");
    assert_eq!(text(num!(120)), "120");
    assert_eq!(text(RawNode::Number(-6.0)), "-6");
}

#[test]
fn large_integral_numbers_render_their_value() {
    // Beyond i64 range; the text must stay exact, not saturate
    assert_eq!(text(RawNode::Number(1e19)), "10000000000000000000");
    assert_eq!(text(RawNode::Number(-1e19)), "-10000000000000000000");
}

#[test]
fn fractional_numbers_render_with_two_decimals() {
    assert_eq!(text(num!(2.5)), "2.50");
    assert_eq!(text(num!(1.75)), "1.75");
    assert_eq!(text(RawNode::Number(-1.5)), "-1.50");
}

#[test]
fn variables_gain_a_sigil_unless_present() {
    assert_eq!(text(var!(x)), "$x");
    assert_eq!(text(RawNode::Variable("$rate".into())), "$rate");
}

#[test]
fn constants_render_as_their_tokens() {
    assert_eq!(text(constant!(pi) + constant!(e)), "pi + e");
}

#[test]
fn describe_labels_every_variant() {
    assert_eq!(describe(&(num!(1) + num!(2)).adopt()), "addition operation");
    assert_eq!(describe(&(num!(1) / num!(2)).adopt()), "division operation");
    assert_eq!(describe(&neg!(num!(1)).adopt()), "negation");
    assert_eq!(describe(&parens!(num!(1)).adopt()), "parenthesised group");
    assert_eq!(
        describe(&call!("MAX", num!(1), num!(2)).adopt()),
        "MAX function with 2 argument(s)"
    );
    assert_eq!(describe(&num!(3).adopt()), "number: 3");
    assert_eq!(describe(&num!(2.5).adopt()), "number: 2.50");
    assert_eq!(describe(&var!(x).adopt()), "variable: x");
    assert_eq!(describe(&constant!(pi).adopt()), "constant: π");
    assert_eq!(describe(&constant!(e).adopt()), "constant: e");
}
