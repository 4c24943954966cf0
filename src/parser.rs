use pest::iterators::{Pair, Pairs};
use pest::Parser;

use crate::ast::*;
use crate::error::{Error, Result};

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct PrologParser;

/**
 * Top-level function for parsing a program. The returned node has kind
 * `Program` and one `Clause` child per clause, in source order.
 */
pub fn parse(code: &str) -> Result<Node> {
    let parsed_program = next_pair(&mut PrologParser::parse(Rule::program, code)?, Rule::program)?;

    let pos = position_of(&parsed_program);
    let mut clauses = Vec::new();
    for pair in parsed_program.into_inner() {
        match pair.as_rule() {
            Rule::clause => clauses.push(construct_clause(pair)?),
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok(Node::new(NodeKind::Program, Payload::None, code, pos).with_children(clauses))
}

fn position_of(pair: &Pair<Rule>) -> Position {
    let (line, column) = pair.as_span().start_pos().line_col();
    Position::new(line, column)
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Result<Pair<'i, Rule>> {
    pairs.next().ok_or(Error::MissingPair { rule, expected: "inner pair" })
}

/**
 * Creates a node for `pair` with no payload.
 */
fn bare(kind: NodeKind, pair: &Pair<Rule>) -> Node {
    Node::new(kind, Payload::None, pair.as_str(), position_of(pair))
}

fn named(kind: NodeKind, pair: &Pair<Rule>) -> Node {
    let text = pair.as_str();
    Node::new(kind, Payload::Str(text.to_string()), text, position_of(pair))
}

fn construct_clause(pair: Pair<Rule>) -> Result<Node> {
    let clause = bare(NodeKind::Clause, &pair);

    let mut children = Vec::new();
    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::head => children.push(construct_head(pair)?),
            Rule::goal => children.push(construct_goal(pair)?),
            _ => unreachable!(),
        }
    }

    Ok(clause.with_children(children))
}

/**
 * A clause head becomes a predicate whose first child is the name and
 * whose remaining children are the formal arguments.
 */
fn construct_head(pair: Pair<Rule>) -> Result<Node> {
    let head = bare(NodeKind::Predicate, &pair);
    let mut it = pair.into_inner();
    let name = next_pair(&mut it, Rule::head)?;

    let mut children = Vec::new();
    children.push(named(NodeKind::Atom, &name));
    for pair in it {
        children.push(construct_term(pair)?);
    }

    Ok(head.with_children(children))
}

fn construct_goal(pair: Pair<Rule>) -> Result<Node> {
    let goal = bare(NodeKind::Predicate, &pair);
    let inner = next_pair(&mut pair.into_inner(), Rule::goal)?;
    let child = match inner.as_rule() {
        Rule::relation => construct_relation(inner)?,
        Rule::structure => construct_structure(inner)?,
        _ => unreachable!(),
    };
    Ok(goal.with_children(vec![child]))
}

fn construct_relation(pair: Pair<Rule>) -> Result<Node> {
    let relation = bare(NodeKind::Relation, &pair);
    let mut it = pair.into_inner();
    let left = construct_additive(next_pair(&mut it, Rule::relation)?)?;
    let op = named(NodeKind::RelationOp, &next_pair(&mut it, Rule::relation)?);
    let right = construct_additive(next_pair(&mut it, Rule::relation)?)?;
    Ok(relation.with_children(vec![left, op, right]))
}

/**
 * Folds `a - b + c` into `((a - b) + c)` so the tree shape records left
 * associativity. Every level is an expression node of the same kind with
 * either one child or three.
 */
fn fold_left(
    pair: Pair<Rule>,
    kind: NodeKind,
    op_kind: NodeKind,
    operand: fn(Pair<Rule>) -> Result<Node>,
) -> Result<Node> {
    let rule = pair.as_rule();
    let pos = position_of(&pair);
    let start = pair.as_span().start();
    let source = pair.as_span().get_input();
    let mut it = pair.into_inner();

    let first = next_pair(&mut it, rule)?;
    let mut acc = Node::new(kind, Payload::None, first.as_str(), pos)
        .with_children(vec![operand(first)?]);

    while let Some(op) = it.next() {
        let rhs = next_pair(&mut it, rule)?;
        let text = &source[start..rhs.as_span().end()];
        let children = vec![acc, named(op_kind, &op), operand(rhs)?];
        acc = Node::new(kind, Payload::None, text, pos).with_children(children);
    }

    Ok(acc)
}

fn construct_additive(pair: Pair<Rule>) -> Result<Node> {
    fold_left(pair, NodeKind::AdditiveExpr, NodeKind::AdditiveOp, construct_multiplicative)
}

fn construct_multiplicative(pair: Pair<Rule>) -> Result<Node> {
    fold_left(pair, NodeKind::MultiplicativeExpr, NodeKind::MultiplicativeOp, construct_unary)
}

fn construct_unary(pair: Pair<Rule>) -> Result<Node> {
    let unary = bare(NodeKind::UnaryExpr, &pair);
    let mut children = Vec::new();
    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::unary_op => children.push(named(NodeKind::UnaryOp, &pair)),
            Rule::primary_expr => children.push(construct_primary(pair)?),
            _ => unreachable!(),
        }
    }
    Ok(unary.with_children(children))
}

/**
 * A primary expression's payload is "()" when it was parenthesized in the
 * source and empty otherwise.
 */
fn construct_primary(pair: Pair<Rule>) -> Result<Node> {
    let pos = position_of(&pair);
    let text = pair.as_str().to_string();
    let inner = next_pair(&mut pair.into_inner(), Rule::primary_expr)?;
    let (marker, child) = match inner.as_rule() {
        Rule::paren_expr => {
            let expr = next_pair(&mut inner.into_inner(), Rule::paren_expr)?;
            ("()", construct_additive(expr)?)
        }
        Rule::term => ("", construct_term(inner)?),
        _ => unreachable!(),
    };
    Ok(Node::new(NodeKind::PrimaryExpr, Payload::Str(marker.to_string()), &text, pos)
        .with_children(vec![child]))
}

fn construct_term(pair: Pair<Rule>) -> Result<Node> {
    match pair.as_rule() {
        Rule::term => {
            let term = bare(NodeKind::Term, &pair);
            let inner = next_pair(&mut pair.into_inner(), Rule::term)?;
            Ok(term.with_children(vec![construct_term(inner)?]))
        }
        Rule::atom => Ok(named(NodeKind::Atom, &pair)),
        Rule::variable => Ok(named(NodeKind::Variable, &pair)),
        Rule::numeral => construct_numeral(pair),
        Rule::structure => construct_structure(pair),
        Rule::list => {
            let list = bare(NodeKind::List, &pair);
            let mut elements = Vec::new();
            for pair in pair.into_inner() {
                elements.push(construct_term(pair)?);
            }
            Ok(list.with_children(elements))
        }
        _ => unreachable!(),
    }
}

fn construct_numeral(pair: Pair<Rule>) -> Result<Node> {
    let value = pair.as_str().parse::<u64>().map_err(|_| {
        pest::error::Error::new_from_span(
            pest::error::ErrorVariant::<Rule>::CustomError {
                message: format!("Numeral {} is too large", pair.as_str()),
            },
            pair.as_span(),
        )
    })?;
    Ok(Node::new(NodeKind::Numeral, Payload::Int(value), pair.as_str(), position_of(&pair)))
}

fn construct_structure(pair: Pair<Rule>) -> Result<Node> {
    let structure = bare(NodeKind::Structure, &pair);
    let mut it = pair.into_inner();
    let name = next_pair(&mut it, Rule::structure)?;

    let mut children = Vec::new();
    children.push(named(NodeKind::Atom, &name));
    for pair in it {
        children.push(construct_term(pair)?);
    }

    Ok(structure.with_children(children))
}
