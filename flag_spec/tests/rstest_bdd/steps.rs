//! Step definitions for declaring and validating flags.

use anyhow::{Result, anyhow, ensure};
use flag_spec::{Constraint, ConstraintSet, FlagSpec, ValidationError};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{parse_list, unquote};

use crate::fixtures::{FlagContext, Outcome};

fn parse_constraints(value: &str) -> Result<Vec<Constraint>> {
    parse_list(value)
        .into_iter()
        .map(|name| {
            Constraint::ALL
                .into_iter()
                .find(|constraint| constraint.name() == name)
                .ok_or_else(|| anyhow!("unknown constraint '{name}'"))
        })
        .collect()
}

fn record(flag_context: &FlagContext, result: Result<(), ValidationError>) {
    let outcome: Outcome = result.err().map(|err| (err.kind(), err.to_string()));
    flag_context.outcome.set(outcome);
}

#[given("a flag {name} with alias {alias} and placeholder {placeholder} declared as {constraints}")]
fn declare_flag(
    flag_context: &FlagContext,
    name: String,
    alias: String,
    placeholder: String,
    constraints: String,
) -> Result<()> {
    let declared = ConstraintSet::from_constraints(parse_constraints(&constraints)?)
        .and_then(|set| {
            FlagSpec::new(unquote(&name), unquote(&alias), unquote(&placeholder), "", set)
        });
    match declared {
        Ok(spec) => flag_context.spec.set(spec),
        Err(err) => flag_context.declaration_error.set(err.to_string()),
    }
    Ok(())
}

#[when("the flag is validated with long value {long} and short value {short}")]
fn validate_flag(flag_context: &FlagContext, long: String, short: String) -> Result<()> {
    let result = flag_context
        .spec
        .with_ref(|spec| spec.validate(false, unquote(&long), unquote(&short)))
        .ok_or_else(|| anyhow!("no flag declared"))?;
    record(flag_context, result);
    Ok(())
}

#[when("the argument is validated with value {value}")]
fn validate_argument(flag_context: &FlagContext, value: String) -> Result<()> {
    let result = flag_context
        .spec
        .with_ref(|spec| spec.validate(true, unquote(&value), ""))
        .ok_or_else(|| anyhow!("no flag declared"))?;
    record(flag_context, result);
    Ok(())
}

#[then("validation succeeds")]
fn validation_succeeds(flag_context: &FlagContext) -> Result<()> {
    let outcome = flag_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no validation recorded"))?;
    ensure!(outcome.is_none(), "expected success, got {outcome:?}");
    Ok(())
}

#[then("validation fails with {message}")]
fn validation_fails(flag_context: &FlagContext, message: String) -> Result<()> {
    let outcome = flag_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no validation recorded"))?;
    let (kind, actual) = outcome.ok_or_else(|| anyhow!("expected a validation failure"))?;
    ensure!(
        actual == unquote(&message),
        "unexpected message {actual:?} ({kind:?})"
    );
    Ok(())
}

#[then("the declaration is rejected with {message}")]
fn declaration_rejected(flag_context: &FlagContext, message: String) -> Result<()> {
    ensure!(flag_context.spec.is_empty(), "declaration was accepted");
    let actual = flag_context
        .declaration_error
        .take()
        .ok_or_else(|| anyhow!("no declaration error recorded"))?;
    ensure!(actual == unquote(&message), "unexpected error {actual:?}");
    Ok(())
}
