//! Calc command implementation.

use crate::cli::CalcArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use intermedian_domain::{evaluate, Operand, Operation, Outcome};
use tracing::debug;

/// Execute the calc command.
pub fn execute_calc(args: CalcArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let outcome = calculate(&args, config)?;
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

/// Parse the operands and evaluate the operation.
pub fn calculate(args: &CalcArgs, config: &Config) -> Result<Outcome> {
    let tolerance = args.tolerance.resolve(&config.tolerance)?;
    let lhs: Operand = args.lhs.parse()?;
    let op: Operation = args.op.parse()?;
    let rhs: Operand = args.rhs.parse()?;
    debug!(%lhs, %op, %rhs, "evaluating");

    Ok(evaluate(lhs, op, rhs, &tolerance)?)
}
