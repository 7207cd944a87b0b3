use std::env;

use anyhow::{bail, Context, Result};
use edukit::collections::Stack;

/// Evaluates a postfix expression given as a single command-line argument,
/// for example: postfix "-1 8 2 / +"
fn main() -> Result<()> {
    let expression = env::args()
        .nth(1)
        .context("usage: postfix \"<expression>\"")?;

    let mut stack: Stack<i64> = Stack::new();
    for token in expression.split_whitespace() {
        if let Ok(number) = token.parse::<i64>() {
            stack.push(number);
            continue;
        }

        let right = stack.pop()?;
        let left = stack.pop()?;
        match apply(left, right, token) {
            Ok(result) => stack.push(result),
            Err(err) => eprintln!("{err}"),
        }
    }

    if stack.len() != 1 {
        bail!("expression did not reduce to a single value");
    }
    println!("Expression evaluates to {}", stack.pop()?);
    Ok(())
}

fn apply(left: i64, right: i64, operator: &str) -> Result<i64> {
    Ok(match operator {
        "+" => left + right,
        "-" => left - right,
        "*" => left * right,
        "/" => left.checked_div(right).context("division by zero")?,
        "%" => left.checked_rem(right).context("remainder by zero")?,
        _ => bail!("argument {operator:?} is not a number or a valid operator (+, -, *, / or %)"),
    })
}
