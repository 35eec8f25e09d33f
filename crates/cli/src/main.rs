use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use conics::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

/// Interactive point-membership checks on second-order curves.
#[derive(Parser)]
#[command(name = "conic-cli")]
#[command(about = "Check whether a point lies on an ellipse and a hyperbola")]
struct Cmd {}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let _cmd = Cmd::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    // Any error escaping `run` (e.g. stdin closing mid-session) is reported
    // once here and the process exits without a panic.
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// One interactive session: semi-axes, point, then a verdict per curve.
/// Generic over the streams so sessions can be scripted in tests.
fn run(input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "=== Point membership on second-order curves ===")?;

    let a = input::read_positive("Enter a (semi-axis along x): ", input, out)?;
    let b = input::read_positive("Enter b (semi-axis along y): ", input, out)?;

    let curves = [Conic2::ellipse(a, b), Conic2::hyperbola(a, b)];
    for curve in &curves {
        tracing::debug!(?curve, "constructed");
    }

    writeln!(out, "\nEnter the point to test:")?;
    let x = input::read_number("x = ", input, out)?;
    let y = input::read_number("y = ", input, out)?;
    let p = Vec2::new(x, y);

    for curve in &curves {
        writeln!(out, "\n{}", curve.describe())?;
        if curve.contains(p) {
            writeln!(out, "Point ({x}, {y}) lies on the curve.")?;
        } else {
            writeln!(out, "Point ({x}, {y}) does not lie on the curve.")?;
        }
        writeln!(out, "{}", "-".repeat(60))?;
    }
    Ok(())
}
