//! Alignis summary demo — solves a horizontal circular curve and prints
//! the parameter table a designer would read off the alignment sheet.
//!
//! Usage:
//! ```text
//! cargo run --example summary                         # built-in reference inputs
//! cargo run --example summary -- 0 90 0 0 5           # BB AB PI_x PI_y D
//! ```
//!
//! Bearings are degrees clockwise from north; PI coordinates share one
//! length unit; D is the degree of curve under the arc definition.

use alignis::math::Point2;
use alignis::operations::{LocateCenter, SampleArc, SolveCurve};

fn parse_inputs(args: &[String]) -> Result<(f64, f64, Point2, f64), String> {
    if args.is_empty() {
        // Reference curve: 90-degree right-hand turn at the origin.
        return Ok((0.0, 90.0, Point2::origin(), 5.0));
    }
    if args.len() != 5 {
        return Err(format!(
            "expected 5 arguments (BB AB PI_x PI_y D), got {}",
            args.len()
        ));
    }
    let mut values = [0.0_f64; 5];
    for (slot, raw) in values.iter_mut().zip(args) {
        *slot = raw
            .parse()
            .map_err(|_| format!("'{raw}' is not a valid number"))?;
    }
    Ok((
        values[0],
        values[1],
        Point2::new(values[2], values[3]),
        values[4],
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for alignis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=alignis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("alignis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (bb, ab, pi, d) = parse_inputs(&args)?;

    let params = SolveCurve::new(bb, ab, pi, d).execute()?;
    let located = LocateCenter::new(params.pc, params.pt, bb, ab, params.radius).execute()?;
    let arc = SampleArc::new(
        located.center,
        params.pc,
        params.pt,
        params.radius,
        located.direction,
    )
    .execute()?;

    println!("Horizontal Circular Curve");
    println!("  Delta:                 {:.4} deg", params.delta);
    println!("  Radius (R):            {:.4}", params.radius);
    println!("  Length of Curve (L):   {:.4}", params.arc_length);
    println!("  Long Chord (LC):       {:.4}", params.long_chord);
    println!("  Tangent (T):           {:.4}", params.tangent);
    println!("  External Distance (E): {:.4}", params.external);
    println!("  Middle Ordinate (M):   {:.4}", params.middle_ordinate);
    println!("  PC:                    ({:.2}, {:.2})", params.pc.x, params.pc.y);
    println!("  PT:                    ({:.2}, {:.2})", params.pt.x, params.pt.y);
    println!(
        "  Center:                ({:.2}, {:.2})",
        located.center.x, located.center.y
    );
    println!("  Direction:             {}", located.direction);
    println!("  Arc samples:           {}", arc.len());
    Ok(())
}
