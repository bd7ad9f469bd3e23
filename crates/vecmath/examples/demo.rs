//! Walks through the basic vector operations and prints the results.
//!
//! If a vector is piped into stdin (eg. `echo "0.5 -1" | cargo run --example demo`), it is read
//! and printed as well. Set `RUST_LOG=vecmath=trace` to see the parser at work.

use std::io::{self, IsTerminal};

use log::LevelFilter;
use vecmath::{shader, vec2, Vec2f};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("vecmath"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut a: Vec2f = vec2(1.0, 3.0);
    let b = vec2(-2.0, -3.0);
    let c = vec2(1.0, 2.0);
    println!("{a}\n{b}\n{c}");
    println!("{}\n{}", a + c, a / c);

    a += b;
    println!("{a}");

    a += a[0];
    println!("{}", vec2(1.0, 1.0) == vec2(2.0, 1.0));

    a.inc();
    println!("{}", a.post_inc());
    println!("{a}");

    a[1] += 1.0;
    println!("{}", shader::sin(a));
    log::info!("exp = {:.3}, exp2 = {:.3}", shader::exp(a), shader::exp2(a));

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut input = Vec2f::ZERO;
        input.read_from(&mut stdin.lock())?;
        log::info!(
            "read {input} (length {}, normalized {:.3})",
            input.length(),
            input.normalize()
        );
    }

    Ok(())
}
