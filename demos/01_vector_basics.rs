//! 01 - Vector Basics
//!
//! A tour of the Vector4 API.
//!
//! This example demonstrates:
//! - Chained in-place mutation
//! - The three operand forms (vector, four components, broadcast scalar)
//! - Homogenizing a point and interpolating between points
//! - Fallible positional access
//!
//! Run with: `cargo run --example 01_vector_basics`

use vec4kit_math::Vector4;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut p = Vector4::new(2.0, 4.0, 6.0, 2.0);
    p.homogenize();
    log::info!("homogenized: {}", p);

    let mut colour = Vector4::splat(0.5);
    colour.mul([1.0, 0.5, 0.25, 1.0]).add(0.1).pow(2.2);
    log::info!("gamma-adjusted colour: {}", colour);

    let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
    log::info!("a . b = {}", a.dot(b));
    log::info!("|(3, 4, 0, 0)| = {}", Vector4::new(3.0, 4.0, 0.0, 0.0).length());
    log::info!("angle(X, Y) = {:.4} rad", Vector4::X.angle(Vector4::Y));

    for step in 0..=4 {
        let r = step as f32 / 4.0;
        log::info!("lerp({:.2}) = {}", r, a.lerped(b, r));
    }

    for index in [0, 3, 4] {
        match a.get(index) {
            Ok(value) => log::info!("a[{}] = {}", index, value),
            Err(e) => log::warn!("{}", e),
        }
    }
}
