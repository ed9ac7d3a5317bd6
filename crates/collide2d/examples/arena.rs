//! Drive a handful of sampled polygons across a line and print contacts.
//!
//! Usage:
//!   cargo run -p collide2d --example arena -- sweep
//!   cargo run -p collide2d --example arena -- spin
//!
//! - sweep mode: one polygon slides past a row of static ones.
//! - spin mode: two neighbors rotate in place until their corners touch.

use collide2d::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sweep".to_string());
    match mode.as_str() {
        "sweep" => sweep(),
        "spin" => spin(),
        _ => {
            eprintln!("usage: arena [sweep|spin]");
        }
    }
}

fn sampled(seed: u64, index: u64, pose: Pose) -> Polygon {
    let shape =
        draw_shape_radial(RadialCfg::default(), ReplayToken { seed, index }).expect("shape");
    Polygon::new(shape, pose)
}

fn sweep() {
    let statics: Vec<Polygon> = (0..4)
        .map(|i| sampled(7, i, Pose::upright(3.0 * (i as f64), 0.0, 1.0)))
        .collect();
    let mut mover = sampled(7, 99, Pose::upright(-3.0, 0.8, 1.0));
    for step in 0..60 {
        let x = -3.0 + 0.25 * (step as f64);
        mover.update(Pose::upright(x, 0.8, 1.0));
        let hits: Vec<usize> = statics
            .iter()
            .enumerate()
            .filter(|(_, s)| is_colliding(&mover, *s))
            .map(|(i, _)| i)
            .collect();
        if !hits.is_empty() {
            println!("step {step:2} x={x:5.2} touching {hits:?}");
        }
    }
}

fn spin() {
    let left = sampled(11, 0, Pose::upright(0.0, 0.0, 1.0));
    let mut right = sampled(11, 1, Pose::upright(2.3, 0.0, 1.0));
    for step in 0..32 {
        let rot = (step as f64) * std::f64::consts::TAU / 32.0;
        right.update(Pose::new(2.3, 0.0, 1.0, rot));
        let bb = right.border_box();
        println!(
            "rot {rot:4.2} border {:.2}x{:.2} colliding={}",
            bb.width,
            bb.height,
            is_colliding(&left, &right)
        );
    }
}
