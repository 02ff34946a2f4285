//! Ten-shell reference layout: foci at ±0.6 m, mirrors on [-0.05, 0.05] m,
//! outermost shell through (0, 0.02) m, apertures read at z = -0.05 m.
//!
//! Usage: cargo run -p nmo --example documented_nmo

fn main() {
    match nmo::api::solve_chain_verbose(10, 0.0, 0.02, -0.05, -0.6, 0.6, -0.05, 0.05) {
        Ok(chain) => println!("b values: {:?}", chain.as_slice()),
        Err(e) => eprintln!("solve failed: {e}"),
    }
}
