//! Engineering design checks with conservative bounds
//!
//! Demonstrates worst-case uncertainty propagation through a load
//! calculation and a safety-factor check where the nominal figure passes
//! but the conservative bound does not.

use nu_core::Nu;

fn main() {
    println!("=== Conservative Engineering Checks ===\n");

    // 1. Work from force and distance
    println!("1. Work Calculation");
    let force = Nu::new(10.0, 0.2);
    let distance = Nu::new(2.0, 0.05);
    let work = force * distance;
    println!("   force    = {} N", force);
    println!("   distance = {} m", distance);
    println!("   work     = {} J", work);
    println!(
        "   worst case range: [{:.2}, {:.2}] J\n",
        work.lower_bound(),
        work.upper_bound()
    );

    // 2. Stress on a loaded member
    println!("2. Applied Stress Chain");
    let load = Nu::new(1200.0, 50.0);
    let lever_ratio = 1.8;
    let applied = load.scalar(lever_ratio);
    println!("   load           = {} N", load);
    println!("   applied stress = {} N (lever ratio {})", applied, lever_ratio);
    println!("   sign stable: {}\n", applied.is_sign_stable());

    // 3. Safety factor: nominal vs conservative
    println!("3. Factor of Safety");
    let strength = Nu::new(5000.0, 400.0);
    let demand = applied;

    let sf_nominal = strength.n / demand.n;
    // Worst case pairs the weakest member with the highest demand
    let sf_conservative = strength.lower_bound() / demand.upper_bound();

    println!("   ultimate strength = {} N", strength);
    println!("   nominal SF        = {:.2}", sf_nominal);
    println!("   conservative SF   = {:.2}", sf_conservative);

    let required = 2.0;
    println!("   required SF       = {:.1}", required);
    println!("   nominal check passes:      {}", sf_nominal > required);
    println!("   conservative check passes: {}", sf_conservative > required);
    if sf_nominal > required && sf_conservative <= required {
        println!("   WARNING: design passes only on nominal figures");
    }

    // 4. Differential measurement near zero
    println!("\n4. Differential Measurement");
    let before = Nu::new(98.2, 1.5);
    let after = Nu::new(99.0, 1.5);
    let delta = after - before;
    println!("   before = {}, after = {}", before, after);
    println!("   delta  = {}", delta);
    println!(
        "   sign stable: {} (the bound spans zero, so the direction of the \
         change is not established)",
        delta.is_sign_stable()
    );
}
